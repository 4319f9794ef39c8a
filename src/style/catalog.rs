use std::collections::BTreeMap;

use crate::foundation::color::Color;
use crate::foundation::error::{FourcutError, FourcutResult};

/// Visual theme applied to a photo strip.
///
/// A style is immutable once built: the compositor only ever reads it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameStyle {
    /// Fill color of the whole strip background.
    pub background: Color,
    /// Color of the outer border and of each photo mat.
    pub border: Color,
    /// Color of the header and footer text.
    pub text: Color,
    /// Text drawn centered near the top of the strip.
    pub header_text: String,
    /// Text drawn centered near the bottom of the strip.
    pub footer_text: String,
}

/// Explicit, injectable lookup table of frame styles keyed by frame id.
///
/// The booth UI picks a frame id; the compositor receives the resolved
/// [`FrameStyle`]. Keeping the table a value (rather than a module-level
/// singleton) lets deployments ship their own catalog as JSON.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameCatalog {
    frames: BTreeMap<String, FrameStyle>,
}

impl FrameCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four frames shipped with the original booth.
    pub fn builtin() -> Self {
        fn c(hex: &str) -> Color {
            // Built-in hex literals are known-good.
            hex.parse().expect("builtin catalog color")
        }

        let mut frames = BTreeMap::new();
        frames.insert(
            "frame1".to_string(),
            FrameStyle {
                background: c("#f8f8f8"),
                border: c("#ff6b6b"),
                text: c("#ff6b6b"),
                header_text: "인생 네컷".to_string(),
                footer_text: "나만의 특별한 순간".to_string(),
            },
        );
        frames.insert(
            "frame2".to_string(),
            FrameStyle {
                background: c("#fff8f8"),
                border: c("#ff8da1"),
                text: c("#ff8da1"),
                header_text: "꽃길만 걷자".to_string(),
                footer_text: "특별한 너와 함께".to_string(),
            },
        );
        frames.insert(
            "frame3".to_string(),
            FrameStyle {
                background: c("#333333"),
                border: c("#ffffff"),
                text: c("#ffffff"),
                header_text: "MOMENTS".to_string(),
                footer_text: "CAPTURED FOREVER".to_string(),
            },
        );
        frames.insert(
            "frameCNX".to_string(),
            FrameStyle {
                background: c("#003d5b"),
                border: c("#25e2cc"),
                text: c("#ffffff"),
                header_text: "CNX CATALYST".to_string(),
                footer_text: "CNX 만세".to_string(),
            },
        );
        Self { frames }
    }

    /// Insert or replace a frame style under `id`.
    pub fn insert(&mut self, id: impl Into<String>, style: FrameStyle) {
        self.frames.insert(id.into(), style);
    }

    /// Look up a frame style by id.
    pub fn get(&self, id: &str) -> FourcutResult<&FrameStyle> {
        self.frames
            .get(id)
            .ok_or_else(|| FourcutError::config(format!("unknown frame id \"{id}\"")))
    }

    /// Frame ids in stable (sorted) order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.frames.keys().map(String::as_str)
    }

    /// Iterate over `(id, style)` pairs in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrameStyle)> {
        self.frames.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/catalog.rs"]
mod tests;
