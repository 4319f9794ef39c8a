use crate::foundation::error::{FourcutError, FourcutResult};

/// A photo strip always has exactly four vertically stacked slots.
pub const SLOT_COUNT: usize = 4;

/// Resolution and layout configuration for one render target.
///
/// The two canonical instances are [`OutputSpec::print`] and
/// [`OutputSpec::download`]; they run the same algorithm at different
/// scales. All lengths are device pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OutputSpec {
    /// Output surface width.
    pub width: u32,
    /// Output surface height.
    pub height: u32,
    /// Horizontal inset of the slot column from the surface edge.
    pub padding: f64,
    /// Line width of the outer border stroke.
    pub border_width: f64,
    /// Vertical gap between adjacent slots.
    pub gap: f64,
    /// Header font size.
    pub header_font_px: f64,
    /// Footer font size.
    pub footer_font_px: f64,
    /// Corner radius of each photo's rounded clip.
    pub corner_radius: f64,
    /// Header text baseline, measured from the top edge.
    pub header_baseline_px: f64,
    /// Footer text baseline, measured from the bottom edge.
    pub footer_baseline_px: f64,
    /// Top edge of the first slot.
    pub strip_top_px: f64,
    /// Vertical space reserved for header and footer combined.
    pub text_reserve_px: f64,
    /// Inset from the slot mat to the white photo frame.
    pub frame_inset_px: f64,
    /// Inset from the slot mat to the photo box.
    pub photo_inset_px: f64,
}

impl OutputSpec {
    /// Print-resolution spec (1000x2000).
    pub fn print() -> Self {
        Self {
            width: 1000,
            height: 2000,
            padding: 80.0,
            border_width: 24.0,
            gap: 40.0,
            header_font_px: 60.0,
            footer_font_px: 48.0,
            corner_radius: 8.0,
            header_baseline_px: 90.0,
            footer_baseline_px: 70.0,
            strip_top_px: 150.0,
            text_reserve_px: 200.0,
            frame_inset_px: 5.0,
            photo_inset_px: 10.0,
        }
    }

    /// Download-resolution spec (1600x3200).
    pub fn download() -> Self {
        Self {
            width: 1600,
            height: 3200,
            padding: 120.0,
            border_width: 40.0,
            gap: 60.0,
            header_font_px: 96.0,
            footer_font_px: 72.0,
            corner_radius: 10.0,
            header_baseline_px: 140.0,
            footer_baseline_px: 100.0,
            strip_top_px: 200.0,
            text_reserve_px: 300.0,
            frame_inset_px: 5.0,
            photo_inset_px: 10.0,
        }
    }

    /// Height of one slot mat under this spec.
    ///
    /// `floor((height - text_reserve - 3 * gap) / 4)`, matching the fixed
    /// four-slot strip invariant.
    pub fn slot_height(&self) -> f64 {
        let gaps = self.gap * (SLOT_COUNT as f64 - 1.0);
        ((f64::from(self.height) - self.text_reserve_px - gaps) / SLOT_COUNT as f64).floor()
    }

    /// Width of one slot mat under this spec.
    pub fn slot_width(&self) -> f64 {
        f64::from(self.width) - 2.0 * self.padding
    }

    /// Reject non-positive or degenerate configurations.
    ///
    /// Must pass before any surface is allocated or drawn.
    pub fn validate(&self) -> FourcutResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FourcutError::config("output dimensions must be positive"));
        }
        let positives = [
            ("padding", self.padding),
            ("border_width", self.border_width),
            ("gap", self.gap),
            ("header_font_px", self.header_font_px),
            ("footer_font_px", self.footer_font_px),
            ("corner_radius", self.corner_radius),
            ("header_baseline_px", self.header_baseline_px),
            ("footer_baseline_px", self.footer_baseline_px),
            ("strip_top_px", self.strip_top_px),
            ("text_reserve_px", self.text_reserve_px),
            ("frame_inset_px", self.frame_inset_px),
            ("photo_inset_px", self.photo_inset_px),
        ];
        for (name, v) in positives {
            if !v.is_finite() || v <= 0.0 {
                return Err(FourcutError::config(format!(
                    "{name} must be finite and > 0, got {v}"
                )));
            }
        }
        if self.slot_width() <= 2.0 * self.photo_inset_px {
            return Err(FourcutError::config(
                "padding leaves no horizontal room for photos",
            ));
        }
        if self.slot_height() <= 2.0 * self.photo_inset_px {
            return Err(FourcutError::config(
                "text reserve and gaps leave no vertical room for photos",
            ));
        }
        Ok(())
    }
}

/// Ordered choice of exactly four captured photos.
///
/// Indices refer to the captured-image list; position 0 is the topmost
/// slot. Construction enforces the arity, so holding a `Selection` is proof
/// the composite precondition was met.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Selection {
    indices: [usize; SLOT_COUNT],
}

impl Selection {
    /// Validate a slot ordering. Fails unless exactly four indices are given.
    pub fn new(indices: &[usize]) -> FourcutResult<Self> {
        let indices: [usize; SLOT_COUNT] = indices.try_into().map_err(|_| {
            FourcutError::selection(format!(
                "a photo strip needs exactly {SLOT_COUNT} photos, got {}",
                indices.len()
            ))
        })?;
        Ok(Self { indices })
    }

    /// Captured-image indices in slot order, top to bottom.
    pub fn indices(&self) -> &[usize; SLOT_COUNT] {
        &self.indices
    }
}

impl TryFrom<Vec<usize>> for Selection {
    type Error = FourcutError;

    fn try_from(v: Vec<usize>) -> FourcutResult<Self> {
        Self::new(&v)
    }
}

impl From<Selection> for Vec<usize> {
    fn from(s: Selection) -> Self {
        s.indices.to_vec()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/spec.rs"]
mod tests;
