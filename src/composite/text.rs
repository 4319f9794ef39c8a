use crate::foundation::error::{FourcutError, FourcutResult};

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// A shaped header/footer line ready for glyph rendering.
///
/// Each glyph run carries its own resolved font, so renderers read fonts
/// from the runs rather than from this struct.
pub struct ShapedText {
    /// Fully built text layout.
    pub layout: parley::Layout<TextBrushRgba8>,
    /// Widest line advance, used for horizontal centering.
    pub width: f64,
    /// First-line ascent, used to convert a baseline into a layout origin.
    pub ascent: f64,
}

/// Stateful helper for building Parley text layouts.
///
/// Contexts are reused across calls; the engine itself carries no per-strip
/// state. The font context starts from the system collection, so shaping
/// works without explicit font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape a single bold line.
    ///
    /// With explicit font bytes the face is registered and pinned by family
    /// name, so renders are reproducible across machines. Without bytes the
    /// line resolves against the system sans-serif stack.
    pub fn shape_bold(
        &mut self,
        text: &str,
        font_bytes: Option<&[u8]>,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> FourcutResult<ShapedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(FourcutError::config("text size_px must be finite and > 0"));
        }

        let stack = match font_bytes {
            Some(bytes) => {
                let families = self
                    .font_ctx
                    .collection
                    .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
                let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
                    FourcutError::config("no font families registered from font bytes")
                })?;
                let family_name = self
                    .font_ctx
                    .collection
                    .family_name(family_id)
                    .ok_or_else(|| FourcutError::config("registered font family has no name"))?
                    .to_string();
                parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name))
            }
            None => parley::style::FontStack::Single(parley::style::FontFamily::Generic(
                parley::style::GenericFamily::SansSerif,
            )),
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(stack));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::BOLD,
        ));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        let mut width = 0.0f64;
        let mut ascent = 0.0f64;
        for (i, line) in layout.lines().enumerate() {
            let m = line.metrics();
            width = width.max(f64::from(m.advance));
            if i == 0 {
                ascent = f64::from(m.ascent);
            }
        }

        Ok(ShapedText {
            layout,
            width,
            ascent,
        })
    }
}
