use std::sync::Arc;

use tracing::{debug, warn};

use crate::assets::decode::Bitmap;
use crate::assets::loader::LoadedImage;
use crate::composite::spec::{OutputSpec, Selection};
use crate::composite::text::{ShapedText, TextBrushRgba8, TextLayoutEngine};
use crate::foundation::color::Color;
use crate::foundation::error::{FourcutError, FourcutResult};
use crate::layout::strip::{StripLayout, fit_rect};
use crate::style::catalog::FrameStyle;

/// Finished output surface: fully opaque RGBA8 pixels.
///
/// Every pixel has alpha 255, so the bytes are valid as both premultiplied
/// and straight RGBA and can be PNG-encoded directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StripRgba {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// RGBA8 pixel data, row-major, `width * height * 4` bytes.
    pub data: Vec<u8>,
}

/// Result of a composite call: the rendered strip plus the slot positions
/// that rendered empty because their source image failed to decode.
#[derive(Clone, Debug)]
pub struct Composite {
    /// The rendered strip.
    pub strip: StripRgba,
    /// Slot positions (0 = topmost) left empty, in ascending order.
    pub skipped: Vec<usize>,
}

/// Renders selected photos into a single bordered, styled photo strip.
///
/// The compositor is synchronous and owns no shared state across calls;
/// callers resolve images up front via [`crate::assets::loader::load_all`].
/// Header and footer text shapes against the system sans-serif stack by
/// default; [`Compositor::with_font`] pins explicit TTF/OTF bytes instead,
/// which keeps renders reproducible across machines.
pub struct Compositor {
    text_engine: TextLayoutEngine,
    font_bytes: Option<Vec<u8>>,
    ctx: Option<vello_cpu::RenderContext>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    /// Compositor that shapes text with the system font collection.
    pub fn new() -> Self {
        Self {
            text_engine: TextLayoutEngine::new(),
            font_bytes: None,
            ctx: None,
        }
    }

    /// Compositor that shapes header/footer text with the given TTF/OTF bytes.
    pub fn with_font(font_bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            text_engine: TextLayoutEngine::new(),
            font_bytes: Some(font_bytes.into()),
            ctx: None,
        }
    }

    /// Compose the four selected photos into a strip.
    ///
    /// `resolved` is the settled per-capture outcome of the loader,
    /// index-aligned with the captured-photo list the selection refers to.
    /// Selection and spec problems are rejected before any surface is
    /// allocated; a failed or unpaintable image only empties its own slot.
    #[tracing::instrument(skip(self, resolved, style))]
    pub fn compose(
        &mut self,
        selection: &Selection,
        resolved: &[LoadedImage],
        style: &FrameStyle,
        spec: &OutputSpec,
    ) -> FourcutResult<Composite> {
        spec.validate()?;
        for &idx in selection.indices() {
            if idx >= resolved.len() {
                return Err(FourcutError::selection(format!(
                    "selection references capture {idx} but only {} were captured",
                    resolved.len()
                )));
            }
        }
        let width_u16: u16 = spec
            .width
            .try_into()
            .map_err(|_| FourcutError::config("output width exceeds u16"))?;
        let height_u16: u16 = spec
            .height
            .try_into()
            .map_err(|_| FourcutError::config("output height exceeds u16"))?;

        let layout = StripLayout::solve(spec)?;
        let header = self.shape_text(&style.header_text, spec.header_font_px, style.text)?;
        let footer = self.shape_text(&style.footer_text, spec.footer_font_px, style.text)?;

        let mut skipped = Vec::new();
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width_u16 && ctx.height() == height_u16 => ctx,
            _ => vello_cpu::RenderContext::new(width_u16, height_u16),
        };
        ctx.reset();
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        // Draw order matters: later fills legitimately overlap earlier ones.
        let w = f64::from(spec.width);
        let h = f64::from(spec.height);
        ctx.set_paint(color_to_paint(style.background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));

        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(spec.border_width));
        ctx.set_paint(color_to_paint(style.border));
        ctx.stroke_rect(&rect_to_cpu(layout.border));

        if let Some(shaped) = &header {
            draw_centered_text(&mut ctx, shaped, w, layout.header_baseline);
        }

        for (slot_idx, (&capture_idx, slot)) in selection
            .indices()
            .iter()
            .zip(layout.slots.iter())
            .enumerate()
        {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(color_to_paint(style.border));
            ctx.fill_rect(&rect_to_cpu(slot.mat));
            ctx.set_paint(color_to_paint(Color::WHITE));
            ctx.fill_rect(&rect_to_cpu(slot.frame));

            match &resolved[capture_idx] {
                Ok(bitmap) => {
                    if let Err(e) = draw_photo(&mut ctx, bitmap, slot.photo_box, spec.corner_radius)
                    {
                        warn!(slot = slot_idx, error = %e, "photo could not be painted; slot renders empty");
                        skipped.push(slot_idx);
                    }
                }
                Err(_) => {
                    // Settled failure: the white frame stays empty.
                    skipped.push(slot_idx);
                }
            }
        }

        if let Some(shaped) = &footer {
            draw_centered_text(&mut ctx, shaped, w, layout.footer_baseline);
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        ctx.render_to_pixmap(&mut pixmap);
        let data = pixmap.data_as_u8_slice().to_vec();
        self.ctx = Some(ctx);

        debug!(
            width = spec.width,
            height = spec.height,
            skipped = skipped.len(),
            "strip composited"
        );
        Ok(Composite {
            strip: StripRgba {
                width: spec.width,
                height: spec.height,
                data,
            },
            skipped,
        })
    }

    fn shape_text(
        &mut self,
        text: &str,
        size_px: f64,
        color: Color,
    ) -> FourcutResult<Option<ShapedText>> {
        if text.is_empty() {
            return Ok(None);
        }
        let brush = TextBrushRgba8 {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        };
        let font_bytes = self.font_bytes.clone();
        let shaped =
            self.text_engine
                .shape_bold(text, font_bytes.as_deref(), size_px as f32, brush)?;
        if shaped.width == 0.0 {
            // A machine with no usable fonts at all shapes to nothing.
            warn!(text, "no font could be resolved; strip text will be omitted");
            return Ok(None);
        }
        Ok(Some(shaped))
    }
}

fn draw_photo(
    ctx: &mut vello_cpu::RenderContext,
    bitmap: &Bitmap,
    photo_box: kurbo::Rect,
    corner_radius: f64,
) -> FourcutResult<()> {
    use kurbo::Shape as _;

    // Paint construction can fail; do it before any layer is pushed.
    let paint = bitmap_paint(bitmap)?;

    let fit = fit_rect(bitmap.width, bitmap.height, photo_box);

    // Rounded corners clip only the photo; the mat stays square-cornered.
    let rounded = kurbo::RoundedRect::new(fit.x0, fit.y0, fit.x1, fit.y1, corner_radius);
    let clip = bezpath_to_cpu(&rounded.to_path(0.1));
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.push_clip_layer(&clip);
    let sx = fit.width() / f64::from(bitmap.width);
    let sy = fit.height() / f64::from(bitmap.height);
    let place = kurbo::Affine::translate((fit.x0, fit.y0))
        * kurbo::Affine::scale_non_uniform(sx, sy);
    ctx.set_transform(affine_to_cpu(place));
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(bitmap.width),
        f64::from(bitmap.height),
    ));

    ctx.pop_layer();
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    Ok(())
}

fn draw_centered_text(
    ctx: &mut vello_cpu::RenderContext,
    shaped: &ShapedText,
    surface_width: f64,
    baseline: f64,
) {
    let x = (surface_width - shaped.width) / 2.0;
    let y = baseline - shaped.ascent;
    ctx.set_transform(affine_to_cpu(kurbo::Affine::translate((x, y))));

    for line in shaped.layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            // Re-wrap each run's resolved font by bytes for the renderer.
            let run_font = run.run().font();
            let font = vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(run_font.data.data().to_vec()),
                run_font.index,
            );
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
}

fn bitmap_paint(bitmap: &Bitmap) -> FourcutResult<vello_cpu::Image> {
    let w: u16 = bitmap
        .width
        .try_into()
        .map_err(|_| FourcutError::decode("bitmap width exceeds u16"))?;
    let h: u16 = bitmap
        .height
        .try_into()
        .map_err(|_| FourcutError::decode("bitmap height exceeds u16"))?;
    let expected = (bitmap.width as usize)
        .saturating_mul(bitmap.height as usize)
        .saturating_mul(4);
    if bitmap.rgba8_premul.len() != expected {
        return Err(FourcutError::decode("bitmap byte length mismatch"));
    }

    // Pixmap stores PremulRgba8; bitmap bytes are already premultiplied.
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (bitmap.width as usize) * (bitmap.height as usize),
    );
    for px in bitmap.rgba8_premul.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn color_to_paint(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn rect_to_cpu(r: kurbo::Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn affine_to_cpu(a: kurbo::Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/composite/compositor.rs"]
mod tests;
