use kurbo::Rect;

use crate::composite::spec::{OutputSpec, SLOT_COUNT};
use crate::foundation::error::FourcutResult;

/// Geometry of one photo slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotLayout {
    /// Outer mat rectangle, filled with the frame border color.
    pub mat: Rect,
    /// White frame rectangle inset inside the mat.
    pub frame: Rect,
    /// Box the photo is aspect-fitted into.
    pub photo_box: Rect,
}

/// Resolved geometry for a whole strip under one [`OutputSpec`].
///
/// The solver is pure math: it owns every coordinate decision so the
/// compositor only sequences draw calls.
#[derive(Clone, Debug, PartialEq)]
pub struct StripLayout {
    /// Centerline rectangle of the outer border stroke (inset half the
    /// stroke width, so the stroke hugs the surface edge).
    pub border: Rect,
    /// Header text baseline y.
    pub header_baseline: f64,
    /// Footer text baseline y.
    pub footer_baseline: f64,
    /// The four slots, top to bottom.
    pub slots: [SlotLayout; SLOT_COUNT],
}

impl StripLayout {
    /// Solve the strip geometry for `spec`.
    pub fn solve(spec: &OutputSpec) -> FourcutResult<Self> {
        spec.validate()?;

        let w = f64::from(spec.width);
        let h = f64::from(spec.height);
        let half_stroke = spec.border_width / 2.0;
        let border = Rect::new(half_stroke, half_stroke, w - half_stroke, h - half_stroke);

        let slot_w = spec.slot_width();
        let slot_h = spec.slot_height();
        let slots = std::array::from_fn(|i| {
            let y = spec.strip_top_px + i as f64 * (slot_h + spec.gap);
            let mat = Rect::new(spec.padding, y, spec.padding + slot_w, y + slot_h);
            SlotLayout {
                mat,
                frame: mat.inset(-spec.frame_inset_px),
                photo_box: mat.inset(-spec.photo_inset_px),
            }
        });

        Ok(Self {
            border,
            header_baseline: spec.header_baseline_px,
            footer_baseline: h - spec.footer_baseline_px,
            slots,
        })
    }
}

/// Largest rectangle with aspect ratio `width / height` that fits inside
/// `photo_box`, centered within it.
///
/// Letterbox/pillarbox placement: the image is never cropped and never
/// distorted. A source wider than the box is constrained by width and
/// centered vertically; otherwise it is constrained by height and centered
/// horizontally.
pub fn fit_rect(width: u32, height: u32, photo_box: Rect) -> Rect {
    let ratio = f64::from(width) / f64::from(height);
    let box_w = photo_box.width();
    let box_h = photo_box.height();

    let (draw_w, draw_h) = if ratio > box_w / box_h {
        (box_w, box_w / ratio)
    } else {
        (box_h * ratio, box_h)
    };

    let x0 = photo_box.x0 + (box_w - draw_w) / 2.0;
    let y0 = photo_box.y0 + (box_h - draw_h) / 2.0;
    Rect::new(x0, y0, x0 + draw_w, y0 + draw_h)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/strip.rs"]
mod tests;
