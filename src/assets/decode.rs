use std::sync::Arc;

use crate::foundation::error::{FourcutError, FourcutResult};

/// Decoded source image with known pixel dimensions.
///
/// Pixels are premultiplied RGBA8 behind an `Arc`, so bitmaps are cheap to
/// clone between the loader and the compositor.
#[derive(Clone, Debug)]
pub struct Bitmap {
    /// Natural pixel width.
    pub width: u32,
    /// Natural pixel height.
    pub height: u32,
    /// Premultiplied RGBA8 pixel data, row-major, `width * height * 4` bytes.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl Bitmap {
    /// Natural aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> FourcutResult<Bitmap> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| FourcutError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(FourcutError::decode("image has zero dimension"));
    }

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(Bitmap {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 255 {
            continue;
        }
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
