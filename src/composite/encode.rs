use std::io::Cursor;

use crate::composite::compositor::StripRgba;
use crate::foundation::error::{FourcutError, FourcutResult};

/// Encode a finished strip as PNG bytes.
///
/// PNG is lossless, so for a fixed strip the encoded bytes are
/// reproducible. Failure is fatal: no partial output is returned.
pub fn encode_png(strip: &StripRgba) -> FourcutResult<Vec<u8>> {
    let mut out = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut out),
        &strip.data,
        strip.width,
        strip.height,
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| FourcutError::encode(format!("png encode failed: {e}")))?;
    Ok(out)
}

/// Filename for the download path: `<label>_<YYYY-MM-DD>.png`.
pub fn download_file_name(label: &str, date: chrono::NaiveDate) -> String {
    format!("{label}_{}.png", date.format("%Y-%m-%d"))
}

#[cfg(test)]
#[path = "../../tests/unit/composite/encode.rs"]
mod tests;
