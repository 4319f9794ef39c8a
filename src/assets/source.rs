use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose;

use crate::foundation::error::{FourcutError, FourcutResult};

/// Opaque reference to a captured image, prior to decoding.
///
/// The booth captures stills as `data:` URLs; tooling and tests also feed
/// filesystem paths and raw encoded bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    /// Encoded image file on disk.
    Path(PathBuf),
    /// `data:image/...;base64,` URL as produced by a canvas capture.
    DataUrl(String),
    /// Already-in-memory encoded bytes (PNG, JPEG, ...).
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Resolve the reference to encoded image bytes.
    ///
    /// This performs the IO half of loading; decoding the bytes into pixels
    /// is [`crate::assets::decode::decode_image`].
    pub fn read_bytes(&self) -> FourcutResult<Vec<u8>> {
        match self {
            Self::Path(p) => std::fs::read(p).map_err(|e| {
                FourcutError::decode(format!("failed to read image '{}': {e}", p.display()))
            }),
            Self::DataUrl(url) => decode_data_url(url),
            Self::Bytes(b) => Ok(b.clone()),
        }
    }

    /// Short description for log messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Path(p) => p.display().to_string(),
            Self::DataUrl(url) => format!("data url ({} chars)", url.len()),
            Self::Bytes(b) => format!("inline bytes ({} bytes)", b.len()),
        }
    }
}

fn decode_data_url(url: &str) -> FourcutResult<Vec<u8>> {
    if !url.starts_with("data:") {
        return Err(FourcutError::decode("data url must start with 'data:'"));
    }
    let payload_at = url
        .find(";base64,")
        .map(|i| i + ";base64,".len())
        .ok_or_else(|| FourcutError::decode("data url is missing a base64 marker"))?;

    general_purpose::STANDARD
        .decode(&url[payload_at..])
        .map_err(|e| FourcutError::decode(format!("invalid base64 payload: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
