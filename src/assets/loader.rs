use rayon::prelude::*;
use tracing::warn;

use crate::assets::decode::{Bitmap, decode_image};
use crate::assets::source::ImageSource;
use crate::foundation::error::{FourcutError, FourcutResult};

/// Per-source outcome of a [`load_all`] call.
pub type LoadedImage = FourcutResult<Bitmap>;

/// Resolve every source into a decoded bitmap or a per-source failure.
///
/// Sources are decoded concurrently with no ordering dependency between
/// them. The call returns only once every source has settled, and a failure
/// of one source never aborts the others: the caller receives one
/// `Result` per input, index-aligned with `sources`. Failed entries are
/// reported here as warnings and later rendered as empty slots.
pub fn load_all(sources: &[ImageSource]) -> Vec<LoadedImage> {
    let results: Vec<LoadedImage> = sources
        .par_iter()
        .map(|source| load_one(source))
        .collect();

    for (idx, result) in results.iter().enumerate() {
        if let Err(e) = result {
            warn!(index = idx, source = %sources[idx].describe(), error = %e, "image failed to load; slot will render empty");
        }
    }
    results
}

fn load_one(source: &ImageSource) -> FourcutResult<Bitmap> {
    let bytes = source.read_bytes()?;
    decode_image(&bytes).map_err(|e| match e {
        FourcutError::Decode(msg) => {
            FourcutError::decode(format!("{}: {msg}", source.describe()))
        }
        other => other,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
