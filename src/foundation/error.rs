/// Convenience result type used across fourcut.
pub type FourcutResult<T> = Result<T, FourcutError>;

/// Top-level error taxonomy used by compositor APIs.
///
/// `Selection`, `Config` and `Encode` are fatal to a composite call and are
/// raised before (or instead of) producing any output. `Decode` is per-image
/// and recoverable: the compositor degrades the affected slot to an empty
/// frame instead of propagating it.
#[derive(thiserror::Error, Debug)]
pub enum FourcutError {
    /// The slot selection does not describe exactly four valid slots.
    #[error("selection error: {0}")]
    Selection(String),

    /// Invalid output spec or frame configuration.
    #[error("config error: {0}")]
    Config(String),

    /// A single source image could not be read or decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Encoding the finished surface failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FourcutError {
    /// Build a [`FourcutError::Selection`] value.
    pub fn selection(msg: impl Into<String>) -> Self {
        Self::Selection(msg.into())
    }

    /// Build a [`FourcutError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FourcutError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`FourcutError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
