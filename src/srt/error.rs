//! Subtitle loading errors.

/// The file could not be decoded under any attempted text encoding.
///
/// Fatal to the load operation; an already-running engine keeps its
/// previous table.
#[derive(Debug, thiserror::Error)]
#[error("could not decode subtitle file with any supported encoding (tried: {})", .attempted.join(", "))]
pub struct DecodeError {
    /// Names of the encodings that were attempted, in order.
    pub attempted: &'static [&'static str],
}

/// Errors from reading and decoding a subtitle file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read subtitle file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
