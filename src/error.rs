use thiserror::Error;

/// Specific kinds of errors that can occur when decoding packwire data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    #[error("truncated input: need {needed} bytes, have {available}")]
    TruncatedInput { needed: usize, available: usize },

    #[error("invalid UTF-8 in text")]
    InvalidUtf8,
}

/// Error type returned when decoding packwire data fails.
///
/// A failed decode leaves the cursor wherever the failing step stopped; it
/// should not be reused for further decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("decode error: {kind}")]
pub struct DecodeError {
    /// The specific kind of decode error that occurred.
    kind: DecodeErrorKind,
}

impl DecodeError {
    /// Creates a new DecodeError with the given kind.
    pub const fn new(kind: DecodeErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) const fn truncated(needed: usize, available: usize) -> Self {
        Self::new(DecodeErrorKind::TruncatedInput { needed, available })
    }

    /// Returns the specific kind of decode error that occurred.
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }
}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
