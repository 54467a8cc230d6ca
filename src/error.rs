use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while marshaling values to or from bytes.
///
/// All failures are local and deterministic: a second identical call produces
/// the same result, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied argument contradicts the requested shape
    /// (bad offset, a count other than 1 for a scalar, a value that does
    /// not match its shape, an unknown scalar kind name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The computed read span would run past the end of the input buffer.
    #[error("read of {needed} bytes at offset {offset} exceeds buffer: {available} available")]
    OutOfRange {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The shape cannot be sized statically (e.g. a variable-width element
    /// inside a fixed-width array).
    #[error("unsupported shape: {0}")]
    UnsupportedShape(String),
}
