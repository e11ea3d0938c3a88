//! Errors raised when converting raw byte slices into fixed-size inputs.

use thiserror::Error;

/// Input conversion errors.
///
/// The cipher itself is total over its fixed-size types; these only arise at
/// the slice boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Key material has the wrong length for the requested variant.
    #[error("{variant} key must be {expected} bytes, got {actual}")]
    KeyLength {
        /// Variant name, e.g. `AES-128`.
        variant: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Supplied length in bytes.
        actual: usize,
    },

    /// Block input is not exactly 16 bytes.
    #[error("block must be 16 bytes, got {actual}")]
    BlockLength {
        /// Supplied length in bytes.
        actual: usize,
    },
}

/// Result alias used by the slice conversions.
pub type Result<T> = core::result::Result<T, Error>;
