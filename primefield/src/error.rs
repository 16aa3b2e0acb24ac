//! Error types.

use core::fmt;

/// Field arithmetic errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Attempted to invert zero.
    NotInvertible,

    /// Input is not a canonical residue, i.e. it is not less than the modulus.
    OutOfRange,

    /// Output buffer is not exactly [`Modulus::bytes`](crate::Modulus::bytes) long.
    InvalidLength,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotInvertible => f.write_str("element is not invertible"),
            Error::OutOfRange => f.write_str("value is out of range for the modulus"),
            Error::InvalidLength => f.write_str("buffer length does not match the modulus"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
