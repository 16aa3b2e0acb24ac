//! Error types.

use core::fmt;

/// Result type with the `secpk1` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors which can occur when data enters the library from outside: point
/// decoding, scalar decoding, curve lookup and key generation.
///
/// Arithmetic on validated values never fails.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The coordinates do not satisfy the curve equation, or are not reduced
    /// modulo the field prime.
    PointNotOnCurve,

    /// Encoded point has the wrong length or an unrecognized tag.
    MalformedEncoding,

    /// Attempted to invert zero.
    NotInvertible,

    /// The random source failed to produce bytes.
    RandomSource,

    /// Scalar is zero or not less than the group order.
    InvalidScalar,

    /// No curve is known by the requested name.
    UnknownCurve,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::PointNotOnCurve => "point is not on the curve",
            Error::MalformedEncoding => "malformed point encoding",
            Error::NotInvertible => "value is not invertible",
            Error::RandomSource => "random source failure",
            Error::InvalidScalar => "scalar is out of range",
            Error::UnknownCurve => "unknown curve name",
        })
    }
}

impl core::error::Error for Error {}

impl From<primefield::Error> for Error {
    fn from(err: primefield::Error) -> Error {
        match err {
            primefield::Error::NotInvertible => Error::NotInvertible,
            primefield::Error::OutOfRange => Error::InvalidScalar,
        }
    }
}
