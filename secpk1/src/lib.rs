#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(feature = "std")]
extern crate std;

mod affine;
mod bytes;
mod curve;
mod error;
mod keypair;
mod lookup_table;
mod mul;
mod point_arithmetic;
mod projective;
mod scalar;
pub mod sec1;
mod secret_key;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    affine::AffinePoint,
    bytes::FieldBytes,
    curve::{Curve, NamedCurve, SECP160R1, SECP192R1, SECP224R1, SECP256K1},
    error::{Error, Result},
    keypair::KeyPair,
    lookup_table::LookupTable,
    point_arithmetic::EquationA,
    projective::ProjectivePoint,
    scalar::Scalar,
    sec1::{Coordinates, EncodedPoint, Tag},
    secret_key::SecretKey,
};
pub use primefield::{self, FieldElement, Modulus, U256};
pub use rand_core;
pub use subtle;
pub use zeroize;
