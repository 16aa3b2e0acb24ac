#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]
#![doc = include_str!("../README.md")]

#[cfg(feature = "std")]
extern crate std;

mod error;
mod modulus;
mod monty;

pub use crate::{
    error::{Error, Result},
    modulus::Modulus,
    monty::FieldElement,
};
pub use bigint::{self, U256, Word};
pub use subtle;
pub use zeroize;

/// Number of limbs in a [`U256`].
pub const LIMBS: usize = U256::LIMBS;

/// Size of a big-endian [`U256`] encoding in bytes.
pub const BYTES: usize = U256::BYTES;
