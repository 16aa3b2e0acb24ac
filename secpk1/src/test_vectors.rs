//! Test vectors for the supported curves.

pub mod mul_base;
