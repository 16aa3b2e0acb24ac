//! Odd moduli with precomputed Montgomery parameters.

use crate::{LIMBS, U256};
use bigint::{Odd, modular::MontyParams};
use core::fmt;

/// Odd modulus `p` of up to 256 bits and its [`MontyParams`].
///
/// [`Modulus::from_be_hex`] is a `const fn`, so a modulus known at compile
/// time can live in a `static` or `const` item.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Modulus {
    value: U256,
    params: MontyParams<LIMBS>,
    bits: u32,
}

impl Modulus {
    /// Parse a big-endian hex modulus.
    ///
    /// # Panics
    ///
    /// If the hex is malformed or the modulus is even.
    pub const fn from_be_hex(hex: &str) -> Self {
        let value = U256::from_be_hex(hex);
        Self {
            value,
            params: MontyParams::new_vartime(Odd::<U256>::from_be_hex(hex)),
            bits: value.bits_vartime(),
        }
    }

    /// The modulus as an integer.
    pub const fn value(&self) -> &U256 {
        &self.value
    }

    /// Montgomery parameters for this modulus.
    pub const fn params(&self) -> &MontyParams<LIMBS> {
        &self.params
    }

    /// Bit length of the modulus.
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Length in bytes of a canonical big-endian encoding of a residue.
    pub const fn bytes(&self) -> usize {
        self.bits.div_ceil(8) as usize
    }

    /// Does `p ≡ 3 (mod 4)` hold?
    pub const fn is_3_mod_4(&self) -> bool {
        self.value.as_words()[0] & 3 == 3
    }
}

impl fmt::Debug for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modulus(0x{:X})", self.value)
    }
}
