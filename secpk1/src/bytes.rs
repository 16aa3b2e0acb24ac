//! Fixed-width big-endian encodings of field elements and scalars.

use crate::{FieldElement, U256};
use core::{fmt, ops::Deref};
use primefield::{BYTES, bigint::Encoding};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// Big-endian integer padded to the width of a curve's field or scalar
/// encoding (20 to 32 bytes depending on the curve).
///
/// Dereferences to the encoded bytes.
#[derive(Clone, Copy)]
pub struct FieldBytes {
    bytes: [u8; BYTES],
    len: usize,
}

impl FieldBytes {
    /// Encode the low `len` bytes of `uint`.
    pub(crate) fn from_uint(uint: &U256, len: usize) -> Self {
        debug_assert!(len <= BYTES);
        let mut bytes = [0u8; BYTES];
        bytes[..len].copy_from_slice(&uint.to_be_bytes()[BYTES - len..]);
        Self { bytes, len }
    }

    pub(crate) fn from_field_element(fe: &FieldElement, len: usize) -> Self {
        Self::from_uint(&fe.to_uint(), len)
    }

    /// Encoded bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Mutable access to the encoded bytes.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.len]
    }

    /// Width of the encoding in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for encodings produced by this crate.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for FieldBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl Deref for FieldBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl ConstantTimeEq for FieldBytes {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.as_slice().ct_eq(other.as_slice())
    }
}

impl PartialEq for FieldBytes {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldBytes {}

impl Zeroize for FieldBytes {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for FieldBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldBytes(0x")?;
        for byte in self.as_slice() {
            write!(f, "{byte:02X}")?;
        }
        write!(f, ")")
    }
}

impl fmt::UpperHex for FieldBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_slice() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::FieldBytes;
    use crate::U256;
    use hex_literal::hex;

    #[test]
    fn pads_to_width() {
        let bytes = FieldBytes::from_uint(&U256::from_u64(0x0102), 20);
        assert_eq!(bytes.len(), 20);
        assert_eq!(&bytes[..], &hex!("0000000000000000000000000000000000000102")[..]);
    }

    #[test]
    fn equality_considers_width() {
        let a = FieldBytes::from_uint(&U256::ONE, 20);
        let b = FieldBytes::from_uint(&U256::ONE, 21);
        assert_ne!(a, b);
        assert_eq!(a, FieldBytes::from_uint(&U256::ONE, 20));
    }
}
