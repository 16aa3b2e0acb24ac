//! Field elements which use an internal Montgomery form representation, implemented using
//! `crypto-bigint`'s [`MontyForm`] with parameters chosen at runtime.

mod sqrt;

use crate::{BYTES, Error, LIMBS, Modulus, Result, U256};
use bigint::{
    Encoding, Word,
    modular::{MontyForm, MontyParams},
};
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption};
use zeroize::Zeroize;

/// Element of the prime field `GF(p)`.
///
/// The value is kept in Montgomery form and carries the [`MontyParams`] of its
/// modulus. Mixing elements of different moduli is a logic error which is
/// caught by debug assertions.
#[derive(Clone, Copy)]
pub struct FieldElement {
    inner: MontyForm<LIMBS>,
}

impl FieldElement {
    /// Zero element (additive identity).
    pub fn zero(modulus: &Modulus) -> Self {
        Self {
            inner: MontyForm::zero(*modulus.params()),
        }
    }

    /// Multiplicative identity.
    pub fn one(modulus: &Modulus) -> Self {
        Self {
            inner: MontyForm::one(*modulus.params()),
        }
    }

    /// Montgomery parameters of the modulus this element belongs to.
    pub fn params(&self) -> &MontyParams<LIMBS> {
        self.inner.params()
    }

    /// The modulus `p` as an integer.
    pub fn modulus(&self) -> &U256 {
        self.inner.params().modulus().as_ref()
    }

    /// Length in bytes of the canonical encoding of this element.
    pub fn encoded_len(&self) -> usize {
        self.modulus().bits_vartime().div_ceil(8) as usize
    }

    /// Convert a `u64` into a field element, reducing it if necessary.
    pub fn from_u64(w: u64, modulus: &Modulus) -> Self {
        Self::from_uint_reduced(&U256::from_u64(w), modulus)
    }

    /// Convert a [`U256`] into a field element, reducing it modulo `p`:
    ///
    /// ```text
    /// w * R^2 * R^-1 mod p = wR mod p
    /// ```
    pub fn from_uint_reduced(uint: &U256, modulus: &Modulus) -> Self {
        Self {
            inner: MontyForm::new(uint, *modulus.params()),
        }
    }

    /// Convert a canonical [`U256`] into a field element.
    ///
    /// Returns the `CtOption` equivalent of `None` if the input is not less
    /// than the modulus.
    pub fn from_uint(uint: &U256, modulus: &Modulus) -> CtOption<Self> {
        let is_some = uint.ct_lt(modulus.value());
        CtOption::new(Self::from_uint_reduced(uint, modulus), is_some)
    }

    /// Decode a canonical big-endian encoding of at most 32 bytes.
    pub fn from_be_slice(bytes: &[u8], modulus: &Modulus) -> CtOption<Self> {
        if bytes.len() > BYTES {
            return CtOption::new(Self::zero(modulus), Choice::from(0));
        }
        Self::from_uint(&uint_from_chunk(bytes), modulus)
    }

    /// Decode a big-endian integer of any length, reducing it modulo `p`.
    ///
    /// The input is consumed in 32-byte chunks starting from the most
    /// significant end: `acc = acc * 2^256 + chunk`.
    pub fn from_be_slice_reduced(bytes: &[u8], modulus: &Modulus) -> Self {
        let head_len = match bytes.len() % BYTES {
            0 => BYTES.min(bytes.len()),
            rem => rem,
        };
        let (head, tail) = bytes.split_at(head_len);

        // (2^256 - 1) + 1 == 2^256 (mod p)
        let shift = Self::from_uint_reduced(&U256::MAX, modulus) + Self::one(modulus);

        let mut acc = Self::from_uint_reduced(&uint_from_chunk(head), modulus);
        for chunk in tail.chunks_exact(BYTES) {
            acc = acc * shift + Self::from_uint_reduced(&uint_from_chunk(chunk), modulus);
        }
        acc
    }

    /// Translate out of the Montgomery domain into a canonical [`U256`].
    pub fn to_uint(&self) -> U256 {
        self.inner.retrieve()
    }

    /// Write the canonical big-endian encoding into `out`.
    ///
    /// Fails with [`Error::InvalidLength`] unless `out` is exactly
    /// [`FieldElement::encoded_len`] bytes.
    pub fn write_be_bytes(&self, out: &mut [u8]) -> Result<()> {
        if out.len() != self.encoded_len() {
            return Err(Error::InvalidLength);
        }
        out.copy_from_slice(&self.to_uint().to_be_bytes()[BYTES - out.len()..]);
        Ok(())
    }

    /// Determine if this field element is zero.
    pub fn is_zero(&self) -> Choice {
        self.inner.as_montgomery().ct_eq(&U256::ZERO)
    }

    /// Determine if this field element is odd: `self mod 2 == 1`.
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_uint().as_words()[0] & 1) as u8)
    }

    /// Double element (add it to itself).
    #[must_use]
    pub fn double(&self) -> Self {
        self.add_inner(self)
    }

    /// Compute modular square.
    #[must_use]
    pub fn square(&self) -> Self {
        self.mul_inner(self)
    }

    /// Returns `self^exp`.
    ///
    /// Every bit of `exp` is scanned with a fixed sequence of squarings,
    /// multiplications and conditional selections.
    pub fn pow(&self, exp: &U256) -> Self {
        let mut res = Self::one_like(self);
        for word in exp.as_words().iter().rev() {
            for j in (0..Word::BITS).rev() {
                res = res.square();
                let product = res.mul_inner(self);
                let bit = Choice::from(((word >> j) & 1) as u8);
                res = Self::conditional_select(&res, &product, bit);
            }
        }
        res
    }

    /// Returns `self^exp`.
    ///
    /// **This operation is variable time with respect to the exponent `exp`.**
    /// It must only be used with public exponents.
    pub fn pow_vartime(&self, exp: &U256) -> Self {
        let words = exp.as_words();
        let mut res = Self::one_like(self);
        let Some(top) = words.iter().rposition(|&w| w != 0) else {
            return res;
        };

        for word in words[..=top].iter().rev() {
            for j in (0..Word::BITS).rev() {
                res = res.square();
                if (word >> j) & 1 == 1 {
                    res = res.mul_inner(self);
                }
            }
        }
        res
    }

    /// Compute field inversion `1 / self` as `self^(p - 2)`.
    ///
    /// Returns the `CtOption` equivalent of `None` if `self` is zero.
    pub fn invert(&self) -> CtOption<Self> {
        let p_minus_2 = self.modulus().wrapping_sub(&U256::from_u64(2));
        CtOption::new(self.pow_vartime(&p_minus_2), !self.is_zero())
    }

    /// Compute field inversion, returning [`Error::NotInvertible`] for zero.
    pub fn invert_checked(&self) -> Result<Self> {
        Option::from(self.invert()).ok_or(Error::NotInvertible)
    }

    fn one_like(&self) -> Self {
        Self {
            inner: MontyForm::one(*self.inner.params()),
        }
    }

    fn add_inner(&self, rhs: &Self) -> Self {
        debug_assert!(self.same_modulus(rhs));
        Self {
            inner: self.inner + rhs.inner,
        }
    }

    fn sub_inner(&self, rhs: &Self) -> Self {
        debug_assert!(self.same_modulus(rhs));
        Self {
            inner: self.inner - rhs.inner,
        }
    }

    fn mul_inner(&self, rhs: &Self) -> Self {
        debug_assert!(self.same_modulus(rhs));
        Self {
            inner: self.inner * rhs.inner,
        }
    }

    fn neg_inner(&self) -> Self {
        Self { inner: -self.inner }
    }

    fn same_modulus(&self, rhs: &Self) -> bool {
        self.inner.params() == rhs.inner.params()
    }
}

fn uint_from_chunk(chunk: &[u8]) -> U256 {
    let mut buf = [0u8; BYTES];
    buf[BYTES - chunk.len()..].copy_from_slice(chunk);
    U256::from_be_slice(&buf)
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        debug_assert!(a.same_modulus(b));
        Self {
            inner: MontyForm::conditional_select(&a.inner, &b.inner, choice),
        }
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.inner.as_montgomery().ct_eq(other.inner.as_montgomery())
            & Choice::from(self.same_modulus(other) as u8)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:X})", self.to_uint())
    }
}

impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.inner.zeroize();
    }
}

macro_rules! impl_field_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $inner:ident) => {
        impl $op<FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $op_fn(self, rhs: FieldElement) -> FieldElement {
                self.$inner(&rhs)
            }
        }

        impl $op<&FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $op_fn(self, rhs: &FieldElement) -> FieldElement {
                self.$inner(rhs)
            }
        }

        impl $op<&FieldElement> for &FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $op_fn(self, rhs: &FieldElement) -> FieldElement {
                self.$inner(rhs)
            }
        }

        impl $assign<FieldElement> for FieldElement {
            #[inline]
            fn $assign_fn(&mut self, rhs: FieldElement) {
                *self = self.$inner(&rhs);
            }
        }

        impl $assign<&FieldElement> for FieldElement {
            #[inline]
            fn $assign_fn(&mut self, rhs: &FieldElement) {
                *self = self.$inner(rhs);
            }
        }
    };
}

impl_field_op!(Add, add, AddAssign, add_assign, add_inner);
impl_field_op!(Sub, sub, SubAssign, sub_assign, sub_inner);
impl_field_op!(Mul, mul, MulAssign, mul_assign, mul_inner);

impl Neg for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> FieldElement {
        self.neg_inner()
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> FieldElement {
        self.neg_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::FieldElement;
    use crate::{Error, Modulus, U256};
    use hex_literal::hex;
    use proptest::prelude::*;

    const P: Modulus =
        Modulus::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
    const P160: Modulus =
        Modulus::from_be_hex("000000000000000000000000ffffffffffffffffffffffffffffffff7fffffff");

    fn fe(hex: &str) -> FieldElement {
        Option::from(FieldElement::from_uint(&U256::from_be_hex(hex), &P)).expect("in range")
    }

    #[test]
    fn zero_and_one() {
        let zero = FieldElement::zero(&P);
        let one = FieldElement::one(&P);
        assert!(bool::from(zero.is_zero()));
        assert_eq!(one.to_uint(), U256::ONE);
        assert_eq!(one + zero, one);
        assert_eq!(one * one, one);
        assert_eq!(-zero, zero);
    }

    #[test]
    fn add_wraps_around_modulus() {
        let minus_one = -FieldElement::one(&P);
        assert_eq!(
            minus_one.to_uint(),
            U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2e")
        );
        assert!(bool::from((minus_one + FieldElement::one(&P)).is_zero()));
        assert_eq!(minus_one.double(), -FieldElement::from_u64(2, &P));
    }

    #[test]
    fn mul_known_answer() {
        // 2^128 * 2^128 = 2^256 = 2^32 + 977 (mod p)
        let x = fe("0000000000000000000000000000000100000000000000000000000000000000");
        assert_eq!(x.square().to_uint(), U256::from_u64(0x1_0000_03d1));
    }

    #[test]
    fn from_uint_rejects_non_canonical() {
        assert!(bool::from(FieldElement::from_uint(P.value(), &P).is_none()));
        let reduced = FieldElement::from_uint_reduced(P.value(), &P);
        assert!(bool::from(reduced.is_zero()));
    }

    #[test]
    fn from_be_slice_reduced_long_input() {
        // 2^256 + 5 as a 33-byte string
        let mut bytes = [0u8; 33];
        bytes[0] = 1;
        bytes[32] = 5;
        let x = FieldElement::from_be_slice_reduced(&bytes, &P);
        assert_eq!(x.to_uint(), U256::from_u64(0x1_0000_03d1 + 5));

        let short = FieldElement::from_be_slice_reduced(&hex!("0102"), &P);
        assert_eq!(short, FieldElement::from_u64(0x0102, &P));
        assert!(bool::from(FieldElement::from_be_slice_reduced(&[], &P).is_zero()));
    }

    #[test]
    fn from_be_slice_checks_length_and_range() {
        assert!(bool::from(FieldElement::from_be_slice(&[0u8; 33], &P).is_none()));
        let p_bytes = hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
        assert!(bool::from(FieldElement::from_be_slice(&p_bytes, &P).is_none()));
        assert!(bool::from(FieldElement::from_be_slice(&hex!("07"), &P).is_some()));
    }

    #[test]
    fn write_be_bytes_fixed_width() {
        let x = FieldElement::from_u64(0xabcd, &P160);
        assert_eq!(x.encoded_len(), 20);

        let mut out = [0xffu8; 20];
        assert_eq!(x.write_be_bytes(&mut out), Ok(()));
        assert_eq!(out[..18], [0u8; 18]);
        assert_eq!(out[18..], hex!("abcd"));
    }

    #[test]
    fn write_be_bytes_rejects_other_widths() {
        let x = FieldElement::from_u64(0xabcd, &P160);
        assert_eq!(x.write_be_bytes(&mut [0u8; 2]), Err(Error::InvalidLength));
        assert_eq!(x.write_be_bytes(&mut [0u8; 32]), Err(Error::InvalidLength));
        assert_eq!(x.write_be_bytes(&mut [0u8; 40]), Err(Error::InvalidLength));
    }

    #[test]
    fn invert_zero_fails() {
        let zero = FieldElement::zero(&P);
        assert!(bool::from(zero.invert().is_none()));
        assert_eq!(zero.invert_checked(), Err(Error::NotInvertible));
    }

    #[test]
    fn pow_matches_pow_vartime() {
        let x = FieldElement::from_u64(3, &P160);
        let e = U256::from_u64(0x1234567890abcdef);
        assert_eq!(x.pow(&e), x.pow_vartime(&e));
        assert_eq!(x.pow(&U256::ZERO), FieldElement::one(&P160));
        assert_eq!(x.pow_vartime(&U256::ZERO), FieldElement::one(&P160));
    }

    #[test]
    fn is_odd_uses_canonical_value() {
        assert!(bool::from(FieldElement::from_u64(3, &P).is_odd()));
        assert!(!bool::from(FieldElement::from_u64(4, &P).is_odd()));
        assert!(!bool::from((-FieldElement::from_u64(1, &P)).is_odd()));
    }

    #[test]
    fn moduli_are_distinguished() {
        let a = FieldElement::from_u64(5, &P);
        let b = FieldElement::from_u64(5, &P160);
        assert_eq!(a.to_uint(), b.to_uint());
        assert_ne!(a, b);
    }

    prop_compose! {
        fn field_element()(bytes in any::<[u8; 32]>()) -> FieldElement {
            FieldElement::from_be_slice_reduced(&bytes, &P)
        }
    }

    proptest! {
        #[test]
        fn invert_is_inverse(x in field_element()) {
            prop_assume!(!bool::from(x.is_zero()));
            let inv = x.invert_checked().unwrap();
            prop_assert_eq!(x * inv, FieldElement::one(&P));
        }

        #[test]
        fn distributive(a in field_element(), b in field_element(), c in field_element()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn sub_is_add_neg(a in field_element(), b in field_element()) {
            prop_assert_eq!(a - b, a + (-b));
            prop_assert_eq!(a - a, FieldElement::zero(&P));
        }
    }
}
