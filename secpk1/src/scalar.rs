//! Scalars: integers modulo the order `n` of a curve's generator.

use crate::{Curve, Error, FieldBytes, Result, U256};
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use primefield::FieldElement as Residue;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

/// Integer modulo the group order `n` of a curve.
///
/// Used as the multiplier in scalar multiplication and as the value of a
/// secret key. Scalars of different curves must not be mixed.
#[derive(Clone, Copy)]
pub struct Scalar {
    curve: &'static Curve,
    inner: Residue,
}

impl Scalar {
    /// Zero scalar.
    pub fn zero(curve: &'static Curve) -> Self {
        Self {
            curve,
            inner: Residue::zero(curve.scalar_modulus()),
        }
    }

    /// Multiplicative identity.
    pub fn one(curve: &'static Curve) -> Self {
        Self {
            curve,
            inner: Residue::one(curve.scalar_modulus()),
        }
    }

    /// Convert a `u64`, reducing it modulo `n`.
    pub fn from_u64(curve: &'static Curve, w: u64) -> Self {
        Self {
            curve,
            inner: Residue::from_u64(w, curve.scalar_modulus()),
        }
    }

    /// Decode a canonical big-endian integer of at most 32 bytes.
    ///
    /// Returns the `CtOption` equivalent of `None` if the value is not less
    /// than `n`.
    pub fn from_be_bytes(curve: &'static Curve, bytes: &[u8]) -> CtOption<Self> {
        let m = curve.scalar_modulus();
        let decoded = Residue::from_be_slice(bytes, m);
        let is_some = decoded.is_some();
        let inner = decoded.unwrap_or(Residue::zero(m));
        CtOption::new(Self { curve, inner }, is_some)
    }

    /// Decode a big-endian integer of any length, reducing it modulo `n`.
    pub fn from_be_bytes_reduced(curve: &'static Curve, bytes: &[u8]) -> Self {
        Self {
            curve,
            inner: Residue::from_be_slice_reduced(bytes, curve.scalar_modulus()),
        }
    }

    /// Curve whose group order this scalar is reduced by.
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// Canonical integer value in `[0, n)`.
    pub fn to_uint(&self) -> U256 {
        self.inner.to_uint()
    }

    /// Big-endian encoding padded to [`Curve::scalar_bytes`].
    pub fn to_bytes(&self) -> FieldBytes {
        FieldBytes::from_uint(&self.to_uint(), self.curve.scalar_bytes())
    }

    /// Is this scalar zero?
    pub fn is_zero(&self) -> Choice {
        self.inner.is_zero()
    }

    /// Returns `self + self`.
    #[must_use]
    pub fn double(&self) -> Self {
        Self {
            curve: self.curve,
            inner: self.inner.double(),
        }
    }

    /// Returns `self * self`.
    #[must_use]
    pub fn square(&self) -> Self {
        Self {
            curve: self.curve,
            inner: self.inner.square(),
        }
    }

    /// Multiplicative inverse modulo `n`.
    pub fn invert(&self) -> Result<Self> {
        Ok(Self {
            curve: self.curve,
            inner: self.inner.invert_checked().map_err(|_| Error::NotInvertible)?,
        })
    }

    fn zip(&self, rhs: &Self, f: impl FnOnce(Residue, Residue) -> Residue) -> Self {
        self.curve.assert_same(rhs.curve);
        Self {
            curve: self.curve,
            inner: f(self.inner, rhs.inner),
        }
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            curve: a.curve,
            inner: Residue::conditional_select(&a.inner, &b.inner, choice),
        }
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.curve != other.curve {
            return Choice::from(0);
        }
        self.inner.ct_eq(&other.inner)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.inner.zeroize();
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({}, 0x{:X})", self.curve.name(), self.to_uint())
    }
}

macro_rules! impl_scalar_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $inner:tt) => {
        impl $op<Scalar> for Scalar {
            type Output = Scalar;

            fn $op_fn(self, rhs: Scalar) -> Scalar {
                self.zip(&rhs, |a, b| a $inner b)
            }
        }

        impl $op<&Scalar> for Scalar {
            type Output = Scalar;

            fn $op_fn(self, rhs: &Scalar) -> Scalar {
                self.zip(rhs, |a, b| a $inner b)
            }
        }

        impl $op<&Scalar> for &Scalar {
            type Output = Scalar;

            fn $op_fn(self, rhs: &Scalar) -> Scalar {
                self.zip(rhs, |a, b| a $inner b)
            }
        }

        impl $assign<Scalar> for Scalar {
            fn $assign_fn(&mut self, rhs: Scalar) {
                *self = self.zip(&rhs, |a, b| a $inner b);
            }
        }

        impl $assign<&Scalar> for Scalar {
            fn $assign_fn(&mut self, rhs: &Scalar) {
                *self = self.zip(rhs, |a, b| a $inner b);
            }
        }
    };
}

impl_scalar_op!(Add, add, AddAssign, add_assign, +);
impl_scalar_op!(Sub, sub, SubAssign, sub_assign, -);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign, *);

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar {
            curve: self.curve,
            inner: -self.inner,
        }
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        -*self
    }
}
