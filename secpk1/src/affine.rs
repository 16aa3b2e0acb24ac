//! Affine curve points.

use crate::{Curve, Error, FieldBytes, FieldElement, Result};
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Point on a short Weierstrass curve in affine coordinates.
///
/// Every value of this type is either the point at infinity or satisfies the
/// curve equation: constructors validate their input and every operation
/// preserves the invariant. The identity is normalized to `(0, 0)` with the
/// infinity flag set.
#[derive(Clone, Copy)]
pub struct AffinePoint {
    curve: &'static Curve,
    x: FieldElement,
    y: FieldElement,
    infinity: u8,
}

impl AffinePoint {
    /// Additive identity of the group: the point at infinity.
    pub fn identity(curve: &'static Curve) -> Self {
        let zero = FieldElement::zero(curve.field_modulus());
        Self {
            curve,
            x: zero,
            y: zero,
            infinity: 1,
        }
    }

    /// Base point of the curve.
    pub fn generator(curve: &'static Curve) -> Self {
        Self::from_coordinates_unchecked(curve, curve.gx(), curve.gy())
    }

    /// Create a point from big-endian coordinates of at most 32 bytes each.
    ///
    /// Fails with [`Error::PointNotOnCurve`] if either coordinate is not less
    /// than `p` or the pair does not satisfy the curve equation.
    pub fn from_coordinates(curve: &'static Curve, x: &[u8], y: &[u8]) -> Result<Self> {
        let m = curve.field_modulus();
        let x = Option::from(FieldElement::from_be_slice(x, m)).ok_or(Error::PointNotOnCurve)?;
        let y = Option::from(FieldElement::from_be_slice(y, m)).ok_or(Error::PointNotOnCurve)?;
        Option::from(Self::from_field_elements(curve, x, y)).ok_or(Error::PointNotOnCurve)
    }

    /// Create a point from field elements, checking the curve equation in
    /// constant time.
    pub fn from_field_elements(
        curve: &'static Curve,
        x: FieldElement,
        y: FieldElement,
    ) -> CtOption<Self> {
        let is_on_curve = curve.contains(&x, &y);
        CtOption::new(Self::from_coordinates_unchecked(curve, x, y), is_on_curve)
    }

    /// Callers must guarantee that `(x, y)` is on the curve.
    pub(crate) fn from_coordinates_unchecked(
        curve: &'static Curve,
        x: FieldElement,
        y: FieldElement,
    ) -> Self {
        Self {
            curve,
            x,
            y,
            infinity: 0,
        }
    }

    pub(crate) fn xy(&self) -> (FieldElement, FieldElement) {
        (self.x, self.y)
    }

    /// Curve this point belongs to.
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Is this point on its curve? False for the identity.
    pub fn is_on_curve(&self) -> bool {
        !bool::from(self.is_identity()) && bool::from(self.curve.contains(&self.x, &self.y))
    }

    /// The affine coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(FieldElement, FieldElement)> {
        if self.is_identity().into() {
            None
        } else {
            Some((self.x, self.y))
        }
    }

    /// The x-coordinate, which is zero for the identity.
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// The y-coordinate, which is zero for the identity.
    pub fn y(&self) -> FieldElement {
        self.y
    }

    /// Fixed-width big-endian encoding of the x-coordinate.
    pub fn x_bytes(&self) -> FieldBytes {
        FieldBytes::from_field_element(&self.x, self.curve.field_bytes())
    }

    /// Fixed-width big-endian encoding of the y-coordinate.
    pub fn y_bytes(&self) -> FieldBytes {
        FieldBytes::from_field_element(&self.y, self.curve.field_bytes())
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            curve: self.curve,
            x: self.x,
            y: -self.y,
            infinity: self.infinity,
        }
    }

    /// Point doubling.
    ///
    /// Handles the degenerate cases explicitly: the identity and points with
    /// `y = 0` (whose tangent is vertical) both double to the identity.
    /// Otherwise `λ = (3x² + a) / 2y`, `x' = λ² - 2x` and `y' = λ(x - x') - y`.
    pub fn double(&self) -> Self {
        if self.is_identity().into() {
            return *self;
        }
        if self.y.is_zero().into() {
            return Self::identity(self.curve);
        }

        let xx = self.x.square();
        let lambda = div(xx.double() + xx + self.curve.a(), self.y.double());
        let x = lambda.square() - self.x.double();
        let y = lambda * (self.x - x) - self.y;
        Self::from_coordinates_unchecked(self.curve, x, y)
    }

    /// Point addition.
    ///
    /// Cases, in order: either operand is the identity; the operands are
    /// inverses of each other; the operands are equal, which delegates to
    /// [`AffinePoint::double`]. Otherwise the chord through both points gives
    /// `λ = (y₂ - y₁) / (x₂ - x₁)`, `x' = λ² - x₁ - x₂`, `y' = λ(x₁ - x') - y₁`.
    ///
    /// # Panics
    ///
    /// If `other` belongs to a different curve.
    pub fn add(&self, other: &Self) -> Self {
        self.curve.assert_same(other.curve);

        if self.is_identity().into() {
            return *other;
        }
        if other.is_identity().into() {
            return *self;
        }
        if self.x == other.x && self.y == -other.y {
            return Self::identity(self.curve);
        }
        if self == other {
            return self.double();
        }

        let lambda = div(other.y - self.y, other.x - self.x);
        let x = lambda.square() - self.x - other.x;
        let y = lambda * (self.x - x) - self.y;
        Self::from_coordinates_unchecked(self.curve, x, y)
    }
}

/// Computes `num / den` for a denominator which the case analysis of the
/// caller has already shown to be non-zero.
fn div(num: FieldElement, den: FieldElement) -> FieldElement {
    let inv = den
        .invert_checked()
        .expect("denominator is non-zero for distinct points on the curve");
    num * inv
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            curve: a.curve,
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.curve != other.curve {
            return Choice::from(0);
        }

        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & self.infinity.ct_eq(&other.infinity)
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

impl fmt::Debug for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("AffinePoint");
        debug.field("curve", &self.curve.id());
        match self.coordinates() {
            Some((x, y)) => debug.field("x", &x).field("y", &y),
            None => debug.field("infinity", &true),
        };
        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::AffinePoint;
    use crate::{Error, NamedCurve, SECP160R1, SECP256K1};
    use hex_literal::hex;

    const SECP160R1_2G: ([u8; 20], [u8; 20]) = (
        hex!("02F997F33C5ED04C55D3EDF8675D3E92E8F46686"),
        hex!("F083A323482993E9440E817E21CFB7737DF8797B"),
    );

    const SECP160R1_3G: ([u8; 20], [u8; 20]) = (
        hex!("7B76FF541EF363F2DF13DE1650BD48DAA958BC59"),
        hex!("C915CA790D8C8877B55BE0079D12854FFE9F6F5A"),
    );

    #[test]
    fn small_multiples_secp160r1() {
        let g = AffinePoint::generator(&SECP160R1);
        let g2 = g.double();
        assert_eq!(g2.x_bytes().as_slice(), SECP160R1_2G.0);
        assert_eq!(g2.y_bytes().as_slice(), SECP160R1_2G.1);

        let g3 = g2.add(&g);
        assert_eq!(g3.x_bytes().as_slice(), SECP160R1_3G.0);
        assert_eq!(g3.y_bytes().as_slice(), SECP160R1_3G.1);
        assert!(g3.is_on_curve());
    }

    #[test]
    fn degenerate_cases() {
        for id in NamedCurve::ALL {
            let curve = id.curve();
            let g = AffinePoint::generator(curve);
            let identity = AffinePoint::identity(curve);

            assert_eq!(identity.add(&g), g);
            assert_eq!(g.add(&identity), g);
            assert_eq!(identity.double(), identity);
            assert!(bool::from(g.add(&g.neg()).is_identity()));
            assert_eq!(g.add(&g), g.double());
            assert!(!identity.is_on_curve());
            assert_eq!(identity.coordinates(), None);
        }
    }

    #[test]
    fn from_coordinates_validates() {
        let g = AffinePoint::generator(&SECP256K1);
        let x = g.x_bytes();
        let y = g.y_bytes();
        assert_eq!(AffinePoint::from_coordinates(&SECP256K1, &x, &y), Ok(g));

        let mut bad_y = y;
        bad_y.as_mut_slice()[31] ^= 1;
        assert_eq!(
            AffinePoint::from_coordinates(&SECP256K1, &x, &bad_y),
            Err(Error::PointNotOnCurve)
        );
        assert_eq!(
            AffinePoint::from_coordinates(&SECP256K1, &[0u8; 33], &y),
            Err(Error::PointNotOnCurve)
        );
    }
}
