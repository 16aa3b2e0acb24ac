//! Projective curve points.

use crate::{AffinePoint, Curve, FieldElement, Scalar, mul};
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on a short Weierstrass curve in homogeneous projective coordinates
/// `(X : Y : Z)`, representing the affine point `(X/Z, Y/Z)`.
///
/// The identity is `(0 : 1 : 0)`. Addition and doubling use the complete
/// Renes–Costello–Batina formulas, so no input needs special casing and the
/// sequence of field operations never depends on the point values.
#[derive(Clone, Copy)]
pub struct ProjectivePoint {
    curve: &'static Curve,
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl ProjectivePoint {
    /// Additive identity of the group: the point at infinity.
    pub fn identity(curve: &'static Curve) -> Self {
        let m = curve.field_modulus();
        Self {
            curve,
            x: FieldElement::zero(m),
            y: FieldElement::one(m),
            z: FieldElement::zero(m),
        }
    }

    /// Base point of the curve.
    pub fn generator(curve: &'static Curve) -> Self {
        Self::from(AffinePoint::generator(curve))
    }

    pub(crate) fn from_coordinates(
        curve: &'static Curve,
        x: FieldElement,
        y: FieldElement,
        z: FieldElement,
    ) -> Self {
        Self { curve, x, y, z }
    }

    pub(crate) fn coordinates(&self) -> (FieldElement, FieldElement, FieldElement) {
        (self.x, self.y, self.z)
    }

    /// Curve this point belongs to.
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Returns the affine representation of this point, or the identity if
    /// this is the point at infinity.
    pub fn to_affine(&self) -> AffinePoint {
        let zinv = self
            .z
            .invert()
            .unwrap_or(FieldElement::zero(self.curve.field_modulus()));
        let point =
            AffinePoint::from_coordinates_unchecked(self.curve, self.x * zinv, self.y * zinv);
        AffinePoint::conditional_select(
            &point,
            &AffinePoint::identity(self.curve),
            self.is_identity(),
        )
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            curve: self.curve,
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        self.curve.assert_same(other.curve);
        self.curve.equation_a().add(self, other)
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        self.curve.equation_a().double(self)
    }

    /// Returns `k * G` for the generator `G` of `k`'s curve.
    pub fn mul_by_generator(k: &Scalar) -> Self {
        mul::mul_base(k)
    }
}

impl From<AffinePoint> for ProjectivePoint {
    fn from(p: AffinePoint) -> Self {
        let curve = p.curve();
        let (x, y) = p.xy();
        let projective = Self {
            curve,
            x,
            y,
            z: FieldElement::one(curve.field_modulus()),
        };
        Self::conditional_select(&projective, &Self::identity(curve), p.is_identity())
    }
}

impl From<&AffinePoint> for ProjectivePoint {
    fn from(p: &AffinePoint) -> Self {
        Self::from(*p)
    }
}

impl From<ProjectivePoint> for AffinePoint {
    fn from(p: ProjectivePoint) -> AffinePoint {
        p.to_affine()
    }
}

impl From<&ProjectivePoint> for AffinePoint {
    fn from(p: &ProjectivePoint) -> AffinePoint {
        p.to_affine()
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            curve: a.curve,
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ConstantTimeEq for ProjectivePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        // (X1 : Y1 : Z1) == (X2 : Y2 : Z2) iff X1 Z2 == X2 Z1 and Y1 Z2 == Y2 Z1.
        // Two identities agree since X and Z vanish for both; an identity and a
        // finite point differ in the second check.
        if self.curve != other.curve {
            return Choice::from(0);
        }

        let x1 = self.x * other.z;
        let x2 = other.x * self.z;
        let y1 = self.y * other.z;
        let y2 = other.y * self.z;
        x1.ct_eq(&x2) & y1.ct_eq(&y2)
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ProjectivePoint {}

impl PartialEq<AffinePoint> for ProjectivePoint {
    fn eq(&self, other: &AffinePoint) -> bool {
        *self == ProjectivePoint::from(*other)
    }
}

impl fmt::Debug for ProjectivePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectivePoint")
            .field("curve", &self.curve.id())
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl Add<ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(&self, &other)
    }
}

impl Add<&ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(&self, other)
    }
}

impl Add<&ProjectivePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(self, other)
    }
}

impl AddAssign<ProjectivePoint> for ProjectivePoint {
    fn add_assign(&mut self, rhs: ProjectivePoint) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl AddAssign<&ProjectivePoint> for ProjectivePoint {
    fn add_assign(&mut self, rhs: &ProjectivePoint) {
        *self = ProjectivePoint::add(self, rhs);
    }
}

impl Sub<ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(&self, &other)
    }
}

impl Sub<&ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(&self, other)
    }
}

impl Sub<&ProjectivePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(self, other)
    }
}

impl SubAssign<ProjectivePoint> for ProjectivePoint {
    fn sub_assign(&mut self, rhs: ProjectivePoint) {
        *self = ProjectivePoint::sub(self, &rhs);
    }
}

impl SubAssign<&ProjectivePoint> for ProjectivePoint {
    fn sub_assign(&mut self, rhs: &ProjectivePoint) {
        *self = ProjectivePoint::sub(self, rhs);
    }
}

impl Neg for ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        ProjectivePoint::neg(&self)
    }
}

impl Neg for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        ProjectivePoint::neg(self)
    }
}

impl Mul<Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, k: Scalar) -> ProjectivePoint {
        mul::mul_windowed(&self, &k)
    }
}

impl Mul<&Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, k: &Scalar) -> ProjectivePoint {
        mul::mul_windowed(&self, k)
    }
}

impl Mul<&Scalar> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, k: &Scalar) -> ProjectivePoint {
        mul::mul_windowed(self, k)
    }
}

impl MulAssign<Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, k: Scalar) {
        *self = mul::mul_windowed(self, &k);
    }
}

impl MulAssign<&Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, k: &Scalar) {
        *self = mul::mul_windowed(self, k);
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectivePoint;
    use crate::{AffinePoint, NamedCurve, SECP224R1, SECP256K1};

    #[test]
    fn affine_to_projective() {
        for id in NamedCurve::ALL {
            let curve = id.curve();
            let basepoint_affine = AffinePoint::generator(curve);
            let basepoint_projective = ProjectivePoint::generator(curve);

            assert_eq!(ProjectivePoint::from(basepoint_affine), basepoint_projective);
            assert_eq!(basepoint_projective.to_affine(), basepoint_affine);
            assert!(!bool::from(basepoint_projective.to_affine().is_identity()));

            assert!(bool::from(ProjectivePoint::identity(curve).to_affine().is_identity()));
            assert!(bool::from(
                ProjectivePoint::from(AffinePoint::identity(curve)).is_identity()
            ));
        }
    }

    #[test]
    fn projective_identity_addition() {
        for id in NamedCurve::ALL {
            let curve = id.curve();
            let identity = ProjectivePoint::identity(curve);
            let generator = ProjectivePoint::generator(curve);

            assert_eq!(identity + &generator, generator);
            assert_eq!(generator + &identity, generator);
            assert_eq!(identity.double(), identity);
        }
    }

    #[test]
    fn projective_matches_affine() {
        for id in NamedCurve::ALL {
            let curve = id.curve();
            let g = AffinePoint::generator(curve);
            let mut affine = g;
            let mut projective = ProjectivePoint::generator(curve);

            for _ in 0..10 {
                affine = affine.add(&g);
                projective += ProjectivePoint::generator(curve);
                assert_eq!(projective.to_affine(), affine);
                assert_eq!(projective.double().to_affine(), affine.double());
            }
        }
    }

    #[test]
    fn projective_add_vs_double() {
        let generator = ProjectivePoint::generator(&SECP256K1);
        assert_eq!(generator + &generator, generator.double());
        assert_eq!(
            (generator + &generator) + &generator,
            generator.double() + &generator
        );
    }

    #[test]
    fn projective_add_and_sub() {
        let basepoint_affine = AffinePoint::generator(&SECP224R1);
        let basepoint_projective = ProjectivePoint::generator(&SECP224R1);

        assert_eq!(
            (basepoint_projective + &basepoint_projective) - &basepoint_projective,
            basepoint_projective
        );
        assert_eq!(
            basepoint_projective - &basepoint_projective,
            ProjectivePoint::identity(&SECP224R1)
        );
        assert_eq!(-basepoint_projective, ProjectivePoint::from(basepoint_affine.neg()));
    }

    #[test]
    #[should_panic]
    fn mixing_curves_panics() {
        let _ =
            ProjectivePoint::generator(&SECP256K1) + &ProjectivePoint::generator(&SECP224R1);
    }
}
