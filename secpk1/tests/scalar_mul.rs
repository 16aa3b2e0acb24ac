//! Scalar multiplication tests.

#![cfg(feature = "test-vectors")]

use secpk1::primefield::bigint::Encoding;
use secpk1::{NamedCurve, ProjectivePoint, Scalar, test_vectors::mul_base::MUL_BASE_TEST_VECTORS};

#[test]
fn known_answer() {
    for vector in MUL_BASE_TEST_VECTORS {
        let curve = vector.curve.curve();
        let expected = curve.point(vector.x, vector.y).unwrap();
        assert_eq!(curve.scalar_base_mult(vector.k), expected);
        assert_eq!(curve.scalar_mult(&curve.generator(), vector.k), expected);
    }
}

#[test]
fn order_multiples() {
    for id in NamedCurve::ALL {
        let curve = id.curve();
        let n = curve.n().to_be_bytes();
        let g = curve.generator();

        assert!(bool::from(curve.scalar_base_mult(&n).is_identity()));
        assert!(bool::from(curve.scalar_mult(&g, &n).is_identity()));
        assert!(bool::from(curve.scalar_base_mult(&[]).is_identity()));
        assert!(bool::from(curve.scalar_base_mult(&[0; 40]).is_identity()));

        let n_minus_one = (-Scalar::one(curve)).to_bytes();
        assert_eq!(curve.scalar_base_mult(&n_minus_one), g.neg());
        assert_eq!(curve.scalar_mult(&g, &n_minus_one), g.neg());
    }
}

#[test]
fn identity_is_absorbing() {
    for id in NamedCurve::ALL {
        let curve = id.curve();
        let identity = curve.identity();
        assert_eq!(curve.scalar_mult(&identity, &[0x42; 32]), identity);
        assert_eq!(
            ProjectivePoint::from(identity) * Scalar::from_u64(curve, 9),
            ProjectivePoint::identity(curve)
        );
    }
}
