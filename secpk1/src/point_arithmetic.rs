//! Point arithmetic implementation optimised for different curve equations
//!
//! Support for formulas specialized to the short Weierstrass equation's
//! 𝒂-coefficient.

use crate::{FieldElement, ProjectivePoint};

/// Class of the 𝒂-coefficient of a curve's short Weierstrass equation, which
/// selects the complete formulas used for projective addition and doubling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EquationA {
    /// `a = -3` (secp160r1, P-192, P-224).
    MinusThree,

    /// `a = 0` (secp256k1).
    Zero,
}

impl EquationA {
    /// Returns `lhs + rhs`.
    pub(crate) fn add(self, lhs: &ProjectivePoint, rhs: &ProjectivePoint) -> ProjectivePoint {
        match self {
            EquationA::MinusThree => add_a_minus_three(lhs, rhs),
            EquationA::Zero => add_a_zero(lhs, rhs),
        }
    }

    /// Returns `point + point`.
    pub(crate) fn double(self, point: &ProjectivePoint) -> ProjectivePoint {
        match self {
            EquationA::MinusThree => double_a_minus_three(point),
            EquationA::Zero => double_a_zero(point),
        }
    }
}

/// Implements complete addition for curves with `a = -3`
///
/// Implements the complete addition formula from [Renes-Costello-Batina 2015]
/// (Algorithm 4). The comments after each line indicate which algorithm steps
/// are being performed.
///
/// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
fn add_a_minus_three(lhs: &ProjectivePoint, rhs: &ProjectivePoint) -> ProjectivePoint {
    let b = lhs.curve().b();
    let (x1, y1, z1) = lhs.coordinates();
    let (x2, y2, z2) = rhs.coordinates();

    let xx = x1 * x2; // 1
    let yy = y1 * y2; // 2
    let zz = z1 * z2; // 3
    let xy_pairs = ((x1 + y1) * (x2 + y2)) - (xx + yy); // 4, 5, 6, 7, 8
    let yz_pairs = ((y1 + z1) * (y2 + z2)) - (yy + zz); // 9, 10, 11, 12, 13
    let xz_pairs = ((x1 + z1) * (x2 + z2)) - (xx + zz); // 14, 15, 16, 17, 18

    let bzz_part = xz_pairs - (b * zz); // 19, 20
    let bzz3_part = bzz_part.double() + bzz_part; // 21, 22
    let yy_m_bzz3 = yy - bzz3_part; // 23
    let yy_p_bzz3 = yy + bzz3_part; // 24

    let zz3 = zz.double() + zz; // 26, 27
    let bxz_part = (b * xz_pairs) - (zz3 + xx); // 25, 28, 29
    let bxz3_part = bxz_part.double() + bxz_part; // 30, 31
    let xx3_m_zz3 = xx.double() + xx - zz3; // 32, 33, 34

    ProjectivePoint::from_coordinates(
        lhs.curve(),
        (yy_p_bzz3 * xy_pairs) - (yz_pairs * bxz3_part), // 35, 39, 40
        (yy_p_bzz3 * yy_m_bzz3) + (xx3_m_zz3 * bxz3_part), // 36, 37, 38
        (yy_m_bzz3 * yz_pairs) + (xy_pairs * xx3_m_zz3),  // 41, 42, 43
    )
}

/// Implements point doubling for curves with `a = -3`
///
/// Implements the exception-free point doubling formula from [Renes-Costello-Batina 2015]
/// (Algorithm 6). The comments after each line indicate which algorithm
/// steps are being performed.
///
/// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
fn double_a_minus_three(point: &ProjectivePoint) -> ProjectivePoint {
    let b = point.curve().b();
    let (x, y, z) = point.coordinates();

    let xx = x.square(); // 1
    let yy = y.square(); // 2
    let zz = z.square(); // 3
    let xy2 = (x * y).double(); // 4, 5
    let xz2 = (x * z).double(); // 6, 7

    let bzz_part = (b * zz) - xz2; // 8, 9
    let bzz3_part = bzz_part.double() + bzz_part; // 10, 11
    let yy_m_bzz3 = yy - bzz3_part; // 12
    let yy_p_bzz3 = yy + bzz3_part; // 13
    let y_frag = yy_p_bzz3 * yy_m_bzz3; // 14
    let x_frag = yy_m_bzz3 * xy2; // 15

    let zz3 = zz.double() + zz; // 16, 17
    let bxz2_part = (b * xz2) - (zz3 + xx); // 18, 19, 20
    let bxz6_part = bxz2_part.double() + bxz2_part; // 21, 22
    let xx3_m_zz3 = xx.double() + xx - zz3; // 23, 24, 25

    let y3 = y_frag + (xx3_m_zz3 * bxz6_part); // 26, 27
    let yz2 = (y * z).double(); // 28, 29
    let x3 = x_frag - (bxz6_part * yz2); // 30, 31
    let z3 = (yz2 * yy).double().double(); // 32, 33, 34

    ProjectivePoint::from_coordinates(point.curve(), x3, y3, z3)
}

/// Returns `3b`.
fn b3(point: &ProjectivePoint) -> FieldElement {
    let b = point.curve().b();
    b.double() + b
}

/// Implements complete addition for curves with `a = 0`
///
/// Implements the complete addition formula from [Renes-Costello-Batina 2015]
/// (Algorithm 7).
///
/// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
fn add_a_zero(lhs: &ProjectivePoint, rhs: &ProjectivePoint) -> ProjectivePoint {
    let b3 = b3(lhs);
    let (x1, y1, z1) = lhs.coordinates();
    let (x2, y2, z2) = rhs.coordinates();

    let xx = x1 * x2;
    let yy = y1 * y2;
    let zz = z1 * z2;

    let xy_pairs = ((x1 + y1) * (x2 + y2)) - (xx + yy);
    let yz_pairs = ((y1 + z1) * (y2 + z2)) - (yy + zz);
    let xz_pairs = ((x1 + z1) * (x2 + z2)) - (xx + zz);

    let bzz3 = b3 * zz;
    let yy_m_bzz3 = yy - bzz3;
    let yy_p_bzz3 = yy + bzz3;

    let byz3 = b3 * yz_pairs;
    let xx3 = xx.double() + xx;
    let bxx9 = b3 * xx3;

    ProjectivePoint::from_coordinates(
        lhs.curve(),
        (xy_pairs * yy_m_bzz3) - (byz3 * xz_pairs),
        (yy_p_bzz3 * yy_m_bzz3) + (bxx9 * xz_pairs),
        (yz_pairs * yy_p_bzz3) + (xx3 * xy_pairs),
    )
}

/// Implements point doubling for curves with `a = 0`
///
/// Implements the exception-free point doubling formula from [Renes-Costello-Batina 2015]
/// (Algorithm 9).
///
/// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
fn double_a_zero(point: &ProjectivePoint) -> ProjectivePoint {
    let b3 = b3(point);
    let (x, y, z) = point.coordinates();

    let yy = y.square();
    let zz = z.square();
    let xy2 = (x * y).double();

    let bzz3 = b3 * zz;
    let bzz9 = bzz3.double() + bzz3;

    let yy_m_bzz9 = yy - bzz9;
    let yy_p_bzz3 = yy + bzz3;

    let yy_zz8 = (yy * zz).double().double().double();
    let t = b3 * yy_zz8;

    ProjectivePoint::from_coordinates(
        point.curve(),
        xy2 * yy_m_bzz9,
        (yy_m_bzz9 * yy_p_bzz3) + t,
        ((yy * y) * z).double().double().double(),
    )
}
