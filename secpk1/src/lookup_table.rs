//! Constant-time lookup tables of small point multiples.

use crate::ProjectivePoint;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(all(
    feature = "precomputed-tables",
    not(any(feature = "critical-section", feature = "std"))
))]
compile_error!("`precomputed-tables` feature requires either `critical-section` or `std`");

#[cfg(feature = "precomputed-tables")]
use crate::{Curve, SECP160R1, SECP192R1, SECP224R1, SECP256K1, curve::NamedCurve};
#[cfg(feature = "precomputed-tables")]
use core::ops::Deref;

#[cfg(all(feature = "precomputed-tables", feature = "critical-section"))]
use once_cell::sync::Lazy as LazyLock;
#[cfg(all(
    feature = "precomputed-tables",
    all(feature = "std", not(feature = "critical-section"))
))]
use std::sync::LazyLock;

/// Internal constant for the number of entries in a [`LookupTable`].
const LUT_SIZE: usize = 8;

/// Lookup table containing precomputed values `[p, 2p, 3p, ..., 8p]`
#[derive(Clone, Copy, Debug)]
pub struct LookupTable {
    points: [ProjectivePoint; LUT_SIZE],
}

impl LookupTable {
    /// Compute a new lookup table from the given point.
    pub fn new(p: ProjectivePoint) -> Self {
        let mut points = [p; LUT_SIZE];

        for j in 0..(LUT_SIZE - 1) {
            points[j + 1] = p + &points[j];
        }

        Self { points }
    }

    /// Given -8 <= x <= 8, returns x * p in constant time.
    pub fn select(&self, x: i8) -> ProjectivePoint {
        debug_assert!((-8..=8).contains(&x));

        // Compute xabs = |x|
        let xmask = x >> 7;
        let xabs = (x + xmask) ^ xmask;

        let mut t = ProjectivePoint::identity(self.points[0].curve());

        for j in 1..(LUT_SIZE + 1) {
            let c = (xabs as u8).ct_eq(&(j as u8));
            t.conditional_assign(&self.points[j - 1], c);
        }
        // Now t == |x| * p.

        let neg_mask = Choice::from((xmask & 1) as u8);
        t.conditional_assign(&-t, neg_mask);
        // Now t == x * p.

        t
    }
}

/// Number of tables needed to cover the 65 signed radix-16 digits of a scalar
/// when every table serves two digit positions.
#[cfg(feature = "precomputed-tables")]
pub(crate) const BASEPOINT_TABLES: usize = 33;

/// Lookup tables for the multiples `256^i * G` of a curve's generator,
/// computed on first use.
#[cfg(feature = "precomputed-tables")]
pub(crate) struct BasepointTable {
    tables: LazyLock<[LookupTable; BASEPOINT_TABLES]>,
}

#[cfg(feature = "precomputed-tables")]
impl BasepointTable {
    const fn new(init: fn() -> [LookupTable; BASEPOINT_TABLES]) -> Self {
        Self {
            tables: LazyLock::new(init),
        }
    }

    fn compute(curve: &'static Curve) -> [LookupTable; BASEPOINT_TABLES] {
        let mut generator = ProjectivePoint::generator(curve);

        core::array::from_fn(|_| {
            let table = LookupTable::new(generator);
            // Tables are spaced by two radix steps.
            for _ in 0..8 {
                generator = generator.double();
            }
            table
        })
    }

    /// Table for the given curve.
    pub(crate) fn for_curve(curve: &Curve) -> &'static BasepointTable {
        match curve.id() {
            NamedCurve::Secp160r1 => &SECP160R1_TABLE,
            NamedCurve::Secp192r1 => &SECP192R1_TABLE,
            NamedCurve::Secp224r1 => &SECP224R1_TABLE,
            NamedCurve::Secp256k1 => &SECP256K1_TABLE,
        }
    }
}

#[cfg(feature = "precomputed-tables")]
impl Deref for BasepointTable {
    type Target = [LookupTable; BASEPOINT_TABLES];

    #[inline]
    fn deref(&self) -> &[LookupTable; BASEPOINT_TABLES] {
        &self.tables
    }
}

#[cfg(feature = "precomputed-tables")]
fn secp160r1_tables() -> [LookupTable; BASEPOINT_TABLES] {
    BasepointTable::compute(&SECP160R1)
}

#[cfg(feature = "precomputed-tables")]
fn secp192r1_tables() -> [LookupTable; BASEPOINT_TABLES] {
    BasepointTable::compute(&SECP192R1)
}

#[cfg(feature = "precomputed-tables")]
fn secp224r1_tables() -> [LookupTable; BASEPOINT_TABLES] {
    BasepointTable::compute(&SECP224R1)
}

#[cfg(feature = "precomputed-tables")]
fn secp256k1_tables() -> [LookupTable; BASEPOINT_TABLES] {
    BasepointTable::compute(&SECP256K1)
}

#[cfg(feature = "precomputed-tables")]
static SECP160R1_TABLE: BasepointTable = BasepointTable::new(secp160r1_tables);
#[cfg(feature = "precomputed-tables")]
static SECP192R1_TABLE: BasepointTable = BasepointTable::new(secp192r1_tables);
#[cfg(feature = "precomputed-tables")]
static SECP224R1_TABLE: BasepointTable = BasepointTable::new(secp224r1_tables);
#[cfg(feature = "precomputed-tables")]
static SECP256K1_TABLE: BasepointTable = BasepointTable::new(secp256k1_tables);

#[cfg(test)]
mod tests {
    use super::LookupTable;
    use crate::{NamedCurve, ProjectivePoint};

    #[test]
    fn select_signed_multiples() {
        for id in NamedCurve::ALL {
            let curve = id.curve();
            let g = ProjectivePoint::generator(curve);
            let table = LookupTable::new(g);

            let mut expected = ProjectivePoint::identity(curve);
            assert_eq!(table.select(0), expected);
            for k in 1..=8i8 {
                expected += g;
                assert_eq!(table.select(k), expected);
                assert_eq!(table.select(-k), -expected);
            }
        }
    }
}
