//! Constant-time scalar multiplication.

use crate::{LookupTable, ProjectivePoint, Scalar};
use primefield::bigint::Encoding;
use zeroize::Zeroizing;

#[cfg(feature = "precomputed-tables")]
use crate::lookup_table::{BASEPOINT_TABLES, BasepointTable};

/// Returns `[a_0, ..., a_64]` such that `sum(a_j * 2^(j * 4)) == x`,
/// and `-8 <= a_j <= 7`.
///
/// The digits reveal the scalar, so both they and the intermediate bytes are
/// wiped on drop.
pub(crate) fn to_radix_16(x: &Scalar) -> Zeroizing<[i8; 65]> {
    // `x` can have up to 256 bits, so we need an additional byte to store the carry.
    let mut output = Zeroizing::new([0i8; 65]);

    // Step 1: change radix.
    // Convert from radix 256 (bytes) to radix 16 (nibbles)
    let bytes = Zeroizing::new(x.to_uint().to_be_bytes());
    for i in 0..32 {
        output[2 * i] = (bytes[31 - i] & 0xf) as i8;
        output[2 * i + 1] = ((bytes[31 - i] >> 4) & 0xf) as i8;
    }

    // Step 2: recenter coefficients from [0,16) to [-8,8)
    for i in 0..64 {
        let carry = (output[i] + 8) >> 4;
        output[i] -= carry << 4;
        output[i + 1] += carry;
    }

    output
}

/// Fixed-window multiplication: 64 rounds of four doublings and one table
/// addition, regardless of the value of `k`.
pub(crate) fn mul_windowed(x: &ProjectivePoint, k: &Scalar) -> ProjectivePoint {
    x.curve().assert_same(k.curve());

    let scalar_digits = to_radix_16(k);
    let lookup_table = LookupTable::new(*x);
    let mut acc = lookup_table.select(scalar_digits[64]);
    for i in (0..64).rev() {
        for _j in 0..4 {
            acc = acc.double();
        }
        acc += &lookup_table.select(scalar_digits[i]);
    }
    acc
}

/// Computes `k * G` using the precomputed tables of the generator.
#[cfg(feature = "precomputed-tables")]
pub(crate) fn mul_base(k: &Scalar) -> ProjectivePoint {
    let curve = k.curve();
    let tables = BasepointTable::for_curve(curve);
    let digits = to_radix_16(k);

    // Odd digits first: sum(digits[2i+1] * 256^i * G), then shift by 16.
    let mut acc = ProjectivePoint::identity(curve);
    for i in 0..(BASEPOINT_TABLES - 1) {
        acc += &tables[i].select(digits[2 * i + 1]);
    }
    for _ in 0..4 {
        acc = acc.double();
    }

    for i in 0..BASEPOINT_TABLES {
        acc += &tables[i].select(digits[2 * i]);
    }
    acc
}

/// Computes `k * G` with the generic windowed method.
#[cfg(not(feature = "precomputed-tables"))]
pub(crate) fn mul_base(k: &Scalar) -> ProjectivePoint {
    mul_windowed(&ProjectivePoint::generator(k.curve()), k)
}
