//! Curve domain parameters and the operations each named curve exposes.

use crate::{
    AffinePoint, EncodedPoint, Error, FieldElement, KeyPair, ProjectivePoint, Result, Scalar,
    point_arithmetic::EquationA, sec1,
};
use core::{fmt, str::FromStr};
use primefield::{Modulus, U256};
use rand_core::TryCryptoRng;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

/// secp160r1 as specified in SEC 2 v1.
///
/// The curve's equation is `y² = x³ - 3x + b` over a 160-bit prime field,
/// with a group order of 161 bits.
pub static SECP160R1: Curve = Curve::new(
    NamedCurve::Secp160r1,
    EquationA::MinusThree,
    "000000000000000000000000ffffffffffffffffffffffffffffffff7fffffff",
    "00000000000000000000000100000000000000000001f4c8f927aed3ca752257",
    "0000000000000000000000001c97befc54bd7a8b65acf89f81d4d4adc565fa45",
    "0000000000000000000000004a96b5688ef573284664698968c38bb913cbfc82",
    "00000000000000000000000023a628553168947d59dcc912042351377ac5fb32",
);

/// secp192r1, also known as NIST P-192.
pub static SECP192R1: Curve = Curve::new(
    NamedCurve::Secp192r1,
    EquationA::MinusThree,
    "0000000000000000fffffffffffffffffffffffffffffffeffffffffffffffff",
    "0000000000000000ffffffffffffffffffffffff99def836146bc9b1b4d22831",
    "000000000000000064210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
    "0000000000000000188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
    "000000000000000007192b95ffc8da78631011ed6b24cdd573f977a11e794811",
);

/// secp224r1, also known as NIST P-224.
pub static SECP224R1: Curve = Curve::new(
    NamedCurve::Secp224r1,
    EquationA::MinusThree,
    "00000000ffffffffffffffffffffffffffffffff000000000000000000000001",
    "00000000ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
    "00000000b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
    "00000000b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
    "00000000bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
);

/// secp256k1 as specified in SEC 2 v2.
///
/// The curve's equation is `y² = x³ + 7` over a 256-bit prime field.
pub static SECP256K1: Curve = Curve::new(
    NamedCurve::Secp256k1,
    EquationA::Zero,
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
    "0000000000000000000000000000000000000000000000000000000000000007",
    "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
);

/// Identifier of one of the supported curves.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum NamedCurve {
    /// secp160r1
    Secp160r1,
    /// secp192r1 / NIST P-192
    Secp192r1,
    /// secp224r1 / NIST P-224
    Secp224r1,
    /// secp256k1
    Secp256k1,
}

impl NamedCurve {
    /// Every supported curve, in order of increasing field size.
    pub const ALL: [NamedCurve; 4] = [
        NamedCurve::Secp160r1,
        NamedCurve::Secp192r1,
        NamedCurve::Secp224r1,
        NamedCurve::Secp256k1,
    ];

    /// Domain parameters of this curve.
    pub fn curve(self) -> &'static Curve {
        match self {
            NamedCurve::Secp160r1 => &SECP160R1,
            NamedCurve::Secp192r1 => &SECP192R1,
            NamedCurve::Secp224r1 => &SECP224R1,
            NamedCurve::Secp256k1 => &SECP256K1,
        }
    }

    /// Look up a curve by the bit length of its field.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            160 => Some(NamedCurve::Secp160r1),
            192 => Some(NamedCurve::Secp192r1),
            224 => Some(NamedCurve::Secp224r1),
            256 => Some(NamedCurve::Secp256k1),
            _ => None,
        }
    }

    /// SEC 2 name of the curve.
    pub const fn name(self) -> &'static str {
        match self {
            NamedCurve::Secp160r1 => "secp160r1",
            NamedCurve::Secp192r1 => "secp192r1",
            NamedCurve::Secp224r1 => "secp224r1",
            NamedCurve::Secp256k1 => "secp256k1",
        }
    }
}

impl FromStr for NamedCurve {
    type Err = Error;

    /// Parses SEC 2 names, ignoring ASCII case. The NIST names `P-192` and
    /// `P-224` are accepted as aliases.
    fn from_str(s: &str) -> Result<Self> {
        const ALIASES: [(&str, NamedCurve); 6] = [
            ("secp160r1", NamedCurve::Secp160r1),
            ("secp192r1", NamedCurve::Secp192r1),
            ("p-192", NamedCurve::Secp192r1),
            ("secp224r1", NamedCurve::Secp224r1),
            ("p-224", NamedCurve::Secp224r1),
            ("secp256k1", NamedCurve::Secp256k1),
        ];

        ALIASES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, id)| id)
            .ok_or(Error::UnknownCurve)
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Domain parameters of a short Weierstrass curve `y² = x³ + ax + b` over
/// `GF(p)`, along with the order `n` of its generator `G`.
///
/// Instances are the immutable statics [`SECP160R1`], [`SECP192R1`],
/// [`SECP224R1`] and [`SECP256K1`]. All Montgomery constants are computed at
/// compile time. Methods which produce field elements or points borrow the
/// curve for `'static`.
pub struct Curve {
    id: NamedCurve,
    equation_a: EquationA,
    p: Modulus,
    n: Modulus,
    b: U256,
    gx: U256,
    gy: U256,
}

impl Curve {
    const fn new(
        id: NamedCurve,
        equation_a: EquationA,
        p_hex: &str,
        n_hex: &str,
        b_hex: &str,
        gx_hex: &str,
        gy_hex: &str,
    ) -> Self {
        Self {
            id,
            equation_a,
            p: Modulus::from_be_hex(p_hex),
            n: Modulus::from_be_hex(n_hex),
            b: U256::from_be_hex(b_hex),
            gx: U256::from_be_hex(gx_hex),
            gy: U256::from_be_hex(gy_hex),
        }
    }

    /// Look up a curve by name. See [`NamedCurve`]'s `FromStr` impl for the
    /// accepted names.
    pub fn for_name(name: &str) -> Result<&'static Curve> {
        name.parse::<NamedCurve>().map(NamedCurve::curve)
    }

    /// Identifier of this curve.
    pub const fn id(&self) -> NamedCurve {
        self.id
    }

    /// SEC 2 name of this curve.
    pub const fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Class of the `a` coefficient.
    pub const fn equation_a(&self) -> EquationA {
        self.equation_a
    }

    /// Field prime `p`.
    pub const fn p(&self) -> &U256 {
        self.p.value()
    }

    /// Order `n` of the generator.
    pub const fn n(&self) -> &U256 {
        self.n.value()
    }

    /// Base field modulus.
    pub const fn field_modulus(&self) -> &Modulus {
        &self.p
    }

    /// Scalar field modulus.
    pub const fn scalar_modulus(&self) -> &Modulus {
        &self.n
    }

    /// Bit length of the field prime.
    pub const fn bits(&self) -> u32 {
        self.p.bits()
    }

    /// Width of an encoded coordinate: `⌈bits / 8⌉`.
    pub const fn field_bytes(&self) -> usize {
        self.p.bytes()
    }

    /// Width of an encoded scalar, which exceeds [`Curve::field_bytes`] when
    /// `n > p` (secp160r1).
    pub const fn scalar_bytes(&self) -> usize {
        self.n.bytes()
    }

    /// Coefficient `a`.
    pub fn a(&'static self) -> FieldElement {
        match self.equation_a {
            EquationA::MinusThree => -FieldElement::from_u64(3, &self.p),
            EquationA::Zero => FieldElement::zero(&self.p),
        }
    }

    /// Coefficient `b`.
    pub fn b(&'static self) -> FieldElement {
        FieldElement::from_uint_reduced(&self.b, &self.p)
    }

    /// Generator x-coordinate.
    pub fn gx(&'static self) -> FieldElement {
        FieldElement::from_uint_reduced(&self.gx, &self.p)
    }

    /// Generator y-coordinate.
    pub fn gy(&'static self) -> FieldElement {
        FieldElement::from_uint_reduced(&self.gy, &self.p)
    }

    /// Is `(x, y)` a point on this curve?
    ///
    /// Coordinates are big-endian integers of at most 32 bytes. Values which
    /// are not reduced modulo `p` are never on the curve.
    pub fn is_on_curve(&'static self, x: &[u8], y: &[u8]) -> bool {
        let x = FieldElement::from_be_slice(x, &self.p);
        let y = FieldElement::from_be_slice(y, &self.p);
        match (Option::from(x), Option::from(y)) {
            (Some(x), Some(y)) => self.contains(&x, &y).into(),
            _ => false,
        }
    }

    /// Checks `y² = x³ + ax + b` in constant time.
    pub(crate) fn contains(&'static self, x: &FieldElement, y: &FieldElement) -> Choice {
        y.square().ct_eq(&self.equation_rhs(x))
    }

    /// Computes `x³ + ax + b`.
    pub(crate) fn equation_rhs(&'static self, x: &FieldElement) -> FieldElement {
        let x3 = x.square() * x;
        match self.equation_a {
            EquationA::MinusThree => x3 - (x.double() + x) + self.b(),
            EquationA::Zero => x3 + self.b(),
        }
    }

    /// Panics if `other` is not this curve.
    pub(crate) fn assert_same(&self, other: &Curve) {
        assert!(
            self.id == other.id,
            "point on {} used with {}",
            other.name(),
            self.name()
        );
    }

    /// The generator `G`.
    pub fn generator(&'static self) -> AffinePoint {
        AffinePoint::generator(self)
    }

    /// The point at infinity.
    pub fn identity(&'static self) -> AffinePoint {
        AffinePoint::identity(self)
    }

    /// Validate big-endian coordinates as a point on this curve.
    pub fn point(&'static self, x: &[u8], y: &[u8]) -> Result<AffinePoint> {
        AffinePoint::from_coordinates(self, x, y)
    }

    /// Computes `2P`.
    pub fn double(&'static self, point: &AffinePoint) -> AffinePoint {
        self.assert_same(point.curve());
        point.double()
    }

    /// Computes `P + Q`.
    pub fn add(&'static self, p: &AffinePoint, q: &AffinePoint) -> AffinePoint {
        self.assert_same(p.curve());
        p.add(q)
    }

    /// Computes `kP`, where `k` is a big-endian integer of any length which is
    /// reduced modulo `n`.
    ///
    /// The sequence of field operations is independent of the value of `k`,
    /// and the reduced scalar is wiped before returning.
    pub fn scalar_mult(&'static self, point: &AffinePoint, k: &[u8]) -> AffinePoint {
        self.assert_same(point.curve());
        let k = Zeroizing::new(Scalar::from_be_bytes_reduced(self, k));
        (ProjectivePoint::from(*point) * &*k).to_affine()
    }

    /// Computes `kG`. Always equal to `scalar_mult(&generator(), k)`.
    pub fn scalar_base_mult(&'static self, k: &[u8]) -> AffinePoint {
        let k = Zeroizing::new(Scalar::from_be_bytes_reduced(self, k));
        ProjectivePoint::mul_by_generator(&k).to_affine()
    }

    /// Encode a point as `0x04 ‖ x ‖ y`, or `0x00` for the identity.
    pub fn marshal(&'static self, point: &AffinePoint) -> EncodedPoint {
        self.assert_same(point.curve());
        EncodedPoint::from_affine(point, false)
    }

    /// Encode a point as `0x02 ‖ x` or `0x03 ‖ x` depending on the parity of
    /// `y`, or `0x00` for the identity.
    pub fn marshal_compressed(&'static self, point: &AffinePoint) -> EncodedPoint {
        self.assert_same(point.curve());
        EncodedPoint::from_affine(point, true)
    }

    /// Decode and validate a SEC1-encoded point.
    pub fn unmarshal(&'static self, bytes: &[u8]) -> Result<AffinePoint> {
        sec1::decode(self, bytes)
    }

    /// Generate a key pair with the given random source.
    pub fn generate_key<R: TryCryptoRng + ?Sized>(&'static self, rng: &mut R) -> Result<KeyPair> {
        KeyPair::generate(self, rng)
    }
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Curve {}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.name())
            .field("p", self.p())
            .field("n", self.n())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{Curve, NamedCurve, SECP160R1, SECP256K1};
    use crate::{EquationA, Error, U256};
    use primefield::bigint::Encoding;
    use hex_literal::hex;

    #[test]
    fn generators_are_on_their_curves() {
        for id in NamedCurve::ALL {
            let curve = id.curve();
            let (gx, gy) = (curve.gx(), curve.gy());
            assert!(bool::from(curve.contains(&gx, &gy)), "{id}");
        }
    }

    #[test]
    fn sizes() {
        let expected = [(160, 20, 21), (192, 24, 24), (224, 28, 28), (256, 32, 32)];
        for (id, expected) in NamedCurve::ALL.into_iter().zip(expected) {
            let (bits, field_bytes, scalar_bytes) = expected;
            let curve = id.curve();
            assert_eq!(curve.bits(), bits);
            assert_eq!(curve.field_bytes(), field_bytes);
            assert_eq!(curve.scalar_bytes(), scalar_bytes);
            assert_eq!(NamedCurve::from_bits(bits), Some(id));
        }
        assert_eq!(NamedCurve::from_bits(384), None);
    }

    #[test]
    fn secp256k1_constants() {
        // p = 2^256 - 2^32 - 977
        let p = U256::ZERO
            .wrapping_sub(&U256::from_u64(1 << 32))
            .wrapping_sub(&U256::from_u64(977));
        assert_eq!(*SECP256K1.p(), p);
        assert_eq!(SECP256K1.equation_a(), EquationA::Zero);
        assert!(bool::from(SECP256K1.a().is_zero()));
        assert_eq!(
            SECP256K1.b(),
            crate::FieldElement::from_u64(7, SECP256K1.field_modulus())
        );
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Curve::for_name("secp256k1"), Ok(&SECP256K1));
        assert_eq!(Curve::for_name("SECP160R1"), Ok(&SECP160R1));
        assert_eq!(Curve::for_name("P-224").map(Curve::id), Ok(NamedCurve::Secp224r1));
        assert_eq!(Curve::for_name("curve25519"), Err(Error::UnknownCurve));
        assert_eq!(SECP160R1.name(), "secp160r1");
    }

    #[test]
    fn is_on_curve_rejects_unreduced_coordinates() {
        let gx = hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");
        let gy = hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");
        assert!(SECP256K1.is_on_curve(&gx, &gy));

        // secp160r1 coordinates plus p still fit in 21 bytes but are not reduced
        let gx = U256::from_be_hex(
            "0000000000000000000000004a96b5688ef573284664698968c38bb913cbfc82",
        );
        let gy = hex!("23a628553168947d59dcc912042351377ac5fb32");
        let mut unreduced = [0u8; 21];
        unreduced.copy_from_slice(&gx.wrapping_add(SECP160R1.p()).to_be_bytes()[11..]);
        assert!(!SECP160R1.is_on_curve(&unreduced, &gy));
        assert!(SECP160R1.is_on_curve(&gx.to_be_bytes(), &gy));

        assert!(!SECP256K1.is_on_curve(&[0], &[0]));
        assert!(!SECP256K1.is_on_curve(&[0u8; 33], &gy));
    }
}
