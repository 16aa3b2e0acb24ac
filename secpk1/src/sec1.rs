//! SEC1 elliptic curve point encoding (section 2.3.3 of SEC 1 v2).
//!
//! ```text
//! identity      0x00
//! compressed    0x02 ‖ x    (even y)
//!               0x03 ‖ x    (odd y)
//! uncompressed  0x04 ‖ x ‖ y
//! ```
//!
//! Coordinates are big-endian and padded to [`Curve::field_bytes`].

use crate::{AffinePoint, Curve, Error, FieldBytes, FieldElement, Result};
use core::fmt;
use primefield::BYTES;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Maximum length of an encoded point: an uncompressed 256-bit point.
const MAX_LEN: usize = 1 + 2 * BYTES;

/// Tag byte which opens every SEC1 encoding.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tag {
    /// The point at infinity.
    Identity = 0,

    /// Compressed point with even y-coordinate.
    CompressedEvenY = 2,

    /// Compressed point with odd y-coordinate.
    CompressedOddY = 3,

    /// Uncompressed point.
    Uncompressed = 4,
}

impl Tag {
    /// Parse a tag byte.
    pub fn from_u8(byte: u8) -> Result<Self> {
        match byte {
            0 => Ok(Tag::Identity),
            2 => Ok(Tag::CompressedEvenY),
            3 => Ok(Tag::CompressedOddY),
            4 => Ok(Tag::Uncompressed),
            _ => Err(Error::MalformedEncoding),
        }
    }

    /// Is this a compressed tag?
    pub fn is_compressed(self) -> bool {
        matches!(self, Tag::CompressedEvenY | Tag::CompressedOddY)
    }

    /// Length of an encoding with this tag, given the width of a coordinate.
    pub fn message_len(self, field_bytes: usize) -> usize {
        match self {
            Tag::Identity => 1,
            Tag::CompressedEvenY | Tag::CompressedOddY => 1 + field_bytes,
            Tag::Uncompressed => 1 + 2 * field_bytes,
        }
    }

    fn compress_y(y_is_odd: bool) -> Self {
        if y_is_odd {
            Tag::CompressedOddY
        } else {
            Tag::CompressedEvenY
        }
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> u8 {
        tag as u8
    }
}

/// Coordinates carried by a well-formed encoding, not yet validated against
/// the curve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Coordinates<'a> {
    /// The point at infinity.
    Identity,

    /// x-coordinate and the parity of y.
    Compressed {
        /// x-coordinate
        x: &'a [u8],
        /// Is y odd?
        y_is_odd: bool,
    },

    /// Both coordinates.
    Uncompressed {
        /// x-coordinate
        x: &'a [u8],
        /// y-coordinate
        y: &'a [u8],
    },
}

/// SEC1 encoding of a point on one of the supported curves.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct EncodedPoint {
    bytes: [u8; MAX_LEN],
    len: usize,
    field_bytes: usize,
}

impl EncodedPoint {
    /// Encode an affine point, compressed or not.
    pub fn from_affine(point: &AffinePoint, compress: bool) -> Self {
        let field_bytes = point.curve().field_bytes();
        let mut bytes = [0u8; MAX_LEN];

        let len = match point.coordinates() {
            None => 1,
            Some((x, y)) => {
                let x = FieldBytes::from_field_element(&x, field_bytes);
                bytes[1..1 + field_bytes].copy_from_slice(&x);
                if compress {
                    bytes[0] = Tag::compress_y(y.is_odd().into()).into();
                    1 + field_bytes
                } else {
                    bytes[0] = Tag::Uncompressed.into();
                    let y = FieldBytes::from_field_element(&y, field_bytes);
                    bytes[1 + field_bytes..1 + 2 * field_bytes].copy_from_slice(&y);
                    1 + 2 * field_bytes
                }
            }
        };

        Self {
            bytes,
            len,
            field_bytes,
        }
    }

    /// Check the tag and length of an encoding for a curve whose coordinates
    /// are `field_bytes` wide. Does not check that the point is on a curve.
    pub fn from_bytes(input: &[u8], field_bytes: usize) -> Result<Self> {
        debug_assert!(field_bytes <= BYTES);
        let tag = Tag::from_u8(*input.first().ok_or(Error::MalformedEncoding)?)?;

        if input.len() != tag.message_len(field_bytes) {
            return Err(Error::MalformedEncoding);
        }

        let mut bytes = [0u8; MAX_LEN];
        bytes[..input.len()].copy_from_slice(input);
        Ok(Self {
            bytes,
            len: input.len(),
            field_bytes,
        })
    }

    /// Encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Length of the encoding in bytes.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Tag byte of this encoding.
    pub fn tag(&self) -> Tag {
        match self.bytes[0] {
            2 => Tag::CompressedEvenY,
            3 => Tag::CompressedOddY,
            4 => Tag::Uncompressed,
            _ => Tag::Identity,
        }
    }

    /// Is this the encoding of the identity?
    pub fn is_identity(&self) -> bool {
        self.tag() == Tag::Identity
    }

    /// Is this a compressed encoding?
    pub fn is_compressed(&self) -> bool {
        self.tag().is_compressed()
    }

    /// Split the encoding into its coordinates.
    pub fn coordinates(&self) -> Coordinates<'_> {
        let body = &self.bytes[1..self.len];
        match self.tag() {
            Tag::Identity => Coordinates::Identity,
            tag @ (Tag::CompressedEvenY | Tag::CompressedOddY) => Coordinates::Compressed {
                x: body,
                y_is_odd: tag == Tag::CompressedOddY,
            },
            Tag::Uncompressed => {
                let (x, y) = body.split_at(self.field_bytes);
                Coordinates::Uncompressed { x, y }
            }
        }
    }
}

impl AsRef<[u8]> for EncodedPoint {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<AffinePoint> for EncodedPoint {
    fn from(point: AffinePoint) -> EncodedPoint {
        EncodedPoint::from_affine(&point, false)
    }
}

impl fmt::Debug for EncodedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedPoint(")?;
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// Decode a SEC1 encoding into a point on `curve`.
///
/// Fails with [`Error::MalformedEncoding`] for a bad tag or length and with
/// [`Error::PointNotOnCurve`] for unreduced coordinates, coordinates which do
/// not satisfy the curve equation, or a compressed x with no matching y.
pub fn decode(curve: &'static Curve, bytes: &[u8]) -> Result<AffinePoint> {
    let encoded = EncodedPoint::from_bytes(bytes, curve.field_bytes())?;

    let point = match encoded.coordinates() {
        Coordinates::Identity => return Ok(AffinePoint::identity(curve)),
        Coordinates::Compressed { x, y_is_odd } => {
            decompress(curve, x, Choice::from(y_is_odd as u8))
        }
        Coordinates::Uncompressed { x, y } => {
            let m = curve.field_modulus();
            let x = Option::from(FieldElement::from_be_slice(x, m)).ok_or(Error::PointNotOnCurve)?;
            let y = Option::from(FieldElement::from_be_slice(y, m)).ok_or(Error::PointNotOnCurve)?;
            AffinePoint::from_field_elements(curve, x, y)
        }
    };

    Option::from(point).ok_or(Error::PointNotOnCurve)
}

/// Recover `y` from `x` and the parity of `y`.
fn decompress(curve: &'static Curve, x_bytes: &[u8], y_is_odd: Choice) -> CtOption<AffinePoint> {
    let m = curve.field_modulus();
    let zero = FieldElement::zero(m);
    let x = FieldElement::from_be_slice(x_bytes, m);
    let x_is_some = x.is_some();
    let x = x.unwrap_or(zero);

    let beta = curve.equation_rhs(&x).sqrt();
    let beta_is_some = beta.is_some();
    let beta = beta.unwrap_or(zero);
    let y = FieldElement::conditional_select(&-beta, &beta, beta.is_odd().ct_eq(&y_is_odd));

    CtOption::new(
        AffinePoint::from_field_elements(curve, x, y).unwrap_or(AffinePoint::identity(curve)),
        x_is_some & beta_is_some,
    )
}

#[cfg(test)]
mod tests {
    use super::{Coordinates, EncodedPoint, Tag, decode};
    use crate::{AffinePoint, Error, NamedCurve, SECP256K1};
    use hex_literal::hex;
    use primefield::bigint::Encoding;

    const UNCOMPRESSED_BASEPOINT: &[u8] = &hex!(
        "0479BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798
         483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"
    );
    const COMPRESSED_BASEPOINT: &[u8] =
        &hex!("0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");

    #[test]
    fn encode_basepoint() {
        let g = AffinePoint::generator(&SECP256K1);
        assert_eq!(EncodedPoint::from_affine(&g, false).as_bytes(), UNCOMPRESSED_BASEPOINT);
        assert_eq!(EncodedPoint::from_affine(&g, true).as_bytes(), COMPRESSED_BASEPOINT);
        assert_eq!(EncodedPoint::from(g).tag(), Tag::Uncompressed);
    }

    #[test]
    fn decode_basepoint() {
        let g = AffinePoint::generator(&SECP256K1);
        assert_eq!(decode(&SECP256K1, UNCOMPRESSED_BASEPOINT), Ok(g));
        assert_eq!(decode(&SECP256K1, COMPRESSED_BASEPOINT), Ok(g));

        let mut odd = [0u8; 33];
        odd.copy_from_slice(COMPRESSED_BASEPOINT);
        odd[0] = 0x03;
        assert_eq!(decode(&SECP256K1, &odd), Ok(g.neg()));
    }

    #[test]
    fn identity_round_trip() {
        for id in NamedCurve::ALL {
            let curve = id.curve();
            let identity = AffinePoint::identity(curve);
            let encoded = EncodedPoint::from_affine(&identity, true);
            assert_eq!(encoded.as_bytes(), &[0x00]);
            assert_eq!(encoded.coordinates(), Coordinates::Identity);
            assert_eq!(decode(curve, &[0x00]), Ok(identity));
        }
    }

    #[test]
    fn reject_malformed() {
        assert_eq!(decode(&SECP256K1, &[]), Err(Error::MalformedEncoding));
        assert_eq!(decode(&SECP256K1, &[0x00, 0x00]), Err(Error::MalformedEncoding));
        assert_eq!(
            decode(&SECP256K1, &UNCOMPRESSED_BASEPOINT[..64]),
            Err(Error::MalformedEncoding)
        );

        let mut bad_tag = [0u8; 65];
        bad_tag.copy_from_slice(UNCOMPRESSED_BASEPOINT);
        bad_tag[0] = 0x05;
        assert_eq!(decode(&SECP256K1, &bad_tag), Err(Error::MalformedEncoding));
    }

    #[test]
    fn reject_invalid_points() {
        let mut off_curve = [0u8; 65];
        off_curve.copy_from_slice(UNCOMPRESSED_BASEPOINT);
        off_curve[64] ^= 1;
        assert_eq!(decode(&SECP256K1, &off_curve), Err(Error::PointNotOnCurve));

        // x = p is not reduced
        let mut unreduced = [0u8; 33];
        unreduced[0] = 0x02;
        unreduced[1..].copy_from_slice(&SECP256K1.p().to_be_bytes());
        assert_eq!(decode(&SECP256K1, &unreduced), Err(Error::PointNotOnCurve));

        // x = 5 gives x^3 + 7 = 132, which is not a square mod p
        let mut no_root = [0u8; 33];
        no_root[0] = 0x02;
        no_root[32] = 5;
        assert_eq!(decode(&SECP256K1, &no_root), Err(Error::PointNotOnCurve));
    }
}
