//! Secret keys: non-zero scalars.

use crate::{AffinePoint, Curve, Error, FieldBytes, ProjectivePoint, Result, Scalar};
use core::fmt;
use primefield::BYTES;
use rand_core::TryCryptoRng;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Secret scalar `d` in `[1, n)`.
///
/// Prevents accidental exposure and handles zeroization: the scalar is wiped
/// on drop and `Debug` output is redacted.
#[derive(Clone)]
pub struct SecretKey {
    inner: Scalar,
}

impl SecretKey {
    /// Generate a random secret key by rejection sampling.
    ///
    /// Draws `⌈bits(n) / 8⌉` bytes, clears the bits above `bits(n)`, and
    /// accepts the value if it lies in `[1, n)`. Values out of range are
    /// discarded and redrawn, so the result is uniform and never biased by a
    /// modular reduction.
    pub fn random<R: TryCryptoRng + ?Sized>(curve: &'static Curve, rng: &mut R) -> Result<Self> {
        let len = curve.scalar_bytes();
        let excess_bits = (8 * len as u32) - curve.n().bits_vartime();
        let mut bytes = Zeroizing::new([0u8; BYTES]);

        loop {
            rng.try_fill_bytes(&mut bytes[..len])
                .map_err(|_| Error::RandomSource)?;
            bytes[0] &= 0xff >> excess_bits;

            if let Ok(secret_key) = Self::from_bytes(curve, &bytes[..len]) {
                return Ok(secret_key);
            }
        }
    }

    /// Deserialize a big-endian secret scalar of at most 32 bytes.
    ///
    /// Fails with [`Error::InvalidScalar`] unless the value is in `[1, n)`.
    pub fn from_bytes(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        let scalar = Scalar::from_be_bytes(curve, bytes);
        let is_valid = scalar.is_some() & !scalar.unwrap_or(Scalar::zero(curve)).is_zero();

        if is_valid.into() {
            Ok(Self {
                inner: scalar.unwrap_or(Scalar::zero(curve)),
            })
        } else {
            Err(Error::InvalidScalar)
        }
    }

    /// Create a secret key from a non-zero scalar.
    pub fn from_scalar(scalar: Scalar) -> Result<Self> {
        if scalar.is_zero().into() {
            return Err(Error::InvalidScalar);
        }
        Ok(Self { inner: scalar })
    }

    /// Serialize as a big-endian integer padded to [`Curve::scalar_bytes`].
    pub fn to_bytes(&self) -> Zeroizing<FieldBytes> {
        Zeroizing::new(self.inner.to_bytes())
    }

    /// Copy of the secret scalar which is wiped when dropped.
    pub fn to_scalar(&self) -> Zeroizing<Scalar> {
        Zeroizing::new(self.inner)
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'static Curve {
        self.inner.curve()
    }

    /// Public key `d·G`.
    pub fn public_key(&self) -> AffinePoint {
        ProjectivePoint::mul_by_generator(&self.inner).to_affine()
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.inner.ct_eq(&other.inner)
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("curve", &self.curve().id())
            .finish_non_exhaustive()
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

#[cfg(test)]
mod tests {
    use super::SecretKey;
    use crate::{Error, NamedCurve, SECP160R1, SECP256K1, Scalar};
    use primefield::bigint::Encoding;
    use rand_core::{CryptoRng, RngCore};
    use zeroize::{Zeroize, ZeroizeOnDrop};

    /// Replays a fixed byte sequence.
    struct ScriptedRng<'a> {
        bytes: &'a [u8],
    }

    impl RngCore for ScriptedRng<'_> {
        fn next_u32(&mut self) -> u32 {
            let mut buf = [0u8; 4];
            self.fill_bytes(&mut buf);
            u32::from_be_bytes(buf)
        }

        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            self.fill_bytes(&mut buf);
            u64::from_be_bytes(buf)
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            let (head, tail) = self.bytes.split_at(dst.len());
            dst.copy_from_slice(head);
            self.bytes = tail;
        }
    }

    impl CryptoRng for ScriptedRng<'_> {}

    #[test]
    fn rejects_zero_and_out_of_range() {
        // zero, then n, then 0x..01
        let mut script = [0u8; 96];
        script[32..64].copy_from_slice(&SECP256K1.n().to_be_bytes());
        script[95] = 1;
        let mut rng = ScriptedRng { bytes: &script };

        let key = SecretKey::random(&SECP256K1, &mut rng).unwrap();
        assert_eq!(&key.to_bytes()[..], &script[64..]);
        assert!(rng.bytes.is_empty());
    }

    #[test]
    fn masks_to_order_bits() {
        // secp160r1 n has 161 bits: draws are 21 bytes with the top byte masked to one bit.
        let mut script = [0xffu8; 42];
        script[21] = 0xfe;
        script[22..].fill(0);
        script[41] = 7;
        let mut rng = ScriptedRng { bytes: &script };

        let key = SecretKey::random(&SECP160R1, &mut rng).unwrap();
        let bytes = key.to_bytes();
        assert_eq!(bytes.len(), 21);
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[20], 7);
    }

    #[test]
    fn from_bytes_range() {
        for id in NamedCurve::ALL {
            let curve = id.curve();
            assert_eq!(SecretKey::from_bytes(curve, &[0u8; 20]), Err(Error::InvalidScalar));
            assert_eq!(
                SecretKey::from_bytes(curve, &curve.n().to_be_bytes()),
                Err(Error::InvalidScalar)
            );
            assert!(SecretKey::from_bytes(curve, &[1]).is_ok());
        }
    }

    #[test]
    fn scalar_copies_are_wiped() {
        let key = SecretKey::from_bytes(&SECP256K1, &[0x42]).unwrap();
        let mut copy = key.to_scalar();
        assert_eq!(*copy, Scalar::from_u64(&SECP256K1, 0x42));

        copy.zeroize();
        assert!(bool::from(copy.is_zero()));
        assert_eq!(*key.to_scalar(), Scalar::from_u64(&SECP256K1, 0x42));
    }

    #[test]
    fn wiped_on_drop() {
        fn assert_zeroize_on_drop<T: ZeroizeOnDrop>() {}
        assert_zeroize_on_drop::<SecretKey>();
    }

    #[test]
    fn debug_is_redacted() {
        struct Sink(usize);
        impl core::fmt::Write for Sink {
            fn write_str(&mut self, s: &str) -> core::fmt::Result {
                assert!(!s.contains("0x"));
                self.0 += s.len();
                Ok(())
            }
        }

        let key = SecretKey::from_bytes(&SECP256K1, &[0x42]).unwrap();
        let mut sink = Sink(0);
        core::fmt::write(&mut sink, format_args!("{key:?}")).unwrap();
        assert!(sink.0 > 0);
    }
}
