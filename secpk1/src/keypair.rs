//! Key pairs.

use crate::{AffinePoint, Curve, Result, SecretKey};
use rand_core::TryCryptoRng;

/// Secret key `d` together with its public key `Q = d·G`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyPair {
    secret_key: SecretKey,
    public_key: AffinePoint,
}

impl KeyPair {
    /// Generate a key pair with the given random source.
    ///
    /// Fails with [`Error::RandomSource`](crate::Error::RandomSource) if the
    /// source cannot produce bytes.
    pub fn generate<R: TryCryptoRng + ?Sized>(curve: &'static Curve, rng: &mut R) -> Result<Self> {
        SecretKey::random(curve, rng).map(Self::from)
    }

    /// Secret half of the pair.
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Public half of the pair.
    pub fn public_key(&self) -> &AffinePoint {
        &self.public_key
    }

    /// Curve of both keys.
    pub fn curve(&self) -> &'static Curve {
        self.public_key.curve()
    }
}

impl From<SecretKey> for KeyPair {
    fn from(secret_key: SecretKey) -> KeyPair {
        let public_key = secret_key.public_key();
        KeyPair {
            secret_key,
            public_key,
        }
    }
}
