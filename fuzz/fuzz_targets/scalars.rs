#![no_main]
// Targets: secp160r1, secp192r1, secp224r1, secp256k1
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};
use secpk1::{NamedCurve, ProjectivePoint, Scalar, SecretKey};

fuzz_target!(|data: &[u8]| {
    if data.len() < 33 {
        return;
    }

    let curve = NamedCurve::ALL[usize::from(data[0] & 3)].curve();
    let k = &data[1..];

    // Table-based and generic multiplication agree, including for inputs
    // longer than the group order
    let by_base = curve.scalar_base_mult(k);
    let by_point = curve.scalar_mult(&curve.generator(), k);
    assert_eq!(by_base, by_point);

    // (k + 1)G = kG + G
    let scalar = Scalar::from_be_bytes_reduced(curve, k);
    let next = ProjectivePoint::mul_by_generator(&(scalar + Scalar::one(curve)));
    assert_eq!(next.to_affine(), curve.add(&by_base, &curve.generator()));

    // Keys generated from a seeded stream are in range and match their public key
    let mut rng = ChaChaRng::from_seed(data[1..33].try_into().unwrap());
    let pair = curve.generate_key(&mut rng).unwrap();
    let secret = pair.secret_key().to_bytes();
    assert!(SecretKey::from_bytes(curve, &secret).is_ok());
    assert_eq!(curve.scalar_base_mult(&secret), *pair.public_key());
});
