#![no_main]
// Targets: secp160r1, secp192r1, secp224r1, secp256k1
use libfuzzer_sys::fuzz_target;
use secpk1::{AffinePoint, Curve, Error, NamedCurve, ProjectivePoint};

fn test_group(p1: AffinePoint, p2: AffinePoint) {
    let curve = p1.curve();

    // Affine case analysis and complete projective formulas must agree
    let sum = curve.add(&p1, &p2);
    let projective_sum = ProjectivePoint::from(p1) + ProjectivePoint::from(p2);
    assert_eq!(projective_sum.to_affine(), sum);
    assert_eq!(curve.add(&p2, &p1), sum);

    // Test that addition and doubling are consistent
    assert_eq!(curve.double(&p1), curve.add(&p1, &p1));

    // Test that negation works correctly
    assert!(bool::from(curve.add(&sum, &sum.neg()).is_identity()));
}

fn test_decode(curve: &'static Curve, bytes: &[u8]) -> Option<AffinePoint> {
    match curve.unmarshal(bytes) {
        Ok(point) => {
            // Whatever decodes re-encodes to the same bytes
            let encoded = if bytes.len() == 1 + curve.field_bytes() {
                curve.marshal_compressed(&point)
            } else {
                curve.marshal(&point)
            };
            assert_eq!(encoded.as_bytes(), bytes);
            Some(point)
        }
        Err(Error::MalformedEncoding) | Err(Error::PointNotOnCurve) => None,
        Err(err) => panic!("unexpected decoding error: {err}"),
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let curve = NamedCurve::ALL[usize::from(data[0] & 3)].curve();
    let width = curve.field_bytes();
    let body = &data[1..];

    let p1 = test_decode(curve, body).unwrap_or_else(|| curve.generator());

    // Interpret the input as a compressed x-coordinate as well
    let mut compressed = [0u8; 33];
    compressed[0] = 0x02 | (data[0] >> 7);
    let n = body.len().min(width);
    compressed[1 + width - n..1 + width].copy_from_slice(&body[..n]);
    let p2 = test_decode(curve, &compressed[..1 + width])
        .unwrap_or_else(|| curve.double(&curve.generator()));

    test_group(p1, p2);
});
