//! Scalar multiples of the generator.

use crate::NamedCurve;
use hex_literal::hex;

/// Expected value of `k * G` on `curve`.
#[derive(Clone, Copy, Debug)]
pub struct MulBaseVector {
    /// Curve the vector applies to.
    pub curve: NamedCurve,
    /// Big-endian scalar.
    pub k: &'static [u8],
    /// Expected x-coordinate.
    pub x: &'static [u8],
    /// Expected y-coordinate.
    pub y: &'static [u8],
}

/// Multiples of the generator for every supported curve.
///
/// The P-192 and P-224 entries are the `d`/`Q` pairs of the FIPS 186-4 ECDSA
/// `SigGen.txt` vectors.
pub const MUL_BASE_TEST_VECTORS: &[MulBaseVector] = &[
    MulBaseVector {
        curve: NamedCurve::Secp160r1,
        k: &hex!("07"),
        x: &hex!("7A7F99D56472F619577C4E8C9B3A35E961472188"),
        y: &hex!("8955C17A4AA7B3CA673C6D55EE00FAE62552E356"),
    },
    MulBaseVector {
        curve: NamedCurve::Secp160r1,
        k: &hex!("AA55AA55AA55AA55AA55"),
        x: &hex!("4A186ECC7AD21B80FAEEDD30E2C8B8840BCD0F04"),
        y: &hex!("398321CA04D2C106ACAE698477661F8FE54F312A"),
    },
    MulBaseVector {
        curve: NamedCurve::Secp192r1,
        k: &hex!("0017899949d02b55f9556846411cc9de512c6f16ecdeb1c4"),
        x: &hex!("14f69738599689f5706ab71343becc886ef1569a2d1137fe"),
        y: &hex!("0cf5a433909e33217fb4df6b9593f71d43fb1c2a5653b763"),
    },
    MulBaseVector {
        curve: NamedCurve::Secp192r1,
        k: &hex!("0064c3a51fb6188170f3cdf12b474a77de4ae0052b84ece8"),
        x: &hex!("386afa71afc065019f3d2021ead531ed1d365887122d2d4b"),
        y: &hex!("bbfb6e9cdb32c2252015acfb4cfb049b08b4cb279c64928a"),
    },
    MulBaseVector {
        curve: NamedCurve::Secp192r1,
        k: &hex!("00abd205ef412646907d2e4886b8ffd7d94678bd3818ed54"),
        x: &hex!("3b1c19d73b6a4d7a12003530a54ae0f5ba18d75c98a0db95"),
        y: &hex!("afb8bd8c94c6e3d5dc050e3641c0fad771557ce97f5f3dba"),
    },
    MulBaseVector {
        curve: NamedCurve::Secp192r1,
        k: &hex!("0045624e643545c113e4a1993cfac6f23c6e0486c98e14c9"),
        x: &hex!("21933e6e8cdcfff62f36c45e83dece1280a888663a34608f"),
        y: &hex!("565890e37fdf563595d24524ef1da9aae246892e75a74234"),
    },
    MulBaseVector {
        curve: NamedCurve::Secp224r1,
        k: &hex!("16797b5c0c7ed5461e2ff1b88e6eafa03c0f46bf072000dfc830d615"),
        x: &hex!("605495756e6e88f1d07ae5f98787af9b4da8a641d1a9492a12174eab"),
        y: &hex!("f5cc733b17decc806ef1df861a42505d0af9ef7c3df3959b8dfc6669"),
    },
    MulBaseVector {
        curve: NamedCurve::Secp224r1,
        k: &hex!("cf020a1ff36c28511191482ed1e5259c60d383606c581948c3fbe2c5"),
        x: &hex!("fa21f85b99d3dc18c6d53351fbcb1e2d029c00fa7d1663a3dd94695e"),
        y: &hex!("e9e79578f8988b168edff1a8b34a5ed9598cc20acd1f0aed36715d88"),
    },
    MulBaseVector {
        curve: NamedCurve::Secp224r1,
        k: &hex!("dde6f173fa9f307d206ce46b4f02851ebce9638a989330249fd30b73"),
        x: &hex!("fc21a99b060afb0d9dbf3250ea3c4da10be94ce627a65874d8e4a630"),
        y: &hex!("e8373ab7190890326aac4aacca3eba89e15d1086a05434dd033fd3f3"),
    },
    MulBaseVector {
        curve: NamedCurve::Secp224r1,
        k: &hex!("aeee9071248f077590ac647794b678ad371f8e0f1e14e9fbff49671e"),
        x: &hex!("fad0a34991bbf89982ad9cf89337b4bd2565f84d5bdd004289fc1cc3"),
        y: &hex!("5d8b6764f28c8163a12855a5c266efeb9388df4994b85a8b4f1bd3bc"),
    },
    MulBaseVector {
        curve: NamedCurve::Secp256k1,
        k: &hex!("AA5E28D6A97A2479A65527F7290311A3624D4CC0FA1578598EE3C2613BF99522"),
        x: &hex!("34F9460F0E4F08393D192B3C5133A6BA099AA0AD9FD54EBCCFACDFA239FF49C6"),
        y: &hex!("0B71EA9BD730FD8923F6D25A7A91E7DD7728A960686CB5A901BB419E0F2CA232"),
    },
    MulBaseVector {
        curve: NamedCurve::Secp256k1,
        k: &hex!("7E2B897B8CEBC6361663AD410835639826D590F393D90A9538881735256DFAE3"),
        x: &hex!("D74BF844B0862475103D96A611CF2D898447E288D34B360BC885CB8CE7C00575"),
        y: &hex!("131C670D414C4546B88AC3FF664611B1C38CEB1C21D76369D7A7A0969D61D97D"),
    },
    MulBaseVector {
        curve: NamedCurve::Secp256k1,
        k: &hex!("6461E6DF0FE7DFD05329F41BF771B86578143D4DD1F7866FB4CA7E97C5FA945D"),
        x: &hex!("E8AECC370AEDD953483719A116711963CE201AC3EB21D3F3257BB48668C6A72F"),
        y: &hex!("C25CAF2F0EBA1DDB2F0F3F47866299EF907867B7D27E95B3873BF98397B24EE1"),
    },
    MulBaseVector {
        curve: NamedCurve::Secp256k1,
        k: &hex!("376A3A2CDCD12581EFFF13EE4AD44C4044B8A0524C42422A7E1E181E4DEECCEC"),
        x: &hex!("14890E61FCD4B0BD92E5B36C81372CA6FED471EF3AA60A3E415EE4FE987DABA1"),
        y: &hex!("297B858D9F752AB42D3BCA67EE0EB6DCD1C2B7B0DBE23397E66ADC272263F982"),
    },
    MulBaseVector {
        curve: NamedCurve::Secp256k1,
        k: &hex!("1B22644A7BE026548810C378D0B2994EEFA6D2B9881803CB02CEFF865287D1B9"),
        x: &hex!("F73C65EAD01C5126F28F442D087689BFA08E12763E0CEC1D35B01751FD735ED3"),
        y: &hex!("F449A8376906482A84ED01479BD18882B919C140D638307F0C0934BA12590BDE"),
    },
];

#[cfg(test)]
mod tests {
    use super::MUL_BASE_TEST_VECTORS;

    #[test]
    fn scalar_base_mult() {
        for vector in MUL_BASE_TEST_VECTORS {
            let curve = vector.curve.curve();
            let point = curve.scalar_base_mult(vector.k);
            assert_eq!(&point.x_bytes()[..], vector.x, "{:?}", vector);
            assert_eq!(&point.y_bytes()[..], vector.y, "{:?}", vector);
        }
    }

    #[test]
    fn scalar_mult_of_generator() {
        for vector in MUL_BASE_TEST_VECTORS {
            let curve = vector.curve.curve();
            let point = curve.scalar_mult(&curve.generator(), vector.k);
            assert_eq!(point, curve.point(vector.x, vector.y).unwrap(), "{:?}", vector);
        }
    }
}
