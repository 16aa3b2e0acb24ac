//! Modular square root implementations, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use crate::{FieldElement, U256};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

impl FieldElement {
    /// Returns the square root of self mod p, or `None` if no square root exists.
    ///
    /// Which of the two roots is returned is unspecified; callers that need a
    /// particular parity select it with [`FieldElement::is_odd`].
    pub fn sqrt(&self) -> CtOption<Self> {
        if self.modulus().as_words()[0] & 3 == 3 {
            self.sqrt_shanks()
        } else {
            self.sqrt_tonelli_shanks()
        }
    }

    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    ///
    /// For `q = 3 (mod 4)`, sqrt can be computed with only one exponentiation as
    /// `self^((q + 1) / 4) (mod q)`.
    fn sqrt_shanks(&self) -> CtOption<Self> {
        // (q + 1) / 4 == (q >> 2) + 1 when q ≡ 3 (mod 4)
        let exp = (*self.modulus() >> 2u32).wrapping_add(&U256::ONE);
        let sqrt = self.pow_vartime(&exp);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Tonelli-Shanks algorithm works for every odd prime.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)
    fn sqrt_tonelli_shanks(&self) -> CtOption<Self> {
        let one = self.one_like();
        let p_minus_1 = self.modulus().wrapping_sub(&U256::ONE);
        let s = p_minus_1.trailing_zeros();
        let t = p_minus_1 >> s;

        let w = self.pow_vartime(&(t >> 1u32));
        let mut v = s;
        let mut x = *self * w;
        let mut b = x * w;
        let mut z = self.root_of_unity(&t);

        for max_v in (1..=s).rev() {
            let mut k = 1;
            let mut tmp = b.square();
            let mut j_less_than_v = Choice::from(1);

            for j in 2..max_v {
                let tmp_is_one = tmp.ct_eq(&one);
                let squared = Self::conditional_select(&tmp, &z, tmp_is_one).square();
                tmp = Self::conditional_select(&squared, &tmp, tmp_is_one);
                let new_z = Self::conditional_select(&z, &squared, tmp_is_one);
                j_less_than_v &= !j.ct_eq(&v);
                k = u32::conditional_select(&j, &k, tmp_is_one);
                z = Self::conditional_select(&z, &new_z, j_less_than_v);
            }

            let result = x * z;
            x = Self::conditional_select(&result, &x, b.ct_eq(&one));
            z = z.square();
            b *= z;
            v = k;
        }

        CtOption::new(x, x.square().ct_eq(self))
    }

    /// Primitive `2^S`-th root of unity `c^t`, where `c` is the smallest
    /// quadratic non-residue.
    fn root_of_unity(&self, t: &U256) -> Self {
        let one = self.one_like();
        let minus_one = -one;
        let euler_exp = *self.modulus() >> 1u32;

        let mut c = one.double();
        while c.pow_vartime(&euler_exp) != minus_one {
            c += one;
        }
        c.pow_vartime(t)
    }
}
