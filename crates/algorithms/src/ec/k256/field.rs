//! secp256k1 base field GF(p) where p = 0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f

use crate::field::{FieldParams, SqrtAlgorithm};

pub(crate) const FP_PARAMS: FieldParams<4> = FieldParams {
    modulus: [
        0xfffffffefffffc2f, 0xffffffffffffffff,
        0xffffffffffffffff, 0xffffffffffffffff,
    ],
    mod_neg_inv: 0xd838091dd2253531,
    r: [
        0x00000001000003d1, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
    ],
    r2: [
        0x000007a2000e90a1, 0x0000000000000001,
        0x0000000000000000, 0x0000000000000000,
    ],
    r3: [
        0x002bb1e33795f671, 0x0000000100000b73,
        0x0000000000000000, 0x0000000000000000,
    ],
    euler_exp: [
        0xffffffff7ffffe17, 0xffffffffffffffff,
        0xffffffffffffffff, 0x7fffffffffffffff,
    ],
    sqrt: SqrtAlgorithm::ThreeMod4 {
        exp: [
            0xffffffffbfffff0c, 0xffffffffffffffff,
            0xffffffffffffffff, 0x3fffffffffffffff,
        ],
    },
};

crate::prime_field!(
    /// An element of the secp256k1 base field, in Montgomery form.
    FieldElement,
    FP_PARAMS,
    4,
    32,
    64
);
crate::field_sqrt_via_params!(FieldElement, FP_PARAMS);
crate::field_element_trait_impl!(FieldElement);

impl FieldElement {
    /// Multiplicative inverse via the published secp256k1 addition chain.
    ///
    /// The binary representation of p - 2 has runs of ones with lengths in
    /// {1, 2, 22, 223}; the chain builds 2^n - 1 for each run:
    /// [1], [2], 3, 6, 9, 11, [22], 44, 88, 176, 220, [223].
    pub fn invert(&self) -> subtle::CtOption<Self> {
        let p = &FP_PARAMS;
        let a = &self.0;

        let mut x2 = p.pow2k(a, 1);
        x2 = p.mul(&x2, a);

        let mut x3 = p.pow2k(&x2, 1);
        x3 = p.mul(&x3, a);

        let mut x6 = p.pow2k(&x3, 3);
        x6 = p.mul(&x6, &x3);

        let mut x9 = p.pow2k(&x6, 3);
        x9 = p.mul(&x9, &x3);

        let mut x11 = p.pow2k(&x9, 2);
        x11 = p.mul(&x11, &x2);

        let mut x22 = p.pow2k(&x11, 11);
        x22 = p.mul(&x22, &x11);

        let mut x44 = p.pow2k(&x22, 22);
        x44 = p.mul(&x44, &x22);

        let mut x88 = p.pow2k(&x44, 44);
        x88 = p.mul(&x88, &x44);

        let mut x176 = p.pow2k(&x88, 88);
        x176 = p.mul(&x176, &x88);

        let mut x220 = p.pow2k(&x176, 44);
        x220 = p.mul(&x220, &x44);

        let mut x223 = p.pow2k(&x220, 3);
        x223 = p.mul(&x223, &x3);

        let mut s = p.pow2k(&x223, 23);
        s = p.mul(&s, &x22);
        s = p.pow2k(&s, 5);
        s = p.mul(&s, a);
        s = p.pow2k(&s, 3);
        s = p.mul(&s, &x2);
        s = p.pow2k(&s, 2);
        s = p.mul(&s, a);

        let was_nonzero = !self.is_zero();
        let zero = [0u64; 4];
        let mut out = [0u64; 4];
        curvekit_internal::ct_limbs_select(&zero, &s, was_nonzero, &mut out);
        subtle::CtOption::new(Self(out), was_nonzero)
    }
}
