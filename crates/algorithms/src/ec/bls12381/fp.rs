//! BLS12-381 base field GF(p) where p = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab

use crate::field::{FieldParams, SqrtAlgorithm};

pub(crate) const FP_PARAMS: FieldParams<6> = FieldParams {
    modulus: [
        0xb9feffffffffaaab, 0x1eabfffeb153ffff,
        0x6730d2a0f6b0f624, 0x64774b84f38512bf,
        0x4b1ba7b6434bacd7, 0x1a0111ea397fe69a,
    ],
    mod_neg_inv: 0x89f3fffcfffcfffd,
    r: [
        0x760900000002fffd, 0xebf4000bc40c0002,
        0x5f48985753c758ba, 0x77ce585370525745,
        0x5c071a97a256ec6d, 0x15f65ec3fa80e493,
    ],
    r2: [
        0xf4df1f341c341746, 0x0a76e6a609d104f1,
        0x8de5476c4c95b6d5, 0x67eb88a9939d83c0,
        0x9a793e85b519952d, 0x11988fe592cae3aa,
    ],
    r3: [
        0xed48ac6bd94ca1e0, 0x315f831e03a7adf8,
        0x9a53352a615e29dd, 0x34c04e5e921e1761,
        0x2512d43565724728, 0x0aa6346091755d4d,
    ],
    euler_exp: [
        0xdcff7fffffffd555, 0x0f55ffff58a9ffff,
        0xb39869507b587b12, 0xb23ba5c279c2895f,
        0x258dd3db21a5d66b, 0x0d0088f51cbff34d,
    ],
    sqrt: SqrtAlgorithm::ThreeMod4 {
        exp: [
            0xee7fbfffffffeaab, 0x07aaffffac54ffff,
            0xd9cc34a83dac3d89, 0xd91dd2e13ce144af,
            0x92c6e9ed90d2eb35, 0x0680447a8e5ff9a6,
        ],
    },
};

crate::prime_field!(
    /// An element of the BLS12-381 base field, in Montgomery form.
    Fp,
    FP_PARAMS,
    6,
    48,
    96
);
crate::field_invert_via_pow!(Fp, FP_PARAMS);
crate::field_sqrt_via_params!(Fp, FP_PARAMS);
crate::field_element_trait_impl!(Fp);

impl Fp {
    /// True when the canonical value exceeds (p − 1) / 2, the ZCash
    /// serialization sort order.
    pub fn lexicographically_largest(&self) -> subtle::Choice {
        let canonical = FP_PARAMS.from_montgomery(&self.0);
        let cmp = curvekit_internal::ct_limbs_cmp(&canonical, &FP_PARAMS.euler_exp);
        subtle::Choice::from((cmp == 1) as u8)
    }
}
