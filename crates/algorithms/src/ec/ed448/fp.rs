//! Ed448 base field GF(p) where p = 2^448 - 2^224 - 1

use crate::field::{FieldParams, SqrtAlgorithm};

pub(crate) const FP_PARAMS: FieldParams<7> = FieldParams {
    modulus: [
        0xffffffffffffffff, 0xffffffffffffffff,
        0xffffffffffffffff, 0xfffffffeffffffff,
        0xffffffffffffffff, 0xffffffffffffffff,
        0xffffffffffffffff,
    ],
    mod_neg_inv: 0x0000000000000001,
    r: [
        0x0000000000000001, 0x0000000000000000,
        0x0000000000000000, 0x0000000100000000,
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000,
    ],
    r2: [
        0x0000000000000002, 0x0000000000000000,
        0x0000000000000000, 0x0000000300000000,
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000,
    ],
    r3: [
        0x0000000000000005, 0x0000000000000000,
        0x0000000000000000, 0x0000000800000000,
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000,
    ],
    euler_exp: [
        0xffffffffffffffff, 0xffffffffffffffff,
        0xffffffffffffffff, 0xffffffff7fffffff,
        0xffffffffffffffff, 0xffffffffffffffff,
        0x7fffffffffffffff,
    ],
    sqrt: SqrtAlgorithm::ThreeMod4 {
        exp: [
            0x0000000000000000, 0x0000000000000000,
            0x0000000000000000, 0xffffffffc0000000,
            0xffffffffffffffff, 0xffffffffffffffff,
            0x3fffffffffffffff,
        ],
    },
};

crate::prime_field!(
    /// An element of the Ed448-Goldilocks base field, in Montgomery form.
    Fp,
    FP_PARAMS,
    7,
    56,
    112
);
crate::field_invert_via_pow!(Fp, FP_PARAMS);
crate::field_sqrt_via_params!(Fp, FP_PARAMS);
crate::field_element_trait_impl!(Fp);
