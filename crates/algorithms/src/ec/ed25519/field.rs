//! Curve25519 base field GF(p) where p = 2^255 - 19

use crate::field::{FieldParams, SqrtAlgorithm};

pub(crate) const FP_PARAMS: FieldParams<4> = FieldParams {
    modulus: [
        0xffffffffffffffed, 0xffffffffffffffff,
        0xffffffffffffffff, 0x7fffffffffffffff,
    ],
    mod_neg_inv: 0x86bca1af286bca1b,
    r: [
        0x0000000000000026, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
    ],
    r2: [
        0x00000000000005a4, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
    ],
    r3: [
        0x000000000000d658, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
    ],
    euler_exp: [
        0xfffffffffffffff6, 0xffffffffffffffff,
        0xffffffffffffffff, 0x3fffffffffffffff,
    ],
    sqrt: SqrtAlgorithm::FiveMod8 {
        exp: [
            0xfffffffffffffffe, 0xffffffffffffffff,
            0xffffffffffffffff, 0x0fffffffffffffff,
        ],
        sqrt_m1: [
            0x3b5807d4fe2bdb04, 0x03f590fdb51be9ed,
            0x6d6e16bf336202d1, 0x75776b0bd6c71ba8,
        ],
    },
};

crate::prime_field!(
    /// An element of GF(2^255 - 19), in Montgomery form.
    FieldElement,
    FP_PARAMS,
    4,
    32,
    64
);
crate::field_invert_via_pow!(FieldElement, FP_PARAMS);
crate::field_sqrt_via_params!(FieldElement, FP_PARAMS);
crate::field_element_trait_impl!(FieldElement);
