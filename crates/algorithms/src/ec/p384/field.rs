//! NIST P-384 base field GF(p) where p = 0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff

use crate::field::{FieldParams, SqrtAlgorithm};

pub(crate) const FP_PARAMS: FieldParams<6> = FieldParams {
    modulus: [
        0x00000000ffffffff, 0xffffffff00000000,
        0xfffffffffffffffe, 0xffffffffffffffff,
        0xffffffffffffffff, 0xffffffffffffffff,
    ],
    mod_neg_inv: 0x0000000100000001,
    r: [
        0xffffffff00000001, 0x00000000ffffffff,
        0x0000000000000001, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
    ],
    r2: [
        0xfffffffe00000001, 0x0000000200000000,
        0xfffffffe00000000, 0x0000000200000000,
        0x0000000000000001, 0x0000000000000000,
    ],
    r3: [
        0xfffffffc00000002, 0x0000000300000002,
        0xfffffffcfffffffe, 0x0000000300000005,
        0xfffffffdfffffffd, 0x0000000300000002,
    ],
    euler_exp: [
        0x000000007fffffff, 0x7fffffff80000000,
        0xffffffffffffffff, 0xffffffffffffffff,
        0xffffffffffffffff, 0x7fffffffffffffff,
    ],
    sqrt: SqrtAlgorithm::ThreeMod4 {
        exp: [
            0x0000000040000000, 0xbfffffffc0000000,
            0xffffffffffffffff, 0xffffffffffffffff,
            0xffffffffffffffff, 0x3fffffffffffffff,
        ],
    },
};

crate::prime_field!(
    /// An element of the P-384 base field, in Montgomery form.
    FieldElement,
    FP_PARAMS,
    6,
    48,
    96
);
crate::field_invert_via_pow!(FieldElement, FP_PARAMS);
crate::field_sqrt_via_params!(FieldElement, FP_PARAMS);
crate::field_element_trait_impl!(FieldElement);
