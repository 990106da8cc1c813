//! NIST P-256 base field GF(p) where p = 0xffffffff00000001000000000000000000000000ffffffffffffffffffffffff

use crate::field::{FieldParams, SqrtAlgorithm};

pub(crate) const FP_PARAMS: FieldParams<4> = FieldParams {
    modulus: [
        0xffffffffffffffff, 0x00000000ffffffff,
        0x0000000000000000, 0xffffffff00000001,
    ],
    mod_neg_inv: 0x0000000000000001,
    r: [
        0x0000000000000001, 0xffffffff00000000,
        0xffffffffffffffff, 0x00000000fffffffe,
    ],
    r2: [
        0x0000000000000003, 0xfffffffbffffffff,
        0xfffffffffffffffe, 0x00000004fffffffd,
    ],
    r3: [
        0xfffffffd0000000a, 0xffffffedfffffff7,
        0x00000005fffffffc, 0x0000001800000001,
    ],
    euler_exp: [
        0xffffffffffffffff, 0x000000007fffffff,
        0x8000000000000000, 0x7fffffff80000000,
    ],
    sqrt: SqrtAlgorithm::ThreeMod4 {
        exp: [
            0x0000000000000000, 0x0000000040000000,
            0x4000000000000000, 0x3fffffffc0000000,
        ],
    },
};

crate::prime_field!(
    /// An element of the P-256 base field, in Montgomery form.
    FieldElement,
    FP_PARAMS,
    4,
    32,
    64
);
crate::field_invert_via_pow!(FieldElement, FP_PARAMS);
crate::field_sqrt_via_params!(FieldElement, FP_PARAMS);
crate::field_element_trait_impl!(FieldElement);
