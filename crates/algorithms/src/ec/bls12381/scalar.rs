//! BLS12-381 scalar field GF(r) where r = 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001

use crate::field::{FieldParams, SqrtAlgorithm};

pub(crate) const FQ_PARAMS: FieldParams<4> = FieldParams {
    modulus: [
        0xffffffff00000001, 0x53bda402fffe5bfe,
        0x3339d80809a1d805, 0x73eda753299d7d48,
    ],
    mod_neg_inv: 0xfffffffeffffffff,
    r: [
        0x00000001fffffffe, 0x5884b7fa00034802,
        0x998c4fefecbc4ff5, 0x1824b159acc5056f,
    ],
    r2: [
        0xc999e990f3f29c6d, 0x2b6cedcb87925c23,
        0x05d314967254398f, 0x0748d9d99f59ff11,
    ],
    r3: [
        0xc62c1807439b73af, 0x1b3e0d188cf06990,
        0x73d13c71c7b5f418, 0x6e2a5bb9c8db33e9,
    ],
    euler_exp: [
        0x7fffffff80000000, 0xa9ded2017fff2dff,
        0x199cec0404d0ec02, 0x39f6d3a994cebea4,
    ],
    sqrt: SqrtAlgorithm::TonelliShanks {
        c1: 32,
        c3: [
            0x7fff2dff7fffffff, 0x04d0ec02a9ded201,
            0x94cebea4199cec04, 0x0000000039f6d3a9,
        ],
        c5: [
            0xb9b58d8c5f0e466a, 0x5b1b4c801819d7ec,
            0x0af53ae352a31e64, 0x5bf3adda19e9b27b,
        ],
    },
};

crate::prime_field!(
    /// An element of the BLS12-381 scalar field, in Montgomery form.
    Scalar,
    FQ_PARAMS,
    4,
    32,
    64
);
crate::field_invert_via_pow!(Scalar, FQ_PARAMS);
crate::field_sqrt_via_params!(Scalar, FQ_PARAMS);
crate::field_element_trait_impl!(Scalar);
