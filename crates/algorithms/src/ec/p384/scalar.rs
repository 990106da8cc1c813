//! NIST P-384 scalar field GF(n) where n = 0xffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973

use crate::field::{FieldParams, SqrtAlgorithm};

pub(crate) const FQ_PARAMS: FieldParams<6> = FieldParams {
    modulus: [
        0xecec196accc52973, 0x581a0db248b0a77a,
        0xc7634d81f4372ddf, 0xffffffffffffffff,
        0xffffffffffffffff, 0xffffffffffffffff,
    ],
    mod_neg_inv: 0x6ed46089e88fdc45,
    r: [
        0x1313e695333ad68d, 0xa7e5f24db74f5885,
        0x389cb27e0bc8d220, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
    ],
    r2: [
        0x2d319b2419b409a9, 0xff3d81e5df1aa419,
        0xbc3e483afcb82947, 0xd40d49174aab1cc5,
        0x3fb05b7a28266895, 0x0c84ee012b39bf21,
    ],
    r3: [
        0x302a6faf377c7677, 0x2a70cb61d26894bc,
        0x0c27ddb8ba8dc4ba, 0x5dbd3f41edb48eb6,
        0x16d081679522617b, 0xd558bfbcb33c33c6,
    ],
    euler_exp: [
        0x76760cb5666294b9, 0xac0d06d9245853bd,
        0xe3b1a6c0fa1b96ef, 0xffffffffffffffff,
        0xffffffffffffffff, 0x7fffffffffffffff,
    ],
    sqrt: SqrtAlgorithm::ThreeMod4 {
        exp: [
            0xbb3b065ab3314a5d, 0xd606836c922c29de,
            0xf1d8d3607d0dcb77, 0xffffffffffffffff,
            0xffffffffffffffff, 0x3fffffffffffffff,
        ],
    },
};

crate::prime_field!(
    /// An element of the P-384 scalar field, in Montgomery form.
    Scalar,
    FQ_PARAMS,
    6,
    48,
    96
);
crate::field_invert_via_pow!(Scalar, FQ_PARAMS);
crate::field_sqrt_via_params!(Scalar, FQ_PARAMS);
crate::field_element_trait_impl!(Scalar);
