//! Ed25519 scalar field GF(l) where l = 2^252 + 27742317777372353535851937790883648493

use crate::field::{FieldParams, SqrtAlgorithm};

pub(crate) const FQ_PARAMS: FieldParams<4> = FieldParams {
    modulus: [
        0x5812631a5cf5d3ed, 0x14def9dea2f79cd6,
        0x0000000000000000, 0x1000000000000000,
    ],
    mod_neg_inv: 0xd2b51da312547e1b,
    r: [
        0xd6ec31748d98951d, 0xc6ef5bf4737dcf70,
        0xfffffffffffffffe, 0x0fffffffffffffff,
    ],
    r2: [
        0xa40611e3449c0f01, 0xd00e1ba768859347,
        0xceec73d217f5be65, 0x0399411b7c309a3d,
    ],
    r3: [
        0x2a9e49687b83a2db, 0x278324e6aef7f3ec,
        0x8065dc6c04ec5b65, 0x0e530b773599cec7,
    ],
    euler_exp: [
        0x2c09318d2e7ae9f6, 0x0a6f7cef517bce6b,
        0x0000000000000000, 0x0800000000000000,
    ],
    sqrt: SqrtAlgorithm::FiveMod8 {
        exp: [
            0xcb024c634b9eba7e, 0x029bdf3bd45ef39a,
            0x0000000000000000, 0x0200000000000000,
        ],
        sqrt_m1: [
            0x7c790e32b42f0e7d, 0x4c8ce706a7ae2cc8,
            0xd73823cc921779ad, 0x05599959893f562a,
        ],
    },
};

crate::prime_field!(
    /// An element of the Ed25519 scalar field, in Montgomery form.
    Scalar,
    FQ_PARAMS,
    4,
    32,
    64
);
crate::field_invert_via_pow!(Scalar, FQ_PARAMS);
crate::field_sqrt_via_params!(Scalar, FQ_PARAMS);
crate::field_element_trait_impl!(Scalar);
