//! Pallas base field GF(p) where p = 0x40000000000000000000000000000000224698fc094cf91b992d30ed00000001

use crate::field::{FieldParams, SqrtAlgorithm};

pub(crate) const FP_PARAMS: FieldParams<4> = FieldParams {
    modulus: [
        0x992d30ed00000001, 0x224698fc094cf91b,
        0x0000000000000000, 0x4000000000000000,
    ],
    mod_neg_inv: 0x992d30ecffffffff,
    r: [
        0x34786d38fffffffd, 0x992c350be41914ad,
        0xffffffffffffffff, 0x3fffffffffffffff,
    ],
    r2: [
        0x8c78ecb30000000f, 0xd7d30dbd8b0de0e7,
        0x7797a99bc3c95d18, 0x096d41af7b9cb714,
    ],
    r3: [
        0xf185a5993a9e10f9, 0xf6a68f3b6ac5b1d1,
        0xdf8d1014353fd42c, 0x2ae309222d2d9910,
    ],
    euler_exp: [
        0xcc96987680000000, 0x11234c7e04a67c8d,
        0x0000000000000000, 0x2000000000000000,
    ],
    sqrt: SqrtAlgorithm::TonelliShanks {
        c1: 32,
        c3: [
            0x04a67c8dcc969876, 0x0000000011234c7e,
            0x0000000000000000, 0x0000000020000000,
        ],
        c5: [
            0x40aaffa8d57740f7, 0x74bf83cac41a8472,
            0xa532c8b5e3be4108, 0x08e5dd0659472097,
        ],
    },
};

crate::prime_field!(
    /// An element of the Pallas base field, in Montgomery form.
    Fp,
    FP_PARAMS,
    4,
    32,
    64
);
crate::field_invert_via_pow!(Fp, FP_PARAMS);
crate::field_sqrt_via_params!(Fp, FP_PARAMS);
crate::field_element_trait_impl!(Fp);
