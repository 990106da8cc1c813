//! Pallas scalar field GF(q) where q = 0x40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001 (the Vesta base field)

use crate::field::{FieldParams, SqrtAlgorithm};

pub(crate) const FQ_PARAMS: FieldParams<4> = FieldParams {
    modulus: [
        0x8c46eb2100000001, 0x224698fc0994a8dd,
        0x0000000000000000, 0x4000000000000000,
    ],
    mod_neg_inv: 0x8c46eb20ffffffff,
    r: [
        0x5b2b3e9cfffffffd, 0x992c350be3420567,
        0xffffffffffffffff, 0x3fffffffffffffff,
    ],
    r2: [
        0xfc9678ff0000000f, 0x67bb433d891a16e3,
        0x7fae231004ccf590, 0x096d41af7ccfdaa9,
    ],
    r3: [
        0x008b421c249dae4c, 0xe13bda50dba41326,
        0x88fececb8e15cb63, 0x07dd97a06e6792c8,
    ],
    euler_exp: [
        0xc623759080000000, 0x11234c7e04ca546e,
        0x0000000000000000, 0x2000000000000000,
    ],
    sqrt: SqrtAlgorithm::TonelliShanks {
        c1: 32,
        c3: [
            0x04ca546ec6237590, 0x0000000011234c7e,
            0x0000000000000000, 0x0000000020000000,
        ],
        c5: [
            0x54a5f72ff5173bb0, 0xdbc35db4cc60fe3a,
            0x78fcebcb28d885bb, 0x13337873e41bb745,
        ],
    },
};

crate::prime_field!(
    /// An element of the Pallas scalar field, in Montgomery form.
    Fq,
    FQ_PARAMS,
    4,
    32,
    64
);
crate::field_invert_via_pow!(Fq, FQ_PARAMS);
crate::field_sqrt_via_params!(Fq, FQ_PARAMS);
crate::field_element_trait_impl!(Fq);
