//! NIST P-256 scalar field GF(n) where n = 0xffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551

use crate::field::{FieldParams, SqrtAlgorithm};

pub(crate) const FQ_PARAMS: FieldParams<4> = FieldParams {
    modulus: [
        0xf3b9cac2fc632551, 0xbce6faada7179e84,
        0xffffffffffffffff, 0xffffffff00000000,
    ],
    mod_neg_inv: 0xccd1c8aaee00bc4f,
    r: [
        0x0c46353d039cdaaf, 0x4319055258e8617b,
        0x0000000000000000, 0x00000000ffffffff,
    ],
    r2: [
        0x83244c95be79eea2, 0x4699799c49bd6fa6,
        0x2845b2392b6bec59, 0x66e12d94f3d95620,
    ],
    r3: [
        0xac8ebec90b65a624, 0x111f28ae0c0555c9,
        0x2543b9246ba5e93f, 0x503a54e76407be65,
    ],
    euler_exp: [
        0x79dce5617e3192a8, 0xde737d56d38bcf42,
        0x7fffffffffffffff, 0x7fffffff80000000,
    ],
    sqrt: SqrtAlgorithm::TonelliShanks {
        c1: 4,
        c3: [
            0x279dce5617e3192a, 0xfde737d56d38bcf4,
            0x07ffffffffffffff, 0x07fffffff8000000,
        ],
        c5: [
            0x1015708f7e368fe1, 0x31c6c5456ecc4511,
            0x5281fe8998a19ea1, 0x0279089e10c63fe8,
        ],
    },
};

crate::prime_field!(
    /// An element of the P-256 scalar field, in Montgomery form.
    Scalar,
    FQ_PARAMS,
    4,
    32,
    64
);
crate::field_invert_via_pow!(Scalar, FQ_PARAMS);
crate::field_sqrt_via_params!(Scalar, FQ_PARAMS);
crate::field_element_trait_impl!(Scalar);
