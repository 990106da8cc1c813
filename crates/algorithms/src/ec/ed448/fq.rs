//! Ed448 scalar field GF(q) where q = 0x3fffffffffffffffffffffffffffffffffffffffffffffffffffffff7cca23e9c44edb49aed63690216cc2728dc58f552378c292ab5844f3

use crate::field::{FieldParams, SqrtAlgorithm};

pub(crate) const FQ_PARAMS: FieldParams<7> = FieldParams {
    modulus: [
        0x2378c292ab5844f3, 0x216cc2728dc58f55,
        0xc44edb49aed63690, 0xffffffff7cca23e9,
        0xffffffffffffffff, 0xffffffffffffffff,
        0x3fffffffffffffff,
    ],
    mod_neg_inv: 0x03bd440fae918bc5,
    r: [
        0x721cf5b5529eec34, 0x7a4cf635c8e9c2ab,
        0xeec492d944a725bf, 0x000000020cd77058,
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000,
    ],
    r2: [
        0xe3539257049b9b60, 0x7af32c4bc1b195d9,
        0x0d66de2388ea1859, 0xae17cf725ee4d838,
        0x1a9cc14ba3c47c44, 0x2052bcb7e4d070af,
        0x3402a939f823b729,
    ],
    r3: [
        0x62db79e25f9b74ed, 0x32d533584f61d636,
        0x3e0d0c8b5fa74964, 0x178769ed878dfcda,
        0xe4c71af86754b842, 0xed66e7f42bab736d,
        0x0d30a4f69d3af5f1,
    ],
    euler_exp: [
        0x91bc614955ac2279, 0x10b6613946e2c7aa,
        0xe2276da4d76b1b48, 0xffffffffbe6511f4,
        0xffffffffffffffff, 0xffffffffffffffff,
        0x1fffffffffffffff,
    ],
    sqrt: SqrtAlgorithm::ThreeMod4 {
        exp: [
            0x48de30a4aad6113d, 0x085b309ca37163d5,
            0x7113b6d26bb58da4, 0xffffffffdf3288fa,
            0xffffffffffffffff, 0xffffffffffffffff,
            0x0fffffffffffffff,
        ],
    },
};

crate::prime_field!(
    /// An element of the Ed448 scalar field, in Montgomery form.
    Fq,
    FQ_PARAMS,
    7,
    56,
    112
);
crate::field_invert_via_pow!(Fq, FQ_PARAMS);
crate::field_sqrt_via_params!(Fq, FQ_PARAMS);
crate::field_element_trait_impl!(Fq);
