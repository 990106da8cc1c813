//! secp256k1 scalar field GF(n) where n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141

use crate::field::{FieldParams, SqrtAlgorithm};

pub(crate) const FQ_PARAMS: FieldParams<4> = FieldParams {
    modulus: [
        0xbfd25e8cd0364141, 0xbaaedce6af48a03b,
        0xfffffffffffffffe, 0xffffffffffffffff,
    ],
    mod_neg_inv: 0x4b0dff665588b13f,
    r: [
        0x402da1732fc9bebf, 0x4551231950b75fc4,
        0x0000000000000001, 0x0000000000000000,
    ],
    r2: [
        0x896cf21467d7d140, 0x741496c20e7cf878,
        0xe697f5e45bcd07c6, 0x9d671cd581c69bc5,
    ],
    r3: [
        0x7bc0cfe0e9ff41ed, 0x0017648444d4322c,
        0xb1b31347f1d0b2da, 0x555d800c18ef116d,
    ],
    euler_exp: [
        0xdfe92f46681b20a0, 0x5d576e7357a4501d,
        0xffffffffffffffff, 0x7fffffffffffffff,
    ],
    sqrt: SqrtAlgorithm::TonelliShanks {
        c1: 6,
        c3: [
            0x777fa4bd19a06c82, 0xfd755db9cd5e9140,
            0xffffffffffffffff, 0x01ffffffffffffff,
        ],
        c5: [
            0x944cf2a220910e04, 0x815c829c780589f4,
            0x55980b07bc222113, 0xc702b0d248825b36,
        ],
    },
};

crate::prime_field!(
    /// An element of the secp256k1 scalar field, in Montgomery form.
    Scalar,
    FQ_PARAMS,
    4,
    32,
    64
);
crate::field_invert_via_pow!(Scalar, FQ_PARAMS);
crate::field_sqrt_via_params!(Scalar, FQ_PARAMS);
crate::field_element_trait_impl!(Scalar);
