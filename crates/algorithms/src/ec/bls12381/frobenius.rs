//! Frobenius coefficients of the Fp6/Fp12 tower: powers of the sextic
//! non-residue u + 1.

use super::fp::Fp;
use super::fp2::Fp2;

/// (u + 1)^((p − 1) / 3).
pub(crate) const FROBENIUS_COEFF_FP6_C1: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
            ]),
        c1: Fp::from_raw_unchecked([
                0xcd03c9e48671f071, 0x5dab22461fcda5d2,
                0x587042afd3851b95, 0x8eb60ebe01bacb9e,
                0x03f97d6e83d050d2, 0x18f0206554638741,
            ]),
    };

/// (u + 1)^(2(p − 1) / 3).
pub(crate) const FROBENIUS_COEFF_FP6_C2: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
                0x890dc9e4867545c3, 0x2af322533285a5d5,
                0x50880866309b7e2c, 0xa20d1b8c7e881024,
                0x14e4f04fe2db9068, 0x14e56d3f1564853a,
            ]),
        c1: Fp::from_raw_unchecked([
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
            ]),
    };

/// (u + 1)^((p − 1) / 6).
pub(crate) const FROBENIUS_COEFF_FP12_C1: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
                0x07089552b319d465, 0xc6695f92b50a8313,
                0x97e83cccd117228f, 0xa35baecab2dc29ee,
                0x1ce393ea5daace4d, 0x08f2220fb0fb66eb,
            ]),
        c1: Fp::from_raw_unchecked([
                0xb2f66aad4ce5d646, 0x5842a06bfc497cec,
                0xcf4895d42599d394, 0xc11b9cba40a8e8d0,
                0x2e3813cbe5a0de89, 0x110eefda88847faf,
            ]),
    };
