//! BLS12-381: tower fields, the G1/G2 groups, the optimal Ate pairing and
//! the target group Gt.

mod curve_constants;
mod fp;
mod fp12;
mod fp2;
mod fp6;
mod frobenius;
mod g1;
mod g2;
mod gt;
mod pairings;
mod scalar;

pub use fp::Fp;
pub use fp12::Fp12;
pub use fp2::Fp2;
pub use fp6::Fp6;
pub use g1::{Bls12381G1, G1Projective, G1_HASH_DST};
pub use g2::{Bls12381G2, G2Projective, G2_HASH_DST};
pub use gt::{Gt, GT_BYTES};
pub use pairings::{multi_miller_loop, multi_pairing, pairing, G2Prepared, MillerLoopResult};
pub use scalar::Scalar;

/// Domain-separation tag of the scalar hash derivation.
pub const SCALAR_DST: &[u8] = b"BLS12381_XMD:SHA-256_SSWU_RO_";

/// |x| for the BLS loop parameter x = −0xd201000000010000.
pub(crate) const BLS_X: u64 = 0xd201_0000_0001_0000;

/// Hash input bytes to a scalar: a 48-byte SHA-256 expansion interpreted
/// big-endian and reduced modulo r.
pub fn hash_to_scalar(input: &[u8]) -> Scalar {
    let xmd = crate::hash2curve::expand_message_xmd::<sha2::Sha256>(input, SCALAR_DST, 48);
    let mut wide = [0u8; 64];
    for (i, b) in xmd.iter().rev().enumerate() {
        wide[i] = *b;
    }
    Scalar::from_bytes_wide(&wide)
}

#[cfg(test)]
mod tests;
