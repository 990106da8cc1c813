//! Precomputed constants for the Ristretto encoding and Elligator map.

use crate::ec::ed25519::FieldElement;

/// 1 − d².
pub(crate) const ONE_MINUS_D_SQ: FieldElement = FieldElement::from_raw_unchecked([
            0x9e6972bc0636b784, 0x9b3dee6e7bfbe05b,
            0xcc1182ea44c13bde, 0x6171050a86b36000,
        ]);

/// (d − 1)².
pub(crate) const D_MINUS_ONE_SQ: FieldElement = FieldElement::from_raw_unchecked([
            0x5fbb75463b3974ae, 0x437f02a22477ccbd,
            0x68c75906430db701, 0x458aa440940d15b1,
        ]);

/// 1/√(a − d) with a = −1.
pub(crate) const INVSQRT_A_MINUS_D: FieldElement = FieldElement::from_raw_unchecked([
            0xd3d5a74f0dd7a555, 0x54fd477765b7084a,
            0x60de57abb4461997, 0x601c56dcd41f800f,
        ]);

/// √(ad − 1) with a = −1.
pub(crate) const SQRT_AD_MINUS_ONE: FieldElement = FieldElement::from_raw_unchecked([
            0xca8e9bcae848d932, 0x116315cc13dc9420,
            0x430d85dd6a7d2ba8, 0x399d6260757cc98a,
        ]);
