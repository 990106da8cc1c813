//! The target group Gt: the r-th roots of unity inside Fp12.
//!
//! Gt is cyclic of prime order r, so it can wear either a point-shaped or
//! a scalar-shaped interface. The group law here is written additively —
//! `add` is Fp12 multiplication, `double` is squaring, scalar
//! multiplication is exponentiation — and the scalar-shaped adapter in the
//! facade delegates to these operations.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::fp::Fp;
use super::fp12::Fp12;
use super::fp2::Fp2;
use super::fp6::Fp6;
use super::g1::G1Projective;
use super::g2::G2Projective;
use super::pairings::pairing;
use super::scalar::Scalar;
use crate::error::{Error, Result};

/// Canonical byte width of a Gt element: twelve base-field elements.
pub const GT_BYTES: usize = 576;

/// An element of the order-r multiplicative subgroup of Fp12.
#[derive(Clone, Copy, Debug)]
pub struct Gt(pub(crate) Fp12);

impl Gt {
    /// The neutral element (one in Fp12).
    pub fn identity() -> Self {
        Self(Fp12::one())
    }

    /// The canonical generator e(G1, G2).
    pub fn generator() -> Self {
        pairing(&G1Projective::generator(), &G2Projective::generator())
    }

    /// True iff this is the neutral element.
    pub fn is_identity(&self) -> Choice {
        self.0.is_one()
    }

    /// Group "addition": multiplication in Fp12.
    pub fn add(&self, rhs: &Self) -> Self {
        Self(self.0.mul(&rhs.0))
    }

    /// Group "subtraction": division in Fp12 (the conjugate inverts
    /// elements of the cyclotomic subgroup).
    pub fn sub(&self, rhs: &Self) -> Self {
        Self(self.0.mul(&rhs.0.conjugate()))
    }

    /// Doubling: squaring in Fp12.
    pub fn double(&self) -> Self {
        Self(self.0.square())
    }

    /// Negation: the unitary inverse.
    pub fn neg(&self) -> Self {
        Self(self.0.conjugate())
    }

    /// Scalar multiplication: constant-time exponentiation by the scalar's
    /// canonical value.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        let bytes = scalar.to_bytes();
        let mut limbs = [0u64; 4];
        curvekit_internal::le_bytes_to_limbs(&bytes, &mut limbs);
        Self(self.0.pow(&limbs))
    }

    /// Multiplicative inverse in Fp12, exposed for the scalar adapter;
    /// fails on the zero element.
    pub fn invert(&self) -> Result<Self> {
        Option::<Fp12>::from(self.0.invert())
            .map(Self)
            .ok_or(Error::NotInverse)
    }

    /// Serialize as twelve 48-byte little-endian field elements.
    pub fn to_bytes(&self) -> [u8; GT_BYTES] {
        let mut out = [0u8; GT_BYTES];
        for (i, fp) in self.fp_components().iter().enumerate() {
            out[i * 48..(i + 1) * 48].copy_from_slice(&fp.to_bytes());
        }
        out
    }

    /// Parse the canonical encoding, rejecting out-of-range components.
    pub fn from_bytes(bytes: &[u8; GT_BYTES]) -> Result<Self> {
        let mut parts = [Fp::zero(); 12];
        let mut chunk = [0u8; 48];
        for (i, part) in parts.iter_mut().enumerate() {
            chunk.copy_from_slice(&bytes[i * 48..(i + 1) * 48]);
            *part =
                Option::<Fp>::from(Fp::from_bytes(&chunk)).ok_or(Error::InvalidEncoding)?;
        }
        Ok(Self(Fp12 {
            c0: Fp6 {
                c0: Fp2 {
                    c0: parts[0],
                    c1: parts[1],
                },
                c1: Fp2 {
                    c0: parts[2],
                    c1: parts[3],
                },
                c2: Fp2 {
                    c0: parts[4],
                    c1: parts[5],
                },
            },
            c1: Fp6 {
                c0: Fp2 {
                    c0: parts[6],
                    c1: parts[7],
                },
                c1: Fp2 {
                    c0: parts[8],
                    c1: parts[9],
                },
                c2: Fp2 {
                    c0: parts[10],
                    c1: parts[11],
                },
            },
        }))
    }

    fn fp_components(&self) -> [Fp; 12] {
        [
            self.0.c0.c0.c0,
            self.0.c0.c0.c1,
            self.0.c0.c1.c0,
            self.0.c0.c1.c1,
            self.0.c0.c2.c0,
            self.0.c0.c2.c1,
            self.0.c1.c0.c0,
            self.0.c1.c0.c1,
            self.0.c1.c1.c0,
            self.0.c1.c1.c1,
            self.0.c1.c2.c0,
            self.0.c1.c2.c1,
        ]
    }
}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl PartialEq for Gt {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Gt {}
