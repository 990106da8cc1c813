//! Ristretto255: the prime-order group over edwards25519.
//!
//! A Ristretto point is an Edwards point considered modulo the 4-torsion,
//! with its own canonical 32-byte encoding. Encoding, decoding and the
//! Elligator-based uniform map follow the curve25519-dalek formulation.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::ec::ed25519::{
    hash_to_scalar, sqrt_ratio, EdwardsPoint, FieldElement, Scalar, EDWARDS_D, SQRT_M1,
};
use crate::error::{Error, Result};
use sha2::{Digest, Sha512};

mod constants;

use constants::{D_MINUS_ONE_SQ, INVSQRT_A_MINUS_D, ONE_MINUS_D_SQ, SQRT_AD_MINUS_ONE};

/// An element of the Ristretto255 group.
#[derive(Clone, Copy, Debug)]
pub struct RistrettoPoint(pub(crate) EdwardsPoint);

/// 1/√v with a flag that is clear when v is a non-residue.
fn invsqrt(v: &FieldElement) -> (Choice, FieldElement) {
    sqrt_ratio(&FieldElement::one(), v)
}

impl RistrettoPoint {
    /// The neutral element.
    pub fn identity() -> Self {
        Self(EdwardsPoint::identity())
    }

    /// The canonical generator (the Edwards base point's coset).
    pub fn generator() -> Self {
        Self(EdwardsPoint::generator())
    }

    /// True iff this is the neutral element.
    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::identity())
    }

    /// Group addition.
    pub fn add(&self, rhs: &Self) -> Self {
        Self(self.0.add(&rhs.0))
    }

    /// Group subtraction.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self(self.0.sub(&rhs.0))
    }

    /// Doubling.
    pub fn double(&self) -> Self {
        Self(self.0.double())
    }

    /// Negation.
    pub fn neg(&self) -> Self {
        Self(self.0.neg())
    }

    /// Scalar multiplication.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        Self(self.0.mul(scalar))
    }

    /// Multi-scalar multiplication.
    pub fn sum_of_products(points: &[Self], scalars: &[Scalar]) -> Result<Self> {
        let inner: Vec<EdwardsPoint> = points.iter().map(|p| p.0).collect();
        EdwardsPoint::sum_of_products(&inner, scalars).map(Self)
    }

    /// Equality modulo the 4-torsion: X1Y2 = Y1X2 or Y1Y2 = X1X2.
    pub fn ct_eq(&self, rhs: &Self) -> Choice {
        let x1y2 = self.0.x.mul(&rhs.0.y);
        let y1x2 = self.0.y.mul(&rhs.0.x);
        let x1x2 = self.0.x.mul(&rhs.0.x);
        let y1y2 = self.0.y.mul(&rhs.0.y);
        x1y2.ct_eq(&y1x2) | x1x2.ct_eq(&y1y2)
    }

    /// The canonical 32-byte Ristretto encoding.
    pub fn encode(&self) -> [u8; 32] {
        let (x0, y0, z0, t0) = (self.0.x, self.0.y, self.0.z, self.0.t);

        let u1 = z0.add(&y0).mul(&z0.sub(&y0));
        let u2 = x0.mul(&y0);

        // 1 / sqrt(u1 * u2²); u1·u2² is square for any valid point.
        let (_, inv) = invsqrt(&u1.mul(&u2.square()));
        let i1 = inv.mul(&u1);
        let i2 = inv.mul(&u2);
        let z_inv = i1.mul(&i2).mul(&t0);

        let ix = x0.mul(&SQRT_M1);
        let iy = y0.mul(&SQRT_M1);
        let enchanted = i1.mul(&INVSQRT_A_MINUS_D);

        let rotate = t0.mul(&z_inv).sgn0();
        let x = FieldElement::conditional_select(&x0, &iy, rotate);
        let mut y = FieldElement::conditional_select(&y0, &ix, rotate);
        let den_inv = FieldElement::conditional_select(&i2, &enchanted, rotate);

        let y_neg = y.neg();
        y = FieldElement::conditional_select(&y, &y_neg, x.mul(&z_inv).sgn0());

        let mut s = den_inv.mul(&z0.sub(&y));
        let s_neg = s.neg();
        s = FieldElement::conditional_select(&s, &s_neg, s.sgn0());
        s.to_bytes()
    }

    /// Decode a canonical Ristretto encoding; non-canonical strings and
    /// invalid cosets are rejected.
    pub fn decode(bytes: &[u8; 32]) -> Result<Self> {
        let s = Option::<FieldElement>::from(FieldElement::from_bytes(bytes))
            .ok_or(Error::InvalidEncoding)?;
        if bool::from(s.sgn0()) {
            return Err(Error::InvalidEncoding);
        }

        let ss = s.square();
        let u1 = FieldElement::one().sub(&ss);
        let u2 = FieldElement::one().add(&ss);
        let u2_sqr = u2.square();

        // v = -(d·u1²) - u2²
        let v = EDWARDS_D.mul(&u1.square()).neg().sub(&u2_sqr);
        let (ok, inv) = invsqrt(&v.mul(&u2_sqr));

        let den_x = inv.mul(&u2);
        let den_y = inv.mul(&den_x).mul(&v);

        let mut x = s.double().mul(&den_x);
        let x_neg = x.neg();
        x = FieldElement::conditional_select(&x, &x_neg, x.sgn0());
        let y = u1.mul(&den_y);
        let t = x.mul(&y);

        if !bool::from(ok) || bool::from(t.sgn0()) || bool::from(y.is_zero()) {
            return Err(Error::InvalidEncoding);
        }
        Ok(Self(EdwardsPoint {
            x,
            y,
            z: FieldElement::one(),
            t,
        }))
    }

    /// Map 64 uniform bytes to a group element (two Elligator maps).
    pub fn from_uniform_bytes(bytes: &[u8; 64]) -> Self {
        let mut half = [0u8; 64];
        half[..32].copy_from_slice(&bytes[..32]);
        let r0 = FieldElement::from_bytes_wide(&half);
        let mut half = [0u8; 64];
        half[..32].copy_from_slice(&bytes[32..]);
        let r1 = FieldElement::from_bytes_wide(&half);
        elligator_ristretto_flavor(&r0).add(&elligator_ristretto_flavor(&r1))
    }

    /// Hash a message to the group via SHA-512 and the uniform map.
    pub fn hash_to_group(msg: &[u8]) -> Self {
        let digest = Sha512::digest(msg);
        let mut wide = [0u8; 64];
        wide.copy_from_slice(&digest);
        Self::from_uniform_bytes(&wide)
    }

    /// Hash a message to a scalar (SHA-512 wide reduction).
    pub fn hash_to_ristretto_scalar(msg: &[u8]) -> Scalar {
        hash_to_scalar(msg)
    }

    /// Affine Edwards coordinates of the internal representative.
    pub fn to_affine(&self) -> (FieldElement, FieldElement) {
        self.0.to_affine()
    }

    /// Wrap an Edwards point as its Ristretto coset.
    pub fn from_edwards(p: EdwardsPoint) -> Self {
        Self(p)
    }
}

impl PartialEq for RistrettoPoint {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for RistrettoPoint {}

/// The Elligator map in its Ristretto form.
fn elligator_ristretto_flavor(r0: &FieldElement) -> RistrettoPoint {
    let r = SQRT_M1.mul(&r0.square());
    let ns = r.add(&FieldElement::one()).mul(&ONE_MINUS_D_SQ);
    let mut c = FieldElement::one().neg();
    let d = c.sub(&r.mul(&EDWARDS_D)).mul(&r.add(&EDWARDS_D));

    let (ok, mut s) = sqrt_ratio(&ns, &d);
    let mut s_prime = s.mul(r0);
    // s' takes the negative root.
    let s_prime_neg = s_prime.neg();
    s_prime = FieldElement::conditional_select(&s_prime_neg, &s_prime, s_prime.sgn0());
    s = FieldElement::conditional_select(&s_prime, &s, ok);
    c = FieldElement::conditional_select(&r, &c, ok);

    let nt = c
        .mul(&r.sub(&FieldElement::one()))
        .mul(&D_MINUS_ONE_SQ)
        .sub(&d);
    let s_sq = s.square();

    let w0 = s.double().mul(&d);
    let w1 = nt.mul(&SQRT_AD_MINUS_ONE);
    let w2 = FieldElement::one().sub(&s_sq);
    let w3 = FieldElement::one().add(&s_sq);

    RistrettoPoint(EdwardsPoint {
        x: w0.mul(&w3),
        y: w2.mul(&w1),
        z: w1.mul(&w3),
        t: w0.mul(&w2),
    })
}

#[cfg(test)]
mod tests;
