//! The uniform point: one enum variant per curve.
//!
//! Group operations dispatch to the curve engines; byte-level forms follow
//! each curve's historical wire layout. Mixing curves in a binary
//! operation is a typed error.

use rand_core::RngCore;
use subtle::{Choice, ConstantTimeEq};

use curvekit_algorithms::ec::bls12381::{self, G1Projective, G2Projective, Gt};
use curvekit_algorithms::ec::ed25519::EdwardsPoint as Ed25519Point;
use curvekit_algorithms::ec::ed448::{self, EdwardsPoint as Ed448Point};
use curvekit_algorithms::ec::ristretto255::RistrettoPoint;
use curvekit_algorithms::ec::{ed25519, k256, p256, p384, pasta};
use curvekit_algorithms::error::expect_len;
use curvekit_algorithms::field::PrimeFieldElement;
use curvekit_algorithms::hash2curve::PointHasher;

use crate::curve::CurveId;
use crate::scalar::{Bls12381Group, GtScalar, Scalar};
use crate::{Error, Result};

/// A point of one of the supported groups.
#[derive(Clone, Copy, Debug)]
pub enum Point {
    /// secp256k1.
    Secp256k1(k256::ProjectivePoint),
    /// NIST P-256.
    P256(p256::ProjectivePoint),
    /// NIST P-384.
    P384(p384::ProjectivePoint),
    /// BLS12-381 G1.
    Bls12381G1(G1Projective),
    /// BLS12-381 G2.
    Bls12381G2(G2Projective),
    /// BLS12-381 Gt, point-shaped.
    Bls12381Gt(Gt),
    /// Ed25519.
    Ed25519(Ed25519Point),
    /// Ristretto255.
    Ristretto25519(RistrettoPoint),
    /// Ed448.
    Ed448(Ed448Point),
    /// Pallas.
    Pallas(pasta::ProjectivePoint),
}

impl Point {
    /// The group this point belongs to.
    pub fn curve_id(&self) -> CurveId {
        match self {
            Point::Secp256k1(_) => CurveId::Secp256k1,
            Point::P256(_) => CurveId::P256,
            Point::P384(_) => CurveId::P384,
            Point::Bls12381G1(_) => CurveId::Bls12381G1,
            Point::Bls12381G2(_) => CurveId::Bls12381G2,
            Point::Bls12381Gt(_) => CurveId::Bls12381Gt,
            Point::Ed25519(_) => CurveId::Ed25519,
            Point::Ristretto25519(_) => CurveId::Ristretto25519,
            Point::Ed448(_) => CurveId::Ed448,
            Point::Pallas(_) => CurveId::Pallas,
        }
    }

    /// The envelope name of this point's curve.
    pub fn curve_name(&self) -> &'static str {
        self.curve_id().name()
    }

    /// The identity element.
    pub fn identity(id: CurveId) -> Point {
        match id {
            CurveId::Secp256k1 => Point::Secp256k1(k256::ProjectivePoint::identity()),
            CurveId::P256 => Point::P256(p256::ProjectivePoint::identity()),
            CurveId::P384 => Point::P384(p384::ProjectivePoint::identity()),
            CurveId::Bls12381G1 => Point::Bls12381G1(G1Projective::identity()),
            CurveId::Bls12381G2 => Point::Bls12381G2(G2Projective::identity()),
            CurveId::Bls12381Gt => Point::Bls12381Gt(Gt::identity()),
            CurveId::Ed25519 => Point::Ed25519(Ed25519Point::identity()),
            CurveId::Ristretto25519 => Point::Ristretto25519(RistrettoPoint::identity()),
            CurveId::Ed448 => Point::Ed448(Ed448Point::identity()),
            CurveId::Pallas => Point::Pallas(pasta::ProjectivePoint::identity()),
        }
    }

    /// The group generator (for Gt, e(G1, G2)).
    pub fn generator(id: CurveId) -> Point {
        match id {
            CurveId::Secp256k1 => Point::Secp256k1(k256::ProjectivePoint::generator()),
            CurveId::P256 => Point::P256(p256::ProjectivePoint::generator()),
            CurveId::P384 => Point::P384(p384::ProjectivePoint::generator()),
            CurveId::Bls12381G1 => Point::Bls12381G1(G1Projective::generator()),
            CurveId::Bls12381G2 => Point::Bls12381G2(G2Projective::generator()),
            CurveId::Bls12381Gt => Point::Bls12381Gt(Gt::generator()),
            CurveId::Ed25519 => Point::Ed25519(Ed25519Point::generator()),
            CurveId::Ristretto25519 => Point::Ristretto25519(RistrettoPoint::generator()),
            CurveId::Ed448 => Point::Ed448(Ed448Point::generator()),
            CurveId::Pallas => Point::Pallas(pasta::ProjectivePoint::generator()),
        }
    }

    /// A random point: twice the field width of seed bytes, hashed to the
    /// curve. Short reads surface [`Error::InsufficientEntropy`].
    pub fn random(id: CurveId, rng: &mut dyn RngCore) -> Result<Point> {
        let seed_len = match id {
            CurveId::P384 | CurveId::Bls12381G1 => 96,
            CurveId::Bls12381G2 => 192,
            CurveId::Ed448 => 112,
            _ => 64,
        };
        let mut seed = vec![0u8; seed_len];
        rng.try_fill_bytes(&mut seed)
            .map_err(|_| Error::InsufficientEntropy)?;
        Ok(Point::hash(id, &seed))
    }

    /// Hash bytes to the group with the curve's default random-oracle
    /// suite.
    pub fn hash(id: CurveId, input: &[u8]) -> Point {
        match id {
            CurveId::Secp256k1 => {
                let dst = k256::hash_dst(&k256::DEFAULT_HASHER);
                Point::Secp256k1(k256::hash_to_curve(input, &k256::DEFAULT_HASHER, &dst))
            }
            CurveId::P256 => {
                let dst = p256::hash_dst(&p256::DEFAULT_HASHER);
                Point::P256(p256::hash_to_curve(input, &p256::DEFAULT_HASHER, &dst))
            }
            CurveId::P384 => {
                let dst = p384::hash_dst(&p384::DEFAULT_HASHER);
                Point::P384(p384::hash_to_curve(input, &p384::DEFAULT_HASHER, &dst))
            }
            CurveId::Bls12381G1 => Point::Bls12381G1(G1Projective::hash_to_curve(
                input,
                &PointHasher::Sha256,
                bls12381::G1_HASH_DST,
            )),
            CurveId::Bls12381G2 => Point::Bls12381G2(G2Projective::hash_to_curve(
                input,
                &PointHasher::Sha256,
                bls12381::G2_HASH_DST,
            )),
            CurveId::Bls12381Gt => {
                let p = G1Projective::hash_to_curve(
                    input,
                    &PointHasher::Sha256,
                    bls12381::G1_HASH_DST,
                );
                Point::Bls12381Gt(bls12381::pairing(&p, &G2Projective::generator()))
            }
            CurveId::Ed25519 => {
                Point::Ed25519(Ed25519Point::hash_to_curve(input, ed25519::HASH_DST))
            }
            CurveId::Ristretto25519 => {
                Point::Ristretto25519(RistrettoPoint::hash_to_group(input))
            }
            CurveId::Ed448 => Point::Ed448(Ed448Point::hash_to_curve(input, ed448::HASH_DST)),
            CurveId::Pallas => {
                let dst = pasta::hash_dst(&pasta::DEFAULT_HASHER);
                Point::Pallas(pasta::hash_to_curve(input, &pasta::DEFAULT_HASHER, &dst))
            }
        }
    }

    /// True iff this is the identity element.
    pub fn is_identity(&self) -> bool {
        bool::from(match self {
            Point::Secp256k1(p) => p.is_identity(),
            Point::P256(p) => p.is_identity(),
            Point::P384(p) => p.is_identity(),
            Point::Bls12381G1(p) => p.is_identity(),
            Point::Bls12381G2(p) => p.is_identity(),
            Point::Bls12381Gt(p) => p.is_identity(),
            Point::Ed25519(p) => p.is_identity(),
            Point::Ristretto25519(p) => p.is_identity(),
            Point::Ed448(p) => p.is_identity(),
            Point::Pallas(p) => p.is_identity(),
        })
    }

    /// Sign of the y-coordinate where the curve defines one.
    ///
    /// Short-Weierstrass curves report the parity of canonical y; the
    /// BLS12-381 groups report the ZCash sort flag; the Edwards family and
    /// Gt have no negative points.
    pub fn is_negative(&self) -> bool {
        match self {
            Point::Secp256k1(p) => bool::from(p.to_affine().1.sgn0()),
            Point::P256(p) => bool::from(p.to_affine().1.sgn0()),
            Point::P384(p) => bool::from(p.to_affine().1.sgn0()),
            Point::Pallas(p) => bool::from(p.to_affine().1.sgn0()),
            Point::Bls12381G1(p) => bool::from(p.y_is_lexicographically_largest()),
            Point::Bls12381G2(p) => bool::from(p.y_is_lexicographically_largest()),
            Point::Bls12381Gt(_)
            | Point::Ed25519(_)
            | Point::Ristretto25519(_)
            | Point::Ed448(_) => false,
        }
    }

    /// True iff the point satisfies its curve equation (vacuously true for
    /// Ristretto and Gt, whose representations are closed).
    pub fn is_on_curve(&self) -> bool {
        bool::from(match self {
            Point::Secp256k1(p) => p.is_on_curve(),
            Point::P256(p) => p.is_on_curve(),
            Point::P384(p) => p.is_on_curve(),
            Point::Bls12381G1(p) => p.is_on_curve(),
            Point::Bls12381G2(p) => p.is_on_curve(),
            Point::Bls12381Gt(_) => Choice::from(1),
            Point::Ed25519(p) => p.is_on_curve(),
            Point::Ristretto25519(_) => Choice::from(1),
            Point::Ed448(p) => p.is_on_curve(),
            Point::Pallas(p) => p.is_on_curve(),
        })
    }

    /// Doubling.
    pub fn double(&self) -> Point {
        match self {
            Point::Secp256k1(p) => Point::Secp256k1(p.double()),
            Point::P256(p) => Point::P256(p.double()),
            Point::P384(p) => Point::P384(p.double()),
            Point::Bls12381G1(p) => Point::Bls12381G1(p.double()),
            Point::Bls12381G2(p) => Point::Bls12381G2(p.double()),
            Point::Bls12381Gt(p) => Point::Bls12381Gt(p.double()),
            Point::Ed25519(p) => Point::Ed25519(p.double()),
            Point::Ristretto25519(p) => Point::Ristretto25519(p.double()),
            Point::Ed448(p) => Point::Ed448(p.double()),
            Point::Pallas(p) => Point::Pallas(p.double()),
        }
    }

    /// Negation.
    pub fn neg(&self) -> Point {
        match self {
            Point::Secp256k1(p) => Point::Secp256k1(p.neg()),
            Point::P256(p) => Point::P256(p.neg()),
            Point::P384(p) => Point::P384(p.neg()),
            Point::Bls12381G1(p) => Point::Bls12381G1(p.neg()),
            Point::Bls12381G2(p) => Point::Bls12381G2(p.neg()),
            Point::Bls12381Gt(p) => Point::Bls12381Gt(p.neg()),
            Point::Ed25519(p) => Point::Ed25519(p.neg()),
            Point::Ristretto25519(p) => Point::Ristretto25519(p.neg()),
            Point::Ed448(p) => Point::Ed448(p.neg()),
            Point::Pallas(p) => Point::Pallas(p.neg()),
        }
    }

    /// Addition of two points of the same group.
    pub fn add(&self, rhs: &Point) -> Result<Point> {
        match (self, rhs) {
            (Point::Secp256k1(a), Point::Secp256k1(b)) => Ok(Point::Secp256k1(a.add(b))),
            (Point::P256(a), Point::P256(b)) => Ok(Point::P256(a.add(b))),
            (Point::P384(a), Point::P384(b)) => Ok(Point::P384(a.add(b))),
            (Point::Bls12381G1(a), Point::Bls12381G1(b)) => Ok(Point::Bls12381G1(a.add(b))),
            (Point::Bls12381G2(a), Point::Bls12381G2(b)) => Ok(Point::Bls12381G2(a.add(b))),
            (Point::Bls12381Gt(a), Point::Bls12381Gt(b)) => Ok(Point::Bls12381Gt(a.add(b))),
            (Point::Ed25519(a), Point::Ed25519(b)) => Ok(Point::Ed25519(a.add(b))),
            (Point::Ristretto25519(a), Point::Ristretto25519(b)) => {
                Ok(Point::Ristretto25519(a.add(b)))
            }
            (Point::Ed448(a), Point::Ed448(b)) => Ok(Point::Ed448(a.add(b))),
            (Point::Pallas(a), Point::Pallas(b)) => Ok(Point::Pallas(a.add(b))),
            _ => Err(Error::InvalidType),
        }
    }

    /// Subtraction of two points of the same group.
    pub fn sub(&self, rhs: &Point) -> Result<Point> {
        self.add(&rhs.neg())
    }

    /// Scalar multiplication; the scalar must belong to this point's
    /// curve. A Gt point multiplied by a BLS12-381 scalar exponentiates.
    pub fn mul(&self, scalar: &Scalar) -> Result<Point> {
        match (self, scalar) {
            (Point::Secp256k1(p), Scalar::Secp256k1(s)) => {
                Ok(Point::Secp256k1(p.mul(&s.to_bytes())?))
            }
            (Point::P256(p), Scalar::P256(s)) => Ok(Point::P256(p.mul(&s.to_bytes())?)),
            (Point::P384(p), Scalar::P384(s)) => Ok(Point::P384(p.mul(&s.to_bytes())?)),
            (Point::Bls12381G1(p), Scalar::Bls12381(s)) => {
                Ok(Point::Bls12381G1(p.mul(&s.value.to_bytes())?))
            }
            (Point::Bls12381G2(p), Scalar::Bls12381(s)) => {
                Ok(Point::Bls12381G2(p.mul(&s.value.to_bytes())?))
            }
            (Point::Bls12381Gt(p), Scalar::Bls12381(s)) => {
                Ok(Point::Bls12381Gt(p.mul(&s.value)))
            }
            (Point::Ed25519(p), Scalar::Ed25519(s)) => Ok(Point::Ed25519(p.mul(s))),
            (Point::Ristretto25519(p), Scalar::Ristretto25519(s)) => {
                Ok(Point::Ristretto25519(p.mul(s)))
            }
            (Point::Ed448(p), Scalar::Ed448(s)) => Ok(Point::Ed448(p.mul(s))),
            (Point::Pallas(p), Scalar::Pallas(s)) => Ok(Point::Pallas(p.mul(&s.to_bytes())?)),
            _ => Err(Error::InvalidType),
        }
    }

    /// Constant-time equality within a group; points of different groups
    /// compare unequal.
    pub fn equal(&self, rhs: &Point) -> bool {
        bool::from(match (self, rhs) {
            (Point::Secp256k1(a), Point::Secp256k1(b)) => a.ct_eq(b),
            (Point::P256(a), Point::P256(b)) => a.ct_eq(b),
            (Point::P384(a), Point::P384(b)) => a.ct_eq(b),
            (Point::Bls12381G1(a), Point::Bls12381G1(b)) => a.ct_eq(b),
            (Point::Bls12381G2(a), Point::Bls12381G2(b)) => a.ct_eq(b),
            (Point::Bls12381Gt(a), Point::Bls12381Gt(b)) => a.ct_eq(b),
            (Point::Ed25519(a), Point::Ed25519(b)) => a.ct_eq(b),
            (Point::Ristretto25519(a), Point::Ristretto25519(b)) => a.ct_eq(b),
            (Point::Ed448(a), Point::Ed448(b)) => a.ct_eq(b),
            (Point::Pallas(a), Point::Pallas(b)) => a.ct_eq(b),
            _ => Choice::from(0),
        })
    }

    /// The zero scalar of this point's curve.
    pub fn scalar(&self) -> Scalar {
        match self {
            Point::Bls12381G1(_) => Scalar::bls12381_zero(Bls12381Group::G1),
            Point::Bls12381G2(_) => Scalar::bls12381_zero(Bls12381Group::G2),
            Point::Bls12381Gt(_) => Scalar::bls12381_zero(Bls12381Group::G1),
            _ => Scalar::zero(self.curve_id()),
        }
    }

    /// Build a point from big-endian affine coordinates; the all-zero
    /// pair is the identity for the Weierstrass and Edwards curves.
    pub fn set(id: CurveId, x: &[u8], y: &[u8]) -> Result<Point> {
        match id {
            CurveId::Secp256k1 => {
                let (x, y) = (reduce_be::<64, _>(x, k256::FieldElement::from_bytes_wide)?,
                              reduce_be::<64, _>(y, k256::FieldElement::from_bytes_wide)?);
                Ok(Point::Secp256k1(k256::ProjectivePoint::from_affine_coordinates(x, y)?))
            }
            CurveId::P256 => {
                let (x, y) = (reduce_be::<64, _>(x, p256::FieldElement::from_bytes_wide)?,
                              reduce_be::<64, _>(y, p256::FieldElement::from_bytes_wide)?);
                Ok(Point::P256(p256::ProjectivePoint::from_affine_coordinates(x, y)?))
            }
            CurveId::P384 => {
                let (x, y) = (reduce_be::<96, _>(x, p384::FieldElement::from_bytes_wide)?,
                              reduce_be::<96, _>(y, p384::FieldElement::from_bytes_wide)?);
                Ok(Point::P384(p384::ProjectivePoint::from_affine_coordinates(x, y)?))
            }
            CurveId::Pallas => {
                let (x, y) = (reduce_be::<64, _>(x, pasta::Fp::from_bytes_wide)?,
                              reduce_be::<64, _>(y, pasta::Fp::from_bytes_wide)?);
                Ok(Point::Pallas(pasta::ProjectivePoint::from_affine_coordinates(x, y)?))
            }
            CurveId::Bls12381G1 => {
                let (x, y) = (reduce_be::<96, _>(x, bls12381::Fp::from_bytes_wide)?,
                              reduce_be::<96, _>(y, bls12381::Fp::from_bytes_wide)?);
                let p = G1Projective::from_affine_coordinates(x, y)?;
                if bool::from(p.is_identity()) || bool::from(p.is_torsion_free()) {
                    Ok(Point::Bls12381G1(p))
                } else {
                    Err(Error::InvalidCoordinates)
                }
            }
            CurveId::Bls12381G2 => {
                let x = fp2_from_be(x)?;
                let y = fp2_from_be(y)?;
                let p = G2Projective::from_affine_coordinates(x, y)?;
                if bool::from(p.is_identity()) || bool::from(p.is_torsion_free()) {
                    Ok(Point::Bls12381G2(p))
                } else {
                    Err(Error::InvalidCoordinates)
                }
            }
            CurveId::Ed25519 => {
                let (x, y) = (reduce_be::<64, _>(x, ed25519::FieldElement::from_bytes_wide)?,
                              reduce_be::<64, _>(y, ed25519::FieldElement::from_bytes_wide)?);
                Ok(Point::Ed25519(Ed25519Point::from_affine(x, y)?))
            }
            CurveId::Ristretto25519 => {
                let (x, y) = (reduce_be::<64, _>(x, ed25519::FieldElement::from_bytes_wide)?,
                              reduce_be::<64, _>(y, ed25519::FieldElement::from_bytes_wide)?);
                let inner = Ed25519Point::from_affine(x, y)?;
                Ok(Point::Ristretto25519(RistrettoPoint::from_edwards(inner)))
            }
            CurveId::Ed448 => {
                let (x, y) = (reduce_be::<112, _>(x, ed448::Fp::from_bytes_wide)?,
                              reduce_be::<112, _>(y, ed448::Fp::from_bytes_wide)?);
                Ok(Point::Ed448(Ed448Point::from_affine(x, y)?))
            }
            CurveId::Bls12381Gt => Err(Error::InvalidCoordinates),
        }
    }

    /// The compressed byte form of this point.
    pub fn to_affine_compressed(&self) -> Vec<u8> {
        match self {
            Point::Secp256k1(p) => sign_be_compress::<32, _>(p.to_affine()),
            Point::P256(p) => sign_be_compress::<32, _>(p.to_affine()),
            Point::P384(p) => sign_be_compress::<48, _>(p.to_affine()),
            Point::Bls12381G1(p) => p.to_compressed().to_vec(),
            Point::Bls12381G2(p) => p.to_compressed().to_vec(),
            Point::Bls12381Gt(p) => p.to_bytes().to_vec(),
            Point::Ed25519(p) => p.compress().to_vec(),
            Point::Ristretto25519(p) => p.encode().to_vec(),
            Point::Ed448(p) => p.compress().to_vec(),
            Point::Pallas(p) => {
                // x little-endian with the sign of y in the top bit; the
                // identity is all zeros.
                let (x, y) = p.to_affine();
                let mut out = x.to_bytes();
                out[31] |= y.sgn0().unwrap_u8() << 7;
                if bool::from(p.is_identity()) {
                    out = [0u8; 32];
                }
                out.to_vec()
            }
        }
    }

    /// The uncompressed byte form of this point.
    pub fn to_affine_uncompressed(&self) -> Vec<u8> {
        match self {
            Point::Secp256k1(p) => sec1_uncompressed::<32, _>(p.to_affine()),
            Point::P256(p) => sec1_uncompressed::<32, _>(p.to_affine()),
            Point::P384(p) => sec1_uncompressed::<48, _>(p.to_affine()),
            Point::Bls12381G1(p) => p.to_uncompressed().to_vec(),
            Point::Bls12381G2(p) => p.to_uncompressed().to_vec(),
            Point::Bls12381Gt(p) => p.to_bytes().to_vec(),
            Point::Ed25519(p) => {
                let (x, y) = p.to_affine();
                let mut out = vec![0u8; 64];
                out[..32].copy_from_slice(&x.to_bytes());
                out[32..].copy_from_slice(&y.to_bytes());
                out
            }
            Point::Ristretto25519(p) => {
                let (x, y) = p.to_affine();
                let mut out = vec![0u8; 64];
                out[..32].copy_from_slice(&x.to_bytes());
                out[32..].copy_from_slice(&y.to_bytes());
                out
            }
            Point::Ed448(p) => {
                let (x, y) = p.to_affine();
                let mut out = vec![0u8; 112];
                out[..56].copy_from_slice(&x.to_bytes());
                out[56..].copy_from_slice(&y.to_bytes());
                out
            }
            Point::Pallas(p) => {
                let (x, y) = p.to_affine();
                let mut out = vec![0u8; 64];
                out[..32].copy_from_slice(&x.to_bytes());
                out[32..].copy_from_slice(&y.to_bytes());
                out
            }
        }
    }

    /// Decode a compressed point.
    pub fn from_affine_compressed(id: CurveId, bytes: &[u8]) -> Result<Point> {
        expect_len("compressed point", bytes.len(), id.compressed_point_bytes())?;
        match id {
            CurveId::Secp256k1 => Ok(Point::Secp256k1(sign_be_decompress(bytes)?)),
            CurveId::P256 => Ok(Point::P256(sign_be_decompress(bytes)?)),
            CurveId::P384 => Ok(Point::P384(sign_be_decompress(bytes)?)),
            CurveId::Bls12381G1 => Ok(Point::Bls12381G1(G1Projective::from_compressed(
                &fixed::<48>(bytes),
            )?)),
            CurveId::Bls12381G2 => Ok(Point::Bls12381G2(G2Projective::from_compressed(
                &fixed::<96>(bytes),
            )?)),
            CurveId::Bls12381Gt => Ok(Point::Bls12381Gt(Gt::from_bytes(&fixed::<576>(bytes))?)),
            CurveId::Ed25519 => Ok(Point::Ed25519(Ed25519Point::decompress(&fixed::<32>(
                bytes,
            ))?)),
            CurveId::Ristretto25519 => Ok(Point::Ristretto25519(RistrettoPoint::decode(
                &fixed::<32>(bytes),
            )?)),
            CurveId::Ed448 => Ok(Point::Ed448(Ed448Point::decompress(&fixed::<57>(bytes))?)),
            CurveId::Pallas => {
                let mut x_bytes = fixed::<32>(bytes);
                let sign = Choice::from(x_bytes[31] >> 7);
                x_bytes[31] &= 0x7f;
                let x = Option::<pasta::Fp>::from(pasta::Fp::from_bytes(&x_bytes))
                    .ok_or(Error::InvalidEncoding)?;
                let p = Option::<pasta::ProjectivePoint>::from(
                    pasta::ProjectivePoint::from_x_and_sign(x, sign),
                )
                .ok_or(Error::InvalidEncoding)?;
                if bool::from(p.is_on_curve()) {
                    Ok(Point::Pallas(p))
                } else {
                    Err(Error::InvalidEncoding)
                }
            }
        }
    }

    /// Decode an uncompressed point.
    pub fn from_affine_uncompressed(id: CurveId, bytes: &[u8]) -> Result<Point> {
        match id {
            CurveId::Secp256k1 => Ok(Point::Secp256k1(sec1_parse_uncompressed::<32, _>(bytes)?)),
            CurveId::P256 => Ok(Point::P256(sec1_parse_uncompressed::<32, _>(bytes)?)),
            CurveId::P384 => Ok(Point::P384(sec1_parse_uncompressed::<48, _>(bytes)?)),
            CurveId::Bls12381G1 => {
                expect_len("uncompressed point", bytes.len(), 96)?;
                Ok(Point::Bls12381G1(G1Projective::from_uncompressed(
                    &fixed::<96>(bytes),
                )?))
            }
            CurveId::Bls12381G2 => {
                expect_len("uncompressed point", bytes.len(), 192)?;
                Ok(Point::Bls12381G2(G2Projective::from_uncompressed(
                    &fixed::<192>(bytes),
                )?))
            }
            CurveId::Bls12381Gt => {
                expect_len("uncompressed point", bytes.len(), 576)?;
                Ok(Point::Bls12381Gt(Gt::from_bytes(&fixed::<576>(bytes))?))
            }
            CurveId::Ed25519 => {
                expect_len("uncompressed point", bytes.len(), 64)?;
                if bytes.iter().all(|b| *b == 0) {
                    return Ok(Point::Ed25519(Ed25519Point::identity()));
                }
                let x = le_field::<32, _>(&bytes[..32], ed25519::FieldElement::from_bytes)?;
                let y = le_field::<32, _>(&bytes[32..], ed25519::FieldElement::from_bytes)?;
                Ok(Point::Ed25519(Ed25519Point::from_affine(x, y)?))
            }
            CurveId::Ristretto25519 => {
                expect_len("uncompressed point", bytes.len(), 64)?;
                if bytes.iter().all(|b| *b == 0) {
                    return Ok(Point::Ristretto25519(RistrettoPoint::identity()));
                }
                let x = le_field::<32, _>(&bytes[..32], ed25519::FieldElement::from_bytes)?;
                let y = le_field::<32, _>(&bytes[32..], ed25519::FieldElement::from_bytes)?;
                let inner = Ed25519Point::from_affine(x, y)?;
                Ok(Point::Ristretto25519(RistrettoPoint::from_edwards(inner)))
            }
            CurveId::Ed448 => {
                expect_len("uncompressed point", bytes.len(), 112)?;
                let x = le_field::<56, _>(&bytes[..56], ed448::Fp::from_bytes)?;
                let y = le_field::<56, _>(&bytes[56..], ed448::Fp::from_bytes)?;
                Ok(Point::Ed448(Ed448Point::from_affine(x, y)?))
            }
            CurveId::Pallas => {
                expect_len("uncompressed point", bytes.len(), 64)?;
                let x = le_field::<32, _>(&bytes[..32], pasta::Fp::from_bytes)?;
                let y = le_field::<32, _>(&bytes[32..], pasta::Fp::from_bytes)?;
                Ok(Point::Pallas(pasta::ProjectivePoint::from_affine_coordinates(x, y)?))
            }
        }
    }

    /// Multi-scalar multiplication: Σ [sᵢ]Pᵢ over a homogeneous slice.
    pub fn sum_of_products(points: &[Point], scalars: &[Scalar]) -> Result<Point> {
        if points.is_empty() || points.len() != scalars.len() {
            return Err(Error::InvalidLength {
                context: "sum_of_products",
                expected: points.len(),
                actual: scalars.len(),
            });
        }
        let id = points[0].curve_id();
        macro_rules! collect {
            ($pv:path, $sv:path) => {{
                let mut ps = Vec::with_capacity(points.len());
                let mut ss = Vec::with_capacity(scalars.len());
                for (p, s) in points.iter().zip(scalars.iter()) {
                    match (p, s) {
                        ($pv(p), $sv(s)) => {
                            ps.push(*p);
                            ss.push(*s);
                        }
                        _ => return Err(Error::InvalidType),
                    }
                }
                (ps, ss)
            }};
        }
        match id {
            CurveId::Secp256k1 => {
                let (ps, ss) = collect!(Point::Secp256k1, Scalar::Secp256k1);
                let bytes: Vec<[u8; 32]> = ss.iter().map(|s| s.to_bytes()).collect();
                let refs: Vec<&[u8]> = bytes.iter().map(|b| &b[..]).collect();
                Ok(Point::Secp256k1(k256::ProjectivePoint::sum_of_products(
                    &ps, &refs,
                )?))
            }
            CurveId::P256 => {
                let (ps, ss) = collect!(Point::P256, Scalar::P256);
                let bytes: Vec<[u8; 32]> = ss.iter().map(|s| s.to_bytes()).collect();
                let refs: Vec<&[u8]> = bytes.iter().map(|b| &b[..]).collect();
                Ok(Point::P256(p256::ProjectivePoint::sum_of_products(
                    &ps, &refs,
                )?))
            }
            CurveId::P384 => {
                let (ps, ss) = collect!(Point::P384, Scalar::P384);
                let bytes: Vec<[u8; 48]> = ss.iter().map(|s| s.to_bytes()).collect();
                let refs: Vec<&[u8]> = bytes.iter().map(|b| &b[..]).collect();
                Ok(Point::P384(p384::ProjectivePoint::sum_of_products(
                    &ps, &refs,
                )?))
            }
            CurveId::Pallas => {
                let (ps, ss) = collect!(Point::Pallas, Scalar::Pallas);
                let bytes: Vec<[u8; 32]> = ss.iter().map(|s| s.to_bytes()).collect();
                let refs: Vec<&[u8]> = bytes.iter().map(|b| &b[..]).collect();
                Ok(Point::Pallas(pasta::ProjectivePoint::sum_of_products(
                    &ps, &refs,
                )?))
            }
            CurveId::Bls12381G1 => {
                let mut ps = Vec::with_capacity(points.len());
                let mut bytes = Vec::with_capacity(scalars.len());
                for (p, s) in points.iter().zip(scalars.iter()) {
                    match (p, s) {
                        (Point::Bls12381G1(p), Scalar::Bls12381(s)) => {
                            ps.push(*p);
                            bytes.push(s.value.to_bytes());
                        }
                        _ => return Err(Error::InvalidType),
                    }
                }
                let refs: Vec<&[u8]> = bytes.iter().map(|b| &b[..]).collect();
                Ok(Point::Bls12381G1(G1Projective::sum_of_products(&ps, &refs)?))
            }
            CurveId::Bls12381G2 => {
                let mut ps = Vec::with_capacity(points.len());
                let mut bytes = Vec::with_capacity(scalars.len());
                for (p, s) in points.iter().zip(scalars.iter()) {
                    match (p, s) {
                        (Point::Bls12381G2(p), Scalar::Bls12381(s)) => {
                            ps.push(*p);
                            bytes.push(s.value.to_bytes());
                        }
                        _ => return Err(Error::InvalidType),
                    }
                }
                let refs: Vec<&[u8]> = bytes.iter().map(|b| &b[..]).collect();
                Ok(Point::Bls12381G2(G2Projective::sum_of_products(&ps, &refs)?))
            }
            CurveId::Bls12381Gt => {
                // Fold the exponentiations pairwise.
                let mut acc = Gt::identity();
                for (p, s) in points.iter().zip(scalars.iter()) {
                    match (p, s) {
                        (Point::Bls12381Gt(p), Scalar::Bls12381(s)) => {
                            acc = acc.add(&p.mul(&s.value));
                        }
                        _ => return Err(Error::InvalidType),
                    }
                }
                Ok(Point::Bls12381Gt(acc))
            }
            CurveId::Ed25519 => {
                let (ps, ss) = collect!(Point::Ed25519, Scalar::Ed25519);
                Ok(Point::Ed25519(Ed25519Point::sum_of_products(&ps, &ss)?))
            }
            CurveId::Ristretto25519 => {
                let (ps, ss) = collect!(Point::Ristretto25519, Scalar::Ristretto25519);
                Ok(Point::Ristretto25519(RistrettoPoint::sum_of_products(
                    &ps, &ss,
                )?))
            }
            CurveId::Ed448 => {
                let (ps, ss) = collect!(Point::Ed448, Scalar::Ed448);
                Ok(Point::Ed448(Ed448Point::sum_of_products(&ps, &ss)?))
            }
        }
    }

    /// The identity of the partner group of a pairing point.
    pub fn other_group(&self) -> Result<Point> {
        match self {
            Point::Bls12381G1(_) => Ok(Point::identity(CurveId::Bls12381G2)),
            Point::Bls12381G2(_) => Ok(Point::identity(CurveId::Bls12381G1)),
            _ => Err(Error::InvalidType),
        }
    }

    /// The pairing of this point with one from the partner group.
    pub fn pairing(&self, rhs: &Point) -> Result<Scalar> {
        let gt = match (self, rhs) {
            (Point::Bls12381G1(p), Point::Bls12381G2(q)) => bls12381::pairing(p, q),
            (Point::Bls12381G2(q), Point::Bls12381G1(p)) => bls12381::pairing(p, q),
            _ => return Err(Error::InvalidType),
        };
        Ok(Scalar::Bls12381Gt(GtScalar(gt)))
    }

    /// Multi-pairing over an even-length, alternating (G1, G2) sequence.
    pub fn multi_pairing(points: &[Point]) -> Result<Scalar> {
        if points.len() % 2 != 0 {
            return Err(Error::InvalidLength {
                context: "multi_pairing",
                expected: points.len() + 1,
                actual: points.len(),
            });
        }
        let mut pairs = Vec::with_capacity(points.len() / 2);
        for chunk in points.chunks_exact(2) {
            match (&chunk[0], &chunk[1]) {
                (Point::Bls12381G1(p), Point::Bls12381G2(q)) => pairs.push((*p, *q)),
                _ => return Err(Error::InvalidType),
            }
        }
        Ok(Scalar::Bls12381Gt(GtScalar(bls12381::multi_pairing(&pairs))))
    }

    /// Rebind a scalar to this point's group (BLS12-381 scalars carry
    /// their preferred group).
    pub fn bind_scalar(&self, scalar: &Scalar) -> Scalar {
        scalar.set_point(self)
    }
}

fn fixed<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}

/// Reduce an arbitrary big-endian integer into a field element through the
/// wide-reduction path.
fn reduce_be<const W: usize, F>(bytes: &[u8], from_wide: impl Fn(&[u8; W]) -> F) -> Result<F> {
    if bytes.len() > W {
        return Err(Error::InvalidLength {
            context: "coordinate",
            expected: W,
            actual: bytes.len(),
        });
    }
    let mut le = [0u8; W];
    for (i, b) in bytes.iter().rev().enumerate() {
        le[i] = *b;
    }
    Ok(from_wide(&le))
}

fn fp2_from_be(bytes: &[u8]) -> Result<bls12381::Fp2> {
    expect_len("G2 coordinate", bytes.len(), 96)?;
    let c1 = reduce_be::<96, _>(&bytes[..48], bls12381::Fp::from_bytes_wide)?;
    let c0 = reduce_be::<96, _>(&bytes[48..], bls12381::Fp::from_bytes_wide)?;
    Ok(bls12381::Fp2 { c0, c1 })
}

fn le_field<const N: usize, F>(
    bytes: &[u8],
    from_bytes: impl Fn(&[u8; N]) -> subtle::CtOption<F>,
) -> Result<F> {
    let arr = fixed::<N>(bytes);
    Option::<F>::from(from_bytes(&arr)).ok_or(Error::InvalidEncoding)
}

/// Compressed sign||x form shared by the NIST and secp256k1 curves: the
/// first byte is 0x02 with the parity of y, then big-endian x.
fn sign_be_compress<const N: usize, F: PrimeFieldElement + FieldBytes<N>>(
    (x, y): (F, F),
) -> Vec<u8> {
    let mut out = vec![0u8; N + 1];
    out[0] = 0x02 | y.sgn0().unwrap_u8();
    out[1..].copy_from_slice(&x.to_be_bytes_arr());
    out
}

fn sign_be_decompress<C>(bytes: &[u8]) -> Result<curvekit_algorithms::ec::weierstrass::ProjectivePoint<C>>
where
    C: curvekit_algorithms::ec::weierstrass::WeierstrassCurve,
    C::Fe: FieldBytesParse,
{
    let sign = bytes[0];
    if sign != 2 && sign != 3 {
        return Err(Error::InvalidEncoding);
    }
    let x = C::Fe::parse_be(&bytes[1..]).ok_or(Error::InvalidEncoding)?;
    let p = curvekit_algorithms::ec::weierstrass::ProjectivePoint::<C>::from_x_and_sign(
        x,
        Choice::from(sign & 1),
    );
    Option::from(p).ok_or(Error::InvalidEncoding)
}

/// SEC1-style uncompressed form: 0x04 || x || y big-endian.
fn sec1_uncompressed<const N: usize, F: PrimeFieldElement + FieldBytes<N>>(
    (x, y): (F, F),
) -> Vec<u8> {
    let mut out = vec![0u8; 2 * N + 1];
    out[0] = 0x04;
    out[1..N + 1].copy_from_slice(&x.to_be_bytes_arr());
    out[N + 1..].copy_from_slice(&y.to_be_bytes_arr());
    out
}

fn sec1_parse_uncompressed<const N: usize, C>(
    bytes: &[u8],
) -> Result<curvekit_algorithms::ec::weierstrass::ProjectivePoint<C>>
where
    C: curvekit_algorithms::ec::weierstrass::WeierstrassCurve,
    C::Fe: FieldBytesParse,
{
    expect_len("uncompressed point", bytes.len(), 2 * N + 1)?;
    if bytes.iter().all(|b| *b == 0) {
        return Ok(curvekit_algorithms::ec::weierstrass::ProjectivePoint::<C>::identity());
    }
    if bytes[0] != 0x04 {
        return Err(Error::InvalidEncoding);
    }
    let x = C::Fe::parse_be(&bytes[1..N + 1]).ok_or(Error::InvalidEncoding)?;
    let y = C::Fe::parse_be(&bytes[N + 1..]).ok_or(Error::InvalidEncoding)?;
    curvekit_algorithms::ec::weierstrass::ProjectivePoint::<C>::from_affine_coordinates(x, y)
        .map_err(|_| Error::InvalidEncoding)
}

/// Fixed-width big-endian serialisation, implemented by the concrete
/// Weierstrass base fields.
trait FieldBytes<const N: usize> {
    fn to_be_bytes_arr(&self) -> [u8; N];
}

/// Big-endian parsing with canonicity, implemented by the concrete
/// Weierstrass base fields.
trait FieldBytesParse: Sized {
    fn parse_be(bytes: &[u8]) -> Option<Self>;
}

macro_rules! field_bytes_impl {
    ($ty:ty, $n:expr) => {
        impl FieldBytes<$n> for $ty {
            fn to_be_bytes_arr(&self) -> [u8; $n] {
                self.to_be_bytes()
            }
        }

        impl FieldBytesParse for $ty {
            fn parse_be(bytes: &[u8]) -> Option<Self> {
                if bytes.len() != $n {
                    return None;
                }
                let mut arr = [0u8; $n];
                arr.copy_from_slice(bytes);
                Option::from(<$ty>::from_be_bytes(&arr))
            }
        }
    };
}

field_bytes_impl!(k256::FieldElement, 32);
field_bytes_impl!(p256::FieldElement, 32);
field_bytes_impl!(p384::FieldElement, 48);
