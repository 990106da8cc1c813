//! The uniform scalar: one enum variant per curve.
//!
//! Field-backed variants dispatch to their Montgomery field types; the
//! Gt-backed variant adapts the multiplicative target group to the same
//! additive surface, so "add" is an Fp12 multiplication and "mul by a
//! BLS12-381 scalar" is an exponentiation.

use core::cmp::Ordering;

use rand_core::RngCore;
use subtle::Choice;

use curvekit_algorithms::ec::{bls12381, ed25519, ed448, k256, p256, p384, pasta};

use crate::curve::CurveId;
use crate::point::Point;
use crate::{Error, Result};

/// Which BLS12-381 source group a scalar's `point()` refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bls12381Group {
    /// G1.
    G1,
    /// G2.
    G2,
}

/// A BLS12-381 scalar together with its preferred point group.
#[derive(Clone, Copy, Debug)]
pub struct Bls12381Scalar {
    pub(crate) value: bls12381::Scalar,
    pub(crate) group: Bls12381Group,
}

/// The Gt element behind the scalar-shaped facade.
#[derive(Clone, Copy, Debug)]
pub struct GtScalar(pub(crate) bls12381::Gt);

/// An element of a curve's scalar field (or of Gt behind its scalar
/// adapter).
#[derive(Clone, Copy, Debug)]
pub enum Scalar {
    /// secp256k1.
    Secp256k1(k256::Scalar),
    /// NIST P-256.
    P256(p256::Scalar),
    /// NIST P-384.
    P384(p384::Scalar),
    /// BLS12-381 (Fr), bound to a source group.
    Bls12381(Bls12381Scalar),
    /// BLS12-381 Gt behind the scalar facade.
    Bls12381Gt(GtScalar),
    /// Ed25519.
    Ed25519(ed25519::Scalar),
    /// Ristretto255.
    Ristretto25519(ed25519::Scalar),
    /// Ed448.
    Ed448(ed448::Fq),
    /// Pallas.
    Pallas(pasta::Fq),
}

// Apply a field operation across the field-backed variants; the caller
// supplies the Gt arm.
macro_rules! map_field {
    ($self:expr, |$v:ident| $body:expr, $g:pat => $gt:expr) => {
        match $self {
            Scalar::Secp256k1($v) => Scalar::Secp256k1($body),
            Scalar::P256($v) => Scalar::P256($body),
            Scalar::P384($v) => Scalar::P384($body),
            Scalar::Bls12381(s) => Scalar::Bls12381(Bls12381Scalar {
                value: {
                    let $v = &s.value;
                    $body
                },
                group: s.group,
            }),
            Scalar::Ed25519($v) => Scalar::Ed25519($body),
            Scalar::Ristretto25519($v) => Scalar::Ristretto25519($body),
            Scalar::Ed448($v) => Scalar::Ed448($body),
            Scalar::Pallas($v) => Scalar::Pallas($body),
            Scalar::Bls12381Gt($g) => $gt,
        }
    };
}

// Ask a question of the field value; the caller supplies the Gt arm.
macro_rules! ask_field {
    ($self:expr, |$v:ident| $body:expr, $g:pat => $gt:expr) => {
        match $self {
            Scalar::Secp256k1($v) => $body,
            Scalar::P256($v) => $body,
            Scalar::P384($v) => $body,
            Scalar::Bls12381(s) => {
                let $v = &s.value;
                $body
            }
            Scalar::Ed25519($v) => $body,
            Scalar::Ristretto25519($v) => $body,
            Scalar::Ed448($v) => $body,
            Scalar::Pallas($v) => $body,
            Scalar::Bls12381Gt($g) => $gt,
        }
    };
}

// Combine two scalars of the same curve with a field operation; mixed
// curves are a typed error. Gt pairs are handled by the caller first.
macro_rules! zip_field {
    ($self:expr, $rhs:expr, |$a:ident, $b:ident| $body:expr) => {
        match ($self, $rhs) {
            (Scalar::Secp256k1($a), Scalar::Secp256k1($b)) => Ok(Scalar::Secp256k1($body)),
            (Scalar::P256($a), Scalar::P256($b)) => Ok(Scalar::P256($body)),
            (Scalar::P384($a), Scalar::P384($b)) => Ok(Scalar::P384($body)),
            (Scalar::Bls12381(x), Scalar::Bls12381(y)) => Ok(Scalar::Bls12381(Bls12381Scalar {
                value: {
                    let $a = &x.value;
                    let $b = &y.value;
                    $body
                },
                group: x.group,
            })),
            (Scalar::Ed25519($a), Scalar::Ed25519($b)) => Ok(Scalar::Ed25519($body)),
            (Scalar::Ristretto25519($a), Scalar::Ristretto25519($b)) => {
                Ok(Scalar::Ristretto25519($body))
            }
            (Scalar::Ed448($a), Scalar::Ed448($b)) => Ok(Scalar::Ed448($body)),
            (Scalar::Pallas($a), Scalar::Pallas($b)) => Ok(Scalar::Pallas($body)),
            _ => Err(Error::InvalidType),
        }
    };
}

impl Scalar {
    /// The group this scalar belongs to.
    pub fn curve_id(&self) -> CurveId {
        match self {
            Scalar::Secp256k1(_) => CurveId::Secp256k1,
            Scalar::P256(_) => CurveId::P256,
            Scalar::P384(_) => CurveId::P384,
            Scalar::Bls12381(s) => match s.group {
                Bls12381Group::G1 => CurveId::Bls12381G1,
                Bls12381Group::G2 => CurveId::Bls12381G2,
            },
            Scalar::Bls12381Gt(_) => CurveId::Bls12381Gt,
            Scalar::Ed25519(_) => CurveId::Ed25519,
            Scalar::Ristretto25519(_) => CurveId::Ristretto25519,
            Scalar::Ed448(_) => CurveId::Ed448,
            Scalar::Pallas(_) => CurveId::Pallas,
        }
    }

    /// The additive identity of the given curve's scalar domain.
    pub fn zero(id: CurveId) -> Scalar {
        match id {
            CurveId::Secp256k1 => Scalar::Secp256k1(k256::Scalar::zero()),
            CurveId::P256 => Scalar::P256(p256::Scalar::zero()),
            CurveId::P384 => Scalar::P384(p384::Scalar::zero()),
            CurveId::Bls12381G1 => Scalar::bls12381_zero(Bls12381Group::G1),
            CurveId::Bls12381G2 => Scalar::bls12381_zero(Bls12381Group::G2),
            CurveId::Bls12381Gt => Scalar::Bls12381Gt(GtScalar(bls12381::Gt::identity())),
            CurveId::Ed25519 => Scalar::Ed25519(ed25519::Scalar::zero()),
            CurveId::Ristretto25519 => Scalar::Ristretto25519(ed25519::Scalar::zero()),
            CurveId::Ed448 => Scalar::Ed448(ed448::Fq::zero()),
            CurveId::Pallas => Scalar::Pallas(pasta::Fq::zero()),
        }
    }

    /// A zero BLS12-381 scalar bound to the given group.
    pub fn bls12381_zero(group: Bls12381Group) -> Scalar {
        Scalar::Bls12381(Bls12381Scalar {
            value: bls12381::Scalar::zero(),
            group,
        })
    }

    /// The multiplicative identity; for Gt, the group generator.
    pub fn one(id: CurveId) -> Scalar {
        match id {
            CurveId::Bls12381Gt => Scalar::Bls12381Gt(GtScalar(bls12381::Gt::generator())),
            _ => Scalar::new(id, 1),
        }
    }

    /// A scalar with the given small value; negatives wrap modulo the
    /// order. For Gt this is the multiple of the generator.
    pub fn new(id: CurveId, value: i64) -> Scalar {
        let m = value.unsigned_abs();
        let s = match id {
            CurveId::Secp256k1 => Scalar::Secp256k1(k256::Scalar::from_u64(m)),
            CurveId::P256 => Scalar::P256(p256::Scalar::from_u64(m)),
            CurveId::P384 => Scalar::P384(p384::Scalar::from_u64(m)),
            CurveId::Bls12381G1 => Scalar::Bls12381(Bls12381Scalar {
                value: bls12381::Scalar::from_u64(m),
                group: Bls12381Group::G1,
            }),
            CurveId::Bls12381G2 => Scalar::Bls12381(Bls12381Scalar {
                value: bls12381::Scalar::from_u64(m),
                group: Bls12381Group::G2,
            }),
            CurveId::Bls12381Gt => {
                let g = bls12381::Gt::generator().mul(&bls12381::Scalar::from_u64(m));
                Scalar::Bls12381Gt(GtScalar(g))
            }
            CurveId::Ed25519 => Scalar::Ed25519(ed25519::Scalar::from_u64(m)),
            CurveId::Ristretto25519 => Scalar::Ristretto25519(ed25519::Scalar::from_u64(m)),
            CurveId::Ed448 => Scalar::Ed448(ed448::Fq::from_u64(m)),
            CurveId::Pallas => Scalar::Pallas(pasta::Fq::from_u64(m)),
        };
        if value < 0 {
            s.neg()
        } else {
            s
        }
    }

    /// A uniformly random scalar: 64 seed bytes hashed to the scalar
    /// domain. Short reads surface [`Error::InsufficientEntropy`].
    pub fn random(id: CurveId, rng: &mut dyn RngCore) -> Result<Scalar> {
        let mut seed = [0u8; 64];
        rng.try_fill_bytes(&mut seed)
            .map_err(|_| Error::InsufficientEntropy)?;
        Ok(Scalar::hash(id, &seed))
    }

    /// Hash bytes to a uniformly distributed scalar with the curve's
    /// derivation suite.
    pub fn hash(id: CurveId, input: &[u8]) -> Scalar {
        match id {
            CurveId::Secp256k1 => Scalar::Secp256k1(k256::hash_to_scalar(input)),
            CurveId::P256 => Scalar::P256(p256::hash_to_scalar(input)),
            CurveId::P384 => Scalar::P384(p384::hash_to_scalar(input)),
            CurveId::Bls12381G1 => Scalar::Bls12381(Bls12381Scalar {
                value: bls12381::hash_to_scalar(input),
                group: Bls12381Group::G1,
            }),
            CurveId::Bls12381G2 => Scalar::Bls12381(Bls12381Scalar {
                value: bls12381::hash_to_scalar(input),
                group: Bls12381Group::G2,
            }),
            CurveId::Bls12381Gt => {
                // Pair a G1 hash with the G2 generator.
                let p = bls12381::G1Projective::hash_to_curve(
                    input,
                    &curvekit_algorithms::hash2curve::PointHasher::Sha256,
                    bls12381::G1_HASH_DST,
                );
                let gt = bls12381::pairing(&p, &bls12381::G2Projective::generator());
                Scalar::Bls12381Gt(GtScalar(gt))
            }
            CurveId::Ed25519 => Scalar::Ed25519(ed25519::hash_to_scalar(input)),
            CurveId::Ristretto25519 => Scalar::Ristretto25519(ed25519::hash_to_scalar(input)),
            CurveId::Ed448 => Scalar::Ed448(ed448::hash_to_scalar(input)),
            CurveId::Pallas => Scalar::Pallas(pasta::hash_to_scalar(input)),
        }
    }

    /// True iff this is the additive identity (for Gt: the group
    /// identity).
    pub fn is_zero(&self) -> bool {
        bool::from(ask_field!(self, |v| v.is_zero(), g => g.0.is_identity()))
    }

    /// True iff this is the multiplicative identity (for Gt: the
    /// generator).
    pub fn is_one(&self) -> bool {
        bool::from(
            ask_field!(self, |v| v.is_one(), g => subtle::ConstantTimeEq::ct_eq(&g.0, &bls12381::Gt::generator())),
        )
    }

    /// Parity of the canonical value; for Gt, of the first encoded byte.
    pub fn is_odd(&self) -> bool {
        bool::from(ask_field!(self, |v| v.sgn0(), g => Choice::from(g.0.to_bytes()[0] & 1)))
    }

    /// Complement of [`Scalar::is_odd`].
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Three-way comparison of canonical values within one curve; `None`
    /// across curves. Gt compares for equality only.
    pub fn cmp(&self, rhs: &Scalar) -> Option<Ordering> {
        if let (Scalar::Bls12381Gt(a), Scalar::Bls12381Gt(b)) = (self, rhs) {
            return if bool::from(subtle::ConstantTimeEq::ct_eq(&a.0, &b.0)) {
                Some(Ordering::Equal)
            } else {
                None
            };
        }
        let cmp = match (self, rhs) {
            (Scalar::Secp256k1(a), Scalar::Secp256k1(b)) => a.cmp_canonical(b),
            (Scalar::P256(a), Scalar::P256(b)) => a.cmp_canonical(b),
            (Scalar::P384(a), Scalar::P384(b)) => a.cmp_canonical(b),
            (Scalar::Bls12381(a), Scalar::Bls12381(b)) => a.value.cmp_canonical(&b.value),
            (Scalar::Ed25519(a), Scalar::Ed25519(b)) => a.cmp_canonical(b),
            (Scalar::Ristretto25519(a), Scalar::Ristretto25519(b)) => a.cmp_canonical(b),
            (Scalar::Ed448(a), Scalar::Ed448(b)) => a.cmp_canonical(b),
            (Scalar::Pallas(a), Scalar::Pallas(b)) => a.cmp_canonical(b),
            _ => return None,
        };
        Some(match cmp {
            -1 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        })
    }

    /// Squaring; for Gt, doubling in the additive facade.
    pub fn square(&self) -> Scalar {
        map_field!(*self, |v| v.square(), g => Scalar::Bls12381Gt(GtScalar(g.0.double())))
    }

    /// Doubling.
    pub fn double(&self) -> Scalar {
        map_field!(*self, |v| v.double(), g => Scalar::Bls12381Gt(GtScalar(g.0.double())))
    }

    /// Cubing; for Gt, the third multiple.
    pub fn cube(&self) -> Scalar {
        map_field!(*self, |v| v.square().mul(&v), g => {
            Scalar::Bls12381Gt(GtScalar(g.0.double().add(&g.0)))
        })
    }

    /// Raise to a small public power; for Gt, the e-th multiple in the
    /// additive facade.
    pub fn pow(&self, exp: u64) -> Scalar {
        fn e<const N: usize>(exp: u64) -> [u64; N] {
            let mut out = [0u64; N];
            out[0] = exp;
            out
        }
        match self {
            Scalar::Secp256k1(v) => Scalar::Secp256k1(v.pow(&e::<4>(exp))),
            Scalar::P256(v) => Scalar::P256(v.pow(&e::<4>(exp))),
            Scalar::P384(v) => Scalar::P384(v.pow(&e::<6>(exp))),
            Scalar::Bls12381(s) => Scalar::Bls12381(Bls12381Scalar {
                value: s.value.pow(&e::<4>(exp)),
                group: s.group,
            }),
            Scalar::Bls12381Gt(g) => {
                Scalar::Bls12381Gt(GtScalar(g.0.mul(&bls12381::Scalar::from_u64(exp))))
            }
            Scalar::Ed25519(v) => Scalar::Ed25519(v.pow(&e::<4>(exp))),
            Scalar::Ristretto25519(v) => Scalar::Ristretto25519(v.pow(&e::<4>(exp))),
            Scalar::Ed448(v) => Scalar::Ed448(v.pow(&e::<7>(exp))),
            Scalar::Pallas(v) => Scalar::Pallas(v.pow(&e::<4>(exp))),
        }
    }

    /// Multiplicative inverse; for Gt, the group inverse. Zero has no
    /// inverse.
    pub fn invert(&self) -> Result<Scalar> {
        match self {
            Scalar::Bls12381Gt(g) => Ok(Scalar::Bls12381Gt(GtScalar(g.0.neg()))),
            _ => {
                let inv = map_field_ctoption(self, FieldUnary::Invert)?;
                Ok(inv)
            }
        }
    }

    /// Square root when one exists; Gt does not expose roots.
    pub fn sqrt(&self) -> Result<Scalar> {
        match self {
            Scalar::Bls12381Gt(_) => Err(Error::NotSquare),
            _ => map_field_ctoption(self, FieldUnary::Sqrt),
        }
    }

    /// Addition; for Gt pairs, the group operation.
    pub fn add(&self, rhs: &Scalar) -> Result<Scalar> {
        if let (Scalar::Bls12381Gt(a), Scalar::Bls12381Gt(b)) = (self, rhs) {
            return Ok(Scalar::Bls12381Gt(GtScalar(a.0.add(&b.0))));
        }
        zip_field!(self, rhs, |a, b| a.add(b))
    }

    /// Subtraction; for Gt pairs, the group difference.
    pub fn sub(&self, rhs: &Scalar) -> Result<Scalar> {
        if let (Scalar::Bls12381Gt(a), Scalar::Bls12381Gt(b)) = (self, rhs) {
            return Ok(Scalar::Bls12381Gt(GtScalar(a.0.sub(&b.0))));
        }
        zip_field!(self, rhs, |a, b| a.sub(b))
    }

    /// Multiplication. A Gt element multiplied by a BLS12-381 scalar is
    /// exponentiation in the target group.
    pub fn mul(&self, rhs: &Scalar) -> Result<Scalar> {
        match (self, rhs) {
            (Scalar::Bls12381Gt(a), Scalar::Bls12381(b)) => {
                Ok(Scalar::Bls12381Gt(GtScalar(a.0.mul(&b.value))))
            }
            (Scalar::Bls12381Gt(_), _) | (_, Scalar::Bls12381Gt(_)) => Err(Error::InvalidType),
            _ => zip_field!(self, rhs, |a, b| a.mul(b)),
        }
    }

    /// self·y + z.
    pub fn mul_add(&self, y: &Scalar, z: &Scalar) -> Result<Scalar> {
        self.mul(y)?.add(z)
    }

    /// Division: multiplication by the inverse; for Gt pairs, the group
    /// difference (exponent subtraction).
    pub fn div(&self, rhs: &Scalar) -> Result<Scalar> {
        if let (Scalar::Bls12381Gt(a), Scalar::Bls12381Gt(b)) = (self, rhs) {
            return Ok(Scalar::Bls12381Gt(GtScalar(a.0.sub(&b.0))));
        }
        let inv = rhs.invert()?;
        self.mul(&inv)
    }

    /// Negation; for Gt, the group inverse.
    pub fn neg(&self) -> Scalar {
        map_field!(*self, |v| v.neg(), g => Scalar::Bls12381Gt(GtScalar(g.0.neg())))
    }

    /// The identity of this scalar's associated point group.
    pub fn point(&self) -> Point {
        Point::identity(self.curve_id())
    }

    /// Rebind a BLS12-381 scalar to the group of the given point; other
    /// scalars are returned unchanged.
    pub fn set_point(&self, point: &Point) -> Scalar {
        match (self, point) {
            (Scalar::Bls12381(s), Point::Bls12381G1(_)) => Scalar::Bls12381(Bls12381Scalar {
                value: s.value,
                group: Bls12381Group::G1,
            }),
            (Scalar::Bls12381(s), Point::Bls12381G2(_)) => Scalar::Bls12381(Bls12381Scalar {
                value: s.value,
                group: Bls12381Group::G2,
            }),
            _ => *self,
        }
    }

    /// The canonical byte representation (per-curve byte order).
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Scalar::Secp256k1(v) => v.to_be_bytes().to_vec(),
            Scalar::P256(v) => v.to_be_bytes().to_vec(),
            Scalar::P384(v) => v.to_be_bytes().to_vec(),
            Scalar::Bls12381(s) => s.value.to_be_bytes().to_vec(),
            Scalar::Bls12381Gt(g) => g.0.to_bytes().to_vec(),
            Scalar::Ed25519(v) => v.to_bytes().to_vec(),
            Scalar::Ristretto25519(v) => v.to_bytes().to_vec(),
            Scalar::Ed448(v) => {
                // 57 bytes big-endian with a leading zero.
                let mut out = [0u8; 57];
                out[..56].copy_from_slice(&v.to_bytes());
                out.reverse();
                out.to_vec()
            }
            Scalar::Pallas(v) => v.to_bytes().to_vec(),
        }
    }

    /// The canonical value as big-endian bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        match self {
            Scalar::Ed25519(v) | Scalar::Ristretto25519(v) => v.to_be_bytes().to_vec(),
            Scalar::Pallas(v) => v.to_be_bytes().to_vec(),
            _ => self.to_bytes(),
        }
    }

    /// Parse the canonical width-exact representation.
    pub fn from_bytes(id: CurveId, bytes: &[u8]) -> Result<Scalar> {
        let expected = id.scalar_bytes();
        curvekit_algorithms::error::expect_len("scalar", bytes.len(), expected)?;
        match id {
            CurveId::Secp256k1 => from_ctoption(
                k256::Scalar::from_be_bytes(&fixed::<32>(bytes)).map(Scalar::Secp256k1),
            ),
            CurveId::P256 => {
                from_ctoption(p256::Scalar::from_be_bytes(&fixed::<32>(bytes)).map(Scalar::P256))
            }
            CurveId::P384 => {
                from_ctoption(p384::Scalar::from_be_bytes(&fixed::<48>(bytes)).map(Scalar::P384))
            }
            CurveId::Bls12381G1 | CurveId::Bls12381G2 => {
                let group = if id == CurveId::Bls12381G1 {
                    Bls12381Group::G1
                } else {
                    Bls12381Group::G2
                };
                from_ctoption(bls12381::Scalar::from_be_bytes(&fixed::<32>(bytes)).map(|value| {
                    Scalar::Bls12381(Bls12381Scalar { value, group })
                }))
            }
            CurveId::Bls12381Gt => {
                let gt = bls12381::Gt::from_bytes(&fixed::<576>(bytes))?;
                Ok(Scalar::Bls12381Gt(GtScalar(gt)))
            }
            CurveId::Ed25519 => from_ctoption(
                ed25519::Scalar::from_bytes(&fixed::<32>(bytes)).map(Scalar::Ed25519),
            ),
            CurveId::Ristretto25519 => from_ctoption(
                ed25519::Scalar::from_bytes(&fixed::<32>(bytes)).map(Scalar::Ristretto25519),
            ),
            CurveId::Ed448 => {
                // 57 bytes big-endian; the top byte must be zero and the
                // remainder canonical.
                if bytes[0] != 0 {
                    return Err(Error::InvalidEncoding);
                }
                let mut le = [0u8; 56];
                for (i, b) in bytes[1..].iter().rev().enumerate() {
                    le[i] = *b;
                }
                from_ctoption(ed448::Fq::from_bytes(&le).map(Scalar::Ed448))
            }
            CurveId::Pallas => {
                from_ctoption(pasta::Fq::from_bytes(&fixed::<32>(bytes)).map(Scalar::Pallas))
            }
        }
    }

    /// Reduce a double-width representation modulo the order.
    ///
    /// Inputs are little-endian except for Ed448, whose historical wire
    /// format feeds big-endian bytes through a three-limb fold.
    pub fn from_bytes_wide(id: CurveId, bytes: &[u8]) -> Result<Scalar> {
        match id {
            CurveId::Secp256k1 => {
                curvekit_algorithms::error::expect_len("wide scalar", bytes.len(), 64)?;
                Ok(Scalar::Secp256k1(k256::Scalar::from_bytes_wide(&fixed::<64>(bytes))))
            }
            CurveId::P256 => {
                curvekit_algorithms::error::expect_len("wide scalar", bytes.len(), 64)?;
                Ok(Scalar::P256(p256::Scalar::from_bytes_wide(&fixed::<64>(bytes))))
            }
            CurveId::P384 => {
                curvekit_algorithms::error::expect_len("wide scalar", bytes.len(), 96)?;
                Ok(Scalar::P384(p384::Scalar::from_bytes_wide(&fixed::<96>(bytes))))
            }
            CurveId::Bls12381G1 | CurveId::Bls12381G2 => {
                curvekit_algorithms::error::expect_len("wide scalar", bytes.len(), 64)?;
                let value = bls12381::Scalar::from_bytes_wide(&fixed::<64>(bytes));
                let group = if id == CurveId::Bls12381G1 {
                    Bls12381Group::G1
                } else {
                    Bls12381Group::G2
                };
                Ok(Scalar::Bls12381(Bls12381Scalar { value, group }))
            }
            CurveId::Bls12381Gt => {
                // Two concatenated encodings, folded by the group law.
                curvekit_algorithms::error::expect_len("wide scalar", bytes.len(), 1152)?;
                let lo = bls12381::Gt::from_bytes(&fixed::<576>(&bytes[..576]))?;
                let hi = bls12381::Gt::from_bytes(&fixed::<576>(&bytes[576..]))?;
                Ok(Scalar::Bls12381Gt(GtScalar(lo.add(&hi))))
            }
            CurveId::Ed25519 => {
                curvekit_algorithms::error::expect_len("wide scalar", bytes.len(), 64)?;
                Ok(Scalar::Ed25519(ed25519::Scalar::from_bytes_wide(&fixed::<64>(bytes))))
            }
            CurveId::Ristretto25519 => {
                curvekit_algorithms::error::expect_len("wide scalar", bytes.len(), 64)?;
                Ok(Scalar::Ristretto25519(ed25519::Scalar::from_bytes_wide(
                    &fixed::<64>(bytes),
                )))
            }
            CurveId::Ed448 => {
                curvekit_algorithms::error::expect_len("wide scalar", bytes.len(), 114)?;
                // Historical wire format: big-endian input, reversed before
                // the three-limb fold.
                let mut le = [0u8; 114];
                for (i, b) in bytes.iter().rev().enumerate() {
                    le[i] = *b;
                }
                Ok(Scalar::Ed448(ed448::fq_wide_reduce(&le)))
            }
            CurveId::Pallas => {
                curvekit_algorithms::error::expect_len("wide scalar", bytes.len(), 64)?;
                Ok(Scalar::Pallas(pasta::Fq::from_bytes_wide(&fixed::<64>(bytes))))
            }
        }
    }

    /// Reduce an arbitrary big-endian integer of at most double width.
    pub fn from_be_bytes_reduced(id: CurveId, bytes: &[u8]) -> Result<Scalar> {
        if id == CurveId::Bls12381Gt {
            return Err(Error::InvalidType);
        }
        let wide = match id {
            CurveId::P384 => 96,
            CurveId::Ed448 => 112,
            _ => 64,
        };
        if bytes.len() > wide {
            return Err(Error::InvalidLength {
                context: "big integer scalar",
                expected: wide,
                actual: bytes.len(),
            });
        }
        // Left-pad to the wide width, then reduce little-endian.
        match id {
            CurveId::Ed448 => {
                let mut le = [0u8; 112];
                for (i, b) in bytes.iter().rev().enumerate() {
                    le[i] = *b;
                }
                Ok(Scalar::Ed448(ed448::Fq::from_bytes_wide(&le)))
            }
            CurveId::P384 => {
                let mut le = [0u8; 96];
                for (i, b) in bytes.iter().rev().enumerate() {
                    le[i] = *b;
                }
                Ok(Scalar::P384(p384::Scalar::from_bytes_wide(&le)))
            }
            _ => {
                let mut le = [0u8; 64];
                for (i, b) in bytes.iter().rev().enumerate() {
                    le[i] = *b;
                }
                match id {
                    CurveId::Secp256k1 => {
                        Ok(Scalar::Secp256k1(k256::Scalar::from_bytes_wide(&le)))
                    }
                    CurveId::P256 => Ok(Scalar::P256(p256::Scalar::from_bytes_wide(&le))),
                    CurveId::Bls12381G1 => Ok(Scalar::Bls12381(Bls12381Scalar {
                        value: bls12381::Scalar::from_bytes_wide(&le),
                        group: Bls12381Group::G1,
                    })),
                    CurveId::Bls12381G2 => Ok(Scalar::Bls12381(Bls12381Scalar {
                        value: bls12381::Scalar::from_bytes_wide(&le),
                        group: Bls12381Group::G2,
                    })),
                    CurveId::Ed25519 => {
                        Ok(Scalar::Ed25519(ed25519::Scalar::from_bytes_wide(&le)))
                    }
                    CurveId::Ristretto25519 => {
                        Ok(Scalar::Ristretto25519(ed25519::Scalar::from_bytes_wide(&le)))
                    }
                    CurveId::Pallas => Ok(Scalar::Pallas(pasta::Fq::from_bytes_wide(&le))),
                    _ => unreachable!("handled above"),
                }
            }
        }
    }

    /// Constant-time equality within a curve; mismatched curves compare
    /// unequal.
    pub fn equal(&self, rhs: &Scalar) -> bool {
        use subtle::ConstantTimeEq;
        match (self, rhs) {
            (Scalar::Secp256k1(a), Scalar::Secp256k1(b)) => bool::from(a.ct_eq(b)),
            (Scalar::P256(a), Scalar::P256(b)) => bool::from(a.ct_eq(b)),
            (Scalar::P384(a), Scalar::P384(b)) => bool::from(a.ct_eq(b)),
            (Scalar::Bls12381(a), Scalar::Bls12381(b)) => bool::from(a.value.ct_eq(&b.value)),
            (Scalar::Bls12381Gt(a), Scalar::Bls12381Gt(b)) => bool::from(subtle::ConstantTimeEq::ct_eq(&a.0, &b.0)),
            (Scalar::Ed25519(a), Scalar::Ed25519(b)) => bool::from(a.ct_eq(b)),
            (Scalar::Ristretto25519(a), Scalar::Ristretto25519(b)) => bool::from(a.ct_eq(b)),
            (Scalar::Ed448(a), Scalar::Ed448(b)) => bool::from(a.ct_eq(b)),
            (Scalar::Pallas(a), Scalar::Pallas(b)) => bool::from(a.ct_eq(b)),
            _ => false,
        }
    }
}

#[derive(Clone, Copy)]
enum FieldUnary {
    Invert,
    Sqrt,
}

fn map_field_ctoption(s: &Scalar, op: FieldUnary) -> Result<Scalar> {
    macro_rules! apply {
        ($v:expr, $wrap:expr) => {{
            let out = match op {
                FieldUnary::Invert => $v.invert(),
                FieldUnary::Sqrt => $v.sqrt(),
            };
            Option::from(out).map($wrap).ok_or(match op {
                FieldUnary::Invert => Error::NotInverse,
                FieldUnary::Sqrt => Error::NotSquare,
            })
        }};
    }
    match s {
        Scalar::Secp256k1(v) => apply!(v, Scalar::Secp256k1),
        Scalar::P256(v) => apply!(v, Scalar::P256),
        Scalar::P384(v) => apply!(v, Scalar::P384),
        Scalar::Bls12381(b) => {
            let group = b.group;
            apply!(
                (&b.value),
                (|value| Scalar::Bls12381(Bls12381Scalar { value, group }))
            )
        }
        Scalar::Ed25519(v) => apply!(v, Scalar::Ed25519),
        Scalar::Ristretto25519(v) => apply!(v, Scalar::Ristretto25519),
        Scalar::Ed448(v) => apply!(v, Scalar::Ed448),
        Scalar::Pallas(v) => apply!(v, Scalar::Pallas),
        Scalar::Bls12381Gt(_) => Err(Error::InvalidType),
    }
}

fn from_ctoption(opt: subtle::CtOption<Scalar>) -> Result<Scalar> {
    Option::from(opt).ok_or(Error::InvalidEncoding)
}

fn fixed<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}



