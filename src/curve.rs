//! The named-curve registry.
//!
//! A [`Curve`] hands out zero/generator/identity exemplars and the
//! byte-level constructors for its scalar field and point group; a
//! [`PairingCurve`] additionally exposes both source groups and the target
//! group. Registry entries are immutable statics, so concurrent readers
//! need no synchronisation.

use rand_core::RngCore;

use crate::point::Point;
use crate::scalar::{Bls12381Group, Scalar};
use crate::{Error, Result};

/// secp256k1.
pub const K256_NAME: &str = "secp256k1";
/// NIST P-256.
pub const P256_NAME: &str = "P-256";
/// NIST P-384.
pub const P384_NAME: &str = "P-384";
/// BLS12-381 G1.
pub const BLS12381G1_NAME: &str = "BLS12381G1";
/// BLS12-381 G2.
pub const BLS12381G2_NAME: &str = "BLS12381G2";
/// The BLS12-381 pairing curve (the historical spelling is part of the
/// wire format); also the envelope name of Gt elements.
pub const BLS12381_NAME: &str = "BLS12831";
/// Ed25519.
pub const ED25519_NAME: &str = "ed25519";
/// Ed448-Goldilocks.
pub const ED448_NAME: &str = "ed448";
/// Ristretto255 (the historical spelling is part of the wire format).
pub const RISTRETTO25519_NAME: &str = "ristretto25519";
/// Pallas.
pub const PALLAS_NAME: &str = "pallas";

/// Identifies one of the supported groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveId {
    /// secp256k1.
    Secp256k1,
    /// NIST P-256.
    P256,
    /// NIST P-384.
    P384,
    /// BLS12-381 G1.
    Bls12381G1,
    /// BLS12-381 G2.
    Bls12381G2,
    /// BLS12-381 Gt (reachable through the pairing curve).
    Bls12381Gt,
    /// Ed25519.
    Ed25519,
    /// Ed448.
    Ed448,
    /// Ristretto255.
    Ristretto25519,
    /// Pallas.
    Pallas,
}

impl CurveId {
    /// The envelope name of this group.
    pub fn name(&self) -> &'static str {
        match self {
            CurveId::Secp256k1 => K256_NAME,
            CurveId::P256 => P256_NAME,
            CurveId::P384 => P384_NAME,
            CurveId::Bls12381G1 => BLS12381G1_NAME,
            CurveId::Bls12381G2 => BLS12381G2_NAME,
            CurveId::Bls12381Gt => BLS12381_NAME,
            CurveId::Ed25519 => ED25519_NAME,
            CurveId::Ed448 => ED448_NAME,
            CurveId::Ristretto25519 => RISTRETTO25519_NAME,
            CurveId::Pallas => PALLAS_NAME,
        }
    }

    /// Canonical scalar width in bytes.
    pub fn scalar_bytes(&self) -> usize {
        match self {
            CurveId::Ed448 => 57,
            CurveId::Bls12381Gt => curvekit_algorithms::ec::bls12381::GT_BYTES,
            _ => 32,
        }
    }

    /// Compressed point width in bytes.
    pub fn compressed_point_bytes(&self) -> usize {
        match self {
            CurveId::Secp256k1 | CurveId::P256 => 33,
            CurveId::P384 => 49,
            CurveId::Bls12381G1 => 48,
            CurveId::Bls12381G2 => 96,
            CurveId::Bls12381Gt => curvekit_algorithms::ec::bls12381::GT_BYTES,
            CurveId::Ed25519 | CurveId::Ristretto25519 | CurveId::Pallas => 32,
            CurveId::Ed448 => 57,
        }
    }
}

/// A named curve: a scalar field plus a point group.
#[derive(Clone, Copy, Debug)]
pub struct Curve {
    /// Envelope name.
    pub name: &'static str,
    /// Group identifier.
    pub id: CurveId,
}

static CURVES: [Curve; 9] = [
    Curve {
        name: K256_NAME,
        id: CurveId::Secp256k1,
    },
    Curve {
        name: P256_NAME,
        id: CurveId::P256,
    },
    Curve {
        name: P384_NAME,
        id: CurveId::P384,
    },
    Curve {
        name: BLS12381G1_NAME,
        id: CurveId::Bls12381G1,
    },
    Curve {
        name: BLS12381G2_NAME,
        id: CurveId::Bls12381G2,
    },
    Curve {
        name: ED25519_NAME,
        id: CurveId::Ed25519,
    },
    Curve {
        name: ED448_NAME,
        id: CurveId::Ed448,
    },
    Curve {
        name: RISTRETTO25519_NAME,
        id: CurveId::Ristretto25519,
    },
    Curve {
        name: PALLAS_NAME,
        id: CurveId::Pallas,
    },
];

impl Curve {
    /// Look up a curve by its envelope name.
    ///
    /// `BLS12831` resolves to the pairing curve's preferred group (G1),
    /// matching the registry of the original wire format.
    pub fn by_name(name: &str) -> Result<&'static Curve> {
        if name == BLS12381_NAME {
            return Ok(&CURVES[3]);
        }
        CURVES
            .iter()
            .find(|c| c.name == name)
            .ok_or(Error::UnrecognizedCurve)
    }

    /// Every registered curve.
    pub fn all() -> &'static [Curve] {
        &CURVES
    }

    /// The additive identity scalar.
    pub fn scalar_zero(&self) -> Scalar {
        Scalar::zero(self.id)
    }

    /// The multiplicative identity scalar.
    pub fn scalar_one(&self) -> Scalar {
        Scalar::one(self.id)
    }

    /// A scalar with the given small value; negative values wrap modulo
    /// the group order.
    pub fn scalar_new(&self, value: i64) -> Scalar {
        Scalar::new(self.id, value)
    }

    /// A uniformly random scalar from the caller's source; short reads
    /// surface [`Error::InsufficientEntropy`].
    pub fn scalar_random(&self, rng: &mut dyn RngCore) -> Result<Scalar> {
        Scalar::random(self.id, rng)
    }

    /// Hash bytes to a uniformly distributed scalar.
    pub fn scalar_hash(&self, input: &[u8]) -> Scalar {
        Scalar::hash(self.id, input)
    }

    /// Parse a canonical scalar of the curve's exact width.
    pub fn scalar_from_bytes(&self, bytes: &[u8]) -> Result<Scalar> {
        Scalar::from_bytes(self.id, bytes)
    }

    /// Reduce a double-width scalar encoding.
    pub fn scalar_from_bytes_wide(&self, bytes: &[u8]) -> Result<Scalar> {
        Scalar::from_bytes_wide(self.id, bytes)
    }

    /// Reduce an arbitrary big-endian integer (up to double width) into a
    /// scalar.
    pub fn scalar_from_be_bytes_reduced(&self, bytes: &[u8]) -> Result<Scalar> {
        Scalar::from_be_bytes_reduced(self.id, bytes)
    }

    /// The identity point.
    pub fn point_identity(&self) -> Point {
        Point::identity(self.id)
    }

    /// The group generator.
    pub fn point_generator(&self) -> Point {
        Point::generator(self.id)
    }

    /// A random point: a hash of 2·field-width seed bytes.
    pub fn point_random(&self, rng: &mut dyn RngCore) -> Result<Point> {
        Point::random(self.id, rng)
    }

    /// Hash bytes to a point with the curve's default suite.
    pub fn point_hash(&self, input: &[u8]) -> Point {
        Point::hash(self.id, input)
    }

    /// Decode a compressed point.
    pub fn point_from_compressed(&self, bytes: &[u8]) -> Result<Point> {
        Point::from_affine_compressed(self.id, bytes)
    }

    /// Decode an uncompressed point.
    pub fn point_from_uncompressed(&self, bytes: &[u8]) -> Result<Point> {
        Point::from_affine_uncompressed(self.id, bytes)
    }

    /// Build a point from big-endian affine coordinates.
    pub fn point_set(&self, x: &[u8], y: &[u8]) -> Result<Point> {
        Point::set(self.id, x, y)
    }
}

/// The BLS12-381 pairing curve: G1, G2 and the target group, with scalars
/// bound to a preferred source group.
#[derive(Clone, Copy, Debug)]
pub struct PairingCurve {
    /// Envelope name of the pairing curve.
    pub name: &'static str,
    /// The group scalar bindings prefer.
    pub preferred: Bls12381Group,
}

/// The process-wide BLS12-381 pairing curve record.
pub static BLS12381: PairingCurve = PairingCurve {
    name: BLS12381_NAME,
    preferred: Bls12381Group::G1,
};

impl PairingCurve {
    /// Look up a pairing curve by name.
    pub fn by_name(name: &str) -> Result<&'static PairingCurve> {
        match name {
            BLS12381G1_NAME | BLS12381G2_NAME | BLS12381_NAME => Ok(&BLS12381),
            _ => Err(Error::UnrecognizedCurve),
        }
    }

    /// A zero scalar bound to the preferred group.
    pub fn scalar(&self) -> Scalar {
        Scalar::bls12381_zero(self.preferred)
    }

    /// The G1 generator.
    pub fn g1_generator(&self) -> Point {
        Point::generator(CurveId::Bls12381G1)
    }

    /// The G1 identity.
    pub fn g1_identity(&self) -> Point {
        Point::identity(CurveId::Bls12381G1)
    }

    /// The G2 generator.
    pub fn g2_generator(&self) -> Point {
        Point::generator(CurveId::Bls12381G2)
    }

    /// The G2 identity.
    pub fn g2_identity(&self) -> Point {
        Point::identity(CurveId::Bls12381G2)
    }

    /// The Gt identity, as a point.
    pub fn gt_identity(&self) -> Point {
        Point::identity(CurveId::Bls12381Gt)
    }

    /// The Gt generator e(G1, G2), as a point.
    pub fn gt_generator(&self) -> Point {
        Point::generator(CurveId::Bls12381Gt)
    }
}
