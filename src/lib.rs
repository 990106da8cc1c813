//! curvekit: one uniform `Scalar`/`Point` surface over secp256k1,
//! NIST P-256/P-384, Ed25519, Ristretto255, Ed448, Pallas and the
//! BLS12-381 groups (G1, G2 and the target group Gt).
//!
//! Higher-level protocols write against [`Scalar`] and [`Point`] once and
//! instantiate on any supported curve through the [`Curve`] registry.
//! Binary operations on operands from different curves return
//! [`Error::InvalidType`]; nothing in this crate panics on user input.

#![deny(unsafe_code)]

mod curve;
mod envelope;
mod point;
mod scalar;

pub use curve::{
    Curve, CurveId, PairingCurve, BLS12381, BLS12381G1_NAME, BLS12381G2_NAME, BLS12381_NAME, ED25519_NAME,
    ED448_NAME, K256_NAME, P256_NAME, P384_NAME, PALLAS_NAME, RISTRETTO25519_NAME,
};
pub use curvekit_algorithms::{Error, Result};
pub use envelope::{
    point_from_binary, point_from_json, point_from_text, point_to_binary, point_to_json,
    point_to_text, scalar_from_binary, scalar_from_json, scalar_from_text, scalar_to_binary,
    scalar_to_json, scalar_to_text,
};
pub use point::Point;
pub use scalar::{Bls12381Group, Scalar};

/// Re-export of the arithmetic layer for callers that need direct access
/// to a specific curve's types.
pub use curvekit_algorithms as algorithms;
