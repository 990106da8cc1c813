//! Elliptic-curve arithmetic for every supported curve.
//!
//! The short-Weierstrass curves (secp256k1, P-256, P-384, Pallas and the
//! BLS12-381 groups) share the generic engine in [`weierstrass`]; the
//! Edwards family has its own layers. Each curve module owns its field
//! specialisations, curve constants and hash-to-curve suite.

pub mod bls12381;
pub mod ed25519;
pub mod ed448;
pub mod k256;
pub mod p256;
pub mod p384;
pub mod pasta;
pub mod ristretto255;
pub mod sswu;
pub mod weierstrass;
