//! Field, curve, pairing and hash-to-curve arithmetic for curvekit.
//!
//! This crate houses the numeric substrate: a width-parameterised Montgomery
//! field engine with per-curve specialisations, a generic short-Weierstrass
//! point engine, the Edwards/Ristretto/Ed448 layers, the BLS12-381 pairing
//! engine, and the RFC 9380 message expanders. The uniform `Scalar`/`Point`
//! facade lives in the `curvekit` crate.
//!
//! All arithmetic on secret operands is constant time: no secret-dependent
//! branches, no secret-dependent table indices. Conditional logic flows
//! through `subtle::Choice` and masked selects throughout.

#![deny(unsafe_code)]

pub mod ec;
pub mod error;
pub mod field;
pub mod hash2curve;

pub use error::{Error, Result};
