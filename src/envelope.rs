//! The serialization envelope: `<curve name> ":" <payload>`.
//!
//! The binary form carries raw payload bytes, the text form carries the
//! payload hex-encoded, and the JSON form is `{"type": name, "value":
//! hex}`. The name prefix lets a decoder pick the curve and with it the
//! exact payload width; unknown names fail with
//! [`Error::UnrecognizedCurve`].

use serde::{Deserialize, Serialize};

use crate::curve::{Curve, CurveId, BLS12381_NAME};
use crate::point::Point;
use crate::scalar::Scalar;
use crate::{Error, Result};

const SEPARATOR: u8 = b':';

fn split_name(input: &[u8]) -> Result<(&[u8], &[u8])> {
    let idx = input
        .iter()
        .position(|b| *b == SEPARATOR)
        .ok_or(Error::UnrecognizedCurve)?;
    Ok((&input[..idx], &input[idx + 1..]))
}

fn lookup(name_bytes: &[u8]) -> Result<CurveId> {
    let name = core::str::from_utf8(name_bytes).map_err(|_| Error::UnrecognizedCurve)?;
    // The pairing-curve name carries Gt payloads.
    if name == BLS12381_NAME {
        return Ok(CurveId::Bls12381Gt);
    }
    Curve::by_name(name).map(|c| c.id)
}

fn scalar_envelope_name(scalar: &Scalar) -> &'static str {
    scalar.curve_id().name()
}

/// Encode a scalar as `<name>:<bytes>`.
pub fn scalar_to_binary(scalar: &Scalar) -> Vec<u8> {
    let name = scalar_envelope_name(scalar).as_bytes();
    let payload = scalar.to_bytes();
    let mut out = Vec::with_capacity(name.len() + 1 + payload.len());
    out.extend_from_slice(name);
    out.push(SEPARATOR);
    out.extend_from_slice(&payload);
    out
}

/// Decode a scalar from `<name>:<bytes>`.
pub fn scalar_from_binary(input: &[u8]) -> Result<Scalar> {
    let (name, payload) = split_name(input)?;
    let id = lookup(name)?;
    Scalar::from_bytes(id, payload)
}

/// Encode a scalar as `<name>:<hex>`.
pub fn scalar_to_text(scalar: &Scalar) -> Vec<u8> {
    let name = scalar_envelope_name(scalar).as_bytes();
    let payload = hex::encode(scalar.to_bytes());
    let mut out = Vec::with_capacity(name.len() + 1 + payload.len());
    out.extend_from_slice(name);
    out.push(SEPARATOR);
    out.extend_from_slice(payload.as_bytes());
    out
}

/// Decode a scalar from `<name>:<hex>`; the hex may be either case.
pub fn scalar_from_text(input: &[u8]) -> Result<Scalar> {
    let (name, payload) = split_name(input)?;
    let id = lookup(name)?;
    let raw = decode_hex(payload)?;
    Scalar::from_bytes(id, &raw)
}

/// Encode a point as `<name>:<compressed bytes>`.
pub fn point_to_binary(point: &Point) -> Vec<u8> {
    let name = point.curve_name().as_bytes();
    let payload = point.to_affine_compressed();
    let mut out = Vec::with_capacity(name.len() + 1 + payload.len());
    out.extend_from_slice(name);
    out.push(SEPARATOR);
    out.extend_from_slice(&payload);
    out
}

/// Decode a point from `<name>:<compressed bytes>`.
pub fn point_from_binary(input: &[u8]) -> Result<Point> {
    let (name, payload) = split_name(input)?;
    let id = lookup(name)?;
    Point::from_affine_compressed(id, payload)
}

/// Encode a point as `<name>:<hex>`.
pub fn point_to_text(point: &Point) -> Vec<u8> {
    let name = point.curve_name().as_bytes();
    let payload = hex::encode(point.to_affine_compressed());
    let mut out = Vec::with_capacity(name.len() + 1 + payload.len());
    out.extend_from_slice(name);
    out.push(SEPARATOR);
    out.extend_from_slice(payload.as_bytes());
    out
}

/// Decode a point from `<name>:<hex>`; the hex may be either case.
pub fn point_from_text(input: &[u8]) -> Result<Point> {
    let (name, payload) = split_name(input)?;
    let id = lookup(name)?;
    let raw = decode_hex(payload)?;
    Point::from_affine_compressed(id, &raw)
}

#[derive(Serialize, Deserialize)]
struct JsonEnvelope {
    #[serde(rename = "type")]
    kind: String,
    value: String,
}

/// Encode a scalar as `{"type": name, "value": hex}`.
pub fn scalar_to_json(scalar: &Scalar) -> String {
    let env = JsonEnvelope {
        kind: scalar_envelope_name(scalar).to_string(),
        value: hex::encode(scalar.to_bytes()),
    };
    // The envelope struct has no unserialisable states.
    serde_json::to_string(&env).expect("envelope serialisation")
}

/// Decode a scalar from its JSON envelope.
pub fn scalar_from_json(input: &str) -> Result<Scalar> {
    let env: JsonEnvelope =
        serde_json::from_str(input).map_err(|_| Error::InvalidEncoding)?;
    let id = lookup(env.kind.as_bytes())?;
    let raw = decode_hex(env.value.as_bytes())?;
    Scalar::from_bytes(id, &raw)
}

/// Encode a point as `{"type": name, "value": hex}`.
pub fn point_to_json(point: &Point) -> String {
    let env = JsonEnvelope {
        kind: point.curve_name().to_string(),
        value: hex::encode(point.to_affine_compressed()),
    };
    serde_json::to_string(&env).expect("envelope serialisation")
}

/// Decode a point from its JSON envelope.
pub fn point_from_json(input: &str) -> Result<Point> {
    let env: JsonEnvelope =
        serde_json::from_str(input).map_err(|_| Error::InvalidEncoding)?;
    let id = lookup(env.kind.as_bytes())?;
    let raw = decode_hex(env.value.as_bytes())?;
    Point::from_affine_compressed(id, &raw)
}

fn decode_hex(payload: &[u8]) -> Result<Vec<u8>> {
    hex::decode(payload).map_err(|_| Error::InvalidEncoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::K256_NAME;

    #[test]
    fn missing_separator_is_unrecognized() {
        assert!(matches!(
            scalar_from_binary(b"secp256k1"),
            Err(Error::UnrecognizedCurve)
        ));
        assert!(matches!(
            point_from_binary(b""),
            Err(Error::UnrecognizedCurve)
        ));
    }

    #[test]
    fn wrong_payload_width_is_a_length_error() {
        let mut input = Vec::from(&b"secp256k1:"[..]);
        input.extend_from_slice(&[0u8; 5]);
        assert!(matches!(
            scalar_from_binary(&input),
            Err(Error::InvalidLength { .. })
        ));
    }

    #[test]
    fn name_prefix_binds_the_curve() {
        let curve = Curve::by_name(K256_NAME).unwrap();
        let s = curve.scalar_new(77);
        let mut bin = scalar_to_binary(&s);
        // Rewriting the prefix to another curve name changes the decoding
        // domain (and here also the expected width, so it fails cleanly).
        bin.splice(..9, b"BLS12831:".iter().copied());
        assert!(scalar_from_binary(&bin).is_err());
    }

    #[test]
    fn malformed_hex_is_invalid_encoding() {
        assert!(matches!(
            scalar_from_text(b"secp256k1:zz"),
            Err(Error::InvalidEncoding)
        ));
    }

    #[test]
    fn malformed_json_is_invalid_encoding() {
        assert!(matches!(
            scalar_from_json("{\"type\":"),
            Err(Error::InvalidEncoding)
        ));
        assert!(matches!(
            scalar_from_json("{\"type\":\"curve9000\",\"value\":\"00\"}"),
            Err(Error::UnrecognizedCurve)
        ));
    }
}
