//! RFC 9380 message expansion.
//!
//! `expand_message_xmd` runs over any fixed-output hash implementing the
//! RustCrypto `Digest` trait; `expand_message_xof` over the SHAKE
//! extendable-output functions. The fixed hasher registry names the
//! algorithms hash-to-curve suites are built from; the labels feed the
//! domain-separation tags, e.g. `P-256_XMD:SHA-256_SSWU_RO_`.

use blake2::Blake2b512;
use digest::core_api::BlockSizeUser;
use digest::{Digest, ExtendableOutput, Update, XofReader};
use sha2::{Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};

/// Expansion family of a hasher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpandKind {
    /// `expand_message_xmd` over a fixed-output hash.
    Xmd,
    /// `expand_message_xof` over an extendable-output function.
    Xof,
}

impl ExpandKind {
    /// The tag fragment used inside domain-separation strings.
    pub fn label(&self) -> &'static str {
        match self {
            ExpandKind::Xmd => "XMD",
            ExpandKind::Xof => "XOF",
        }
    }
}

/// The hash algorithms available for hashing to curves and scalars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointHasher {
    /// SHA-256 (XMD).
    Sha256,
    /// SHA-384 (XMD).
    Sha384,
    /// SHA-512 (XMD).
    Sha512,
    /// SHA3-256 (XMD).
    Sha3_256,
    /// SHA3-384 (XMD).
    Sha3_384,
    /// SHA3-512 (XMD).
    Sha3_512,
    /// BLAKE2b-512 (XMD).
    Blake2b,
    /// SHAKE-128 (XOF).
    Shake128,
    /// SHAKE-256 (XOF).
    Shake256,
}

impl PointHasher {
    /// Which expander this hasher drives.
    pub fn kind(&self) -> ExpandKind {
        match self {
            PointHasher::Shake128 | PointHasher::Shake256 => ExpandKind::Xof,
            _ => ExpandKind::Xmd,
        }
    }

    /// The algorithm name as it appears in domain-separation tags.
    pub fn label(&self) -> &'static str {
        match self {
            PointHasher::Sha256 => "SHA-256",
            PointHasher::Sha384 => "SHA-384",
            PointHasher::Sha512 => "SHA-512",
            PointHasher::Sha3_256 => "SHA3-256",
            PointHasher::Sha3_384 => "SHA3-384",
            PointHasher::Sha3_512 => "SHA3-512",
            PointHasher::Blake2b => "BLAKE2b",
            PointHasher::Shake128 => "SHAKE-128",
            PointHasher::Shake256 => "SHAKE-256",
        }
    }

    /// Expand `msg` under `dst` to `len` uniform bytes.
    pub fn expand(&self, msg: &[u8], dst: &[u8], len: usize) -> Vec<u8> {
        match self {
            PointHasher::Sha256 => expand_message_xmd::<Sha256>(msg, dst, len),
            PointHasher::Sha384 => expand_message_xmd::<Sha384>(msg, dst, len),
            PointHasher::Sha512 => expand_message_xmd::<Sha512>(msg, dst, len),
            PointHasher::Sha3_256 => expand_message_xmd::<Sha3_256>(msg, dst, len),
            PointHasher::Sha3_384 => expand_message_xmd::<Sha3_384>(msg, dst, len),
            PointHasher::Sha3_512 => expand_message_xmd::<Sha3_512>(msg, dst, len),
            PointHasher::Blake2b => expand_message_xmd::<Blake2b512>(msg, dst, len),
            PointHasher::Shake128 => expand_message_xof::<Shake128>(msg, dst, len),
            PointHasher::Shake256 => expand_message_xof::<Shake256>(msg, dst, len),
        }
    }
}

/// `expand_message_xmd` (RFC 9380 §5.3.1).
///
/// `len` must fit in 255 hash blocks and the DST must be at most 255 bytes;
/// every caller in this library uses fixed lengths that satisfy both.
pub fn expand_message_xmd<D>(msg: &[u8], dst: &[u8], len: usize) -> Vec<u8>
where
    D: Digest + BlockSizeUser,
{
    let b_len = <D as Digest>::output_size();
    let ell = len.div_ceil(b_len);
    debug_assert!(ell <= 255);
    debug_assert!(dst.len() <= 255);

    let z_pad = vec![0u8; <D as BlockSizeUser>::block_size()];
    let l_i_b = (len as u16).to_be_bytes();

    let mut h = D::new();
    Digest::update(&mut h, &z_pad);
    Digest::update(&mut h, msg);
    Digest::update(&mut h, l_i_b);
    Digest::update(&mut h, [0u8]);
    Digest::update(&mut h, dst);
    Digest::update(&mut h, [dst.len() as u8]);
    let b0 = h.finalize();

    let mut h = D::new();
    Digest::update(&mut h, &b0);
    Digest::update(&mut h, [1u8]);
    Digest::update(&mut h, dst);
    Digest::update(&mut h, [dst.len() as u8]);
    let mut bi = h.finalize();

    let mut out = Vec::with_capacity(ell * b_len);
    out.extend_from_slice(&bi);
    for i in 2..=ell {
        let mut h = D::new();
        let mixed: Vec<u8> = b0.iter().zip(bi.iter()).map(|(a, b)| a ^ b).collect();
        Digest::update(&mut h, &mixed);
        Digest::update(&mut h, [i as u8]);
        Digest::update(&mut h, dst);
        Digest::update(&mut h, [dst.len() as u8]);
        bi = h.finalize();
        out.extend_from_slice(&bi);
    }
    out.truncate(len);
    out
}

/// `expand_message_xof` (RFC 9380 §5.3.2).
pub fn expand_message_xof<X>(msg: &[u8], dst: &[u8], len: usize) -> Vec<u8>
where
    X: Default + Update + ExtendableOutput,
{
    debug_assert!(dst.len() <= 255);
    let mut h = X::default();
    h.update(msg);
    h.update(&(len as u16).to_be_bytes());
    h.update(dst);
    h.update(&[dst.len() as u8]);
    let mut out = vec![0u8; len];
    h.finalize_xof().read(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 9380 appendix K.1 (SHA-256, 32-byte outputs).
    #[test]
    fn xmd_sha256_rfc_vectors() {
        let dst = b"QUUX-V01-CS02-with-expander-SHA256-128";
        let cases: [(&[u8], &str); 3] = [
            (
                b"",
                "68a985b87eb6b46952128911f2a4412bbc302a9d759667f87f7a21d803f07235",
            ),
            (
                b"abc",
                "d8ccab23b5985ccea865c6c97b6e5b8350e794e603b4b97902f53a8a0d605615",
            ),
            (
                b"abcdef0123456789",
                "eff31487c770a893cfb36f912fbfcbff40d5661771ca4b2cb4eafe524333f5c1",
            ),
        ];
        for (msg, expected) in cases {
            let out = expand_message_xmd::<sha2::Sha256>(msg, dst, 0x20);
            assert_eq!(hex::encode(out), expected);
        }
    }

    // RFC 9380 appendix K.6 (SHAKE-256, 32-byte outputs).
    #[test]
    fn xof_shake256_rfc_vectors() {
        let dst = b"QUUX-V01-CS02-with-expander-SHAKE256";
        let cases: [(&[u8], &str); 2] = [
            (
                b"",
                "2ffc05c48ed32b95d72e807f6eab9f7530dd1c2f013914c8fed38c5ccc15ad76",
            ),
            (
                b"abc",
                "b39e493867e2767216792abce1f2676c197c0692aed061560ead251821808e07",
            ),
        ];
        for (msg, expected) in cases {
            let out = expand_message_xof::<sha3::Shake256>(msg, dst, 0x20);
            assert_eq!(hex::encode(out), expected);
        }
    }

    #[test]
    fn xmd_multi_block() {
        // 3 SHA-256 blocks worth of output stays deterministic and
        // length-exact.
        let out = expand_message_xmd::<sha2::Sha256>(b"msg", b"DST", 96);
        assert_eq!(out.len(), 96);
        let again = expand_message_xmd::<sha2::Sha256>(b"msg", b"DST", 96);
        assert_eq!(out, again);
        // The requested length is bound into b_0, so a different length
        // yields an unrelated stream.
        let longer = expand_message_xmd::<sha2::Sha256>(b"msg", b"DST", 128);
        assert_ne!(&longer[..96], &out[..]);
    }
}
