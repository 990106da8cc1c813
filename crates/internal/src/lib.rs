//! Limb-level arithmetic and constant-time helpers shared by the curvekit
//! crates.
//!
//! Everything here operates on 64-bit limbs in little-endian order and is
//! branch-free with respect to the operand values.

#![no_std]
#![deny(unsafe_code)]

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Compute `a + b + carry`, returning the result and the new carry.
#[inline(always)]
pub const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute `a - (b + borrow)`, returning the result and the new borrow.
///
/// The borrow is all-ones on underflow and zero otherwise, so it can be used
/// directly as a mask.
#[inline(always)]
pub const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute `a + (b * c) + carry`, returning the result and the new carry.
#[inline(always)]
pub const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Constant-time equality of two limb slices of the same length.
pub fn ct_limbs_eq(lhs: &[u64], rhs: &[u64]) -> Choice {
    debug_assert_eq!(lhs.len(), rhs.len());
    let mut t = 0u64;
    for (l, r) in lhs.iter().zip(rhs.iter()) {
        t |= l ^ r;
    }
    t.ct_eq(&0)
}

/// Constant-time test for an all-zero limb slice.
pub fn ct_limbs_zero(limbs: &[u64]) -> Choice {
    let mut t = 0u64;
    for l in limbs {
        t |= l;
    }
    t.ct_eq(&0)
}

/// Constant-time three-way comparison of two little-endian limb slices.
///
/// Returns -1, 0 or 1 for less-than, equal and greater-than. The limbs are
/// compared as unsigned integers; the scan runs over every limb regardless
/// of where the first difference occurs.
pub fn ct_limbs_cmp(lhs: &[u64], rhs: &[u64]) -> i32 {
    debug_assert_eq!(lhs.len(), rhs.len());
    let mut gt = 0u64;
    let mut lt = 0u64;
    for i in (0..lhs.len()).rev() {
        // Split each limb so the subtractions below cannot wrap; the sign of
        // the half-width difference lands in bit 32.
        let l_hi = lhs[i] >> 32;
        let l_lo = lhs[i] & 0xffff_ffff;
        let r_hi = rhs[i] >> 32;
        let r_lo = rhs[i] & 0xffff_ffff;

        gt |= (r_hi.wrapping_sub(l_hi) >> 32) & 1 & !lt;
        lt |= (l_hi.wrapping_sub(r_hi) >> 32) & 1 & !gt;
        gt |= (r_lo.wrapping_sub(l_lo) >> 32) & 1 & !lt;
        lt |= (l_lo.wrapping_sub(r_lo) >> 32) & 1 & !gt;
    }
    gt as i32 - lt as i32
}

/// Select `a` when `choice` is 0 and `b` when `choice` is 1, limb-wise.
pub fn ct_limbs_select(a: &[u64], b: &[u64], choice: Choice, out: &mut [u64]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    for i in 0..a.len() {
        out[i] = u64::conditional_select(&a[i], &b[i], choice);
    }
}

/// Constant-time byte-slice equality; slices of different length compare
/// unequal without inspecting the contents.
pub fn ct_bytes_eq(a: &[u8], b: &[u8]) -> Choice {
    if a.len() != b.len() {
        return Choice::from(0);
    }
    a.ct_eq(b)
}

/// Reverse a byte slice into a new fixed-size array.
///
/// Used to bridge the big-endian wire forms and the little-endian limb
/// order.
pub fn reverse_bytes<const N: usize>(input: &[u8]) -> [u8; N] {
    debug_assert_eq!(input.len(), N);
    let mut out = [0u8; N];
    for (o, i) in out.iter_mut().zip(input.iter().rev()) {
        *o = *i;
    }
    out
}

/// Reverse a byte slice in place.
pub fn reverse_bytes_in_place(bytes: &mut [u8]) {
    bytes.reverse();
}

/// Read little-endian bytes into little-endian limbs.
pub fn le_bytes_to_limbs(bytes: &[u8], limbs: &mut [u64]) {
    debug_assert_eq!(bytes.len(), limbs.len() * 8);
    for (i, chunk) in bytes.chunks_exact(8).enumerate() {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        limbs[i] = u64::from_le_bytes(word);
    }
}

/// Write little-endian limbs as little-endian bytes.
pub fn limbs_to_le_bytes(limbs: &[u64], bytes: &mut [u8]) {
    debug_assert_eq!(bytes.len(), limbs.len() * 8);
    for (chunk, limb) in bytes.chunks_exact_mut(8).zip(limbs.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adc_carries() {
        assert_eq!(adc(u64::MAX, 1, 0), (0, 1));
        assert_eq!(adc(1, 2, 1), (4, 0));
    }

    #[test]
    fn sbb_borrows() {
        let (d, b) = sbb(0, 1, 0);
        assert_eq!(d, u64::MAX);
        assert_eq!(b, u64::MAX);
        let (d, b) = sbb(5, 1, b);
        assert_eq!(d, 3);
        assert_eq!(b, 0);
    }

    #[test]
    fn mac_accumulates() {
        // 3 + 7 * 9 + 1 = 68
        assert_eq!(mac(3, 7, 9, 1), (68, 0));
        let (lo, hi) = mac(0, u64::MAX, u64::MAX, 0);
        assert_eq!(lo, 1);
        assert_eq!(hi, u64::MAX - 1);
    }

    #[test]
    fn limb_compare() {
        let a = [1u64, 2, 3, 4];
        let b = [1u64, 2, 3, 5];
        assert_eq!(ct_limbs_cmp(&a, &b), -1);
        assert_eq!(ct_limbs_cmp(&b, &a), 1);
        assert_eq!(ct_limbs_cmp(&a, &a), 0);
        // Difference only in a low limb.
        let c = [2u64, 2, 3, 4];
        assert_eq!(ct_limbs_cmp(&a, &c), -1);
    }

    #[test]
    fn byte_round_trip() {
        let limbs = [0x0123_4567_89ab_cdefu64, 0xfedc_ba98_7654_3210];
        let mut bytes = [0u8; 16];
        limbs_to_le_bytes(&limbs, &mut bytes);
        let mut back = [0u64; 2];
        le_bytes_to_limbs(&bytes, &mut back);
        assert_eq!(limbs, back);
    }

    #[test]
    fn reverse_round_trip() {
        let fwd = [1u8, 2, 3, 4];
        let rev: [u8; 4] = reverse_bytes(&fwd);
        assert_eq!(rev, [4, 3, 2, 1]);
    }
}
