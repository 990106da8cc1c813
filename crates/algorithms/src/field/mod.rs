//! Width-parameterised Montgomery prime-field engine.
//!
//! One engine serves every base and scalar field in the library. A
//! [`FieldParams`] block carries the modulus together with the derived
//! Montgomery constants (R, R², R³, −p⁻¹ mod 2⁶⁴) and a square-root
//! descriptor; the arithmetic itself is generic over the limb count
//! (4, 6 or 7 limbs of 64 bits). Concrete field element types are produced
//! by the [`prime_field!`] macro, which binds a parameter block to a newtype
//! and emits the full operator surface.
//!
//! Elements are always held in Montgomery form and always fully reduced.
//! Every operation is branch-free with respect to the operand values; the
//! only branches are over public parameters (limb count, square-root
//! algorithm).

use curvekit_internal::{adc, ct_limbs_cmp, ct_limbs_eq, ct_limbs_select, ct_limbs_zero, mac, sbb};
use subtle::Choice;

/// Largest limb count used by any supported field (Ed448).
pub const MAX_LIMBS: usize = 7;

/// Square-root strategy for a prime field, selected by the residue class of
/// the modulus.
#[derive(Clone, Copy, Debug)]
pub enum SqrtAlgorithm<const N: usize> {
    /// p ≡ 3 (mod 4): a^((p+1)/4) is a root whenever one exists.
    ThreeMod4 {
        /// (p + 1) / 4 as little-endian limbs.
        exp: [u64; N],
    },
    /// p ≡ 5 (mod 8): a^((p+3)/8), corrected by √−1 when needed.
    FiveMod8 {
        /// (p + 3) / 8 as little-endian limbs.
        exp: [u64; N],
        /// √−1 in Montgomery form.
        sqrt_m1: [u64; N],
    },
    /// General case, constant-time Tonelli–Shanks with a fixed iteration
    /// count. `c1` is the 2-adicity of p − 1, `c3 = (c2 − 1) / 2` for the
    /// odd part c2, and `c5 = g^c2` (Montgomery form) for the fixed
    /// quadratic non-residue g = 7.
    TonelliShanks {
        /// 2-adicity of p − 1.
        c1: u32,
        /// (c2 − 1) / 2 where p − 1 = 2^c1 · c2.
        c3: [u64; N],
        /// g^c2 · R mod p.
        c5: [u64; N],
    },
}

/// Parameter block for a prime field with an N-limb modulus.
#[derive(Clone, Copy, Debug)]
pub struct FieldParams<const N: usize> {
    /// The modulus p as little-endian limbs.
    pub modulus: [u64; N],
    /// −p⁻¹ mod 2⁶⁴, the Montgomery reduction multiplier.
    pub mod_neg_inv: u64,
    /// R = 2^(64·N) mod p.
    pub r: [u64; N],
    /// R² mod p.
    pub r2: [u64; N],
    /// R³ mod p.
    pub r3: [u64; N],
    /// (p − 1) / 2, the Euler-criterion exponent.
    pub euler_exp: [u64; N],
    /// Square-root descriptor.
    pub sqrt: SqrtAlgorithm<N>,
}

impl<const N: usize> FieldParams<N> {
    /// Canonical byte width of a field element.
    pub const fn byte_len(&self) -> usize {
        N * 8
    }

    /// Reduce an N-limb value plus an overflow bit into [0, p).
    ///
    /// The true value `carry·2^(64N) + t` must be below 2p.
    fn reduce_carry(&self, t: &[u64; N], carry: u64) -> [u64; N] {
        let mut d = [0u64; N];
        let mut borrow = 0u64;
        for i in 0..N {
            let (di, b) = sbb(t[i], self.modulus[i], borrow);
            d[i] = di;
            borrow = b;
        }
        // Keep the difference when the subtraction did not borrow, or when
        // the overflow bit cancels the borrow.
        let take_diff = Choice::from((carry & 1) as u8) | !Choice::from((borrow & 1) as u8);
        let mut out = [0u64; N];
        ct_limbs_select(t, &d, take_diff, &mut out);
        out
    }

    /// Modular addition.
    pub fn add(&self, a: &[u64; N], b: &[u64; N]) -> [u64; N] {
        let mut t = [0u64; N];
        let mut carry = 0u64;
        for i in 0..N {
            let (ti, c) = adc(a[i], b[i], carry);
            t[i] = ti;
            carry = c;
        }
        self.reduce_carry(&t, carry)
    }

    /// Modular subtraction, via a conditional add of p on borrow.
    pub fn sub(&self, a: &[u64; N], b: &[u64; N]) -> [u64; N] {
        let mut d = [0u64; N];
        let mut borrow = 0u64;
        for i in 0..N {
            let (di, bo) = sbb(a[i], b[i], borrow);
            d[i] = di;
            borrow = bo;
        }
        // borrow is all-ones on underflow; use it to mask in the modulus.
        let mut carry = 0u64;
        for i in 0..N {
            let (di, c) = adc(d[i], self.modulus[i] & borrow, carry);
            d[i] = di;
            carry = c;
        }
        d
    }

    /// Modular negation; zero stays zero.
    pub fn neg(&self, a: &[u64; N]) -> [u64; N] {
        let mut t = [0u64; N];
        let mut borrow = 0u64;
        for i in 0..N {
            let (ti, b) = sbb(self.modulus[i], a[i], borrow);
            t[i] = ti;
            borrow = b;
        }
        // t equals p when a is zero; mask it away in that case.
        let keep = (ct_limbs_zero(a).unwrap_u8() as u64).wrapping_sub(1);
        let mut out = [0u64; N];
        for i in 0..N {
            out[i] = t[i] & keep;
        }
        out
    }

    /// Montgomery multiplication.
    pub fn mul(&self, a: &[u64; N], b: &[u64; N]) -> [u64; N] {
        let mut rr = [0u64; 2 * MAX_LIMBS];
        for i in 0..N {
            let mut carry = 0u64;
            for j in 0..N {
                let (lo, c) = mac(rr[i + j], a[i], b[j], carry);
                rr[i + j] = lo;
                carry = c;
            }
            rr[i + N] = carry;
        }
        self.montgomery_reduce(&mut rr)
    }

    /// Montgomery squaring, exploiting the symmetry of the cross terms.
    pub fn square(&self, a: &[u64; N]) -> [u64; N] {
        let mut rr = [0u64; 2 * MAX_LIMBS];
        for i in 0..N - 1 {
            let mut carry = 0u64;
            for j in i + 1..N {
                let (lo, c) = mac(rr[i + j], a[i], a[j], carry);
                rr[i + j] = lo;
                carry = c;
            }
            rr[i + N] = carry;
        }
        rr[2 * N - 1] = rr[2 * N - 2] >> 63;
        for i in (1..2 * N - 1).rev() {
            rr[i] = (rr[i] << 1) | (rr[i - 1] >> 63);
        }

        let (lo, mut carry) = mac(0, a[0], a[0], 0);
        rr[0] = lo;
        let (lo, c) = adc(0, rr[1], carry);
        rr[1] = lo;
        carry = c;
        let mut j = 2;
        for i in 1..N {
            let (lo, c) = mac(rr[j], a[i], a[i], carry);
            rr[j] = lo;
            carry = c;
            j += 1;
            let (lo, c) = adc(0, rr[j], carry);
            rr[j] = lo;
            carry = c;
            j += 1;
        }
        self.montgomery_reduce(&mut rr)
    }

    /// Montgomery reduction of a double-width value (HAC 14.32).
    fn montgomery_reduce(&self, rr: &mut [u64; 2 * MAX_LIMBS]) -> [u64; N] {
        let mut carry2 = 0u64;
        for i in 0..N {
            let k = rr[i].wrapping_mul(self.mod_neg_inv);
            let (_, mut carry) = mac(rr[i], k, self.modulus[0], 0);
            for j in 1..N {
                let (lo, c) = mac(rr[i + j], k, self.modulus[j], carry);
                rr[i + j] = lo;
                carry = c;
            }
            let (lo, c) = adc(rr[i + N], carry2, carry);
            rr[i + N] = lo;
            carry2 = c;
        }
        let mut t = [0u64; N];
        t.copy_from_slice(&rr[N..2 * N]);
        self.reduce_carry(&t, carry2)
    }

    /// Convert a canonical value to Montgomery form.
    pub fn to_montgomery(&self, a: &[u64; N]) -> [u64; N] {
        self.mul(a, &self.r2)
    }

    /// Convert a Montgomery value back to canonical form.
    pub fn from_montgomery(&self, a: &[u64; N]) -> [u64; N] {
        let mut rr = [0u64; 2 * MAX_LIMBS];
        rr[..N].copy_from_slice(a);
        self.montgomery_reduce(&mut rr)
    }

    /// Constant-time left-to-right exponentiation by a public-width
    /// exponent, with a masked select on every bit.
    pub fn pow(&self, base: &[u64; N], exp: &[u64; N]) -> [u64; N] {
        let mut res = self.r;
        for i in (0..N).rev() {
            for j in (0..64).rev() {
                res = self.square(&res);
                let tmp = self.mul(&res, base);
                let bit = Choice::from(((exp[i] >> j) & 1) as u8);
                let mut sel = [0u64; N];
                ct_limbs_select(&res, &tmp, bit, &mut sel);
                res = sel;
            }
        }
        res
    }

    /// Raise to the power 2^k by repeated squaring.
    pub fn pow2k(&self, a: &[u64; N], k: u32) -> [u64; N] {
        let mut t = *a;
        for _ in 0..k {
            t = self.square(&t);
        }
        t
    }

    /// Fermat inversion: a^(p−2). Returns the result and a flag that is
    /// false exactly when the input was zero (the result is then zero).
    pub fn invert(&self, a: &[u64; N]) -> ([u64; N], Choice) {
        let mut exp = self.modulus;
        let (e0, mut borrow) = sbb(exp[0], 2, 0);
        exp[0] = e0;
        for limb in exp.iter_mut().skip(1) {
            let (ei, b) = sbb(*limb, 0, borrow);
            *limb = ei;
            borrow = b;
        }
        let t = self.pow(a, &exp);
        let was_nonzero = !ct_limbs_zero(a);
        let zero = [0u64; N];
        let mut out = [0u64; N];
        ct_limbs_select(&zero, &t, was_nonzero, &mut out);
        (out, was_nonzero)
    }

    /// Square root per the field's descriptor. Returns the candidate root
    /// and a flag that is true iff the input was a square (the root then
    /// satisfies root² = a).
    pub fn sqrt(&self, a: &[u64; N]) -> ([u64; N], Choice) {
        match &self.sqrt {
            SqrtAlgorithm::ThreeMod4 { exp } => {
                let s = self.pow(a, exp);
                let ok = ct_limbs_eq(&self.square(&s), a);
                (s, ok)
            }
            SqrtAlgorithm::FiveMod8 { exp, sqrt_m1 } => {
                let s = self.pow(a, exp);
                let direct = ct_limbs_eq(&self.square(&s), a);
                let s_i = self.mul(&s, sqrt_m1);
                let mut out = [0u64; N];
                ct_limbs_select(&s_i, &s, direct, &mut out);
                let ok = ct_limbs_eq(&self.square(&out), a);
                (out, ok)
            }
            SqrtAlgorithm::TonelliShanks { c1, c3, c5 } => {
                let mut z = self.pow(a, c3);
                let mut t = self.square(&z);
                t = self.mul(&t, a);
                z = self.mul(&z, a);
                let mut b = t;
                let mut c = *c5;
                let mut i = *c1;
                while i >= 2 {
                    let mut j = 1;
                    while j <= i - 2 {
                        b = self.square(&b);
                        j += 1;
                    }
                    let flag = !ct_limbs_eq(&b, &self.r);
                    let tv = self.mul(&z, &c);
                    let mut sel = [0u64; N];
                    ct_limbs_select(&z, &tv, flag, &mut sel);
                    z = sel;
                    c = self.square(&c);
                    let tv = self.mul(&t, &c);
                    ct_limbs_select(&t, &tv, flag, &mut sel);
                    t = sel;
                    b = t;
                    i -= 1;
                }
                let ok = ct_limbs_eq(&self.square(&z), a);
                (z, ok)
            }
        }
    }

    /// Euler's criterion: true for zero and quadratic residues.
    pub fn is_square(&self, a: &[u64; N]) -> Choice {
        let t = self.pow(a, &self.euler_exp);
        ct_limbs_eq(&t, &self.r) | ct_limbs_zero(a)
    }

    /// Three-way compare of the canonical (non-Montgomery) values.
    pub fn cmp_canonical(&self, a: &[u64; N], b: &[u64; N]) -> i32 {
        let ac = self.from_montgomery(a);
        let bc = self.from_montgomery(b);
        ct_limbs_cmp(&ac, &bc)
    }

    /// Parity of the canonical value (the hash-to-curve sgn0).
    pub fn sgn0(&self, a: &[u64; N]) -> Choice {
        let c = self.from_montgomery(a);
        Choice::from((c[0] & 1) as u8)
    }
}

/// The capability set shared by every macro-generated field element,
/// consumed by the generic point engines.
pub trait PrimeFieldElement:
    Copy
    + Clone
    + Default
    + core::fmt::Debug
    + PartialEq
    + subtle::ConditionallySelectable
    + subtle::ConstantTimeEq
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;
    /// The multiplicative identity.
    fn one() -> Self;
    /// Lift a small integer into the field.
    fn from_u64(v: u64) -> Self;
    /// True iff the element is zero.
    fn is_zero(&self) -> Choice;
    /// Squaring.
    fn square(&self) -> Self;
    /// Doubling.
    fn double(&self) -> Self;
    /// Multiplicative inverse; `None` for zero.
    fn invert(&self) -> subtle::CtOption<Self>;
    /// Square root; `None` for non-residues.
    fn sqrt(&self) -> subtle::CtOption<Self>;
    /// Euler's criterion.
    fn is_square(&self) -> Choice;
    /// Parity of the canonical representation.
    fn sgn0(&self) -> Choice;
}

/// Emit the standard operator matrix for a field element newtype.
#[macro_export]
macro_rules! field_op_impls {
    ($name:ident) => {
        impl<'a> core::ops::Neg for &'a $name {
            type Output = $name;
            #[inline]
            fn neg(self) -> $name {
                $name::neg(self)
            }
        }

        impl core::ops::Neg for $name {
            type Output = $name;
            #[inline]
            fn neg(self) -> $name {
                -&self
            }
        }

        impl<'a, 'b> core::ops::Add<&'b $name> for &'a $name {
            type Output = $name;
            #[inline]
            fn add(self, rhs: &'b $name) -> $name {
                $name::add(self, rhs)
            }
        }

        impl<'a, 'b> core::ops::Sub<&'b $name> for &'a $name {
            type Output = $name;
            #[inline]
            fn sub(self, rhs: &'b $name) -> $name {
                $name::sub(self, rhs)
            }
        }

        impl<'a, 'b> core::ops::Mul<&'b $name> for &'a $name {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: &'b $name) -> $name {
                $name::mul(self, rhs)
            }
        }

        impl core::ops::Add<$name> for $name {
            type Output = $name;
            #[inline]
            fn add(self, rhs: $name) -> $name {
                &self + &rhs
            }
        }

        impl<'b> core::ops::Add<&'b $name> for $name {
            type Output = $name;
            #[inline]
            fn add(self, rhs: &'b $name) -> $name {
                &self + rhs
            }
        }

        impl<'a> core::ops::Add<$name> for &'a $name {
            type Output = $name;
            #[inline]
            fn add(self, rhs: $name) -> $name {
                self + &rhs
            }
        }

        impl core::ops::Sub<$name> for $name {
            type Output = $name;
            #[inline]
            fn sub(self, rhs: $name) -> $name {
                &self - &rhs
            }
        }

        impl<'b> core::ops::Sub<&'b $name> for $name {
            type Output = $name;
            #[inline]
            fn sub(self, rhs: &'b $name) -> $name {
                &self - rhs
            }
        }

        impl<'a> core::ops::Sub<$name> for &'a $name {
            type Output = $name;
            #[inline]
            fn sub(self, rhs: $name) -> $name {
                self - &rhs
            }
        }

        impl core::ops::Mul<$name> for $name {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: $name) -> $name {
                &self * &rhs
            }
        }

        impl<'b> core::ops::Mul<&'b $name> for $name {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: &'b $name) -> $name {
                &self * rhs
            }
        }

        impl<'a> core::ops::Mul<$name> for &'a $name {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: $name) -> $name {
                self * &rhs
            }
        }

        impl core::ops::AddAssign<$name> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: $name) {
                *self = &*self + &rhs;
            }
        }

        impl<'b> core::ops::AddAssign<&'b $name> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: &'b $name) {
                *self = &*self + rhs;
            }
        }

        impl core::ops::SubAssign<$name> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: $name) {
                *self = &*self - &rhs;
            }
        }

        impl<'b> core::ops::SubAssign<&'b $name> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: &'b $name) {
                *self = &*self - rhs;
            }
        }

        impl core::ops::MulAssign<$name> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: $name) {
                *self = &*self * &rhs;
            }
        }

        impl<'b> core::ops::MulAssign<&'b $name> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: &'b $name) {
                *self = &*self * rhs;
            }
        }
    };
}

/// Emit a field element newtype over a [`FieldParams`] block.
///
/// The macro provides everything except `invert` and `sqrt`, which come from
/// [`field_invert_via_pow!`]/[`field_sqrt_via_params!`] or a hand-written
/// specialisation (secp256k1's base field carries its published addition
/// chain).
#[macro_export]
macro_rules! prime_field {
    ($(#[$attr:meta])* $name:ident, $params:path, $limbs:expr, $bytes:expr, $wide:expr) => {
        $(#[$attr])*
        #[derive(Clone, Copy)]
        pub struct $name(pub(crate) [u64; $limbs]);

        impl $name {
            /// Number of 64-bit limbs.
            pub const LIMBS: usize = $limbs;
            /// Canonical serialized width in bytes.
            pub const BYTES: usize = $bytes;
            /// Width of the wide (reduction) input in bytes.
            pub const WIDE_BYTES: usize = $wide;

            /// The additive identity.
            #[inline]
            pub const fn zero() -> Self {
                Self([0u64; $limbs])
            }

            /// The multiplicative identity.
            #[inline]
            pub fn one() -> Self {
                Self($params.r)
            }

            /// Construct from limbs already in Montgomery form.
            #[inline]
            pub const fn from_raw_unchecked(limbs: [u64; $limbs]) -> Self {
                Self(limbs)
            }

            /// Lift a small integer into the field.
            pub fn from_u64(v: u64) -> Self {
                let mut t = [0u64; $limbs];
                t[0] = v;
                Self($params.to_montgomery(&t))
            }

            /// True iff this element is zero.
            #[inline]
            pub fn is_zero(&self) -> subtle::Choice {
                curvekit_internal::ct_limbs_zero(&self.0)
            }

            /// True iff this element is one.
            #[inline]
            pub fn is_one(&self) -> subtle::Choice {
                curvekit_internal::ct_limbs_eq(&self.0, &$params.r)
            }

            /// Field addition.
            #[inline]
            pub fn add(&self, rhs: &Self) -> Self {
                Self($params.add(&self.0, &rhs.0))
            }

            /// Field subtraction.
            #[inline]
            pub fn sub(&self, rhs: &Self) -> Self {
                Self($params.sub(&self.0, &rhs.0))
            }

            /// Field multiplication.
            #[inline]
            pub fn mul(&self, rhs: &Self) -> Self {
                Self($params.mul(&self.0, &rhs.0))
            }

            /// Field negation.
            #[inline]
            pub fn neg(&self) -> Self {
                Self($params.neg(&self.0))
            }

            /// Squaring.
            #[inline]
            pub fn square(&self) -> Self {
                Self($params.square(&self.0))
            }

            /// Doubling.
            #[inline]
            pub fn double(&self) -> Self {
                Self($params.add(&self.0, &self.0))
            }

            /// Constant-time exponentiation by a little-endian limb exponent.
            pub fn pow(&self, exp: &[u64; $limbs]) -> Self {
                Self($params.pow(&self.0, exp))
            }

            /// Raise to the power 2^k.
            pub fn pow2k(&self, k: u32) -> Self {
                Self($params.pow2k(&self.0, k))
            }

            /// Euler's criterion; true for zero and quadratic residues.
            pub fn is_square(&self) -> subtle::Choice {
                $params.is_square(&self.0)
            }

            /// Parity of the canonical representation.
            pub fn sgn0(&self) -> subtle::Choice {
                $params.sgn0(&self.0)
            }

            /// Three-way compare of canonical values (-1, 0, 1).
            pub fn cmp_canonical(&self, rhs: &Self) -> i32 {
                $params.cmp_canonical(&self.0, &rhs.0)
            }

            /// Canonical little-endian serialisation.
            pub fn to_bytes(&self) -> [u8; $bytes] {
                let c = $params.from_montgomery(&self.0);
                let mut out = [0u8; $bytes];
                curvekit_internal::limbs_to_le_bytes(&c, &mut out);
                out
            }

            /// Canonical big-endian serialisation.
            pub fn to_be_bytes(&self) -> [u8; $bytes] {
                let mut out = self.to_bytes();
                out.reverse();
                out
            }

            /// Parse canonical little-endian bytes, rejecting values ≥ p.
            pub fn from_bytes(bytes: &[u8; $bytes]) -> subtle::CtOption<Self> {
                let mut limbs = [0u64; $limbs];
                curvekit_internal::le_bytes_to_limbs(bytes, &mut limbs);
                let in_range =
                    subtle::Choice::from(
                        (curvekit_internal::ct_limbs_cmp(&limbs, &$params.modulus) == -1) as u8,
                    );
                subtle::CtOption::new(Self($params.to_montgomery(&limbs)), in_range)
            }

            /// Parse canonical big-endian bytes, rejecting values ≥ p.
            pub fn from_be_bytes(bytes: &[u8; $bytes]) -> subtle::CtOption<Self> {
                let le: [u8; $bytes] = curvekit_internal::reverse_bytes(bytes);
                Self::from_bytes(&le)
            }

            /// Reduce a double-width little-endian value modulo p.
            ///
            /// The low half contributes via R² and the high half via R³, so
            /// the result equals the 2N-limb integer reduced modulo p.
            pub fn from_bytes_wide(bytes: &[u8; $wide]) -> Self {
                let mut lo = [0u64; $limbs];
                let mut hi = [0u64; $limbs];
                curvekit_internal::le_bytes_to_limbs(&bytes[..$bytes], &mut lo);
                curvekit_internal::le_bytes_to_limbs(&bytes[$bytes..], &mut hi);
                let d0 = $params.mul(&lo, &$params.r2);
                let d1 = $params.mul(&hi, &$params.r3);
                Self($params.add(&d0, &d1))
            }

            /// Draw a uniformly distributed element from a random source.
            pub fn random(mut rng: impl rand_core::RngCore) -> Self {
                let mut buf = [0u8; $wide];
                rng.fill_bytes(&mut buf);
                Self::from_bytes_wide(&buf)
            }
        }

        impl subtle::ConstantTimeEq for $name {
            fn ct_eq(&self, other: &Self) -> subtle::Choice {
                curvekit_internal::ct_limbs_eq(&self.0, &other.0)
            }
        }

        impl subtle::ConditionallySelectable for $name {
            fn conditional_select(a: &Self, b: &Self, choice: subtle::Choice) -> Self {
                let mut out = [0u64; $limbs];
                curvekit_internal::ct_limbs_select(&a.0, &b.0, choice, &mut out);
                Self(out)
            }
        }

        impl PartialEq for $name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                bool::from(subtle::ConstantTimeEq::ct_eq(self, other))
            }
        }

        impl Eq for $name {}

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let bytes = self.to_bytes();
                write!(f, "0x")?;
                for b in bytes.iter().rev() {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
        }

        impl zeroize::DefaultIsZeroes for $name {}

        $crate::field_op_impls!($name);
    };
}

/// Emit the default Fermat inversion for a field element type.
#[macro_export]
macro_rules! field_invert_via_pow {
    ($name:ident, $params:path) => {
        impl $name {
            /// Multiplicative inverse via a^(p−2); `None` for zero.
            pub fn invert(&self) -> subtle::CtOption<Self> {
                let (out, was_nonzero) = $params.invert(&self.0);
                subtle::CtOption::new(Self(out), was_nonzero)
            }
        }
    };
}

/// Emit the parameter-driven square root for a field element type.
#[macro_export]
macro_rules! field_sqrt_via_params {
    ($name:ident, $params:path) => {
        impl $name {
            /// Square root per the field's descriptor; `None` for
            /// non-residues.
            pub fn sqrt(&self) -> subtle::CtOption<Self> {
                let (out, was_square) = $params.sqrt(&self.0);
                subtle::CtOption::new(Self(out), was_square)
            }
        }
    };
}

/// Wire a macro-generated field type into [`PrimeFieldElement`].
#[macro_export]
macro_rules! field_element_trait_impl {
    ($name:ident) => {
        impl $crate::field::PrimeFieldElement for $name {
            #[inline]
            fn zero() -> Self {
                $name::zero()
            }
            #[inline]
            fn one() -> Self {
                $name::one()
            }
            #[inline]
            fn from_u64(v: u64) -> Self {
                $name::from_u64(v)
            }
            #[inline]
            fn is_zero(&self) -> subtle::Choice {
                $name::is_zero(self)
            }
            #[inline]
            fn square(&self) -> Self {
                $name::square(self)
            }
            #[inline]
            fn double(&self) -> Self {
                $name::double(self)
            }
            #[inline]
            fn invert(&self) -> subtle::CtOption<Self> {
                $name::invert(self)
            }
            #[inline]
            fn sqrt(&self) -> subtle::CtOption<Self> {
                $name::sqrt(self)
            }
            #[inline]
            fn is_square(&self) -> subtle::Choice {
                $name::is_square(self)
            }
            #[inline]
            fn sgn0(&self) -> subtle::Choice {
                $name::sgn0(self)
            }
        }
    };
}

#[cfg(test)]
mod tests;
