//! Quadratic extension Fp2 = Fp[u] / (u² + 1).

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::{Fp, FP_PARAMS};

/// An element c0 + c1·u of Fp2.
#[derive(Clone, Copy, Default)]
pub struct Fp2 {
    pub c0: Fp,
    pub c1: Fp,
}

/// (p − 3) / 4, the exponent of the Fp2 square-root precomputation.
const P_MINUS_3_OVER_4: [u64; 6] = [
    0xee7fbfffffffeaaa,
    0x07aaffffac54ffff,
    0xd9cc34a83dac3d89,
    0xd91dd2e13ce144af,
    0x92c6e9ed90d2eb35,
    0x0680447a8e5ff9a6,
];

impl Fp2 {
    pub const fn zero() -> Self {
        Self {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    pub fn one() -> Self {
        Self {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    pub fn from_u64(v: u64) -> Self {
        Self {
            c0: Fp::from_u64(v),
            c1: Fp::zero(),
        }
    }

    pub fn from_fp(c0: Fp) -> Self {
        Self {
            c0,
            c1: Fp::zero(),
        }
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    pub fn is_one(&self) -> Choice {
        self.c0.is_one() & self.c1.is_zero()
    }

    pub fn add(&self, rhs: &Self) -> Self {
        Self {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        Self {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
        }
    }

    pub fn neg(&self) -> Self {
        Self {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
        }
    }

    pub fn double(&self) -> Self {
        Self {
            c0: self.c0.double(),
            c1: self.c1.double(),
        }
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        // Karatsuba over the quadratic extension: u² = −1.
        let aa = self.c0.mul(&rhs.c0);
        let bb = self.c1.mul(&rhs.c1);
        let sum = self.c0.add(&self.c1).mul(&rhs.c0.add(&rhs.c1));
        Self {
            c0: aa.sub(&bb),
            c1: sum.sub(&aa).sub(&bb),
        }
    }

    pub fn square(&self) -> Self {
        // (c0 + c1)(c0 − c1), 2·c0·c1.
        let a = self.c0.add(&self.c1);
        let b = self.c0.sub(&self.c1);
        let c = self.c0.double();
        Self {
            c0: a.mul(&b),
            c1: c.mul(&self.c1),
        }
    }

    pub fn mul_by_fp(&self, rhs: &Fp) -> Self {
        Self {
            c0: self.c0.mul(rhs),
            c1: self.c1.mul(rhs),
        }
    }

    /// Multiply by the sextic non-residue u + 1.
    pub fn mul_by_nonresidue(&self) -> Self {
        // (c0 + c1·u)(1 + u) = (c0 − c1) + (c0 + c1)·u
        Self {
            c0: self.c0.sub(&self.c1),
            c1: self.c0.add(&self.c1),
        }
    }

    /// The p-power Frobenius, which is conjugation.
    pub fn frobenius_map(&self) -> Self {
        self.conjugate()
    }

    pub fn conjugate(&self) -> Self {
        Self {
            c0: self.c0,
            c1: self.c1.neg(),
        }
    }

    pub fn invert(&self) -> CtOption<Self> {
        // 1 / (c0² + c1²) · (c0 − c1·u)
        let norm = self.c0.square().add(&self.c1.square());
        norm.invert().map(|t| Self {
            c0: self.c0.mul(&t),
            c1: self.c1.mul(&t).neg(),
        })
    }

    /// Exponentiation by a public little-endian limb exponent.
    pub fn pow_vartime(&self, exp: &[u64; 6]) -> Self {
        let mut res = Self::one();
        for e in exp.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((e >> i) & 1) == 1 {
                    res = res.mul(self);
                }
            }
        }
        res
    }

    /// Square root for p ≡ 3 (mod 4) quadratic extensions.
    pub fn sqrt(&self) -> CtOption<Self> {
        let a1 = self.pow_vartime(&P_MINUS_3_OVER_4);
        let x0 = a1.mul(self);
        let alpha = a1.mul(&x0);

        let neg_one = Self::one().neg();
        let i_unit = Self {
            c0: Fp::zero(),
            c1: Fp::one(),
        };

        let x_alpha_neg = x0.mul(&i_unit);
        let b = alpha.add(&Self::one()).pow_vartime(&FP_PARAMS.euler_exp);
        let x_general = b.mul(&x0);

        let use_i = alpha.ct_eq(&neg_one);
        let sqrt = Self::conditional_select(&x_general, &x_alpha_neg, use_i);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Euler's criterion over the norm: x is a square in Fp2 iff
    /// N(x) = c0² + c1² is a square in Fp.
    pub fn is_square(&self) -> Choice {
        let norm = self.c0.square().add(&self.c1.square());
        norm.is_square()
    }

    /// The hash-to-curve sign: sgn0(c0), or sgn0(c1) when c0 is zero.
    pub fn sgn0(&self) -> Choice {
        let c0_zero = self.c0.is_zero();
        self.c0.sgn0() | (c0_zero & self.c1.sgn0())
    }

    /// Lexicographic comparison for the compressed-point sort flag.
    pub fn lexicographically_largest(&self) -> Choice {
        let c1_large = self.c1.lexicographically_largest();
        let c1_zero = self.c1.is_zero();
        c1_large | (c1_zero & self.c0.lexicographically_largest())
    }

    pub fn random(mut rng: impl RngCore) -> Self {
        Self {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl PartialEq for Fp2 {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Fp2 {}

impl core::fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl zeroize::DefaultIsZeroes for Fp2 {}

// The generic point engine drives G2 through the same field interface as
// every base field.
impl crate::field::PrimeFieldElement for Fp2 {
    fn zero() -> Self {
        Fp2::zero()
    }
    fn one() -> Self {
        Fp2::one()
    }
    fn from_u64(v: u64) -> Self {
        Fp2::from_u64(v)
    }
    fn is_zero(&self) -> Choice {
        Fp2::is_zero(self)
    }
    fn square(&self) -> Self {
        Fp2::square(self)
    }
    fn double(&self) -> Self {
        Fp2::double(self)
    }
    fn invert(&self) -> CtOption<Self> {
        Fp2::invert(self)
    }
    fn sqrt(&self) -> CtOption<Self> {
        Fp2::sqrt(self)
    }
    fn is_square(&self) -> Choice {
        Fp2::is_square(self)
    }
    fn sgn0(&self) -> Choice {
        Fp2::sgn0(self)
    }
}

impl core::ops::Add for Fp2 {
    type Output = Fp2;
    fn add(self, rhs: Fp2) -> Fp2 {
        Fp2::add(&self, &rhs)
    }
}

impl core::ops::Sub for Fp2 {
    type Output = Fp2;
    fn sub(self, rhs: Fp2) -> Fp2 {
        Fp2::sub(&self, &rhs)
    }
}

impl core::ops::Mul for Fp2 {
    type Output = Fp2;
    fn mul(self, rhs: Fp2) -> Fp2 {
        Fp2::mul(&self, &rhs)
    }
}

impl core::ops::Neg for Fp2 {
    type Output = Fp2;
    fn neg(self) -> Fp2 {
        Fp2::neg(&self)
    }
}
