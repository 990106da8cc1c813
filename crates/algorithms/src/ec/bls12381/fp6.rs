//! Cubic extension Fp6 = Fp2[v] / (v³ − (u + 1)).

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp2::Fp2;
use super::frobenius::{FROBENIUS_COEFF_FP6_C1, FROBENIUS_COEFF_FP6_C2};

/// An element c0 + c1·v + c2·v² of Fp6.
#[derive(Clone, Copy, Default)]
pub struct Fp6 {
    pub c0: Fp2,
    pub c1: Fp2,
    pub c2: Fp2,
}

impl Fp6 {
    pub const fn zero() -> Self {
        Self {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    pub fn one() -> Self {
        Self {
            c0: Fp2::one(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    pub fn from_fp2(c0: Fp2) -> Self {
        Self {
            c0,
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    pub fn add(&self, rhs: &Self) -> Self {
        Self {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
            c2: self.c2.add(&rhs.c2),
        }
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        Self {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
            c2: self.c2.sub(&rhs.c2),
        }
    }

    pub fn neg(&self) -> Self {
        Self {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
            c2: self.c2.neg(),
        }
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        // Toom/Karatsuba over the cubic extension.
        let aa = self.c0.mul(&rhs.c0);
        let bb = self.c1.mul(&rhs.c1);
        let cc = self.c2.mul(&rhs.c2);

        let t1 = rhs
            .c1
            .add(&rhs.c2)
            .mul(&self.c1.add(&self.c2))
            .sub(&bb)
            .sub(&cc)
            .mul_by_nonresidue()
            .add(&aa);

        let t2 = rhs
            .c0
            .add(&rhs.c1)
            .mul(&self.c0.add(&self.c1))
            .sub(&aa)
            .sub(&bb)
            .add(&cc.mul_by_nonresidue());

        let t3 = rhs
            .c0
            .add(&rhs.c2)
            .mul(&self.c0.add(&self.c2))
            .sub(&aa)
            .sub(&cc)
            .add(&bb);

        Self {
            c0: t1,
            c1: t2,
            c2: t3,
        }
    }

    pub fn square(&self) -> Self {
        let s0 = self.c0.square();
        let ab = self.c0.mul(&self.c1);
        let s1 = ab.double();
        let s2 = self.c0.sub(&self.c1).add(&self.c2).square();
        let bc = self.c1.mul(&self.c2);
        let s3 = bc.double();
        let s4 = self.c2.square();

        Self {
            c0: s3.mul_by_nonresidue().add(&s0),
            c1: s4.mul_by_nonresidue().add(&s1),
            c2: s1.add(&s2).add(&s3).sub(&s0).sub(&s4),
        }
    }

    /// Multiply by v: rotate the coefficients and twist the wrapped one.
    pub fn mul_by_nonresidue(&self) -> Self {
        Self {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Sparse multiplication by an element with only the c1 slot set.
    pub fn mul_by_1(&self, c1: &Fp2) -> Self {
        Self {
            c0: self.c2.mul(c1).mul_by_nonresidue(),
            c1: self.c0.mul(c1),
            c2: self.c1.mul(c1),
        }
    }

    /// Sparse multiplication by an element with the c0 and c1 slots set.
    pub fn mul_by_01(&self, c0: &Fp2, c1: &Fp2) -> Self {
        let a_a = self.c0.mul(c0);
        let b_b = self.c1.mul(c1);

        let t1 = self.c2.mul(c1).mul_by_nonresidue().add(&a_a);
        let t2 = c0
            .add(c1)
            .mul(&self.c0.add(&self.c1))
            .sub(&a_a)
            .sub(&b_b);
        let t3 = self.c2.mul(c0).add(&b_b);

        Self {
            c0: t1,
            c1: t2,
            c2: t3,
        }
    }

    pub fn frobenius_map(&self) -> Self {
        Self {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map().mul(&FROBENIUS_COEFF_FP6_C1),
            c2: self.c2.frobenius_map().mul(&FROBENIUS_COEFF_FP6_C2),
        }
    }

    pub fn invert(&self) -> CtOption<Self> {
        let c0 = self
            .c0
            .square()
            .sub(&self.c1.mul(&self.c2).mul_by_nonresidue());
        let c1 = self
            .c2
            .square()
            .mul_by_nonresidue()
            .sub(&self.c0.mul(&self.c1));
        let c2 = self.c1.square().sub(&self.c0.mul(&self.c2));

        let t = self
            .c1
            .mul(&c2)
            .add(&self.c2.mul(&c1))
            .mul_by_nonresidue()
            .add(&self.c0.mul(&c0));

        t.invert().map(|t| Self {
            c0: c0.mul(&t),
            c1: c1.mul(&t),
            c2: c2.mul(&t),
        })
    }
}

impl ConstantTimeEq for Fp6 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl ConditionallySelectable for Fp6 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl PartialEq for Fp6 {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Fp6 {}

impl core::fmt::Debug for Fp6 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({:?}) + ({:?})*v + ({:?})*v^2", self.c0, self.c1, self.c2)
    }
}
