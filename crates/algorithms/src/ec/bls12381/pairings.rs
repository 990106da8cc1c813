//! The optimal Ate pairing: Miller loop, final exponentiation and the
//! multi-pairing accumulator.

use subtle::ConditionallySelectable;

use super::fp::Fp;
use super::fp12::Fp12;
use super::fp2::Fp2;
use super::g1::G1Projective;
use super::g2::G2Projective;
use super::gt::Gt;
use super::BLS_X;

/// A G1 input to the Miller loop, in affine form.
#[derive(Clone, Copy, Debug)]
struct G1Input {
    x: Fp,
    y: Fp,
    infinity: bool,
}

impl G1Input {
    fn new(p: &G1Projective) -> Self {
        let (x, y) = p.to_affine();
        Self {
            x,
            y,
            infinity: bool::from(p.is_identity()),
        }
    }
}

// Jacobian accumulator for the line-function schedule.
#[derive(Clone, Copy)]
struct JacobianG2 {
    x: Fp2,
    y: Fp2,
    z: Fp2,
}

/// A G2 point prepared for pairing: the line coefficients of the whole
/// Miller schedule.
pub struct G2Prepared {
    coeffs: Vec<(Fp2, Fp2, Fp2)>,
    infinity: bool,
}

// Doubling step, algorithm 26 of eprint 2010/354.
fn doubling_step(r: &mut JacobianG2) -> (Fp2, Fp2, Fp2) {
    let tmp0 = r.x.square();
    let tmp1 = r.y.square();
    let tmp2 = tmp1.square();
    let tmp3 = tmp1.add(&r.x).square().sub(&tmp0).sub(&tmp2);
    let tmp3 = tmp3.double();
    let tmp4 = tmp0.double().add(&tmp0);
    let tmp6 = r.x.add(&tmp4);
    let tmp5 = tmp4.square();
    let zsquared = r.z.square();
    r.x = tmp5.sub(&tmp3).sub(&tmp3);
    r.z = r.z.add(&r.y).square().sub(&tmp1).sub(&zsquared);
    r.y = tmp3.sub(&r.x).mul(&tmp4);
    let tmp2_8 = tmp2.double().double().double();
    r.y = r.y.sub(&tmp2_8);
    let tmp3 = tmp4.mul(&zsquared).double().neg();
    let tmp6 = tmp6.square().sub(&tmp0).sub(&tmp5);
    let tmp1_4 = tmp1.double().double();
    let tmp6 = tmp6.sub(&tmp1_4);
    let tmp0 = r.z.mul(&zsquared).double();
    (tmp0, tmp3, tmp6)
}

// Addition step, algorithm 27 of eprint 2010/354.
fn addition_step(r: &mut JacobianG2, qx: &Fp2, qy: &Fp2) -> (Fp2, Fp2, Fp2) {
    let zsquared = r.z.square();
    let ysquared = qy.square();
    let t0 = zsquared.mul(qx);
    let t1 = qy
        .add(&r.z)
        .square()
        .sub(&ysquared)
        .sub(&zsquared)
        .mul(&zsquared);
    let t2 = t0.sub(&r.x);
    let t3 = t2.square();
    let t4 = t3.double().double();
    let t5 = t4.mul(&t2);
    let t6 = t1.sub(&r.y).sub(&r.y);
    let t9 = t6.mul(qx);
    let t7 = t4.mul(&r.x);
    r.x = t6.square().sub(&t5).sub(&t7).sub(&t7);
    r.z = r.z.add(&t2).square().sub(&zsquared).sub(&t3);
    let t10 = qy.add(&r.z);
    let t8 = t7.sub(&r.x).mul(&t6);
    let t0 = r.y.mul(&t5).double();
    r.y = t8.sub(&t0);
    let t10 = t10.square().sub(&ysquared);
    let ztsquared = r.z.square();
    let t10 = t10.sub(&ztsquared);
    let t9 = t9.double().sub(&t10);
    let t10 = r.z.double();
    let t6 = t6.neg();
    let t1 = t6.double();
    (t10, t1, t9)
}

impl G2Prepared {
    /// Precompute the line coefficients for a G2 point.
    pub fn from_point(q: &G2Projective) -> Self {
        let infinity = bool::from(q.is_identity());
        // Substitute the generator for the identity; the consumer skips
        // the coefficients entirely in that case.
        let q = G2Projective::conditional_select(q, &G2Projective::generator(), q.is_identity());
        let (qx, qy) = q.to_affine();

        let mut coeffs = Vec::with_capacity(68);
        let mut r = JacobianG2 {
            x: qx,
            y: qy,
            z: Fp2::one(),
        };

        let mut found_one = false;
        for i in (0..64).rev().map(|b| (((BLS_X >> 1) >> b) & 1) == 1) {
            if !found_one {
                found_one = i;
                continue;
            }
            coeffs.push(doubling_step(&mut r));
            if i {
                coeffs.push(addition_step(&mut r, &qx, &qy));
            }
        }
        coeffs.push(doubling_step(&mut r));

        Self { coeffs, infinity }
    }
}

// Evaluate a line function at a G1 point and fold it into f.
fn ell(f: &Fp12, coeffs: &(Fp2, Fp2, Fp2), p: &G1Input) -> Fp12 {
    let c0 = coeffs.0.mul_by_fp(&p.y);
    let c1 = coeffs.1.mul_by_fp(&p.x);
    f.mul_by_014(&coeffs.2, &c1, &c0)
}

/// The unreduced product of Miller loops; call
/// [`MillerLoopResult::final_exponentiation`] to land in Gt.
#[derive(Clone, Copy, Debug)]
pub struct MillerLoopResult(pub(crate) Fp12);

impl MillerLoopResult {
    /// Raise to (p¹² − 1)/r via the easy part and the BLS12-381 hard-part
    /// addition chain.
    pub fn final_exponentiation(&self) -> Gt {
        let f = self.0;
        // Easy part: f^(p⁶ − 1) · (p² + 1).
        let t0 = f
            .frobenius_map()
            .frobenius_map()
            .frobenius_map()
            .frobenius_map()
            .frobenius_map()
            .frobenius_map();
        // A Miller loop output is nonzero, so the inversion succeeds.
        let t1 = f.invert().unwrap_or(Fp12::one());
        let mut t2 = t0.mul(&t1);
        let t1 = t2;
        t2 = t2.frobenius_map().frobenius_map();
        t2 = t2.mul(&t1);

        // Hard part.
        let t1 = cyclotomic_square(&t2).conjugate();
        let mut t3 = cyclotomic_exp(&t2);
        let mut t4 = cyclotomic_square(&t3);
        let mut t5 = t1.mul(&t3);
        let t1 = cyclotomic_exp(&t5);
        let t0 = cyclotomic_exp(&t1);
        let mut t6 = cyclotomic_exp(&t0);
        t6 = t6.mul(&t4);
        t4 = cyclotomic_exp(&t6);
        t5 = t5.conjugate();
        t4 = t4.mul(&t5).mul(&t2);
        t5 = t2.conjugate();
        let t1 = t1.mul(&t2);
        let t1 = t1.frobenius_map().frobenius_map().frobenius_map();
        t6 = t6.mul(&t5);
        t6 = t6.frobenius_map();
        t3 = t3.mul(&t0);
        t3 = t3.frobenius_map().frobenius_map();
        let t3 = t3.mul(&t1);
        let t3 = t3.mul(&t6);
        Gt(t3.mul(&t4))
    }
}

fn fp4_square(a: &Fp2, b: &Fp2) -> (Fp2, Fp2) {
    let t0 = a.square();
    let t1 = b.square();
    let t2 = t1.mul_by_nonresidue();
    let c0 = t2.add(&t0);
    let t2 = a.add(b).square().sub(&t0);
    let c1 = t2.sub(&t1);
    (c0, c1)
}

// Granger-Scott squaring in the cyclotomic subgroup.
fn cyclotomic_square(f: &Fp12) -> Fp12 {
    let mut z0 = f.c0.c0;
    let mut z4 = f.c0.c1;
    let mut z3 = f.c0.c2;
    let mut z2 = f.c1.c0;
    let mut z1 = f.c1.c1;
    let mut z5 = f.c1.c2;

    let (t0, t1) = fp4_square(&z0, &z1);
    z0 = t0.sub(&z0);
    z0 = z0.double().add(&t0);
    z1 = t1.add(&z1);
    z1 = z1.double().add(&t1);

    let (t0, t1) = fp4_square(&z2, &z3);
    let (t2, t3) = fp4_square(&z4, &z5);

    z4 = t0.sub(&z4);
    z4 = z4.double().add(&t0);
    z5 = t1.add(&z5);
    z5 = z5.double().add(&t1);

    let t0 = t3.mul_by_nonresidue();
    z2 = t0.add(&z2);
    z2 = z2.double().add(&t0);
    z3 = t2.sub(&z3);
    z3 = z3.double().add(&t2);

    Fp12 {
        c0: super::fp6::Fp6 {
            c0: z0,
            c1: z4,
            c2: z3,
        },
        c1: super::fp6::Fp6 {
            c0: z2,
            c1: z1,
            c2: z5,
        },
    }
}

// Exponentiation by the loop parameter x (negative, so conjugate at the
// end); x is public.
fn cyclotomic_exp(f: &Fp12) -> Fp12 {
    let mut tmp = Fp12::one();
    let mut found_one = false;
    for i in (0..64).rev().map(|b| ((BLS_X >> b) & 1) == 1) {
        if found_one {
            tmp = cyclotomic_square(&tmp);
        } else {
            found_one = i;
        }
        if i {
            tmp = tmp.mul(f);
        }
    }
    tmp.conjugate()
}

/// Run the shared-squaring Miller loop over prepared pairs.
///
/// Identity inputs contribute the neutral factor; the skip is data
/// dependent, so multi-pairing serves public verification workloads.
pub fn multi_miller_loop(terms: &[(G1Projective, G2Prepared)]) -> MillerLoopResult {
    let inputs: Vec<(G1Input, &G2Prepared)> = terms
        .iter()
        .map(|(p, q)| (G1Input::new(p), q))
        .collect();

    let mut f = Fp12::one();
    let mut idx = 0;
    let mut found_one = false;
    for i in (0..64).rev().map(|b| (((BLS_X >> 1) >> b) & 1) == 1) {
        if !found_one {
            found_one = i;
            continue;
        }
        for (p, q) in &inputs {
            if !p.infinity && !q.infinity {
                f = ell(&f, &q.coeffs[idx], p);
            }
        }
        idx += 1;
        if i {
            for (p, q) in &inputs {
                if !p.infinity && !q.infinity {
                    f = ell(&f, &q.coeffs[idx], p);
                }
            }
            idx += 1;
        }
        f = f.square();
    }
    for (p, q) in &inputs {
        if !p.infinity && !q.infinity {
            f = ell(&f, &q.coeffs[idx], p);
        }
    }
    MillerLoopResult(f.conjugate())
}

/// The optimal Ate pairing e(P, Q).
pub fn pairing(p: &G1Projective, q: &G2Projective) -> Gt {
    let either_identity = p.is_identity() | q.is_identity();
    let p = G1Projective::conditional_select(p, &G1Projective::generator(), either_identity);
    let q = G2Projective::conditional_select(q, &G2Projective::generator(), either_identity);

    let terms = [(p, G2Prepared::from_point(&q))];
    let out = multi_miller_loop(&terms).final_exponentiation();
    Gt::conditional_select(&out, &Gt::identity(), either_identity)
}

/// Pair up an even, alternating sequence and fold the products into one
/// final exponentiation.
pub fn multi_pairing(pairs: &[(G1Projective, G2Projective)]) -> Gt {
    let terms: Vec<(G1Projective, G2Prepared)> = pairs
        .iter()
        .map(|(p, q)| (*p, G2Prepared::from_point(q)))
        .collect();
    multi_miller_loop(&terms).final_exponentiation()
}
