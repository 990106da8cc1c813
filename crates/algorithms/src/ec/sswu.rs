//! Simplified SWU map-to-curve and rational isogeny evaluation.
//!
//! The map operates over any of the library's field elements; curves whose
//! coefficients fail the SSWU preconditions (a·b = 0) route through an
//! isogenous curve and apply the coefficient tables in [`IsogenyMap`]
//! afterwards.

use subtle::ConditionallySelectable;

use crate::field::PrimeFieldElement;

/// Constants of the (possibly isogenous) curve the SSWU map targets.
#[derive(Clone, Copy, Debug)]
pub struct SswuParams<F: PrimeFieldElement> {
    /// The `a` coefficient of the target curve.
    pub a: F,
    /// The `b` coefficient of the target curve.
    pub b: F,
    /// The non-square Z from the suite definition.
    pub z: F,
}

impl<F: PrimeFieldElement> SswuParams<F> {
    /// Map a field element to an affine point of the target curve.
    ///
    /// The sign of y follows sgn0(u), and the whole evaluation is a fixed
    /// sequence of field operations with masked selects.
    pub fn map_to_curve(&self, u: &F) -> (F, F) {
        // c1 = -b / a, c2 = -1 / z
        let c1 = -self.b * self.a.invert().unwrap_or(F::zero());
        let c2 = -F::one() * self.z.invert().unwrap_or(F::zero());

        let tv1 = self.z * u.square();
        let tv2 = tv1.square();
        let den = tv1 + tv2;
        // inv0: zero inverts to zero, selecting the exceptional x1 below.
        let den_inv = den.invert().unwrap_or(F::zero());
        let exceptional = den_inv.is_zero();
        let mut x1 = den_inv + F::one();
        x1 = F::conditional_select(&x1, &c2, exceptional);
        x1 = x1 * c1;

        let gx1 = ((x1.square() + self.a) * x1) + self.b;
        let x2 = tv1 * x1;
        let gx2 = gx1 * tv1 * tv2;

        let y1 = gx1.sqrt();
        let gx1_square = y1.is_some();
        let y1 = y1.unwrap_or(F::zero());
        let y2 = gx2.sqrt().unwrap_or(F::zero());

        let x = F::conditional_select(&x2, &x1, gx1_square);
        let mut y = F::conditional_select(&y2, &y1, gx1_square);

        let flip = u.sgn0() ^ y.sgn0();
        y = F::conditional_select(&y, &(-y), flip);
        (x, y)
    }
}

/// Coefficient tables of a rational isogeny between Weierstrass curves.
///
/// Coefficients are stored low-degree first; the denominators carry their
/// leading coefficient explicitly. The y-map numerator is multiplied by the
/// input y after evaluation.
#[derive(Clone, Copy, Debug)]
pub struct IsogenyMap<F: PrimeFieldElement + 'static> {
    /// Numerator of the x-map.
    pub x_num: &'static [F],
    /// Denominator of the x-map.
    pub x_den: &'static [F],
    /// Numerator of the y-map (without the y factor).
    pub y_num: &'static [F],
    /// Denominator of the y-map.
    pub y_den: &'static [F],
}

fn horner<F: PrimeFieldElement>(coeffs: &[F], x: &F) -> F {
    let mut acc = coeffs[coeffs.len() - 1];
    for c in coeffs[..coeffs.len() - 1].iter().rev() {
        acc = acc * *x + *c;
    }
    acc
}

impl<F: PrimeFieldElement + 'static> IsogenyMap<F> {
    /// Evaluate the isogeny at an affine point.
    ///
    /// A vanishing denominator leaves the corresponding input coordinate in
    /// place, mirroring the masked-invert treatment of the original
    /// evaluator; hash inputs never reach those poles.
    pub fn map(&self, x: &F, y: &F) -> (F, F) {
        let xn = horner(self.x_num, x);
        let xd = horner(self.x_den, x);
        let yn = horner(self.y_num, x);
        let yd = horner(self.y_den, x);

        let xdi = xd.invert();
        let x_ok = xdi.is_some();
        let x_mapped = xn * xdi.unwrap_or(F::zero());
        let out_x = F::conditional_select(x, &x_mapped, x_ok);

        let ydi = yd.invert();
        let y_ok = ydi.is_some();
        let y_mapped = yn * ydi.unwrap_or(F::zero());
        let out_y = F::conditional_select(y, &(y_mapped * *y), y_ok);

        (out_x, out_y)
    }
}

/// Split a uniform byte string into two wide field reductions.
///
/// Each half is interpreted as a big-endian integer and reduced modulo the
/// field order, matching the RFC 9380 `hash_to_field` convention.
pub fn two_wide_elements<F, const WIDE: usize>(
    uniform: &[u8],
    from_wide: impl Fn(&[u8; WIDE]) -> F,
) -> (F, F)
where
    F: PrimeFieldElement,
{
    debug_assert_eq!(uniform.len() % 2, 0);
    let half = uniform.len() / 2;
    debug_assert!(half <= WIDE);

    let mut buf = [0u8; WIDE];
    for (i, b) in uniform[..half].iter().rev().enumerate() {
        buf[i] = *b;
    }
    let u0 = from_wide(&buf);

    let mut buf = [0u8; WIDE];
    for (i, b) in uniform[half..].iter().rev().enumerate() {
        buf[i] = *b;
    }
    let u1 = from_wide(&buf);

    (u0, u1)
}
