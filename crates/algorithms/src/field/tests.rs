use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use subtle::ConstantTimeEq;

// One invariant battery per field instantiation: the algebraic axioms, the
// square-root and inversion contracts, serialisation round trips, and the
// carry paths of the reduction (driven by values near the modulus).
macro_rules! field_invariants {
    ($modname:ident, $field:ty, $bytes:expr, $wide:expr) => {
        mod $modname {
            use super::*;
            type F = $field;

            fn samples() -> Vec<F> {
                let mut rng = ChaCha20Rng::seed_from_u64(42);
                let mut out: Vec<F> = (0..8).map(|_| F::random(&mut rng)).collect();
                out.push(F::zero());
                out.push(F::one());
                // Values at the top of the range exercise the final
                // conditional subtraction.
                out.push(F::one().neg());
                out.push(F::one().neg().add(&F::one().neg()));
                out
            }

            #[test]
            fn addition_and_multiplication_commute() {
                for a in samples() {
                    for b in samples() {
                        assert_eq!(a.add(&b), b.add(&a));
                        assert_eq!(a.mul(&b), b.mul(&a));
                    }
                }
            }

            #[test]
            fn square_and_double_match_mul_and_add() {
                for a in samples() {
                    assert_eq!(a.square(), a.mul(&a));
                    assert_eq!(a.double(), a.add(&a));
                }
            }

            #[test]
            fn additive_inverse() {
                for a in samples() {
                    assert!(bool::from(a.add(&a.neg()).is_zero()));
                }
                assert!(bool::from(F::zero().neg().is_zero()));
            }

            #[test]
            fn multiplicative_inverse() {
                for a in samples() {
                    if bool::from(a.is_zero()) {
                        assert!(bool::from(a.invert().is_none()));
                        continue;
                    }
                    let inv = a.invert().unwrap();
                    assert!(bool::from(a.mul(&inv).is_one()));
                }
            }

            #[test]
            fn sqrt_round_trip() {
                for a in samples() {
                    let sq = a.square();
                    let root = sq.sqrt();
                    assert!(bool::from(root.is_some()));
                    let root = root.unwrap();
                    assert_eq!(root.square(), sq);
                    assert!(bool::from(sq.is_square()));
                }
            }

            #[test]
            fn bytes_round_trip() {
                for a in samples() {
                    let bytes = a.to_bytes();
                    let back = F::from_bytes(&bytes).unwrap();
                    assert!(bool::from(a.ct_eq(&back)));
                    // Big-endian round trip too.
                    let be = a.to_be_bytes();
                    let back = F::from_be_bytes(&be).unwrap();
                    assert!(bool::from(a.ct_eq(&back)));
                }
                // The modulus itself is rejected as non-canonical.
                let p_bytes = {
                    let mut out = [0u8; $bytes];
                    let minus_one = F::one().neg().to_bytes();
                    out.copy_from_slice(&minus_one);
                    // p - 1 + 1 == p: bump the low byte back up.
                    out[0] = out[0].wrapping_add(1);
                    out
                };
                // p ends in a digit that does not wrap for any supported
                // modulus, so this really encodes p.
                assert!(bool::from(F::from_bytes(&p_bytes).is_none()));
            }

            #[test]
            fn wide_reduction_matches_small_values() {
                // A value below the modulus reduces to itself.
                let mut wide = [0u8; $wide];
                wide[0] = 0x2f;
                wide[1] = 0x01;
                let got = F::from_bytes_wide(&wide);
                assert_eq!(got, F::from_u64(0x012f));

                // (p - 1) + (p - 1) folds to p - 2.
                let minus_one = F::one().neg();
                let mut wide = [0u8; $wide];
                wide[..$bytes].copy_from_slice(&minus_one.double().to_bytes());
                let got = F::from_bytes_wide(&wide);
                assert_eq!(got, F::from_u64(2).neg());
            }

            #[test]
            fn canonical_comparison_orders_values() {
                let two = F::from_u64(2);
                let three = F::from_u64(3);
                assert_eq!(two.cmp_canonical(&three), -1);
                assert_eq!(three.cmp_canonical(&two), 1);
                assert_eq!(two.cmp_canonical(&two), 0);
                // p - 1 is the largest canonical value.
                let top = F::one().neg();
                assert_eq!(top.cmp_canonical(&three), 1);
            }

            #[test]
            fn sgn0_is_value_parity() {
                assert!(!bool::from(F::from_u64(2).sgn0()));
                assert!(bool::from(F::from_u64(3).sgn0()));
                assert!(!bool::from(F::zero().sgn0()));
            }

            #[test]
            fn pow_matches_repeated_multiplication() {
                let base = F::from_u64(7);
                let mut exp = [0u64; F::LIMBS];
                exp[0] = 5;
                // 7^5 = 16807
                assert_eq!(base.pow(&exp), F::from_u64(16807));
                assert_eq!(base.pow2k(3), F::from_u64(7).square().square().square());
            }
        }
    };
}

field_invariants!(k256_fp, crate::ec::k256::FieldElement, 32, 64);
field_invariants!(k256_fq, crate::ec::k256::Scalar, 32, 64);
field_invariants!(p256_fp, crate::ec::p256::FieldElement, 32, 64);
field_invariants!(p256_fq, crate::ec::p256::Scalar, 32, 64);
field_invariants!(p384_fp, crate::ec::p384::FieldElement, 48, 96);
field_invariants!(p384_fq, crate::ec::p384::Scalar, 48, 96);
field_invariants!(pallas_fp, crate::ec::pasta::Fp, 32, 64);
field_invariants!(pallas_fq, crate::ec::pasta::Fq, 32, 64);
field_invariants!(ed25519_fp, crate::ec::ed25519::FieldElement, 32, 64);
field_invariants!(ed25519_fq, crate::ec::ed25519::Scalar, 32, 64);
field_invariants!(ed448_fp, crate::ec::ed448::Fp, 56, 112);
field_invariants!(ed448_fq, crate::ec::ed448::Fq, 56, 112);
field_invariants!(bls_fp, crate::ec::bls12381::Fp, 48, 96);
field_invariants!(bls_fq, crate::ec::bls12381::Scalar, 32, 64);
