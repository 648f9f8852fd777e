// tests/test_marshal.rs
//
// Sizes that do not fit the native integer are refused before any native call, and
// nothing the caller passed in is touched.

use lapackx::marshal::{narrow, narrow_all};
use lapackx::{c64, lange, pbsv, Error, LapackInt, Uplo};

const BIG: i64 = LapackInt::MAX as i64;

#[test]
fn values_at_the_limit_narrow() {
    assert_eq!(narrow("n", BIG).unwrap(), LapackInt::MAX);
    assert_eq!(narrow("n", -BIG).unwrap(), -LapackInt::MAX);
    assert_eq!(narrow_all([("m", 0), ("n", 1)]).unwrap(), [0, 1]);
}

#[test]
fn undersized_buffers_are_reported_by_name() {
    let mut ab = vec![c64::new(1.0, 0.0); 6];
    let mut b = vec![c64::new(1.0, 0.0); 2];
    let err = pbsv(Uplo::Lower, 3, 1, 1, &mut ab, 2, &mut b, 3).unwrap_err();
    assert_eq!(
        err,
        Error::BufferTooSmall {
            arg: "b",
            required: 3,
            actual: 2
        }
    );
    assert!(ab.iter().chain(&b).all(|&z| z == c64::new(1.0, 0.0)));
}

#[cfg(not(feature = "ilp64"))]
mod lp64 {
    use super::*;
    use lapackx::{geqrf, hptrf, lantp, pptrf, Diag, Norm};

    #[test]
    fn oversized_dimension_is_refused_without_mutation() {
        let mut ab = vec![2.0_f64; 12];
        let mut b = vec![3.0_f64; 4];
        let err = pbsv(Uplo::Upper, BIG + 1, 1, 1, &mut ab, 2, &mut b, 4).unwrap_err();
        assert_eq!(err, Error::IntegerOverflow { arg: "n", value: BIG + 1 });
        assert!(ab.iter().all(|&x| x == 2.0));
        assert!(b.iter().all(|&x| x == 3.0));
    }

    #[test]
    fn oversized_stride_is_refused_without_mutation() {
        let mut ab = vec![2.0_f64; 12];
        let mut b = vec![3.0_f64; 4];
        let err = pbsv(Uplo::Upper, 4, 1, 1, &mut ab, 2, &mut b, BIG + 7).unwrap_err();
        assert_eq!(err, Error::IntegerOverflow { arg: "ldb", value: BIG + 7 });
        assert!(ab.iter().all(|&x| x == 2.0) && b.iter().all(|&x| x == 3.0));

        let a = vec![1.0_f32; 4];
        let err = lange(Norm::One, 2, 2, &a, BIG + 1).unwrap_err();
        assert_eq!(err, Error::IntegerOverflow { arg: "lda", value: BIG + 1 });
    }

    #[test]
    fn negative_overflow_is_refused_too() {
        let err = lantp::<f64>(Norm::Max, Uplo::Lower, Diag::NonUnit, -(BIG + 1), &[]).unwrap_err();
        assert_eq!(err, Error::IntegerOverflow { arg: "n", value: -(BIG + 1) });
    }

    #[test]
    fn packed_and_pivoted_routines_check_before_calling() {
        let mut ap = vec![c64::new(5.0, 0.0); 3];
        let err = pptrf(Uplo::Lower, BIG + 1, &mut ap).unwrap_err();
        assert!(matches!(err, Error::IntegerOverflow { arg: "n", .. }));

        let mut ipiv = vec![9_i64; 2];
        let err = hptrf(Uplo::Lower, BIG + 1, &mut ap, &mut ipiv).unwrap_err();
        assert!(matches!(err, Error::IntegerOverflow { arg: "n", .. }));
        assert_eq!(ipiv, vec![9, 9]);
        assert!(ap.iter().all(|&z| z == c64::new(5.0, 0.0)));

        let mut a = vec![1.0_f64; 4];
        let mut tau = vec![0.0_f64; 2];
        let err = geqrf(2, 2, &mut a, BIG + 1, &mut tau).unwrap_err();
        assert!(matches!(err, Error::IntegerOverflow { arg: "lda", .. }));
        assert!(a.iter().all(|&x| x == 1.0));
    }

    #[test]
    fn native_pivots_beyond_the_width_are_refused() {
        let ap = vec![1.0_f64; 3];
        let ipiv = vec![1_i64, BIG + 1];
        let mut b = vec![1.0_f64; 2];
        let err = lapackx::hptrs(Uplo::Upper, 2, 1, &ap, &ipiv, &mut b, 2).unwrap_err();
        assert_eq!(err, Error::IntegerOverflow { arg: "ipiv", value: BIG + 1 });
        assert_eq!(b, vec![1.0, 1.0]);
    }
}

#[cfg(feature = "ilp64")]
#[test]
fn wide_build_accepts_values_past_32_bits() {
    let value = i64::from(i32::MAX) + 1;
    assert_eq!(narrow("n", value).unwrap(), value);
}
