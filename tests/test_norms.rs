// tests/test_norms.rs

mod common;

use approx::assert_relative_eq;
use common::hermitian_from_triangle;
use lapackx::conformance::compare::norm_one;
use lapackx::conformance::generate::{make_dense_dominant, make_packed_dominant, Generator};
use lapackx::{
    c32, c64, hpcon, hptrf, lange, lanhe, lanhp, lantp, pocon, potrf, Diag, Norm, Norms, Uplo,
};

fn assert_empty_lantp_is_zero<T: Norms>() {
    for &norm in Norm::ALL {
        for &uplo in Uplo::ALL {
            for &diag in Diag::ALL {
                let value: f64 = lantp::<T>(norm, uplo, diag, 0, &[]).unwrap().into();
                assert_eq!(value, 0.0, "{} {} {}", norm, uplo, diag);
            }
        }
    }
}

#[test]
fn lantp_of_empty_matrix_is_zero() {
    assert_empty_lantp_is_zero::<f32>();
    assert_empty_lantp_is_zero::<f64>();
    assert_empty_lantp_is_zero::<c32>();
    assert_empty_lantp_is_zero::<c64>();
}

#[test]
fn lange_matches_hand_computed_norms() {
    // [[1 -2] [3 4]]
    let a = [1.0_f64, 3.0, -2.0, 4.0];
    assert_eq!(lange(Norm::One, 2, 2, &a, 2).unwrap(), 6.0);
    assert_eq!(lange(Norm::Inf, 2, 2, &a, 2).unwrap(), 7.0);
    assert_eq!(lange(Norm::Max, 2, 2, &a, 2).unwrap(), 4.0);
    assert_relative_eq!(lange(Norm::Fro, 2, 2, &a, 2).unwrap(), 30.0_f64.sqrt(), epsilon = 1e-14);

    let a32 = [1.0_f32, 3.0, -2.0, 4.0];
    assert_eq!(lange(Norm::Inf, 2, 2, &a32, 2).unwrap(), 7.0_f32);
}

#[test]
fn lantp_honours_unit_diagonal() {
    // upper packed [[1 -2] [. 4]]
    let ap = [1.0_f64, -2.0, 4.0];
    assert_eq!(lantp(Norm::One, Uplo::Upper, Diag::NonUnit, 2, &ap).unwrap(), 6.0);
    assert_eq!(lantp(Norm::One, Uplo::Upper, Diag::Unit, 2, &ap).unwrap(), 3.0);
    assert_eq!(lantp(Norm::Max, Uplo::Upper, Diag::Unit, 2, &ap).unwrap(), 2.0);
    assert_eq!(lantp(Norm::Inf, Uplo::Upper, Diag::NonUnit, 2, &ap).unwrap(), 4.0);
}

#[test]
fn lanhp_mirrors_the_stored_triangle() {
    // lower packed [[2 .] [3+4i 1]]
    let ap = [c64::new(2.0, 0.0), c64::new(3.0, 4.0), c64::new(1.0, 0.0)];
    assert_relative_eq!(lanhp(Norm::One, Uplo::Lower, 2, &ap).unwrap(), 7.0, epsilon = 1e-14);
    assert_relative_eq!(lanhp(Norm::Inf, Uplo::Lower, 2, &ap).unwrap(), 7.0, epsilon = 1e-14);
    assert_relative_eq!(lanhp(Norm::Max, Uplo::Lower, 2, &ap).unwrap(), 5.0, epsilon = 1e-14);
}

#[test]
fn lanhe_one_norm_matches_dense_view() {
    let n = 6;
    let a: Vec<c32> = Generator::new(4).vec(n * n);
    for &uplo in Uplo::ALL {
        let expected = norm_one(&hermitian_from_triangle(uplo, n, &a, n));
        let value = lanhe(Norm::One, uplo, n as i64, &a, n as i64).unwrap();
        assert_relative_eq!(f64::from(value), expected, max_relative = 1e-5);
    }
}

#[test]
fn norms_are_idempotent() {
    let n = 12;
    let a: Vec<c64> = Generator::new(9).vec(n * n);
    let before = a.clone();
    for &norm in Norm::ALL {
        let first = lange(norm, n as i64, n as i64, &a, n as i64).unwrap();
        let second = lange(norm, n as i64, n as i64, &a, n as i64).unwrap();
        assert_eq!(first, second);
        let first = lanhe(norm, Uplo::Upper, n as i64, &a, n as i64).unwrap();
        let second = lanhe(norm, Uplo::Upper, n as i64, &a, n as i64).unwrap();
        assert_eq!(first, second);
    }
    assert_eq!(a, before);
}

#[test]
fn condition_estimates_are_idempotent() {
    let n = 10;
    let mut gen = Generator::new(17);

    let mut a: Vec<f64> = gen.vec(n * n);
    make_dense_dominant(n, &mut a, n);
    let anorm = lanhe(Norm::One, Uplo::Lower, n as i64, &a, n as i64).unwrap();
    assert_eq!(potrf(Uplo::Lower, n as i64, &mut a, n as i64).unwrap(), 0);
    let (mut first, mut second) = (0.0, 0.0);
    pocon(Uplo::Lower, n as i64, &a, n as i64, anorm, &mut first).unwrap();
    pocon(Uplo::Lower, n as i64, &a, n as i64, anorm, &mut second).unwrap();
    assert_eq!(first, second);
    assert!(first > 0.0 && first <= 1.0);

    let mut ap: Vec<c32> = gen.vec(n * (n + 1) / 2);
    make_packed_dominant(Uplo::Upper, n, &mut ap);
    let anorm = lanhp(Norm::One, Uplo::Upper, n as i64, &ap).unwrap();
    let mut ipiv = vec![0_i64; n];
    assert_eq!(hptrf(Uplo::Upper, n as i64, &mut ap, &mut ipiv).unwrap(), 0);
    let (mut first, mut second) = (0.0_f32, 0.0_f32);
    hpcon(Uplo::Upper, n as i64, &ap, &ipiv, anorm, &mut first).unwrap();
    hpcon(Uplo::Upper, n as i64, &ap, &ipiv, anorm, &mut second).unwrap();
    assert_eq!(first, second);
    assert!(first > 0.0 && first <= 1.0);
}
