// tests/test_packed.rs

mod common;

use common::{eps, inverse_residual, solve_residual};
use lapackx::conformance::compare::{dense, unpack_hermitian};
use lapackx::conformance::generate::{make_packed_dominant, Generator};
use lapackx::{c32, c64, hpcon, hptrf, hptrs, ppsv, pptrf, pptri, sptrf, PackedCholesky, PackedIndefinite, Uplo};

fn dominant_packed<T: lapackx::Scalar>(uplo: Uplo, n: usize, seed: u64) -> Vec<T> {
    let mut gen = Generator::new(seed);
    let mut ap: Vec<T> = gen.vec(n * (n + 1) / 2);
    make_packed_dominant(uplo, n, &mut ap);
    ap
}

fn pptrf_pptri_case<T: PackedCholesky>(uplo: Uplo) -> f64 {
    let n = 9;
    let mut ap: Vec<T> = dominant_packed(uplo, n, 3);
    let a = unpack_hermitian(uplo, n, &ap);

    assert_eq!(pptrf(uplo, n as i64, &mut ap).unwrap(), 0);
    assert_eq!(pptri(uplo, n as i64, &mut ap).unwrap(), 0);
    let inverse = unpack_hermitian(uplo, n, &ap);
    inverse_residual(&a, &inverse) / eps::<T>()
}

#[test]
fn pptri_inverts_the_pptrf_factor() {
    for uplo in [Uplo::Upper, Uplo::Lower] {
        let resids = [
            pptrf_pptri_case::<f32>(uplo),
            pptrf_pptri_case::<f64>(uplo),
            pptrf_pptri_case::<c32>(uplo),
            pptrf_pptri_case::<c64>(uplo),
        ];
        for resid in resids {
            assert!(resid < 1000.0, "{:?}: residual {} eps", uplo, resid);
        }
    }
}

#[test]
fn ppsv_solves_a_dominant_system() {
    let n = 8;
    let nrhs = 2;
    let mut ap: Vec<c64> = dominant_packed(Uplo::Upper, n, 21);
    let a = unpack_hermitian(Uplo::Upper, n, &ap);
    let b: Vec<c64> = Generator::new(22).vec(n * nrhs);
    let mut x = b.clone();

    let info = ppsv(Uplo::Upper, n as i64, nrhs as i64, &mut ap, &mut x, n as i64).unwrap();
    assert_eq!(info, 0);
    let resid = solve_residual(&a, &dense(n, nrhs, &x, n), &dense(n, nrhs, &b, n));
    assert!(resid < 100.0 * eps::<c64>(), "residual {}", resid);
}

fn hptrf_hptrs_case<T: PackedIndefinite>(uplo: Uplo, seed: u64) -> f64 {
    let n = 7;
    let mut ap: Vec<T> = dominant_packed(uplo, n, seed);
    let a = unpack_hermitian(uplo, n, &ap);
    let b: Vec<T> = Generator::new(seed + 1).vec(n);
    let mut ipiv = vec![0_i64; n];

    assert_eq!(hptrf(uplo, n as i64, &mut ap, &mut ipiv).unwrap(), 0);
    assert!(ipiv.iter().all(|&p| p != 0 && p.unsigned_abs() as usize <= n));
    let mut x = b.clone();
    assert_eq!(hptrs(uplo, n as i64, 1, &ap, &ipiv, &mut x, n as i64).unwrap(), 0);
    solve_residual(&a, &dense(n, 1, &x, n), &dense(n, 1, &b, n)) / eps::<T>()
}

#[test]
fn hptrs_consumes_hptrf_pivots_unmodified() {
    for uplo in [Uplo::Upper, Uplo::Lower] {
        let resids = [
            hptrf_hptrs_case::<f32>(uplo, 5),
            hptrf_hptrs_case::<f64>(uplo, 5),
            hptrf_hptrs_case::<c32>(uplo, 5),
            hptrf_hptrs_case::<c64>(uplo, 5),
        ];
        for resid in resids {
            assert!(resid < 100.0, "{:?}: residual {} eps", uplo, resid);
        }
    }
}

#[test]
fn two_by_two_pivot_round_trips_through_i64() {
    // [[0 1 0] [1 0 0] [0 0 2]] has no usable 1-by-1 pivot in the leading block
    let a = [0.0_f64, 1.0, 0.0, 0.0, 0.0, 2.0];
    let mut ap = a.to_vec();
    let mut ipiv = [0_i64; 3];
    assert_eq!(hptrf(Uplo::Lower, 3, &mut ap, &mut ipiv).unwrap(), 0);
    assert!(ipiv[0] < 0 && ipiv[0] == ipiv[1], "pivots {:?}", ipiv);

    let mut x = vec![1.0_f64, 2.0, 4.0];
    assert_eq!(hptrs(Uplo::Lower, 3, 1, &ap, &ipiv, &mut x, 3).unwrap(), 0);
    assert_eq!(x, vec![2.0, 1.0, 2.0]);
}

#[test]
fn singular_block_is_reported_by_index() {
    // the trailing diagonal entry is exactly zero after elimination
    let mut ap = vec![1.0_f64, 1.0, 1.0];
    let mut ipiv = [0_i64; 2];
    assert_eq!(sptrf(Uplo::Lower, 2, &mut ap, &mut ipiv).unwrap(), 2);
}

#[test]
fn hpcon_of_identity_is_one() {
    let n = 4;
    let mut ap = vec![c64::new(0.0, 0.0); n * (n + 1) / 2];
    for i in 0..n {
        ap[i + i * (i + 1) / 2] = c64::new(1.0, 0.0);
    }
    let mut ipiv = vec![0_i64; n];
    assert_eq!(hptrf(Uplo::Upper, n as i64, &mut ap, &mut ipiv).unwrap(), 0);
    assert_eq!(ipiv, vec![1, 2, 3, 4]);

    let mut rcond = 0.0_f64;
    assert_eq!(hpcon(Uplo::Upper, n as i64, &ap, &ipiv, 1.0, &mut rcond).unwrap(), 0);
    assert!((rcond - 1.0).abs() < 1e-12, "rcond {}", rcond);
}
