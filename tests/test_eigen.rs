// tests/test_eigen.rs

mod common;

use common::band_to_dense;
use lapackx::conformance::compare::{
    dense, eigen_residual, eigenvectors, generalized_residual, promote_real, rel_error, sort_lexical,
    unpack_hermitian, C64,
};
use lapackx::conformance::generate::{make_band_dominant, make_packed_dominant, Generator};
use lapackx::{c64, geev, hbgvx, hpgv, sbgvx, Job, Range, Uplo};
use nalgebra::{DMatrix, SymmetricEigen};
use ndarray::Array2;
use num_complex::Complex;

fn real_part(a: &Array2<C64>) -> DMatrix<f64> {
    DMatrix::from_fn(a.nrows(), a.ncols(), |i, j| a[(i, j)].re)
}

/// Eigenvalues of `A x = λ B x` for symmetric `A` and positive-definite `B`, ascending.
fn generalized_oracle(a: &Array2<C64>, b: &Array2<C64>) -> Vec<f64> {
    let a = real_part(a);
    let l = real_part(b).cholesky().expect("B is positive definite").l();
    let l_inv = l.try_inverse().expect("Cholesky factor is invertible");
    let c = &l_inv * a * l_inv.transpose();
    let mut values: Vec<f64> = SymmetricEigen::new(c).eigenvalues.iter().copied().collect();
    values.sort_by(|x, y| x.partial_cmp(y).unwrap());
    values
}

fn assert_close(found: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(found.len(), expected.len());
    for (x, y) in found.iter().zip(expected) {
        assert!((x - y).abs() <= tol * y.abs().max(1.0), "{} vs {}", x, y);
    }
}

#[test]
fn spgv_matches_dense_oracle() {
    let n = 8;
    let mut gen = Generator::new(1);
    let mut ap: Vec<f64> = gen.vec(n * (n + 1) / 2);
    let mut bp: Vec<f64> = gen.vec(n * (n + 1) / 2);
    make_packed_dominant(Uplo::Lower, n, &mut bp);
    let expected = generalized_oracle(&unpack_hermitian(Uplo::Lower, n, &ap), &unpack_hermitian(Uplo::Lower, n, &bp));

    let mut w = vec![0.0; n];
    let mut z: Vec<f64> = Vec::new();
    let info = hpgv(1, Job::NoVec, Uplo::Lower, n as i64, &mut ap, &mut bp, &mut w, &mut z, 1).unwrap();
    assert_eq!(info, 0);
    assert_close(&w, &expected, 1e-10);
}

#[test]
fn hpgv_eigenvectors_satisfy_every_problem_type() {
    let n = 7;
    for itype in 1..=3 {
        let mut gen = Generator::new(30 + itype as u64);
        let mut ap: Vec<c64> = gen.vec(n * (n + 1) / 2);
        let mut bp: Vec<c64> = gen.vec(n * (n + 1) / 2);
        make_packed_dominant(Uplo::Upper, n, &mut bp);
        let a = unpack_hermitian(Uplo::Upper, n, &ap);
        let b = unpack_hermitian(Uplo::Upper, n, &bp);

        let mut w = vec![0.0; n];
        let mut z = vec![c64::new(0.0, 0.0); n * n];
        let info = hpgv(itype, Job::Vec, Uplo::Upper, n as i64, &mut ap, &mut bp, &mut w, &mut z, n as i64).unwrap();
        assert_eq!(info, 0);
        assert!(w.windows(2).all(|p| p[0] <= p[1]), "ascending eigenvalues");

        let resid = generalized_residual(itype, &a, &b, &dense(n, n, &z, n), &promote_real(&w));
        assert!(resid < 1000.0 * f64::EPSILON, "itype {}: residual {}", itype, resid);
    }
}

#[test]
fn hpgv_reports_indefinite_b_as_n_plus_minor() {
    let n = 3;
    let mut ap = vec![1.0_f64; 6];
    // B = diag(1, -1, 1), lower packed
    let mut bp = vec![1.0, 0.0, 0.0, -1.0, 0.0, 1.0];
    let mut w = vec![0.0; n];
    let mut z: Vec<f64> = Vec::new();
    let info = hpgv(1, Job::NoVec, Uplo::Lower, n as i64, &mut ap, &mut bp, &mut w, &mut z, 1).unwrap();
    assert_eq!(info, n as i64 + 2);
}

struct BandProblem {
    ab: Vec<f64>,
    bb: Vec<f64>,
    expected: Vec<f64>,
}

fn band_problem(n: usize, ka: usize, kb: usize) -> BandProblem {
    let mut gen = Generator::new(55);
    let ab: Vec<f64> = gen.vec((ka + 1) * n);
    let mut bb: Vec<f64> = gen.vec((kb + 1) * n);
    make_band_dominant(Uplo::Upper, n, kb, &mut bb, kb + 1);
    let expected = generalized_oracle(
        &band_to_dense(Uplo::Upper, n, ka, &ab, ka + 1),
        &band_to_dense(Uplo::Upper, n, kb, &bb, kb + 1),
    );
    BandProblem { ab, bb, expected }
}

#[test]
fn sbgvx_all_and_index_ranges_agree_with_oracle() {
    let (n, ka, kb) = (9, 3, 2);
    let problem = band_problem(n, ka, kb);

    let run = |range: Range, vl: f64, vu: f64, il: i64, iu: i64| {
        let mut ab = problem.ab.clone();
        let mut bb = problem.bb.clone();
        let mut q = vec![0.0; n * n];
        let mut w = vec![0.0; n];
        let mut z = vec![0.0; n * n];
        let mut ifail = vec![0_i64; n];
        let count = sbgvx(
            Job::Vec, range, Uplo::Upper, n as i64, ka as i64, kb as i64, &mut ab, (ka + 1) as i64,
            &mut bb, (kb + 1) as i64, &mut q, n as i64, vl, vu, il, iu, 0.0, &mut w, &mut z, n as i64,
            &mut ifail,
        )
        .unwrap();
        assert_eq!(count.info, 0);
        assert!(ifail[..count.found as usize].iter().all(|&f| f == 0));
        w.truncate(count.found as usize);
        w
    };

    let all = run(Range::All, 0.0, 0.0, 1, n as i64);
    assert_close(&all, &problem.expected, 1e-9);

    let middle = run(Range::Index, 0.0, 0.0, 3, 5);
    assert_close(&middle, &problem.expected[2..5], 1e-9);

    // half-open interval strictly around the first two eigenvalues
    let vu = 0.5 * (problem.expected[1] + problem.expected[2]);
    let low = run(Range::Value, problem.expected[0] - 1.0, vu, 1, n as i64);
    assert_close(&low, &problem.expected[..2], 1e-9);
}

#[test]
fn hbgvx_complex_eigenvectors_have_small_residual() {
    let (n, ka, kb) = (8, 2, 1);
    let mut gen = Generator::new(77);
    let mut ab: Vec<c64> = gen.vec((ka + 1) * n);
    let mut bb: Vec<c64> = gen.vec((kb + 1) * n);
    make_band_dominant(Uplo::Lower, n, kb, &mut bb, kb + 1);
    let a = band_to_dense(Uplo::Lower, n, ka, &ab, ka + 1);
    let b = band_to_dense(Uplo::Lower, n, kb, &bb, kb + 1);

    let mut q = vec![c64::new(0.0, 0.0); n * n];
    let mut w = vec![0.0; n];
    let mut z = vec![c64::new(0.0, 0.0); n * n];
    let mut ifail = vec![0_i64; n];
    let count = hbgvx(
        Job::Vec, Range::All, Uplo::Lower, n as i64, ka as i64, kb as i64, &mut ab, (ka + 1) as i64,
        &mut bb, (kb + 1) as i64, &mut q, n as i64, 0.0, 0.0, 1, n as i64, 0.0, &mut w, &mut z, n as i64,
        &mut ifail,
    )
    .unwrap();
    assert_eq!(count, lapackx::EigenCount { found: n as i64, info: 0 });

    let resid = generalized_residual(1, &a, &b, &dense(n, n, &z, n), &promote_real(&w));
    assert!(resid < 1000.0 * f64::EPSILON, "residual {}", resid);
}

#[test]
fn geev_real_matches_nalgebra_eigenvalues() {
    let n = 8;
    let a: Vec<f64> = Generator::new(8).vec(n * n);
    let oracle = DMatrix::from_column_slice(n, n, &a);
    let mut expected: Vec<C64> = oracle.complex_eigenvalues().iter().copied().collect();
    sort_lexical(&mut expected);

    let mut work = a.clone();
    let mut w = vec![Complex::new(0.0, 0.0); n];
    let mut vl: Vec<f64> = Vec::new();
    let mut vr = vec![0.0; n * n];
    let info = geev(Job::NoVec, Job::Vec, n as i64, &mut work, n as i64, &mut w, &mut vl, 1, &mut vr, n as i64).unwrap();
    assert_eq!(info, 0);

    let v = eigenvectors(n, &vr, n, &w);
    let (resid, normalization) = eigen_residual(&dense(n, n, &a, n), &v, &w, false);
    assert!(resid < 100.0 * f64::EPSILON, "residual {}", resid);
    assert!(normalization < 100.0 * f64::EPSILON, "normalization {}", normalization);

    sort_lexical(&mut w);
    assert!(rel_error(&w, &expected) < 1e-8);
}

#[test]
fn geev_complex_left_vectors() {
    let n = 6;
    let a: Vec<c64> = Generator::new(12).vec(n * n);
    let mut work = a.clone();
    let mut w = vec![Complex::new(0.0, 0.0); n];
    let mut vl = vec![c64::new(0.0, 0.0); n * n];
    let mut vr: Vec<c64> = Vec::new();
    let info = geev(Job::Vec, Job::NoVec, n as i64, &mut work, n as i64, &mut w, &mut vl, n as i64, &mut vr, 1).unwrap();
    assert_eq!(info, 0);

    let v = eigenvectors(n, &vl, n, &w);
    let (resid, normalization) = eigen_residual(&dense(n, n, &a, n), &v, &w, true);
    assert!(resid < 100.0 * f64::EPSILON, "residual {}", resid);
    assert!(normalization < 100.0 * f64::EPSILON, "normalization {}", normalization);
}
