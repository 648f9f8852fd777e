// tests/test_band.rs

mod common;

use common::{band_to_dense, eps, solve_residual};
use lapackx::conformance::compare::dense;
use lapackx::conformance::generate::{make_band_dominant, Generator};
use lapackx::{c32, c64, pbsv, pbtrf, pbtrs, BandCholesky, Error, Uplo};

const N: usize = 6;
const KD: usize = 2;

/// Solve with a dominant band matrix; returns info and the residual in units of eps.
fn pbsv_case<T: BandCholesky>(uplo: Uplo, nrhs: usize, seed: u64) -> (i64, f64) {
    let ldab = KD + 1;
    let mut gen = Generator::new(seed);
    let mut ab: Vec<T> = gen.vec(ldab * N);
    make_band_dominant(uplo, N, KD, &mut ab, ldab);
    let a = band_to_dense(uplo, N, KD, &ab, ldab);
    let b: Vec<T> = gen.vec(N * nrhs);
    let mut x = b.clone();

    let info = pbsv(uplo, N as i64, KD as i64, nrhs as i64, &mut ab, ldab as i64, &mut x, N as i64)
        .expect("valid arguments");
    let resid = solve_residual(&a, &dense(N, nrhs, &x, N), &dense(N, nrhs, &b, N));
    (info, resid / eps::<T>())
}

#[test]
fn pbsv_upper_n6_kd2_all_types() {
    for seed in 0..4 {
        let cases = [
            pbsv_case::<f32>(Uplo::Upper, 1, seed),
            pbsv_case::<f64>(Uplo::Upper, 1, seed),
            pbsv_case::<c32>(Uplo::Upper, 1, seed),
            pbsv_case::<c64>(Uplo::Upper, 1, seed),
        ];
        for (info, resid) in cases {
            assert_eq!(info, 0);
            assert!(resid < 100.0, "residual {} eps", resid);
        }
    }
}

#[test]
fn pbsv_lower_with_several_right_hand_sides() {
    let (info, resid) = pbsv_case::<f64>(Uplo::Lower, 3, 7);
    assert_eq!(info, 0);
    assert!(resid < 100.0, "residual {} eps", resid);
    let (info, resid) = pbsv_case::<c64>(Uplo::Lower, 3, 7);
    assert_eq!(info, 0);
    assert!(resid < 100.0, "residual {} eps", resid);
}

#[test]
fn pbtrf_then_pbtrs_reproduces_the_solution() {
    let ldab = KD + 1;
    let mut gen = Generator::new(11);
    let mut ab: Vec<c64> = gen.vec(ldab * N);
    make_band_dominant(Uplo::Lower, N, KD, &mut ab, ldab);
    let a = band_to_dense(Uplo::Lower, N, KD, &ab, ldab);
    let b: Vec<c64> = gen.vec(N * 2);

    let info = pbtrf(Uplo::Lower, N as i64, KD as i64, &mut ab, ldab as i64).unwrap();
    assert_eq!(info, 0);
    let mut x = b.clone();
    let info = pbtrs(Uplo::Lower, N as i64, KD as i64, 2, &ab, ldab as i64, &mut x, N as i64).unwrap();
    assert_eq!(info, 0);

    let resid = solve_residual(&a, &dense(N, 2, &x, N), &dense(N, 2, &b, N));
    assert!(resid < 100.0 * eps::<c64>(), "residual {}", resid);
}

#[test]
fn indefinite_minor_is_returned_not_raised() {
    // diagonal, kd = 0: the third leading minor is negative
    let mut ab = vec![4.0_f64, 4.0, -1.0, 4.0];
    let mut b = vec![1.0_f64; 4];
    let info = pbsv(Uplo::Upper, 4, 0, 1, &mut ab, 1, &mut b, 4).unwrap();
    assert_eq!(info, 3);

    let mut ab = vec![4.0_f32, -4.0];
    assert_eq!(pbtrf(Uplo::Lower, 2, 0, &mut ab, 1).unwrap(), 2);
}

#[test]
fn short_band_buffer_is_rejected_untouched() {
    let mut ab = vec![1.0_f64; 5];
    let mut b = vec![1.0_f64; 3];
    let err = pbsv(Uplo::Upper, 3, 1, 1, &mut ab, 2, &mut b, 3).unwrap_err();
    assert_eq!(
        err,
        Error::BufferTooSmall {
            arg: "ab",
            required: 6,
            actual: 5
        }
    );
    assert!(ab.iter().chain(&b).all(|&x| x == 1.0));
}

#[test]
fn empty_system_is_a_no_op() {
    let mut ab: Vec<f64> = Vec::new();
    let mut b: Vec<f64> = Vec::new();
    assert_eq!(pbsv(Uplo::Lower, 0, 0, 1, &mut ab, 1, &mut b, 1).unwrap(), 0);
}
