// tests/test_least_squares.rs

mod common;

use common::eps;
use lapackx::conformance::compare::{dense, orthogonality, promote, rel_error, C64};
use lapackx::conformance::generate::Generator;
use lapackx::{c64, gelqf, gelsd, gelss, geqrf, ggrqf, unglq, LeastSquares, Scalar};
use ndarray::{s, Array2};

fn frobenius(a: &Array2<C64>) -> f64 {
    a.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt()
}

/// `b = A x` for column-major `A` (`m`-by-`n`) and `x`, written into a buffer with `ldb` rows.
fn rhs<T: Scalar>(m: usize, n: usize, a: &[T], x: &[T], ldb: usize) -> Vec<T> {
    let mut b = vec![T::zero(); ldb];
    for j in 0..n {
        for i in 0..m {
            b[i] += a[i + j * m] * x[j];
        }
    }
    b
}

fn solve<T: LeastSquares>(divide_and_conquer: bool, m: usize, n: usize, a: &[T], b: &[T], rcond: T::Real) -> (Vec<T>, Vec<T::Real>, i64) {
    let ldb = m.max(n);
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    let mut s = vec![T::Real::default(); m.min(n)];
    let mut rank = 0;
    let info = if divide_and_conquer {
        gelsd(m as i64, n as i64, 1, &mut a, m as i64, &mut b, ldb as i64, &mut s, rcond, &mut rank)
    } else {
        gelss(m as i64, n as i64, 1, &mut a, m as i64, &mut b, ldb as i64, &mut s, rcond, &mut rank)
    }
    .unwrap();
    assert_eq!(info, 0);
    b.truncate(n);
    (b, s, rank)
}

#[test]
fn consistent_overdetermined_system_is_recovered() {
    let (m, n) = (10, 4);
    let mut gen = Generator::new(2);
    let a: Vec<f64> = gen.vec(m * n);
    let x_true: Vec<f64> = gen.vec(n);
    let b = rhs(m, n, &a, &x_true, m);

    for dc in [false, true] {
        let (x, s, rank) = solve(dc, m, n, &a, &b, -1.0);
        assert_eq!(rank, n as i64);
        assert!(s.windows(2).all(|p| p[0] >= p[1]), "singular values descend");
        assert!(rel_error(&promote(&x), &promote(&x_true)) < 1e-10);
    }
}

#[test]
fn gelss_and_gelsd_agree_on_complex_problems() {
    let (m, n) = (9, 6);
    let mut gen = Generator::new(3);
    let a: Vec<c64> = gen.vec(m * n);
    let b: Vec<c64> = gen.vec(m);

    let (x_svd, s_svd, rank_svd) = solve(false, m, n, &a, &b, -1.0);
    let (x_dc, s_dc, rank_dc) = solve(true, m, n, &a, &b, -1.0);
    assert_eq!(rank_svd, rank_dc);
    assert!(rel_error(&promote(&s_svd), &promote(&s_dc)) < 1000.0 * eps::<c64>());
    assert!(rel_error(&promote(&x_svd), &promote(&x_dc)) < 1e-10);
}

#[test]
fn repeated_column_lowers_the_rank() {
    let (m, n) = (8, 4);
    let mut a: Vec<f64> = Generator::new(4).vec(m * n);
    let (first, rest) = a.split_at_mut(m);
    rest[2 * m..3 * m].copy_from_slice(first);
    let b: Vec<f64> = Generator::new(5).vec(m);

    for dc in [false, true] {
        let (_, s, rank) = solve(dc, m, n, &a, &b, 1e-10);
        assert_eq!(rank, 3, "singular values {:?}", s);
    }
}

#[test]
fn underdetermined_system_gets_an_exact_solution() {
    let (m, n) = (3, 5);
    let mut gen = Generator::new(6);
    let a: Vec<f64> = gen.vec(m * n);
    let b: Vec<f64> = gen.vec(m);
    let mut padded = b.clone();
    padded.resize(n, 0.0);

    let (x, _, rank) = solve(false, m, n, &a, &padded, -1.0);
    assert_eq!(rank, m as i64);
    let ax = rhs(m, n, &a, &x, m);
    assert!(rel_error(&promote(&ax), &promote(&b)) < 1e-12);
}

#[test]
fn gelqf_and_unglq_rebuild_the_matrix() {
    let (m, n) = (4, 7);
    let a: Vec<c64> = Generator::new(7).vec(m * n);
    let original = dense(m, n, &a, m);

    let mut lq = a.clone();
    let mut tau = vec![c64::new(0.0, 0.0); m];
    assert_eq!(gelqf(m as i64, n as i64, &mut lq, m as i64, &mut tau).unwrap(), 0);
    let l = Array2::from_shape_fn((m, m), |(i, j)| if j <= i { lq[i + j * m] } else { c64::new(0.0, 0.0) });

    let mut q = lq.clone();
    assert_eq!(unglq(m as i64, n as i64, m as i64, &mut q, m as i64, &tau).unwrap(), 0);
    let q = dense(m, n, &q, m);
    assert!(orthogonality(&q) < 100.0 * eps::<c64>());

    let rebuilt = l.dot(&q);
    assert!(frobenius(&(rebuilt - &original)) < 100.0 * eps::<c64>() * frobenius(&original));
}

#[test]
fn geqrf_preserves_column_norms() {
    let (m, n) = (9, 5);
    let a: Vec<f64> = Generator::new(8).vec(m * n);
    let original = dense(m, n, &a, m);

    let mut qr = a.clone();
    let mut tau = vec![0.0; n];
    assert_eq!(geqrf(m as i64, n as i64, &mut qr, m as i64, &mut tau).unwrap(), 0);
    let r = dense(m, n, &qr, m);
    for j in 0..n {
        let col = frobenius(&original.slice(s![.., j..j + 1]).to_owned());
        let r_col = r.slice(s![..j + 1, j]).iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
        assert!((col - r_col).abs() < 1e-12 * col, "column {}", j);
    }
}

#[test]
fn ggrqf_triangles_keep_frobenius_norms() {
    let (m, p, n) = (3, 5, 4);
    let mut gen = Generator::new(9);
    let a: Vec<c64> = gen.vec(m * n);
    let b: Vec<c64> = gen.vec(p * n);
    let (norm_a, norm_b) = (frobenius(&dense(m, n, &a, m)), frobenius(&dense(p, n, &b, p)));

    let mut fa = a.clone();
    let mut fb = b.clone();
    let mut taua = vec![c64::new(0.0, 0.0); m];
    let mut taub = vec![c64::new(0.0, 0.0); n];
    let info = ggrqf(m as i64, p as i64, n as i64, &mut fa, m as i64, &mut taua, &mut fb, p as i64, &mut taub).unwrap();
    assert_eq!(info, 0);

    // R is upper triangular in the last m columns of A, T in the leading n rows of B
    let fa = dense(m, n, &fa, m);
    let r: f64 = (0..m)
        .flat_map(|i| (i..m).map(move |j| (i, j)))
        .map(|(i, j)| fa[(i, n - m + j)].norm_sqr())
        .sum::<f64>()
        .sqrt();
    let fb = dense(p, n, &fb, p);
    let t: f64 = (0..n)
        .flat_map(|i| (i..n).map(move |j| (i, j)))
        .map(|(i, j)| fb[(i, j)].norm_sqr())
        .sum::<f64>()
        .sqrt();
    assert!((r - norm_a).abs() < 1e-12 * norm_a);
    assert!((t - norm_b).abs() < 1e-12 * norm_b);
}
