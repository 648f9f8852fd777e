//! Error measures between wrapper and reference outputs.
//!
//! Buffer differences are accumulated in `f64` whatever the scalar type. Residual checks
//! promote to `Array2<Complex<f64>>` so one implementation serves all four types.

use std::cmp::Ordering;

use ndarray::Array2;
use num_complex::Complex;

use crate::flags::Uplo;
use crate::marshal::LapackInt;
use crate::scalar::Scalar;

use super::generate::packed_index;

pub type C64 = Complex<f64>;

/// Sum of `|a[i] - b[i]|`.
pub fn abs_error<T: Scalar>(a: &[T], b: &[T]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| -> f64 { (x - y).magnitude().into() })
        .sum()
}

/// `abs_error` for a wrapper pivot vector against the native one.
pub fn pivot_error(tst: &[i64], reference: &[LapackInt]) -> f64 {
    tst.iter()
        .zip(reference)
        .map(|(&x, &y)| (x - i64::from(y)).unsigned_abs() as f64)
        .sum()
}

/// `|a - b|` for two real scalars.
pub fn scalar_error<R: Into<f64>>(a: R, b: R) -> f64 {
    (a.into() - b.into()).abs()
}

/// `‖x - y‖₂ / ‖y‖₂`, or `‖x‖₂` when `y` is zero.
pub fn rel_error(x: &[C64], y: &[C64]) -> f64 {
    let diff: f64 = x.iter().zip(y).map(|(a, b)| (a - b).norm_sqr()).sum::<f64>().sqrt();
    let scale: f64 = y.iter().map(|b| b.norm_sqr()).sum::<f64>().sqrt();
    if scale == 0.0 {
        diff
    } else {
        diff / scale
    }
}

/// Order by real part, then imaginary part.
pub fn sort_lexical(values: &mut [C64]) {
    values.sort_by(|a, b| {
        a.re.partial_cmp(&b.re)
            .unwrap_or(Ordering::Equal)
            .then(a.im.partial_cmp(&b.im).unwrap_or(Ordering::Equal))
    });
}

pub fn promote<T: Scalar>(values: &[T]) -> Vec<C64> {
    values.iter().map(|&x| Complex::new(x.re().into(), x.im().into())).collect()
}

pub fn promote_real<R: Into<f64> + Copy>(values: &[R]) -> Vec<C64> {
    values.iter().map(|&x| Complex::new(x.into(), 0.0)).collect()
}

/// Column-major `rows`-by-`cols` matrix with stride `ld`.
pub fn dense<T: Scalar>(rows: usize, cols: usize, a: &[T], ld: usize) -> Array2<C64> {
    Array2::from_shape_fn((rows, cols), |(i, j)| {
        let x = a[i + j * ld];
        Complex::new(x.re().into(), x.im().into())
    })
}

/// Full Hermitian matrix from one packed triangle.
pub fn unpack_hermitian<T: Scalar>(uplo: Uplo, n: usize, ap: &[T]) -> Array2<C64> {
    let mut out = Array2::<C64>::zeros((n, n));
    for j in 0..n {
        for i in 0..n {
            let stored = match uplo {
                Uplo::Upper => i <= j,
                Uplo::Lower => i >= j,
            };
            if !stored {
                continue;
            }
            let x = ap[packed_index(uplo, n, i, j)];
            let z: C64 = Complex::new(x.re().into(), x.im().into());
            if i == j {
                out[(i, i)] = Complex::new(z.re, 0.0);
            } else {
                out[(i, j)] = z;
                out[(j, i)] = z.conj();
            }
        }
    }
    out
}

/// Maximum absolute column sum.
pub fn norm_one(a: &Array2<C64>) -> f64 {
    a.columns()
        .into_iter()
        .map(|col| col.iter().map(|z| z.norm()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Eigenvectors as complex columns.
///
/// Real types store a conjugate pair `λ = a ± bi` in consecutive columns `j, j+1` as
/// `v = V[:, j] ± i V[:, j+1]`; complex types store each vector directly.
pub fn eigenvectors<T: Scalar>(n: usize, v: &[T], ld: usize, w: &[C64]) -> Array2<C64> {
    let stored = dense(n, n, v, ld);
    if T::IS_COMPLEX {
        return stored;
    }
    let mut out = stored.clone();
    let mut j = 0;
    while j < n {
        if w[j].im != 0.0 && j + 1 < n {
            for i in 0..n {
                let re = stored[(i, j)].re;
                let im = stored[(i, j + 1)].re;
                out[(i, j)] = Complex::new(re, im);
                out[(i, j + 1)] = Complex::new(re, -im);
            }
            j += 2;
        } else {
            j += 1;
        }
    }
    out
}

/// Residuals of a right (`left == false`) or left eigendecomposition.
///
/// Returns `‖A V − V W‖₁ / (‖A‖₁ ‖V‖₁)` (with `A^H` and `conj(W)` for left vectors) and
/// `max_j |‖v_j‖₂ − 1|`.
pub fn eigen_residual(a: &Array2<C64>, v: &Array2<C64>, w: &[C64], left: bool) -> (f64, f64) {
    let op = if left { a.t().mapv(|z| z.conj()) } else { a.clone() };
    let mut resid = op.dot(v);
    for (j, mut col) in resid.columns_mut().into_iter().enumerate() {
        let lambda = if left { w[j].conj() } else { w[j] };
        for (i, z) in col.iter_mut().enumerate() {
            *z -= v[(i, j)] * lambda;
        }
    }

    let scale = norm_one(a) * norm_one(v);
    let residual = if scale > 0.0 { norm_one(&resid) / scale } else { norm_one(&resid) };
    let normalization = v
        .columns()
        .into_iter()
        .map(|col| (col.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt() - 1.0).abs())
        .fold(0.0, f64::max);
    (residual, normalization)
}

/// Residual of the generalized problem selected by `itype`, scaled by
/// `n ‖A‖₁ ‖Z‖₁`:
///
/// * 1: `A Z − B Z Λ`
/// * 2: `A B Z − Z Λ`
/// * 3: `B A Z − Z Λ`
pub fn generalized_residual(itype: i64, a: &Array2<C64>, b: &Array2<C64>, z: &Array2<C64>, w: &[C64]) -> f64 {
    let n = z.ncols();
    let scaled = |m: &Array2<C64>| {
        let mut out = m.clone();
        for (j, mut col) in out.columns_mut().into_iter().enumerate() {
            col.mapv_inplace(|x| x * w[j]);
        }
        out
    };
    let resid = match itype {
        1 => a.dot(z) - scaled(&b.dot(z)),
        2 => a.dot(&b.dot(z)) - scaled(z),
        _ => b.dot(&a.dot(z)) - scaled(z),
    };
    let scale = n as f64 * norm_one(a) * norm_one(z);
    if scale > 0.0 {
        norm_one(&resid) / scale
    } else {
        norm_one(&resid)
    }
}

/// `‖I − Q Q^H‖₁ / n` for the `m`-by-`n` matrix `Q` with orthonormal rows.
pub fn orthogonality(q: &Array2<C64>) -> f64 {
    let (m, n) = q.dim();
    let gram = q.dot(&q.t().mapv(|z| z.conj()));
    let resid = Array2::<C64>::eye(m) - gram;
    norm_one(&resid) / n.max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn abs_error_sums_magnitudes() {
        let a = [Complex::new(3.0, 4.0), Complex::new(1.0, 0.0)];
        let b = [Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)];
        assert_eq!(abs_error(&a, &b), 5.0);
        assert_eq!(abs_error(&[1.0f32, 2.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn lexical_sort_breaks_ties_on_imaginary_part() {
        let mut w = vec![
            Complex::new(1.0, 1.0),
            Complex::new(0.0, 5.0),
            Complex::new(1.0, -1.0),
        ];
        sort_lexical(&mut w);
        assert_eq!(
            w,
            vec![Complex::new(0.0, 5.0), Complex::new(1.0, -1.0), Complex::new(1.0, 1.0)]
        );
    }

    #[test]
    fn real_conjugate_pair_is_expanded() {
        let n = 2;
        let v = [1.0, 0.0, 0.0, 1.0];
        let w = [Complex::new(0.0, 1.0), Complex::new(0.0, -1.0)];
        let out = eigenvectors(n, &v, n, &w);
        assert_eq!(out[(0, 0)], Complex::new(1.0, 0.0));
        assert_eq!(out[(1, 0)], Complex::new(0.0, 1.0));
        assert_eq!(out[(1, 1)], Complex::new(0.0, -1.0));
    }

    #[test]
    fn exact_eigenpairs_have_zero_residual() {
        let a = array![[2.0, 0.0], [0.0, 3.0]].mapv(|x| Complex::new(x, 0.0));
        let v = Array2::<C64>::eye(2);
        let w = [Complex::new(2.0, 0.0), Complex::new(3.0, 0.0)];
        let (resid, norm) = eigen_residual(&a, &v, &w, false);
        assert_eq!(resid, 0.0);
        assert_eq!(norm, 0.0);
    }

    #[test]
    fn hermitian_unpack_mirrors_conjugate() {
        let ap = [Complex::new(1.0, 9.0), Complex::new(2.0, 1.0), Complex::new(3.0, 0.0)];
        let a = unpack_hermitian(Uplo::Lower, 2, &ap);
        assert_eq!(a[(0, 0)], Complex::new(1.0, 0.0));
        assert_eq!(a[(1, 0)], Complex::new(2.0, 1.0));
        assert_eq!(a[(0, 1)], Complex::new(2.0, -1.0));
    }

    #[test]
    fn rel_error_is_scale_free() {
        let y = promote_real(&[3.0, 4.0]);
        let x = promote_real(&[3.0, 4.5]);
        assert_relative_eq!(rel_error(&x, &y), 0.1, epsilon = 1e-12);
    }
}
