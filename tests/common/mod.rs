// tests/common/mod.rs
//
// Dense views and residuals shared by the integration tests.

#![allow(dead_code)]

use lapackx::conformance::compare::{dense, norm_one, C64};
use lapackx::{Scalar, Uplo};
use ndarray::Array2;
use num_complex::Complex;
use num_traits::Float;

pub fn eps<T: Scalar>() -> f64 {
    <T::Real as Float>::epsilon().into()
}

pub fn to_c64<T: Scalar>(x: T) -> C64 {
    Complex::new(x.re().into(), x.im().into())
}

/// Full Hermitian matrix from band storage with `kd` off-diagonals.
pub fn band_to_dense<T: Scalar>(uplo: Uplo, n: usize, kd: usize, ab: &[T], ldab: usize) -> Array2<C64> {
    let mut a = Array2::<C64>::zeros((n, n));
    for j in 0..n {
        let rows = match uplo {
            Uplo::Upper => j.saturating_sub(kd)..j + 1,
            Uplo::Lower => j..(j + kd + 1).min(n),
        };
        for i in rows {
            let z = match uplo {
                Uplo::Upper => to_c64(ab[kd + i - j + j * ldab]),
                Uplo::Lower => to_c64(ab[i - j + j * ldab]),
            };
            if i == j {
                a[(i, i)] = Complex::new(z.re, 0.0);
            } else {
                a[(i, j)] = z;
                a[(j, i)] = z.conj();
            }
        }
    }
    a
}

/// Full Hermitian matrix from the `uplo` triangle of a column-major buffer.
pub fn hermitian_from_triangle<T: Scalar>(uplo: Uplo, n: usize, a: &[T], lda: usize) -> Array2<C64> {
    let stored = dense(n, n, a, lda);
    Array2::from_shape_fn((n, n), |(i, j)| {
        let in_triangle = match uplo {
            Uplo::Upper => i <= j,
            Uplo::Lower => i >= j,
        };
        if i == j {
            Complex::new(stored[(i, i)].re, 0.0)
        } else if in_triangle {
            stored[(i, j)]
        } else {
            stored[(j, i)].conj()
        }
    })
}

/// `‖A X − B‖₁ / ‖B‖₁`.
pub fn solve_residual(a: &Array2<C64>, x: &Array2<C64>, b: &Array2<C64>) -> f64 {
    let r = a.dot(x) - b;
    let scale = norm_one(b);
    if scale == 0.0 {
        norm_one(&r)
    } else {
        norm_one(&r) / scale
    }
}

/// `‖A B − I‖₁`.
pub fn inverse_residual(a: &Array2<C64>, b: &Array2<C64>) -> f64 {
    let n = a.nrows();
    norm_one(&(a.dot(b) - Array2::<C64>::eye(n)))
}
