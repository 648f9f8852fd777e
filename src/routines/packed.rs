//! Positive-definite matrices in packed storage.

use libc::c_char;

use crate::error::{check_info, Result};
use crate::ffi;
use crate::flags::Uplo;
use crate::marshal::{check_len, matrix_len, narrow_all, packed_len, LapackInt};
use crate::scalar::{c32, c64, Scalar};

/// Native call sites for `ppsv`, `pptrf` and `pptri`.
pub trait PackedCholesky: Scalar {
    #[doc(hidden)]
    unsafe fn ppsv_call(
        uplo: c_char,
        n: LapackInt,
        nrhs: LapackInt,
        ap: &mut [Self],
        b: &mut [Self],
        ldb: LapackInt,
    ) -> LapackInt;

    #[doc(hidden)]
    unsafe fn pptrf_call(uplo: c_char, n: LapackInt, ap: &mut [Self]) -> LapackInt;

    #[doc(hidden)]
    unsafe fn pptri_call(uplo: c_char, n: LapackInt, ap: &mut [Self]) -> LapackInt;
}

macro_rules! impl_packed_cholesky {
    ($t:ty, $ppsv:ident, $pptrf:ident, $pptri:ident) => {
        impl PackedCholesky for $t {
            unsafe fn ppsv_call(
                uplo: c_char,
                n: LapackInt,
                nrhs: LapackInt,
                ap: &mut [Self],
                b: &mut [Self],
                ldb: LapackInt,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$ppsv(&uplo, &n, &nrhs, ap.as_mut_ptr(), b.as_mut_ptr(), &ldb, &mut info);
                info
            }

            unsafe fn pptrf_call(uplo: c_char, n: LapackInt, ap: &mut [Self]) -> LapackInt {
                let mut info = 0;
                ffi::$pptrf(&uplo, &n, ap.as_mut_ptr(), &mut info);
                info
            }

            unsafe fn pptri_call(uplo: c_char, n: LapackInt, ap: &mut [Self]) -> LapackInt {
                let mut info = 0;
                ffi::$pptri(&uplo, &n, ap.as_mut_ptr(), &mut info);
                info
            }
        }
    };
}

impl_packed_cholesky!(f32, sppsv_, spptrf_, spptri_);
impl_packed_cholesky!(f64, dppsv_, dpptrf_, dpptri_);
impl_packed_cholesky!(c32, cppsv_, cpptrf_, cpptri_);
impl_packed_cholesky!(c64, zppsv_, zpptrf_, zpptri_);

/// Solves `A X = B` for a Hermitian positive-definite `A` in packed storage.
///
/// `ap` holds `n(n+1)/2` elements: the upper (`AP(i + (j-1)j/2) = A(i,j)`, `i <= j`) or
/// lower (`AP(i + (j-1)(2n-j)/2) = A(i,j)`, `j <= i`) triangle, column by column. On
/// success it holds the Cholesky factor and `b` the solution.
///
/// `Ok(i > 0)`: the leading minor of order `i` is not positive definite.
pub fn ppsv<T: PackedCholesky>(
    uplo: Uplo,
    n: i64,
    nrhs: i64,
    ap: &mut [T],
    b: &mut [T],
    ldb: i64,
) -> Result<i64> {
    let [n_, nrhs_, ldb_] = narrow_all([("n", n), ("nrhs", nrhs), ("ldb", ldb)])?;
    check_len("ap", ap.len(), packed_len(n))?;
    check_len("b", b.len(), matrix_len(n, nrhs, ldb))?;

    let info = unsafe { T::ppsv_call(uplo.as_c_char(), n_, nrhs_, ap, b, ldb_) };
    check_info("ppsv", info)
}

/// Packed Cholesky factorization `A = U^H U` or `A = L L^H`, in place.
pub fn pptrf<T: PackedCholesky>(uplo: Uplo, n: i64, ap: &mut [T]) -> Result<i64> {
    let [n_] = narrow_all([("n", n)])?;
    check_len("ap", ap.len(), packed_len(n))?;

    let info = unsafe { T::pptrf_call(uplo.as_c_char(), n_, ap) };
    check_info("pptrf", info)
}

/// Inverse of a Hermitian positive-definite matrix from its [`pptrf`] factor, in place.
///
/// `Ok(i > 0)`: the `(i,i)` element of the factor is zero and the inverse could not be
/// computed.
pub fn pptri<T: PackedCholesky>(uplo: Uplo, n: i64, ap: &mut [T]) -> Result<i64> {
    let [n_] = narrow_all([("n", n)])?;
    check_len("ap", ap.len(), packed_len(n))?;

    let info = unsafe { T::pptri_call(uplo.as_c_char(), n_, ap) };
    check_info("pptri", info)
}
