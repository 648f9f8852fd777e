//! Dense positive-definite matrices: Cholesky factorization and condition estimate.

use libc::c_char;

use crate::error::{check_info, Result};
use crate::ffi;
use crate::flags::Uplo;
use crate::marshal::{check_len, matrix_len, narrow_all, vector_len, LapackInt};
use crate::scalar::{c32, c64, Scalar};
use crate::workspace::{Workspace, WorkspaceMin};

/// Native call sites for `potrf` and `pocon`.
pub trait Cholesky: Scalar {
    #[doc(hidden)]
    fn pocon_workspace(n: usize) -> WorkspaceMin;

    #[doc(hidden)]
    unsafe fn potrf_call(uplo: c_char, n: LapackInt, a: &mut [Self], lda: LapackInt) -> LapackInt;

    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn pocon_call(
        uplo: c_char,
        n: LapackInt,
        a: &[Self],
        lda: LapackInt,
        anorm: Self::Real,
        rcond: &mut Self::Real,
        ws: &mut Workspace<Self>,
    ) -> LapackInt;
}

macro_rules! impl_cholesky_real {
    ($t:ty, $potrf:ident, $pocon:ident) => {
        impl Cholesky for $t {
            fn pocon_workspace(n: usize) -> WorkspaceMin {
                WorkspaceMin::work(n.saturating_mul(3)).with_iwork(n)
            }

            unsafe fn potrf_call(uplo: c_char, n: LapackInt, a: &mut [Self], lda: LapackInt) -> LapackInt {
                let mut info = 0;
                ffi::$potrf(&uplo, &n, a.as_mut_ptr(), &lda, &mut info);
                info
            }

            unsafe fn pocon_call(
                uplo: c_char,
                n: LapackInt,
                a: &[Self],
                lda: LapackInt,
                anorm: Self,
                rcond: &mut Self,
                ws: &mut Workspace<Self>,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$pocon(
                    &uplo,
                    &n,
                    a.as_ptr(),
                    &lda,
                    &anorm,
                    rcond,
                    ws.work.as_mut_ptr(),
                    ws.iwork.as_mut_ptr(),
                    &mut info,
                );
                info
            }
        }
    };
}

macro_rules! impl_cholesky_complex {
    ($t:ty, $r:ty, $potrf:ident, $pocon:ident) => {
        impl Cholesky for $t {
            fn pocon_workspace(n: usize) -> WorkspaceMin {
                WorkspaceMin::work(n.saturating_mul(2)).with_rwork(n)
            }

            unsafe fn potrf_call(uplo: c_char, n: LapackInt, a: &mut [Self], lda: LapackInt) -> LapackInt {
                let mut info = 0;
                ffi::$potrf(&uplo, &n, a.as_mut_ptr(), &lda, &mut info);
                info
            }

            unsafe fn pocon_call(
                uplo: c_char,
                n: LapackInt,
                a: &[Self],
                lda: LapackInt,
                anorm: $r,
                rcond: &mut $r,
                ws: &mut Workspace<Self>,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$pocon(
                    &uplo,
                    &n,
                    a.as_ptr(),
                    &lda,
                    &anorm,
                    rcond,
                    ws.work.as_mut_ptr(),
                    ws.rwork.as_mut_ptr(),
                    &mut info,
                );
                info
            }
        }
    };
}

impl_cholesky_real!(f32, spotrf_, spocon_);
impl_cholesky_real!(f64, dpotrf_, dpocon_);
impl_cholesky_complex!(c32, f32, cpotrf_, cpocon_);
impl_cholesky_complex!(c64, f64, zpotrf_, zpocon_);

/// Cholesky factorization of a dense Hermitian positive-definite matrix, in place.
///
/// Only the `uplo` triangle of `a` is referenced. `Ok(i > 0)`: the leading minor of
/// order `i` is not positive definite.
pub fn potrf<T: Cholesky>(uplo: Uplo, n: i64, a: &mut [T], lda: i64) -> Result<i64> {
    let [n_, lda_] = narrow_all([("n", n), ("lda", lda)])?;
    check_len("a", a.len(), matrix_len(n, n, lda))?;

    let info = unsafe { T::potrf_call(uplo.as_c_char(), n_, a, lda_) };
    check_info("potrf", info)
}

/// Reciprocal 1-norm condition number estimate from a [`potrf`] factor.
///
/// `anorm` is the 1-norm of the original matrix (see [`lanhe`](crate::lanhe)). The
/// estimate is written to `rcond`.
pub fn pocon<T: Cholesky>(
    uplo: Uplo,
    n: i64,
    a: &[T],
    lda: i64,
    anorm: T::Real,
    rcond: &mut T::Real,
) -> Result<i64> {
    let [n_, lda_] = narrow_all([("n", n), ("lda", lda)])?;
    check_len("a", a.len(), matrix_len(n, n, lda))?;

    let mut ws = Workspace::<T>::with_minimum(T::pocon_workspace(vector_len(n)));
    let info = unsafe { T::pocon_call(uplo.as_c_char(), n_, a, lda_, anorm, rcond, &mut ws) };
    check_info("pocon", info)
}
