//! Matrix norms (`lan*`). These have no status code; the result is the norm itself.
//!
//! With the `f2c` feature the single-precision natives return a double at the ABI;
//! the value is narrowed back to `f32` here.

use libc::c_char;

use crate::error::Result;
use crate::ffi;
use crate::flags::{Diag, Norm, Uplo};
use crate::marshal::{check_len, matrix_len, narrow_all, packed_len, vector_len, LapackInt};
use crate::scalar::{c32, c64, Scalar};

/// Native call sites for the norm functions.
pub trait Norms: Scalar {
    #[doc(hidden)]
    unsafe fn lantp_call(
        norm: c_char,
        uplo: c_char,
        diag: c_char,
        n: LapackInt,
        ap: &[Self],
        work: &mut [Self::Real],
    ) -> Self::Real;

    #[doc(hidden)]
    unsafe fn lanhp_call(norm: c_char, uplo: c_char, n: LapackInt, ap: &[Self], work: &mut [Self::Real]) -> Self::Real;

    #[doc(hidden)]
    unsafe fn lange_call(
        norm: c_char,
        m: LapackInt,
        n: LapackInt,
        a: &[Self],
        lda: LapackInt,
        work: &mut [Self::Real],
    ) -> Self::Real;

    #[doc(hidden)]
    unsafe fn lanhe_call(
        norm: c_char,
        uplo: c_char,
        n: LapackInt,
        a: &[Self],
        lda: LapackInt,
        work: &mut [Self::Real],
    ) -> Self::Real;
}

macro_rules! impl_norms {
    ($t:ty, $r:ty, $lantp:ident, $lanhp:ident, $lange:ident, $lanhe:ident) => {
        impl Norms for $t {
            unsafe fn lantp_call(
                norm: c_char,
                uplo: c_char,
                diag: c_char,
                n: LapackInt,
                ap: &[Self],
                work: &mut [$r],
            ) -> $r {
                ffi::$lantp(&norm, &uplo, &diag, &n, ap.as_ptr(), work.as_mut_ptr()) as $r
            }

            unsafe fn lanhp_call(norm: c_char, uplo: c_char, n: LapackInt, ap: &[Self], work: &mut [$r]) -> $r {
                ffi::$lanhp(&norm, &uplo, &n, ap.as_ptr(), work.as_mut_ptr()) as $r
            }

            unsafe fn lange_call(
                norm: c_char,
                m: LapackInt,
                n: LapackInt,
                a: &[Self],
                lda: LapackInt,
                work: &mut [$r],
            ) -> $r {
                ffi::$lange(&norm, &m, &n, a.as_ptr(), &lda, work.as_mut_ptr()) as $r
            }

            unsafe fn lanhe_call(
                norm: c_char,
                uplo: c_char,
                n: LapackInt,
                a: &[Self],
                lda: LapackInt,
                work: &mut [$r],
            ) -> $r {
                ffi::$lanhe(&norm, &uplo, &n, a.as_ptr(), &lda, work.as_mut_ptr()) as $r
            }
        }
    };
}

impl_norms!(f32, f32, slantp_, slansp_, slange_, slansy_);
impl_norms!(f64, f64, dlantp_, dlansp_, dlange_, dlansy_);
impl_norms!(c32, f32, clantp_, clanhp_, clange_, clanhe_);
impl_norms!(c64, f64, zlantp_, zlanhp_, zlange_, zlanhe_);

fn real_work<T: Scalar>(len: usize) -> Vec<T::Real> {
    vec![T::Real::default(); len.max(1)]
}

/// Norm of a triangular matrix in packed storage. Zero when `n == 0`.
pub fn lantp<T: Norms>(norm: Norm, uplo: Uplo, diag: Diag, n: i64, ap: &[T]) -> Result<T::Real> {
    let [n_] = narrow_all([("n", n)])?;
    check_len("ap", ap.len(), packed_len(n))?;

    let mut work = real_work::<T>(if norm == Norm::Inf { vector_len(n) } else { 1 });
    Ok(unsafe { T::lantp_call(norm.as_c_char(), uplo.as_c_char(), diag.as_c_char(), n_, ap, &mut work) })
}

/// Norm of a Hermitian (symmetric for real types) matrix in packed storage.
pub fn lanhp<T: Norms>(norm: Norm, uplo: Uplo, n: i64, ap: &[T]) -> Result<T::Real> {
    let [n_] = narrow_all([("n", n)])?;
    check_len("ap", ap.len(), packed_len(n))?;

    let mut work = real_work::<T>(if norm.needs_column_workspace() { vector_len(n) } else { 1 });
    Ok(unsafe { T::lanhp_call(norm.as_c_char(), uplo.as_c_char(), n_, ap, &mut work) })
}

/// Norm of a general `m`-by-`n` matrix.
pub fn lange<T: Norms>(norm: Norm, m: i64, n: i64, a: &[T], lda: i64) -> Result<T::Real> {
    let [m_, n_, lda_] = narrow_all([("m", m), ("n", n), ("lda", lda)])?;
    check_len("a", a.len(), matrix_len(m, n, lda))?;

    let mut work = real_work::<T>(if norm == Norm::Inf { vector_len(m) } else { 1 });
    Ok(unsafe { T::lange_call(norm.as_c_char(), m_, n_, a, lda_, &mut work) })
}

/// Norm of a dense Hermitian (symmetric for real types) matrix; only the `uplo`
/// triangle is read.
pub fn lanhe<T: Norms>(norm: Norm, uplo: Uplo, n: i64, a: &[T], lda: i64) -> Result<T::Real> {
    let [n_, lda_] = narrow_all([("n", n), ("lda", lda)])?;
    check_len("a", a.len(), matrix_len(n, n, lda))?;

    let mut work = real_work::<T>(if norm.needs_column_workspace() { vector_len(n) } else { 1 });
    Ok(unsafe { T::lanhe_call(norm.as_c_char(), uplo.as_c_char(), n_, a, lda_, &mut work) })
}
