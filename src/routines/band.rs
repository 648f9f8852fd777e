//! Hermitian/symmetric positive-definite band matrices: Cholesky factor and solve.

use libc::c_char;

use crate::error::{check_info, Result};
use crate::ffi;
use crate::flags::Uplo;
use crate::marshal::{check_len, matrix_len, narrow_all, LapackInt};
use crate::scalar::{c32, c64, Scalar};

/// Native call sites for the `pb*` family.
///
/// The methods are `unsafe` because they trust the caller to have checked every slice
/// against the dimensions; use the generic functions in this module instead.
pub trait BandCholesky: Scalar {
    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn pbsv_call(
        uplo: c_char,
        n: LapackInt,
        kd: LapackInt,
        nrhs: LapackInt,
        ab: &mut [Self],
        ldab: LapackInt,
        b: &mut [Self],
        ldb: LapackInt,
    ) -> LapackInt;

    #[doc(hidden)]
    unsafe fn pbtrf_call(
        uplo: c_char,
        n: LapackInt,
        kd: LapackInt,
        ab: &mut [Self],
        ldab: LapackInt,
    ) -> LapackInt;

    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn pbtrs_call(
        uplo: c_char,
        n: LapackInt,
        kd: LapackInt,
        nrhs: LapackInt,
        ab: &[Self],
        ldab: LapackInt,
        b: &mut [Self],
        ldb: LapackInt,
    ) -> LapackInt;
}

macro_rules! impl_band_cholesky {
    ($t:ty, $pbsv:ident, $pbtrf:ident, $pbtrs:ident) => {
        impl BandCholesky for $t {
            unsafe fn pbsv_call(
                uplo: c_char,
                n: LapackInt,
                kd: LapackInt,
                nrhs: LapackInt,
                ab: &mut [Self],
                ldab: LapackInt,
                b: &mut [Self],
                ldb: LapackInt,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$pbsv(
                    &uplo,
                    &n,
                    &kd,
                    &nrhs,
                    ab.as_mut_ptr(),
                    &ldab,
                    b.as_mut_ptr(),
                    &ldb,
                    &mut info,
                );
                info
            }

            unsafe fn pbtrf_call(
                uplo: c_char,
                n: LapackInt,
                kd: LapackInt,
                ab: &mut [Self],
                ldab: LapackInt,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$pbtrf(&uplo, &n, &kd, ab.as_mut_ptr(), &ldab, &mut info);
                info
            }

            unsafe fn pbtrs_call(
                uplo: c_char,
                n: LapackInt,
                kd: LapackInt,
                nrhs: LapackInt,
                ab: &[Self],
                ldab: LapackInt,
                b: &mut [Self],
                ldb: LapackInt,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$pbtrs(
                    &uplo,
                    &n,
                    &kd,
                    &nrhs,
                    ab.as_ptr(),
                    &ldab,
                    b.as_mut_ptr(),
                    &ldb,
                    &mut info,
                );
                info
            }
        }
    };
}

impl_band_cholesky!(f32, spbsv_, spbtrf_, spbtrs_);
impl_band_cholesky!(f64, dpbsv_, dpbtrf_, dpbtrs_);
impl_band_cholesky!(c32, cpbsv_, cpbtrf_, cpbtrs_);
impl_band_cholesky!(c64, zpbsv_, zpbtrf_, zpbtrs_);

/// Solves `A X = B` for a Hermitian (symmetric) positive-definite band matrix `A`.
///
/// `A = U^H U` (`Uplo::Upper`) or `A = L L^H` (`Uplo::Lower`) is computed and used to
/// solve for the `n`-by-`nrhs` right-hand sides in `b`.
///
/// * `ab`: `ldab`-by-`n`, the upper or lower triangle of `A` in the first `kd+1` rows.
///   Column `j` of `A` is stored in column `j` of `ab`:
///   - upper: `AB(kd+1+i-j, j) = A(i, j)` for `max(1, j-kd) <= i <= j`;
///   - lower: `AB(1+i-j, j) = A(i, j)` for `j <= i <= min(n, j+kd)`.
///
///   On success it holds the triangular factor in the same layout.
/// * `b`: `ldb`-by-`nrhs`; overwritten with the solution `X`.
///
/// Returns `Ok(0)` on success, or `Ok(i)` if the leading minor of order `i` is not
/// positive definite (the factorization was not completed and `b` holds no solution).
///
/// With `n = 6`, `kd = 2`, upper storage:
///
/// ```text
///  *    *   a13  a24  a35  a46
///  *   a12  a23  a34  a45  a56
/// a11  a22  a33  a44  a55  a66
/// ```
#[allow(clippy::too_many_arguments)]
pub fn pbsv<T: BandCholesky>(
    uplo: Uplo,
    n: i64,
    kd: i64,
    nrhs: i64,
    ab: &mut [T],
    ldab: i64,
    b: &mut [T],
    ldb: i64,
) -> Result<i64> {
    let [n_, kd_, nrhs_, ldab_, ldb_] =
        narrow_all([("n", n), ("kd", kd), ("nrhs", nrhs), ("ldab", ldab), ("ldb", ldb)])?;
    check_len("ab", ab.len(), matrix_len(kd.saturating_add(1), n, ldab))?;
    check_len("b", b.len(), matrix_len(n, nrhs, ldb))?;

    let info = unsafe { T::pbsv_call(uplo.as_c_char(), n_, kd_, nrhs_, ab, ldab_, b, ldb_) };
    check_info("pbsv", info)
}

/// Cholesky factorization of a Hermitian positive-definite band matrix, in place.
///
/// Same storage as [`pbsv`]. `Ok(i > 0)`: the leading minor of order `i` is not positive
/// definite.
pub fn pbtrf<T: BandCholesky>(uplo: Uplo, n: i64, kd: i64, ab: &mut [T], ldab: i64) -> Result<i64> {
    let [n_, kd_, ldab_] = narrow_all([("n", n), ("kd", kd), ("ldab", ldab)])?;
    check_len("ab", ab.len(), matrix_len(kd.saturating_add(1), n, ldab))?;

    let info = unsafe { T::pbtrf_call(uplo.as_c_char(), n_, kd_, ab, ldab_) };
    check_info("pbtrf", info)
}

/// Solves `A X = B` using the band Cholesky factor produced by [`pbtrf`].
#[allow(clippy::too_many_arguments)]
pub fn pbtrs<T: BandCholesky>(
    uplo: Uplo,
    n: i64,
    kd: i64,
    nrhs: i64,
    ab: &[T],
    ldab: i64,
    b: &mut [T],
    ldb: i64,
) -> Result<i64> {
    let [n_, kd_, nrhs_, ldab_, ldb_] =
        narrow_all([("n", n), ("kd", kd), ("nrhs", nrhs), ("ldab", ldab), ("ldb", ldb)])?;
    check_len("ab", ab.len(), matrix_len(kd.saturating_add(1), n, ldab))?;
    check_len("b", b.len(), matrix_len(n, nrhs, ldb))?;

    let info = unsafe { T::pbtrs_call(uplo.as_c_char(), n_, kd_, nrhs_, ab, ldab_, b, ldb_) };
    check_info("pbtrs", info)
}
