//! Symmetric and Hermitian indefinite matrices in packed storage (Bunch-Kaufman).
//!
//! `sptrf`/`spcon` are the symmetric routines for every scalar type, so for complex
//! types they treat the matrix as complex *symmetric*. `hptrf`/`hptrs`/`hpcon` are the
//! Hermitian routines for complex types and the symmetric ones for real types.
//!
//! Pivot vectors are `i64` on this side; they are narrowed on the way in and widened
//! on the way out.

use libc::c_char;

use crate::error::{check_info, Result};
use crate::ffi;
use crate::flags::Uplo;
use crate::marshal::{check_len, matrix_len, narrow_all, packed_len, vector_len, LapackInt, NativeInts};
use crate::scalar::{c32, c64, Scalar};
use crate::workspace::{Workspace, WorkspaceMin};

/// Native call sites for the packed Bunch-Kaufman routines.
pub trait PackedIndefinite: Scalar {
    #[doc(hidden)]
    fn spcon_workspace(n: usize) -> WorkspaceMin;

    #[doc(hidden)]
    fn hpcon_workspace(n: usize) -> WorkspaceMin;

    #[doc(hidden)]
    unsafe fn sptrf_call(uplo: c_char, n: LapackInt, ap: &mut [Self], ipiv: &mut NativeInts) -> LapackInt;

    #[doc(hidden)]
    unsafe fn hptrf_call(uplo: c_char, n: LapackInt, ap: &mut [Self], ipiv: &mut NativeInts) -> LapackInt;

    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn hptrs_call(
        uplo: c_char,
        n: LapackInt,
        nrhs: LapackInt,
        ap: &[Self],
        ipiv: &NativeInts,
        b: &mut [Self],
        ldb: LapackInt,
    ) -> LapackInt;

    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn spcon_call(
        uplo: c_char,
        n: LapackInt,
        ap: &[Self],
        ipiv: &NativeInts,
        anorm: Self::Real,
        rcond: &mut Self::Real,
        ws: &mut Workspace<Self>,
    ) -> LapackInt;

    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn hpcon_call(
        uplo: c_char,
        n: LapackInt,
        ap: &[Self],
        ipiv: &NativeInts,
        anorm: Self::Real,
        rcond: &mut Self::Real,
        ws: &mut Workspace<Self>,
    ) -> LapackInt;
}

macro_rules! impl_packed_indefinite_real {
    ($t:ty, $sptrf:ident, $sptrs:ident, $spcon:ident) => {
        impl PackedIndefinite for $t {
            fn spcon_workspace(n: usize) -> WorkspaceMin {
                WorkspaceMin::work(n.saturating_mul(2)).with_iwork(n)
            }

            fn hpcon_workspace(n: usize) -> WorkspaceMin {
                Self::spcon_workspace(n)
            }

            unsafe fn sptrf_call(uplo: c_char, n: LapackInt, ap: &mut [Self], ipiv: &mut NativeInts) -> LapackInt {
                let mut info = 0;
                ffi::$sptrf(&uplo, &n, ap.as_mut_ptr(), ipiv.as_mut_ptr(), &mut info);
                info
            }

            unsafe fn hptrf_call(uplo: c_char, n: LapackInt, ap: &mut [Self], ipiv: &mut NativeInts) -> LapackInt {
                Self::sptrf_call(uplo, n, ap, ipiv)
            }

            unsafe fn hptrs_call(
                uplo: c_char,
                n: LapackInt,
                nrhs: LapackInt,
                ap: &[Self],
                ipiv: &NativeInts,
                b: &mut [Self],
                ldb: LapackInt,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$sptrs(&uplo, &n, &nrhs, ap.as_ptr(), ipiv.as_ptr(), b.as_mut_ptr(), &ldb, &mut info);
                info
            }

            unsafe fn spcon_call(
                uplo: c_char,
                n: LapackInt,
                ap: &[Self],
                ipiv: &NativeInts,
                anorm: Self,
                rcond: &mut Self,
                ws: &mut Workspace<Self>,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$spcon(
                    &uplo,
                    &n,
                    ap.as_ptr(),
                    ipiv.as_ptr(),
                    &anorm,
                    rcond,
                    ws.work.as_mut_ptr(),
                    ws.iwork.as_mut_ptr(),
                    &mut info,
                );
                info
            }

            unsafe fn hpcon_call(
                uplo: c_char,
                n: LapackInt,
                ap: &[Self],
                ipiv: &NativeInts,
                anorm: Self,
                rcond: &mut Self,
                ws: &mut Workspace<Self>,
            ) -> LapackInt {
                Self::spcon_call(uplo, n, ap, ipiv, anorm, rcond, ws)
            }
        }
    };
}

macro_rules! impl_packed_indefinite_complex {
    ($t:ty, $r:ty, $sptrf:ident, $spcon:ident, $hptrf:ident, $hptrs:ident, $hpcon:ident) => {
        impl PackedIndefinite for $t {
            fn spcon_workspace(n: usize) -> WorkspaceMin {
                WorkspaceMin::work(n.saturating_mul(2))
            }

            fn hpcon_workspace(n: usize) -> WorkspaceMin {
                WorkspaceMin::work(n.saturating_mul(2))
            }

            unsafe fn sptrf_call(uplo: c_char, n: LapackInt, ap: &mut [Self], ipiv: &mut NativeInts) -> LapackInt {
                let mut info = 0;
                ffi::$sptrf(&uplo, &n, ap.as_mut_ptr(), ipiv.as_mut_ptr(), &mut info);
                info
            }

            unsafe fn hptrf_call(uplo: c_char, n: LapackInt, ap: &mut [Self], ipiv: &mut NativeInts) -> LapackInt {
                let mut info = 0;
                ffi::$hptrf(&uplo, &n, ap.as_mut_ptr(), ipiv.as_mut_ptr(), &mut info);
                info
            }

            unsafe fn hptrs_call(
                uplo: c_char,
                n: LapackInt,
                nrhs: LapackInt,
                ap: &[Self],
                ipiv: &NativeInts,
                b: &mut [Self],
                ldb: LapackInt,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$hptrs(&uplo, &n, &nrhs, ap.as_ptr(), ipiv.as_ptr(), b.as_mut_ptr(), &ldb, &mut info);
                info
            }

            unsafe fn spcon_call(
                uplo: c_char,
                n: LapackInt,
                ap: &[Self],
                ipiv: &NativeInts,
                anorm: $r,
                rcond: &mut $r,
                ws: &mut Workspace<Self>,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$spcon(
                    &uplo,
                    &n,
                    ap.as_ptr(),
                    ipiv.as_ptr(),
                    &anorm,
                    rcond,
                    ws.work.as_mut_ptr(),
                    &mut info,
                );
                info
            }

            unsafe fn hpcon_call(
                uplo: c_char,
                n: LapackInt,
                ap: &[Self],
                ipiv: &NativeInts,
                anorm: $r,
                rcond: &mut $r,
                ws: &mut Workspace<Self>,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$hpcon(
                    &uplo,
                    &n,
                    ap.as_ptr(),
                    ipiv.as_ptr(),
                    &anorm,
                    rcond,
                    ws.work.as_mut_ptr(),
                    &mut info,
                );
                info
            }
        }
    };
}

impl_packed_indefinite_real!(f32, ssptrf_, ssptrs_, sspcon_);
impl_packed_indefinite_real!(f64, dsptrf_, dsptrs_, dspcon_);
impl_packed_indefinite_complex!(c32, f32, csptrf_, cspcon_, chptrf_, chptrs_, chpcon_);
impl_packed_indefinite_complex!(c64, f64, zsptrf_, zspcon_, zhptrf_, zhptrs_, zhpcon_);

fn factorize<T: PackedIndefinite>(
    routine: &'static str,
    hermitian: bool,
    uplo: Uplo,
    n: i64,
    ap: &mut [T],
    ipiv: &mut [i64],
) -> Result<i64> {
    let [n_] = narrow_all([("n", n)])?;
    check_len("ap", ap.len(), packed_len(n))?;
    check_len("ipiv", ipiv.len(), vector_len(n))?;

    let mut pivots = NativeInts::zeroed(vector_len(n));
    let info = unsafe {
        if hermitian {
            T::hptrf_call(uplo.as_c_char(), n_, ap, &mut pivots)
        } else {
            T::sptrf_call(uplo.as_c_char(), n_, ap, &mut pivots)
        }
    };
    let info = check_info(routine, info)?;
    pivots.copy_out(ipiv, vector_len(n));
    Ok(info)
}

#[allow(clippy::too_many_arguments)]
fn condition<T: PackedIndefinite>(
    routine: &'static str,
    hermitian: bool,
    uplo: Uplo,
    n: i64,
    ap: &[T],
    ipiv: &[i64],
    anorm: T::Real,
    rcond: &mut T::Real,
) -> Result<i64> {
    let [n_] = narrow_all([("n", n)])?;
    check_len("ap", ap.len(), packed_len(n))?;
    check_len("ipiv", ipiv.len(), vector_len(n))?;
    let pivots = NativeInts::copy_in("ipiv", &ipiv[..vector_len(n)])?;

    let info = if hermitian {
        let mut ws = Workspace::<T>::with_minimum(T::hpcon_workspace(vector_len(n)));
        unsafe { T::hpcon_call(uplo.as_c_char(), n_, ap, &pivots, anorm, rcond, &mut ws) }
    } else {
        let mut ws = Workspace::<T>::with_minimum(T::spcon_workspace(vector_len(n)));
        unsafe { T::spcon_call(uplo.as_c_char(), n_, ap, &pivots, anorm, rcond, &mut ws) }
    };
    check_info(routine, info)
}

/// Symmetric indefinite factorization `A = U D U^T` or `A = L D L^T` in packed storage.
///
/// For complex types the matrix is complex symmetric (not Hermitian). On return `ipiv`
/// holds the 1-based interchanges; a negative pair marks a 2-by-2 diagonal block.
///
/// `Ok(i > 0)`: `D(i,i)` is exactly zero, so `D` is singular.
pub fn sptrf<T: PackedIndefinite>(uplo: Uplo, n: i64, ap: &mut [T], ipiv: &mut [i64]) -> Result<i64> {
    factorize("sptrf", false, uplo, n, ap, ipiv)
}

/// Reciprocal condition estimate from an [`sptrf`] factorization.
pub fn spcon<T: PackedIndefinite>(
    uplo: Uplo,
    n: i64,
    ap: &[T],
    ipiv: &[i64],
    anorm: T::Real,
    rcond: &mut T::Real,
) -> Result<i64> {
    condition("spcon", false, uplo, n, ap, ipiv, anorm, rcond)
}

/// Hermitian indefinite factorization `A = U D U^H` or `A = L D L^H` in packed storage.
///
/// Symmetric for real types. Pivots as in [`sptrf`].
pub fn hptrf<T: PackedIndefinite>(uplo: Uplo, n: i64, ap: &mut [T], ipiv: &mut [i64]) -> Result<i64> {
    factorize("hptrf", true, uplo, n, ap, ipiv)
}

/// Solves `A X = B` with the factorization and pivots from [`hptrf`].
#[allow(clippy::too_many_arguments)]
pub fn hptrs<T: PackedIndefinite>(
    uplo: Uplo,
    n: i64,
    nrhs: i64,
    ap: &[T],
    ipiv: &[i64],
    b: &mut [T],
    ldb: i64,
) -> Result<i64> {
    let [n_, nrhs_, ldb_] = narrow_all([("n", n), ("nrhs", nrhs), ("ldb", ldb)])?;
    check_len("ap", ap.len(), packed_len(n))?;
    check_len("ipiv", ipiv.len(), vector_len(n))?;
    check_len("b", b.len(), matrix_len(n, nrhs, ldb))?;
    let pivots = NativeInts::copy_in("ipiv", &ipiv[..vector_len(n)])?;

    let info = unsafe { T::hptrs_call(uplo.as_c_char(), n_, nrhs_, ap, &pivots, b, ldb_) };
    check_info("hptrs", info)
}

/// Reciprocal condition estimate from an [`hptrf`] factorization.
pub fn hpcon<T: PackedIndefinite>(
    uplo: Uplo,
    n: i64,
    ap: &[T],
    ipiv: &[i64],
    anorm: T::Real,
    rcond: &mut T::Real,
) -> Result<i64> {
    condition("hpcon", true, uplo, n, ap, ipiv, anorm, rcond)
}
