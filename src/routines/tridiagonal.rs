//! Reduction of a packed Hermitian (symmetric) matrix to real tridiagonal form.

use libc::c_char;

use crate::error::{check_info, Result};
use crate::ffi;
use crate::flags::Uplo;
use crate::marshal::{check_len, narrow_all, packed_len, vector_len, LapackInt};
use crate::scalar::{c32, c64, Scalar};

/// Native call site for `sptrd` / `hptrd`.
pub trait PackedTridiagonal: Scalar {
    #[doc(hidden)]
    unsafe fn hptrd_call(
        uplo: c_char,
        n: LapackInt,
        ap: &mut [Self],
        d: &mut [Self::Real],
        e: &mut [Self::Real],
        tau: &mut [Self],
    ) -> LapackInt;
}

macro_rules! impl_packed_tridiagonal {
    ($t:ty, $r:ty, $hptrd:ident) => {
        impl PackedTridiagonal for $t {
            unsafe fn hptrd_call(
                uplo: c_char,
                n: LapackInt,
                ap: &mut [Self],
                d: &mut [$r],
                e: &mut [$r],
                tau: &mut [Self],
            ) -> LapackInt {
                let mut info = 0;
                ffi::$hptrd(
                    &uplo,
                    &n,
                    ap.as_mut_ptr(),
                    d.as_mut_ptr(),
                    e.as_mut_ptr(),
                    tau.as_mut_ptr(),
                    &mut info,
                );
                info
            }
        }
    };
}

impl_packed_tridiagonal!(f32, f32, ssptrd_);
impl_packed_tridiagonal!(f64, f64, dsptrd_);
impl_packed_tridiagonal!(c32, f32, chptrd_);
impl_packed_tridiagonal!(c64, f64, zhptrd_);

/// Reduces `A` to tridiagonal `T = Q^H A Q` by a unitary (orthogonal) similarity.
///
/// On return `d` (length `n`) holds the diagonal and `e` (length `n-1`) the
/// off-diagonal of `T`. `ap` holds the Householder vectors, and `tau` (length `n-1`)
/// their scalar factors.
pub fn hptrd<T: PackedTridiagonal>(
    uplo: Uplo,
    n: i64,
    ap: &mut [T],
    d: &mut [T::Real],
    e: &mut [T::Real],
    tau: &mut [T],
) -> Result<i64> {
    let [n_] = narrow_all([("n", n)])?;
    check_len("ap", ap.len(), packed_len(n))?;
    check_len("d", d.len(), vector_len(n))?;
    check_len("e", e.len(), vector_len(n - 1))?;
    check_len("tau", tau.len(), vector_len(n - 1))?;

    let info = unsafe { T::hptrd_call(uplo.as_c_char(), n_, ap, d, e, tau) };
    check_info("hptrd", info)
}
