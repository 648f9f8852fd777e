//! Minimum-norm least-squares solutions through the SVD.

use crate::error::Result;
use crate::ffi;
use crate::marshal::{check_len, matrix_len, narrow_all, vector_len, LapackInt};
use crate::scalar::{c32, c64, Scalar};
use crate::workspace::{run_with_queried_workspace, Workspace, WorkspaceMin};

/// Native call sites for `gelss` and `gelsd`.
pub trait LeastSquares: Scalar {
    /// Documented minimum workspace of `gelss` for an `m`-by-`n` system with `nrhs`
    /// right-hand sides.
    fn gelss_workspace(m: usize, n: usize, nrhs: usize) -> WorkspaceMin;

    /// Documented minimum workspace of `gelsd`.
    fn gelsd_workspace(m: usize, n: usize, nrhs: usize) -> WorkspaceMin;

    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn gelss_call(
        m: LapackInt,
        n: LapackInt,
        nrhs: LapackInt,
        a: &mut [Self],
        lda: LapackInt,
        b: &mut [Self],
        ldb: LapackInt,
        s: &mut [Self::Real],
        rcond: Self::Real,
        rank: &mut LapackInt,
        ws: &mut Workspace<Self>,
        lwork: LapackInt,
    ) -> LapackInt;

    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn gelsd_call(
        m: LapackInt,
        n: LapackInt,
        nrhs: LapackInt,
        a: &mut [Self],
        lda: LapackInt,
        b: &mut [Self],
        ldb: LapackInt,
        s: &mut [Self::Real],
        rcond: Self::Real,
        rank: &mut LapackInt,
        ws: &mut Workspace<Self>,
        lwork: LapackInt,
    ) -> LapackInt;
}

macro_rules! impl_least_squares_real {
    ($t:ty, $gelss:ident, $gelsd:ident) => {
        impl LeastSquares for $t {
            fn gelss_workspace(m: usize, n: usize, nrhs: usize) -> WorkspaceMin {
                let mn = m.min(n);
                let work = 3 * mn + (2 * mn).max(m.max(n)).max(nrhs);
                WorkspaceMin::work(work.max(1))
            }

            fn gelsd_workspace(m: usize, n: usize, nrhs: usize) -> WorkspaceMin {
                let mn = m.min(n);
                let nlvl = gelsd_levels(mn);
                let work = 12 * mn
                    + 2 * mn * SMLSIZ
                    + 8 * mn * nlvl
                    + mn * nrhs
                    + (SMLSIZ + 1) * (SMLSIZ + 1);
                WorkspaceMin::work(work.max(1)).with_iwork(gelsd_iwork(mn, nlvl))
            }

            unsafe fn gelss_call(
                m: LapackInt,
                n: LapackInt,
                nrhs: LapackInt,
                a: &mut [Self],
                lda: LapackInt,
                b: &mut [Self],
                ldb: LapackInt,
                s: &mut [Self],
                rcond: Self,
                rank: &mut LapackInt,
                ws: &mut Workspace<Self>,
                lwork: LapackInt,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$gelss(
                    &m,
                    &n,
                    &nrhs,
                    a.as_mut_ptr(),
                    &lda,
                    b.as_mut_ptr(),
                    &ldb,
                    s.as_mut_ptr(),
                    &rcond,
                    rank,
                    ws.work.as_mut_ptr(),
                    &lwork,
                    &mut info,
                );
                info
            }

            unsafe fn gelsd_call(
                m: LapackInt,
                n: LapackInt,
                nrhs: LapackInt,
                a: &mut [Self],
                lda: LapackInt,
                b: &mut [Self],
                ldb: LapackInt,
                s: &mut [Self],
                rcond: Self,
                rank: &mut LapackInt,
                ws: &mut Workspace<Self>,
                lwork: LapackInt,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$gelsd(
                    &m,
                    &n,
                    &nrhs,
                    a.as_mut_ptr(),
                    &lda,
                    b.as_mut_ptr(),
                    &ldb,
                    s.as_mut_ptr(),
                    &rcond,
                    rank,
                    ws.work.as_mut_ptr(),
                    &lwork,
                    ws.iwork.as_mut_ptr(),
                    &mut info,
                );
                info
            }
        }
    };
}

macro_rules! impl_least_squares_complex {
    ($t:ty, $r:ty, $gelss:ident, $gelsd:ident) => {
        impl LeastSquares for $t {
            fn gelss_workspace(m: usize, n: usize, nrhs: usize) -> WorkspaceMin {
                let mn = m.min(n);
                let work = 2 * mn + m.max(n).max(nrhs);
                WorkspaceMin::work(work.max(1)).with_rwork(5 * mn)
            }

            fn gelsd_workspace(m: usize, n: usize, nrhs: usize) -> WorkspaceMin {
                let mn = m.min(n);
                let nlvl = gelsd_levels(mn);
                let rwork = 10 * mn
                    + 2 * mn * SMLSIZ
                    + 8 * mn * nlvl
                    + 3 * SMLSIZ * nrhs
                    + ((SMLSIZ + 1) * (SMLSIZ + 1)).max(mn * (1 + nrhs) + 2 * nrhs);
                WorkspaceMin::work((2 * mn + mn * nrhs).max(1))
                    .with_rwork(rwork)
                    .with_iwork(gelsd_iwork(mn, nlvl))
            }

            unsafe fn gelss_call(
                m: LapackInt,
                n: LapackInt,
                nrhs: LapackInt,
                a: &mut [Self],
                lda: LapackInt,
                b: &mut [Self],
                ldb: LapackInt,
                s: &mut [$r],
                rcond: $r,
                rank: &mut LapackInt,
                ws: &mut Workspace<Self>,
                lwork: LapackInt,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$gelss(
                    &m,
                    &n,
                    &nrhs,
                    a.as_mut_ptr(),
                    &lda,
                    b.as_mut_ptr(),
                    &ldb,
                    s.as_mut_ptr(),
                    &rcond,
                    rank,
                    ws.work.as_mut_ptr(),
                    &lwork,
                    ws.rwork.as_mut_ptr(),
                    &mut info,
                );
                info
            }

            unsafe fn gelsd_call(
                m: LapackInt,
                n: LapackInt,
                nrhs: LapackInt,
                a: &mut [Self],
                lda: LapackInt,
                b: &mut [Self],
                ldb: LapackInt,
                s: &mut [$r],
                rcond: $r,
                rank: &mut LapackInt,
                ws: &mut Workspace<Self>,
                lwork: LapackInt,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$gelsd(
                    &m,
                    &n,
                    &nrhs,
                    a.as_mut_ptr(),
                    &lda,
                    b.as_mut_ptr(),
                    &ldb,
                    s.as_mut_ptr(),
                    &rcond,
                    rank,
                    ws.work.as_mut_ptr(),
                    &lwork,
                    ws.rwork.as_mut_ptr(),
                    ws.iwork.as_mut_ptr(),
                    &mut info,
                );
                info
            }
        }
    };
}

/// Largest subproblem `gelsd` solves directly (`ilaenv` ispec 9 in Reference LAPACK).
const SMLSIZ: usize = 25;

/// Depth of the divide-and-conquer tree: `max(0, int(log2(mn / (SMLSIZ + 1))) + 1)`.
fn gelsd_levels(min_mn: usize) -> usize {
    if min_mn == 0 {
        return 0;
    }
    let depth = (min_mn as f64 / (SMLSIZ + 1) as f64).log2().trunc() as i64 + 1;
    depth.max(0) as usize
}

fn gelsd_iwork(min_mn: usize, nlvl: usize) -> usize {
    (3 * min_mn * nlvl + 11 * min_mn).max(1)
}

impl_least_squares_real!(f32, sgelss_, sgelsd_);
impl_least_squares_real!(f64, dgelss_, dgelsd_);
impl_least_squares_complex!(c32, f32, cgelss_, cgelsd_);
impl_least_squares_complex!(c64, f64, zgelss_, zgelsd_);

/// Shared argument checks; returns the narrowed `[m, n, nrhs, lda, ldb]` and `min(m, n)`.
#[allow(clippy::too_many_arguments)]
fn check_args<T: Scalar>(
    m: i64,
    n: i64,
    nrhs: i64,
    a: &[T],
    lda: i64,
    b: &[T],
    ldb: i64,
    s: &[T::Real],
) -> Result<([LapackInt; 5], usize)> {
    let dims = narrow_all([("m", m), ("n", n), ("nrhs", nrhs), ("lda", lda), ("ldb", ldb)])?;
    check_len("a", a.len(), matrix_len(m, n, lda))?;
    check_len("b", b.len(), matrix_len(m.max(n), nrhs, ldb))?;
    let min_mn = vector_len(m.min(n));
    check_len("s", s.len(), min_mn)?;
    Ok((dims, min_mn))
}

/// Minimum-norm solution of `min ‖b - A x‖₂` for a possibly rank-deficient `A`, using
/// the SVD.
///
/// `b` is `ldb`-by-`nrhs` with `ldb >= max(m, n)`; on return its first `n` rows hold
/// `x`. Singular values go to `s` in decreasing order. Singular values `s[i] <= rcond *
/// s[0]` are treated as zero; a negative `rcond` means machine precision. The effective
/// rank goes to `rank`.
///
/// `Ok(i > 0)`: `i` off-diagonal elements of an intermediate bidiagonal form did not
/// converge.
#[allow(clippy::too_many_arguments)]
pub fn gelss<T: LeastSquares>(
    m: i64,
    n: i64,
    nrhs: i64,
    a: &mut [T],
    lda: i64,
    b: &mut [T],
    ldb: i64,
    s: &mut [T::Real],
    rcond: T::Real,
    rank: &mut i64,
) -> Result<i64> {
    let ([m_, n_, nrhs_, lda_, ldb_], _) = check_args(m, n, nrhs, a, lda, b, ldb, s)?;
    let minimum = T::gelss_workspace(vector_len(m), vector_len(n), vector_len(nrhs));

    let mut native_rank: LapackInt = 0;
    let info = run_with_queried_workspace::<T, _>("gelss", minimum, |ws, lwork| unsafe {
        T::gelss_call(m_, n_, nrhs_, a, lda_, b, ldb_, s, rcond, &mut native_rank, ws, lwork)
    })?;
    *rank = i64::from(native_rank);
    Ok(info)
}

/// As [`gelss`], using the divide-and-conquer SVD.
///
/// The workspace query also reports the integer (and, for complex types, real)
/// workspace sizes, and all three buffers are allocated from it.
#[allow(clippy::too_many_arguments)]
pub fn gelsd<T: LeastSquares>(
    m: i64,
    n: i64,
    nrhs: i64,
    a: &mut [T],
    lda: i64,
    b: &mut [T],
    ldb: i64,
    s: &mut [T::Real],
    rcond: T::Real,
    rank: &mut i64,
) -> Result<i64> {
    let ([m_, n_, nrhs_, lda_, ldb_], _) = check_args(m, n, nrhs, a, lda, b, ldb, s)?;
    let minimum = T::gelsd_workspace(vector_len(m), vector_len(n), vector_len(nrhs));

    let mut native_rank: LapackInt = 0;
    let info = run_with_queried_workspace::<T, _>("gelsd", minimum, |ws, lwork| unsafe {
        T::gelsd_call(m_, n_, nrhs_, a, lda_, b, ldb_, s, rcond, &mut native_rank, ws, lwork)
    })?;
    *rank = i64::from(native_rank);
    Ok(info)
}
