//! QR, LQ and generalized RQ factorizations, and generation of the LQ factor `Q`.

use crate::error::Result;
use crate::ffi;
use crate::marshal::{check_len, matrix_len, narrow_all, vector_len, LapackInt};
use crate::scalar::{c32, c64, Scalar};
use crate::workspace::{run_with_queried_workspace, Workspace, WorkspaceMin};

/// Native call sites for the Householder factorizations.
pub trait Orthogonal: Scalar {
    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn geqrf_call(
        m: LapackInt,
        n: LapackInt,
        a: &mut [Self],
        lda: LapackInt,
        tau: &mut [Self],
        ws: &mut Workspace<Self>,
        lwork: LapackInt,
    ) -> LapackInt;

    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn gelqf_call(
        m: LapackInt,
        n: LapackInt,
        a: &mut [Self],
        lda: LapackInt,
        tau: &mut [Self],
        ws: &mut Workspace<Self>,
        lwork: LapackInt,
    ) -> LapackInt;

    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn ggrqf_call(
        m: LapackInt,
        p: LapackInt,
        n: LapackInt,
        a: &mut [Self],
        lda: LapackInt,
        taua: &mut [Self],
        b: &mut [Self],
        ldb: LapackInt,
        taub: &mut [Self],
        ws: &mut Workspace<Self>,
        lwork: LapackInt,
    ) -> LapackInt;

    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn unglq_call(
        m: LapackInt,
        n: LapackInt,
        k: LapackInt,
        a: &mut [Self],
        lda: LapackInt,
        tau: &[Self],
        ws: &mut Workspace<Self>,
        lwork: LapackInt,
    ) -> LapackInt;
}

macro_rules! impl_orthogonal {
    ($t:ty, $geqrf:ident, $gelqf:ident, $ggrqf:ident, $unglq:ident) => {
        impl Orthogonal for $t {
            unsafe fn geqrf_call(
                m: LapackInt,
                n: LapackInt,
                a: &mut [Self],
                lda: LapackInt,
                tau: &mut [Self],
                ws: &mut Workspace<Self>,
                lwork: LapackInt,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$geqrf(&m, &n, a.as_mut_ptr(), &lda, tau.as_mut_ptr(), ws.work.as_mut_ptr(), &lwork, &mut info);
                info
            }

            unsafe fn gelqf_call(
                m: LapackInt,
                n: LapackInt,
                a: &mut [Self],
                lda: LapackInt,
                tau: &mut [Self],
                ws: &mut Workspace<Self>,
                lwork: LapackInt,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$gelqf(&m, &n, a.as_mut_ptr(), &lda, tau.as_mut_ptr(), ws.work.as_mut_ptr(), &lwork, &mut info);
                info
            }

            unsafe fn ggrqf_call(
                m: LapackInt,
                p: LapackInt,
                n: LapackInt,
                a: &mut [Self],
                lda: LapackInt,
                taua: &mut [Self],
                b: &mut [Self],
                ldb: LapackInt,
                taub: &mut [Self],
                ws: &mut Workspace<Self>,
                lwork: LapackInt,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$ggrqf(
                    &m,
                    &p,
                    &n,
                    a.as_mut_ptr(),
                    &lda,
                    taua.as_mut_ptr(),
                    b.as_mut_ptr(),
                    &ldb,
                    taub.as_mut_ptr(),
                    ws.work.as_mut_ptr(),
                    &lwork,
                    &mut info,
                );
                info
            }

            unsafe fn unglq_call(
                m: LapackInt,
                n: LapackInt,
                k: LapackInt,
                a: &mut [Self],
                lda: LapackInt,
                tau: &[Self],
                ws: &mut Workspace<Self>,
                lwork: LapackInt,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$unglq(
                    &m,
                    &n,
                    &k,
                    a.as_mut_ptr(),
                    &lda,
                    tau.as_ptr(),
                    ws.work.as_mut_ptr(),
                    &lwork,
                    &mut info,
                );
                info
            }
        }
    };
}

impl_orthogonal!(f32, sgeqrf_, sgelqf_, sggrqf_, sorglq_);
impl_orthogonal!(f64, dgeqrf_, dgelqf_, dggrqf_, dorglq_);
impl_orthogonal!(c32, cgeqrf_, cgelqf_, cggrqf_, cunglq_);
impl_orthogonal!(c64, zgeqrf_, zgelqf_, zggrqf_, zunglq_);

/// QR factorization `A = Q R`.
///
/// On return the upper trapezoid of `a` holds `R` and the part below the diagonal,
/// together with `tau` (length `min(m, n)`), represents `Q` as a product of elementary
/// reflectors.
pub fn geqrf<T: Orthogonal>(m: i64, n: i64, a: &mut [T], lda: i64, tau: &mut [T]) -> Result<i64> {
    let [m_, n_, lda_] = narrow_all([("m", m), ("n", n), ("lda", lda)])?;
    check_len("a", a.len(), matrix_len(m, n, lda))?;
    check_len("tau", tau.len(), vector_len(m.min(n)))?;

    let minimum = WorkspaceMin::work(vector_len(n));
    run_with_queried_workspace::<T, _>("geqrf", minimum, |ws, lwork| unsafe {
        T::geqrf_call(m_, n_, a, lda_, tau, ws, lwork)
    })
}

/// LQ factorization `A = L Q`; the lower trapezoid of `a` holds `L`.
pub fn gelqf<T: Orthogonal>(m: i64, n: i64, a: &mut [T], lda: i64, tau: &mut [T]) -> Result<i64> {
    let [m_, n_, lda_] = narrow_all([("m", m), ("n", n), ("lda", lda)])?;
    check_len("a", a.len(), matrix_len(m, n, lda))?;
    check_len("tau", tau.len(), vector_len(m.min(n)))?;

    let minimum = WorkspaceMin::work(vector_len(m));
    run_with_queried_workspace::<T, _>("gelqf", minimum, |ws, lwork| unsafe {
        T::gelqf_call(m_, n_, a, lda_, tau, ws, lwork)
    })
}

/// Generalized RQ factorization of the `m`-by-`n` matrix `A` and the `p`-by-`n`
/// matrix `B`: `A = R Q` and `B = Z T Q`.
///
/// `taua` has length `min(m, n)` and `taub` length `min(p, n)`.
#[allow(clippy::too_many_arguments)]
pub fn ggrqf<T: Orthogonal>(
    m: i64,
    p: i64,
    n: i64,
    a: &mut [T],
    lda: i64,
    taua: &mut [T],
    b: &mut [T],
    ldb: i64,
    taub: &mut [T],
) -> Result<i64> {
    let [m_, p_, n_, lda_, ldb_] = narrow_all([("m", m), ("p", p), ("n", n), ("lda", lda), ("ldb", ldb)])?;
    check_len("a", a.len(), matrix_len(m, n, lda))?;
    check_len("taua", taua.len(), vector_len(m.min(n)))?;
    check_len("b", b.len(), matrix_len(p, n, ldb))?;
    check_len("taub", taub.len(), vector_len(p.min(n)))?;

    let minimum = WorkspaceMin::work(vector_len(m.max(p).max(n)));
    run_with_queried_workspace::<T, _>("ggrqf", minimum, |ws, lwork| unsafe {
        T::ggrqf_call(m_, p_, n_, a, lda_, taua, b, ldb_, taub, ws, lwork)
    })
}

/// Generates the `m`-by-`n` matrix `Q` with orthonormal rows from the first `k`
/// reflectors returned by [`gelqf`] (`orglq` for real types).
///
/// Requires `n >= m >= k`. `a` holds the reflectors on entry and `Q` on return.
pub fn unglq<T: Orthogonal>(m: i64, n: i64, k: i64, a: &mut [T], lda: i64, tau: &[T]) -> Result<i64> {
    let [m_, n_, k_, lda_] = narrow_all([("m", m), ("n", n), ("k", k), ("lda", lda)])?;
    check_len("a", a.len(), matrix_len(m, n, lda))?;
    check_len("tau", tau.len(), vector_len(k))?;

    let minimum = WorkspaceMin::work(vector_len(m));
    run_with_queried_workspace::<T, _>("unglq", minimum, |ws, lwork| unsafe {
        T::unglq_call(m_, n_, k_, a, lda_, tau, ws, lwork)
    })
}
