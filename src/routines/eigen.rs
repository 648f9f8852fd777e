//! Eigenvalue drivers: generalized Hermitian-definite (packed and banded) and
//! general nonsymmetric.

use libc::c_char;
use num_complex::Complex;

use crate::error::{check_info, Result};
use crate::ffi;
use crate::flags::{Job, Range, Uplo};
use crate::marshal::{check_len, matrix_len, narrow_all, packed_len, vector_len, LapackInt, NativeInts};
use crate::scalar::{c32, c64, RealScalar, Scalar};
use crate::workspace::{run_with_queried_workspace, Workspace, WorkspaceMin, QUERY};

/// Result of an expert eigen driver that may select a subset of eigenvalues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EigenCount {
    /// Number of eigenvalues found (`M` in LAPACK)
    pub found: i64,
    /// Native status; positive values are numerical non-success
    pub info: i64,
}

/// Band storage arguments of `hbgvx`, already narrowed.
#[doc(hidden)]
pub struct BandPair<'a, T: Scalar> {
    pub ka: LapackInt,
    pub kb: LapackInt,
    pub ab: &'a mut [T],
    pub ldab: LapackInt,
    pub bb: &'a mut [T],
    pub ldbb: LapackInt,
    pub q: &'a mut [T],
    pub ldq: LapackInt,
}

/// Native call sites for `spgv`/`hpgv` and `sbgvx`/`hbgvx`.
pub trait GeneralizedEigen: Scalar {
    #[doc(hidden)]
    fn hpgv_workspace(n: usize) -> WorkspaceMin;

    #[doc(hidden)]
    fn hbgvx_workspace(n: usize) -> WorkspaceMin;

    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn hpgv_call(
        itype: LapackInt,
        jobz: c_char,
        uplo: c_char,
        n: LapackInt,
        ap: &mut [Self],
        bp: &mut [Self],
        w: &mut [Self::Real],
        z: &mut [Self],
        ldz: LapackInt,
        ws: &mut Workspace<Self>,
    ) -> LapackInt;

    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn hbgvx_call(
        jobz: c_char,
        range: c_char,
        uplo: c_char,
        n: LapackInt,
        band: BandPair<'_, Self>,
        vl: Self::Real,
        vu: Self::Real,
        il: LapackInt,
        iu: LapackInt,
        abstol: Self::Real,
        m: &mut LapackInt,
        w: &mut [Self::Real],
        z: &mut [Self],
        ldz: LapackInt,
        ws: &mut Workspace<Self>,
        ifail: &mut NativeInts,
    ) -> LapackInt;
}

macro_rules! impl_generalized_eigen_real {
    ($t:ty, $spgv:ident, $sbgvx:ident) => {
        impl GeneralizedEigen for $t {
            fn hpgv_workspace(n: usize) -> WorkspaceMin {
                WorkspaceMin::work(n.saturating_mul(3))
            }

            fn hbgvx_workspace(n: usize) -> WorkspaceMin {
                WorkspaceMin::work(n.saturating_mul(7)).with_iwork(n.saturating_mul(5))
            }

            unsafe fn hpgv_call(
                itype: LapackInt,
                jobz: c_char,
                uplo: c_char,
                n: LapackInt,
                ap: &mut [Self],
                bp: &mut [Self],
                w: &mut [Self],
                z: &mut [Self],
                ldz: LapackInt,
                ws: &mut Workspace<Self>,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$spgv(
                    &itype,
                    &jobz,
                    &uplo,
                    &n,
                    ap.as_mut_ptr(),
                    bp.as_mut_ptr(),
                    w.as_mut_ptr(),
                    z.as_mut_ptr(),
                    &ldz,
                    ws.work.as_mut_ptr(),
                    &mut info,
                );
                info
            }

            unsafe fn hbgvx_call(
                jobz: c_char,
                range: c_char,
                uplo: c_char,
                n: LapackInt,
                band: BandPair<'_, Self>,
                vl: Self,
                vu: Self,
                il: LapackInt,
                iu: LapackInt,
                abstol: Self,
                m: &mut LapackInt,
                w: &mut [Self],
                z: &mut [Self],
                ldz: LapackInt,
                ws: &mut Workspace<Self>,
                ifail: &mut NativeInts,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$sbgvx(
                    &jobz,
                    &range,
                    &uplo,
                    &n,
                    &band.ka,
                    &band.kb,
                    band.ab.as_mut_ptr(),
                    &band.ldab,
                    band.bb.as_mut_ptr(),
                    &band.ldbb,
                    band.q.as_mut_ptr(),
                    &band.ldq,
                    &vl,
                    &vu,
                    &il,
                    &iu,
                    &abstol,
                    m,
                    w.as_mut_ptr(),
                    z.as_mut_ptr(),
                    &ldz,
                    ws.work.as_mut_ptr(),
                    ws.iwork.as_mut_ptr(),
                    ifail.as_mut_ptr(),
                    &mut info,
                );
                info
            }
        }
    };
}

macro_rules! impl_generalized_eigen_complex {
    ($t:ty, $r:ty, $hpgv:ident, $hbgvx:ident) => {
        impl GeneralizedEigen for $t {
            fn hpgv_workspace(n: usize) -> WorkspaceMin {
                let work = n.saturating_mul(2).saturating_sub(1).max(1);
                let rwork = n.saturating_mul(3).saturating_sub(2).max(1);
                WorkspaceMin::work(work).with_rwork(rwork)
            }

            fn hbgvx_workspace(n: usize) -> WorkspaceMin {
                WorkspaceMin::work(n)
                    .with_rwork(n.saturating_mul(7))
                    .with_iwork(n.saturating_mul(5))
            }

            unsafe fn hpgv_call(
                itype: LapackInt,
                jobz: c_char,
                uplo: c_char,
                n: LapackInt,
                ap: &mut [Self],
                bp: &mut [Self],
                w: &mut [$r],
                z: &mut [Self],
                ldz: LapackInt,
                ws: &mut Workspace<Self>,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$hpgv(
                    &itype,
                    &jobz,
                    &uplo,
                    &n,
                    ap.as_mut_ptr(),
                    bp.as_mut_ptr(),
                    w.as_mut_ptr(),
                    z.as_mut_ptr(),
                    &ldz,
                    ws.work.as_mut_ptr(),
                    ws.rwork.as_mut_ptr(),
                    &mut info,
                );
                info
            }

            unsafe fn hbgvx_call(
                jobz: c_char,
                range: c_char,
                uplo: c_char,
                n: LapackInt,
                band: BandPair<'_, Self>,
                vl: $r,
                vu: $r,
                il: LapackInt,
                iu: LapackInt,
                abstol: $r,
                m: &mut LapackInt,
                w: &mut [$r],
                z: &mut [Self],
                ldz: LapackInt,
                ws: &mut Workspace<Self>,
                ifail: &mut NativeInts,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$hbgvx(
                    &jobz,
                    &range,
                    &uplo,
                    &n,
                    &band.ka,
                    &band.kb,
                    band.ab.as_mut_ptr(),
                    &band.ldab,
                    band.bb.as_mut_ptr(),
                    &band.ldbb,
                    band.q.as_mut_ptr(),
                    &band.ldq,
                    &vl,
                    &vu,
                    &il,
                    &iu,
                    &abstol,
                    m,
                    w.as_mut_ptr(),
                    z.as_mut_ptr(),
                    &ldz,
                    ws.work.as_mut_ptr(),
                    ws.rwork.as_mut_ptr(),
                    ws.iwork.as_mut_ptr(),
                    ifail.as_mut_ptr(),
                    &mut info,
                );
                info
            }
        }
    };
}

impl_generalized_eigen_real!(f32, sspgv_, ssbgvx_);
impl_generalized_eigen_real!(f64, dspgv_, dsbgvx_);
impl_generalized_eigen_complex!(c32, f32, chpgv_, chbgvx_);
impl_generalized_eigen_complex!(c64, f64, zhpgv_, zhbgvx_);

fn vectors_len(jobz: Job, n: i64, ld: i64) -> usize {
    if jobz == Job::NoVec {
        0
    } else {
        matrix_len(n, n, ld)
    }
}

/// Generalized Hermitian-definite eigenproblem in packed storage.
///
/// `itype` selects the problem: 1 is `A x = λ B x`, 2 is `A B x = λ x`, 3 is
/// `B A x = λ x`. `B` must be positive definite. Eigenvalues go to `w` in ascending
/// order; with `Job::Vec` the `B`-orthonormal eigenvectors go to `z`.
///
/// `Ok(i)` with `0 < i <= n`: the eigensolver failed to converge. `Ok(n + i)`: the
/// leading minor of order `i` of `B` is not positive definite.
#[allow(clippy::too_many_arguments)]
pub fn hpgv<T: GeneralizedEigen>(
    itype: i64,
    jobz: Job,
    uplo: Uplo,
    n: i64,
    ap: &mut [T],
    bp: &mut [T],
    w: &mut [T::Real],
    z: &mut [T],
    ldz: i64,
) -> Result<i64> {
    let [itype_, n_, ldz_] = narrow_all([("itype", itype), ("n", n), ("ldz", ldz)])?;
    check_len("ap", ap.len(), packed_len(n))?;
    check_len("bp", bp.len(), packed_len(n))?;
    check_len("w", w.len(), vector_len(n))?;
    check_len("z", z.len(), vectors_len(jobz, n, ldz))?;

    let mut ws = Workspace::<T>::with_minimum(T::hpgv_workspace(vector_len(n)));
    let info = unsafe {
        T::hpgv_call(itype_, jobz.as_c_char(), uplo.as_c_char(), n_, ap, bp, w, z, ldz_, &mut ws)
    };
    check_info("hpgv", info)
}

/// Selected eigenvalues (and optionally eigenvectors) of the banded generalized
/// Hermitian-definite problem `A x = λ B x`.
///
/// `A` has `ka` and `B` has `kb` super- (or sub-) diagonals, stored as in
/// [`pbsv`](crate::pbsv). With `Job::Vec`, `q` (`ldq`-by-`n`) receives the matrix used
/// to reduce the problem to standard form and `z` the eigenvectors. `ifail` receives
/// the indices of eigenvectors that failed to converge.
///
/// `range` picks all eigenvalues, those in `(vl, vu]`, or the `il`-th through `iu`-th.
/// `abstol` is the absolute tolerance of the bisection; zero or negative means
/// `eps * |T|`.
#[allow(clippy::too_many_arguments)]
pub fn hbgvx<T: GeneralizedEigen>(
    jobz: Job,
    range: Range,
    uplo: Uplo,
    n: i64,
    ka: i64,
    kb: i64,
    ab: &mut [T],
    ldab: i64,
    bb: &mut [T],
    ldbb: i64,
    q: &mut [T],
    ldq: i64,
    vl: T::Real,
    vu: T::Real,
    il: i64,
    iu: i64,
    abstol: T::Real,
    w: &mut [T::Real],
    z: &mut [T],
    ldz: i64,
    ifail: &mut [i64],
) -> Result<EigenCount> {
    let [n_, ka_, kb_, ldab_, ldbb_, ldq_, il_, iu_, ldz_] = narrow_all([
        ("n", n),
        ("ka", ka),
        ("kb", kb),
        ("ldab", ldab),
        ("ldbb", ldbb),
        ("ldq", ldq),
        ("il", il),
        ("iu", iu),
        ("ldz", ldz),
    ])?;
    check_len("ab", ab.len(), matrix_len(ka.saturating_add(1), n, ldab))?;
    check_len("bb", bb.len(), matrix_len(kb.saturating_add(1), n, ldbb))?;
    check_len("q", q.len(), vectors_len(jobz, n, ldq))?;
    check_len("w", w.len(), vector_len(n))?;
    check_len("z", z.len(), vectors_len(jobz, n, ldz))?;
    let ifail_len = if jobz == Job::NoVec { 0 } else { vector_len(n) };
    check_len("ifail", ifail.len(), ifail_len)?;

    let band = BandPair {
        ka: ka_,
        kb: kb_,
        ab,
        ldab: ldab_,
        bb,
        ldbb: ldbb_,
        q,
        ldq: ldq_,
    };
    let mut ws = Workspace::<T>::with_minimum(T::hbgvx_workspace(vector_len(n)));
    let mut native_ifail = NativeInts::zeroed(vector_len(n));
    let mut m: LapackInt = 0;
    let info = unsafe {
        T::hbgvx_call(
            jobz.as_c_char(),
            range.as_c_char(),
            uplo.as_c_char(),
            n_,
            band,
            vl,
            vu,
            il_,
            iu_,
            abstol,
            &mut m,
            w,
            z,
            ldz_,
            &mut ws,
            &mut native_ifail,
        )
    };
    let info = check_info("hbgvx", info)?;
    native_ifail.copy_out(ifail, ifail_len);
    Ok(EigenCount {
        found: i64::from(m),
        info,
    })
}

/// [`hbgvx`] under its real symmetric name.
#[allow(clippy::too_many_arguments)]
pub fn sbgvx<T: GeneralizedEigen + RealScalar>(
    jobz: Job,
    range: Range,
    uplo: Uplo,
    n: i64,
    ka: i64,
    kb: i64,
    ab: &mut [T],
    ldab: i64,
    bb: &mut [T],
    ldbb: i64,
    q: &mut [T],
    ldq: i64,
    vl: T,
    vu: T,
    il: i64,
    iu: i64,
    abstol: T,
    w: &mut [T],
    z: &mut [T],
    ldz: i64,
    ifail: &mut [i64],
) -> Result<EigenCount> {
    hbgvx(
        jobz, range, uplo, n, ka, kb, ab, ldab, bb, ldbb, q, ldq, vl, vu, il, iu, abstol, w, z, ldz,
        ifail,
    )
}

/// Native call site for `geev`.
pub trait Geev: Scalar {
    #[doc(hidden)]
    fn geev_workspace(n: usize, vectors: bool) -> WorkspaceMin;

    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn geev_call(
        jobvl: c_char,
        jobvr: c_char,
        n: LapackInt,
        a: &mut [Self],
        lda: LapackInt,
        w: &mut [Complex<Self::Real>],
        vl: &mut [Self],
        ldvl: LapackInt,
        vr: &mut [Self],
        ldvr: LapackInt,
        ws: &mut Workspace<Self>,
        lwork: LapackInt,
    ) -> LapackInt;
}

macro_rules! impl_geev_real {
    ($t:ty, $geev:ident) => {
        impl Geev for $t {
            fn geev_workspace(n: usize, vectors: bool) -> WorkspaceMin {
                WorkspaceMin::work(n.saturating_mul(if vectors { 4 } else { 3 }))
            }

            unsafe fn geev_call(
                jobvl: c_char,
                jobvr: c_char,
                n: LapackInt,
                a: &mut [Self],
                lda: LapackInt,
                w: &mut [Complex<$t>],
                vl: &mut [Self],
                ldvl: LapackInt,
                vr: &mut [Self],
                ldvr: LapackInt,
                ws: &mut Workspace<Self>,
                lwork: LapackInt,
            ) -> LapackInt {
                let len = w.len().max(1);
                let mut wr = vec![0.0; len];
                let mut wi = vec![0.0; len];
                let mut info = 0;
                ffi::$geev(
                    &jobvl,
                    &jobvr,
                    &n,
                    a.as_mut_ptr(),
                    &lda,
                    wr.as_mut_ptr(),
                    wi.as_mut_ptr(),
                    vl.as_mut_ptr(),
                    &ldvl,
                    vr.as_mut_ptr(),
                    &ldvr,
                    ws.work.as_mut_ptr(),
                    &lwork,
                    &mut info,
                );
                if lwork != QUERY && info >= 0 {
                    for ((dst, &re), &im) in w.iter_mut().zip(&wr).zip(&wi) {
                        *dst = Complex::new(re, im);
                    }
                }
                info
            }
        }
    };
}

macro_rules! impl_geev_complex {
    ($t:ty, $geev:ident) => {
        impl Geev for $t {
            fn geev_workspace(n: usize, _vectors: bool) -> WorkspaceMin {
                WorkspaceMin::work(n.saturating_mul(2)).with_rwork(n.saturating_mul(2))
            }

            unsafe fn geev_call(
                jobvl: c_char,
                jobvr: c_char,
                n: LapackInt,
                a: &mut [Self],
                lda: LapackInt,
                w: &mut [Self],
                vl: &mut [Self],
                ldvl: LapackInt,
                vr: &mut [Self],
                ldvr: LapackInt,
                ws: &mut Workspace<Self>,
                lwork: LapackInt,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$geev(
                    &jobvl,
                    &jobvr,
                    &n,
                    a.as_mut_ptr(),
                    &lda,
                    w.as_mut_ptr(),
                    vl.as_mut_ptr(),
                    &ldvl,
                    vr.as_mut_ptr(),
                    &ldvr,
                    ws.work.as_mut_ptr(),
                    &lwork,
                    ws.rwork.as_mut_ptr(),
                    &mut info,
                );
                info
            }
        }
    };
}

impl_geev_real!(f32, sgeev_);
impl_geev_real!(f64, dgeev_);
impl_geev_complex!(c32, cgeev_);
impl_geev_complex!(c64, zgeev_);

/// Eigenvalues and optionally left/right eigenvectors of a general square matrix.
///
/// `w` is complex for every scalar type. For real types complex-conjugate pairs appear
/// consecutively with the positive imaginary part first, and their eigenvectors are
/// stored the LAPACK way: columns `j` and `j+1` of `vl`/`vr` hold the real and
/// imaginary parts of the vector for `w[j]`. `a` is overwritten.
///
/// `Ok(i > 0)`: the QR algorithm failed; `w[i..]` hold the eigenvalues that converged.
#[allow(clippy::too_many_arguments)]
pub fn geev<T: Geev>(
    jobvl: Job,
    jobvr: Job,
    n: i64,
    a: &mut [T],
    lda: i64,
    w: &mut [Complex<T::Real>],
    vl: &mut [T],
    ldvl: i64,
    vr: &mut [T],
    ldvr: i64,
) -> Result<i64> {
    let [n_, lda_, ldvl_, ldvr_] = narrow_all([("n", n), ("lda", lda), ("ldvl", ldvl), ("ldvr", ldvr)])?;
    check_len("a", a.len(), matrix_len(n, n, lda))?;
    check_len("w", w.len(), vector_len(n))?;
    check_len("vl", vl.len(), vectors_len(jobvl, n, ldvl))?;
    check_len("vr", vr.len(), vectors_len(jobvr, n, ldvr))?;

    let vectors = jobvl != Job::NoVec || jobvr != Job::NoVec;
    let minimum = T::geev_workspace(vector_len(n), vectors);
    run_with_queried_workspace::<T, _>("geev", minimum, |ws, lwork| unsafe {
        T::geev_call(
            jobvl.as_c_char(),
            jobvr.as_c_char(),
            n_,
            a,
            lda_,
            w,
            vl,
            ldvl_,
            vr,
            ldvr_,
            ws,
            lwork,
        )
    })
}
