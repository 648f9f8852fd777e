//! One check per routine: generate, run wrapper and reference, score.

use std::time::Instant;

use num_complex::Complex;
use num_traits::{Float, Zero};

use crate::flags::{Job, Norm};
use crate::marshal::{narrow, narrow_all, packed_len, vector_len, LapackInt};
use crate::routines::EigenCount;
use crate::scalar::{RealScalar, Scalar};

use super::compare::{
    abs_error, dense, eigen_residual, eigenvectors, generalized_residual, orthogonality,
    pivot_error, promote_real, rel_error, scalar_error, sort_lexical, unpack_hermitian, C64,
};
use super::generate::{
    leading_dim, make_band_dominant, make_dense_dominant, make_packed_dominant, roundup, Generator,
};
use super::lapacke::Reference;
use super::{Error, Params, Result, Routine};

pub(super) struct Outcome {
    pub info_tst: i64,
    pub info_ref: i64,
    pub error: f64,
    pub okay: bool,
    pub time: f64,
    pub ref_time: f64,
}

enum Policy {
    Exact,
    Below(f64),
}

impl Outcome {
    /// A status mismatch adds 1 to the error.
    fn scored(info_tst: i64, info_ref: LapackInt, error: f64, policy: Policy, time: f64, ref_time: f64) -> Self {
        let info_ref = i64::from(info_ref);
        let error = if info_tst != info_ref { error + 1.0 } else { error };
        let okay = match policy {
            Policy::Exact => error == 0.0,
            Policy::Below(limit) => error < limit,
        };
        Outcome {
            info_tst,
            info_ref,
            error,
            okay,
            time,
            ref_time,
        }
    }
}

fn timed<R>(f: impl FnOnce() -> R) -> (R, f64) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed().as_secs_f64())
}

/// The wrapper's status as the native `info`: an invalid-argument error becomes the
/// negative position LAPACKE reports.
fn status(result: crate::Result<i64>) -> Result<i64> {
    match result {
        Ok(info) => Ok(info),
        Err(crate::Error::InvalidArgument { position, .. }) => Ok(-position),
        Err(err) => Err(err.into()),
    }
}

fn eps<T: Scalar>() -> f64 {
    <T::Real as Float>::epsilon().into()
}

fn real<T: Scalar>(value: f64) -> T::Real {
    T::Real::from_f64(value)
}

fn widen(pivots: &[LapackInt]) -> Vec<i64> {
    pivots.iter().map(|&p| i64::from(p)).collect()
}

fn promote_eigenvalues<R: Into<f64> + Copy>(w: &[Complex<R>]) -> Vec<C64> {
    w.iter().map(|z| Complex::new(z.re.into(), z.im.into())).collect()
}

pub(super) fn run<T: Reference>(p: &Params) -> Result<Outcome> {
    match p.routine {
        Routine::Pbsv => pbsv::<T>(p),
        Routine::Pbtrf => pbtrf::<T>(p),
        Routine::Pbtrs => pbtrs::<T>(p),
        Routine::Ppsv => ppsv::<T>(p),
        Routine::Pptrf => pptrf::<T>(p),
        Routine::Pptri => pptri::<T>(p),
        Routine::Potrf => potrf::<T>(p),
        Routine::Pocon => pocon::<T>(p),
        Routine::Sptrf => packed_factor::<T>(p, false),
        Routine::Spcon => packed_condition::<T>(p, false),
        Routine::Hptrf => packed_factor::<T>(p, true),
        Routine::Hptrs => hptrs::<T>(p),
        Routine::Hpcon => packed_condition::<T>(p, true),
        Routine::Lantp => lantp::<T>(p),
        Routine::Lanhp => lanhp::<T>(p),
        Routine::Lange => lange::<T>(p),
        Routine::Lanhe => lanhe::<T>(p),
        Routine::Hptrd => hptrd::<T>(p),
        Routine::Hpgv => hpgv::<T>(p),
        Routine::Hbgvx => hbgvx::<T>(p),
        Routine::Geev => geev::<T>(p),
        Routine::Gelss => least_squares::<T>(p, false),
        Routine::Gelsd => least_squares::<T>(p, true),
        Routine::Geqrf => householder::<T>(p, false),
        Routine::Gelqf => householder::<T>(p, true),
        Routine::Ggrqf => ggrqf::<T>(p),
        Routine::Unglq => unglq::<T>(p),
        Routine::Lacpy => lacpy::<T>(p),
        Routine::Geequ => geequ::<T>(p),
        Routine::Sbgvx => Err(Error::Unsupported {
            routine: p.routine,
            kind: p.kind,
        }),
    }
}

// ---------------------------------------------------------------------------
// Cholesky family

fn band<T: Scalar>(p: &Params, gen: &mut Generator) -> (Vec<T>, i64) {
    let ldab = roundup(p.kd + 1, p.align);
    let mut ab = gen.vec::<T>(vector_len(ldab * p.n));
    make_band_dominant(p.uplo, vector_len(p.n), vector_len(p.kd), &mut ab, vector_len(ldab));
    (ab, ldab)
}

fn pbsv<T: Reference>(p: &Params) -> Result<Outcome> {
    let mut gen = Generator::new(p.seed);
    let (mut ab_tst, ldab) = band::<T>(p, &mut gen);
    let ldb = leading_dim(p.n, p.align);
    let mut b_tst = gen.vec::<T>(vector_len(ldb * p.nrhs));
    let mut ab_ref = ab_tst.clone();
    let mut b_ref = b_tst.clone();

    let (info_tst, time) = timed(|| crate::pbsv(p.uplo, p.n, p.kd, p.nrhs, &mut ab_tst, ldab, &mut b_tst, ldb));
    let info_tst = status(info_tst)?;

    let [n, kd, nrhs, ldab_, ldb_] =
        narrow_all([("n", p.n), ("kd", p.kd), ("nrhs", p.nrhs), ("ldab", ldab), ("ldb", ldb)])?;
    let (info_ref, ref_time) = timed(|| unsafe {
        T::pbsv(p.uplo.as_c_char(), n, kd, nrhs, &mut ab_ref, ldab_, &mut b_ref, ldb_)
    });

    let error = abs_error(&ab_tst, &ab_ref) + abs_error(&b_tst, &b_ref);
    Ok(Outcome::scored(info_tst, info_ref, error, Policy::Exact, time, ref_time))
}

fn pbtrf<T: Reference>(p: &Params) -> Result<Outcome> {
    let mut gen = Generator::new(p.seed);
    let (mut ab_tst, ldab) = band::<T>(p, &mut gen);
    let mut ab_ref = ab_tst.clone();

    let (info_tst, time) = timed(|| crate::pbtrf(p.uplo, p.n, p.kd, &mut ab_tst, ldab));
    let info_tst = status(info_tst)?;

    let [n, kd, ldab_] = narrow_all([("n", p.n), ("kd", p.kd), ("ldab", ldab)])?;
    let (info_ref, ref_time) = timed(|| unsafe { T::pbtrf(p.uplo.as_c_char(), n, kd, &mut ab_ref, ldab_) });

    let error = abs_error(&ab_tst, &ab_ref);
    Ok(Outcome::scored(info_tst, info_ref, error, Policy::Exact, time, ref_time))
}

fn pbtrs<T: Reference>(p: &Params) -> Result<Outcome> {
    let mut gen = Generator::new(p.seed);
    let (mut ab, ldab) = band::<T>(p, &mut gen);
    let ldb = leading_dim(p.n, p.align);
    let mut b_tst = gen.vec::<T>(vector_len(ldb * p.nrhs));
    let mut b_ref = b_tst.clone();

    let [n, kd, nrhs, ldab_, ldb_] =
        narrow_all([("n", p.n), ("kd", p.kd), ("nrhs", p.nrhs), ("ldab", ldab), ("ldb", ldb)])?;
    unsafe { T::pbtrf(p.uplo.as_c_char(), n, kd, &mut ab, ldab_) };

    let (info_tst, time) = timed(|| crate::pbtrs(p.uplo, p.n, p.kd, p.nrhs, &ab, ldab, &mut b_tst, ldb));
    let info_tst = status(info_tst)?;
    let (info_ref, ref_time) = timed(|| unsafe {
        T::pbtrs(p.uplo.as_c_char(), n, kd, nrhs, &ab, ldab_, &mut b_ref, ldb_)
    });

    let error = abs_error(&b_tst, &b_ref);
    Ok(Outcome::scored(info_tst, info_ref, error, Policy::Exact, time, ref_time))
}

fn positive_packed<T: Scalar>(p: &Params, gen: &mut Generator) -> Vec<T> {
    let mut ap = gen.vec::<T>(packed_len(p.n));
    make_packed_dominant(p.uplo, vector_len(p.n), &mut ap);
    ap
}

fn ppsv<T: Reference>(p: &Params) -> Result<Outcome> {
    let mut gen = Generator::new(p.seed);
    let mut ap_tst = positive_packed::<T>(p, &mut gen);
    let ldb = leading_dim(p.n, p.align);
    let mut b_tst = gen.vec::<T>(vector_len(ldb * p.nrhs));
    let mut ap_ref = ap_tst.clone();
    let mut b_ref = b_tst.clone();

    let (info_tst, time) = timed(|| crate::ppsv(p.uplo, p.n, p.nrhs, &mut ap_tst, &mut b_tst, ldb));
    let info_tst = status(info_tst)?;

    let [n, nrhs, ldb_] = narrow_all([("n", p.n), ("nrhs", p.nrhs), ("ldb", ldb)])?;
    let (info_ref, ref_time) =
        timed(|| unsafe { T::ppsv(p.uplo.as_c_char(), n, nrhs, &mut ap_ref, &mut b_ref, ldb_) });

    let error = abs_error(&ap_tst, &ap_ref) + abs_error(&b_tst, &b_ref);
    Ok(Outcome::scored(info_tst, info_ref, error, Policy::Exact, time, ref_time))
}

fn pptrf<T: Reference>(p: &Params) -> Result<Outcome> {
    let mut gen = Generator::new(p.seed);
    let mut ap_tst = positive_packed::<T>(p, &mut gen);
    let mut ap_ref = ap_tst.clone();

    let (info_tst, time) = timed(|| crate::pptrf(p.uplo, p.n, &mut ap_tst));
    let info_tst = status(info_tst)?;
    let n = narrow("n", p.n)?;
    let (info_ref, ref_time) = timed(|| unsafe { T::pptrf(p.uplo.as_c_char(), n, &mut ap_ref) });

    let error = abs_error(&ap_tst, &ap_ref);
    Ok(Outcome::scored(info_tst, info_ref, error, Policy::Exact, time, ref_time))
}

fn pptri<T: Reference>(p: &Params) -> Result<Outcome> {
    let mut gen = Generator::new(p.seed);
    let mut ap_tst = positive_packed::<T>(p, &mut gen);
    let n = narrow("n", p.n)?;
    unsafe { T::pptrf(p.uplo.as_c_char(), n, &mut ap_tst) };
    let mut ap_ref = ap_tst.clone();

    let (info_tst, time) = timed(|| crate::pptri(p.uplo, p.n, &mut ap_tst));
    let info_tst = status(info_tst)?;
    let (info_ref, ref_time) = timed(|| unsafe { T::pptri(p.uplo.as_c_char(), n, &mut ap_ref) });

    let error = abs_error(&ap_tst, &ap_ref);
    Ok(Outcome::scored(info_tst, info_ref, error, Policy::Exact, time, ref_time))
}

fn positive_dense<T: Scalar>(p: &Params, gen: &mut Generator) -> (Vec<T>, i64) {
    let lda = leading_dim(p.n, p.align);
    let mut a = gen.vec::<T>(vector_len(lda * p.n));
    make_dense_dominant(vector_len(p.n), &mut a, vector_len(lda));
    (a, lda)
}

fn potrf<T: Reference>(p: &Params) -> Result<Outcome> {
    let mut gen = Generator::new(p.seed);
    let (mut a_tst, lda) = positive_dense::<T>(p, &mut gen);
    let mut a_ref = a_tst.clone();

    let (info_tst, time) = timed(|| crate::potrf(p.uplo, p.n, &mut a_tst, lda));
    let info_tst = status(info_tst)?;
    let [n, lda_] = narrow_all([("n", p.n), ("lda", lda)])?;
    let (info_ref, ref_time) = timed(|| unsafe { T::potrf(p.uplo.as_c_char(), n, &mut a_ref, lda_) });

    let error = abs_error(&a_tst, &a_ref);
    Ok(Outcome::scored(info_tst, info_ref, error, Policy::Exact, time, ref_time))
}

fn pocon<T: Reference>(p: &Params) -> Result<Outcome> {
    let mut gen = Generator::new(p.seed);
    let (mut a, lda) = positive_dense::<T>(p, &mut gen);
    let anorm = crate::lanhe(Norm::One, p.uplo, p.n, &a, lda)?;
    let [n, lda_] = narrow_all([("n", p.n), ("lda", lda)])?;
    unsafe { T::potrf(p.uplo.as_c_char(), n, &mut a, lda_) };

    let mut rcond_tst = T::Real::zero();
    let mut rcond_ref = T::Real::zero();
    let (info_tst, time) = timed(|| crate::pocon(p.uplo, p.n, &a, lda, anorm, &mut rcond_tst));
    let info_tst = status(info_tst)?;
    let (info_ref, ref_time) =
        timed(|| unsafe { T::pocon(p.uplo.as_c_char(), n, &a, lda_, anorm, &mut rcond_ref) });

    let error = scalar_error(rcond_tst, rcond_ref);
    Ok(Outcome::scored(info_tst, info_ref, error, Policy::Exact, time, ref_time))
}

// ---------------------------------------------------------------------------
// Packed symmetric / Hermitian indefinite

fn packed_factor<T: Reference>(p: &Params, hermitian: bool) -> Result<Outcome> {
    let mut gen = Generator::new(p.seed);
    let mut ap_tst = gen.vec::<T>(packed_len(p.n));
    let mut ap_ref = ap_tst.clone();
    let mut ipiv_tst = vec![0i64; vector_len(p.n)];
    let mut ipiv_ref: Vec<LapackInt> = vec![0; vector_len(p.n)];

    let (info_tst, time) = timed(|| {
        if hermitian {
            crate::hptrf(p.uplo, p.n, &mut ap_tst, &mut ipiv_tst)
        } else {
            crate::sptrf(p.uplo, p.n, &mut ap_tst, &mut ipiv_tst)
        }
    });
    let info_tst = status(info_tst)?;

    let n = narrow("n", p.n)?;
    let (info_ref, ref_time) = timed(|| unsafe {
        if hermitian {
            T::hptrf(p.uplo.as_c_char(), n, &mut ap_ref, &mut ipiv_ref)
        } else {
            T::sptrf(p.uplo.as_c_char(), n, &mut ap_ref, &mut ipiv_ref)
        }
    });

    let error = abs_error(&ap_tst, &ap_ref) + pivot_error(&ipiv_tst, &ipiv_ref);
    Ok(Outcome::scored(info_tst, info_ref, error, Policy::Exact, time, ref_time))
}

/// Factored packed matrix, its 1-norm before factoring, and the native pivots.
fn factored_packed<T: Reference>(p: &Params, gen: &mut Generator, hermitian: bool) -> Result<(Vec<T>, T::Real, Vec<LapackInt>)> {
    let mut ap = gen.vec::<T>(packed_len(p.n));
    let anorm = crate::lanhp(Norm::One, p.uplo, p.n, &ap)?;
    let n = narrow("n", p.n)?;
    let mut ipiv: Vec<LapackInt> = vec![0; vector_len(p.n)];
    unsafe {
        if hermitian {
            T::hptrf(p.uplo.as_c_char(), n, &mut ap, &mut ipiv);
        } else {
            T::sptrf(p.uplo.as_c_char(), n, &mut ap, &mut ipiv);
        }
    }
    Ok((ap, anorm, ipiv))
}

fn packed_condition<T: Reference>(p: &Params, hermitian: bool) -> Result<Outcome> {
    let mut gen = Generator::new(p.seed);
    let (ap, anorm, ipiv) = factored_packed::<T>(p, &mut gen, hermitian)?;
    let ipiv_tst = widen(&ipiv);
    let n = narrow("n", p.n)?;

    let mut rcond_tst = T::Real::zero();
    let mut rcond_ref = T::Real::zero();
    let (info_tst, time) = timed(|| {
        if hermitian {
            crate::hpcon(p.uplo, p.n, &ap, &ipiv_tst, anorm, &mut rcond_tst)
        } else {
            crate::spcon(p.uplo, p.n, &ap, &ipiv_tst, anorm, &mut rcond_tst)
        }
    });
    let info_tst = status(info_tst)?;
    let (info_ref, ref_time) = timed(|| unsafe {
        if hermitian {
            T::hpcon(p.uplo.as_c_char(), n, &ap, &ipiv, anorm, &mut rcond_ref)
        } else {
            T::spcon(p.uplo.as_c_char(), n, &ap, &ipiv, anorm, &mut rcond_ref)
        }
    });

    let error = scalar_error(rcond_tst, rcond_ref);
    let policy = if hermitian {
        Policy::Below(3.0 * eps::<T>())
    } else {
        Policy::Exact
    };
    Ok(Outcome::scored(info_tst, info_ref, error, policy, time, ref_time))
}

fn hptrs<T: Reference>(p: &Params) -> Result<Outcome> {
    let mut gen = Generator::new(p.seed);
    let (ap, _, ipiv) = factored_packed::<T>(p, &mut gen, true)?;
    let ipiv_tst = widen(&ipiv);
    let ldb = leading_dim(p.n, p.align);
    let mut b_tst = gen.vec::<T>(vector_len(ldb * p.nrhs));
    let mut b_ref = b_tst.clone();

    let (info_tst, time) = timed(|| crate::hptrs(p.uplo, p.n, p.nrhs, &ap, &ipiv_tst, &mut b_tst, ldb));
    let info_tst = status(info_tst)?;
    let [n, nrhs, ldb_] = narrow_all([("n", p.n), ("nrhs", p.nrhs), ("ldb", ldb)])?;
    let (info_ref, ref_time) =
        timed(|| unsafe { T::hptrs(p.uplo.as_c_char(), n, nrhs, &ap, &ipiv, &mut b_ref, ldb_) });

    let error = abs_error(&b_tst, &b_ref);
    Ok(Outcome::scored(info_tst, info_ref, error, Policy::Exact, time, ref_time))
}

// ---------------------------------------------------------------------------
// Norms

fn norm_outcome<R: RealScalar>(tst: crate::Result<R>, reference: R, time: f64, ref_time: f64) -> Result<Outcome> {
    let tst = tst?;
    let error = scalar_error(tst, reference);
    Ok(Outcome::scored(0, 0, error, Policy::Exact, time, ref_time))
}

fn lantp<T: Reference>(p: &Params) -> Result<Outcome> {
    let ap = Generator::new(p.seed).vec::<T>(packed_len(p.n));
    let n = narrow("n", p.n)?;
    let (tst, time) = timed(|| crate::lantp(p.norm, p.uplo, p.diag, p.n, &ap));
    let (reference, ref_time) = timed(|| unsafe {
        T::lantp(p.norm.as_c_char(), p.uplo.as_c_char(), p.diag.as_c_char(), n, &ap)
    });
    norm_outcome(tst, reference, time, ref_time)
}

fn lanhp<T: Reference>(p: &Params) -> Result<Outcome> {
    let ap = Generator::new(p.seed).vec::<T>(packed_len(p.n));
    let n = narrow("n", p.n)?;
    let (tst, time) = timed(|| crate::lanhp(p.norm, p.uplo, p.n, &ap));
    let (reference, ref_time) = timed(|| unsafe { T::lanhp(p.norm.as_c_char(), p.uplo.as_c_char(), n, &ap) });
    norm_outcome(tst, reference, time, ref_time)
}

fn lange<T: Reference>(p: &Params) -> Result<Outcome> {
    let lda = leading_dim(p.m, p.align);
    let a = Generator::new(p.seed).vec::<T>(vector_len(lda * p.n));
    let [m, n, lda_] = narrow_all([("m", p.m), ("n", p.n), ("lda", lda)])?;
    let (tst, time) = timed(|| crate::lange(p.norm, p.m, p.n, &a, lda));
    let (reference, ref_time) = timed(|| unsafe { T::lange(p.norm.as_c_char(), m, n, &a, lda_) });
    norm_outcome(tst, reference, time, ref_time)
}

fn lanhe<T: Reference>(p: &Params) -> Result<Outcome> {
    let lda = leading_dim(p.n, p.align);
    let a = Generator::new(p.seed).vec::<T>(vector_len(lda * p.n));
    let [n, lda_] = narrow_all([("n", p.n), ("lda", lda)])?;
    let (tst, time) = timed(|| crate::lanhe(p.norm, p.uplo, p.n, &a, lda));
    let (reference, ref_time) =
        timed(|| unsafe { T::lanhe(p.norm.as_c_char(), p.uplo.as_c_char(), n, &a, lda_) });
    norm_outcome(tst, reference, time, ref_time)
}

// ---------------------------------------------------------------------------
// Eigenproblems

fn hptrd<T: Reference>(p: &Params) -> Result<Outcome> {
    let mut ap_tst = Generator::new(p.seed).vec::<T>(packed_len(p.n));
    let mut ap_ref = ap_tst.clone();
    let nd = vector_len(p.n);
    let ne = vector_len(p.n - 1);
    let (mut d_tst, mut d_ref) = (vec![T::Real::zero(); nd], vec![T::Real::zero(); nd]);
    let (mut e_tst, mut e_ref) = (vec![T::Real::zero(); ne], vec![T::Real::zero(); ne]);
    let (mut tau_tst, mut tau_ref) = (vec![T::zero(); ne], vec![T::zero(); ne]);

    let (info_tst, time) = timed(|| crate::hptrd(p.uplo, p.n, &mut ap_tst, &mut d_tst, &mut e_tst, &mut tau_tst));
    let info_tst = status(info_tst)?;
    let n = narrow("n", p.n)?;
    let (info_ref, ref_time) = timed(|| unsafe {
        T::hptrd(p.uplo.as_c_char(), n, &mut ap_ref, &mut d_ref, &mut e_ref, &mut tau_ref)
    });

    let error = abs_error(&ap_tst, &ap_ref)
        + abs_error(&d_tst, &d_ref)
        + abs_error(&e_tst, &e_ref)
        + abs_error(&tau_tst, &tau_ref);
    Ok(Outcome::scored(info_tst, info_ref, error, Policy::Exact, time, ref_time))
}

fn vectors_ld(job: Job, n: i64, align: i64) -> i64 {
    if job == Job::NoVec {
        1
    } else {
        leading_dim(n, align)
    }
}

fn hpgv<T: Reference>(p: &Params) -> Result<Outcome> {
    let mut gen = Generator::new(p.seed);
    let mut ap_tst = gen.vec::<T>(packed_len(p.n));
    let mut bp_tst = positive_packed::<T>(p, &mut gen);
    let a = unpack_hermitian(p.uplo, vector_len(p.n), &ap_tst);
    let b = unpack_hermitian(p.uplo, vector_len(p.n), &bp_tst);
    let mut ap_ref = ap_tst.clone();
    let mut bp_ref = bp_tst.clone();

    let ldz = vectors_ld(p.jobz, p.n, p.align);
    let zlen = if p.jobz == Job::NoVec { 1 } else { vector_len(ldz * p.n) };
    let (mut z_tst, mut z_ref) = (vec![T::zero(); zlen], vec![T::zero(); zlen]);
    let nw = vector_len(p.n);
    let (mut w_tst, mut w_ref) = (vec![T::Real::zero(); nw], vec![T::Real::zero(); nw]);

    let (info_tst, time) = timed(|| {
        crate::hpgv(p.itype, p.jobz, p.uplo, p.n, &mut ap_tst, &mut bp_tst, &mut w_tst, &mut z_tst, ldz)
    });
    let info_tst = status(info_tst)?;
    let [itype, n, ldz_] = narrow_all([("itype", p.itype), ("n", p.n), ("ldz", ldz)])?;
    let (info_ref, ref_time) = timed(|| unsafe {
        T::hpgv(
            itype,
            p.jobz.as_c_char(),
            p.uplo.as_c_char(),
            n,
            &mut ap_ref,
            &mut bp_ref,
            &mut w_ref,
            &mut z_ref,
            ldz_,
        )
    });

    let lambda = promote_real(&w_tst);
    let mut error = rel_error(&lambda, &promote_real(&w_ref));
    if p.jobz != Job::NoVec && info_tst == 0 && nw > 0 {
        let z = dense(nw, nw, &z_tst, vector_len(ldz));
        error = error.max(generalized_residual(p.itype, &a, &b, &z, &lambda));
    }
    let policy = Policy::Below(p.tol * eps::<T>());
    Ok(Outcome::scored(info_tst, info_ref, error, policy, time, ref_time))
}

/// Band storage sizes and index range shared by `hbgvx` and `sbgvx`.
struct BandGeneralized {
    ldab: i64,
    ldq: i64,
    ldz: i64,
    il: i64,
    iu: i64,
}

impl BandGeneralized {
    fn new(p: &Params) -> Self {
        let (il, iu) = if p.n == 0 {
            (1, 0)
        } else {
            let il = p.il.clamp(1, p.n);
            (il, p.iu.clamp(il, p.n))
        };
        BandGeneralized {
            ldab: roundup(p.kd + 1, p.align),
            ldq: vectors_ld(p.jobz, p.n, p.align),
            ldz: vectors_ld(p.jobz, p.n, p.align),
            il,
            iu,
        }
    }
}

fn band_generalized<T, F>(p: &Params, s: &BandGeneralized, wrapper: F) -> Result<Outcome>
where
    T: Reference,
    F: FnOnce(&mut [T], &mut [T], &mut [T], &mut [T::Real], &mut [T], &mut [i64]) -> crate::Result<EigenCount>,
{
    let n = vector_len(p.n);
    let mut gen = Generator::new(p.seed);
    let mut ab_tst = gen.vec::<T>(vector_len(s.ldab * p.n));
    let (mut bb_tst, _) = band::<T>(p, &mut gen);
    let mut ab_ref = ab_tst.clone();
    let mut bb_ref = bb_tst.clone();

    let vectors = p.jobz != Job::NoVec;
    let qlen = if vectors { vector_len(s.ldq * p.n) } else { 1 };
    let zlen = if vectors { vector_len(s.ldz * p.n) } else { 1 };
    let (mut q_tst, mut q_ref) = (vec![T::zero(); qlen], vec![T::zero(); qlen]);
    let (mut z_tst, mut z_ref) = (vec![T::zero(); zlen], vec![T::zero(); zlen]);
    let (mut w_tst, mut w_ref) = (vec![T::Real::zero(); n], vec![T::Real::zero(); n]);
    let mut ifail_tst = vec![0i64; n];
    let mut ifail_ref: Vec<LapackInt> = vec![0; n];

    let (count, time) = timed(|| wrapper(&mut ab_tst, &mut bb_tst, &mut q_tst, &mut w_tst, &mut z_tst, &mut ifail_tst));
    let (found_tst, info_tst) = match count {
        Ok(EigenCount { found, info }) => (found, info),
        Err(err) => (0, status(Err(err))?),
    };

    let [n_, kd, ldab, ldq, il, iu, ldz] = narrow_all([
        ("n", p.n),
        ("kd", p.kd),
        ("ldab", s.ldab),
        ("ldq", s.ldq),
        ("il", s.il),
        ("iu", s.iu),
        ("ldz", s.ldz),
    ])?;
    let mut found_ref: LapackInt = 0;
    let (info_ref, ref_time) = timed(|| unsafe {
        T::hbgvx(
            p.jobz.as_c_char(),
            p.range.as_c_char(),
            p.uplo.as_c_char(),
            n_,
            kd,
            kd,
            &mut ab_ref,
            ldab,
            &mut bb_ref,
            ldab,
            &mut q_ref,
            ldq,
            real::<T>(p.vl),
            real::<T>(p.vu),
            il,
            iu,
            real::<T>(p.abstol),
            &mut found_ref,
            &mut w_ref,
            &mut z_ref,
            ldz,
            &mut ifail_ref,
        )
    });

    let mut error = abs_error(&ab_tst, &ab_ref)
        + abs_error(&bb_tst, &bb_ref)
        + abs_error(&q_tst, &q_ref)
        + abs_error(&w_tst, &w_ref)
        + abs_error(&z_tst, &z_ref)
        + (found_tst - i64::from(found_ref)).unsigned_abs() as f64;
    if vectors {
        error += pivot_error(&ifail_tst, &ifail_ref);
    }
    Ok(Outcome::scored(info_tst, info_ref, error, Policy::Exact, time, ref_time))
}

fn hbgvx<T: Reference>(p: &Params) -> Result<Outcome> {
    let s = BandGeneralized::new(p);
    let (vl, vu, abstol) = (real::<T>(p.vl), real::<T>(p.vu), real::<T>(p.abstol));
    let (ldab, ldq, ldz, il, iu) = (s.ldab, s.ldq, s.ldz, s.il, s.iu);
    band_generalized::<T, _>(
        p,
        &s,
        move |ab, bb, q, w, z, ifail| {
            crate::hbgvx(
                p.jobz, p.range, p.uplo, p.n, p.kd, p.kd, ab, ldab, bb, ldab, q, ldq, vl, vu, il, iu, abstol, w,
                z, ldz, ifail,
            )
        },
    )
}

/// `hbgvx` through its real symmetric name.
pub(super) fn sbgvx<T: Reference + RealScalar>(p: &Params) -> Result<Outcome> {
    let s = BandGeneralized::new(p);
    let (vl, vu, abstol) = (T::from_f64(p.vl), T::from_f64(p.vu), T::from_f64(p.abstol));
    let (ldab, ldq, ldz, il, iu) = (s.ldab, s.ldq, s.ldz, s.il, s.iu);
    band_generalized::<T, _>(
        p,
        &s,
        move |ab, bb, q, w, z, ifail| {
            crate::sbgvx(
                p.jobz, p.range, p.uplo, p.n, p.kd, p.kd, ab, ldab, bb, ldab, q, ldq, vl, vu, il, iu, abstol, w,
                z, ldz, ifail,
            )
        },
    )
}

fn geev<T: Reference>(p: &Params) -> Result<Outcome> {
    let n = vector_len(p.n);
    let lda = leading_dim(p.n, p.align);
    let mut a_tst = Generator::new(p.seed).vec::<T>(vector_len(lda * p.n));
    let a = dense(n, n, &a_tst, vector_len(lda));
    let mut a_ref = a_tst.clone();

    let ldvl = vectors_ld(p.jobvl, p.n, p.align);
    let ldvr = vectors_ld(p.jobvr, p.n, p.align);
    let vl_len = if p.jobvl == Job::NoVec { 1 } else { vector_len(ldvl * p.n) };
    let vr_len = if p.jobvr == Job::NoVec { 1 } else { vector_len(ldvr * p.n) };
    let (mut vl_tst, mut vl_ref) = (vec![T::zero(); vl_len], vec![T::zero(); vl_len]);
    let (mut vr_tst, mut vr_ref) = (vec![T::zero(); vr_len], vec![T::zero(); vr_len]);
    let zero = Complex::new(T::Real::zero(), T::Real::zero());
    let (mut w_tst, mut w_ref) = (vec![zero; n], vec![zero; n]);

    let (info_tst, time) = timed(|| {
        crate::geev(p.jobvl, p.jobvr, p.n, &mut a_tst, lda, &mut w_tst, &mut vl_tst, ldvl, &mut vr_tst, ldvr)
    });
    let info_tst = status(info_tst)?;
    let [n_, lda_, ldvl_, ldvr_] = narrow_all([("n", p.n), ("lda", lda), ("ldvl", ldvl), ("ldvr", ldvr)])?;
    let (info_ref, ref_time) = timed(|| unsafe {
        T::geev(
            p.jobvl.as_c_char(),
            p.jobvr.as_c_char(),
            n_,
            &mut a_ref,
            lda_,
            &mut w_ref,
            &mut vl_ref,
            ldvl_,
            &mut vr_ref,
            ldvr_,
        )
    });

    let mut w = promote_eigenvalues(&w_tst);
    let mut error: f64 = 0.0;
    if info_tst == 0 && n > 0 {
        for (job, v, ld, left) in [(p.jobvl, &vl_tst, ldvl, true), (p.jobvr, &vr_tst, ldvr, false)] {
            if job == Job::NoVec {
                continue;
            }
            let vectors = eigenvectors(n, v, vector_len(ld), &w);
            let (residual, normalization) = eigen_residual(&a, &vectors, &w, left);
            error = error.max(residual).max(normalization);
        }
    }
    let mut w_sorted_ref = promote_eigenvalues(&w_ref);
    sort_lexical(&mut w);
    sort_lexical(&mut w_sorted_ref);
    error = error.max(rel_error(&w, &w_sorted_ref));

    let policy = Policy::Below(p.tol * eps::<T>());
    Ok(Outcome::scored(info_tst, info_ref, error, policy, time, ref_time))
}

// ---------------------------------------------------------------------------
// Least squares and orthogonal factorizations

fn least_squares<T: Reference>(p: &Params, divide_and_conquer: bool) -> Result<Outcome> {
    let lda = leading_dim(p.m, p.align);
    let ldb = leading_dim(p.m.max(p.n), p.align);
    let mut gen = Generator::new(p.seed);
    let mut a_tst = gen.vec::<T>(vector_len(lda * p.n));
    let mut b_tst = gen.vec::<T>(vector_len(ldb * p.nrhs));
    let mut a_ref = a_tst.clone();
    let mut b_ref = b_tst.clone();
    let ns = vector_len(p.m.min(p.n));
    let (mut s_tst, mut s_ref) = (vec![T::Real::zero(); ns], vec![T::Real::zero(); ns]);
    let rcond = real::<T>(p.rcond);
    let mut rank_tst = 0i64;
    let mut rank_ref: LapackInt = 0;

    let (info_tst, time) = timed(|| {
        if divide_and_conquer {
            crate::gelsd(p.m, p.n, p.nrhs, &mut a_tst, lda, &mut b_tst, ldb, &mut s_tst, rcond, &mut rank_tst)
        } else {
            crate::gelss(p.m, p.n, p.nrhs, &mut a_tst, lda, &mut b_tst, ldb, &mut s_tst, rcond, &mut rank_tst)
        }
    });
    let info_tst = status(info_tst)?;
    let [m, n, nrhs, lda_, ldb_] =
        narrow_all([("m", p.m), ("n", p.n), ("nrhs", p.nrhs), ("lda", lda), ("ldb", ldb)])?;
    let (info_ref, ref_time) = timed(|| unsafe {
        if divide_and_conquer {
            T::gelsd(m, n, nrhs, &mut a_ref, lda_, &mut b_ref, ldb_, &mut s_ref, rcond, &mut rank_ref)
        } else {
            T::gelss(m, n, nrhs, &mut a_ref, lda_, &mut b_ref, ldb_, &mut s_ref, rcond, &mut rank_ref)
        }
    });

    let error = abs_error(&a_tst, &a_ref)
        + abs_error(&b_tst, &b_ref)
        + abs_error(&s_tst, &s_ref)
        + (rank_tst - i64::from(rank_ref)).unsigned_abs() as f64;
    let policy = if divide_and_conquer {
        Policy::Exact
    } else {
        Policy::Below(30.0 * eps::<T>())
    };
    Ok(Outcome::scored(info_tst, info_ref, error, policy, time, ref_time))
}

fn householder<T: Reference>(p: &Params, lq: bool) -> Result<Outcome> {
    let lda = leading_dim(p.m, p.align);
    let mut a_tst = Generator::new(p.seed).vec::<T>(vector_len(lda * p.n));
    let mut a_ref = a_tst.clone();
    let nt = vector_len(p.m.min(p.n));
    let (mut tau_tst, mut tau_ref) = (vec![T::zero(); nt], vec![T::zero(); nt]);

    let (info_tst, time) = timed(|| {
        if lq {
            crate::gelqf(p.m, p.n, &mut a_tst, lda, &mut tau_tst)
        } else {
            crate::geqrf(p.m, p.n, &mut a_tst, lda, &mut tau_tst)
        }
    });
    let info_tst = status(info_tst)?;
    let [m, n, lda_] = narrow_all([("m", p.m), ("n", p.n), ("lda", lda)])?;
    let (info_ref, ref_time) = timed(|| unsafe {
        if lq {
            T::gelqf(m, n, &mut a_ref, lda_, &mut tau_ref)
        } else {
            T::geqrf(m, n, &mut a_ref, lda_, &mut tau_ref)
        }
    });

    let error = abs_error(&a_tst, &a_ref) + abs_error(&tau_tst, &tau_ref);
    Ok(Outcome::scored(info_tst, info_ref, error, Policy::Exact, time, ref_time))
}

fn ggrqf<T: Reference>(p: &Params) -> Result<Outcome> {
    let lda = leading_dim(p.m, p.align);
    let ldb = leading_dim(p.p, p.align);
    let mut gen = Generator::new(p.seed);
    let mut a_tst = gen.vec::<T>(vector_len(lda * p.n));
    let mut b_tst = gen.vec::<T>(vector_len(ldb * p.n));
    let mut a_ref = a_tst.clone();
    let mut b_ref = b_tst.clone();
    let na = vector_len(p.m.min(p.n));
    let nb = vector_len(p.p.min(p.n));
    let (mut taua_tst, mut taua_ref) = (vec![T::zero(); na], vec![T::zero(); na]);
    let (mut taub_tst, mut taub_ref) = (vec![T::zero(); nb], vec![T::zero(); nb]);

    let (info_tst, time) = timed(|| {
        crate::ggrqf(p.m, p.p, p.n, &mut a_tst, lda, &mut taua_tst, &mut b_tst, ldb, &mut taub_tst)
    });
    let info_tst = status(info_tst)?;
    let [m, pp, n, lda_, ldb_] = narrow_all([("m", p.m), ("p", p.p), ("n", p.n), ("lda", lda), ("ldb", ldb)])?;
    let (info_ref, ref_time) = timed(|| unsafe {
        T::ggrqf(m, pp, n, &mut a_ref, lda_, &mut taua_ref, &mut b_ref, ldb_, &mut taub_ref)
    });

    let error = abs_error(&a_tst, &a_ref)
        + abs_error(&taua_tst, &taua_ref)
        + abs_error(&b_tst, &b_ref)
        + abs_error(&taub_tst, &taub_ref);
    Ok(Outcome::scored(info_tst, info_ref, error, Policy::Exact, time, ref_time))
}

/// `unglq` needs `n >= m >= k`; `m` and `k` are clamped to fit.
fn unglq<T: Reference>(p: &Params) -> Result<Outcome> {
    let m = p.m.min(p.n);
    let k = p.k.min(m);
    let lda = leading_dim(m, p.align);
    let mut a_tst = Generator::new(p.seed).vec::<T>(vector_len(lda * p.n));
    let mut tau = vec![T::zero(); vector_len(m)];
    let [m_, n_, k_, lda_] = narrow_all([("m", m), ("n", p.n), ("k", k), ("lda", lda)])?;
    unsafe { T::gelqf(m_, n_, &mut a_tst, lda_, &mut tau) };
    let mut a_ref = a_tst.clone();

    let (info_tst, time) = timed(|| crate::unglq(m, p.n, k, &mut a_tst, lda, &tau));
    let info_tst = status(info_tst)?;
    let (info_ref, ref_time) = timed(|| unsafe { T::unglq(m_, n_, k_, &mut a_ref, lda_, &tau) });

    let mut error = abs_error(&a_tst, &a_ref);
    if info_tst == 0 && m > 0 {
        let q = dense(vector_len(m), vector_len(p.n), &a_tst, vector_len(lda));
        error += orthogonality(&q);
    }
    let policy = Policy::Below(p.tol * eps::<T>());
    Ok(Outcome::scored(info_tst, info_ref, error, policy, time, ref_time))
}

// ---------------------------------------------------------------------------
// Auxiliary

fn lacpy<T: Reference>(p: &Params) -> Result<Outcome> {
    let lda = leading_dim(p.m, p.align);
    let a = Generator::new(p.seed).vec::<T>(vector_len(lda * p.n));
    let (mut b_tst, mut b_ref) = (vec![T::zero(); a.len()], vec![T::zero(); a.len()]);

    let (result, time) = timed(|| crate::lacpy(p.matrix_type, p.m, p.n, &a, lda, &mut b_tst, lda));
    result?;
    let [m, n, lda_] = narrow_all([("m", p.m), ("n", p.n), ("lda", lda)])?;
    let (info_ref, ref_time) =
        timed(|| unsafe { T::lacpy(p.matrix_type.as_c_char(), m, n, &a, lda_, &mut b_ref, lda_) });

    let error = abs_error(&b_tst, &b_ref);
    Ok(Outcome::scored(0, info_ref, error, Policy::Exact, time, ref_time))
}

fn geequ<T: Reference>(p: &Params) -> Result<Outcome> {
    let lda = leading_dim(p.m, p.align);
    let a = Generator::new(p.seed).vec::<T>(vector_len(lda * p.n));
    let (mut r_tst, mut r_ref) = (vec![T::Real::zero(); vector_len(p.m)], vec![T::Real::zero(); vector_len(p.m)]);
    let (mut c_tst, mut c_ref) = (vec![T::Real::zero(); vector_len(p.n)], vec![T::Real::zero(); vector_len(p.n)]);

    let (result, time) = timed(|| crate::geequ(p.m, p.n, &a, lda, &mut r_tst, &mut c_tst));
    let (scaling, info_tst) = match result {
        Ok(scaling) => (Some(scaling), scaling.info),
        Err(err) => (None, status(Err(err))?),
    };

    let [m, n, lda_] = narrow_all([("m", p.m), ("n", p.n), ("lda", lda)])?;
    let (mut rowcnd, mut colcnd, mut amax) = (T::Real::zero(), T::Real::zero(), T::Real::zero());
    let (info_ref, ref_time) = timed(|| unsafe {
        T::geequ(m, n, &a, lda_, &mut r_ref, &mut c_ref, &mut rowcnd, &mut colcnd, &mut amax)
    });

    let mut error = abs_error(&r_tst, &r_ref) + abs_error(&c_tst, &c_ref);
    if let Some(scaling) = scaling {
        error += scalar_error(scaling.rowcnd, rowcnd)
            + scalar_error(scaling.colcnd, colcnd)
            + scalar_error(scaling.amax, amax);
    }
    Ok(Outcome::scored(info_tst, info_ref, error, Policy::Exact, time, ref_time))
}
