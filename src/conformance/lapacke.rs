//! LAPACKE, the C interface to LAPACK, used as the reference side of every check.
//!
//! All calls are column-major. `lantp` and `lanhp` have no LAPACKE entry point; their
//! reference is a direct native call with a workspace of `max(1, n)` reals regardless
//! of the norm.

#![allow(non_snake_case)]
#![allow(clippy::too_many_arguments)]

use libc::{c_char, c_int};
use num_complex::Complex;

use crate::ffi;
use crate::marshal::LapackInt;
use crate::routines::{
    Auxiliary, BandCholesky, Cholesky, GeneralizedEigen, Geev, LeastSquares, Norms, Orthogonal,
    PackedCholesky, PackedIndefinite, PackedTridiagonal,
};
use crate::scalar::{c32, c64};

pub const LAPACK_COL_MAJOR: c_int = 102;

macro_rules! lapacke_pbsv {
    ($name:ident, $t:ty) => {
        pub fn $name(
            layout: c_int,
            uplo: c_char,
            n: LapackInt,
            kd: LapackInt,
            nrhs: LapackInt,
            ab: *mut $t,
            ldab: LapackInt,
            b: *mut $t,
            ldb: LapackInt,
        ) -> LapackInt;
    };
}

macro_rules! lapacke_pbtrf {
    ($name:ident, $t:ty) => {
        pub fn $name(layout: c_int, uplo: c_char, n: LapackInt, kd: LapackInt, ab: *mut $t, ldab: LapackInt) -> LapackInt;
    };
}

macro_rules! lapacke_pbtrs {
    ($name:ident, $t:ty) => {
        pub fn $name(
            layout: c_int,
            uplo: c_char,
            n: LapackInt,
            kd: LapackInt,
            nrhs: LapackInt,
            ab: *const $t,
            ldab: LapackInt,
            b: *mut $t,
            ldb: LapackInt,
        ) -> LapackInt;
    };
}

macro_rules! lapacke_ppsv {
    ($name:ident, $t:ty) => {
        pub fn $name(
            layout: c_int,
            uplo: c_char,
            n: LapackInt,
            nrhs: LapackInt,
            ap: *mut $t,
            b: *mut $t,
            ldb: LapackInt,
        ) -> LapackInt;
    };
}

// pptrf, pptri
macro_rules! lapacke_packed {
    ($name:ident, $t:ty) => {
        pub fn $name(layout: c_int, uplo: c_char, n: LapackInt, ap: *mut $t) -> LapackInt;
    };
}

macro_rules! lapacke_potrf {
    ($name:ident, $t:ty) => {
        pub fn $name(layout: c_int, uplo: c_char, n: LapackInt, a: *mut $t, lda: LapackInt) -> LapackInt;
    };
}

macro_rules! lapacke_pocon {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            layout: c_int,
            uplo: c_char,
            n: LapackInt,
            a: *const $t,
            lda: LapackInt,
            anorm: $r,
            rcond: *mut $r,
        ) -> LapackInt;
    };
}

// sptrf, hptrf
macro_rules! lapacke_packed_trf {
    ($name:ident, $t:ty) => {
        pub fn $name(layout: c_int, uplo: c_char, n: LapackInt, ap: *mut $t, ipiv: *mut LapackInt) -> LapackInt;
    };
}

// sptrs, hptrs
macro_rules! lapacke_packed_trs {
    ($name:ident, $t:ty) => {
        pub fn $name(
            layout: c_int,
            uplo: c_char,
            n: LapackInt,
            nrhs: LapackInt,
            ap: *const $t,
            ipiv: *const LapackInt,
            b: *mut $t,
            ldb: LapackInt,
        ) -> LapackInt;
    };
}

// spcon, hpcon
macro_rules! lapacke_packed_con {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            layout: c_int,
            uplo: c_char,
            n: LapackInt,
            ap: *const $t,
            ipiv: *const LapackInt,
            anorm: $r,
            rcond: *mut $r,
        ) -> LapackInt;
    };
}

macro_rules! lapacke_lange {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(layout: c_int, norm: c_char, m: LapackInt, n: LapackInt, a: *const $t, lda: LapackInt) -> $r;
    };
}

// lansy, lanhe
macro_rules! lapacke_lanhe {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(layout: c_int, norm: c_char, uplo: c_char, n: LapackInt, a: *const $t, lda: LapackInt) -> $r;
    };
}

// sptrd, hptrd
macro_rules! lapacke_hptrd {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            layout: c_int,
            uplo: c_char,
            n: LapackInt,
            ap: *mut $t,
            d: *mut $r,
            e: *mut $r,
            tau: *mut $t,
        ) -> LapackInt;
    };
}

// spgv, hpgv
macro_rules! lapacke_hpgv {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            layout: c_int,
            itype: LapackInt,
            jobz: c_char,
            uplo: c_char,
            n: LapackInt,
            ap: *mut $t,
            bp: *mut $t,
            w: *mut $r,
            z: *mut $t,
            ldz: LapackInt,
        ) -> LapackInt;
    };
}

// sbgvx, hbgvx
macro_rules! lapacke_hbgvx {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            layout: c_int,
            jobz: c_char,
            range: c_char,
            uplo: c_char,
            n: LapackInt,
            ka: LapackInt,
            kb: LapackInt,
            ab: *mut $t,
            ldab: LapackInt,
            bb: *mut $t,
            ldbb: LapackInt,
            q: *mut $t,
            ldq: LapackInt,
            vl: $r,
            vu: $r,
            il: LapackInt,
            iu: LapackInt,
            abstol: $r,
            m: *mut LapackInt,
            w: *mut $r,
            z: *mut $t,
            ldz: LapackInt,
            ifail: *mut LapackInt,
        ) -> LapackInt;
    };
}

macro_rules! lapacke_geev_real {
    ($name:ident, $t:ty) => {
        pub fn $name(
            layout: c_int,
            jobvl: c_char,
            jobvr: c_char,
            n: LapackInt,
            a: *mut $t,
            lda: LapackInt,
            wr: *mut $t,
            wi: *mut $t,
            vl: *mut $t,
            ldvl: LapackInt,
            vr: *mut $t,
            ldvr: LapackInt,
        ) -> LapackInt;
    };
}

macro_rules! lapacke_geev_complex {
    ($name:ident, $t:ty) => {
        pub fn $name(
            layout: c_int,
            jobvl: c_char,
            jobvr: c_char,
            n: LapackInt,
            a: *mut $t,
            lda: LapackInt,
            w: *mut $t,
            vl: *mut $t,
            ldvl: LapackInt,
            vr: *mut $t,
            ldvr: LapackInt,
        ) -> LapackInt;
    };
}

// gelss, gelsd
macro_rules! lapacke_gelsx {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            layout: c_int,
            m: LapackInt,
            n: LapackInt,
            nrhs: LapackInt,
            a: *mut $t,
            lda: LapackInt,
            b: *mut $t,
            ldb: LapackInt,
            s: *mut $r,
            rcond: $r,
            rank: *mut LapackInt,
        ) -> LapackInt;
    };
}

// geqrf, gelqf
macro_rules! lapacke_gexxf {
    ($name:ident, $t:ty) => {
        pub fn $name(layout: c_int, m: LapackInt, n: LapackInt, a: *mut $t, lda: LapackInt, tau: *mut $t) -> LapackInt;
    };
}

macro_rules! lapacke_ggrqf {
    ($name:ident, $t:ty) => {
        pub fn $name(
            layout: c_int,
            m: LapackInt,
            p: LapackInt,
            n: LapackInt,
            a: *mut $t,
            lda: LapackInt,
            taua: *mut $t,
            b: *mut $t,
            ldb: LapackInt,
            taub: *mut $t,
        ) -> LapackInt;
    };
}

// orglq, unglq
macro_rules! lapacke_unglq {
    ($name:ident, $t:ty) => {
        pub fn $name(
            layout: c_int,
            m: LapackInt,
            n: LapackInt,
            k: LapackInt,
            a: *mut $t,
            lda: LapackInt,
            tau: *const $t,
        ) -> LapackInt;
    };
}

macro_rules! lapacke_lacpy {
    ($name:ident, $t:ty) => {
        pub fn $name(
            layout: c_int,
            uplo: c_char,
            m: LapackInt,
            n: LapackInt,
            a: *const $t,
            lda: LapackInt,
            b: *mut $t,
            ldb: LapackInt,
        ) -> LapackInt;
    };
}

macro_rules! lapacke_geequ {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            layout: c_int,
            m: LapackInt,
            n: LapackInt,
            a: *const $t,
            lda: LapackInt,
            r: *mut $r,
            c: *mut $r,
            rowcnd: *mut $r,
            colcnd: *mut $r,
            amax: *mut $r,
        ) -> LapackInt;
    };
}

extern "C" {
    lapacke_pbsv!(LAPACKE_spbsv, f32);
    lapacke_pbsv!(LAPACKE_dpbsv, f64);
    lapacke_pbsv!(LAPACKE_cpbsv, c32);
    lapacke_pbsv!(LAPACKE_zpbsv, c64);

    lapacke_pbtrf!(LAPACKE_spbtrf, f32);
    lapacke_pbtrf!(LAPACKE_dpbtrf, f64);
    lapacke_pbtrf!(LAPACKE_cpbtrf, c32);
    lapacke_pbtrf!(LAPACKE_zpbtrf, c64);

    lapacke_pbtrs!(LAPACKE_spbtrs, f32);
    lapacke_pbtrs!(LAPACKE_dpbtrs, f64);
    lapacke_pbtrs!(LAPACKE_cpbtrs, c32);
    lapacke_pbtrs!(LAPACKE_zpbtrs, c64);

    lapacke_ppsv!(LAPACKE_sppsv, f32);
    lapacke_ppsv!(LAPACKE_dppsv, f64);
    lapacke_ppsv!(LAPACKE_cppsv, c32);
    lapacke_ppsv!(LAPACKE_zppsv, c64);

    lapacke_packed!(LAPACKE_spptrf, f32);
    lapacke_packed!(LAPACKE_dpptrf, f64);
    lapacke_packed!(LAPACKE_cpptrf, c32);
    lapacke_packed!(LAPACKE_zpptrf, c64);

    lapacke_packed!(LAPACKE_spptri, f32);
    lapacke_packed!(LAPACKE_dpptri, f64);
    lapacke_packed!(LAPACKE_cpptri, c32);
    lapacke_packed!(LAPACKE_zpptri, c64);

    lapacke_potrf!(LAPACKE_spotrf, f32);
    lapacke_potrf!(LAPACKE_dpotrf, f64);
    lapacke_potrf!(LAPACKE_cpotrf, c32);
    lapacke_potrf!(LAPACKE_zpotrf, c64);

    lapacke_pocon!(LAPACKE_spocon, f32, f32);
    lapacke_pocon!(LAPACKE_dpocon, f64, f64);
    lapacke_pocon!(LAPACKE_cpocon, c32, f32);
    lapacke_pocon!(LAPACKE_zpocon, c64, f64);

    lapacke_packed_trf!(LAPACKE_ssptrf, f32);
    lapacke_packed_trf!(LAPACKE_dsptrf, f64);
    lapacke_packed_trf!(LAPACKE_csptrf, c32);
    lapacke_packed_trf!(LAPACKE_zsptrf, c64);
    lapacke_packed_trf!(LAPACKE_chptrf, c32);
    lapacke_packed_trf!(LAPACKE_zhptrf, c64);

    lapacke_packed_trs!(LAPACKE_ssptrs, f32);
    lapacke_packed_trs!(LAPACKE_dsptrs, f64);
    lapacke_packed_trs!(LAPACKE_chptrs, c32);
    lapacke_packed_trs!(LAPACKE_zhptrs, c64);

    lapacke_packed_con!(LAPACKE_sspcon, f32, f32);
    lapacke_packed_con!(LAPACKE_dspcon, f64, f64);
    lapacke_packed_con!(LAPACKE_cspcon, c32, f32);
    lapacke_packed_con!(LAPACKE_zspcon, c64, f64);
    lapacke_packed_con!(LAPACKE_chpcon, c32, f32);
    lapacke_packed_con!(LAPACKE_zhpcon, c64, f64);

    lapacke_lange!(LAPACKE_slange, f32, f32);
    lapacke_lange!(LAPACKE_dlange, f64, f64);
    lapacke_lange!(LAPACKE_clange, c32, f32);
    lapacke_lange!(LAPACKE_zlange, c64, f64);

    lapacke_lanhe!(LAPACKE_slansy, f32, f32);
    lapacke_lanhe!(LAPACKE_dlansy, f64, f64);
    lapacke_lanhe!(LAPACKE_clanhe, c32, f32);
    lapacke_lanhe!(LAPACKE_zlanhe, c64, f64);

    lapacke_hptrd!(LAPACKE_ssptrd, f32, f32);
    lapacke_hptrd!(LAPACKE_dsptrd, f64, f64);
    lapacke_hptrd!(LAPACKE_chptrd, c32, f32);
    lapacke_hptrd!(LAPACKE_zhptrd, c64, f64);

    lapacke_hpgv!(LAPACKE_sspgv, f32, f32);
    lapacke_hpgv!(LAPACKE_dspgv, f64, f64);
    lapacke_hpgv!(LAPACKE_chpgv, c32, f32);
    lapacke_hpgv!(LAPACKE_zhpgv, c64, f64);

    lapacke_hbgvx!(LAPACKE_ssbgvx, f32, f32);
    lapacke_hbgvx!(LAPACKE_dsbgvx, f64, f64);
    lapacke_hbgvx!(LAPACKE_chbgvx, c32, f32);
    lapacke_hbgvx!(LAPACKE_zhbgvx, c64, f64);

    lapacke_geev_real!(LAPACKE_sgeev, f32);
    lapacke_geev_real!(LAPACKE_dgeev, f64);
    lapacke_geev_complex!(LAPACKE_cgeev, c32);
    lapacke_geev_complex!(LAPACKE_zgeev, c64);

    lapacke_gelsx!(LAPACKE_sgelss, f32, f32);
    lapacke_gelsx!(LAPACKE_dgelss, f64, f64);
    lapacke_gelsx!(LAPACKE_cgelss, c32, f32);
    lapacke_gelsx!(LAPACKE_zgelss, c64, f64);

    lapacke_gelsx!(LAPACKE_sgelsd, f32, f32);
    lapacke_gelsx!(LAPACKE_dgelsd, f64, f64);
    lapacke_gelsx!(LAPACKE_cgelsd, c32, f32);
    lapacke_gelsx!(LAPACKE_zgelsd, c64, f64);

    lapacke_gexxf!(LAPACKE_sgeqrf, f32);
    lapacke_gexxf!(LAPACKE_dgeqrf, f64);
    lapacke_gexxf!(LAPACKE_cgeqrf, c32);
    lapacke_gexxf!(LAPACKE_zgeqrf, c64);

    lapacke_gexxf!(LAPACKE_sgelqf, f32);
    lapacke_gexxf!(LAPACKE_dgelqf, f64);
    lapacke_gexxf!(LAPACKE_cgelqf, c32);
    lapacke_gexxf!(LAPACKE_zgelqf, c64);

    lapacke_ggrqf!(LAPACKE_sggrqf, f32);
    lapacke_ggrqf!(LAPACKE_dggrqf, f64);
    lapacke_ggrqf!(LAPACKE_cggrqf, c32);
    lapacke_ggrqf!(LAPACKE_zggrqf, c64);

    lapacke_unglq!(LAPACKE_sorglq, f32);
    lapacke_unglq!(LAPACKE_dorglq, f64);
    lapacke_unglq!(LAPACKE_cunglq, c32);
    lapacke_unglq!(LAPACKE_zunglq, c64);

    lapacke_lacpy!(LAPACKE_slacpy, f32);
    lapacke_lacpy!(LAPACKE_dlacpy, f64);
    lapacke_lacpy!(LAPACKE_clacpy, c32);
    lapacke_lacpy!(LAPACKE_zlacpy, c64);

    lapacke_geequ!(LAPACKE_sgeequ, f32, f32);
    lapacke_geequ!(LAPACKE_dgeequ, f64, f64);
    lapacke_geequ!(LAPACKE_cgeequ, c32, f32);
    lapacke_geequ!(LAPACKE_zgeequ, c64, f64);
}

/// Reference implementations, one per wrapped routine, for one scalar type.
///
/// Every method is `unsafe`: the caller sizes each slice for the dimensions passed.
/// Integer arguments and pivots are already native width, flags are LAPACK characters.
pub trait Reference:
    BandCholesky
    + PackedCholesky
    + Cholesky
    + PackedIndefinite
    + Norms
    + PackedTridiagonal
    + GeneralizedEigen
    + Geev
    + LeastSquares
    + Orthogonal
    + Auxiliary
{
    unsafe fn pbsv(
        uplo: c_char,
        n: LapackInt,
        kd: LapackInt,
        nrhs: LapackInt,
        ab: &mut [Self],
        ldab: LapackInt,
        b: &mut [Self],
        ldb: LapackInt,
    ) -> LapackInt;
    unsafe fn pbtrf(uplo: c_char, n: LapackInt, kd: LapackInt, ab: &mut [Self], ldab: LapackInt) -> LapackInt;
    unsafe fn pbtrs(
        uplo: c_char,
        n: LapackInt,
        kd: LapackInt,
        nrhs: LapackInt,
        ab: &[Self],
        ldab: LapackInt,
        b: &mut [Self],
        ldb: LapackInt,
    ) -> LapackInt;
    unsafe fn ppsv(uplo: c_char, n: LapackInt, nrhs: LapackInt, ap: &mut [Self], b: &mut [Self], ldb: LapackInt)
        -> LapackInt;
    unsafe fn pptrf(uplo: c_char, n: LapackInt, ap: &mut [Self]) -> LapackInt;
    unsafe fn pptri(uplo: c_char, n: LapackInt, ap: &mut [Self]) -> LapackInt;
    unsafe fn potrf(uplo: c_char, n: LapackInt, a: &mut [Self], lda: LapackInt) -> LapackInt;
    unsafe fn pocon(
        uplo: c_char,
        n: LapackInt,
        a: &[Self],
        lda: LapackInt,
        anorm: Self::Real,
        rcond: &mut Self::Real,
    ) -> LapackInt;
    unsafe fn sptrf(uplo: c_char, n: LapackInt, ap: &mut [Self], ipiv: &mut [LapackInt]) -> LapackInt;
    unsafe fn spcon(
        uplo: c_char,
        n: LapackInt,
        ap: &[Self],
        ipiv: &[LapackInt],
        anorm: Self::Real,
        rcond: &mut Self::Real,
    ) -> LapackInt;
    unsafe fn hptrf(uplo: c_char, n: LapackInt, ap: &mut [Self], ipiv: &mut [LapackInt]) -> LapackInt;
    unsafe fn hptrs(
        uplo: c_char,
        n: LapackInt,
        nrhs: LapackInt,
        ap: &[Self],
        ipiv: &[LapackInt],
        b: &mut [Self],
        ldb: LapackInt,
    ) -> LapackInt;
    unsafe fn hpcon(
        uplo: c_char,
        n: LapackInt,
        ap: &[Self],
        ipiv: &[LapackInt],
        anorm: Self::Real,
        rcond: &mut Self::Real,
    ) -> LapackInt;
    unsafe fn lantp(norm: c_char, uplo: c_char, diag: c_char, n: LapackInt, ap: &[Self]) -> Self::Real;
    unsafe fn lanhp(norm: c_char, uplo: c_char, n: LapackInt, ap: &[Self]) -> Self::Real;
    unsafe fn lange(norm: c_char, m: LapackInt, n: LapackInt, a: &[Self], lda: LapackInt) -> Self::Real;
    unsafe fn lanhe(norm: c_char, uplo: c_char, n: LapackInt, a: &[Self], lda: LapackInt) -> Self::Real;
    unsafe fn hptrd(
        uplo: c_char,
        n: LapackInt,
        ap: &mut [Self],
        d: &mut [Self::Real],
        e: &mut [Self::Real],
        tau: &mut [Self],
    ) -> LapackInt;
    unsafe fn hpgv(
        itype: LapackInt,
        jobz: c_char,
        uplo: c_char,
        n: LapackInt,
        ap: &mut [Self],
        bp: &mut [Self],
        w: &mut [Self::Real],
        z: &mut [Self],
        ldz: LapackInt,
    ) -> LapackInt;
    unsafe fn hbgvx(
        jobz: c_char,
        range: c_char,
        uplo: c_char,
        n: LapackInt,
        ka: LapackInt,
        kb: LapackInt,
        ab: &mut [Self],
        ldab: LapackInt,
        bb: &mut [Self],
        ldbb: LapackInt,
        q: &mut [Self],
        ldq: LapackInt,
        vl: Self::Real,
        vu: Self::Real,
        il: LapackInt,
        iu: LapackInt,
        abstol: Self::Real,
        m: &mut LapackInt,
        w: &mut [Self::Real],
        z: &mut [Self],
        ldz: LapackInt,
        ifail: &mut [LapackInt],
    ) -> LapackInt;
    unsafe fn geev(
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
    ) -> LapackInt;
    unsafe fn gelss(
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
    ) -> LapackInt;
    unsafe fn gelsd(
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
    ) -> LapackInt;
    unsafe fn geqrf(m: LapackInt, n: LapackInt, a: &mut [Self], lda: LapackInt, tau: &mut [Self]) -> LapackInt;
    unsafe fn gelqf(m: LapackInt, n: LapackInt, a: &mut [Self], lda: LapackInt, tau: &mut [Self]) -> LapackInt;
    unsafe fn ggrqf(
        m: LapackInt,
        p: LapackInt,
        n: LapackInt,
        a: &mut [Self],
        lda: LapackInt,
        taua: &mut [Self],
        b: &mut [Self],
        ldb: LapackInt,
        taub: &mut [Self],
    ) -> LapackInt;
    unsafe fn unglq(m: LapackInt, n: LapackInt, k: LapackInt, a: &mut [Self], lda: LapackInt, tau: &[Self])
        -> LapackInt;
    unsafe fn lacpy(
        uplo: c_char,
        m: LapackInt,
        n: LapackInt,
        a: &[Self],
        lda: LapackInt,
        b: &mut [Self],
        ldb: LapackInt,
    ) -> LapackInt;
    unsafe fn geequ(
        m: LapackInt,
        n: LapackInt,
        a: &[Self],
        lda: LapackInt,
        r: &mut [Self::Real],
        c: &mut [Self::Real],
        rowcnd: &mut Self::Real,
        colcnd: &mut Self::Real,
        amax: &mut Self::Real,
    ) -> LapackInt;
}

macro_rules! geev_reference {
    (real, $t:ty, $geev:ident) => {
        unsafe fn geev(
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
        ) -> LapackInt {
            let len = w.len().max(1);
            let mut wr: Vec<$t> = vec![0.0; len];
            let mut wi: Vec<$t> = vec![0.0; len];
            let info = $geev(
                LAPACK_COL_MAJOR,
                jobvl,
                jobvr,
                n,
                a.as_mut_ptr(),
                lda,
                wr.as_mut_ptr(),
                wi.as_mut_ptr(),
                vl.as_mut_ptr(),
                ldvl,
                vr.as_mut_ptr(),
                ldvr,
            );
            for ((dst, &re), &im) in w.iter_mut().zip(&wr).zip(&wi) {
                *dst = Complex::new(re, im);
            }
            info
        }
    };
    (complex, $t:ty, $geev:ident) => {
        unsafe fn geev(
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
        ) -> LapackInt {
            $geev(
                LAPACK_COL_MAJOR,
                jobvl,
                jobvr,
                n,
                a.as_mut_ptr(),
                lda,
                w.as_mut_ptr(),
                vl.as_mut_ptr(),
                ldvl,
                vr.as_mut_ptr(),
                ldvr,
            )
        }
    };
}

macro_rules! impl_reference {
    (
        $t:ty, $r:ty, $kind:ident, {
            pbsv: $pbsv:ident, pbtrf: $pbtrf:ident, pbtrs: $pbtrs:ident,
            ppsv: $ppsv:ident, pptrf: $pptrf:ident, pptri: $pptri:ident,
            potrf: $potrf:ident, pocon: $pocon:ident,
            sptrf: $sptrf:ident, spcon: $spcon:ident,
            hptrf: $hptrf:ident, hptrs: $hptrs:ident, hpcon: $hpcon:ident,
            lantp: $lantp:ident, lanhp: $lanhp:ident, lange: $lange:ident, lanhe: $lanhe:ident,
            hptrd: $hptrd:ident, hpgv: $hpgv:ident, hbgvx: $hbgvx:ident, geev: $geev:ident,
            gelss: $gelss:ident, gelsd: $gelsd:ident,
            geqrf: $geqrf:ident, gelqf: $gelqf:ident, ggrqf: $ggrqf:ident, unglq: $unglq:ident,
            lacpy: $lacpy:ident, geequ: $geequ:ident $(,)?
        }
    ) => {
        impl Reference for $t {
            unsafe fn pbsv(
                uplo: c_char,
                n: LapackInt,
                kd: LapackInt,
                nrhs: LapackInt,
                ab: &mut [Self],
                ldab: LapackInt,
                b: &mut [Self],
                ldb: LapackInt,
            ) -> LapackInt {
                $pbsv(LAPACK_COL_MAJOR, uplo, n, kd, nrhs, ab.as_mut_ptr(), ldab, b.as_mut_ptr(), ldb)
            }

            unsafe fn pbtrf(uplo: c_char, n: LapackInt, kd: LapackInt, ab: &mut [Self], ldab: LapackInt) -> LapackInt {
                $pbtrf(LAPACK_COL_MAJOR, uplo, n, kd, ab.as_mut_ptr(), ldab)
            }

            unsafe fn pbtrs(
                uplo: c_char,
                n: LapackInt,
                kd: LapackInt,
                nrhs: LapackInt,
                ab: &[Self],
                ldab: LapackInt,
                b: &mut [Self],
                ldb: LapackInt,
            ) -> LapackInt {
                $pbtrs(LAPACK_COL_MAJOR, uplo, n, kd, nrhs, ab.as_ptr(), ldab, b.as_mut_ptr(), ldb)
            }

            unsafe fn ppsv(
                uplo: c_char,
                n: LapackInt,
                nrhs: LapackInt,
                ap: &mut [Self],
                b: &mut [Self],
                ldb: LapackInt,
            ) -> LapackInt {
                $ppsv(LAPACK_COL_MAJOR, uplo, n, nrhs, ap.as_mut_ptr(), b.as_mut_ptr(), ldb)
            }

            unsafe fn pptrf(uplo: c_char, n: LapackInt, ap: &mut [Self]) -> LapackInt {
                $pptrf(LAPACK_COL_MAJOR, uplo, n, ap.as_mut_ptr())
            }

            unsafe fn pptri(uplo: c_char, n: LapackInt, ap: &mut [Self]) -> LapackInt {
                $pptri(LAPACK_COL_MAJOR, uplo, n, ap.as_mut_ptr())
            }

            unsafe fn potrf(uplo: c_char, n: LapackInt, a: &mut [Self], lda: LapackInt) -> LapackInt {
                $potrf(LAPACK_COL_MAJOR, uplo, n, a.as_mut_ptr(), lda)
            }

            unsafe fn pocon(
                uplo: c_char,
                n: LapackInt,
                a: &[Self],
                lda: LapackInt,
                anorm: $r,
                rcond: &mut $r,
            ) -> LapackInt {
                $pocon(LAPACK_COL_MAJOR, uplo, n, a.as_ptr(), lda, anorm, rcond)
            }

            unsafe fn sptrf(uplo: c_char, n: LapackInt, ap: &mut [Self], ipiv: &mut [LapackInt]) -> LapackInt {
                $sptrf(LAPACK_COL_MAJOR, uplo, n, ap.as_mut_ptr(), ipiv.as_mut_ptr())
            }

            unsafe fn spcon(
                uplo: c_char,
                n: LapackInt,
                ap: &[Self],
                ipiv: &[LapackInt],
                anorm: $r,
                rcond: &mut $r,
            ) -> LapackInt {
                $spcon(LAPACK_COL_MAJOR, uplo, n, ap.as_ptr(), ipiv.as_ptr(), anorm, rcond)
            }

            unsafe fn hptrf(uplo: c_char, n: LapackInt, ap: &mut [Self], ipiv: &mut [LapackInt]) -> LapackInt {
                $hptrf(LAPACK_COL_MAJOR, uplo, n, ap.as_mut_ptr(), ipiv.as_mut_ptr())
            }

            unsafe fn hptrs(
                uplo: c_char,
                n: LapackInt,
                nrhs: LapackInt,
                ap: &[Self],
                ipiv: &[LapackInt],
                b: &mut [Self],
                ldb: LapackInt,
            ) -> LapackInt {
                $hptrs(LAPACK_COL_MAJOR, uplo, n, nrhs, ap.as_ptr(), ipiv.as_ptr(), b.as_mut_ptr(), ldb)
            }

            unsafe fn hpcon(
                uplo: c_char,
                n: LapackInt,
                ap: &[Self],
                ipiv: &[LapackInt],
                anorm: $r,
                rcond: &mut $r,
            ) -> LapackInt {
                $hpcon(LAPACK_COL_MAJOR, uplo, n, ap.as_ptr(), ipiv.as_ptr(), anorm, rcond)
            }

            unsafe fn lantp(norm: c_char, uplo: c_char, diag: c_char, n: LapackInt, ap: &[Self]) -> $r {
                let mut work: Vec<$r> = vec![0.0; (n.max(1)) as usize];
                ffi::$lantp(&norm, &uplo, &diag, &n, ap.as_ptr(), work.as_mut_ptr()) as $r
            }

            unsafe fn lanhp(norm: c_char, uplo: c_char, n: LapackInt, ap: &[Self]) -> $r {
                let mut work: Vec<$r> = vec![0.0; (n.max(1)) as usize];
                ffi::$lanhp(&norm, &uplo, &n, ap.as_ptr(), work.as_mut_ptr()) as $r
            }

            unsafe fn lange(norm: c_char, m: LapackInt, n: LapackInt, a: &[Self], lda: LapackInt) -> $r {
                $lange(LAPACK_COL_MAJOR, norm, m, n, a.as_ptr(), lda)
            }

            unsafe fn lanhe(norm: c_char, uplo: c_char, n: LapackInt, a: &[Self], lda: LapackInt) -> $r {
                $lanhe(LAPACK_COL_MAJOR, norm, uplo, n, a.as_ptr(), lda)
            }

            unsafe fn hptrd(
                uplo: c_char,
                n: LapackInt,
                ap: &mut [Self],
                d: &mut [$r],
                e: &mut [$r],
                tau: &mut [Self],
            ) -> LapackInt {
                $hptrd(
                    LAPACK_COL_MAJOR,
                    uplo,
                    n,
                    ap.as_mut_ptr(),
                    d.as_mut_ptr(),
                    e.as_mut_ptr(),
                    tau.as_mut_ptr(),
                )
            }

            unsafe fn hpgv(
                itype: LapackInt,
                jobz: c_char,
                uplo: c_char,
                n: LapackInt,
                ap: &mut [Self],
                bp: &mut [Self],
                w: &mut [$r],
                z: &mut [Self],
                ldz: LapackInt,
            ) -> LapackInt {
                $hpgv(
                    LAPACK_COL_MAJOR,
                    itype,
                    jobz,
                    uplo,
                    n,
                    ap.as_mut_ptr(),
                    bp.as_mut_ptr(),
                    w.as_mut_ptr(),
                    z.as_mut_ptr(),
                    ldz,
                )
            }

            unsafe fn hbgvx(
                jobz: c_char,
                range: c_char,
                uplo: c_char,
                n: LapackInt,
                ka: LapackInt,
                kb: LapackInt,
                ab: &mut [Self],
                ldab: LapackInt,
                bb: &mut [Self],
                ldbb: LapackInt,
                q: &mut [Self],
                ldq: LapackInt,
                vl: $r,
                vu: $r,
                il: LapackInt,
                iu: LapackInt,
                abstol: $r,
                m: &mut LapackInt,
                w: &mut [$r],
                z: &mut [Self],
                ldz: LapackInt,
                ifail: &mut [LapackInt],
            ) -> LapackInt {
                $hbgvx(
                    LAPACK_COL_MAJOR,
                    jobz,
                    range,
                    uplo,
                    n,
                    ka,
                    kb,
                    ab.as_mut_ptr(),
                    ldab,
                    bb.as_mut_ptr(),
                    ldbb,
                    q.as_mut_ptr(),
                    ldq,
                    vl,
                    vu,
                    il,
                    iu,
                    abstol,
                    m,
                    w.as_mut_ptr(),
                    z.as_mut_ptr(),
                    ldz,
                    ifail.as_mut_ptr(),
                )
            }

            geev_reference!($kind, $r, $geev);

            unsafe fn gelss(
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
            ) -> LapackInt {
                $gelss(
                    LAPACK_COL_MAJOR,
                    m,
                    n,
                    nrhs,
                    a.as_mut_ptr(),
                    lda,
                    b.as_mut_ptr(),
                    ldb,
                    s.as_mut_ptr(),
                    rcond,
                    rank,
                )
            }

            unsafe fn gelsd(
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
            ) -> LapackInt {
                $gelsd(
                    LAPACK_COL_MAJOR,
                    m,
                    n,
                    nrhs,
                    a.as_mut_ptr(),
                    lda,
                    b.as_mut_ptr(),
                    ldb,
                    s.as_mut_ptr(),
                    rcond,
                    rank,
                )
            }

            unsafe fn geqrf(m: LapackInt, n: LapackInt, a: &mut [Self], lda: LapackInt, tau: &mut [Self]) -> LapackInt {
                $geqrf(LAPACK_COL_MAJOR, m, n, a.as_mut_ptr(), lda, tau.as_mut_ptr())
            }

            unsafe fn gelqf(m: LapackInt, n: LapackInt, a: &mut [Self], lda: LapackInt, tau: &mut [Self]) -> LapackInt {
                $gelqf(LAPACK_COL_MAJOR, m, n, a.as_mut_ptr(), lda, tau.as_mut_ptr())
            }

            unsafe fn ggrqf(
                m: LapackInt,
                p: LapackInt,
                n: LapackInt,
                a: &mut [Self],
                lda: LapackInt,
                taua: &mut [Self],
                b: &mut [Self],
                ldb: LapackInt,
                taub: &mut [Self],
            ) -> LapackInt {
                $ggrqf(
                    LAPACK_COL_MAJOR,
                    m,
                    p,
                    n,
                    a.as_mut_ptr(),
                    lda,
                    taua.as_mut_ptr(),
                    b.as_mut_ptr(),
                    ldb,
                    taub.as_mut_ptr(),
                )
            }

            unsafe fn unglq(
                m: LapackInt,
                n: LapackInt,
                k: LapackInt,
                a: &mut [Self],
                lda: LapackInt,
                tau: &[Self],
            ) -> LapackInt {
                $unglq(LAPACK_COL_MAJOR, m, n, k, a.as_mut_ptr(), lda, tau.as_ptr())
            }

            unsafe fn lacpy(
                uplo: c_char,
                m: LapackInt,
                n: LapackInt,
                a: &[Self],
                lda: LapackInt,
                b: &mut [Self],
                ldb: LapackInt,
            ) -> LapackInt {
                $lacpy(LAPACK_COL_MAJOR, uplo, m, n, a.as_ptr(), lda, b.as_mut_ptr(), ldb)
            }

            unsafe fn geequ(
                m: LapackInt,
                n: LapackInt,
                a: &[Self],
                lda: LapackInt,
                r: &mut [$r],
                c: &mut [$r],
                rowcnd: &mut $r,
                colcnd: &mut $r,
                amax: &mut $r,
            ) -> LapackInt {
                $geequ(
                    LAPACK_COL_MAJOR,
                    m,
                    n,
                    a.as_ptr(),
                    lda,
                    r.as_mut_ptr(),
                    c.as_mut_ptr(),
                    rowcnd,
                    colcnd,
                    amax,
                )
            }
        }
    };
}

impl_reference!(f32, f32, real, {
    pbsv: LAPACKE_spbsv, pbtrf: LAPACKE_spbtrf, pbtrs: LAPACKE_spbtrs,
    ppsv: LAPACKE_sppsv, pptrf: LAPACKE_spptrf, pptri: LAPACKE_spptri,
    potrf: LAPACKE_spotrf, pocon: LAPACKE_spocon,
    sptrf: LAPACKE_ssptrf, spcon: LAPACKE_sspcon,
    hptrf: LAPACKE_ssptrf, hptrs: LAPACKE_ssptrs, hpcon: LAPACKE_sspcon,
    lantp: slantp_, lanhp: slansp_, lange: LAPACKE_slange, lanhe: LAPACKE_slansy,
    hptrd: LAPACKE_ssptrd, hpgv: LAPACKE_sspgv, hbgvx: LAPACKE_ssbgvx, geev: LAPACKE_sgeev,
    gelss: LAPACKE_sgelss, gelsd: LAPACKE_sgelsd,
    geqrf: LAPACKE_sgeqrf, gelqf: LAPACKE_sgelqf, ggrqf: LAPACKE_sggrqf, unglq: LAPACKE_sorglq,
    lacpy: LAPACKE_slacpy, geequ: LAPACKE_sgeequ,
});

impl_reference!(f64, f64, real, {
    pbsv: LAPACKE_dpbsv, pbtrf: LAPACKE_dpbtrf, pbtrs: LAPACKE_dpbtrs,
    ppsv: LAPACKE_dppsv, pptrf: LAPACKE_dpptrf, pptri: LAPACKE_dpptri,
    potrf: LAPACKE_dpotrf, pocon: LAPACKE_dpocon,
    sptrf: LAPACKE_dsptrf, spcon: LAPACKE_dspcon,
    hptrf: LAPACKE_dsptrf, hptrs: LAPACKE_dsptrs, hpcon: LAPACKE_dspcon,
    lantp: dlantp_, lanhp: dlansp_, lange: LAPACKE_dlange, lanhe: LAPACKE_dlansy,
    hptrd: LAPACKE_dsptrd, hpgv: LAPACKE_dspgv, hbgvx: LAPACKE_dsbgvx, geev: LAPACKE_dgeev,
    gelss: LAPACKE_dgelss, gelsd: LAPACKE_dgelsd,
    geqrf: LAPACKE_dgeqrf, gelqf: LAPACKE_dgelqf, ggrqf: LAPACKE_dggrqf, unglq: LAPACKE_dorglq,
    lacpy: LAPACKE_dlacpy, geequ: LAPACKE_dgeequ,
});

impl_reference!(c32, f32, complex, {
    pbsv: LAPACKE_cpbsv, pbtrf: LAPACKE_cpbtrf, pbtrs: LAPACKE_cpbtrs,
    ppsv: LAPACKE_cppsv, pptrf: LAPACKE_cpptrf, pptri: LAPACKE_cpptri,
    potrf: LAPACKE_cpotrf, pocon: LAPACKE_cpocon,
    sptrf: LAPACKE_csptrf, spcon: LAPACKE_cspcon,
    hptrf: LAPACKE_chptrf, hptrs: LAPACKE_chptrs, hpcon: LAPACKE_chpcon,
    lantp: clantp_, lanhp: clanhp_, lange: LAPACKE_clange, lanhe: LAPACKE_clanhe,
    hptrd: LAPACKE_chptrd, hpgv: LAPACKE_chpgv, hbgvx: LAPACKE_chbgvx, geev: LAPACKE_cgeev,
    gelss: LAPACKE_cgelss, gelsd: LAPACKE_cgelsd,
    geqrf: LAPACKE_cgeqrf, gelqf: LAPACKE_cgelqf, ggrqf: LAPACKE_cggrqf, unglq: LAPACKE_cunglq,
    lacpy: LAPACKE_clacpy, geequ: LAPACKE_cgeequ,
});

impl_reference!(c64, f64, complex, {
    pbsv: LAPACKE_zpbsv, pbtrf: LAPACKE_zpbtrf, pbtrs: LAPACKE_zpbtrs,
    ppsv: LAPACKE_zppsv, pptrf: LAPACKE_zpptrf, pptri: LAPACKE_zpptri,
    potrf: LAPACKE_zpotrf, pocon: LAPACKE_zpocon,
    sptrf: LAPACKE_zsptrf, spcon: LAPACKE_zspcon,
    hptrf: LAPACKE_zhptrf, hptrs: LAPACKE_zhptrs, hpcon: LAPACKE_zhpcon,
    lantp: zlantp_, lanhp: zlanhp_, lange: LAPACKE_zlange, lanhe: LAPACKE_zlanhe,
    hptrd: LAPACKE_zhptrd, hpgv: LAPACKE_zhpgv, hbgvx: LAPACKE_zhbgvx, geev: LAPACKE_zgeev,
    gelss: LAPACKE_zgelss, gelsd: LAPACKE_zgelsd,
    geqrf: LAPACKE_zgeqrf, gelqf: LAPACKE_zgelqf, ggrqf: LAPACKE_zggrqf, unglq: LAPACKE_zunglq,
    lacpy: LAPACKE_zlacpy, geequ: LAPACKE_zgeequ,
});

