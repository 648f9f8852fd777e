//! Raw Fortran LAPACK entry points.
//!
//! Symbols use the common lower-case, trailing-underscore mangling. Every argument is
//! passed by pointer; character arguments are single characters and their hidden length
//! arguments are omitted. Complex arrays are `num_complex::Complex`, which is
//! `#[repr(C)]` and layout-compatible with Fortran `COMPLEX`.

#![allow(clippy::too_many_arguments)]

use libc::c_char;

use crate::marshal::LapackInt;
use crate::scalar::{c32, c64};

/// What single-precision REAL functions (`slantp`, `clanhp`, ...) return at the ABI.
#[cfg(not(feature = "f2c"))]
pub type FloatRet = f32;

/// What single-precision REAL functions (`slantp`, `clanhp`, ...) return at the ABI.
#[cfg(feature = "f2c")]
pub type FloatRet = f64;

macro_rules! pbsv {
    ($name:ident, $t:ty) => {
        pub fn $name(
            uplo: *const c_char,
            n: *const LapackInt,
            kd: *const LapackInt,
            nrhs: *const LapackInt,
            ab: *mut $t,
            ldab: *const LapackInt,
            b: *mut $t,
            ldb: *const LapackInt,
            info: *mut LapackInt,
        );
    };
}

macro_rules! pbtrf {
    ($name:ident, $t:ty) => {
        pub fn $name(
            uplo: *const c_char,
            n: *const LapackInt,
            kd: *const LapackInt,
            ab: *mut $t,
            ldab: *const LapackInt,
            info: *mut LapackInt,
        );
    };
}

macro_rules! pbtrs {
    ($name:ident, $t:ty) => {
        pub fn $name(
            uplo: *const c_char,
            n: *const LapackInt,
            kd: *const LapackInt,
            nrhs: *const LapackInt,
            ab: *const $t,
            ldab: *const LapackInt,
            b: *mut $t,
            ldb: *const LapackInt,
            info: *mut LapackInt,
        );
    };
}

macro_rules! ppsv {
    ($name:ident, $t:ty) => {
        pub fn $name(
            uplo: *const c_char,
            n: *const LapackInt,
            nrhs: *const LapackInt,
            ap: *mut $t,
            b: *mut $t,
            ldb: *const LapackInt,
            info: *mut LapackInt,
        );
    };
}

// pptrf, pptri
macro_rules! packed_inplace {
    ($name:ident, $t:ty) => {
        pub fn $name(uplo: *const c_char, n: *const LapackInt, ap: *mut $t, info: *mut LapackInt);
    };
}

macro_rules! potrf {
    ($name:ident, $t:ty) => {
        pub fn $name(
            uplo: *const c_char,
            n: *const LapackInt,
            a: *mut $t,
            lda: *const LapackInt,
            info: *mut LapackInt,
        );
    };
}

macro_rules! pocon_real {
    ($name:ident, $t:ty) => {
        pub fn $name(
            uplo: *const c_char,
            n: *const LapackInt,
            a: *const $t,
            lda: *const LapackInt,
            anorm: *const $t,
            rcond: *mut $t,
            work: *mut $t,
            iwork: *mut LapackInt,
            info: *mut LapackInt,
        );
    };
}

macro_rules! pocon_complex {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            uplo: *const c_char,
            n: *const LapackInt,
            a: *const $t,
            lda: *const LapackInt,
            anorm: *const $r,
            rcond: *mut $r,
            work: *mut $t,
            rwork: *mut $r,
            info: *mut LapackInt,
        );
    };
}

// sptrf, hptrf
macro_rules! packed_trf {
    ($name:ident, $t:ty) => {
        pub fn $name(
            uplo: *const c_char,
            n: *const LapackInt,
            ap: *mut $t,
            ipiv: *mut LapackInt,
            info: *mut LapackInt,
        );
    };
}

// sptrs, hptrs
macro_rules! packed_trs {
    ($name:ident, $t:ty) => {
        pub fn $name(
            uplo: *const c_char,
            n: *const LapackInt,
            nrhs: *const LapackInt,
            ap: *const $t,
            ipiv: *const LapackInt,
            b: *mut $t,
            ldb: *const LapackInt,
            info: *mut LapackInt,
        );
    };
}

macro_rules! packed_con_real {
    ($name:ident, $t:ty) => {
        pub fn $name(
            uplo: *const c_char,
            n: *const LapackInt,
            ap: *const $t,
            ipiv: *const LapackInt,
            anorm: *const $t,
            rcond: *mut $t,
            work: *mut $t,
            iwork: *mut LapackInt,
            info: *mut LapackInt,
        );
    };
}

macro_rules! packed_con_complex {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            uplo: *const c_char,
            n: *const LapackInt,
            ap: *const $t,
            ipiv: *const LapackInt,
            anorm: *const $r,
            rcond: *mut $r,
            work: *mut $t,
            info: *mut LapackInt,
        );
    };
}

macro_rules! lantp {
    ($name:ident, $t:ty, $r:ty, $ret:ty) => {
        pub fn $name(
            norm: *const c_char,
            uplo: *const c_char,
            diag: *const c_char,
            n: *const LapackInt,
            ap: *const $t,
            work: *mut $r,
        ) -> $ret;
    };
}

// lansp, lanhp
macro_rules! lanhp {
    ($name:ident, $t:ty, $r:ty, $ret:ty) => {
        pub fn $name(
            norm: *const c_char,
            uplo: *const c_char,
            n: *const LapackInt,
            ap: *const $t,
            work: *mut $r,
        ) -> $ret;
    };
}

macro_rules! lange {
    ($name:ident, $t:ty, $r:ty, $ret:ty) => {
        pub fn $name(
            norm: *const c_char,
            m: *const LapackInt,
            n: *const LapackInt,
            a: *const $t,
            lda: *const LapackInt,
            work: *mut $r,
        ) -> $ret;
    };
}

// lansy, lanhe
macro_rules! lanhe {
    ($name:ident, $t:ty, $r:ty, $ret:ty) => {
        pub fn $name(
            norm: *const c_char,
            uplo: *const c_char,
            n: *const LapackInt,
            a: *const $t,
            lda: *const LapackInt,
            work: *mut $r,
        ) -> $ret;
    };
}

// sptrd, hptrd
macro_rules! hptrd {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            uplo: *const c_char,
            n: *const LapackInt,
            ap: *mut $t,
            d: *mut $r,
            e: *mut $r,
            tau: *mut $t,
            info: *mut LapackInt,
        );
    };
}

macro_rules! spgv {
    ($name:ident, $t:ty) => {
        pub fn $name(
            itype: *const LapackInt,
            jobz: *const c_char,
            uplo: *const c_char,
            n: *const LapackInt,
            ap: *mut $t,
            bp: *mut $t,
            w: *mut $t,
            z: *mut $t,
            ldz: *const LapackInt,
            work: *mut $t,
            info: *mut LapackInt,
        );
    };
}

macro_rules! hpgv {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            itype: *const LapackInt,
            jobz: *const c_char,
            uplo: *const c_char,
            n: *const LapackInt,
            ap: *mut $t,
            bp: *mut $t,
            w: *mut $r,
            z: *mut $t,
            ldz: *const LapackInt,
            work: *mut $t,
            rwork: *mut $r,
            info: *mut LapackInt,
        );
    };
}

macro_rules! sbgvx {
    ($name:ident, $t:ty) => {
        pub fn $name(
            jobz: *const c_char,
            range: *const c_char,
            uplo: *const c_char,
            n: *const LapackInt,
            ka: *const LapackInt,
            kb: *const LapackInt,
            ab: *mut $t,
            ldab: *const LapackInt,
            bb: *mut $t,
            ldbb: *const LapackInt,
            q: *mut $t,
            ldq: *const LapackInt,
            vl: *const $t,
            vu: *const $t,
            il: *const LapackInt,
            iu: *const LapackInt,
            abstol: *const $t,
            m: *mut LapackInt,
            w: *mut $t,
            z: *mut $t,
            ldz: *const LapackInt,
            work: *mut $t,
            iwork: *mut LapackInt,
            ifail: *mut LapackInt,
            info: *mut LapackInt,
        );
    };
}

macro_rules! hbgvx {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            jobz: *const c_char,
            range: *const c_char,
            uplo: *const c_char,
            n: *const LapackInt,
            ka: *const LapackInt,
            kb: *const LapackInt,
            ab: *mut $t,
            ldab: *const LapackInt,
            bb: *mut $t,
            ldbb: *const LapackInt,
            q: *mut $t,
            ldq: *const LapackInt,
            vl: *const $r,
            vu: *const $r,
            il: *const LapackInt,
            iu: *const LapackInt,
            abstol: *const $r,
            m: *mut LapackInt,
            w: *mut $r,
            z: *mut $t,
            ldz: *const LapackInt,
            work: *mut $t,
            rwork: *mut $r,
            iwork: *mut LapackInt,
            ifail: *mut LapackInt,
            info: *mut LapackInt,
        );
    };
}

macro_rules! geev_real {
    ($name:ident, $t:ty) => {
        pub fn $name(
            jobvl: *const c_char,
            jobvr: *const c_char,
            n: *const LapackInt,
            a: *mut $t,
            lda: *const LapackInt,
            wr: *mut $t,
            wi: *mut $t,
            vl: *mut $t,
            ldvl: *const LapackInt,
            vr: *mut $t,
            ldvr: *const LapackInt,
            work: *mut $t,
            lwork: *const LapackInt,
            info: *mut LapackInt,
        );
    };
}

macro_rules! geev_complex {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            jobvl: *const c_char,
            jobvr: *const c_char,
            n: *const LapackInt,
            a: *mut $t,
            lda: *const LapackInt,
            w: *mut $t,
            vl: *mut $t,
            ldvl: *const LapackInt,
            vr: *mut $t,
            ldvr: *const LapackInt,
            work: *mut $t,
            lwork: *const LapackInt,
            rwork: *mut $r,
            info: *mut LapackInt,
        );
    };
}

macro_rules! gelss_real {
    ($name:ident, $t:ty) => {
        pub fn $name(
            m: *const LapackInt,
            n: *const LapackInt,
            nrhs: *const LapackInt,
            a: *mut $t,
            lda: *const LapackInt,
            b: *mut $t,
            ldb: *const LapackInt,
            s: *mut $t,
            rcond: *const $t,
            rank: *mut LapackInt,
            work: *mut $t,
            lwork: *const LapackInt,
            info: *mut LapackInt,
        );
    };
}

macro_rules! gelss_complex {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            m: *const LapackInt,
            n: *const LapackInt,
            nrhs: *const LapackInt,
            a: *mut $t,
            lda: *const LapackInt,
            b: *mut $t,
            ldb: *const LapackInt,
            s: *mut $r,
            rcond: *const $r,
            rank: *mut LapackInt,
            work: *mut $t,
            lwork: *const LapackInt,
            rwork: *mut $r,
            info: *mut LapackInt,
        );
    };
}

macro_rules! gelsd_real {
    ($name:ident, $t:ty) => {
        pub fn $name(
            m: *const LapackInt,
            n: *const LapackInt,
            nrhs: *const LapackInt,
            a: *mut $t,
            lda: *const LapackInt,
            b: *mut $t,
            ldb: *const LapackInt,
            s: *mut $t,
            rcond: *const $t,
            rank: *mut LapackInt,
            work: *mut $t,
            lwork: *const LapackInt,
            iwork: *mut LapackInt,
            info: *mut LapackInt,
        );
    };
}

macro_rules! gelsd_complex {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            m: *const LapackInt,
            n: *const LapackInt,
            nrhs: *const LapackInt,
            a: *mut $t,
            lda: *const LapackInt,
            b: *mut $t,
            ldb: *const LapackInt,
            s: *mut $r,
            rcond: *const $r,
            rank: *mut LapackInt,
            work: *mut $t,
            lwork: *const LapackInt,
            rwork: *mut $r,
            iwork: *mut LapackInt,
            info: *mut LapackInt,
        );
    };
}

// geqrf, gelqf
macro_rules! gexxf {
    ($name:ident, $t:ty) => {
        pub fn $name(
            m: *const LapackInt,
            n: *const LapackInt,
            a: *mut $t,
            lda: *const LapackInt,
            tau: *mut $t,
            work: *mut $t,
            lwork: *const LapackInt,
            info: *mut LapackInt,
        );
    };
}

macro_rules! ggrqf {
    ($name:ident, $t:ty) => {
        pub fn $name(
            m: *const LapackInt,
            p: *const LapackInt,
            n: *const LapackInt,
            a: *mut $t,
            lda: *const LapackInt,
            taua: *mut $t,
            b: *mut $t,
            ldb: *const LapackInt,
            taub: *mut $t,
            work: *mut $t,
            lwork: *const LapackInt,
            info: *mut LapackInt,
        );
    };
}

// orglq, unglq
macro_rules! unglq {
    ($name:ident, $t:ty) => {
        pub fn $name(
            m: *const LapackInt,
            n: *const LapackInt,
            k: *const LapackInt,
            a: *mut $t,
            lda: *const LapackInt,
            tau: *const $t,
            work: *mut $t,
            lwork: *const LapackInt,
            info: *mut LapackInt,
        );
    };
}

macro_rules! lacpy {
    ($name:ident, $t:ty) => {
        pub fn $name(
            uplo: *const c_char,
            m: *const LapackInt,
            n: *const LapackInt,
            a: *const $t,
            lda: *const LapackInt,
            b: *mut $t,
            ldb: *const LapackInt,
        );
    };
}

macro_rules! geequ {
    ($name:ident, $t:ty, $r:ty) => {
        pub fn $name(
            m: *const LapackInt,
            n: *const LapackInt,
            a: *const $t,
            lda: *const LapackInt,
            r: *mut $r,
            c: *mut $r,
            rowcnd: *mut $r,
            colcnd: *mut $r,
            amax: *mut $r,
            info: *mut LapackInt,
        );
    };
}

extern "C" {
    pbsv!(spbsv_, f32);
    pbsv!(dpbsv_, f64);
    pbsv!(cpbsv_, c32);
    pbsv!(zpbsv_, c64);

    pbtrf!(spbtrf_, f32);
    pbtrf!(dpbtrf_, f64);
    pbtrf!(cpbtrf_, c32);
    pbtrf!(zpbtrf_, c64);

    pbtrs!(spbtrs_, f32);
    pbtrs!(dpbtrs_, f64);
    pbtrs!(cpbtrs_, c32);
    pbtrs!(zpbtrs_, c64);

    ppsv!(sppsv_, f32);
    ppsv!(dppsv_, f64);
    ppsv!(cppsv_, c32);
    ppsv!(zppsv_, c64);

    packed_inplace!(spptrf_, f32);
    packed_inplace!(dpptrf_, f64);
    packed_inplace!(cpptrf_, c32);
    packed_inplace!(zpptrf_, c64);

    packed_inplace!(spptri_, f32);
    packed_inplace!(dpptri_, f64);
    packed_inplace!(cpptri_, c32);
    packed_inplace!(zpptri_, c64);

    potrf!(spotrf_, f32);
    potrf!(dpotrf_, f64);
    potrf!(cpotrf_, c32);
    potrf!(zpotrf_, c64);

    pocon_real!(spocon_, f32);
    pocon_real!(dpocon_, f64);
    pocon_complex!(cpocon_, c32, f32);
    pocon_complex!(zpocon_, c64, f64);

    packed_trf!(ssptrf_, f32);
    packed_trf!(dsptrf_, f64);
    packed_trf!(csptrf_, c32);
    packed_trf!(zsptrf_, c64);
    packed_trf!(chptrf_, c32);
    packed_trf!(zhptrf_, c64);

    packed_trs!(ssptrs_, f32);
    packed_trs!(dsptrs_, f64);
    packed_trs!(chptrs_, c32);
    packed_trs!(zhptrs_, c64);

    packed_con_real!(sspcon_, f32);
    packed_con_real!(dspcon_, f64);
    packed_con_complex!(cspcon_, c32, f32);
    packed_con_complex!(zspcon_, c64, f64);
    packed_con_complex!(chpcon_, c32, f32);
    packed_con_complex!(zhpcon_, c64, f64);

    lantp!(slantp_, f32, f32, FloatRet);
    lantp!(dlantp_, f64, f64, f64);
    lantp!(clantp_, c32, f32, FloatRet);
    lantp!(zlantp_, c64, f64, f64);

    lanhp!(slansp_, f32, f32, FloatRet);
    lanhp!(dlansp_, f64, f64, f64);
    lanhp!(clanhp_, c32, f32, FloatRet);
    lanhp!(zlanhp_, c64, f64, f64);

    lange!(slange_, f32, f32, FloatRet);
    lange!(dlange_, f64, f64, f64);
    lange!(clange_, c32, f32, FloatRet);
    lange!(zlange_, c64, f64, f64);

    lanhe!(slansy_, f32, f32, FloatRet);
    lanhe!(dlansy_, f64, f64, f64);
    lanhe!(clanhe_, c32, f32, FloatRet);
    lanhe!(zlanhe_, c64, f64, f64);

    hptrd!(ssptrd_, f32, f32);
    hptrd!(dsptrd_, f64, f64);
    hptrd!(chptrd_, c32, f32);
    hptrd!(zhptrd_, c64, f64);

    spgv!(sspgv_, f32);
    spgv!(dspgv_, f64);
    hpgv!(chpgv_, c32, f32);
    hpgv!(zhpgv_, c64, f64);

    sbgvx!(ssbgvx_, f32);
    sbgvx!(dsbgvx_, f64);
    hbgvx!(chbgvx_, c32, f32);
    hbgvx!(zhbgvx_, c64, f64);

    geev_real!(sgeev_, f32);
    geev_real!(dgeev_, f64);
    geev_complex!(cgeev_, c32, f32);
    geev_complex!(zgeev_, c64, f64);

    gelss_real!(sgelss_, f32);
    gelss_real!(dgelss_, f64);
    gelss_complex!(cgelss_, c32, f32);
    gelss_complex!(zgelss_, c64, f64);

    gelsd_real!(sgelsd_, f32);
    gelsd_real!(dgelsd_, f64);
    gelsd_complex!(cgelsd_, c32, f32);
    gelsd_complex!(zgelsd_, c64, f64);

    gexxf!(sgeqrf_, f32);
    gexxf!(dgeqrf_, f64);
    gexxf!(cgeqrf_, c32);
    gexxf!(zgeqrf_, c64);

    gexxf!(sgelqf_, f32);
    gexxf!(dgelqf_, f64);
    gexxf!(cgelqf_, c32);
    gexxf!(zgelqf_, c64);

    ggrqf!(sggrqf_, f32);
    ggrqf!(dggrqf_, f64);
    ggrqf!(cggrqf_, c32);
    ggrqf!(zggrqf_, c64);

    unglq!(sorglq_, f32);
    unglq!(dorglq_, f64);
    unglq!(cunglq_, c32);
    unglq!(zunglq_, c64);

    lacpy!(slacpy_, f32);
    lacpy!(dlacpy_, f64);
    lacpy!(clacpy_, c32);
    lacpy!(zlacpy_, c64);

    geequ!(sgeequ_, f32, f32);
    geequ!(dgeequ_, f64, f64);
    geequ!(cgeequ_, c32, f32);
    geequ!(zgeequ_, c64, f64);
}
