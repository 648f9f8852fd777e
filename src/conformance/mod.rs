//! Wrapper-versus-LAPACKE conformance checks.
//!
//! A case generates inputs from a seed, runs the wrapper and the LAPACKE reference on
//! identical copies, and scores the difference. Deterministic routines must agree
//! exactly; eigenvector and eigenvalue outputs are held to `tol * eps`. A mismatch is
//! recorded in the [`CaseReport`], never raised.

pub mod compare;
pub mod generate;
pub mod lapacke;
pub mod report;

mod check;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::flags::{Diag, Job, MatrixType, Norm, Range, Uplo};
use crate::scalar::ScalarKind;

/// Harness failures; a numerical mismatch is not one of them.
#[derive(Error, Debug)]
pub enum Error {
    /// The wrapper refused the generated arguments
    #[error(transparent)]
    Wrapper(#[from] crate::Error),

    #[error("{routine} has no {kind} variant")]
    Unsupported { routine: Routine, kind: ScalarKind },

    #[error("{routine}: {reason}")]
    InvalidParams { routine: Routine, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// How a routine gets its scratch memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkspaceKind {
    None,
    ClosedForm,
    Query,
}

impl fmt::Display for WorkspaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WorkspaceKind::None => "none",
            WorkspaceKind::ClosedForm => "closed-form",
            WorkspaceKind::Query => "query",
        })
    }
}

macro_rules! routine_enum {
    ($($variant:ident => $name:literal, $workspace:ident;)+) => {
        /// Every routine the crate wraps.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Routine {
            $($variant,)+
        }

        impl Routine {
            pub const ALL: &'static [Routine] = &[$(Routine::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $(Routine::$variant => $name,)+
                }
            }

            pub fn workspace(self) -> WorkspaceKind {
                match self {
                    $(Routine::$variant => WorkspaceKind::$workspace,)+
                }
            }
        }

        impl FromStr for Routine {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.to_ascii_lowercase().as_str() {
                    $($name => Ok(Routine::$variant),)+
                    other => Err(format!("unknown routine '{}' (see `lapackx list`)", other)),
                }
            }
        }
    };
}

routine_enum! {
    Pbsv => "pbsv", None;
    Pbtrf => "pbtrf", None;
    Pbtrs => "pbtrs", None;
    Ppsv => "ppsv", None;
    Pptrf => "pptrf", None;
    Pptri => "pptri", None;
    Potrf => "potrf", None;
    Pocon => "pocon", ClosedForm;
    Sptrf => "sptrf", None;
    Spcon => "spcon", ClosedForm;
    Hptrf => "hptrf", None;
    Hptrs => "hptrs", None;
    Hpcon => "hpcon", ClosedForm;
    Lantp => "lantp", ClosedForm;
    Lanhp => "lanhp", ClosedForm;
    Lange => "lange", ClosedForm;
    Lanhe => "lanhe", ClosedForm;
    Hptrd => "hptrd", None;
    Hpgv => "hpgv", ClosedForm;
    Hbgvx => "hbgvx", ClosedForm;
    Sbgvx => "sbgvx", ClosedForm;
    Geev => "geev", Query;
    Gelss => "gelss", Query;
    Gelsd => "gelsd", Query;
    Geqrf => "geqrf", Query;
    Gelqf => "gelqf", Query;
    Ggrqf => "ggrqf", Query;
    Unglq => "unglq", Query;
    Lacpy => "lacpy", None;
    Geequ => "geequ", None;
}

impl Routine {
    /// `sbgvx` exists only for real types; everything else for all four.
    pub fn supports(self, kind: ScalarKind) -> bool {
        match self {
            Routine::Sbgvx => !kind.is_complex(),
            _ => true,
        }
    }

    pub fn takes_uplo(self) -> bool {
        !matches!(
            self,
            Routine::Lange
                | Routine::Geev
                | Routine::Gelss
                | Routine::Gelsd
                | Routine::Geqrf
                | Routine::Gelqf
                | Routine::Ggrqf
                | Routine::Unglq
                | Routine::Lacpy
                | Routine::Geequ
        )
    }

    pub fn takes_norm(self) -> bool {
        matches!(self, Routine::Lantp | Routine::Lanhp | Routine::Lange | Routine::Lanhe)
    }

    /// Reads `m` separately from `n`; every other routine is square.
    pub fn takes_m(self) -> bool {
        matches!(
            self,
            Routine::Lange
                | Routine::Gelss
                | Routine::Gelsd
                | Routine::Geqrf
                | Routine::Gelqf
                | Routine::Ggrqf
                | Routine::Unglq
                | Routine::Lacpy
                | Routine::Geequ
        )
    }

    pub fn takes_k(self) -> bool {
        self == Routine::Unglq
    }

    pub fn takes_p(self) -> bool {
        self == Routine::Ggrqf
    }

    pub fn takes_diag(self) -> bool {
        self == Routine::Lantp
    }

    pub fn takes_itype(self) -> bool {
        self == Routine::Hpgv
    }

    pub fn takes_jobz(self) -> bool {
        matches!(self, Routine::Hpgv | Routine::Hbgvx | Routine::Sbgvx)
    }

    pub fn takes_range(self) -> bool {
        matches!(self, Routine::Hbgvx | Routine::Sbgvx)
    }

    /// `jobvl` and `jobvr`.
    pub fn takes_eigenvector_jobs(self) -> bool {
        self == Routine::Geev
    }

    pub fn takes_matrix_type(self) -> bool {
        self == Routine::Lacpy
    }

    pub fn takes_rcond(self) -> bool {
        matches!(self, Routine::Gelss | Routine::Gelsd)
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One conformance case.
///
/// Routines read only the fields they take. Leading dimensions are derived from the
/// dimensions and rounded up to a multiple of `align`.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub routine: Routine,
    pub kind: ScalarKind,
    pub m: i64,
    pub n: i64,
    pub k: i64,
    pub p: i64,
    pub kd: i64,
    pub nrhs: i64,
    pub uplo: Uplo,
    pub norm: Norm,
    pub diag: Diag,
    pub jobz: Job,
    pub jobvl: Job,
    pub jobvr: Job,
    pub itype: i64,
    pub range: Range,
    pub vl: f64,
    pub vu: f64,
    pub il: i64,
    pub iu: i64,
    pub matrix_type: MatrixType,
    pub align: i64,
    pub seed: u64,
    /// Multiple of machine epsilon allowed for non-exact comparisons
    pub tol: f64,
    pub abstol: f64,
    /// Singular-value cutoff for `gelss`/`gelsd`; negative means machine precision
    pub rcond: f64,
}

impl Params {
    /// Square problem of order `n` with the default flags.
    pub fn new(routine: Routine, kind: ScalarKind, n: i64) -> Self {
        Params {
            routine,
            kind,
            m: n,
            n,
            k: n,
            p: n,
            kd: 2,
            nrhs: 1,
            uplo: Uplo::Lower,
            norm: Norm::One,
            diag: Diag::NonUnit,
            jobz: Job::Vec,
            jobvl: Job::NoVec,
            jobvr: Job::Vec,
            itype: 1,
            range: Range::All,
            vl: 0.0,
            vu: 1.0,
            il: 1,
            iu: n,
            matrix_type: MatrixType::General,
            align: 1,
            seed: 0,
            tol: 50.0,
            abstol: 0.0,
            rcond: -1.0,
        }
    }

    fn validate(&self) -> Result<()> {
        let dims = [
            ("m", self.m),
            ("n", self.n),
            ("k", self.k),
            ("p", self.p),
            ("kd", self.kd),
            ("nrhs", self.nrhs),
        ];
        if let Some((name, value)) = dims.iter().find(|(_, v)| *v < 0) {
            return Err(Error::InvalidParams {
                routine: self.routine,
                reason: format!("{} = {} is negative", name, value),
            });
        }
        if self.align < 1 {
            return Err(Error::InvalidParams {
                routine: self.routine,
                reason: format!("align = {} must be at least 1", self.align),
            });
        }
        let jobs = [
            ("jobz", self.jobz, self.routine.takes_jobz()),
            ("jobvl", self.jobvl, self.routine.takes_eigenvector_jobs()),
            ("jobvr", self.jobvr, self.routine.takes_eigenvector_jobs()),
        ];
        if let Some((name, job, _)) = jobs.iter().find(|(_, job, read)| *read && *job == Job::UpdateVec) {
            return Err(Error::InvalidParams {
                routine: self.routine,
                reason: format!("{} = {} is not accepted here", name, job),
            });
        }
        if self.routine.takes_range() && self.range == Range::Value
            && self.vl.partial_cmp(&self.vu) != Some(std::cmp::Ordering::Less) {
            return Err(Error::InvalidParams {
                routine: self.routine,
                reason: format!("value range needs vl < vu, got ({}, {}]", self.vl, self.vu),
            });
        }
        if !(1..=3).contains(&self.itype) {
            return Err(Error::InvalidParams {
                routine: self.routine,
                reason: format!("itype = {} must be 1, 2 or 3", self.itype),
            });
        }
        Ok(())
    }

    /// The flags this routine reads, for display.
    fn flags(&self) -> String {
        let mut parts = Vec::new();
        if self.routine.takes_uplo() {
            parts.push(format!("uplo={}", self.uplo));
        }
        if self.routine.takes_norm() {
            parts.push(format!("norm={}", self.norm));
        }
        if self.routine.takes_diag() {
            parts.push(format!("diag={}", self.diag));
        }
        if self.routine.takes_itype() {
            parts.push(format!("itype={}", self.itype));
        }
        if self.routine.takes_jobz() {
            parts.push(format!("jobz={}", self.jobz));
        }
        if self.routine.takes_range() {
            parts.push(format!("range={}", self.range));
            match self.range {
                Range::All => {}
                Range::Value => parts.push(format!("vl={} vu={}", self.vl, self.vu)),
                Range::Index => parts.push(format!("il={} iu={}", self.il, self.iu)),
            }
        }
        if self.routine.takes_eigenvector_jobs() {
            parts.push(format!("jobvl={}", self.jobvl));
            parts.push(format!("jobvr={}", self.jobvr));
        }
        if self.routine.takes_matrix_type() {
            parts.push(format!("type={}", self.matrix_type));
        }
        if self.routine.takes_p() {
            parts.push(format!("p={}", self.p));
        }
        if self.routine.takes_rcond() {
            parts.push(format!("rcond={}", self.rcond));
        }
        parts.join(" ")
    }
}

/// Outcome of one case.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseReport {
    pub routine: Routine,
    pub kind: ScalarKind,
    pub m: i64,
    pub n: i64,
    pub k: i64,
    pub kd: i64,
    pub nrhs: i64,
    pub flags: String,
    pub info_tst: i64,
    pub info_ref: i64,
    pub error: f64,
    pub okay: bool,
    /// Wrapper wall time, seconds
    pub time: f64,
    /// Reference wall time, seconds
    pub ref_time: f64,
}

/// Run one case: dispatch on scalar kind, then routine.
pub fn run_case(params: &Params) -> Result<CaseReport> {
    if !params.routine.supports(params.kind) {
        return Err(Error::Unsupported {
            routine: params.routine,
            kind: params.kind,
        });
    }
    params.validate()?;

    let outcome = match (params.kind, params.routine) {
        (ScalarKind::Single, Routine::Sbgvx) => check::sbgvx::<f32>(params)?,
        (ScalarKind::Double, Routine::Sbgvx) => check::sbgvx::<f64>(params)?,
        (ScalarKind::Single, _) => check::run::<f32>(params)?,
        (ScalarKind::Double, _) => check::run::<f64>(params)?,
        (ScalarKind::SingleComplex, _) => check::run::<crate::c32>(params)?,
        (ScalarKind::DoubleComplex, _) => check::run::<crate::c64>(params)?,
    };

    Ok(CaseReport {
        routine: params.routine,
        kind: params.kind,
        m: params.m,
        n: params.n,
        k: params.k,
        kd: params.kd,
        nrhs: params.nrhs,
        flags: params.flags(),
        info_tst: outcome.info_tst,
        info_ref: outcome.info_ref,
        error: outcome.error,
        okay: outcome.okay,
        time: outcome.time,
        ref_time: outcome.ref_time,
    })
}
