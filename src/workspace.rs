//! Scratch memory for native routines.
//!
//! Closed-form sizes are computed by each wrapper. Routines that can report their
//! optimal size go through [`run_with_queried_workspace`]: call once with `lwork = -1`,
//! read the sizes back, allocate, call again.

use num_traits::Zero;

use crate::error::{check_info, Error, Result};
use crate::marshal::{narrow, LapackInt, NativeInts};
use crate::scalar::Scalar;

/// `lwork` value that asks a routine for its optimal workspace instead of computing.
pub const QUERY: LapackInt = -1;

/// Documented lower bounds for the three workspace arrays a routine may take.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkspaceMin {
    pub work: usize,
    pub rwork: usize,
    pub iwork: usize,
}

impl WorkspaceMin {
    pub fn work(work: usize) -> Self {
        WorkspaceMin {
            work,
            ..Default::default()
        }
    }

    pub fn with_rwork(mut self, rwork: usize) -> Self {
        self.rwork = rwork;
        self
    }

    pub fn with_iwork(mut self, iwork: usize) -> Self {
        self.iwork = iwork;
        self
    }
}

/// Wrapper-owned scratch handed to the native call site.
pub struct Workspace<T: Scalar> {
    pub work: Vec<T>,
    pub rwork: Vec<T::Real>,
    pub iwork: NativeInts,
}

impl<T: Scalar> Workspace<T> {
    /// Every buffer holds at least one element so its pointer is valid.
    pub fn new(work: usize, rwork: usize, iwork: usize) -> Self {
        Workspace {
            work: vec![T::zero(); work.max(1)],
            rwork: vec![T::Real::zero(); rwork.max(1)],
            iwork: NativeInts::zeroed(iwork),
        }
    }

    /// Buffers of exactly the closed-form sizes in `min`.
    pub fn with_minimum(min: WorkspaceMin) -> Self {
        Workspace::new(min.work, min.rwork, min.iwork)
    }
}

/// Size a routine reported through a floating-point workspace slot.
pub fn reported_size(routine: &'static str, reported: f64) -> Result<usize> {
    if !reported.is_finite() || reported < 0.0 {
        return Err(Error::WorkspaceQuery { routine, reported });
    }
    Ok(reported.ceil() as usize)
}

/// Run `call` twice: first as a size query (`lwork == QUERY`), then with buffers of the
/// reported optimal sizes, never smaller than `minimum`.
///
/// `call` receives the workspace and the `lwork` to pass and returns the native `info`.
/// `rwork` and `iwork` sizes are read back too; routines that do not report them leave
/// the slots at zero and get `minimum`.
pub fn run_with_queried_workspace<T, F>(
    routine: &'static str,
    minimum: WorkspaceMin,
    mut call: F,
) -> Result<i64>
where
    T: Scalar,
    F: FnMut(&mut Workspace<T>, LapackInt) -> LapackInt,
{
    let mut query = Workspace::<T>::new(1, minimum.rwork, minimum.iwork);
    check_info(routine, call(&mut query, QUERY))?;

    let work = reported_size(routine, query.work[0].re().into())?.max(minimum.work);
    let rwork = reported_size(routine, query.rwork[0].into())?.max(minimum.rwork);
    let iwork = usize::try_from(query.iwork.first())
        .unwrap_or(0)
        .max(minimum.iwork);

    let lwork = narrow("lwork", work.max(1) as i64)?;
    let mut workspace = Workspace::<T>::new(work, rwork, iwork);
    check_info(routine, call(&mut workspace, lwork))
}
