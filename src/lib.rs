//! Type-safe bindings over the Fortran LAPACK library.
//!
//! Every routine is one generic function over [`Scalar`] (`f32`, `f64`, [`c32`], [`c64`]).
//! Sizes are `i64` and are narrowed to the native integer width with an overflow check,
//! flags are closed enums, workspace is allocated internally, and the native `info` is
//! split into two tiers: a negative `info` becomes [`Error::InvalidArgument`], a positive
//! one (singular matrix, no convergence, ...) is returned as an ordinary `i64`.
//!
//! ```no_run
//! use lapackx::{pbsv, Uplo};
//!
//! // n = 3, kd = 1, upper band storage
//! let mut ab = vec![0.0, 4.0, 1.0, 4.0, 1.0, 4.0];
//! let mut b = vec![1.0, 2.0, 3.0];
//! let info = pbsv(Uplo::Upper, 3, 1, 1, &mut ab, 2, &mut b, 3)?;
//! assert_eq!(info, 0);
//! # Ok::<(), lapackx::Error>(())
//! ```

pub mod conformance;
pub mod error;
pub mod ffi;
pub mod flags;
pub mod marshal;
pub mod progress;
pub mod routines;
pub mod scalar;
pub mod workspace;

pub use error::{Error, Result};
pub use flags::{Diag, Job, MatrixType, Norm, Range, Uplo};
pub use marshal::LapackInt;
pub use routines::*;
pub use scalar::{c32, c64, RealScalar, Scalar, ScalarKind};
