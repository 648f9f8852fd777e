//! Generic wrappers, one module per routine family.
//!
//! Every wrapper narrows its sizes, checks each slice against them, provisions any
//! workspace, calls the native routine and translates `info`. The family traits are
//! implemented for `f32`, `f64`, [`c32`](crate::c32) and [`c64`](crate::c64) only.

mod auxiliary;
mod band;
mod cholesky;
mod eigen;
mod indefinite;
mod least_squares;
mod norms;
mod orthogonal;
mod packed;
mod tridiagonal;

pub use auxiliary::{geequ, lacpy, Auxiliary, Equilibration};
pub use band::{pbsv, pbtrf, pbtrs, BandCholesky};
pub use cholesky::{pocon, potrf, Cholesky};
pub use eigen::{geev, hbgvx, hpgv, sbgvx, BandPair, EigenCount, GeneralizedEigen, Geev};
pub use indefinite::{hpcon, hptrf, hptrs, spcon, sptrf, PackedIndefinite};
pub use least_squares::{gelsd, gelss, LeastSquares};
pub use norms::{lange, lanhe, lanhp, lantp, Norms};
pub use orthogonal::{gelqf, geqrf, ggrqf, unglq, Orthogonal};
pub use packed::{ppsv, pptrf, pptri, PackedCholesky};
pub use tridiagonal::{hptrd, PackedTridiagonal};
