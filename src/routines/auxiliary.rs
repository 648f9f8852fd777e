//! Matrix copy and equilibration.

use libc::c_char;

use crate::error::{check_info, Result};
use crate::ffi;
use crate::flags::MatrixType;
use crate::marshal::{check_len, matrix_len, narrow_all, vector_len, LapackInt};
use crate::scalar::{c32, c64, Scalar};

/// Scaling factors reported by [`geequ`]; the row and column factors themselves go to
/// the caller's `r` and `c`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Equilibration<R> {
    /// `min(r) / max(r)`
    pub rowcnd: R,
    /// `min(c) / max(c)`
    pub colcnd: R,
    /// Largest absolute matrix element
    pub amax: R,
    /// Native status: `i <= m` marks an exactly zero row `i`, `m + j` a zero column `j`
    pub info: i64,
}

/// Native call sites for `lacpy` and `geequ`.
pub trait Auxiliary: Scalar {
    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn lacpy_call(
        uplo: c_char,
        m: LapackInt,
        n: LapackInt,
        a: &[Self],
        lda: LapackInt,
        b: &mut [Self],
        ldb: LapackInt,
    );

    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    unsafe fn geequ_call(
        m: LapackInt,
        n: LapackInt,
        a: &[Self],
        lda: LapackInt,
        r: &mut [Self::Real],
        c: &mut [Self::Real],
        out: &mut Equilibration<Self::Real>,
    ) -> LapackInt;
}

macro_rules! impl_auxiliary {
    ($t:ty, $r:ty, $lacpy:ident, $geequ:ident) => {
        impl Auxiliary for $t {
            unsafe fn lacpy_call(
                uplo: c_char,
                m: LapackInt,
                n: LapackInt,
                a: &[Self],
                lda: LapackInt,
                b: &mut [Self],
                ldb: LapackInt,
            ) {
                ffi::$lacpy(&uplo, &m, &n, a.as_ptr(), &lda, b.as_mut_ptr(), &ldb);
            }

            unsafe fn geequ_call(
                m: LapackInt,
                n: LapackInt,
                a: &[Self],
                lda: LapackInt,
                r: &mut [$r],
                c: &mut [$r],
                out: &mut Equilibration<$r>,
            ) -> LapackInt {
                let mut info = 0;
                ffi::$geequ(
                    &m,
                    &n,
                    a.as_ptr(),
                    &lda,
                    r.as_mut_ptr(),
                    c.as_mut_ptr(),
                    &mut out.rowcnd,
                    &mut out.colcnd,
                    &mut out.amax,
                    &mut info,
                );
                info
            }
        }
    };
}

impl_auxiliary!(f32, f32, slacpy_, sgeequ_);
impl_auxiliary!(f64, f64, dlacpy_, dgeequ_);
impl_auxiliary!(c32, f32, clacpy_, cgeequ_);
impl_auxiliary!(c64, f64, zlacpy_, zgeequ_);

/// Copies all of `A`, or only its upper or lower trapezoid, into `B`.
///
/// There is no status code. Elements of `b` outside the selected part are untouched.
pub fn lacpy<T: Auxiliary>(
    matrix_type: MatrixType,
    m: i64,
    n: i64,
    a: &[T],
    lda: i64,
    b: &mut [T],
    ldb: i64,
) -> Result<()> {
    let [m_, n_, lda_, ldb_] = narrow_all([("m", m), ("n", n), ("lda", lda), ("ldb", ldb)])?;
    check_len("a", a.len(), matrix_len(m, n, lda))?;
    check_len("b", b.len(), matrix_len(m, n, ldb))?;

    unsafe { T::lacpy_call(matrix_type.as_c_char(), m_, n_, a, lda_, b, ldb_) };
    Ok(())
}

/// Row and column scalings intended to equilibrate `A` and reduce its condition number.
///
/// `r` (length `m`) and `c` (length `n`) receive the scale factors.
pub fn geequ<T: Auxiliary>(
    m: i64,
    n: i64,
    a: &[T],
    lda: i64,
    r: &mut [T::Real],
    c: &mut [T::Real],
) -> Result<Equilibration<T::Real>> {
    let [m_, n_, lda_] = narrow_all([("m", m), ("n", n), ("lda", lda)])?;
    check_len("a", a.len(), matrix_len(m, n, lda))?;
    check_len("r", r.len(), vector_len(m))?;
    check_len("c", c.len(), vector_len(n))?;

    let mut out = Equilibration::<T::Real>::default();
    let info = unsafe { T::geequ_call(m_, n_, a, lda_, r, c, &mut out) };
    out.info = check_info("geequ", info)?;
    Ok(out)
}
