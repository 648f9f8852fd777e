//! Narrowing of 64-bit sizes to the native integer width, and slice-length guards.

use crate::error::{Error, Result};

/// The integer type the native LAPACK was built with.
#[cfg(not(feature = "ilp64"))]
pub type LapackInt = libc::c_int;

/// The integer type the native LAPACK was built with.
#[cfg(feature = "ilp64")]
pub type LapackInt = i64;

/// Narrow one argument, refusing values whose magnitude exceeds `LapackInt::MAX`.
pub fn narrow(arg: &'static str, value: i64) -> Result<LapackInt> {
    if value.unsigned_abs() > LapackInt::MAX as u64 {
        return Err(Error::IntegerOverflow { arg, value });
    }
    Ok(value as LapackInt)
}

/// Narrow a fixed set of named arguments at once; the first offender is reported.
pub fn narrow_all<const N: usize>(args: [(&'static str, i64); N]) -> Result<[LapackInt; N]> {
    let mut out = [0 as LapackInt; N];
    for (slot, (arg, value)) in out.iter_mut().zip(args) {
        *slot = narrow(arg, value)?;
    }
    Ok(out)
}

/// Elements a column-major `rows`-by-`cols` matrix with stride `ld` occupies.
///
/// Negative or zero extents need no storage; LAPACK itself rejects negative ones.
pub fn matrix_len(rows: i64, cols: i64, ld: i64) -> usize {
    if rows <= 0 || cols <= 0 {
        return 0;
    }
    let ld = ld.max(rows);
    to_len(ld.saturating_mul(cols - 1).saturating_add(rows))
}

/// Elements of an order-`n` triangle in packed storage.
pub fn packed_len(n: i64) -> usize {
    if n <= 0 {
        return 0;
    }
    to_len(n.saturating_mul(n + 1) / 2)
}

/// Elements of a vector of length `n` (zero for negative `n`).
pub fn vector_len(n: i64) -> usize {
    to_len(n.max(0))
}

fn to_len(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Fail with `BufferTooSmall` unless `actual >= required`.
pub fn check_len(arg: &'static str, actual: usize, required: usize) -> Result<()> {
    if actual < required {
        return Err(Error::BufferTooSmall {
            arg,
            required,
            actual,
        });
    }
    Ok(())
}

/// Native-width copy of an `i64` index vector (pivots, `ifail`).
///
/// LAPACK writes `LapackInt`s; the Rust API exposes `i64`. Values cross in both
/// directions through this scratch buffer.
pub struct NativeInts {
    buf: Vec<LapackInt>,
}

impl NativeInts {
    /// Zero-filled scratch of `len` entries (at least one, so the pointer is valid).
    pub fn zeroed(len: usize) -> Self {
        NativeInts {
            buf: vec![0; len.max(1)],
        }
    }

    /// Copy `values` in, narrowing each with the overflow guard.
    pub fn copy_in(arg: &'static str, values: &[i64]) -> Result<Self> {
        let mut buf = Vec::with_capacity(values.len().max(1));
        for &v in values {
            buf.push(narrow(arg, v)?);
        }
        if buf.is_empty() {
            buf.push(0);
        }
        Ok(NativeInts { buf })
    }

    pub fn as_ptr(&self) -> *const LapackInt {
        self.buf.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut LapackInt {
        self.buf.as_mut_ptr()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// First entry, where workspace queries report integer sizes.
    pub fn first(&self) -> LapackInt {
        self.buf[0]
    }

    /// Widen the first `count` entries back into `out`.
    pub fn copy_out(&self, out: &mut [i64], count: usize) {
        for (dst, &src) in out.iter_mut().zip(&self.buf).take(count) {
            *dst = i64::from(src);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_len_uses_stride_for_all_but_last_column() {
        assert_eq!(matrix_len(3, 4, 5), 5 * 3 + 3);
        assert_eq!(matrix_len(3, 1, 5), 3);
        assert_eq!(matrix_len(0, 4, 5), 0);
        assert_eq!(matrix_len(-1, 4, 5), 0);
        // a stride below the row count is the native routine's to reject
        assert_eq!(matrix_len(4, 2, 1), 8);
    }

    #[test]
    fn packed_len_is_triangular_number() {
        assert_eq!(packed_len(0), 0);
        assert_eq!(packed_len(1), 1);
        assert_eq!(packed_len(4), 10);
    }

    #[test]
    fn narrow_all_reports_first_offender() {
        let big = i64::from(LapackInt::MAX);
        assert_eq!(narrow_all([("n", 3), ("lda", 5)]).unwrap(), [3, 5]);
        if cfg!(not(feature = "ilp64")) {
            let err = narrow_all([("n", 3), ("lda", big + 1), ("ldb", big + 2)]).unwrap_err();
            assert_eq!(
                err,
                Error::IntegerOverflow {
                    arg: "lda",
                    value: big + 1
                }
            );
            assert!(narrow("kd", -(big + 1)).is_err());
        }
        assert!(narrow("kd", big).is_ok());
    }

    #[test]
    fn native_ints_round_trip_pivots() {
        let ipiv = [1_i64, -2, 3];
        let native = NativeInts::copy_in("ipiv", &ipiv).unwrap();
        let mut back = [0_i64; 3];
        native.copy_out(&mut back, 3);
        assert_eq!(back, ipiv);
    }
}
