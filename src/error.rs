//! Error types and native status translation.

use thiserror::Error;

use crate::marshal::LapackInt;

/// Result type alias using lapackx's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Usage errors and native invalid-argument reports.
///
/// Numerical non-success (a singular or indefinite matrix, an iteration that did not
/// converge) is *not* an error: wrappers return the positive `info` as their `Ok` value.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A 64-bit size or index does not fit the native LAPACK integer
    #[error("argument `{arg}` = {value} overflows the native LAPACK integer")]
    IntegerOverflow {
        /// Argument name
        arg: &'static str,
        /// Rejected value
        value: i64,
    },

    /// A slice is shorter than the dimensions passed alongside it require
    #[error("buffer `{arg}` holds {actual} elements but {required} are required")]
    BufferTooSmall {
        /// Argument name
        arg: &'static str,
        /// Elements the native routine may touch
        required: usize,
        /// Elements available
        actual: usize,
    },

    /// The native routine rejected one of its arguments (`info < 0`)
    #[error("{routine}: native routine rejected argument {position}")]
    InvalidArgument {
        /// Native routine family, e.g. `"pbsv"`
        routine: &'static str,
        /// 1-based position in the native argument list (`-info`)
        position: i64,
    },

    /// A workspace query reported a size that cannot be allocated
    #[error("{routine}: workspace query reported unusable size {reported}")]
    WorkspaceQuery {
        /// Native routine family
        routine: &'static str,
        /// The reported size
        reported: f64,
    },
}

/// Translate a native status into the two-tier convention.
pub(crate) fn check_info(routine: &'static str, info: LapackInt) -> Result<i64> {
    let info = i64::from(info);
    if info < 0 {
        return Err(Error::InvalidArgument {
            routine,
            position: -info,
        });
    }
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_info_is_an_error() {
        let err = check_info("pbsv", -4).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                routine: "pbsv",
                position: 4
            }
        );
    }

    #[test]
    fn positive_info_is_a_value() {
        assert_eq!(check_info("pbsv", 3), Ok(3));
        assert_eq!(check_info("pbsv", 0), Ok(0));
    }
}
