//! Closed flag enumerations and their LAPACK character codes.
//!
//! Every mapping is an exhaustive `match`; adding a variant is a compile error until its
//! character is assigned. `FromStr` accepts the long name or the LAPACK character and is
//! used by the tester CLI.

use std::fmt;
use std::str::FromStr;

use libc::c_char;

macro_rules! flag_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $ch:literal, $long:literal;)+ }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The character LAPACK expects for this flag.
            pub fn as_char(self) -> char {
                match self {
                    $($name::$variant => $ch,)+
                }
            }

            /// The flag as a C `char`, ready to pass by pointer.
            pub fn as_c_char(self) -> c_char {
                self.as_char() as c_char
            }

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $long,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lower = s.to_ascii_lowercase();
                $(
                    if lower == $long || (lower.len() == 1 && lower.eq_ignore_ascii_case(&$ch.to_string())) {
                        return Ok($name::$variant);
                    }
                )+
                Err(format!(
                    "invalid {} '{}' (expected one of: {})",
                    stringify!($name).to_ascii_lowercase(),
                    s,
                    $name::ALL.iter().map(|v| v.name()).collect::<Vec<_>>().join(", ")
                ))
            }
        }
    };
}

flag_enum! {
    /// Which triangle of a symmetric/Hermitian/triangular matrix is stored.
    Uplo {
        Upper => 'U', "upper";
        Lower => 'L', "lower";
    }
}

flag_enum! {
    /// Whether a triangular matrix has an implicit unit diagonal.
    Diag {
        NonUnit => 'N', "nonunit";
        Unit => 'U', "unit";
    }
}

flag_enum! {
    /// Which matrix norm a `lan*` routine returns.
    Norm {
        /// Maximum column sum
        One => 'O', "one";
        /// Maximum row sum
        Inf => 'I', "inf";
        /// Square root of the sum of squares
        Fro => 'F', "fro";
        /// max(abs(A(i,j))), not a consistent matrix norm
        Max => 'M', "max";
    }
}

flag_enum! {
    /// Whether eigenvectors (or the orthogonal factor) are computed.
    Job {
        NoVec => 'N', "novec";
        Vec => 'V', "vec";
        /// Update a supplied matrix with the vectors
        UpdateVec => 'U', "updatevec";
    }
}

flag_enum! {
    /// Which eigenvalues an expert driver selects.
    Range {
        All => 'A', "all";
        /// Those in the half-open interval (vl, vu]
        Value => 'V', "value";
        /// The il-th through iu-th
        Index => 'I', "index";
    }
}

flag_enum! {
    /// Part of a general matrix an auxiliary routine touches.
    MatrixType {
        General => 'G', "general";
        Upper => 'U', "upper";
        Lower => 'L', "lower";
    }
}

impl Norm {
    /// One and infinity norms coincide for symmetric/Hermitian matrices, and both need
    /// an `n`-length real workspace there.
    pub fn needs_column_workspace(self) -> bool {
        matches!(self, Norm::One | Norm::Inf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_match_lapack_alphabet() {
        assert_eq!(Uplo::Upper.as_char(), 'U');
        assert_eq!(Uplo::Lower.as_char(), 'L');
        assert_eq!(Diag::NonUnit.as_char(), 'N');
        assert_eq!(Norm::Fro.as_char(), 'F');
        assert_eq!(Job::Vec.as_char(), 'V');
        assert_eq!(Range::Index.as_char(), 'I');
        assert_eq!(MatrixType::General.as_char(), 'G');
        assert_eq!(Norm::Max.as_c_char(), b'M' as c_char);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for &n in Norm::ALL {
            assert_eq!(n.to_string().parse::<Norm>().unwrap(), n);
        }
        for &r in Range::ALL {
            assert_eq!(r.to_string().parse::<Range>().unwrap(), r);
        }
    }

    #[test]
    fn from_str_accepts_single_character() {
        assert_eq!("u".parse::<Uplo>().unwrap(), Uplo::Upper);
        assert_eq!("I".parse::<Norm>().unwrap(), Norm::Inf);
        assert!("x".parse::<Uplo>().is_err());
    }
}
