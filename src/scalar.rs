//! The four scalar types LAPACK supports and the trait that ties them together.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use num_complex::Complex;
use num_traits::{Float, NumAssign};

/// Single-precision complex, layout-compatible with Fortran `COMPLEX`.
#[allow(non_camel_case_types)]
pub type c32 = Complex<f32>;

/// Double-precision complex, layout-compatible with Fortran `COMPLEX*16`.
#[allow(non_camel_case_types)]
pub type c64 = Complex<f64>;

/// Runtime tag for a scalar type, used by the conformance harness and the tester CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarKind {
    Single,
    Double,
    SingleComplex,
    DoubleComplex,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 4] = [
        ScalarKind::Single,
        ScalarKind::Double,
        ScalarKind::SingleComplex,
        ScalarKind::DoubleComplex,
    ];

    /// LAPACK's precision prefix: `s`, `d`, `c` or `z`.
    pub fn prefix(self) -> char {
        match self {
            ScalarKind::Single => 's',
            ScalarKind::Double => 'd',
            ScalarKind::SingleComplex => 'c',
            ScalarKind::DoubleComplex => 'z',
        }
    }

    pub fn is_complex(self) -> bool {
        matches!(self, ScalarKind::SingleComplex | ScalarKind::DoubleComplex)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

impl FromStr for ScalarKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s" | "single" | "f32" => Ok(ScalarKind::Single),
            "d" | "double" | "f64" => Ok(ScalarKind::Double),
            "c" | "complex-single" | "c32" => Ok(ScalarKind::SingleComplex),
            "z" | "complex-double" | "c64" => Ok(ScalarKind::DoubleComplex),
            other => Err(format!("unknown scalar type '{}' (expected s, d, c or z)", other)),
        }
    }
}

/// A scalar type LAPACK has routines for.
///
/// Implemented for exactly `f32`, `f64`, [`c32`] and [`c64`]; wrappers bound on this (or
/// on a routine-family trait that extends it), so any other type fails to compile.
pub trait Scalar:
    Copy + fmt::Debug + Default + PartialEq + Send + Sync + 'static + NumAssign + Neg<Output = Self>
{
    /// The real type of the same precision; `Self` for real types.
    type Real: RealScalar;

    const KIND: ScalarKind;
    const IS_COMPLEX: bool;

    fn from_real(re: Self::Real) -> Self;

    /// Build from real and imaginary parts; real types drop `im`.
    fn from_parts(re: Self::Real, im: Self::Real) -> Self;

    fn re(self) -> Self::Real;

    fn im(self) -> Self::Real;

    fn conj(self) -> Self;

    /// |x|, the complex modulus for complex types.
    fn magnitude(self) -> Self::Real;
}

/// `f32` or `f64`.
pub trait RealScalar: Scalar<Real = Self> + Float + fmt::Display + Into<f64> {
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_real_scalar {
    ($t:ty, $kind:expr) => {
        impl Scalar for $t {
            type Real = $t;

            const KIND: ScalarKind = $kind;
            const IS_COMPLEX: bool = false;

            #[inline]
            fn from_real(re: $t) -> Self {
                re
            }

            #[inline]
            fn from_parts(re: $t, _im: $t) -> Self {
                re
            }

            #[inline]
            fn re(self) -> $t {
                self
            }

            #[inline]
            fn im(self) -> $t {
                0.0
            }

            #[inline]
            fn conj(self) -> Self {
                self
            }

            #[inline]
            fn magnitude(self) -> $t {
                <$t>::abs(self)
            }
        }

        impl RealScalar for $t {
            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    };
}

macro_rules! impl_complex_scalar {
    ($real:ty, $kind:expr) => {
        impl Scalar for Complex<$real> {
            type Real = $real;

            const KIND: ScalarKind = $kind;
            const IS_COMPLEX: bool = true;

            #[inline]
            fn from_real(re: $real) -> Self {
                Complex::new(re, 0.0)
            }

            #[inline]
            fn from_parts(re: $real, im: $real) -> Self {
                Complex::new(re, im)
            }

            #[inline]
            fn re(self) -> $real {
                self.re
            }

            #[inline]
            fn im(self) -> $real {
                self.im
            }

            #[inline]
            fn conj(self) -> Self {
                Complex::conj(&self)
            }

            #[inline]
            fn magnitude(self) -> $real {
                self.norm()
            }
        }
    };
}

impl_real_scalar!(f32, ScalarKind::Single);
impl_real_scalar!(f64, ScalarKind::Double);
impl_complex_scalar!(f32, ScalarKind::SingleComplex);
impl_complex_scalar!(f64, ScalarKind::DoubleComplex);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_types() {
        assert_eq!(<f32 as Scalar>::KIND, ScalarKind::Single);
        assert_eq!(<f64 as Scalar>::KIND, ScalarKind::Double);
        assert_eq!(<c32 as Scalar>::KIND, ScalarKind::SingleComplex);
        assert_eq!(<c64 as Scalar>::KIND, ScalarKind::DoubleComplex);
        assert!(!<f64 as Scalar>::IS_COMPLEX);
        assert!(<c64 as Scalar>::IS_COMPLEX);
    }

    #[test]
    fn kind_parses_lapack_prefixes() {
        for kind in ScalarKind::ALL {
            let parsed: ScalarKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("q".parse::<ScalarKind>().is_err());
    }

    #[test]
    fn complex_helpers() {
        let z = c64::from_parts(3.0, -4.0);
        assert_eq!(z.magnitude(), 5.0);
        assert_eq!(Scalar::conj(z), c64::new(3.0, 4.0));
        assert_eq!(f64::from_parts(2.0, 9.0), 2.0);
    }
}
