// tests/test_flags.rs

use lapackx::{Diag, Job, MatrixType, Norm, Range, ScalarKind, Uplo};
use std::collections::HashSet;

fn assert_alphabet<F: Copy>(all: &[F], as_char: fn(F) -> char, expected: &str) {
    let chars: String = all.iter().map(|&f| as_char(f)).collect();
    assert_eq!(chars, expected);
    let distinct: HashSet<char> = chars.chars().collect();
    assert_eq!(distinct.len(), all.len(), "characters must be distinct");
}

#[test]
fn every_flag_maps_to_its_lapack_character() {
    assert_alphabet(Uplo::ALL, Uplo::as_char, "UL");
    assert_alphabet(Diag::ALL, Diag::as_char, "NU");
    assert_alphabet(Norm::ALL, Norm::as_char, "OIFM");
    assert_alphabet(Job::ALL, Job::as_char, "NVU");
    assert_alphabet(Range::ALL, Range::as_char, "AVI");
    assert_alphabet(MatrixType::ALL, MatrixType::as_char, "GUL");
}

#[test]
fn c_char_is_the_ascii_code() {
    for &norm in Norm::ALL {
        assert_eq!(norm.as_c_char() as u8, norm.as_char() as u8);
    }
    assert_eq!(Uplo::Lower.as_c_char() as u8, b'L');
}

#[test]
fn long_names_parse_case_insensitively() {
    assert_eq!("UPPER".parse::<Uplo>().unwrap(), Uplo::Upper);
    assert_eq!("Fro".parse::<Norm>().unwrap(), Norm::Fro);
    assert_eq!("novec".parse::<Job>().unwrap(), Job::NoVec);
    assert_eq!("general".parse::<MatrixType>().unwrap(), MatrixType::General);
    assert_eq!("index".parse::<Range>().unwrap(), Range::Index);
    assert_eq!("unit".parse::<Diag>().unwrap(), Diag::Unit);
}

#[test]
fn unknown_flag_lists_the_alternatives() {
    let err = "sideways".parse::<Uplo>().unwrap_err();
    assert!(err.contains("upper") && err.contains("lower"), "{}", err);
}

#[test]
fn scalar_kinds_use_the_lapack_prefixes() {
    let prefixes: String = ScalarKind::ALL.iter().map(|k| k.prefix()).collect();
    assert_eq!(prefixes, "sdcz");
    for kind in ScalarKind::ALL {
        assert_eq!(kind.to_string().parse::<ScalarKind>().unwrap(), kind);
    }
    assert!(ScalarKind::DoubleComplex.is_complex());
    assert!(!ScalarKind::Double.is_complex());
    assert!("q".parse::<ScalarKind>().is_err());
}
