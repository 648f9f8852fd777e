// tests/test_conformance.rs
//
// Every wrapper against its LAPACKE reference, over every type it exists for.

use lapackx::conformance::{self, report, CaseReport, Error, Params, Routine};
use lapackx::{Job, MatrixType, Norm, Range, ScalarKind, Uplo};
use std::fs::File;
use std::io::Read;
use tempfile::NamedTempFile;

fn run(params: &Params) -> CaseReport {
    let report = conformance::run_case(params)
        .unwrap_or_else(|e| panic!("{}{} n={}: {}", params.kind.prefix(), params.routine, params.n, e));
    assert!(
        report.okay,
        "{}{} n={} {}: info {} vs {}, error {:e}",
        params.kind.prefix(),
        params.routine,
        params.n,
        report.flags,
        report.info_tst,
        report.info_ref,
        report.error
    );
    report
}

fn sweep(routine: Routine, configure: impl Fn(&mut Params)) -> Vec<CaseReport> {
    let mut reports = Vec::new();
    for kind in ScalarKind::ALL {
        if !routine.supports(kind) {
            continue;
        }
        for n in [0, 1, 13] {
            for uplo in [Uplo::Lower, Uplo::Upper] {
                let mut params = Params::new(routine, kind, n);
                params.uplo = uplo;
                params.nrhs = 3;
                params.seed = 42;
                configure(&mut params);
                reports.push(run(&params));
            }
        }
    }
    reports
}

#[test]
fn cholesky_family_matches_reference() {
    for routine in [
        Routine::Pbsv,
        Routine::Pbtrf,
        Routine::Pbtrs,
        Routine::Ppsv,
        Routine::Pptrf,
        Routine::Pptri,
        Routine::Potrf,
        Routine::Pocon,
    ] {
        sweep(routine, |_| {});
        sweep(routine, |p| {
            p.kd = 0;
            p.align = 8;
        });
    }
}

#[test]
fn packed_indefinite_family_matches_reference() {
    for routine in [Routine::Sptrf, Routine::Spcon, Routine::Hptrf, Routine::Hptrs, Routine::Hpcon] {
        sweep(routine, |_| {});
    }
}

#[test]
fn norms_match_reference_for_every_norm() {
    for routine in [Routine::Lantp, Routine::Lanhp, Routine::Lange, Routine::Lanhe] {
        for &norm in Norm::ALL {
            sweep(routine, |p| p.norm = norm);
        }
    }
    sweep(Routine::Lantp, |p| p.diag = lapackx::Diag::Unit);
    sweep(Routine::Lange, |p| {
        p.m = p.n + 4;
        p.align = 3;
    });
}

#[test]
fn eigen_drivers_match_reference() {
    sweep(Routine::Hptrd, |_| {});
    for itype in 1..=3 {
        sweep(Routine::Hpgv, |p| p.itype = itype);
    }
    sweep(Routine::Hpgv, |p| p.jobz = Job::NoVec);

    for routine in [Routine::Hbgvx, Routine::Sbgvx] {
        sweep(routine, |_| {});
        sweep(routine, |p| p.jobz = Job::NoVec);
        sweep(routine, |p| {
            p.range = Range::Index;
            p.il = 2;
            p.iu = 4;
        });
        sweep(routine, |p| {
            p.range = Range::Value;
            p.vl = 0.0;
            p.vu = 2.0;
        });
    }

    sweep(Routine::Geev, |_| {});
    sweep(Routine::Geev, |p| {
        p.jobvl = Job::Vec;
        p.jobvr = Job::Vec;
    });
    sweep(Routine::Geev, |p| p.jobvr = Job::NoVec);
}

#[test]
fn least_squares_and_orthogonal_match_reference() {
    for routine in [Routine::Gelss, Routine::Gelsd, Routine::Geqrf, Routine::Gelqf] {
        sweep(routine, |_| {});
        sweep(routine, |p| p.m = p.n + 5);
        sweep(routine, |p| p.m = p.n / 2);
    }
    sweep(Routine::Gelss, |p| p.rcond = 0.1);

    sweep(Routine::Ggrqf, |_| {});
    sweep(Routine::Ggrqf, |p| {
        p.m = p.n / 2;
        p.p = p.n + 3;
    });

    sweep(Routine::Unglq, |_| {});
    sweep(Routine::Unglq, |p| {
        p.m = p.n / 2;
        p.k = p.m / 2;
    });
}

#[test]
fn auxiliary_routines_match_reference() {
    for &matrix_type in MatrixType::ALL {
        sweep(Routine::Lacpy, |p| {
            p.matrix_type = matrix_type;
            p.m = p.n + 2;
        });
    }
    sweep(Routine::Geequ, |_| {});
    sweep(Routine::Geequ, |p| p.m = p.n + 1);
}

#[test]
fn reports_carry_dimensions_and_flags() {
    let mut params = Params::new(Routine::Lanhp, ScalarKind::SingleComplex, 6);
    params.norm = Norm::Fro;
    let report = run(&params);
    assert_eq!(report.routine, Routine::Lanhp);
    assert_eq!(report.kind, ScalarKind::SingleComplex);
    assert_eq!(report.n, 6);
    assert_eq!(report.flags, "uplo=lower norm=fro");
    assert_eq!((report.info_tst, report.info_ref), (0, 0));
    assert!(report.time >= 0.0 && report.ref_time >= 0.0);
}

#[test]
fn harness_errors_are_not_mismatches() {
    let params = Params::new(Routine::Sbgvx, ScalarKind::SingleComplex, 4);
    assert!(matches!(conformance::run_case(&params), Err(Error::Unsupported { .. })));

    let mut params = Params::new(Routine::Geqrf, ScalarKind::Double, 4);
    params.align = 0;
    assert!(matches!(conformance::run_case(&params), Err(Error::InvalidParams { .. })));

    let mut params = Params::new(Routine::Hpgv, ScalarKind::Double, 4);
    params.itype = 4;
    assert!(matches!(conformance::run_case(&params), Err(Error::InvalidParams { .. })));
}

#[test]
fn csv_report_has_one_row_per_case() {
    let reports: Vec<CaseReport> = [Routine::Pbsv, Routine::Geev, Routine::Lacpy]
        .iter()
        .map(|&routine| run(&Params::new(routine, ScalarKind::Double, 5)))
        .collect();

    let file = NamedTempFile::new().unwrap();
    report::write_csv(&reports, file.path()).unwrap();

    let mut contents = String::new();
    File::open(file.path()).unwrap().read_to_string(&mut contents).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("routine,type,m,n,k,kd,nrhs,flags,info_tst,info_ref,error,okay"));
    assert!(lines[1].starts_with("pbsv,d,5,5,5,2,1,uplo=lower,0,0,"));
    assert!(lines[2].starts_with("geev,d,"));
    assert!(lines.iter().skip(1).all(|line| line.contains(",true,")));

    let mut rdr = csv::Reader::from_path(file.path()).unwrap();
    assert_eq!(rdr.records().count(), 3);
}

#[test]
fn table_prints_without_color() {
    let reports = vec![run(&Params::new(Routine::Potrf, ScalarKind::Single, 3))];
    report::print_table(&reports, termcolor::ColorChoice::Never).unwrap();
}
