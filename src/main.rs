use clap::{Args, Parser, Subcommand};
use lapackx::conformance::{self, report, CaseReport, Params, Routine};
use lapackx::{Diag, Job, MatrixType, Norm, Range, ScalarKind, Uplo};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use std::time::Instant;
use termcolor::ColorChoice;

/// lapackx: LAPACK wrapper conformance tester
#[derive(Parser, Debug)]
#[command(
    name = "lapackx",
    about = "Run the LAPACK wrappers against the LAPACKE reference and report any mismatch",
    version,
    propagate_version = true,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sweep the named routines over types, dimensions and flags
    Run(RunArgs),
    /// List the wrapped routines and how each sizes its workspace
    List,
}

/// Dimension sweep `start:end:step`, inclusive of `end`. A bare number is a single size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DimRange {
    start: i64,
    end: i64,
    step: i64,
}

impl DimRange {
    fn values(&self) -> Vec<i64> {
        let mut out = Vec::new();
        let mut next = Some(self.start);
        while let Some(n) = next.filter(|&n| n <= self.end) {
            out.push(n);
            next = n.checked_add(self.step);
        }
        out
    }
}

impl FromStr for DimRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |field: &str| -> Result<i64, String> {
            field
                .trim()
                .parse::<i64>()
                .map_err(|e| format!("invalid dimension '{}': {}", field, e))
        };
        let fields: Vec<&str> = s.split(':').collect();
        let (start, end, step) = match fields.as_slice() {
            [n] => {
                let n = parse(n)?;
                (n, n, 1)
            }
            [start, end] => (parse(start)?, parse(end)?, 1),
            [start, end, step] => (parse(start)?, parse(end)?, parse(step)?),
            _ => return Err(format!("expected START[:END[:STEP]], got '{}'", s)),
        };
        if start < 0 || end < start || step < 1 {
            return Err(format!(
                "dimension range '{}' must satisfy 0 <= start <= end and step >= 1",
                s
            ));
        }
        Ok(DimRange { start, end, step })
    }
}

/// Problem shape. Square routines read only `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Shape {
    m: i64,
    n: i64,
    k: i64,
}

/// One `--dim` entry: a square sweep `START[:END[:STEP]]` or a fixed `MxN[xK]` shape
/// (`K` defaults to `N`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DimSpec {
    Square(DimRange),
    Shape(Shape),
}

impl DimSpec {
    fn shapes(&self) -> Vec<Shape> {
        match *self {
            DimSpec::Square(range) => range.values().into_iter().map(|n| Shape { m: n, n, k: n }).collect(),
            DimSpec::Shape(shape) => vec![shape],
        }
    }
}

impl FromStr for DimSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains(&['x', 'X'][..]) {
            return s.parse().map(DimSpec::Square);
        }
        let fields = s
            .split(&['x', 'X'][..])
            .map(|field| {
                field
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| format!("invalid dimension '{}' in '{}': {}", field, s, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let shape = match fields.as_slice() {
            &[m, n] => Shape { m, n, k: n },
            &[m, n, k] => Shape { m, n, k },
            _ => return Err(format!("expected MxN or MxNxK, got '{}'", s)),
        };
        if shape.m < 0 || shape.n < 0 || shape.k < 0 {
            return Err(format!("dimensions in '{}' must be non-negative", s));
        }
        Ok(DimSpec::Shape(shape))
    }
}

/// Copies every case once per value when `reads` is set; otherwise leaves them alone.
fn sweep<V: Copy>(cases: Vec<Params>, reads: bool, values: &[V], set: impl Fn(&mut Params, V)) -> Vec<Params> {
    if !reads {
        return cases;
    }
    let set = &set;
    cases
        .into_iter()
        .flat_map(|base| {
            values.iter().map(move |&value| {
                let mut params = base.clone();
                set(&mut params, value);
                params
            })
        })
        .collect()
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Routines to test, or `all`
    #[arg(value_name = "ROUTINE", required = true)]
    routines: Vec<String>,
    /// Scalar types: s, d, c, z
    #[arg(long = "type", value_name = "TYPES", value_delimiter = ',', default_value = "s,d,c,z")]
    types: Vec<ScalarKind>,
    /// Matrix dimensions: START:END:STEP square sweeps or MxN[xK] shapes, comma separated
    #[arg(long, value_name = "DIMS", value_delimiter = ',', default_value = "10:100:30")]
    dim: Vec<DimSpec>,
    /// Number of right-hand sides
    #[arg(long, value_name = "N", default_value_t = 10)]
    nrhs: i64,
    /// Band width for banded routines
    #[arg(long, value_name = "N", default_value_t = 3)]
    kd: i64,
    /// Rows of B for ggrqf (default: n)
    #[arg(long, value_name = "N")]
    p: Option<i64>,
    /// Triangles to sweep
    #[arg(long, value_name = "UPLOS", value_delimiter = ',', default_value = "lower,upper")]
    uplo: Vec<Uplo>,
    /// Norms to sweep for the norm routines
    #[arg(long, value_name = "NORMS", value_delimiter = ',', default_value = "one,inf,fro,max")]
    norm: Vec<Norm>,
    /// Unit or non-unit diagonal for lantp
    #[arg(long, value_name = "DIAGS", value_delimiter = ',', default_value = "nonunit")]
    diag: Vec<Diag>,
    /// Eigenvector jobs for hpgv, hbgvx and sbgvx
    #[arg(long, value_name = "JOBS", value_delimiter = ',', default_value = "vec")]
    jobz: Vec<Job>,
    /// Problem types for hpgv: 1 (A x = λ B x), 2 (A B x = λ x), 3 (B A x = λ x)
    #[arg(long, value_name = "TYPES", value_delimiter = ',', default_value = "1")]
    itype: Vec<i64>,
    /// Left eigenvector jobs for geev
    #[arg(long, value_name = "JOBS", value_delimiter = ',', default_value = "novec")]
    jobvl: Vec<Job>,
    /// Right eigenvector jobs for geev
    #[arg(long, value_name = "JOBS", value_delimiter = ',', default_value = "vec")]
    jobvr: Vec<Job>,
    /// Eigenvalue selections for hbgvx and sbgvx
    #[arg(long, value_name = "RANGES", value_delimiter = ',', default_value = "all")]
    range: Vec<Range>,
    /// Lower end of the value range (exclusive)
    #[arg(long, value_name = "X", default_value_t = 0.0, allow_hyphen_values = true)]
    vl: f64,
    /// Upper end of the value range (inclusive)
    #[arg(long, value_name = "X", default_value_t = 1.0, allow_hyphen_values = true)]
    vu: f64,
    /// First eigenvalue index of the index range
    #[arg(long, value_name = "N", default_value_t = 1)]
    il: i64,
    /// Last eigenvalue index of the index range (default: n)
    #[arg(long, value_name = "N")]
    iu: Option<i64>,
    /// Parts of the matrix lacpy copies
    #[arg(long = "matrix-type", value_name = "TYPES", value_delimiter = ',', default_value = "general")]
    matrix_type: Vec<MatrixType>,
    /// Singular-value cutoffs for gelss and gelsd; negative means machine precision
    #[arg(long, value_name = "X", value_delimiter = ',', default_value = "-1", allow_hyphen_values = true)]
    rcond: Vec<f64>,
    /// Round leading dimensions up to a multiple of this
    #[arg(long, value_name = "N", default_value_t = 1)]
    align: i64,
    /// Seed for the input generator
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    seed: u64,
    /// Tolerance, in multiples of machine epsilon, for non-exact checks
    #[arg(long, value_name = "X", default_value_t = 50.0)]
    tol: f64,
    /// Absolute eigenvalue tolerance passed to hbgvx/sbgvx
    #[arg(long, value_name = "X", default_value_t = 0.0)]
    abstol: f64,
    /// Also write the results as CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
    /// Worker threads (default: one per core)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

impl RunArgs {
    fn routines(&self) -> Result<Vec<Routine>, String> {
        if self.routines.iter().any(|r| r.eq_ignore_ascii_case("all")) {
            return Ok(Routine::ALL.to_vec());
        }
        let mut out = Vec::new();
        for name in &self.routines {
            let routine = name.parse::<Routine>()?;
            if !out.contains(&routine) {
                out.push(routine);
            }
        }
        Ok(out)
    }

    /// Shapes this routine sees. Square routines keep only `n`, and `k` is kept only
    /// where it is read, so the sweep has no duplicate cases.
    fn shapes(&self, routine: Routine) -> Vec<Shape> {
        let mut out: Vec<Shape> = Vec::new();
        for shape in self.dim.iter().flat_map(DimSpec::shapes) {
            let m = if routine.takes_m() { shape.m } else { shape.n };
            let k = if routine.takes_k() { shape.k } else { shape.n };
            let shape = Shape { m, n: shape.n, k };
            if !out.contains(&shape) {
                out.push(shape);
            }
        }
        out
    }

    /// Every case of the sweep. Flag axes a routine does not read are not expanded.
    fn cases(&self, routines: &[Routine]) -> Vec<Params> {
        let mut cases = Vec::new();
        for &routine in routines {
            let mut base = Vec::new();
            for &kind in self.types.iter().filter(|&&kind| routine.supports(kind)) {
                for shape in self.shapes(routine) {
                    let mut params = Params::new(routine, kind, shape.n);
                    params.m = shape.m;
                    params.k = shape.k;
                    params.p = self.p.unwrap_or(shape.n);
                    params.nrhs = self.nrhs;
                    params.kd = self.kd;
                    params.vl = self.vl;
                    params.vu = self.vu;
                    params.il = self.il;
                    params.iu = self.iu.unwrap_or(shape.n);
                    params.align = self.align;
                    params.seed = self.seed;
                    params.tol = self.tol;
                    params.abstol = self.abstol;
                    base.push(params);
                }
            }

            let mut expanded = sweep(base, routine.takes_uplo(), &self.uplo, |p, v| p.uplo = v);
            expanded = sweep(expanded, routine.takes_norm(), &self.norm, |p, v| p.norm = v);
            expanded = sweep(expanded, routine.takes_diag(), &self.diag, |p, v| p.diag = v);
            expanded = sweep(expanded, routine.takes_itype(), &self.itype, |p, v| p.itype = v);
            expanded = sweep(expanded, routine.takes_jobz(), &self.jobz, |p, v| p.jobz = v);
            expanded = sweep(expanded, routine.takes_range(), &self.range, |p, v| p.range = v);
            expanded = sweep(expanded, routine.takes_eigenvector_jobs(), &self.jobvl, |p, v| p.jobvl = v);
            expanded = sweep(expanded, routine.takes_eigenvector_jobs(), &self.jobvr, |p, v| p.jobvr = v);
            expanded = sweep(expanded, routine.takes_matrix_type(), &self.matrix_type, |p, v| p.matrix_type = v);
            expanded = sweep(expanded, routine.takes_rcond(), &self.rcond, |p, v| p.rcond = v);
            cases.extend(expanded);
        }
        cases
    }
}

fn run(args: &RunArgs) -> Result<bool, String> {
    let routines = args.routines()?;
    let cases = args.cases(&routines);
    if cases.is_empty() {
        return Err("the sweep is empty; check --type and the routine list".to_string());
    }

    let mut builder = ThreadPoolBuilder::new();
    if let Some(jobs) = args.jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder
        .build()
        .map_err(|e| format!("failed to start worker pool: {}", e))?;

    eprintln!(
        "[INFO] Running {} cases over {} routines on {} threads",
        cases.len(),
        routines.len(),
        pool.current_num_threads()
    );

    let start = Instant::now();
    let pb = lapackx::progress::case_progress_bar("lapackx", cases.len() as u64);
    let results: Vec<conformance::Result<CaseReport>> = pool.install(|| {
        cases
            .par_iter()
            .map(|params| {
                pb.set_message(format!("{}{}", params.kind.prefix(), params.routine));
                let result = conformance::run_case(params);
                pb.inc(1);
                result
            })
            .collect()
    });
    pb.finish_and_clear();

    let mut reports = Vec::with_capacity(results.len());
    let mut harness_errors = 0usize;
    for (params, result) in cases.iter().zip(results) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                harness_errors += 1;
                eprintln!("[WARN] {}{} n={}: {}", params.kind.prefix(), params.routine, params.n, e);
            }
        }
    }

    report::print_table(&reports, ColorChoice::Auto).map_err(|e| e.to_string())?;

    if let Some(path) = &args.csv {
        report::write_csv(&reports, path)
            .map_err(|e| format!("failed to write {}: {}", path.display(), e))?;
        eprintln!("[INFO] Wrote {} cases to {}", reports.len(), path.display());
    }

    let failed = reports.iter().filter(|r| !r.okay).count();
    eprintln!(
        "[INFO] {} passed, {} failed, {} not run, in {:.2?}",
        reports.len() - failed,
        failed,
        harness_errors,
        start.elapsed()
    );
    Ok(failed == 0 && harness_errors == 0)
}

fn list() {
    println!("{:<8} {:<12} types", "routine", "workspace");
    for &routine in Routine::ALL {
        let kinds: String = ScalarKind::ALL
            .iter()
            .filter(|&&kind| routine.supports(kind))
            .map(|kind| kind.prefix())
            .collect();
        println!("{:<8} {:<12} {}", routine.name(), routine.workspace().to_string(), kinds);
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => match run(&args) {
            Ok(true) => {}
            Ok(false) => process::exit(1),
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                process::exit(2);
            }
        },
        Command::List => list(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dim_range_parses_all_forms() {
        assert_eq!("10:100:30".parse::<DimRange>().unwrap().values(), vec![10, 40, 70, 100]);
        assert_eq!("5".parse::<DimRange>().unwrap().values(), vec![5]);
        assert_eq!("0:2".parse::<DimRange>().unwrap().values(), vec![0, 1, 2]);
        assert!("3:1".parse::<DimRange>().is_err());
        assert!("1:5:0".parse::<DimRange>().is_err());
        assert!("a:b".parse::<DimRange>().is_err());
    }

    #[test]
    fn dim_range_stops_at_the_top_of_i64() {
        let range = DimRange {
            start: i64::MAX - 3,
            end: i64::MAX,
            step: 2,
        };
        assert_eq!(range.values(), vec![i64::MAX - 3, i64::MAX - 1]);
        let top: DimRange = format!("{}", i64::MAX).parse().unwrap();
        assert_eq!(top.values(), vec![i64::MAX]);
    }

    #[test]
    fn dim_spec_accepts_shapes() {
        assert_eq!(
            "30x10".parse::<DimSpec>().unwrap(),
            DimSpec::Shape(Shape { m: 30, n: 10, k: 10 })
        );
        assert_eq!(
            "8X12x4".parse::<DimSpec>().unwrap(),
            DimSpec::Shape(Shape { m: 8, n: 12, k: 4 })
        );
        assert_eq!("5".parse::<DimSpec>().unwrap().shapes(), vec![Shape { m: 5, n: 5, k: 5 }]);
        assert!("3x".parse::<DimSpec>().is_err());
        assert!("-1x4".parse::<DimSpec>().is_err());
        assert!("1x2x3x4".parse::<DimSpec>().is_err());
    }

    #[test]
    fn rectangular_least_squares_sweep() {
        let cli = Cli::parse_from([
            "lapackx", "run", "gelss", "pbsv", "--type", "d", "--dim", "30x10,10x30", "--rcond=-1,1e-3",
        ]);
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        let routines = args.routines().unwrap();
        let cases = args.cases(&routines);

        let gelss: Vec<&Params> = cases.iter().filter(|p| p.routine == Routine::Gelss).collect();
        // 2 shapes x 2 cutoffs, no uplo axis
        assert_eq!(gelss.len(), 4);
        assert!(gelss.iter().all(|p| p.m != p.n));
        assert!(gelss.iter().any(|p| p.m == 30 && p.n == 10 && p.rcond == 1e-3));

        // pbsv is square: both shapes collapse onto their n, then sweep both triangles
        let pbsv: Vec<&Params> = cases.iter().filter(|p| p.routine == Routine::Pbsv).collect();
        assert_eq!(pbsv.len(), 4);
        assert!(pbsv.iter().all(|p| p.m == p.n && p.rcond == -1.0));
    }

    #[test]
    fn eigen_flag_axes_reach_their_routines() {
        let cli = Cli::parse_from([
            "lapackx", "run", "hpgv", "geev", "ggrqf", "lacpy", "unglq", "--type", "z", "--dim", "6x9x4",
            "--uplo", "upper", "--jobz", "novec,vec", "--itype", "1,2,3", "--jobvl", "novec,vec",
            "--jobvr", "novec,vec", "--matrix-type", "upper,lower", "--p", "7",
        ]);
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        let routines = args.routines().unwrap();
        let cases = args.cases(&routines);
        let count = |routine: Routine| cases.iter().filter(|p| p.routine == routine).count();

        assert_eq!(count(Routine::Hpgv), 2 * 3);
        assert_eq!(count(Routine::Geev), 2 * 2);
        assert_eq!(count(Routine::Lacpy), 2);
        assert_eq!(count(Routine::Ggrqf), 1);
        assert_eq!(count(Routine::Unglq), 1);

        let ggrqf = cases.iter().find(|p| p.routine == Routine::Ggrqf).unwrap();
        assert_eq!((ggrqf.m, ggrqf.n, ggrqf.p), (6, 9, 7));
        let unglq = cases.iter().find(|p| p.routine == Routine::Unglq).unwrap();
        assert_eq!((unglq.m, unglq.n, unglq.k), (6, 9, 4));
        // hpgv is square and ignores m and k
        assert!(cases
            .iter()
            .filter(|p| p.routine == Routine::Hpgv)
            .all(|p| p.m == 9 && p.k == 9 && p.iu == 9));
        assert!(cases
            .iter()
            .filter(|p| p.routine == Routine::Hpgv)
            .any(|p| p.itype == 3 && p.jobz == Job::NoVec));
    }

    #[test]
    fn sweep_skips_unread_axes_and_unsupported_types() {
        let cli = Cli::parse_from([
            "lapackx", "run", "lange", "sbgvx", "--type", "d,z", "--dim", "4:8:4",
        ]);
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        let routines = args.routines().unwrap();
        let cases = args.cases(&routines);
        // lange: 2 types x 2 dims x 4 norms; sbgvx: 1 type x 2 dims x 2 uplos
        assert_eq!(cases.len(), 16 + 4);
        assert!(cases
            .iter()
            .filter(|p| p.routine == Routine::Sbgvx)
            .all(|p| p.kind == ScalarKind::Double));
    }

    #[test]
    fn unknown_routine_is_reported() {
        let cli = Cli::parse_from(["lapackx", "run", "getrf"]);
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert!(args.routines().is_err());
    }
}
