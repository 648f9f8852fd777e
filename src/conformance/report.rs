//! Result table and CSV export.

use std::io::{self, Write};
use std::path::Path;

use csv::WriterBuilder;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::CaseReport;

const HEADER: [&str; 14] = [
    "routine", "type", "m", "n", "k", "kd", "nrhs", "flags", "info_tst", "info_ref", "error", "okay",
    "time", "ref_time",
];

/// Writes one row per case, with a header.
pub fn write_csv<P: AsRef<Path>>(reports: &[CaseReport], csv_path: P) -> io::Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_path(csv_path)?;
    wtr.write_record(HEADER)?;

    for r in reports {
        wtr.write_record(&[
            r.routine.to_string(),
            r.kind.to_string(),
            r.m.to_string(),
            r.n.to_string(),
            r.k.to_string(),
            r.kd.to_string(),
            r.nrhs.to_string(),
            r.flags.clone(),
            r.info_tst.to_string(),
            r.info_ref.to_string(),
            format!("{:.3e}", r.error),
            r.okay.to_string(),
            format!("{:.6}", r.time),
            format!("{:.6}", r.ref_time),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Prints the result table to stdout, `pass` in green and `FAILED` in red.
pub fn print_table(reports: &[CaseReport], color: ColorChoice) -> io::Result<()> {
    let stdout = StandardStream::stdout(color);
    let mut stdout = stdout.lock();

    writeln!(
        stdout,
        "{:<7} {:<4} {:>6} {:>6} {:>6} {:>4} {:>5}  {:<28} {:>6} {:>6} {:>10} {:>9} {:>9}  status",
        "routine", "type", "m", "n", "k", "kd", "nrhs", "flags", "info", "ref", "error", "time", "ref_time"
    )?;

    for r in reports {
        write!(
            stdout,
            "{:<7} {:<4} {:>6} {:>6} {:>6} {:>4} {:>5}  {:<28} {:>6} {:>6} {:>10.2e} {:>9.4} {:>9.4}  ",
            r.routine.name(),
            r.kind.prefix(),
            r.m,
            r.n,
            r.k,
            r.kd,
            r.nrhs,
            r.flags,
            r.info_tst,
            r.info_ref,
            r.error,
            r.time,
            r.ref_time
        )?;

        let mut color_spec = ColorSpec::new();
        if r.okay {
            color_spec.set_fg(Some(Color::Green));
            stdout.set_color(&color_spec)?;
            write!(stdout, "pass")?;
        } else {
            color_spec.set_fg(Some(Color::Red)).set_bold(true);
            stdout.set_color(&color_spec)?;
            write!(stdout, "FAILED")?;
        }
        stdout.reset()?;
        writeln!(stdout)?;
    }

    let failed = reports.iter().filter(|r| !r.okay).count();
    writeln!(stdout)?;
    if failed == 0 {
        writeln!(stdout, "All {} cases passed.", reports.len())?;
    } else {
        let mut color_spec = ColorSpec::new();
        color_spec.set_fg(Some(Color::Red));
        stdout.set_color(&color_spec)?;
        writeln!(stdout, "{} of {} cases FAILED.", failed, reports.len())?;
        stdout.reset()?;
    }
    Ok(())
}
