use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const BAR_CHARS: &str = "█▓░";

/// Create a progress bar that counts finished conformance cases. The current
/// routine goes in the message slot.
pub fn case_progress_bar(label: impl Into<String>, total_cases: u64) -> ProgressBar {
    let label = label.into();
    let pb = ProgressBar::new(total_cases);
    let style = ProgressStyle::with_template(
        "{prefix:.bold.dim} {spinner:.green} [{elapsed_precise}] {wide_bar:.cyan/blue} {pos}/{len} cases ({eta}) {msg}",
    )
    .map(|style| style.progress_chars(BAR_CHARS))
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_prefix(label);
    pb.enable_steady_tick(Duration::from_millis(75));
    pb
}
