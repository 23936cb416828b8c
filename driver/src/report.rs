//! Console rendering of backend results.

use std::io::{self, Write};
use std::time::Duration;
use quicc::backend::ResourceReport;
use quicc::SearchOutcome;

/// `HH:MM:SS.ff` with centiseconds. Whole days are dropped, so hours stay below 24.
pub fn format_runtime(elapsed: Duration) -> String {
    let total_seconds = elapsed.as_secs();
    format!(
        "{:02}:{:02}:{:02}.{:02}",
        (total_seconds / 3600) % 24,
        (total_seconds / 60) % 60,
        total_seconds % 60,
        elapsed.subsec_millis() / 10
    )
}

pub fn write_runtime<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "\nRuntime: {}", format_runtime(elapsed))
}

pub fn write_estimation<W: Write>(out: &mut W, report: &ResourceReport) -> io::Result<()> {
    writeln!(out, "\nResults\n--------------------")?;
    writeln!(out, "{}", report.to_tsv())
}

pub fn write_simulation<W: Write>(out: &mut W, outcome: &SearchOutcome) -> io::Result<()> {
    match outcome {
        SearchOutcome::Found(input) => writeln!(out, "\nSearch result (hex): {:X}", input),
        SearchOutcome::Exhausted => writeln!(out, "\nSearch failed."),
    }
}
