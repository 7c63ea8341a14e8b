//! Console summary of a run

use crate::models::DATE_FORMAT;
use crate::runner::RunSummary;

/// Render the run summary printed at the end of a run
pub fn summary(run: &RunSummary) -> String {
    let stats = &run.stats;
    let mut output = String::new();

    output.push_str(&format!("Run date: {}\n", run.run_date.format(DATE_FORMAT)));
    output.push_str(&format!("Number of games: {}\n", stats.total()));
    output.push_str(&format!("New games: {}\n", stats.new));
    output.push_str(&format!("Updated games: {}\n", stats.updated));
    output.push_str(&format!("Par games: {}\n", stats.par));
    output.push_str(&format!("Unchanged games: {}\n", stats.unchanged));
    if stats.skipped > 0 {
        output.push_str(&format!("Skipped listings: {}\n", stats.skipped));
    }
    output.push_str(&format!(
        "In stock: {} ({} not in catalog)\n",
        stats.in_stock, stats.unknown_stock
    ));
    output.push_str(&format!(
        "Catalog: {} titles, {} at par or updated{}\n",
        run.catalog_size,
        run.actionable,
        if run.persisted { "" } else { " (dry run, not saved)" }
    ));
    output.push_str(&format!(
        "--- {:.2} seconds ---",
        run.elapsed.as_secs_f64()
    ));

    output
}
