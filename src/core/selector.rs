//! Selection and reporting of the routes that get extra busses

use std::io::Write;

use crate::core::route::RouteRecord;

/// Printed when no busses are available
pub const NO_ACTION_MESSAGE: &str =
    "Please try again later when you have additional busses available.";

/// Printed before the selected route numbers
pub const SELECTION_HEADER: &str = "You should add busses to the following routes: ";

/// Route numbers of the first `n` ranked routes
pub fn select_routes(ranked: &[RouteRecord], n: usize) -> Vec<i64> {
    ranked.iter().take(n).map(|r| r.route_number).collect()
}

/// Write the selection report, one route number per line
pub fn report_selection<W: Write>(out: &mut W, selected: &[i64]) -> std::io::Result<()> {
    if selected.is_empty() {
        writeln!(out, "{NO_ACTION_MESSAGE}")?;
        return Ok(());
    }

    writeln!(out, "{SELECTION_HEADER}")?;
    for route in selected {
        writeln!(out, "{route}")?;
    }
    Ok(())
}
