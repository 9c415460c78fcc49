//! Route ranking for route-ranker
//!
//! Orders routes from most to least in need of an extra bus. Routes whose
//! happy ratio is below the no-signal threshold go last, whatever their value.

use crate::core::config::NO_SIGNAL_THRESHOLD;
use crate::core::route::RouteRecord;

/// Rank routes using the default no-signal threshold
pub fn rank_routes(records: &[RouteRecord]) -> Vec<RouteRecord> {
    rank_routes_with_threshold(records, NO_SIGNAL_THRESHOLD)
}

/// Rank routes, sending every route with a ratio below `threshold` to the end
///
/// Both groups keep ascending ratio order, and equal ratios keep their input
/// order.
pub fn rank_routes_with_threshold(records: &[RouteRecord], threshold: f64) -> Vec<RouteRecord> {
    let mut ascending = records.to_vec();
    ascending.sort_by(|a, b| a.happy_ratio.total_cmp(&b.happy_ratio));

    let (no_signal, mut ranked): (Vec<RouteRecord>, Vec<RouteRecord>) = ascending
        .into_iter()
        .partition(|record| record.lacks_signal(threshold));

    ranked.extend(no_signal);
    ranked
}

/// Number of leading routes in `ranked` that carry a usable signal
pub fn signal_count(ranked: &[RouteRecord], threshold: f64) -> usize {
    ranked.partition_point(|record| !record.lacks_signal(threshold))
}
