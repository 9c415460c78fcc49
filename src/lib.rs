//! # Route-ranker
//!
//! Ranks public transport routes by rider satisfaction and recommends which
//! routes should receive extra busses.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use route_ranker::{rank_file, select_routes, RankerConfig};
//!
//! fn main() -> route_ranker::Result<()> {
//!     let ranked = rank_file(&RankerConfig::default())?;
//!     let top = select_routes(&ranked, 2);
//!     println!("{top:?}");
//!     Ok(())
//! }
//! ```

mod core;

pub use crate::core::config::{RankerConfig, DEFAULT_DATA_FILE, NO_SIGNAL_THRESHOLD};
pub use crate::core::error::{Error, ErrorCategory, Result};
pub use crate::core::loader::{load_routes, parse_routes};
pub use crate::core::prompt::{validate_quantity, InputError, QuantityPrompt, PROMPT_MESSAGE};
pub use crate::core::ranker::{rank_routes, rank_routes_with_threshold, signal_count};
pub use crate::core::route::RouteRecord;
pub use crate::core::selector::{report_selection, select_routes, NO_ACTION_MESSAGE, SELECTION_HEADER};

/// Load the configured data file and rank it
///
/// # Errors
///
/// Propagates any load error; ranking itself cannot fail.
pub fn rank_file(config: &RankerConfig) -> Result<Vec<RouteRecord>> {
    let records = load_routes(&config.data_file)?;
    let ranked = rank_routes_with_threshold(&records, config.no_signal_threshold);
    log::debug!(
        "Ranked {} routes, {} with usable signal",
        ranked.len(),
        signal_count(&ranked, config.no_signal_threshold)
    );
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_rank_file_scenario() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "101, 2.0\n102, 0.5\n103, 1.0\n104, 0.0\n").unwrap();

        let config = RankerConfig {
            data_file: file.path().to_path_buf(),
            ..Default::default()
        };
        let ranked = rank_file(&config).unwrap();
        let order: Vec<i64> = ranked.iter().map(|r| r.route_number).collect();
        assert_eq!(order, vec![103, 101, 102, 104]);
        assert_eq!(select_routes(&ranked, 2), vec![103, 101]);
    }

    #[test]
    fn test_rank_file_duplicate_stops_before_ranking() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "12,3.0\n12,5.0\n").unwrap();

        let config = RankerConfig {
            data_file: file.path().to_path_buf(),
            ..Default::default()
        };
        let err = rank_file(&config).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::DuplicateRoute);
    }
}
