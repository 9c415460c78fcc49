//! Run configuration for route-ranker

use std::path::PathBuf;

/// Data file read from the working directory
pub const DEFAULT_DATA_FILE: &str = "routes.txt";

/// Routes with a happy ratio below this value carry no usable signal
pub const NO_SIGNAL_THRESHOLD: f64 = 1.0;

/// Configuration for a ranking run
#[derive(Debug, Clone, PartialEq)]
pub struct RankerConfig {
    /// Route data file
    pub data_file: PathBuf,

    /// Ratios strictly below this are ranked last
    pub no_signal_threshold: f64,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            no_signal_threshold: NO_SIGNAL_THRESHOLD,
        }
    }
}
