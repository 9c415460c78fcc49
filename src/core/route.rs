//! Route record type shared by loading, ranking and selection

/// One transit route's observed satisfaction signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRecord {
    /// Route identifier, unique within a loaded dataset
    pub route_number: i64,

    /// Rider satisfaction; lower means more need for extra busses
    pub happy_ratio: f64,
}

impl RouteRecord {
    pub fn new(route_number: i64, happy_ratio: f64) -> Self {
        Self {
            route_number,
            happy_ratio,
        }
    }

    /// Whether the ratio falls below `threshold` and so carries no usable signal
    pub fn lacks_signal(&self, threshold: f64) -> bool {
        self.happy_ratio < threshold
    }
}
