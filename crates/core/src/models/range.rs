use serde::{Deserialize, Serialize};

/// Vertical price extent of a normalized series: `low` is the minimum `low`
/// across the series, `high` the maximum `high`.
///
/// Invariant (for ranges produced by `SeriesService::compute_range` over
/// well-formed records): `high ≥ low`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl PriceRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Height of the range in price units.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// A flat series collapses the range to a single price. Mapping falls
    /// back to the vertical midline in that case rather than dividing by zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.low && price <= self.high
    }
}
