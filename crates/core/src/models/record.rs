use serde::{Deserialize, Serialize};

/// A single OHLCV bar as handed to the engine by the data feed.
///
/// **Ordering**: `order` is a 1-based recency rank — the most recent period
/// has `order` 1, the oldest the largest rank. The engine trusts this rank
/// for horizontal placement; it never re-sorts by `key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// 1-based recency rank (most recent = 1)
    pub order: u32,

    /// Period label from the data source (e.g., "2026-08-05 15:55:00")
    pub key: String,

    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        order: u32,
        key: impl Into<String>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            order,
            key: key.into(),
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Whether `low ≤ open ≤ high`, `low ≤ close ≤ high`, and no field is
    /// negative. Informational only — the engine renders malformed records
    /// as-is, producing inverted boxes for `low > high`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.low <= self.open
            && self.open <= self.high
            && self.low <= self.close
            && self.close <= self.high
            && self.low >= 0.0
            && self.volume >= 0.0
    }
}
