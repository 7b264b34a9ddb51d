use crate::errors::ChartError;
use crate::models::range::PriceRange;
use crate::models::record::PriceRecord;

/// Trims raw record sequences to a displayable length and computes the
/// price extrema used for vertical scaling.
///
/// The input order is trusted: records arrive ranked by recency (`order` 1
/// first), so trimming keeps the prefix — the most recent N — and never
/// sorts.
pub struct SeriesService;

impl SeriesService {
    pub fn new() -> Self {
        Self
    }

    /// Keep at most `max` records, dropping the tail (the oldest entries).
    /// A sequence already within the limit passes through unchanged, as does
    /// an empty one.
    #[must_use]
    pub fn normalize(&self, mut records: Vec<PriceRecord>, max: usize) -> Vec<PriceRecord> {
        if records.len() > max {
            records.truncate(max);
        }
        records
    }

    /// Single O(n) scan for `min(low)` / `max(high)` across the series.
    ///
    /// Callers must not invoke rendering when this fails: an empty series has
    /// no defined range.
    pub fn compute_range(&self, series: &[PriceRecord]) -> Result<PriceRange, ChartError> {
        let first = series.first().ok_or(ChartError::EmptySeries)?;
        let mut range = PriceRange::new(first.low, first.high);
        for record in &series[1..] {
            if record.low < range.low {
                range.low = record.low;
            }
            if record.high > range.high {
                range.high = record.high;
            }
        }
        Ok(range)
    }
}

impl Default for SeriesService {
    fn default() -> Self {
        Self::new()
    }
}
