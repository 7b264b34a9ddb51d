use super::config::SurfaceConfig;
use super::range::PriceRange;
use super::record::PriceRecord;

/// Maps price/recency space onto pixel space for one render pass.
///
/// Pure and deterministic: constructed from the surface dimensions, the
/// series' price range, and the series length, then queried with no side
/// effects. Results are not clamped — coordinates outside the surface are
/// the surface's problem (it clips).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    width: f64,
    height: f64,
    range: PriceRange,
    series_len: u32,
    slot_width: f64,
}

impl ChartScale {
    pub fn new(surface: &SurfaceConfig, range: PriceRange, series_len: usize) -> Self {
        let width = f64::from(surface.width);
        let series_len = series_len as u32;
        // Pixel-exact slot: each record occupies a rounded-integer column.
        let slot_width = if series_len == 0 {
            0.0
        } else {
            (width / f64::from(series_len)).round()
        };
        Self {
            width,
            height: f64::from(surface.height),
            range,
            series_len,
            slot_width,
        }
    }

    /// Linear map from `[range.low, range.high]` to `[height, 0]` — price
    /// increases upward in chart space, downward in pixel space.
    ///
    /// A degenerate (flat) range maps every price to the vertical midline
    /// instead of dividing by zero.
    #[must_use]
    pub fn map_y(&self, price: f64) -> f64 {
        if self.range.is_degenerate() {
            return self.height / 2.0;
        }
        self.height - (price - self.range.low) * self.height / self.range.span()
    }

    /// Horizontal slot position from the record's recency rank: the oldest
    /// kept record sits at the left edge, `order` 1 furthest right.
    #[must_use]
    pub fn map_x(&self, record: &PriceRecord) -> f64 {
        (f64::from(self.series_len) - f64::from(record.order)) * self.slot_width
    }

    /// Width of one record's column in pixels.
    #[must_use]
    pub fn slot_width(&self) -> f64 {
        self.slot_width
    }

    /// Full surface width — the close-price line anchors its first point here.
    #[must_use]
    pub fn surface_width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn range(&self) -> PriceRange {
        self.range
    }
}
