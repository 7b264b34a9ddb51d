pub mod errors;
pub mod feed;
pub mod models;
pub mod services;
pub mod surfaces;

use tracing::debug;

use errors::ChartError;
use models::config::{ChartOptions, SurfaceConfig};
use models::record::PriceRecord;
use models::scale::ChartScale;
use services::candle_service::CandleService;
use services::grid_service::GridService;
use services::series_service::SeriesService;
use surfaces::raster::RasterSurface;
use surfaces::svg::SvgSurface;
use surfaces::traits::DrawSurface;

/// Main entry point for the Stock Chart core library.
/// Holds the rendering options and the services that operate per render call.
///
/// The engine itself is stateless across calls — every render builds its
/// series, range, and scale fresh from the caller's records, and fully
/// replaces prior surface contents (the grid pass clears via background
/// fill). Calls against the same surface must be serialized by the caller;
/// the engine takes the surface exclusively for the duration of one
/// synchronous pass and nothing more.
#[must_use]
pub struct ChartEngine {
    options: ChartOptions,
    series_service: SeriesService,
    grid_service: GridService,
    candle_service: CandleService,
}

impl std::fmt::Debug for ChartEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartEngine")
            .field("options", &self.options)
            .finish()
    }
}

impl ChartEngine {
    /// Create an engine with default options (200 points max, 2px candles,
    /// green/red bodies).
    pub fn new() -> Self {
        Self::build(ChartOptions::default())
    }

    /// Create an engine with custom options. Fails on zero-valued sizes.
    pub fn with_options(options: ChartOptions) -> Result<Self, ChartError> {
        options.validate()?;
        Ok(Self::build(options))
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// One-shot synchronous render of `records` onto `surface`.
    ///
    /// Sequence: grid → trim → range → scale → candles + close line →
    /// border re-stroke. An empty series (before or after trimming) leaves
    /// the grid and border in place and returns `Ok` — a valid terminal
    /// state, not an error.
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        config: &SurfaceConfig,
        records: Vec<PriceRecord>,
    ) -> Result<(), ChartError> {
        config.validate()?;

        self.grid_service.paint_grid(surface, config, &self.options);

        let received = records.len();
        let series = self
            .series_service
            .normalize(records, self.options.max_points);
        debug!(
            received,
            kept = series.len(),
            max_points = self.options.max_points,
            "normalized series"
        );

        if series.is_empty() {
            return Ok(());
        }

        let range = self.series_service.compute_range(&series)?;
        debug!(low = range.low, high = range.high, "computed price range");

        let scale = ChartScale::new(config, range, series.len());
        self.candle_service
            .render(surface, &series, &scale, &self.options);

        // Candle fills can overpaint the frame edge; restore it last.
        self.grid_service
            .stroke_border(surface, config, self.options.border_color);

        Ok(())
    }

    /// Render into a fresh off-screen raster buffer and return it.
    pub fn render_to_raster(
        &self,
        config: &SurfaceConfig,
        records: Vec<PriceRecord>,
    ) -> Result<RasterSurface, ChartError> {
        let mut surface = RasterSurface::new(config.width, config.height);
        self.render(&mut surface, config, records)?;
        Ok(surface)
    }

    /// Render into an SVG builder and return the finished document.
    pub fn render_to_svg(
        &self,
        config: &SurfaceConfig,
        records: Vec<PriceRecord>,
    ) -> Result<String, ChartError> {
        let mut surface = SvgSurface::new(config.width, config.height);
        self.render(&mut surface, config, records)?;
        Ok(surface.finish())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(options: ChartOptions) -> Self {
        Self {
            options,
            series_service: SeriesService::new(),
            grid_service: GridService::new(),
            candle_service: CandleService::new(),
        }
    }
}

impl Default for ChartEngine {
    fn default() -> Self {
        Self::new()
    }
}
