use crate::models::config::ChartOptions;
use crate::models::record::PriceRecord;
use crate::models::scale::ChartScale;
use crate::surfaces::traits::DrawSurface;

/// Issues the draw calls for candle bodies and the connecting close-price
/// line.
///
/// Each record becomes two stacked filled boxes centered on its slot: the
/// segment from the period high down to the close in the advance color, and
/// from the close down to the low in the decline color. The split is always
/// at the close — the renderer does not compare open against close.
pub struct CandleService;

impl CandleService {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole series. A no-op for an empty series — neither pass
    /// runs and no line is stroked.
    ///
    /// All lower bodies are painted across the series before any upper body
    /// (two full passes, preserved layering).
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        series: &[PriceRecord],
        scale: &ChartScale,
        options: &ChartOptions,
    ) {
        if series.is_empty() {
            return;
        }

        let size = f64::from(options.candle_width);
        for record in series {
            self.paint_lower_body(surface, record, scale, size, options);
        }
        for record in series {
            self.paint_upper_body(surface, record, scale, size, options);
        }

        self.stroke_close_line(surface, series, scale, options);
    }

    /// Box from the high price down to the close price.
    fn paint_upper_body(
        &self,
        surface: &mut dyn DrawSurface,
        record: &PriceRecord,
        scale: &ChartScale,
        size: f64,
        options: &ChartOptions,
    ) {
        let y_high = scale.map_y(record.high);
        let y_close = scale.map_y(record.close);
        surface.fill_rect(
            scale.map_x(record) - size / 2.0,
            y_high,
            size,
            y_close - y_high,
            options.advance_color,
        );
    }

    /// Box from the close price down to the low price.
    fn paint_lower_body(
        &self,
        surface: &mut dyn DrawSurface,
        record: &PriceRecord,
        scale: &ChartScale,
        size: f64,
        options: &ChartOptions,
    ) {
        let y_close = scale.map_y(record.close);
        let y_low = scale.map_y(record.low);
        surface.fill_rect(
            scale.map_x(record) - size / 2.0,
            y_close,
            size,
            y_low - y_close,
            options.decline_color,
        );
    }

    /// One continuous path through every close price, stroked once.
    ///
    /// The path anchors at the full surface width rather than the first
    /// record's mapped x — observed behavior of the original renderer,
    /// kept as-is.
    fn stroke_close_line(
        &self,
        surface: &mut dyn DrawSurface,
        series: &[PriceRecord],
        scale: &ChartScale,
        options: &ChartOptions,
    ) {
        surface.set_line_width(options.line_width);
        surface.begin_path();
        surface.move_to(scale.surface_width(), scale.map_y(series[0].close));
        for record in series {
            surface.line_to(scale.map_x(record), scale.map_y(record.close));
        }
        surface.stroke_path(options.line_color);
    }
}

impl Default for CandleService {
    fn default() -> Self {
        Self::new()
    }
}
