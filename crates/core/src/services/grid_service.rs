use crate::models::color::Color;
use crate::models::config::{ChartOptions, SurfaceConfig};
use crate::surfaces::traits::DrawSurface;

/// Paints the static chart scaffolding: background fill, a uniform grid,
/// and the outer border. No data dependency — callable before any series
/// is known.
pub struct GridService;

impl GridService {
    pub fn new() -> Self {
        Self
    }

    /// Fill the surface with the background color, stroke
    /// `grid_divisions + 1` horizontal and vertical lines, then the border.
    ///
    /// Each grid line snaps to the nearest integer pixel so the 1-unit
    /// stroke lands on whole pixels instead of anti-aliased half-pixels.
    pub fn paint_grid(
        &self,
        surface: &mut dyn DrawSurface,
        config: &SurfaceConfig,
        options: &ChartOptions,
    ) {
        let width = f64::from(config.width);
        let height = f64::from(config.height);
        let divisions = config.grid_divisions;

        surface.fill_rect(0.0, 0.0, width, height, options.background_color);

        surface.set_line_width(1.0);

        // Horizontal lines, one path stroked once
        let step_y = height / f64::from(divisions);
        surface.begin_path();
        for i in 0..=divisions {
            let y = (f64::from(i) * step_y).round();
            surface.move_to(0.0, y);
            surface.line_to(width, y);
        }
        surface.stroke_path(options.grid_color);

        // Vertical lines
        let step_x = width / f64::from(divisions);
        surface.begin_path();
        for i in 0..=divisions {
            let x = (f64::from(i) * step_x).round();
            surface.move_to(x, 0.0);
            surface.line_to(x, height);
        }
        surface.stroke_path(options.grid_color);

        self.stroke_border(surface, config, options.border_color);
    }

    /// Stroke the 1-unit frame around the full surface bounds.
    ///
    /// Exposed separately because candle fills can overpaint the edge
    /// pixels — the engine re-strokes the frame after data rendering.
    pub fn stroke_border(
        &self,
        surface: &mut dyn DrawSurface,
        config: &SurfaceConfig,
        color: Color,
    ) {
        surface.set_line_width(1.0);
        surface.stroke_rect(
            0.0,
            0.0,
            f64::from(config.width),
            f64::from(config.height),
            color,
        );
    }
}

impl Default for GridService {
    fn default() -> Self {
        Self::new()
    }
}
