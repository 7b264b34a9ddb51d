use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::errors::ChartError;

/// Dimensions and grid density of the drawing surface, fixed per render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Surface width in pixels
    pub width: u32,

    /// Surface height in pixels
    pub height: u32,

    /// Number of grid cells per axis; the grid draws `grid_divisions + 1`
    /// lines in each direction
    pub grid_divisions: u32,
}

impl SurfaceConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            grid_divisions: 15,
        }
    }

    pub fn with_grid_divisions(mut self, grid_divisions: u32) -> Self {
        self.grid_divisions = grid_divisions;
        self
    }

    /// All fields must be positive — a zero dimension makes every coordinate
    /// mapping meaningless and a zero division count would divide by zero in
    /// grid layout.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidConfig(format!(
                "surface dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.grid_divisions == 0 {
            return Err(ChartError::InvalidConfig(
                "grid_divisions must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Rendering options recognized by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Maximum number of records kept after trimming (most recent first)
    pub max_points: usize,

    /// Width of each candle body in pixels
    pub candle_width: u32,

    /// Fill for the high→close body segment
    pub advance_color: Color,

    /// Fill for the close→low body segment
    pub decline_color: Color,

    pub grid_color: Color,
    pub border_color: Color,
    pub background_color: Color,

    /// Stroke for the connecting close-price line
    pub line_color: Color,
    pub line_width: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            max_points: 200,
            candle_width: 2,
            advance_color: Color::GREEN,
            decline_color: Color::RED,
            grid_color: Color::GRID,
            border_color: Color::BLACK,
            background_color: Color::WHITE,
            line_color: Color::BLACK,
            line_width: 1.0,
        }
    }
}

impl ChartOptions {
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.max_points == 0 {
            return Err(ChartError::InvalidConfig(
                "max_points must be positive".to_string(),
            ));
        }
        if self.candle_width == 0 {
            return Err(ChartError::InvalidConfig(
                "candle_width must be positive".to_string(),
            ));
        }
        if self.line_width <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "line_width must be positive, got {}",
                self.line_width
            )));
        }
        Ok(())
    }
}
