use crate::models::color::Color;

/// Trait abstraction over any 2D drawing target the engine can render to —
/// an off-screen raster buffer, an SVG builder, a windowing canvas.
///
/// Colors are explicit per call rather than held as surface state, so no
/// component can observe a fill or stroke style left behind by another.
/// The only state a surface keeps between calls is the current path
/// geometry and the line width.
///
/// Coordinates may fall outside the surface bounds; implementations clip,
/// they never fail.
pub trait DrawSurface {
    /// Fill an axis-aligned rectangle. Negative extents select the mirrored
    /// rectangle (canvas `fillRect` semantics), so inverted candle geometry
    /// from malformed records still paints.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);

    /// Stroke a 1-unit rectangle outline.
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);

    /// Line width used by subsequent `stroke_path` calls.
    fn set_line_width(&mut self, width: f64);

    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    /// Start a new subpath at the given point.
    fn move_to(&mut self, x: f64, y: f64);

    /// Extend the current subpath to the given point.
    fn line_to(&mut self, x: f64, y: f64);

    /// Stroke the accumulated path once, atomically — uniform width and
    /// style over the whole path. The path survives the stroke; only
    /// `begin_path` clears it.
    fn stroke_path(&mut self, color: Color);
}
