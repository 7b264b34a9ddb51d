use crate::models::color::Color;

use super::traits::DrawSurface;

/// Off-screen RGB raster buffer, row-major, initialized white.
///
/// Pixel-exact: rectangle edges and path points round to the nearest integer
/// pixel before painting, and everything outside the bounds is clipped
/// silently. Two renders with identical inputs produce identical buffers,
/// which is what the idempotence tests compare.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    path: Vec<Vec<(f64, f64)>>,
    line_width: f64,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::WHITE; (width as usize) * (height as usize)],
            path: Vec::new(),
            line_width: 1.0,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at (x, y), or `None` outside the bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// The raw pixel buffer, row-major top-to-bottom.
    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = color;
    }

    /// Bresenham line between integer endpoints, stamped to the current
    /// line width.
    fn draw_line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        let thickness = (self.line_width.round() as i64).max(1);
        let lo = -(thickness / 2);
        let hi = thickness - 1 + lo;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            for ox in lo..=hi {
                for oy in lo..=hi {
                    self.set_pixel(x + ox, y + oy, color);
                }
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Mirror negative extents so `(x, y, w, h)` always selects the same pixels
/// as its normalized form — canvas `fillRect` semantics.
fn normalize_rect(x: f64, y: f64, w: f64, h: f64) -> (f64, f64, f64, f64) {
    let (x, w) = if w < 0.0 { (x + w, -w) } else { (x, w) };
    let (y, h) = if h < 0.0 { (y + h, -h) } else { (y, h) };
    (x, y, w, h)
}

impl DrawSurface for RasterSurface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        let (x, y, w, h) = normalize_rect(x, y, w, h);
        let x0 = (x.round() as i64).max(0);
        let y0 = (y.round() as i64).max(0);
        let x1 = ((x + w).round() as i64).min(i64::from(self.width));
        let y1 = ((y + h).round() as i64).min(i64::from(self.height));
        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel(px, py, color);
            }
        }
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        let (x, y, w, h) = normalize_rect(x, y, w, h);
        let x0 = x.round() as i64;
        let y0 = y.round() as i64;
        // Outermost pixel ring inside the rounded rect bounds.
        let x1 = (x + w).round() as i64 - 1;
        let y1 = (y + h).round() as i64 - 1;
        if x1 < x0 || y1 < y0 {
            return;
        }
        for px in x0..=x1 {
            self.set_pixel(px, y0, color);
            self.set_pixel(px, y1, color);
        }
        for py in y0..=y1 {
            self.set_pixel(x0, py, color);
            self.set_pixel(x1, py, color);
        }
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        match self.path.last_mut() {
            Some(subpath) => subpath.push((x, y)),
            // line_to with no open subpath starts one, as on canvas
            None => self.path.push(vec![(x, y)]),
        }
    }

    fn stroke_path(&mut self, color: Color) {
        let path = self.path.clone();
        for subpath in &path {
            for pair in subpath.windows(2) {
                let (x0, y0) = pair[0];
                let (x1, y1) = pair[1];
                self.draw_line(
                    x0.round() as i64,
                    y0.round() as i64,
                    x1.round() as i64,
                    y1.round() as i64,
                    color,
                );
            }
        }
    }
}
