use std::fmt::Write as _;

use crate::models::color::Color;

use super::traits::DrawSurface;

/// Accumulates SVG elements from engine draw calls; `finish()` wraps them in
/// an `<svg>` document of the surface dimensions.
///
/// Fill and stroke rectangles become `<rect>` elements, each stroked path
/// becomes one `<polyline>` per subpath. Colors serialize as `#rrggbb`.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    elements: Vec<String>,
    path: Vec<Vec<(f64, f64)>>,
    line_width: f64,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
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

    /// Number of emitted elements so far.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Consume the surface and produce the complete SVG document.
    #[must_use]
    pub fn finish(self) -> String {
        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height,
        );
        for element in &self.elements {
            doc.push_str("  ");
            doc.push_str(element);
            doc.push('\n');
        }
        doc.push_str("</svg>\n");
        doc
    }
}

fn normalize_rect(x: f64, y: f64, w: f64, h: f64) -> (f64, f64, f64, f64) {
    let (x, w) = if w < 0.0 { (x + w, -w) } else { (x, w) };
    let (y, h) = if h < 0.0 { (y + h, -h) } else { (y, h) };
    (x, y, w, h)
}

impl DrawSurface for SvgSurface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        let (x, y, w, h) = normalize_rect(x, y, w, h);
        self.elements.push(format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"{color}\"/>"
        ));
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        let (x, y, w, h) = normalize_rect(x, y, w, h);
        self.elements.push(format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"1\"/>"
        ));
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
            None => self.path.push(vec![(x, y)]),
        }
    }

    fn stroke_path(&mut self, color: Color) {
        for subpath in &self.path {
            if subpath.len() < 2 {
                continue;
            }
            let mut points = String::new();
            for (x, y) in subpath {
                if !points.is_empty() {
                    points.push(' ');
                }
                let _ = write!(points, "{x},{y}");
            }
            self.elements.push(format!(
                "<polyline points=\"{points}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{lw}\"/>",
                lw = self.line_width,
            ));
        }
    }
}
