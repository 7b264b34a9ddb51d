// Shared test double: a surface that records every draw call verbatim so
// tests can assert on exact call sequences instead of pixels.

#![allow(dead_code)]

use stock_chart_core::models::color::Color;
use stock_chart_core::surfaces::traits::DrawSurface;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Color,
    },
    StrokeRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Color,
    },
    SetLineWidth(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    StrokePath(Color),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_rects_with(&self, color: Color) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { color: f, .. } if *f == color))
            .collect()
    }

    pub fn stroke_rects(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::StrokeRect { .. }))
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn move_tos(&self) -> Vec<(f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::MoveTo(x, y) => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn line_tos(&self) -> Vec<(f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::LineTo(x, y) => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.calls.push(DrawCall::StrokeRect { x, y, w, h, color });
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(DrawCall::SetLineWidth(width));
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::LineTo(x, y));
    }

    fn stroke_path(&mut self, color: Color) {
        self.calls.push(DrawCall::StrokePath(color));
    }
}

/// Approximate float comparison for mapped coordinates.
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
