// File: crates/lumen-core/tests/common/mod.rs
// Purpose: Recording surface shared by renderer tests; captures paint ops verbatim.

#![allow(dead_code)]

use lumen_core::{Brush, Color, Path, Point, Rect, Surface, TextAlign};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(Color),
    FillPath(Path, Brush),
    StrokePath(Path, Color, f32),
    FillRect(Rect, Brush),
    StrokeRect(Rect, Color, f32),
    FillCircle(Point, f32, Brush),
    StrokeCircle(Point, f32, Color, f32),
    Line(Point, Point, Color, f32),
    Text(String, Point, f32, Color, TextAlign, bool),
}

/// Surface that records every operation instead of rasterizing.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(s, ..) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count_lines(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Line(..))).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.ops.push(Op::Clear(color));
    }
    fn fill_path(&mut self, path: &Path, brush: &Brush) {
        self.ops.push(Op::FillPath(path.clone(), brush.clone()));
    }
    fn stroke_path(&mut self, path: &Path, color: Color, width: f32) {
        self.ops.push(Op::StrokePath(path.clone(), color, width));
    }
    fn fill_rect(&mut self, rect: Rect, brush: &Brush) {
        self.ops.push(Op::FillRect(rect, brush.clone()));
    }
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.ops.push(Op::StrokeRect(rect, color, width));
    }
    fn fill_circle(&mut self, center: Point, radius: f32, brush: &Brush) {
        self.ops.push(Op::FillCircle(center, radius, brush.clone()));
    }
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.ops.push(Op::StrokeCircle(center, radius, color, width));
    }
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.ops.push(Op::Line(from, to, color, width));
    }
    fn draw_text(&mut self, text: &str, pos: Point, size: f32, color: Color, align: TextAlign, bold: bool) {
        self.ops.push(Op::Text(text.to_string(), pos, size, color, align, bold));
    }
    fn text_width(&self, text: &str, size: f32, _bold: bool) -> f32 {
        // deterministic stand-in for real shaping
        text.len() as f32 * size * 0.6
    }
}
