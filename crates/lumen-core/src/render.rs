// File: crates/lumen-core/src/render.rs
// Summary: Render pass: grid, geometry shapes, hover highlight, legend, titles, tooltip.

use tracing::debug;

use crate::color::{self, Color};
use crate::config::ChartConfig;
use crate::data::{format_value, Series};
use crate::geometry::{ChartGeometry, Hit, Shape};
use crate::layout::{linspace, ChartArea};
use crate::surface::{Brush, Path, Point, Rect, Surface, TextAlign};
use crate::theme::Theme;

pub const LEGEND_SWATCH: f32 = 12.0;
pub const LEGEND_ROW_STEP: f32 = 20.0;
const LEGEND_MARGIN_RIGHT: f32 = 100.0;
const LEGEND_TOP: f32 = 60.0;
const LEGEND_TEXT_OFFSET: f32 = 20.0;
const GRID_DIVISIONS: usize = 10;
const TITLE_Y: f32 = 25.0;
const SUBTITLE_Y: f32 = 45.0;
const HIGHLIGHT_WIDTH: f32 = 2.0;
const TOOLTIP_PAD: f32 = 8.0;
const TOOLTIP_LINE_H: f32 = 16.0;
const TOOLTIP_OFFSET: f32 = 10.0;

/// One legend entry with its clickable row bounds. Hidden series keep their
/// row so hosts can toggle them back on.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    pub series: usize,
    pub rect: Rect,
    pub swatch: Rect,
    pub color: Color,
    pub name: String,
    pub visible: bool,
}

/// Legend layout is a pure function of the inputs so the interaction layer
/// can hit-test rows without a surface.
pub fn legend_rows(series: &[Series], visible: &[bool], palette: &[Color], width: f32) -> Vec<LegendRow> {
    let x = width - LEGEND_MARGIN_RIGHT;
    series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let y = LEGEND_TOP + i as f32 * LEGEND_ROW_STEP;
            LegendRow {
                series: i,
                rect: Rect::new(x, y, LEGEND_MARGIN_RIGHT - 8.0, LEGEND_ROW_STEP - 4.0),
                swatch: Rect::new(x, y, LEGEND_SWATCH, LEGEND_SWATCH),
                color: color::resolve(None, s.color, palette, i),
                name: s.name.clone(),
                visible: visible.get(i).copied().unwrap_or(true),
            }
        })
        .collect()
}

/// Everything one pass needs besides the geometry itself.
pub struct RenderPass<'a> {
    pub series: &'a [Series],
    pub visible: &'a [bool],
    pub config: &'a ChartConfig,
    pub theme: &'a Theme,
    pub area: ChartArea,
    pub width: f32,
    pub height: f32,
    pub hover: Option<Hit>,
    pub pointer: Option<Point>,
}

/// Paint one full frame. Clears the surface first; there is no partial
/// redraw. Never fails: surface acquisition is the backend's concern.
pub fn render(surface: &mut dyn Surface, pass: &RenderPass<'_>, geometry: &ChartGeometry) {
    surface.clear(pass.theme.background);

    if pass.config.show_grid && pass.config.kind.is_cartesian() {
        draw_grid(surface, pass.area, pass.theme);
    }

    for shape in &geometry.shapes {
        draw_shape(surface, shape);
    }

    if let Some(hover) = pass.hover {
        draw_highlight(surface, geometry, hover, pass.theme);
    }

    if pass.config.show_legend {
        draw_legend(surface, pass);
    }

    draw_titles(surface, pass);

    if pass.config.show_tooltip {
        if let (Some(hover), Some(pointer)) = (pass.hover, pass.pointer) {
            draw_tooltip(surface, pass, hover, pointer);
        }
    }

    debug!(
        kind = %pass.config.kind,
        shapes = geometry.shapes.len(),
        targets = geometry.targets.len(),
        "render pass complete"
    );
}

fn draw_grid(surface: &mut dyn Surface, area: ChartArea, theme: &Theme) {
    for x in linspace(area.x, area.right(), GRID_DIVISIONS + 1) {
        surface.draw_line(Point::new(x, area.y), Point::new(x, area.bottom()), theme.grid, 1.0);
    }
    for y in linspace(area.y, area.bottom(), GRID_DIVISIONS + 1) {
        surface.draw_line(Point::new(area.x, y), Point::new(area.right(), y), theme.grid, 1.0);
    }
}

fn draw_shape(surface: &mut dyn Surface, shape: &Shape) {
    match shape {
        Shape::Polyline { points, color, width } => {
            if let Some(path) = polyline_path(points, false) {
                surface.stroke_path(&path, *color, *width);
            }
        }
        Shape::Polygon { points, fill, stroke } => {
            let Some(path) = polyline_path(points, true) else {
                return;
            };
            if let Some(brush) = fill {
                surface.fill_path(&path, brush);
            }
            if let Some((color, width)) = stroke {
                surface.stroke_path(&path, *color, *width);
            }
        }
        Shape::RectShape { rect, brush, .. } => {
            surface.fill_rect(*rect, brush);
        }
        Shape::Circle { center, radius, brush, .. } => {
            surface.fill_circle(*center, *radius, brush);
        }
        Shape::Sector { center, inner, outer, start, sweep, brush, stroke, .. } => {
            let path = sector_path(*center, *inner, *outer, *start, *sweep);
            surface.fill_path(&path, brush);
            if let Some((color, width)) = stroke {
                surface.stroke_path(&path, *color, *width);
            }
        }
        Shape::LineSeg { from, to, color, width } => {
            surface.draw_line(*from, *to, *color, *width);
        }
        Shape::Label { pos, text, size, color, align, bold } => {
            surface.draw_text(text, *pos, *size, *color, *align, *bold);
        }
    }
}

fn polyline_path(points: &[Point], close: bool) -> Option<Path> {
    let (&first, rest) = points.split_first()?;
    let mut path = Path::new();
    path.move_to(first);
    for &p in rest {
        path.line_to(p);
    }
    if close {
        path.close();
    }
    Some(path)
}

/// Wedge (inner == 0) or ring-sector outline, clockwise from `start`.
pub fn sector_path(center: Point, inner: f32, outer: f32, start: f64, sweep: f64) -> Path {
    let mut path = Path::new();
    let (start, sweep) = (start as f32, sweep as f32);
    if inner <= 0.0 {
        path.move_to(center);
        path.arc(center, outer, start, sweep);
    } else {
        path.arc(center, outer, start, sweep);
        path.arc(center, inner, start + sweep, -sweep);
    }
    path.close();
    path
}

fn draw_highlight(surface: &mut dyn Surface, geometry: &ChartGeometry, hover: Hit, theme: &Theme) {
    for shape in &geometry.shapes {
        match shape {
            Shape::Circle { owner: Some(o), center, radius, .. } if *o == hover => {
                surface.stroke_circle(*center, radius + 2.0, theme.highlight, HIGHLIGHT_WIDTH);
            }
            Shape::RectShape { owner: Some(o), rect, .. } if *o == hover => {
                surface.stroke_rect(*rect, theme.highlight, HIGHLIGHT_WIDTH);
            }
            Shape::Sector { owner: Some(o), center, inner, outer, start, sweep, .. } if *o == hover => {
                let path = sector_path(*center, *inner, *outer, *start, *sweep);
                surface.stroke_path(&path, theme.highlight, HIGHLIGHT_WIDTH);
            }
            _ => {}
        }
    }
}

fn draw_legend(surface: &mut dyn Surface, pass: &RenderPass<'_>) {
    for row in legend_rows(pass.series, pass.visible, &pass.config.palette, pass.width) {
        let swatch = if row.visible { row.color } else { row.color.with_alpha(90) };
        surface.fill_rect(row.swatch, &Brush::Solid(swatch));
        let text_color = if row.visible { pass.theme.text } else { pass.theme.muted_text };
        surface.draw_text(
            &row.name,
            Point::new(row.swatch.x + LEGEND_TEXT_OFFSET, row.swatch.y + 10.0),
            12.0,
            text_color,
            TextAlign::Left,
            false,
        );
    }
}

fn draw_titles(surface: &mut dyn Surface, pass: &RenderPass<'_>) {
    let cx = pass.width * 0.5;
    if let Some(title) = &pass.config.title {
        surface.draw_text(title, Point::new(cx, TITLE_Y), 16.0, pass.theme.text, TextAlign::Center, true);
    }
    if let Some(subtitle) = &pass.config.subtitle {
        surface.draw_text(
            subtitle,
            Point::new(cx, SUBTITLE_Y),
            12.0,
            pass.theme.muted_text,
            TextAlign::Center,
            false,
        );
    }
}

fn draw_tooltip(surface: &mut dyn Surface, pass: &RenderPass<'_>, hover: Hit, pointer: Point) {
    let Some(series) = pass.series.get(hover.series) else {
        return;
    };
    let Some(point) = series.data.get(hover.point) else {
        return;
    };
    let value_line = format!("{}: {}", point.label, format_value(point.value));

    let name_w = surface.text_width(&series.name, 12.0, true);
    let value_w = surface.text_width(&value_line, 12.0, false);
    let box_w = name_w.max(value_w) + TOOLTIP_PAD * 2.0;
    let box_h = TOOLTIP_PAD * 2.0 + TOOLTIP_LINE_H * 2.0;

    let x = (pointer.x + TOOLTIP_OFFSET).clamp(0.0, (pass.width - box_w).max(0.0));
    let y = (pointer.y - TOOLTIP_OFFSET - box_h).clamp(0.0, (pass.height - box_h).max(0.0));

    surface.fill_rect(Rect::new(x, y, box_w, box_h), &Brush::Solid(pass.theme.tooltip_bg));
    surface.draw_text(
        &series.name,
        Point::new(x + TOOLTIP_PAD, y + TOOLTIP_PAD + 10.0),
        12.0,
        pass.theme.tooltip_text,
        TextAlign::Left,
        true,
    );
    surface.draw_text(
        &value_line,
        Point::new(x + TOOLTIP_PAD, y + TOOLTIP_PAD + TOOLTIP_LINE_H + 10.0),
        12.0,
        pass.theme.tooltip_text,
        TextAlign::Left,
        false,
    );
}
