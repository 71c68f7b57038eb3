// File: crates/lumen-core/src/geometry.rs
// Summary: Per-chart-kind geometry builders: series data -> draw shapes + hit targets.
// Notes:
// - Builders are pure: the same (series, visibility, config, theme, area,
//   progress) always produce the same geometry.
// - Malformed points (non-finite values) are skipped, never propagated into
//   coordinates; every division is guarded so no NaN can reach a shape.

use std::f64::consts::PI;

use tracing::warn;

use crate::color::{self, Color};
use crate::config::{ChartConfig, ChartKind};
use crate::data::{format_value, DataPoint, Series, ValueExtent};
use crate::layout::ChartArea;
use crate::scale::LinearScale;
use crate::surface::{Brush, Point, Rect, TextAlign};
use crate::theme::Theme;

pub const MARKER_RADIUS: f32 = 4.0;
pub const SCATTER_RADIUS: f32 = 6.0;
/// Pointer must be within this distance of a vertex to count as a hit.
pub const HIT_RADIUS: f32 = 8.0;
pub const DOUGHNUT_INNER_RATIO: f32 = 0.6;

const LINE_WIDTH: f32 = 3.0;
const PIE_RADIUS_RATIO: f32 = 0.85;
const PIE_LABEL_RADIUS_RATIO: f32 = 0.7;
const RADAR_RINGS: usize = 5;
const RADAR_LABEL_OFFSET: f32 = 18.0;
const START_ANGLE: f64 = -PI / 2.0;
const TAU: f64 = 2.0 * PI;

/// Identifies one rendered data point: indices into the chart's series list
/// and that series' data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub series: usize,
    pub point: usize,
}

/// Resolved draw descriptor. Colors and brushes are final; the renderer only
/// translates these onto a surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Polyline { points: Vec<Point>, color: Color, width: f32 },
    Polygon { points: Vec<Point>, fill: Option<Brush>, stroke: Option<(Color, f32)> },
    RectShape { owner: Option<Hit>, rect: Rect, brush: Brush },
    Circle { owner: Option<Hit>, center: Point, radius: f32, brush: Brush },
    Sector {
        owner: Option<Hit>,
        center: Point,
        inner: f32,
        outer: f32,
        start: f64,
        sweep: f64,
        brush: Brush,
        stroke: Option<(Color, f32)>,
    },
    LineSeg { from: Point, to: Point, color: Color, width: f32 },
    Label { pos: Point, text: String, size: f32, color: Color, align: TextAlign, bold: bool },
}

/// Typed pointer-hit region for one data point.
#[derive(Clone, Debug, PartialEq)]
pub enum HitRegion {
    Circle { center: Point, radius: f32 },
    Rect(Rect),
    Sector { center: Point, inner: f32, outer: f32, start: f64, sweep: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct HitTarget {
    pub hit: Hit,
    pub region: HitRegion,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartGeometry {
    pub shapes: Vec<Shape>,
    pub targets: Vec<HitTarget>,
}

/// Build the geometry for one render pass. `visible` is indexed like
/// `series`; missing entries default to visible. `progress` in `[0, 1]`
/// scales the intro animation, `1.0` being the fully drawn chart.
pub fn build(
    series: &[Series],
    visible: &[bool],
    config: &ChartConfig,
    theme: &Theme,
    area: ChartArea,
    progress: f64,
) -> ChartGeometry {
    let progress = progress.clamp(0.0, 1.0);
    let mut geo = ChartGeometry::default();
    if area.width <= 0.0 || area.height <= 0.0 {
        return geo;
    }
    match config.kind {
        ChartKind::Line => build_line(series, visible, config, &mut geo, area, progress, false),
        ChartKind::Area => build_area(series, visible, config, &mut geo, area, progress),
        ChartKind::Scatter => build_line(series, visible, config, &mut geo, area, progress, true),
        ChartKind::Bar => build_bar(series, visible, config, &mut geo, area, progress),
        ChartKind::Pie => build_pie(series, visible, config, theme, &mut geo, area, progress, false),
        ChartKind::Doughnut => build_pie(series, visible, config, theme, &mut geo, area, progress, true),
        ChartKind::Radar => build_radar(series, visible, config, theme, &mut geo, area, progress),
    }
    geo
}

fn is_visible(visible: &[bool], idx: usize) -> bool {
    visible.get(idx).copied().unwrap_or(true)
}

fn visible_series<'a>(
    series: &'a [Series],
    visible: &'a [bool],
) -> impl Iterator<Item = (usize, &'a Series)> {
    series
        .iter()
        .enumerate()
        .filter(move |(i, s)| is_visible(visible, *i) && !s.data.is_empty())
}

fn visible_extent(series: &[Series], visible: &[bool]) -> Option<ValueExtent> {
    ValueExtent::from_series(visible_series(series, visible).map(|(_, s)| s))
}

/// Horizontal slot for point `idx` of `n` evenly spaced points; a lone point
/// sits at the center of the area.
fn slot_x(area: ChartArea, idx: usize, n: usize) -> f32 {
    if n <= 1 {
        area.x + area.width * 0.5
    } else {
        area.x + (idx as f32 / (n - 1) as f32) * area.width
    }
}

fn point_at(center: Point, angle: f64, radius: f64) -> Point {
    Point::new(
        center.x + (angle.cos() * radius) as f32,
        center.y + (angle.sin() * radius) as f32,
    )
}

/// Vertical position for `value`, animated from the baseline up.
fn rise_y(area: ChartArea, scale: &LinearScale, value: f64, progress: f64) -> f32 {
    let y_full = area.y + scale.offset_down(value, area.height);
    let baseline = area.bottom();
    baseline - (baseline - y_full) * progress as f32
}

// ---- cartesian builders -----------------------------------------------------

fn build_line(
    series: &[Series],
    visible: &[bool],
    config: &ChartConfig,
    geo: &mut ChartGeometry,
    area: ChartArea,
    progress: f64,
    scatter: bool,
) {
    let Some(extent) = visible_extent(series, visible) else {
        return;
    };
    let scale = LinearScale::from_extent(&extent);

    for (si, s) in visible_series(series, visible) {
        let series_color = color::resolve(None, s.color, &config.palette, si);
        let n = s.data.len();
        let mut line_points = Vec::with_capacity(n);
        let mut markers = Vec::with_capacity(n);
        let mut skipped = 0usize;

        for (pi, p) in s.data.iter().enumerate() {
            if !p.value.is_finite() {
                skipped += 1;
                continue;
            }
            let pos = Point::new(slot_x(area, pi, n), rise_y(area, &scale, p.value, progress));
            line_points.push(pos);
            markers.push((pi, p, pos));
        }
        if skipped > 0 {
            warn!(series = %s.name, skipped, "skipped non-finite points");
        }

        if !scatter && line_points.len() >= 2 {
            geo.shapes.push(Shape::Polyline {
                points: line_points,
                color: series_color,
                width: LINE_WIDTH,
            });
        }
        let radius = if scatter { SCATTER_RADIUS } else { MARKER_RADIUS };
        for (pi, p, pos) in markers {
            let c = color::resolve(p.color, s.color, &config.palette, si);
            geo.shapes.push(Shape::Circle {
                owner: Some(Hit { series: si, point: pi }),
                center: pos,
                radius,
                brush: Brush::Solid(c),
            });
            geo.targets.push(HitTarget {
                hit: Hit { series: si, point: pi },
                region: HitRegion::Circle { center: pos, radius: HIT_RADIUS },
            });
        }
    }
}

fn build_area(
    series: &[Series],
    visible: &[bool],
    config: &ChartConfig,
    geo: &mut ChartGeometry,
    area: ChartArea,
    progress: f64,
) {
    let Some(extent) = visible_extent(series, visible) else {
        return;
    };
    let scale = LinearScale::from_extent(&extent);
    let baseline = area.bottom();

    // Fills first so every stroke and marker stays on top of every band.
    for (si, s) in visible_series(series, visible) {
        let series_color = color::resolve(None, s.color, &config.palette, si);
        let n = s.data.len();
        let pts: Vec<Point> = s
            .data
            .iter()
            .enumerate()
            .filter(|(_, p)| p.value.is_finite())
            .map(|(pi, p)| Point::new(slot_x(area, pi, n), rise_y(area, &scale, p.value, progress)))
            .collect();
        if pts.len() < 2 {
            continue;
        }
        let mut poly = Vec::with_capacity(pts.len() + 2);
        poly.push(Point::new(pts[0].x, baseline));
        poly.extend(pts.iter().copied());
        poly.push(Point::new(pts[pts.len() - 1].x, baseline));

        let fill = if config.gradients {
            Brush::Linear {
                from: Point::new(area.x, area.y),
                to: Point::new(area.x, baseline),
                stops: vec![
                    (0.0, series_color.with_alpha(0x40)),
                    (1.0, series_color.with_alpha(0x10)),
                ],
            }
        } else {
            Brush::Solid(series_color.with_alpha(0x30))
        };
        geo.shapes.push(Shape::Polygon { points: poly, fill: Some(fill), stroke: None });
    }

    build_line(series, visible, config, geo, area, progress, false);
}

fn build_bar(
    series: &[Series],
    visible: &[bool],
    config: &ChartConfig,
    geo: &mut ChartGeometry,
    area: ChartArea,
    progress: f64,
) {
    let vis: Vec<(usize, &Series)> = visible_series(series, visible).collect();
    let Some((_, first)) = vis.first() else {
        return;
    };
    let points_per = first.data.len();
    if points_per == 0 {
        return;
    }
    let Some(extent) = visible_extent(series, visible) else {
        return;
    };
    if extent.max <= 0.0 {
        warn!(max = extent.max, "bar chart needs a positive maximum value");
        return;
    }

    let series_count = vis.len();
    let bar_w = area.width / (points_per * series_count + points_per + 1) as f32;
    let group_w = bar_w * series_count as f32;

    for (k, &(si, s)) in vis.iter().enumerate() {
        for (pi, p) in s.data.iter().enumerate().take(points_per) {
            if !p.value.is_finite() || p.value < 0.0 {
                continue;
            }
            let x = area.x + (group_w + bar_w) * pi as f32 + bar_w * k as f32 + bar_w;
            let h = ((p.value / extent.max).min(1.0) as f32) * area.height * progress as f32;
            let rect = Rect::new(x, area.bottom() - h, bar_w, h);
            let c = color::resolve(p.color, s.color, &config.palette, si);
            let brush = if config.gradients {
                Brush::Linear {
                    from: Point::new(x, rect.y),
                    to: Point::new(x, rect.bottom()),
                    stops: vec![(0.0, c), (1.0, c.darken(20))],
                }
            } else {
                Brush::Solid(c)
            };
            let hit = Hit { series: si, point: pi };
            geo.shapes.push(Shape::RectShape { owner: Some(hit), rect, brush });
            geo.targets.push(HitTarget { hit, region: HitRegion::Rect(rect) });
        }
    }
}

// ---- angular builders -------------------------------------------------------

fn build_pie(
    series: &[Series],
    visible: &[bool],
    config: &ChartConfig,
    theme: &Theme,
    geo: &mut ChartGeometry,
    area: ChartArea,
    progress: f64,
    doughnut: bool,
) {
    let Some((si, s)) = visible_series(series, visible).next() else {
        return;
    };
    let pts: Vec<(usize, &DataPoint)> = s
        .data
        .iter()
        .enumerate()
        .filter(|(_, p)| p.value.is_finite() && p.value >= 0.0)
        .collect();
    if pts.len() < s.data.len() {
        warn!(series = %s.name, "skipped negative or non-finite pie values");
    }
    if pts.is_empty() {
        return;
    }

    let center = area.center();
    let outer = area.width.min(area.height) * 0.5 * PIE_RADIUS_RATIO;
    if outer <= 0.0 {
        return;
    }
    let inner = if doughnut { outer * DOUGHNUT_INNER_RATIO } else { 0.0 };

    let total: f64 = pts.iter().map(|(_, p)| p.value).sum();
    // Zero total would make every span 0/0; fall back to equal sectors.
    let equal = total <= 0.0;

    let mut current = START_ANGLE;
    for &(pi, p) in &pts {
        let frac = if equal { 1.0 / pts.len() as f64 } else { p.value / total };
        let sweep = frac * TAU * progress;
        let c = color::resolve(p.color, s.color, &config.palette, pi);
        let brush = if config.gradients {
            Brush::Radial {
                center,
                radius: outer,
                stops: vec![(0.0, c), (1.0, c.darken(20))],
            }
        } else {
            Brush::Solid(c)
        };
        let hit = Hit { series: si, point: pi };
        geo.shapes.push(Shape::Sector {
            owner: Some(hit),
            center,
            inner,
            outer,
            start: current,
            sweep,
            brush,
            stroke: Some((theme.background, 2.0)),
        });
        geo.targets.push(HitTarget {
            hit,
            region: HitRegion::Sector { center, inner, outer, start: current, sweep },
        });

        if !doughnut && !equal {
            let mid = current + sweep * 0.5;
            geo.shapes.push(Shape::Label {
                pos: point_at(center, mid, (outer * PIE_LABEL_RADIUS_RATIO) as f64),
                text: format!("{}%", (frac * 100.0).round() as i64),
                size: 12.0,
                color: Color::WHITE,
                align: TextAlign::Center,
                bold: true,
            });
        }
        current += sweep;
    }

    if doughnut {
        geo.shapes.push(Shape::Label {
            pos: Point::new(center.x, center.y - 5.0),
            text: "Total".to_string(),
            size: 16.0,
            color: theme.text,
            align: TextAlign::Center,
            bold: true,
        });
        geo.shapes.push(Shape::Label {
            pos: Point::new(center.x, center.y + 15.0),
            text: format_value(total),
            size: 14.0,
            color: theme.text,
            align: TextAlign::Center,
            bold: false,
        });
    }
}

fn build_radar(
    series: &[Series],
    visible: &[bool],
    config: &ChartConfig,
    theme: &Theme,
    geo: &mut ChartGeometry,
    area: ChartArea,
    progress: f64,
) {
    let Some((si, s)) = visible_series(series, visible).next() else {
        return;
    };
    let n = s.data.len();
    let center = area.center();
    let outer = area.width.min(area.height) * 0.5 * PIE_RADIUS_RATIO;
    if outer <= 0.0 {
        return;
    }
    let axis_angle = |i: usize| (i as f64 / n as f64) * TAU + START_ANGLE;

    // Web: concentric rings plus one spoke and label per axis.
    for ring in 1..=RADAR_RINGS {
        let r = outer * (ring as f32 / RADAR_RINGS as f32);
        let points: Vec<Point> = (0..n).map(|i| point_at(center, axis_angle(i), r as f64)).collect();
        geo.shapes.push(Shape::Polygon { points, fill: None, stroke: Some((theme.grid, 1.0)) });
    }
    for (i, p) in s.data.iter().enumerate() {
        let a = axis_angle(i);
        geo.shapes.push(Shape::LineSeg {
            from: center,
            to: point_at(center, a, outer as f64),
            color: theme.grid,
            width: 1.0,
        });
        geo.shapes.push(Shape::Label {
            pos: point_at(center, a, (outer + RADAR_LABEL_OFFSET) as f64),
            text: p.label.clone(),
            size: 12.0,
            color: theme.text,
            align: TextAlign::Center,
            bold: false,
        });
    }

    let Some(extent) = visible_extent(series, visible) else {
        return;
    };
    if extent.max <= 0.0 {
        warn!(max = extent.max, "radar chart needs a positive maximum value");
        return;
    }

    let series_color = color::resolve(None, s.color, &config.palette, si);
    let mut vertices = Vec::with_capacity(n);
    for (pi, p) in s.data.iter().enumerate() {
        if !p.value.is_finite() {
            continue;
        }
        let r = (p.value.max(0.0) / extent.max) * outer as f64 * progress;
        let v = point_at(center, axis_angle(pi), r);
        vertices.push(v);
        geo.targets.push(HitTarget {
            hit: Hit { series: si, point: pi },
            region: HitRegion::Circle { center: v, radius: HIT_RADIUS },
        });
    }
    if vertices.len() >= 2 {
        geo.shapes.push(Shape::Polygon {
            points: vertices,
            fill: Some(Brush::Solid(series_color.with_alpha(0x40))),
            stroke: Some((series_color, 2.0)),
        });
    }
}
