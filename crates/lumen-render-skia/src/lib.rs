// File: crates/lumen-render-skia/src/lib.rs
// Summary: Skia CPU raster surface implementing the core Surface trait, plus PNG/RGBA export helpers.

pub mod text;

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use lumen_core::surface::{Brush, Path, PathCmd, Point, Rect, Surface as DrawSurface, TextAlign};
use lumen_core::{Chart, Color};

use crate::text::TextShaper;

/// CPU raster target. Logical coordinates are scaled by the device pixel
/// ratio, mirroring canvas setups on high-DPI hosts.
pub struct SkiaSurface {
    surface: skia::Surface,
    shaper: TextShaper,
    width: f32,
    height: f32,
    dpr: f32,
    pixel_width: i32,
    pixel_height: i32,
}

impl SkiaSurface {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        Self::with_dpr(width, height, 1.0)
    }

    /// Fails when the raster surface cannot be acquired; callers treat that
    /// as "skip this frame" and retry on the next redraw.
    pub fn with_dpr(width: f32, height: f32, dpr: f32) -> Result<Self> {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let pw = (width * dpr).ceil().max(1.0) as i32;
        let ph = (height * dpr).ceil().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((pw, ph))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        surface.canvas().scale((dpr, dpr));
        debug!(width, height, dpr, "skia surface created");
        Ok(Self {
            surface,
            shaper: TextShaper::new(),
            width,
            height,
            dpr,
            pixel_width: pw,
            pixel_height: ph,
        })
    }

    /// Logical size in host pixels.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Physical raster size (logical size times the device pixel ratio).
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.pixel_width, self.pixel_height)
    }

    pub fn dpr(&self) -> f32 {
        self.dpr
    }

    /// Encode the current pixels as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Copy the current pixels out as tightly packed RGBA8.
    /// Returns `(pixels, width, height, row_stride)`.
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = self.pixel_size();
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        let ok = self.surface.canvas().read_pixels(&info, &mut pixels, stride, (0, 0));
        if !ok {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

// ---- chart convenience ------------------------------------------------------

/// Render one frame of `chart` at its current size and return PNG bytes.
pub fn render_to_png_bytes(chart: &mut Chart) -> Result<Vec<u8>> {
    let (w, h) = chart.size();
    let mut surface = SkiaSurface::new(w, h)?;
    chart.draw(&mut surface);
    surface.png_bytes()
}

/// Render one frame of `chart` to a PNG at `path`.
pub fn render_to_png(chart: &mut Chart, path: impl AsRef<std::path::Path>) -> Result<()> {
    let (w, h) = chart.size();
    let mut surface = SkiaSurface::new(w, h)?;
    chart.draw(&mut surface);
    surface.write_png(path)
}

/// Render one frame of `chart` and return `(rgba, width, height, stride)`.
pub fn render_to_rgba8(chart: &mut Chart) -> Result<(Vec<u8>, u32, u32, usize)> {
    let (w, h) = chart.size();
    let mut surface = SkiaSurface::new(w, h)?;
    chart.draw(&mut surface);
    surface.rgba8()
}

// ---- trait plumbing ---------------------------------------------------------

fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_skia_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_xywh(r.x, r.y, r.w, r.h)
}

fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in &path.cmds {
        match cmd {
            PathCmd::MoveTo(p) => {
                out.move_to((p.x, p.y));
            }
            PathCmd::LineTo(p) => {
                out.line_to((p.x, p.y));
            }
            PathCmd::Arc { center, radius, start, sweep } => {
                let oval = skia::Rect::from_ltrb(
                    center.x - radius,
                    center.y - radius,
                    center.x + radius,
                    center.y + radius,
                );
                out.arc_to(oval, start.to_degrees(), sweep.to_degrees(), false);
            }
            PathCmd::Close => {
                out.close();
            }
        }
    }
    out
}

fn fill_paint(brush: &Brush) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    match brush {
        Brush::Solid(c) => {
            paint.set_color(to_skia_color(*c));
        }
        Brush::Linear { from, to, stops } => {
            let colors: Vec<skia::Color> = stops.iter().map(|&(_, c)| to_skia_color(c)).collect();
            let pos: Vec<f32> = stops.iter().map(|&(p, _)| p).collect();
            let shader = skia::gradient_shader::linear(
                (skia::Point::new(from.x, from.y), skia::Point::new(to.x, to.y)),
                skia::gradient_shader::GradientShaderColors::Colors(&colors),
                Some(pos.as_slice()),
                skia::TileMode::Clamp,
                None,
                None,
            );
            if let Some(shader) = shader {
                paint.set_shader(shader);
            } else if let Some(&(_, c)) = stops.first() {
                paint.set_color(to_skia_color(c));
            }
        }
        Brush::Radial { center, radius, stops } => {
            let colors: Vec<skia::Color> = stops.iter().map(|&(_, c)| to_skia_color(c)).collect();
            let pos: Vec<f32> = stops.iter().map(|&(p, _)| p).collect();
            let shader = skia::gradient_shader::radial(
                skia::Point::new(center.x, center.y),
                *radius,
                skia::gradient_shader::GradientShaderColors::Colors(&colors),
                Some(pos.as_slice()),
                skia::TileMode::Clamp,
                None,
                None,
            );
            if let Some(shader) = shader {
                paint.set_shader(shader);
            } else if let Some(&(_, c)) = stops.first() {
                paint.set_color(to_skia_color(c));
            }
        }
    }
    paint
}

fn stroke_paint(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_color(to_skia_color(color));
    paint
}

impl DrawSurface for SkiaSurface {
    fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(to_skia_color(color));
    }

    fn fill_path(&mut self, path: &Path, brush: &Brush) {
        let paint = fill_paint(brush);
        let path = to_skia_path(path);
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn stroke_path(&mut self, path: &Path, color: Color, width: f32) {
        let paint = stroke_paint(color, width);
        let path = to_skia_path(path);
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn fill_rect(&mut self, rect: Rect, brush: &Brush) {
        let paint = fill_paint(brush);
        self.surface.canvas().draw_rect(to_skia_rect(rect), &paint);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let paint = stroke_paint(color, width);
        self.surface.canvas().draw_rect(to_skia_rect(rect), &paint);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, brush: &Brush) {
        let paint = fill_paint(brush);
        self.surface.canvas().draw_circle((center.x, center.y), radius, &paint);
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        let paint = stroke_paint(color, width);
        self.surface.canvas().draw_circle((center.x, center.y), radius, &paint);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        let mut paint = stroke_paint(color, width);
        paint.set_stroke_cap(skia::paint::Cap::Butt);
        self.surface.canvas().draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn draw_text(&mut self, text: &str, pos: Point, size: f32, color: Color, align: TextAlign, bold: bool) {
        let color = to_skia_color(color);
        let canvas = self.surface.canvas();
        match align {
            TextAlign::Left => self.shaper.draw_left(canvas, text, pos.x, pos.y, size, color, bold),
            TextAlign::Center => self.shaper.draw_center(canvas, text, pos.x, pos.y, size, color, bold),
        }
    }

    fn text_width(&self, text: &str, size: f32, bold: bool) -> f32 {
        self.shaper.measure_width(text, size, bold)
    }
}
