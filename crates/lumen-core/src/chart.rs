// File: crates/lumen-core/src/chart.rs
// Summary: Chart state machine: input setters, tick/draw lifecycle, pointer interaction, events.

use std::time::Duration;

use tracing::debug;

use crate::config::{ChartConfig, ChartConfigPatch, ChartKind};
use crate::data::Series;
use crate::geometry::{self, ChartGeometry, Hit};
use crate::hittest;
use crate::layout::{ChartArea, Insets, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::render::{self, RenderPass};
use crate::schedule::{RedrawReason, RedrawScheduler, TimerId, Timers};
use crate::surface::{Point, Surface};
use crate::theme::Theme;

/// Pointer-leave keeps the tooltip up this long; re-entering cancels the hide.
pub const TOOLTIP_HIDE_DELAY: Duration = Duration::from_millis(200);

/// Interaction events forwarded to the host widget.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartEvent {
    PointClick { series: String, label: String, value: f64, index: usize },
    LegendToggle { series: String, visible: bool },
}

/// One mounted chart instance. Owns its inputs, per-series visibility, hover
/// state, and the redraw scheduler; a host event loop calls `tick` with
/// elapsed time and `draw` with a surface whenever `needs_redraw` says so.
pub struct Chart {
    series: Vec<Series>,
    config: ChartConfig,
    theme: Theme,
    width: f32,
    height: f32,
    insets: Insets,
    visible: Vec<bool>,
    hover: Option<Hit>,
    pointer: Option<Point>,
    scheduler: RedrawScheduler,
    timers: Timers,
    hide_timer: Option<TimerId>,
    anim_elapsed: Duration,
    geometry: Option<ChartGeometry>,
}

impl Chart {
    pub fn new() -> Self {
        Self::with_config(ChartConfig::default())
    }

    pub fn with_config(config: ChartConfig) -> Self {
        let mut scheduler = RedrawScheduler::new();
        scheduler.mark(RedrawReason::Refresh);
        Self {
            series: Vec::new(),
            config,
            theme: Theme::default_light(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            insets: Insets::default(),
            visible: Vec::new(),
            hover: None,
            pointer: None,
            scheduler,
            timers: Timers::new(),
            hide_timer: None,
            anim_elapsed: Duration::ZERO,
            geometry: None,
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self
    }

    // ---- accessors ----------------------------------------------------------

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn area(&self) -> ChartArea {
        ChartArea::from_size(self.width, self.height, self.insets)
    }

    pub fn is_series_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(true)
    }

    pub fn hover(&self) -> Option<Hit> {
        self.hover
    }

    // ---- input setters ------------------------------------------------------

    pub fn set_series(&mut self, series: Vec<Series>) {
        self.visible = vec![true; series.len()];
        self.series = series;
        self.hover = None;
        self.geometry = None;
        self.anim_elapsed = Duration::ZERO;
        self.scheduler.mark(RedrawReason::Data);
    }

    pub fn set_config(&mut self, config: ChartConfig) {
        if config.kind != self.config.kind {
            self.anim_elapsed = Duration::ZERO;
            self.hover = None;
        }
        self.config = config;
        self.geometry = None;
        self.scheduler.mark(RedrawReason::Config);
    }

    /// Merge a partial config over the current one, field by field.
    pub fn patch_config(&mut self, patch: &ChartConfigPatch) {
        let merged = self.config.apply(patch);
        self.set_config(merged);
    }

    pub fn set_kind(&mut self, kind: ChartKind) {
        if kind != self.config.kind {
            let mut config = self.config.clone();
            config.kind = kind;
            self.set_config(config);
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.geometry = None;
        self.scheduler.mark(RedrawReason::Theme);
    }

    /// Resize notification from the host. Ignored unless the config opted
    /// into responsive sizing.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !self.config.responsive {
            return;
        }
        let (width, height) = (width.max(1.0), height.max(1.0));
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.geometry = None;
            self.scheduler.mark(RedrawReason::Resize);
        }
    }

    /// Explicitly request a full redraw with unchanged inputs.
    pub fn refresh(&mut self) {
        self.scheduler.mark(RedrawReason::Refresh);
    }

    /// Toggle a series on or off. Pie/doughnut/radar plot the first visible
    /// series, so this doubles as series selection for those kinds.
    pub fn toggle_series(&mut self, index: usize) -> Option<bool> {
        let flag = self.visible.get_mut(index)?;
        *flag = !*flag;
        let now = *flag;
        if self.hover.map(|h| h.series) == Some(index) {
            self.hover = None;
        }
        self.geometry = None;
        self.scheduler.mark(RedrawReason::Data);
        Some(now)
    }

    // ---- lifecycle ----------------------------------------------------------

    pub fn needs_redraw(&self) -> bool {
        self.scheduler.is_dirty()
    }

    /// Advance timers and animation by `dt`. Returns whether a redraw is due.
    pub fn tick(&mut self, dt: Duration) -> bool {
        for id in self.timers.advance(dt) {
            if Some(id) == self.hide_timer {
                self.hide_timer = None;
                self.pointer = None;
                if self.hover.take().is_some() {
                    self.scheduler.mark(RedrawReason::Hover);
                }
            }
        }
        if self.is_animating() {
            self.anim_elapsed = (self.anim_elapsed + dt).min(self.config.animation.duration);
            self.scheduler.mark(RedrawReason::Animation);
        }
        self.scheduler.is_dirty()
    }

    fn is_animating(&self) -> bool {
        let anim = self.config.animation;
        anim.enabled
            && !anim.duration.is_zero()
            && self.anim_elapsed < anim.duration
            && !self.series.is_empty()
    }

    /// Intro-animation progress in `[0, 1]`; `1.0` whenever animation is off.
    pub fn progress(&self) -> f64 {
        let anim = self.config.animation;
        if !anim.enabled || anim.duration.is_zero() {
            return 1.0;
        }
        let t = (self.anim_elapsed.as_secs_f64() / anim.duration.as_secs_f64()).min(1.0);
        ease_out_cubic(t)
    }

    /// Paint one full frame onto `surface` and consume the dirty flag.
    /// Concurrent triggers since the last frame coalesce into this pass.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let geo = geometry::build(
            &self.series,
            &self.visible,
            &self.config,
            &self.theme,
            self.area(),
            self.progress(),
        );
        let pass = RenderPass {
            series: &self.series,
            visible: &self.visible,
            config: &self.config,
            theme: &self.theme,
            area: self.area(),
            width: self.width,
            height: self.height,
            hover: self.hover,
            pointer: self.pointer,
        };
        render::render(surface, &pass, &geo);
        self.geometry = Some(geo);
        self.scheduler.take();
    }

    /// Cancel all pending timers. Hosts call this on teardown so no delayed
    /// action outlives the drawing surface.
    pub fn cancel_pending(&mut self) {
        self.timers.clear();
        self.hide_timer = None;
    }

    // ---- interaction --------------------------------------------------------

    pub fn hit_test(&self, x: f32, y: f32) -> Option<Hit> {
        match &self.geometry {
            Some(geo) => hittest::hit_test(geo, x, y),
            None => {
                let geo = geometry::build(
                    &self.series,
                    &self.visible,
                    &self.config,
                    &self.theme,
                    self.area(),
                    self.progress(),
                );
                hittest::hit_test(&geo, x, y)
            }
        }
    }

    /// Pointer moved over the chart. Returns `true` when the hover state
    /// changed (tooltip/highlight need a redraw).
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.pointer = Some(Point::new(x, y));
        if let Some(id) = self.hide_timer.take() {
            self.timers.cancel(id);
        }
        let hit = self.hit_test(x, y);
        if hit != self.hover {
            self.hover = hit;
            self.scheduler.mark(RedrawReason::Hover);
            true
        } else if hit.is_some() {
            // Tooltip follows the pointer while over the same point.
            self.scheduler.mark(RedrawReason::Hover);
            false
        } else {
            false
        }
    }

    /// Pointer left the chart. The tooltip hides after a short, cancellable
    /// delay rather than immediately.
    pub fn on_pointer_leave(&mut self) {
        if self.hover.is_none() && self.pointer.is_none() {
            return;
        }
        if let Some(id) = self.hide_timer.take() {
            self.timers.cancel(id);
        }
        self.hide_timer = Some(self.timers.schedule(TOOLTIP_HIDE_DELAY));
    }

    /// Click at surface coordinates. Legend rows are tested before chart
    /// geometry; a legend hit toggles that series.
    pub fn on_click(&mut self, x: f32, y: f32) -> Option<ChartEvent> {
        if self.config.show_legend {
            let rows = render::legend_rows(&self.series, &self.visible, &self.config.palette, self.width);
            if let Some(row) = rows.into_iter().find(|r| r.rect.contains(Point::new(x, y))) {
                let visible = self.toggle_series(row.series)?;
                debug!(series = %row.name, visible, "legend toggled");
                return Some(ChartEvent::LegendToggle { series: row.name, visible });
            }
        }
        let hit = self.hit_test(x, y)?;
        let series = self.series.get(hit.series)?;
        let point = series.data.get(hit.point)?;
        Some(ChartEvent::PointClick {
            series: series.name.clone(),
            label: point.label.clone(),
            value: point.value,
            index: hit.point,
        })
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}
