// File: crates/lumen-core/tests/chart.rs
// Purpose: Chart lifecycle tests: redraw coalescing, timers, animation pacing,
// config patching, and interaction events.

mod common;

use std::time::Duration;

use common::RecordingSurface;
use lumen_core::chart::TOOLTIP_HIDE_DELAY;
use lumen_core::{
    AnimationConfig, Chart, ChartConfig, ChartConfigPatch, ChartEvent, ChartKind, RedrawReason,
    RedrawScheduler, Series, Theme, Timers,
};

fn static_config(kind: ChartKind) -> ChartConfig {
    let mut config = ChartConfig::with_kind(kind);
    config.animation.enabled = false;
    config
}

fn sample_series() -> Vec<Series> {
    vec![
        Series::from_values("Revenue", &[("Q1", 10.0), ("Q2", 20.0), ("Q3", 15.0)]),
        Series::from_values("Cost", &[("Q1", 5.0), ("Q2", 8.0), ("Q3", 12.0)]),
    ]
}

#[test]
fn scheduler_edge_triggers_once_per_burst() {
    let mut s = RedrawScheduler::new();
    assert!(s.mark(RedrawReason::Data), "first trigger requests a frame");
    assert!(!s.mark(RedrawReason::Config), "second trigger coalesces");
    assert!(!s.mark(RedrawReason::Refresh));
    assert!(s.take());
    assert!(!s.is_dirty());
    assert!(s.mark(RedrawReason::Hover), "next burst requests again");
}

#[test]
fn timers_fire_once_and_cancel_cleanly() {
    let mut t = Timers::new();
    let a = t.schedule(Duration::from_millis(100));
    let b = t.schedule(Duration::from_millis(300));

    assert!(t.advance(Duration::from_millis(50)).is_empty());
    assert_eq!(t.advance(Duration::from_millis(50)), vec![a]);
    assert_eq!(t.len(), 1);

    assert!(t.cancel(b));
    assert!(!t.cancel(b), "cancelling twice is a no-op");
    assert!(t.advance(Duration::from_millis(500)).is_empty());

    let c = t.schedule(Duration::from_millis(10));
    t.clear();
    assert!(t.is_empty());
    assert!(!t.cancel(c));
}

#[test]
fn triggers_between_frames_coalesce_into_one_pass() {
    let mut chart = Chart::with_config(static_config(ChartKind::Line));
    assert!(chart.needs_redraw(), "a new chart wants its first frame");

    chart.set_series(sample_series());
    chart.set_theme(Theme::dark());
    chart.refresh();
    assert!(chart.needs_redraw());

    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface);
    assert!(!chart.needs_redraw(), "draw consumed every pending trigger");
}

#[test]
fn resize_marks_dirty_only_when_responsive() {
    let mut chart = Chart::with_config(static_config(ChartKind::Line));
    chart.set_series(sample_series());
    chart.draw(&mut RecordingSurface::new());

    chart.resize(800.0, 500.0);
    assert!(chart.needs_redraw());
    assert_eq!(chart.size(), (800.0, 500.0));
    chart.draw(&mut RecordingSurface::new());

    // same size again: nothing to do
    chart.resize(800.0, 500.0);
    assert!(!chart.needs_redraw());

    let mut fixed = static_config(ChartKind::Line);
    fixed.responsive = false;
    let mut chart = Chart::with_config(fixed);
    chart.set_series(sample_series());
    chart.draw(&mut RecordingSurface::new());
    chart.resize(800.0, 500.0);
    assert!(!chart.needs_redraw(), "non-responsive charts ignore resize");
    assert_eq!(chart.size(), (600.0, 400.0));
}

#[test]
fn animation_progress_eases_to_completion() {
    let mut config = ChartConfig::with_kind(ChartKind::Bar);
    config.animation = AnimationConfig { enabled: true, duration: Duration::from_millis(1000) };
    let mut chart = Chart::with_config(config);
    chart.set_series(sample_series());

    assert_eq!(chart.progress(), 0.0);
    chart.draw(&mut RecordingSurface::new());

    assert!(chart.tick(Duration::from_millis(250)));
    let mid = chart.progress();
    assert!(mid > 0.0 && mid < 1.0, "mid-animation progress was {mid}");
    chart.draw(&mut RecordingSurface::new());

    chart.tick(Duration::from_millis(2000));
    assert_eq!(chart.progress(), 1.0);
    chart.draw(&mut RecordingSurface::new());

    // animation finished: idle ticks stop requesting frames
    assert!(!chart.tick(Duration::from_millis(16)));
}

#[test]
fn disabled_animation_renders_at_full_extent() {
    let mut chart = Chart::with_config(static_config(ChartKind::Bar));
    chart.set_series(sample_series());
    assert_eq!(chart.progress(), 1.0);
}

#[test]
fn tooltip_hides_after_the_delay_unless_reentered() {
    let mut chart = Chart::with_config(static_config(ChartKind::Line));
    chart.set_series(sample_series());
    chart.draw(&mut RecordingSurface::new());

    // hover the Cost/Q1 marker at the bottom-left of the plot area
    assert!(chart.on_pointer_move(60.0, 340.0));
    assert!(chart.hover().is_some());

    chart.on_pointer_leave();
    chart.tick(TOOLTIP_HIDE_DELAY / 2);
    assert!(chart.hover().is_some(), "hide is delayed");

    chart.tick(TOOLTIP_HIDE_DELAY);
    assert!(chart.hover().is_none(), "hide fired");
    assert!(chart.needs_redraw(), "hiding the tooltip repaints");

    // re-entering before the timer fires cancels the hide
    chart.draw(&mut RecordingSurface::new());
    chart.on_pointer_move(60.0, 340.0);
    chart.on_pointer_leave();
    chart.tick(TOOLTIP_HIDE_DELAY / 2);
    chart.on_pointer_move(60.0, 340.0);
    chart.tick(TOOLTIP_HIDE_DELAY * 4);
    assert!(chart.hover().is_some(), "cancelled hide never fires");
}

#[test]
fn cancel_pending_drops_delayed_actions() {
    let mut chart = Chart::with_config(static_config(ChartKind::Line));
    chart.set_series(sample_series());
    chart.draw(&mut RecordingSurface::new());

    chart.on_pointer_move(60.0, 340.0);
    chart.on_pointer_leave();
    chart.cancel_pending();
    chart.tick(TOOLTIP_HIDE_DELAY * 4);
    assert!(chart.hover().is_some(), "teardown cancelled the hide timer");
}

#[test]
fn clicking_a_point_emits_point_click() {
    let mut chart = Chart::with_config(static_config(ChartKind::Line));
    chart.set_series(sample_series());
    chart.draw(&mut RecordingSurface::new());

    let event = chart.on_click(60.0, 340.0).expect("hit the Cost/Q1 marker");
    assert_eq!(
        event,
        ChartEvent::PointClick { series: "Cost".to_string(), label: "Q1".to_string(), value: 5.0, index: 0 }
    );
}

#[test]
fn clicking_the_legend_toggles_the_series() {
    let mut chart = Chart::with_config(static_config(ChartKind::Line));
    chart.set_series(sample_series());
    chart.draw(&mut RecordingSurface::new());

    // legend rows start at (width - 100, 60), one row of 20px per series
    let event = chart.on_click(510.0, 66.0).expect("hit the first legend row");
    assert_eq!(event, ChartEvent::LegendToggle { series: "Revenue".to_string(), visible: false });
    assert!(!chart.is_series_visible(0));
    assert!(chart.needs_redraw());

    let event = chart.on_click(510.0, 66.0).expect("hit it again");
    assert_eq!(event, ChartEvent::LegendToggle { series: "Revenue".to_string(), visible: true });
    assert!(chart.is_series_visible(0));
}

#[test]
fn clicking_empty_space_emits_nothing() {
    let mut chart = Chart::with_config(static_config(ChartKind::Line));
    chart.set_series(sample_series());
    chart.draw(&mut RecordingSurface::new());
    assert_eq!(chart.on_click(200.0, 200.0), None);
}

#[test]
fn config_patch_merges_field_by_field() {
    let base = ChartConfig::default();
    let patch = ChartConfigPatch {
        kind: Some(ChartKind::Radar),
        show_grid: Some(false),
        title: Some("Patched".to_string()),
        ..ChartConfigPatch::default()
    };
    let merged = base.apply(&patch);

    assert_eq!(merged.kind, ChartKind::Radar);
    assert!(!merged.show_grid);
    assert_eq!(merged.title.as_deref(), Some("Patched"));
    // untouched fields keep their defaults
    assert!(merged.show_legend);
    assert!(merged.show_tooltip);
    assert_eq!(merged.palette, base.palette);
    assert_eq!(merged.animation, base.animation);
}

#[test]
fn kind_parses_from_cli_style_strings() {
    assert_eq!("line".parse::<ChartKind>().unwrap(), ChartKind::Line);
    assert_eq!("Doughnut".parse::<ChartKind>().unwrap(), ChartKind::Doughnut);
    assert_eq!("donut".parse::<ChartKind>().unwrap(), ChartKind::Doughnut);
    assert!("sparkline".parse::<ChartKind>().is_err());
    assert_eq!(ChartKind::Scatter.to_string(), "scatter");
}
