// File: crates/lumen-core/src/config.rs
// Summary: Chart kind and configuration with documented defaults and field-by-field patching.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::color::{Color, DEFAULT_PALETTE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Doughnut,
    Area,
    Radar,
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Doughnut,
        ChartKind::Area,
        ChartKind::Radar,
        ChartKind::Scatter,
    ];

    /// Kinds plotted against the rectangular chart area (grid applies).
    pub fn is_cartesian(self) -> bool {
        matches!(self, ChartKind::Line | ChartKind::Bar | ChartKind::Area | ChartKind::Scatter)
    }

    /// Pie, doughnut, and radar plot the first visible series only.
    /// Hosts select a series by toggling visibility.
    pub fn first_series_only(self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Doughnut | ChartKind::Radar)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Area => "area",
            ChartKind::Radar => "radar",
            ChartKind::Scatter => "scatter",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown chart kind {0:?}")]
pub struct ChartKindParseError(pub String);

impl FromStr for ChartKind {
    type Err = ChartKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "line" => Ok(ChartKind::Line),
            "bar" => Ok(ChartKind::Bar),
            "pie" => Ok(ChartKind::Pie),
            "doughnut" | "donut" => Ok(ChartKind::Doughnut),
            "area" => Ok(ChartKind::Area),
            "radar" => Ok(ChartKind::Radar),
            "scatter" => Ok(ChartKind::Scatter),
            _ => Err(ChartKindParseError(s.to_string())),
        }
    }
}

/// Intro animation settings. When enabled, geometry grows from the baseline
/// over `duration`; when disabled, every render pass draws at full extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationConfig {
    pub enabled: bool,
    pub duration: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { enabled: true, duration: Duration::from_millis(1000) }
    }
}

/// Chart configuration. Defaults: line chart, grid/legend/tooltip shown,
/// animation enabled for one second, the built-in six-color palette,
/// gradient fills on, responsive resizing on, no title or subtitle.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub show_grid: bool,
    pub show_legend: bool,
    pub show_tooltip: bool,
    pub animation: AnimationConfig,
    pub palette: Vec<Color>,
    pub gradients: bool,
    pub responsive: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            kind: ChartKind::Line,
            title: None,
            subtitle: None,
            show_grid: true,
            show_legend: true,
            show_tooltip: true,
            animation: AnimationConfig::default(),
            palette: DEFAULT_PALETTE.to_vec(),
            gradients: true,
            responsive: true,
        }
    }
}

impl ChartConfig {
    pub fn with_kind(kind: ChartKind) -> Self {
        Self { kind, ..Self::default() }
    }

    /// Merge `patch` over this config, field by field. Unset patch fields
    /// keep the current value; a patch cannot clear `title`/`subtitle`
    /// (assign the field directly for that).
    pub fn apply(&self, patch: &ChartConfigPatch) -> ChartConfig {
        ChartConfig {
            kind: patch.kind.unwrap_or(self.kind),
            title: patch.title.clone().or_else(|| self.title.clone()),
            subtitle: patch.subtitle.clone().or_else(|| self.subtitle.clone()),
            show_grid: patch.show_grid.unwrap_or(self.show_grid),
            show_legend: patch.show_legend.unwrap_or(self.show_legend),
            show_tooltip: patch.show_tooltip.unwrap_or(self.show_tooltip),
            animation: patch.animation.unwrap_or(self.animation),
            palette: patch.palette.clone().unwrap_or_else(|| self.palette.clone()),
            gradients: patch.gradients.unwrap_or(self.gradients),
            responsive: patch.responsive.unwrap_or(self.responsive),
        }
    }
}

/// Partial configuration supplied by hosts; every field optional.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartConfigPatch {
    pub kind: Option<ChartKind>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub show_grid: Option<bool>,
    pub show_legend: Option<bool>,
    pub show_tooltip: Option<bool>,
    pub animation: Option<AnimationConfig>,
    pub palette: Option<Vec<Color>>,
    pub gradients: Option<bool>,
    pub responsive: Option<bool>,
}
