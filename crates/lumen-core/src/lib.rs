// File: crates/lumen-core/src/lib.rs
// Summary: Core library entry point; exports the public API for chart construction and rendering.

pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod geometry;
pub mod hittest;
pub mod layout;
pub mod render;
pub mod scale;
pub mod schedule;
pub mod surface;
pub mod theme;

pub use chart::{Chart, ChartEvent};
pub use color::Color;
pub use config::{AnimationConfig, ChartConfig, ChartConfigPatch, ChartKind};
pub use data::{DataPoint, Series, ValueExtent};
pub use geometry::{ChartGeometry, Hit};
pub use hittest::hit_test;
pub use layout::{ChartArea, Insets};
pub use scale::LinearScale;
pub use schedule::{RedrawReason, RedrawScheduler, TimerId, Timers};
pub use surface::{Brush, Path, PathCmd, Point, Rect, Surface, TextAlign};
pub use theme::Theme;
