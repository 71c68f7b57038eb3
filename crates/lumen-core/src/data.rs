// File: crates/lumen-core/src/data.rs
// Summary: Series/point data model and the shared value extent across series.

use crate::color::Color;

/// One plotted value. `label` is the category tick shown on axes and tooltips.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
    pub color: Option<Color>,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, color: None }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// A named ordered sequence of points rendered as one visual trace.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub data: Vec<DataPoint>,
    pub color: Option<Color>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), data: Vec::new(), color: None }
    }

    pub fn from_values(name: impl Into<String>, values: &[(&str, f64)]) -> Self {
        Self {
            name: name.into(),
            data: values.iter().map(|&(l, v)| DataPoint::new(l, v)).collect(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn push(&mut self, point: DataPoint) {
        self.data.push(point);
    }

    /// Largest finite value in the series, if any.
    pub fn max_value(&self) -> Option<f64> {
        self.data
            .iter()
            .map(|p| p.value)
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }
}

/// Global `[min, max]` over the finite values of a set of series.
/// All series of one chart share this scale so they stay visually comparable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueExtent {
    pub min: f64,
    pub max: f64,
}

impl ValueExtent {
    /// `None` when no finite value exists (all series empty or malformed).
    pub fn from_series<'a, I>(series: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Series>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for s in series {
            for p in &s.data {
                if p.value.is_finite() {
                    min = min.min(p.value);
                    max = max.max(p.value);
                }
            }
        }
        if min.is_finite() && max.is_finite() {
            Some(Self { min, max })
        } else {
            None
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Compact display form for tooltips and annotations: integers render without
/// a fractional part, everything else with two decimals.
pub fn format_value(v: f64) -> String {
    if v.fract().abs() < 1e-9 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v:.2}")
    }
}
