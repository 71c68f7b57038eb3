// File: crates/demo/src/main.rs
// Summary: Demo loads series from CSV (label column + one column per series) and
// renders every chart kind to PNGs under demo_out/.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lumen_core::theme;
use lumen_core::{Chart, ChartConfig, ChartKind, DataPoint, Series};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let series = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(raw);
            let series = load_series_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Using input file: {}", path.display());
            series
        }
        None => {
            println!("No CSV given; using built-in sample data");
            sample_series()
        }
    };
    anyhow::ensure!(!series.is_empty(), "no series loaded - check headers/delimiter.");
    let points: usize = series.iter().map(|s| s.data.len()).sum();
    println!("Loaded {} series, {} points", series.len(), points);

    let theme_name = std::env::args().nth(2).unwrap_or_else(|| "default".to_string());
    let theme = theme::find(&theme_name);
    println!("Theme: {}", theme.name);

    let out_dir = PathBuf::from("demo_out");
    for kind in ChartKind::ALL {
        let mut config = ChartConfig::with_kind(kind);
        // single still frame per chart
        config.animation.enabled = false;
        config.title = Some("Lumen Chart".to_string());
        config.subtitle = Some(kind.to_string());

        let mut chart = Chart::with_config(config).with_size(900.0, 560.0);
        chart.set_theme(theme);
        chart.set_series(series.clone());

        let out = out_dir.join(format!("{kind}.png"));
        lumen_render_skia::render_to_png(&mut chart, &out)?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

fn sample_series() -> Vec<Series> {
    vec![
        Series::from_values(
            "Revenue",
            &[("Jan", 42.0), ("Feb", 58.0), ("Mar", 51.0), ("Apr", 66.0), ("May", 80.0), ("Jun", 74.0)],
        ),
        Series::from_values(
            "Cost",
            &[("Jan", 30.0), ("Feb", 34.0), ("Mar", 39.0), ("Apr", 33.0), ("May", 46.0), ("Jun", 41.0)],
        ),
    ]
}

/// CSV layout: first column is the point label, every further column is one
/// series named by its header. Cells that fail to parse are skipped.
fn load_series_csv(path: &Path) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("open csv '{}'", path.display()))?;
    let headers = rdr.headers().context("headers")?.clone();
    anyhow::ensure!(headers.len() >= 2, "need a label column plus at least one value column");

    let mut series: Vec<Series> = headers.iter().skip(1).map(Series::new).collect();
    for rec in rdr.records() {
        let rec = rec.context("record")?;
        let label = rec.get(0).unwrap_or("").trim().to_string();
        for (i, s) in series.iter_mut().enumerate() {
            if let Some(v) = rec.get(i + 1).and_then(|cell| cell.trim().parse::<f64>().ok()) {
                s.push(DataPoint::new(label.clone(), v));
            }
        }
    }
    series.retain(|s| !s.data.is_empty());
    Ok(series)
}
