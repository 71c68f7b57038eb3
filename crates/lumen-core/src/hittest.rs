// File: crates/lumen-core/src/hittest.rs
// Summary: Pointer hit-testing against built geometry, per hit-region kind.

use std::f64::consts::PI;

use crate::geometry::{ChartGeometry, Hit, HitRegion};
use crate::surface::Point;

/// Map pointer coordinates to the data point under them, if any.
/// Targets are tested last-drawn-first so the topmost shape wins.
pub fn hit_test(geometry: &ChartGeometry, x: f32, y: f32) -> Option<Hit> {
    let p = Point::new(x, y);
    geometry
        .targets
        .iter()
        .rev()
        .find(|t| region_contains(&t.region, p))
        .map(|t| t.hit)
}

fn region_contains(region: &HitRegion, p: Point) -> bool {
    match region {
        HitRegion::Circle { center, radius } => {
            let dx = p.x - center.x;
            let dy = p.y - center.y;
            dx * dx + dy * dy <= radius * radius
        }
        HitRegion::Rect(r) => r.contains(p),
        HitRegion::Sector { center, inner, outer, start, sweep } => {
            if *sweep <= 0.0 {
                return false;
            }
            let dx = (p.x - center.x) as f64;
            let dy = (p.y - center.y) as f64;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < *inner as f64 || dist > *outer as f64 {
                return false;
            }
            // Angle relative to the sector start, normalized into [0, 2pi).
            let rel = (dy.atan2(dx) - start).rem_euclid(2.0 * PI);
            rel <= *sweep
        }
    }
}
