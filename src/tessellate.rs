//! Tessellation of drawing primitives into point groups.
//!
//! Pure sampling math only: drawing-file access and entity/layer handling
//! live upstream and hand over primitive parameters. Arcs are flattened so
//! that no sub-chord spans more than a caller-chosen arc length, which
//! bounds the sagitta error of the downstream piecewise-linear model.

use std::f64::consts::PI;

use kurbo::Point;

use crate::chain::PointGroup;

/// Default maximum arc-segment length, in drawing units.
pub const DEFAULT_MAX_SEG_LEN: f64 = 0.5;

/// A straight line is its own tessellation.
pub fn line_points(start: Point, end: Point) -> PointGroup {
    vec![start, end]
}

/// Sample a circular arc into a polyline.
///
/// Angles are in degrees, swept counter-clockwise from `start_angle_deg`
/// to `end_angle_deg`; a negative sweep wraps by a full turn. The arc is
/// split into at least 2 sub-chords, and into enough that no sub-arc is
/// longer than `max_seg_len`, yielding `n + 1` points with the true arc
/// endpoints at both ends.
pub fn arc_points(
    center: Point,
    radius: f64,
    start_angle_deg: f64,
    end_angle_deg: f64,
    max_seg_len: f64,
) -> PointGroup {
    let start = start_angle_deg.to_radians();
    let mut sweep = end_angle_deg.to_radians() - start;
    if sweep < 0.0 {
        sweep += 2.0 * PI;
    }

    let arc_len = sweep.abs() * radius;
    let n = ((arc_len / max_seg_len).ceil() as usize).max(2);

    (0..=n)
        .map(|i| {
            let angle = start + sweep * (i as f64 / n as f64);
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}
