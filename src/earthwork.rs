//! Cut/fill decomposition and fixed-width binning.
//!
//! The splitter decomposes the signed area between the design profile and
//! the terrain profile over an interval into a fill area (design above
//! terrain) and a cut area (terrain above design), splitting exactly at
//! crossing points instead of attributing a mixed-sign trapezoid to one
//! side. The binner drives the splitter and the integrator across the
//! station range in fixed-width steps.

use crate::profile::{Bias, Profile};

/// Loop guard for the last bin: an evenly dividing range must not produce
/// a floating-point sliver bin at the end.
const BIN_CLIP_EPS: f64 = 1e-9;

/// One fixed-width bin's computed quantities, in scaled units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Interval start (inclusive).
    pub x_start: f64,
    /// Interval end (exclusive; the last bin is clipped to the range end).
    pub x_end: f64,
    pub width: f64,
    /// Integral of the design profile over the interval.
    pub area_design: f64,
    /// Integral of the terrain profile over the interval.
    pub area_terrain: f64,
    /// `area_design - area_terrain`.
    pub area_diff: f64,
    /// Earthwork to remove: terrain above design. Always >= 0.
    pub cut: f64,
    /// Earthwork to add: design above terrain. Always >= 0.
    pub fill: f64,
}

/// Decompose the area between `design` and `terrain` over `[a, b)` into
/// `(fill, cut)`, both non-negative.
///
/// Breakpoints are the interval bounds plus the clipped endpoints of every
/// overlapping segment of either profile, so each sub-interval is linear
/// on both curves. Per sub-interval, both profiles are sampled with edge
/// bias (see [`Bias`]); if either lacks coverage at an edge, the
/// sub-interval contributes nothing. A same-sign (or touching-zero)
/// difference is one trapezoid; a strict sign change is split at the
/// intersection of the two linear interpolants into two triangles. A
/// degenerate intercept (parallel interpolants, or an intercept pushed
/// outside the open sub-interval by rounding) falls back to whole-interval
/// attribution rather than failing.
///
/// Over the covered sub-intervals, `fill - cut` reconstructs the signed
/// integral of (design - terrain) up to floating-point tolerance.
pub fn fill_cut_between(design: &Profile, terrain: &Profile, a: f64, b: f64) -> (f64, f64) {
    if b <= a {
        return (0.0, 0.0);
    }

    let mut breaks = vec![a, b];
    for seg in design.segments().iter().chain(terrain.segments()) {
        if seg.x2 <= a || seg.x1 >= b {
            continue;
        }
        breaks.push(seg.x1.max(a));
        breaks.push(seg.x2.min(b));
    }
    breaks.sort_by(f64::total_cmp);
    breaks.dedup();

    let mut fill = 0.0;
    let mut cut = 0.0;

    for pair in breaks.windows(2) {
        let (xl, xr) = (pair[0], pair[1]);
        if xr <= xl {
            continue;
        }

        let edges = (
            design.y_at_biased(xl, Bias::Left),
            design.y_at_biased(xr, Bias::Right),
            terrain.y_at_biased(xl, Bias::Left),
            terrain.y_at_biased(xr, Bias::Right),
        );
        // Undefined elevation cannot be integrated: skip the sub-interval.
        let (Some(vt_l), Some(vt_r), Some(pf_l), Some(pf_r)) = edges else {
            continue;
        };

        let dl = vt_l - pf_l;
        let dr = vt_r - pf_r;

        if dl * dr < 0.0 {
            match lines_intercept_x(xl, xr, vt_l, vt_r, pf_l, pf_r) {
                Some(xi) if xl < xi && xi < xr => {
                    // Two triangles: the difference is zero at the crossing.
                    attribute((xi - xl) * dl / 2.0, &mut fill, &mut cut);
                    attribute((xr - xi) * dr / 2.0, &mut fill, &mut cut);
                }
                // Degenerate crossing: attribute the whole sub-interval.
                _ => attribute((xr - xl) * (dl + dr) / 2.0, &mut fill, &mut cut),
            }
        } else {
            attribute((xr - xl) * (dl + dr) / 2.0, &mut fill, &mut cut);
        }
    }

    (fill, cut)
}

/// Add a signed sub-area to fill (positive) or cut (negative).
fn attribute(area: f64, fill: &mut f64, cut: &mut f64) {
    if area > 0.0 {
        *fill += area;
    } else {
        *cut += -area;
    }
}

/// x-intercept of the lines through `(xl, ya_l)-(xr, ya_r)` and
/// `(xl, yb_l)-(xr, yb_r)`. `None` when the lines are parallel.
fn lines_intercept_x(xl: f64, xr: f64, ya_l: f64, ya_r: f64, yb_l: f64, yb_r: f64) -> Option<f64> {
    let slope_a = (ya_r - ya_l) / (xr - xl);
    let slope_b = (yb_r - yb_l) / (xr - xl);
    if slope_a == slope_b {
        return None;
    }
    Some(xl + (yb_l - ya_l) / (slope_a - slope_b))
}

/// Partition `[x_start, x_end)` into fixed-width bins and compute each
/// bin's areas and cut/fill decomposition.
///
/// Bins are produced strictly left-to-right and non-overlapping, the last
/// one clipped to `x_end`. Malformed parameters (`x_end <= x_start` or
/// `bin_width <= 0`) yield an empty list; surfacing that as a validation
/// error is the caller's job.
pub fn compute_bins(
    design: &Profile,
    terrain: &Profile,
    x_start: f64,
    x_end: f64,
    bin_width: f64,
) -> Vec<Bin> {
    let mut bins = Vec::new();
    if bin_width <= 0.0 {
        return bins;
    }

    let mut x = x_start;
    while x < x_end - BIN_CLIP_EPS {
        let a = x;
        let b = (x + bin_width).min(x_end);

        let area_design = design.integrate(a, b);
        let area_terrain = terrain.integrate(a, b);
        let (fill, cut) = fill_cut_between(design, terrain, a, b);

        bins.push(Bin {
            x_start: a,
            x_end: b,
            width: b - a,
            area_design,
            area_terrain,
            area_diff: area_design - area_terrain,
            cut,
            fill,
        });
        x += bin_width;
    }
    bins
}
