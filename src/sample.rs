//! Merged profile sampling for visualization.
//!
//! Produces one sample per x where *both* curves are defined: all clipped
//! segment endpoints (so every slope change appears) plus a regular grid
//! for visual smoothness. The cut/fill numbers never come from here; the
//! binner integrates the profiles exactly.

use crate::profile::Profile;

/// Regular grid spacing between extra samples, in drawing units.
pub const SAMPLE_STEP: f64 = 2.0;

/// Both curves' interpolated elevations at one x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    pub x: f64,
    pub y_design: f64,
    pub y_terrain: f64,
}

/// Sample both profiles over `[x_start, x_end]`.
///
/// Candidate positions are the union of both profiles' segment endpoints
/// clipped to the bounds, plus a grid every [`SAMPLE_STEP`] units; the
/// result is sorted ascending with unique x values, and positions where
/// either profile lacks coverage are omitted entirely.
pub fn sample_profiles(
    design: &Profile,
    terrain: &Profile,
    x_start: f64,
    x_end: f64,
) -> Vec<ProfileSample> {
    let mut xs: Vec<f64> = Vec::new();
    for seg in design.segments().iter().chain(terrain.segments()) {
        if seg.x2 >= x_start && seg.x1 <= x_end {
            xs.push(seg.x1.max(x_start));
            xs.push(seg.x2.min(x_end));
        }
    }

    let mut x = x_start;
    while x <= x_end {
        xs.push(x);
        x += SAMPLE_STEP;
    }

    xs.sort_by(f64::total_cmp);
    xs.dedup();

    xs.into_iter()
        .filter_map(|x| match (design.y_at(x), terrain.y_at(x)) {
            (Some(y_design), Some(y_terrain)) => Some(ProfileSample { x, y_design, y_terrain }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn profile(points: &[(f64, f64)]) -> Profile {
        let chain: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        Profile::from_chains(&[chain])
    }

    #[test]
    fn samples_only_where_both_profiles_are_covered() {
        let design = profile(&[(0.0, 10.0), (10.0, 10.0)]);
        let terrain = profile(&[(0.0, 8.0), (4.0, 8.0)]);

        let samples = sample_profiles(&design, &terrain, 0.0, 10.0);
        // Grid at 0, 2, 4 plus the endpoint at 4 (deduplicated); 6..10
        // have no terrain coverage.
        assert_eq!(samples.len(), 3);
        assert!(samples.iter().all(|s| s.x <= 4.0));
        assert!(samples.iter().all(|s| s.y_design == 10.0 && s.y_terrain == 8.0));
    }

    #[test]
    fn output_is_sorted_with_unique_x() {
        let design = profile(&[(0.0, 0.0), (3.0, 3.0), (9.0, 0.0)]);
        let terrain = profile(&[(0.0, 1.0), (9.0, 1.0)]);

        let samples = sample_profiles(&design, &terrain, 0.0, 9.0);
        for pair in samples.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
        // The slope change at x = 3 is present even though it is off-grid.
        assert!(samples.iter().any(|s| s.x == 3.0));
    }

    #[test]
    fn interpolated_values_match_the_curves() {
        let design = profile(&[(0.0, 0.0), (10.0, 10.0)]);
        let terrain = profile(&[(0.0, 5.0), (10.0, 5.0)]);

        let samples = sample_profiles(&design, &terrain, 0.0, 10.0);
        let at_6 = samples.iter().find(|s| s.x == 6.0).unwrap();
        assert!((at_6.y_design - 6.0).abs() < 1e-12);
        assert_eq!(at_6.y_terrain, 5.0);
    }

    #[test]
    fn interval_outside_all_coverage_is_empty() {
        let design = profile(&[(0.0, 10.0), (10.0, 10.0)]);
        let terrain = profile(&[(0.0, 8.0), (10.0, 8.0)]);
        assert!(sample_profiles(&design, &terrain, 50.0, 60.0).is_empty());
    }

    #[test]
    fn endpoints_are_clipped_to_the_bounds() {
        let design = profile(&[(-5.0, 10.0), (15.0, 10.0)]);
        let terrain = profile(&[(-5.0, 8.0), (15.0, 8.0)]);

        let samples = sample_profiles(&design, &terrain, 0.0, 10.0);
        assert_eq!(samples.first().unwrap().x, 0.0);
        assert_eq!(samples.last().unwrap().x, 10.0);
    }
}
