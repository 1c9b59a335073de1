//! Canonical profile representation: a set of directed, left-to-right,
//! non-vertical line segments forming a piecewise-linear function of x.
//!
//! A profile may be discontinuous (gaps between chains) and segments from
//! distinct chains may overlap; both are tolerated. Built once per layer
//! per request and immutable afterwards; scaled copies are derived, never
//! mutated in place.

use crate::chain::Chain;

/// A non-vertical line segment with `x1 < x2` strictly.
///
/// Direction is normalized left-to-right regardless of how the source
/// chain was traversed. Vertical point pairs cannot be expressed as a
/// function of x and are dropped during construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    /// Interpolated elevation at `x`. Callers keep `x` within `[x1, x2]`.
    pub fn y_at(&self, x: f64) -> f64 {
        let t = (x - self.x1) / (self.x2 - self.x1);
        self.y1 + t * (self.y2 - self.y1)
    }

    pub fn covers(&self, x: f64) -> bool {
        self.x1 <= x && x <= self.x2
    }
}

/// Which edge of a sub-interval a sample sits on.
///
/// At a breakpoint that is simultaneously one segment's right endpoint and
/// the next segment's left endpoint, the sample must be attributed to
/// exactly one of them: the left edge of a sub-interval belongs to the
/// segment starting there, the right edge to the segment ending there.
/// Without the bias a shared boundary would be read from the wrong side
/// and the adjacent sub-areas double-counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    /// Sample is the left edge: skip segments ending exactly at `x`.
    Left,
    /// Sample is the right edge: skip segments starting exactly at `x`.
    Right,
}

/// A piecewise-linear elevation profile over the station axis.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    segments: Vec<Segment>,
}

impl Profile {
    /// Build a profile from merged chains: one segment per consecutive
    /// point pair, equal-x pairs dropped, descending pairs swapped so
    /// `x1 < x2` always holds. No cross-chain dedup or overlap resolution.
    pub fn from_chains(chains: &[Chain]) -> Self {
        let mut segments = Vec::new();
        for points in chains {
            for pair in points.windows(2) {
                let (p, q) = (pair[0], pair[1]);
                if p.x == q.x {
                    continue;
                }
                segments.push(if q.x < p.x {
                    Segment { x1: q.x, y1: q.y, x2: p.x, y2: p.y }
                } else {
                    Segment { x1: p.x, y1: p.y, x2: q.x, y2: q.y }
                });
            }
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Derive a copy with x scaled by `h_scale` and y by `v_scale`
    /// (drawing units to real-world units). The source profile is untouched.
    /// Degenerate factors are not validated here.
    pub fn scaled(&self, h_scale: f64, v_scale: f64) -> Profile {
        Profile {
            segments: self
                .segments
                .iter()
                .map(|s| Segment {
                    x1: s.x1 * h_scale,
                    y1: s.y1 * v_scale,
                    x2: s.x2 * h_scale,
                    y2: s.y2 * v_scale,
                })
                .collect(),
        }
    }

    /// Definite integral of the profile over `[a, b)`: each segment is
    /// clipped to the interval and contributes its trapezoid area.
    ///
    /// An empty profile or `b <= a` yields 0.0; segments entirely outside
    /// the interval contribute nothing. Overlapping segments each
    /// contribute in full (overlap resolution is not this layer's job).
    pub fn integrate(&self, a: f64, b: f64) -> f64 {
        if self.segments.is_empty() || b <= a {
            return 0.0;
        }
        let mut area = 0.0;
        for seg in &self.segments {
            let xa = a.max(seg.x1);
            let xb = b.min(seg.x2);
            if xb <= xa {
                continue;
            }
            area += (xb - xa) * (seg.y_at(xa) + seg.y_at(xb)) / 2.0;
        }
        area
    }

    /// Interpolated elevation at `x`, or `None` if no segment covers it.
    /// Linear search; with overlapping segments the first match wins.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        self.segments
            .iter()
            .find(|s| s.covers(x))
            .map(|s| s.y_at(x))
    }

    /// Like [`y_at`](Self::y_at), but attributing a sample that lands on a
    /// shared segment boundary per `bias`.
    pub fn y_at_biased(&self, x: f64, bias: Bias) -> Option<f64> {
        self.segments
            .iter()
            .find(|s| {
                match bias {
                    Bias::Left if x == s.x2 => false,
                    Bias::Right if x == s.x1 => false,
                    _ => s.covers(x),
                }
            })
            .map(|s| s.y_at(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn builder_drops_verticals_and_normalizes_direction() {
        // Right-to-left chain with a vertical step in the middle.
        let chains = vec![vec![pt(10.0, 3.0), pt(5.0, 2.0), pt(5.0, 7.0), pt(0.0, 1.0)]];
        let profile = Profile::from_chains(&chains);

        assert_eq!(profile.segments().len(), 2);
        for seg in profile.segments() {
            assert!(seg.x1 < seg.x2);
        }
        assert_eq!(
            profile.segments()[0],
            Segment { x1: 5.0, y1: 2.0, x2: 10.0, y2: 3.0 }
        );
        assert_eq!(
            profile.segments()[1],
            Segment { x1: 0.0, y1: 1.0, x2: 5.0, y2: 7.0 }
        );
    }

    #[test]
    fn integrate_matches_exact_trapezoid_on_sub_interval() {
        let chains = vec![vec![pt(0.0, 10.0), pt(10.0, 20.0)]];
        let profile = Profile::from_chains(&chains);

        // Heights 12 and 16 over a width of 4.
        assert_eq!(profile.integrate(2.0, 6.0), 56.0);
        // Full span.
        assert_eq!(profile.integrate(0.0, 10.0), 150.0);
    }

    #[test]
    fn integrate_degenerate_cases_are_zero() {
        let empty = Profile::default();
        assert_eq!(empty.integrate(0.0, 10.0), 0.0);

        let chains = vec![vec![pt(0.0, 5.0), pt(10.0, 5.0)]];
        let profile = Profile::from_chains(&chains);
        assert_eq!(profile.integrate(6.0, 6.0), 0.0);
        assert_eq!(profile.integrate(8.0, 3.0), 0.0);
        // Entirely outside coverage.
        assert_eq!(profile.integrate(20.0, 30.0), 0.0);
    }

    #[test]
    fn unit_scaling_is_identity() {
        let chains = vec![vec![pt(0.0, 1.5), pt(7.25, 3.75)]];
        let profile = Profile::from_chains(&chains);
        let scaled = profile.scaled(1.0, 1.0);
        assert_eq!(scaled.segments(), profile.segments());
    }

    #[test]
    fn scaling_is_independent_per_axis_and_leaves_input_untouched() {
        let chains = vec![vec![pt(1.0, 2.0), pt(3.0, 4.0)]];
        let profile = Profile::from_chains(&chains);
        let scaled = profile.scaled(10.0, 0.5);

        assert_eq!(
            scaled.segments()[0],
            Segment { x1: 10.0, y1: 1.0, x2: 30.0, y2: 2.0 }
        );
        assert_eq!(
            profile.segments()[0],
            Segment { x1: 1.0, y1: 2.0, x2: 3.0, y2: 4.0 }
        );
    }

    #[test]
    fn biased_lookup_picks_the_correct_side_of_a_shared_boundary() {
        // Two segments meeting at x = 5 with a jump in elevation.
        let chains = vec![
            vec![pt(0.0, 0.0), pt(5.0, 10.0)],
            vec![pt(5.0, 20.0), pt(10.0, 30.0)],
        ];
        let profile = Profile::from_chains(&chains);

        assert_eq!(profile.y_at_biased(5.0, Bias::Right), Some(10.0));
        assert_eq!(profile.y_at_biased(5.0, Bias::Left), Some(20.0));
        // Away from the boundary the bias makes no difference.
        assert_eq!(profile.y_at_biased(2.5, Bias::Left), Some(5.0));
        assert_eq!(profile.y_at_biased(2.5, Bias::Right), Some(5.0));
    }

    #[test]
    fn lookup_outside_coverage_is_none() {
        let chains = vec![vec![pt(0.0, 1.0), pt(4.0, 1.0)]];
        let profile = Profile::from_chains(&chains);
        assert_eq!(profile.y_at(5.0), None);
        assert_eq!(profile.y_at_biased(-1.0, Bias::Left), None);
    }
}
