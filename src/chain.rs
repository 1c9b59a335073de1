//! Chain merging: stitch tessellated point groups into continuous chains.
//!
//! Drawing layers arrive as many short primitives (lines, sampled arcs,
//! exploded polylines), each tessellated into an ordered point run. Groups
//! whose endpoints coincide are concatenated into longer chains so the
//! segment builder sees one continuous polyline per drawn curve.

use kurbo::Point;

/// One tessellated drawing primitive as an ordered point run.
pub type PointGroup = Vec<Point>;

/// A maximal run of coordinate-contiguous points from one drawn curve.
///
/// Consecutive points within a chain are never coordinate-equal
/// (zero-length steps are dropped while the chain is built).
pub type Chain = Vec<Point>;

/// Merge point groups into chains.
///
/// Groups are sorted by their first point's x, then stitched greedily in a
/// single left-to-right pass: a group is appended to the current chain iff
/// the chain's last point equals the group's first point *exactly*
/// (bit-for-bit f64 equality); otherwise the chain is closed and a new one
/// started.
///
/// This is deliberately not a tolerance join: upstream tessellation emits
/// shared endpoints verbatim, and widening the condition would change which
/// curves count as continuous. A group whose start is off by any amount,
/// or a pair of groups that connect but sort out of x order, stays a
/// separate chain.
pub fn merge_groups(groups: &[PointGroup]) -> Vec<Chain> {
    let mut sorted: Vec<&PointGroup> = groups.iter().filter(|g| !g.is_empty()).collect();
    if sorted.is_empty() {
        return Vec::new();
    }
    sorted.sort_by(|a, b| a[0].x.total_cmp(&b[0].x));

    let mut chains = Vec::new();
    let mut current: Chain = Vec::new();
    append_run(&mut current, sorted[0]);

    for group in &sorted[1..] {
        if current.last() == group.first() {
            append_run(&mut current, group);
        } else {
            if !current.is_empty() {
                chains.push(std::mem::take(&mut current));
            }
            append_run(&mut current, group);
        }
    }
    if !current.is_empty() {
        chains.push(current);
    }
    chains
}

/// Append points to a chain, skipping any point equal to the chain's
/// current last point (covers both a duplicated join point and degenerate
/// zero-length steps inside a group).
fn append_run(chain: &mut Chain, points: &[Point]) {
    for &p in points {
        if chain.last() != Some(&p) {
            chain.push(p);
        }
    }
}
