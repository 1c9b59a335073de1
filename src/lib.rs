//! cutfill: earthwork cut/fill areas for road-construction longitudinal
//! profiles.
//!
//! Given a design-grade elevation curve and a natural-terrain elevation
//! curve, both as tessellated 2-D point groups over a shared horizontal
//! station axis, computes the signed area between the curves in
//! fixed-width bins, decomposed exactly into cut (terrain above design)
//! and fill (design above terrain) at curve crossings.
//!
//! Pipeline: merge point groups into chains, build a segment profile per
//! layer, scale per section, then bin (integrate + split) and sample for
//! visualization. The core is pure and never fails on geometric edge
//! cases; missing coverage and degenerate intervals resolve to zero areas.
//!
//! # Example
//!
//! ```
//! use cutfill::{calculate, SectionParams};
//! use kurbo::Point;
//!
//! let design = vec![vec![Point::new(0.0, 10.0), Point::new(100.0, 10.0)]];
//! let terrain = vec![vec![Point::new(0.0, 8.0), Point::new(100.0, 8.0)]];
//! let sections = vec![SectionParams::new(1, 0.0, 100.0, 0.0, 20.0)];
//!
//! let result = calculate(&design, &terrain, &sections);
//! assert_eq!(result.total_fill, 200.0);
//! assert_eq!(result.total_cut, 0.0);
//! ```

#![forbid(unsafe_code)]

pub mod chain;
pub mod config;
pub mod earthwork;
pub mod error;
pub mod export;
pub mod profile;
pub mod sample;
pub mod tessellate;

// Re-export kurbo so downstream users get the same Point type the
// point-group inputs are built from.
pub use kurbo;

pub use chain::{merge_groups, Chain, PointGroup};
pub use config::SectionParams;
pub use error::CalcError;
pub use profile::{Profile, Segment};

use serde::Serialize;

/// One bin mapped to the station axis. All numeric fields are rounded to
/// 4 decimal places, matching the export precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinRecord {
    pub section_id: u32,
    /// Bin bounds along the scaled drawing axis.
    pub x_start: f64,
    pub x_end: f64,
    /// Bin bounds on the station axis.
    pub station_start: f64,
    pub station_end: f64,
    /// Bin width in length units.
    pub dist: f64,
    /// Bin width in station units.
    pub dist_stations: f64,
    pub area_design: f64,
    pub area_terrain: f64,
    /// `area_design - area_terrain`.
    pub area_diff: f64,
    pub cut: f64,
    pub fill: f64,
}

/// One visualization sample on the station axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StationSample {
    pub station: f64,
    pub elevation_design: f64,
    pub elevation_terrain: f64,
}

/// All visualization samples for one section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionProfile {
    pub section_id: u32,
    pub points: Vec<StationSample>,
}

/// The full result of one calculation request.
#[derive(Debug, Clone, Serialize)]
pub struct CalcResult {
    /// Sum of all bins' cut areas, across all sections.
    pub total_cut: f64,
    /// Sum of all bins' fill areas, across all sections.
    pub total_fill: f64,
    pub sections_processed: usize,
    pub bins: Vec<BinRecord>,
    pub profiles: Vec<SectionProfile>,
}

/// Full pipeline: tessellated layer geometry → per-bin cut/fill records.
///
/// Both layers are merged and built into segment profiles once; each
/// section then derives its own scaled copies (the section bounds scale
/// horizontally along with the geometry), computes its bins and its
/// visualization samples, and maps both onto the station axis:
/// `station = initial_station + (x - x_start) / station_interval`.
///
/// Structurally insufficient input degrades to empty output rather than
/// failing; validating section parameters is the caller's job.
pub fn calculate(
    design_groups: &[PointGroup],
    terrain_groups: &[PointGroup],
    sections: &[SectionParams],
) -> CalcResult {
    let design_chains = merge_groups(design_groups);
    let terrain_chains = merge_groups(terrain_groups);
    let design_raw = Profile::from_chains(&design_chains);
    let terrain_raw = Profile::from_chains(&terrain_chains);
    eprintln!(
        "  Merge       design {} groups \u{2192} {} chains, {} segments; terrain {} \u{2192} {}, {}",
        design_groups.len(),
        design_chains.len(),
        design_raw.segments().len(),
        terrain_groups.len(),
        terrain_chains.len(),
        terrain_raw.segments().len(),
    );

    let mut bins = Vec::new();
    let mut profiles = Vec::new();

    for section in sections {
        let design = design_raw.scaled(section.h_scale, section.v_scale);
        let terrain = terrain_raw.scaled(section.h_scale, section.v_scale);
        // The section bounds live in untransformed units; move them into
        // the scaled frame alongside the geometry.
        let x_start = section.x_start * section.h_scale;
        let x_end = section.x_end * section.h_scale;

        let raw_bins =
            earthwork::compute_bins(&design, &terrain, x_start, x_end, section.bin_width);

        let mut station = section.initial_station;
        for bin in &raw_bins {
            let dist_stations = bin.width / section.station_interval;
            let station_start = station;
            let station_end = station_start + dist_stations;
            station = station_end;

            bins.push(BinRecord {
                section_id: section.id,
                x_start: round4(bin.x_start),
                x_end: round4(bin.x_end),
                station_start: round4(station_start),
                station_end: round4(station_end),
                dist: round4(bin.width),
                dist_stations: round4(dist_stations),
                area_design: round4(bin.area_design),
                area_terrain: round4(bin.area_terrain),
                area_diff: round4(bin.area_diff),
                cut: round4(bin.cut),
                fill: round4(bin.fill),
            });
        }

        let samples = sample::sample_profiles(&design, &terrain, x_start, x_end);
        let points: Vec<StationSample> = samples
            .iter()
            .map(|s| StationSample {
                station: round4(
                    section.initial_station + (s.x - x_start) / section.station_interval,
                ),
                elevation_design: round4(s.y_design),
                elevation_terrain: round4(s.y_terrain),
            })
            .collect();

        eprintln!(
            "  Section {}  {} bins \u{00b7} {} profile points",
            section.id,
            raw_bins.len(),
            points.len(),
        );
        profiles.push(SectionProfile {
            section_id: section.id,
            points,
        });
    }

    let total_cut = round4(bins.iter().map(|b| b.cut).sum());
    let total_fill = round4(bins.iter().map(|b| b.fill).sum());
    eprintln!(
        "  Result      {} bins \u{00b7} fill {} \u{00b7} cut {}",
        bins.len(),
        total_fill,
        total_cut,
    );

    CalcResult {
        total_cut,
        total_fill,
        sections_processed: sections.len(),
        bins,
        profiles,
    }
}

/// Round to 4 decimal places for output records and the export.
fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
