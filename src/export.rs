//! Semicolon-delimited tabular export of bin records.
//!
//! The schema is fixed by the bin record shape: one row per bin, numeric
//! values already rounded to 4 decimal places by the pipeline.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CalcError;
use crate::BinRecord;

/// Fixed column order of the export.
const HEADER: [&str; 12] = [
    "section_id",
    "x_start",
    "x_end",
    "station_start",
    "station_end",
    "dist",
    "dist_stations",
    "area_design",
    "area_terrain",
    "area_diff",
    "cut",
    "fill",
];

/// Write the header row and one row per bin to `writer`.
pub fn write_bins<W: Write>(writer: W, bins: &[BinRecord]) -> Result<(), CalcError> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(writer);

    out.write_record(HEADER)?;
    for bin in bins {
        out.serialize(bin)?;
    }
    out.flush()?;
    Ok(())
}

/// Write the export to a file, creating it (or truncating an existing one).
pub fn write_bins_to_path<P: AsRef<Path>>(path: P, bins: &[BinRecord]) -> Result<(), CalcError> {
    let file = File::create(path)?;
    write_bins(file, bins)
}
