use serde::{Deserialize, Serialize};

/// All per-section calculation parameters in one struct.
/// Designed to be deserializable (sections arrive already resolved from
/// the upstream layer/scale inference) and cheap to clone per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionParams {
    /// Section identifier, carried through to bin records and the export.
    pub id: u32,

    /// Section start along the drawing's horizontal axis
    /// (untransformed drawing units).
    pub x_start: f64,
    /// Section end, exclusive. Must be greater than `x_start` for any
    /// bins to be produced.
    pub x_end: f64,

    /// Station value at the section start.
    pub initial_station: f64,
    /// Real-world distance covered by one station unit.
    pub station_interval: f64,

    /// Width of each aggregation bin, in scaled drawing units.
    #[serde(default = "default_bin_width")]
    pub bin_width: f64,

    /// Horizontal drawing-to-real scale factor.
    #[serde(default = "default_scale")]
    pub h_scale: f64,
    /// Vertical drawing-to-real scale factor.
    #[serde(default = "default_scale")]
    pub v_scale: f64,
}

fn default_bin_width() -> f64 {
    100.0
}

fn default_scale() -> f64 {
    1.0
}

impl SectionParams {
    /// Section with the default bin width (100.0) and unit scales.
    pub fn new(
        id: u32,
        x_start: f64,
        x_end: f64,
        initial_station: f64,
        station_interval: f64,
    ) -> Self {
        Self {
            id,
            x_start,
            x_end,
            initial_station,
            station_interval,
            bin_width: default_bin_width(),
            h_scale: default_scale(),
            v_scale: default_scale(),
        }
    }
}
