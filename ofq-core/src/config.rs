use crate::qc::ACCEPTED_QC_FLAGS;
use crate::region::BoundingBox;

/// Deepest point considered plausible for any query, in meters.
pub const MAX_DEPTH_METERS: f64 = 11000.0;

/// Synthesis is restricted to the upper water column.
pub const SYNTHESIS_DEPTH_CEILING_METERS: f64 = 500.0;

/// Process-wide configuration for parsing and synthesis. Treated as an
/// immutable input: build one and pass it into component constructors.
#[derive(Debug, Clone, PartialEq)]
pub struct OceanConfig {
    /// Spatial coverage used when no region is recognized in the text.
    pub default_bbox: BoundingBox,
    /// Depth range used when no validated hint supplies one, in meters.
    pub default_depth_range: (f64, f64),
    /// Trailing window applied when no temporal pattern is recognized, in days.
    pub default_window_days: i64,
    /// QC flags considered usable downstream.
    pub accepted_qc_flags: Vec<u8>,
    /// Inclusive range the primary strategy draws its profile count from.
    pub profile_count: (usize, usize),
}

impl Default for OceanConfig {
    fn default() -> OceanConfig {
        OceanConfig {
            // India region
            default_bbox: BoundingBox::new(68.0, 6.0, 97.0, 37.0),
            default_depth_range: (0.0, 2000.0),
            default_window_days: 365,
            accepted_qc_flags: ACCEPTED_QC_FLAGS.to_vec(),
            profile_count: (20, 35),
        }
    }
}
