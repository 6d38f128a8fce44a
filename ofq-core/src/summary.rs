use crate::variable::VariableId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate description of a profile set.
///
/// Coverage fields reflect the *requested* extent copied from the query,
/// not the extent achieved by the generated profiles. Construct through
/// the pipeline's summary builder, never by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSummary {
    pub record_count: usize,
    pub variables: Vec<VariableId>,
    pub spatial_coverage: SpatialCoverage,
    pub temporal_coverage: TemporalCoverage,
    pub depth_coverage: DepthCoverage,
    pub data_sources: Vec<String>,
    /// Count of QC flags across every measurement point in the set.
    pub qc_summary: BTreeMap<u8, usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialCoverage {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemporalCoverage {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthCoverage {
    pub min_depth: f64,
    pub max_depth: f64,
}
