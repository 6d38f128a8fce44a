use crate::region::BoundingBox;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of what inputs, filters, and processing steps produced a result
/// set. The quality score is a fixed constant per synthesis strategy, not
/// computed from the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub datasets_used: Vec<String>,
    pub access_timestamp: DateTime<Utc>,
    pub qc_flags_applied: Vec<u8>,
    pub spatial_filters: BoundingBox,
    pub temporal_filters: (DateTime<Utc>, DateTime<Utc>),
    pub processing_steps: Vec<String>,
    /// In [0, 1].
    pub data_quality_score: f64,
}
