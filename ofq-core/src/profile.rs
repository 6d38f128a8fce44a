use crate::variable::VariableId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Depth-ordered values for one variable within a single profile.
///
/// Invariant: `values`, `depths`, and `qc_flags` all have the same length,
/// and `depths` is strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub values: Vec<f64>,
    pub depths: Vec<f64>,
    pub qc_flags: Vec<u8>,
}

impl Measurement {
    /// Build a measurement, checking the length and depth-ordering invariants.
    pub fn new(values: Vec<f64>, depths: Vec<f64>, qc_flags: Vec<u8>) -> Option<Measurement> {
        if values.len() != depths.len() || values.len() != qc_flags.len() {
            return None;
        }
        if !depths.windows(2).all(|pair| pair[0] < pair[1]) {
            return None;
        }
        Some(Measurement {
            values,
            depths,
            qc_flags,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One synthetic float profile: a location, a timestamp, and per-variable
/// depth-ordered measurements. Created fresh per synthesis call and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OceanProfile {
    pub instrument_id: String,
    pub cycle_number: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
    pub measurements: BTreeMap<VariableId, Measurement>,
}

#[cfg(test)]
mod tests {
    use super::Measurement;

    #[test]
    fn test_measurement_new_valid() {
        let m = Measurement::new(vec![28.0, 20.0], vec![10.0, 150.0], vec![1, 1]).unwrap();
        assert_eq!(m.len(), 2);
        assert!(!m.is_empty());
    }

    #[test]
    fn test_measurement_rejects_length_mismatch() {
        assert!(Measurement::new(vec![28.0], vec![10.0, 150.0], vec![1, 1]).is_none());
        assert!(Measurement::new(vec![28.0, 20.0], vec![10.0, 150.0], vec![1]).is_none());
    }

    #[test]
    fn test_measurement_rejects_unordered_depths() {
        assert!(Measurement::new(vec![28.0, 20.0], vec![150.0, 10.0], vec![1, 1]).is_none());
        // equal depths are not strictly increasing
        assert!(Measurement::new(vec![28.0, 20.0], vec![10.0, 10.0], vec![1, 1]).is_none());
    }
}
