use crate::config::MAX_DEPTH_METERS;
use crate::region::BoundingBox;
use crate::variable::VariableId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The kind of question a query is asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryCategory {
    Profile,
    Timeseries,
    Spatial,
    Trajectory,
    Trend,
    Comparison,
}

impl QueryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryCategory::Profile => "profile",
            QueryCategory::Timeseries => "timeseries",
            QueryCategory::Spatial => "spatial",
            QueryCategory::Trajectory => "trajectory",
            QueryCategory::Trend => "trend",
            QueryCategory::Comparison => "comparison",
        }
    }

    /// Resolve a canonical name (exact, case-insensitive) to a category.
    pub fn from_name(name: &str) -> Option<QueryCategory> {
        match name.trim().to_lowercase().as_str() {
            "profile" => Some(QueryCategory::Profile),
            "timeseries" => Some(QueryCategory::Timeseries),
            "spatial" => Some(QueryCategory::Spatial),
            "trajectory" => Some(QueryCategory::Trajectory),
            "trend" => Some(QueryCategory::Trend),
            "comparison" => Some(QueryCategory::Comparison),
            _ => None,
        }
    }
}

impl fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated, structured form of a free-text request. Immutable once
/// produced by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredQuery {
    pub variables: BTreeSet<VariableId>,
    pub spatial_bounds: BoundingBox,
    pub temporal_bounds: (DateTime<Utc>, DateTime<Utc>),
    pub depth_range: (f64, f64),
    pub category: QueryCategory,
}

impl StructuredQuery {
    /// Check every structural invariant: variables non-empty, box ordered,
    /// start before (or equal to) end, depth within [0, 11000] and ordered.
    pub fn is_valid(&self) -> bool {
        let (start, end) = self.temporal_bounds;
        let (min_depth, max_depth) = self.depth_range;
        !self.variables.is_empty()
            && self.spatial_bounds.is_valid()
            && start <= end
            && min_depth >= 0.0
            && max_depth <= MAX_DEPTH_METERS
            && min_depth < max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::{QueryCategory, StructuredQuery};
    use crate::region::BoundingBox;
    use crate::variable::VariableId;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeSet;

    fn sample_query() -> StructuredQuery {
        let mut variables = BTreeSet::new();
        variables.insert(VariableId::Temperature);
        StructuredQuery {
            variables,
            spatial_bounds: BoundingBox::new(80.0, 5.0, 100.0, 25.0),
            temporal_bounds: (
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            ),
            depth_range: (0.0, 2000.0),
            category: QueryCategory::Spatial,
        }
    }

    #[test]
    fn test_valid_query() {
        assert!(sample_query().is_valid());
    }

    #[test]
    fn test_invalid_empty_variables() {
        let mut query = sample_query();
        query.variables.clear();
        assert!(!query.is_valid());
    }

    #[test]
    fn test_invalid_temporal_order() {
        let mut query = sample_query();
        query.temporal_bounds = (query.temporal_bounds.1, query.temporal_bounds.0);
        assert!(!query.is_valid());
    }

    #[test]
    fn test_invalid_depth_range() {
        let mut query = sample_query();
        query.depth_range = (0.0, 12000.0);
        assert!(!query.is_valid());
        query.depth_range = (-5.0, 2000.0);
        assert!(!query.is_valid());
        query.depth_range = (500.0, 500.0);
        assert!(!query.is_valid());
    }

    #[test]
    fn test_category_from_name() {
        assert_eq!(
            QueryCategory::from_name("Timeseries"),
            Some(QueryCategory::Timeseries)
        );
        assert_eq!(QueryCategory::from_name("heatmap"), None);
    }
}
