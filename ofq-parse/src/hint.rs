use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use ofq_core::config::MAX_DEPTH_METERS;
use ofq_core::query::QueryCategory;
use ofq_core::region::BoundingBox;
use ofq_core::variable::VariableId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

static JSON_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("json regex"));

/// Structured-field suggestion from an external text-understanding
/// collaborator. Every field is optional and untrusted: each one is
/// validated independently and silently dropped when malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalHint {
    pub variables: Option<Vec<String>>,
    /// `[min_lon, min_lat, max_lon, max_lat]`
    pub spatial_bounds: Option<Vec<f64>>,
    /// `[start, end]` as RFC 3339 or "YYYY-MM-DD" strings.
    pub temporal_bounds: Option<Vec<String>>,
    /// `[min_depth, max_depth]` in meters.
    pub depth_range: Option<Vec<f64>>,
    #[serde(alias = "query_type")]
    pub query_category: Option<String>,
}

impl ExternalHint {
    /// Extract a hint from collaborator output that may wrap its JSON in
    /// prose. The first `{…}` block found is deserialized; anything that
    /// fails to parse yields None.
    pub fn from_text(text: &str) -> Option<ExternalHint> {
        let block = JSON_BLOCK.find(text)?.as_str();
        match serde_json::from_str::<ExternalHint>(block) {
            Ok(hint) => Some(hint),
            Err(e) => {
                debug!("discarding malformed hint json: {e}");
                None
            }
        }
    }

    /// Known variables named by the hint. Unknown names are dropped;
    /// None when nothing valid remains.
    pub fn validated_variables(&self) -> Option<BTreeSet<VariableId>> {
        let names = self.variables.as_ref()?;
        let variables: BTreeSet<VariableId> = names
            .iter()
            .filter_map(|name| VariableId::from_name(name))
            .collect();
        if variables.is_empty() {
            None
        } else {
            Some(variables)
        }
    }

    /// The hint's bounding box, if it is well-formed and ordered.
    pub fn validated_bbox(&self) -> Option<BoundingBox> {
        let bounds = self.spatial_bounds.as_ref()?;
        if bounds.len() != 4 {
            return None;
        }
        let bbox = BoundingBox::new(bounds[0], bounds[1], bounds[2], bounds[3]);
        if bbox.is_valid() {
            Some(bbox)
        } else {
            None
        }
    }

    /// The hint's temporal window, if both endpoints parse and are ordered.
    pub fn validated_window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let bounds = self.temporal_bounds.as_ref()?;
        if bounds.len() != 2 {
            return None;
        }
        let start = parse_timestamp(&bounds[0])?;
        let end = parse_timestamp(&bounds[1])?;
        if start <= end {
            Some((start, end))
        } else {
            None
        }
    }

    /// The hint's depth range, if within [0, 11000] and ordered.
    pub fn validated_depth_range(&self) -> Option<(f64, f64)> {
        let range = self.depth_range.as_ref()?;
        if range.len() != 2 {
            return None;
        }
        let (min_depth, max_depth) = (range[0], range[1]);
        if min_depth >= 0.0 && max_depth <= MAX_DEPTH_METERS && min_depth < max_depth {
            Some((min_depth, max_depth))
        } else {
            None
        }
    }

    /// The hint's query category, if it names a known one.
    pub fn validated_category(&self) -> Option<QueryCategory> {
        QueryCategory::from_name(self.query_category.as_ref()?)
    }
}

/// Parse an RFC 3339 timestamp or a bare "YYYY-MM-DD" date (taken as
/// midnight UTC).
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s.trim()) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
