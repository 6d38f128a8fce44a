//! Free-text to structured query parsing.
//!
//! Each query field is resolved through the same three-tier fallback,
//! composed left to right: validated external hint, then text extraction,
//! then the fixed default from [`OceanConfig`]. Parsing is total; it never
//! returns an error to the caller.

use chrono::{DateTime, Utc};
use log::debug;
use ofq_core::config::OceanConfig;
use ofq_core::query::StructuredQuery;
use ofq_core::region::{Region, RegionClassifier};
use ofq_core::variable::VariableId;
use std::collections::BTreeSet;

pub mod category;
pub mod hint;
pub mod temporal;

pub use hint::ExternalHint;

/// Converts a raw request string (plus an optional external hint) into a
/// validated [`StructuredQuery`].
#[derive(Debug, Clone, Default)]
pub struct StructuredQueryParser {
    config: OceanConfig,
    classifier: RegionClassifier,
}

impl StructuredQueryParser {
    pub fn new(config: OceanConfig, classifier: RegionClassifier) -> StructuredQueryParser {
        StructuredQueryParser { config, classifier }
    }

    /// Parse a request into a structured query.
    ///
    /// Every hint field failing validation falls back to text extraction
    /// for that field only; a field with no usable hint and no recognized
    /// text pattern takes its fixed default. The result always satisfies
    /// [`StructuredQuery::is_valid`].
    pub fn parse(
        &self,
        raw_text: &str,
        external_hint: Option<&ExternalHint>,
        reference_time: DateTime<Utc>,
    ) -> StructuredQuery {
        let variables = external_hint
            .and_then(|hint| hint.validated_variables())
            .or_else(|| {
                let scanned = VariableId::scan_text(raw_text);
                if scanned.is_empty() {
                    None
                } else {
                    Some(scanned)
                }
            })
            .unwrap_or_else(|| {
                let mut defaults = BTreeSet::new();
                defaults.insert(VariableId::Temperature);
                defaults
            });

        let spatial_bounds = external_hint
            .and_then(|hint| hint.validated_bbox())
            .or_else(|| {
                self.classifier
                    .classify_by_name(raw_text)
                    .and_then(|region: Region| region.bounds)
            })
            .unwrap_or(self.config.default_bbox);

        let temporal_bounds = external_hint
            .and_then(|hint| hint.validated_window())
            .or_else(|| temporal::parse_window(raw_text, reference_time))
            .unwrap_or_else(|| {
                temporal::default_window(reference_time, self.config.default_window_days)
            });

        let depth_range = external_hint
            .and_then(|hint| hint.validated_depth_range())
            .unwrap_or(self.config.default_depth_range);

        let query_category = external_hint
            .and_then(|hint| hint.validated_category())
            .unwrap_or_else(|| category::infer_category(raw_text));

        let query = StructuredQuery {
            variables,
            spatial_bounds,
            temporal_bounds,
            depth_range,
            category: query_category,
        };
        debug!(
            "parsed query: {} variable(s), category {}",
            query.variables.len(),
            query.category
        );
        query
    }

    /// The fully-defaulted query: temperature, default box, trailing
    /// default window, default depth range, spatial category.
    pub fn default_query(&self, reference_time: DateTime<Utc>) -> StructuredQuery {
        self.parse("", None, reference_time)
    }
}
