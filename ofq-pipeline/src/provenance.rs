use chrono::{DateTime, Utc};
use ofq_core::config::OceanConfig;
use ofq_core::provenance::Provenance;
use ofq_core::query::StructuredQuery;
use ofq_synth::SynthesisStrategy;

/// Builds the [`Provenance`] record for a result set: the literal filters
/// applied plus the fixed step labels and quality score of whichever
/// strategy produced the data.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProvenanceBuilder;

impl ProvenanceBuilder {
    pub fn build(
        query: &StructuredQuery,
        strategy: &dyn SynthesisStrategy,
        config: &OceanConfig,
        access_timestamp: DateTime<Utc>,
    ) -> Provenance {
        Provenance {
            datasets_used: strategy.datasets_used(),
            access_timestamp,
            qc_flags_applied: config.accepted_qc_flags.clone(),
            spatial_filters: query.spatial_bounds,
            temporal_filters: query.temporal_bounds,
            processing_steps: strategy.processing_steps(),
            data_quality_score: strategy.data_quality_score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProvenanceBuilder;
    use chrono::{TimeZone, Utc};
    use ofq_core::config::OceanConfig;
    use ofq_core::query::{QueryCategory, StructuredQuery};
    use ofq_core::region::BoundingBox;
    use ofq_core::variable::VariableId;
    use ofq_synth::{ProfileSynthesizer, ReducedSynthesizer};
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
    fn test_provenance_records_filters_and_score() {
        let query = sample_query();
        let config = OceanConfig::default();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

        let primary = ProvenanceBuilder::build(&query, &ProfileSynthesizer::default(), &config, now);
        assert_eq!(primary.spatial_filters, query.spatial_bounds);
        assert_eq!(primary.temporal_filters, query.temporal_bounds);
        assert_eq!(primary.qc_flags_applied, vec![1, 2, 5, 8]);
        assert_eq!(primary.data_quality_score, 0.95);
        assert_eq!(primary.access_timestamp, now);

        let reduced = ProvenanceBuilder::build(&query, &ReducedSynthesizer, &config, now);
        assert_eq!(reduced.data_quality_score, 0.60);
        assert!(reduced.data_quality_score < primary.data_quality_score);
        assert_eq!(reduced.processing_steps, vec!["fallback synthesis"]);
    }
}
