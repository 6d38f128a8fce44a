use ofq_core::profile::OceanProfile;
use ofq_core::query::StructuredQuery;
use ofq_core::summary::{DataSummary, DepthCoverage, SpatialCoverage, TemporalCoverage};
use std::collections::BTreeMap;

/// Builds a [`DataSummary`] for a profile set.
///
/// Coverage is copied from the query (the requested extent), not
/// recomputed from the profiles; only the record count and QC histogram
/// reflect the generated data.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryBuilder;

impl SummaryBuilder {
    pub fn build(
        query: &StructuredQuery,
        profiles: &[OceanProfile],
        data_sources: Vec<String>,
    ) -> DataSummary {
        let mut qc_summary: BTreeMap<u8, usize> = BTreeMap::new();
        for profile in profiles {
            for measurement in profile.measurements.values() {
                for flag in &measurement.qc_flags {
                    *qc_summary.entry(*flag).or_default() += 1;
                }
            }
        }

        let bbox = query.spatial_bounds;
        let (start, end) = query.temporal_bounds;
        let (min_depth, max_depth) = query.depth_range;
        DataSummary {
            record_count: profiles.len(),
            variables: query.variables.iter().copied().collect(),
            spatial_coverage: SpatialCoverage {
                min_lat: bbox.min_lat,
                max_lat: bbox.max_lat,
                min_lon: bbox.min_lon,
                max_lon: bbox.max_lon,
            },
            temporal_coverage: TemporalCoverage { start, end },
            depth_coverage: DepthCoverage {
                min_depth,
                max_depth,
            },
            data_sources,
            qc_summary,
        }
    }
}
