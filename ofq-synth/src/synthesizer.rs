use crate::model::{sample_value, RegionalParams};
use anyhow::{anyhow, ensure, Context};
use chrono::{Datelike, Duration};
use log::info;
use ofq_core::config::{OceanConfig, SYNTHESIS_DEPTH_CEILING_METERS};
use ofq_core::profile::{Measurement, OceanProfile};
use ofq_core::qc::QC_GOOD;
use ofq_core::query::StructuredQuery;
use ofq_core::region::RegionClassifier;
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::BTreeMap;

/// One way of producing a profile set for a query. Strategies are tried
/// by the pipeline in a fixed order; each carries the fixed quality score
/// and processing-step labels recorded in provenance.
pub trait SynthesisStrategy {
    fn name(&self) -> &'static str;
    fn data_quality_score(&self) -> f64;
    fn processing_steps(&self) -> Vec<String>;
    fn datasets_used(&self) -> Vec<String>;
    fn synthesize(&self, query: &StructuredQuery, rng: &mut StdRng)
        -> anyhow::Result<Vec<OceanProfile>>;
}

/// Primary synthesis: regional, seasonal, depth-structured profiles drawn
/// uniformly over the query's spatial box and temporal window.
#[derive(Debug, Clone, Default)]
pub struct ProfileSynthesizer {
    config: OceanConfig,
    classifier: RegionClassifier,
}

impl ProfileSynthesizer {
    pub fn new(config: OceanConfig, classifier: RegionClassifier) -> ProfileSynthesizer {
        ProfileSynthesizer { config, classifier }
    }

    /// Draw a strictly increasing depth ladder of 3-8 samples within the
    /// upper water column.
    fn depth_ladder(
        &self,
        query: &StructuredQuery,
        rng: &mut StdRng,
    ) -> anyhow::Result<Vec<f64>> {
        let (min_depth, max_depth) = query.depth_range;
        let ceiling = max_depth.min(SYNTHESIS_DEPTH_CEILING_METERS);
        ensure!(
            min_depth < ceiling,
            "depth range [{min_depth}, {max_depth}] leaves no upper water column to sample"
        );
        let num_depths = rng.gen_range(3..=8);
        let mut depths: Vec<f64> = Vec::with_capacity(num_depths);
        while depths.len() < num_depths {
            let depth = rng.gen_range(min_depth..ceiling);
            // redraw on the rare duplicate so the ladder keeps its size
            if !depths.contains(&depth) {
                depths.push(depth);
            }
        }
        depths.sort_by(|a, b| a.total_cmp(b));
        Ok(depths)
    }
}

impl SynthesisStrategy for ProfileSynthesizer {
    fn name(&self) -> &'static str {
        "regional_model"
    }

    fn data_quality_score(&self) -> f64 {
        0.95
    }

    fn processing_steps(&self) -> Vec<String> {
        vec![
            "profile synthesis".to_string(),
            "regional modeling".to_string(),
            "quality control".to_string(),
        ]
    }

    fn datasets_used(&self) -> Vec<String> {
        vec!["Regional Oceanographic Models".to_string()]
    }

    fn synthesize(
        &self,
        query: &StructuredQuery,
        rng: &mut StdRng,
    ) -> anyhow::Result<Vec<OceanProfile>> {
        let (count_min, count_max) = self.config.profile_count;
        let count = rng.gen_range(count_min..=count_max);

        let (center_lat, center_lon) = query.spatial_bounds.center();
        let region = self.classifier.classify(center_lat, center_lon);
        let params = RegionalParams::for_region(&region.name);
        info!(
            "synthesizing {count} profiles in region '{}' ({} variables)",
            region.name,
            query.variables.len()
        );

        let (start, end) = query.temporal_bounds;
        let window_seconds = (end - start).num_seconds().max(0);

        let mut profiles = Vec::with_capacity(count);
        for i in 0..count {
            let bbox = query.spatial_bounds;
            let latitude = rng.gen_range(bbox.min_lat..bbox.max_lat);
            let longitude = rng.gen_range(bbox.min_lon..bbox.max_lon);
            let timestamp = if window_seconds > 0 {
                start + Duration::seconds(rng.gen_range(0..=window_seconds))
            } else {
                start
            };
            let day_of_year = timestamp.ordinal();

            let depths = self.depth_ladder(query, rng)?;
            let mut measurements = BTreeMap::new();
            for variable in &query.variables {
                let values: Vec<f64> = depths
                    .iter()
                    .map(|depth| {
                        sample_value(*variable, latitude, *depth, day_of_year, params, rng)
                    })
                    .collect();
                let qc_flags = vec![QC_GOOD; depths.len()];
                let measurement = Measurement::new(values, depths.clone(), qc_flags)
                    .ok_or_else(|| anyhow!("measurement invariant violated for {variable}"))
                    .context("profile synthesis")?;
                measurements.insert(*variable, measurement);
            }

            profiles.push(OceanProfile {
                instrument_id: format!("SYN_{}", 2_900_000 + i),
                cycle_number: rng.gen_range(1..=300),
                latitude,
                longitude,
                timestamp,
                measurements,
            });
        }
        Ok(profiles)
    }
}

/// Reduced fallback synthesis: a fixed count of single-depth profiles with
/// uniform values, used when the primary strategy fails.
#[derive(Debug, Clone, Default)]
pub struct ReducedSynthesizer;

/// Profile count produced by the reduced strategy.
pub const REDUCED_PROFILE_COUNT: usize = 10;

impl SynthesisStrategy for ReducedSynthesizer {
    fn name(&self) -> &'static str {
        "reduced_fallback"
    }

    fn data_quality_score(&self) -> f64 {
        0.60
    }

    fn processing_steps(&self) -> Vec<String> {
        vec!["fallback synthesis".to_string()]
    }

    fn datasets_used(&self) -> Vec<String> {
        vec!["Fallback Synthesis".to_string()]
    }

    fn synthesize(
        &self,
        query: &StructuredQuery,
        rng: &mut StdRng,
    ) -> anyhow::Result<Vec<OceanProfile>> {
        let bbox = query.spatial_bounds;
        let (min_depth, max_depth) = query.depth_range;
        let (_, end) = query.temporal_bounds;

        let mut profiles = Vec::with_capacity(REDUCED_PROFILE_COUNT);
        for i in 0..REDUCED_PROFILE_COUNT {
            let latitude = rng.gen_range(bbox.min_lat..bbox.max_lat);
            let longitude = rng.gen_range(bbox.min_lon..bbox.max_lon);
            let depth = rng.gen_range(min_depth..max_depth);

            let mut measurements = BTreeMap::new();
            for variable in &query.variables {
                let measurement = Measurement::new(
                    vec![rng.gen_range(0.0..50.0)],
                    vec![depth],
                    vec![QC_GOOD],
                )
                .ok_or_else(|| anyhow!("measurement invariant violated for {variable}"))?;
                measurements.insert(*variable, measurement);
            }

            profiles.push(OceanProfile {
                instrument_id: format!("FALLBACK_{i}"),
                cycle_number: 1,
                latitude,
                longitude,
                timestamp: end,
                measurements,
            });
        }
        Ok(profiles)
    }
}
