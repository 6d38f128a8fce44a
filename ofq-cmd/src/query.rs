//! Query execution and output formatting.

use chrono::Utc;
use log::info;
use ofq_core::region::RegionClassifier;
use ofq_parse::ExternalHint;
use ofq_pipeline::{PipelineOptions, QueryPipeline, QueryResult};

/// Run one free-text query end to end and write the result.
///
/// An inline `--hint` takes precedence over the remote hint service;
/// either way a hint that fails to parse simply leaves text extraction
/// in charge.
pub async fn run_query(
    text: &str,
    inline_hint: Option<&str>,
    remote_hint: bool,
    output: Option<&str>,
    format: &str,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let hint = match inline_hint {
        Some(raw) => ExternalHint::from_text(raw),
        None if remote_hint => crate::hint_client::fetch_hint(text).await,
        None => None,
    };
    if hint.is_some() {
        info!("Using an external hint for '{text}'");
    }

    let mut options = PipelineOptions::at(Utc::now());
    options.seed = seed;
    let pipeline = QueryPipeline::default();
    let result = pipeline.run(text, hint.as_ref(), &options);

    info!(
        "{} profiles via '{}' (quality {:.2})",
        result.profiles.len(),
        result.strategy,
        result.provenance.data_quality_score
    );

    let rendered = match format {
        "json" => serde_json::to_string_pretty(&result)?,
        "csv" => render_csv(&result),
        other => anyhow::bail!("unknown output format: {other} (expected json or csv)"),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            info!("Query complete. Output: {path}");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Flatten profiles to one row per measurement point in the format:
/// `instrument_id,cycle,latitude,longitude,timestamp,variable,depth,value,qc`.
fn render_csv(result: &QueryResult) -> String {
    let mut rows =
        vec!["instrument_id,cycle,latitude,longitude,timestamp,variable,depth,value,qc".to_string()];
    for profile in &result.profiles {
        for (variable, measurement) in &profile.measurements {
            for i in 0..measurement.len() {
                rows.push(format!(
                    "{},{},{:.4},{:.4},{},{},{:.1},{:.3},{}",
                    profile.instrument_id,
                    profile.cycle_number,
                    profile.latitude,
                    profile.longitude,
                    profile.timestamp.to_rfc3339(),
                    variable,
                    measurement.depths[i],
                    measurement.values[i],
                    measurement.qc_flags[i],
                ));
            }
        }
    }
    rows.join("\n")
}

/// Print the named-region table in classification order.
pub fn run_regions() -> anyhow::Result<()> {
    let classifier = RegionClassifier::from_embedded_table();
    for region in classifier.regions() {
        match &region.bounds {
            Some(b) => println!(
                "{}: lon [{}, {}], lat [{}, {}]",
                region.name, b.min_lon, b.max_lon, b.min_lat, b.max_lat
            ),
            None => println!("{}: unbounded", region.name),
        }
    }
    Ok(())
}
