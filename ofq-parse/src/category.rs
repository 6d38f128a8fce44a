use ofq_core::query::QueryCategory;

/// Keyword buckets for category inference, evaluated in this exact order;
/// the first bucket with any keyword present in the text wins.
pub const CATEGORY_BUCKETS: &[(&[&str], QueryCategory)] = &[
    (
        &["trend", "change", "over time", "years"],
        QueryCategory::Timeseries,
    ),
    (&["profile", "depth", "vertical"], QueryCategory::Profile),
    (
        &["trajectory", "path", "movement"],
        QueryCategory::Trajectory,
    ),
    (
        &["compare", "difference", "vs"],
        QueryCategory::Comparison,
    ),
    (&["map", "spatial", "region", "area"], QueryCategory::Spatial),
];

/// Infer the query category from free text. Defaults to spatial.
pub fn infer_category(text: &str) -> QueryCategory {
    let lowered = text.to_lowercase();
    for (keywords, category) in CATEGORY_BUCKETS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return *category;
        }
    }
    QueryCategory::Spatial
}
