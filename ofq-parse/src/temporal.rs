use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit regex"));

/// First run of digits in the text, if any.
fn first_number(text: &str) -> Option<i64> {
    DIGIT_RUN
        .find(text)
        .and_then(|m| m.as_str().parse::<i64>().ok())
}

/// Recognize a relative temporal window in free text.
///
/// Supported patterns: "last N year(s)" (N * 365 days), "last N month(s)"
/// (N * 30 days), and "recent"/"latest" (30 days). The window always ends
/// at `reference_time`. Returns None when no pattern is recognized.
pub fn parse_window(
    text: &str,
    reference_time: DateTime<Utc>,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let lowered = text.to_lowercase();

    let days = if lowered.contains("last") && lowered.contains("year") {
        first_number(&lowered).unwrap_or(1) * 365
    } else if lowered.contains("last") && lowered.contains("month") {
        first_number(&lowered).unwrap_or(1) * 30
    } else if lowered.contains("recent") || lowered.contains("latest") {
        30
    } else {
        return None;
    };

    Some((reference_time - Duration::days(days), reference_time))
}

/// The default trailing window ending at `reference_time`.
pub fn default_window(
    reference_time: DateTime<Utc>,
    window_days: i64,
) -> (DateTime<Utc>, DateTime<Utc>) {
    (reference_time - Duration::days(window_days), reference_time)
}

#[cfg(test)]
mod tests {
    use super::{default_window, parse_window};
    use chrono::{Duration, TimeZone, Utc};

    fn reference() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_last_n_years() {
        let (start, end) = parse_window("salinity trend over the last 2 years", reference()).unwrap();
        assert_eq!(end, reference());
        assert_eq!(end - start, Duration::days(730));
    }

    #[test]
    fn test_last_year_without_number() {
        let (start, end) = parse_window("temperature last year", reference()).unwrap();
        assert_eq!(end - start, Duration::days(365));
    }

    #[test]
    fn test_last_n_months() {
        let (start, end) = parse_window("oxygen in the last 6 months", reference()).unwrap();
        assert_eq!(end - start, Duration::days(180));
    }

    #[test]
    fn test_recent_and_latest() {
        let (start, end) = parse_window("recent chlorophyll levels", reference()).unwrap();
        assert_eq!(end - start, Duration::days(30));
        let (start, end) = parse_window("latest profiles near Chennai", reference()).unwrap();
        assert_eq!(end - start, Duration::days(30));
    }

    #[test]
    fn test_no_pattern() {
        assert!(parse_window("temperature in bay of bengal", reference()).is_none());
        assert!(parse_window("", reference()).is_none());
    }

    #[test]
    fn test_default_window() {
        let (start, end) = default_window(reference(), 365);
        assert_eq!(end, reference());
        assert_eq!(end - start, Duration::days(365));
    }
}
