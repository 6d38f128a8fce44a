//! Client for an optional remote hint service.
//!
//! Sends the raw query text to an OpenAI-compatible chat endpoint and
//! parses the reply into an [`ExternalHint`], with retry and exponential
//! backoff. Every failure mode degrades to `None`; text extraction in
//! the parser always stands behind the hint.

use log::{info, warn};
use ofq_parse::ExternalHint;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const ENDPOINT_ENV: &str = "OFQ_HINT_URL";
const API_KEY_ENV: &str = "OFQ_HINT_API_KEY";
const MODEL_ENV: &str = "OFQ_HINT_MODEL";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

const SYSTEM_PROMPT: &str = "Extract oceanographic query fields from the user text. \
Respond with a single JSON object with optional keys: variables (array of strings), \
spatial_bounds ([min_lon, min_lat, max_lon, max_lat]), \
temporal_bounds ([start, end] as YYYY-MM-DD), \
depth_range ([min, max] in meters), \
query_category (one of timeseries, profile, trajectory, comparison, spatial). \
Omit any key you cannot determine.";

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

/// Ask the configured hint service to interpret `text`.
///
/// Returns `None` when the endpoint is unconfigured, unreachable after
/// three attempts, or replies with no parseable JSON object.
pub async fn fetch_hint(text: &str) -> Option<ExternalHint> {
    let url = match std::env::var(ENDPOINT_ENV) {
        Ok(v) => v,
        Err(_) => {
            warn!("{ENDPOINT_ENV} not set; skipping remote hint");
            return None;
        }
    };
    let api_key = std::env::var(API_KEY_ENV).ok();
    let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to build hint service client: {e}");
            return None;
        }
    };

    let body = json!({
        "model": model,
        "messages": [
            {"role": "system", "content": SYSTEM_PROMPT},
            {"role": "user", "content": text},
        ],
        "temperature": 0.0,
    });

    let max_tries = 3;
    let mut sleep_millis: u64 = 1000;

    for attempt in 1..=max_tries {
        let mut request = client.post(&url).json(&body);
        if let Some(key) = &api_key {
            request = request.bearer_auth(key);
        }

        match request.send().await {
            Ok(response) => {
                if !response.status().is_success() {
                    warn!(
                        "Attempt {}/{}: Bad response status from hint service: {}",
                        attempt,
                        max_tries,
                        response.status()
                    );
                } else {
                    match response.json::<ChatResponse>().await {
                        Ok(parsed) => {
                            let content = parsed
                                .choices
                                .first()
                                .map(|c| c.message.content.as_str())
                                .unwrap_or("");
                            return match ExternalHint::from_text(content) {
                                Some(hint) => {
                                    info!("Hint service returned a usable hint");
                                    Some(hint)
                                }
                                None => {
                                    warn!("Hint service reply held no parseable JSON object");
                                    None
                                }
                            };
                        }
                        Err(e) => {
                            warn!(
                                "Attempt {}/{}: Failed to decode hint response: {}",
                                attempt, max_tries, e
                            );
                        }
                    }
                }
            }
            Err(e) => {
                warn!(
                    "Attempt {}/{}: Hint request failed: {}",
                    attempt, max_tries, e
                );
            }
        }

        if attempt < max_tries {
            info!(
                "Sleeping for {} milliseconds before hint retry",
                sleep_millis
            );
            tokio::time::sleep(Duration::from_millis(sleep_millis)).await;
            sleep_millis *= 2;
        }
    }

    warn!("All hint service attempts failed");
    None
}
