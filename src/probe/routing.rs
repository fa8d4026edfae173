//! Routing probe: an unknown path must come back as a clean JSON 404, not a
//! bare error page or a misrouted 200.

use reqwest::StatusCode;
use serde_json::Value;

use super::result::ProbeResult;
use super::{ApiClient, report};

pub async fn not_found(api: &ApiClient) -> ProbeResult {
    match api.get("nonexistent").await {
        Ok((status, body)) => classify_not_found(status, &body),
        Err(err) => ProbeResult::fail(report(&err)),
    }
}

fn classify_not_found(status: StatusCode, body: &str) -> ProbeResult {
    if status != StatusCode::NOT_FOUND {
        return ProbeResult::fail(format!("Expected 404, got {}", status.as_u16()));
    }

    match serde_json::from_str::<Value>(body) {
        Ok(data) if data.get("error").is_some() => ProbeResult::pass("Error handling working"),
        Ok(_) => ProbeResult::fail("Error response missing 'error' field"),
        Err(_) => ProbeResult::fail("Invalid JSON in error response"),
    }
}
