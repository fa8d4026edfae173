//! Probes built on `GET /history`: basic connectivity, and database
//! reachability inferred through the same endpoint (the service has no
//! dedicated database health route).

use reqwest::StatusCode;
use serde_json::Value;

use super::result::ProbeResult;
use super::{ApiClient, report};

/// Basic API connectivity: the history endpoint answers 200 with a JSON
/// object whose `history` field is an array.
pub async fn connectivity(api: &ApiClient) -> ProbeResult {
    match api.get("history").await {
        Ok((status, body)) => classify_connectivity(status, &body),
        Err(err) => ProbeResult::fail(report(&err)),
    }
}

/// Database reachability, inferred transitively: serving the history list
/// requires a live database connection on the server side. A 500 is read as
/// the database being down rather than the route being broken.
pub async fn database_reachability(api: &ApiClient) -> ProbeResult {
    match api.get("history").await {
        Ok((status, body)) => classify_database(status, &body),
        Err(err) => ProbeResult::fail(report(&err)),
    }
}

fn classify_connectivity(status: StatusCode, body: &str) -> ProbeResult {
    if status != StatusCode::OK {
        return ProbeResult::fail(format!(
            "API request failed with status {}",
            status.as_u16()
        ));
    }

    match serde_json::from_str::<Value>(body) {
        Ok(data) => match data.get("history") {
            Some(Value::Array(entries)) => {
                tracing::debug!(count = entries.len(), "history entries");
                ProbeResult::pass("API connectivity successful")
            }
            Some(_) => ProbeResult::fail("History field is not an array"),
            None => ProbeResult::fail("Response missing 'history' field"),
        },
        Err(err) => ProbeResult::fail(format!("Invalid JSON response: {err}")),
    }
}

fn classify_database(status: StatusCode, body: &str) -> ProbeResult {
    match status.as_u16() {
        200 => match serde_json::from_str::<Value>(body) {
            Ok(data) => match data.get("history") {
                Some(Value::Array(_)) => ProbeResult::pass("Database connection working"),
                _ => ProbeResult::fail("Invalid response structure from database"),
            },
            Err(_) => ProbeResult::fail("Invalid JSON response from database"),
        },
        500 => ProbeResult::fail("Database connection error (500)"),
        other => ProbeResult::fail(format!("Unexpected status code: {other}")),
    }
}
