//! Upload endpoint probes: availability plus the two multipart validation
//! paths (file part absent, services field empty).

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use super::result::ProbeResult;
use super::{ApiClient, report};

const DUMMY_FILE_NAME: &str = "test.txt";
const DUMMY_FILE_CONTENT: &[u8] = b"dummy content";

/// Checks that `POST /upload` is routed at all. A 400 or 500 means the
/// handler exists and rejected the empty request; only a 404 is a failure.
/// Any other status still confirms the route exists, so it counts as a
/// weaker pass. Looser than the other probes, and kept that way on purpose.
pub async fn availability(api: &ApiClient) -> ProbeResult {
    match api.post_empty("upload").await {
        Ok((status, _)) => classify_availability(status),
        Err(err) => ProbeResult::fail(report(&err)),
    }
}

/// Multipart request carrying a `services` field but no file part. The
/// server must reject it with a 400 naming the missing file.
pub async fn missing_file(api: &ApiClient) -> ProbeResult {
    let form = Form::new().text("services", "filemoon");

    match api.post_multipart("upload", form).await {
        Ok((status, body)) => classify_missing_file(status, &body),
        Err(err) => ProbeResult::fail(report(&err)),
    }
}

/// Multipart request carrying a dummy file part and an empty `services`
/// field. The server must reject it with a 400 naming the missing service.
pub async fn missing_service(api: &ApiClient) -> ProbeResult {
    let part = match Part::bytes(DUMMY_FILE_CONTENT)
        .file_name(DUMMY_FILE_NAME)
        .mime_str("text/plain")
    {
        Ok(part) => part,
        Err(err) => return ProbeResult::fail(report(&err)),
    };
    let form = Form::new().part("file", part).text("services", "");

    match api.post_multipart("upload", form).await {
        Ok((status, body)) => classify_missing_service(status, &body),
        Err(err) => ProbeResult::fail(report(&err)),
    }
}

fn classify_availability(status: StatusCode) -> ProbeResult {
    match status.as_u16() {
        400 | 500 => ProbeResult::pass("Upload endpoint available"),
        404 => ProbeResult::fail("Upload endpoint not found"),
        other => ProbeResult::pass(format!("Endpoint available (status: {other})")),
    }
}

fn classify_missing_file(status: StatusCode, body: &str) -> ProbeResult {
    if status != StatusCode::BAD_REQUEST {
        return ProbeResult::fail(format!("Expected 400, got {}", status.as_u16()));
    }

    match error_message(body) {
        Ok(Some(error)) if error.contains("No file uploaded") => {
            ProbeResult::pass("File validation working correctly")
        }
        Ok(_) => ProbeResult::fail("Missing proper file validation error"),
        Err(err) => ProbeResult::fail(format!("Invalid JSON: {err}")),
    }
}

fn classify_missing_service(status: StatusCode, body: &str) -> ProbeResult {
    if status != StatusCode::BAD_REQUEST {
        return ProbeResult::fail(format!("Expected 400, got {}", status.as_u16()));
    }

    match error_message(body) {
        Ok(Some(error)) if error.contains("No service selected") => {
            ProbeResult::pass("Service validation working correctly")
        }
        Ok(_) => ProbeResult::fail("Missing proper service validation error"),
        Err(err) => ProbeResult::fail(format!("Invalid JSON: {err}")),
    }
}

fn error_message(body: &str) -> Result<Option<String>, serde_json::Error> {
    let data: Value = serde_json::from_str(body)?;
    Ok(data
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string))
}
