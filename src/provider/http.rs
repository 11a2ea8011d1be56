//! HTTP client construction and status mapping.

use std::time::Duration;

use crate::error::AssistError;

/// Build a new reqwest client.
///
/// No timeout is applied unless one is given.
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, AssistError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Map a non-success HTTP status to an error.
pub fn status_to_error(status: u16, body: &str) -> AssistError {
    let message = extract_error_message(body).unwrap_or_else(|| body.to_string());
    match status {
        401 | 403 => AssistError::Authentication(message),
        429 => AssistError::RateLimited {
            retry_after_ms: extract_retry_after(body),
        },
        _ => AssistError::api(status, message),
    }
}

// Google errors look like {"error": {"code": 400, "message": "...", "status": "..."}}
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

// RetryInfo detail carries a duration string such as "7s" or "1.5s".
fn extract_retry_after(body: &str) -> Option<u64> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    value
        .get("error")?
        .get("details")?
        .as_array()?
        .iter()
        .filter_map(|detail| detail.get("retryDelay").and_then(|d| d.as_str()))
        .find_map(|delay| delay.strip_suffix('s')?.parse::<f64>().ok())
        .map(|secs| (secs * 1000.0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_authentication() {
        let body = r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;
        match status_to_error(403, body) {
            AssistError::Authentication(msg) => assert_eq!(msg, "API key not valid"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn quota_exhaustion_reads_retry_delay() {
        let body = r#"{"error":{"code":429,"message":"quota","details":[{"@type":"type.googleapis.com/google.rpc.RetryInfo","retryDelay":"7s"}]}}"#;
        match status_to_error(429, body) {
            AssistError::RateLimited { retry_after_ms } => assert_eq!(retry_after_ms, Some(7000)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn plain_body_is_kept_verbatim() {
        match status_to_error(502, "bad gateway") {
            AssistError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "bad gateway");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn client_builds_with_and_without_timeout() {
        assert!(build_client(None).is_ok());
        assert!(build_client(Some(Duration::from_secs(5))).is_ok());
    }
}
