//! Command implementations for the bookwriter CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod access;
pub mod books;
pub mod collaborations;
pub mod login;
pub mod logout;
pub mod sections;
pub mod signup;
pub mod subsections;

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Build an HTTP client, optionally configured with a Bearer token.
pub fn build_client(token: Option<&str>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();

    if let Some(token) = token {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| anyhow::anyhow!("Invalid token value: {}", e))?;
        headers.insert(AUTHORIZATION, value);
        builder = builder.default_headers(headers);
    }

    Ok(builder.build()?)
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Make an HTTP request and deserialize the JSON response.
pub async fn make_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.json::<T>().await?;
        Ok(body)
    } else {
        Err(server_error(status.as_u16(), response.text().await.unwrap_or_default()))
    }
}

/// Make an HTTP request where success carries no body (e.g. DELETE -> 204).
pub async fn make_empty_request(request: reqwest::RequestBuilder) -> Result<(), CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        Err(server_error(status.as_u16(), response.text().await.unwrap_or_default()))
    }
}

/// Build a CliError::Server, extracting a message from the known JSON error
/// shapes: `{"error": {"message": ...}}`, `{"detail": ...}`, `{"message": ...}`.
fn server_error(status: u16, body: String) -> CliError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.pointer("/error/message")
                .or_else(|| json.get("detail"))
                .or_else(|| json.get("message"))
                .and_then(|v| v.as_str())
                .map(String::from)
        })
        .unwrap_or(body);

    CliError::Server { status, message }
}

/// Format a timestamp for human display.
pub fn format_timestamp(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_extracts_envelope_message() {
        let err = server_error(
            404,
            r#"{"error": {"code": "NOT_FOUND", "message": "not found: book"}}"#.to_string(),
        );
        assert_eq!(err.to_string(), "Server error (404): not found: book");
    }

    #[test]
    fn server_error_extracts_detail() {
        let err = server_error(401, r#"{"detail": "Invalid credentials."}"#.to_string());
        assert_eq!(
            err.to_string(),
            "Server error (401): Invalid credentials."
        );
    }

    #[test]
    fn server_error_extracts_message() {
        let err = server_error(404, r#"{"message": "Collaboration not found"}"#.to_string());
        assert_eq!(
            err.to_string(),
            "Server error (404): Collaboration not found"
        );
    }

    #[test]
    fn server_error_falls_back_to_raw_body() {
        let err = server_error(500, "boom".to_string());
        assert_eq!(err.to_string(), "Server error (500): boom");
    }
}
