//! Error types for talking to the feed server.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RFC7807 Problem Details (application/problem+json)
///
/// The feed server may answer failed requests with this envelope; when it does
/// we show its `detail` instead of the raw body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type", default)]
    pub type_url: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub instance: Option<String>,
}

/// Pull a readable reason out of an RFC7807-style error body from the feed
/// server, for the placeholder shown in place of a post that failed to load.
/// Prefers `detail`, falls back to `title`.
pub fn try_problem_detail(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ProblemDetails>(body).ok()?;
    if let Some(detail) = parsed.detail {
        if !detail.trim().is_empty() {
            return Some(detail);
        }
    }
    if !parsed.title.trim().is_empty() {
        return Some(parsed.title);
    }
    None
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

impl ApiError {
    /// Short message suitable for showing in place of a post.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { status: 404, .. } => "Post not available".to_string(),
            ApiError::Http { status, body } => {
                try_problem_detail(body).unwrap_or_else(|| format!("Server returned {status}"))
            }
            ApiError::Network(_) => "Couldn't reach the feed".to_string(),
            ApiError::Deserialize(_) => "Post not available".to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_detail_prefers_detail() {
        let body = r#"{"type":"about:blank","title":"Bad Request","status":400,"detail":"post id out of range"}"#;
        assert_eq!(try_problem_detail(body).as_deref(), Some("post id out of range"));
    }

    #[test]
    fn problem_detail_falls_back_to_title() {
        let body = r#"{"title":"Teapot","status":418,"detail":"   "}"#;
        assert_eq!(try_problem_detail(body).as_deref(), Some("Teapot"));
    }

    #[test]
    fn problem_detail_rejects_other_bodies() {
        assert_eq!(try_problem_detail("<html>502</html>"), None);
        assert_eq!(try_problem_detail(r#"{"title":" ","status":500}"#), None);
    }

    #[test]
    fn display_matches_variant() {
        let err = ApiError::Http {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert_eq!(ApiError::Network("dns".into()).to_string(), "Network error: dns");
    }

    #[test]
    fn user_messages() {
        let missing = ApiError::Http {
            status: 404,
            body: String::new(),
        };
        assert!(missing.is_not_found());
        assert_eq!(missing.user_message(), "Post not available");

        let problem = ApiError::Http {
            status: 503,
            body: r#"{"title":"Unavailable","status":503,"detail":"warming up"}"#.into(),
        };
        assert_eq!(problem.user_message(), "warming up");

        let opaque = ApiError::Http {
            status: 502,
            body: "bad gateway".into(),
        };
        assert_eq!(opaque.user_message(), "Server returned 502");
        assert!(!opaque.is_not_found());

        assert_eq!(
            ApiError::Network("connection refused".into()).user_message(),
            "Couldn't reach the feed"
        );
        assert_eq!(
            ApiError::Deserialize("missing field".into()).user_message(),
            "Post not available"
        );
    }
}
