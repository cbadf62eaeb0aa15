//! Outbound LinkedIn API calls: authorization-code exchange, userinfo
//! lookup, and UGC post creation.

use http::StatusCode;
use thiserror::Error;

// Reexport modules
pub mod share;
pub mod token;
pub mod userinfo;

/// Errors that can occur when calling LinkedIn
#[derive(Debug, Error)]
pub enum LinkedInError {
    #[error("Failed to send request to LinkedIn: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Invalid or expired access token")]
    Unauthorized,
    #[error("LinkedIn request failed with status {status}: {detail}")]
    Upstream { status: StatusCode, detail: String },
    #[error("Failed to parse LinkedIn response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LinkedInError {
    /// The provider-supplied error detail where one exists, otherwise the
    /// underlying failure message.
    pub fn detail(&self) -> String {
        match self {
            LinkedInError::Upstream { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// Turns a non-2xx LinkedIn response into an [`LinkedInError::Upstream`].
///
/// The OAuth endpoints report failures as `error_description`, the REST
/// endpoints as `message`; anything else falls back to the raw body.
pub(crate) async fn upstream_error(response: reqwest::Response) -> LinkedInError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| {
            value
                .get("error_description")
                .or_else(|| value.get("message"))
                .and_then(|detail| detail.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("HTTP {status}: {body}"));
    LinkedInError::Upstream { status, detail }
}
