use crate::linkedin::{upstream_error, LinkedInError};
use crate::state::AppState;
use http::StatusCode;
use log::debug;
use serde::Deserialize;

/// Profile returned by LinkedIn's OpenID Connect userinfo endpoint
#[derive(Debug, Deserialize)]
pub struct UserInfo {
    /// Subject identifier of the authenticated member
    pub sub: String,
}

/// Fetches the authenticated member's profile with the given bearer token.
///
/// A 401 is surfaced as [`LinkedInError::Unauthorized`] so callers can tell
/// a stale token apart from LinkedIn being unavailable.
pub async fn fetch_userinfo(
    state: &AppState,
    access_token: &str,
) -> Result<UserInfo, LinkedInError> {
    let userinfo_url = format!("{}/userinfo", state.config.api_url);
    debug!("Fetching member profile from: {}", userinfo_url);

    let response = state
        .http_client
        .get(&userinfo_url)
        .bearer_auth(access_token)
        .send()
        .await?;

    if response.status() == StatusCode::UNAUTHORIZED {
        return Err(LinkedInError::Unauthorized);
    }
    if !response.status().is_success() {
        return Err(upstream_error(response).await);
    }

    let body = response.bytes().await?;
    let profile: UserInfo = serde_json::from_slice(&body)?;
    debug!("Resolved LinkedIn subject: {}", profile.sub);
    Ok(profile)
}
