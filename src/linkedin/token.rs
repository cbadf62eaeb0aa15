use crate::linkedin::{upstream_error, LinkedInError};
use crate::state::AppState;
use log::debug;
use serde::Deserialize;

/// Access-token response from LinkedIn's token endpoint
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchanges an authorization code for an access token via a form-encoded
/// POST to the token endpoint.
pub async fn exchange_code(state: &AppState, code: &str) -> Result<String, LinkedInError> {
    let token_url = format!("{}/accessToken", state.config.oauth_url);
    debug!("Exchanging authorization code at: {}", token_url);

    let params = [
        ("grant_type", "authorization_code"),
        ("code", code),
        ("redirect_uri", state.config.redirect_uri.as_str()),
        ("client_id", state.config.client_id.as_str()),
        ("client_secret", state.config.client_secret.as_str()),
    ];

    let response = state
        .http_client
        .post(&token_url)
        .form(&params)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(upstream_error(response).await);
    }

    let body = response.bytes().await?;
    let token: TokenResponse = serde_json::from_slice(&body)?;
    Ok(token.access_token)
}
