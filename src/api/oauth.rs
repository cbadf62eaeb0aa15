//! Three-legged OAuth flow against LinkedIn: redirect the browser to the
//! authorization endpoint, then exchange the callback code for an access
//! token.

use crate::linkedin::{token, userinfo, LinkedInError};
use crate::openapi::OAUTH_TAG;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use log::{debug, error, info};
use serde::Deserialize;
use utoipa::IntoParams;

/// Scopes requested from LinkedIn; fixed for this service
const OAUTH_SCOPE: &str = "email w_member_social profile openid";

/// Creates a router for the OAuth flow routes
pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/linkedin", get(authorize_handler))
        .route("/auth/linkedin/callback", get(callback_handler))
}

/// Builds the authorization URL from the configured client id, the
/// URL-escaped redirect URI, and the fixed scope list.
fn authorization_url(state: &AppState) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("response_type", "code")
        .append_pair("client_id", &state.config.client_id)
        .append_pair("redirect_uri", &state.config.redirect_uri)
        .append_pair("scope", OAUTH_SCOPE)
        .finish();
    format!("{}/authorization?{}", state.config.oauth_url, query)
}

#[utoipa::path(
    get,
    path = "/auth/linkedin",
    tag = OAUTH_TAG,
    responses(
        (status = 307, description = "Redirect to LinkedIn's authorization endpoint")
    )
)]
async fn authorize_handler(State(state): State<AppState>) -> Redirect {
    // TODO: generate a `state` parameter here and verify it in the callback
    // so forged authorization responses are rejected.
    Redirect::temporary(&authorization_url(&state))
}

/// Query parameters LinkedIn sends to the callback route
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct CallbackParams {
    /// Single-use authorization code, present on consent
    code: Option<String>,
    /// OAuth error code, present on denial or failure
    error: Option<String>,
    /// Human-readable description accompanying `error`
    error_description: Option<String>,
}

#[utoipa::path(
    get,
    path = "/auth/linkedin/callback",
    tag = OAUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 200, description = "Authorization code exchanged for an access token"),
        (status = 400, description = "Provider reported an OAuth error or the code is missing"),
        (status = 500, description = "Token exchange failed")
    )
)]
async fn callback_handler(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Response {
    if let Some(oauth_error) = params.error {
        let description = params.error_description.unwrap_or_else(|| oauth_error.clone());
        error!("LinkedIn OAuth error: {} ({})", oauth_error, description);
        return (
            StatusCode::BAD_REQUEST,
            format!("Authentication failed: {description}"),
        )
            .into_response();
    }

    let Some(code) = params.code else {
        return (
            StatusCode::BAD_REQUEST,
            "Missing required 'code' parameter".to_string(),
        )
            .into_response();
    };

    match exchange_and_probe(&state, &code).await {
        Ok(access_token) => {
            (StatusCode::OK, format!("Access token: {access_token}")).into_response()
        }
        Err(err) => {
            error!("Token exchange failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to get access token: {}", err.detail()),
            )
                .into_response()
        }
    }
}

/// Exchange the code for a token, then probe the userinfo endpoint once so
/// a token that cannot read the member profile fails loudly here instead of
/// on the first post. The token itself is never logged.
async fn exchange_and_probe(state: &AppState, code: &str) -> Result<String, LinkedInError> {
    let access_token = token::exchange_code(state, code).await?;
    info!("Obtained LinkedIn access token");
    let profile = userinfo::fetch_userinfo(state, &access_token).await?;
    debug!("Access token belongs to subject: {}", profile.sub);
    Ok(access_token)
}
