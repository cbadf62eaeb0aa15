//! Post creation: resolve the caller's subject from the bearer token, then
//! publish a UGC post with the supplied text.

use crate::errors::ApiError;
use crate::linkedin::{share, userinfo, LinkedInError};
use crate::openapi::POSTS_TAG;
use crate::state::AppState;
use axum::{
    extract::{Json, State},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use http::StatusCode;
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

/// Creates a router for the post creation routes
pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/linkedin/post", post(create_post_handler))
}

/// Request body for the post creation endpoint. Fields are defaulted so a
/// partial body reaches the handler and gets the 400 listing what is
/// missing, rather than a generic deserialization rejection.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct CreatePostRequest {
    /// Bearer token obtained from the OAuth callback
    access_token: String,
    /// Free-text commentary of the post
    text: String,
}

/// Response body for a successfully created post
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePostResponse {
    pub success: bool,
    pub post_id: String,
}

#[utoipa::path(
    post,
    path = "/linkedin/post",
    tag = POSTS_TAG,
    request_body = CreatePostRequest,
    responses(
        (status = 200, description = "Post created successfully", body = CreatePostResponse),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "LinkedIn call failed")
    )
)]
pub(super) async fn create_post_handler(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> Response {
    // Empty counts as missing, matching the contract for both fields
    if request.access_token.is_empty() || request.text.is_empty() {
        return ApiError::bad_request("Missing required fields")
            .with("required", json!(["accessToken", "text"]))
            .into_response();
    }

    match publish(&state, &request).await {
        Ok(post_id) => {
            info!("Created LinkedIn post: {}", post_id);
            (
                StatusCode::OK,
                Json(CreatePostResponse {
                    success: true,
                    post_id,
                }),
            )
                .into_response()
        }
        Err(err) => {
            error!("Post creation failed: {}", err);
            ApiError::internal("Failed to create post")
                .with("details", json!(err.detail()))
                .into_response()
        }
    }
}

/// Resolves the caller's subject identifier, then publishes the share under
/// it. Both calls carry the caller's bearer token; nothing is retried.
async fn publish(state: &AppState, request: &CreatePostRequest) -> Result<String, LinkedInError> {
    let profile = userinfo::fetch_userinfo(state, &request.access_token).await?;
    share::create_share(state, &request.access_token, &profile.sub, &request.text).await
}
