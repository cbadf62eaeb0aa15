use crate::linkedin::{upstream_error, LinkedInError};
use crate::state::AppState;
use log::debug;
use serde::{Deserialize, Serialize};

/// Pinned API version sent with every ugcPosts request
pub const LINKEDIN_VERSION: &str = "202304";

/// UGC post payload in the exact shape the ugcPosts endpoint requires.
/// The nesting and the `com.linkedin.*` keys are schema requirements of the
/// provider, not business logic.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    pub author: String,
    pub lifecycle_state: String,
    pub specific_content: SpecificContent,
    pub visibility: Visibility,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    pub share_content: ShareContent,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareContent {
    pub share_commentary: ShareCommentary,
    pub share_media_category: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ShareCommentary {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    pub member_network_visibility: String,
}

impl SharePayload {
    /// Builds a public, text-only member post authored by the given subject
    pub fn new(subject: &str, text: &str) -> Self {
        Self {
            author: format!("urn:li:person:{subject}"),
            lifecycle_state: "PUBLISHED".to_string(),
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: ShareCommentary {
                        text: text.to_string(),
                    },
                    share_media_category: "NONE".to_string(),
                },
            },
            visibility: Visibility {
                member_network_visibility: "PUBLIC".to_string(),
            },
        }
    }
}

/// Response from the ugcPosts endpoint
#[derive(Debug, Deserialize)]
struct ShareResponse {
    id: String,
}

/// Creates a UGC post under the given subject and returns the new post's
/// identifier.
pub async fn create_share(
    state: &AppState,
    access_token: &str,
    subject: &str,
    text: &str,
) -> Result<String, LinkedInError> {
    let posts_url = format!("{}/ugcPosts", state.config.api_url);
    let payload = SharePayload::new(subject, text);
    debug!("Creating UGC post for {} at: {}", payload.author, posts_url);

    let response = state
        .http_client
        .post(&posts_url)
        .bearer_auth(access_token)
        .header("LinkedIn-Version", LINKEDIN_VERSION)
        .json(&payload)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(upstream_error(response).await);
    }

    let body = response.bytes().await?;
    let share: ShareResponse = serde_json::from_slice(&body)?;
    Ok(share.id)
}
