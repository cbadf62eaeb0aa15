use utoipa::OpenApi;

pub(crate) const HEALTH_TAG: &str = "Health API";
pub(crate) const OAUTH_TAG: &str = "OAuth API";
pub(crate) const POSTS_TAG: &str = "Posts API";

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = OAUTH_TAG, description = "LinkedIn OAuth flow endpoints"),
        (name = POSTS_TAG, description = "LinkedIn post creation endpoints"),
    ),
    info(
        title = "LinkedIn Poster API",
        description = "LinkedIn OAuth and post-creation microservice",
        version = "0.1.0"
    )
)]
pub(crate) struct ApiDoc;
