use confique::Config;

/// Main configuration for the LinkedIn poster server, loaded from
/// environment variables only
#[derive(Debug, Config, Clone)]
pub struct AppConfig {
    /// OAuth client identifier issued by the LinkedIn developer portal
    #[config(env = "LINKEDIN_CLIENT_ID")]
    pub client_id: String,

    /// OAuth client secret issued by the LinkedIn developer portal
    #[config(env = "LINKEDIN_CLIENT_SECRET")]
    pub client_secret: String,

    /// Redirect URI registered with the OAuth application; must point at the
    /// callback route exposed by this server
    #[config(env = "LINKEDIN_REDIRECT_URI")]
    pub redirect_uri: String,

    /// The port the server will listen to (default: 4242)
    #[config(env = "PORT", default = 4242)]
    pub port: u16,

    /// Base URL for LinkedIn's OAuth endpoints (authorization, token)
    #[config(
        env = "LINKEDIN_OAUTH_URL",
        default = "https://www.linkedin.com/oauth/v2"
    )]
    pub oauth_url: String,

    /// Base URL for LinkedIn's REST endpoints (userinfo, ugcPosts)
    #[config(env = "LINKEDIN_API_URL", default = "https://api.linkedin.com/v2")]
    pub api_url: String,
}

impl AppConfig {
    /// Creates a new configuration from environment variables
    pub fn load() -> Result<Self, String> {
        let config: Self = Self::builder().env().load().map_err(|e| e.to_string())?;

        // Confique treats unset env vars as missing; blank values would
        // otherwise slip through and break the OAuth flow at runtime.
        for (name, value) in [
            ("LINKEDIN_CLIENT_ID", &config.client_id),
            ("LINKEDIN_CLIENT_SECRET", &config.client_secret),
            ("LINKEDIN_REDIRECT_URI", &config.redirect_uri),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{name} must not be empty"));
            }
        }

        Ok(config)
    }

    #[cfg(test)]
    pub fn for_test_with_mock(linkedin_mock: &wiremock::MockServer) -> Self {
        Self {
            client_id: "test_client_id".to_string(),
            client_secret: "test_client_secret".to_string(),
            redirect_uri: "http://localhost:4242/auth/linkedin/callback".to_string(),
            port: 0, // Let the OS choose a port
            // Point both LinkedIn base URLs at the mock server for testing
            oauth_url: format!("{}/oauth/v2", linkedin_mock.uri()),
            api_url: format!("{}/v2", linkedin_mock.uri()),
        }
    }
}
