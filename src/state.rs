use crate::config::AppConfig;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub http_client: Arc<Client>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            http_client: Arc::new(Self::create_http_client()),
        }
    }

    /// Create the shared client for outbound LinkedIn calls. No default
    /// Authorization header is set here; the bearer token differs per request.
    fn create_http_client() -> Client {
        Client::builder()
            // Set reasonable timeouts
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(2))
            // Configure connection pool
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            // Build the client
            .build()
            .expect("Failed to create LinkedIn HTTP client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            client_id: "test_client_id".to_string(),
            client_secret: "test_client_secret".to_string(),
            redirect_uri: "http://localhost:4242/auth/linkedin/callback".to_string(),
            port: 4242,
            oauth_url: "https://www.linkedin.com/oauth/v2".to_string(),
            api_url: "https://api.linkedin.com/v2".to_string(),
        }
    }

    #[test]
    fn test_app_state_new() {
        let config = test_config();
        let state = AppState::new(config.clone());

        assert_eq!(state.config.client_id, config.client_id);
        assert_eq!(state.config.port, config.port);
        assert_eq!(state.config.oauth_url, config.oauth_url);
    }

    #[test]
    fn test_app_state_clone() {
        let state = AppState::new(test_config());
        let state2 = state.clone();

        // After cloning, both instances should point to the same data
        assert_eq!(Arc::as_ptr(&state.config), Arc::as_ptr(&state2.config));
        assert_eq!(
            Arc::as_ptr(&state.http_client),
            Arc::as_ptr(&state2.http_client)
        );
    }
}
