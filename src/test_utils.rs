use crate::config::AppConfig;
use crate::create_app;
use crate::state::AppState;
use axum::body::Body;
use axum::Router;
use http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

/// Test fixture wiring the application router to a wiremock server that
/// stands in for LinkedIn's OAuth and REST endpoints.
///
/// Requests are driven through the router directly with
/// `tower::ServiceExt::oneshot`, so no listener is bound. Outbound LinkedIn
/// calls hit `linkedin_mock`; mount mocks on it per test.
pub struct TestFixture {
    /// The application router
    pub app: Router,
    /// Configuration pointing at the mock server
    pub config: AppConfig,
    /// Mock server standing in for LinkedIn
    pub linkedin_mock: MockServer,
}

impl TestFixture {
    /// Creates a new test fixture with a fresh mock server
    pub async fn new() -> Self {
        let linkedin_mock = MockServer::start().await;
        let config = AppConfig::for_test_with_mock(&linkedin_mock);
        let state = AppState::new(config.clone());
        let app = create_app(state);
        Self {
            app,
            config,
            linkedin_mock,
        }
    }

    /// Sends a GET request to the application
    pub async fn get(&self, uri: impl AsRef<str>) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri.as_ref())
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Sends a POST request with a JSON body to the application
    pub async fn post_json<T: Serialize>(&self, uri: impl AsRef<str>, body: &T) -> TestResponse {
        let json_body = serde_json::to_vec(body).expect("Failed to serialize body to JSON");
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri.as_ref())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Sends a request and returns a TestResponse
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body).to_string();
        // Try to parse as JSON, defaulting to an empty object for plain-text
        // or empty bodies
        let json = serde_json::from_slice(&body).unwrap_or_else(|_| serde_json::json!({}));

        TestResponse {
            status,
            location,
            text,
            json,
        }
    }
}

/// Response from a test request with convenient access to status, headers,
/// and body
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Location header, when the response is a redirect
    pub location: Option<String>,
    /// Response body as text
    pub text: String,
    /// Response body as JSON (empty object when not JSON)
    pub json: Value,
}

impl TestResponse {
    /// Asserts that the response has the expected status code
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status, expected,
            "Expected status {}, got {} (body: {})",
            expected, self.status, self.text
        );
        self
    }

    /// Deserializes the JSON body into the given type
    pub fn json_as<T: DeserializeOwned>(&self) -> T {
        serde_json::from_value(self.json.clone()).expect("Failed to deserialize response JSON")
    }
}
