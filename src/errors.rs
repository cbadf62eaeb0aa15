use axum::response::IntoResponse;
use axum::Json;
use http::StatusCode;
use serde_json::{json, Map, Value};

/// Error response for the JSON API surface: a status code, a short error
/// message, and any extra fields to merge into the body.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub error: String,
    pub status_code: StatusCode,
    pub fields: Map<String, Value>,
}

impl ApiError {
    /// Create a new ApiError with an error message and status code
    pub fn new<S: ToString>(error: S, status_code: StatusCode) -> Self {
        Self {
            error: error.to_string(),
            status_code,
            fields: Map::new(),
        }
    }

    /// Create new Internal Server Error (500) with an error message
    pub fn internal<S: ToString>(error: S) -> Self {
        Self::new(error, StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Create new Bad Request Error (400) with an error message
    pub fn bad_request<S: ToString>(error: S) -> Self {
        Self::new(error, StatusCode::BAD_REQUEST)
    }

    /// Attach an extra field to the JSON body
    pub fn with<S: Into<String>>(mut self, key: S, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code;
        let mut body = json!({
            "error": self.error,
        });
        if let Value::Object(ref mut obj) = body {
            for (key, value) in self.fields {
                obj.insert(key, value);
            }
        }
        (status_code, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_constructors() {
        let err = ApiError::bad_request("Missing required fields");
        assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(err.error, "Missing required fields");

        let err = ApiError::internal("Failed to create post");
        assert_eq!(err.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_api_error_extra_fields() {
        let err = ApiError::bad_request("Missing required fields")
            .with("required", json!(["accessToken", "text"]));
        assert_eq!(err.fields["required"], json!(["accessToken", "text"]));
    }
}
