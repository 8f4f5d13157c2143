use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Upstream catalog API unreachable, timed out or returned an unusable body
    #[error("Upstream fetch failed ({url}): {message}")]
    UpstreamFetch { url: String, message: String },

    /// Malformed or out-of-range request input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Route exists but not for this method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Page rendering failed
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    pub fn upstream(url: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::UpstreamFetch {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UpstreamFetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::NOT_FOUND,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &str {
        match self {
            AppError::UpstreamFetch { .. } => "UPSTREAM_FETCH_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            AppError::Render(_) => "RENDER_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Message shown to visitors. Internal details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self.status_code() {
            StatusCode::NOT_FOUND => "page not found",
            StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
            _ => "internal server error",
        }
    }
}

/// Render AppError as the HTML error page
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(
                error_code = error_code,
                status_code = status.as_u16(),
                message = %message,
                "Request error"
            );
        } else {
            tracing::debug!(
                error_code = error_code,
                status_code = status.as_u16(),
                message = %message,
                "Request rejected"
            );
        }

        match crate::render::error_page(status.as_u16(), self.public_message()) {
            Ok(page) => (status, Html(page)).into_response(),
            Err(_) => (status, self.public_message()).into_response(),
        }
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(err: std::fmt::Error) -> Self {
        AppError::Render(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::upstream("http://x/artists", "timed out").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Validation("id out of range".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::Render("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::upstream("u", "m").error_code(),
            "UPSTREAM_FETCH_ERROR"
        );
        assert_eq!(
            AppError::Validation("test".to_string()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(AppError::MethodNotAllowed.error_code(), "METHOD_NOT_ALLOWED");
    }

    #[test]
    fn test_public_message_hides_details() {
        let err = AppError::upstream("https://api.example.com/artists", "connection refused");
        assert_eq!(err.public_message(), "internal server error");
        assert_eq!(
            AppError::Validation("id=99".to_string()).public_message(),
            "page not found"
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::NotFound("/nowhere".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
