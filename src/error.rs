use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Cache error: {0}")]
    Cache(#[from] std::io::Error),

    #[error("Cache format error: {0}")]
    CacheFormat(#[from] serde_json::Error),

    /// Transport failure talking to the provider; the request URL is stripped
    /// on conversion since it carries the API key.
    #[error("Upstream provider unavailable: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Upstream provider unavailable: {0}")]
    Upstream(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            AppError::Cache(_) | AppError::CacheFormat(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::HttpClient(err.without_url())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "Request failed");
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_keep_message_verbatim() {
        let err = AppError::InvalidInput("No movie title provided".to_string());
        assert_eq!(err.to_string(), "No movie title provided");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = AppError::NotFound("Movie not found".to_string());
        assert_eq!(err.to_string(), "Movie not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_errors_are_bad_gateway() {
        let err = AppError::Upstream("TMDB returned status 503".to_string());
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert!(err.to_string().starts_with("Upstream provider unavailable"));
    }

    #[test]
    fn test_cache_format_error_is_internal() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = AppError::from(parse_err);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
