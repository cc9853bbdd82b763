use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use integral_core::IntegralError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// An [`IntegralError`] on its way to an HTTP client.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Maps the error to a status code. Run-aborting errors keep their
    /// message since the UI shows it to the user; anything else is hidden
    /// unless `expose_details` is set.
    pub fn from_error(error: &IntegralError, expose_details: bool) -> Self {
        let status = status_for(error);
        let message = if error.is_fatal() || expose_details {
            user_message(error)
        } else {
            "Internal server error".to_string()
        };
        Self { status, message }
    }
}

pub fn status_for(error: &IntegralError) -> StatusCode {
    match error {
        IntegralError::IncompleteSelection(_) | IntegralError::Parse(_) => StatusCode::BAD_REQUEST,
        IntegralError::Config(_) => StatusCode::SERVICE_UNAVAILABLE,
        IntegralError::Connectivity(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message without the error-kind prefix, for display in the UI.
pub fn user_message(error: &IntegralError) -> String {
    match error {
        IntegralError::Config(m) | IntegralError::Connectivity(m) => m.clone(),
        other => other.to_string(),
    }
}

impl From<IntegralError> for ApiError {
    fn from(error: IntegralError) -> Self {
        Self::from_error(&error, false)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&IntegralError::IncompleteSelection("UL".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(&IntegralError::Config("k".into())), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_for(&IntegralError::Connectivity("c".into())), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_for(&IntegralError::DatasetLoad { path: "p".into(), reason: "r".into() }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_fatal_errors_keep_message() {
        let err = ApiError::from(IntegralError::Config("Please configure your API key".into()));
        assert_eq!(err.message, "Please configure your API key");

        let err = ApiError::from(IntegralError::Model("socket closed".into()));
        assert_eq!(err.message, "Internal server error");

        let err = ApiError::from_error(&IntegralError::Model("socket closed".into()), true);
        assert_eq!(err.message, "Model error: socket closed");
    }
}
