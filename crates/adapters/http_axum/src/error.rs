//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use guardian_domain::error::GuardianError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

/// Maps [`GuardianError`] to an HTTP response with appropriate status code.
pub struct ApiError(GuardianError);

impl From<GuardianError> for ApiError {
    fn from(err: GuardianError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            GuardianError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            GuardianError::Render(err) => {
                tracing::error!(error = %err, "render error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guardian_domain::error::ValidationError;

    #[test]
    fn should_map_validation_error_to_bad_request() {
        let response = ApiError::from(GuardianError::from(ValidationError::MissingEntity))
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_render_error_to_internal_server_error() {
        let err = GuardianError::Render(Box::new(std::io::Error::other("boom")));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
