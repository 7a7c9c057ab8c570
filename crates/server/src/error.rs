use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use models::HotelError;
use serde::Serialize;
use utoipa::ToSchema;

pub type ApiResult<T> = Result<T, ApiError>;

/// JSON error body, shared by every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
}

/// Response-side wrapper for [`HotelError`].
///
/// Status mapping: NotFound 404, Conflict 409, Capacity 422,
/// Validation 400, storage failure 500. 404 is reserved strictly for
/// missing resources.
#[derive(Debug)]
pub struct ApiError(HotelError);

impl From<HotelError> for ApiError {
    fn from(err: HotelError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HotelError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            HotelError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            HotelError::Capacity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            HotelError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            HotelError::Database(_) => {
                // Detail is already logged at the storage layer; the
                // caller only learns that the request failed.
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected storage failure".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
