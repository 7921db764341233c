use crate::database::error::DatabaseError;
use crate::room::error::RoomControllerError;
use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;
use tracing::error;

impl From<RoomControllerError> for ApiErrorResponse {
	fn from(error: RoomControllerError) -> Self {
		use RoomControllerError::*;
		match error {
			NotFound(_) => ApiErrorResponse {
				r#type: "room-not-found",
				status: StatusCode::NOT_FOUND.as_u16(),
				message: error.to_string(),
			},
			Database(error) => error.into(),
		}
	}
}

impl From<DatabaseError> for ApiErrorResponse {
	fn from(error: DatabaseError) -> Self {
		error!(%error, "Database operation failed.");
		ApiErrorResponse {
			r#type: "internal-error",
			status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
			message: "Internal server error.".to_string(),
		}
	}
}
