use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq, Eq)]
pub struct AuthenticationFailedError;

impl Display for AuthenticationFailedError {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		write!(formatter, "Authentication failed.")
	}
}

impl Error for AuthenticationFailedError {}

impl From<AuthenticationFailedError> for ApiErrorResponse {
	fn from(error: AuthenticationFailedError) -> Self {
		ApiErrorResponse {
			r#type: "authentication-failed",
			status: StatusCode::UNAUTHORIZED.as_u16(),
			message: error.to_string(),
		}
	}
}

impl IntoResponse for AuthenticationFailedError {
	fn into_response(self) -> Response {
		ApiErrorResponse::from(self).into_response()
	}
}
