use crate::room::view::Outcome;
use crate::server::rest_api::models::ViewResponse;
use axum::Json;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

impl IntoResponse for Outcome {
	fn into_response(self) -> Response {
		match self {
			Outcome::Render(view) => {
				debug!(view = view.name(), "Rendering view.");
				Json(ViewResponse::from(view)).into_response()
			}
			// 303 See Other, so that clients follow up with GET after PUT and DELETE
			Outcome::Redirect(location) => Redirect::to(&location.to_string()).into_response(),
		}
	}
}
