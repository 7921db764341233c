use crate::context::ApplicationContext;
use crate::server::rest_api::error::{ApiErrorResponse, AuthenticationFailedError};
use crate::session::SessionContext;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use tracing::debug;

/// Name of the cookie carrying the id of the logged in user.
pub const SESSION_COOKIE: &str = "user_id";

impl FromRequestParts<ApplicationContext> for SessionContext {
	type Rejection = ApiErrorResponse;

	async fn from_request_parts(parts: &mut Parts, context: &ApplicationContext) -> Result<Self, Self::Rejection> {
		let Some(user_id) = session_user_id(&CookieJar::from_headers(&parts.headers)) else {
			debug!("Request without a valid '{SESSION_COOKIE}' cookie.");
			return Err(AuthenticationFailedError.into());
		};

		let mut connection = context.database.connection().await?;
		let Some(user) = context.repository.user().get(&mut *connection, user_id).await? else {
			debug!(user_id, "User of session not found!");
			return Err(AuthenticationFailedError.into());
		};
		debug!(user_id, user_name = %user.name, role = %user.role, "Authenticated.");

		Ok(SessionContext::from(&user))
	}
}

fn session_user_id(cookies: &CookieJar) -> Option<i64> {
	cookies
		.get(SESSION_COOKIE)
		.and_then(|cookie| cookie.value_trimmed().parse().ok())
}
