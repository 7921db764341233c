use crate::user::model::User;

/// The logged in caller a request is executed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionContext {
	pub user_id: i64,
}

impl From<&User> for SessionContext {
	fn from(user: &User) -> Self {
		Self { user_id: user.id }
	}
}
