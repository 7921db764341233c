use super::{SqliteRepository, sqlite_connection};
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::user::model::{NewUser, User};
use crate::user::hash_password;
use crate::user::repository::UserRepository;
use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::{FromRow, query_as};

#[derive(FromRow)]
struct UserRow {
	id: i64,
	email: String,
	name: String,
	password_hash: String,
	role: String,
}

impl TryFrom<UserRow> for User {
	type Error = DatabaseError;

	fn try_from(
		UserRow {
			id,
			email,
			name,
			password_hash,
			role,
		}: UserRow,
	) -> Result<Self, Self::Error> {
		Ok(Self {
			id,
			email,
			name,
			password_hash,
			role: role.parse().map_err(DatabaseError::Decode)?,
		})
	}
}

#[async_trait]
impl UserRepository for SqliteRepository {
	async fn get(&self, connection: &mut dyn Connection, user_id: i64) -> Result<Option<User>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as::<_, UserRow>(
			r"SELECT id, email, name, password_hash, role
			FROM user
			WHERE id = ?1",
		)
		.bind(user_id)
		.fetch_optional(connection)
		.await?
		.map(User::try_from)
		.transpose()
	}

	async fn create(&self, connection: &mut dyn Connection, new_user: &NewUser) -> Result<User, DatabaseError> {
		let connection = sqlite_connection(connection)?;
		let password_hash = hash_password(&new_user.password)
			.map_err(|error| DatabaseError::Encode(anyhow!("Failed to hash password: {error}")))?;

		query_as::<_, UserRow>(
			r"INSERT INTO user(id, email, name, password_hash, role) VALUES (?1, ?2, ?3, ?4, ?5)
			RETURNING
				id,
				email,
				name,
				password_hash,
				role",
		)
		.bind(new_user.id)
		.bind(&new_user.email)
		.bind(&new_user.name)
		.bind(password_hash)
		.bind(new_user.role.as_str())
		.fetch_one(connection)
		.await?
		.try_into()
	}
}
