use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::user::model;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;


#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
	async fn get(&self, connection: &mut dyn Connection, user_id: i64) -> Result<Option<model::User>, DatabaseError>;
	/// Fails with [`DatabaseError::UniqueViolation`] if the id is already taken.
	async fn create(&self, connection: &mut dyn Connection, new_user: &model::NewUser) -> Result<model::User, DatabaseError>;
}

assert_obj_safe!(UserRepository);
