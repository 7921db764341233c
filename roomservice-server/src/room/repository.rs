use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model;
use crate::types::uuid::Uuid;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;


#[async_trait]
pub trait RoomRepository: Send + Sync + 'static {
	/// All rooms in the order they were created.
	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<model::Room>, DatabaseError>;
	async fn get(&self, connection: &mut dyn Connection, room_id: Uuid) -> Result<Option<model::Room>, DatabaseError>;
	async fn create(&self, connection: &mut dyn Connection, description: &str) -> Result<model::Room, DatabaseError>;
	/// Fails with [`DatabaseError::NotFound`] if the room doesn't exist.
	async fn update(&self, connection: &mut dyn Connection, room: &model::Room) -> Result<model::Room, DatabaseError>;
	/// Fails with [`DatabaseError::NotFound`] if the room doesn't exist.
	async fn remove(&self, connection: &mut dyn Connection, room_id: Uuid) -> Result<(), DatabaseError>;
	async fn count(&self, connection: &mut dyn Connection) -> Result<u64, DatabaseError>;
}

assert_obj_safe!(RoomRepository);
