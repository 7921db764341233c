use super::{SqliteRepository, sqlite_connection};
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model::Room;
use crate::room::repository::RoomRepository;
use crate::types::uuid::Uuid;
use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::{query, query_as, query_scalar};

#[async_trait]
impl RoomRepository for SqliteRepository {
	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<Room>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT id, description
			FROM room
			ORDER BY rowid ASC",
		)
		.fetch_all(connection)
		.await
		.map_err(Into::into)
	}

	async fn get(&self, connection: &mut dyn Connection, room_id: Uuid) -> Result<Option<Room>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT id, description
			FROM room
			WHERE id = ?1",
		)
		.bind(room_id)
		.fetch_optional(connection)
		.await
		.map_err(Into::into)
	}

	async fn create(&self, connection: &mut dyn Connection, description: &str) -> Result<Room, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		let id = Uuid::new_v4();
		query_as(
			r"INSERT INTO room(id, description) VALUES (?1, ?2)
			RETURNING
				id,
				description",
		)
		.bind(id)
		.bind(description)
		.fetch_one(connection)
		.await
		.map_err(Into::into)
	}

	async fn update(&self, connection: &mut dyn Connection, room: &Room) -> Result<Room, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"UPDATE room
			SET description = ?1
			WHERE id = ?2
			RETURNING
				id,
				description",
		)
		.bind(&room.description)
		.bind(room.id)
		.fetch_one(connection)
		.await
		.map_err(Into::into)
	}

	async fn remove(&self, connection: &mut dyn Connection, room_id: Uuid) -> Result<(), DatabaseError> {
		let connection = sqlite_connection(connection)?;

		let result = query(r"DELETE FROM room WHERE id = ?1")
			.bind(room_id)
			.execute(connection)
			.await?;
		if result.rows_affected() == 0 {
			return Err(DatabaseError::NotFound(anyhow!("Room {room_id} not found")));
		}

		Ok(())
	}

	async fn count(&self, connection: &mut dyn Connection) -> Result<u64, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		let count: i64 = query_scalar(r"SELECT COUNT(*) FROM room")
			.fetch_one(connection)
			.await?;
		u64::try_from(count).map_err(|error| DatabaseError::Decode(error.into()))
	}
}
