use crate::database::error::{DatabaseError, IntoStoreResult};
use crate::database::{Connection, Database, Repository};
use crate::room::repository::RoomRepository;
use crate::user::repository::UserRepository;
use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, migrate};
use std::any::Any;
use std::ops::DerefMut;
use tracing::info;

mod room;
#[cfg(test)]
pub mod test_utils;
mod user;

#[derive(Clone)]
pub struct SqliteDatabase {
	pool: SqlitePool,
}

impl SqliteDatabase {
	pub async fn connect_with(database_url: &str, pool_options: SqlitePoolOptions) -> Result<Self, DatabaseError> {
		let pool = pool_options
			.connect(database_url)
			.await
			.connection_error("Failed to connect to database")?;
		info!(database_url, "Connected to SQLite database.");

		Ok(Self { pool })
	}
}

#[async_trait]
impl Database for SqliteDatabase {
	async fn migrate(&mut self) -> Result<(), DatabaseError> {
		migrate!().run(&self.pool).await.map_err(Into::into)
	}

	async fn connection(&self) -> Result<Box<dyn Connection>, DatabaseError> {
		self.pool
			.acquire()
			.await
			.map(|connection| Box::new(connection) as Box<dyn Connection>)
			.map_err(Into::into)
	}
}

impl Connection for SqliteConnection {}
impl Connection for PoolConnection<Sqlite> {}

#[derive(Default, Clone, Copy)]
pub struct SqliteRepository;

impl Repository for SqliteRepository {
	fn user(&self) -> &dyn UserRepository {
		self
	}

	fn room(&self) -> &dyn RoomRepository {
		self
	}
}

fn sqlite_connection(connection: &mut dyn Connection) -> Result<&mut SqliteConnection, DatabaseError> {
	let type_name = connection.type_name();

	let connection: &mut dyn Any = connection;

	if connection.is::<PoolConnection<Sqlite>>() {
		return connection
			.downcast_mut::<PoolConnection<Sqlite>>()
			.map(DerefMut::deref_mut)
			.ok_or_else(|| DatabaseError::DatabaseMismatch(anyhow!("Expected SQLite connection, got {type_name}")));
	}

	connection
		.downcast_mut::<SqliteConnection>()
		.ok_or_else(|| DatabaseError::DatabaseMismatch(anyhow!("Expected SQLite connection, got {type_name}")))
}
