use crate::configuration::Configuration;
use crate::database::error::DatabaseError;
use crate::database::sqlite::{SqliteDatabase, SqliteRepository};
use crate::database::{Database, Repository};
use crate::room::controller::RoomController;
use axum::extract::FromRef;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	pub database: Arc<dyn Database>,
	pub repository: Arc<dyn Repository>,
	pub room_controller: RoomController,
}

impl ApplicationContext {
	pub async fn new(configuration: Configuration) -> Result<ApplicationContext, DatabaseError> {
		let pool_options = SqlitePoolOptions::new()
			.max_connections(configuration.database_max_connections)
			.acquire_timeout(configuration.database_acquire_timeout);
		let mut database = SqliteDatabase::connect_with(&configuration.database_url, pool_options).await?;
		database.migrate().await?;

		let repository: Arc<dyn Repository> = Arc::new(SqliteRepository);
		let room_controller = RoomController::new(repository.clone());

		Ok(Self {
			configuration,
			database: Arc::new(database),
			repository,
			room_controller,
		})
	}
}
