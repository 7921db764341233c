use crate::database::sqlite::{SqliteDatabase, SqliteRepository};
use crate::database::test::TestFactory;
use crate::database::{Connection, Database, Repository};
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

pub struct SqliteTestFactory;

impl TestFactory for SqliteTestFactory {
	async fn connection() -> Box<dyn Connection> {
		Self::database()
			.await
			.connection()
			.await
			.expect("Failed to connect to database")
	}

	async fn database() -> Arc<dyn Database> {
		let mut database = SqliteDatabase::connect_with("sqlite::memory:", SqlitePoolOptions::new())
			.await
			.expect("Failed to create in-memory SQLite database");
		database.migrate().await.expect("Failed to migrate database");

		Arc::new(database)
	}

	fn repository() -> Arc<dyn Repository> {
		Arc::new(SqliteRepository)
	}
}
