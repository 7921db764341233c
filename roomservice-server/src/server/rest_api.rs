use crate::context::ApplicationContext;
use crate::database::Database;
use crate::room::controller::RoomController;
use crate::room::view::Outcome;
use crate::server::rest_api::error::ApiErrorResponse;
use crate::server::rest_api::models::RoomParameters;
use crate::session::SessionContext;
use crate::types::uuid::Uuid;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

mod auth;
mod error;
pub mod models;
mod response;

pub fn rest_api() -> Router<ApplicationContext> {
	Router::new()
		.route("/rooms", get(index).post(create))
		.route("/rooms/new", get(new))
		.route("/rooms/{id}", get(show).put(update).patch(update).delete(destroy))
		.route("/rooms/{id}/edit", get(edit))
}

async fn index(
	session: SessionContext,
	State(database): State<Arc<dyn Database>>,
	State(controller): State<RoomController>,
) -> Result<Outcome, ApiErrorResponse> {
	let mut connection = database.connection().await?;
	Ok(controller.index(&session, &mut *connection).await?)
}

async fn show(
	session: SessionContext,
	State(database): State<Arc<dyn Database>>,
	State(controller): State<RoomController>,
	Path(room_id): Path<Uuid>,
) -> Result<Outcome, ApiErrorResponse> {
	let mut connection = database.connection().await?;
	Ok(controller.show(&session, &mut *connection, room_id).await?)
}

async fn new(session: SessionContext, State(controller): State<RoomController>) -> Outcome {
	controller.new_form(&session)
}

async fn create(
	session: SessionContext,
	State(database): State<Arc<dyn Database>>,
	State(controller): State<RoomController>,
	Json(RoomParameters { room }): Json<RoomParameters>,
) -> Result<Outcome, ApiErrorResponse> {
	let mut connection = database.connection().await?;
	Ok(controller.create(&session, &mut *connection, room.into()).await?)
}

async fn edit(
	session: SessionContext,
	State(database): State<Arc<dyn Database>>,
	State(controller): State<RoomController>,
	Path(room_id): Path<Uuid>,
) -> Result<Outcome, ApiErrorResponse> {
	let mut connection = database.connection().await?;
	Ok(controller.edit_form(&session, &mut *connection, room_id).await?)
}

async fn update(
	session: SessionContext,
	State(database): State<Arc<dyn Database>>,
	State(controller): State<RoomController>,
	Path(room_id): Path<Uuid>,
	Json(RoomParameters { room }): Json<RoomParameters>,
) -> Result<Outcome, ApiErrorResponse> {
	let mut connection = database.connection().await?;
	Ok(controller
		.update(&session, &mut *connection, room_id, room.into())
		.await?)
}

async fn destroy(
	session: SessionContext,
	State(database): State<Arc<dyn Database>>,
	State(controller): State<RoomController>,
	Path(room_id): Path<Uuid>,
) -> Result<Outcome, ApiErrorResponse> {
	let mut connection = database.connection().await?;
	Ok(controller.destroy(&session, &mut *connection, room_id).await?)
}
