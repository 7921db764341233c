use crate::database::{Connection, Repository};
use crate::room::error::RoomControllerError;
use crate::room::model::{Room, RoomChanges, RoomDraft, RoomRecord};
use crate::room::view::{Location, Outcome, View};
use crate::session::SessionContext;
use crate::types::uuid::Uuid;
use std::sync::Arc;
use tracing::{debug, info, instrument};


/// The REST lifecycle of rooms: index, show, new, create, edit, update and destroy.
///
/// Every action either renders a [`View`] or redirects to a [`Location`]. Submitted attributes
/// are validated before anything is written, so a rejected create or update never reaches the
/// store. Instead the form view is rendered again with the submitted values.
#[derive(Clone)]
pub struct RoomController {
	repository: Arc<dyn Repository>,
}

impl RoomController {
	pub fn new(repository: Arc<dyn Repository>) -> Self {
		Self { repository }
	}

	#[instrument(skip_all, fields(user_id = session.user_id))]
	pub async fn index(
		&self,
		session: &SessionContext,
		connection: &mut dyn Connection,
	) -> Result<Outcome, RoomControllerError> {
		let rooms = self.repository.room().list(connection).await?;
		debug!(count = rooms.len(), "Listing rooms.");

		Ok(Outcome::Render(View::Index { rooms }))
	}

	#[instrument(skip_all, fields(user_id = session.user_id, %room_id))]
	pub async fn show(
		&self,
		session: &SessionContext,
		connection: &mut dyn Connection,
		room_id: Uuid,
	) -> Result<Outcome, RoomControllerError> {
		let room = self.find(connection, room_id).await?;

		Ok(Outcome::Render(View::Show { room }))
	}

	#[instrument(skip_all, fields(user_id = session.user_id))]
	pub fn new_form(&self, session: &SessionContext) -> Outcome {
		debug!("Rendering form for a new room.");

		Outcome::Render(View::New {
			room: RoomRecord::Unsaved(RoomDraft::default()),
			errors: Vec::new(),
		})
	}

	#[instrument(skip_all, fields(user_id = session.user_id))]
	pub async fn create(
		&self,
		session: &SessionContext,
		connection: &mut dyn Connection,
		changes: RoomChanges,
	) -> Result<Outcome, RoomControllerError> {
		let mut draft = RoomDraft::default();
		draft.apply(changes);

		let description = match draft.validate() {
			Ok(description) => description.to_owned(),
			Err(error) => {
				info!(%error, "Rejected new room.");
				return Ok(Outcome::Render(View::New {
					room: RoomRecord::Unsaved(draft),
					errors: vec![error],
				}));
			}
		};

		let room = self.repository.room().create(connection, &description).await?;
		debug!(room_id = %room.id, "Created room.");

		Ok(Outcome::Redirect(Location::Room(room.id)))
	}

	#[instrument(skip_all, fields(user_id = session.user_id, %room_id))]
	pub async fn edit_form(
		&self,
		session: &SessionContext,
		connection: &mut dyn Connection,
		room_id: Uuid,
	) -> Result<Outcome, RoomControllerError> {
		let room = self.find(connection, room_id).await?;

		Ok(Outcome::Render(View::Edit {
			room: room.into(),
			errors: Vec::new(),
		}))
	}

	#[instrument(skip_all, fields(user_id = session.user_id, %room_id))]
	pub async fn update(
		&self,
		session: &SessionContext,
		connection: &mut dyn Connection,
		room_id: Uuid,
		changes: RoomChanges,
	) -> Result<Outcome, RoomControllerError> {
		let mut draft = RoomDraft::from(self.find(connection, room_id).await?);
		draft.apply(changes);

		let description = match draft.validate() {
			Ok(description) => description.to_owned(),
			Err(error) => {
				info!(%error, "Rejected room update.");
				return Ok(Outcome::Render(View::Edit {
					room: RoomRecord::Persisted { id: room_id, draft },
					errors: vec![error],
				}));
			}
		};

		let room = Room {
			id: room_id,
			description,
		};
		self.repository
			.room()
			.update(connection, &room)
			.await
			.map_err(RoomControllerError::for_room(room_id))?;
		debug!("Updated room.");

		Ok(Outcome::Redirect(Location::Room(room_id)))
	}

	#[instrument(skip_all, fields(user_id = session.user_id, %room_id))]
	pub async fn destroy(
		&self,
		session: &SessionContext,
		connection: &mut dyn Connection,
		room_id: Uuid,
	) -> Result<Outcome, RoomControllerError> {
		self.repository
			.room()
			.remove(connection, room_id)
			.await
			.map_err(RoomControllerError::for_room(room_id))?;
		debug!("Destroyed room.");

		Ok(Outcome::Redirect(Location::Rooms))
	}

	async fn find(&self, connection: &mut dyn Connection, room_id: Uuid) -> Result<Room, RoomControllerError> {
		self.repository
			.room()
			.get(connection, room_id)
			.await?
			.ok_or(RoomControllerError::NotFound(room_id))
	}
}
