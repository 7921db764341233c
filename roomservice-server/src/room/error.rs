use crate::database::error::DatabaseError;
use crate::types::uuid::Uuid;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomValidationError {
	#[error("Description can't be blank.")]
	DescriptionMissing,
}

#[derive(Error, Debug)]
pub enum RoomControllerError {
	#[error("Room '{0}' not found.")]
	NotFound(Uuid),
	#[error("Database error: {0}")]
	Database(#[from] DatabaseError),
}

impl RoomControllerError {
	/// Treats a store level `NotFound` as the given room missing.
	pub fn for_room(room_id: Uuid) -> impl FnOnce(DatabaseError) -> Self {
		move |error| match error {
			DatabaseError::NotFound(_) => Self::NotFound(room_id),
			error => Self::Database(error),
		}
	}
}
