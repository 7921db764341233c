use crate::room::error::RoomValidationError;
use crate::types::uuid::Uuid;
use sqlx::FromRow;

/// A room as it is persisted, its description is always present.
#[derive(FromRow, Clone, Debug, PartialEq, Eq)]
pub struct Room {
	pub id: Uuid,
	pub description: String,
}

/// Submitted room attributes that haven't been validated yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomDraft {
	pub description: Option<String>,
}

impl RoomDraft {
	pub fn apply(&mut self, RoomChanges { description }: RoomChanges) {
		if let Some(description) = description {
			self.description = description;
		}
	}

	pub fn validate(&self) -> Result<&str, RoomValidationError> {
		self.description
			.as_deref()
			.ok_or(RoomValidationError::DescriptionMissing)
	}
}

impl From<Room> for RoomDraft {
	fn from(Room { description, .. }: Room) -> Self {
		Self {
			description: Some(description),
		}
	}
}

/// Attribute changes requested by a client.
///
/// The outer [`Option`] tells whether an attribute was submitted at all, the inner one
/// whether it was submitted as `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomChanges {
	pub description: Option<Option<String>>,
}

impl RoomChanges {
	pub fn description(description: impl Into<String>) -> Self {
		Self {
			description: Some(Some(description.into())),
		}
	}

	pub fn without_description() -> Self {
		Self {
			description: Some(None),
		}
	}
}

/// The room a form is bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoomRecord {
	Unsaved(RoomDraft),
	Persisted { id: Uuid, draft: RoomDraft },
}

impl RoomRecord {
	pub fn id(&self) -> Option<Uuid> {
		match self {
			RoomRecord::Unsaved(_) => None,
			RoomRecord::Persisted { id, .. } => Some(*id),
		}
	}

	pub fn draft(&self) -> &RoomDraft {
		match self {
			RoomRecord::Unsaved(draft) | RoomRecord::Persisted { draft, .. } => draft,
		}
	}
}

impl From<Room> for RoomRecord {
	fn from(room: Room) -> Self {
		let id = room.id;
		RoomRecord::Persisted {
			id,
			draft: room.into(),
		}
	}
}
