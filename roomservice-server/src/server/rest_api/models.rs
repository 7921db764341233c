use crate::room::model::{Room, RoomChanges, RoomRecord};
use crate::room::view::View;
use crate::types::uuid::Uuid;
use serde::{Deserialize, Deserializer, Serialize};

/// Request body of create and update: `{"room": {...}}`
#[derive(Debug, Deserialize)]
pub struct RoomParameters {
	pub room: RoomAttributes,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoomAttributes {
	#[serde(default, deserialize_with = "submitted")]
	pub description: Option<Option<String>>,
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`, via `default`).
fn submitted<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	Option::<T>::deserialize(deserializer).map(Some)
}

impl From<RoomAttributes> for RoomChanges {
	fn from(RoomAttributes { description }: RoomAttributes) -> Self {
		Self { description }
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomResponse {
	pub id: Uuid,
	pub description: String,
}

impl From<Room> for RoomResponse {
	fn from(Room { id, description }: Room) -> Self {
		Self { id, description }
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RoomFormResponse {
	Unsaved { description: Option<String> },
	Persisted { id: Uuid, description: Option<String> },
}

impl From<RoomRecord> for RoomFormResponse {
	fn from(record: RoomRecord) -> Self {
		let description = record.draft().description.clone();
		match record.id() {
			None => Self::Unsaved { description },
			Some(id) => Self::Persisted { id, description },
		}
	}
}

/// A rendered view, tagged with the name of the view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewResponse {
	Index {
		rooms: Vec<RoomResponse>,
	},
	Show {
		room: RoomResponse,
	},
	New {
		room: RoomFormResponse,
		errors: Vec<String>,
	},
	Edit {
		room: RoomFormResponse,
		errors: Vec<String>,
	},
}

impl From<View> for ViewResponse {
	fn from(view: View) -> Self {
		match view {
			View::Index { rooms } => Self::Index {
				rooms: rooms.into_iter().map(Into::into).collect(),
			},
			View::Show { room } => Self::Show { room: room.into() },
			View::New { room, errors } => Self::New {
				room: room.into(),
				errors: errors.iter().map(ToString::to_string).collect(),
			},
			View::Edit { room, errors } => Self::Edit {
				room: room.into(),
				errors: errors.iter().map(ToString::to_string).collect(),
			},
		}
	}
}
