use crate::room::error::RoomValidationError;
use crate::room::model::{Room, RoomRecord};
use crate::types::uuid::Uuid;
use std::fmt::{Display, Formatter};

/// What a controller action decided to respond with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
	Render(View),
	Redirect(Location),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
	Index {
		rooms: Vec<Room>,
	},
	Show {
		room: Room,
	},
	New {
		room: RoomRecord,
		errors: Vec<RoomValidationError>,
	},
	Edit {
		room: RoomRecord,
		errors: Vec<RoomValidationError>,
	},
}

impl View {
	pub fn name(&self) -> &'static str {
		match self {
			View::Index { .. } => "index",
			View::Show { .. } => "show",
			View::New { .. } => "new",
			View::Edit { .. } => "edit",
		}
	}
}

/// Canonical location of a resource, used as redirect target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
	Rooms,
	Room(Uuid),
}

impl Display for Location {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Location::Rooms => write!(formatter, "/rooms"),
			Location::Room(id) => write!(formatter, "/rooms/{id}"),
		}
	}
}
