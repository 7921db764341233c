use crate::atomic_sequence::AtomicSequence;
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::user::model::{NewUser, User};
use crate::user::repository::UserRepository;

/// Produces attributes for test users, each with the next id of a sequence starting at 1.
pub struct UserFactory {
	id_sequence: AtomicSequence,
}

impl Default for UserFactory {
	fn default() -> Self {
		Self {
			id_sequence: AtomicSequence::starting_at(1),
		}
	}
}

impl UserFactory {
	pub fn attributes(&self) -> NewUser {
		let id = i64::try_from(self.id_sequence.next()).expect("User id sequence exceeded i64");
		NewUser::builder().id(id).build()
	}

	pub async fn create(
		&self,
		repository: &dyn UserRepository,
		connection: &mut dyn Connection,
	) -> Result<User, DatabaseError> {
		repository.create(connection, &self.attributes()).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::user::model::Role;

	#[test]
	fn attributes_have_sequential_ids() {
		let factory = UserFactory::default();

		let first = factory.attributes();
		let second = factory.attributes();

		assert_eq!(1, first.id);
		assert_eq!(2, second.id);
	}

	#[test]
	fn attributes_have_fixed_defaults() {
		let NewUser {
			id: _,
			email,
			name,
			password,
			role,
		} = UserFactory::default().attributes();

		assert_eq!("user@user.com", email);
		assert_eq!("user", name);
		assert_eq!("123456", password);
		assert_eq!(Role::User, role);
	}

	#[test]
	fn attributes_can_be_overridden() {
		let factory = UserFactory::default();

		let admin = NewUser {
			name: "admin".to_owned(),
			role: Role::Admin,
			..factory.attributes()
		};

		assert_eq!(1, admin.id);
		assert_eq!("admin", admin.name);
		assert_eq!(Role::Admin, admin.role);
	}
}
