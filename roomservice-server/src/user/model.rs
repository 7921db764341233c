use anyhow::anyhow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
	pub id: i64,
	pub email: String,
	pub name: String,
	pub password_hash: String,
	pub role: Role,
}

/// Attributes of a user that is about to be created.
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct NewUser {
	pub id: i64,
	#[builder(default = String::from("user@user.com"), setter(into))]
	pub email: String,
	#[builder(default = String::from("user"), setter(into))]
	pub name: String,
	#[builder(default = String::from("123456"), setter(into))]
	pub password: String,
	#[builder(default)]
	pub role: Role,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
	#[default]
	User,
	Admin,
}

impl Role {
	pub fn as_str(self) -> &'static str {
		match self {
			Role::User => "user",
			Role::Admin => "admin",
		}
	}
}

impl Display for Role {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		formatter.write_str(self.as_str())
	}
}

impl FromStr for Role {
	type Err = anyhow::Error;

	fn from_str(role: &str) -> Result<Self, Self::Err> {
		match role {
			"user" => Ok(Role::User),
			"admin" => Ok(Role::Admin),
			unknown => Err(anyhow!("Unknown role '{unknown}'")),
		}
	}
}
