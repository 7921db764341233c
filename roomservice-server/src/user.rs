use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};

#[cfg(test)]
pub mod factory;
pub mod model;
pub mod repository;

/// Argon2id hash of a password in PHC string format, salted with fresh randomness on every call.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
	let salt = SaltString::generate(&mut OsRng);
	let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
	Ok(hash.to_string())
}

#[cfg(test)]
pub fn verify_password(password: &str, password_hash: &str) -> bool {
	use argon2::password_hash::{PasswordHash, PasswordVerifier};

	PasswordHash::new(password_hash)
		.and_then(|hash| Argon2::default().verify_password(password.as_bytes(), &hash))
		.is_ok()
}
