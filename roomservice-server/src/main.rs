use crate::commandline::Commandline;
use crate::error::RoomServiceError;
use clap::Parser;

#[cfg(test)]
mod atomic_sequence;
mod commandline;
mod configuration;
mod context;
mod database;
mod error;
mod room;
mod server;
mod session;
mod types;
mod user;

#[tokio::main]
async fn main() -> Result<(), RoomServiceError> {
	Commandline::parse().run().await
}
