// Runtime module - Boundary layer between the engine and its collaborators
// Snapshot IO, configuration and the Roster facade live here; the engine
// itself never touches the filesystem.

mod client;
pub mod config;
mod error;
pub mod snapshot;

pub use client::Roster;
pub use config::{resolve_data_path, Config};
pub use error::{Error, Result};
