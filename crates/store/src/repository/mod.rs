//! Storage backends for the loadout collection.
//!
//! The whole collection is one JSON array written in a single call. Backends
//! return raw records so the store can migrate them before decoding.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileLoadoutRepository;
pub use memory::InMemoryLoadoutRepo;
pub use traits::LoadoutRepository;
