//! # Document Store Adapters
//!
//! The menu flows never talk to a storage engine directly. They depend on the
//! [`MovieStore`] contract only, and the binary decides which adapter backs a
//! session:
//!
//! - [`MemoryStore`] keeps the collection in process and forgets it on exit.
//! - [`JsonFileStore`] keeps the collection in a pretty-printed JSON file and
//!   writes it back after every modification.
//!
//! Identifiers are assigned by the adapter on [`MovieStore::insert`] and are
//! never changed afterwards.

use std::{fmt, io::Error};

use crate::types::{Movie, MovieId};

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Debug)]
pub enum StoreError {
    IoError(Error),
    SerdeError(serde_json::Error),
    MissingId,
    NotFound(MovieId),
    Closed,
}

impl From<Error> for StoreError {
    fn from(err: Error) -> Self {
        StoreError::IoError(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::SerdeError(err)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "store i/o failed: {}", e),
            StoreError::SerdeError(e) => write!(f, "store document is malformed: {}", e),
            StoreError::MissingId => f.write_str("movie has not been persisted yet"),
            StoreError::NotFound(id) => write!(f, "no movie with id {}", id),
            StoreError::Closed => f.write_str("store connection is closed"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Operations the menu flows issue against the movie collection.
///
/// Every call is awaited before the next one is issued; adapters do not have to
/// cope with overlapping calls.
#[allow(async_fn_in_trait)]
pub trait MovieStore {
    /// All movies, in insertion order.
    async fn find_all(&self) -> Result<Vec<Movie>, StoreError>;

    /// First movie whose title matches exactly.
    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, StoreError>;

    /// Stores a new movie and returns it with its assigned id.
    async fn insert(&mut self, movie: Movie) -> Result<Movie, StoreError>;

    /// Replaces the stored document carrying the same id.
    async fn save(&mut self, movie: &Movie) -> Result<(), StoreError>;

    /// Removes the movie with `id`. Returns `false` when nothing was removed.
    async fn delete_by_id(&mut self, id: &MovieId) -> Result<bool, StoreError>;

    /// Releases the connection. Any later call fails with [`StoreError::Closed`].
    async fn close(&mut self) -> Result<(), StoreError>;
}
