use std::{io::ErrorKind, path::PathBuf};

use crate::{
    store::{MemoryStore, MovieStore, StoreError},
    types::{Movie, MovieId},
};

/// Movie collection backed by a single JSON file.
///
/// The whole collection is loaded on [`JsonFileStore::open`] and written back
/// after every successful modification.
pub struct JsonFileStore {
    path: PathBuf,
    collection: MemoryStore,
}

impl JsonFileStore {
    /// Opens the collection at `path`. A missing file is an empty collection.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let movies: Vec<Movie> = match async_fs::read_to_string(&path).await {
            Ok(json) if json.trim().is_empty() => Vec::new(),
            Ok(json) => serde_json::from_str(&json)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(StoreError::IoError(e)),
        };

        Ok(Self {
            path,
            collection: MemoryStore::with_movies(movies),
        })
    }

    async fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(self.collection.movies())?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }
}

impl MovieStore for JsonFileStore {
    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        self.collection.find_all().await
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, StoreError> {
        self.collection.find_by_title(title).await
    }

    async fn insert(&mut self, movie: Movie) -> Result<Movie, StoreError> {
        let movie = self.collection.insert(movie).await?;
        self.persist().await?;
        Ok(movie)
    }

    async fn save(&mut self, movie: &Movie) -> Result<(), StoreError> {
        self.collection.save(movie).await?;
        self.persist().await
    }

    async fn delete_by_id(&mut self, id: &MovieId) -> Result<bool, StoreError> {
        let removed = self.collection.delete_by_id(id).await?;
        if removed {
            self.persist().await?;
        }
        Ok(removed)
    }

    async fn close(&mut self) -> Result<(), StoreError> {
        self.collection.ensure_open()?;
        self.persist().await?;
        self.collection.close().await
    }
}
