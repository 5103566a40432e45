use crate::{
    store::{MovieStore, StoreError},
    types::{Movie, MovieId},
    utils,
};

pub struct MemoryStore {
    movies: Vec<Movie>,
    closed: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_movies(Vec::new())
    }

    /// Wraps an already loaded collection. Movies without an id get one.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        let mut store = Self {
            movies: Vec::with_capacity(movies.len()),
            closed: false,
        };
        for movie in movies {
            store.push(movie);
        }
        store
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub(crate) fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed {
            return Err(StoreError::Closed);
        }
        Ok(())
    }

    fn push(&mut self, mut movie: Movie) -> Movie {
        let reusable = movie
            .id
            .as_ref()
            .is_some_and(|id| !self.contains(id));
        if !reusable {
            movie.id = Some(self.fresh_id());
        }
        self.movies.push(movie.clone());
        movie
    }

    fn contains(&self, id: &MovieId) -> bool {
        self.movies.iter().any(|m| m.id.as_ref() == Some(id))
    }

    fn fresh_id(&self) -> MovieId {
        loop {
            let id = utils::generate_movie_id();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        self.ensure_open()?;
        Ok(self.movies.clone())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, StoreError> {
        self.ensure_open()?;
        Ok(self.movies.iter().find(|m| m.title == title).cloned())
    }

    async fn insert(&mut self, movie: Movie) -> Result<Movie, StoreError> {
        self.ensure_open()?;
        Ok(self.push(movie))
    }

    async fn save(&mut self, movie: &Movie) -> Result<(), StoreError> {
        self.ensure_open()?;
        let id = movie.id.as_ref().ok_or(StoreError::MissingId)?;
        match self.movies.iter_mut().find(|m| m.id.as_ref() == Some(id)) {
            Some(stored) => {
                *stored = movie.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(id.clone())),
        }
    }

    async fn delete_by_id(&mut self, id: &MovieId) -> Result<bool, StoreError> {
        self.ensure_open()?;
        let before = self.movies.len();
        self.movies.retain(|m| m.id.as_ref() != Some(id));
        Ok(self.movies.len() != before)
    }

    async fn close(&mut self) -> Result<(), StoreError> {
        self.ensure_open()?;
        self.closed = true;
        Ok(())
    }
}
