use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a movie document.
///
/// Rendered as 24 lowercase hex characters. Once a movie carries an id it is
/// never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MovieId>,
    pub title: String,
    pub director: String,
    pub release_year: i32,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub ratings: Vec<f64>,
    #[serde(default)]
    pub cast: Vec<String>,
}

impl Movie {
    pub fn new(title: impl Into<String>, director: impl Into<String>, release_year: i32) -> Self {
        Self {
            id: None,
            title: title.into(),
            director: director.into(),
            release_year,
            ..Default::default()
        }
    }

    pub fn with_genres(mut self, genres: &[&str]) -> Self {
        self.genres = genres.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn with_ratings(mut self, ratings: &[f64]) -> Self {
        self.ratings = ratings.to_vec();
        self
    }

    pub fn with_cast(mut self, cast: &[&str]) -> Self {
        self.cast = cast.iter().map(|c| c.to_string()).collect();
        self
    }
}

/// An element of a list-valued field, parsed from one line of input.
pub trait ListItem: Display + Sized {
    fn parse_item(value: &str) -> Option<Self>;
}

impl ListItem for String {
    fn parse_item(value: &str) -> Option<Self> {
        Some(value.to_string())
    }
}

/// Ratings must be finite; `NaN` and infinities cannot be stored as JSON numbers.
impl ListItem for f64 {
    fn parse_item(value: &str) -> Option<Self> {
        value.trim().parse::<f64>().ok().filter(|rating| rating.is_finite())
    }
}

/// The list-valued fields of a [`Movie`] that are edited by add/remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Genres,
    Ratings,
    Cast,
}

impl ListField {
    /// Field name as used in prompts and in the stored document.
    pub fn name(&self) -> &'static str {
        match self {
            ListField::Genres => "genres",
            ListField::Ratings => "ratings",
            ListField::Cast => "cast",
        }
    }
}
