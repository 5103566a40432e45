use chrono::Utc;
use rand::Rng;
use tabled::{Table, builder::Builder};

use crate::{
    text::Messages,
    types::{Movie, MovieId},
};

/// Generates a 24 character hex id: seconds since the epoch followed by eight
/// random bytes.
pub fn generate_movie_id() -> MovieId {
    let seconds = Utc::now().timestamp().clamp(0, u32::MAX as i64) as u32;
    let random: u64 = rand::rng().random();
    MovieId::new(format!("{:08x}{:016x}", seconds, random))
}

/// Splits a comma separated answer into trimmed, non-empty items.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

pub fn join_list<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Removes the element at `index` when it exists. Returns whether anything
/// was removed.
pub fn remove_at<T>(items: &mut Vec<T>, index: usize) -> bool {
    if index < items.len() {
        items.remove(index);
        true
    } else {
        false
    }
}

/// Parses a list index. Negative and non-numeric answers yield `None`.
pub fn parse_index(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok()
}

pub fn movies_table(messages: &Messages, movies: &[Movie]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(messages.headers.iter().map(|h| h.to_string()));

    for movie in movies {
        builder.push_record(vec![
            movie
                .id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            movie.title.clone(),
            movie.director.clone(),
            movie.release_year.to_string(),
            join_list(&movie.genres),
            join_list(&movie.ratings),
            join_list(&movie.cast),
        ]);
    }

    builder.build()
}
