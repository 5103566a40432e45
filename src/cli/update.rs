use std::io::Write;

use tokio::io::AsyncBufRead;

use crate::{
    Res,
    console::{Console, ConsoleError},
    store::MovieStore,
    types::{ListField, ListItem, Movie},
    utils,
};

const ADD: &str = "add";
const REMOVE: &str = "remove";

/// Edits `movie` field by field and saves it once the user leaves the loop.
///
/// Nothing is written to the store before choice 7; all edits up to then only
/// touch the in-memory copy.
pub async fn update_movie<S, R, W>(
    store: &mut S,
    console: &mut Console<R, W>,
    movie: &mut Movie,
) -> Res<()>
where
    S: MovieStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let messages = console.messages();
    console.heading(messages.updating_movie)?;
    console.line(utils::movies_table(messages, std::slice::from_ref(movie)))?;

    loop {
        console.heading(messages.update_menu_title)?;
        for option in messages.update_menu {
            console.line(option)?;
        }

        match console.choice().await? {
            1 => movie.title = console.field("title").await?,
            2 => movie.director = console.field("director").await?,
            3 => movie.release_year = prompt_release_year(console).await?,
            4 => edit_list(console, &mut movie.genres, ListField::Genres).await?,
            5 => edit_list(console, &mut movie.ratings, ListField::Ratings).await?,
            6 => edit_list(console, &mut movie.cast, ListField::Cast).await?,
            7 => {
                console.info(messages.back_to_movie)?;
                break;
            }
            _ => console.warning(messages.invalid_choice_update)?,
        }
    }

    store.save(movie).await?;
    console.success(messages.movie_updated)?;
    Ok(())
}

/// Asks for `releaseYear` until the answer is a whole number.
pub(crate) async fn prompt_release_year<R, W>(
    console: &mut Console<R, W>,
) -> Result<i32, ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let messages = console.messages();
    loop {
        let value = console.field("releaseYear").await?;
        match value.parse::<i32>() {
            Ok(year) => return Ok(year),
            Err(_) => console.warning(messages.invalid_year)?,
        }
    }
}

/// Appends to or removes from one list-valued field.
///
/// `add` asks for a value under the field's own name and appends it. `remove`
/// asks for `indexToRemove` and drops that element if it exists. The list is
/// left untouched on any invalid answer.
pub async fn edit_list<T, R, W>(
    console: &mut Console<R, W>,
    items: &mut Vec<T>,
    field: ListField,
) -> Result<(), ConsoleError>
where
    T: ListItem,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let messages = console.messages();
    console.line(format!("{} {}:", messages.update_list, field.name()))?;
    console.line(format!("[{}]", utils::join_list(items)))?;

    let action = console.field("addOrRemove").await?;
    match action.as_str() {
        ADD => {
            let value = console.field(field.name()).await?;
            match T::parse_item(&value) {
                Some(item) => items.push(item),
                None => console.warning(messages.invalid_value)?,
            }
        }
        REMOVE => {
            let value = console.field("indexToRemove").await?;
            let removed =
                utils::parse_index(&value).is_some_and(|index| utils::remove_at(items, index));
            if !removed {
                console.warning(messages.invalid_index)?;
            }
        }
        _ => console.warning(messages.invalid_action)?,
    }

    Ok(())
}
