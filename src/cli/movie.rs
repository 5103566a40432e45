use std::io::Write;

use tokio::io::AsyncBufRead;

use crate::{
    Res,
    cli::update::update_movie,
    console::Console,
    store::{MovieStore, StoreError},
    types::Movie,
    utils,
};

pub async fn view_all_movies<S, R, W>(store: &S, console: &mut Console<R, W>) -> Res<()>
where
    S: MovieStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let messages = console.messages();
    let movies = store.find_all().await?;

    if movies.is_empty() {
        console.info(messages.no_movies)?;
        return Ok(());
    }

    console.heading(messages.all_movies)?;
    console.line(utils::movies_table(messages, &movies))?;
    Ok(())
}

/// Looks a movie up by exact title and, when found, runs its submenu until the
/// user deletes the movie or goes back.
pub async fn select_movie<S, R, W>(store: &mut S, console: &mut Console<R, W>) -> Res<()>
where
    S: MovieStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let messages = console.messages();
    let title = console.field("title").await?;

    let Some(mut movie) = store.find_by_title(&title).await? else {
        console.warning(messages.movie_not_found)?;
        return Ok(());
    };

    console.heading(messages.selected_movie)?;
    console.line(utils::movies_table(messages, std::slice::from_ref(&movie)))?;

    loop {
        console.heading(messages.movie_menu_title)?;
        for option in messages.movie_menu {
            console.line(option)?;
        }

        match console.choice().await? {
            1 => update_movie(store, console, &mut movie).await?,
            2 => {
                delete_movie(store, console, &movie).await?;
                return Ok(());
            }
            3 => {
                console.info(messages.back_to_main)?;
                return Ok(());
            }
            _ => console.warning(messages.invalid_choice_movie)?,
        }
    }
}

pub async fn delete_movie<S, R, W>(
    store: &mut S,
    console: &mut Console<R, W>,
    movie: &Movie,
) -> Res<()>
where
    S: MovieStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let id = movie.id.as_ref().ok_or(StoreError::MissingId)?;
    store.delete_by_id(id).await?;
    let messages = console.messages();
    console.success(messages.movie_deleted)?;
    Ok(())
}
