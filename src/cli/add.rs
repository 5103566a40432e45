use std::io::Write;

use tokio::io::AsyncBufRead;

use crate::{
    Res,
    cli::update::prompt_release_year,
    console::Console,
    store::MovieStore,
    types::Movie,
    utils,
};

pub async fn add_movie<S, R, W>(store: &mut S, console: &mut Console<R, W>) -> Res<()>
where
    S: MovieStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let messages = console.messages();
    console.heading(messages.adding_movie)?;

    let mut answers = console.collect(&["title", "director"]).await?;
    let release_year = prompt_release_year(console).await?;

    console.info(messages.list_hint)?;
    let mut lists = console.collect(&["genres", "cast"]).await?;

    let movie = Movie {
        id: None,
        title: answers.remove("title").unwrap_or_default(),
        director: answers.remove("director").unwrap_or_default(),
        release_year,
        genres: utils::split_list(&lists.remove("genres").unwrap_or_default()),
        ratings: Vec::new(),
        cast: utils::split_list(&lists.remove("cast").unwrap_or_default()),
    };

    let movie = store.insert(movie).await?;
    let id = movie.id.map(|id| id.to_string()).unwrap_or_default();
    console.success(format!("{} {}", messages.movie_added, id))?;
    Ok(())
}
