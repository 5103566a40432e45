use std::io::Write;

use tokio::io::AsyncBufRead;

use crate::{
    Res,
    cli::{add::add_movie, movie::select_movie, movie::view_all_movies},
    console::Console,
    store::MovieStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    MainMenu,
    Exiting,
}

fn show_main_menu<R, W>(console: &mut Console<R, W>) -> Res<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let messages = console.messages();
    console.heading(messages.main_menu_title)?;
    for option in messages.main_menu {
        console.line(option)?;
    }
    console.line(messages.main_menu_hint)?;
    Ok(())
}

/// Top-level menu loop. Returns once the user picks "exit".
///
/// | choice | action                                  |
/// |--------|-----------------------------------------|
/// | 1      | list all movies                         |
/// | 2      | select a movie and open its submenu     |
/// | 3      | add a new movie                         |
/// | 4, 5   | remind that a movie must be selected    |
/// | 6      | exit                                    |
pub async fn main_menu<S, R, W>(store: &mut S, console: &mut Console<R, W>) -> Res<()>
where
    S: MovieStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let messages = console.messages();
    let mut state = MenuState::MainMenu;

    while state == MenuState::MainMenu {
        show_main_menu(console)?;

        match console.choice().await? {
            1 => view_all_movies(store, console).await?,
            2 => select_movie(store, console).await?,
            3 => add_movie(store, console).await?,
            4 => console.info(messages.select_before_update)?,
            5 => console.info(messages.select_before_delete)?,
            6 => {
                console.info(messages.goodbye)?;
                state = MenuState::Exiting;
            }
            _ => console.warning(messages.invalid_choice_main)?,
        }
    }

    Ok(())
}
