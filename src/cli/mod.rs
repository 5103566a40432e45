//! # CLI Module
//!
//! The interactive menus of moviecli. Every flow receives the document store
//! and the console explicitly; nothing here holds global state.
//!
//! ## Flows
//!
//! ```text
//! main_menu
//!   ├── 1 view_all_movies
//!   ├── 2 select_movie ── movie submenu
//!   │                      ├── 1 update_movie ── edit_list (genres, ratings, cast)
//!   │                      ├── 2 delete_movie
//!   │                      └── 3 back
//!   ├── 3 add_movie
//!   ├── 4/5 "select a movie first"
//!   └── 6 exit
//! ```
//!
//! ## Error Handling
//!
//! - **Invalid input**: answered with guidance, the current menu is shown again
//! - **Unknown title**: reported, control returns to the main menu
//! - **Store faults**: propagated to the caller and end the session
//!
//! [`run`] owns the store for the whole session and closes it exactly once on
//! the way out, whatever the outcome of the menu loop.

mod add;
mod menu;
mod movie;
mod update;

use std::io::Write;

use tokio::io::AsyncBufRead;

pub use add::add_movie;
pub use menu::main_menu;
pub use movie::delete_movie;
pub use movie::select_movie;
pub use movie::view_all_movies;
pub use update::edit_list;
pub use update::update_movie;

use crate::{
    Res,
    console::{Console, ConsoleError},
    store::MovieStore,
};

fn is_closed_input(err: &(dyn std::error::Error + Send + Sync + 'static)) -> bool {
    matches!(err.downcast_ref::<ConsoleError>(), Some(ConsoleError::Closed))
}

/// Runs one interactive session against `store` and releases it afterwards.
///
/// The end of the input stream counts as leaving the program. The first error
/// wins: a failing menu loop is reported even if closing the store fails too.
pub async fn run<S, R, W>(mut store: S, console: &mut Console<R, W>) -> Res<()>
where
    S: MovieStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let session = match main_menu(&mut store, console).await {
        Err(e) if is_closed_input(&*e) => Ok(()),
        other => other,
    };
    let released = store.close().await;

    session?;
    released?;
    Ok(())
}
