use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tokio::io::BufReader;

use moviecli::{
    cli, config,
    console::Console,
    error, info,
    store::{JsonFileStore, MemoryStore},
    text::Language,
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// JSON file holding the movie collection
    #[clap(long)]
    store: Option<PathBuf>,

    /// Language of the menus (en, sv)
    #[clap(long)]
    lang: Option<Language>,

    /// Keep the collection in memory only; nothing is written to disk
    #[clap(long, conflicts_with = "store")]
    memory: bool,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Some(Command::Completions(opt)) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let language = match cli.lang {
        Some(lang) => lang,
        None => match config::language() {
            Ok(lang) => lang,
            Err(e) => error!("Invalid {}. Err: {}", config::LANG_VAR, e),
        },
    };

    let input = BufReader::new(tokio::io::stdin());
    let mut console = Console::new(input, std::io::stdout(), language.messages());

    let result = if cli.memory {
        info!("Using an in-memory store, changes are discarded on exit.");
        cli::run(MemoryStore::new(), &mut console).await
    } else {
        let path = cli.store.unwrap_or_else(config::store_path);
        let store = match JsonFileStore::open(&path).await {
            Ok(store) => store,
            Err(e) => error!("Cannot open store {}. Err: {}", path.display(), e),
        };
        info!("Using store {}", path.display());
        cli::run(store, &mut console).await
    };

    if let Err(e) = result {
        error!("Session ended with an error. Err: {}", e);
    }
}
