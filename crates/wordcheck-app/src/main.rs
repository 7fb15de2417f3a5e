use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordcheck_config::parse_provider;

pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;
pub mod ui;


use self::controller::AppController;
use self::state::AppState;

/// Check words against a Scrabble word list and look up their definitions
#[derive(Parser, Debug)]
#[command(name = "wordcheck", version)]
struct Args {
    /// JSON config profile
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Definition provider: wordnik, oxford or wordsapi
    #[arg(short, long)]
    provider: Option<String>,

    /// Word list name: enable, twl2014 or sowpods
    #[arg(short = 'l', long)]
    word_list: Option<String>,

    /// Directory holding `<name>.txt` word lists
    #[arg(long)]
    word_list_dir: Option<PathBuf>,

    /// Only report GOOD/BAD, never fetch definitions
    #[arg(long)]
    no_definitions: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let mut config = profile::load_config(args.config.as_deref())?;
    if let Some(tag) = &args.provider {
        config.definitions.provider = parse_provider(tag);
    }
    if let Some(name) = args.word_list {
        config.word_list.name = name;
    }
    if let Some(dir) = args.word_list_dir {
        config.word_list.directory = dir;
    }
    if args.no_definitions {
        config.definitions.enabled = false;
    }

    let state = Arc::new(AppState::new(config));
    if atty::is(atty::Stream::Stdin) {
        println!("{}", ui::about_message(state.words.name()));
    }

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks()?;

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("task finished"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while tasks.join_next().await.is_some() {}

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}
