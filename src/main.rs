//! HtmlPad - HTML text editor
//!
//! Main entry point: initializes logging and configuration, then routes
//! the chosen subcommand through an editor session.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use htmlpad::commands::{
    FindCommand, GotoCommand, HighlightCommand, InfoCommand, NewCommand, PrintCommand,
    ReplaceCommand,
};
use htmlpad::session::EditorSession;
use htmlpad_core::{AppConfig, HtmlPadError, APP_NAME, VERSION};

#[derive(Parser)]
#[command(name = "htmlpad", about = "HTML text editor", version)]
struct Cli {
    /// Show debug logging and the session event trail
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty document
    New { file: PathBuf },
    /// List reserved-word highlight spans for a document
    Highlight {
        file: PathBuf,
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Find the first occurrence of a query
    Find { file: PathBuf, query: String },
    /// Replace every occurrence of a search string
    Replace {
        file: PathBuf,
        search: String,
        replacement: String,
        /// Write the result to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write the result back to the document itself
        #[arg(long)]
        in_place: bool,
    },
    /// Jump to a 1-based line number
    Goto { file: PathBuf, line: String },
    /// Show document metadata and counts
    Info {
        file: PathBuf,
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Send a document to the print spooler
    Print { file: PathBuf },
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("{} v{} starting...", APP_NAME, VERSION);

    let config = AppConfig::load().await?;
    let mut session = EditorSession::new(config);

    let subscription = cli.verbose.then(|| session.events().subscribe());

    let outcome = run(cli.command, &mut session).await;

    session.shutdown().await?;

    if let Some(subscription) = subscription {
        for event in subscription.try_iter() {
            eprintln!("event: {:?}", event);
        }
    }

    // The host presents editor errors to the user; anything else is a bug
    // and keeps its full error chain
    if let Err(e) = outcome {
        match e.downcast_ref::<HtmlPadError>() {
            Some(err) => {
                eprintln!("{}", err.user_message());
                std::process::exit(1);
            }
            None => return Err(e),
        }
    }

    Ok(())
}

/// Route the chosen subcommand through the session
async fn run(command: Commands, session: &mut EditorSession) -> Result<()> {
    match command {
        Commands::New { file } => NewCommand { file }.execute(session).await,
        Commands::Highlight { file, json } => {
            HighlightCommand { file, json }.execute(session).await
        }
        Commands::Find { file, query } => FindCommand { file, query }.execute(session).await,
        Commands::Replace {
            file,
            search,
            replacement,
            output,
            in_place,
        } => {
            ReplaceCommand {
                file,
                search,
                replacement,
                output,
                in_place,
            }
            .execute(session)
            .await
        }
        Commands::Goto { file, line } => GotoCommand { file, line }.execute(session).await,
        Commands::Info { file, json } => InfoCommand { file, json }.execute(session).await,
        Commands::Print { file } => PrintCommand { file }.execute(session).await,
    }
}
