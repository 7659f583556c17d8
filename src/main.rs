use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

use cli::lint::MessageSource;

#[derive(Parser)]
#[command(name = "scopelint")]
#[command(about = "Conventional commit linting with scopes discovered from the repository layout")]
#[command(version)]
struct Cli {
    /// Directory to start from (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to the nearest .scopelint.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the permitted commit scopes
    Scopes {
        /// Output as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show how each scope root was scanned
    Roots {
        #[arg(long)]
        json: bool,
    },

    /// Lint a commit message (from --message, --edit or stdin)
    Lint {
        /// Commit message text
        #[arg(short, long, conflicts_with = "edit")]
        message: Option<String>,

        /// Read the message from a file (defaults to .git/COMMIT_EDITMSG)
        #[arg(short, long, num_args = 0..=1, value_name = "FILE")]
        edit: Option<Option<PathBuf>>,

        #[arg(long)]
        json: bool,
    },

    /// Create a .scopelint.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Install the commit-msg git hook
    Hook {
        /// Overwrite a hook not written by scopelint
        #[arg(long)]
        force: bool,

        /// Remove the hook instead
        #[arg(long, conflicts_with = "force")]
        remove: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so command output stays pipeable)
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Scopes { json } => {
            cli::scopes::scopes_command(&work_dir, config, json)?;
        }
        Commands::Roots { json } => {
            cli::scopes::roots_command(&work_dir, config, json)?;
        }
        Commands::Lint {
            message,
            edit,
            json,
        } => {
            let source = match (message, edit) {
                (Some(text), _) => MessageSource::Text(text),
                (None, Some(Some(file))) => MessageSource::File(file),
                (None, Some(None)) => MessageSource::EditMsg,
                (None, None) => MessageSource::Stdin,
            };
            if !cli::lint::lint_command(&work_dir, config, source, json)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Init { force } => {
            cli::init::init_command(&work_dir, force)?;
        }
        Commands::Hook { force, remove } => {
            cli::hook::hook_command(&work_dir, force, remove)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
