//! `rootmanage` - terminal front end for the rootmanage admin backend.
//!
//! Commands:
//! - `rootmanage login <username> --password <pw>`
//! - `rootmanage logout`
//! - `rootmanage whoami`
//! - `rootmanage navigate <path>`
//! - `rootmanage routes`
//! - `rootmanage contracts list|get|progress`

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use rootmanage_shell::{AppContext, ShellConfig, commands};

#[derive(Parser)]
#[command(name = "rootmanage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Backend base URL (overrides ROOTMANAGE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Session file (overrides ROOTMANAGE_STATE_FILE)
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Human-readable logs instead of JSON
    #[arg(long, global = true)]
    pretty_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login {
        username: String,
        #[arg(short, long)]
        password: String,
    },

    /// Clear the persisted session
    Logout,

    /// Show the current session
    Whoami,

    /// Resolve a path through the router and auth guard
    Navigate { path: String },

    /// List the route table
    Routes,

    /// Contract queries
    #[command(subcommand)]
    Contracts(ContractCommands),
}

#[derive(Subcommand)]
enum ContractCommands {
    /// List contracts, optionally filtered by keyword
    List {
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// Show one contract
    Get { id: String },

    /// Execution progress for one contract, or all of them
    Progress { id: Option<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.pretty_logs {
        rootmanage_observability::init_pretty();
    } else {
        rootmanage_observability::init();
    }

    let mut config = ShellConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(state_file) = cli.state_file {
        config.state_file = state_file;
    }

    let ctx = AppContext::build(&config)?;

    let output = match cli.command {
        Commands::Login { username, password } => {
            commands::login(&ctx, &username, &password).await?
        }
        Commands::Logout => commands::logout(&ctx),
        Commands::Whoami => commands::whoami(&ctx)?,
        Commands::Navigate { path } => commands::navigate(&ctx, &path)?,
        Commands::Routes => commands::routes(&ctx),
        Commands::Contracts(cmd) => match cmd {
            ContractCommands::List { keyword } => {
                commands::list_contracts(&ctx, keyword.as_deref()).await?
            }
            ContractCommands::Get { id } => commands::show_contract(&ctx, &id).await?,
            ContractCommands::Progress { id } => {
                commands::execution_progress(&ctx, id.as_deref()).await?
            }
        },
    };

    println!("{output}");
    Ok(())
}
