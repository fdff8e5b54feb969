use std::sync::Arc;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use polo::api::{Client, GameId, PlayerId};
use polo::commands::{self, roster::RosterCommand};
use polo::config;
use polo::data_provider::GameDataProvider;
use polo::tracker;
use polo::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "polo")]
#[command(
    about = "Water polo live game stat tracker",
    long_about = "Water polo live game stat tracker\n\nWith a game id and no command, the program starts the interactive tracker."
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Use the in-memory fixture store instead of the API
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    /// Game to track when no command is given
    game_id: Option<GameId>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive tracker for a game
    Track {
        game_id: GameId,
    },
    /// Display the event log
    Events {
        game_id: GameId,

        /// Only show one period
        #[arg(short, long)]
        period: Option<u8>,
    },
    /// Display substitutions by period
    Subs {
        game_id: GameId,
    },
    /// Display saved starting lineups
    Lineup {
        game_id: GameId,

        /// Period (1-4); all periods when omitted
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=4))]
        period: Option<u8>,
    },
    /// List or edit the game roster
    Roster {
        game_id: GameId,

        #[command(subcommand)]
        action: Option<RosterAction>,
    },
    /// Display the game header, score and event log
    Summary {
        game_id: GameId,
    },
    /// Display current configuration
    Config,
}

#[derive(Subcommand)]
enum RosterAction {
    /// List the roster (default)
    List,
    /// Add a player with a cap number
    Add {
        player_id: PlayerId,

        /// Cap number (1-99)
        #[arg(short, long)]
        cap: u8,
    },
    /// Remove the player wearing a cap number
    Remove {
        cap: u8,
    },
}

impl RosterAction {
    fn to_roster_command(&self) -> RosterCommand {
        match self {
            RosterAction::List => RosterCommand::List,
            RosterAction::Add { player_id, cap } => RosterCommand::Add {
                player_id: *player_id,
                cap_number: *cap,
            },
            RosterAction::Remove { cap } => RosterCommand::Remove { cap_number: *cap },
        }
    }
}

fn create_client(cli: &Cli, config: &config::Config) -> Arc<dyn GameDataProvider> {
    #[cfg(feature = "development")]
    if cli.mock {
        tracing::info!("Using mock game store");
        return Arc::new(polo::dev::MockClient::new());
    }
    #[cfg(not(feature = "development"))]
    let _ = cli;

    match Client::from_config(config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            let error_msg = format!("Failed to create API client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("api_url: {}", cfg.api_url);
    println!("session_token: {}", if cfg.session_token.is_some() { "(set)" } else { "(not set)" });
    println!("goalkeeper_caps: {:?}", cfg.goalkeeper_caps);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("goalkeeper_fg: {:?}", cfg.theme.goalkeeper_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Load the game and run the tracker until the user quits
async fn run_tracker(
    client: Arc<dyn GameDataProvider>,
    game_id: GameId,
    config: config::Config,
) -> anyhow::Result<()> {
    let props = tracker::load_props(client.as_ref(), game_id)
        .await
        .with_context(|| format!("Failed to load game {}", game_id))?;
    tui::run(props, client, config)
        .await
        .context("Terminal error while running the tracker")
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: Arc<dyn GameDataProvider>,
    command: Commands,
    config: config::Config,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Track { game_id } => run_tracker(client, game_id, config).await,
        Commands::Events { game_id, period } => commands::events::run(client.as_ref(), game_id, period).await,
        Commands::Subs { game_id } => commands::subs::run(client.as_ref(), game_id).await,
        Commands::Lineup { game_id, period } => commands::lineup::run(client.as_ref(), game_id, period).await,
        Commands::Roster { game_id, action } => {
            let command = action
                .map(|a| a.to_roster_command())
                .unwrap_or(RosterCommand::List);
            commands::roster::run(client.as_ref(), game_id, command, &config).await
        }
        Commands::Summary { game_id } => commands::summary::run(client.as_ref(), game_id).await,
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let mut cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // A bare game id starts the tracker
    let command = match cli.command.take() {
        Some(Commands::Config) => {
            handle_config_command();
            return;
        }
        Some(command) => command,
        None => match cli.game_id {
            Some(game_id) => Commands::Track { game_id },
            None => Cli::command()
                .error(
                    clap::error::ErrorKind::MissingRequiredArgument,
                    "a game id or a command is required",
                )
                .exit(),
        },
    };

    let client = create_client(&cli, &config);
    if let Err(e) = execute_command(client, command, config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
