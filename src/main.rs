use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use lbtop::client::LeaderboardClient;
use lbtop::commands;
use lbtop::config::{self, Config};
use lbtop::data_provider::LeaderboardProvider;
use lbtop::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "lbtop")]
#[command(about = "Football predictions leaderboard", long_about = "Football predictions leaderboard\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Scoring service base URL (overrides the config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Serve fixture data instead of calling the scoring service
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of the leaderboard
    Show {
        /// Only show players whose name contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Rows per page: 25, 50, 100 or all
        #[arg(long, default_value = "25")]
        per_page: String,
    },
    /// Display current configuration
    Config,
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
fn handle_config_command(cfg: &Config) {
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
    println!("default_page_size: {}", cfg.default_page_size);
    println!("use_unicode: {}", cfg.use_unicode);
    println!();
    println!("[api]");
    println!("base_url: {}", cfg.api.base_url);
    println!("endpoint: {}", cfg.api.endpoint);
    println!("timeout_secs: {}", cfg.api.timeout_secs);
    println!(
        "bearer_token: {}",
        if cfg.api.is_token_configured() { "configured" } else { "not configured" }
    );
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("highlight_bg: {:?}", cfg.theme.highlight_bg);
    println!("leader_fg: {:?}", cfg.theme.leader_fg);
    println!("error_fg: {:?}", cfg.theme.error_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
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

/// Build the leaderboard provider: the HTTP client, or fixtures with `--mock`
fn create_provider(cli: &Cli, config: &Config) -> anyhow::Result<Arc<dyn LeaderboardProvider>> {
    #[cfg(feature = "development")]
    if cli.mock {
        return Ok(Arc::new(lbtop::dev::mock_client::MockClient::new()));
    }
    #[cfg(not(feature = "development"))]
    let _ = cli;

    let client = LeaderboardClient::new(config.api.clone())?;
    Ok(Arc::new(client))
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(provider: &dyn LeaderboardProvider, command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Show { search, page, per_page } => {
            commands::show::run(provider, search, page, per_page, &config.display()).await
        }
    }
}

#[tokio::main]
async fn main() {
    let mut config = config::read();
    let cli = Cli::parse();

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let provider = match create_provider(&cli, &config) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            tracing::error!("Failed to create leaderboard client: {:#}", e);
            std::process::exit(1);
        }
    };

    // If no subcommand, run TUI
    let Some(command) = cli.command else {
        if let Err(e) = tui::run(provider, config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    // Handle Config command separately (doesn't need the service)
    if let Commands::Config = command {
        handle_config_command(&config);
        return;
    }

    if let Err(e) = execute_command(provider.as_ref(), command, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
