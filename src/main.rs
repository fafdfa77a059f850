//! Safe MCP server - Main Entry Point
//!
//! Launched by an MCP client with no arguments, the binary serves the Safe
//! tools over stdio. Subcommands expose the catalog and single tool calls for
//! use from a shell.

use clap::{Parser, Subcommand};
use safe_mcp::config::ServerConfig;
use safe_mcp::observability::{init_default_logging, logging::level_for_verbosity};
use safe_mcp::{McpError, McpServer, SafeApiClient, StdioTransport, ToolSystem, Transport};
use serde_json::Value;
use std::path::PathBuf;
use std::process;
use tokio::signal::{self, unix::SignalKind};
use tracing::{debug, error, info};

/// MCP server for the Safe transaction service
#[derive(Parser)]
#[command(name = "safe-mcp")]
#[command(about = "MCP server exposing read-only Safe transaction service tools")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Safe transaction service base URL (overrides the config file)
    #[arg(long, value_name = "URL", env = "SAFE_API_URL", global = true)]
    base_url: Option<String>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP over stdin/stdout (default)
    Serve,
    /// Print the tool catalog as JSON
    Tools,
    /// Invoke one tool and print its text result
    Call {
        /// Tool name, e.g. getSafeTransactions
        name: String,
        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
    /// Validate configuration
    Config {
        /// Show resolved configuration
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() {
    // .env must be loaded before parsing so clap sees SAFE_API_URL
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    init_default_logging(level_for_verbosity(cli.verbose));

    if let Ok(path) = &dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    let config = match load_configuration(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config).await,
        Commands::Tools => handle_tools_command(config),
        Commands::Call { name, args } => handle_call_command(config, &name, &args).await,
        Commands::Config { show } => handle_config_command(config, show),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }

    info!("Application shutdown complete");
    // Blocking stdin reads would otherwise hold the runtime open
    process::exit(0);
}

fn load_configuration(cli: &Cli) -> Result<ServerConfig, safe_mcp::ConfigError> {
    if let Some(path) = &cli.config {
        info!("Loading configuration from: {}", path.display());
    } else if let Some(path) = ServerConfig::find_default_file() {
        info!("Loading configuration from: {}", path.display());
    }

    let config = ServerConfig::load(cli.config.as_deref())?;

    match &cli.base_url {
        Some(base_url) => config.with_base_url(base_url.clone()),
        None => Ok(config),
    }
}

fn build_tools(config: &ServerConfig) -> Result<ToolSystem, Box<dyn std::error::Error>> {
    let client = SafeApiClient::from_config(config)?;
    Ok(ToolSystem::with_safe_tools(client))
}

async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "Starting {} v{} against {}",
        config.server.name,
        env!("CARGO_PKG_VERSION"),
        config.safe.base_url
    );

    let server = McpServer::new(&config, build_tools(&config)?);
    let mut transport = StdioTransport::stdio();

    let mut sigint = signal::unix::signal(SignalKind::interrupt())?;
    let mut sigterm = signal::unix::signal(SignalKind::terminate())?;

    tokio::select! {
        result = server.serve(&mut transport) => result?,
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    transport.close().await?;
    Ok(())
}

fn handle_tools_command(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let tools = build_tools(&config)?;
    println!("{}", serde_json::to_string_pretty(&tools.list_tools())?);
    Ok(())
}

async fn handle_call_command(
    config: ServerConfig,
    name: &str,
    args: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let arguments: Value = serde_json::from_str(args)
        .map_err(|e| McpError::invalid_params(format!("--args is not valid JSON: {e}")))?;

    let tools = build_tools(&config)?;
    let result = tools
        .call_tool(name, &arguments)
        .await
        .map_err(McpError::from)?;

    println!("{}", result.text().unwrap_or_default());
    Ok(())
}

fn handle_config_command(
    config: ServerConfig,
    show: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if show {
        println!("{}", toml::to_string_pretty(&config)?);
    }

    info!("Configuration validation complete");
    Ok(())
}
