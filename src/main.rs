//! mermaid-renderer-mcp: MCP server bridging AI assistants to a Mermaid
//! renderer API.
//!
//! Reads JSON-RPC from stdin, forwards tool calls to the renderer over HTTP,
//! and writes results to stdout. stderr carries logs.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

use mermaid_renderer_mcp::config;
use mermaid_renderer_mcp::mcp::server::McpServer;
use mermaid_renderer_mcp::renderer::RendererClient;

/// Deadline for the startup health probe.
const HEALTH_PROBE_DEADLINE: Duration = Duration::from_secs(5);

/// MCP server for the Mermaid diagram renderer.
///
/// Exposes render, validate, and suggestion tools to AI assistants and
/// forwards each call to the rendering API.
#[derive(Parser, Debug)]
#[command(name = "mermaid-renderer-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the Mermaid rendering API (overrides MERMAID_API_URL and
    /// the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "error" => Level::ERROR,
            _ => Level::WARN,
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the mermaid-renderer-mcp server.
fn main() -> ExitCode {
    let args = Args::parse();

    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    let env_url = std::env::var(config::API_URL_ENV).ok();
    let api_url = match config::resolve_api_url(args.api_url.as_deref(), env_url.as_deref(), &cfg)
    {
        Ok(url) => url,
        Err(e) => {
            error!(error = %e, "Invalid renderer URL");
            return ExitCode::FAILURE;
        }
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        renderer = %api_url,
        "Starting mermaid-renderer-mcp server"
    );

    let client = match RendererClient::new(&api_url, Duration::from_secs(cfg.timeout_secs)) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to construct renderer client");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(async {
        probe_renderer(&client).await;

        let mut server = McpServer::new(client);
        info!("MCP server ready, waiting for client connection...");
        server.run().await
    });

    match result {
        Ok(()) => {
            info!("Server shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}

/// Probes the renderer health endpoint once at startup.
///
/// An unreachable renderer is logged, not fatal: it may come up after this
/// adapter does, and every tool call reports connectivity failures on its
/// own.
async fn probe_renderer(client: &RendererClient) {
    match tokio::time::timeout(HEALTH_PROBE_DEADLINE, client.health()).await {
        Ok(Ok(())) => info!(renderer = %client.base_url(), "Renderer is reachable"),
        Ok(Err(e)) => warn!(renderer = %client.base_url(), error = %e, "Renderer health probe failed"),
        Err(_) => warn!(renderer = %client.base_url(), "Renderer health probe timed out"),
    }
}
