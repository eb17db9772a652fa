//! sociona-mcp MCP Server & CLI (Rust)
//!
//! Dual-mode application:
//! - MCP Server Mode (default): Model Context Protocol server using stdio
//! - CLI Mode: Command-line utility for direct tool execution
//!
//! Exposes the Sociona publishing API as MCP tools: publish_post,
//! schedule_post, get_accounts, get_posts, get_scheduled_posts,
//! cancel_scheduled_post and get_post_stats.

mod cli;
mod config;
mod error;
mod http;
mod mcp;
mod sociona;
mod tools;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::AppError;
use sociona::client::SocionaClient;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Detect mode: CLI if args present, MCP server otherwise
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        // CLI mode - parse arguments and execute
        run_cli_mode().await
    } else {
        // MCP server mode - default behavior
        run_mcp_mode().await
    }
}

/// Run in CLI mode
async fn run_cli_mode() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let client = SocionaClient::new(&load_config());

    // Execute command
    let result = match cli.command {
        Some(Commands::Publish(args)) => tools::publish::run(&client, args).await,
        Some(Commands::Schedule(args)) => tools::schedule::run(&client, args).await,
        Some(Commands::Accounts(_)) => tools::accounts::run(&client).await,
        Some(Commands::Posts(args)) => tools::posts::run(&client, args).await,
        Some(Commands::Scheduled(args)) => tools::scheduled::run(&client, args).await,
        Some(Commands::Cancel(args)) => tools::cancel::run(&client, args).await,
        Some(Commands::Stats(_)) => tools::stats::run(&client).await,
        None => {
            eprintln!("Error: No command specified. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    // Handle result and exit with appropriate code
    match result {
        Ok(tool_result) => {
            let text = tool_result
                .content
                .first()
                .map(|c| c.text.clone())
                .unwrap_or_default();
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

/// Run in MCP server mode
async fn run_mcp_mode() -> Result<()> {
    // Stdout carries the protocol stream; all logging goes to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting sociona-mcp MCP Server");

    let client = SocionaClient::new(&load_config());
    mcp::handle_stdio(&client).await?;

    Ok(())
}

/// Read configuration from the environment; a missing credential is fatal
/// before any request is accepted
fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Map AppError to exit code
fn exit_code(err: &AppError) -> i32 {
    match err {
        AppError::InvalidInput(_) | AppError::Config(_) => 1,
        AppError::Api(_) => 2,
        AppError::AccountNotFound(_) | AppError::UnknownTool(_) => 3,
        AppError::Timeout(_) => 4,
        AppError::MalformedResponse(_) | AppError::Internal(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(exit_code(&AppError::InvalidInput("x".into())), 1);
        assert_eq!(exit_code(&AppError::Api("x".into())), 2);
        assert_eq!(exit_code(&AppError::AccountNotFound("x".into())), 3);
        assert_eq!(exit_code(&AppError::Timeout("x".into())), 4);
        assert_eq!(exit_code(&AppError::MalformedResponse("x".into())), 5);
    }
}
