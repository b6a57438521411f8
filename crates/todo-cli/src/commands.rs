use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use todo_server::{ServerConfig, SharedService, TodoServer};
use todo_service::{InMemoryEntryRepository, TodoService};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Config(args) => cmd_config(args, &cli.format),
    }
}

/// Load the config file if given, then apply command-line overrides.
fn resolve_config(path: Option<&Path>, bind: Option<SocketAddr>) -> anyhow::Result<ServerConfig> {
    let mut config = match path {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = bind {
        config.bind_addr = bind;
    }
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = resolve_config(args.config.as_deref(), args.bind)?;
    if args.no_request_tracing {
        config.request_tracing = false;
    }

    let service: SharedService = Arc::new(TodoService::new(InMemoryEntryRepository::new()));
    println!("{} todo server on {}", "✓".green().bold(), config.bind_addr.to_string().bold());
    TodoServer::new(config, service).serve().await?;
    Ok(())
}

fn cmd_config(args: ConfigArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let config = resolve_config(args.config.as_deref(), None)?;
    match format {
        OutputFormat::Text => print!("{}", config.to_toml_string()?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}
