use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use linkcard::app::AppContext;
use linkcard::cli::{commands, Cli, Commands};
use linkcard::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(api) = cli.api {
        config.api_base = api;
    }
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Preview { url } => {
            commands::preview_link(&ctx, &url).await?;
        }
        Commands::Key { length } => {
            commands::generate_key(&ctx, length).await?;
        }
        Commands::Tui => {
            linkcard::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
