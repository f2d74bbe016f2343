//! Codebreaker server binary.

use anyhow::Result;
use clap::Parser;
use codebreaker_server::ServerConfig;
use codebreaker_server::cli::{Cli, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let overrides = cli.command.overrides();
    let config = overrides.apply(ServerConfig::from_file_or_default(&overrides.config)?);

    match cli.command {
        Command::Config(_) => {
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        Command::Serve(_) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("info,codebreaker=debug")),
                )
                .init();

            info!(
                address = %config.bind_address(),
                code_source = %config.code_source(),
                "Starting codebreaker server"
            );
            codebreaker_server::serve(config).await
        }
    }
}
