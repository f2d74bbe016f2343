//! Command-line interface for the codebreaker server.

use crate::config::{CodeSourceKind, ServerConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Codebreaker - guess the secret code over HTTP
#[derive(Parser, Debug)]
#[command(name = "codebreaker")]
#[command(about = "Code-breaking game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve(Overrides),

    /// Print the effective configuration as TOML and exit
    Config(Overrides),
}

impl Command {
    /// Settings shared by every subcommand.
    pub fn overrides(&self) -> &Overrides {
        match self {
            Command::Serve(overrides) | Command::Config(overrides) => overrides,
        }
    }
}

/// Config file location plus per-field overrides.
#[derive(Args, Debug, Clone)]
pub struct Overrides {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "codebreaker.toml")]
    pub config: PathBuf,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Where secret codes come from
    #[arg(long, value_enum)]
    pub code_source: Option<CodeSourceKind>,

    /// random.org timeout in milliseconds
    #[arg(long)]
    pub random_org_timeout_ms: Option<u64>,
}

impl Overrides {
    /// Applies every flag that was given on top of `config`.
    pub fn apply(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = &self.host {
            config = config.with_host(host.clone());
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(kind) = self.code_source {
            config = config.with_code_source(kind);
        }
        if let Some(ms) = self.random_org_timeout_ms {
            config = config.with_random_org_timeout_ms(ms);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["codebreaker", "serve"]).unwrap();
        let overrides = cli.command.overrides();
        assert_eq!(overrides.config, PathBuf::from("codebreaker.toml"));

        let config = overrides.apply(ServerConfig::default());
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_flags_override_file_values() {
        let cli = Cli::try_parse_from([
            "codebreaker",
            "serve",
            "--port",
            "9090",
            "--code-source",
            "local",
            "--random-org-timeout-ms",
            "250",
        ])
        .unwrap();

        let config = cli.command.overrides().apply(ServerConfig::default());
        assert_eq!(config.port(), 9090);
        assert_eq!(config.code_source(), CodeSourceKind::Local);
        assert_eq!(config.random_org_timeout_ms(), 250);
        assert_eq!(config.host(), "127.0.0.1");
    }

    #[test]
    fn test_rejects_unknown_code_source() {
        assert!(Cli::try_parse_from(["codebreaker", "serve", "--code-source", "dice"]).is_err());
    }
}
