//! CLI command implementations
//!
//! `init` writes a default configuration file; `start` loads it, builds
//! the catalog and library state, optionally seeds demo data, and runs
//! the HTTP server on a tokio runtime.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{seed, ProductCatalog};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::library::{seed as library_seed, LibraryService};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8069)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive (development)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Load demo categories, products, authors and books on start
    #[serde(default)]
    pub seed_demo: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8069
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            seed_demo: true,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.host.is_empty() {
            return Err(CliError::Config("host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(CliError::Config("port must be > 0".to_string()));
        }
        Ok(())
    }

    fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Write a default configuration file; refuses to overwrite
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized(
            config_path.display().to_string(),
        ));
    }

    let config = Config::default();
    let content = serde_json::to_string_pretty(&config)
        .map_err(|e| CliError::Config(format!("Failed to render config: {}", e)))?;
    fs::write(config_path, content)?;

    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

/// Boot the server: load config, build state, seed, serve
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    init_logging();

    let catalog = Arc::new(ProductCatalog::new());
    let library = Arc::new(LibraryService::new());

    if config.seed_demo {
        seed::seed_demo(&catalog).map_err(|e| CliError::Seed(e.to_string()))?;
        library_seed::seed_demo(&library).map_err(|e| CliError::Seed(e.to_string()))?;
        tracing::info!("demo data loaded");
    }

    let server = HttpServer::new(config.http_config(), catalog, library);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Server(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Server(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Install the global tracing subscriber; RUST_LOG overrides the default
fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8069);
        assert!(config.seed_demo);
    }

    #[test]
    fn test_load_applies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogd.json");
        fs::write(&path, r#"{"port": 9000}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert!(!config.seed_demo);
    }

    #[test]
    fn test_load_rejects_invalid_port() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogd.json");
        fs::write(&path, r#"{"port": 0}"#).unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogd.json");
        fs::write(&path, "not json").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_init_writes_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogd.json");

        init(&path).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.port, 8069);

        assert!(matches!(
            init(&path),
            Err(CliError::AlreadyInitialized(_))
        ));
    }
}
