//! Venture Directory
//!
//! A query API over investors and startups:
//! - Typed filters compiled into store-agnostic predicates
//! - Consistent sorting and page-based pagination
//! - Count facets and platform / dashboard statistics
//! - MongoDB storage, with an in-memory store for tests and local runs

pub mod api;
pub mod directory;
pub mod models;
pub mod query;
pub mod store;

#[cfg(test)]
pub(crate) mod test_helpers;

use anyhow::{Context, Result};
use api::handlers::ServerState;
use directory::Directory;
use serde::Deserialize;
use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use store::{DocumentStore, MemoryStore, MongoStore};
use tokio::signal;

// ============================================================================
// YAML config structs (deserialization targets)
// ============================================================================

/// Top-level YAML configuration file structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: ServerYamlConfig,
    pub store: StoreYamlConfig,
}

/// Server configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerYamlConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerYamlConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
        }
    }
}

/// Document store configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreYamlConfig {
    pub backend: StoreBackend,
    /// MongoDB connection string; required for the `mongodb` backend
    pub url: Option<String>,
    pub database: String,
}

impl Default for StoreYamlConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            url: None,
            database: "Visnex_global".into(),
        }
    }
}

/// Which document store backs the directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Mongodb,
    /// Process-local store, empty at startup
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(Self::Mongodb),
            "memory" => Ok(Self::Memory),
            other => anyhow::bail!("unknown store backend '{}' (expected mongodb or memory)", other),
        }
    }
}

// ============================================================================
// Runtime config (what the application actually uses)
// ============================================================================

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store_backend: StoreBackend,
    pub mongodb_url: Option<String>,
    pub database_name: String,
}

impl Config {
    /// Load configuration from an optional YAML file, then override with env vars.
    ///
    /// Priority: env var > YAML > default
    ///
    /// If `yaml_path` is None, tries "config.yaml" in CWD. If the file doesn't
    /// exist, falls back to pure env var / defaults.
    pub fn from_yaml_and_env(yaml_path: Option<&Path>) -> Result<Self> {
        let yaml = Self::load_yaml(yaml_path);

        let store_backend = match std::env::var("STORE_BACKEND") {
            Ok(value) if !value.is_empty() => value.parse()?,
            _ => yaml.store.backend,
        };

        let config = Self {
            host: std::env::var("HOST").unwrap_or(yaml.server.host),
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("PORT must be a port number, got '{}'", value))?,
                Err(_) => yaml.server.port,
            },
            store_backend,
            mongodb_url: std::env::var("MONGODB_URL")
                .ok()
                .filter(|url| !url.is_empty())
                .or(yaml.store.url),
            database_name: std::env::var("DATABASE_NAME").unwrap_or(yaml.store.database),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.store_backend == StoreBackend::Mongodb && self.mongodb_url.is_none() {
            anyhow::bail!("MONGODB_URL must be set (or store.url in config.yaml)");
        }
        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }

    /// Try to load and parse a YAML config file. Returns defaults on any failure.
    fn load_yaml(yaml_path: Option<&Path>) -> YamlConfig {
        let default_path = Path::new("config.yaml");
        let path = yaml_path.unwrap_or(default_path);

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    YamlConfig::default()
                }
            },
            Err(_) => {
                tracing::debug!(
                    "No config file at {}, using env vars / defaults",
                    path.display()
                );
                YamlConfig::default()
            }
        }
    }
}

// ============================================================================
// Application state and server
// ============================================================================

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub directory: Directory,
}

impl AppState {
    /// Create application state, connecting the configured store
    pub async fn new(config: Config) -> Result<Self> {
        let store: Arc<dyn DocumentStore> = match config.store_backend {
            StoreBackend::Mongodb => {
                let url = config
                    .mongodb_url
                    .as_deref()
                    .context("MONGODB_URL must be set for the mongodb backend")?;
                Arc::new(MongoStore::connect(url, &config.database_name).await?)
            }
            StoreBackend::Memory => {
                tracing::warn!("Using the in-memory store; data is lost on exit");
                Arc::new(MemoryStore::new())
            }
        };

        Ok(Self {
            directory: Directory::new(store),
        })
    }

    /// Await `work`, then close the store whether or not it succeeded.
    /// The work's error takes precedence over a failed close.
    pub async fn close_after<T>(&self, work: impl Future<Output = Result<T>>) -> Result<T> {
        let outcome = work.await;
        let closed = self.directory.close().await;
        if let (Err(e), Err(_)) = (&closed, &outcome) {
            tracing::warn!(error = %e, "Failed to close the store");
        }
        let value = outcome?;
        closed?;
        Ok(value)
    }
}

/// Serve the HTTP API until Ctrl+C / SIGTERM, then close the store
pub async fn start_server(config: Config) -> Result<()> {
    let addr = config.bind_addr()?;
    let state = AppState::new(config).await?;
    state.close_after(serve(&state, addr)).await?;
    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn serve(state: &AppState, addr: SocketAddr) -> Result<()> {
    let router = api::create_router(Arc::new(ServerState {
        directory: state.directory.clone(),
    }));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "Ctrl+C handler installation failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler installation failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

// ============================================================================
// Tests
// ============================================================================
