//! Engine and server configuration with documented defaults
//!
//! Everything tunable lives here. Values can come from a TOML file; any
//! field or section left out falls back to its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{BrawlError, Result};

/// Default line-of-fire scan radius (cells)
pub const DEFAULT_SCAN_RADIUS: i32 = 3;

/// Largest arena (width * height) any board will be allocated for
pub const MAX_ARENA_CELLS: usize = 1 << 20;

/// Default arena size limit applied when validating snapshots
pub const DEFAULT_MAX_CELLS: usize = 1 << 16;

/// Default HTTP port when `PORT` is not set
pub const DEFAULT_PORT: u16 = 8080;

/// Body returned by `GET /`
pub const DEFAULT_READINESS_MESSAGE: &str = "Let the battle begin!";

/// Configuration for the decision engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How far along my row and column the line-of-fire scan looks (cells)
    ///
    /// Matches the throw range of the game. A larger radius makes the bot
    /// turn toward enemies it cannot actually hit yet.
    pub scan_radius: i32,

    /// Largest arena (width * height) accepted from a snapshot
    ///
    /// The board, visited map and search queue are each this many cells, so
    /// the limit bounds per-turn memory. Capped at `MAX_ARENA_CELLS`.
    pub max_cells: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scan_radius: DEFAULT_SCAN_RADIUS,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl EngineConfig {
    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.scan_radius < 1 {
            return Err(BrawlError::InvalidConfig(format!(
                "scan_radius ({}) must be at least 1",
                self.scan_radius
            )));
        }
        if self.max_cells == 0 || self.max_cells > MAX_ARENA_CELLS {
            return Err(BrawlError::InvalidConfig(format!(
                "max_cells ({}) must be between 1 and {}",
                self.max_cells, MAX_ARENA_CELLS
            )));
        }
        Ok(())
    }
}

/// Configuration for the HTTP adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on; `PORT` overrides it
    pub port: u16,
    /// Plain-text body for readiness checks
    pub readiness_message: String,
    pub engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            readiness_message: DEFAULT_READINESS_MESSAGE.to_string(),
            engine: EngineConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Parse from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ServerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `PORT` from the environment, ignoring unparsable values
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = std::env::var("PORT") {
            match raw.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT value {:?}", raw),
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(BrawlError::InvalidConfig("host must not be empty".into()));
        }
        self.engine.validate()
    }

    /// `host:port` for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
