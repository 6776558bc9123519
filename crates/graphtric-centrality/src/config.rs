//! Engine configuration.
//!
//! Loaded from a TOML file; every field has a default, so a missing file or
//! a partial one is fine:
//!
//! ```toml
//! worker_threads = 8
//!
//! [eigenvector]
//! max_iter = 200
//! tolerance = 1e-9
//! ```
//!
//! `GRAPHTRIC_WORKER_THREADS` overrides `worker_threads` when it parses as a
//! number.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable overriding [`EngineConfig::worker_threads`].
pub const WORKER_THREADS_ENV: &str = "GRAPHTRIC_WORKER_THREADS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Parallel engine pool size; `0` means one worker per logical CPU.
    #[serde(default)]
    pub worker_threads: usize,
    #[serde(default)]
    pub eigenvector: EigenvectorConfig,
}

/// Defaults for [`crate::CentralityEngine::eigenvector_centrality`] callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EigenvectorConfig {
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            max_iter: default_max_iter(),
            tolerance: default_tolerance(),
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML for this schema.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content).context("Failed to parse engine config")
    }
}

/// Load `path`, or the defaults if it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_engine_config(path: &Path) -> Result<EngineConfig> {
    if !path.exists() {
        return Ok(EngineConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<EngineConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load the config file (if any) and apply environment overrides.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn resolve_engine_config(path: Option<&Path>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => load_engine_config(path)?,
        None => EngineConfig::default(),
    };

    Ok(apply_worker_override(config, env::var(WORKER_THREADS_ENV).ok()))
}

fn apply_worker_override(mut config: EngineConfig, env_threads: Option<String>) -> EngineConfig {
    if let Some(raw) = env_threads {
        match raw.trim().parse::<usize>() {
            Ok(threads) => config.worker_threads = threads,
            Err(_) => warn!(value = %raw, "ignoring invalid {WORKER_THREADS_ENV}"),
        }
    }
    config
}

const fn default_max_iter() -> usize {
    100
}

const fn default_tolerance() -> f64 {
    1e-6
}
