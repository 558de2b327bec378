//! Configuration management for graph traversal runs
use crate::types::{Algorithm, OutputFormat, PromptMode};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

pub const ENV_OUTPUT_FORMAT: &str = "GRAPH_TRAVERSAL_OUTPUT_FORMAT";
pub const ENV_ALGORITHMS: &str = "GRAPH_TRAVERSAL_ALGORITHMS";
pub const ENV_PROMPTS: &str = "GRAPH_TRAVERSAL_PROMPTS";
pub const ENV_SHOW_ADJACENCY: &str = "GRAPH_TRAVERSAL_SHOW_ADJACENCY";

/// Commented configuration written by `graph-traversal init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# graph-traversal configuration

# Traversals to run from the starting vertex, in output order (bfs, dfs)
traversal:
  algorithms:
    - bfs
    - dfs

# Interactive prompts: auto (only on a terminal), always, never
input:
  prompts: auto

# Report rendering
output:
  format: text
  show_adjacency: true
"#;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub traversal: TraversalSettings,
    pub input: InputSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalSettings {
    pub algorithms: Vec<Algorithm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    pub prompts: PromptMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub show_adjacency: bool,
}

impl Default for TraversalSettings {
    fn default() -> Self {
        Self {
            algorithms: vec![Algorithm::Bfs, Algorithm::Dfs],
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_adjacency: true,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from an optional file, then apply environment overrides and validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                info!("Loading configuration from: {:?}", path);
                Self::load_from_file(path)?
            }
            Some(path) => {
                warn!("Configuration file not found: {:?}. Using defaults.", path);
                Config::default()
            }
            None => Config::default(),
        };

        config.apply_env()?;
        config.validate()?;
        debug!("Effective configuration: {:?}", config);
        Ok(config)
    }

    /// Override settings from environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Override settings from any key lookup; unset keys leave settings untouched
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            self.output.format = format
                .parse::<OutputFormat>()
                .map_err(|e: String| anyhow::anyhow!("{}: {}", ENV_OUTPUT_FORMAT, e))?;
        }

        if let Some(algorithms) = lookup(ENV_ALGORITHMS) {
            self.traversal.algorithms = algorithms
                .split(',')
                .filter(|name| !name.trim().is_empty())
                .map(|name| name.parse::<Algorithm>())
                .collect::<std::result::Result<Vec<_>, String>>()
                .map_err(|e| anyhow::anyhow!("{}: {}", ENV_ALGORITHMS, e))?;
        }

        if let Some(prompts) = lookup(ENV_PROMPTS) {
            self.input.prompts = prompts
                .parse::<PromptMode>()
                .map_err(|e: String| anyhow::anyhow!("{}: {}", ENV_PROMPTS, e))?;
        }

        if let Some(show) = lookup(ENV_SHOW_ADJACENCY) {
            self.output.show_adjacency = show
                .trim()
                .parse::<bool>()
                .with_context(|| format!("{} must be true or false", ENV_SHOW_ADJACENCY))?;
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.traversal.algorithms.is_empty() {
            return Err(anyhow::anyhow!("At least one traversal algorithm must be configured"));
        }

        Ok(())
    }
}
