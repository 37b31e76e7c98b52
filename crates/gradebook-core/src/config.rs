//! Gradebook configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::generate::SeedOptions;

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// JSON file the CLI keeps the catalog in.
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
    /// Decimal places used when displaying totals.
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    /// Demo-data seeding bounds.
    #[serde(default)]
    pub seed: SeedOptions,
}

fn default_state_file() -> PathBuf {
    PathBuf::from("gradebook.json")
}
fn default_decimals() -> usize {
    2
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            decimals: default_decimals(),
            seed: SeedOptions::default(),
        }
    }
}

impl GradebookConfig {
    /// Reject settings the CLI cannot work with.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.decimals <= 6,
            "decimals must be at most 6 (got {})",
            self.decimals
        );
        anyhow::ensure!(
            !self.state_file.as_os_str().is_empty(),
            "state_file must not be empty"
        );
        self.seed.validate()?;
        Ok(())
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// `GRADEBOOK_STATE_FILE` overrides `state_file`.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<GradebookConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GradebookConfig::default(),
    };

    if let Ok(state_file) = std::env::var("GRADEBOOK_STATE_FILE") {
        config.state_file = PathBuf::from(state_file);
    }
    config.state_file = PathBuf::from(resolve_env_vars(&config.state_file.to_string_lossy()));

    config.validate()?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}
