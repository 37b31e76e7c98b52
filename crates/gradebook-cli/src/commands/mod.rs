//! Subcommand implementations.
//!
//! Every command except `init` works on a [`Session`]: the loaded config plus
//! the catalog read from the state file.

use std::path::{Path, PathBuf};

use anyhow::Result;

use gradebook_core::config::{load_config_from, GradebookConfig};
use gradebook_core::CourseCatalog;

pub mod course;
pub mod init;
pub mod mark;
pub mod seed;
pub mod show;

pub struct Session {
    pub config: GradebookConfig,
    pub state_file: PathBuf,
    pub catalog: CourseCatalog,
}

impl Session {
    /// Load the config and the catalog; a missing state file means an empty
    /// catalog.
    pub fn open(config_path: Option<&Path>, state_override: Option<&Path>) -> Result<Self> {
        let config = load_config_from(config_path)?;
        let state_file = state_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.state_file.clone());

        let catalog = if state_file.exists() {
            CourseCatalog::load_json(&state_file)?
        } else {
            tracing::debug!("no state at {}, starting empty", state_file.display());
            CourseCatalog::new()
        };

        Ok(Self {
            config,
            state_file,
            catalog,
        })
    }

    pub fn save(&self) -> Result<()> {
        self.catalog.save_json(&self.state_file)
    }

    pub fn decimals(&self) -> usize {
        self.config.decimals
    }
}
