//! Configuration for the status query.
//!
//! Loaded from a TOML file plus `NODEGRID_*` environment overrides:
//!
//! ```toml
//! command = "/opt/slurm/bin/sinfo"
//! args = ["-h"]
//! timeout = 30
//! ```
//!
//! Every key is optional. A missing file means defaults.

pub mod path;

use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub use path::config_path;

/// How to obtain the status table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Status command to run
    pub command: String,
    /// Arguments for the status command; must suppress the header row
    pub args: Vec<String>,
    /// Seconds to wait for the command before giving up (unset waits forever)
    pub timeout: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            command: "sinfo".to_string(),
            args: vec!["-h".to_string()],
            timeout: None,
        }
    }
}

impl GridConfig {
    /// Load configuration from `path` (if it exists) and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            log::debug!("Loading config from {}", path.display());
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        builder
            .add_source(Environment::with_prefix("NODEGRID").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
