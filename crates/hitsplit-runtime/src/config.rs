use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is not given
pub const CONFIG_ENV: &str = "HITSPLIT_CONFIG";

/// Where a run writes its artifacts.
///
/// Output file names are fixed; only their directories are configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Directory receiving `visits.json` and `hits.json`
    #[serde(default = "current_dir")]
    pub output_dir: PathBuf,

    /// Directory receiving the `<input>_error.log` diagnostics file
    #[serde(default = "current_dir")]
    pub log_dir: PathBuf,
}

fn current_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            output_dir: current_dir(),
            log_dir: current_dir(),
        }
    }
}

impl SplitConfig {
    /// Resolve configuration based on priority:
    /// 1. Explicit path (must exist)
    /// 2. HITSPLIT_CONFIG environment variable
    /// 3. Built-in defaults
    pub fn resolve(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            return Self::load_from(Path::new(&env_path));
        }

        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io_path("read config", path, e))?;
        let config: SplitConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::io_path("create directory", parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| Error::io_path("write config", path, e))?;
        Ok(())
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}
