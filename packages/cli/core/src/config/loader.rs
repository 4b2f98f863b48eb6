/* packages/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::CountriesConfig;

pub const CONFIG_FILE: &str = "countries.toml";

/// Walk upward from `start` to find `countries.toml`, like Cargo.toml discovery
pub fn find_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_config(path: &Path) -> Result<CountriesConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: CountriesConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.router.validate()?;
  tracing::debug!(path = %path.display(), project = %config.project.name, "config loaded");
  Ok(config)
}

impl CountriesConfig {
  /// Dataset path resolved against the directory holding the config file.
  pub fn countries_path(&self, config_path: &Path) -> Option<PathBuf> {
    let rel = self.data.countries.as_ref()?;
    let base = config_path.parent().unwrap_or_else(|| Path::new("."));
    Some(base.join(rel))
  }
}
