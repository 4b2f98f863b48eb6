/* packages/cli/core/src/config/types.rs */

use anyhow::{Result, bail};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CountriesConfig {
  pub project: ProjectConfig,
  #[serde(default)]
  pub router: RouterSection,
  #[serde(default)]
  pub data: DataSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouterSection {
  /// Sub-path the app is served under, e.g. "/countries"
  #[serde(default = "default_base")]
  pub base: String,
}

impl Default for RouterSection {
  fn default() -> Self {
    Self { base: default_base() }
  }
}

impl RouterSection {
  pub fn validate(&self) -> Result<()> {
    if !self.base.starts_with('/') {
      bail!("router.base \"{}\" must start with '/'", self.base);
    }
    if self.base.contains(['?', '#']) {
      bail!("router.base \"{}\" must not contain a query or fragment", self.base);
    }
    Ok(())
  }
}

fn default_base() -> String {
  "/".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSection {
  /// JSON array of country records, relative to the config file
  pub countries: Option<String>,
}
