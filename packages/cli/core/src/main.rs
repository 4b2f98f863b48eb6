/* packages/cli/core/src/main.rs */

mod config;
mod logging;
mod routes;
mod ui;
mod validate;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use config::{CountriesConfig, find_config, load_config};

#[derive(Parser)]
#[command(name = "countries", about = "REST Countries app routing and data tools")]
struct Cli {
  /// Path to countries.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// List the application's routes
  Routes {
    /// Print the route manifest as JSON
    #[arg(long)]
    json: bool,
  },
  /// Resolve a URL to a route the way the client router would
  Resolve {
    /// Path or absolute URL, e.g. /usa
    url: String,
    /// Base path the app is served under (overrides router.base)
    #[arg(short, long)]
    base: Option<String>,
    /// Print the match as JSON
    #[arg(long)]
    json: bool,
  },
  /// Print the JSON Type Definition of a country record
  Schema {
    /// Describe an array of records instead of a single one
    #[arg(long)]
    list: bool,
  },
  /// Check a JSON array of country records against the Country shape
  Validate {
    /// Dataset to check (defaults to data.countries from countries.toml)
    file: Option<PathBuf>,
  },
}

/// Load the explicit config, or look upward from cwd. A missing config is not an
/// error unless a path was given.
fn resolve_config(explicit: Option<PathBuf>) -> Result<Option<(PathBuf, CountriesConfig)>> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      match find_config(&cwd) {
        Ok(p) => p,
        Err(err) => {
          tracing::debug!("{err:#}");
          return Ok(None);
        }
      }
    }
  };
  let config = load_config(&path)?;
  Ok(Some((path, config)))
}

fn main() -> Result<()> {
  logging::init();
  run(Cli::parse())
}

/// Config is only read by the commands that use it, so a broken
/// `countries.toml` does not block `routes` or `schema`.
fn run(cli: Cli) -> Result<()> {
  let table = countries_core::app_routes().context("route table is invalid")?;

  match cli.command {
    Command::Routes { json } => routes::run_routes(&table, json)?,
    Command::Resolve { url, base, json } => {
      let base = match base {
        Some(base) => base,
        None => resolve_config(cli.config)?.map_or_else(|| "/".to_string(), |(_, c)| c.router.base),
      };
      routes::run_resolve(&table, &base, &url, json)?;
    }
    Command::Schema { list } => validate::run_schema(list)?,
    Command::Validate { file } => {
      let path = match file {
        Some(file) => file,
        None => match resolve_config(cli.config)? {
          Some((config_path, config)) => match config.countries_path(&config_path) {
            Some(p) => p,
            None => {
              bail!("no dataset given and data.countries is not set in {}", config_path.display())
            }
          },
          None => bail!("no dataset given and no {} found", config::CONFIG_FILE),
        },
      };
      validate::run_validate(&path)?;
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn broken_config() -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(config::CONFIG_FILE);
    std::fs::write(&path, "[project\n").unwrap();
    (dir, path.to_string_lossy().into_owned())
  }

  fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
  }

  #[test]
  fn routes_and_schema_ignore_broken_config() {
    let (_dir, path) = broken_config();
    assert!(run(cli(&["countries", "--config", &path, "routes"])).is_ok());
    assert!(run(cli(&["countries", "--config", &path, "schema", "--list"])).is_ok());
  }

  #[test]
  fn resolve_reads_config_only_without_base() {
    let (_dir, path) = broken_config();
    let err = run(cli(&["countries", "--config", &path, "resolve", "/usa"])).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse"));
    assert!(run(cli(&["countries", "--config", &path, "resolve", "/usa", "--base", "/"])).is_ok());
  }

  #[test]
  fn validate_with_file_skips_config() {
    let (dir, path) = broken_config();
    let data = dir.path().join("countries.json");
    std::fs::write(&data, "[]").unwrap();
    let data = data.to_string_lossy().into_owned();
    assert!(run(cli(&["countries", "--config", &path, "validate", &data])).is_ok());
    assert!(run(cli(&["countries", "--config", &path, "validate"])).is_err());
  }
}
