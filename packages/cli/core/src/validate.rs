/* packages/cli/core/src/validate.rs */

use std::path::Path;

use anyhow::{Context, Result};
use countries_core::{Country, CountryIndex, Shape, parse_countries};

use crate::ui::{self, RED, RESET};

/// Read a dataset and run every record through the shape check.
pub fn load_countries(path: &Path) -> Result<CountryIndex> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let value: serde_json::Value = serde_json::from_str(&content)
    .with_context(|| format!("invalid JSON in {}", path.display()))?;
  let countries =
    parse_countries(&value).with_context(|| format!("invalid country data in {}", path.display()))?;
  let index = CountryIndex::new(countries)
    .with_context(|| format!("invalid country data in {}", path.display()))?;
  Ok(index)
}

pub fn run_validate(path: &Path) -> Result<()> {
  ui::banner("validate");
  ui::arrow(&format!("reading {}", path.display()));
  match load_countries(path) {
    Ok(index) => {
      let population: u64 = index.iter().map(|c| u64::from(c.population)).sum();
      let without_capital = index.iter().filter(|c| c.capital.is_empty()).count();
      ui::ok(&format!("{} countries satisfy the Country shape", index.len()));
      ui::detail(&format!("combined population {}", format_total(population)));
      if without_capital > 0 {
        ui::detail(&format!("{without_capital} without a capital"));
      }
      Ok(())
    }
    Err(err) => {
      ui::fail(&format!("{RED}{}{RESET}", err.root_cause()));
      Err(err)
    }
  }
}

fn format_total(n: u64) -> String {
  match u32::try_from(n) {
    Ok(small) => ui::format_count(small),
    Err(_) => format!("{:.2} billion", n as f64 / 1e9),
  }
}

pub fn run_schema(list: bool) -> Result<()> {
  let schema = if list { Vec::<Country>::jtd_schema() } else { Country::jtd_schema() };
  let out = serde_json::to_string_pretty(&schema).context("failed to serialize schema")?;
  ui::raw(&out);
  Ok(())
}
