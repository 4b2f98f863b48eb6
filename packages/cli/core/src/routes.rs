/* packages/cli/core/src/routes.rs */

use anyhow::{Context, Result};
use countries_core::{FirstMatchNavigator, Navigator, Resolved, RouteTable, build_manifest};

use crate::ui::{self, CYAN, DIM, RESET};

/// Print the route table, or the full manifest as JSON.
pub fn run_routes(table: &RouteTable, json: bool) -> Result<()> {
  if json {
    let manifest = serde_json::to_string_pretty(&build_manifest(table))
      .context("failed to serialize route manifest")?;
    ui::raw(&manifest);
    return Ok(());
  }

  ui::banner("routes");
  for route in table.routes() {
    ui::arrow(&route_line(route.path.as_str(), route.name.as_str(), route.component.as_str()));
    let props = if route.props { "props forwarded" } else { "props withheld" };
    ui::detail(&format!("{DIM}{} ({props}){RESET}", route.meta.title));
  }
  ui::blank();
  ui::ok(&format!("{} routes", table.len()));
  Ok(())
}

fn route_line(path: &str, name: &str, view: &str) -> String {
  format!("{path:<12} {CYAN}{name:<16}{RESET} {view}")
}

pub fn resolve(table: &RouteTable, base: &str, url: &str) -> Result<Resolved> {
  let navigator = FirstMatchNavigator::new(table).with_base(base);
  navigator.resolve(url).with_context(|| format!("cannot resolve {url}"))
}

pub fn run_resolve(table: &RouteTable, base: &str, url: &str, json: bool) -> Result<()> {
  let resolved = resolve(table, base, url)?;
  if json {
    let out = serde_json::to_string_pretty(&resolved).context("failed to serialize match")?;
    ui::raw(&out);
    return Ok(());
  }

  ui::banner("resolve");
  ui::ok(&format!("{url} -> {CYAN}{}{RESET} ({})", resolved.name, resolved.component));
  ui::detail(&format!("title: {}", resolved.title));
  for (key, value) in &resolved.params {
    ui::detail(&format!("param {key} = {value:?}"));
  }
  if resolved.props.is_empty() && !resolved.params.is_empty() {
    ui::warn("route does not forward params as props");
  }
  Ok(())
}
