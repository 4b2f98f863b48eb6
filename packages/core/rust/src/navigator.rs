/* packages/core/rust/src/navigator.rs */

use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::RouteError;
use crate::route::{RouteTable, ViewId, split_path};

/// Outcome of matching a URL against a route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
  pub name: String,
  pub component: ViewId,
  pub title: String,
  /// Every param extracted from the URL.
  pub params: BTreeMap<String, String>,
  /// Input handed to the view: the params when the route forwards props, otherwise empty.
  pub props: BTreeMap<String, String>,
}

/// Boundary to the navigation engine that owns URL matching.
pub trait Navigator {
  fn resolve(&self, url: &str) -> Result<Resolved, RouteError>;
}

/// Stand-in for the host router: first match in declaration order wins.
pub struct FirstMatchNavigator<'t> {
  table: &'t RouteTable,
  /// Normalized without trailing slash; empty for the root base.
  base: String,
}

impl<'t> FirstMatchNavigator<'t> {
  pub fn new(table: &'t RouteTable) -> Self {
    Self { table, base: String::new() }
  }

  /// Serve the app under a sub-path such as `/countries`.
  pub fn with_base(mut self, base: &str) -> Self {
    let trimmed = base.trim_matches('/');
    self.base = if trimmed.is_empty() { String::new() } else { format!("/{trimmed}") };
    self
  }

  pub fn base(&self) -> &str {
    if self.base.is_empty() { "/" } else { &self.base }
  }

  fn strip_base<'u>(&self, path: &'u str) -> Option<&'u str> {
    if self.base.is_empty() {
      return Some(path);
    }
    let rest = path.strip_prefix(self.base.as_str())?;
    if rest.is_empty() || rest.starts_with('/') { Some(rest) } else { None }
  }
}

impl Navigator for FirstMatchNavigator<'_> {
  fn resolve(&self, url: &str) -> Result<Resolved, RouteError> {
    let path = url_path(url);
    let Some(rest) = self.strip_base(path) else {
      return Err(RouteError::not_found(format!("'{url}' is outside base '{}'", self.base())));
    };
    let segments = split_path(rest);

    for (route, pattern) in self.table.iter() {
      let Some(params) = pattern.match_segments(&segments) else {
        continue;
      };
      tracing::debug!(url, route = %route.name, ?params, "route matched");
      let props = if route.props { params.clone() } else { BTreeMap::new() };
      return Ok(Resolved {
        name: route.name.clone(),
        component: route.component,
        title: route.meta.title.clone(),
        params,
        props,
      });
    }

    tracing::debug!(url, "no route matched");
    Err(RouteError::not_found(format!("no route matches '{url}'")))
  }
}

/// Path part of a URL: drops scheme and authority, query string and fragment.
fn url_path(url: &str) -> &str {
  let url = url.split_once('#').map_or(url, |(before, _)| before);
  let url = url.split_once('?').map_or(url, |(before, _)| before);
  match url.split_once("://") {
    Some((_, after_scheme)) => after_scheme.find('/').map_or("/", |idx| &after_scheme[idx..]),
    None => url,
  }
}
