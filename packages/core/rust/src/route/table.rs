/* packages/core/rust/src/route/table.rs */

use std::collections::{BTreeMap, HashSet};

use super::{RouteDescriptor, RoutePattern};
use crate::errors::RouteError;

/// Ordered, validated set of routes. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct RouteTable {
  routes: Vec<RouteDescriptor>,
  patterns: Vec<RoutePattern>,
}

impl RouteTable {
  pub fn builder() -> RouteTableBuilder {
    RouteTableBuilder::new()
  }

  /// Routes in declaration order.
  pub fn routes(&self) -> &[RouteDescriptor] {
    &self.routes
  }

  pub fn iter(&self) -> impl Iterator<Item = (&RouteDescriptor, &RoutePattern)> {
    self.routes.iter().zip(&self.patterns)
  }

  pub fn get(&self, name: &str) -> Option<&RouteDescriptor> {
    self.routes.iter().find(|r| r.name == name)
  }

  pub fn pattern(&self, name: &str) -> Option<&RoutePattern> {
    self.iter().find(|(r, _)| r.name == name).map(|(_, p)| p)
  }

  pub fn len(&self) -> usize {
    self.routes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.routes.is_empty()
  }

  /// Build a concrete path for a named route, e.g. `country-detail` + `{country: usa}` -> `/usa`.
  pub fn href(&self, name: &str, params: &BTreeMap<String, String>) -> Result<String, RouteError> {
    let pattern =
      self.pattern(name).ok_or_else(|| RouteError::not_found(format!("no route named '{name}'")))?;
    pattern.render(params).map_err(|param| RouteError::missing_param(name, param))
  }
}

#[derive(Debug, Default)]
pub struct RouteTableBuilder {
  routes: Vec<RouteDescriptor>,
}

impl RouteTableBuilder {
  pub fn new() -> Self {
    Self { routes: Vec::new() }
  }

  pub fn route(mut self, route: RouteDescriptor) -> Self {
    self.routes.push(route);
    self
  }

  /// Compile every path and check table invariants: unique names, a non-empty
  /// `meta.title`, and no route hidden behind an earlier one under first-match-wins.
  pub fn build(self) -> Result<RouteTable, RouteError> {
    let mut names = HashSet::new();
    let mut patterns: Vec<RoutePattern> = Vec::with_capacity(self.routes.len());

    for route in &self.routes {
      if route.name.is_empty() {
        return Err(RouteError::invalid_name(&route.path, "route name must not be empty"));
      }
      if !names.insert(route.name.as_str()) {
        return Err(RouteError::duplicate_route(&route.name));
      }
      if route.meta.title.trim().is_empty() {
        return Err(RouteError::invalid_meta(&route.name, "meta.title must not be empty"));
      }
      if route.meta.extra.contains_key("title") {
        return Err(RouteError::invalid_meta(&route.name, "meta.title is set twice"));
      }

      let pattern = RoutePattern::parse(&route.path)?;
      for (earlier, earlier_pattern) in self.routes.iter().zip(&patterns) {
        if earlier_pattern.shadows(&pattern) {
          return Err(RouteError::shadowed_route(&earlier.name, &route.name));
        }
      }

      tracing::debug!(
        name = %route.name,
        path = %route.path,
        view = %route.component,
        "route registered"
      );
      patterns.push(pattern);
    }

    Ok(RouteTable { routes: self.routes, patterns })
  }
}
