/* packages/core/rust/src/route/mod.rs */

// Route descriptors and the immutable table the navigation engine consumes.
// Patterns are compiled once at build time; tables are never mutated after.

mod pattern;
mod table;


use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

pub use pattern::{RoutePattern, Segment, split_path};
pub use table::{RouteTable, RouteTableBuilder};

/// Views a route can instantiate. The views themselves live outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewId {
  HomePage,
  CountryList,
}

impl ViewId {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::HomePage => "HomePage",
      Self::CountryList => "CountryList",
    }
  }
}

impl fmt::Display for ViewId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteMeta {
  /// Document title applied by the host when the route becomes active.
  pub title: String,
  /// Any other descriptive keys. Serialized next to `title`.
  #[serde(flatten)]
  pub extra: BTreeMap<String, serde_json::Value>,
}

impl RouteMeta {
  pub fn titled(title: impl Into<String>) -> Self {
    Self { title: title.into(), extra: BTreeMap::new() }
  }

  pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
    self.extra.insert(key.into(), value.into());
    self
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteDescriptor {
  /// Client route syntax, e.g. "/:country"
  pub path: String,
  pub name: String,
  pub component: ViewId,
  /// Forward matched params to the view as input props.
  pub props: bool,
  pub meta: RouteMeta,
}

impl RouteDescriptor {
  pub fn new(path: impl Into<String>, name: impl Into<String>, component: ViewId) -> Self {
    Self {
      path: path.into(),
      name: name.into(),
      component,
      props: false,
      meta: RouteMeta::default(),
    }
  }

  pub fn with_props(mut self, props: bool) -> Self {
    self.props = props;
    self
  }

  pub fn with_meta(mut self, meta: RouteMeta) -> Self {
    self.meta = meta;
    self
  }
}
