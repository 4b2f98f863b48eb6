/* packages/core/rust/src/manifest.rs */

use std::collections::BTreeMap;

use serde::Serialize;

use crate::Shape;
use crate::country::Country;
use crate::route::{RouteDescriptor, RouteTable};

/// Route table plus record shapes, for hosts that are not written in Rust.
#[derive(Serialize)]
pub struct Manifest<'a> {
  pub version: u32,
  pub routes: Vec<RouteEntry<'a>>,
  pub shapes: BTreeMap<&'static str, serde_json::Value>,
}

#[derive(Serialize)]
pub struct RouteEntry<'a> {
  #[serde(flatten)]
  pub route: &'a RouteDescriptor,
  pub params: Vec<&'a str>,
}

pub fn build_manifest(table: &RouteTable) -> Manifest<'_> {
  let routes = table
    .iter()
    .map(|(route, pattern)| RouteEntry { route, params: pattern.param_names().collect() })
    .collect();
  let mut shapes = BTreeMap::new();
  shapes.insert("Country", Country::jtd_schema());
  Manifest { version: 1, routes, shapes }
}
