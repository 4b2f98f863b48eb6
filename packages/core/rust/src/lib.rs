/* packages/core/rust/src/lib.rs */

pub mod country;
pub mod errors;
pub mod manifest;
pub mod navigator;
pub mod route;
pub mod routes;

// Re-exports for ergonomic use
pub use country::{Country, CountryIndex, parse_countries};
pub use errors::{RouteError, ShapeError};
pub use manifest::{Manifest, build_manifest};
pub use navigator::{FirstMatchNavigator, Navigator, Resolved};
pub use route::{RouteDescriptor, RouteMeta, RouteTable, ViewId};
pub use routes::app_routes;

/// Types that can describe themselves as a JTD (RFC 8927) schema, so
/// collaborators outside Rust can check record shapes.
pub trait Shape {
  fn jtd_schema() -> serde_json::Value;
}

macro_rules! impl_shape_primitive {
  ($rust_ty:ty, $jtd:expr) => {
    impl Shape for $rust_ty {
      fn jtd_schema() -> serde_json::Value {
        serde_json::json!({ "type": $jtd })
      }
    }
  };
}

impl_shape_primitive!(String, "string");
impl_shape_primitive!(u32, "uint32");

impl<T: Shape> Shape for Vec<T> {
  fn jtd_schema() -> serde_json::Value {
    serde_json::json!({ "elements": T::jtd_schema() })
  }
}
