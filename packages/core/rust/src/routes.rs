/* packages/core/rust/src/routes.rs */

// The application's route configuration. Construct once at startup and hand the
// result to the navigation engine.

use crate::errors::RouteError;
use crate::route::{RouteDescriptor, RouteMeta, RouteTable, ViewId};

pub const HOME: &str = "home";
pub const COUNTRY_DETAIL: &str = "country-detail";
/// Param carried by the country-detail route.
pub const COUNTRY_PARAM: &str = "country";

pub const HOME_TITLE: &str = "REST API Countries App - Homepage";
pub const COUNTRY_DETAIL_TITLE: &str = "REST API Countries App";

/// Root first, then the single-segment country route, so `/` is never taken by the param.
pub fn app_routes() -> Result<RouteTable, RouteError> {
  RouteTable::builder()
    .route(
      RouteDescriptor::new("/", HOME, ViewId::HomePage)
        .with_props(true)
        .with_meta(RouteMeta::titled(HOME_TITLE)),
    )
    .route(
      RouteDescriptor::new(format!("/:{COUNTRY_PARAM}"), COUNTRY_DETAIL, ViewId::CountryList)
        .with_props(true)
        .with_meta(RouteMeta::titled(COUNTRY_DETAIL_TITLE)),
    )
    .build()
}
