/* packages/core/rust/src/errors.rs */

use std::fmt;

pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
pub const INVALID_NAME: &str = "INVALID_NAME";
pub const DUPLICATE_ROUTE: &str = "DUPLICATE_ROUTE";
pub const SHADOWED_ROUTE: &str = "SHADOWED_ROUTE";
pub const INVALID_META: &str = "INVALID_META";
pub const MISSING_PARAM: &str = "MISSING_PARAM";
pub const NOT_FOUND: &str = "NOT_FOUND";

/// Failure while building a route table or navigating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteError {
  code: &'static str,
  message: String,
}

impl RouteError {
  pub fn new(code: &'static str, message: impl Into<String>) -> Self {
    Self { code, message: message.into() }
  }

  pub fn invalid_pattern(path: &str, reason: impl fmt::Display) -> Self {
    Self::new(INVALID_PATTERN, format!("route path '{path}': {reason}"))
  }

  pub fn invalid_name(path: &str, reason: impl fmt::Display) -> Self {
    Self::new(INVALID_NAME, format!("route at '{path}': {reason}"))
  }

  pub fn duplicate_route(name: &str) -> Self {
    Self::new(DUPLICATE_ROUTE, format!("route name '{name}' is declared more than once"))
  }

  pub fn shadowed_route(earlier: &str, later: &str) -> Self {
    Self::new(
      SHADOWED_ROUTE,
      format!("route '{later}' can never match: every URL it accepts is taken by '{earlier}'"),
    )
  }

  pub fn invalid_meta(name: &str, reason: impl fmt::Display) -> Self {
    Self::new(INVALID_META, format!("route '{name}': {reason}"))
  }

  pub fn missing_param(name: &str, param: &str) -> Self {
    Self::new(MISSING_PARAM, format!("route '{name}' requires param '{param}'"))
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::new(NOT_FOUND, msg)
  }

  pub fn code(&self) -> &str {
    self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl fmt::Display for RouteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for RouteError {}

pub const MISSING_FIELD: &str = "MISSING_FIELD";
pub const WRONG_TYPE: &str = "WRONG_TYPE";
pub const INVALID_VALUE: &str = "INVALID_VALUE";
pub const DUPLICATE_CODE: &str = "DUPLICATE_CODE";

/// A value crossing the data boundary does not satisfy a declared shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
  code: &'static str,
  path: String,
  message: String,
}

impl ShapeError {
  pub fn new(code: &'static str, path: impl Into<String>, message: impl Into<String>) -> Self {
    Self { code, path: path.into(), message: message.into() }
  }

  pub fn missing_field(path: impl Into<String>) -> Self {
    Self::new(MISSING_FIELD, path, "field is required")
  }

  pub fn wrong_type(path: impl Into<String>, expected: &str) -> Self {
    Self::new(WRONG_TYPE, path, format!("expected {expected}"))
  }

  pub fn invalid_value(path: impl Into<String>, message: impl Into<String>) -> Self {
    Self::new(INVALID_VALUE, path, message)
  }

  pub fn duplicate_code(path: impl Into<String>, code: &str) -> Self {
    Self::new(DUPLICATE_CODE, path, format!("alpha3Code '{code}' appears more than once"))
  }

  /// Prefix the field path, e.g. `capital` becomes `[3].capital`.
  pub fn at(mut self, prefix: &str) -> Self {
    self.path = if self.path.is_empty() {
      prefix.to_string()
    } else if self.path.starts_with('[') {
      format!("{prefix}{}", self.path)
    } else {
      format!("{prefix}.{}", self.path)
    };
    self
  }

  pub fn code(&self) -> &str {
    self.code
  }

  pub fn path(&self) -> &str {
    &self.path
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl fmt::Display for ShapeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.path.is_empty() {
      write!(f, "{}: {}", self.code, self.message)
    } else {
      write!(f, "{}: {}: {}", self.code, self.path, self.message)
    }
  }
}

impl std::error::Error for ShapeError {}
