/* packages/core/rust/src/route/pattern.rs */

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::RouteError;

static PARAM_NAME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("param name regex"));

// Custom param regexes, repeatable and optional params are not part of the pattern language.
static STATIC_SEGMENT: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^:*?+()]+$").expect("static segment regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  Static(String),
  Param(String),
}

/// Compiled form of a route path such as `/:country`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
  segments: Vec<Segment>,
}

impl RoutePattern {
  pub fn parse(path: &str) -> Result<Self, RouteError> {
    if path.is_empty() {
      return Err(RouteError::invalid_pattern(path, "path must not be empty"));
    }
    if !path.starts_with('/') {
      return Err(RouteError::invalid_pattern(path, "path must start with '/'"));
    }
    if path.contains("//") {
      return Err(RouteError::invalid_pattern(path, "empty segment"));
    }

    let mut segments = Vec::new();
    for seg in split_path(path) {
      if seg.is_empty() {
        return Err(RouteError::invalid_pattern(path, "empty segment"));
      }
      if let Some(name) = seg.strip_prefix(':') {
        if !PARAM_NAME.is_match(name) {
          return Err(RouteError::invalid_pattern(path, format!("invalid param name '{name}'")));
        }
        if segments.iter().any(|s| matches!(s, Segment::Param(p) if p == name)) {
          return Err(RouteError::invalid_pattern(path, format!("param '{name}' is repeated")));
        }
        segments.push(Segment::Param(name.to_string()));
      } else if STATIC_SEGMENT.is_match(seg) {
        segments.push(Segment::Static(seg.to_string()));
      } else {
        return Err(RouteError::invalid_pattern(path, format!("unsupported segment '{seg}'")));
      }
    }
    Ok(Self { segments })
  }

  pub fn segments(&self) -> &[Segment] {
    &self.segments
  }

  pub fn param_names(&self) -> impl Iterator<Item = &str> {
    self.segments.iter().filter_map(|s| match s {
      Segment::Param(name) => Some(name.as_str()),
      Segment::Static(_) => None,
    })
  }

  /// Match already-split URL segments. Static segments compare ASCII
  /// case-insensitively; params must be non-empty and are percent-decoded.
  pub fn match_segments(&self, url_segments: &[&str]) -> Option<BTreeMap<String, String>> {
    if url_segments.len() != self.segments.len() {
      return None;
    }
    let mut params = BTreeMap::new();
    for (seg, actual) in self.segments.iter().zip(url_segments) {
      match seg {
        Segment::Static(expected) => {
          if !expected.eq_ignore_ascii_case(actual) {
            return None;
          }
        }
        Segment::Param(name) => {
          if actual.is_empty() {
            return None;
          }
          let value = urlencoding::decode(actual)
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| (*actual).to_string());
          params.insert(name.clone(), value);
        }
      }
    }
    Some(params)
  }

  /// True when every URL accepted by `later` is also accepted by `self`.
  pub fn shadows(&self, later: &RoutePattern) -> bool {
    self.segments.len() == later.segments.len()
      && self.segments.iter().zip(&later.segments).all(|pair| match pair {
        (Segment::Param(_), _) => true,
        (Segment::Static(a), Segment::Static(b)) => a.eq_ignore_ascii_case(b),
        (Segment::Static(_), Segment::Param(_)) => false,
      })
  }

  /// Fill params into the pattern. Returns the name of the first missing param on failure.
  pub fn render<'a>(&'a self, params: &BTreeMap<String, String>) -> Result<String, &'a str> {
    if self.segments.is_empty() {
      return Ok("/".to_string());
    }
    let mut out = String::new();
    for seg in &self.segments {
      out.push('/');
      match seg {
        Segment::Static(s) => out.push_str(s),
        Segment::Param(name) => match params.get(name) {
          Some(value) if !value.is_empty() => out.push_str(&urlencoding::encode(value)),
          _ => return Err(name.as_str()),
        },
      }
    }
    Ok(out)
  }
}

impl fmt::Display for RoutePattern {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.segments.is_empty() {
      return f.write_str("/");
    }
    for seg in &self.segments {
      match seg {
        Segment::Static(s) => write!(f, "/{s}")?,
        Segment::Param(name) => write!(f, "/:{name}")?,
      }
    }
    Ok(())
  }
}

/// Split a path into segments, ignoring one leading and one trailing slash.
/// `/` and the empty string yield no segments.
pub fn split_path(path: &str) -> Vec<&str> {
  let path = path.strip_prefix('/').unwrap_or(path);
  let path = path.strip_suffix('/').unwrap_or(path);
  if path.is_empty() { Vec::new() } else { path.split('/').collect() }
}
