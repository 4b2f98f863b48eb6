/* packages/core/rust/src/country.rs */

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Shape;
use crate::errors::ShapeError;

static ALPHA3: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z]{3}$").expect("alpha3 regex"));

/// A country record as the views consume it. Deserializing goes through
/// [`Country::from_value`], so serde and the boundary check accept the same data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct Country {
  pub alpha3_code: String,
  pub name: String,
  /// URL or asset path of the flag image.
  pub flag: String,
  pub population: u32,
  pub region: String,
  /// Empty for entities without a capital.
  pub capital: String,
}

impl Country {
  /// Boundary check for data arriving from outside. Every field must be
  /// present with the right type; unknown fields are ignored.
  pub fn from_value(value: &Value) -> Result<Self, ShapeError> {
    let Some(obj) = value.as_object() else {
      return Err(ShapeError::wrong_type("", "object"));
    };

    let alpha3_code = string_field(obj, "alpha3Code")?;
    if !ALPHA3.is_match(&alpha3_code) {
      return Err(ShapeError::invalid_value("alpha3Code", "expected three ASCII letters"));
    }

    Ok(Self {
      alpha3_code,
      name: string_field(obj, "name")?,
      flag: string_field(obj, "flag")?,
      population: population_field(obj)?,
      region: string_field(obj, "region")?,
      capital: string_field(obj, "capital")?,
    })
  }
}

impl TryFrom<Value> for Country {
  type Error = ShapeError;

  fn try_from(value: Value) -> Result<Self, Self::Error> {
    Self::from_value(&value)
  }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Result<String, ShapeError> {
  match obj.get(key) {
    None => Err(ShapeError::missing_field(key)),
    Some(Value::String(s)) => Ok(s.clone()),
    Some(_) => Err(ShapeError::wrong_type(key, "string")),
  }
}

fn population_field(obj: &Map<String, Value>) -> Result<u32, ShapeError> {
  let value = obj.get("population").ok_or_else(|| ShapeError::missing_field("population"))?;
  let n = value
    .as_u64()
    .ok_or_else(|| ShapeError::wrong_type("population", "non-negative integer"))?;
  u32::try_from(n)
    .map_err(|_| ShapeError::invalid_value("population", format!("{n} exceeds {}", u32::MAX)))
}

impl Shape for Country {
  fn jtd_schema() -> Value {
    serde_json::json!({
      "properties": {
        "alpha3Code": String::jtd_schema(),
        "name": String::jtd_schema(),
        "flag": String::jtd_schema(),
        "population": u32::jtd_schema(),
        "region": String::jtd_schema(),
        "capital": String::jtd_schema(),
      },
      "additionalProperties": true,
    })
  }
}

/// Validate a JSON array of country records, failing on the first bad entry.
pub fn parse_countries(value: &Value) -> Result<Vec<Country>, ShapeError> {
  let Some(items) = value.as_array() else {
    return Err(ShapeError::wrong_type("", "array"));
  };
  items
    .iter()
    .enumerate()
    .map(|(i, item)| {
      Country::from_value(item).map_err(|err| {
        let err = err.at(&format!("[{i}]"));
        tracing::warn!(path = err.path(), code = err.code(), "rejected country record");
        err
      })
    })
    .collect()
}

/// Countries keyed by alpha-3 code. Codes are unique and looked up case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct CountryIndex {
  countries: Vec<Country>,
  by_code: HashMap<String, usize>,
}

impl CountryIndex {
  pub fn new(countries: Vec<Country>) -> Result<Self, ShapeError> {
    let mut by_code = HashMap::with_capacity(countries.len());
    for (i, country) in countries.iter().enumerate() {
      let key = country.alpha3_code.to_ascii_uppercase();
      if by_code.insert(key, i).is_some() {
        return Err(ShapeError::duplicate_code(format!("[{i}].alpha3Code"), &country.alpha3_code));
      }
    }
    Ok(Self { countries, by_code })
  }

  pub fn get(&self, code: &str) -> Option<&Country> {
    self.by_code.get(&code.to_ascii_uppercase()).map(|&i| &self.countries[i])
  }

  pub fn iter(&self) -> impl Iterator<Item = &Country> {
    self.countries.iter()
  }

  pub fn len(&self) -> usize {
    self.countries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.countries.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::errors::{DUPLICATE_CODE, INVALID_VALUE, MISSING_FIELD, WRONG_TYPE};

  fn usa() -> Value {
    json!({
      "alpha3Code": "USA",
      "name": "United States",
      "flag": "https://flagcdn.com/us.svg",
      "population": 331_000_000,
      "capital": "Washington, D.C.",
      "region": "Americas",
    })
  }

  fn without(mut value: Value, key: &str) -> Value {
    value.as_object_mut().unwrap().remove(key);
    value
  }

  fn with(mut value: Value, key: &str, v: Value) -> Value {
    value.as_object_mut().unwrap().insert(key.to_string(), v);
    value
  }

  #[test]
  fn valid_record_satisfies_shape() {
    let country = Country::from_value(&usa()).unwrap();
    assert_eq!(country.alpha3_code, "USA");
    assert_eq!(country.name, "United States");
    assert_eq!(country.population, 331_000_000);
    assert_eq!(country.capital, "Washington, D.C.");
    assert_eq!(country.region, "Americas");
  }

  #[test]
  fn missing_capital_fails() {
    let err = Country::from_value(&without(usa(), "capital")).unwrap_err();
    assert_eq!(err.code(), MISSING_FIELD);
    assert_eq!(err.path(), "capital");
  }

  #[test]
  fn every_field_is_required() {
    for key in ["alpha3Code", "name", "flag", "population", "region", "capital"] {
      let err = Country::from_value(&without(usa(), key)).unwrap_err();
      assert_eq!((err.code(), err.path()), (MISSING_FIELD, key));
    }
  }

  #[test]
  fn empty_capital_is_allowed() {
    let country = Country::from_value(&with(usa(), "capital", json!(""))).unwrap();
    assert!(country.capital.is_empty());
  }

  #[test]
  fn wrong_types_rejected() {
    let err = Country::from_value(&with(usa(), "name", json!(42))).unwrap_err();
    assert_eq!((err.code(), err.path()), (WRONG_TYPE, "name"));
    let err = Country::from_value(&with(usa(), "capital", Value::Null)).unwrap_err();
    assert_eq!(err.code(), WRONG_TYPE);
    let err = Country::from_value(&with(usa(), "population", json!("331000000"))).unwrap_err();
    assert_eq!(err.code(), WRONG_TYPE);
  }

  #[test]
  fn population_must_be_non_negative_integer() {
    for bad in [json!(-1), json!(1.5)] {
      let err = Country::from_value(&with(usa(), "population", bad)).unwrap_err();
      assert_eq!((err.code(), err.path()), (WRONG_TYPE, "population"));
    }
    let too_many = with(usa(), "population", json!(5_000_000_000_u64));
    let err = Country::from_value(&too_many).unwrap_err();
    assert_eq!(err.code(), INVALID_VALUE);
    assert_eq!(Country::from_value(&with(usa(), "population", json!(0))).unwrap().population, 0);
  }

  #[test]
  fn alpha3_code_format() {
    for bad in ["US", "USAA", "U1A", ""] {
      let err = Country::from_value(&with(usa(), "alpha3Code", json!(bad))).unwrap_err();
      assert_eq!(err.code(), INVALID_VALUE, "{bad:?}");
    }
  }

  #[test]
  fn serde_applies_boundary_check() {
    let short_code = with(usa(), "alpha3Code", json!("U1"));
    assert!(Country::from_value(&short_code).is_err());
    let err = serde_json::from_value::<Country>(short_code).unwrap_err();
    assert!(err.to_string().contains("INVALID_VALUE: alpha3Code"));

    let no_capital = without(usa(), "capital").to_string();
    let err = serde_json::from_str::<Country>(&no_capital).unwrap_err();
    assert!(err.to_string().contains("MISSING_FIELD: capital"));
  }

  #[test]
  fn non_object_rejected() {
    let err = Country::from_value(&json!(["USA"])).unwrap_err();
    assert_eq!(err.code(), WRONG_TYPE);
  }

  #[test]
  fn extra_fields_ignored() {
    let value = with(usa(), "nativeName", json!("United States"));
    assert!(Country::from_value(&value).is_ok());
  }

  #[test]
  fn serde_uses_camel_case_names() {
    let country = Country::from_value(&usa()).unwrap();
    let value = serde_json::to_value(&country).unwrap();
    assert_eq!(value["alpha3Code"], "USA");
    let back: Country = serde_json::from_value(usa()).unwrap();
    assert_eq!(back, country);
  }

  #[test]
  fn parse_countries_reports_index() {
    let list = json!([usa(), without(usa(), "region")]);
    let err = parse_countries(&list).unwrap_err();
    assert_eq!(err.path(), "[1].region");
    assert!(parse_countries(&json!({})).is_err());
    assert_eq!(parse_countries(&json!([usa()])).unwrap().len(), 1);
  }

  #[test]
  fn index_lookup_is_case_insensitive() {
    let index = CountryIndex::new(vec![Country::from_value(&usa()).unwrap()]).unwrap();
    assert_eq!(index.get("usa").unwrap().name, "United States");
    assert!(index.get("fra").is_none());
    assert_eq!(index.len(), 1);
    assert_eq!(index.iter().count(), 1);
  }

  #[test]
  fn index_rejects_duplicate_codes() {
    let a = Country::from_value(&usa()).unwrap();
    let mut b = a.clone();
    b.alpha3_code = "usa".into();
    let err = CountryIndex::new(vec![a, b]).unwrap_err();
    assert_eq!((err.code(), err.path()), (DUPLICATE_CODE, "[1].alpha3Code"));
  }

  #[test]
  fn schema_lists_all_fields() {
    let schema = Country::jtd_schema();
    let props = schema["properties"].as_object().unwrap();
    assert_eq!(props.len(), 6);
    assert_eq!(props["population"], json!({"type": "uint32"}));
    assert_eq!(props["capital"], json!({"type": "string"}));
  }
}
