//! Option keys a struct does not model land in its `extra` map and are written back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextOptions {
  pub min: Option<u32>,
  pub max: Option<u32>,
  pub pattern: String,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberOptions {
  /// Kept as written (`90` stays `90`, not `90.0`).
  pub min: Option<Number>,
  pub max: Option<Number>,
  pub no_decimal: bool,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolOptions {
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// Shared by `email` and `url` fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomainOptions {
  pub except_domains: Vec<String>,
  pub only_domains: Vec<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorOptions {
  pub convert_urls: bool,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateOptions {
  pub min: String,
  pub max: String,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectOptions {
  pub max_select: u32,
  pub values: Vec<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JsonOptions {
  pub max_size: u64,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileOptions {
  pub mime_types: Vec<String>,
  /// Thumbnail sizes in `WxH[t|b|f]` form.
  pub thumbs: Vec<String>,
  pub max_select: u32,
  /// Bytes.
  pub max_size: u64,
  pub protected: bool,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelationOptions {
  pub collection_id: String,
  pub cascade_delete: bool,
  pub min_select: Option<u32>,
  pub max_select: Option<u32>,
  pub display_fields: Option<Vec<String>>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

fn check_range<T: PartialOrd>(min: Option<T>, max: Option<T>) -> Result<(), String> {
  match (min, max) {
    (Some(min), Some(max)) if min > max => Err("min must not be greater than max".into()),
    _ => Ok(()),
  }
}

fn is_valid_thumb(spec: &str) -> bool {
  let size = spec
    .strip_suffix(|c: char| matches!(c, 't' | 'b' | 'f'))
    .unwrap_or(spec);
  let Some((width, height)) = size.split_once('x') else {
    return false;
  };
  let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
  let is_zero = |s: &str| s.bytes().all(|b| b == b'0');

  is_number(width) && is_number(height) && !(is_zero(width) && is_zero(height))
}

impl TextOptions {
  pub fn validate(&self) -> Result<(), String> {
    check_range(self.min, self.max)
  }
}

impl NumberOptions {
  pub fn validate(&self) -> Result<(), String> {
    check_range(
      self.min.as_ref().and_then(Number::as_f64),
      self.max.as_ref().and_then(Number::as_f64),
    )
  }
}

impl DomainOptions {
  pub fn validate(&self) -> Result<(), String> {
    if !self.except_domains.is_empty() && !self.only_domains.is_empty() {
      return Err("exceptDomains and onlyDomains are mutually exclusive".into());
    }
    Ok(())
  }
}

impl SelectOptions {
  pub fn validate(&self) -> Result<(), String> {
    if self.max_select < 1 {
      return Err("maxSelect must be at least 1".into());
    }
    if self.values.is_empty() {
      return Err("values must not be empty".into());
    }
    Ok(())
  }
}

impl JsonOptions {
  pub fn validate(&self) -> Result<(), String> {
    if self.max_size < 1 {
      return Err("maxSize must be at least 1".into());
    }
    Ok(())
  }
}

impl FileOptions {
  pub fn validate(&self) -> Result<(), String> {
    if self.max_select < 1 {
      return Err("maxSelect must be at least 1".into());
    }
    if self.max_size < 1 {
      return Err("maxSize must be at least 1".into());
    }
    if let Some(thumb) = self.thumbs.iter().find(|t| !is_valid_thumb(t)) {
      return Err(format!("invalid thumb size {thumb:?}"));
    }
    Ok(())
  }
}

impl RelationOptions {
  pub fn validate(&self) -> Result<(), String> {
    if self.collection_id.is_empty() {
      return Err("collectionId is required".into());
    }
    check_range(self.min_select, self.max_select)
  }
}
