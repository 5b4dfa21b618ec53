use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumString};

use super::options::{
  BoolOptions, DateOptions, DomainOptions, EditorOptions, FileOptions, JsonOptions, NumberOptions,
  RelationOptions, SelectOptions, TextOptions,
};

#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldType {
  Text,
  Number,
  Bool,
  Email,
  Url,
  Editor,
  Date,
  Select,
  Json,
  File,
  Relation,
}

/// Type-specific options. The variant decides the field's [`FieldType`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldOptions {
  Text(TextOptions),
  Number(NumberOptions),
  Bool(BoolOptions),
  Email(DomainOptions),
  Url(DomainOptions),
  Editor(EditorOptions),
  Date(DateOptions),
  Select(SelectOptions),
  Json(JsonOptions),
  File(FileOptions),
  Relation(RelationOptions),
}

impl FieldOptions {
  pub const fn field_type(&self) -> FieldType {
    match self {
      Self::Text(_) => FieldType::Text,
      Self::Number(_) => FieldType::Number,
      Self::Bool(_) => FieldType::Bool,
      Self::Email(_) => FieldType::Email,
      Self::Url(_) => FieldType::Url,
      Self::Editor(_) => FieldType::Editor,
      Self::Date(_) => FieldType::Date,
      Self::Select(_) => FieldType::Select,
      Self::Json(_) => FieldType::Json,
      Self::File(_) => FieldType::File,
      Self::Relation(_) => FieldType::Relation,
    }
  }

  pub fn validate(&self) -> Result<(), String> {
    match self {
      Self::Text(o) => o.validate(),
      Self::Number(o) => o.validate(),
      Self::Email(o) | Self::Url(o) => o.validate(),
      Self::Select(o) => o.validate(),
      Self::Json(o) => o.validate(),
      Self::File(o) => o.validate(),
      Self::Relation(o) => o.validate(),
      Self::Bool(_) | Self::Editor(_) | Self::Date(_) => Ok(()),
    }
  }

  fn decode(field_type: FieldType, options: Value) -> serde_json::Result<Self> {
    use serde_json::from_value;

    // Older definitions may store `null` for option-less types.
    let options = if options.is_null() {
      Value::Object(Map::new())
    } else {
      options
    };

    Ok(match field_type {
      FieldType::Text => Self::Text(from_value(options)?),
      FieldType::Number => Self::Number(from_value(options)?),
      FieldType::Bool => Self::Bool(from_value(options)?),
      FieldType::Email => Self::Email(from_value(options)?),
      FieldType::Url => Self::Url(from_value(options)?),
      FieldType::Editor => Self::Editor(from_value(options)?),
      FieldType::Date => Self::Date(from_value(options)?),
      FieldType::Select => Self::Select(from_value(options)?),
      FieldType::Json => Self::Json(from_value(options)?),
      FieldType::File => Self::File(from_value(options)?),
      FieldType::Relation => Self::Relation(from_value(options)?),
    })
  }
}

macro_rules! impl_from_options {
  ($($variant:ident($options:ty)),* $(,)?) => {
    $(
      impl From<$options> for FieldOptions {
        fn from(options: $options) -> Self {
          Self::$variant(options)
        }
      }
    )*
  };
}

impl_from_options!(
  Text(TextOptions),
  Number(NumberOptions),
  Bool(BoolOptions),
  Editor(EditorOptions),
  Date(DateOptions),
  Select(SelectOptions),
  Json(JsonOptions),
  File(FileOptions),
  Relation(RelationOptions),
);

/// One field of a collection schema.
///
/// Serializes as `{system, id, name, type, required, presentable, unique, options}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawSchemaField")]
pub struct SchemaField {
  pub system: bool,
  pub id: String,
  pub name: String,
  pub required: bool,
  pub presentable: bool,
  pub unique: bool,
  pub options: FieldOptions,
  /// Top-level keys this version does not model, written back unchanged.
  pub extra: Map<String, Value>,
}

impl SchemaField {
  pub fn new(
    id: impl Into<String>,
    name: impl Into<String>,
    options: impl Into<FieldOptions>,
  ) -> Self {
    Self {
      system: false,
      id: id.into(),
      name: name.into(),
      required: false,
      presentable: false,
      unique: false,
      options: options.into(),
      extra: Map::new(),
    }
  }

  #[must_use]
  pub fn required(mut self, required: bool) -> Self {
    self.required = required;
    self
  }

  #[must_use]
  pub fn presentable(mut self, presentable: bool) -> Self {
    self.presentable = presentable;
    self
  }

  pub const fn field_type(&self) -> FieldType {
    self.options.field_type()
  }
}

#[derive(Deserialize)]
struct RawSchemaField {
  #[serde(default)]
  system: bool,
  id: String,
  name: String,
  #[serde(rename = "type")]
  field_type: FieldType,
  #[serde(default)]
  required: bool,
  #[serde(default)]
  presentable: bool,
  #[serde(default)]
  unique: bool,
  #[serde(default)]
  options: Value,
  #[serde(flatten)]
  extra: Map<String, Value>,
}

impl TryFrom<RawSchemaField> for SchemaField {
  type Error = serde_json::Error;

  fn try_from(raw: RawSchemaField) -> Result<Self, Self::Error> {
    Ok(Self {
      system: raw.system,
      id: raw.id,
      name: raw.name,
      required: raw.required,
      presentable: raw.presentable,
      unique: raw.unique,
      options: FieldOptions::decode(raw.field_type, raw.options)?,
      extra: raw.extra,
    })
  }
}

#[derive(Serialize)]
struct WireSchemaField<'a> {
  system: bool,
  id: &'a str,
  name: &'a str,
  #[serde(rename = "type")]
  field_type: FieldType,
  required: bool,
  presentable: bool,
  unique: bool,
  options: &'a FieldOptions,
  #[serde(flatten)]
  extra: &'a Map<String, Value>,
}

impl Serialize for SchemaField {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    WireSchemaField {
      system: self.system,
      id: &self.id,
      name: &self.name,
      field_type: self.field_type(),
      required: self.required,
      presentable: self.presentable,
      unique: self.unique,
      options: &self.options,
      extra: &self.extra,
    }
    .serialize(serializer)
  }
}
