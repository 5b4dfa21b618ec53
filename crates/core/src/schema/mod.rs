mod field;
pub use field::{FieldOptions, FieldType, SchemaField};

pub mod options;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Names every record already exposes.
pub const RESERVED_FIELD_NAMES: [&str; 6] = [
  "id",
  "created",
  "updated",
  "collectionId",
  "collectionName",
  "expand",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
  #[error("field {name:?} has an empty id")]
  EmptyFieldId { name: String },
  #[error("duplicate field id {0:?}")]
  DuplicateFieldId(String),
  #[error("duplicate field name {0:?}")]
  DuplicateFieldName(String),
  #[error("invalid field name {0:?}")]
  InvalidFieldName(String),
  #[error("field name {0:?} is reserved")]
  ReservedFieldName(String),
  #[error("field {field:?}: {reason}")]
  InvalidOptions { field: String, reason: String },
  #[error("collection id must not be empty")]
  EmptyCollectionId,
  #[error("invalid collection name {0:?}")]
  InvalidCollectionName(String),
  #[error("collection name {0:?} is already taken")]
  DuplicateCollectionName(String),
}

/// `[A-Za-z0-9_]+`
pub fn is_valid_name(name: &str) -> bool {
  !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Ordered list of field definitions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema(Vec<SchemaField>);

impl Schema {
  pub const fn new(fields: Vec<SchemaField>) -> Self {
    Self(fields)
  }

  pub fn fields(&self) -> &[SchemaField] {
    &self.0
  }

  pub fn get_field_by_id(&self, id: &str) -> Option<&SchemaField> {
    self.0.iter().find(|f| f.id == id)
  }

  pub fn get_field_by_name(&self, name: &str) -> Option<&SchemaField> {
    self.0.iter().find(|f| f.name.eq_ignore_ascii_case(name))
  }

  /// Append `field`, or replace in place the field that already has its id.
  pub fn add_field(&mut self, field: SchemaField) {
    match self.0.iter_mut().find(|f| f.id == field.id) {
      Some(existing) => *existing = field,
      None => self.0.push(field),
    }
  }

  /// Remove the field with `id`. Absent ids are ignored.
  pub fn remove_field(&mut self, id: &str) -> Option<SchemaField> {
    let index = self.0.iter().position(|f| f.id == id)?;
    Some(self.0.remove(index))
  }

  pub fn validate(&self) -> Result<(), SchemaError> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();

    for field in &self.0 {
      if field.id.is_empty() {
        return Err(SchemaError::EmptyFieldId {
          name: field.name.clone(),
        });
      }
      if !ids.insert(field.id.as_str()) {
        return Err(SchemaError::DuplicateFieldId(field.id.clone()));
      }
      if !is_valid_name(&field.name) {
        return Err(SchemaError::InvalidFieldName(field.name.clone()));
      }
      if RESERVED_FIELD_NAMES
        .iter()
        .any(|r| r.eq_ignore_ascii_case(&field.name))
      {
        return Err(SchemaError::ReservedFieldName(field.name.clone()));
      }
      if !names.insert(field.name.to_ascii_lowercase()) {
        return Err(SchemaError::DuplicateFieldName(field.name.clone()));
      }
      field
        .options
        .validate()
        .map_err(|reason| SchemaError::InvalidOptions {
          field: field.name.clone(),
          reason,
        })?;
    }

    Ok(())
  }
}
