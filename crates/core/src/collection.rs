use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use wanderer_entities::collection;

use crate::error::DaoError;
use crate::schema::{Schema, SchemaError, is_valid_name};

#[derive(
  Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CollectionType {
  #[default]
  Base,
  Auth,
  View,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collection {
  pub id: String,
  pub name: String,
  #[serde(rename = "type")]
  pub collection_type: CollectionType,
  pub system: bool,
  pub schema: Schema,
  /// `None` until the collection is first saved.
  pub created: Option<DateTime<Utc>>,
  pub updated: Option<DateTime<Utc>>,
}

impl Collection {
  pub fn new(id: impl Into<String>, name: impl Into<String>, schema: Schema) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      collection_type: CollectionType::Base,
      system: false,
      schema,
      created: None,
      updated: None,
    }
  }

  pub fn validate(&self) -> Result<(), SchemaError> {
    if self.id.is_empty() {
      return Err(SchemaError::EmptyCollectionId);
    }
    if !is_valid_name(&self.name) {
      return Err(SchemaError::InvalidCollectionName(self.name.clone()));
    }
    self.schema.validate()
  }

  pub fn from_model(model: collection::Model) -> Result<Self, DaoError> {
    let decode_error = |source: Box<dyn std::error::Error + Send + Sync>| DaoError::Decode {
      collection: model.id.clone(),
      source,
    };

    let collection_type = model
      .r#type
      .parse::<CollectionType>()
      .map_err(|err| decode_error(err.into()))?;
    let schema = serde_json::from_value::<Schema>(model.schema.clone())
      .map_err(|err| decode_error(err.into()))?;

    Ok(Self {
      id: model.id,
      name: model.name,
      collection_type,
      system: model.system,
      schema,
      created: Some(model.created),
      updated: Some(model.updated),
    })
  }

  /// Every column set, with `created`/`updated` filled in by the caller.
  pub(crate) fn to_active_model(
    &self,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
  ) -> Result<collection::ActiveModel, DaoError> {
    let schema = serde_json::to_value(&self.schema).map_err(|source| DaoError::Encode {
      collection: self.id.clone(),
      source,
    })?;

    Ok(collection::ActiveModel {
      id: Set(self.id.clone()),
      name: Set(self.name.clone()),
      r#type: Set(self.collection_type.to_string()),
      system: Set(self.system),
      schema: Set(schema),
      created: Set(created),
      updated: Set(updated),
    })
  }
}
