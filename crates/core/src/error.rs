use std::error::Error as StdError;

use sea_orm::DbErr;

use crate::schema::SchemaError;

/// Failures of collection lookups and saves.
///
/// `Validation`, `Encode` and `Database` are all rejected saves.
#[derive(Debug, thiserror::Error)]
pub enum DaoError {
  #[error("collection {0:?} not found")]
  NotFound(String),
  #[error("collection {collection:?} has a malformed stored definition")]
  Decode {
    collection: String,
    #[source]
    source: Box<dyn StdError + Send + Sync>,
  },
  #[error("failed to encode schema of collection {collection:?}")]
  Encode {
    collection: String,
    #[source]
    source: serde_json::Error,
  },
  #[error("invalid collection {collection:?}: {source}")]
  Validation {
    collection: String,
    #[source]
    source: SchemaError,
  },
  #[error(transparent)]
  Database(#[from] DbErr),
}

impl DaoError {
  pub const fn is_not_found(&self) -> bool {
    matches!(self, Self::NotFound(_))
  }
}

impl From<DaoError> for DbErr {
  fn from(err: DaoError) -> Self {
    match err {
      DaoError::NotFound(_) => Self::RecordNotFound(err.to_string()),
      DaoError::Database(err) => err,
      err => Self::Migration(err.to_string()),
    }
  }
}
