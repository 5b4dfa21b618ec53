use chrono::Utc;
use sea_orm::{
  ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
  prelude::Expr,
  sea_query::IntoCondition,
};
use tracing::{debug, info};
use wanderer_entities::collection;

use crate::collection::Collection;
use crate::error::DaoError;
use crate::schema::{Schema, SchemaError};

/// Collection access over any sea-orm connection, including the one a migration runner hands out.
pub struct Dao<'a, C: ConnectionTrait> {
  db: &'a C,
}

/// Collection names compare case-insensitively.
fn name_matches(name: &str) -> impl IntoCondition {
  Expr::cust_with_values("LOWER(name) = LOWER(?)", [name])
}

impl<'a, C: ConnectionTrait> Dao<'a, C> {
  pub const fn new(db: &'a C) -> Self {
    Self { db }
  }

  /// Look up by id first, then by name ignoring case.
  pub async fn find_collection_by_name_or_id(
    &self,
    id_or_name: &str,
  ) -> Result<Collection, DaoError> {
    let model = match collection::Entity::find_by_id(id_or_name)
      .one(self.db)
      .await?
    {
      Some(model) => Some(model),
      None => {
        collection::Entity::find()
          .filter(name_matches(id_or_name))
          .one(self.db)
          .await?
      }
    };

    let model = model.ok_or_else(|| DaoError::NotFound(id_or_name.to_owned()))?;
    debug!(id = %model.id, name = %model.name, "found collection");

    Collection::from_model(model)
  }

  /// Validate and upsert `collection`, stamping its timestamps.
  ///
  /// Nothing is written when validation fails.
  pub async fn save_collection(&self, collection: &mut Collection) -> Result<(), DaoError> {
    collection
      .validate()
      .map_err(|source| DaoError::Validation {
        collection: collection.name.clone(),
        source,
      })?;

    let name_taken = collection::Entity::find()
      .filter(name_matches(&collection.name))
      .filter(collection::Column::Id.ne(collection.id.as_str()))
      .one(self.db)
      .await?
      .is_some();
    if name_taken {
      return Err(DaoError::Validation {
        collection: collection.name.clone(),
        source: SchemaError::DuplicateCollectionName(collection.name.clone()),
      });
    }

    let existing = collection::Entity::find_by_id(collection.id.as_str())
      .one(self.db)
      .await?;
    let now = Utc::now();
    let created = existing.as_ref().map_or(now, |model| model.created);
    let active = collection.to_active_model(created, now)?;

    if existing.is_some() {
      active.update(self.db).await?;
    } else {
      active.insert(self.db).await?;
    }

    collection.created = Some(created);
    collection.updated = Some(now);
    info!(
      id = %collection.id,
      name = %collection.name,
      fields = collection.schema.fields().len(),
      "saved collection"
    );

    Ok(())
  }

  pub async fn delete_collection(&self, collection: &Collection) -> Result<(), DaoError> {
    let result = collection::Entity::delete_by_id(collection.id.as_str())
      .exec(self.db)
      .await?;

    if result.rows_affected == 0 {
      return Err(DaoError::NotFound(collection.id.clone()));
    }
    info!(id = %collection.id, name = %collection.name, "deleted collection");

    Ok(())
  }
}

/// Find a collection, apply `alter` to its schema, then save it.
///
/// Returns the saved collection. A failed save leaves the stored collection untouched.
pub async fn alter_collection<C, F>(
  db: &C,
  id_or_name: &str,
  alter: F,
) -> Result<Collection, DaoError>
where
  C: ConnectionTrait,
  F: FnOnce(&mut Schema),
{
  let dao = Dao::new(db);
  let mut collection = dao.find_collection_by_name_or_id(id_or_name).await?;

  alter(&mut collection.schema);
  dao.save_collection(&mut collection).await?;

  Ok(collection)
}
