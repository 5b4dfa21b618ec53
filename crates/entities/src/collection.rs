use sea_orm::entity::prelude::*;

/// Stored collection definition. `schema` holds the ordered field array.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "_collections")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: String,
  #[sea_orm(unique)]
  pub name: String,
  /// `base`, `auth` or `view`.
  pub r#type: String,
  pub system: bool,
  pub schema: Json,
  pub created: DateTimeUtc,
  pub updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
