use sea_orm_migration::{
  prelude::*,
  schema::{boolean, json, string, string_uniq, timestamp_with_time_zone},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Collections::Table)
          .if_not_exists()
          .col(string(Collections::Id).primary_key())
          .col(string_uniq(Collections::Name))
          .col(string(Collections::Type).default("base"))
          .col(boolean(Collections::System).default(false))
          .col(json(Collections::Schema))
          .col(timestamp_with_time_zone(Collections::Created))
          .col(timestamp_with_time_zone(Collections::Updated))
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Collections::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum Collections {
  #[iden = "_collections"]
  Table,
  Id,
  Name,
  // base | auth | view
  Type,
  System,
  // ordered field definitions
  Schema,
  Created,
  Updated,
}
