use sea_orm_migration::prelude::*;
use wanderer_core::{
  Collection, Dao, Schema, SchemaField,
  schema::options::{NumberOptions, TextOptions},
};

use crate::WAYPOINTS_COLLECTION_ID;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn waypoints() -> Collection {
  Collection::new(
    WAYPOINTS_COLLECTION_ID,
    "waypoints",
    Schema::new(vec![
      SchemaField::new("dpaswvgo", "name", TextOptions::default())
        .required(true)
        .presentable(true),
      SchemaField::new("xhbrgycs", "description", TextOptions::default()),
      SchemaField::new("khjaaacs", "lat", NumberOptions::default()).required(true),
      SchemaField::new("vqaqvcia", "lon", NumberOptions::default()).required(true),
      SchemaField::new("ijpfzwbf", "icon", TextOptions::default()),
    ]),
  )
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    let dao = Dao::new(manager.get_connection());
    dao.save_collection(&mut waypoints()).await?;

    Ok(())
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    let dao = Dao::new(manager.get_connection());
    let collection = dao
      .find_collection_by_name_or_id(WAYPOINTS_COLLECTION_ID)
      .await?;
    dao.delete_collection(&collection).await?;

    Ok(())
  }
}
