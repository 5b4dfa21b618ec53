use sea_orm_migration::prelude::*;
use tracing::info;
use wanderer_core::{SchemaField, alter_collection, schema::options::FileOptions};

use crate::WAYPOINTS_COLLECTION_ID;

pub const PHOTO_FIELD_ID: &str = "tfhs3juh";

/// 5 MiB
const PHOTO_MAX_SIZE: u64 = 5_242_880;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Optional single image attached to a waypoint.
pub fn photo_field() -> SchemaField {
  SchemaField::new(
    PHOTO_FIELD_ID,
    "photo",
    FileOptions {
      mime_types: [
        "image/jpeg",
        "image/png",
        "image/vnd.mozilla.apng",
        "image/webp",
        "image/svg+xml",
      ]
      .map(String::from)
      .into(),
      thumbs: Vec::new(),
      max_select: 1,
      max_size: PHOTO_MAX_SIZE,
      protected: false,
      ..Default::default()
    },
  )
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    alter_collection(
      manager.get_connection(),
      WAYPOINTS_COLLECTION_ID,
      |schema| schema.add_field(photo_field()),
    )
    .await?;
    info!(field = PHOTO_FIELD_ID, "added photo field to waypoints");

    Ok(())
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    alter_collection(manager.get_connection(), WAYPOINTS_COLLECTION_ID, |schema| {
      if schema.remove_field(PHOTO_FIELD_ID).is_none() {
        info!(field = PHOTO_FIELD_ID, "photo field already absent");
      }
    })
    .await?;

    Ok(())
  }
}
