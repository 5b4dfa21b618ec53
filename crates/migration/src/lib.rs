pub use sea_orm_migration::*;

pub mod m20240101_000001_create_collections_table;
pub mod m20240101_000002_create_waypoints_collection;
pub mod m20240320_154110_add_photo_to_waypoints;

/// Id of the `waypoints` collection.
pub const WAYPOINTS_COLLECTION_ID: &str = "goeo2ubp103rzp9";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20240101_000001_create_collections_table::Migration),
      Box::new(m20240101_000002_create_waypoints_collection::Migration),
      Box::new(m20240320_154110_add_photo_to_waypoints::Migration),
    ]
  }
}
