use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait};
use sea_orm_migration::{MigrationTrait, SchemaManager};
use wanderer_core::{
  Collection, Dao, DaoError, Schema, SchemaError, SchemaField, alter_collection,
  schema::options::{BoolOptions, TextOptions},
};
use wanderer_entities::collection;
use wanderer_migration::m20240101_000001_create_collections_table;

async fn connect() -> DatabaseConnection {
  let mut options = ConnectOptions::new("sqlite::memory:");
  options.max_connections(1).sqlx_logging(false);
  let db = Database::connect(options).await.unwrap();

  m20240101_000001_create_collections_table::Migration
    .up(&SchemaManager::new(&db))
    .await
    .unwrap();

  db
}

fn trails() -> Collection {
  Collection::new(
    "t8lrzq0vx2d1k7a",
    "trails",
    Schema::new(vec![
      SchemaField::new("n4me0001", "name", TextOptions::default()).required(true),
      SchemaField::new("pub10001", "public", BoolOptions::default()),
    ]),
  )
}

#[tokio::test]
async fn finds_by_id_or_name_ignoring_case() {
  let db = connect().await;
  let dao = Dao::new(&db);
  let mut trails = trails();
  dao.save_collection(&mut trails).await.unwrap();

  let by_id = dao
    .find_collection_by_name_or_id("t8lrzq0vx2d1k7a")
    .await
    .unwrap();
  let by_name = dao.find_collection_by_name_or_id("Trails").await.unwrap();

  assert_eq!(by_id.schema, trails.schema);
  assert_eq!(by_name.id, by_id.id);
  assert!(by_id.created.is_some());
}

#[tokio::test]
async fn missing_collection_is_not_found() {
  let db = connect().await;

  let err = Dao::new(&db)
    .find_collection_by_name_or_id("nope")
    .await
    .unwrap_err();

  assert!(err.is_not_found(), "{err}");
}

#[tokio::test]
async fn update_keeps_created_timestamp() {
  let db = connect().await;
  let dao = Dao::new(&db);
  dao.save_collection(&mut trails()).await.unwrap();
  let before = dao.find_collection_by_name_or_id("trails").await.unwrap();

  let after = alter_collection(&db, "trails", |schema| {
    schema.add_field(SchemaField::new("desc0001", "description", TextOptions::default()));
  })
  .await
  .unwrap();
  let stored = dao.find_collection_by_name_or_id("trails").await.unwrap();

  assert_eq!(stored.created, before.created);
  assert_eq!(stored.schema, after.schema);
  assert_eq!(stored.schema.fields().len(), 3);
  assert_eq!(collection::Entity::find().all(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_schema_is_not_written() {
  let db = connect().await;
  let dao = Dao::new(&db);

  let mut broken = trails();
  broken
    .schema
    .add_field(SchemaField::new("dup00001", "Name", TextOptions::default()));
  let err = dao.save_collection(&mut broken).await.unwrap_err();

  assert!(matches!(
    err,
    DaoError::Validation {
      source: SchemaError::DuplicateFieldName(ref name),
      ..
    } if name == "Name"
  ));
  assert!(collection::Entity::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_collection() {
  let db = connect().await;
  let dao = Dao::new(&db);
  let mut trails = trails();
  dao.save_collection(&mut trails).await.unwrap();

  dao.delete_collection(&trails).await.unwrap();

  assert!(
    dao
      .find_collection_by_name_or_id("trails")
      .await
      .unwrap_err()
      .is_not_found()
  );
  assert!(dao.delete_collection(&trails).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn names_are_unique_ignoring_case() {
  let db = connect().await;
  let dao = Dao::new(&db);
  dao.save_collection(&mut trails()).await.unwrap();

  let mut shouting = Collection::new("s8lrzq0vx2d1k7a", "TRAILS", Schema::default());
  let err = dao.save_collection(&mut shouting).await.unwrap_err();

  assert!(matches!(
    err,
    DaoError::Validation {
      source: SchemaError::DuplicateCollectionName(ref name),
      ..
    } if name == "TRAILS"
  ));
  assert_eq!(collection::Entity::find().all(&db).await.unwrap().len(), 1);

  // Renaming a collection to a different case of its own name is fine.
  let mut trails = dao.find_collection_by_name_or_id("trails").await.unwrap();
  trails.name = "Trails".into();
  dao.save_collection(&mut trails).await.unwrap();
  assert_eq!(
    dao.find_collection_by_name_or_id("TRAILS").await.unwrap().name,
    "Trails"
  );
}
