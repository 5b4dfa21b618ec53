use sea_orm::Database;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wanderer_core::Dao;
use wanderer_migration::{Migrator, MigratorTrait, WAYPOINTS_COLLECTION_ID};
use wanderer_shared::{AppEnv, AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
          "{}=debug,wanderer_core=debug,wanderer_migration=debug",
          env!("CARGO_CRATE_NAME")
        )
        .into()
      }),
    )
    .with(tracing_subscriber::fmt::layer())
    .with(ErrorLayer::default())
    .init();

  let app_env = AppEnv::from_env()?;
  let db = Database::connect(app_env.database_url.as_str()).await?;

  // Apply all pending migrations
  // https://www.sea-ql.org/SeaORM/docs/migration/running-migration/#migrating-programmatically
  let pending = Migrator::get_pending_migrations(&db).await?.len();
  Migrator::up(&db, None).await?;
  info!(applied = pending, "migrations up to date");

  let waypoints = Dao::new(&db)
    .find_collection_by_name_or_id(WAYPOINTS_COLLECTION_ID)
    .await?;
  for field in waypoints.schema.fields() {
    info!(
      collection = %waypoints.name,
      id = %field.id,
      name = %field.name,
      field_type = %field.field_type(),
      required = field.required,
      "schema field"
    );
  }

  db.close().await?;

  Ok(())
}
