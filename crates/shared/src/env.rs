use std::env;

use anyhow::Context;

use crate::AppError;

pub struct AppEnv {
  pub database_url: String,
}

impl AppEnv {
  /// Read configuration from the process environment, loading `.env` first if present.
  pub fn from_env() -> Result<Self, AppError> {
    dotenvy::dotenv().ok();

    Ok(Self {
      database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
    })
  }
}

