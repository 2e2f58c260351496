mod config;
mod entities;
mod error;
mod routers;
mod submessage;
mod utils;
mod widget;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, routing::{get, post}, http::{self, Method}};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tower_http::cors::{CorsLayer, self};

use crate::config::Config;

#[macro_use]
extern crate log;

pub struct AppState {
  db: DatabaseConnection,
}

pub fn app(shared_state: Arc<AppState>) -> Router {
  Router::new()
    .route("/", get(|| async { "Hello, Chatoy!" }))
    .route("/submessage", post(routers::new_submessage))
    .route("/messages/:id/submessages", get(routers::get_submessage_list))
    .layer(
      CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(vec![Method::GET, Method::POST])
        .allow_headers(vec![
          http::header::CONTENT_TYPE,
          http::header::AUTHORIZATION,
        ]),
    )
    .with_state(shared_state)
}

#[tokio::main]
async fn main() -> Result<()> {
  let dotenv = dotenvy::dotenv();

  env_logger::init();

  if let Err(err) = dotenv {
    debug!("No .env file loaded: {err}");
  }

  let config = Config::from_env()?;

  let db = Database::connect(config.database_url.clone()).await
    .context("Error opening database!")?;

  info!("Database connected!");

  Migrator::up(&db, None).await
    .context("Error migrating database!")?;

  info!("Database migrated!");

  let shared_state = Arc::new(AppState { db });

  info!("Listening on {}", config.bind_addr);

  axum::Server::bind(&config.bind_addr)
    .serve(app(shared_state).into_make_service()).await
    .context("Server stopped unexpectedly!")?;

  Ok(())
}
