mod submessage;

use axum::{headers::{authorization::Bearer, Authorization}, TypedHeader};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::{entities::user, error::ApiError, utils::auth};

pub use submessage::{get_submessage_list, new_submessage};

#[derive(Debug, Serialize, Deserialize)]
pub struct Resp {
  pub code: i32,
  pub msg: String,
}

impl Resp {
  pub fn ok() -> Self {
    Self { code: 0, msg: String::new() }
  }
}

async fn caller(
  db: &DatabaseConnection,
  token: Option<TypedHeader<Authorization<Bearer>>>,
) -> Result<user::Model, ApiError> {
  let TypedHeader(token) = token
    .ok_or_else(|| ApiError::Unauthorized("Please login first!".to_string()))?;

  auth(db, token.token()).await
}
