use std::sync::Arc;

use axum::{
  extract::{rejection::JsonRejection, Path, State},
  headers::{authorization::Bearer, Authorization},
  http::StatusCode,
  Json,
  TypedHeader,
};
use serde::Deserialize;

use crate::{
  AppState,
  entities::submessage,
  error::ApiError,
  submessage::{list_submessages, process_submessage},
};

use super::{caller, Resp};

#[derive(Deserialize)]
pub struct SubmessagePayload {
  message_id: i32,
  msg_type: String,
  content: String,
}

pub async fn new_submessage(
  State(state): State<Arc<AppState>>,
  token: Option<TypedHeader<Authorization<Bearer>>>,
  payload: Result<Json<SubmessagePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Resp>), ApiError> {
  info!("POST /submessage");

  let user = caller(&state.db, token).await?;

  let Json(payload) = payload
    .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

  process_submessage(
    &state.db,
    &user,
    payload.message_id,
    &payload.msg_type,
    &payload.content,
  ).await?;

  Ok((StatusCode::OK, Json(Resp::ok())))
}

pub async fn get_submessage_list(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i32>,
  token: Option<TypedHeader<Authorization<Bearer>>>,
) -> Result<Json<Vec<submessage::Model>>, ApiError> {
  info!("GET /messages/{id}/submessages");

  let user = caller(&state.db, token).await?;

  let submessages = list_submessages(&state.db, &user, id).await?;

  Ok(Json(submessages))
}
