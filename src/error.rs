//! Request-scoped failures and their HTTP mapping.
//!
//! Handlers return `Result<_, ApiError>`; the `IntoResponse` impl turns the
//! error into the same `{ code, msg }` body a successful call returns, with
//! a status code matching the failure kind. Storage errors are logged in
//! full and reported to the caller as a generic message.

use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{routers::Resp, widget::ValidationError};

#[derive(Debug, Error)]
pub enum ApiError {
  /// No usable session behind the request.
  #[error("{0}")]
  Unauthorized(String),

  /// The request body could not be decoded.
  #[error("{0}")]
  BadRequest(String),

  /// The message does not exist or the caller cannot see it. Both cases
  /// share one message so that message ids cannot be probed.
  #[error("Invalid message(s)")]
  InvalidMessage,

  #[error("You cannot attach a submessage to this message.")]
  SubmessageForbidden,

  #[error("Invalid json for submessage")]
  InvalidJson,

  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("database error: {0}")]
  Database(#[from] DbErr),
}

impl ApiError {
  pub fn code(&self) -> i32 {
    match self {
      ApiError::Unauthorized(_) => 1,
      ApiError::BadRequest(_) => 2,
      ApiError::InvalidMessage => 3,
      ApiError::SubmessageForbidden => 4,
      ApiError::InvalidJson => 5,
      ApiError::Validation(_) => 6,
      ApiError::Database(_) => 7,
    }
  }

  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
      ApiError::InvalidMessage => StatusCode::NOT_FOUND,
      ApiError::SubmessageForbidden => StatusCode::FORBIDDEN,
      ApiError::BadRequest(_)
      | ApiError::InvalidJson
      | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let msg = match &self {
      ApiError::Database(err) => {
        error!("{err}");
        "Error accessing database!".to_string()
      },
      err => {
        warn!("{err}");
        err.to_string()
      },
    };

    (self.status(), Json(Resp { code: self.code(), msg })).into_response()
  }
}
