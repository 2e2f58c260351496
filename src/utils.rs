use chrono::Local;
use sea_orm::{
  sea_query::Expr,
  ColumnTrait,
  ConnectionTrait,
  DbErr,
  EntityTrait,
  QueryFilter,
};

use crate::{
  entities::{prelude::*, message, user},
  error::ApiError,
};

pub async fn auth<C: ConnectionTrait>(
  db: &C,
  token: &str,
) -> Result<user::Model, ApiError> {
  let session = Session::find_by_id(token.to_string())
    .one(db).await?
    .ok_or_else(|| ApiError::Unauthorized("Please login first!".to_string()))?;

  if session.expired < Local::now() {
    return Err(ApiError::Unauthorized("Login status expired!".to_string()));
  }

  let user = User::find_by_id(session.user)
    .one(db).await?
    .ok_or_else(|| ApiError::Unauthorized("User not found!".to_string()))?;

  match user.status {
    user::STATUS_ACTIVE => Ok(user),
    user::STATUS_BANNED => Err(ApiError::Unauthorized("The user has been banned!".to_string())),
    user::STATUS_DEACTIVATED => {
      Err(ApiError::Unauthorized("The user has been deactivated!".to_string()))
    },
    status => Err(ApiError::Unauthorized(format!("Unknown user status `{status}`!"))),
  }
}

pub async fn user_in_room<C: ConnectionTrait>(
  db: &C,
  user: i32,
  room: i32,
) -> Result<bool, DbErr> {
  let member = Member::find_by_id((user, room))
    .one(db).await?;

  Ok(member.is_some())
}

/// Fetches a message the user may see.
///
/// Reading requires the message to be in the user's realm and the user to
/// be in its room, or to have sent it. Modifying additionally requires
/// current membership: a sender who left the room can no longer change
/// anything attached to the message.
///
/// With `lock_message`, the row stays exclusively locked until the
/// surrounding transaction ends.
pub async fn access_message<C: ConnectionTrait>(
  db: &C,
  user: &user::Model,
  message_id: i32,
  lock_message: bool,
  is_modifying_message: bool,
) -> Result<message::Model, ApiError> {
  if lock_message {
    lock_message_row(db, message_id).await?;
  }

  let message = Message::find_by_id(message_id)
    .one(db).await?
    .ok_or(ApiError::InvalidMessage)?;

  if message.realm != user.realm {
    return Err(ApiError::InvalidMessage);
  }

  if user_in_room(db, user.id, message.room).await? {
    return Ok(message);
  }

  if !is_modifying_message && message.sender == user.id {
    return Ok(message);
  }

  Err(ApiError::InvalidMessage)
}

// A no-op write takes the row lock on every backend. It must be the first
// statement of the transaction: SQLite grants its write lock up front this
// way instead of failing a later read-to-write upgrade.
async fn lock_message_row<C: ConnectionTrait>(
  db: &C,
  message_id: i32,
) -> Result<(), DbErr> {
  Message::update_many()
    .col_expr(message::Column::Id, Expr::col(message::Column::Id).into())
    .filter(message::Column::Id.eq(message_id))
    .exec(db).await?;

  Ok(())
}
