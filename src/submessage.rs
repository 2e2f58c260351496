//! Appending to a message's widget log.

use sea_orm::{
  ActiveModelTrait,
  ActiveValue,
  ColumnTrait,
  ConnectionTrait,
  DatabaseConnection,
  DbErr,
  EntityTrait,
  QueryFilter,
  QueryOrder,
  TransactionTrait,
};
use serde_json::Value;

use crate::{
  entities::{prelude::*, submessage, user},
  error::ApiError,
  utils::access_message,
  widget::get_widget_type,
};

/// Validates `content` against the message's widget and appends it to the
/// message's log.
///
/// Runs in its own top-level transaction, holding the message row lock
/// from the first statement to commit, so appends to one message are
/// serialized and each sees the widget type its predecessors established.
/// Any error drops the transaction and nothing is written.
pub async fn process_submessage(
  db: &DatabaseConnection,
  user: &user::Model,
  message_id: i32,
  msg_type: &str,
  content: &str,
) -> Result<submessage::Model, ApiError> {
  let txn = db.begin().await?;

  let message = access_message(&txn, user, message_id, true, true).await?;

  verify_submessage_sender(&txn, message.id, message.sender, user.id).await?;

  let widget_data: Value = serde_json::from_str(content)
    .map_err(|_| ApiError::InvalidJson)?;

  let is_widget_author = message.sender == user.id;

  if let Some(widget_type) = get_widget_type(&txn, message.id).await? {
    debug!("Message `{}` holds a `{}` widget", message.id, widget_type.name());
    widget_type.validate(&widget_data, is_widget_author)?;
  }

  let submessage = do_add_submessage(
    &txn,
    user.realm,
    user.id,
    message.id,
    msg_type,
    content,
  ).await?;

  txn.commit().await?;

  Ok(submessage)
}

/// The message's sender opens the widget: nobody else may attach a
/// submessage until the sender has attached one.
pub async fn verify_submessage_sender<C: ConnectionTrait>(
  db: &C,
  message_id: i32,
  message_sender_id: i32,
  submessage_sender_id: i32,
) -> Result<(), ApiError> {
  if message_sender_id == submessage_sender_id {
    return Ok(());
  }

  let opened = Submessage::find()
    .filter(submessage::Column::Message.eq(message_id))
    .filter(submessage::Column::Sender.eq(message_sender_id))
    .one(db).await?
    .is_some();

  if opened {
    Ok(())
  } else {
    Err(ApiError::SubmessageForbidden)
  }
}

pub async fn do_add_submessage<C: ConnectionTrait>(
  db: &C,
  realm: i32,
  sender_id: i32,
  message_id: i32,
  msg_type: &str,
  content: &str,
) -> Result<submessage::Model, DbErr> {
  let new_submessage = submessage::ActiveModel {
    message: ActiveValue::Set(message_id),
    sender: ActiveValue::Set(sender_id),
    msg_type: ActiveValue::Set(msg_type.to_string()),
    content: ActiveValue::Set(content.to_string()),
    ..Default::default()
  };

  let submessage = new_submessage.insert(db).await?;

  info!(
    "Submessage `{}` ({msg_type}) appended to message `{message_id}` by user `{sender_id}` in realm `{realm}`",
    submessage.id,
  );

  Ok(submessage)
}

/// The message's log in insertion order.
pub async fn list_submessages(
  db: &DatabaseConnection,
  user: &user::Model,
  message_id: i32,
) -> Result<Vec<submessage::Model>, ApiError> {
  let message = access_message(db, user, message_id, false, false).await?;

  let submessages = Submessage::find()
    .filter(submessage::Column::Message.eq(message.id))
    .order_by_asc(submessage::Column::Id)
    .all(db).await?;

  Ok(submessages)
}
