//! Fixtures for tests: a migrated in-memory database and the rows most
//! tests need.

use std::path::Path;

use chrono::{DateTime, Local};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
  ActiveModelTrait,
  ActiveValue,
  ColumnTrait,
  ConnectOptions,
  Database,
  DatabaseConnection,
  EntityTrait,
  ModelTrait,
  QueryFilter,
  QueryOrder,
};

use crate::entities::{prelude::*, member, message, realm, room, session, submessage, user};

/// One connection: every pooled connection to `sqlite::memory:` would open
/// a separate empty database.
pub async fn setup() -> DatabaseConnection {
  connect("sqlite::memory:".to_string(), 1).await
}

/// A database file under `dir` shared by a pool of `max_connections`, so
/// concurrent transactions really contend for locks.
pub async fn setup_file(dir: &Path, max_connections: u32) -> DatabaseConnection {
  let url = format!("sqlite://{}?mode=rwc", dir.join("chatoy.db").display());
  connect(url, max_connections).await
}

async fn connect(url: String, max_connections: u32) -> DatabaseConnection {
  let mut options = ConnectOptions::new(url);
  options.max_connections(max_connections).sqlx_logging(false);

  let db = Database::connect(options).await.unwrap();
  Migrator::up(&db, None).await.unwrap();
  db
}

/// A realm with one room, two members, and a message the first member sent.
pub struct Fixture {
  pub realm: realm::Model,
  pub room: room::Model,
  pub author: user::Model,
  pub other: user::Model,
  pub message: message::Model,
}

impl Fixture {
  pub async fn new(db: &DatabaseConnection) -> Self {
    let realm = create_realm(db, "chatoy").await;
    let room = create_room(db, &realm, "general").await;
    let author = create_user(db, &realm, "iago").await;
    let other = create_user(db, &realm, "cordelia").await;
    join(db, &author, &room).await;
    join(db, &other, &room).await;
    let message = create_message(db, &author, &room).await;

    Self { realm, room, author, other, message }
  }
}

pub async fn create_realm(db: &DatabaseConnection, name: &str) -> realm::Model {
  realm::ActiveModel {
    name: ActiveValue::Set(name.to_string()),
    ..Default::default()
  }.insert(db).await.unwrap()
}

pub async fn create_user(
  db: &DatabaseConnection,
  realm: &realm::Model,
  username: &str,
) -> user::Model {
  insert_user(db, realm, ActiveValue::NotSet, username).await
}

pub async fn create_user_with_id(
  db: &DatabaseConnection,
  realm: &realm::Model,
  id: i32,
  username: &str,
) -> user::Model {
  insert_user(db, realm, ActiveValue::Set(id), username).await
}

async fn insert_user(
  db: &DatabaseConnection,
  realm: &realm::Model,
  id: ActiveValue<i32>,
  username: &str,
) -> user::Model {
  user::ActiveModel {
    id,
    realm: ActiveValue::Set(realm.id),
    username: ActiveValue::Set(username.to_string()),
    nickname: ActiveValue::Set(username.to_string()),
    status: ActiveValue::Set(user::STATUS_ACTIVE),
  }.insert(db).await.unwrap()
}

pub async fn create_session(
  db: &DatabaseConnection,
  user: &user::Model,
  expired: DateTime<Local>,
) -> String {
  let token = format!("token-{}-{}", user.id, expired.timestamp());

  session::ActiveModel {
    token: ActiveValue::Set(token.clone()),
    user: ActiveValue::Set(user.id),
    agent: ActiveValue::Set("test".to_string()),
    generated: ActiveValue::Set(Local::now()),
    expired: ActiveValue::Set(expired),
  }.insert(db).await.unwrap();

  token
}

pub async fn create_room(db: &DatabaseConnection, realm: &realm::Model, name: &str) -> room::Model {
  room::ActiveModel {
    realm: ActiveValue::Set(realm.id),
    name: ActiveValue::Set(name.to_string()),
    description: ActiveValue::Set(String::new()),
    created: ActiveValue::Set(Local::now()),
    ..Default::default()
  }.insert(db).await.unwrap()
}

pub async fn join(db: &DatabaseConnection, user: &user::Model, room: &room::Model) {
  member::ActiveModel {
    user: ActiveValue::Set(user.id),
    room: ActiveValue::Set(room.id),
    joined: ActiveValue::Set(Local::now()),
  }.insert(db).await.unwrap();
}

pub async fn leave(db: &DatabaseConnection, user: &user::Model, room: &room::Model) {
  let member = Member::find_by_id((user.id, room.id))
    .one(db).await.unwrap()
    .unwrap();

  member.delete(db).await.unwrap();
}

pub async fn create_message(
  db: &DatabaseConnection,
  sender: &user::Model,
  room: &room::Model,
) -> message::Model {
  insert_message(db, ActiveValue::NotSet, sender, room).await
}

pub async fn create_message_with_id(
  db: &DatabaseConnection,
  id: i32,
  sender: &user::Model,
  room: &room::Model,
) -> message::Model {
  insert_message(db, ActiveValue::Set(id), sender, room).await
}

async fn insert_message(
  db: &DatabaseConnection,
  id: ActiveValue<i32>,
  sender: &user::Model,
  room: &room::Model,
) -> message::Model {
  message::ActiveModel {
    id,
    realm: ActiveValue::Set(room.realm),
    room: ActiveValue::Set(room.id),
    sender: ActiveValue::Set(sender.id),
    content: ActiveValue::Set("/poll Lunch?".to_string()),
    sent: ActiveValue::Set(Local::now()),
  }.insert(db).await.unwrap()
}

/// Inserts a log entry directly, skipping every check.
pub async fn add_submessage(
  db: &DatabaseConnection,
  message: &message::Model,
  sender: i32,
  msg_type: &str,
  content: &str,
) -> submessage::Model {
  submessage::ActiveModel {
    message: ActiveValue::Set(message.id),
    sender: ActiveValue::Set(sender),
    msg_type: ActiveValue::Set(msg_type.to_string()),
    content: ActiveValue::Set(content.to_string()),
    ..Default::default()
  }.insert(db).await.unwrap()
}

pub async fn submessages(db: &DatabaseConnection, message_id: i32) -> Vec<submessage::Model> {
  Submessage::find()
    .filter(submessage::Column::Message.eq(message_id))
    .order_by_asc(submessage::Column::Id)
    .all(db).await.unwrap()
}
