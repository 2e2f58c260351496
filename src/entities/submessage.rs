use sea_orm::entity::prelude::*;
use serde::Serialize;

/// One event in a message's widget log, ordered by `id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "submessage")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub message: i32,
  pub sender: i32,
  pub msg_type: String,
  #[sea_orm(column_type = "Text")]
  pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "super::message::Entity",
    from = "Column::Message",
    to = "super::message::Column::Id"
  )]
  Message,
  #[sea_orm(
    belongs_to = "super::user::Entity",
    from = "Column::Sender",
    to = "super::user::Column::Id"
  )]
  User,
}

impl Related<super::message::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Message.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
