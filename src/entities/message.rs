use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A chat message. Rows are never modified after insertion; writers only
/// touch a row to lock it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "message")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub realm: i32,
  pub room: i32,
  pub sender: i32,
  #[sea_orm(column_type = "Text")]
  pub content: String,
  pub sent: DateTimeLocal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "super::room::Entity",
    from = "Column::Room",
    to = "super::room::Column::Id"
  )]
  Room,
  #[sea_orm(
    belongs_to = "super::user::Entity",
    from = "Column::Sender",
    to = "super::user::Column::Id"
  )]
  User,
  #[sea_orm(has_many = "super::submessage::Entity")]
  Submessage,
}

impl Related<super::room::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Room.def()
  }
}

impl Related<super::user::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::User.def()
  }
}

impl Related<super::submessage::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Submessage.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
