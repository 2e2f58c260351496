use sea_orm::entity::prelude::*;
use serde::Serialize;

pub const STATUS_ACTIVE: i32 = 0;
pub const STATUS_DEACTIVATED: i32 = 1;
pub const STATUS_BANNED: i32 = 2;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub realm: i32,
  pub username: String,
  pub nickname: String,
  pub status: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "super::realm::Entity",
    from = "Column::Realm",
    to = "super::realm::Column::Id"
  )]
  Realm,
  #[sea_orm(has_many = "super::session::Entity")]
  Session,
  #[sea_orm(has_many = "super::member::Entity")]
  Member,
}

impl Related<super::realm::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Realm.def()
  }
}

impl Related<super::session::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Session.def()
  }
}

impl Related<super::member::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Member.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
