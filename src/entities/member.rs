use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "member")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub user: i32,
  #[sea_orm(primary_key, auto_increment = false)]
  pub room: i32,
  pub joined: DateTimeLocal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "super::user::Entity",
    from = "Column::User",
    to = "super::user::Column::Id"
  )]
  User,
  #[sea_orm(
    belongs_to = "super::room::Entity",
    from = "Column::Room",
    to = "super::room::Column::Id"
  )]
  Room,
}

impl Related<super::user::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::User.def()
  }
}

impl Related<super::room::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Room.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
