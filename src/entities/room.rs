use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "room")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub realm: i32,
  pub name: String,
  pub description: String,
  pub created: DateTimeLocal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "super::realm::Entity",
    from = "Column::Realm",
    to = "super::realm::Column::Id"
  )]
  Realm,
  #[sea_orm(has_many = "super::member::Entity")]
  Member,
  #[sea_orm(has_many = "super::message::Entity")]
  Message,
}

impl Related<super::realm::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Realm.def()
  }
}

impl Related<super::member::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Member.def()
  }
}

impl Related<super::message::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Message.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
