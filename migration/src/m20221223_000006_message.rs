use sea_orm_migration::prelude::*;

use super::{
  m20221221_000001_realm::Realm,
  m20221221_000002_user::User,
  m20221222_000004_room::Room,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Message::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Message::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(Message::Realm).integer().not_null())
          .col(ColumnDef::new(Message::Room).integer().not_null())
          .col(ColumnDef::new(Message::Sender).integer().not_null())
          .col(ColumnDef::new(Message::Content).text().not_null())
          .col(ColumnDef::new(Message::Sent).timestamp().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk-message-realm")
              .from(Message::Table, Message::Realm)
              .to(Realm::Table, Realm::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk-message-room")
              .from(Message::Table, Message::Room)
              .to(Room::Table, Room::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk-message-sender")
              .from(Message::Table, Message::Sender)
              .to(User::Table, User::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Message::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum Message {
  Table,
  Id,
  Realm,
  Room,
  Sender,
  Content,
  Sent,
}
