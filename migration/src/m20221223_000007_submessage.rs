use sea_orm_migration::prelude::*;

use super::{m20221221_000002_user::User, m20221223_000006_message::Message};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Submessage::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Submessage::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(Submessage::Message).integer().not_null())
          .col(ColumnDef::new(Submessage::Sender).integer().not_null())
          .col(ColumnDef::new(Submessage::MsgType).string().not_null())
          .col(ColumnDef::new(Submessage::Content).text().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk-submessage-message")
              .from(Submessage::Table, Submessage::Message)
              .to(Message::Table, Message::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk-submessage-sender")
              .from(Submessage::Table, Submessage::Sender)
              .to(User::Table, User::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    // The log is always read per message in insertion order.
    manager
      .create_index(
        Index::create()
          .name("idx-submessage-message-id")
          .table(Submessage::Table)
          .col(Submessage::Message)
          .col(Submessage::Id)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Submessage::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
enum Submessage {
  Table,
  Id,
  Message,
  Sender,
  MsgType,
  Content,
}
