use sea_orm_migration::prelude::*;

use super::{m20221221_000002_user::User, m20221222_000004_room::Room};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Member::Table)
          .if_not_exists()
          .col(ColumnDef::new(Member::User).integer().not_null())
          .col(ColumnDef::new(Member::Room).integer().not_null())
          .col(ColumnDef::new(Member::Joined).timestamp().not_null())
          .primary_key(Index::create().col(Member::User).col(Member::Room))
          .foreign_key(
            ForeignKey::create()
              .name("fk-member-user")
              .from(Member::Table, Member::User)
              .to(User::Table, User::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk-member-room")
              .from(Member::Table, Member::Room)
              .to(Room::Table, Room::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Member::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
enum Member {
  Table,
  User,
  Room,
  Joined,
}
