use sea_orm_migration::prelude::*;

use super::m20221221_000001_realm::Realm;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Room::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Room::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(Room::Realm).integer().not_null())
          .col(ColumnDef::new(Room::Name).string().not_null())
          .col(ColumnDef::new(Room::Description).string().not_null())
          .col(ColumnDef::new(Room::Created).timestamp().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk-room-realm")
              .from(Room::Table, Room::Realm)
              .to(Realm::Table, Realm::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Room::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum Room {
  Table,
  Id,
  Realm,
  Name,
  Description,
  Created,
}
