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
          .table(User::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(User::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(User::Realm).integer().not_null())
          .col(ColumnDef::new(User::Username).string().not_null())
          .col(ColumnDef::new(User::Nickname).string().not_null())
          .col(ColumnDef::new(User::Status).integer().not_null().default(0))
          .foreign_key(
            ForeignKey::create()
              .name("fk-user-realm")
              .from(User::Table, User::Realm)
              .to(Realm::Table, Realm::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx-user-realm-username")
          .table(User::Table)
          .col(User::Realm)
          .col(User::Username)
          .unique()
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(User::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum User {
  Table,
  Id,
  Realm,
  Username,
  Nickname,
  Status,
}
