pub use sea_orm_migration::prelude::*;

mod m20221221_000001_realm;
mod m20221221_000002_user;
mod m20221222_000003_session;
mod m20221222_000004_room;
mod m20221222_000005_member;
mod m20221223_000006_message;
mod m20221223_000007_submessage;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20221221_000001_realm::Migration),
      Box::new(m20221221_000002_user::Migration),
      Box::new(m20221222_000003_session::Migration),
      Box::new(m20221222_000004_room::Migration),
      Box::new(m20221222_000005_member::Migration),
      Box::new(m20221223_000006_message::Migration),
      Box::new(m20221223_000007_submessage::Migration),
    ]
  }
}
