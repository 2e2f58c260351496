//! `SeaORM` entities, one module per table created by the `migration` crate.

pub mod prelude;

pub mod member;
pub mod message;
pub mod realm;
pub mod room;
pub mod session;
pub mod submessage;
pub mod user;
