pub use super::member::Entity as Member;
pub use super::message::Entity as Message;
pub use super::realm::Entity as Realm;
pub use super::room::Entity as Room;
pub use super::session::Entity as Session;
pub use super::submessage::Entity as Submessage;
pub use super::user::Entity as User;
