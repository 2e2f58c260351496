//! Widget classification and per-kind payload validation.
//!
//! A message's widget kind is fixed by the first submessage in its log.
//! Poll and todo payloads are checked against their schemas; every other
//! kind is treated as opaque.

mod poll;
mod todo;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::entities::{prelude::*, submessage};

pub use poll::validate_poll_data;
pub use todo::validate_todo_data;

/// `msg_type` of the marker submessage written when a widget is attached.
pub const WIDGET_MARKER: &str = "widget";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
  pub fn new(msg: impl Into<String>) -> Self {
    Self(msg.into())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetType {
  Poll,
  Todo,
  Other(String),
}

impl WidgetType {
  pub fn from_name(name: &str) -> Self {
    match name {
      "poll" => WidgetType::Poll,
      "todo" => WidgetType::Todo,
      other => WidgetType::Other(other.to_string()),
    }
  }

  pub fn name(&self) -> &str {
    match self {
      WidgetType::Poll => "poll",
      WidgetType::Todo => "todo",
      WidgetType::Other(name) => name,
    }
  }

  /// The kind a log's first submessage establishes, if any.
  pub fn established_by(msg_type: &str, content: &str) -> Option<Self> {
    if msg_type != WIDGET_MARKER {
      return Some(Self::from_name(msg_type));
    }

    let marker: Value = serde_json::from_str(content).ok()?;
    marker.get("widget_type")
      .and_then(Value::as_str)
      .map(Self::from_name)
  }

  /// Checks `data` against this kind's schema. Kinds without a schema
  /// accept anything.
  pub fn validate(&self, data: &Value, is_widget_author: bool) -> Result<(), ValidationError> {
    match self {
      WidgetType::Poll => validate_poll_data(data, is_widget_author).map(|_| ()),
      WidgetType::Todo => validate_todo_data(data, is_widget_author).map(|_| ()),
      WidgetType::Other(_) => Ok(()),
    }
  }
}

pub async fn get_widget_type<C: ConnectionTrait>(
  db: &C,
  message_id: i32,
) -> Result<Option<WidgetType>, DbErr> {
  let first = Submessage::find()
    .filter(submessage::Column::Message.eq(message_id))
    .order_by_asc(submessage::Column::Id)
    .one(db).await?;

  Ok(first.and_then(|first| WidgetType::established_by(&first.msg_type, &first.content)))
}

/// Returns the `type` tag of a widget event, which must be a JSON object.
fn event_kind<'a>(name: &str, data: &'a Value) -> Result<&'a str, ValidationError> {
  let object = data.as_object()
    .ok_or_else(|| ValidationError::new(format!("{name} is not a dict")))?;

  match object.get("type") {
    None => Err(ValidationError::new(format!("type key is missing from {name}"))),
    Some(Value::String(kind)) => Ok(kind),
    Some(_) => Err(ValidationError::new(format!("{name}[\"type\"] is not a string"))),
  }
}

#[derive(Debug, Clone, Copy)]
enum Field {
  Str,
  Int,
  Bool,
}

impl Field {
  fn accepts(self, value: &Value) -> bool {
    match self {
      Field::Str => value.is_string(),
      Field::Int => value.is_i64(),
      Field::Bool => value.is_boolean(),
    }
  }

  fn expected(self) -> &'static str {
    match self {
      Field::Str => "a string",
      Field::Int => "an integer",
      Field::Bool => "a boolean",
    }
  }
}

/// Event kinds of one widget, each with the exact fields it carries
/// besides `type`.
type Schema = &'static [(&'static str, &'static [(&'static str, Field)])];

fn parse_event<T: DeserializeOwned>(
  name: &str,
  data: &Value,
  kind: &str,
  schema: Schema,
) -> Result<T, ValidationError> {
  let fields = schema.iter()
    .find(|(known, _)| *known == kind)
    .map(|(_, fields)| *fields)
    .ok_or_else(|| ValidationError::new(format!("Unknown type for {name}: {kind}")))?;

  check_fields(name, data, fields)?;

  T::deserialize(data)
    .map_err(|err| ValidationError::new(format!("Invalid {name}: {err}")))
}

fn check_fields(
  name: &str,
  data: &Value,
  fields: &[(&str, Field)],
) -> Result<(), ValidationError> {
  let object = data.as_object()
    .ok_or_else(|| ValidationError::new(format!("{name} is not a dict")))?;

  for (key, field) in fields {
    let value = object.get(*key)
      .ok_or_else(|| ValidationError::new(format!("{key} key is missing from {name}")))?;

    if !field.accepts(value) {
      return Err(ValidationError::new(format!(
        "{name}[\"{key}\"] is not {}",
        field.expected(),
      )));
    }
  }

  let unexpected: Vec<&str> = object.keys()
    .map(String::as_str)
    .filter(|key| *key != "type" && !fields.iter().any(|(field, _)| field == key))
    .collect();

  if !unexpected.is_empty() {
    return Err(ValidationError::new(format!("Unexpected arguments: {}", unexpected.join(", "))));
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::testing;

  #[test]
  fn plain_msg_type_establishes_itself() {
    assert_eq!(WidgetType::established_by("poll", "{}"), Some(WidgetType::Poll));
    assert_eq!(WidgetType::established_by("todo", "not json"), Some(WidgetType::Todo));
    assert_eq!(
      WidgetType::established_by("zform", "{}"),
      Some(WidgetType::Other("zform".to_string())),
    );
  }

  #[test]
  fn marker_names_the_widget() {
    let content = r#"{"widget_type": "todo", "extra_data": null}"#;

    assert_eq!(WidgetType::established_by(WIDGET_MARKER, content), Some(WidgetType::Todo));
    assert_eq!(WidgetType::established_by(WIDGET_MARKER, "{"), None);
    assert_eq!(WidgetType::established_by(WIDGET_MARKER, r#"{"widget_type": 3}"#), None);
  }

  #[test]
  fn other_kinds_pass_through() {
    let kind = WidgetType::Other("zform".to_string());

    assert!(kind.validate(&json!(["anything", 1]), false).is_ok());
    assert!(WidgetType::Poll.validate(&json!(["anything", 1]), false).is_err());
  }

  #[test]
  fn event_kind_requires_string_tag() {
    assert_eq!(
      event_kind("poll data", &json!(1)).unwrap_err().to_string(),
      "poll data is not a dict",
    );
    assert_eq!(
      event_kind("poll data", &json!({})).unwrap_err().to_string(),
      "type key is missing from poll data",
    );
    assert_eq!(
      event_kind("poll data", &json!({"type": 1})).unwrap_err().to_string(),
      "poll data[\"type\"] is not a string",
    );
  }

  #[test]
  fn fields_are_checked_in_order() {
    let fields = [("key", Field::Str), ("vote", Field::Int), ("done", Field::Bool)];

    assert_eq!(
      check_fields("poll data", &json!({"type": "x", "vote": 1}), &fields).unwrap_err().to_string(),
      "key key is missing from poll data",
    );
    assert_eq!(
      check_fields("poll data", &json!({"key": 0, "vote": 1, "done": true}), &fields)
        .unwrap_err().to_string(),
      "poll data[\"key\"] is not a string",
    );
    assert_eq!(
      check_fields("poll data", &json!({"key": "a", "vote": 1.5, "done": true}), &fields)
        .unwrap_err().to_string(),
      "poll data[\"vote\"] is not an integer",
    );
    assert_eq!(
      check_fields("poll data", &json!({"key": "a", "vote": 1, "done": "yes"}), &fields)
        .unwrap_err().to_string(),
      "poll data[\"done\"] is not a boolean",
    );
    assert_eq!(
      check_fields("poll data", &json!({"key": "a", "vote": 1, "done": true, "extra": 0}), &fields)
        .unwrap_err().to_string(),
      "Unexpected arguments: extra",
    );
    assert!(check_fields("poll data", &json!({"type": "x", "key": "a", "vote": 1, "done": false}), &fields).is_ok());
  }

  #[tokio::test]
  async fn first_submessage_fixes_the_type() {
    let db = testing::setup().await;
    let fixture = testing::Fixture::new(&db).await;

    assert_eq!(get_widget_type(&db, fixture.message.id).await.unwrap(), None);

    testing::add_submessage(&db, &fixture.message, fixture.author.id, "todo", "{}").await;
    testing::add_submessage(&db, &fixture.message, fixture.author.id, "poll", "{}").await;

    assert_eq!(
      get_widget_type(&db, fixture.message.id).await.unwrap(),
      Some(WidgetType::Todo),
    );
  }
}
