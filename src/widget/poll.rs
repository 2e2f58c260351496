use serde::Deserialize;
use serde_json::Value;

use super::{event_kind, parse_event, Field, Schema, ValidationError};

const NAME: &str = "poll data";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum PollEvent {
  Vote { key: String, vote: i64 },
  Question { question: String },
  NewOption { option: String, idx: i64 },
}

impl PollEvent {
  const SCHEMA: Schema = &[
    ("vote", &[("key", Field::Str), ("vote", Field::Int)]),
    ("question", &[("question", Field::Str)]),
    ("new_option", &[("option", Field::Str), ("idx", Field::Int)]),
  ];
}

/// Only the poll's author may change the question; anyone may vote or
/// add options.
pub fn validate_poll_data(
  poll_data: &Value,
  is_widget_author: bool,
) -> Result<PollEvent, ValidationError> {
  let kind = event_kind(NAME, poll_data)?;

  if kind == "question" && !is_widget_author {
    return Err(ValidationError::new("You can't edit a question unless you are the author."));
  }

  let event: PollEvent = parse_event(NAME, poll_data, kind, PollEvent::SCHEMA)?;

  if let PollEvent::Vote { vote, .. } = &event {
    if *vote != 1 && *vote != -1 {
      return Err(ValidationError::new(format!("{NAME}[\"vote\"] is not in [1, -1]")));
    }
  }

  Ok(event)
}
