use serde::Deserialize;
use serde_json::Value;

use super::{event_kind, parse_event, Field, Schema, ValidationError};

const NAME: &str = "todo data";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum TodoEvent {
  NewTask { key: i64, task: String, desc: String, completed: bool },
  Strike { key: String },
  NewTaskListTitle { title: String },
}

impl TodoEvent {
  const SCHEMA: Schema = &[
    (
      "new_task",
      &[
        ("key", Field::Int),
        ("task", Field::Str),
        ("desc", Field::Str),
        ("completed", Field::Bool),
      ],
    ),
    ("strike", &[("key", Field::Str)]),
    ("new_task_list_title", &[("title", Field::Str)]),
  ];
}

/// Only the list's author may retitle it; anyone may add or strike tasks.
pub fn validate_todo_data(
  todo_data: &Value,
  is_widget_author: bool,
) -> Result<TodoEvent, ValidationError> {
  let kind = event_kind(NAME, todo_data)?;

  if kind == "new_task_list_title" && !is_widget_author {
    return Err(ValidationError::new(
      "You can't edit the task list title unless you are the author.",
    ));
  }

  parse_event(NAME, todo_data, kind, TodoEvent::SCHEMA)
}
