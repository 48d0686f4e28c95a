//! Delta operations.

use serde::Deserialize;
use serde_json::Value;

use crate::attributes::Attributes;

/// Payload of an insert operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Insert {
    /// Literal text.
    Text(String),
    /// Anything that is not a string (image, formula, missing field).
    Embed(Value),
}

impl Insert {
    /// Text payload, if this is a text insert.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Embed(_) => None,
        }
    }
}

/// One insert operation with optional formatting.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Op {
    pub insert: Insert,
    pub attributes: Attributes,
}

impl Op {
    /// Unformatted text insert.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            insert: Insert::Text(text.into()),
            attributes: Attributes::default(),
        }
    }

    /// Bare newline, terminating the current line.
    #[must_use]
    pub fn newline() -> Self {
        Self::text("\n")
    }

    /// Replace the attributes of this operation.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Whether this op is a text insert of exactly one newline.
    #[must_use]
    pub fn is_newline(&self) -> bool {
        self.insert.as_text() == Some("\n")
    }
}

impl From<Value> for Op {
    fn from(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self {
                insert: Insert::Embed(value),
                attributes: Attributes::default(),
            };
        };

        let attributes = match map.get("attributes") {
            Some(Value::Object(attrs)) => Attributes::from_map(attrs),
            _ => Attributes::default(),
        };
        let insert = match map.remove("insert") {
            Some(Value::String(text)) => Insert::Text(text),
            Some(other) => Insert::Embed(other),
            None => Insert::Embed(Value::Null),
        };

        Self { insert, attributes }
    }
}

/// An ordered sequence of insert operations.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Delta {
    #[serde(default)]
    pub ops: Vec<Op>,
}

impl Delta {
    #[must_use]
    pub fn new(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl FromIterator<Op> for Delta {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
