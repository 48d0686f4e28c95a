//! Classification of fetched content.

use serde::Deserialize;
use serde_json::Value;

use crate::op::Delta;

/// Content as fetched from the backend, classified once.
///
/// | JSON shape                       | variant           |
/// |----------------------------------|-------------------|
/// | `null`                           | `PlainText("")`   |
/// | string                           | `PlainText`       |
/// | object with an `ops` array       | `RichDelta`       |
/// | anything else                    | `Unknown`         |
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum Content {
    /// Pre-rendered text or HTML, passed through verbatim.
    PlainText(String),
    /// Operation sequence to be rendered.
    RichDelta(Delta),
    /// Unrecognized shape, kept for best-effort display.
    Unknown(Value),
}

impl Content {
    /// Classify a JSON value.
    #[must_use]
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Null => Self::PlainText(String::new()),
            Value::String(text) => Self::PlainText(text),
            Value::Object(ref map) if map.get("ops").is_some_and(Value::is_array) => {
                match serde_json::from_value(value.clone()) {
                    Ok(delta) => Self::RichDelta(delta),
                    Err(_) => Self::Unknown(value),
                }
            }
            other => Self::Unknown(other),
        }
    }

    /// Whether this content renders to nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::PlainText(text) => text.is_empty(),
            Self::RichDelta(delta) => delta.is_empty(),
            Self::Unknown(_) => false,
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::PlainText(String::new())
    }
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        Self::classify(value)
    }
}

impl From<Delta> for Content {
    fn from(delta: Delta) -> Self {
        Self::RichDelta(delta)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::PlainText(text.to_owned())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::PlainText(text)
    }
}
