//! Rich-text delta data model.
//!
//! Course content (question prompts, answer options, explanations) arrives
//! from the backend as one of three shapes: a plain string, a quill-style
//! delta object `{ "ops": [...] }`, or something else entirely. This crate
//! classifies that content once, at the deserialization boundary, into
//! [`Content`], so renderers only ever see typed operations.
//!
//! # Example
//!
//! ```
//! use lx_delta::{Content, Insert};
//!
//! let json = r#"{"ops": [{"insert": "Hi", "attributes": {"bold": true}}]}"#;
//! let content: Content = serde_json::from_str(json).unwrap();
//!
//! let Content::RichDelta(delta) = content else {
//!     panic!("expected a delta");
//! };
//! assert_eq!(delta.ops[0].insert, Insert::Text("Hi".to_owned()));
//! assert!(delta.ops[0].attributes.bold);
//! ```

mod attributes;
mod content;
mod op;

pub use attributes::{Align, Attributes, CodeBlock, ListKind};
pub use content::Content;
pub use op::{Delta, Insert, Op};
