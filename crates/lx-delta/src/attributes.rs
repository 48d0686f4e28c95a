//! Formatting attributes carried by delta operations.
//!
//! Parsing is lenient: an attribute whose JSON value has the wrong type is
//! treated as not set, never as an error.

use serde_json::{Map, Value};

/// Maximum heading level.
const MAX_HEADER_LEVEL: u8 = 6;

/// List container kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    /// Numbered list (`<ol>`).
    Ordered,
    /// Bulleted list (`<ul>`).
    Bullet,
}

impl ListKind {
    /// Parse a `list` attribute value.
    ///
    /// Checklist values (`checked`, `unchecked`) group as bullet lists.
    fn parse(value: &str) -> Option<Self> {
        match value {
            "ordered" => Some(Self::Ordered),
            "bullet" | "checked" | "unchecked" => Some(Self::Bullet),
            _ => None,
        }
    }
}

/// Text alignment keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
    Justify,
}

impl Align {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "justify" => Some(Self::Justify),
            _ => None,
        }
    }

    /// CSS `text-align` value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// Code block attribute.
///
/// Quill 1 marks code blocks with `true`, quill 2 with the language name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeBlock {
    /// Language identifier (e.g., "rust", "python").
    pub language: Option<String>,
}

/// Formatting attributes of a single operation.
///
/// All keys are independent and optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    /// Inline monospace.
    pub code: bool,
    /// Anchor target URL.
    pub link: Option<String>,
    /// Heading level, 1 to 6.
    pub header: Option<u8>,
    pub blockquote: bool,
    pub code_block: Option<CodeBlock>,
    pub align: Option<Align>,
    pub list: Option<ListKind>,
}

impl Attributes {
    /// Read attributes from a JSON object.
    #[must_use]
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let flag = |key: &str| matches!(map.get(key), Some(Value::Bool(true)));
        let string = |key: &str| map.get(key).and_then(Value::as_str);

        Self {
            bold: flag("bold"),
            italic: flag("italic"),
            underline: flag("underline"),
            strike: flag("strike"),
            code: flag("code"),
            link: string("link").map(str::to_owned),
            header: map.get("header").and_then(parse_header_level),
            blockquote: flag("blockquote"),
            code_block: match map.get("code-block") {
                Some(Value::Bool(true)) => Some(CodeBlock::default()),
                Some(Value::String(lang)) if lang == "plain" || lang.is_empty() => {
                    Some(CodeBlock::default())
                }
                Some(Value::String(lang)) => Some(CodeBlock {
                    language: Some(lang.clone()),
                }),
                _ => None,
            },
            align: string("align").and_then(Align::parse),
            list: string("list").and_then(ListKind::parse),
        }
    }

    /// Whether any block-level attribute other than `list` is set.
    ///
    /// A text op carrying one of these renders as its own block.
    #[must_use]
    pub fn has_block(&self) -> bool {
        self.header.is_some()
            || self.blockquote
            || self.code_block.is_some()
            || self.align.is_some()
    }
}

/// Parse a heading level, clamping anything above 6.
fn parse_header_level(value: &Value) -> Option<u8> {
    let level = value.as_u64()?;
    if level == 0 {
        return None;
    }
    Some(u8::try_from(level.min(u64::from(MAX_HEADER_LEVEL))).unwrap_or(MAX_HEADER_LEVEL))
}
