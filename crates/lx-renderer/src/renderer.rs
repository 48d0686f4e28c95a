//! Generic delta renderer with pluggable backend.

use std::marker::PhantomData;

use lx_delta::{Attributes, Content, Delta, Op};
use serde_json::Value;

use crate::backend::RenderBackend;
use crate::state::RenderState;

/// How raw text fragments are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextPolicy {
    /// Escape `& < > " '` in text fragments.
    #[default]
    Escape,
    /// Write text fragments unchanged. The caller must trust the source.
    Verbatim,
}

/// How a newline carrying a `header` attribute is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderMode {
    /// Render the line followed by a line break, ignoring the level.
    ///
    /// Matches what existing course content was authored against.
    #[default]
    LineBreak,
    /// Render the line as a heading of the given level.
    Heading,
}

/// Generic delta renderer with pluggable backend.
///
/// Rendering is a pure fold over the operations: each call builds its own
/// state, so a renderer can be shared freely.
pub struct DeltaRenderer<B: RenderBackend> {
    text_policy: TextPolicy,
    header_mode: HeaderMode,
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> DeltaRenderer<B> {
    /// Create a renderer that escapes text and renders headers as line breaks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text_policy: TextPolicy::default(),
            header_mode: HeaderMode::default(),
            _backend: PhantomData,
        }
    }

    /// Set how raw text fragments are written.
    #[must_use]
    pub fn with_text_policy(mut self, policy: TextPolicy) -> Self {
        self.text_policy = policy;
        self
    }

    /// Set how header newlines are rendered.
    #[must_use]
    pub fn with_header_mode(mut self, mode: HeaderMode) -> Self {
        self.header_mode = mode;
        self
    }

    /// Render any classified content.
    ///
    /// - `PlainText` is returned unchanged (no escaping)
    /// - `RichDelta` is rendered with [`render`](Self::render)
    /// - `Unknown` is stringified as compact JSON
    #[must_use]
    pub fn render_content(&self, content: &Content) -> String {
        match content {
            Content::PlainText(text) => text.clone(),
            Content::RichDelta(delta) => self.render(delta),
            Content::Unknown(value) => stringify(value),
        }
    }

    /// Render a delta.
    #[must_use]
    pub fn render(&self, delta: &Delta) -> String {
        delta
            .ops
            .iter()
            .fold(RenderState::default(), |state, op| self.step(state, op))
            .finish::<B>()
    }

    fn step(&self, mut state: RenderState, op: &Op) -> RenderState {
        let Some(text) = op.insert.as_text() else {
            tracing::debug!("Skipping non-text insert");
            return state;
        };
        let attrs = &op.attributes;

        if text == "\n" {
            if let Some(kind) = attrs.list {
                state.push_list_item::<B>(kind);
            } else {
                let line = state.take_line();
                state.flush_list::<B>();
                match self.wrap_block(attrs, &line, self.header_mode == HeaderMode::Heading) {
                    Some(block) => state.emit(&block),
                    None => {
                        state.emit(&line);
                        B::line_break(state.output_mut());
                    }
                }
            }
            return state;
        }

        let mut fragment = String::with_capacity(text.len());
        B::inline(text, attrs, self.text_policy, &mut fragment);
        if !attrs.has_block() {
            state.push_inline(&fragment);
            return state;
        }

        // Text ops honor every block attribute, header included.
        if let Some(block) = self.wrap_block(attrs, &fragment, true) {
            state.flush_line::<B>();
            state.emit(&block);
        }
        state
    }

    /// Wrap `content` in the block markup its attributes ask for.
    ///
    /// Returns `None` when no block attribute applies. `header` only counts
    /// when `headings` is set. Code block wins over header, header over
    /// blockquote; alignment wraps the result.
    fn wrap_block(&self, attrs: &Attributes, content: &str, headings: bool) -> Option<String> {
        let heading = attrs.header.filter(|_| headings);

        let mut out = String::with_capacity(content.len() + 32);
        if let Some(code) = &attrs.code_block {
            B::code_block(code.language.as_deref(), content, &mut out);
        } else if let Some(level) = heading {
            B::heading(level, content, &mut out);
        } else if attrs.blockquote {
            B::blockquote(content, &mut out);
        } else if attrs.align.is_some() {
            out.push_str(content);
        } else {
            return None;
        }

        if let Some(align) = attrs.align {
            let inner = std::mem::take(&mut out);
            B::align(align, &inner, &mut out);
        }
        Some(out)
    }
}

impl<B: RenderBackend> Default for DeltaRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-effort textual form of an unrecognized value.
fn stringify(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
}
