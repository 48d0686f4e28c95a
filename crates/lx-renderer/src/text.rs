//! Plain-text backend for previews and notifications.

use std::fmt::Write;

use lx_delta::{Align, Attributes, ListKind};

use crate::backend::RenderBackend;
use crate::renderer::TextPolicy;

/// Plain-text render backend.
///
/// Drops all formatting. Blocks end with a newline, list items are prefixed
/// with `- ` or `N. `, and links keep their URL when it differs from the text.
/// Text is never escaped.
pub struct TextBackend;

impl TextBackend {
    fn push_line(content: &str, out: &mut String) {
        out.push_str(content);
        if !content.ends_with('\n') {
            out.push('\n');
        }
    }
}

impl RenderBackend for TextBackend {
    fn inline(text: &str, attrs: &Attributes, _policy: TextPolicy, out: &mut String) {
        out.push_str(text);
        if let Some(link) = &attrs.link
            && link != text
        {
            write!(out, " ({link})").unwrap();
        }
    }

    fn line_break(out: &mut String) {
        out.push('\n');
    }

    fn heading(_level: u8, content: &str, out: &mut String) {
        Self::push_line(content, out);
    }

    fn blockquote(content: &str, out: &mut String) {
        out.push_str("> ");
        Self::push_line(content, out);
    }

    fn code_block(_lang: Option<&str>, content: &str, out: &mut String) {
        Self::push_line(content, out);
    }

    fn align(_align: Align, content: &str, out: &mut String) {
        Self::push_line(content, out);
    }

    fn list(kind: ListKind, items: &[String], out: &mut String) {
        for (index, item) in items.iter().enumerate() {
            match kind {
                ListKind::Ordered => write!(out, "{}. ", index + 1).unwrap(),
                ListKind::Bullet => out.push_str("- "),
            }
            Self::push_line(item, out);
        }
    }
}
