//! HTML backend for delta rendering.
//!
//! Produces HTML suitable for injection into a trusted-HTML sink.

use std::fmt::Write;

use lx_delta::{Align, Attributes, ListKind};

use crate::backend::RenderBackend;
use crate::renderer::TextPolicy;
use crate::state::escape_html;

/// HTML render backend.
///
/// Produces:
/// - `<strong>`, `<em>`, `<u>`, `<s>`, `<code>` for inline formatting
/// - `<a target="_blank" rel="noopener noreferrer">` for links
/// - `<pre><code>` for code blocks
/// - `<ul>`/`<ol>` with `<li>` items for lists
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn inline(text: &str, attrs: &Attributes, policy: TextPolicy, out: &mut String) {
        // Outermost first; code is the innermost wrap and link the outermost.
        let tags = [
            (attrs.strike, "s"),
            (attrs.underline, "u"),
            (attrs.italic, "em"),
            (attrs.bold, "strong"),
            (attrs.code, "code"),
        ];

        if let Some(link) = &attrs.link {
            write!(
                out,
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#,
                escape_html(link)
            )
            .unwrap();
        }
        for (_, tag) in tags.iter().filter(|(on, _)| *on) {
            write!(out, "<{tag}>").unwrap();
        }

        match policy {
            TextPolicy::Escape => out.push_str(&escape_html(text)),
            TextPolicy::Verbatim => out.push_str(text),
        }

        for (_, tag) in tags.iter().rev().filter(|(on, _)| *on) {
            write!(out, "</{tag}>").unwrap();
        }
        if attrs.link.is_some() {
            out.push_str("</a>");
        }
    }

    fn heading(level: u8, content: &str, out: &mut String) {
        write!(out, "<h{level}>{content}</h{level}>").unwrap();
    }

    fn blockquote(content: &str, out: &mut String) {
        write!(out, "<blockquote>{content}</blockquote>").unwrap();
    }

    fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
        if let Some(lang) = lang {
            write!(
                out,
                r#"<pre><code class="language-{}">{content}</code></pre>"#,
                escape_html(lang)
            )
            .unwrap();
        } else {
            write!(out, "<pre><code>{content}</code></pre>").unwrap();
        }
    }

    fn align(align: Align, content: &str, out: &mut String) {
        write!(
            out,
            r#"<div style="text-align: {}">{content}</div>"#,
            align.as_css()
        )
        .unwrap();
    }

    fn list(kind: ListKind, items: &[String], out: &mut String) {
        let tag = match kind {
            ListKind::Ordered => "ol",
            ListKind::Bullet => "ul",
        };
        write!(out, "<{tag}>").unwrap();
        for item in items {
            write!(out, "<li>{item}</li>").unwrap();
        }
        write!(out, "</{tag}>").unwrap();
    }
}
