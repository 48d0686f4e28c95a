//! Render backend trait for format-specific rendering.
//!
//! This trait abstracts the differences between HTML and plain-text output,
//! allowing the delta renderer to be generic over the output format.

use lx_delta::{Align, Attributes, ListKind};

use crate::renderer::TextPolicy;

/// Backend trait for format-specific rendering operations.
///
/// Block-level functions receive `content` that was already produced by
/// [`inline`](Self::inline), so they must not escape it again.
pub trait RenderBackend {
    /// Render a text fragment with its inline formatting.
    ///
    /// # Arguments
    ///
    /// * `text` - Raw fragment text from the operation
    /// * `attrs` - Attributes of the operation
    /// * `policy` - Whether raw text must be escaped
    /// * `out` - Output buffer to write to
    fn inline(text: &str, attrs: &Attributes, policy: TextPolicy, out: &mut String);

    /// Render a line break.
    ///
    /// Default uses `<br>`.
    fn line_break(out: &mut String) {
        out.push_str("<br>");
    }

    /// Render a heading of the given level (1-6).
    fn heading(level: u8, content: &str, out: &mut String);

    /// Render a blockquote.
    fn blockquote(content: &str, out: &mut String);

    /// Render a code block.
    ///
    /// # Arguments
    ///
    /// * `lang` - Optional language identifier (e.g., "rust", "python")
    /// * `content` - The rendered line content
    /// * `out` - Output buffer to write to
    fn code_block(lang: Option<&str>, content: &str, out: &mut String);

    /// Render an aligned block.
    fn align(align: Align, content: &str, out: &mut String);

    /// Render a list container with one entry per item.
    fn list(kind: ListKind, items: &[String], out: &mut String);
}
