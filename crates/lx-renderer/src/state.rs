//! Per-call render state threaded through the operation fold.
//!
//! Nothing here outlives a single render call.

use lx_delta::ListKind;

use crate::backend::RenderBackend;

/// List grouping state.
#[derive(Debug, Default, PartialEq)]
pub(crate) enum ListState {
    #[default]
    NoList,
    /// Consecutive lines of the same list kind, not yet emitted.
    Building { kind: ListKind, items: Vec<String> },
}

/// Accumulator for one render call.
#[derive(Debug, Default)]
pub(crate) struct RenderState {
    output: String,
    /// Rendered fragments of the line not yet terminated by a newline op.
    line: String,
    list: ListState,
}

impl RenderState {
    /// Append a rendered inline fragment to the current line.
    pub(crate) fn push_inline(&mut self, fragment: &str) {
        self.line.push_str(fragment);
    }

    /// Take the current line, leaving it empty.
    pub(crate) fn take_line(&mut self) -> String {
        std::mem::take(&mut self.line)
    }

    /// Append already-rendered markup to the output.
    pub(crate) fn emit(&mut self, markup: &str) {
        self.output.push_str(markup);
    }

    /// Output buffer, for backends writing directly.
    pub(crate) fn output_mut(&mut self) -> &mut String {
        &mut self.output
    }

    /// Emit the open list, if any, and return to [`ListState::NoList`].
    pub(crate) fn flush_list<B: RenderBackend>(&mut self) {
        if let ListState::Building { kind, items } = std::mem::take(&mut self.list) {
            B::list(kind, &items, &mut self.output);
        }
    }

    /// Emit the open list and then the pending line.
    pub(crate) fn flush_line<B: RenderBackend>(&mut self) {
        self.flush_list::<B>();
        let line = self.take_line();
        self.output.push_str(&line);
    }

    /// Close the current line as an item of a `kind` list.
    ///
    /// An open list of a different kind is emitted first.
    pub(crate) fn push_list_item<B: RenderBackend>(&mut self, kind: ListKind) {
        let line = self.take_line();
        if let ListState::Building { kind: open, items } = &mut self.list
            && *open == kind
        {
            items.push(line);
            return;
        }
        self.flush_list::<B>();
        self.list = ListState::Building {
            kind,
            items: vec![line],
        };
    }

    /// Flush everything still pending and return the output.
    pub(crate) fn finish<B: RenderBackend>(mut self) -> String {
        if !self.line.is_empty() {
            self.flush_line::<B>();
        }
        self.flush_list::<B>();
        self.output
    }

    #[cfg(test)]
    pub(crate) fn list(&self) -> &ListState {
        &self.list
    }
}

/// Escape special HTML characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlBackend;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_starts_without_list() {
        let state = RenderState::default();
        assert_eq!(state.list(), &ListState::NoList);
        assert_eq!(state.finish::<HtmlBackend>(), "");
    }

    #[test]
    fn test_same_kind_groups() {
        let mut state = RenderState::default();
        state.push_inline("a");
        state.push_list_item::<HtmlBackend>(ListKind::Bullet);
        state.push_inline("b");
        state.push_list_item::<HtmlBackend>(ListKind::Bullet);
        assert_eq!(
            state.list(),
            &ListState::Building {
                kind: ListKind::Bullet,
                items: vec!["a".to_owned(), "b".to_owned()],
            }
        );
        assert_eq!(state.finish::<HtmlBackend>(), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_kind_switch_flushes() {
        let mut state = RenderState::default();
        state.push_inline("a");
        state.push_list_item::<HtmlBackend>(ListKind::Bullet);
        state.push_inline("b");
        state.push_list_item::<HtmlBackend>(ListKind::Ordered);
        assert_eq!(
            state.list(),
            &ListState::Building {
                kind: ListKind::Ordered,
                items: vec!["b".to_owned()],
            }
        );
        assert_eq!(
            state.finish::<HtmlBackend>(),
            "<ul><li>a</li></ul><ol><li>b</li></ol>"
        );
    }

    #[test]
    fn test_flush_line_emits_list_first() {
        let mut state = RenderState::default();
        state.push_inline("a");
        state.push_list_item::<HtmlBackend>(ListKind::Bullet);
        state.push_inline("tail");
        state.flush_line::<HtmlBackend>();
        assert_eq!(state.list(), &ListState::NoList);
        assert_eq!(state.finish::<HtmlBackend>(), "<ul><li>a</li></ul>tail");
    }
}
