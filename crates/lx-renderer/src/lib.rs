//! Delta renderer with pluggable backends.
//!
//! This crate provides a generic [`DeltaRenderer`] that turns a rich-text
//! [`Delta`](lx_delta::Delta) into output markup using the [`RenderBackend`]
//! trait.
//!
//! # Architecture
//!
//! The renderer owns the line and list grouping logic. Backends decide what
//! each construct looks like:
//! - [`HtmlBackend`]: HTML for trusted-HTML sinks
//! - [`TextBackend`]: plain text for previews and notifications
//!
//! # Example
//!
//! ```
//! use lx_delta::{Attributes, Delta, Op};
//! use lx_renderer::{DeltaRenderer, HtmlBackend};
//!
//! let delta = Delta::new(vec![
//!     Op::text("A").with_attributes(Attributes { bold: true, ..Default::default() }),
//!     Op::text(" B"),
//! ]);
//! let html = DeltaRenderer::<HtmlBackend>::new().render(&delta);
//! assert_eq!(html, "<strong>A</strong> B");
//! ```

mod backend;
mod html;
mod renderer;
mod state;
mod text;

pub use backend::RenderBackend;
pub use html::HtmlBackend;
pub use renderer::{DeltaRenderer, HeaderMode, TextPolicy};
pub use state::escape_html;
pub use text::TextBackend;

use lx_delta::Content;

/// Render content to HTML with default options.
///
/// Never panics: plain text is returned unchanged, unknown shapes are
/// stringified.
#[must_use]
pub fn render_html(content: &Content) -> String {
    DeltaRenderer::<HtmlBackend>::new().render_content(content)
}

/// Render content to plain text with default options.
#[must_use]
pub fn render_text(content: &Content) -> String {
    DeltaRenderer::<TextBackend>::new().render_content(content)
}
