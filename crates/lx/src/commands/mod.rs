//! CLI command implementations.

pub(crate) mod quiz;
pub(crate) mod render;

pub(crate) use quiz::QuizArgs;
pub(crate) use render::RenderArgs;

use std::io::Read;
use std::path::Path;

use lx_config::Config;
use lx_delta::Content;
use lx_renderer::{DeltaRenderer, HeaderMode, RenderBackend, TextPolicy};

use crate::error::CliError;

/// Build a renderer from the `[render]` section.
pub(crate) fn renderer_from_config<B: RenderBackend>(config: &Config) -> DeltaRenderer<B> {
    let text_policy = if config.render.escape_text {
        TextPolicy::Escape
    } else {
        TextPolicy::Verbatim
    };
    let header_mode = if config.render.headings {
        HeaderMode::Heading
    } else {
        HeaderMode::LineBreak
    };
    DeltaRenderer::new()
        .with_text_policy(text_policy)
        .with_header_mode(header_mode)
}

/// Read a file, or stdin when no path is given.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Classify raw input. Anything that is not JSON is plain text.
pub(crate) fn parse_content(raw: String) -> Content {
    match serde_json::from_str(&raw) {
        Ok(value) => Content::classify(value),
        Err(err) => {
            tracing::info!(%err, "Input is not JSON, treating as plain text");
            Content::PlainText(raw)
        }
    }
}
