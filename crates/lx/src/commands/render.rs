//! `lx render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use lx_config::{CliSettings, Config};
use lx_renderer::{HtmlBackend, TextBackend};

use super::{parse_content, read_input, renderer_from_config};
use crate::error::CliError;

/// Output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum Format {
    Html,
    Text,
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// JSON content file: a delta, a string, or null (default: stdin).
    input: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover lx.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Escape HTML in text fragments (overrides config).
    #[arg(long)]
    escape: Option<bool>,

    /// Write text fragments verbatim.
    #[arg(long, conflicts_with = "escape")]
    no_escape: bool,

    /// Render header lines as headings instead of line breaks.
    #[arg(long)]
    headings: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or input/output cannot be accessed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            escape_text: self.resolve_escape(),
            headings: self.headings.then_some(true),
            passing_percentage: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let content = parse_content(read_input(self.input.as_deref())?);
        let rendered = match self.format {
            Format::Html => renderer_from_config::<HtmlBackend>(&config).render_content(&content),
            Format::Text => renderer_from_config::<TextBackend>(&config).render_content(&content),
        };
        tracing::info!(bytes = rendered.len(), format = ?self.format, "Rendered content");

        match &self.output {
            Some(path) => std::fs::write(path, &rendered)?,
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }

    /// Resolve `escape_text` from --escape/--no-escape flags.
    fn resolve_escape(&self) -> Option<bool> {
        self.no_escape.then_some(false).or(self.escape)
    }
}
