//! `lx quiz` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use lx_config::{CliSettings, Config};
use lx_quiz::{Answers, Quiz, QuizResult, Scorer};
use lx_renderer::HtmlBackend;

use super::{read_input, renderer_from_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the quiz command.
#[derive(Args)]
pub(crate) struct QuizArgs {
    /// Quiz JSON file.
    #[arg(short, long)]
    quiz: PathBuf,

    /// Answers JSON file mapping question ids to option ids.
    #[arg(short, long)]
    answers: PathBuf,

    /// Passing percentage, 0 to 100 (overrides config).
    #[arg(short, long)]
    passing: Option<f64>,

    /// Path to configuration file (default: auto-discover lx.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl QuizArgs {
    /// Execute the quiz command.
    ///
    /// Prints the scored result as JSON to stdout and a summary to stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, input files or scoring fail.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            passing_percentage: self.passing,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let quiz: Quiz = serde_json::from_str(&read_input(Some(&self.quiz))?)?;
        let answers: Answers = serde_json::from_str(&read_input(Some(&self.answers))?)?;
        tracing::info!(
            questions = quiz.questions.len(),
            answers = answers.len(),
            "Loaded quiz attempt"
        );

        let scorer = Scorer::new(config.quiz.passing_percentage)?
            .with_renderer(renderer_from_config::<HtmlBackend>(&config));
        let result = scorer.score(&quiz, &answers)?;

        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &result)?;
        writeln!(stdout)?;

        if !result.title.is_empty() {
            output.info(&format!("Quiz: {}", result.title));
        }
        let summary = summary(&result);
        if result.passed {
            output.success(&summary);
        } else {
            output.warning(&summary);
        }

        Ok(())
    }
}

/// One-line pass/fail summary.
fn summary(result: &QuizResult) -> String {
    let verdict = if result.passed { "Passed" } else { "Failed" };
    format!(
        "{verdict}: {}/{} correct ({:.1}%, passing {:.1}%)",
        result.correct, result.total, result.percentage, result.passing_percentage
    )
}
