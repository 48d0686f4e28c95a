//! Scoring and per-question review.

use lx_delta::Content;
use lx_renderer::{DeltaRenderer, HtmlBackend};
use serde::Serialize;

use crate::error::QuizError;
use crate::quiz::{Answers, Question, Quiz};

/// Passing percentage used when none is configured.
pub const DEFAULT_PASSING_PERCENTAGE: f64 = 60.0;

/// Result of scoring one attempt.
#[derive(Clone, Debug, Serialize)]
pub struct QuizResult {
    pub title: String,
    /// Questions answered correctly.
    pub correct: usize,
    /// Number of questions in the quiz.
    pub total: usize,
    /// Questions with no selection.
    pub unanswered: usize,
    /// `correct / total` as a percentage, 0 for an empty quiz.
    pub percentage: f64,
    pub passing_percentage: f64,
    pub passed: bool,
    pub reviews: Vec<QuestionReview>,
}

/// Review of one question, with rendered content.
#[derive(Clone, Debug, Serialize)]
pub struct QuestionReview {
    pub question_id: String,
    pub prompt_html: String,
    pub selected_option: Option<String>,
    pub correct_option: String,
    pub is_correct: bool,
    pub options: Vec<OptionReview>,
    pub explanation_html: Option<String>,
}

/// One option as shown in the review.
#[derive(Clone, Debug, Serialize)]
pub struct OptionReview {
    pub id: String,
    pub html: String,
    pub is_selected: bool,
    pub is_correct: bool,
}

/// Scores attempts against a passing threshold.
pub struct Scorer {
    passing_percentage: f64,
    renderer: DeltaRenderer<HtmlBackend>,
}

impl Scorer {
    /// Create a scorer with the given passing percentage.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidThreshold` unless `0 <= passing_percentage <= 100`.
    pub fn new(passing_percentage: f64) -> Result<Self, QuizError> {
        if !(0.0..=100.0).contains(&passing_percentage) {
            return Err(QuizError::InvalidThreshold(passing_percentage));
        }
        Ok(Self {
            passing_percentage,
            renderer: DeltaRenderer::new(),
        })
    }

    /// Use a custom renderer for prompts, options and explanations.
    #[must_use]
    pub fn with_renderer(mut self, renderer: DeltaRenderer<HtmlBackend>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Passing percentage in use.
    #[must_use]
    pub fn passing_percentage(&self) -> f64 {
        self.passing_percentage
    }

    /// Score an attempt.
    ///
    /// Answers for question ids the quiz does not contain are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the quiz fails [`Quiz::validate`] or an answer
    /// selects an option its question does not have.
    pub fn score(&self, quiz: &Quiz, answers: &Answers) -> Result<QuizResult, QuizError> {
        quiz.validate()?;

        for question_id in answers.question_ids() {
            if quiz.question(question_id).is_none() {
                tracing::warn!(question_id, "Ignoring answer for unknown question");
            }
        }

        let reviews = quiz
            .questions
            .iter()
            .map(|question| self.review(question, answers.selected(&question.id)))
            .collect::<Result<Vec<_>, _>>()?;

        let total = reviews.len();
        let correct = reviews.iter().filter(|r| r.is_correct).count();
        let unanswered = reviews
            .iter()
            .filter(|r| r.selected_option.is_none())
            .count();
        let percentage = percentage(correct, total);
        let passed = total > 0 && percentage >= self.passing_percentage;

        tracing::debug!(correct, total, percentage, passed, "Scored quiz attempt");

        Ok(QuizResult {
            title: quiz.title.clone(),
            correct,
            total,
            unanswered,
            percentage,
            passing_percentage: self.passing_percentage,
            passed,
            reviews,
        })
    }

    fn review(
        &self,
        question: &Question,
        selected: Option<&str>,
    ) -> Result<QuestionReview, QuizError> {
        if let Some(option) = selected
            && question.option(option).is_none()
        {
            return Err(QuizError::UnknownOption {
                question: question.id.clone(),
                option: option.to_owned(),
            });
        }

        let options = question
            .options
            .iter()
            .map(|option| OptionReview {
                id: option.id.clone(),
                html: self.render(&option.text),
                is_selected: selected == Some(option.id.as_str()),
                is_correct: option.id == question.correct_option,
            })
            .collect();

        Ok(QuestionReview {
            question_id: question.id.clone(),
            prompt_html: self.render(&question.prompt),
            selected_option: selected.map(str::to_owned),
            correct_option: question.correct_option.clone(),
            is_correct: selected == Some(question.correct_option.as_str()),
            options,
            explanation_html: question
                .explanation
                .as_ref()
                .filter(|content| !content.is_empty())
                .map(|content| self.render(content)),
        })
    }

    fn render(&self, content: &Content) -> String {
        self.renderer.render_content(content)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            passing_percentage: DEFAULT_PASSING_PERCENTAGE,
            renderer: DeltaRenderer::new(),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    correct as f64 * 100.0 / total as f64
}
