//! Quiz model as fetched from the course backend.

use std::collections::{BTreeMap, HashSet};

use lx_delta::Content;
use serde::Deserialize;

use crate::error::QuizError;

/// A multiple-choice quiz.
#[derive(Clone, Debug, Deserialize)]
pub struct Quiz {
    #[serde(default)]
    pub title: String,
    pub questions: Vec<Question>,
}

/// One multiple-choice question.
#[derive(Clone, Debug, Deserialize)]
pub struct Question {
    pub id: String,
    /// Question text. Older payloads call this field `question`.
    #[serde(default, alias = "question")]
    pub prompt: Content,
    pub options: Vec<QuizOption>,
    /// Id of the correct option.
    pub correct_option: String,
    #[serde(default)]
    pub explanation: Option<Content>,
}

/// One answer option of a question.
#[derive(Clone, Debug, Deserialize)]
pub struct QuizOption {
    pub id: String,
    #[serde(default)]
    pub text: Content,
}

impl Question {
    /// Look up an option by id.
    #[must_use]
    pub fn option(&self, id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id == id)
    }
}

impl Quiz {
    /// Check ids and correct answers.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in question order.
    pub fn validate(&self) -> Result<(), QuizError> {
        let mut seen = HashSet::with_capacity(self.questions.len());
        for (position, question) in self.questions.iter().enumerate() {
            if question.id.is_empty() {
                return Err(QuizError::EmptyQuestionId(position));
            }
            if !seen.insert(question.id.as_str()) {
                return Err(QuizError::DuplicateQuestion(question.id.clone()));
            }

            let mut options = HashSet::with_capacity(question.options.len());
            for option in &question.options {
                if !options.insert(option.id.as_str()) {
                    return Err(QuizError::DuplicateOption {
                        question: question.id.clone(),
                        option: option.id.clone(),
                    });
                }
            }

            if !options.contains(question.correct_option.as_str()) {
                return Err(QuizError::MissingCorrectOption {
                    question: question.id.clone(),
                    option: question.correct_option.clone(),
                });
            }
        }
        Ok(())
    }

    /// Look up a question by id.
    #[must_use]
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }
}

/// Selected option per question id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    selections: BTreeMap<String, String>,
}

impl Answers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected option for a question, replacing any earlier one.
    pub fn select(&mut self, question: impl Into<String>, option: impl Into<String>) {
        self.selections.insert(question.into(), option.into());
    }

    /// Selected option id for a question.
    #[must_use]
    pub fn selected(&self, question: &str) -> Option<&str> {
        self.selections.get(question).map(String::as_str)
    }

    /// Question ids with a selection, in sorted order.
    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.selections.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

impl<Q: Into<String>, O: Into<String>> FromIterator<(Q, O)> for Answers {
    fn from_iter<I: IntoIterator<Item = (Q, O)>>(iter: I) -> Self {
        let mut answers = Self::new();
        for (question, option) in iter {
            answers.select(question, option);
        }
        answers
    }
}
