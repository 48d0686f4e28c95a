//! Multiple-choice quiz scoring and review.
//!
//! A [`Quiz`] is loaded from JSON with its prompts, options and explanations
//! classified as [`Content`](lx_delta::Content). The [`Scorer`] compares the
//! learner's [`Answers`] against the correct options, computes a percentage
//! against a passing threshold, and renders a per-question review.
//!
//! # Example
//!
//! ```
//! use lx_quiz::{Answers, Quiz, Scorer};
//!
//! let quiz: Quiz = serde_json::from_str(r#"{
//!     "title": "Basics",
//!     "questions": [{
//!         "id": "q1",
//!         "prompt": {"ops": [{"insert": "2 + 2?"}]},
//!         "options": [{"id": "a", "text": "4"}, {"id": "b", "text": "5"}],
//!         "correct_option": "a"
//!     }]
//! }"#).unwrap();
//! let answers: Answers = [("q1", "a")].into_iter().collect();
//!
//! let result = Scorer::default().score(&quiz, &answers).unwrap();
//! assert!(result.passed);
//! assert_eq!(result.reviews[0].prompt_html, "2 + 2?");
//! ```

mod error;
mod quiz;
mod score;

pub use error::QuizError;
pub use quiz::{Answers, Question, Quiz, QuizOption};
pub use score::{
    DEFAULT_PASSING_PERCENTAGE, OptionReview, QuestionReview, QuizResult, Scorer,
};
