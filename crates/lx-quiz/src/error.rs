//! Quiz error types.

/// Quiz validation and scoring error.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// Question id is empty.
    #[error("Question at position {0} has an empty id")]
    EmptyQuestionId(usize),

    /// Two questions share an id.
    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(String),

    /// Two options of one question share an id.
    #[error("Duplicate option id {option} in question {question}")]
    DuplicateOption {
        /// Question id.
        question: String,
        /// Repeated option id.
        option: String,
    },

    /// `correct_option` does not name one of the question's options.
    #[error("Question {question} marks unknown option {option} as correct")]
    MissingCorrectOption {
        /// Question id.
        question: String,
        /// Option id given as correct.
        option: String,
    },

    /// An answer selects an option the question does not have.
    #[error("Answer for question {question} selects unknown option {option}")]
    UnknownOption {
        /// Question id.
        question: String,
        /// Selected option id.
        option: String,
    },

    /// Passing percentage outside `0..=100`.
    #[error("Passing percentage must be between 0 and 100, got {0}")]
    InvalidThreshold(f64),
}
