//! Question normalization and the question source seam
//!
//! This module turns the two question inputs a game can have — records
//! fetched from an external trivia database and custom questions supplied
//! by the host — into the uniform [`Question`] shape the round loop
//! serves. Normalization is a pure transformation: shuffling the answer
//! list is its only nondeterminism.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;

/// The kind of a trivia question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// A question with one correct answer among several choices
    MultipleChoice,
    /// A true/false question
    Boolean,
}

/// A raw question record as returned by a [`QuestionSource`]
///
/// Mirrors the shape of open trivia databases: labels are plain strings
/// and the answers are unshuffled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQuestion {
    /// The question text
    pub text: String,
    /// Category label
    pub category: String,
    /// Difficulty label
    pub difficulty: String,
    /// Question kind
    pub kind: QuestionKind,
    /// The correct answer string
    pub correct_answer: String,
    /// The incorrect answer strings
    pub incorrect_answers: Vec<String>,
}

/// A host-supplied question descriptor
///
/// All fields are optional so descriptors can be deserialized from host
/// configuration; [`prepare_custom`] validates them. The constructors
/// produce well-formed descriptors directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomQuestion {
    /// The question text
    pub text: Option<String>,
    /// Category label; defaults to `"Custom"` when absent
    pub category: Option<String>,
    /// Difficulty label; defaults to `"easy"` when absent
    pub difficulty: Option<String>,
    /// Question kind
    pub kind: Option<QuestionKind>,
    /// The correct answer string
    pub correct_answer: Option<String>,
    /// The incorrect answer strings; derived for boolean questions
    pub incorrect_answers: Option<Vec<String>>,
}

impl CustomQuestion {
    /// Creates a multiple-choice question descriptor
    pub fn multiple_choice(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            text: Some(text.into()),
            kind: Some(QuestionKind::MultipleChoice),
            correct_answer: Some(correct_answer.into()),
            incorrect_answers: Some(incorrect_answers.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Creates a true/false question descriptor
    pub fn boolean(text: impl Into<String>, answer: bool) -> Self {
        Self {
            text: Some(text.into()),
            kind: Some(QuestionKind::Boolean),
            correct_answer: Some(answer.to_string()),
            incorrect_answers: Some(vec![(!answer).to_string()]),
            ..Self::default()
        }
    }

    /// Sets the category label
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the difficulty label
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }
}

/// Errors raised while validating custom questions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    /// A custom question descriptor lacks a required field
    #[error("custom question is missing required field `{0}`")]
    MissingField(&'static str),
}

/// An immutable, prepared trivia question
///
/// Owned by the game for the duration of one round. `all_answers` is the
/// displayable permutation of correct plus incorrect answers; for boolean
/// questions it is the fixed `["true", "false"]` order, since the two
/// canonical options need no shuffling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    text: String,
    category: String,
    difficulty: String,
    kind: QuestionKind,
    correct_answer: String,
    incorrect_answers: Vec<String>,
    all_answers: Vec<String>,
}

impl Question {
    fn new(
        text: String,
        category: String,
        difficulty: String,
        kind: QuestionKind,
        correct_answer: String,
        incorrect_answers: Vec<String>,
    ) -> Self {
        let all_answers = match kind {
            QuestionKind::Boolean => vec!["true".to_owned(), "false".to_owned()],
            QuestionKind::MultipleChoice => {
                let mut answers = Vec::with_capacity(incorrect_answers.len() + 1);
                answers.push(correct_answer.clone());
                answers.extend(incorrect_answers.iter().cloned());
                fastrand::shuffle(&mut answers);
                answers
            }
        };

        Self {
            text,
            category,
            difficulty,
            kind,
            correct_answer,
            incorrect_answers,
            all_answers,
        }
    }

    /// The question text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Category label
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Difficulty label
    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    /// The kind of this question
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// The correct answer string
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// The displayable answer list (shuffled for multiple choice)
    pub fn all_answers(&self) -> &[String] {
        &self.all_answers
    }

    /// Checks a submitted answer against the correct one,
    /// case-insensitively
    pub fn check_answer(&self, answer: &str) -> bool {
        answer.to_lowercase() == self.correct_answer.to_lowercase()
    }
}

/// Normalizes fetched question records into prepared questions
pub fn prepare_fetched(records: Vec<RawQuestion>) -> Vec<Question> {
    records
        .into_iter()
        .map(|r| {
            Question::new(
                r.text,
                r.category,
                r.difficulty,
                r.kind,
                r.correct_answer,
                r.incorrect_answers,
            )
        })
        .collect()
}

/// Validates and normalizes host-supplied custom questions
///
/// Missing category or difficulty fall back to the `"Custom"` and
/// `"easy"` labels; a boolean question's incorrect answer is derived from
/// the correct one when absent.
///
/// # Errors
///
/// Returns [`QuestionError::MissingField`] when a descriptor lacks its
/// text, kind, correct answer, or (for multiple choice) incorrect
/// answers.
pub fn prepare_custom(descriptors: &[CustomQuestion]) -> Result<Vec<Question>, QuestionError> {
    descriptors
        .iter()
        .map(|d| {
            let text = d
                .text
                .clone()
                .ok_or(QuestionError::MissingField("text"))?;
            let kind = d.kind.ok_or(QuestionError::MissingField("kind"))?;
            let correct_answer = d
                .correct_answer
                .clone()
                .ok_or(QuestionError::MissingField("correct_answer"))?;
            let incorrect_answers = match (&d.incorrect_answers, kind) {
                (Some(answers), _) if !answers.is_empty() => answers.clone(),
                (_, QuestionKind::Boolean) => {
                    vec![if correct_answer.eq_ignore_ascii_case("true") {
                        "false".to_owned()
                    } else {
                        "true".to_owned()
                    }]
                }
                _ => return Err(QuestionError::MissingField("incorrect_answers")),
            };

            Ok(Question::new(
                text,
                d.category
                    .clone()
                    .unwrap_or_else(|| constants::question::CUSTOM_CATEGORY.to_owned()),
                d.difficulty
                    .clone()
                    .unwrap_or_else(|| constants::question::CUSTOM_DIFFICULTY.to_owned()),
                kind,
                correct_answer,
                incorrect_answers,
            ))
        })
        .collect()
}

/// Options passed to the question source for one game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchOptions {
    /// Number of questions to fetch; zero skips the fetch entirely
    pub amount: usize,
    /// Optional category filter
    pub category: Option<String>,
    /// Optional difficulty filter
    pub difficulty: Option<String>,
    /// Optional question-kind filter
    pub kind: Option<QuestionKind>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            amount: constants::question::DEFAULT_FETCH_AMOUNT,
            category: None,
            difficulty: None,
            kind: None,
        }
    }
}

/// Failure reported by a question source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("question fetch failed: {0}")]
pub struct FetchError(pub String);

/// Trait for the external supplier of trivia questions
///
/// Invoked at most once per game, when the queue closes successfully.
/// Hosts typically bind this to an HTTP client for an open trivia
/// database; tests use an in-memory source.
pub trait QuestionSource {
    /// Fetches raw question records matching the given options
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the source is unavailable; the game
    /// aborts initialization and surfaces the failure to its creator.
    fn fetch(&mut self, options: &FetchOptions) -> Result<Vec<RawQuestion>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn capital_question() -> CustomQuestion {
        CustomQuestion::multiple_choice(
            "What is the capital of France?",
            "Paris",
            ["Rome", "Berlin", "Madrid"],
        )
    }

    #[test]
    fn test_multiple_choice_shuffle_is_permutation() {
        for _ in 0..1000 {
            let question = &prepare_custom(&[capital_question()]).unwrap()[0];
            assert_eq!(question.all_answers().len(), 4);
            let unique: HashSet<&str> = question.all_answers().iter().map(String::as_str).collect();
            assert_eq!(
                unique,
                HashSet::from(["Paris", "Rome", "Berlin", "Madrid"])
            );
        }
    }

    #[test]
    fn test_check_answer_is_case_insensitive() {
        let question = &prepare_custom(&[capital_question()]).unwrap()[0];
        assert!(question.check_answer("paris"));
        assert!(question.check_answer("PARIS"));
        assert!(!question.check_answer("Rome"));
    }

    #[test]
    fn test_boolean_answers_fixed_order() {
        let question = &prepare_custom(&[CustomQuestion::boolean("The sky is blue.", true)])
            .unwrap()[0];
        assert_eq!(question.all_answers(), ["true", "false"]);
        assert!(question.check_answer("true"));
        assert!(question.check_answer("TRUE"));
        assert!(!question.check_answer("false"));
    }

    #[test]
    fn test_boolean_incorrect_answer_derived() {
        let descriptor = CustomQuestion {
            text: Some("Water is dry.".to_owned()),
            kind: Some(QuestionKind::Boolean),
            correct_answer: Some("false".to_owned()),
            ..CustomQuestion::default()
        };
        let question = &prepare_custom(&[descriptor]).unwrap()[0];
        assert_eq!(question.correct_answer(), "false");
        assert_eq!(question.all_answers(), ["true", "false"]);
    }

    #[test]
    fn test_custom_defaults_for_labels() {
        let question = &prepare_custom(&[capital_question()]).unwrap()[0];
        assert_eq!(question.category(), "Custom");
        assert_eq!(question.difficulty(), "easy");

        let labelled = capital_question()
            .with_category("Geography")
            .with_difficulty("hard");
        let question = &prepare_custom(&[labelled]).unwrap()[0];
        assert_eq!(question.category(), "Geography");
        assert_eq!(question.difficulty(), "hard");
    }

    #[test]
    fn test_missing_fields_are_rejected_by_name() {
        let mut missing_text = capital_question();
        missing_text.text = None;
        assert_eq!(
            prepare_custom(&[missing_text]),
            Err(QuestionError::MissingField("text"))
        );

        let mut missing_kind = capital_question();
        missing_kind.kind = None;
        assert_eq!(
            prepare_custom(&[missing_kind]),
            Err(QuestionError::MissingField("kind"))
        );

        let mut missing_correct = capital_question();
        missing_correct.correct_answer = None;
        assert_eq!(
            prepare_custom(&[missing_correct]),
            Err(QuestionError::MissingField("correct_answer"))
        );

        let mut missing_incorrect = capital_question();
        missing_incorrect.incorrect_answers = Some(Vec::new());
        assert_eq!(
            prepare_custom(&[missing_incorrect]),
            Err(QuestionError::MissingField("incorrect_answers"))
        );
    }

    #[test]
    fn test_prepare_fetched_keeps_labels() {
        let prepared = prepare_fetched(vec![RawQuestion {
            text: "2 + 2?".to_owned(),
            category: "Mathematics".to_owned(),
            difficulty: "medium".to_owned(),
            kind: QuestionKind::MultipleChoice,
            correct_answer: "4".to_owned(),
            incorrect_answers: vec!["3".to_owned(), "5".to_owned(), "22".to_owned()],
        }]);

        assert_eq!(prepared.len(), 1);
        assert_eq!(prepared[0].category(), "Mathematics");
        assert_eq!(prepared[0].kind(), QuestionKind::MultipleChoice);
        assert_eq!(prepared[0].all_answers().len(), 4);
    }
}
