//! Game configuration
//!
//! [`GameConfig`] bundles everything a host can tune about one game:
//! timing windows, scoring parameters, player bounds, question inputs and
//! an optional admission filter. Defaults come from [`crate::constants`]
//! as a plain `Default` impl; there is no shared defaults object to
//! mutate, so configurations can never leak between games.

use std::{fmt::Debug, sync::Arc, time::Duration};

use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    constants,
    ids::PlayerId,
    question::{CustomQuestion, FetchOptions},
};

/// Admission predicate consulted on every join request
///
/// Returning `false` rejects the candidate. Hosts with asynchronous
/// checks (role lookups, bans) resolve them before delivering the join
/// event and close over the result here.
pub type PlayerFilter = Arc<dyn Fn(&PlayerId) -> bool + Send + Sync>;

type ValidationResult = garde::Result;

/// Validates that a timing window is positive and within the hard cap
fn validate_window(field: &'static str, val: &Duration) -> ValidationResult {
    if val.is_zero() {
        Err(garde::Error::new(format!("{field} must be positive")))
    } else if val.as_secs() > constants::game::MAX_WINDOW_SECONDS {
        Err(garde::Error::new(format!(
            "{field} exceeds the maximum of {} seconds",
            constants::game::MAX_WINDOW_SECONDS
        )))
    } else {
        Ok(())
    }
}

/// Declarative configuration for one game session
///
/// Read-only during a game's run; validated once when the game is
/// created.
#[serde_with::serde_as]
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct GameConfig {
    /// Minimum number of players required for the round loop to start
    #[garde(range(min = 1, max = constants::game::MAX_PLAYER_COUNT))]
    pub min_player_count: usize,
    /// Maximum number of players; reaching it closes the queue early
    #[garde(range(min = 1, max = constants::game::MAX_PLAYER_COUNT))]
    pub max_player_count: usize,
    /// Length of the queue (join) window
    #[garde(custom(|v, _| validate_window("queue_duration", v)))]
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub queue_duration: Duration,
    /// Time players have to answer each question
    #[garde(custom(|v, _| validate_window("time_per_question", v)))]
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub time_per_question: Duration,
    /// Pause between a round summary and the next question
    #[garde(custom(|v, _| validate_window("time_between_rounds", v)))]
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub time_between_rounds: Duration,
    /// Pause after a question's answer window closes
    #[garde(custom(|v, _| validate_window("time_between_questions", v)))]
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub time_between_questions: Duration,
    /// Minimum points a correct answer can award (before streak bonus)
    #[garde(skip)]
    pub min_points: u64,
    /// Maximum points a correct answer can award (before streak bonus)
    #[garde(skip)]
    pub max_points: u64,
    /// Consecutive correct answers needed before the bonus starts
    #[garde(range(min = 1))]
    pub streak_definition_level: u64,
    /// Bonus points per streak increment past the definition level
    #[garde(skip)]
    pub points_per_streak_amount: u64,
    /// Cap on the streak bonus awarded in a single round
    #[garde(skip)]
    pub maximum_streak_bonus: u64,
    /// Whether round summaries reveal the correct answer
    #[garde(skip)]
    pub show_answers: bool,
    /// Options forwarded to the question source; `amount: 0` skips the
    /// fetch and serves custom questions only
    #[garde(skip)]
    pub fetch_options: FetchOptions,
    /// Host-supplied questions appended after the fetched ones
    #[garde(skip)]
    pub custom_questions: Vec<CustomQuestion>,
    /// Allowance subtracted from measured answer latency to compensate
    /// for transport delivery lag
    #[garde(skip)]
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub lag_allowance: Duration,
    /// Optional admission filter consulted on each join request
    #[garde(skip)]
    #[serde(skip)]
    pub player_filter: Option<PlayerFilter>,
}

impl Debug for GameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameConfig")
            .field("min_player_count", &self.min_player_count)
            .field("max_player_count", &self.max_player_count)
            .field("queue_duration", &self.queue_duration)
            .field("time_per_question", &self.time_per_question)
            .field("has_player_filter", &self.player_filter.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_player_count: constants::game::DEFAULT_MIN_PLAYER_COUNT,
            max_player_count: constants::game::DEFAULT_MAX_PLAYER_COUNT,
            queue_duration: constants::game::DEFAULT_QUEUE_DURATION,
            time_per_question: constants::game::DEFAULT_TIME_PER_QUESTION,
            time_between_rounds: constants::game::DEFAULT_TIME_BETWEEN_ROUNDS,
            time_between_questions: constants::game::DEFAULT_TIME_BETWEEN_QUESTIONS,
            min_points: constants::scoring::DEFAULT_MIN_POINTS,
            max_points: constants::scoring::DEFAULT_MAX_POINTS,
            streak_definition_level: constants::scoring::DEFAULT_STREAK_DEFINITION_LEVEL,
            points_per_streak_amount: constants::scoring::DEFAULT_POINTS_PER_STREAK_AMOUNT,
            maximum_streak_bonus: constants::scoring::DEFAULT_MAXIMUM_STREAK_BONUS,
            show_answers: true,
            fetch_options: FetchOptions::default(),
            custom_questions: Vec::new(),
            lag_allowance: constants::game::DEFAULT_LAG_ALLOWANCE,
            player_filter: None,
        }
    }
}

/// Fatal configuration errors detected at game creation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A field is out of its allowed bounds
    #[error("invalid game option: {0}")]
    Invalid(String),
    /// `min_player_count` exceeds `max_player_count`
    #[error("min_player_count ({min}) exceeds max_player_count ({max})")]
    PlayerBounds {
        /// The configured minimum
        min: usize,
        /// The configured maximum
        max: usize,
    },
    /// `min_points` exceeds `max_points`
    #[error("min_points ({min}) exceeds max_points ({max})")]
    PointBounds {
        /// The configured minimum
        min: u64,
        /// The configured maximum
        max: u64,
    },
    /// Fetched plus custom questions exceed the per-game cap
    #[error("{requested} questions requested, the maximum is {max}")]
    TooManyQuestions {
        /// Fetch amount plus custom question count
        requested: usize,
        /// The hard cap
        max: usize,
    },
}

impl GameConfig {
    /// Checks all field bounds and cross-field invariants
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first violated
    /// constraint. Called by
    /// [`GameManager::create_game`](crate::manager::GameManager::create_game);
    /// hosts constructing a [`Game`](crate::game::Game) directly should
    /// call it themselves.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate()
            .map_err(|report| ConfigError::Invalid(report.to_string()))?;

        if self.min_player_count > self.max_player_count {
            return Err(ConfigError::PlayerBounds {
                min: self.min_player_count,
                max: self.max_player_count,
            });
        }

        if self.min_points > self.max_points {
            return Err(ConfigError::PointBounds {
                min: self.min_points,
                max: self.max_points,
            });
        }

        let requested = self.fetch_options.amount + self.custom_questions.len();
        if requested > constants::question::MAX_QUESTION_COUNT {
            return Err(ConfigError::TooManyQuestions {
                requested,
                max: constants::question::MAX_QUESTION_COUNT,
            });
        }

        Ok(())
    }
}
