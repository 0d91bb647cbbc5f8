//! Configuration constants for the trivia game engine
//!
//! This module contains the default values and hard limits used
//! throughout the engine. Defaults feed `GameConfig::default()`;
//! limits bound what a host is allowed to configure.

/// Game session configuration constants
pub mod game {
    use std::time::Duration;

    /// Default number of players required for a game to start
    pub const DEFAULT_MIN_PLAYER_COUNT: usize = 1;
    /// Default maximum number of players admitted to a game
    pub const DEFAULT_MAX_PLAYER_COUNT: usize = 25;
    /// Hard cap on the number of players in a single game session
    pub const MAX_PLAYER_COUNT: usize = 1000;
    /// Default length of the queue (join) window
    pub const DEFAULT_QUEUE_DURATION: Duration = Duration::from_secs(15);
    /// Default time players have to answer each question
    pub const DEFAULT_TIME_PER_QUESTION: Duration = Duration::from_secs(10);
    /// Default pause between a round summary and the next question
    pub const DEFAULT_TIME_BETWEEN_ROUNDS: Duration = Duration::from_secs(5);
    /// Default pause after a question's answer window closes
    pub const DEFAULT_TIME_BETWEEN_QUESTIONS: Duration = Duration::from_secs(5);
    /// Default allowance subtracted from measured answer latency to
    /// compensate for transport delivery lag
    pub const DEFAULT_LAG_ALLOWANCE: Duration = Duration::ZERO;
    /// Maximum queue/answer window length a host may configure, in seconds
    pub const MAX_WINDOW_SECONDS: u64 = 600;
}

/// Scoring configuration constants
pub mod scoring {
    /// Default minimum points awarded for a correct answer
    pub const DEFAULT_MIN_POINTS: u64 = 1;
    /// Default maximum points awarded for a correct answer
    pub const DEFAULT_MAX_POINTS: u64 = 100;
    /// Default consecutive correct answers needed to start earning a bonus
    pub const DEFAULT_STREAK_DEFINITION_LEVEL: u64 = 3;
    /// Default bonus points per streak increment past the definition level
    pub const DEFAULT_POINTS_PER_STREAK_AMOUNT: u64 = 10;
    /// Default cap on the streak bonus awarded in a single round
    pub const DEFAULT_MAXIMUM_STREAK_BONUS: u64 = 3;
}

/// Question configuration constants
pub mod question {
    /// Default number of questions fetched from the question source
    pub const DEFAULT_FETCH_AMOUNT: usize = 10;
    /// Maximum number of questions a single game may serve
    pub const MAX_QUESTION_COUNT: usize = 100;
    /// Category label assigned to custom questions without one
    pub const CUSTOM_CATEGORY: &str = "Custom";
    /// Difficulty label assigned to custom questions without one
    pub const CUSTOM_DIFFICULTY: &str = "easy";
}

/// Display configuration constants
pub mod display {
    /// Maximum number of standings entries included in outbound messages
    pub const STANDINGS_LIMIT: usize = 50;
    /// Number of players highlighted in the final podium
    pub const PODIUM_SIZE: usize = 3;
}
