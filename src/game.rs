//! Core game session state machine
//!
//! This module contains the main game struct and logic for one trivia
//! session: queue admission, question preparation, the timed round loop,
//! scoring with time and streak bonuses, and leaderboard maintenance.
//!
//! The engine is cooperative and single-threaded. It never sleeps or
//! spawns: every timing window is realized by handing an [`AlarmMessage`]
//! to the host's `schedule_alarm` collaborator, which delivers it back
//! through [`Game::receive_alarm`] after the requested delay. Alarms
//! carry the round index they were armed for, so a timer that fires after
//! its round already closed is a no-op.

use std::{fmt::Debug, time::Duration};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;
use web_time::SystemTime;

use crate::{
    TruncatedVec,
    config::GameConfig,
    constants,
    ids::{PlayerId, SessionKey},
    leaderboard::{Leaderboard, Standing},
    player::Player,
    question::{
        FetchError, Question, QuestionError, QuestionKind, QuestionSource, prepare_custom,
        prepare_fetched,
    },
    session::Sink,
};

/// The externally visible phase of a game
///
/// Transitions are monotonic: `Pending → Queue → InProgress → Ended`,
/// never backward. Once `Ended` is reached every operation is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Created but the queue has not been opened yet
    Pending,
    /// Accepting join requests
    Queue,
    /// Serving questions
    InProgress,
    /// Finished; removed from the manager's registry
    Ended,
}

/// Why a game reached the `Ended` phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Every question was served
    Completed,
    /// The queue timed out below `min_player_count`
    FailedMinimum,
    /// The host ended the game early
    Terminated,
    /// Question preparation failed; see [`Game::fault`]
    Faulted,
}

/// Why the queue window closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueCloseReason {
    /// The configured queue duration elapsed
    TimedOut,
    /// The roster reached `max_player_count`
    CapacityReached,
}

/// Timer messages the engine asks its host to deliver back later
///
/// The host must call [`Game::receive_alarm`] with the message once the
/// paired duration has elapsed. Delivering a stale alarm is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmMessage {
    /// The queue window expired
    QueueDeadline,
    /// The inter-round delay before the given question elapsed
    BeginRound {
        /// Index of the question to serve
        index: usize,
    },
    /// The answer window for the given question expired
    AnswerDeadline {
        /// Index of the question the window belonged to
        index: usize,
    },
}

/// Outbound messages emitted to the presentation sink
///
/// The engine never formats text; each variant carries the data a host
/// needs to render its own embeds or messages.
#[skip_serializing_none]
#[serde_with::serde_as]
#[derive(Debug, Clone, Serialize)]
pub enum UpdateMessage {
    /// The queue window opened
    QueueStarted {
        /// Length of the join window
        #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
        duration: Duration,
        /// Players required for the game to start
        min_player_count: usize,
        /// Players at which the queue closes early
        max_player_count: usize,
    },
    /// A candidate was admitted to the roster
    PlayerJoined {
        /// The admitted player
        player: PlayerId,
        /// Roster size after admission
        player_count: usize,
    },
    /// The current roster, emitted after every admission
    QueueState {
        /// Admitted players in join order
        players: TruncatedVec<PlayerId>,
    },
    /// The queue timed out with too few players; the game is over
    QueueExpired {
        /// Players admitted before the timeout
        player_count: usize,
        /// The configured minimum that was not reached
        min_player_count: usize,
    },
    /// Questions are prepared and the round loop is starting
    GameStarted {
        /// Number of questions the game will serve
        question_count: usize,
        /// Number of admitted players
        player_count: usize,
    },
    /// A question was emitted and its answer window opened
    Question {
        /// Index of this question (0-based)
        index: usize,
        /// Total number of questions
        count: usize,
        /// The question text
        text: String,
        /// Category label
        category: String,
        /// Difficulty label
        difficulty: String,
        /// Question kind
        kind: QuestionKind,
        /// Displayable answer choices in presentation order
        answers: Vec<String>,
        /// Length of the answer window
        #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
        duration: Duration,
    },
    /// Number of players who have answered the current question
    AnswersCount(usize),
    /// A round closed; standings after scoring
    RoundSummary {
        /// Index of the closed round
        index: usize,
        /// Total number of questions
        count: usize,
        /// The correct answer, present when `show_answers` is set
        correct_answer: Option<String>,
        /// Standings sorted by points descending
        standings: TruncatedVec<Standing>,
    },
    /// The last round closed; final results
    FinalStandings {
        /// The top players
        podium: Vec<Standing>,
        /// Full final standings
        standings: TruncatedVec<Standing>,
    },
    /// The game ended
    Ended {
        /// Why the game ended
        reason: EndReason,
        /// Standings at the moment the game ended
        standings: TruncatedVec<Standing>,
    },
}

impl UpdateMessage {
    /// Converts the message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// Panics if serialization fails, which cannot happen with the
    /// default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Recoverable rejections of a join request
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JoinError {
    /// The host's admission filter rejected the candidate
    #[error("rejected by the admission filter")]
    FilterRejected,
    /// The candidate is already on the roster
    #[error("already queued for this game")]
    AlreadyQueued,
    /// The queue is not open (not started yet, closed, or game over)
    #[error("the queue is not open")]
    QueueClosed,
}

/// Recoverable rejections of an answer submission
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnswerError {
    /// No answer window is currently open
    #[error("no question is accepting answers")]
    NoOpenWindow,
    /// The answer arrived past the logical deadline
    #[error("the answer arrived after the deadline")]
    TooLate,
    /// The submitter is not on the roster
    #[error("not part of this match")]
    NotInMatch,
    /// The submitter already answered this question
    #[error("already answered this question")]
    AlreadyAnswered,
    /// The chosen answer index does not exist for this question
    #[error("chosen answer is out of range")]
    InvalidChoice,
}

/// Fatal failures during game initialization
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A custom question failed validation
    #[error(transparent)]
    Question(#[from] QuestionError),
    /// The question source failed
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// No questions were resolved for the round loop
    #[error("no questions loaded; set a fetch amount or supply custom questions")]
    NoQuestions,
}

/// Receipt returned to the caller for an accepted answer
///
/// Carries what a host needs for its ephemeral reply to the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerReceipt {
    /// Whether the submitted answer was correct
    pub correct: bool,
    /// Points awarded for this answer, streak bonus included
    pub points_awarded: u64,
    /// The streak-bonus portion of `points_awarded`
    pub streak_bonus: u64,
    /// Time between question emission and this answer
    pub time_elapsed: Duration,
    /// The player's point total after this answer
    pub total_points: u64,
}

/// Which question is live and whether its answer window is open
#[derive(Debug, Clone, Copy)]
struct CurrentRound {
    index: usize,
    phase: RoundPhase,
}

#[derive(Debug, Clone, Copy)]
enum RoundPhase {
    /// The answer window is open; `asked_at` is the emission timestamp
    Collecting { asked_at: SystemTime },
    /// Between the round's close and the next question
    Break,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Pending,
    Queue,
    InProgress(CurrentRound),
    Ended(EndReason),
}

/// One trivia game session
///
/// Created through [`GameManager::create_game`](crate::manager::GameManager::create_game)
/// (or directly via [`Game::new`] after validating the config), driven by
/// the host delivering join requests, answer events and alarms.
pub struct Game {
    key: SessionKey,
    config: GameConfig,
    /// Admitted players in join order; insertion order is what breaks
    /// leaderboard ties
    players: IndexMap<PlayerId, Player>,
    questions: Vec<Question>,
    leaderboard: Leaderboard,
    state: State,
    fault: Option<GameError>,
}

impl Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("key", &self.key)
            .field("phase", &self.phase())
            .field("player_count", &self.players.len())
            .finish_non_exhaustive()
    }
}

// Accessors
impl Game {
    /// Creates a new game in the `Pending` phase
    ///
    /// The config should have passed [`GameConfig::check`];
    /// [`GameManager::create_game`](crate::manager::GameManager::create_game)
    /// does this for you.
    pub fn new(key: SessionKey, config: GameConfig) -> Self {
        Self {
            key,
            config,
            players: IndexMap::new(),
            questions: Vec::new(),
            leaderboard: Leaderboard::default(),
            state: State::Pending,
            fault: None,
        }
    }

    /// The session key this game is registered under
    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    /// This game's configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current phase of the game
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Pending => Phase::Pending,
            State::Queue => Phase::Queue,
            State::InProgress(_) => Phase::InProgress,
            State::Ended(_) => Phase::Ended,
        }
    }

    /// Whether the game has ended
    pub fn ended(&self) -> bool {
        matches!(self.state, State::Ended(_))
    }

    /// Why the game ended, once it has
    pub fn end_reason(&self) -> Option<EndReason> {
        match self.state {
            State::Ended(reason) => Some(reason),
            _ => None,
        }
    }

    /// The initialization failure that faulted the game, if any
    pub fn fault(&self) -> Option<&GameError> {
        self.fault.as_ref()
    }

    /// Number of admitted players
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Looks up an admitted player
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Admitted players in join order
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// The prepared questions (empty until the round loop starts)
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The leaderboard view of the roster
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    fn queue_state_message(&self) -> UpdateMessage {
        UpdateMessage::QueueState {
            players: TruncatedVec::new(
                self.players.keys().cloned(),
                constants::display::STANDINGS_LIMIT,
                self.players.len(),
            ),
        }
    }
}

// Queue phase
impl Game {
    /// Opens the queue window
    ///
    /// Emits the queue announcement and schedules the queue deadline.
    /// Does nothing unless the game is `Pending`.
    pub fn start_queue<K: Sink, S: FnMut(AlarmMessage, Duration)>(
        &mut self,
        sink: &K,
        mut schedule_alarm: S,
    ) {
        if !matches!(self.state, State::Pending) {
            return;
        }

        self.state = State::Queue;

        sink.send_message(&UpdateMessage::QueueStarted {
            duration: self.config.queue_duration,
            min_player_count: self.config.min_player_count,
            max_player_count: self.config.max_player_count,
        });

        schedule_alarm(AlarmMessage::QueueDeadline, self.config.queue_duration);
    }

    /// Requests admission of a candidate to the queue
    ///
    /// On success the candidate becomes a [`Player`], a join announcement
    /// and the updated roster are emitted, and — if the roster just
    /// reached `max_player_count` — the queue closes early and the round
    /// loop starts.
    ///
    /// # Errors
    ///
    /// * [`JoinError::QueueClosed`] when no queue window is open
    /// * [`JoinError::FilterRejected`] when the admission filter says no
    /// * [`JoinError::AlreadyQueued`] on duplicate requests (idempotent,
    ///   no mutation)
    ///
    /// A question-preparation failure triggered by a capacity close does
    /// not fail the join; it faults the game and is observable through
    /// [`Game::fault`].
    pub fn request_join<K: Sink, S: FnMut(AlarmMessage, Duration), Q: QuestionSource>(
        &mut self,
        candidate: PlayerId,
        sink: &K,
        mut schedule_alarm: S,
        question_source: &mut Q,
    ) -> Result<(), JoinError> {
        if !matches!(self.state, State::Queue) {
            return Err(JoinError::QueueClosed);
        }

        if let Some(filter) = &self.config.player_filter {
            if !filter(&candidate) {
                return Err(JoinError::FilterRejected);
            }
        }

        if self.players.contains_key(&candidate) {
            return Err(JoinError::AlreadyQueued);
        }

        self.players
            .insert(candidate.clone(), Player::new(candidate.clone()));

        sink.send_message(&UpdateMessage::PlayerJoined {
            player: candidate,
            player_count: self.players.len(),
        });
        sink.send_message(&self.queue_state_message());

        if self.players.len() >= self.config.max_player_count {
            // Capacity always proceeds to the round loop, even below the
            // minimum; only a timeout close enforces it. A preparation
            // failure here is recorded on the game, not the joiner.
            let _ = self.close_queue(
                QueueCloseReason::CapacityReached,
                sink,
                &mut schedule_alarm,
                question_source,
            );
        }

        Ok(())
    }

    fn close_queue<K: Sink, S: FnMut(AlarmMessage, Duration), Q: QuestionSource>(
        &mut self,
        reason: QueueCloseReason,
        sink: &K,
        schedule_alarm: &mut S,
        question_source: &mut Q,
    ) -> Result<(), GameError> {
        if !matches!(self.state, State::Queue) {
            return Ok(());
        }

        if matches!(reason, QueueCloseReason::TimedOut)
            && self.players.len() < self.config.min_player_count
        {
            sink.send_message(&UpdateMessage::QueueExpired {
                player_count: self.players.len(),
                min_player_count: self.config.min_player_count,
            });
            self.conclude(EndReason::FailedMinimum, sink);
            return Ok(());
        }

        self.begin_rounds(sink, schedule_alarm, question_source)
    }

    fn begin_rounds<K: Sink, S: FnMut(AlarmMessage, Duration), Q: QuestionSource>(
        &mut self,
        sink: &K,
        schedule_alarm: &mut S,
        question_source: &mut Q,
    ) -> Result<(), GameError> {
        self.leaderboard.rebuild(self.players.values());

        let fetched = if self.config.fetch_options.amount > 0 {
            match question_source.fetch(&self.config.fetch_options) {
                Ok(records) => records,
                Err(error) => return Err(self.record_fault(error.into(), sink)),
            }
        } else {
            Vec::new()
        };

        let mut questions = prepare_fetched(fetched);
        match prepare_custom(&self.config.custom_questions) {
            Ok(custom) => questions.extend(custom),
            Err(error) => return Err(self.record_fault(error.into(), sink)),
        }

        if questions.is_empty() {
            return Err(self.record_fault(GameError::NoQuestions, sink));
        }

        self.questions = questions;
        self.state = State::InProgress(CurrentRound {
            index: 0,
            phase: RoundPhase::Break,
        });

        sink.send_message(&UpdateMessage::GameStarted {
            question_count: self.questions.len(),
            player_count: self.players.len(),
        });

        schedule_alarm(
            AlarmMessage::BeginRound { index: 0 },
            self.config.time_between_rounds,
        );

        Ok(())
    }
}

// Round loop
impl Game {
    /// Delivers a previously scheduled alarm back to the engine
    ///
    /// Stale alarms — a deadline for a round that already closed, or any
    /// alarm after the game ended — are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`GameError`] when the queue deadline triggered question
    /// preparation and it failed; the game is already `Ended` with reason
    /// [`EndReason::Faulted`] when that happens.
    pub fn receive_alarm<K: Sink, S: FnMut(AlarmMessage, Duration), Q: QuestionSource>(
        &mut self,
        message: AlarmMessage,
        sink: &K,
        mut schedule_alarm: S,
        question_source: &mut Q,
    ) -> Result<(), GameError> {
        match message {
            AlarmMessage::QueueDeadline => self.close_queue(
                QueueCloseReason::TimedOut,
                sink,
                &mut schedule_alarm,
                question_source,
            ),
            AlarmMessage::BeginRound { index } => {
                self.begin_round(index, sink, &mut schedule_alarm);
                Ok(())
            }
            AlarmMessage::AnswerDeadline { index } => {
                self.finish_round(index, sink, &mut schedule_alarm);
                Ok(())
            }
        }
    }

    /// Emits the question at `index` and opens its answer window
    fn begin_round<K: Sink, S: FnMut(AlarmMessage, Duration)>(
        &mut self,
        index: usize,
        sink: &K,
        schedule_alarm: &mut S,
    ) {
        let State::InProgress(round) = &mut self.state else {
            return;
        };
        if round.index != index || !matches!(round.phase, RoundPhase::Break) {
            return;
        }
        let Some(question) = self.questions.get(index) else {
            return;
        };

        round.phase = RoundPhase::Collecting {
            asked_at: SystemTime::now(),
        };

        sink.send_message(&UpdateMessage::Question {
            index,
            count: self.questions.len(),
            text: question.text().to_owned(),
            category: question.category().to_owned(),
            difficulty: question.difficulty().to_owned(),
            kind: question.kind(),
            answers: question.all_answers().to_vec(),
            duration: self.config.time_per_question,
        });

        schedule_alarm(
            AlarmMessage::AnswerDeadline { index },
            self.config.time_per_question,
        );
    }

    /// Submits an answer for the currently open question
    ///
    /// `at` is the transport timestamp of the answer event; the elapsed
    /// time it implies (minus the configured lag allowance) drives both
    /// the deadline check and the time-based score.
    ///
    /// Closes the answer window early when every player has answered.
    ///
    /// # Errors
    ///
    /// All variants of [`AnswerError`]; none of them mutate any state,
    /// so duplicate or late deliveries are harmless.
    pub fn receive_answer<K: Sink, S: FnMut(AlarmMessage, Duration)>(
        &mut self,
        submitter: &PlayerId,
        choice_index: usize,
        at: SystemTime,
        sink: &K,
        mut schedule_alarm: S,
    ) -> Result<AnswerReceipt, AnswerError> {
        let State::InProgress(round) = self.state else {
            return Err(AnswerError::NoOpenWindow);
        };
        let RoundPhase::Collecting { asked_at } = round.phase else {
            return Err(AnswerError::NoOpenWindow);
        };

        // Transport delivery can lag behind the logical deadline; the
        // collector staying open is not enough on its own.
        let time_elapsed = at
            .duration_since(asked_at)
            .unwrap_or_default()
            .saturating_sub(self.config.lag_allowance);
        if time_elapsed > self.config.time_per_question {
            return Err(AnswerError::TooLate);
        }

        if !self.players.contains_key(submitter) {
            return Err(AnswerError::NotInMatch);
        }

        let question = &self.questions[round.index];
        let Some(choice) = question.all_answers().get(choice_index) else {
            return Err(AnswerError::InvalidChoice);
        };
        let correct = question.check_answer(choice);

        let config = &self.config;
        let Some(player) = self.players.get_mut(submitter) else {
            return Err(AnswerError::NotInMatch);
        };
        if player.has_answered() {
            return Err(AnswerError::AlreadyAnswered);
        }

        player.mark_answered();
        player.set_is_correct(correct);

        let (points_awarded, streak_bonus) = if correct {
            let base = Self::calculate_base_points(
                time_elapsed,
                config.time_per_question,
                config.max_points,
                config.min_points,
            );
            player.increment_streak();
            let bonus = Self::calculate_streak_bonus(
                player.correct_answer_streak(),
                config.streak_definition_level,
                config.points_per_streak_amount,
                config.maximum_streak_bonus,
            );
            player.add_points(base + bonus);
            (base + bonus, bonus)
        } else {
            player.reset_streak();
            (0, 0)
        };

        let receipt = AnswerReceipt {
            correct,
            points_awarded,
            streak_bonus,
            time_elapsed,
            total_points: player.points(),
        };

        let answered_count = self.players.values().filter(|p| p.has_answered()).count();
        if answered_count == self.players.len() {
            self.finish_round(round.index, sink, &mut schedule_alarm);
        } else {
            sink.send_message(&UpdateMessage::AnswersCount(answered_count));
        }

        Ok(receipt)
    }

    /// Closes the answer window of round `index` and emits its summary
    ///
    /// Reached from the deadline alarm or from the last player
    /// answering; whichever comes second finds the phase advanced and
    /// does nothing.
    fn finish_round<K: Sink, S: FnMut(AlarmMessage, Duration)>(
        &mut self,
        index: usize,
        sink: &K,
        schedule_alarm: &mut S,
    ) {
        let State::InProgress(round) = &self.state else {
            return;
        };
        if round.index != index || !matches!(round.phase, RoundPhase::Collecting { .. }) {
            return;
        }

        for player in self.players.values_mut() {
            if !player.has_answered() {
                player.reset_streak();
            }
        }

        self.leaderboard.rebuild(self.players.values());

        sink.send_message(&UpdateMessage::RoundSummary {
            index,
            count: self.questions.len(),
            correct_answer: self
                .config
                .show_answers
                .then(|| self.questions[index].correct_answer().to_owned()),
            standings: self.leaderboard.truncated(),
        });

        for player in self.players.values_mut() {
            player.prepare_for_round();
        }

        let next = index + 1;
        if next < self.questions.len() {
            self.state = State::InProgress(CurrentRound {
                index: next,
                phase: RoundPhase::Break,
            });
            schedule_alarm(
                AlarmMessage::BeginRound { index: next },
                self.config.time_between_rounds + self.config.time_between_questions,
            );
        } else {
            sink.send_message(&UpdateMessage::FinalStandings {
                podium: self.leaderboard.podium(),
                standings: self.leaderboard.truncated(),
            });
            self.conclude(EndReason::Completed, sink);
        }
    }

    /// Ends the game early
    ///
    /// The only cancellation primitive: the round loop checks for the
    /// `Ended` state before every round and ignores events afterwards.
    /// Idempotent.
    pub fn end<K: Sink>(&mut self, sink: &K) {
        if self.ended() {
            return;
        }
        self.conclude(EndReason::Terminated, sink);
    }

    fn record_fault<K: Sink>(&mut self, error: GameError, sink: &K) -> GameError {
        self.fault = Some(error.clone());
        self.conclude(EndReason::Faulted, sink);
        error
    }

    fn conclude<K: Sink>(&mut self, reason: EndReason, sink: &K) {
        self.leaderboard.finalize();
        self.state = State::Ended(reason);
        sink.send_message(&UpdateMessage::Ended {
            reason,
            standings: self.leaderboard.truncated(),
        });
        sink.close();
    }
}

// Scoring
impl Game {
    /// Computes the time-based points for a correct answer
    ///
    /// The elapsed proportion of the answer window is rounded to two
    /// significant digits, then points fall from `max_points` by the
    /// ceiling of the proportional span. Faster answers never score
    /// below slower ones, and the result stays within
    /// `[min_points, max_points]`.
    fn calculate_base_points(
        time_elapsed: Duration,
        time_per_question: Duration,
        max_points: u64,
        min_points: u64,
    ) -> u64 {
        let time_proportion = Self::round_to_two_significant(
            time_elapsed.as_millis() as f64 / time_per_question.as_millis() as f64,
        );

        max_points - ((max_points - min_points) as f64 * time_proportion).ceil() as u64
    }

    /// Rounds to two significant decimal digits
    fn round_to_two_significant(value: f64) -> f64 {
        if value == 0.0 {
            return 0.0;
        }
        let factor = 10f64.powf(1.0 - value.abs().log10().floor());
        (value * factor).round() / factor
    }

    /// Computes the streak bonus for a player's current streak
    ///
    /// Zero below the definition level; above it the bonus grows by
    /// `points_per_streak_amount` per consecutive correct answer, capped
    /// at `maximum_streak_bonus`.
    fn calculate_streak_bonus(
        streak: u64,
        streak_definition_level: u64,
        points_per_streak_amount: u64,
        maximum_streak_bonus: u64,
    ) -> u64 {
        if streak < streak_definition_level {
            return 0;
        }

        ((streak - (streak_definition_level - 1)) * points_per_streak_amount)
            .min(maximum_streak_bonus)
    }
}
