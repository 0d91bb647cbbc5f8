//! Per-game participant state
//!
//! A [`Player`] is created when a candidate is admitted during the queue
//! phase and dropped when its game ends. All mutation goes through the
//! narrow methods here so the round loop's invariants (per-round flags,
//! streak bookkeeping) cannot be broken from outside.

use serde::Serialize;

use crate::ids::PlayerId;

/// A participant admitted to one game
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    id: PlayerId,
    points: u64,
    has_answered: bool,
    is_correct: bool,
    correct_answer_streak: u64,
}

impl Player {
    /// Creates a fresh participant with zero points
    pub(crate) fn new(id: PlayerId) -> Self {
        Self {
            id,
            points: 0,
            has_answered: false,
            is_correct: false,
            correct_answer_streak: 0,
        }
    }

    /// The platform handle this player joined under
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    /// Current point total
    pub fn points(&self) -> u64 {
        self.points
    }

    /// Whether this player has answered the current question
    pub fn has_answered(&self) -> bool {
        self.has_answered
    }

    /// Whether this player's answer to the current question was correct
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Count of consecutive rounds answered correctly
    pub fn correct_answer_streak(&self) -> u64 {
        self.correct_answer_streak
    }

    pub(crate) fn add_points(&mut self, points: u64) {
        self.points += points;
    }

    pub(crate) fn mark_answered(&mut self) {
        self.has_answered = true;
    }

    pub(crate) fn set_is_correct(&mut self, correct: bool) {
        self.is_correct = correct;
    }

    pub(crate) fn increment_streak(&mut self) {
        self.correct_answer_streak += 1;
    }

    pub(crate) fn reset_streak(&mut self) {
        self.correct_answer_streak = 0;
    }

    /// Resets the per-round flags ahead of the next question
    ///
    /// A player that did not answer this round loses their streak here;
    /// the round loop already resets streaks of non-answerers at window
    /// close, so that reset is idempotent with this one.
    pub(crate) fn prepare_for_round(&mut self) {
        if !self.has_answered {
            self.correct_answer_streak = 0;
        }

        self.has_answered = false;
        self.is_correct = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_blank() {
        let player = Player::new(PlayerId::new("u1"));
        assert_eq!(player.points(), 0);
        assert!(!player.has_answered());
        assert!(!player.is_correct());
        assert_eq!(player.correct_answer_streak(), 0);
    }

    #[test]
    fn test_prepare_for_round_clears_flags() {
        let mut player = Player::new(PlayerId::new("u1"));
        player.mark_answered();
        player.set_is_correct(true);
        player.increment_streak();

        player.prepare_for_round();

        assert!(!player.has_answered());
        assert!(!player.is_correct());
        // Answered this round, so the streak survives.
        assert_eq!(player.correct_answer_streak(), 1);
    }

    #[test]
    fn test_prepare_for_round_resets_streak_when_round_missed() {
        let mut player = Player::new(PlayerId::new("u1"));
        player.mark_answered();
        player.set_is_correct(true);
        player.increment_streak();
        player.prepare_for_round();

        // Next round goes unanswered.
        player.prepare_for_round();
        assert_eq!(player.correct_answer_streak(), 0);
    }

    #[test]
    fn test_add_points_accumulates() {
        let mut player = Player::new(PlayerId::new("u1"));
        player.add_points(70);
        player.add_points(30);
        assert_eq!(player.points(), 100);
    }
}
