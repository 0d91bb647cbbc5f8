//! Leaderboard maintenance
//!
//! The leaderboard is a view over the player roster: entries sorted by
//! points descending, ties kept in roster insertion order. It is rebuilt
//! once per round at window close and frozen into a cached final summary
//! when the game ends.

use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{TruncatedVec, constants, ids::PlayerId, player::Player};

/// One leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// The player this entry belongs to
    pub player: PlayerId,
    /// The player's point total when the leaderboard was last rebuilt
    pub points: u64,
}

/// A player's score and rank, for individual replies
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ScoreMessage {
    /// Total points earned so far
    pub points: u64,
    /// Position in the leaderboard (1-indexed)
    pub position: usize,
}

/// Players ordered by descending points
///
/// Ties keep roster insertion order: the sort is stable and the roster
/// iterates in admission order, so no secondary key is needed.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    standings: Vec<Standing>,

    /// Score/position lookup rebuilt alongside the standings
    #[serde(skip)]
    score_and_position: HashMap<PlayerId, (u64, usize)>,
    /// Final standings, computed once when the game ends
    #[serde(skip)]
    final_standings: once_cell_serde::sync::OnceCell<Vec<Standing>>,
}

impl Leaderboard {
    /// Rebuilds the standings from the roster
    ///
    /// Called when the round loop starts and again at every round end.
    pub(crate) fn rebuild<'a>(&mut self, roster: impl Iterator<Item = &'a Player>) {
        self.standings = roster
            .map(|player| Standing {
                player: player.id().clone(),
                points: player.points(),
            })
            .sorted_by(|a, b| b.points.cmp(&a.points))
            .collect_vec();

        self.score_and_position = self
            .standings
            .iter()
            .enumerate()
            .map(|(index, standing)| (standing.player.clone(), (standing.points, index + 1)))
            .collect();
    }

    /// The full standings, descending by points
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    /// Number of ranked players
    pub fn len(&self) -> usize {
        self.standings.len()
    }

    /// Whether the leaderboard has no entries yet
    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }

    /// A display-capped copy of the standings
    pub fn truncated(&self) -> TruncatedVec<Standing> {
        TruncatedVec::new(
            self.standings.iter().cloned(),
            constants::display::STANDINGS_LIMIT,
            self.standings.len(),
        )
    }

    /// The top players for the final podium
    pub fn podium(&self) -> Vec<Standing> {
        self.standings
            .iter()
            .take(constants::display::PODIUM_SIZE)
            .cloned()
            .collect_vec()
    }

    /// Score and rank of a specific player, if ranked
    pub fn score(&self, player: &PlayerId) -> Option<ScoreMessage> {
        let (points, position) = self.score_and_position.get(player)?;
        Some(ScoreMessage {
            points: *points,
            position: *position,
        })
    }

    /// Freezes and returns the final standings
    ///
    /// Computed once when first requested after the game ends; later
    /// calls return the cached copy even if the roster changes.
    pub fn finalize(&self) -> &[Standing] {
        self.final_standings
            .get_or_init(|| self.standings.clone())
    }
}
