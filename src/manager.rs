//! Registry enforcing one game per session key
//!
//! The manager owns every live [`Game`] and guarantees that a session key
//! (typically a channel id) hosts at most one game that has not ended.
//! Hosts keep one manager per process, behind whatever synchronization
//! their runtime requires.

use std::collections::{HashMap, hash_map::Entry};

use thiserror::Error;

use crate::{
    config::{ConfigError, GameConfig},
    game::Game,
    ids::SessionKey,
    session::Sink,
};

/// Failures raised when creating a game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManagerError {
    /// A game that has not ended already occupies the key
    #[error("a game is already running in `{0}`")]
    OngoingGame(SessionKey),
    /// The supplied configuration failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Owner of all live games, keyed by session
#[derive(Debug, Default)]
pub struct GameManager {
    games: HashMap<SessionKey, Game>,
}

impl GameManager {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the config and registers a new game under `key`
    ///
    /// A leftover game that already ended does not block the key; it is
    /// replaced. The returned game is `Pending`; call
    /// [`Game::start_queue`] to open its queue.
    ///
    /// # Errors
    ///
    /// * [`ManagerError::OngoingGame`] when a live game occupies the key
    /// * [`ManagerError::Config`] when the configuration is invalid
    pub fn create_game(
        &mut self,
        key: SessionKey,
        config: GameConfig,
    ) -> Result<&mut Game, ManagerError> {
        config.check()?;

        match self.games.entry(key) {
            Entry::Occupied(mut entry) => {
                if !entry.get().ended() {
                    return Err(ManagerError::OngoingGame(entry.key().clone()));
                }
                let game = Game::new(entry.key().clone(), config);
                entry.insert(game);
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let game = Game::new(entry.key().clone(), config);
                Ok(entry.insert(game))
            }
        }
    }

    /// Looks up the game registered under `key`
    pub fn game(&self, key: &SessionKey) -> Option<&Game> {
        self.games.get(key)
    }

    /// Looks up the game registered under `key` for mutation
    pub fn game_mut(&mut self, key: &SessionKey) -> Option<&mut Game> {
        self.games.get_mut(key)
    }

    /// Ends the game under `key` (if any) and removes it from the registry
    ///
    /// The removed game is returned so the host can read its final
    /// leaderboard.
    pub fn end_game<K: Sink>(&mut self, key: &SessionKey, sink: &K) -> Option<Game> {
        let mut game = self.games.remove(key)?;
        game.end(sink);
        Some(game)
    }

    /// Removes the game under `key` if it has already ended
    pub fn remove_ended(&mut self, key: &SessionKey) -> Option<Game> {
        if self.games.get(key)?.ended() {
            self.games.remove(key)
        } else {
            None
        }
    }

    /// Removes every ended game and returns how many were swept
    pub fn sweep_ended(&mut self) -> usize {
        let before = self.games.len();
        self.games.retain(|_, game| !game.ended());
        before - self.games.len()
    }

    /// Number of registered games, ended leftovers included
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{EndReason, Phase, UpdateMessage};
    use std::cell::RefCell;

    #[derive(Default)]
    struct NullSink(RefCell<usize>);

    impl Sink for NullSink {
        fn send_message(&self, _message: &UpdateMessage) {
            *self.0.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_create_game_registers_pending_game() {
        let mut manager = GameManager::new();
        let game = manager
            .create_game(SessionKey::new("general"), GameConfig::default())
            .unwrap();

        assert_eq!(game.phase(), Phase::Pending);
        assert_eq!(manager.len(), 1);
        assert!(manager.game(&SessionKey::new("general")).is_some());
    }

    #[test]
    fn test_one_game_per_key() {
        let mut manager = GameManager::new();
        manager
            .create_game(SessionKey::new("general"), GameConfig::default())
            .unwrap();

        let result = manager.create_game(SessionKey::new("general"), GameConfig::default());
        assert_eq!(
            result.map(|_| ()),
            Err(ManagerError::OngoingGame(SessionKey::new("general")))
        );

        // A different key is unaffected.
        assert!(
            manager
                .create_game(SessionKey::new("lounge"), GameConfig::default())
                .is_ok()
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut manager = GameManager::new();
        let config = GameConfig {
            min_player_count: 10,
            max_player_count: 2,
            ..GameConfig::default()
        };

        let result = manager.create_game(SessionKey::new("general"), config);
        assert!(matches!(result, Err(ManagerError::Config(_))));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_ended_leftover_does_not_block_the_key() {
        let mut manager = GameManager::new();
        let sink = NullSink::default();
        let key = SessionKey::new("general");
        manager.create_game(key.clone(), GameConfig::default()).unwrap();

        manager
            .game_mut(&key)
            .unwrap()
            .end(&sink);

        let game = manager.create_game(key, GameConfig::default()).unwrap();
        assert_eq!(game.phase(), Phase::Pending);
    }

    #[test]
    fn test_end_game_removes_and_returns() {
        let mut manager = GameManager::new();
        let sink = NullSink::default();
        let key = SessionKey::new("general");
        manager.create_game(key.clone(), GameConfig::default()).unwrap();

        let game = manager.end_game(&key, &sink).unwrap();
        assert_eq!(game.end_reason(), Some(EndReason::Terminated));
        assert!(manager.is_empty());
        assert!(manager.end_game(&key, &sink).is_none());
    }

    #[test]
    fn test_remove_ended_leaves_live_games() {
        let mut manager = GameManager::new();
        let sink = NullSink::default();
        let key = SessionKey::new("general");
        manager.create_game(key.clone(), GameConfig::default()).unwrap();

        assert!(manager.remove_ended(&key).is_none());

        manager.game_mut(&key).unwrap().end(&sink);
        assert!(manager.remove_ended(&key).is_some());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_sweep_ended() {
        let mut manager = GameManager::new();
        let sink = NullSink::default();
        manager
            .create_game(SessionKey::new("a"), GameConfig::default())
            .unwrap();
        manager
            .create_game(SessionKey::new("b"), GameConfig::default())
            .unwrap();

        manager.game_mut(&SessionKey::new("a")).unwrap().end(&sink);

        assert_eq!(manager.sweep_ended(), 1);
        assert_eq!(manager.len(), 1);
        assert!(manager.game(&SessionKey::new("b")).is_some());
    }
}
