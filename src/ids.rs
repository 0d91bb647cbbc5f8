//! Opaque identifiers supplied by the hosting platform
//!
//! The engine never generates identities of its own: a `PlayerId` is
//! whatever handle the chat platform uses for a user, and a `SessionKey`
//! identifies the channel (or equivalent) a game is hosted in. Both are
//! treated as opaque strings.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};

/// A platform user handle identifying one participant
///
/// Opaque to the engine; only equality and hashing matter. Display
/// resolution to a human-readable name is the host's concern.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, DeserializeFromStr, SerializeDisplay)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wraps a platform user handle
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Returns the underlying handle
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PlayerId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<&str> for PlayerId {
    fn from(handle: &str) -> Self {
        Self::new(handle)
    }
}

/// The identity under which at most one game may be active at a time
///
/// Typically a channel id. The [`GameManager`](crate::manager::GameManager)
/// enforces uniqueness per key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, DeserializeFromStr, SerializeDisplay)]
pub struct SessionKey(String);

impl SessionKey {
    /// Wraps a platform channel/session handle
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Returns the underlying handle
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<&str> for SessionKey {
    fn from(handle: &str) -> Self {
        Self::new(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_round_trip() {
        let id: PlayerId = "189365301488517121".parse().unwrap();
        assert_eq!(id.to_string(), "189365301488517121");
        assert_eq!(id, PlayerId::new("189365301488517121"));
    }

    #[test]
    fn test_session_key_round_trip() {
        let key = SessionKey::new("general");
        assert_eq!(key.as_str(), "general");
        assert_eq!("general".parse::<SessionKey>().unwrap(), key);
    }
}
