//! # Trivia Game Library
//!
//! This library provides the core session logic for a chat-platform
//! trivia game: queue admission, a timed round loop over fetched and
//! custom questions, time- and streak-based scoring, leaderboards, and a
//! registry enforcing one game per channel.
//!
//! The engine is platform-agnostic. It never renders text, talks to a
//! network, or sleeps; hosts inject a [`session::Sink`] for outbound
//! updates, a [`question::QuestionSource`] for question material, and a
//! `schedule_alarm` callback that delivers [`game::AlarmMessage`]s back
//! after a delay. Everything time-based is driven through those alarms,
//! so the whole round loop is testable without a clock.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::ignored_unit_patterns)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::doc_markdown)]
use derive_where::derive_where;
use itertools::Itertools;
use serde::Serialize;

pub mod constants;

pub mod config;
pub mod game;
pub mod ids;
pub mod leaderboard;
pub mod manager;
pub mod player;
pub mod question;
pub mod session;

/// A truncated vector that maintains the exact count while limiting displayed items
///
/// Useful for displaying a limited number of items while still showing
/// the total count, e.g. "47 players" while listing only the first 50
/// leaderboard rows.
#[derive(Debug, Clone, Serialize)]
#[derive_where(Default)]
pub struct TruncatedVec<T> {
    /// The exact total count of items
    exact_count: usize,
    /// The truncated list of items (up to the limit)
    items: Vec<T>,
}

impl<T: Clone> TruncatedVec<T> {
    /// Creates a new truncated vector from an iterator
    ///
    /// Takes up to `limit` items from `list`; `exact_count` is the real
    /// total, which may be larger.
    pub fn new<I: Iterator<Item = T>>(list: I, limit: usize, exact_count: usize) -> Self {
        let items = list.take(limit).collect_vec();
        Self { exact_count, items }
    }

    /// Maps a function over the retained items, keeping the exact count
    pub fn map<F, U>(self, f: F) -> TruncatedVec<U>
    where
        F: Fn(T) -> U,
    {
        TruncatedVec {
            exact_count: self.exact_count,
            items: self.items.into_iter().map(f).collect_vec(),
        }
    }

    /// Returns the exact count of items
    pub fn exact_count(&self) -> usize {
        self.exact_count
    }

    /// Returns the truncated items
    pub fn items(&self) -> &[T] {
        &self.items
    }
}
