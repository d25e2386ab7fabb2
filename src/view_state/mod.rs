//! Display states and hide strategies.
//!
//! This module provides the two closed value sets the reconciliation engine
//! works with:
//!
//! - [`ViewState`]: which family of children should currently be shown
//! - [`HideStrategy`]: how a child that doesn't match the state is hidden
//!
//! Both types serialize by their canonical upper-case names (`"CONTENT"`,
//! `"MAKE_GONE"`, ...), which is also the format used by persisted state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// State for displaying.
///
/// The declaration order matches the index order used by declarative
/// configuration (`0` = `Content`, `4` = `Undefined`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewState {
    /// Regular content.
    #[default]
    Content,
    /// Nothing to show.
    Empty,
    /// Something went wrong.
    Error,
    /// Work in progress.
    Loading,
    /// None of the above.
    Undefined,
}

impl ViewState {
    /// All states in index order.
    pub const ALL: [ViewState; 5] = [
        ViewState::Content,
        ViewState::Empty,
        ViewState::Error,
        ViewState::Loading,
        ViewState::Undefined,
    ];

    /// Canonical name, as written to persisted state.
    pub fn name(self) -> &'static str {
        match self {
            ViewState::Content => "CONTENT",
            ViewState::Empty => "EMPTY",
            ViewState::Error => "ERROR",
            ViewState::Loading => "LOADING",
            ViewState::Undefined => "UNDEFINED",
        }
    }

    /// Look up a state by its configuration index.
    ///
    /// Returns `None` for negative or out-of-range indices.
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Configuration index of this state.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a canonical name, falling back to `fallback` when the name is unknown.
    pub fn parse_or(name: &str, fallback: ViewState) -> ViewState {
        name.parse().unwrap_or(fallback)
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not a canonical [`ViewState`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view state name: {0:?}")]
pub struct ParseViewStateError(pub String);

impl FromStr for ViewState {
    type Err = ParseViewStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|state| state.name() == s)
            .ok_or_else(|| ParseViewStateError(s.to_string()))
    }
}

/// The way a child is hidden when its state doesn't match the current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HideStrategy {
    /// Child keeps its place in the layout but is not drawn.
    #[default]
    MakeInvisible,
    /// Child is removed from the layout entirely.
    MakeGone,
}

impl HideStrategy {
    /// Look up a strategy by its configuration index.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(HideStrategy::MakeInvisible),
            1 => Some(HideStrategy::MakeGone),
            _ => None,
        }
    }
}
