//! Error types for the multi-state container.
//!
//! The reconciliation path itself never fails: the state set is closed, so
//! `set_state` and friends are infallible. Errors only come from the edges:
//!
//! | Source | Variant |
//! |--------|---------|
//! | Declarative configuration | [`MultiStateError::InvalidStateIndex`], [`MultiStateError::Config`] |
//! | Animation resource lookup | [`MultiStateError::UnknownAnimation`] |
//! | Saved state persistence | [`MultiStateError::Persistence`], [`MultiStateError::Io`] |

use crate::animation::AnimationId;
use thiserror::Error;

/// Errors produced by configuration, animation lookup, and persistence.
#[derive(Debug, Error)]
pub enum MultiStateError {
    /// `initial_state` index doesn't name one of the five states.
    #[error("invalid initial state index {index}; expected 0..=4")]
    InvalidStateIndex { index: i64 },

    /// The animation loader has no animation for this resource id.
    #[error("unknown animation resource {id}")]
    UnknownAnimation { id: AnimationId },

    /// Declarative configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),

    /// Saved state could not be encoded or decoded.
    #[error("saved state serialization failed: {0}")]
    Persistence(#[source] serde_json::Error),

    /// Filesystem error while reading or writing saved state.
    #[error("saved state I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl MultiStateError {
    /// Get a stable error code for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            MultiStateError::InvalidStateIndex { .. } => "CONFIG_STATE_INDEX",
            MultiStateError::UnknownAnimation { .. } => "ANIM_UNKNOWN",
            MultiStateError::Config(_) => "CONFIG_PARSE",
            MultiStateError::Persistence(_) => "SAVED_STATE_SERDE",
            MultiStateError::Io(_) => "SAVED_STATE_IO",
        }
    }
}

/// Result type alias used throughout the crate.
pub type MultiStateResult<T> = Result<T, MultiStateError>;
