//! Declarative configuration.
//!
//! Container and per-child settings as they come from a layout file. Every
//! field is optional in the serialized form; missing fields take the defaults
//! documented on each struct.
//!
//! # Example
//!
//! ```
//! use multistate::config::MultiStateConfig;
//! use multistate::view_state::ViewState;
//!
//! let config = MultiStateConfig::from_json(r#"{ "initial_state": 3, "animations_enabled": true }"#)?;
//! assert_eq!(config.initial_view_state()?, ViewState::Loading);
//! # Ok::<(), multistate::error::MultiStateError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::animation::AnimationId;
use crate::child::LayoutParams;
use crate::error::{MultiStateError, MultiStateResult};
use crate::view_state::{HideStrategy, ViewState};

/// Container configuration.
///
/// Defaults: animations off, both animations reset to the caller defaults,
/// no duration overrides, initial state `CONTENT` (index 0).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiStateConfig {
    pub animations_enabled: bool,
    pub in_animation: AnimationId,
    pub out_animation: AnimationId,
    /// Override in milliseconds; `<= 0` keeps the intrinsic duration.
    pub in_animation_duration: i64,
    /// Override in milliseconds; `<= 0` keeps the intrinsic duration.
    pub out_animation_duration: i64,
    /// Index into [`ViewState::ALL`].
    pub initial_state: i64,
}

impl MultiStateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> MultiStateResult<Self> {
        serde_json::from_str(json).map_err(MultiStateError::Config)
    }

    pub fn with_animations_enabled(mut self, enabled: bool) -> Self {
        self.animations_enabled = enabled;
        self
    }

    pub fn with_in_animation(mut self, id: AnimationId) -> Self {
        self.in_animation = id;
        self
    }

    pub fn with_out_animation(mut self, id: AnimationId) -> Self {
        self.out_animation = id;
        self
    }

    pub fn with_in_animation_duration(mut self, duration_ms: i64) -> Self {
        self.in_animation_duration = duration_ms;
        self
    }

    pub fn with_out_animation_duration(mut self, duration_ms: i64) -> Self {
        self.out_animation_duration = duration_ms;
        self
    }

    pub fn with_initial_state(mut self, state: ViewState) -> Self {
        self.initial_state = state.index() as i64;
        self
    }

    /// Resolve `initial_state`; out-of-range indices are an error.
    pub fn initial_view_state(&self) -> MultiStateResult<ViewState> {
        ViewState::from_index(self.initial_state).ok_or(MultiStateError::InvalidStateIndex {
            index: self.initial_state,
        })
    }
}

/// Per-child configuration.
///
/// Lenient on purpose: an unknown state index leaves the child unmanaged,
/// an unknown hide strategy index falls back to [`HideStrategy::MakeInvisible`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildConfig {
    pub state: Option<i64>,
    pub hide_strategy: Option<i64>,
}

impl ChildConfig {
    pub fn new(state: Option<i64>, hide_strategy: Option<i64>) -> Self {
        Self {
            state,
            hide_strategy,
        }
    }
}

impl From<ChildConfig> for LayoutParams {
    fn from(config: ChildConfig) -> Self {
        LayoutParams {
            state: config.state.and_then(ViewState::from_index),
            hide_strategy: config
                .hide_strategy
                .and_then(HideStrategy::from_index)
                .unwrap_or_default(),
        }
    }
}
