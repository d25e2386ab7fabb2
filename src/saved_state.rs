//! Saved container state.
//!
//! [`SavedState`] is the record a container produces on save and consumes on
//! restore. Every field is optional so that a partial or older record still
//! restores: an absent field keeps whatever the container currently holds.
//!
//! [`SavedStateStore`] keeps a record in a JSON file between runs.

use serde::{Deserialize, Deserializer, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::animation::Animation;
use crate::error::{MultiStateError, MultiStateResult};
use crate::view_state::ViewState;

/// Restorable container state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedState {
    /// Intrinsic duration of the in animation (ms).
    pub in_anim_duration: Option<u64>,
    /// Intrinsic duration of the out animation (ms).
    pub out_anim_duration: Option<u64>,
    pub in_anim_duration_override: Option<i64>,
    pub out_anim_duration_override: Option<i64>,
    /// Canonical [`ViewState`] name. A non-string value decodes as absent.
    #[serde(deserialize_with = "lenient_state_name")]
    pub state: Option<String>,
    pub animations_enabled: Option<bool>,
    pub in_animation: Option<Animation>,
    pub out_animation: Option<Animation>,
}

fn lenient_state_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(name)) => Ok(Some(name)),
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(other) => {
            tracing::warn!(value = %other, "Ignoring non-string saved view state");
            Ok(None)
        }
    }
}

impl SavedState {
    /// Resolve the saved state name, keeping `current` when it is absent or
    /// not a valid name.
    pub fn view_state_or(&self, current: ViewState) -> ViewState {
        let Some(name) = self.state.as_deref() else {
            return current;
        };
        let restored = ViewState::parse_or(name, current);
        if restored.name() != name {
            tracing::warn!(name, fallback = %current, "Ignoring unknown saved view state");
        }
        restored
    }

    pub fn to_json(&self) -> MultiStateResult<String> {
        serde_json::to_string_pretty(self).map_err(MultiStateError::Persistence)
    }

    pub fn from_json(json: &str) -> MultiStateResult<Self> {
        serde_json::from_str(json).map_err(MultiStateError::Persistence)
    }
}

/// Stores a [`SavedState`] as a JSON file.
#[derive(Debug, Clone)]
pub struct SavedStateStore {
    path: PathBuf,
}

impl SavedStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved record.
    ///
    /// Returns `None` if the file doesn't exist or can't be decoded; a broken
    /// file must never stop the container from starting.
    pub fn load(&self) -> Option<SavedState> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return None,
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "Discarding unreadable saved state");
                None
            }
        }
    }

    /// Write the record, creating the parent directory if needed.
    pub fn save(&self, state: &SavedState) -> MultiStateResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, state).map_err(MultiStateError::Persistence)?;
        writer.flush()?;
        Ok(())
    }

    /// Remove the file. Succeeds if it didn't exist.
    pub fn clear(&self) -> MultiStateResult<()> {
        if !self.path.exists() {
            return Ok(());
        }
        fs::remove_file(&self.path)?;
        Ok(())
    }
}
