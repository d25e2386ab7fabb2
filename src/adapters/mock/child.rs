//! Mock child view for testing.

use std::time::Duration;

use crate::animation::{Transition, TransitionKind};
use crate::child::{ChildView, Visibility};

/// A transition request captured by [`MockChild`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTransition {
    pub kind: TransitionKind,
    pub animation: String,
    pub duration: Duration,
}

/// Child view that records every call made on it.
///
/// # Example
///
/// ```
/// use multistate::adapters::mock::MockChild;
/// use multistate::child::{ChildView, Visibility};
///
/// let mut child = MockChild::new("content");
/// child.set_visibility(Visibility::Gone);
/// assert_eq!(child.visibility(), Visibility::Gone);
/// assert_eq!(child.visibility_changes(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockChild {
    name: String,
    visibility: Visibility,
    /// Number of `set_visibility` calls.
    visibility_changes: usize,
    transitions: Vec<RecordedTransition>,
}

impl MockChild {
    /// Create a visible mock child.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_visibility(name, Visibility::Visible)
    }

    /// Create a mock child with a given starting visibility.
    pub fn with_visibility(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            visibility_changes: 0,
            transitions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility_changes(&self) -> usize {
        self.visibility_changes
    }

    pub fn transitions(&self) -> &[RecordedTransition] {
        &self.transitions
    }
}

impl ChildView for MockChild {
    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
        self.visibility_changes += 1;
    }

    fn start_transition(&mut self, transition: &Transition<'_>) {
        self.transitions.push(RecordedTransition {
            kind: transition.kind,
            animation: transition.animation.name.clone(),
            duration: transition.duration,
        });
    }
}
