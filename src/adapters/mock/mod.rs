//! Mock implementations for testing.
//!
//! These doubles let tests observe exactly what the reconciliation engine
//! did, without a real view toolkit.
//!
//! # Available Mocks
//!
//! - [`MockChild`] - Child view with recorded visibility writes and transitions
//! - [`RecordingListener`] - Listener with a (optionally shared) event log

pub mod child;
pub mod listener;

pub use child::{MockChild, RecordedTransition};
pub use listener::{EventLog, RecordingListener};
