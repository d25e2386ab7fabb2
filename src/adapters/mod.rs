//! Concrete implementations of the [`ChildView`](crate::child::ChildView)
//! primitive and of [`ViewStateListener`](crate::listener::ViewStateListener).
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockChild`] - Records visibility changes and transition requests
//! - [`mock::RecordingListener`] - Records every notification it receives
//!
//! The ratatui-backed child lives in [`crate::ui`].

pub mod mock;

pub use mock::{MockChild, RecordingListener};
