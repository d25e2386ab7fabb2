//! Multi-state container - shows exactly the children that belong to the
//! current view state (content, empty, error, loading, undefined).
//!
//! This library exposes modules for use in integration tests and the demo.

pub mod adapters;
pub mod animation;
pub mod child;
pub mod cli;
pub mod config;
pub mod container;
pub mod demo;
pub mod error;
pub mod listener;
pub mod saved_state;
pub mod terminal;
pub mod ui;
pub mod view_state;

pub mod prelude;
