//! Terminal rendering for a multi-state container.
//!
//! - [`Panel`]: a ratatui-backed child view
//! - [`panel_areas`] / [`render_multistate`]: vertical stack layout honoring
//!   visibility (gone panels take no rows, invisible panels keep theirs)
//! - [`theme`]: colors per [`ViewState`](crate::view_state::ViewState)

pub mod layout;
pub mod panel;
pub mod theme;

pub use layout::{panel_areas, render_multistate, render_status_line};
pub use panel::{Fade, Panel};
