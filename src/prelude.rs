//! Prelude module for convenient imports.
//!
//! ```ignore
//! use multistate::prelude::*;
//! ```
//!
//! This will import the container, its child/listener seams, the state enums,
//! and the animation and persistence types most callers touch.

pub use crate::animation::{
    Animation, AnimationCatalog, AnimationDefaults, AnimationId, AnimationLoader, Transition,
    TransitionKind,
};
pub use crate::child::{ChildId, ChildView, LayoutParams, Visibility};
pub use crate::config::{ChildConfig, MultiStateConfig};
pub use crate::container::MultiStateView;
pub use crate::error::{MultiStateError, MultiStateResult};
pub use crate::listener::{ListenerRef, ViewStateListener};
pub use crate::saved_state::{SavedState, SavedStateStore};
pub use crate::view_state::{HideStrategy, ViewState};
