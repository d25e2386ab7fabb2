//! The multi-state container and its reconciliation engine.
//!
//! [`MultiStateView`] owns a list of children, each optionally tagged with
//! the [`ViewState`] it belongs to. Setting a new state walks the children in
//! attachment order: children owned by the new state are made visible, every
//! other managed child is hidden per its own [`HideStrategy`]. Listeners are
//! notified afterwards, in registration order.
//!
//! ```text
//! set_state(s) ──► s == current? ──yes──► (nothing)
//!                        │no
//!                        ▼
//!           for each managed child (attachment order)
//!              owner == s ? reveal : conceal(strategy)
//!                        │
//!                        ▼
//!           notify listeners (registration order)
//! ```
//!
//! Everything runs synchronously on the caller's thread.
//!
//! [`HideStrategy`]: crate::view_state::HideStrategy

use std::fmt;

use crate::animation::{
    Animation, AnimationCatalog, AnimationDefaults, AnimationId, AnimationLoader, AnimationSlot,
    Transition, TransitionKind,
};
use crate::child::{conceal, reveal, ChildId, ChildRegistry, ChildView, LayoutParams};
use crate::config::MultiStateConfig;
use crate::error::{MultiStateError, MultiStateResult};
use crate::listener::{ListenerRef, ListenerRegistry};
use crate::saved_state::SavedState;
use crate::view_state::ViewState;

/// Container showing the children that belong to the current [`ViewState`].
pub struct MultiStateView<C: ChildView> {
    state: ViewState,
    animations_enabled: bool,
    in_animation: AnimationSlot,
    out_animation: AnimationSlot,
    children: ChildRegistry<C>,
    listeners: ListenerRegistry<C>,
    loader: Box<dyn AnimationLoader>,
}

impl<C: ChildView> MultiStateView<C> {
    /// Create an empty container in the `CONTENT` state with animations off.
    ///
    /// `defaults` are the animations slots fall back to when reset.
    pub fn new(defaults: AnimationDefaults) -> Self {
        Self {
            state: ViewState::default(),
            animations_enabled: false,
            in_animation: AnimationSlot::new(defaults.fade_in),
            out_animation: AnimationSlot::new(defaults.fade_out),
            children: ChildRegistry::new(),
            listeners: ListenerRegistry::new(),
            loader: Box::new(AnimationCatalog::new()),
        }
    }

    /// Use `loader` to resolve animation resource ids.
    pub fn with_loader(mut self, loader: impl AnimationLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    /// Build a container from declarative configuration.
    ///
    /// Fails if an animation id can't be resolved or the initial state index
    /// is out of range.
    pub fn from_config(
        config: &MultiStateConfig,
        defaults: AnimationDefaults,
        loader: impl AnimationLoader + 'static,
    ) -> MultiStateResult<Self> {
        let mut view = Self::new(defaults).with_loader(loader);
        view.animations_enabled = config.animations_enabled;
        view.set_in_animation_res(config.in_animation)?;
        view.set_out_animation_res(config.out_animation)?;
        view.set_in_animation_duration(config.in_animation_duration);
        view.set_out_animation_duration(config.out_animation_duration);
        view.state = config.initial_view_state()?;
        view.switch_to_state(view.state, false);
        Ok(view)
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    /// The current view state.
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Switch to `state`.
    ///
    /// Does nothing at all if `state` is already current; otherwise reconciles
    /// every managed child (animated if enabled) and then notifies each
    /// listener exactly once.
    pub fn set_state(&mut self, state: ViewState) {
        if self.state == state {
            tracing::trace!(%state, "State unchanged; skipping reconciliation");
            return;
        }
        let previous = std::mem::replace(&mut self.state, state);
        tracing::debug!(from = %previous, to = %state, animate = self.animations_enabled, "Switching view state");
        self.switch_to_state(state, self.animations_enabled);
        self.notify_listeners(state);
    }

    /// Switch to the CONTENT state.
    pub fn show_content(&mut self) {
        self.set_state(ViewState::Content);
    }

    /// Switch to the EMPTY state.
    pub fn show_empty(&mut self) {
        self.set_state(ViewState::Empty);
    }

    /// Switch to the ERROR state.
    pub fn show_error(&mut self) {
        self.set_state(ViewState::Error);
    }

    /// Switch to the LOADING state.
    pub fn show_loading(&mut self) {
        self.set_state(ViewState::Loading);
    }

    /// Switch to the UNDEFINED state.
    pub fn show_undefined(&mut self) {
        self.set_state(ViewState::Undefined);
    }

    /// Whether the CONTENT state is current.
    pub fn is_in_content_state(&self) -> bool {
        self.state == ViewState::Content
    }

    /// Whether the EMPTY state is current.
    pub fn is_in_empty_state(&self) -> bool {
        self.state == ViewState::Empty
    }

    /// Whether the ERROR state is current.
    pub fn is_in_error_state(&self) -> bool {
        self.state == ViewState::Error
    }

    /// Whether the LOADING state is current.
    pub fn is_in_loading_state(&self) -> bool {
        self.state == ViewState::Loading
    }

    /// Whether the UNDEFINED state is current.
    pub fn is_in_undefined_state(&self) -> bool {
        self.state == ViewState::Undefined
    }

    fn switch_to_state(&mut self, state: ViewState, animate: bool) {
        let show = animate.then(|| Transition::from_slot(TransitionKind::In, &self.in_animation));
        let hide = animate.then(|| Transition::from_slot(TransitionKind::Out, &self.out_animation));

        self.children.for_each_managed(|id, view, owner, strategy| {
            let changed = if owner == state {
                reveal(view, show.as_ref())
            } else {
                conceal(view, strategy, hide.as_ref())
            };
            if changed {
                tracing::trace!(child = %id, %owner, visibility = ?view.visibility(), "Child visibility changed");
            }
        });
    }

    fn notify_listeners(&mut self, state: ViewState) {
        // Snapshot so callbacks may add/remove listeners or set state again.
        for listener in self.listeners.snapshot() {
            listener.on_view_state_changed(self, state);
        }
    }

    // ------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------

    /// Register a listener. Returns `false` if this exact `Rc` is already registered.
    pub fn add_listener(&mut self, listener: ListenerRef<C>) -> bool {
        self.listeners.add(listener)
    }

    /// Unregister a listener. Returns `false` if it wasn't registered.
    pub fn remove_listener(&mut self, listener: &ListenerRef<C>) -> bool {
        self.listeners.remove(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ------------------------------------------------------------------
    // Animations
    // ------------------------------------------------------------------

    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled
    }

    /// Enable or disable animated transitions. Applies from the next `set_state`.
    pub fn set_animations_enabled(&mut self, enabled: bool) {
        self.animations_enabled = enabled;
    }

    pub fn in_animation(&self) -> &AnimationSlot {
        &self.in_animation
    }

    pub fn out_animation(&self) -> &AnimationSlot {
        &self.out_animation
    }

    /// Set the animation used when a child appears; `None` resets to the default.
    pub fn set_in_animation(&mut self, animation: Option<Animation>) {
        self.in_animation.set_animation(animation);
    }

    /// Set the animation used when a child disappears; `None` resets to the default.
    pub fn set_out_animation(&mut self, animation: Option<Animation>) {
        self.out_animation.set_animation(animation);
    }

    /// Set the in animation by resource id. [`AnimationId::NONE`] resets to the default.
    pub fn set_in_animation_res(&mut self, id: AnimationId) -> MultiStateResult<()> {
        let animation = self.resolve_animation(id)?;
        self.set_in_animation(animation);
        Ok(())
    }

    /// Set the out animation by resource id. [`AnimationId::NONE`] resets to the default.
    pub fn set_out_animation_res(&mut self, id: AnimationId) -> MultiStateResult<()> {
        let animation = self.resolve_animation(id)?;
        self.set_out_animation(animation);
        Ok(())
    }

    fn resolve_animation(&self, id: AnimationId) -> MultiStateResult<Option<Animation>> {
        if id.is_none() {
            return Ok(None);
        }
        self.loader
            .load(id)
            .map(Some)
            .ok_or(MultiStateError::UnknownAnimation { id })
    }

    /// Override the in duration (ms); `<= 0` resets to the intrinsic duration.
    pub fn set_in_animation_duration(&mut self, duration_ms: i64) {
        self.in_animation.set_duration_override(duration_ms);
    }

    /// Override the out duration (ms); `<= 0` resets to the intrinsic duration.
    pub fn set_out_animation_duration(&mut self, duration_ms: i64) {
        self.out_animation.set_duration_override(duration_ms);
    }

    // ------------------------------------------------------------------
    // Children
    // ------------------------------------------------------------------

    /// Attach a child at the end of the child list.
    ///
    /// A managed child immediately gets the visibility matching the current
    /// state, without animation.
    pub fn attach(&mut self, view: C, params: LayoutParams) -> ChildId {
        let id = self.children.attach(view, params);
        if let (Some(owner), Some(view)) = (params.state, self.children.get_mut(id)) {
            if owner == self.state {
                reveal(view, None);
            } else {
                conceal(view, params.hide_strategy, None);
            }
        }
        id
    }

    /// Detach a child and hand it back.
    pub fn detach(&mut self, id: ChildId) -> Option<C> {
        self.children.detach(id).map(|(view, _)| view)
    }

    /// Replace a child's layout params without touching its visibility.
    ///
    /// The new params take effect on the next state change.
    pub fn set_layout_params(&mut self, id: ChildId, params: LayoutParams) -> bool {
        self.children.register(id, params)
    }

    pub fn layout_params(&self, id: ChildId) -> Option<LayoutParams> {
        self.children.params(id)
    }

    pub fn child(&self, id: ChildId) -> Option<&C> {
        self.children.get(id)
    }

    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut C> {
        self.children.get_mut(id)
    }

    /// All children in attachment order.
    pub fn children(&self) -> impl Iterator<Item = (ChildId, &C, &LayoutParams)> {
        self.children.iter()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    // ------------------------------------------------------------------
    // Save / restore
    // ------------------------------------------------------------------

    /// Capture the restorable state.
    pub fn save_state(&self) -> SavedState {
        SavedState {
            in_anim_duration: Some(self.in_animation.animation().duration_ms),
            out_anim_duration: Some(self.out_animation.animation().duration_ms),
            in_anim_duration_override: Some(self.in_animation.duration_override()),
            out_anim_duration_override: Some(self.out_animation.duration_override()),
            state: Some(self.state.name().to_string()),
            animations_enabled: Some(self.animations_enabled),
            in_animation: Some(self.in_animation.animation().clone()),
            out_animation: Some(self.out_animation.animation().clone()),
        }
    }

    /// Apply a saved record.
    ///
    /// Missing fields keep their current values and an unknown state name keeps
    /// the current state. Children are synced without animation, then
    /// listeners are notified once with the restored state.
    pub fn restore_state(&mut self, saved: &SavedState) {
        self.in_animation.restore(
            saved.in_animation.clone(),
            saved.in_anim_duration,
            saved.in_anim_duration_override,
        );
        self.out_animation.restore(
            saved.out_animation.clone(),
            saved.out_anim_duration,
            saved.out_anim_duration_override,
        );
        if let Some(enabled) = saved.animations_enabled {
            self.animations_enabled = enabled;
        }
        self.state = saved.view_state_or(self.state);

        tracing::debug!(state = %self.state, "Restored view state");
        self.switch_to_state(self.state, false);
        self.notify_listeners(self.state);
    }
}

impl<C: ChildView + fmt::Debug> fmt::Debug for MultiStateView<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiStateView")
            .field("state", &self.state)
            .field("animations_enabled", &self.animations_enabled)
            .field("in_animation", &self.in_animation)
            .field("out_animation", &self.out_animation)
            .field("children", &self.children)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
