//! Managed children and the child registry.
//!
//! A child is any value implementing [`ChildView`], the narrow visibility
//! primitive the host toolkit provides. Each attached child carries
//! [`LayoutParams`] naming its owning [`ViewState`] (if any) and its
//! [`HideStrategy`]. Children without an owning state are never touched by
//! reconciliation.
//!
//! The registry is just the container's child list in attachment order;
//! there is no separate index by state.

use crate::animation::Transition;
use crate::view_state::{HideStrategy, ViewState};
use std::fmt;
use uuid::Uuid;

/// Visibility of a child, owned by the host's view primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Drawn and laid out.
    #[default]
    Visible,
    /// Laid out (takes space) but not drawn, not interactive.
    Invisible,
    /// Neither drawn nor laid out.
    Gone,
}

impl Visibility {
    /// Target visibility for a child hidden with `strategy`.
    pub fn hidden_by(strategy: HideStrategy) -> Self {
        match strategy {
            HideStrategy::MakeInvisible => Visibility::Invisible,
            HideStrategy::MakeGone => Visibility::Gone,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }

    /// Whether the child still occupies layout space.
    pub fn takes_space(self) -> bool {
        self != Visibility::Gone
    }
}

/// Visibility primitive of a host view.
///
/// The container reads and writes visibility and requests transitions;
/// it never inspects anything else about the child.
pub trait ChildView: 'static {
    /// Current visibility.
    fn visibility(&self) -> Visibility;

    /// Change visibility immediately.
    fn set_visibility(&mut self, visibility: Visibility);

    /// Start an animation. Completion is never awaited.
    fn start_transition(&mut self, transition: &Transition<'_>) {
        let _ = transition;
    }
}

/// Per-child metadata attached by the container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutParams {
    /// Owning state. `None` means the child is inert to reconciliation.
    pub state: Option<ViewState>,
    pub hide_strategy: HideStrategy,
}

impl LayoutParams {
    /// Params for a child shown in `state`, hidden with the default strategy.
    pub fn for_state(state: ViewState) -> Self {
        Self {
            state: Some(state),
            hide_strategy: HideStrategy::default(),
        }
    }

    /// Params for a child whose visibility is caller-managed.
    pub fn unmanaged() -> Self {
        Self::default()
    }

    pub fn with_hide_strategy(mut self, hide_strategy: HideStrategy) -> Self {
        self.hide_strategy = hide_strategy;
        self
    }
}

/// Identity of an attached child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildId(Uuid);

impl ChildId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
struct ManagedChild<C> {
    id: ChildId,
    view: C,
    params: LayoutParams,
}

/// Attachment-ordered list of children and their layout params.
#[derive(Debug)]
pub struct ChildRegistry<C> {
    children: Vec<ManagedChild<C>>,
}

impl<C> Default for ChildRegistry<C> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
        }
    }
}

impl<C: ChildView> ChildRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child; returns its identity.
    pub fn attach(&mut self, view: C, params: LayoutParams) -> ChildId {
        let id = ChildId::new();
        self.children.push(ManagedChild { id, view, params });
        id
    }

    /// Remove a child, handing it back with its params.
    pub fn detach(&mut self, id: ChildId) -> Option<(C, LayoutParams)> {
        let pos = self.children.iter().position(|c| c.id == id)?;
        let child = self.children.remove(pos);
        Some((child.view, child.params))
    }

    /// Replace a child's params. Returns `false` if `id` is not attached.
    pub fn register(&mut self, id: ChildId, params: LayoutParams) -> bool {
        match self.children.iter_mut().find(|c| c.id == id) {
            Some(child) => {
                child.params = params;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: ChildId) -> Option<&C> {
        self.children.iter().find(|c| c.id == id).map(|c| &c.view)
    }

    pub fn get_mut(&mut self, id: ChildId) -> Option<&mut C> {
        self.children
            .iter_mut()
            .find(|c| c.id == id)
            .map(|c| &mut c.view)
    }

    pub fn params(&self, id: ChildId) -> Option<LayoutParams> {
        self.children.iter().find(|c| c.id == id).map(|c| c.params)
    }

    /// Visit managed children in attachment order.
    ///
    /// Children without an owning state are skipped.
    pub fn for_each_managed<F>(&mut self, mut f: F)
    where
        F: FnMut(ChildId, &mut C, ViewState, HideStrategy),
    {
        for child in &mut self.children {
            if let Some(state) = child.params.state {
                f(child.id, &mut child.view, state, child.params.hide_strategy);
            }
        }
    }

    /// All children in attachment order, managed or not.
    pub fn iter(&self) -> impl Iterator<Item = (ChildId, &C, &LayoutParams)> {
        self.children.iter().map(|c| (c.id, &c.view, &c.params))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Make a child visible. No-op (returns `false`) if it already is.
pub(crate) fn reveal<C: ChildView>(view: &mut C, transition: Option<&Transition<'_>>) -> bool {
    if view.visibility().is_visible() {
        return false;
    }
    view.set_visibility(Visibility::Visible);
    if let Some(transition) = transition {
        view.start_transition(transition);
    }
    true
}

/// Hide a child per `strategy`. No-op (returns `false`) if it already has the
/// strategy's target visibility.
///
/// The out transition only runs when the child was actually on screen.
pub(crate) fn conceal<C: ChildView>(
    view: &mut C,
    strategy: HideStrategy,
    transition: Option<&Transition<'_>>,
) -> bool {
    let target = Visibility::hidden_by(strategy);
    let current = view.visibility();
    if current == target {
        return false;
    }
    view.set_visibility(target);
    if current.is_visible() {
        if let Some(transition) = transition {
            view.start_transition(transition);
        }
    }
    true
}
