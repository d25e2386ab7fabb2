//! State change listeners.
//!
//! [`ListenerRegistry`] is an insertion-ordered set keyed by pointer identity:
//! adding the same `Rc` twice is a no-op, removing an absent one is a no-op.

use crate::child::ChildView;
use crate::container::MultiStateView;
use crate::view_state::ViewState;
use std::fmt;
use std::rc::Rc;

/// Observer of state changes.
///
/// Called synchronously, after every child has been reconciled, once per
/// actual transition. The container is passed mutably so a listener may call
/// back into it (including `set_state`).
pub trait ViewStateListener<C: ChildView> {
    fn on_view_state_changed(&self, view: &mut MultiStateView<C>, state: ViewState);
}

impl<C, F> ViewStateListener<C> for F
where
    C: ChildView,
    F: Fn(&mut MultiStateView<C>, ViewState),
{
    fn on_view_state_changed(&self, view: &mut MultiStateView<C>, state: ViewState) {
        self(view, state)
    }
}

/// Shared handle to a listener; identity is the allocation.
pub type ListenerRef<C> = Rc<dyn ViewStateListener<C>>;

fn same_listener<C: ChildView>(a: &ListenerRef<C>, b: &ListenerRef<C>) -> bool {
    // Compare data pointers only; vtable pointers are not guaranteed unique.
    std::ptr::eq(
        Rc::as_ptr(a) as *const (),
        Rc::as_ptr(b) as *const (),
    )
}

/// Ordered, deduplicated listener set.
pub struct ListenerRegistry<C: ChildView> {
    listeners: Vec<ListenerRef<C>>,
}

impl<C: ChildView> Default for ListenerRegistry<C> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<C: ChildView> ListenerRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the end. Returns `false` if already present.
    pub fn add(&mut self, listener: ListenerRef<C>) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Remove if present. Returns `false` if it wasn't registered.
    pub fn remove(&mut self, listener: &ListenerRef<C>) -> bool {
        match self.listeners.iter().position(|l| same_listener(l, listener)) {
            Some(pos) => {
                self.listeners.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, listener: &ListenerRef<C>) -> bool {
        self.listeners.iter().any(|l| same_listener(l, listener))
    }

    /// Clone the current listeners, in registration order, for delivery.
    pub(crate) fn snapshot(&self) -> Vec<ListenerRef<C>> {
        self.listeners.clone()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<C: ChildView> fmt::Debug for ListenerRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("len", &self.listeners.len())
            .finish()
    }
}
