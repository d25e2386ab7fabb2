//! Recording listener for testing.

use std::cell::RefCell;
use std::rc::Rc;

use crate::child::ChildView;
use crate::container::MultiStateView;
use crate::listener::ViewStateListener;
use crate::view_state::ViewState;

/// Log of `(listener label, state)` pairs, shareable between listeners so
/// tests can assert delivery order.
pub type EventLog = Rc<RefCell<Vec<(String, ViewState)>>>;

/// Listener that appends every notification to an [`EventLog`].
#[derive(Debug)]
pub struct RecordingListener {
    label: String,
    log: EventLog,
}

impl RecordingListener {
    /// Create a listener with its own log.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_log(label, EventLog::default())
    }

    /// Create a listener writing into a shared log.
    pub fn with_log(label: impl Into<String>, log: EventLog) -> Self {
        Self {
            label: label.into(),
            log,
        }
    }

    /// States this listener has been notified with, in order.
    pub fn states(&self) -> Vec<ViewState> {
        self.log
            .borrow()
            .iter()
            .filter(|(label, _)| *label == self.label)
            .map(|(_, state)| *state)
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.states().len()
    }
}

impl<C: ChildView> ViewStateListener<C> for RecordingListener {
    fn on_view_state_changed(&self, _view: &mut MultiStateView<C>, state: ViewState) {
        self.log.borrow_mut().push((self.label.clone(), state));
    }
}
