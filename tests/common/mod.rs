//! Common test utilities for integration tests.
//!
//! Reusable containers and fixtures built on the mock child view.

#![allow(dead_code)]

use multistate::adapters::mock::MockChild;
use multistate::animation::{Animation, AnimationDefaults};
use multistate::child::{ChildId, LayoutParams};
use multistate::container::MultiStateView;
use multistate::view_state::{HideStrategy, ViewState};

/// Default fades used by every test container.
pub fn test_defaults() -> AnimationDefaults {
    AnimationDefaults::new(
        Animation::new("fade_in", 300),
        Animation::new("fade_out", 200),
    )
}

/// Empty container in the CONTENT state.
pub fn empty_container() -> MultiStateView<MockChild> {
    MultiStateView::new(test_defaults())
}

/// Ids of the children in [`scenario_container`].
pub struct Scenario {
    pub a: ChildId,
    pub b: ChildId,
    pub c: ChildId,
}

/// Container with A owned by CONTENT, B owned by EMPTY, C unmanaged.
pub fn scenario_container() -> (MultiStateView<MockChild>, Scenario) {
    let mut view = empty_container();
    let a = view.attach(MockChild::new("A"), LayoutParams::for_state(ViewState::Content));
    let b = view.attach(
        MockChild::new("B"),
        LayoutParams::for_state(ViewState::Empty).with_hide_strategy(HideStrategy::MakeGone),
    );
    let c = view.attach(MockChild::new("C"), LayoutParams::unmanaged());
    (view, Scenario { a, b, c })
}

/// Container with one child per state, alternating hide strategies.
pub fn one_child_per_state() -> (MultiStateView<MockChild>, Vec<(ViewState, ChildId)>) {
    let mut view = empty_container();
    let ids = ViewState::ALL
        .iter()
        .enumerate()
        .map(|(i, state)| {
            let strategy = if i % 2 == 0 {
                HideStrategy::MakeInvisible
            } else {
                HideStrategy::MakeGone
            };
            let id = view.attach(
                MockChild::new(state.name()),
                LayoutParams::for_state(*state).with_hide_strategy(strategy),
            );
            (*state, id)
        })
        .collect();
    (view, ids)
}
