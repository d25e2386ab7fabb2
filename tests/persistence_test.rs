//! Integration tests for save/restore and declarative configuration.

mod common;

use std::rc::Rc;
use std::time::Duration;

use common::{empty_container, scenario_container, test_defaults};
use multistate::adapters::mock::{MockChild, RecordingListener};
use multistate::animation::{Animation, AnimationCatalog, AnimationId};
use multistate::child::{ChildView, Visibility};
use multistate::config::MultiStateConfig;
use multistate::container::MultiStateView;
use multistate::error::MultiStateError;
use multistate::saved_state::{SavedState, SavedStateStore};
use multistate::view_state::ViewState;
use tempfile::TempDir;

#[test]
fn test_save_restore_round_trip() {
    let mut source = empty_container();
    source.set_animations_enabled(true);
    source.set_in_animation(Some(Animation::new("slide_in", 500)));
    source.set_in_animation_duration(800);
    source.set_out_animation_duration(-1);
    source.show_loading();

    let json = source.save_state().to_json().unwrap();
    let saved = SavedState::from_json(&json).unwrap();

    let mut target = empty_container();
    target.restore_state(&saved);

    assert_eq!(target.state(), ViewState::Loading);
    assert!(target.animations_enabled());
    assert_eq!(target.in_animation().animation().name, "slide_in");
    assert_eq!(target.in_animation().effective_duration(), Duration::from_millis(800));
    assert_eq!(target.out_animation().effective_duration(), Duration::from_millis(200));
    assert_eq!(target.save_state(), source.save_state());
}

#[test]
fn test_unparsable_state_name_keeps_current() {
    let mut view = empty_container();
    view.show_error();

    let saved = SavedState {
        state: Some("SIDEWAYS".to_string()),
        animations_enabled: Some(true),
        ..Default::default()
    };
    view.restore_state(&saved);

    assert_eq!(view.state(), ViewState::Error);
    assert!(view.animations_enabled());
}

#[test]
fn test_restore_applies_without_animation() {
    let (mut view, ids) = scenario_container();
    view.set_animations_enabled(true);
    let listener = Rc::new(RecordingListener::new("l"));
    view.add_listener(listener.clone());

    let saved = SavedState {
        state: Some("EMPTY".to_string()),
        ..Default::default()
    };
    view.restore_state(&saved);

    assert_eq!(view.child(ids.a).unwrap().visibility(), Visibility::Invisible);
    assert_eq!(view.child(ids.b).unwrap().visibility(), Visibility::Visible);
    assert!(view.child(ids.a).unwrap().transitions().is_empty());
    assert!(view.child(ids.b).unwrap().transitions().is_empty());
    assert_eq!(listener.states(), vec![ViewState::Empty]);
}

#[test]
fn test_store_round_trip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = SavedStateStore::new(temp_dir.path().join("view.json"));

    let mut source = empty_container();
    source.show_undefined();
    store.save(&source.save_state()).unwrap();

    let mut target = empty_container();
    target.restore_state(&store.load().unwrap());
    assert_eq!(target.state(), ViewState::Undefined);
}

#[test]
fn test_config_file_builds_container() {
    let config = MultiStateConfig::from_json(
        r#"{ "animations_enabled": true, "out_animation": 9, "in_animation_duration": 75, "initial_state": 1 }"#,
    )
    .unwrap();
    let catalog = AnimationCatalog::new().with(AnimationId(9), Animation::new("drop", 60));

    let mut view: MultiStateView<MockChild> =
        MultiStateView::from_config(&config, test_defaults(), catalog).unwrap();
    let content = view.attach(
        MockChild::new("content"),
        multistate::child::LayoutParams::for_state(ViewState::Content),
    );

    assert_eq!(view.state(), ViewState::Empty);
    assert_eq!(view.child(content).unwrap().visibility(), Visibility::Invisible);
    assert_eq!(view.out_animation().animation().name, "drop");
    assert_eq!(view.in_animation().effective_duration(), Duration::from_millis(75));

    view.show_content();
    let transitions = view.child(content).unwrap().transitions();
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].animation, "fade_in");
    assert_eq!(transitions[0].duration, Duration::from_millis(75));
}

#[test]
fn test_config_with_unknown_animation_fails() {
    let config = MultiStateConfig::new().with_in_animation(AnimationId(404));
    let result: Result<MultiStateView<MockChild>, _> =
        MultiStateView::from_config(&config, test_defaults(), AnimationCatalog::new());
    assert!(matches!(
        result,
        Err(MultiStateError::UnknownAnimation { id: AnimationId(404) })
    ));
}
