//! Sample application wiring a container of [`Panel`]s.
//!
//! One panel per state plus an unmanaged header that a listener keeps in sync
//! with the current state, the way a toolbar of toggle buttons would be.

use std::rc::Rc;
use std::time::Instant;

use crate::animation::{Animation, AnimationCatalog, AnimationDefaults, AnimationId};
use crate::child::{ChildId, LayoutParams};
use crate::config::MultiStateConfig;
use crate::container::MultiStateView;
use crate::error::MultiStateResult;
use crate::listener::ListenerRef;
use crate::saved_state::SavedStateStore;
use crate::ui::{theme::state_color, Panel};
use crate::view_state::{HideStrategy, ViewState};

/// Resource ids understood by [`demo_catalog`].
pub const ANIM_SLIDE_IN: AnimationId = AnimationId(1);
pub const ANIM_SLIDE_OUT: AnimationId = AnimationId(2);
pub const ANIM_POP: AnimationId = AnimationId(3);

/// Fallback fades used when no animation resource is configured.
pub fn demo_defaults() -> AnimationDefaults {
    AnimationDefaults::new(
        Animation::new("fade_in", 250),
        Animation::new("fade_out", 250),
    )
}

/// Animations the demo can reference by id from its configuration.
pub fn demo_catalog() -> AnimationCatalog {
    AnimationCatalog::new()
        .with(ANIM_SLIDE_IN, Animation::new("slide_in", 400))
        .with(ANIM_SLIDE_OUT, Animation::new("slide_out", 400))
        .with(ANIM_POP, Animation::new("pop", 120))
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// The demo's state: the container and where its header lives.
pub struct DemoApp {
    view: MultiStateView<Panel>,
    header: ChildId,
}

impl DemoApp {
    pub fn new(config: &MultiStateConfig) -> MultiStateResult<Self> {
        let mut view = MultiStateView::from_config(config, demo_defaults(), demo_catalog())?;

        let header = view.attach(Panel::new("multistate", 3), LayoutParams::unmanaged());
        for (state, panel, strategy) in demo_panels() {
            view.attach(
                panel,
                LayoutParams::for_state(state).with_hide_strategy(strategy),
            );
        }

        let toolbar: ListenerRef<Panel> =
            Rc::new(move |v: &mut MultiStateView<Panel>, s: ViewState| update_header(v, header, s));
        view.add_listener(toolbar);
        let initial = view.state();
        update_header(&mut view, header, initial);

        Ok(Self { view, header })
    }

    pub fn view(&self) -> &MultiStateView<Panel> {
        &self.view
    }

    pub fn header(&self) -> ChildId {
        self.header
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: char) -> KeyOutcome {
        match key {
            'c' => self.view.show_content(),
            'e' => self.view.show_empty(),
            'r' => self.view.show_error(),
            'l' => self.view.show_loading(),
            'u' => self.view.show_undefined(),
            'a' => {
                let enabled = !self.view.animations_enabled();
                self.view.set_animations_enabled(enabled);
                tracing::debug!(enabled, "Toggled animations");
            }
            'q' => return KeyOutcome::Quit,
            _ => {}
        }
        KeyOutcome::Continue
    }

    /// Clear finished fades. Returns `true` if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let ids: Vec<ChildId> = self.view.children().map(|(id, _, _)| id).collect();
        let mut changed = false;
        for id in ids {
            if let Some(panel) = self.view.child_mut(id) {
                changed |= panel.tick(now);
            }
        }
        changed
    }

    /// Restore from `store` if it holds a record.
    pub fn restore_from(&mut self, store: &SavedStateStore) -> bool {
        match store.load() {
            Some(saved) => {
                self.view.restore_state(&saved);
                true
            }
            None => false,
        }
    }

    pub fn save_to(&self, store: &SavedStateStore) -> MultiStateResult<()> {
        store.save(&self.view.save_state())
    }
}

fn demo_panels() -> Vec<(ViewState, Panel, HideStrategy)> {
    vec![
        (
            ViewState::Content,
            Panel::new("Content", 7)
                .with_lines(["• first item", "• second item", "• third item"])
                .with_color(state_color(ViewState::Content)),
            HideStrategy::MakeInvisible,
        ),
        (
            ViewState::Empty,
            Panel::new("Empty", 3)
                .with_lines(["Nothing here yet."])
                .with_color(state_color(ViewState::Empty)),
            HideStrategy::MakeGone,
        ),
        (
            ViewState::Error,
            Panel::new("Error", 4)
                .with_lines(["Something went wrong.", "Press [l] to retry."])
                .with_color(state_color(ViewState::Error)),
            HideStrategy::MakeGone,
        ),
        (
            ViewState::Loading,
            Panel::new("Loading", 3)
                .with_lines(["◐ Loading..."])
                .with_color(state_color(ViewState::Loading)),
            HideStrategy::MakeGone,
        ),
        (
            ViewState::Undefined,
            Panel::new("Undefined", 3)
                .with_lines(["¯\\_(ツ)_/¯"])
                .with_color(state_color(ViewState::Undefined)),
            HideStrategy::MakeGone,
        ),
    ]
}

/// Render the toggle row: one checkbox per state.
fn update_header(view: &mut MultiStateView<Panel>, header: ChildId, state: ViewState) {
    let row = ViewState::ALL
        .iter()
        .map(|s| {
            let mark = if *s == state { 'x' } else { ' ' };
            format!("[{}] {}", mark, s.name().to_lowercase())
        })
        .collect::<Vec<_>>()
        .join("  ");
    if let Some(panel) = view.child_mut(header) {
        panel.set_lines(vec![row]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::child::{ChildView, Visibility};
    use tempfile::TempDir;

    fn app() -> DemoApp {
        DemoApp::new(&MultiStateConfig::default()).unwrap()
    }

    fn visibility_of(app: &DemoApp, title: &str) -> Visibility {
        app.view()
            .children()
            .find(|(_, panel, _)| panel.title() == title)
            .map(|(_, panel, _)| panel.visibility())
            .unwrap()
    }

    fn header_text(app: &DemoApp) -> String {
        app.view().child(app.header()).unwrap().lines().join("")
    }

    #[test]
    fn test_initial_layout() {
        let app = app();
        assert_eq!(app.view().child_count(), 6);
        assert_eq!(visibility_of(&app, "Content"), Visibility::Visible);
        assert_eq!(visibility_of(&app, "Error"), Visibility::Gone);
        assert!(header_text(&app).contains("[x] content"));
    }

    #[test]
    fn test_keys_switch_state_and_header() {
        let mut app = app();
        assert_eq!(app.handle_key('r'), KeyOutcome::Continue);

        assert_eq!(app.view().state(), ViewState::Error);
        assert_eq!(visibility_of(&app, "Content"), Visibility::Invisible);
        assert_eq!(visibility_of(&app, "Error"), Visibility::Visible);
        assert!(header_text(&app).contains("[x] error"));
        assert!(header_text(&app).contains("[ ] content"));
        assert_eq!(visibility_of(&app, "multistate"), Visibility::Visible);
    }

    #[test]
    fn test_toggle_animations_and_quit() {
        let mut app = app();
        app.handle_key('a');
        assert!(app.view().animations_enabled());
        app.handle_key('l');
        let loading = app
            .view()
            .children()
            .find(|(_, p, _)| p.title() == "Loading")
            .map(|(_, p, _)| p.fade().cloned())
            .unwrap();
        assert_eq!(loading.unwrap().animation, "fade_in");
        assert_eq!(app.handle_key('q'), KeyOutcome::Quit);
    }

    fn panel<'a>(app: &'a DemoApp, title: &str) -> &'a Panel {
        app.view()
            .children()
            .find(|(_, panel, _)| panel.title() == title)
            .map(|(_, panel, _)| panel)
            .unwrap()
    }

    #[test]
    fn test_unanimated_reveal_is_not_dimmed() {
        let mut app = app();
        for key in ['a', 'r', 'a', 'c'] {
            app.handle_key(key);
        }

        let content = panel(&app, "Content");
        let now = Instant::now();
        assert_eq!(content.visibility(), Visibility::Visible);
        assert!(content.fade().is_none());
        assert!(!content.is_dimmed(now));
    }

    #[test]
    fn test_gone_panel_fades_out_on_screen() {
        let mut app = app();
        for key in ['a', 'r', 'l'] {
            app.handle_key(key);
        }

        let error = panel(&app, "Error");
        let started = error.fade().unwrap().started;
        assert_eq!(error.visibility(), Visibility::Gone);
        assert!(error.is_drawn(started));
        assert!(error.takes_space(started));

        let done = started + std::time::Duration::from_millis(300);
        assert!(!error.is_drawn(done));
        assert!(app.tick(done));
        assert!(panel(&app, "Error").fade().is_none());
    }

    #[test]
    fn test_configured_animation_ids() {
        let config = MultiStateConfig::new()
            .with_in_animation(ANIM_POP)
            .with_initial_state(ViewState::Empty);
        let app = DemoApp::new(&config).unwrap();
        assert_eq!(app.view().in_animation().animation().name, "pop");
        assert_eq!(app.view().state(), ViewState::Empty);
        assert_eq!(visibility_of(&app, "Empty"), Visibility::Visible);
        assert!(header_text(&app).contains("[x] empty"));
    }

    #[test]
    fn test_save_and_restore_between_runs() {
        let temp_dir = TempDir::new().unwrap();
        let store = SavedStateStore::new(temp_dir.path().join("demo.json"));

        let mut first = app();
        first.handle_key('a');
        first.handle_key('u');
        first.save_to(&store).unwrap();

        let mut second = app();
        assert!(second.restore_from(&store));
        assert_eq!(second.view().state(), ViewState::Undefined);
        assert!(second.view().animations_enabled());
        assert_eq!(visibility_of(&second, "Undefined"), Visibility::Visible);
        assert!(header_text(&second).contains("[x] undefined"));
    }
}
