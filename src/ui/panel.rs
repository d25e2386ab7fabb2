//! Panel child view
//!
//! A titled block of text lines with a fixed height. Transition requests are
//! turned into a [`Fade`] that the renderer reads to dim the panel until the
//! requested duration has elapsed. A panel fading out keeps its rows and stays
//! on screen until the fade ends, whether it was made invisible or gone.
//!
//! Every visibility write drops the current fade; the engine requests a new
//! one right after the write when the change is animated.

use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::animation::{Transition, TransitionKind};
use crate::child::{ChildView, Visibility};

/// An in-flight fade started by a transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fade {
    pub kind: TransitionKind,
    pub animation: String,
    pub started: Instant,
    pub duration: Duration,
}

impl Fade {
    /// Completion in `0.0..=1.0` at `now`. Zero-length fades are complete.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Text panel shown by the demo container.
#[derive(Debug, Clone)]
pub struct Panel {
    title: String,
    lines: Vec<String>,
    /// Rows reserved in the layout, borders included.
    height: u16,
    color: Color,
    visibility: Visibility,
    fade: Option<Fade>,
}

impl Panel {
    pub fn new(title: impl Into<String>, height: u16) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            height,
            color: Color::White,
            visibility: Visibility::Visible,
            fade: None,
        }
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn fade(&self) -> Option<&Fade> {
        self.fade.as_ref()
    }

    /// Drop the fade once it has run its course. Returns `true` if one was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.fade {
            Some(fade) if fade.is_finished(now) => {
                self.fade = None;
                true
            }
            _ => false,
        }
    }

    /// Whether an out fade is still running at `now`.
    pub fn is_fading_out(&self, now: Instant) -> bool {
        matches!(&self.fade, Some(fade) if fade.kind == TransitionKind::Out && !fade.is_finished(now))
    }

    /// Whether the panel should be drawn at `now`: visible, or still fading out.
    pub fn is_drawn(&self, now: Instant) -> bool {
        self.visibility.is_visible() || self.is_fading_out(now)
    }

    /// Whether the panel occupies layout rows at `now`.
    pub fn takes_space(&self, now: Instant) -> bool {
        self.visibility.takes_space() || self.is_fading_out(now)
    }

    /// Whether the panel should be drawn dimmed at `now`.
    pub fn is_dimmed(&self, now: Instant) -> bool {
        match &self.fade {
            Some(fade) => match fade.kind {
                TransitionKind::In => fade.progress(now) < 0.5,
                TransitionKind::Out => !fade.is_finished(now),
            },
            None => false,
        }
    }
}

impl ChildView for Panel {
    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
        self.fade = None;
    }

    fn start_transition(&mut self, transition: &Transition<'_>) {
        self.fade = Some(Fade {
            kind: transition.kind,
            animation: transition.animation.name.clone(),
            started: Instant::now(),
            duration: transition.duration,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Animation;

    fn fade(kind: TransitionKind, started: Instant, ms: u64) -> Fade {
        Fade {
            kind,
            animation: "fade".to_string(),
            started,
            duration: Duration::from_millis(ms),
        }
    }

    #[test]
    fn test_fade_progress() {
        let start = Instant::now();
        let f = fade(TransitionKind::In, start, 200);
        assert_eq!(f.progress(start), 0.0);
        assert!((f.progress(start + Duration::from_millis(100)) - 0.5).abs() < 1e-3);
        assert_eq!(f.progress(start + Duration::from_secs(5)), 1.0);
        assert!(fade(TransitionKind::In, start, 0).is_finished(start));
    }

    #[test]
    fn test_start_transition_records_fade() {
        let mut panel = Panel::new("Content", 5);
        let anim = Animation::new("fade_in", 300);
        panel.start_transition(&Transition {
            kind: TransitionKind::In,
            animation: &anim,
            duration: Duration::from_millis(120),
        });

        let fade = panel.fade().unwrap();
        assert_eq!(fade.kind, TransitionKind::In);
        assert_eq!(fade.animation, "fade_in");
        assert_eq!(fade.duration, Duration::from_millis(120));
    }

    #[test]
    fn test_fading_out_panel_is_still_drawn() {
        let start = Instant::now();
        let mut panel = Panel::new("Error", 4);
        panel.set_visibility(Visibility::Invisible);
        panel.fade = Some(fade(TransitionKind::Out, start, 200));

        assert!(panel.is_drawn(start));
        assert!(panel.is_dimmed(start));

        let later = start + Duration::from_millis(250);
        assert!(!panel.is_drawn(later));
        assert!(panel.tick(later));
        assert!(panel.fade().is_none());
    }

    #[test]
    fn test_gone_panel_drawn_until_fade_out_ends() {
        let start = Instant::now();
        let mut panel = Panel::new("Empty", 3);
        panel.set_visibility(Visibility::Gone);
        panel.fade = Some(fade(TransitionKind::Out, start, 200));

        assert!(panel.is_drawn(start));
        assert!(panel.takes_space(start));

        let later = start + Duration::from_millis(250);
        assert!(!panel.is_drawn(later));
        assert!(!panel.takes_space(later));
    }

    #[test]
    fn test_gone_panel_without_fade_not_drawn() {
        let mut panel = Panel::new("Empty", 3);
        panel.set_visibility(Visibility::Gone);
        assert!(!panel.is_drawn(Instant::now()));
        assert!(!panel.takes_space(Instant::now()));
    }

    #[test]
    fn test_visibility_write_drops_stale_fade() {
        let start = Instant::now();
        let mut panel = Panel::new("Content", 5);
        panel.set_visibility(Visibility::Invisible);
        panel.fade = Some(fade(TransitionKind::Out, start, 10_000));

        // Revealed without animation
        panel.set_visibility(Visibility::Visible);

        assert!(panel.fade().is_none());
        assert!(panel.is_drawn(start));
        assert!(!panel.is_dimmed(start));
    }
}
