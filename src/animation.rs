//! Animation descriptors and transition requests.
//!
//! The container never plays animations itself. It only decides which
//! descriptor to request (in or out) and for how long, and hands a
//! [`Transition`] to the child. Playback is the child's business.
//!
//! Duration rule: a positive override wins, anything else (`0` or negative)
//! falls back to the descriptor's intrinsic duration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Opaque animation descriptor.
///
/// `name` identifies the effect to the child (e.g. `"fade_in"`),
/// `duration_ms` is the intrinsic duration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Animation {
    pub name: String,
    pub duration_ms: u64,
}

impl Animation {
    pub fn new(name: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            name: name.into(),
            duration_ms,
        }
    }

    /// Intrinsic duration.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Reference to an animation resource, resolved through an [`AnimationLoader`].
///
/// Id `0` means "no resource" and resets a slot to its default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimationId(pub u32);

impl AnimationId {
    pub const NONE: AnimationId = AnimationId(0);

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Resolves animation resource ids into descriptors.
pub trait AnimationLoader {
    /// Load the animation for `id`, or `None` if there is no such resource.
    fn load(&self, id: AnimationId) -> Option<Animation>;
}

/// In-memory [`AnimationLoader`] keyed by resource id.
#[derive(Debug, Clone, Default)]
pub struct AnimationCatalog {
    animations: HashMap<AnimationId, Animation>,
}

impl AnimationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an animation under `id`. Builder form of [`Self::insert`].
    pub fn with(mut self, id: AnimationId, animation: Animation) -> Self {
        self.insert(id, animation);
        self
    }

    pub fn insert(&mut self, id: AnimationId, animation: Animation) -> Option<Animation> {
        self.animations.insert(id, animation)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

impl AnimationLoader for AnimationCatalog {
    fn load(&self, id: AnimationId) -> Option<Animation> {
        self.animations.get(&id).cloned()
    }
}

/// Caller-supplied fallback animations.
///
/// Slots reset to these when given `None` or [`AnimationId::NONE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationDefaults {
    pub fade_in: Animation,
    pub fade_out: Animation,
}

impl AnimationDefaults {
    pub fn new(fade_in: Animation, fade_out: Animation) -> Self {
        Self { fade_in, fade_out }
    }
}

/// One configured animation (in or out) plus its duration override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSlot {
    animation: Animation,
    default: Animation,
    duration_override: i64,
}

impl AnimationSlot {
    pub fn new(default: Animation) -> Self {
        Self {
            animation: default.clone(),
            default,
            duration_override: 0,
        }
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Replace the descriptor, or reset to the default with `None`.
    ///
    /// The current override is kept and keeps applying to the new descriptor.
    pub fn set_animation(&mut self, animation: Option<Animation>) {
        self.animation = animation.unwrap_or_else(|| self.default.clone());
    }

    pub fn intrinsic_duration(&self) -> Duration {
        self.animation.duration()
    }

    /// Raw override in milliseconds, as last set.
    pub fn duration_override(&self) -> i64 {
        self.duration_override
    }

    /// Override the duration; `<= 0` goes back to the intrinsic duration.
    pub fn set_duration_override(&mut self, duration_ms: i64) {
        self.duration_override = duration_ms;
    }

    pub fn effective_duration(&self) -> Duration {
        if self.duration_override > 0 {
            Duration::from_millis(self.duration_override as u64)
        } else {
            self.intrinsic_duration()
        }
    }

    /// Apply restored values; absent fields keep the current value.
    pub(crate) fn restore(
        &mut self,
        animation: Option<Animation>,
        intrinsic_ms: Option<u64>,
        duration_override: Option<i64>,
    ) {
        if let Some(animation) = animation {
            self.animation = animation;
        }
        if let Some(ms) = intrinsic_ms {
            self.animation.duration_ms = ms;
        }
        if let Some(duration_override) = duration_override {
            self.duration_override = duration_override;
        }
    }
}

/// Direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Child is appearing.
    In,
    /// Child is disappearing.
    Out,
}

/// Fire-and-forget animation request handed to a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<'a> {
    pub kind: TransitionKind,
    pub animation: &'a Animation,
    /// Effective duration (override or intrinsic).
    pub duration: Duration,
}

impl<'a> Transition<'a> {
    pub(crate) fn from_slot(kind: TransitionKind, slot: &'a AnimationSlot) -> Self {
        Self {
            kind,
            animation: slot.animation(),
            duration: slot.effective_duration(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade() -> Animation {
        Animation::new("fade_in", 300)
    }

    #[test]
    fn test_effective_duration_uses_intrinsic_by_default() {
        let slot = AnimationSlot::new(fade());
        assert_eq!(slot.effective_duration(), Duration::from_millis(300));
    }

    #[test]
    fn test_positive_override_wins() {
        let mut slot = AnimationSlot::new(fade());
        slot.set_duration_override(1200);
        assert_eq!(slot.effective_duration(), Duration::from_millis(1200));
        assert_eq!(slot.intrinsic_duration(), Duration::from_millis(300));
    }

    #[test]
    fn test_non_positive_override_resets() {
        let mut slot = AnimationSlot::new(fade());
        slot.set_duration_override(1200);
        slot.set_duration_override(0);
        assert_eq!(slot.effective_duration(), Duration::from_millis(300));

        slot.set_duration_override(-50);
        assert_eq!(slot.effective_duration(), Duration::from_millis(300));
        assert_eq!(slot.duration_override(), -50);
    }

    #[test]
    fn test_override_survives_animation_swap() {
        let mut slot = AnimationSlot::new(fade());
        slot.set_duration_override(900);
        slot.set_animation(Some(Animation::new("slide_in", 150)));

        assert_eq!(slot.animation().name, "slide_in");
        assert_eq!(slot.intrinsic_duration(), Duration::from_millis(150));
        assert_eq!(slot.effective_duration(), Duration::from_millis(900));
    }

    #[test]
    fn test_none_resets_to_default() {
        let mut slot = AnimationSlot::new(fade());
        slot.set_animation(Some(Animation::new("slide_in", 150)));
        slot.set_animation(None);
        assert_eq!(slot.animation(), &fade());
    }

    #[test]
    fn test_restore_keeps_absent_fields() {
        let mut slot = AnimationSlot::new(fade());
        slot.set_duration_override(700);
        slot.restore(None, Some(450), None);

        assert_eq!(slot.animation().name, "fade_in");
        assert_eq!(slot.intrinsic_duration(), Duration::from_millis(450));
        assert_eq!(slot.duration_override(), 700);
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = AnimationCatalog::new().with(AnimationId(7), fade());
        assert_eq!(catalog.load(AnimationId(7)), Some(fade()));
        assert_eq!(catalog.load(AnimationId(8)), None);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_animation_id_none() {
        assert!(AnimationId::NONE.is_none());
        assert!(!AnimationId(3).is_none());
        assert_eq!(AnimationId(3).to_string(), "#3");
    }
}
