// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered reveal animation for the content panels.
//!
//! Each panel carries one visibility flag driven by viewport
//! intersection events. The standard policy is one-shot: a panel stays
//! visible after its first intersection and is unwatched from then on.
//! The toggling variant remains available for hosts that want panels to
//! re-reveal on scroll-back.

/// Fraction of a panel that must intersect the viewport before it
/// reveals.
pub const REVEAL_THRESHOLD: f32 = 0.2;

/// Root margin applied to the viewport when observing, in CSS pixels.
/// Negative so panels reveal slightly after entering the viewport.
pub const REVEAL_MARGIN_PX: i32 = -48;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealPolicy {
    /// Permanently visible on first intersection, then unwatched.
    #[default]
    OneShot,
    /// Visibility tracks current intersection.
    Toggle,
}

/// Host signals sampled at registration time.
#[derive(Debug, Clone, Copy)]
pub struct RevealEnvironment {
    /// The user prefers reduced motion.
    pub reduced_motion: bool,
    /// Viewport-intersection watching is available at all.
    pub observer_available: bool,
}

impl Default for RevealEnvironment {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            observer_available: true,
        }
    }
}

/// Per-panel visibility state.
///
/// With reduced motion or no intersection support every panel is visible
/// from the start and nothing is ever watched.
#[derive(Debug, Clone)]
pub struct RevealAnimator {
    policy: RevealPolicy,
    visible: Vec<bool>,
    watched: Vec<bool>,
}

impl RevealAnimator {
    pub fn new(panel_count: usize, policy: RevealPolicy, environment: RevealEnvironment) -> Self {
        let reveal_immediately = environment.reduced_motion || !environment.observer_available;
        Self {
            policy,
            visible: vec![reveal_immediately; panel_count],
            watched: vec![!reveal_immediately; panel_count],
        }
    }

    /// Feeds one intersection event for a panel. Events for unwatched or
    /// unknown panels are ignored.
    pub fn on_intersection(&mut self, panel: usize, intersecting: bool) {
        if panel >= self.visible.len() || !self.watched[panel] {
            return;
        }
        match self.policy {
            RevealPolicy::OneShot => {
                if intersecting {
                    self.visible[panel] = true;
                    self.watched[panel] = false;
                }
            }
            RevealPolicy::Toggle => {
                self.visible[panel] = intersecting;
            }
        }
    }

    pub fn is_visible(&self, panel: usize) -> bool {
        self.visible.get(panel).copied().unwrap_or(false)
    }

    /// Whether intersection events for this panel still matter.
    pub fn is_watched(&self, panel: usize) -> bool {
        self.watched.get(panel).copied().unwrap_or(false)
    }

    pub fn panel_count(&self) -> usize {
        self.visible.len()
    }

    pub fn all_visible(&self) -> bool {
        self.visible.iter().all(|&v| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watching() -> RevealEnvironment {
        RevealEnvironment::default()
    }

    #[test]
    fn panels_start_hidden_and_watched() {
        let animator = RevealAnimator::new(3, RevealPolicy::OneShot, watching());
        assert!(!animator.is_visible(0));
        assert!(animator.is_watched(0));
        assert!(!animator.all_visible());
    }

    #[test]
    fn one_shot_panels_stay_visible_and_become_unwatched() {
        let mut animator = RevealAnimator::new(3, RevealPolicy::OneShot, watching());
        animator.on_intersection(1, true);
        assert!(animator.is_visible(1));
        assert!(!animator.is_watched(1));

        // Scrolling back out does not hide a revealed panel.
        animator.on_intersection(1, false);
        assert!(animator.is_visible(1));
    }

    #[test]
    fn one_shot_ignores_non_intersecting_events_before_reveal() {
        let mut animator = RevealAnimator::new(2, RevealPolicy::OneShot, watching());
        animator.on_intersection(0, false);
        assert!(!animator.is_visible(0));
        assert!(animator.is_watched(0));
    }

    #[test]
    fn toggle_panels_track_current_intersection() {
        let mut animator = RevealAnimator::new(2, RevealPolicy::Toggle, watching());
        animator.on_intersection(0, true);
        assert!(animator.is_visible(0));
        animator.on_intersection(0, false);
        assert!(!animator.is_visible(0));
        assert!(animator.is_watched(0));
    }

    #[test]
    fn reduced_motion_reveals_everything_immediately() {
        let environment = RevealEnvironment {
            reduced_motion: true,
            observer_available: true,
        };
        let mut animator = RevealAnimator::new(3, RevealPolicy::OneShot, environment);
        assert!(animator.all_visible());
        assert!(!animator.is_watched(0));

        // No watching means no event can hide anything either.
        animator.on_intersection(0, false);
        assert!(animator.is_visible(0));
    }

    #[test]
    fn missing_observer_support_reveals_everything_immediately() {
        let environment = RevealEnvironment {
            reduced_motion: false,
            observer_available: false,
        };
        let animator = RevealAnimator::new(4, RevealPolicy::Toggle, environment);
        assert!(animator.all_visible());
    }

    #[test]
    fn out_of_range_panels_are_ignored() {
        let mut animator = RevealAnimator::new(1, RevealPolicy::OneShot, watching());
        animator.on_intersection(9, true);
        assert!(!animator.is_visible(9));
        assert!(!animator.is_watched(9));
    }

    #[test]
    fn configuration_constants_are_fixed_values() {
        assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
        assert!(REVEAL_MARGIN_PX < 0);
    }
}
