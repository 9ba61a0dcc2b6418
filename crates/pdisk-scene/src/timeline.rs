//! Timeline primitives: easings, actions, and cues.
//!
//! A cue is one `play` call: a batch of actions that run together over the
//! same run time. A nonzero lag ratio staggers the actions, action `k`
//! starting at `k * lag * run_time`, so a cue of n actions spans
//! `run_time * (1 + lag * (n - 1))` seconds.

use crate::element::ElementId;
use serde::{Deserialize, Serialize};

/// Rate function applied to an action's local progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// Quintic ease with zero first and second derivatives at both ends.
    Smooth,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Smooth => t * t * t * (t * (6.0 * t - 15.0) + 10.0),
        }
    }
}

/// What a cue does to one element.
#[derive(Debug, Clone)]
pub enum Action {
    /// Reveal a curve progressively along its length. Fill fades in with
    /// the reveal on filled elements.
    Draw,
    /// Reveal a label by ramping its opacity.
    Write,
    FadeIn,
    FadeOut,
    /// Replace a label's text, crossfading at the halfway point.
    SwapText { to: String },
    /// Sweep an element's boundary angles by an offset animating from
    /// `from` to `to` radians.
    Rotate { from: f64, to: f64 },
}

impl Action {
    /// Intro actions keep their target hidden until they start.
    pub fn is_intro(&self) -> bool {
        matches!(self, Action::Draw | Action::Write | Action::FadeIn)
    }
}

/// A batch of actions played together.
#[derive(Debug, Clone)]
pub struct Cue {
    /// Absolute start time, assigned when the cue is played into a scene.
    pub start: f64,
    /// Run time of each individual action, in seconds.
    pub run_time: f64,
    /// Stagger ratio between consecutive actions.
    pub lag: f64,
    pub easing: Easing,
    pub actions: Vec<(ElementId, Action)>,
}

impl Cue {
    pub fn new() -> Self {
        Self {
            start: 0.0,
            run_time: 1.0,
            lag: 0.0,
            easing: Easing::Smooth,
            actions: Vec::new(),
        }
    }

    pub fn act(mut self, target: ElementId, action: Action) -> Self {
        self.actions.push((target, action));
        self
    }

    pub fn run_time(mut self, seconds: f64) -> Self {
        self.run_time = seconds;
        self
    }

    pub fn lag_ratio(mut self, lag: f64) -> Self {
        self.lag = lag;
        self
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Total wall time the cue occupies, including stagger.
    pub fn span(&self) -> f64 {
        let n = self.actions.len();
        if n == 0 {
            return 0.0;
        }
        self.run_time * (1.0 + self.lag * (n - 1) as f64)
    }

    /// Absolute `(start, end)` window of action `k`.
    pub fn action_window(&self, k: usize) -> (f64, f64) {
        let s = self.start + k as f64 * self.lag * self.run_time;
        (s, s + self.run_time)
    }
}

impl Default for Cue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<ElementId> {
        let mut arena: SlotMap<ElementId, ()> = SlotMap::with_key();
        (0..n).map(|_| arena.insert(())).collect()
    }

    #[test]
    fn test_easing_endpoints() {
        for e in [Easing::Linear, Easing::Smooth] {
            assert!((e.apply(0.0) - 0.0).abs() < 1e-12);
            assert!((e.apply(1.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_smooth_midpoint_and_flat_ends() {
        assert_relative_eq!(Easing::Smooth.apply(0.5), 0.5, epsilon = 1e-12);
        // Near-zero slope at the ends
        assert!(Easing::Smooth.apply(0.02) < 1e-4);
        assert!(Easing::Smooth.apply(0.98) > 1.0 - 1e-4);
    }

    #[test]
    fn test_smooth_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = Easing::Smooth.apply(i as f64 / 100.0);
            assert!(v >= prev, "not monotonic at step {}", i);
            prev = v;
        }
    }

    #[test]
    fn test_easing_clamps_outside_domain() {
        assert_eq!(Easing::Smooth.apply(-0.5), 0.0);
        assert_eq!(Easing::Smooth.apply(1.5), 1.0);
    }

    #[test]
    fn test_cue_span_without_lag() {
        let ids = ids(3);
        let mut cue = Cue::new().run_time(2.0);
        for id in ids {
            cue = cue.act(id, Action::FadeIn);
        }
        assert!((cue.span() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_cue_span_with_lag() {
        let ids = ids(4);
        let mut cue = Cue::new().lag_ratio(0.2);
        for id in ids {
            cue = cue.act(id, Action::Draw);
        }
        // 1 + 3 * 0.2 = 1.6
        assert!((cue.span() - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_action_windows_stagger() {
        let ids = ids(3);
        let mut cue = Cue::new().run_time(1.0).lag_ratio(0.5);
        for id in &ids {
            cue = cue.act(*id, Action::Draw);
        }
        cue.start = 2.0;
        assert_eq!(cue.action_window(0), (2.0, 3.0));
        assert_eq!(cue.action_window(1), (2.5, 3.5));
        assert_eq!(cue.action_window(2), (3.0, 4.0));
    }

    #[test]
    fn test_empty_cue_has_zero_span() {
        assert_eq!(Cue::new().span(), 0.0);
    }
}
