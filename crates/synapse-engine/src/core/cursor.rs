//! Smoothed cursor follower: a dot and a slower trail easing toward the pointer.

use glam::Vec2;

/// Two markers that chase the last known pointer position.
///
/// Each frame the head closes `head_rate` of the remaining gap and the trail
/// closes `trail_rate`, so the trail lags behind the head.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorFollower {
    target: Vec2,
    head: Vec2,
    trail: Vec2,
    head_rate: f32,
    trail_rate: f32,
}

impl CursorFollower {
    pub const DEFAULT_HEAD_RATE: f32 = 0.2;
    pub const DEFAULT_TRAIL_RATE: f32 = 0.1;

    /// Follower parked at the origin, like a page that has not seen the mouse yet.
    pub fn new() -> Self {
        Self::with_rates(Self::DEFAULT_HEAD_RATE, Self::DEFAULT_TRAIL_RATE)
    }

    /// Rates are clamped to [0, 1]; 1 snaps straight to the pointer.
    pub fn with_rates(head_rate: f32, trail_rate: f32) -> Self {
        let clamp = |r: f32| if r.is_finite() { r.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            target: Vec2::ZERO,
            head: Vec2::ZERO,
            trail: Vec2::ZERO,
            head_rate: clamp(head_rate),
            trail_rate: clamp(trail_rate),
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    /// Ease both markers one frame toward the pointer.
    pub fn step(&mut self) {
        self.head += (self.target - self.head) * self.head_rate;
        self.trail += (self.target - self.trail) * self.trail_rate;
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn head(&self) -> Vec2 {
        self.head
    }

    pub fn trail(&self) -> Vec2 {
        self.trail
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_covers_rate_fraction() {
        let mut c = CursorFollower::new();
        c.pointer_move(100.0, 50.0);
        c.step();
        assert!(c.head().abs_diff_eq(Vec2::new(20.0, 10.0), 1e-4));
        assert!(c.trail().abs_diff_eq(Vec2::new(10.0, 5.0), 1e-4));
    }

    #[test]
    fn trail_lags_head_and_both_converge() {
        let mut c = CursorFollower::new();
        c.pointer_move(300.0, 200.0);
        for _ in 0..10 {
            c.step();
            assert!(c.head().distance(c.target()) <= c.trail().distance(c.target()));
        }
        for _ in 0..200 {
            c.step();
        }
        assert!(c.head().abs_diff_eq(c.target(), 1e-2));
        assert!(c.trail().abs_diff_eq(c.target(), 1e-2));
    }

    #[test]
    fn without_pointer_stays_parked() {
        let mut c = CursorFollower::default();
        c.step();
        assert_eq!(c.head(), Vec2::ZERO);
        assert_eq!(c.trail(), Vec2::ZERO);
    }

    #[test]
    fn rates_are_clamped() {
        let mut c = CursorFollower::with_rates(5.0, f32::NAN);
        c.pointer_move(10.0, 10.0);
        c.step();
        assert_eq!(c.head(), Vec2::new(10.0, 10.0));
        assert_eq!(c.trail(), Vec2::ZERO);
    }
}
