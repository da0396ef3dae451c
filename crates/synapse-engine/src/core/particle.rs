//! A single drifting particle.

use glam::Vec2;

use crate::api::config::PointerResponse;
use crate::api::types::Bounds;

/// One animated point: position, velocity and display radius.
///
/// `radius` never drops below `base_radius`; pointer proximity grows it up to
/// twice the base size and it snaps back once the pointer is out of range.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub base_radius: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, base_radius: f32) -> Self {
        let base_radius = base_radius.max(0.0);
        Particle {
            position,
            velocity,
            radius: base_radius,
            base_radius,
        }
    }

    /// Advance by one frame of velocity, then reflect off the edges.
    ///
    /// An axis flips its velocity sign when the new position lies outside
    /// `[0, extent]`. Position is not clamped, so a particle may sit past the
    /// edge for one frame before heading back.
    pub fn step(&mut self, bounds: Bounds) {
        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > bounds.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.height {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Apply pointer attraction/repulsion and growth.
    ///
    /// Inside `reach`, `force = (reach - d) / reach` scales both the nudge
    /// (`offset * force * strength`) and the radius (`base * (1 + force)`).
    /// With no pointer, or out of reach, the radius resets to its base.
    /// Returns the force applied, or `None` when untouched.
    pub fn interact(
        &mut self,
        pointer: Option<Vec2>,
        reach: f32,
        strength: f32,
        response: PointerResponse,
    ) -> Option<f32> {
        let force = pointer.and_then(|p| {
            let distance = self.position.distance(p);
            (distance < reach).then(|| (p, (reach - distance) / reach))
        });

        match force {
            Some((pointer, force)) => {
                let offset = match response {
                    PointerResponse::Attract => pointer - self.position,
                    PointerResponse::Repel => self.position - pointer,
                };
                self.position += offset * force * strength;
                self.radius = self.base_radius * (1.0 + force);
                Some(force)
            }
            None => {
                self.radius = self.base_radius;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds { width: 100.0, height: 100.0 };

    #[test]
    fn step_moves_by_velocity() {
        let mut p = Particle::new(Vec2::new(10.0, 10.0), Vec2::new(0.25, -0.1), 2.0);
        p.step(BOUNDS);
        assert!(p.position.abs_diff_eq(Vec2::new(10.25, 9.9), 1e-5));
        assert_eq!(p.velocity, Vec2::new(0.25, -0.1));
    }

    #[test]
    fn crossing_right_edge_flips_only_x() {
        let mut p = Particle::new(Vec2::new(99.9, 50.0), Vec2::new(0.2, 0.2), 1.0);
        p.step(BOUNDS);
        assert!(p.position.x > 100.0, "no clamping expected");
        assert_eq!(p.velocity, Vec2::new(-0.2, 0.2));

        // Next frame heads back inside and keeps its direction
        p.step(BOUNDS);
        assert!(p.position.x <= 100.0);
        assert_eq!(p.velocity, Vec2::new(-0.2, 0.2));
    }

    #[test]
    fn crossing_top_edge_flips_only_y() {
        let mut p = Particle::new(Vec2::new(50.0, 0.1), Vec2::new(-0.2, -0.2), 1.0);
        p.step(BOUNDS);
        assert!(p.position.y < 0.0);
        assert_eq!(p.velocity, Vec2::new(-0.2, 0.2));
    }

    #[test]
    fn landing_exactly_on_edge_does_not_flip() {
        let mut p = Particle::new(Vec2::new(99.5, 50.0), Vec2::new(0.5, 0.0), 1.0);
        p.step(BOUNDS);
        assert_eq!(p.position.x, 100.0);
        assert_eq!(p.velocity.x, 0.5);
    }

    #[test]
    fn pointer_on_particle_doubles_radius() {
        let mut p = Particle::new(Vec2::new(20.0, 20.0), Vec2::ZERO, 1.5);
        let force = p.interact(Some(Vec2::new(20.0, 20.0)), 150.0, 0.03, PointerResponse::Attract);
        assert_eq!(force, Some(1.0));
        assert_eq!(p.radius, 3.0);
        assert_eq!(p.position, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn attract_pulls_toward_pointer() {
        let mut p = Particle::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 1.0);
        let force = p
            .interact(Some(Vec2::new(75.0, 0.0)), 150.0, 0.03, PointerResponse::Attract)
            .unwrap();
        assert!((force - 0.5).abs() < 1e-6);
        // 75 * 0.5 * 0.03
        assert!((p.position.x - 1.125).abs() < 1e-5);
        assert!((p.radius - 1.5).abs() < 1e-6);
    }

    #[test]
    fn repel_pushes_away_from_pointer() {
        let mut p = Particle::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 1.0);
        p.interact(Some(Vec2::new(75.0, 0.0)), 150.0, 0.03, PointerResponse::Repel);
        assert!(p.position.x < 0.0);
    }

    #[test]
    fn out_of_reach_or_no_pointer_resets_radius() {
        let mut p = Particle::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 2.0);
        p.interact(Some(Vec2::ZERO), 150.0, 0.03, PointerResponse::Attract);
        assert_eq!(p.radius, 4.0);

        assert_eq!(p.interact(Some(Vec2::new(150.0, 0.0)), 150.0, 0.03, PointerResponse::Attract), None);
        assert_eq!(p.radius, 2.0);

        p.interact(Some(Vec2::ZERO), 150.0, 0.03, PointerResponse::Attract);
        assert_eq!(p.interact(None, 150.0, 0.03, PointerResponse::Attract), None);
        assert_eq!(p.radius, 2.0);
    }

    #[test]
    fn negative_base_radius_clamps_to_zero() {
        let p = Particle::new(Vec2::ZERO, Vec2::ZERO, -1.0);
        assert_eq!(p.base_radius, 0.0);
        assert_eq!(p.radius, 0.0);
    }
}
