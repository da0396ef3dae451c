//! The particle field: motion, pointer response, proximity links, drawing.

use glam::Vec2;

use super::particle::Particle;
use super::rng::Rng;
use crate::api::config::FieldConfig;
use crate::api::types::{Bounds, Connection};
use crate::input::queue::InputEvent;
use crate::renderer::traits::Surface;
use crate::theme::ColorScheme;

/// What one frame drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub connections: usize,
}

/// A fixed-count set of particles drifting over a rectangular surface.
///
/// Connections are not stored: [`Field::connections`] rescans all pairs each
/// time it is called. That is O(n²) per frame, fine for the tens of particles
/// this is meant for; a spatial grid would be needed for thousands.
pub struct Field {
    bounds: Bounds,
    particles: Vec<Particle>,
    pointer: Option<Vec2>,
    config: FieldConfig,
    colors: ColorScheme,
    rng: Rng,
}

impl Field {
    /// Seed used when the config does not name one.
    pub const DEFAULT_SEED: u64 = 42;

    /// Build a field of `config.particle_count` randomly placed particles.
    pub fn new(config: FieldConfig, width: f32, height: f32) -> Self {
        let mut field = Self::empty(config, width, height);
        field.regenerate();
        field
    }

    /// Size `surface` to the viewport and build a field covering it.
    pub fn create<S: Surface + ?Sized>(
        surface: &mut S,
        config: FieldConfig,
        width: f32,
        height: f32,
    ) -> Self {
        surface.set_size(width, height);
        Self::new(config, surface.width(), surface.height())
    }

    /// Build a field from explicit particles instead of sampling them.
    ///
    /// A later [`Field::resize`] still regenerates `config.particle_count`
    /// random particles.
    pub fn with_particles(
        config: FieldConfig,
        width: f32,
        height: f32,
        particles: Vec<Particle>,
    ) -> Self {
        let mut field = Self::empty(config, width, height);
        field.particles = particles;
        field
    }

    fn empty(config: FieldConfig, width: f32, height: f32) -> Self {
        let config = config.sanitized();
        Self {
            bounds: Bounds::new(width, height),
            particles: Vec::with_capacity(config.count()),
            pointer: None,
            colors: config.color_scheme(),
            rng: Rng::new(config.seed.unwrap_or(Self::DEFAULT_SEED)),
            config,
        }
    }

    /// Discard every particle and sample a fresh set within the current bounds.
    fn regenerate(&mut self) {
        let Bounds { width, height } = self.bounds;
        let speed = self.config.max_speed;
        let (min_r, max_r) = (self.config.min_radius, self.config.max_radius);

        self.particles.clear();
        for _ in 0..self.config.count() {
            let position = Vec2::new(self.rng.range(0.0, width), self.rng.range(0.0, height));
            let velocity = Vec2::new(self.rng.range(-speed, speed), self.rng.range(-speed, speed));
            let radius = self.rng.range(min_r, max_r);
            self.particles.push(Particle::new(position, velocity, radius));
        }
        log::debug!(
            "field: generated {} particles in {}x{}",
            self.particles.len(),
            width,
            height
        );
    }

    /// Adopt new dimensions and regenerate every particle.
    /// Old positions are not rescaled.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
        self.regenerate();
    }

    /// Resize the surface too, then regenerate.
    pub fn resize_surface<S: Surface + ?Sized>(&mut self, surface: &mut S, width: f32, height: f32) {
        surface.set_size(width, height);
        self.resize(surface.width(), surface.height());
    }

    /// Start (or keep) tracking the pointer at viewport coordinates.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
    }

    /// Stop tracking the pointer; particles stop reacting from the next frame.
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Replace the colors used by subsequent draws.
    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.colors = scheme;
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.colors
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The sanitized configuration in effect.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Apply one host event. Resizes also resize `surface`.
    pub fn handle_input<S: Surface + ?Sized>(&mut self, event: &InputEvent, surface: &mut S) {
        match *event {
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::Resize { width, height } => self.resize_surface(surface, width, height),
            InputEvent::SetColorScheme(scheme) => self.set_color_scheme(scheme),
        }
    }

    /// Move one particle a frame: edge reflection, then pointer response.
    fn advance(p: &mut Particle, bounds: Bounds, pointer: Option<Vec2>, config: &FieldConfig) {
        p.step(bounds);
        p.interact(
            pointer,
            config.pointer_radius,
            config.pointer_strength,
            config.pointer_response,
        );
    }

    /// Advance every particle one frame without drawing.
    pub fn update(&mut self) {
        for p in &mut self.particles {
            Self::advance(p, self.bounds, self.pointer, &self.config);
        }
    }

    /// All pairs closer than the connection distance, in `(a, b)` order.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let particles = &self.particles;
        let max_distance = self.config.connection_distance;
        let max_opacity = self.config.connection_opacity;

        (0..particles.len()).flat_map(move |a| {
            (a + 1..particles.len()).filter_map(move |b| {
                let distance = particles[a].position.distance(particles[b].position);
                (distance < max_distance).then(|| Connection {
                    a,
                    b,
                    distance,
                    opacity: (1.0 - distance / max_distance) * max_opacity,
                })
            })
        })
    }

    /// Run one full frame: clear, move and draw each particle, then draw links.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        surface.clear();

        let particle_color = self.colors.particle;
        for p in &mut self.particles {
            Self::advance(p, self.bounds, self.pointer, &self.config);
            surface.fill_circle(p.position, p.radius, particle_color);
        }

        let line = self.colors.line;
        let width = self.config.line_width;
        let mut connections = 0;
        for c in self.connections() {
            surface.stroke_line(
                self.particles[c.a].position,
                self.particles[c.b].position,
                line.with_alpha(c.opacity),
                width,
            );
            connections += 1;
        }

        FrameStats {
            particles: self.particles.len(),
            connections,
        }
    }
}
