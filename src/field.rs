use bevy::math::Vec2;
use bevy::prelude::Component;
use rand::Rng;

use crate::particle::{self, Particle};
use crate::settings::FieldSettings;

/// The particle collection plus the shared per-frame inputs: the canvas-space
/// bounds of the drawing surface and the normalized pointer offset.
///
/// There is exactly one `Field` per app. All mutation happens on the main
/// schedule, so the pointer offset needs no synchronization; the frame step
/// just reads whatever the cursor system last wrote.
#[derive(Component, Debug)]
pub struct Field {
    pub particles: Vec<Particle>,
    /// Logical surface size, canvas coordinates (origin top-left, y down).
    pub bounds: Vec2,
    /// Pointer position relative to the surface center, each axis in [-1, 1].
    pub pointer: Vec2,
    pub paused: bool,
}

impl Field {
    pub fn new(rng: &mut impl Rng, bounds: Vec2, settings: &FieldSettings) -> Field {
        let count = particle_count(bounds, settings.particle_density);
        let particles = (0..count).map(|_| particle::spawn(rng, bounds, settings)).collect();
        Field {
            particles,
            bounds,
            pointer: Vec2::ZERO,
            paused: false,
        }
    }

    /// Pointer-move: stores the position normalized to [-1, 1] per axis around
    /// the surface center. `position` is in window coordinates, top-left origin.
    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer = Vec2::new(
            (position.x / self.bounds.x - 0.5) * 2.0,
            (position.y / self.bounds.y - 0.5) * 2.0,
        );
    }

    /// Viewport resize: only the surface bounds change. The particle count and
    /// positions are deliberately left alone.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    /// Advances every particle one frame. Order doesn't matter; particles
    /// never interact.
    pub fn step(&mut self) {
        let (bounds, pointer) = (self.bounds, self.pointer);
        for p in &mut self.particles {
            particle::advance(p, bounds, pointer);
        }
    }
}

/// How many particles a surface gets: `floor(area / density)`, where the
/// density divisor is the area each particle covers.
pub fn particle_count(bounds: Vec2, density: f32) -> usize {
    ((bounds.x * bounds.y) / density).floor() as usize
}
