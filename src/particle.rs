use bevy::math::Vec2;
use bevy::prelude::Component;
use rand::Rng;

use crate::settings::FieldSettings;

/// Index of a particle's slot in the owning [`Field`](crate::field::Field),
/// attached to the mesh entity that draws it.
#[derive(Component)]
pub struct ParticleId(pub usize);

/// One animated dot. Plain data; the behavior lives in the free functions
/// below so the update logic can be exercised without a window.
#[derive(Clone, Debug)]
pub struct Particle {
    /// Unperturbed location, canvas coordinates. Drifts each frame and wraps
    /// at the field edges.
    pub base: Vec2,
    /// Where the particle is actually drawn: `base` plus the parallax offset.
    pub pos: Vec2,
    /// Drawn radius.
    pub size: f32,
    /// Drift per frame, both components small and signed.
    pub velocity: Vec2,
    pub opacity: f32,
    /// Opacity change per frame.
    pub fade_speed: f32,
    /// +1.0 while brightening, -1.0 while dimming.
    pub fade_direction: f32,
    /// Scales how strongly the pointer offset shifts this particle.
    pub parallax_factor: f32,
}

pub fn spawn(rng: &mut impl Rng, bounds: Vec2, settings: &FieldSettings) -> Particle {
    let base = Vec2::new(rng.gen_range(0.0..bounds.x), rng.gen_range(0.0..bounds.y));
    Particle {
        base,
        pos: base,
        size: rng.gen_range(settings.min_size..=settings.max_size),
        velocity: Vec2::new(rng.gen_range(-0.25..0.25), rng.gen_range(-0.25..0.25)),
        opacity: rng.gen_range(0.0..1.0),
        fade_speed: rng.gen_range(0.005..0.025),
        fade_direction: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
        parallax_factor: rng.gen_range(10.0..40.0),
    }
}

/// Advances one frame: drift with per-axis wrap to the opposite edge, parallax
/// offset from the pointer, and one step of the fade cycle.
///
/// Opacity may overshoot [0, 1] by at most one fade step before the direction
/// flips; it is never clamped here, only at draw time.
pub fn advance(particle: &mut Particle, bounds: Vec2, pointer: Vec2) {
    particle.base += particle.velocity;

    if particle.base.x > bounds.x {
        particle.base.x = 0.0;
    }
    if particle.base.x < 0.0 {
        particle.base.x = bounds.x;
    }
    if particle.base.y > bounds.y {
        particle.base.y = 0.0;
    }
    if particle.base.y < 0.0 {
        particle.base.y = bounds.y;
    }

    particle.pos = particle.base + pointer * particle.parallax_factor;

    particle.opacity += particle.fade_speed * particle.fade_direction;
    if particle.opacity <= 0.0 || particle.opacity >= 1.0 {
        particle.fade_direction = -particle.fade_direction;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const BOUNDS: Vec2 = Vec2::new(100.0, 100.0);

    fn still_particle() -> Particle {
        Particle {
            base: Vec2::new(50.0, 50.0),
            pos: Vec2::new(50.0, 50.0),
            size: 1.0,
            velocity: Vec2::ZERO,
            opacity: 0.5,
            fade_speed: 0.01,
            fade_direction: 1.0,
            parallax_factor: 20.0,
        }
    }

    #[test]
    fn spawn_respects_configured_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let settings = FieldSettings::default();
        for _ in 0..200 {
            let p = spawn(&mut rng, BOUNDS, &settings);
            assert!(p.base.x >= 0.0 && p.base.x < BOUNDS.x);
            assert!(p.base.y >= 0.0 && p.base.y < BOUNDS.y);
            assert_eq!(p.pos, p.base);
            assert!(p.size >= settings.min_size && p.size <= settings.max_size);
            assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
            assert!((0.0..1.0).contains(&p.opacity));
            assert!((0.005..0.025).contains(&p.fade_speed));
            assert!(p.fade_direction == 1.0 || p.fade_direction == -1.0);
            assert!((10.0..40.0).contains(&p.parallax_factor));
        }
    }

    #[test]
    fn base_position_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let settings = FieldSettings::default();
        let mut p = spawn(&mut rng, BOUNDS, &settings);
        for _ in 0..10_000 {
            advance(&mut p, BOUNDS, Vec2::ZERO);
            assert!(p.base.x >= 0.0 && p.base.x <= BOUNDS.x);
            assert!(p.base.y >= 0.0 && p.base.y <= BOUNDS.y);
        }
    }

    #[test]
    fn wraps_to_opposite_edge() {
        let mut p = still_particle();
        p.base.x = BOUNDS.x - 0.1;
        p.velocity.x = 0.5;
        advance(&mut p, BOUNDS, Vec2::ZERO);
        assert_eq!(p.base.x, 0.0);

        let mut p = still_particle();
        p.base.x = 0.1;
        p.velocity.x = -0.5;
        advance(&mut p, BOUNDS, Vec2::ZERO);
        assert_eq!(p.base.x, BOUNDS.x);
    }

    #[test]
    fn centered_pointer_draws_at_base() {
        let mut p = still_particle();
        p.velocity = Vec2::new(0.1, -0.2);
        for _ in 0..50 {
            advance(&mut p, BOUNDS, Vec2::ZERO);
            assert_eq!(p.pos, p.base);
        }
    }

    #[test]
    fn pointer_offset_applies_parallax() {
        let mut p = still_particle();
        p.parallax_factor = 20.0;
        advance(&mut p, BOUNDS, Vec2::new(1.0, 0.0));
        assert_eq!(p.pos.x, p.base.x + 20.0);
        assert_eq!(p.pos.y, p.base.y);
    }

    #[test]
    fn opacity_overshoots_by_at_most_one_step() {
        let mut p = still_particle();
        p.opacity = 0.9;
        p.fade_speed = 0.02;
        for _ in 0..1_000 {
            advance(&mut p, BOUNDS, Vec2::ZERO);
            assert!(p.opacity >= -p.fade_speed && p.opacity <= 1.0 + p.fade_speed);
        }
    }

    #[test]
    fn fade_direction_flips_exactly_at_the_bounds() {
        let mut p = still_particle();
        p.opacity = 0.99;
        p.fade_speed = 0.02;
        p.fade_direction = 1.0;

        advance(&mut p, BOUNDS, Vec2::ZERO);
        assert!(p.opacity > 1.0);
        assert_eq!(p.fade_direction, -1.0);

        // Back inside the range: no flip.
        advance(&mut p, BOUNDS, Vec2::ZERO);
        assert!(p.opacity < 1.0 && p.opacity > 0.0);
        assert_eq!(p.fade_direction, -1.0);
    }
}
