//! Test helper utilities for pulsefield tests

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SimConfig;
use crate::engine::{Particle, Visual, World};

/// Check if two f32 values are approximately equal within tolerance
pub fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

/// Deterministic RNG for reproducible spawning in tests
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Build a movable test particle with the default mouse zone and a plain
/// white fill
pub fn test_particle(x: f32, y: f32, dx: f32, dy: f32, radius: f32, mass: f32) -> Particle {
    Particle {
        pos: Vec2::new(x, y),
        vel: Vec2::new(dx, dy),
        radius,
        min_radius: radius,
        mass,
        mouse_zone: 50.0,
        visual: Visual::Color([255, 255, 255]),
        fixed: false,
    }
}

/// Build a world with explicit bounds and a hand-picked particle set,
/// bypassing spawning
pub fn world_with_particles(particles: Vec<Particle>, width: f32, height: f32) -> World {
    let mut world = World::new(SimConfig::default());
    world.width = width;
    world.height = height;
    world.particles = particles;
    world
}

/// Compare two worlds particle by particle with tolerance
pub fn worlds_approx_equal(a: &World, b: &World, tol: f32) -> bool {
    if a.particles.len() != b.particles.len() {
        return false;
    }
    a.particles.iter().zip(b.particles.iter()).all(|(p, q)| {
        approx_eq(p.pos.x, q.pos.x, tol)
            && approx_eq(p.pos.y, q.pos.y, tol)
            && approx_eq(p.vel.x, q.vel.x, tol)
            && approx_eq(p.vel.y, q.vel.y, tol)
            && approx_eq(p.radius, q.radius, tol)
    })
}
