use glam::Vec2;
use rand::Rng;

use crate::config::{ANCHOR_COLOR, PALETTE};
use crate::engine::{Particle, Visual, World};
use crate::error::SimError;

/// Rebuild the world's particle collection for a surface of the given size.
///
/// Index 0 is the anchor: fixed at the surface center with zero velocity and
/// no pointer influence. The remaining `particle_count` particles are placed
/// by rejection sampling so that no candidate lands closer than twice the
/// spawn radius to any already-placed particle (anchor included).
///
/// Placement is only guaranteed collision-free when the surface area
/// comfortably exceeds the packing area of the requested particle count.
/// Denser configurations still terminate: after `max_placement_attempts`
/// redraws the candidate is accepted as-is.
pub fn populate(
    world: &mut World,
    width: f32,
    height: f32,
    rng: &mut impl Rng,
) -> Result<(), SimError> {
    let radius = world.config.spawn_radius;
    if width <= 2.0 * radius || height <= 2.0 * radius {
        return Err(SimError::SurfaceTooSmall {
            width,
            height,
            radius,
        });
    }

    world.width = width;
    world.height = height;

    let mut particles = Vec::with_capacity(world.config.particle_count + 1);
    particles.push(Particle {
        pos: Vec2::new(width / 2.0, height / 2.0),
        vel: Vec2::ZERO,
        radius: world.config.anchor_radius,
        min_radius: world.config.anchor_radius,
        mass: world.config.anchor_mass,
        mouse_zone: 0.0,
        visual: Visual::Color(ANCHOR_COLOR),
        fixed: true,
    });

    for _ in 0..world.config.particle_count {
        let pos = place(
            &particles,
            width,
            height,
            radius,
            world.config.max_placement_attempts,
            rng,
        );
        particles.push(Particle {
            pos,
            // Always positive, range [1, 3) per component.
            vel: Vec2::new(
                (rng.gen::<f32>() + 0.5) * 2.0,
                (rng.gen::<f32>() + 0.5) * 2.0,
            ),
            radius,
            min_radius: radius,
            mass: world.config.particle_mass,
            mouse_zone: world.config.mouse_zone,
            visual: Visual::Color(PALETTE[rng.gen_range(0..PALETTE.len())]),
            fixed: false,
        });
    }

    world.particles = particles;
    Ok(())
}

/// Draw candidate positions until one clears every already-placed particle.
/// A conflict redraws the candidate and restarts the scan from the start of
/// the collection.
fn place(
    placed: &[Particle],
    width: f32,
    height: f32,
    radius: f32,
    max_attempts: u32,
    rng: &mut impl Rng,
) -> Vec2 {
    let mut pos = sample(width, height, radius, rng);
    let mut attempts = 0;
    let mut i = 0;
    while i < placed.len() {
        if pos.distance(placed[i].pos) - 2.0 * radius < 0.0 {
            if attempts >= max_attempts {
                // Relaxed placement: give up on non-overlap rather than spin
                // forever on a surface too dense for the particle count.
                break;
            }
            pos = sample(width, height, radius, rng);
            attempts += 1;
            i = 0;
        } else {
            i += 1;
        }
    }
    pos
}

fn sample(width: f32, height: f32, radius: f32, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.gen_range(radius..width - radius),
        rng.gen_range(radius..height - radius),
    )
}
