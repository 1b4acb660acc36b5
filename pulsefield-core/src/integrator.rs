use crate::collision;
use crate::engine::World;

/// Advance the world by one frame.
///
/// For each particle in collection order: pairwise collision check and
/// resolution, boundary reflection, explicit Euler integration (one frame
/// per step), then pointer-driven radius adjustment. The collision pass is
/// brute-force O(N²) per particle with no symmetry dedup, and the overlap
/// threshold uses the iterating particle's radius doubled rather than the
/// radii sum, so a pair can be examined twice per frame with inconsistent
/// readings. That asymmetry is intentional; see DESIGN.md before changing it.
pub fn step(world: &mut World) {
    let count = world.particles.len();

    for i in 0..count {
        for j in 0..count {
            if i == j {
                continue;
            }
            let (pos_i, radius_i) = {
                let p = &world.particles[i];
                (p.pos, p.radius)
            };
            let pos_j = world.particles[j].pos;
            if pos_i.distance(pos_j) - 2.0 * radius_i < 0.0 {
                collision::resolve(&mut world.particles, i, j);
            }
        }

        let p = &mut world.particles[i];

        // Reflect off the surface edges, each axis independently. Positions
        // are not clamped, so a particle can protrude for one frame.
        if p.pos.x + p.radius > world.width || p.pos.x - p.radius < 0.0 {
            p.vel.x = -p.vel.x;
        }
        if p.pos.y + p.radius > world.height || p.pos.y - p.radius < 0.0 {
            p.vel.y = -p.vel.y;
        }

        p.pos += p.vel;

        // Radius response: grow inside the square pointer zone, shrink back
        // toward the spawn radius outside it. Skipped entirely until the
        // first pointer event arrives.
        if let Some(pointer) = world.pointer {
            let near = (pointer.x - p.pos.x).abs() < p.mouse_zone
                && (pointer.y - p.pos.y).abs() < p.mouse_zone;
            if near {
                p.radius = (p.radius + world.config.radius_step).min(world.config.max_radius);
            } else if p.radius > p.min_radius {
                p.radius = (p.radius - world.config.radius_step).max(p.min_radius);
            }
        }
    }
}
