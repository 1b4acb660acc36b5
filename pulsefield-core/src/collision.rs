use glam::Vec2;

use crate::engine::Particle;

/// Rotate a velocity vector by `angle` radians.
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::new(
        v.x * angle.cos() - v.y * angle.sin(),
        v.x * angle.sin() + v.y * angle.cos(),
    )
}

/// Resolve an elastic collision between particles `a` and `b`.
///
/// Both velocities are rotated into a frame whose x-axis is the collision
/// normal (the line connecting the centers), the 1-D elastic formula is
/// applied along that axis with each particle's mass, and the results are
/// rotated back. Perpendicular components are untouched, and no positional
/// de-penetration happens, so overlapping circles may stay overlapped for a
/// frame or two after their velocities reflect.
///
/// The pair is only resolved while approaching: the dot product of relative
/// velocity and relative displacement must be non-negative. A fixed particle
/// participates in the exchange but never receives the velocity write.
pub fn resolve(particles: &mut [Particle], a: usize, b: usize) {
    let (pos_a, vel_a, m1, a_fixed) = {
        let p = &particles[a];
        (p.pos, p.vel, p.mass, p.fixed)
    };
    let (pos_b, vel_b, m2, b_fixed) = {
        let p = &particles[b];
        (p.pos, p.vel, p.mass, p.fixed)
    };

    let vel_diff = vel_a - vel_b;
    let dist = pos_b - pos_a;

    // Separating pairs are left alone, otherwise overlapping circles would
    // re-reflect every frame until they cleared each other.
    if vel_diff.dot(dist) >= 0.0 {
        // atan2(0, 0) is 0, so coincident centers degrade to a collision
        // along the x-axis instead of panicking.
        let angle = -dist.y.atan2(dist.x);

        let u1 = rotate(vel_a, angle);
        let u2 = rotate(vel_b, angle);

        let v1 = Vec2::new((u1.x * (m1 - m2) + 2.0 * m2 * u2.x) / (m1 + m2), u1.y);
        let v2 = Vec2::new((u2.x * (m2 - m1) + 2.0 * m1 * u1.x) / (m1 + m2), u2.y);

        if !a_fixed {
            particles[a].vel = rotate(v1, -angle);
        }
        if !b_fixed {
            particles[b].vel = rotate(v2, -angle);
        }
    }
}
