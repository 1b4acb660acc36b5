//! Unit tests for boundary reflection

use pulsefield_core::tests::test_helpers::{approx_eq, test_particle, world_with_particles};

#[test]
fn test_right_wall_flips_x_velocity() {
    let p = test_particle(195.0, 100.0, 2.0, 0.0, 8.0, 5.0);
    let mut world = world_with_particles(vec![p], 200.0, 200.0);

    world.step();

    // Reflection happens before integration, so the particle backs off by
    // one frame's velocity in the same step.
    assert!(approx_eq(world.particles[0].vel.x, -2.0, 1e-6));
    assert!(approx_eq(world.particles[0].pos.x, 193.0, 1e-6));
}

#[test]
fn test_left_wall_flips_x_velocity() {
    let p = test_particle(5.0, 100.0, -2.0, 0.0, 8.0, 5.0);
    let mut world = world_with_particles(vec![p], 200.0, 200.0);

    world.step();

    assert!(approx_eq(world.particles[0].vel.x, 2.0, 1e-6));
    assert!(approx_eq(world.particles[0].pos.x, 7.0, 1e-6));
}

#[test]
fn test_bottom_wall_flips_y_velocity() {
    let p = test_particle(100.0, 195.0, 0.0, 2.0, 8.0, 5.0);
    let mut world = world_with_particles(vec![p], 200.0, 200.0);

    world.step();

    assert!(approx_eq(world.particles[0].vel.y, -2.0, 1e-6));
}

#[test]
fn test_top_wall_flips_y_velocity() {
    let p = test_particle(100.0, 5.0, 0.0, -2.0, 8.0, 5.0);
    let mut world = world_with_particles(vec![p], 200.0, 200.0);

    world.step();

    assert!(approx_eq(world.particles[0].vel.y, 2.0, 1e-6));
}

#[test]
fn test_axes_reflect_independently() {
    // Corner hit: both components flip in the same step.
    let p = test_particle(195.0, 195.0, 2.0, 2.0, 8.0, 5.0);
    let mut world = world_with_particles(vec![p], 200.0, 200.0);

    world.step();

    assert!(approx_eq(world.particles[0].vel.x, -2.0, 1e-6));
    assert!(approx_eq(world.particles[0].vel.y, -2.0, 1e-6));
}

#[test]
fn test_interior_particle_unaffected() {
    let p = test_particle(100.0, 100.0, 2.0, 1.0, 8.0, 5.0);
    let mut world = world_with_particles(vec![p], 200.0, 200.0);

    world.step();

    assert!(approx_eq(world.particles[0].vel.x, 2.0, 1e-6));
    assert!(approx_eq(world.particles[0].vel.y, 1.0, 1e-6));
    assert!(approx_eq(world.particles[0].pos.x, 102.0, 1e-6));
    assert!(approx_eq(world.particles[0].pos.y, 101.0, 1e-6));
}
