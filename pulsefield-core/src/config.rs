/// Fill colors assigned to moving particles, picked uniformly at spawn.
pub const PALETTE: [[u8; 3]; 9] = [
    [0xe7, 0x6f, 0x51],
    [0xf4, 0xa2, 0x61],
    [0xe9, 0xc4, 0x6a],
    [0x2a, 0x9d, 0x8f],
    [0x26, 0x46, 0x53],
    [0xdc, 0x2f, 0x02],
    [0x7a, 0xe5, 0x82],
    [0x59, 0x83, 0x92],
    [0x01, 0x16, 0x1e],
];

/// Fill color of the central anchor circle.
pub const ANCHOR_COLOR: [u8; 3] = [0x33, 0x33, 0x33];

/// Tunable parameters for a simulation world.
///
/// The defaults reproduce the stock scene: 300 moving circles of radius 8
/// around a fixed anchor of radius 30.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of moving particles (the anchor is extra).
    pub particle_count: usize,
    /// Radius each moving particle spawns at; also its shrink floor.
    pub spawn_radius: f32,
    /// Upper bound on any particle radius.
    pub max_radius: f32,
    /// Per-frame radius growth/shrink increment.
    pub radius_step: f32,
    /// Square-proximity threshold for pointer-driven growth.
    pub mouse_zone: f32,
    /// Mass of each moving particle.
    pub particle_mass: f32,
    /// Radius of the fixed central anchor.
    pub anchor_radius: f32,
    /// Mass of the anchor, as seen by colliding particles.
    pub anchor_mass: f32,
    /// Redraw cap per particle during rejection sampling. When exhausted the
    /// last candidate is accepted even if it overlaps a neighbor, so dense
    /// configurations terminate instead of looping forever.
    pub max_placement_attempts: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: 300,
            spawn_radius: 8.0,
            max_radius: 30.0,
            radius_step: 3.0,
            mouse_zone: 50.0,
            particle_mass: 5.0,
            anchor_radius: 30.0,
            anchor_mass: 8.0,
            max_placement_attempts: 10_000,
        }
    }
}
