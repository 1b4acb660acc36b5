use glam::Vec2;
use rand::Rng;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::{integrator, spawn};

/// Opaque reference to an externally loaded image. The core never decodes
/// images; the renderer owns the handle-to-texture mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u64);

/// How a particle is drawn: a flat fill color or an external image.
/// Chosen once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    Color([u8; 3]),
    Image(ImageHandle),
}

/// A circle in the simulation.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    /// Displacement per frame.
    pub vel: Vec2,
    pub radius: f32,
    /// The radius this particle spawned at; shrinking stops here.
    pub min_radius: f32,
    /// Used only in collision resolution.
    pub mass: f32,
    /// Square-proximity threshold for pointer-driven growth.
    pub mouse_zone: f32,
    pub visual: Visual,
    /// A fixed particle never receives velocity writes and never moves.
    /// True only for the anchor.
    pub fixed: bool,
}

/// The simulation world: the particle collection, the surface bounds, and
/// the last known pointer position.
#[derive(Debug)]
pub struct World {
    pub particles: Vec<Particle>,
    /// None until the first pointer event arrives.
    pub pointer: Option<Vec2>,
    pub width: f32,
    pub height: f32,
    pub config: SimConfig,
}

impl World {
    /// Create an empty world. Call [`World::reinitialize`] before stepping.
    pub fn new(config: SimConfig) -> Self {
        Self {
            particles: Vec::new(),
            pointer: None,
            width: 0.0,
            height: 0.0,
            config,
        }
    }

    /// Record the latest pointer position. Last write wins.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
    }

    /// Discard the current particle collection and rebuild it for the given
    /// surface size. Any reference to prior particles is stale afterwards.
    pub fn reinitialize(
        &mut self,
        width: f32,
        height: f32,
        rng: &mut impl Rng,
    ) -> Result<(), SimError> {
        spawn::populate(self, width, height, rng)
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self) {
        integrator::step(self);
    }

    /// Read-only view of the current particle state, for rendering.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
