pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod spawn;

pub use config::SimConfig;
pub use engine::{ImageHandle, Particle, Visual, World};
pub use error::SimError;
pub use integrator::step;

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
