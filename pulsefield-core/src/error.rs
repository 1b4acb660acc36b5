use thiserror::Error;

/// Errors surfaced by world (re)initialization.
#[derive(Debug, Error)]
pub enum SimError {
    /// The surface cannot fit even one particle: the per-axis sampling
    /// interval `[radius, dimension - radius]` would be empty.
    #[error("surface {width}x{height} cannot fit particles of radius {radius}")]
    SurfaceTooSmall {
        width: f32,
        height: f32,
        radius: f32,
    },
}
