use thiserror::Error;

/// Raised while building a rope or its style. Simulation and drawing never fail.
#[derive(Error, Debug)]
pub enum RopeError {
    #[error("a rope needs at least one point")]
    NoPoints,

    #[error("segment length must be positive and finite, got {0}")]
    InvalidSegmentLength(f32),

    #[error("invalid colour ramp: {0}")]
    ColorRamp(#[from] colorgrad::CustomGradientError),
}
