//! A rope that hangs off the mouse cursor, simulated with Verlet integration
//! and drawn as an overlay on top of the page.

pub mod config;
pub mod error;
pub mod overlay;
pub mod render;
pub mod simulation;

pub use config::{ColorRamp, Palette, RopeConfig, ACTIVATION_MIN_WIDTH};
pub use error::RopeError;
pub use overlay::{CanvasSurface, Overlay};
pub use render::recording::{DrawCommand, RecordingSurface};
pub use render::{RopeStyle, Surface};
pub use simulation::{relax, Rope, RopePoint};
