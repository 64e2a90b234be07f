use macroquad::logging::debug;
use macroquad::math::Vec2;

use crate::config::RopeConfig;
use crate::error::RopeError;

mod point;
pub use point::RopePoint;

/// Fraction of the velocity kept from one tick to the next.
pub const DAMPING: f32 = 0.97;
/// Downward acceleration in units per tick squared (screen space, +y is down).
pub const GRAVITY: f32 = 0.6;
/// Constraint passes per tick. Fixed, independent of the chain length.
pub const RELAXATION_PASSES: usize = 3;


/// A chain of Verlet points hanging from a cursor-driven anchor.
#[derive(Debug, Clone)]
pub struct Rope {
    points: Vec<RopePoint>,
    segment_length: f32,
    target_position: Vec2,
    surface_bounds: Vec2,
    // Ticks since the pointer last moved
    idle_frames: u64,
}
impl Rope {
    /// Lays the points out straight down from the anchor, one segment apart.
    /// Only the first point is fixed.
    pub fn new(config: RopeConfig) -> Result<Self, RopeError> {
        if config.point_count == 0 {
            return Err(RopeError::NoPoints);
        }
        if !config.segment_length.is_finite() || config.segment_length <= 0.0 {
            return Err(RopeError::InvalidSegmentLength(config.segment_length));
        }

        let anchor = config.anchor;
        let points = (0..config.point_count)
            .map(|i| {
                RopePoint::new(
                    anchor.x,
                    anchor.y + i as f32 * config.segment_length,
                    i == 0,
                )
            })
            .collect::<Vec<_>>();

        debug!(
            "rope: {} points, segment length {}, anchored at ({}, {})",
            points.len(),
            config.segment_length,
            anchor.x,
            anchor.y
        );

        Ok(Self {
            points,
            segment_length: config.segment_length,
            target_position: anchor,
            surface_bounds: config.bounds.max(Vec2::ZERO),
            idle_frames: 0,
        })
    }

    pub fn set_target_position(&mut self, x: f32, y: f32) {
        self.target_position = Vec2::new(x, y);
        self.idle_frames = 0;
    }

    /// Updates the drawable area. Points outside of it are pulled back in on the next `update`.
    pub fn resize_surface(&mut self, width: f32, height: f32) {
        self.surface_bounds = Vec2::new(width, height).max(Vec2::ZERO);
        debug!("rope: surface resized to {}x{}", self.surface_bounds.x, self.surface_bounds.y);
    }

    /// Advances the whole chain by one tick.
    pub fn update(&mut self) {
        // The anchor tracks the pointer without any easing
        self.points[0].position = self.target_position;

        let bounds = self.surface_bounds;
        for point in self.points.iter_mut() {
            point.advance();
            point.clamp_to_bounds(bounds.x, bounds.y);
        }

        relax(&mut self.points, self.segment_length);

        self.idle_frames = self.idle_frames.saturating_add(1);
    }

    pub fn points(&self) -> &[RopePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false, a rope holds at least its anchor.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn anchor(&self) -> &RopePoint {
        &self.points[0]
    }

    pub fn loose_end(&self) -> &RopePoint {
        &self.points[self.points.len() - 1]
    }

    pub fn segment_length(&self) -> f32 {
        self.segment_length
    }

    pub fn target_position(&self) -> Vec2 {
        self.target_position
    }

    pub fn surface_bounds(&self) -> Vec2 {
        self.surface_bounds
    }

    pub fn idle_frames(&self) -> u64 {
        self.idle_frames
    }
}


/// Pulls every adjacent pair toward `segment_length`, splitting the correction
/// evenly between both ends. Fixed points never move.
///
/// Runs `RELAXATION_PASSES` Gauss-Seidel sweeps, so the result only
/// approximates the rest lengths.
pub fn relax(points: &mut [RopePoint], segment_length: f32) {
    for _ in 0..RELAXATION_PASSES {
        for j in 1..points.len() {
            let (head, tail) = points.split_at_mut(j);
            let current = &mut head[j - 1];
            let next = &mut tail[0];

            let delta = next.position - current.position;
            // Coincident points have a zero delta, so the clamped distance yields a zero offset
            let distance = delta.length().max(f32::EPSILON);
            let percent = (segment_length - distance) / distance / 2.0;
            let offset = delta * percent;

            if !current.is_fixed() {
                current.position -= offset;
            }
            if !next.is_fixed() {
                next.position += offset;
            }
        }
    }
}
