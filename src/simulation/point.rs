use macroquad::math::Vec2;

use super::{DAMPING, GRAVITY};

/// A single Verlet mass point of the rope.
///
/// Velocity is implicit: it is the distance travelled since the previous step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RopePoint {
    pub position: Vec2,
    pub previous_position: Vec2,
    fixed: bool,
}
impl RopePoint {
    pub fn new(x: f32, y: f32, fixed: bool) -> Self {
        let position = Vec2::new(x, y);
        Self {
            position,
            previous_position: position,
            fixed,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn velocity(&self) -> Vec2 {
        self.position - self.previous_position
    }

    /// Steps the point forward by one tick with damping and gravity.
    /// Fixed points are driven from outside and are left untouched.
    pub fn advance(&mut self) {
        if self.fixed {
            return;
        }

        let velocity = self.velocity();
        self.previous_position = self.position;
        self.position += velocity * DAMPING;
        self.position.y += GRAVITY;
    }

    /// Keeps the point inside `[0, max_x] x [0, max_y]`, one axis at a time.
    pub fn clamp_to_bounds(&mut self, max_x: f32, max_y: f32) {
        if self.position.x < 0.0 {
            self.position.x = 0.0;
        } else if self.position.x > max_x {
            self.position.x = max_x;
        }
        if self.position.y < 0.0 {
            self.position.y = 0.0;
        } else if self.position.y > max_y {
            self.position.y = max_y;
        }
    }
}
