use macroquad::color::Color;
use macroquad::math::Vec2;

use super::{RadialFill, Stroke, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Path {
        points: Vec<Vec2>,
        width: f32,
        start_color: Color,
        end_color: Color,
        glow: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        center_color: Color,
        rim_color: Color,
        glow: f32,
    },
}

/// A surface without pixels. It keeps the commands of the current frame so they
/// can be inspected or replayed elsewhere.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}
impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_path(&mut self, path: &[Vec2], stroke: &Stroke<'_>) {
        self.commands.push(DrawCommand::Path {
            points: path.to_vec(),
            width: stroke.width,
            start_color: stroke.gradient.color_at(stroke.gradient.from),
            end_color: stroke.gradient.color_at(stroke.gradient.to),
            glow: stroke.shadow.blur,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &RadialFill<'_>) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            center_color: fill.gradient.color_at(0.0),
            rim_color: fill.gradient.color_at(1.0),
            glow: fill.shadow.blur,
        });
    }
}
