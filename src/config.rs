use macroquad::color::Color;
use macroquad::math::Vec2;

/// Narrower viewports do not get a rope at all.
pub const ACTIVATION_MIN_WIDTH: f32 = 768.0;


/// Construction parameters of a `Rope`, all fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RopeConfig {
    pub(crate) anchor: Vec2,
    pub(crate) point_count: usize,
    pub(crate) segment_length: f32,
    pub(crate) bounds: Vec2,
}
impl RopeConfig {
    pub fn new(anchor: Vec2) -> Self {
        Self {
            anchor,
            point_count: 20,
            segment_length: 15.0,
            bounds: Vec2::new(f32::MAX, f32::MAX),
        }
    }

    pub fn point_count(mut self, val: usize) -> Self {
        self.point_count = val;
        self
    }
    pub fn segment_length(mut self, val: f32) -> Self {
        self.segment_length = val;
        self
    }
    /// Initial drawable area. Defaults to unbounded until the host reports a size.
    pub fn bounds(mut self, width: f32, height: f32) -> Self {
        self.bounds = Vec2::new(width, height);
        self
    }
}


/// A colour ramp given as html colours and the positions they sit at in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    pub colors: Vec<String>,
    pub stops: Vec<f64>,
}
impl ColorRamp {
    pub fn new(colors: &[&str], stops: &[f64]) -> Self {
        Self {
            colors: colors.iter().map(|c| c.to_string()).collect(),
            stops: stops.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub cord: ColorRamp,
    pub bead: ColorRamp,
    pub weight: ColorRamp,
    pub glow: Color,
}
impl Default for Palette {
    fn default() -> Self {
        Self {
            cord: ColorRamp::new(&["#D2691E", "#8B4513", "#654321"], &[0.0, 0.5, 1.0]),
            bead: ColorRamp::new(&["#E8833A", "#D2691E", "#8B4513"], &[0.0, 0.6, 1.0]),
            weight: ColorRamp::new(&["#E8833A", "#D2691E", "#8B4513"], &[0.0, 0.5, 1.0]),
            glow: Color::new(210.0 / 255.0, 105.0 / 255.0, 30.0 / 255.0, 0.4),
        }
    }
}
