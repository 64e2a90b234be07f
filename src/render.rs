//! Drawing the rope onto a 2D surface.
//!
//! The rope only talks to the [`Surface`] trait. Gradients and glows are described
//! here as plain data and rasterised by each surface in whatever way it can.

use colorgrad::{CustomGradient, Gradient};
use macroquad::color::Color;
use macroquad::math::Vec2;

use crate::config::{ColorRamp, Palette};
use crate::error::RopeError;
use crate::simulation::Rope;

pub mod recording;

/// Number of translucent spreads used to fake a blurred shadow.
pub const GLOW_LAYERS: usize = 4;


/// Something the rope can be drawn on.
pub trait Surface {
    /// Wipes the whole surface to transparent.
    fn clear(&mut self);
    /// Strokes one continuous path through `path`, with round caps and joins.
    fn stroke_path(&mut self, path: &[Vec2], stroke: &Stroke<'_>);
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &RadialFill<'_>);
}


pub struct Stroke<'a> {
    pub width: f32,
    pub gradient: LinearGradient<'a>,
    pub shadow: Shadow,
}

pub struct RadialFill<'a> {
    pub gradient: RadialGradient<'a>,
    pub shadow: Shadow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blur: f32,
}
impl Shadow {
    /// Spreads from widest to narrowest, each carrying an equal share of the shadow alpha.
    /// A shadow without blur has no layers.
    pub fn layers(self) -> impl Iterator<Item = (f32, Color)> {
        let count = if self.blur > 0.0 { GLOW_LAYERS } else { 0 };
        let alpha = self.color.a / GLOW_LAYERS as f32;
        (1..=count).rev().map(move |k| {
            let spread = self.blur * k as f32 / GLOW_LAYERS as f32;
            (spread, Color { a: alpha, ..self.color })
        })
    }
}

/// A colour ramp laid along the line `from -> to`.
pub struct LinearGradient<'a> {
    pub from: Vec2,
    pub to: Vec2,
    pub ramp: &'a Gradient,
}
impl LinearGradient<'_> {
    /// Colour at the projection of `point` onto the gradient line.
    pub fn color_at(&self, point: Vec2) -> Color {
        let axis = self.to - self.from;
        let length_squared = axis.length_squared();
        let t = if length_squared > f32::EPSILON {
            ((point - self.from).dot(axis) / length_squared).clamp(0.0, 1.0)
        } else {
            0.0
        };
        sample(self.ramp, t)
    }
}

/// A colour ramp running from `center` (0) out to `radius` (1).
pub struct RadialGradient<'a> {
    pub center: Vec2,
    pub radius: f32,
    pub ramp: &'a Gradient,
}
impl RadialGradient<'_> {
    pub fn color_at(&self, fraction: f32) -> Color {
        sample(self.ramp, fraction.clamp(0.0, 1.0))
    }

    /// Concentric discs from the rim inwards. Painting them in order approximates the gradient.
    pub fn rings(&self, count: usize) -> impl Iterator<Item = (f32, Color)> + '_ {
        let count = count.max(1);
        (1..=count).rev().map(move |k| {
            let fraction = k as f32 / count as f32;
            (self.radius * fraction, self.color_at(fraction))
        })
    }
}

fn sample(ramp: &Gradient, t: f32) -> Color {
    let [r, g, b, a] = ramp.at(t as f64).to_rgba8();
    Color::from_rgba(r, g, b, a)
}

fn build_ramp(ramp: &ColorRamp) -> Result<Gradient, RopeError> {
    let colors = ramp.colors.iter().map(String::as_str).collect::<Vec<_>>();
    let gradient = CustomGradient::new()
        .html_colors(&colors)
        .domain(&ramp.stops)
        .build()?;
    Ok(gradient)
}


/// Everything about how the rope looks.
pub struct RopeStyle {
    cord: Gradient,
    bead: Gradient,
    weight: Gradient,
    pub glow: Color,
    pub cord_width: f32,
    pub cord_blur: f32,
    // Every n-th point carries a bead
    pub bead_spacing: usize,
    pub bead_radius: f32,
    // Used instead of `bead_radius` when a bead lands on the last point
    pub tip_bead_radius: f32,
    pub bead_blur: f32,
    pub weight_radius: f32,
    pub weight_blur: f32,
}
impl RopeStyle {
    pub fn new(palette: &Palette) -> Result<Self, RopeError> {
        Ok(Self {
            cord: build_ramp(&palette.cord)?,
            bead: build_ramp(&palette.bead)?,
            weight: build_ramp(&palette.weight)?,
            glow: palette.glow,
            cord_width: 2.5,
            cord_blur: 8.0,
            bead_spacing: 4,
            bead_radius: 3.5,
            tip_bead_radius: 5.0,
            bead_blur: 5.0,
            weight_radius: 6.0,
            weight_blur: 7.0,
        })
    }
}


impl Rope {
    /// Renders the current state: the cord, then the beads, then the end weight on top.
    pub fn draw<S: Surface>(&self, style: &RopeStyle, surface: &mut S) {
        surface.clear();

        let path = self.points().iter().map(|p| p.position).collect::<Vec<_>>();
        let last_index = path.len() - 1;
        let first = path[0];
        let last = path[last_index];

        surface.stroke_path(&path, &Stroke {
            width: style.cord_width,
            gradient: LinearGradient { from: first, to: last, ramp: &style.cord },
            shadow: Shadow { color: style.glow, blur: style.cord_blur },
        });

        for (i, &center) in path.iter().enumerate().step_by(style.bead_spacing.max(1)) {
            let radius = if i == last_index {
                style.tip_bead_radius
            } else {
                style.bead_radius
            };
            surface.fill_circle(center, radius, &RadialFill {
                gradient: RadialGradient { center, radius, ramp: &style.bead },
                shadow: Shadow { color: style.glow, blur: style.bead_blur },
            });
        }

        surface.fill_circle(last, style.weight_radius, &RadialFill {
            gradient: RadialGradient { center: last, radius: style.weight_radius, ramp: &style.weight },
            shadow: Shadow { color: style.glow, blur: style.weight_blur },
        });
    }
}
