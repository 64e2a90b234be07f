//! The on-screen layer that hosts the rope inside a macroquad frame loop.

use macroquad::prelude::*;

use crate::config::{Palette, RopeConfig};
use crate::error::RopeError;
use crate::render::{RadialFill, RopeStyle, Stroke, Surface};
use crate::simulation::Rope;

// Discs used to approximate a radial fill
const RADIAL_RINGS: usize = 6;


/// An offscreen canvas the size of the viewport, composited over everything else.
pub struct CanvasSurface {
    target: RenderTarget,
    camera: Camera2D,
    size: Vec2,
}
impl CanvasSurface {
    pub fn new(width: f32, height: f32) -> Self {
        let size = Vec2::new(width, height).max(Vec2::ONE);
        let target = render_target(size.x as u32, size.y as u32);
        target.texture.set_filter(FilterMode::Linear);

        let mut camera = Camera2D::from_display_rect(Rect::new(0.0, 0.0, size.x, size.y));
        camera.render_target = Some(target.clone());

        Self { target, camera, size }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Reallocates the canvas. Whatever was drawn is lost.
    pub fn resize(&mut self, width: f32, height: f32) {
        *self = Self::new(width, height);
    }

    /// Draws the canvas over the screen. It never takes part in input handling.
    pub fn present(&self) {
        set_default_camera();
        draw_texture_ex(
            &self.target.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(self.size),
                flip_y: true,
                ..Default::default()
            },
        );
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        set_camera(&self.camera);
        clear_background(BLANK);
    }

    fn stroke_path(&mut self, path: &[Vec2], stroke: &Stroke<'_>) {
        for (spread, color) in stroke.shadow.layers() {
            polyline(path, stroke.width + spread, |_| color);
        }
        polyline(path, stroke.width, |p| stroke.gradient.color_at(p));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &RadialFill<'_>) {
        for (spread, color) in fill.shadow.layers() {
            draw_circle(center.x, center.y, radius + spread / 2.0, color);
        }
        for (ring_radius, color) in fill.gradient.rings(RADIAL_RINGS) {
            draw_circle(center.x, center.y, ring_radius, color);
        }
    }
}

// Straight segments with a disc on every vertex for round caps and joins
fn polyline(path: &[Vec2], thickness: f32, color_at: impl Fn(Vec2) -> Color) {
    for segment in path.windows(2) {
        let (from, to) = (segment[0], segment[1]);
        draw_line(from.x, from.y, to.x, to.y, thickness, color_at((from + to) * 0.5));
    }
    for &vertex in path {
        draw_circle(vertex.x, vertex.y, thickness / 2.0, color_at(vertex));
    }
}


/// The rope, its look, and the canvas it is drawn on, driven once per frame by the host.
pub struct Overlay {
    rope: Rope,
    style: RopeStyle,
    canvas: CanvasSurface,
}
impl Overlay {
    /// Needs a live macroquad context for the render target.
    pub fn new(config: RopeConfig, palette: &Palette) -> Result<Self, RopeError> {
        let rope = Rope::new(config)?;
        let style = RopeStyle::new(palette)?;
        let canvas = CanvasSurface::new(screen_width(), screen_height());
        Ok(Self { rope, style, canvas })
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.rope.set_target_position(x, y);
    }

    pub fn resized(&mut self, width: f32, height: f32) {
        self.rope.resize_surface(width, height);
        self.canvas.resize(width, height);
    }

    pub fn frame(&mut self) {
        self.rope.update();
        self.rope.draw(&self.style, &mut self.canvas);
        self.canvas.present();
    }
}
