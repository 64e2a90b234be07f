use colorgrad::CustomGradient;
use cursor_rope::render::{LinearGradient, RadialGradient, Shadow, GLOW_LAYERS};
use cursor_rope::{
    ColorRamp, DrawCommand, Palette, RecordingSurface, Rope, RopeConfig, RopeError, RopeStyle,
};
use macroquad::color::Color;
use macroquad::math::Vec2;

const CORD_START: Color = Color::new(210.0 / 255.0, 105.0 / 255.0, 30.0 / 255.0, 1.0);

fn draw(count: usize) -> Vec<DrawCommand> {
    let rope = Rope::new(
        RopeConfig::new(Vec2::new(200.0, 50.0))
            .point_count(count)
            .segment_length(10.0)
            .bounds(800.0, 600.0),
    )
    .unwrap();
    let style = RopeStyle::new(&Palette::default()).unwrap();
    let mut surface = RecordingSurface::new();
    rope.draw(&style, &mut surface);
    surface.commands().to_vec()
}

fn circles(commands: &[DrawCommand]) -> Vec<(Vec2, f32)> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Circle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
        .collect()
}

fn same_color(a: Color, b: Color) -> bool {
    (a.r - b.r).abs() < 1e-3 && (a.g - b.g).abs() < 1e-3 && (a.b - b.b).abs() < 1e-3 && (a.a - b.a).abs() < 1e-3
}

#[test]
fn draw_layers_cord_beads_then_weight() {
    let commands = draw(12);
    assert_eq!(commands[0], DrawCommand::Clear);

    match &commands[1] {
        DrawCommand::Path { points, width, start_color, glow, .. } => {
            assert_eq!(points.len(), 12);
            assert_eq!(points[0], Vec2::new(200.0, 50.0));
            assert_eq!(points[11], Vec2::new(200.0, 160.0));
            assert_eq!(*width, 2.5);
            assert_eq!(*glow, 8.0);
            assert!(same_color(*start_color, CORD_START), "cord starts with {:?}", start_color);
        }
        other => panic!("expected the cord path, got {:?}", other),
    }

    // Beads on points 0, 4 and 8, then the end weight on point 11
    let circles = circles(&commands[2..]);
    assert_eq!(
        circles,
        vec![
            (Vec2::new(200.0, 50.0), 3.5),
            (Vec2::new(200.0, 90.0), 3.5),
            (Vec2::new(200.0, 130.0), 3.5),
            (Vec2::new(200.0, 160.0), 6.0),
        ]
    );
    assert_eq!(commands.len(), 6);
}

#[test]
fn bead_on_last_point_is_larger() {
    let circles = circles(&draw(9));
    assert_eq!(circles.len(), 4, "beads at 0, 4, 8 plus the end weight");
    assert_eq!(circles[2], (Vec2::new(200.0, 130.0), 5.0));
    assert_eq!(circles[3], (Vec2::new(200.0, 130.0), 6.0));
}

#[test]
fn single_point_rope_still_draws() {
    let commands = draw(1);
    assert_eq!(commands.len(), 4);
    match &commands[1] {
        DrawCommand::Path { points, start_color, end_color, .. } => {
            assert_eq!(points.len(), 1);
            assert_eq!(start_color, end_color);
        }
        other => panic!("expected the cord path, got {:?}", other),
    }
    assert_eq!(circles(&commands), vec![(Vec2::new(200.0, 50.0), 5.0), (Vec2::new(200.0, 50.0), 6.0)]);
}

#[test]
fn redraw_replaces_previous_frame() {
    let mut rope = Rope::new(RopeConfig::new(Vec2::new(100.0, 100.0)).point_count(5).segment_length(10.0)).unwrap();
    let style = RopeStyle::new(&Palette::default()).unwrap();
    let mut surface = RecordingSurface::new();

    rope.draw(&style, &mut surface);
    let first = surface.commands().len();
    rope.update();
    rope.draw(&style, &mut surface);
    assert_eq!(surface.commands().len(), first);
    assert_eq!(surface.commands()[0], DrawCommand::Clear);
}

#[test]
fn bead_and_weight_shading() {
    let commands = draw(5);
    let rims = commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Circle { center_color, rim_color, .. } => Some((*center_color, *rim_color)),
            _ => None,
        })
        .collect::<Vec<_>>();
    let highlight = Color::from_rgba(0xE8, 0x83, 0x3A, 0xFF);
    let rim = Color::from_rgba(0x8B, 0x45, 0x13, 0xFF);
    for (center, edge) in rims {
        assert!(same_color(center, highlight), "center {:?}", center);
        assert!(same_color(edge, rim), "rim {:?}", edge);
    }
}

#[test]
fn linear_gradient_follows_the_line() {
    let ramp = CustomGradient::new()
        .html_colors(&["#000000", "#ffffff"])
        .build()
        .unwrap();
    let gradient = LinearGradient { from: Vec2::new(0.0, 0.0), to: Vec2::new(100.0, 0.0), ramp: &ramp };

    assert!(same_color(gradient.color_at(Vec2::new(0.0, 0.0)), Color::from_rgba(0, 0, 0, 255)));
    assert!(same_color(gradient.color_at(Vec2::new(100.0, 0.0)), Color::from_rgba(255, 255, 255, 255)));
    // Off-axis points project onto the line, anything past the ends clamps
    let mid = gradient.color_at(Vec2::new(50.0, 40.0));
    assert!((mid.r - 0.5).abs() < 0.01, "mid = {:?}", mid);
    assert!(same_color(gradient.color_at(Vec2::new(-30.0, 0.0)), Color::from_rgba(0, 0, 0, 255)));
    assert!(same_color(gradient.color_at(Vec2::new(300.0, 0.0)), Color::from_rgba(255, 255, 255, 255)));

    let collapsed = LinearGradient { from: Vec2::new(5.0, 5.0), to: Vec2::new(5.0, 5.0), ramp: &ramp };
    assert!(same_color(collapsed.color_at(Vec2::new(90.0, 90.0)), Color::from_rgba(0, 0, 0, 255)));
}

#[test]
fn radial_rings_run_from_rim_to_center() {
    let ramp = CustomGradient::new()
        .html_colors(&["#ffffff", "#000000"])
        .build()
        .unwrap();
    let gradient = RadialGradient { center: Vec2::ZERO, radius: 6.0, ramp: &ramp };

    let rings = gradient.rings(3).collect::<Vec<_>>();
    assert_eq!(rings.len(), 3);
    assert!((rings[0].0 - 6.0).abs() < 1e-6);
    assert!((rings[2].0 - 2.0).abs() < 1e-6);
    assert!(rings.windows(2).all(|w| w[0].0 > w[1].0), "rings must shrink: {:?}", rings);
    assert!(same_color(rings[0].1, Color::from_rgba(0, 0, 0, 255)));
}

#[test]
fn shadow_layers_split_alpha() {
    let shadow = Shadow { color: Color::new(1.0, 0.5, 0.0, 0.4), blur: 8.0 };
    let layers = shadow.layers().collect::<Vec<_>>();
    assert_eq!(layers.len(), GLOW_LAYERS);
    assert_eq!(layers[0].0, 8.0);
    let total = layers.iter().map(|(_, c)| c.a).sum::<f32>();
    assert!((total - 0.4).abs() < 1e-5, "alpha sums to {}", total);

    let flat = Shadow { color: shadow.color, blur: 0.0 };
    assert_eq!(flat.layers().count(), 0);
}

#[test]
fn bad_palette_is_rejected() {
    let palette = Palette {
        cord: ColorRamp::new(&["not-a-colour", "#000000"], &[0.0, 1.0]),
        ..Palette::default()
    };
    assert!(matches!(RopeStyle::new(&palette), Err(RopeError::ColorRamp(_))));
}
