use cursor_rope::{Overlay, Palette, RopeConfig, ACTIVATION_MIN_WIDTH};
use macroquad::logging::{info, warn};
use macroquad::prelude::*;

const PAGE_BACKGROUND: Color = Color::new(0.98, 0.96, 0.93, 1.0);

fn window_conf() -> Conf {
    Conf {
        window_title: "Cursor Rope".to_owned(),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

fn spawn_overlay() -> Option<Overlay> {
    if screen_width() <= ACTIVATION_MIN_WIDTH {
        info!("viewport is {} wide, rope disabled", screen_width());
        return None;
    }

    let config = RopeConfig::new(Vec2::new(screen_width() / 2.0, 100.0))
        .point_count(12)
        .segment_length(10.0)
        .bounds(screen_width(), screen_height());
    match Overlay::new(config, &Palette::default()) {
        Ok(overlay) => {
            info!("rope enabled with {} points", overlay.rope().len());
            Some(overlay)
        }
        Err(err) => {
            warn!("could not build the rope overlay: {}", err);
            None
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut overlay = spawn_overlay();
    let mut pointer = mouse_position();
    let mut size = (screen_width(), screen_height());

    loop {
        clear_background(PAGE_BACKGROUND);

        if let Some(overlay) = overlay.as_mut() {
            let position = mouse_position();
            if position != pointer {
                pointer = position;
                overlay.pointer_moved(position.0, position.1);
            }

            let current_size = (screen_width(), screen_height());
            if current_size != size {
                size = current_size;
                overlay.resized(size.0, size.1);
            }

            overlay.frame();
        }

        next_frame().await
    }
}
