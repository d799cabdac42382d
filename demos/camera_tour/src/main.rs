//! Headless tour of the camera, animation and input layers.
//!
//! A scripted player walks right across a 4000x1200 world while the camera
//! follows it. Pressing "shake" rattles the camera, the wheel zooms, a middle
//! click warps the player to the cursor, and a walk cycle animation plays the
//! whole time.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use drift2d::{
    Animation, BasicObject, Bounds, Camera, InputController, KeyCode, MouseButton, Positioned,
    RawInput, Settings, SpriteSheet, Vec2,
};

#[derive(Parser)]
#[command(version, about = "Run a scripted camera tour without a window")]
struct Cli {
    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Seed for the camera shake.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// JSON settings file with camera tuning and bindings.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Clamp the camera to the world bounds and glide instead of snapping.
    #[arg(long)]
    bounded: bool,
}

const WORLD: Vec2 = Vec2::new(4000.0, 1200.0);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let mut input = InputController::new();
    input.register_button("right", [KeyCode::ArrowRight, KeyCode::KeyD]);
    input.register_button("shake", [KeyCode::Space]);
    input.register_mouse_button("warp", [MouseButton::Middle]);
    input.apply_config(&settings.input);

    let mut camera = Camera::new(800.0, 600.0)
        .with_config(settings.camera.clone())
        .with_seed(cli.seed);

    // 128x32 strip of 32x32 frames.
    let sheet = SpriteSheet::from_grid(128, 32, 32, 32, 0, 0)?;
    let mut walk = Animation::new(&sheet, vec![0, 1, 2, 3], 5);

    let mut player = BasicObject::new(Vec2::new(100.0, 600.0), Vec2::new(32.0, 32.0));
    player.velocity = Vec2::new(3.0, 0.0);

    let mut raw = RawInput::new();
    log::info!("Starting tour for {} ticks (bounded: {})", cli.ticks, cli.bounded);

    for tick in 0..cli.ticks {
        script(&mut raw, tick);
        input.update(&raw);

        if input.down("right") || input.just_pressed("right") {
            player.step();
        }
        if input.just_pressed("shake") {
            camera.start_shaking(40.0);
        }
        // The follow below recenters on the warped player.
        if input.just_pressed("warp") {
            let target = input.world_mouse(&camera);
            log::info!("Warping player to {target}");
            player.position = target;
        }
        match input.mouse().scroll() {
            1 => camera.zoom_in(),
            -1 => camera.zoom_out(),
            _ => {}
        }

        if cli.bounded {
            camera.follow_bounded(&player, Bounds::from_size(WORLD.x, WORLD.y));
        } else {
            camera.follow(&player, WORLD);
        }
        camera.update();

        walk.update();
        if let Some(rect) = walk.take_changed_rect() {
            log::trace!("Walk frame {} at {:?}", walk.current_sheet_frame(), rect);
        }

        if tick % 60 == 0 {
            let b = player.bounds();
            let visible = camera.on_screen(b.x, b.y, b.w, b.h);
            log::info!(
                "tick {tick}: player {} camera {} zoom {:.2} shaking {} visible {visible}",
                player.position(),
                camera.position(),
                camera.zoom(),
                camera.is_shaking(),
            );
        }
    }

    log::info!(
        "Tour finished with player at {} and camera at {}",
        player.position(),
        camera.position()
    );
    Ok(())
}

/// Fake device activity for a given tick.
fn script(raw: &mut RawInput, tick: u32) {
    match tick {
        10 => raw.press_key(KeyCode::ArrowRight),
        120 | 360 => raw.press_key(KeyCode::Space),
        121 | 361 => raw.release_key(KeyCode::Space),
        200..=260 => raw.scroll(1.0),
        300 => raw.set_cursor(400.0, 300.0),
        301 => raw.press_mouse(MouseButton::Middle),
        302 => raw.release_mouse(MouseButton::Middle),
        450..=470 => raw.scroll(-1.0),
        _ => {}
    }
}
