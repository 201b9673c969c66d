//! Blob World entry point
//!
//! Headless native runner: plays every level with a scripted input pattern
//! and logs what the blob did. A windowed host would drive `Game` the same
//! way from its own event loop.
//!
//! Usage: `blob-world [levels.json] [settings.json] [ticks-per-level]`

use std::path::Path;

use blob_world::level::HAZARD_COLOR;
use blob_world::platform::{InputState, Key};
use blob_world::renderer::{shapes, vertex};
use blob_world::{Game, LevelSet, Settings};

/// Ticks per level when not given on the command line (10 s at 60 Hz)
const DEFAULT_TICKS: u64 = 600;
/// Tap jump this often while running right
const JUMP_EVERY: u64 = 45;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Blob World (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();

    let levels = match args.first() {
        Some(path) => LevelSet::load(Path::new(path))?,
        None => LevelSet::builtin()?,
    };
    let settings = match args.get(1) {
        Some(path) => Settings::load(Path::new(path)),
        None => Settings::default(),
    };
    let ticks = match args.get(2) {
        Some(n) => n.parse::<u64>()?,
        None => DEFAULT_TICKS,
    };

    let level_count = levels.len();
    let mut game = Game::new(levels, settings);
    let mut input = InputState::new();

    for _ in 0..level_count {
        run_level(&mut game, &mut input, ticks);

        input.key_down(Key::N);
        if let Some(key) = input.pending_command() {
            game.handle_command(key);
        }
        input.key_up(Key::N);
        input.take_tick();
    }

    log::info!("Done");
    Ok(())
}

/// Hold right, tap jump on a fixed rhythm, and report the outcome
fn run_level(game: &mut Game, input: &mut InputState, ticks: u64) {
    let name = game.level().map(|l| l.name.clone()).unwrap_or_default();
    let (w, h) = game.canvas_size();
    log::info!("Running '{}' on a {}x{} canvas for {} ticks", name, w, h, ticks);

    input.key_down(Key::Right);
    let mut landings = 0u32;
    let mut grounded_ticks = 0u64;

    for t in 0..ticks {
        if t % JUMP_EVERY == 0 {
            input.key_down(Key::Space);
        } else {
            input.key_up(Key::Space);
        }

        let was_on_ground = game.blob().on_ground;
        game.update(&input.take_tick());

        let blob = game.blob();
        if blob.on_ground {
            grounded_ticks += 1;
            if !was_on_ground {
                landings += 1;
            }
        }
        if game.blob_fell_out() {
            log::warn!("'{}': blob fell out at tick {}", name, t);
            break;
        }
    }
    input.key_up(Key::Right);
    input.key_up(Key::Space);

    let blob = game.blob();
    let frame_bytes = frame_size(game);
    log::info!(
        "'{}': final pos ({:.1}, {:.1}), vel ({:.2}, {:.2}), {} landings, grounded {}/{} ticks, last frame {} bytes",
        name,
        blob.pos.x,
        blob.pos.y,
        blob.vel.x,
        blob.vel.y,
        landings,
        grounded_ticks,
        game.time_ticks,
        frame_bytes
    );
}

/// Vertex bytes a renderer would upload for the current frame
fn frame_size(game: &Game) -> usize {
    let theme = game.level().map(|l| l.theme.clone()).unwrap_or_default();
    let platform = theme.platform_color().unwrap_or([0.8, 0.8, 0.8, 1.0]);
    let blob_color = theme.blob_color().unwrap_or([0.1, 0.5, 1.0, 1.0]);

    let mut frame = shapes::platform_mesh(game.world(), platform);
    frame.extend(shapes::hazard_mesh(game.world(), HAZARD_COLOR));
    frame.extend(shapes::outline_fan(
        game.blob().pos,
        &game.blob_outline(),
        blob_color,
    ));
    vertex::as_bytes(&frame).len()
}
