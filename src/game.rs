//! Game session: active level, world geometry and the blob
//!
//! Owns the only mutable `Blob`; renderers get `BlobView` snapshots.

use glam::Vec2;

use crate::level::{LevelData, LevelSet};
use crate::platform::Key;
use crate::renderer::{OutlineStyle, ValueNoise, blob_outline};
use crate::settings::Settings;
use crate::sim::{Blob, BlobView, TickInput, World, tick};

/// A running session over a level set
#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    levels: LevelSet,
    level_index: usize,
    world: World,
    blob: Blob,
    noise: ValueNoise,
    /// Ticks since the current level was (re)spawned
    pub time_ticks: u64,
}

impl Game {
    /// Start a session on the first level
    pub fn new(levels: LevelSet, settings: Settings) -> Self {
        let mut game = Self {
            world: World::from_parts(Vec::new(), Vec::new(), settings.default_width),
            blob: Blob::from_settings(&settings),
            noise: ValueNoise::new(settings.noise_seed),
            settings,
            levels,
            level_index: 0,
            time_ticks: 0,
        };
        game.load_level(0);
        game
    }

    /// Build the world for `index` and spawn the blob there
    ///
    /// Returns false (and changes nothing) if the index is out of range.
    pub fn load_level(&mut self, index: usize) -> bool {
        let Some(level) = self.levels.get(index) else {
            log::warn!("No level at index {}", index);
            return false;
        };

        self.world = level.build_world(self.settings.default_width);
        self.blob.spawn_from_level(level);
        self.level_index = index;
        self.time_ticks = 0;

        log::info!(
            "Level {} '{}': {} collidables, width {}",
            index + 1,
            level.name,
            self.world.collidables().len(),
            self.world.width()
        );
        true
    }

    /// Advance to the next level, wrapping around
    pub fn next_level(&mut self) {
        let next = self.levels.next_index(self.level_index);
        self.load_level(next);
    }

    /// Respawn in the current level
    pub fn restart(&mut self) {
        self.load_level(self.level_index);
    }

    /// Level-switching keys; movement keys are ignored here
    pub fn handle_command(&mut self, key: Key) {
        match key {
            Key::N => self.next_level(),
            Key::R => self.restart(),
            _ => {}
        }
    }

    /// Run one simulation tick
    pub fn update(&mut self, input: &TickInput) {
        let was_on_ground = self.blob.on_ground;

        tick(&mut self.blob, &self.world, input);
        self.time_ticks += 1;

        if self.blob.on_ground && !was_on_ground {
            log::debug!("Landed at ({:.1}, {:.1})", self.blob.pos.x, self.blob.pos.y);
        } else if input.jump && was_on_ground && !self.blob.on_ground {
            log::debug!("Jumped from x={:.1}", self.blob.pos.x);
        }
    }

    pub fn blob(&self) -> BlobView {
        self.blob.view()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn level(&self) -> Option<&LevelData> {
        self.levels.get(self.level_index)
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Canvas that fits every platform of the current level
    pub fn canvas_size(&self) -> (f32, f32) {
        (
            self.world.width(),
            self.world.infer_height(self.settings.default_height),
        )
    }

    /// Current wobbly outline of the blob
    pub fn blob_outline(&self) -> Vec<Vec2> {
        blob_outline(
            &self.blob.view(),
            &OutlineStyle::from_settings(&self.settings),
            &self.noise,
        )
    }

    /// Fell below everything in the level
    pub fn blob_fell_out(&self) -> bool {
        let view = self.blob.view();
        view.pos.y - view.radius > self.canvas_size().1
    }
}
