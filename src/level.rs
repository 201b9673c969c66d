//! Level data: JSON level sets, spawn points and themes
//!
//! Expected shape:
//! ```json
//! { "levels": [ {
//!     "name": "Intro Steps", "gravity": 0.65, "jumpV": -11.0,
//!     "theme": { "bg": "#F0F0F0", "platform": "#C8C8C8", "blob": "#1478FF" },
//!     "start": { "x": 80, "y": 220, "r": 26 },
//!     "platforms": [ { "x": 0, "y": 324, "w": 640, "h": 36 } ]
//! } ] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Rect, World};

/// Level set bundled with the crate
pub const BUILTIN_LEVELS: &str = include_str!("../assets/levels.json");

/// Fill color for triangle hazards
pub const HAZARD_COLOR: [f32; 4] = [200.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 1.0];

/// Error type for level loading failures
#[derive(Debug)]
pub enum LevelLoadError {
    /// File could not be read
    Io { path: String, message: String },
    /// JSON was malformed or had the wrong shape
    Parse { origin: String, message: String },
    /// The set contained no levels
    Empty,
}

impl std::fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelLoadError::Io { path, message } => {
                write!(f, "Failed to read {}: {}", path, message)
            }
            LevelLoadError::Parse { origin, message } => {
                write!(f, "Failed to parse {}: {}", origin, message)
            }
            LevelLoadError::Empty => write!(f, "Level set contains no levels"),
        }
    }
}

impl std::error::Error for LevelLoadError {}

/// Where the blob appears
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
    pub r: f32,
}

impl Default for SpawnPoint {
    fn default() -> Self {
        Self {
            x: 80.0,
            y: 220.0,
            r: BLOB_RADIUS,
        }
    }
}

/// Hex color strings for the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub bg: String,
    pub platform: String,
    pub blob: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: "#F0F0F0".to_string(),
            platform: "#C8C8C8".to_string(),
            blob: "#1478FF".to_string(),
        }
    }
}

impl Theme {
    /// Parse `#RRGGBB` (or `RRGGBB`) into RGBA in 0..1
    pub fn parse_hex(hex: &str) -> Option<[f32; 4]> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        Some([channel(0)?, channel(2)?, channel(4)?, 1.0])
    }

    pub fn bg_color(&self) -> Option<[f32; 4]> {
        Self::parse_hex(&self.bg)
    }

    pub fn platform_color(&self) -> Option<[f32; 4]> {
        Self::parse_hex(&self.platform)
    }

    pub fn blob_color(&self) -> Option<[f32; 4]> {
        Self::parse_hex(&self.blob)
    }
}

/// One level as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    #[serde(default)]
    pub name: String,
    pub gravity: f32,
    #[serde(rename = "jumpV")]
    pub jump_v: f32,
    #[serde(default)]
    pub theme: Theme,
    pub start: SpawnPoint,
    pub platforms: Vec<Rect>,
}

impl Default for LevelData {
    fn default() -> Self {
        Self {
            name: String::new(),
            gravity: GRAVITY,
            jump_v: JUMP_V,
            theme: Theme::default(),
            start: SpawnPoint::default(),
            platforms: Vec::new(),
        }
    }
}

impl LevelData {
    /// Obstacle geometry for this level, including procedural additions
    pub fn build_world(&self, min_width: f32) -> World {
        World::build(&self.platforms, min_width)
    }
}

/// An ordered list of levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    pub levels: Vec<LevelData>,
}

impl LevelSet {
    /// Parse a level set from JSON text
    pub fn from_json(json: &str) -> Result<Self, LevelLoadError> {
        Self::parse(json, "<inline>")
    }

    /// Read and parse a level set file
    pub fn load(path: &Path) -> Result<Self, LevelLoadError> {
        let name = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| LevelLoadError::Io {
            path: name.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&contents, &name)
    }

    /// The levels shipped with the crate
    pub fn builtin() -> Result<Self, LevelLoadError> {
        Self::parse(BUILTIN_LEVELS, "builtin levels")
    }

    fn parse(json: &str, origin: &str) -> Result<Self, LevelLoadError> {
        let set: LevelSet = serde_json::from_str(json).map_err(|e| LevelLoadError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        if set.levels.is_empty() {
            return Err(LevelLoadError::Empty);
        }
        log::info!("Loaded {} levels from {}", set.levels.len(), origin);
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LevelData> {
        self.levels.get(index)
    }

    /// Index after `index`, wrapping to the first level
    pub fn next_index(&self, index: usize) -> usize {
        if self.levels.is_empty() {
            0
        } else {
            (index + 1) % self.levels.len()
        }
    }
}
