//! Scenario configuration: where the farmer starts, what they own, where
//! cabbages grow and where birds come from.
//!
//! Scenarios are JSON. Every field has a default so a file only needs to
//! list what it changes.

use std::fs;
use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::BirdArchetype;
use crate::types::Dimensions;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(i32),
    #[error("window size {window} must hold at least one {tile}px tile")]
    InvalidWindowSize { window: i32, tile: i32 },
    #[error("{archetype:?} spawner at ({x}, {y}) has a zero duration")]
    ZeroSpawnerDuration {
        archetype: BirdArchetype,
        x: i32,
        y: i32,
    },
    #[error("cabbage at ({x}, {y}) lies outside the field")]
    CabbageOutOfBounds { x: i32, y: i32 },
    #[error("placement key {0:?} is bound to both defenders")]
    DuplicatePlacementKey(char),
}

/// Starting state of the farmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStart {
    pub x: i32,
    pub y: i32,
    pub coins: i32,
    pub food: i32,
}

impl Default for PlayerStart {
    fn default() -> Self {
        Self {
            x: DEFAULT_WINDOW_SIZE / 2,
            y: DEFAULT_WINDOW_SIZE / 2,
            coins: DEFAULT_STARTING_COINS,
            food: DEFAULT_STARTING_FOOD,
        }
    }
}

impl PlayerStart {
    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }
}

/// One enemy spawner: a fixed point and an interval in frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnerConfig {
    pub x: i32,
    pub y: i32,
    /// Frames between spawns. Falls back to the archetype default.
    #[serde(default)]
    pub duration: Option<u32>,
}

impl SpawnerConfig {
    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn interval(&self, archetype: BirdArchetype) -> u32 {
        self.duration.unwrap_or(default_spawn_interval(archetype))
    }
}

/// Keys that place defenders while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub hive: char,
    pub scarecrow: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            hive: HIVE_KEY,
            scarecrow: SCARECROW_KEY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub dimensions: Dimensions,
    pub player: PlayerStart,
    pub cabbages: Vec<[i32; 2]>,
    pub magpie_spawners: Vec<SpawnerConfig>,
    pub pigeon_spawners: Vec<SpawnerConfig>,
    pub eagle_spawners: Vec<SpawnerConfig>,
    pub keys: KeyBindings,
}

impl ScenarioConfig {
    /// Parse and validate a scenario from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        let config: ScenarioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a scenario file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Spawners of one archetype.
    pub fn spawners(&self, archetype: BirdArchetype) -> &[SpawnerConfig] {
        match archetype {
            BirdArchetype::Magpie => &self.magpie_spawners,
            BirdArchetype::Pigeon => &self.pigeon_spawners,
            BirdArchetype::Eagle => &self.eagle_spawners,
        }
    }

    /// Reject anything that would otherwise fail later at construction.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let Dimensions {
            tile_size,
            window_size,
        } = self.dimensions;
        if tile_size <= 0 {
            return Err(ScenarioError::InvalidTileSize(tile_size));
        }
        if window_size < tile_size {
            return Err(ScenarioError::InvalidWindowSize {
                window: window_size,
                tile: tile_size,
            });
        }

        for archetype in BirdArchetype::ALL {
            for spawner in self.spawners(archetype) {
                if spawner.interval(archetype) == 0 {
                    return Err(ScenarioError::ZeroSpawnerDuration {
                        archetype,
                        x: spawner.x,
                        y: spawner.y,
                    });
                }
            }
        }

        for &[x, y] in &self.cabbages {
            if !(0..window_size).contains(&x) || !(0..window_size).contains(&y) {
                return Err(ScenarioError::CabbageOutOfBounds { x, y });
            }
        }

        if self.keys.hive.eq_ignore_ascii_case(&self.keys.scarecrow) {
            return Err(ScenarioError::DuplicatePlacementKey(self.keys.hive));
        }

        Ok(())
    }
}

/// Default spawn interval per archetype.
pub fn default_spawn_interval(archetype: BirdArchetype) -> u32 {
    match archetype {
        BirdArchetype::Magpie => MAGPIE_SPAWN_INTERVAL,
        BirdArchetype::Pigeon => PIGEON_SPAWN_INTERVAL,
        BirdArchetype::Eagle => EAGLE_SPAWN_INTERVAL,
    }
}
