//! Simulation constants and tuning parameters.
//!
//! All durations are in frames, all distances in pixels.

// --- Playfield ---

/// Default edge length of one tile.
pub const DEFAULT_TILE_SIZE: i32 = 80;

/// Default edge length of the square window.
pub const DEFAULT_WINDOW_SIZE: i32 = 800;

// --- Magpie ---

pub const MAGPIE_LIFESPAN: u32 = 10_000;
pub const MAGPIE_SPEED: f64 = 1.0;
/// Speed after pocketing a coin.
pub const MAGPIE_GETAWAY_SPEED: f64 = 2.0;
/// Coins taken per successful theft.
pub const MAGPIE_LOOT: i32 = 1;
pub const MAGPIE_SPAWN_INTERVAL: u32 = 360;

// --- Pigeon ---

pub const PIGEON_LIFESPAN: u32 = 3_000;
pub const PIGEON_SPEED: f64 = 1.0;
pub const PIGEON_SPAWN_INTERVAL: u32 = 100;

// --- Eagle ---

pub const EAGLE_LIFESPAN: u32 = 5_000;
pub const EAGLE_SPEED: f64 = 2.0;
/// The eagle books it once it has the food.
pub const EAGLE_GETAWAY_SPEED: f64 = 4.0;
/// Food taken per successful theft.
pub const EAGLE_LOOT: i32 = 3;
pub const EAGLE_SPAWN_INTERVAL: u32 = 1_000;

// --- Guard bee ---

pub const GUARD_BEE_SPEED: f64 = 2.0;
pub const GUARD_BEE_LIFESPAN: u32 = 300;
/// Radius inside which a bee retargets the nearest bird.
pub const GUARD_BEE_LOCK_ON_RADIUS: i32 = 300;

// --- Bee hive ---

pub const HIVE_DETECTION_RADIUS: i32 = 350;
pub const HIVE_RELOAD_TICKS: u32 = 240;
pub const HIVE_FOOD_COST: i32 = 3;
pub const HIVE_COIN_COST: i32 = 3;
pub const HIVE_KEY: char = 'h';

// --- Scarecrow ---

pub const SCARECROW_COIN_COST: i32 = 2;
/// Scare radius expressed in tile widths.
pub const SCARECROW_RADIUS_TILES: i32 = 4;
pub const SCARECROW_KEY: char = 'c';

// --- Player ---

pub const DEFAULT_STARTING_COINS: i32 = 4;
pub const DEFAULT_STARTING_FOOD: i32 = 4;
