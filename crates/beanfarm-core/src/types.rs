//! Fundamental geometric and simulation types.
//!
//! World space is integer pixels with y growing downward, so a heading of
//! 90 degrees points "down" the screen.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Truncated Euclidean distance between two integer points.
pub fn distance(from: IVec2, to: IVec2) -> i32 {
    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    ((dx * dx + dy * dy) as f64).sqrt() as i32
}

/// Bearing from one point to another in whole degrees, in [0, 360).
///
/// The raw angle is truncated toward zero before normalisation, so a
/// bearing of -0.7 degrees becomes 0 rather than 359.
pub fn bearing(from: IVec2, to: IVec2) -> i32 {
    let delta = (to - from).as_dvec2();
    normalize_degrees(delta.y.atan2(delta.x).to_degrees() as i32)
}

/// Wrap any integer angle into [0, 360).
pub fn normalize_degrees(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// Playfield geometry consumed by every distance threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Edge length of one square tile in pixels.
    pub tile_size: i32,
    /// Edge length of the square window in pixels.
    pub window_size: i32,
}

impl Dimensions {
    pub fn new(tile_size: i32, window_size: i32) -> Self {
        Self {
            tile_size,
            window_size,
        }
    }

    /// Number of whole tiles along one edge of the window.
    pub fn tiles_per_row(&self) -> i32 {
        self.window_size / self.tile_size
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_TILE_SIZE,
            crate::constants::DEFAULT_WINDOW_SIZE,
        )
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current frame number (increments by 1 each active frame).
    pub tick: u64,
}

impl SimTime {
    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
