//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and applied at the next frame boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement ---
    /// Move the farmer by a relative offset.
    MovePlayer { dx: i32, dy: i32 },
    /// Teleport the farmer.
    SetPlayerPosition { x: i32, y: i32 },

    // --- Keys ---
    /// Start holding a key. Placement keys act every frame while held.
    PressKey { key: char },
    /// Stop holding a key.
    ReleaseKey { key: char },

    // --- Simulation control ---
    Pause,
    Resume,
}
