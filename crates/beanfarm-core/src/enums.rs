//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The three raiding bird archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BirdArchetype {
    /// Steals a coin from the player.
    Magpie,
    /// Uproots the nearest cabbage.
    Pigeon,
    /// Steals a sack of food from the player.
    Eagle,
}

impl BirdArchetype {
    pub const ALL: [BirdArchetype; 3] = [
        BirdArchetype::Magpie,
        BirdArchetype::Pigeon,
        BirdArchetype::Eagle,
    ];
}

/// Bird behaviour phase. Removal is tracked separately on `Lifecycle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirdPhase {
    /// Pursuing its target.
    #[default]
    Attacking,
    /// Flying back to where it spawned.
    Returning,
}

/// Why an actor was flagged for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalCause {
    /// Lifespan timer ran out.
    Expired,
    /// Arrived back at its spawn point.
    ReachedSpawn,
    /// Mutual destruction between a guard bee and a bird.
    Collided,
}

/// Discrete sprite selector derived from heading/state every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Default,
    Up,
    Down,
    Left,
    Right,
}

/// Player-owned stockpiled resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Coins,
    Food,
}

/// Concrete kind of a live actor, as reported to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Magpie,
    Pigeon,
    Eagle,
    GuardBee,
    BeeHive,
    Scarecrow,
    Wanderer,
}

impl From<BirdArchetype> for ActorKind {
    fn from(archetype: BirdArchetype) -> Self {
        match archetype {
            BirdArchetype::Magpie => ActorKind::Magpie,
            BirdArchetype::Pigeon => ActorKind::Pigeon,
            BirdArchetype::Eagle => ActorKind::Eagle,
        }
    }
}

/// Defenders the player can place at their own position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenderKind {
    BeeHive,
    Scarecrow,
}

/// Top-level engine phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
}
