//! Events emitted by the simulation for UI feedback and tests.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::field::TileId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A spawner released a bird.
    Spawned {
        archetype: BirdArchetype,
        position: IVec2,
    },
    /// A bird took something from the player.
    Theft {
        archetype: BirdArchetype,
        resource: Resource,
        amount: i32,
    },
    /// A pigeon uprooted a cabbage.
    Uprooted { tile: TileId },
    /// A destroyed thief gave its loot back.
    Refunded { resource: Resource, amount: i32 },
    /// A scarecrow turned an attacking bird around.
    Pacified { archetype: BirdArchetype },
    /// A hive launched a guard bee.
    BeeLaunched { hive: IVec2 },
    /// A guard bee and a bird destroyed each other.
    Collision { archetype: BirdArchetype },
    /// The player placed a defender.
    Placed { kind: DefenderKind, position: IVec2 },
    /// An actor was flagged for removal.
    Removed { kind: ActorKind, cause: RemovalCause },
}
