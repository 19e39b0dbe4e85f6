//! Frame snapshot: the complete renderable state handed out after each frame.
//!
//! Snapshots are copies. Nothing in them aliases the managers' collections.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::SimTime;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: IVec2,
    pub coins: i32,
    pub food: i32,
    pub cabbages: usize,
    /// Birds, in the enemy manager's iteration order.
    pub enemies: Vec<ActorView>,
    /// Defenders and other NPCs, in the NPC manager's iteration order.
    pub npcs: Vec<ActorView>,
    pub events: Vec<SimEvent>,
}

impl FrameSnapshot {
    /// Number of live actors of one kind across both managers.
    pub fn count(&self, kind: ActorKind) -> usize {
        self.enemies
            .iter()
            .chain(self.npcs.iter())
            .filter(|view| view.kind == kind)
            .count()
    }
}

/// One renderable actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    pub kind: ActorKind,
    pub position: IVec2,
    pub heading: i32,
    pub facing: Facing,
    /// Bird phase; `None` for non-birds.
    pub phase: Option<BirdPhase>,
    /// Coins or food held by a thief.
    pub carried: i32,
    /// Flagged and awaiting the next sweep.
    pub removed: bool,
}
