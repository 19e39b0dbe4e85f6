//! Snapshot system: copies both managers' worlds into a `FrameSnapshot`.
//!
//! This system is read-only and never modifies a world.

use glam::IVec2;
use hecs::World;

use beanfarm_core::components::{Kinematics, Lifecycle};
use beanfarm_core::enums::{ActorKind, Facing, GamePhase};
use beanfarm_core::events::SimEvent;
use beanfarm_core::inventory::Inventory;
use beanfarm_core::state::{ActorView, FrameSnapshot};
use beanfarm_core::types::SimTime;

use crate::components::{Bird, Npc};

/// Build the complete snapshot for one frame.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    time: SimTime,
    phase: GamePhase,
    player: IVec2,
    inventory: &dyn Inventory,
    cabbages: usize,
    enemies: Vec<ActorView>,
    npcs: Vec<ActorView>,
    events: Vec<SimEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time,
        phase,
        player,
        coins: inventory.coins(),
        food: inventory.food(),
        cabbages,
        enemies,
        npcs,
        events,
    }
}

/// One view per bird in the world.
pub fn bird_views(world: &World) -> Vec<ActorView> {
    world
        .query::<(&Kinematics, &Facing, &Lifecycle, &Bird)>()
        .iter()
        .map(|(_, (kinematics, facing, lifecycle, bird))| ActorView {
            kind: ActorKind::from(bird.archetype),
            position: kinematics.position,
            heading: kinematics.heading,
            facing: *facing,
            phase: Some(bird.phase),
            carried: bird.carried,
            removed: lifecycle.is_removed(),
        })
        .collect()
}

/// One view per NPC in the world.
pub fn npc_views(world: &World) -> Vec<ActorView> {
    world
        .query::<(&Kinematics, &Facing, &Lifecycle, &Npc)>()
        .iter()
        .map(|(_, (kinematics, facing, lifecycle, npc))| ActorView {
            kind: npc.kind(),
            position: kinematics.position,
            heading: kinematics.heading,
            facing: *facing,
            phase: None,
            carried: 0,
            removed: lifecycle.is_removed(),
        })
        .collect()
}
