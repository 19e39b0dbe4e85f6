//! NPC dispatch: routes tick and interact to the system for each role.

use beanfarm_core::components::{Kinematics, Lifecycle};
use beanfarm_core::enums::Facing;

use crate::components::Npc;
use crate::context::FrameContext;
use crate::managers::{EnemyManager, NpcSpawn};
use crate::systems::{bee_hive, guard_bee, scarecrow};

/// One frame of any NPC.
pub fn tick(
    kinematics: &mut Kinematics,
    facing: &mut Facing,
    lifecycle: &mut Lifecycle,
    npc: &mut Npc,
    ctx: &mut FrameContext,
    enemies: &mut EnemyManager,
) {
    match npc {
        Npc::GuardBee(bee) => guard_bee::tick(kinematics, facing, lifecycle, bee, ctx, enemies),
        Npc::BeeHive(hive) => bee_hive::tick(hive),
        Npc::Scarecrow(_) => {}
        Npc::Wanderer => kinematics.advance(),
    }
}

/// Player-proximity effects. Only interactive roles do anything here; the
/// returned spawn, if any, is inserted by the caller.
pub fn interact(
    kinematics: &Kinematics,
    npc: &mut Npc,
    ctx: &mut FrameContext,
    enemies: &mut EnemyManager,
) -> Option<NpcSpawn> {
    match npc {
        Npc::BeeHive(hive) => bee_hive::interact(kinematics, hive, ctx, enemies),
        Npc::Scarecrow(_) => {
            scarecrow::interact(kinematics, ctx, enemies);
            None
        }
        Npc::GuardBee(_) | Npc::Wanderer => None,
    }
}
