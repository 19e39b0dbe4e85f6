//! Bee hive system: reload cycle and single-charge launch.

use tracing::debug;

use beanfarm_core::components::Kinematics;
use beanfarm_core::constants::{GUARD_BEE_LIFESPAN, GUARD_BEE_SPEED, HIVE_DETECTION_RADIUS};
use beanfarm_core::events::SimEvent;
use beanfarm_core::timer::{FixedTimer, TickTimer};

use crate::components::{BeeHive, GuardBee, Npc};
use crate::context::FrameContext;
use crate::managers::{EnemyManager, NpcSpawn};

/// Advance the reload cycle. A completed cycle re-arms the hive.
pub fn tick(hive: &mut BeeHive) {
    hive.reload.tick();
    if hive.reload.is_finished() {
        hive.loaded = true;
    }
}

/// Launch at most one bee at the first enemy found inside the detection
/// radius. The caller inserts the returned bee after its iteration.
pub fn interact(
    kinematics: &Kinematics,
    hive: &mut BeeHive,
    ctx: &mut FrameContext,
    enemies: &EnemyManager,
) -> Option<NpcSpawn> {
    if !hive.loaded {
        return None;
    }
    let (target, target_position) =
        enemies.first_live_within(kinematics.position, HIVE_DETECTION_RADIUS)?;

    hive.loaded = false;
    debug!(x = kinematics.position.x, y = kinematics.position.y, "bee_launched");
    ctx.events.push(SimEvent::BeeLaunched {
        hive: kinematics.position,
    });

    let mut bee_kinematics = Kinematics::new(kinematics.position, GUARD_BEE_SPEED);
    bee_kinematics.face(target_position);
    Some(NpcSpawn {
        kinematics: bee_kinematics,
        npc: Npc::GuardBee(GuardBee {
            spawn: kinematics.position,
            target: Some(target),
            lifespan: FixedTimer::new(GUARD_BEE_LIFESPAN),
        }),
    })
}
