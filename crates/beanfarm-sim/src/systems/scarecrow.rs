//! Scarecrow system: turns nearby attacking birds around.

use tracing::debug;

use beanfarm_core::components::{Kinematics, Lifecycle};
use beanfarm_core::constants::SCARECROW_RADIUS_TILES;
use beanfarm_core::events::SimEvent;

use crate::components::Bird;
use crate::context::FrameContext;
use crate::managers::EnemyManager;

/// Force every live bird inside the scare radius to stop attacking.
/// Re-applied every frame; birds already returning are left alone.
pub fn interact(kinematics: &Kinematics, ctx: &mut FrameContext, enemies: &mut EnemyManager) {
    let radius = ctx.tile_size() * SCARECROW_RADIUS_TILES;

    for (_entity, (bird_kinematics, lifecycle, bird)) in enemies
        .world_mut()
        .query_mut::<(&Kinematics, &Lifecycle, &mut Bird)>()
    {
        if lifecycle.is_removed() || kinematics.distance_to(bird_kinematics.position) >= radius {
            continue;
        }
        if bird.pacify() {
            debug!(archetype = ?bird.archetype, "pacified");
            ctx.events.push(SimEvent::Pacified {
                archetype: bird.archetype,
            });
        }
    }
}
