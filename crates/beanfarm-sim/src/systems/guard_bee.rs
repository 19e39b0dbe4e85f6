//! Guard bee system: homing, retargeting and mutual destruction.

use tracing::debug;

use beanfarm_core::components::{Kinematics, Lifecycle};
use beanfarm_core::constants::GUARD_BEE_LOCK_ON_RADIUS;
use beanfarm_core::enums::{ActorKind, Facing, RemovalCause};
use beanfarm_core::events::SimEvent;
use beanfarm_core::timer::TickTimer;

use crate::components::GuardBee;
use crate::context::FrameContext;
use crate::managers::EnemyManager;
use crate::systems::birds;

/// One frame of a guard bee.
pub fn tick(
    kinematics: &mut Kinematics,
    facing: &mut Facing,
    lifecycle: &mut Lifecycle,
    bee: &mut GuardBee,
    ctx: &mut FrameContext,
    enemies: &mut EnemyManager,
) {
    kinematics.advance();

    // A target that has been destroyed or swept counts as no target.
    if bee.target.is_some_and(|target| !enemies.is_live(target)) {
        bee.target = None;
    }

    match bee.target {
        None => {
            kinematics.face(bee.spawn);
            if kinematics.distance_to(bee.spawn) < ctx.tile_size() {
                remove(lifecycle, RemovalCause::ReachedSpawn, ctx);
                return;
            }
        }
        Some(target) => {
            let lock = enemies.nearest_live_within(kinematics.position, GUARD_BEE_LOCK_ON_RADIUS);
            if let Some((nearest, position)) = lock {
                bee.target = Some(nearest);
                kinematics.face(position);
            } else if let Some(position) = enemies.position_of(target) {
                kinematics.face(position);
            }
        }
    }

    if let Some((victim, _)) = enemies.first_live_within(kinematics.position, ctx.tile_size()) {
        if let Some(archetype) = enemies.archetype_of(victim) {
            birds::retire_entity(enemies.world_mut(), victim, RemovalCause::Collided, ctx);
            debug!(?archetype, "bee_sting");
            ctx.events.push(SimEvent::Collision { archetype });
            remove(lifecycle, RemovalCause::Collided, ctx);
            return;
        }
    }

    // Contact on the final frame still counts as a collision.
    bee.lifespan.tick();
    if bee.lifespan.is_finished() {
        remove(lifecycle, RemovalCause::Expired, ctx);
        return;
    }

    *facing = heading_facing(kinematics.heading);
}

/// Sprite bucket for a heading in degrees. Carries no simulation weight.
pub fn heading_facing(heading: i32) -> Facing {
    match heading.rem_euclid(360) {
        40..=139 => Facing::Down,
        230..=309 => Facing::Up,
        310..=359 | 0..=39 => Facing::Right,
        _ => Facing::Left,
    }
}

fn remove(lifecycle: &mut Lifecycle, cause: RemovalCause, ctx: &mut FrameContext) {
    if lifecycle.mark(cause) {
        debug!(?cause, "bee_removed");
        ctx.events.push(SimEvent::Removed {
            kind: ActorKind::GuardBee,
            cause,
        });
    }
}
