//! Bird system: advances every live bird by one frame.
//!
//! Calls the bird FSM from beanfarm-flock, then applies thefts, phase
//! changes, steering and removal to the bird's components.

use glam::IVec2;
use hecs::{Entity, World};
use tracing::debug;

use beanfarm_core::components::{Kinematics, Lifecycle};
use beanfarm_core::enums::{ActorKind, BirdPhase, Facing, RemovalCause};
use beanfarm_core::events::SimEvent;
use beanfarm_core::field::nearest_resource;
use beanfarm_core::timer::TickTimer;
use beanfarm_flock::fsm::{evaluate, BirdAction, BirdContext};
use beanfarm_flock::profiles::{get_profile, Quarry};

use crate::components::{Bird, BirdTarget};
use crate::context::FrameContext;

/// Tick every bird that is not already flagged for removal.
pub fn run(world: &mut World, ctx: &mut FrameContext) {
    for (_entity, (kinematics, facing, lifecycle, bird)) in
        world.query_mut::<(&mut Kinematics, &mut Facing, &mut Lifecycle, &mut Bird)>()
    {
        if lifecycle.is_removed() {
            continue;
        }
        tick(kinematics, facing, lifecycle, bird, ctx);
    }
}

/// One frame of a single bird: aim, move, age, decide, apply.
pub fn tick(
    kinematics: &mut Kinematics,
    facing: &mut Facing,
    lifecycle: &mut Lifecycle,
    bird: &mut Bird,
    ctx: &mut FrameContext,
) {
    let target = resolve_target(bird, kinematics.position, ctx);
    match (bird.phase, target) {
        (BirdPhase::Attacking, Some(point)) => kinematics.face(point),
        (BirdPhase::Returning, _) => kinematics.face(bird.spawn),
        (BirdPhase::Attacking, None) => {}
    }
    kinematics.advance();
    bird.lifespan.tick();

    let profile = get_profile(bird.archetype);
    let available = match profile.quarry {
        Quarry::Player { resource, .. } => ctx.inventory.amount(resource),
        Quarry::NearestCrop => 0,
    };

    let update = evaluate(&BirdContext {
        archetype: bird.archetype,
        phase: bird.phase,
        position: kinematics.position,
        spawn: bird.spawn,
        target,
        carried: bird.carried,
        available,
        lifespan_finished: bird.lifespan.is_finished(),
        tile_size: ctx.tile_size(),
    });

    if let Some(action) = update.action {
        apply_action(action, bird, ctx);
    }
    if update.phase_changed {
        bird.phase = update.new_phase;
        debug!(archetype = ?bird.archetype, carried = bird.carried, "bird_returning");
    }
    if let Some(speed) = update.new_speed {
        kinematics.speed = speed;
    }
    if let Some(point) = update.steer_toward {
        kinematics.face(point);
    }

    match update.removal {
        Some(cause) => retire(lifecycle, bird, cause, ctx),
        None => *facing = update.facing,
    }
}

/// Work out where the bird's quarry is this frame.
///
/// Pigeons re-query the field every frame while attacking, so a cabbage
/// eaten by someone else simply moves them on to the next one.
fn resolve_target(bird: &mut Bird, position: IVec2, ctx: &FrameContext) -> Option<IVec2> {
    if bird.phase == BirdPhase::Returning {
        return None;
    }
    match get_profile(bird.archetype).quarry {
        Quarry::Player { .. } => {
            bird.target = BirdTarget::Player;
            Some(ctx.player)
        }
        Quarry::NearestCrop => match nearest_resource(&*ctx.field, position) {
            Some((id, tile_position)) => {
                bird.target = BirdTarget::Tile(id);
                Some(tile_position)
            }
            None => {
                bird.target = BirdTarget::None;
                None
            }
        },
    }
}

fn apply_action(action: BirdAction, bird: &mut Bird, ctx: &mut FrameContext) {
    match action {
        BirdAction::Steal { resource, amount } => {
            ctx.inventory.add(resource, -amount);
            bird.carried += amount;
            debug!(archetype = ?bird.archetype, ?resource, amount, "theft");
            ctx.events.push(SimEvent::Theft {
                archetype: bird.archetype,
                resource,
                amount,
            });
        }
        BirdAction::Uproot => {
            if let BirdTarget::Tile(tile) = bird.target {
                if ctx.field.uproot(tile) {
                    debug!(archetype = ?bird.archetype, tile = tile.0, "uprooted");
                    ctx.events.push(SimEvent::Uprooted { tile });
                }
            }
        }
    }
}

/// Flag a bird for removal and settle its loot.
///
/// A bird that made it home has delivered; anything it carried is gone.
/// A bird destroyed any other way drops its loot back into the inventory.
pub fn retire(
    lifecycle: &mut Lifecycle,
    bird: &mut Bird,
    cause: RemovalCause,
    ctx: &mut FrameContext,
) {
    if !lifecycle.mark(cause) {
        return;
    }

    if cause != RemovalCause::ReachedSpawn && bird.carried > 0 {
        if let Some(resource) = bird.loot_resource() {
            ctx.inventory.add(resource, bird.carried);
            debug!(archetype = ?bird.archetype, ?resource, amount = bird.carried, "loot_refunded");
            ctx.events.push(SimEvent::Refunded {
                resource,
                amount: bird.carried,
            });
            bird.carried = 0;
        }
    }

    debug!(archetype = ?bird.archetype, ?cause, "bird_removed");
    ctx.events.push(SimEvent::Removed {
        kind: ActorKind::from(bird.archetype),
        cause,
    });
}

/// Retire a bird by handle. Returns false if the handle is stale.
pub fn retire_entity(
    world: &mut World,
    entity: Entity,
    cause: RemovalCause,
    ctx: &mut FrameContext,
) -> bool {
    match world.query_one_mut::<(&mut Lifecycle, &mut Bird)>(entity) {
        Ok((lifecycle, bird)) => {
            retire(lifecycle, bird, cause, ctx);
            true
        }
        Err(_) => false,
    }
}
