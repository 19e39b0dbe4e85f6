//! Bird behaviour finite state machine.
//!
//! Pure functions that compute phase transitions, thefts, removals and
//! steering for one bird from a snapshot of its situation.
//! No ECS dependency; operates on plain data.

use glam::IVec2;

use beanfarm_core::enums::{BirdArchetype, BirdPhase, Facing, RemovalCause, Resource};
use beanfarm_core::types::distance;

use crate::profiles::{get_profile, BirdProfile, Quarry};

/// Input to the bird FSM for a single entity.
#[derive(Debug, Clone, Copy)]
pub struct BirdContext {
    pub archetype: BirdArchetype,
    pub phase: BirdPhase,
    /// Position after this frame's movement.
    pub position: IVec2,
    pub spawn: IVec2,
    /// Where the quarry is this frame. `None` means there is nothing to chase.
    pub target: Option<IVec2>,
    /// Loot already held.
    pub carried: i32,
    /// Inventory balance of the resource this archetype steals.
    pub available: i32,
    pub lifespan_finished: bool,
    pub tile_size: i32,
}

/// Side effect the caller must apply to the outside world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdAction {
    /// Debit the inventory and add to the bird's carried count.
    Steal { resource: Resource, amount: i32 },
    /// Remove the cabbage from the targeted tile.
    Uproot,
}

/// Output from the bird FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdUpdate {
    pub new_phase: BirdPhase,
    pub phase_changed: bool,
    pub action: Option<BirdAction>,
    pub removal: Option<RemovalCause>,
    /// Replacement speed, if the bird should change pace.
    pub new_speed: Option<f64>,
    /// Point to steer at for the next frame.
    pub steer_toward: Option<IVec2>,
    pub facing: Facing,
}

impl BirdUpdate {
    fn hold(ctx: &BirdContext, steer_toward: Option<IVec2>, facing: Facing) -> Self {
        Self {
            new_phase: ctx.phase,
            phase_changed: false,
            action: None,
            removal: None,
            new_speed: None,
            steer_toward,
            facing,
        }
    }
}

/// Evaluate the FSM for one bird. At most one phase transition per call.
pub fn evaluate(ctx: &BirdContext) -> BirdUpdate {
    let profile = get_profile(ctx.archetype);

    if ctx.lifespan_finished {
        return BirdUpdate {
            removal: Some(RemovalCause::Expired),
            ..BirdUpdate::hold(ctx, None, Facing::Default)
        };
    }

    match ctx.phase {
        BirdPhase::Attacking => evaluate_attacking(ctx, &profile),
        BirdPhase::Returning => evaluate_returning(ctx),
    }
}

fn evaluate_attacking(ctx: &BirdContext, profile: &BirdProfile) -> BirdUpdate {
    let Some(target) = ctx.target else {
        // Nothing left to raid; head home without attacking.
        return turn_for_home(ctx, None, None);
    };

    if distance(ctx.position, target) >= ctx.tile_size {
        return BirdUpdate::hold(ctx, Some(target), attack_facing(ctx.position, target));
    }

    match profile.quarry {
        Quarry::Player {
            resource,
            amount,
            flees_empty_handed,
        } => {
            if ctx.carried == 0 && ctx.available >= amount {
                turn_for_home(
                    ctx,
                    Some(BirdAction::Steal { resource, amount }),
                    Some(profile.getaway_speed),
                )
            } else if flees_empty_handed {
                turn_for_home(ctx, None, Some(profile.getaway_speed))
            } else {
                BirdUpdate::hold(ctx, Some(target), attack_facing(ctx.position, target))
            }
        }
        Quarry::NearestCrop => turn_for_home(ctx, Some(BirdAction::Uproot), None),
    }
}

fn evaluate_returning(ctx: &BirdContext) -> BirdUpdate {
    if distance(ctx.position, ctx.spawn) < ctx.tile_size {
        return BirdUpdate {
            removal: Some(RemovalCause::ReachedSpawn),
            ..BirdUpdate::hold(ctx, None, return_facing(ctx.position, ctx.spawn))
        };
    }
    BirdUpdate::hold(
        ctx,
        Some(ctx.spawn),
        return_facing(ctx.position, ctx.spawn),
    )
}

fn turn_for_home(
    ctx: &BirdContext,
    action: Option<BirdAction>,
    new_speed: Option<f64>,
) -> BirdUpdate {
    BirdUpdate {
        new_phase: BirdPhase::Returning,
        phase_changed: true,
        action,
        removal: None,
        new_speed,
        steer_toward: Some(ctx.spawn),
        facing: return_facing(ctx.position, ctx.spawn),
    }
}

/// Sprite while chasing: down if the quarry is below, else up.
pub fn attack_facing(position: IVec2, target: IVec2) -> Facing {
    if target.y > position.y {
        Facing::Down
    } else {
        Facing::Up
    }
}

/// Sprite while heading home: up if the spawn is above, else down.
pub fn return_facing(position: IVec2, spawn: IVec2) -> Facing {
    if spawn.y < position.y {
        Facing::Up
    } else {
        Facing::Down
    }
}
