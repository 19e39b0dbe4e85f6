//! Spawners: timed bird spawners and key-driven defender placement.

use glam::IVec2;
use tracing::{debug, trace};

use beanfarm_core::components::Kinematics;
use beanfarm_core::config::default_spawn_interval;
use beanfarm_core::constants::*;
use beanfarm_core::enums::{BirdArchetype, DefenderKind};
use beanfarm_core::events::SimEvent;
use beanfarm_core::field::{any_resource, nearest_resource};
use beanfarm_core::timer::{RepeatingTimer, TickTimer};
use beanfarm_flock::profiles::get_profile;

use crate::components::{BeeHive, Npc, Scarecrow};
use crate::context::FrameContext;
use crate::managers::{BirdSpawn, NpcSpawn};

/// Releases one bird of a fixed archetype at a fixed point every cycle.
#[derive(Debug, Clone)]
pub struct EnemySpawner {
    pub archetype: BirdArchetype,
    pub position: IVec2,
    timer: RepeatingTimer,
}

impl EnemySpawner {
    pub fn new(archetype: BirdArchetype, position: IVec2) -> Self {
        Self::with_interval(archetype, position, default_spawn_interval(archetype))
    }

    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn with_interval(archetype: BirdArchetype, position: IVec2, interval: u32) -> Self {
        Self {
            archetype,
            position,
            timer: RepeatingTimer::new(interval),
        }
    }

    pub fn interval(&self) -> u32 {
        self.timer.duration()
    }

    /// Advance the cycle. On the frame it completes, returns a bird to
    /// insert unless the archetype's precondition fails. A failed
    /// precondition still consumes the cycle.
    pub fn tick(&mut self, ctx: &mut FrameContext) -> Option<BirdSpawn> {
        self.timer.tick();
        if !self.timer.is_finished() {
            return None;
        }

        let profile = get_profile(self.archetype);
        let aim = if profile.needs_crops() {
            if !any_resource(&*ctx.field) {
                trace!(archetype = ?self.archetype, "spawn_skipped_no_crops");
                return None;
            }
            nearest_resource(&*ctx.field, self.position).map(|(_, position)| position)
        } else {
            Some(ctx.player)
        };

        debug!(
            archetype = ?self.archetype,
            x = self.position.x,
            y = self.position.y,
            tick = ctx.tick,
            "bird_spawned"
        );
        ctx.events.push(SimEvent::Spawned {
            archetype: self.archetype,
            position: self.position,
        });

        Some(BirdSpawn {
            archetype: self.archetype,
            position: self.position,
            aim,
        })
    }
}

/// Places a defender at the farmer's feet every frame its key is held and
/// the inventory can cover the cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementSpawner {
    pub kind: DefenderKind,
    pub key: char,
}

impl PlacementSpawner {
    pub fn new(kind: DefenderKind, key: char) -> Self {
        Self { kind, key }
    }

    /// Coins then food.
    pub fn cost(&self) -> (i32, i32) {
        match self.kind {
            DefenderKind::BeeHive => (HIVE_COIN_COST, HIVE_FOOD_COST),
            DefenderKind::Scarecrow => (SCARECROW_COIN_COST, 0),
        }
    }

    pub fn tick(&self, ctx: &mut FrameContext) -> Option<NpcSpawn> {
        if !ctx.keys.is_down(self.key) {
            return None;
        }

        let (coins, food) = self.cost();
        if ctx.inventory.coins() < coins || ctx.inventory.food() < food {
            trace!(kind = ?self.kind, "placement_unaffordable");
            return None;
        }
        ctx.inventory.add_coins(-coins);
        ctx.inventory.add_food(-food);

        debug!(kind = ?self.kind, x = ctx.player.x, y = ctx.player.y, "defender_placed");
        ctx.events.push(SimEvent::Placed {
            kind: self.kind,
            position: ctx.player,
        });

        let npc = match self.kind {
            DefenderKind::BeeHive => Npc::BeeHive(BeeHive::new()),
            DefenderKind::Scarecrow => Npc::Scarecrow(Scarecrow),
        };
        Some(NpcSpawn {
            kinematics: Kinematics::stationary(ctx.player),
            npc,
        })
    }
}
