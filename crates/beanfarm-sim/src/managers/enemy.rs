use glam::IVec2;
use hecs::{Entity, World};

use beanfarm_core::components::{Kinematics, Lifecycle};
use beanfarm_core::enums::BirdArchetype;
use beanfarm_core::state::ActorView;
use beanfarm_core::types::distance;

use crate::components::Bird;
use crate::context::FrameContext;
use crate::spawners::EnemySpawner;
use crate::systems::{birds, cleanup, snapshot};
use crate::world_setup;

/// A bird waiting to be inserted into the enemy world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdSpawn {
    pub archetype: BirdArchetype,
    pub position: IVec2,
    /// Initial aim point. `None` leaves the heading at zero.
    pub aim: Option<IVec2>,
}

/// Owns every bird and every bird spawner.
#[derive(Default)]
pub struct EnemyManager {
    world: World,
    spawners: Vec<EnemySpawner>,
    staged: Vec<BirdSpawn>,
    despawn_buffer: Vec<Entity>,
}

impl EnemyManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_spawner(&mut self, spawner: EnemySpawner) {
        self.spawners.push(spawner);
    }

    pub fn spawners(&self) -> &[EnemySpawner] {
        &self.spawners
    }

    /// Insert a bird immediately.
    pub fn add(&mut self, spawn: BirdSpawn) -> Entity {
        world_setup::spawn_bird(&mut self.world, spawn)
    }

    /// Sweep flagged birds, run spawners, then tick every bird that was
    /// alive before this frame's spawns.
    pub fn tick(&mut self, ctx: &mut FrameContext) {
        cleanup::sweep(&mut self.world, &mut self.despawn_buffer);

        for spawner in &mut self.spawners {
            if let Some(spawn) = spawner.tick(ctx) {
                self.staged.push(spawn);
            }
        }

        birds::run(&mut self.world, ctx);

        for spawn in self.staged.drain(..) {
            world_setup::spawn_bird(&mut self.world, spawn);
        }
    }

    /// Birds have no interact behaviour.
    pub fn interact(&mut self, _ctx: &mut FrameContext) {}

    /// Copy of every bird still in the world, flagged ones included.
    pub fn render(&self) -> Vec<ActorView> {
        snapshot::bird_views(&self.world)
    }

    /// Whether `entity` is a bird that has not been flagged for removal.
    pub fn is_live(&self, entity: Entity) -> bool {
        self.world
            .get::<&Lifecycle>(entity)
            .map(|lifecycle| !lifecycle.is_removed())
            .unwrap_or(false)
    }

    /// Position of a live bird.
    pub fn position_of(&self, entity: Entity) -> Option<IVec2> {
        if !self.is_live(entity) {
            return None;
        }
        self.world
            .get::<&Kinematics>(entity)
            .ok()
            .map(|kinematics| kinematics.position)
    }

    pub fn archetype_of(&self, entity: Entity) -> Option<BirdArchetype> {
        self.world.get::<&Bird>(entity).ok().map(|bird| bird.archetype)
    }

    /// Closest live bird strictly inside `radius` of `from`. Ties go to the
    /// bird found first.
    pub fn nearest_live_within(&self, from: IVec2, radius: i32) -> Option<(Entity, IVec2)> {
        self.world
            .query::<(&Kinematics, &Lifecycle, &Bird)>()
            .iter()
            .filter(|(_, (_, lifecycle, _))| !lifecycle.is_removed())
            .map(|(entity, (kinematics, _, _))| {
                (entity, kinematics.position, distance(from, kinematics.position))
            })
            .filter(|&(_, _, range)| range < radius)
            .min_by_key(|&(_, _, range)| range)
            .map(|(entity, position, _)| (entity, position))
    }

    /// First live bird found strictly inside `radius` of `from`.
    pub fn first_live_within(&self, from: IVec2, radius: i32) -> Option<(Entity, IVec2)> {
        self.world
            .query::<(&Kinematics, &Lifecycle, &Bird)>()
            .iter()
            .find(|(_, (kinematics, lifecycle, _))| {
                !lifecycle.is_removed() && kinematics.distance_to(from) < radius
            })
            .map(|(entity, (kinematics, _, _))| (entity, kinematics.position))
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Birds in the world, including ones awaiting the next sweep.
    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn live_count(&self) -> usize {
        self.world
            .query::<&Lifecycle>()
            .iter()
            .filter(|(_, lifecycle)| !lifecycle.is_removed())
            .count()
    }
}
