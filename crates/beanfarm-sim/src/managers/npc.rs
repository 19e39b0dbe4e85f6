use hecs::{Entity, World};

use beanfarm_core::components::{Kinematics, Lifecycle};
use beanfarm_core::enums::{ActorKind, Facing};
use beanfarm_core::state::ActorView;

use crate::components::Npc;
use crate::context::FrameContext;
use crate::managers::EnemyManager;
use crate::spawners::PlacementSpawner;
use crate::systems::{cleanup, npcs, snapshot};
use crate::world_setup;

/// An NPC waiting to be inserted into the NPC world.
#[derive(Debug, Clone)]
pub struct NpcSpawn {
    pub kinematics: Kinematics,
    pub npc: Npc,
}

/// Owns defenders, wanderers and the player's placement spawners.
#[derive(Default)]
pub struct NpcManager {
    world: World,
    placements: Vec<PlacementSpawner>,
    staged: Vec<NpcSpawn>,
    despawn_buffer: Vec<Entity>,
}

impl NpcManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_placement(&mut self, placement: PlacementSpawner) {
        self.placements.push(placement);
    }

    /// Insert an NPC immediately.
    pub fn add(&mut self, spawn: NpcSpawn) -> Entity {
        world_setup::spawn_npc(&mut self.world, spawn)
    }

    /// Sweep flagged NPCs, place defenders for held keys, then tick every
    /// NPC that existed before this frame's placements.
    pub fn tick(&mut self, ctx: &mut FrameContext, enemies: &mut EnemyManager) {
        cleanup::sweep(&mut self.world, &mut self.despawn_buffer);

        for placement in &self.placements {
            if let Some(spawn) = placement.tick(ctx) {
                self.staged.push(spawn);
            }
        }

        for (_entity, (kinematics, facing, lifecycle, npc)) in
            self.world
                .query_mut::<(&mut Kinematics, &mut Facing, &mut Lifecycle, &mut Npc)>()
        {
            if lifecycle.is_removed() {
                continue;
            }
            npcs::tick(kinematics, facing, lifecycle, npc, ctx, enemies);
        }

        self.insert_staged();
    }

    /// Fan out to interactive NPCs only. Bees launched here fly from the
    /// next frame.
    pub fn interact(&mut self, ctx: &mut FrameContext, enemies: &mut EnemyManager) {
        for (_entity, (kinematics, lifecycle, npc)) in self
            .world
            .query_mut::<(&Kinematics, &Lifecycle, &mut Npc)>()
        {
            if lifecycle.is_removed() || !npc.is_interactive() {
                continue;
            }
            if let Some(spawn) = npcs::interact(kinematics, npc, ctx, enemies) {
                self.staged.push(spawn);
            }
        }

        self.insert_staged();
    }

    /// Copy of every NPC still in the world, flagged ones included.
    pub fn render(&self) -> Vec<ActorView> {
        snapshot::npc_views(&self.world)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live NPCs of one kind.
    pub fn count(&self, kind: ActorKind) -> usize {
        self.world
            .query::<(&Lifecycle, &Npc)>()
            .iter()
            .filter(|(_, (lifecycle, npc))| !lifecycle.is_removed() && npc.kind() == kind)
            .count()
    }

    fn insert_staged(&mut self) {
        for spawn in self.staged.drain(..) {
            world_setup::spawn_npc(&mut self.world, spawn);
        }
    }
}
