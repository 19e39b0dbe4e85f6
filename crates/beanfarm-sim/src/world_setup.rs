//! Entity spawn factories and scenario construction.
//!
//! Creates birds and NPCs with their component bundles, and builds the
//! field, managers and spawners a scenario describes.

use glam::IVec2;
use hecs::{Entity, World};
use tracing::warn;

use beanfarm_core::components::{Kinematics, Lifecycle};
use beanfarm_core::config::ScenarioConfig;
use beanfarm_core::enums::{BirdArchetype, DefenderKind, Facing};
use beanfarm_core::field::Field;
use beanfarm_flock::profiles::{get_profile, Quarry};

use crate::components::{Bird, BirdTarget, Npc};
use crate::managers::{BirdSpawn, EnemyManager, NpcManager, NpcSpawn};
use crate::spawners::{EnemySpawner, PlacementSpawner};

/// Insert a bird at full speed, attacking, aimed at its spawn-time target.
pub fn spawn_bird(world: &mut World, spawn: BirdSpawn) -> Entity {
    let profile = get_profile(spawn.archetype);
    let mut kinematics = Kinematics::new(spawn.position, profile.speed);
    if let Some(aim) = spawn.aim {
        kinematics.face(aim);
    }
    let target = match profile.quarry {
        Quarry::Player { .. } => BirdTarget::Player,
        Quarry::NearestCrop => BirdTarget::None,
    };

    world.spawn((
        kinematics,
        Facing::default(),
        Lifecycle::default(),
        Bird::new(spawn.archetype, spawn.position, target),
    ))
}

pub fn spawn_npc(world: &mut World, spawn: NpcSpawn) -> Entity {
    world.spawn((
        spawn.kinematics,
        Facing::default(),
        Lifecycle::default(),
        spawn.npc,
    ))
}

/// A plain NPC that drifts along `heading` forever.
pub fn wanderer(position: IVec2, heading: i32, speed: f64) -> NpcSpawn {
    let mut kinematics = Kinematics::new(position, speed);
    kinematics.set_heading(heading);
    NpcSpawn {
        kinematics,
        npc: Npc::Wanderer,
    }
}

/// Grass field covering the window, with the scenario's cabbages planted.
pub fn build_field(config: &ScenarioConfig) -> Field {
    let dimensions = config.dimensions;
    let tiles = dimensions.tiles_per_row();
    let mut field = Field::new(tiles, tiles, dimensions.tile_size);

    for &[x, y] in &config.cabbages {
        if field.plant(IVec2::new(x, y)).is_none() {
            warn!(x, y, "cabbage_outside_grid");
        }
    }
    field
}

/// Enemy manager with one spawner per configured entry.
pub fn build_enemies(config: &ScenarioConfig) -> EnemyManager {
    let mut enemies = EnemyManager::new();
    for archetype in BirdArchetype::ALL {
        for spawner in config.spawners(archetype) {
            enemies.add_spawner(EnemySpawner::with_interval(
                archetype,
                spawner.position(),
                spawner.interval(archetype),
            ));
        }
    }
    enemies
}

/// NPC manager with the hive and scarecrow placement keys bound.
pub fn build_npcs(config: &ScenarioConfig) -> NpcManager {
    let mut npcs = NpcManager::new();
    npcs.add_placement(PlacementSpawner::new(DefenderKind::BeeHive, config.keys.hive));
    npcs.add_placement(PlacementSpawner::new(
        DefenderKind::Scarecrow,
        config.keys.scarecrow,
    ));
    npcs
}
