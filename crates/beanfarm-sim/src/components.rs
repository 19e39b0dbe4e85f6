//! Role components for actors in the managers' hecs worlds.
//!
//! Every actor also carries `Kinematics`, `Facing` and `Lifecycle` from
//! the core crate. Roles are plain data; behaviour lives in `systems`.

use glam::IVec2;
use hecs::Entity;

use beanfarm_core::constants::HIVE_RELOAD_TICKS;
use beanfarm_core::enums::{ActorKind, BirdArchetype, BirdPhase, Resource};
use beanfarm_core::field::TileId;
use beanfarm_core::timer::{FixedTimer, RepeatingTimer};
use beanfarm_flock::profiles::{get_profile, Quarry};

/// What a bird is currently chasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdTarget {
    Player,
    Tile(TileId),
    None,
}

/// A raiding bird. Lives in the enemy manager's world.
#[derive(Debug, Clone)]
pub struct Bird {
    pub archetype: BirdArchetype,
    pub phase: BirdPhase,
    pub spawn: IVec2,
    pub target: BirdTarget,
    /// Stolen coins or food held until delivery or refund.
    pub carried: i32,
    pub lifespan: FixedTimer,
}

impl Bird {
    pub fn new(archetype: BirdArchetype, spawn: IVec2, target: BirdTarget) -> Self {
        Self {
            archetype,
            phase: BirdPhase::Attacking,
            spawn,
            target,
            carried: 0,
            lifespan: FixedTimer::new(get_profile(archetype).lifespan),
        }
    }

    pub fn is_attacking(&self) -> bool {
        self.phase == BirdPhase::Attacking
    }

    /// Force the bird into its homeward leg. Returns true if it was
    /// attacking; a bird already returning is left as it is.
    pub fn pacify(&mut self) -> bool {
        let was_attacking = self.is_attacking();
        self.phase = BirdPhase::Returning;
        was_attacking
    }

    /// The inventory resource this bird steals, if any.
    pub fn loot_resource(&self) -> Option<Resource> {
        match get_profile(self.archetype).quarry {
            Quarry::Player { resource, .. } => Some(resource),
            Quarry::NearestCrop => None,
        }
    }
}

/// Short-lived defender launched by a hive.
#[derive(Debug, Clone)]
pub struct GuardBee {
    pub spawn: IVec2,
    /// Handle into the enemy world. May go stale at any frame.
    pub target: Option<Entity>,
    pub lifespan: FixedTimer,
}

/// Stationary single-charge bee launcher.
#[derive(Debug, Clone)]
pub struct BeeHive {
    pub loaded: bool,
    pub reload: RepeatingTimer,
}

impl BeeHive {
    /// A freshly placed hive starts loaded.
    pub fn new() -> Self {
        Self {
            loaded: true,
            reload: RepeatingTimer::new(HIVE_RELOAD_TICKS),
        }
    }
}

impl Default for BeeHive {
    fn default() -> Self {
        Self::new()
    }
}

/// Stationary bird pacifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scarecrow;

/// Every kind of actor the NPC manager owns.
#[derive(Debug, Clone)]
pub enum Npc {
    GuardBee(GuardBee),
    BeeHive(BeeHive),
    Scarecrow(Scarecrow),
    /// Plain NPC that drifts along its heading forever.
    Wanderer,
}

impl Npc {
    pub fn kind(&self) -> ActorKind {
        match self {
            Npc::GuardBee(_) => ActorKind::GuardBee,
            Npc::BeeHive(_) => ActorKind::BeeHive,
            Npc::Scarecrow(_) => ActorKind::Scarecrow,
            Npc::Wanderer => ActorKind::Wanderer,
        }
    }

    /// Whether the manager's interact pass should visit this actor.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Npc::BeeHive(_) | Npc::Scarecrow(_))
    }
}
