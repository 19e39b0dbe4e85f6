//! Archetype-specific behavioural profiles.
//!
//! Consolidates per-archetype parameters for the bird FSM.

use beanfarm_core::enums::{BirdArchetype, Resource};

/// What a bird goes after and what it takes when it gets there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quarry {
    /// Chases the farmer and pockets `amount` of `resource` from the
    /// inventory on contact.
    Player {
        resource: Resource,
        amount: i32,
        /// Turn for home on contact even when nothing could be taken.
        flees_empty_handed: bool,
    },
    /// Chases the nearest cabbage and uproots it on contact.
    NearestCrop,
}

/// Behavioural profile for a bird archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdProfile {
    pub archetype: BirdArchetype,
    /// Frames before the bird is forcibly removed.
    pub lifespan: u32,
    /// Speed while attacking.
    pub speed: f64,
    /// Speed after a successful theft.
    pub getaway_speed: f64,
    pub quarry: Quarry,
}

impl BirdProfile {
    /// Whether spawners must see at least one cabbage before releasing
    /// this archetype.
    pub fn needs_crops(&self) -> bool {
        matches!(self.quarry, Quarry::NearestCrop)
    }
}

/// Get the behavioural profile for a given archetype.
pub fn get_profile(archetype: BirdArchetype) -> BirdProfile {
    use beanfarm_core::constants::*;

    match archetype {
        BirdArchetype::Magpie => BirdProfile {
            archetype,
            lifespan: MAGPIE_LIFESPAN,
            speed: MAGPIE_SPEED,
            getaway_speed: MAGPIE_GETAWAY_SPEED,
            quarry: Quarry::Player {
                resource: Resource::Coins,
                amount: MAGPIE_LOOT,
                flees_empty_handed: false,
            },
        },
        BirdArchetype::Pigeon => BirdProfile {
            archetype,
            lifespan: PIGEON_LIFESPAN,
            speed: PIGEON_SPEED,
            getaway_speed: PIGEON_SPEED,
            quarry: Quarry::NearestCrop,
        },
        BirdArchetype::Eagle => BirdProfile {
            archetype,
            lifespan: EAGLE_LIFESPAN,
            speed: EAGLE_SPEED,
            getaway_speed: EAGLE_GETAWAY_SPEED,
            quarry: Quarry::Player {
                resource: Resource::Food,
                amount: EAGLE_LOOT,
                flees_empty_handed: true,
            },
        },
    }
}
