//! Actor managers: lifecycle plumbing around one hecs world each.
//!
//! Managers sweep, fan out to systems and export views. They implement no
//! behaviour of their own.

mod enemy;
mod npc;

pub use enemy::{BirdSpawn, EnemyManager};
pub use npc::{NpcManager, NpcSpawn};
