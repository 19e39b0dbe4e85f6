//! Per-actor behaviour run by the managers each frame.
//!
//! Systems are free functions over components and the frame context.
//! They own no state; all state lives in components.

pub mod bee_hive;
pub mod birds;
pub mod cleanup;
pub mod guard_bee;
pub mod npcs;
pub mod scarecrow;
pub mod snapshot;
