//! Simulation engine for the bean farm.
//!
//! Owns the enemy and NPC managers (each a hecs world), runs spawners and
//! actor behaviour once per frame, and produces `FrameSnapshot`s for the
//! renderer.

pub mod components;
pub mod context;
pub mod engine;
pub mod managers;
pub mod spawners;
pub mod systems;
pub mod world_setup;

pub use beanfarm_core as core;
pub use engine::SimulationEngine;

#[cfg(test)]
mod tests;
