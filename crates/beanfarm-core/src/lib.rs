//! Core types and definitions for the bean farm actor simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! kinematics, timers, components, collaborator traits, commands,
//! snapshots, events, scenario configuration, and constants.
//! It contains no per-frame behaviour.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod field;
pub mod input;
pub mod inventory;
pub mod state;
pub mod timer;
pub mod types;
