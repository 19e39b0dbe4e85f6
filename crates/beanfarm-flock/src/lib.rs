//! Bird behaviour for the bean farm.
//!
//! Implements the attack/return/expire state machine shared by every
//! raiding bird, and the archetype profiles that tune it.

pub mod fsm;
pub mod profiles;

pub use beanfarm_core as core;
