//! The shared player inventory.
//!
//! Deltas may be negative and no lower bound is enforced here. Every caller
//! checks affordability before debiting.

use serde::{Deserialize, Serialize};

use crate::enums::Resource;

/// Coins and food owned by the player, read and written by many actors in
/// the same frame.
pub trait Inventory {
    fn coins(&self) -> i32;
    fn add_coins(&mut self, delta: i32);
    fn food(&self) -> i32;
    fn add_food(&mut self, delta: i32);

    fn amount(&self, resource: Resource) -> i32 {
        match resource {
            Resource::Coins => self.coins(),
            Resource::Food => self.food(),
        }
    }

    fn add(&mut self, resource: Resource, delta: i32) {
        match resource {
            Resource::Coins => self.add_coins(delta),
            Resource::Food => self.add_food(delta),
        }
    }
}

/// Plain in-memory inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stockpile {
    pub coins: i32,
    pub food: i32,
}

impl Stockpile {
    pub fn new(coins: i32, food: i32) -> Self {
        Self { coins, food }
    }
}

impl Inventory for Stockpile {
    fn coins(&self) -> i32 {
        self.coins
    }

    fn add_coins(&mut self, delta: i32) {
        self.coins += delta;
    }

    fn food(&self) -> i32 {
        self.food
    }

    fn add_food(&mut self, delta: i32) {
        self.food += delta;
    }
}
