//! ECS components for hecs entities.
//!
//! Components are plain data. The only methods are the integration and
//! targeting helpers every actor shares; behaviour lives in the sim crate.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use crate::enums::RemovalCause;
use crate::types::{bearing, distance, normalize_degrees};

/// Integer position, whole-degree heading and a speed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub position: IVec2,
    /// Degrees in [0, 360), 0 = +x, 90 = +y (down).
    pub heading: i32,
    /// Pixels per frame. Stationary actors hold 0.
    pub speed: f64,
}

impl Kinematics {
    pub fn new(position: IVec2, speed: f64) -> Self {
        debug_assert!(speed >= 0.0, "speed must be non-negative");
        Self {
            position,
            heading: 0,
            speed,
        }
    }

    /// Kinematics for an actor that never moves.
    pub fn stationary(position: IVec2) -> Self {
        Self::new(position, 0.0)
    }

    /// Advance one frame along the current heading.
    pub fn advance(&mut self) {
        let step = DVec2::from_angle(f64::from(self.heading).to_radians()) * self.speed;
        self.position += step.round().as_ivec2();
    }

    /// Point the heading at `target`.
    pub fn face(&mut self, target: IVec2) {
        self.heading = bearing(self.position, target);
    }

    pub fn set_heading(&mut self, degrees: i32) {
        self.heading = normalize_degrees(degrees);
    }

    pub fn distance_to(&self, target: IVec2) -> i32 {
        distance(self.position, target)
    }
}

/// Removal flag carried by every actor.
///
/// Once set the actor is inert until its manager sweeps it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    pub removal: Option<RemovalCause>,
}

impl Lifecycle {
    pub fn is_removed(&self) -> bool {
        self.removal.is_some()
    }

    /// Flag for removal. Returns false if the actor was already flagged,
    /// in which case the original cause is kept.
    pub fn mark(&mut self, cause: RemovalCause) -> bool {
        if self.removal.is_some() {
            return false;
        }
        self.removal = Some(cause);
        true
    }
}
