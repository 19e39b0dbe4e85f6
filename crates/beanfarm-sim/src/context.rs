//! Per-frame context threaded through every tick and interact call.
//!
//! Inventory and field writes are immediate: an actor ticked later in the
//! same frame sees what an earlier actor did.

use glam::IVec2;

use beanfarm_core::events::SimEvent;
use beanfarm_core::field::FieldQuery;
use beanfarm_core::input::KeyState;
use beanfarm_core::inventory::Inventory;
use beanfarm_core::types::Dimensions;

pub struct FrameContext<'a> {
    pub tick: u64,
    pub dimensions: Dimensions,
    pub player: IVec2,
    pub inventory: &'a mut dyn Inventory,
    pub field: &'a mut dyn FieldQuery,
    pub keys: &'a dyn KeyState,
    pub events: &'a mut Vec<SimEvent>,
}

impl FrameContext<'_> {
    pub fn tile_size(&self) -> i32 {
        self.dimensions.tile_size
    }
}
