//! Cleanup system: removes every actor flagged for removal.

use hecs::{Entity, World};
use tracing::trace;

use beanfarm_core::components::Lifecycle;

/// Despawn every entity whose `Lifecycle` is flagged. Uses a pre-allocated
/// buffer to avoid per-frame allocation. Returns how many were swept.
pub fn sweep(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, lifecycle) in world.query_mut::<&Lifecycle>() {
        if lifecycle.is_removed() {
            despawn_buffer.push(entity);
        }
    }

    let swept = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    if swept > 0 {
        trace!(swept, remaining = world.len(), "sweep");
    }
    swept
}
