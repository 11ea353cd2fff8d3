//! Collectable placement
//!
//! Items are scattered uniformly over the world. Overlaps between items are
//! allowed and left as-is.

use glam::Vec2;
use rand::Rng;

use super::state::{Collectable, WorldConfig};

/// Generate a fresh item set for a session
pub fn generate_collectables<R: Rng>(rng: &mut R, config: &WorldConfig) -> Vec<Collectable> {
    let max = config.world_rect().max_origin_for(config.item_size);

    (0..config.item_count)
        .map(|i| {
            let pos = Vec2::new(rng.random_range(0.0..=max.x), rng.random_range(0.0..=max.y));
            let value = rng.random_range(config.item_value_min..=config.item_value_max);
            log::trace!("Item {} at ({:.0}, {:.0}) worth {}", i, pos.x, pos.y, value);
            Collectable {
                id: i as u32,
                pos,
                value,
                collected: false,
            }
        })
        .collect()
}
