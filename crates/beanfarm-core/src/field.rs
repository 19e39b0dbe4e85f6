//! Tile field collaborator.
//!
//! The simulation only ever asks the field which tiles carry a harvestable
//! resource and, for pigeons, to uproot one. `Field` is a minimal grid
//! implementation good enough for scenarios and tests.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::types::distance;

/// Stable identifier of one tile in a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

/// Something stacked on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stacked {
    Grass,
    Dirt,
    Cabbage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    /// Top-left corner in world pixels.
    pub position: IVec2,
    pub stack: Vec<Stacked>,
}

impl Tile {
    /// Whether a bird would find anything worth taking here.
    pub fn has_resource(&self) -> bool {
        self.stack.contains(&Stacked::Cabbage)
    }
}

/// World query surface consumed by pigeons and pigeon spawners.
pub trait FieldQuery {
    /// Every tile matching `predicate`, in a stable order for this call.
    fn select_tiles(&self, predicate: &dyn Fn(&Tile) -> bool) -> Vec<&Tile>;

    fn tile(&self, id: TileId) -> Option<&Tile>;

    /// Remove the harvestable resource from a tile. Returns false when the
    /// tile is unknown or already bare.
    fn uproot(&mut self, id: TileId) -> bool;
}

/// The resource-bearing tile nearest to `from`. Ties keep the first tile
/// the field reports.
pub fn nearest_resource(field: &dyn FieldQuery, from: IVec2) -> Option<(TileId, IVec2)> {
    field
        .select_tiles(&Tile::has_resource)
        .into_iter()
        .min_by_key(|tile| distance(from, tile.position))
        .map(|tile| (tile.id, tile.position))
}

/// Whether any tile in the field carries a resource.
pub fn any_resource(field: &dyn FieldQuery) -> bool {
    !field.select_tiles(&Tile::has_resource).is_empty()
}

/// Square grid of tiles, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    tile_size: i32,
    columns: i32,
    tiles: Vec<Tile>,
}

impl Field {
    /// A grass-covered grid of `columns` x `rows` tiles.
    pub fn new(columns: i32, rows: i32, tile_size: i32) -> Self {
        let mut tiles = Vec::with_capacity((columns.max(0) * rows.max(0)) as usize);
        for row in 0..rows {
            for column in 0..columns {
                tiles.push(Tile {
                    id: TileId((row * columns + column) as u32),
                    position: IVec2::new(column * tile_size, row * tile_size),
                    stack: vec![Stacked::Grass],
                });
            }
        }
        Self {
            tile_size,
            columns,
            tiles,
        }
    }

    /// The tile whose square contains `point`.
    pub fn tile_at(&self, point: IVec2) -> Option<&Tile> {
        self.index_of(point).map(|index| &self.tiles[index])
    }

    /// Till the tile under `point` and plant a cabbage on it.
    pub fn plant(&mut self, point: IVec2) -> Option<TileId> {
        let index = self.index_of(point)?;
        let tile = &mut self.tiles[index];
        tile.stack = vec![Stacked::Dirt, Stacked::Cabbage];
        Some(tile.id)
    }

    /// Number of cabbages currently standing.
    pub fn cabbage_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.has_resource()).count()
    }

    fn index_of(&self, point: IVec2) -> Option<usize> {
        if point.x < 0 || point.y < 0 || self.tile_size <= 0 {
            return None;
        }
        let column = point.x / self.tile_size;
        let row = point.y / self.tile_size;
        if column >= self.columns {
            return None;
        }
        let index = (row * self.columns + column) as usize;
        (index < self.tiles.len()).then_some(index)
    }
}

impl FieldQuery for Field {
    fn select_tiles(&self, predicate: &dyn Fn(&Tile) -> bool) -> Vec<&Tile> {
        self.tiles.iter().filter(|tile| predicate(tile)).collect()
    }

    fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0 as usize).filter(|tile| tile.id == id)
    }

    fn uproot(&mut self, id: TileId) -> bool {
        let Some(tile) = self.tiles.get_mut(id.0 as usize) else {
            return false;
        };
        let before = tile.stack.len();
        tile.stack.retain(|item| *item != Stacked::Cabbage);
        tile.stack.len() != before
    }
}
