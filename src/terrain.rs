//! the sparse, lazily deepened mine grid
use bevy::log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::*;
use crate::tile::Tile;
use crate::world_gen::{generate_map, generate_row, TileMap};

/// helper conversions (row‑0 = surface, y grows downward)
#[inline]
pub fn px_to_tile(px: f32) -> i32 {
    (px / BLOCK_SIZE).floor() as i32
}
#[inline]
pub fn tile_to_px(tile: i32) -> f32 {
    tile as f32 * BLOCK_SIZE
}

/// -------- world --------
///
/// Owns every generated tile plus the RNG that produces new rows. Rows are
/// appended at the frontier and never regenerated; dug tiles are overwritten,
/// never removed.
pub struct World {
    tiles: TileMap,
    /// number of generated rows; rows `0..frontier` exist
    frontier: i32,
    rng: StdRng,
}

impl World {
    /// fresh mine with `height` rows already generated
    pub fn generate(height: i32, mut rng: StdRng) -> Self {
        let tiles = generate_map(height, &mut rng);
        Self {
            tiles,
            frontier: height.max(0),
            rng,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::generate(INITIAL_MAP_HEIGHT, StdRng::seed_from_u64(seed))
    }

    /// hand‑built grid (tests, replays); `frontier` is one past the last row
    pub fn from_tiles(tiles: TileMap, frontier: i32, rng: StdRng) -> Self {
        Self { tiles, frontier, rng }
    }

    #[inline]
    pub fn frontier(&self) -> i32 {
        self.frontier
    }

    #[inline]
    pub fn in_bounds(x: i32) -> bool {
        (0..MAP_WIDTH).contains(&x)
    }

    #[inline]
    pub fn is_generated(&self, x: i32, y: i32) -> bool {
        Self::in_bounds(x) && (0..self.frontier).contains(&y)
    }

    /// tile at `(x, y)`; anything never generated reads as air
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Tile {
        if !Self::in_bounds(x) {
            return Tile::Air;
        }
        self.tiles.get(&(x, y)).copied().unwrap_or_default()
    }

    /// overwrite a generated tile; returns `false` (and does nothing) for
    /// coordinates outside the generated area, which stays append‑only
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        if !self.is_generated(x, y) {
            return false;
        }
        self.tiles.insert((x, y), tile);
        true
    }

    /// keep at least `GENERATION_BATCH` rows of lookahead below `target_row`
    ///
    /// Extends by one batch per call, so a row far below the frontier takes
    /// several calls (one per tick in practice) to reach.
    pub fn ensure_depth(&mut self, target_row: i32) -> bool {
        if target_row + GENERATION_BATCH <= self.frontier {
            return false;
        }
        let start = self.frontier;
        for y in start..start + GENERATION_BATCH {
            let row = generate_row(y, &self.tiles, &mut self.rng);
            self.tiles.extend(row);
        }
        self.frontier += GENERATION_BATCH;
        debug!("mine extended: rows {}..{}", start, self.frontier);
        true
    }

    /// read‑only row view for renderers and tests
    pub fn row(&self, y: i32) -> impl Iterator<Item = Tile> + '_ {
        (0..MAP_WIDTH).map(move |x| self.get(x, y))
    }

    pub fn generated_tiles(&self) -> usize {
        self.tiles.len()
    }
}
