//! row‑by‑row mine generation
//!
//! Every cell is one independent pseudo‑random decision that may look at
//! its left neighbour (same row, already placed) and the cell above (previous
//! row, already committed). Rows are therefore produced strictly top‑down and
//! cells strictly left‑to‑right.
use std::collections::HashMap;

use rand::Rng;

use crate::constants::*;
use crate::tile::{ore_for_depth, Tile};

/// sparse `(x, y) → Tile` storage shared by the generator and `World`
pub type TileMap = HashMap<(i32, i32), Tile>;

/// chance that a cell at row `y` turns into ore
#[inline]
pub fn ore_chance(y: i32, ore_adjacent: bool) -> f64 {
    let bonus = if ore_adjacent { ORE_ADJACENT_BONUS } else { 0.0 };
    ORE_BASE_CHANCE + y as f64 / ORE_DEPTH_DIVISOR + bonus
}

/// produce row `y` for every column, reading (never writing) `grid`
pub fn generate_row<R: Rng + ?Sized>(y: i32, grid: &TileMap, rng: &mut R) -> TileMap {
    let mut row = TileMap::with_capacity(MAP_WIDTH as usize);

    for x in 0..MAP_WIDTH {
        let tile = if y < ENTRY_SHAFT_ROWS {
            Tile::Air
        } else {
            pick_tile(x, y, grid, &row, rng)
        };
        row.insert((x, y), tile);
    }
    row
}

fn pick_tile<R: Rng + ?Sized>(x: i32, y: i32, grid: &TileMap, row: &TileMap, rng: &mut R) -> Tile {
    let above = grid.get(&(x, y - 1)).copied().unwrap_or_default();

    /* shafts taper: each row keeps going with fixed odds */
    if above == Tile::Shaft && rng.gen::<f64>() < SHAFT_CONTINUE_CHANCE {
        return Tile::Shaft;
    }
    if rng.gen::<f64>() < SHAFT_SEED_CHANCE {
        return Tile::Shaft;
    }

    /* ore veins: a little more likely next to existing ore */
    let left = row.get(&(x - 1, y)).copied().unwrap_or_default();
    let ore_adjacent = left.is_ore() || above.is_ore();
    if rng.gen::<f64>() < ore_chance(y, ore_adjacent) {
        return ore_for_depth(y);
    }

    if rng.gen::<f64>() < STONE_CHANCE {
        Tile::Stone
    } else {
        Tile::Dirt
    }
}

/// bulk generation of rows `0..height`
pub fn generate_map<R: Rng + ?Sized>(height: i32, rng: &mut R) -> TileMap {
    let mut grid = TileMap::with_capacity((MAP_WIDTH * height.max(0)) as usize);
    for y in 0..height {
        let row = generate_row(y, &grid, rng);
        grid.extend(row);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn entry_rows_are_always_air() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = generate_map(ENTRY_SHAFT_ROWS + 3, &mut rng);
        for y in 0..ENTRY_SHAFT_ROWS {
            for x in 0..MAP_WIDTH {
                assert_eq!(grid[&(x, y)], Tile::Air, "({x}, {y})");
            }
        }
    }

    #[test]
    fn rows_cover_every_column_exactly() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = generate_map(12, &mut rng);
        assert_eq!(grid.len(), (MAP_WIDTH * 12) as usize);
        assert!(!grid.contains_key(&(-1, 6)));
        assert!(!grid.contains_key(&(MAP_WIDTH, 6)));
    }

    #[test]
    fn generating_a_row_leaves_existing_rows_untouched() {
        let mut rng = StdRng::seed_from_u64(99);
        let grid = generate_map(30, &mut rng);
        let before = grid.clone();
        let row = generate_row(30, &grid, &mut rng);
        assert_eq!(grid, before);
        assert!(row.keys().all(|&(_, y)| y == 30));
    }

    #[test]
    fn removing_shafts_above_does_not_alter_generated_rows() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid = generate_map(40, &mut rng);
        let snapshot: Vec<_> = (20..40)
            .flat_map(|y| (0..MAP_WIDTH).map(move |x| (x, y)))
            .map(|k| (k, grid[&k]))
            .collect();

        let shafts: Vec<_> = grid
            .iter()
            .filter(|(k, t)| k.1 < 20 && **t == Tile::Shaft)
            .map(|(&k, _)| k)
            .collect();
        for k in shafts {
            grid.insert(k, Tile::Air);
        }

        for (k, tile) in snapshot {
            assert_eq!(grid[&k], tile);
        }
    }

    #[test]
    fn shafts_and_ore_both_appear_in_a_deep_map() {
        let mut rng = StdRng::seed_from_u64(2024);
        let grid = generate_map(120, &mut rng);
        assert!(grid.values().any(|t| *t == Tile::Shaft));
        assert!(grid.values().any(|t| t.is_ore()));
        assert!(grid.values().any(|t| *t == Tile::Stone));
        assert!(grid.values().any(|t| *t == Tile::Dirt));
    }

    #[test]
    fn ore_matches_catalogue_for_its_row() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = generate_map(80, &mut rng);
        for (&(_, y), tile) in &grid {
            if tile.is_ore() {
                assert_eq!(*tile, ore_for_depth(y));
            }
        }
    }

    #[test]
    fn ore_chance_grows_with_depth() {
        assert!(ore_chance(10, false) < ore_chance(40, false));
        assert!(ore_chance(40, false) < ore_chance(40, true));
        assert!((ore_chance(0, false) - ORE_BASE_CHANCE).abs() < 1e-12);
    }

    #[test]
    fn deeper_rows_are_empirically_richer_in_ore() {
        // empty row above: no shaft continuation and no vertical ore bonus
        fn ore_rate(y: i32, rng: &mut StdRng) -> f64 {
            let empty = TileMap::new();
            let samples = 400;
            let mut ores = 0usize;
            let mut cells = 0usize;
            for _ in 0..samples {
                let row = generate_row(y, &empty, rng);
                cells += row.len();
                ores += row.values().filter(|t| t.is_ore()).count();
            }
            ores as f64 / cells as f64
        }

        let mut rng = StdRng::seed_from_u64(42);
        let shallow = ore_rate(10, &mut rng);
        let deep = ore_rate(100, &mut rng);
        // expected ≈ 0.037 vs ≈ 0.33; the margin dwarfs sampling noise
        assert!(deep > shallow + 0.1, "shallow {shallow}, deep {deep}");
    }

    /// 400 rows at depth `y`, each generated under the same `above` row
    fn sample_rows(y: i32, above: &TileMap, seed: u64) -> Vec<Tile> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..400)
            .flat_map(|_| generate_row(y, above, &mut rng).into_values())
            .collect()
    }

    fn share(tiles: &[Tile], pred: impl Fn(&Tile) -> bool) -> f64 {
        tiles.iter().filter(|t| pred(t)).count() as f64 / tiles.len() as f64
    }

    #[test]
    fn shafts_continue_downward_about_four_times_in_five() {
        let y = 20;
        let above: TileMap = (0..MAP_WIDTH).map(|x| ((x, y - 1), Tile::Shaft)).collect();
        let tiles = sample_rows(y, &above, 8);
        // continuation plus a fresh seed on the misses: 0.8 + 0.2 × 0.02
        let rate = share(&tiles, |t| *t == Tile::Shaft);
        assert!((rate - 0.804).abs() < 0.03, "shaft rate {rate}");
    }

    #[test]
    fn fresh_shafts_start_in_about_two_percent_of_cells() {
        let tiles = sample_rows(8, &TileMap::new(), 13);
        let rate = share(&tiles, |t| *t == Tile::Shaft);
        assert!((rate - 0.02).abs() < 0.008, "shaft rate {rate}");
    }

    #[test]
    fn about_a_fifth_of_plain_ground_is_stone() {
        let tiles = sample_rows(8, &TileMap::new(), 21);
        let ground: Vec<Tile> = tiles
            .into_iter()
            .filter(|t| matches!(t, Tile::Stone | Tile::Dirt))
            .collect();
        let rate = share(&ground, |t| *t == Tile::Stone);
        assert!((rate - 0.2).abs() < 0.02, "stone rate {rate}");
    }

    #[test]
    fn same_seed_builds_the_same_mine() {
        let a = generate_map(50, &mut StdRng::seed_from_u64(3));
        let b = generate_map(50, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
