//! player actions: single‑tile digging & area explosions
use crate::constants::*;
use crate::player::PlayerBody;
use crate::progress::Progress;
use crate::terrain::World;
use crate::tile::Tile;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// result of a successful dig / move
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DigOutcome {
    pub x: i32,
    pub y: i32,
    /// what occupied the target before the dig
    pub dug: Tile,
    pub coins: u32,
    pub energy_spent: u32,
}

/// result of a successful explosion
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlastOutcome {
    pub cleared: Vec<(i32, i32, Tile)>,
    pub coins: u32,
    pub energy_spent: u32,
}

/// step one tile in `dir`, digging out whatever is there
///
/// Silently refused (`None`) while falling or sliding, without energy,
/// against the map edge, or into stone.
pub fn dig_move(
    world: &mut World,
    body: &mut PlayerBody,
    progress: &mut Progress,
    dir: Direction,
) -> Option<DigOutcome> {
    if body.is_busy() {
        return None;
    }

    let (dx, dy) = dir.delta();
    let (nx, ny) = (body.column() + dx, body.row() + dy);
    if !World::in_bounds(nx) || ny < 0 {
        return None;
    }

    let target = world.get(nx, ny);
    if target == Tile::Stone || !progress.try_spend_energy(ENERGY_MOVE) {
        return None;
    }

    let coins = target.coin_value();
    progress.credit(coins);
    if target != Tile::Shaft {
        world.set(nx, ny, Tile::Air);
    }

    if dx != 0 {
        body.begin_slide(nx);
    }
    progress.record_depth(ny);
    world.ensure_depth(ny);

    Some(DigOutcome {
        x: nx,
        y: ny,
        dug: target,
        coins,
        energy_spent: ENERGY_MOVE,
    })
}

/// clear the 3×3 block around the player, stone included
pub fn explode(world: &mut World, body: &PlayerBody, progress: &mut Progress) -> Option<BlastOutcome> {
    let cost = progress.explosion_cost();
    if !progress.try_spend_energy(cost) {
        return None;
    }

    let (cx, cy) = (body.column(), body.row());
    let mut blast = BlastOutcome {
        energy_spent: cost,
        ..BlastOutcome::default()
    };

    for y in cy - 1..=cy + 1 {
        for x in cx - 1..=cx + 1 {
            if !world.is_generated(x, y) {
                continue;
            }
            let tile = world.get(x, y);
            if tile == Tile::Air {
                continue;
            }
            let value = tile.coin_value();
            progress.credit(value);
            blast.coins += value;
            world.set(x, y, Tile::Air);
            blast.cleared.push((x, y, tile));
        }
    }
    Some(blast)
}
