//! per‑tick gravity, landing & fall damage
use crate::constants::*;
use crate::player::{feet_row_at, PlayerBody};
use crate::terrain::{tile_to_px, World};

/// what one physics tick did to the body
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FallOutcome {
    /// standing still on solid ground
    Grounded,
    /// still in the air after this tick
    Airborne,
    /// touched down within the safe distance (or in god mode)
    Landed { distance: f32 },
    /// touched down from too high; the run is over
    Fatal { distance: f32 },
}

/// tallest survivable drop for a given springs level
#[inline]
pub fn safe_distance(springs: u32) -> f32 {
    (1 + springs) as f32 * BLOCK_SIZE
}

/// advance `body` by one tick against `world`
pub fn step(world: &World, body: &mut PlayerBody, springs: u32, god_mode: bool) -> FallOutcome {
    let tx = body.column();
    let ty = body.feet_row();
    let safe = safe_distance(springs);

    if world.get(tx, ty).is_open() {
        body.falling = true;
    } else if body.falling {
        return touch_down(body, safe, god_mode);
    } else {
        return FallOutcome::Grounded;
    }

    body.velocity_y += GRAVITY;
    let new_y = body.pos.y + body.velocity_y;

    /* first solid row the feet would pass; scanning every crossed row keeps
    fast falls from tunnelling through one‑tile floors */
    let mut crossed = ty + 1..=feet_row_at(new_y);
    if let Some(floor) = crossed.find(|&row| world.get(tx, row).is_solid()) {
        let rest_y = tile_to_px(floor) - BLOCK_SIZE;
        body.fall_distance += rest_y - body.pos.y;
        body.pos.y = rest_y;
        return touch_down(body, safe, god_mode);
    }

    body.pos.y = new_y;
    body.fall_distance += body.velocity_y;
    FallOutcome::Airborne
}

fn touch_down(body: &mut PlayerBody, safe: f32, god_mode: bool) -> FallOutcome {
    let distance = body.fall_distance;
    if distance > safe + FALL_TOLERANCE && !god_mode {
        return FallOutcome::Fatal { distance };
    }
    body.land();
    FallOutcome::Landed { distance }
}
