//! the digger's body: position, fall state & sideways slide
use bevy::math::Vec2;

use crate::constants::*;
use crate::terrain::{px_to_tile, tile_to_px};

/// Position is the top‑left corner of the player's tile‑sized box, in pixels,
/// with y growing downward.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerBody {
    pub pos: Vec2,
    pub velocity_y: f32,
    pub falling: bool,
    /// total descent since last standing on something
    pub fall_distance: f32,
    pub target_x: f32,
    pub sliding: bool,
}

impl PlayerBody {
    pub fn at_tile(x: i32, y: i32) -> Self {
        let pos = Vec2::new(tile_to_px(x), tile_to_px(y));
        Self {
            pos,
            velocity_y: 0.0,
            falling: false,
            fall_distance: 0.0,
            target_x: pos.x,
            sliding: false,
        }
    }

    pub fn spawn() -> Self {
        Self::at_tile(SPAWN_COLUMN, SPAWN_ROW)
    }

    #[inline]
    pub fn column(&self) -> i32 {
        px_to_tile(self.pos.x)
    }

    /// row the player's box currently occupies
    #[inline]
    pub fn row(&self) -> i32 {
        px_to_tile(self.pos.y)
    }

    /// row directly under the player's feet
    #[inline]
    pub fn feet_row(&self) -> i32 {
        feet_row_at(self.pos.y)
    }

    /// moves and digs are refused mid‑fall and mid‑slide
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.falling || self.sliding
    }

    pub fn begin_slide(&mut self, column: i32) {
        self.target_x = tile_to_px(column);
        self.sliding = true;
    }

    /// one tick of the sideways slide; snaps once within a single step
    pub fn advance_slide(&mut self, speed: f32) {
        if !self.sliding {
            return;
        }
        let dx = self.target_x - self.pos.x;
        if dx.abs() < speed {
            self.pos.x = self.target_x;
            self.sliding = false;
        } else {
            self.pos.x += speed.copysign(dx);
        }
    }

    pub fn land(&mut self) {
        self.falling = false;
        self.velocity_y = 0.0;
        self.fall_distance = 0.0;
    }
}

impl Default for PlayerBody {
    fn default() -> Self {
        Self::spawn()
    }
}

#[inline]
pub fn feet_row_at(y: f32) -> i32 {
    px_to_tile(y + BLOCK_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_sits_in_the_entry_shaft() {
        let body = PlayerBody::spawn();
        assert_eq!(body.column(), MAP_WIDTH / 2);
        assert_eq!(body.row(), SPAWN_ROW);
        assert_eq!(body.feet_row(), SPAWN_ROW + 1);
        assert!(!body.is_busy());
    }

    #[test]
    fn slide_steps_then_snaps_to_target() {
        let mut body = PlayerBody::at_tile(3, 6);
        body.begin_slide(4);
        assert!(body.is_busy());

        body.advance_slide(12.0);
        assert_eq!(body.pos.x, 3.0 * BLOCK_SIZE + 12.0);
        body.advance_slide(12.0);
        assert_eq!(body.pos.x, 3.0 * BLOCK_SIZE + 24.0);
        assert!(body.sliding);

        // 8 px left, less than one step
        body.advance_slide(12.0);
        assert_eq!(body.pos.x, 4.0 * BLOCK_SIZE);
        assert!(!body.sliding);
        assert_eq!(body.column(), 4);
    }

    #[test]
    fn slide_works_leftward() {
        let mut body = PlayerBody::at_tile(3, 6);
        body.begin_slide(2);
        for _ in 0..10 {
            body.advance_slide(BASE_MOVE_SPEED);
        }
        assert_eq!(body.pos.x, 2.0 * BLOCK_SIZE);
        assert!(!body.sliding);
    }

    #[test]
    fn slide_is_a_no_op_when_idle() {
        let mut body = PlayerBody::at_tile(3, 6);
        body.advance_slide(8.0);
        assert_eq!(body.pos.x, 3.0 * BLOCK_SIZE);
    }
}
