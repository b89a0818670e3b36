use bevy::prelude::*;

use deep_mine::save::SaveStore;
use deep_mine::{Action, GameEvent};

/* ===========================================================
   player
   =========================================================== */
#[derive(Component)]
pub struct PlayerSprite;

/* ===========================================================
   terrain helper components
   =========================================================== */
#[derive(Component)]
pub struct TileSprite {
    pub x: i32,
    pub y: i32,
}

/* ===========================================================
   hud & audio
   =========================================================== */
#[derive(Component)]
pub struct HudText;

#[derive(Component)]
pub struct MusicTrack;

/* ===========================================================
   simulation plumbing
   =========================================================== */

/// latest intent from the keyboard, consumed by the next fixed tick
#[derive(Resource, Default)]
pub struct PendingAction(pub Option<Action>);

/// simulation events re‑broadcast to the presentation systems
#[derive(Event, Clone, Debug)]
pub struct SimEvent(pub GameEvent);

#[derive(Resource, Deref)]
pub struct Saves(pub SaveStore);
