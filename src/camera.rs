use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use deep_mine::constants::*;
use deep_mine::GameSession;

use crate::components::PlayerSprite;

/// pixel snapping helper – keeps the camera on whole pixels so sprites never
/// land on half‑pixels and shimmer
#[inline]
fn snap(v: f32) -> f32 {
    v.round()
}

/// mine pixels (top‑left, y down) → scene centre (y up)
#[inline]
pub fn scene_xy(top_left: Vec2) -> Vec2 {
    Vec2::new(top_left.x + BLOCK_SIZE * 0.5, -(top_left.y + BLOCK_SIZE * 0.5))
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// keep the player sprite on the simulated body
pub fn sync_player_sprite_system(
    session: Res<GameSession>,
    mut q: Query<&mut Transform, With<PlayerSprite>>,
) {
    let Ok(mut tf) = q.get_single_mut() else { return };
    let xy = scene_xy(session.body.pos);
    tf.translation.x = xy.x;
    tf.translation.y = xy.y;
}

/// simple camera follow, clamped to the mine's width and the surface
///
/// NOTE: runs in **PostUpdate**, after the player sprite has moved.
pub fn camera_follow_system(
    mut cam_q: Query<&mut Transform, (With<Camera>, Without<PlayerSprite>)>,
    player_q: Query<&Transform, With<PlayerSprite>>,
    window_q: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(mut cam_tf) = cam_q.get_single_mut() else { return };
    let Ok(player_tf) = player_q.get_single() else { return };
    let Ok(window) = window_q.get_single() else { return };

    let half_w = window.width() * 0.5;
    let half_h = window.height() * 0.5;
    let world_w = MAP_WIDTH as f32 * BLOCK_SIZE;

    let x = if world_w > 2.0 * half_w {
        player_tf.translation.x.clamp(half_w, world_w - half_w)
    } else {
        world_w * 0.5
    };
    // never show the sky above row 0
    let y = player_tf.translation.y.min(-half_h);

    cam_tf.translation.x = snap(x);
    cam_tf.translation.y = snap(y);
}
