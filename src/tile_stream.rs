//! run‑time tile sprite streaming
//!
//! Only the tiles around the camera get sprites. Sprites leaving the view are
//! hidden and pooled; tiles that change (dug, blasted) are re‑tinted in place.
use std::collections::HashMap;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use noise::{NoiseFn, Perlin};

use deep_mine::constants::*;
use deep_mine::{GameSession, OreKind, Tile};

use crate::camera::scene_xy;
use crate::components::TileSprite;

/// extra tiles streamed beyond the window edge
const ACTIVE_MARGIN: i32 = 2;

/* ===========================================================
   resources
   =========================================================== */
#[derive(Resource, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ActiveRect {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl ActiveRect {
    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

#[derive(Resource, Default)]
pub struct TileSprites {
    live: HashMap<(i32, i32), (Entity, Tile)>,
    free: Vec<Entity>,
    /// session run the live sprites belong to
    run: u32,
}

#[derive(Resource)]
pub struct TileColorNoise(pub Perlin);

/* ===========================================================
   colour helpers
   =========================================================== */
fn base_rgb(tile: Tile) -> Option<Vec3> {
    let rgb = match tile {
        Tile::Air => return None,
        Tile::Shaft => Vec3::new(0.20, 0.20, 0.20),
        Tile::Dirt => Vec3::new(0.55, 0.27, 0.07),
        Tile::Stone => Vec3::new(0.50, 0.50, 0.50),
        Tile::Ore { kind, .. } => match kind {
            OreKind::Coal => Vec3::new(0.12, 0.12, 0.14),
            OreKind::Iron => Vec3::new(0.72, 0.55, 0.45),
            OreKind::Amethyst => Vec3::new(0.60, 0.30, 0.80),
            OreKind::Gold => Vec3::new(1.00, 0.84, 0.00),
        },
    };
    Some(rgb)
}

/// bucket‑based colour banding (for pixel‑arty look)
fn tile_color(noise: &Perlin, x: i32, y: i32, rgb: Vec3) -> Color {
    let raw = noise.get([x as f64 * COLOR_NOISE_SCALE, y as f64 * COLOR_NOISE_SCALE]) as f32;
    let step = (((raw + 1.0) * 0.5) * COLOR_VARIATION_LEVELS as f32)
        .floor()
        .clamp(0.0, (COLOR_VARIATION_LEVELS - 1) as f32);
    let norm = step / (COLOR_VARIATION_LEVELS as f32 - 1.0) * 2.0 - 1.0;
    let c = rgb * (1.0 + norm * COLOR_VARIATION_STRENGTH);
    Color::srgb(c.x.clamp(0.0, 1.0), c.y.clamp(0.0, 1.0), c.z.clamp(0.0, 1.0))
}

fn tile_bundle(noise: &Perlin, x: i32, y: i32, rgb: Vec3) -> (Sprite, Transform, TileSprite) {
    let xy = scene_xy(Vec2::new(x as f32, y as f32) * BLOCK_SIZE);
    (
        Sprite {
            color: tile_color(noise, x, y, rgb),
            custom_size: Some(Vec2::splat(BLOCK_SIZE)),
            ..default()
        },
        Transform::from_xyz(xy.x, xy.y, 0.0),
        TileSprite { x, y },
    )
}

/* ===========================================================
   update_active_rect_system
   =========================================================== */
pub fn update_active_rect_system(
    cam_q: Query<&Transform, With<Camera>>,
    window_q: Query<&Window, With<PrimaryWindow>>,
    mut rect: ResMut<ActiveRect>,
) {
    let Ok(cam_tf) = cam_q.get_single() else { return };
    let Ok(window) = window_q.get_single() else { return };

    let half_w = window.width() * 0.5;
    let half_h = window.height() * 0.5;
    let (cx, cy) = (cam_tf.translation.x, cam_tf.translation.y);

    let new = ActiveRect {
        min_x: (((cx - half_w) / BLOCK_SIZE).floor() as i32 - ACTIVE_MARGIN).max(0),
        max_x: (((cx + half_w) / BLOCK_SIZE).floor() as i32 + ACTIVE_MARGIN).min(MAP_WIDTH - 1),
        min_y: ((-(cy + half_h) / BLOCK_SIZE).floor() as i32 - ACTIVE_MARGIN).max(0),
        max_y: (-(cy - half_h) / BLOCK_SIZE).floor() as i32 + ACTIVE_MARGIN,
    };
    if *rect != new {
        *rect = new;
    }
}

/* ===========================================================
   stream_tiles_system – pool, reveal & re‑tint
   =========================================================== */
pub fn stream_tiles_system(
    mut commands: Commands,
    session: Res<GameSession>,
    rect: Res<ActiveRect>,
    noise: Res<TileColorNoise>,
    mut sprites: ResMut<TileSprites>,
) {
    let sprites = &mut *sprites;

    /* new run → every live sprite is stale */
    let stale_run = sprites.run != session.run();
    sprites.run = session.run();

    /* sprites leaving view (re‑pool) ------------------------------------- */
    sprites.live.retain(|&(x, y), (entity, _)| {
        if !stale_run && rect.contains(x, y) {
            return true;
        }
        commands.entity(*entity).insert(Visibility::Hidden);
        sprites.free.push(*entity);
        false
    });

    /* reveal / re‑tint everything in view -------------------------------- */
    for y in rect.min_y..=rect.max_y {
        for x in rect.min_x..=rect.max_x {
            let tile = session.world.get(x, y);
            let current = sprites.live.get(&(x, y)).copied();

            match (current, base_rgb(tile)) {
                (Some((_, shown)), Some(_)) if shown == tile => {}
                (Some((entity, _)), None) => {
                    commands.entity(entity).insert(Visibility::Hidden);
                    sprites.free.push(entity);
                    sprites.live.remove(&(x, y));
                }
                (Some((entity, _)), Some(rgb)) => {
                    commands.entity(entity).insert(tile_bundle(&noise.0, x, y, rgb));
                    sprites.live.insert((x, y), (entity, tile));
                }
                (None, Some(rgb)) => {
                    let bundle = tile_bundle(&noise.0, x, y, rgb);
                    let entity = match sprites.free.pop() {
                        Some(e) => {
                            commands.entity(e).insert((Visibility::Visible, bundle));
                            e
                        }
                        None => commands.spawn(bundle).id(),
                    };
                    sprites.live.insert((x, y), (entity, tile));
                }
                (None, None) => {}
            }
        }
    }
}
