//! deep‑mine: dig down, collect ore, don't fall too far
//!
//! Bevy shell around the `deep_mine` simulation. The simulation ticks in
//! **FixedUpdate** at 60 Hz; drawing, sound and the HUD follow in Update.

mod audio;
mod camera;
mod components;
mod hud;
mod input;
mod tile_stream;

use bevy::prelude::*;
use bevy::window::WindowCloseRequested;
use noise::Perlin;
use rand::Rng;

use deep_mine::constants::*;
use deep_mine::save::SaveStore;
use deep_mine::{GameEvent, GameSession};

use audio::{music_volume_system, play_event_sounds_system, setup_audio};
use camera::{camera_follow_system, scene_xy, setup_camera, sync_player_sprite_system};
use components::{PendingAction, PlayerSprite, Saves, SimEvent};
use hud::{setup_hud, update_hud_system};
use input::{player_input_system, settings_input_system, shop_input_system};
use tile_stream::{
    stream_tiles_system, update_active_rect_system, ActiveRect, TileColorNoise, TileSprites,
};

/* ------------------------------------------------------------------------ */
/* startup                                                                  */
/* ------------------------------------------------------------------------ */
fn seed_from_env() -> u64 {
    match std::env::var("DEEP_MINE_SEED").map(|s| s.parse::<u64>()) {
        Ok(Ok(seed)) => seed,
        Ok(Err(e)) => {
            warn!("ignoring DEEP_MINE_SEED: {e}");
            rand::thread_rng().gen()
        }
        Err(_) => rand::thread_rng().gen(),
    }
}

fn setup_session(mut commands: Commands) {
    let saves = SaveStore::from_env();
    let progress = saves.load();
    let seed = seed_from_env();
    info!("save file {} · seed {}", saves.path().display(), seed);

    let session = GameSession::new(progress, seed);
    let xy = scene_xy(session.body.pos);
    commands.spawn((
        Sprite {
            color: Color::srgb(0.15, 0.35, 0.95),
            custom_size: Some(Vec2::splat(BLOCK_SIZE)),
            ..default()
        },
        Transform::from_xyz(xy.x, xy.y, 1.0),
        PlayerSprite,
    ));

    commands.insert_resource(session);
    commands.insert_resource(Saves(saves));
    commands.insert_resource(TileColorNoise(Perlin::new(rand::thread_rng().gen())));
}

/* ------------------------------------------------------------------------ */
/* fixed‑rate simulation                                                    */
/* ------------------------------------------------------------------------ */
fn simulation_tick_system(
    mut session: ResMut<GameSession>,
    mut pending: ResMut<PendingAction>,
    mut events: EventWriter<SimEvent>,
) {
    let action = pending.0.take();
    for event in session.tick(action) {
        events.send(SimEvent(event));
    }
}

/* ------------------------------------------------------------------------ */
/* persistence                                                              */
/* ------------------------------------------------------------------------ */
fn store(saves: &SaveStore, session: &GameSession) {
    if let Err(e) = saves.save(&session.progress) {
        warn!("could not save progress to {}: {e}", saves.path().display());
    }
}

fn autosave_on_death_system(
    mut events: EventReader<SimEvent>,
    saves: Res<Saves>,
    session: Res<GameSession>,
) {
    if events
        .read()
        .any(|SimEvent(e)| matches!(e, GameEvent::FatalFall { .. }))
    {
        store(&saves, &session);
    }
}

fn quit_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut closed: EventReader<WindowCloseRequested>,
    saves: Res<Saves>,
    session: Res<GameSession>,
    mut exit: EventWriter<AppExit>,
) {
    let close_requested = closed.read().count() > 0;
    if keys.just_pressed(KeyCode::Escape) || close_requested {
        store(&saves, &session);
        info!("leaving after {} ticks", session.ticks());
        exit.send(AppExit::Success);
    }
}

/* ------------------------------------------------------------------------ */
/* main                                                                     */
/* ------------------------------------------------------------------------ */
fn main() {
    App::new()
        /* bevy core ------------------------------------------------------- */
        .insert_resource(ClearColor(Color::srgb(0.05, 0.04, 0.03)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "deep mine".into(),
                resolution: (SCREEN_WIDTH, SCREEN_HEIGHT).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))

        /* resources & events ---------------------------------------------- */
        .init_resource::<PendingAction>()
        .init_resource::<TileSprites>()
        .init_resource::<ActiveRect>()
        .add_event::<SimEvent>()

        /* startup systems ------------------------------------------------- */
        .add_systems(Startup, (setup_session, setup_camera, setup_hud))
        .add_systems(Startup, setup_audio.after(setup_session))

        /* simulation ------------------------------------------------------ */
        .add_systems(FixedUpdate, simulation_tick_system)

        /* frame‑update systems ------------------------------------------- */
        .add_systems(
            Update,
            (
                /* input --------------------------------------------------- */
                player_input_system,           // arrows / WASD / Space
                shop_input_system,             // 1‑4 upgrades
                settings_input_system,         // G, -/=, [/]

                /* presentation -------------------------------------------- */
                sync_player_sprite_system,
                stream_tiles_system,           // pool, reveal & re‑tint
                update_hud_system,
                play_event_sounds_system,
                music_volume_system,

                /* persistence --------------------------------------------- */
                autosave_on_death_system,
                quit_system,
            ),
        )

        /* post‑update (camera) -------------------------------------------- */
        .add_systems(
            PostUpdate,
            (camera_follow_system, update_active_rect_system).chain(),
        )
        .run();
}
