//! keyboard → intents, shop purchases & settings toggles
use bevy::input::ButtonInput;
use bevy::prelude::*;

use deep_mine::progress::{UpgradeKind, VolumeChannel};
use deep_mine::shop;
use deep_mine::{Action, Direction, GameSession};

use crate::components::PendingAction;

/* ===========================================================
   movement / explosion (arrows, WASD, Space)
   =========================================================== */
fn action_for(keys: &ButtonInput<KeyCode>) -> Option<Action> {
    let pressed = |a: KeyCode, b: KeyCode| keys.just_pressed(a) || keys.just_pressed(b);

    if keys.just_pressed(KeyCode::Space) {
        Some(Action::Explode)
    } else if pressed(KeyCode::ArrowLeft, KeyCode::KeyA) {
        Some(Action::Move(Direction::Left))
    } else if pressed(KeyCode::ArrowRight, KeyCode::KeyD) {
        Some(Action::Move(Direction::Right))
    } else if pressed(KeyCode::ArrowUp, KeyCode::KeyW) {
        Some(Action::Move(Direction::Up))
    } else if pressed(KeyCode::ArrowDown, KeyCode::KeyS) {
        Some(Action::Move(Direction::Down))
    } else {
        None
    }
}

pub fn player_input_system(keys: Res<ButtonInput<KeyCode>>, mut pending: ResMut<PendingAction>) {
    if let Some(action) = action_for(&keys) {
        pending.0 = Some(action);
    }
}

/* ===========================================================
   shop hot‑keys (1‑4)
   =========================================================== */
pub fn shop_input_system(keys: Res<ButtonInput<KeyCode>>, mut session: ResMut<GameSession>) {
    const KEYS: [(KeyCode, UpgradeKind); 4] = [
        (KeyCode::Digit1, UpgradeKind::Battery),
        (KeyCode::Digit2, UpgradeKind::Explosion),
        (KeyCode::Digit3, UpgradeKind::Springs),
        (KeyCode::Digit4, UpgradeKind::Speed),
    ];

    for (key, kind) in KEYS {
        if !keys.just_pressed(key) {
            continue;
        }
        let offer = shop::listing(&session.progress, kind);
        match shop::purchase(&mut session.progress, kind) {
            Ok(level) => info!("bought {offer}, now level {level}"),
            Err(e) => info!("{offer} not bought: {e}"),
        }
    }
}

/* ===========================================================
   settings hot‑keys: G god mode, -/= sfx, [/] music
   =========================================================== */
const VOLUME_KEYS: [(KeyCode, VolumeChannel, i32); 4] = [
    (KeyCode::Minus, VolumeChannel::Sfx, -1),
    (KeyCode::Equal, VolumeChannel::Sfx, 1),
    (KeyCode::BracketLeft, VolumeChannel::Music, -1),
    (KeyCode::BracketRight, VolumeChannel::Music, 1),
];

pub fn settings_input_system(keys: Res<ButtonInput<KeyCode>>, mut session: ResMut<GameSession>) {
    let settings = &mut session.progress.settings;

    if keys.just_pressed(KeyCode::KeyG) {
        settings.toggle_god();
        info!("god mode {}", if settings.god { "on" } else { "off" });
    }
    for (key, channel, steps) in VOLUME_KEYS {
        if keys.just_pressed(key) {
            settings.adjust_volume(channel, steps);
            info!("sfx {} · music {}", settings.sfx, settings.music);
        }
    }
}
