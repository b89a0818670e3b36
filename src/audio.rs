//! fire‑and‑forget sound: dig clicks & looping music
//!
//! Missing or undecodable assets only produce a Bevy asset warning; the
//! simulation never waits on audio.
use bevy::audio::{AudioSinkPlayback, Volume};
use bevy::prelude::*;

use deep_mine::{GameEvent, GameSession};

use crate::components::{MusicTrack, SimEvent};

#[derive(Resource)]
pub struct SoundAssets {
    pub dig: Handle<AudioSource>,
}

pub fn setup_audio(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    session: Res<GameSession>,
) {
    commands.insert_resource(SoundAssets {
        dig: asset_server.load("audio/dig.ogg"),
    });

    let gain = session.progress.settings.music_gain();
    commands.spawn((
        AudioPlayer::new(asset_server.load("audio/song.ogg")),
        PlaybackSettings::LOOP.with_volume(Volume::new(gain)),
        MusicTrack,
    ));
}

pub fn play_event_sounds_system(
    mut commands: Commands,
    mut events: EventReader<SimEvent>,
    sounds: Res<SoundAssets>,
    session: Res<GameSession>,
) {
    let gain = session.progress.settings.sfx_gain();
    for SimEvent(event) in events.read() {
        match event {
            GameEvent::Dug(_) if gain > 0.0 => {
                commands.spawn((
                    AudioPlayer::new(sounds.dig.clone()),
                    PlaybackSettings::DESPAWN.with_volume(Volume::new(gain)),
                ));
            }
            GameEvent::FatalFall { .. } => info!("game over"),
            _ => {}
        }
    }
}

/// follow the music slider live
pub fn music_volume_system(
    session: Res<GameSession>,
    sinks: Query<&AudioSink, With<MusicTrack>>,
) {
    if !session.is_changed() {
        return;
    }
    let gain = session.progress.settings.music_gain();
    for sink in &sinks {
        if (sink.volume() - gain).abs() > f32::EPSILON {
            sink.set_volume(gain);
        }
    }
}
