use bevy::prelude::*;

use deep_mine::GameSession;

use crate::components::HudText;

pub fn setup_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

pub fn hud_line(session: &GameSession) -> String {
    let p = &session.progress;
    let mut line = format!(
        "Coins: {}  Energy: {}  Depth: {}  Best: {}  Blast: {}  Sfx: {}  Music: {}",
        p.coins,
        p.energy,
        session.depth(),
        p.max_depth,
        session.explosion_cost(),
        p.settings.sfx,
        p.settings.music,
    );
    if p.god_mode() {
        line.push_str("  [GOD]");
    }
    line
}

pub fn update_hud_system(session: Res<GameSession>, mut q: Query<&mut Text, With<HudText>>) {
    if !session.is_changed() {
        return;
    }
    for mut text in &mut q {
        text.0 = hud_line(&session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deep_mine::Progress;

    #[test]
    fn hud_shows_core_counters() {
        let mut session = GameSession::new(Progress::default(), 1);
        session.progress.coins = 12;
        let line = hud_line(&session);
        assert!(line.starts_with("Coins: 12  Energy: 120  Depth: 4"));
        assert!(line.contains("Sfx: 70  Music: 70"));
        assert!(!line.contains("GOD"));

        session
            .progress
            .settings
            .adjust_volume(deep_mine::progress::VolumeChannel::Music, -2);
        assert!(hud_line(&session).contains("Music: 60"));

        session.progress.settings.god = true;
        assert!(hud_line(&session).ends_with("[GOD]"));
    }
}
