//! coins, energy, depth record, upgrades & player settings
//!
//! This is also the persisted record: every field falls back to its default
//! when missing from a save file.
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// -------- upgrades --------
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Upgrades {
    pub battery: u32,
    pub explosion: u32,
    pub springs: u32,
    pub speed: u32,
}

impl Default for Upgrades {
    fn default() -> Self {
        Self {
            battery: 1,
            explosion: 1,
            springs: 2,
            speed: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpgradeKind {
    Battery,
    Explosion,
    Springs,
    Speed,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 4] = [
        UpgradeKind::Battery,
        UpgradeKind::Explosion,
        UpgradeKind::Springs,
        UpgradeKind::Speed,
    ];

    pub fn key(self) -> &'static str {
        match self {
            UpgradeKind::Battery => "battery",
            UpgradeKind::Explosion => "explosion",
            UpgradeKind::Springs => "springs",
            UpgradeKind::Speed => "speed",
        }
    }
}

impl Upgrades {
    pub fn level(&self, kind: UpgradeKind) -> u32 {
        match kind {
            UpgradeKind::Battery => self.battery,
            UpgradeKind::Explosion => self.explosion,
            UpgradeKind::Springs => self.springs,
            UpgradeKind::Speed => self.speed,
        }
    }

    pub fn level_mut(&mut self, kind: UpgradeKind) -> &mut u32 {
        match kind {
            UpgradeKind::Battery => &mut self.battery,
            UpgradeKind::Explosion => &mut self.explosion,
            UpgradeKind::Springs => &mut self.springs,
            UpgradeKind::Speed => &mut self.speed,
        }
    }
}

/// -------- settings --------
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0..=100
    pub sfx: u32,
    /// 0..=100
    pub music: u32,
    pub god: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sfx: 70,
            music: 70,
            god: false,
        }
    }
}

pub const VOLUME_STEP: i32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeChannel {
    Sfx,
    Music,
}

impl Settings {
    pub fn sanitized(mut self) -> Self {
        self.sfx = self.sfx.min(100);
        self.music = self.music.min(100);
        self
    }

    /// nudge a volume by `steps` × 5, clamped to 0..=100
    pub fn adjust_volume(&mut self, channel: VolumeChannel, steps: i32) {
        let slot = match channel {
            VolumeChannel::Sfx => &mut self.sfx,
            VolumeChannel::Music => &mut self.music,
        };
        *slot = ((*slot).min(100) as i32 + steps * VOLUME_STEP).clamp(0, 100) as u32;
    }

    pub fn toggle_god(&mut self) {
        self.god = !self.god;
    }

    pub fn sfx_gain(&self) -> f32 {
        self.sfx as f32 / 100.0
    }

    pub fn music_gain(&self) -> f32 {
        self.music as f32 / 100.0
    }
}

/// -------- progress --------
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    pub coins: u32,
    pub max_depth: i32,
    pub energy: u32,
    pub upgrades: Upgrades,
    pub settings: Settings,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            coins: 0,
            max_depth: 0,
            energy: 10,
            upgrades: Upgrades::default(),
            settings: Settings::default(),
        }
    }
}

impl Progress {
    pub fn sanitized(mut self) -> Self {
        self.settings = self.settings.sanitized();
        self
    }

    /// energy a fresh run starts with
    pub fn energy_capacity(&self) -> u32 {
        BASE_ENERGY + self.upgrades.battery * ENERGY_PER_BATTERY
    }

    /// energy price of one explosion, never below 1
    pub fn explosion_cost(&self) -> u32 {
        INITIAL_EXPLOSION_COST
            .saturating_sub(self.upgrades.explosion)
            .max(1)
    }

    /// sideways slide speed in px / tick
    pub fn move_speed(&self) -> f32 {
        BASE_MOVE_SPEED + self.upgrades.speed as f32 * SPEED_PER_LEVEL
    }

    #[inline]
    pub fn god_mode(&self) -> bool {
        self.settings.god
    }

    /// take `cost` energy if there is enough; never goes below zero
    pub fn try_spend_energy(&mut self, cost: u32) -> bool {
        if self.energy < cost {
            return false;
        }
        self.energy -= cost;
        true
    }

    pub fn credit(&mut self, coins: u32) {
        self.coins = self.coins.saturating_add(coins);
    }

    pub fn record_depth(&mut self, row: i32) {
        self.max_depth = self.max_depth.max(row);
    }
}
