//! upgrade shop: prices scale linearly with the level being bought
use thiserror::Error;

use crate::constants::ENERGY_PER_BATTERY;
use crate::progress::{Progress, UpgradeKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShopItem {
    pub kind: UpgradeKind,
    pub name: &'static str,
    pub base_cost: u32,
    pub description: &'static str,
}

pub const SHOP_ITEMS: [ShopItem; 4] = [
    ShopItem {
        kind: UpgradeKind::Battery,
        name: "Battery",
        base_cost: 50,
        description: "+20 energy",
    },
    ShopItem {
        kind: UpgradeKind::Explosion,
        name: "Explosives",
        base_cost: 100,
        description: "explosion cost -1",
    },
    ShopItem {
        kind: UpgradeKind::Springs,
        name: "Springs",
        base_cost: 50,
        description: "safe fall +1 block",
    },
    ShopItem {
        kind: UpgradeKind::Speed,
        name: "Speed",
        base_cost: 75,
        description: "slide speed +2",
    },
];

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("not enough coins: need {cost}, have {coins}")]
    InsufficientCoins { cost: u32, coins: u32 },
}

pub fn item(kind: UpgradeKind) -> &'static ShopItem {
    match kind {
        UpgradeKind::Battery => &SHOP_ITEMS[0],
        UpgradeKind::Explosion => &SHOP_ITEMS[1],
        UpgradeKind::Springs => &SHOP_ITEMS[2],
        UpgradeKind::Speed => &SHOP_ITEMS[3],
    }
}

/// price of the next level of `kind`
pub fn cost(progress: &Progress, kind: UpgradeKind) -> u32 {
    let level = progress.upgrades.level(kind);
    item(kind).base_cost.saturating_mul(level.saturating_add(1))
}

/// one shop line, e.g. `Battery (+20 energy): 50 coins`
pub fn listing(progress: &Progress, kind: UpgradeKind) -> String {
    let item = item(kind);
    format!("{} ({}): {} coins", item.name, item.description, cost(progress, kind))
}

/// buy one level of `kind`; returns the new level
pub fn purchase(progress: &mut Progress, kind: UpgradeKind) -> Result<u32, PurchaseError> {
    let cost = cost(progress, kind);
    if progress.coins < cost {
        return Err(PurchaseError::InsufficientCoins {
            cost,
            coins: progress.coins,
        });
    }
    progress.coins -= cost;

    let level = progress.upgrades.level_mut(kind);
    *level += 1;
    let level = *level;

    if kind == UpgradeKind::Battery {
        progress.energy = progress.energy.saturating_add(ENERGY_PER_BATTERY);
    }
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Upgrades;

    fn rich(coins: u32) -> Progress {
        Progress {
            coins,
            energy: 0,
            upgrades: Upgrades {
                battery: 0,
                explosion: 0,
                springs: 0,
                speed: 0,
            },
            ..Progress::default()
        }
    }

    #[test]
    fn cost_is_base_times_next_level() {
        let mut p = rich(0);
        assert_eq!(cost(&p, UpgradeKind::Battery), 50);
        assert_eq!(cost(&p, UpgradeKind::Explosion), 100);
        p.upgrades.speed = 2;
        assert_eq!(cost(&p, UpgradeKind::Speed), 225);
    }

    #[test]
    fn purchase_deducts_and_levels_up() {
        let mut p = rich(200);
        assert_eq!(purchase(&mut p, UpgradeKind::Springs), Ok(1));
        assert_eq!(p.coins, 150);
        assert_eq!(purchase(&mut p, UpgradeKind::Springs), Ok(2));
        assert_eq!(p.coins, 50);
        assert_eq!(p.upgrades.springs, 2);
    }

    #[test]
    fn battery_refills_energy_immediately() {
        let mut p = rich(50);
        purchase(&mut p, UpgradeKind::Battery).expect("affordable");
        assert_eq!(p.energy, 20);
        assert_eq!(p.energy_capacity(), 120);
    }

    #[test]
    fn explosion_upgrade_lowers_cost() {
        let mut p = rich(100);
        assert_eq!(p.explosion_cost(), 5);
        purchase(&mut p, UpgradeKind::Explosion).expect("affordable");
        assert_eq!(p.explosion_cost(), 4);
    }

    #[test]
    fn unaffordable_purchase_changes_nothing() {
        let mut p = rich(49);
        let err = purchase(&mut p, UpgradeKind::Battery).unwrap_err();
        assert_eq!(err, PurchaseError::InsufficientCoins { cost: 50, coins: 49 });
        assert_eq!(p.coins, 49);
        assert_eq!(p.upgrades.battery, 0);
        assert_eq!(err.to_string(), "not enough coins: need 50, have 49");
    }

    #[test]
    fn listing_shows_effect_and_next_price() {
        let mut p = rich(0);
        assert_eq!(listing(&p, UpgradeKind::Battery), "Battery (+20 energy): 50 coins");
        p.upgrades.springs = 1;
        assert_eq!(listing(&p, UpgradeKind::Springs), "Springs (safe fall +1 block): 100 coins");
    }

    #[test]
    fn catalogue_lookup_matches_kind() {
        for kind in UpgradeKind::ALL {
            assert_eq!(item(kind).kind, kind);
        }
    }
}
