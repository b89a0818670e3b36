//! tile kinds & the depth → ore catalogue
use serde::{Deserialize, Serialize};

/// -------- ores --------
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OreKind {
    Coal,
    Iron,
    Amethyst,
    Gold,
}

impl OreKind {
    pub fn name(self) -> &'static str {
        match self {
            OreKind::Coal => "coal",
            OreKind::Iron => "iron",
            OreKind::Amethyst => "amethyst",
            OreKind::Gold => "gold",
        }
    }
}

/// -------- tiles --------
///
/// Tiles are replaced wholesale; nothing patches one in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Air,
    /// pre‑opened tunnel, traversable, never dug back to solid
    Shaft,
    Dirt,
    /// only explosions clear stone
    Stone,
    Ore { kind: OreKind, value: u32 },
}

impl Tile {
    /// can the player fall through / stand inside this tile?
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, Tile::Air | Tile::Shaft)
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        !self.is_open()
    }

    #[inline]
    pub fn is_ore(self) -> bool {
        matches!(self, Tile::Ore { .. })
    }

    /// coins credited when this tile is dug or blasted
    #[inline]
    pub fn coin_value(self) -> u32 {
        match self {
            Tile::Ore { value, .. } => value,
            _ => 0,
        }
    }
}

/// ore found at a given row; a pure step function of depth
pub fn ore_for_depth(y: i32) -> Tile {
    let (kind, value) = match y {
        y if y < 15 => (OreKind::Coal, 1),
        y if y < 30 => (OreKind::Iron, 3),
        y if y < 50 => (OreKind::Amethyst, 5),
        _ => (OreKind::Gold, 7),
    };
    Tile::Ore { kind, value }
}
