//! deep‑mine simulation core
//!
//! Procedural mine generation plus the tile‑grid physics and digging rules.
//! Nothing in here draws, plays sound or polls input; the binary wires those
//! collaborators up with Bevy.

pub mod actions;
pub mod constants;
pub mod physics;
pub mod player;
pub mod progress;
pub mod save;
pub mod session;
pub mod shop;
pub mod terrain;
pub mod tile;
pub mod world_gen;

pub use actions::Direction;
pub use progress::Progress;
pub use session::{Action, GameEvent, GameSession};
pub use terrain::World;
pub use tile::{OreKind, Tile};
