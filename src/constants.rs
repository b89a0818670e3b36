/// -------- tiles & world size --------
pub const BLOCK_SIZE: f32 = 32.0;
pub const MAP_WIDTH: i32 = 50;
pub const INITIAL_MAP_HEIGHT: i32 = 60;

/// rows generated per lazy extension, and the lookahead that triggers one
pub const GENERATION_BATCH: i32 = 10;

/// rows at the top that are always air
pub const ENTRY_SHAFT_ROWS: i32 = 5;

/// -------- world‑gen odds --------
pub const SHAFT_CONTINUE_CHANCE: f64 = 0.8;
pub const SHAFT_SEED_CHANCE: f64 = 0.02;
pub const ORE_BASE_CHANCE: f64 = 0.005;
pub const ORE_DEPTH_DIVISOR: f64 = 300.0;
pub const ORE_ADJACENT_BONUS: f64 = 0.0001;
pub const STONE_CHANCE: f64 = 0.2;

/// -------- spawn --------
pub const SPAWN_COLUMN: i32 = MAP_WIDTH / 2;
pub const SPAWN_ROW: i32 = 4;

/// -------- player phys --------
pub const GRAVITY: f32 = 0.8; // px / tick²
pub const BASE_MOVE_SPEED: f32 = 8.0; // px / tick
pub const SPEED_PER_LEVEL: f32 = 2.0;

/// slack on the safe‑distance test so float accumulation never turns an
/// exact N‑row drop into a fatal one
pub const FALL_TOLERANCE: f32 = 1e-3;

/// -------- energy & economy --------
pub const ENERGY_MOVE: u32 = 1;
pub const INITIAL_EXPLOSION_COST: u32 = 5;
pub const BASE_ENERGY: u32 = 100;
pub const ENERGY_PER_BATTERY: u32 = 20;

/// -------- loop & window --------
pub const TICK_RATE_HZ: f64 = 60.0;
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// -------- colour‑variation --------
pub const COLOR_NOISE_SCALE: f64 = 0.05;
pub const COLOR_VARIATION_LEVELS: i32 = 4;
pub const COLOR_VARIATION_STRENGTH: f32 = 0.2;
