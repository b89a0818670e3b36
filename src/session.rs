//! one game session: world + body + progress, advanced a tick at a time
//!
//! The session is the single owner of all mutable game state. It does no
//! I/O; callers feed it at most one action per tick and react to the
//! returned events (sound, saving, logging).
use bevy::log::{debug, info};
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::actions::{dig_move, explode, BlastOutcome, DigOutcome, Direction};
use crate::physics::{self, FallOutcome};
use crate::player::PlayerBody;
use crate::progress::Progress;
use crate::terrain::World;
use crate::tile::Tile;

/// a discrete player intent, at most one per tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Explode,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Dug(DigOutcome),
    Exploded(BlastOutcome),
    Landed { distance: f32 },
    /// the run ended; the session has already been rebuilt
    FatalFall { distance: f32 },
    WorldExtended { frontier: i32 },
}

#[derive(Resource)]
pub struct GameSession {
    pub world: World,
    pub body: PlayerBody,
    pub progress: Progress,
    /// hands out one world seed per run
    seeds: StdRng,
    run: u32,
    tick: u64,
}

impl GameSession {
    /// new session; the first run starts immediately
    pub fn new(progress: Progress, seed: u64) -> Self {
        let mut seeds = StdRng::seed_from_u64(seed);
        let world = World::from_seed(seeds.gen());
        let mut session = Self {
            world,
            body: PlayerBody::spawn(),
            progress,
            seeds,
            run: 1,
            tick: 0,
        };
        session.refill();
        session
    }

    /// session around a prepared world, first run already in progress
    pub fn with_world(world: World, body: PlayerBody, progress: Progress) -> Self {
        Self {
            world,
            body,
            progress,
            seeds: StdRng::seed_from_u64(0),
            run: 1,
            tick: 0,
        }
    }

    /// throw away world and body and start over; progress carries across
    pub fn restart(&mut self) {
        self.world = World::from_seed(self.seeds.gen());
        self.body = PlayerBody::spawn();
        self.run += 1;
        self.refill();
        info!("run {} started", self.run);
    }

    fn refill(&mut self) {
        self.progress.energy = self.progress.energy_capacity();
        self.progress.record_depth(self.body.row());
    }

    #[inline]
    pub fn run(&self) -> u32 {
        self.run
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// apply one action outside the tick loop
    pub fn apply(&mut self, action: Action) -> Option<GameEvent> {
        match action {
            Action::Move(dir) => {
                let out = dig_move(&mut self.world, &mut self.body, &mut self.progress, dir)?;
                if let Tile::Ore { kind, value } = out.dug {
                    debug!("mined {} at ({}, {}) for {} coins", kind.name(), out.x, out.y, value);
                }
                Some(GameEvent::Dug(out))
            }
            Action::Explode => {
                explode(&mut self.world, &self.body, &mut self.progress).map(GameEvent::Exploded)
            }
        }
    }

    /// action → physics → slide, then keep the mine ahead of the player
    pub fn tick(&mut self, action: Option<Action>) -> Vec<GameEvent> {
        self.tick += 1;
        let mut events = Vec::new();
        let frontier = self.world.frontier();

        if let Some(event) = action.and_then(|a| self.apply(a)) {
            events.push(event);
        }

        let springs = self.progress.upgrades.springs;
        let god = self.progress.god_mode();
        match physics::step(&self.world, &mut self.body, springs, god) {
            FallOutcome::Fatal { distance } => {
                info!(
                    "fatal fall of {:.1}px at row {} (safe {:.1}px)",
                    distance,
                    self.body.feet_row(),
                    physics::safe_distance(springs)
                );
                self.restart();
                events.push(GameEvent::FatalFall { distance });
                return events;
            }
            FallOutcome::Landed { distance } => events.push(GameEvent::Landed { distance }),
            FallOutcome::Grounded | FallOutcome::Airborne => {}
        }

        self.body.advance_slide(self.progress.move_speed());
        self.world.ensure_depth(self.body.feet_row());

        if self.world.frontier() != frontier {
            events.push(GameEvent::WorldExtended {
                frontier: self.world.frontier(),
            });
        }
        events
    }

    /// current explosion price, for HUDs
    pub fn explosion_cost(&self) -> u32 {
        self.progress.explosion_cost()
    }

    /// tile row the player stands in
    pub fn depth(&self) -> i32 {
        self.body.row()
    }
}
