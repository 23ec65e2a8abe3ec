#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Gridwalk.
//!
//! The world owns the immutable tile grid, the player position, and the
//! held-direction intent. Adapters and systems mutate it exclusively through
//! [`apply`], which executes [`Command`] values deterministically and
//! broadcasts [`Event`] values describing what changed.

mod grid;

pub use grid::{MapFormatError, MarkerNotFound, Tile, TileGrid};

use gridwalk_core::{Command, Event, Intent, TileCoord, WELCOME_BANNER};

/// Represents the authoritative Gridwalk world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    tile_grid: TileGrid,
    player: Player,
    intent: Intent,
    tick_index: u64,
}

impl World {
    /// Creates a world around the provided grid, spawning the player at the
    /// first occurrence of `spawn_marker`.
    ///
    /// There is no default spawn: a markerless map fails construction and
    /// the session must abort before entering the tick loop.
    pub fn new(tile_grid: TileGrid, spawn_marker: char) -> Result<Self, MarkerNotFound> {
        let spawn = tile_grid.find_first(spawn_marker)?;
        Ok(Self {
            banner: WELCOME_BANNER,
            tile_grid,
            player: Player { position: spawn },
            intent: Intent::idle(),
            tick_index: 0,
        })
    }
}

#[derive(Clone, Copy, Debug)]
struct Player {
    position: TileCoord,
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::HoldDirection { direction } => {
            if world.intent.hold(direction) {
                out_events.push(Event::IntentChanged {
                    direction,
                    held: true,
                });
            }
        }
        Command::ReleaseDirection { direction } => {
            if world.intent.release(direction) {
                out_events.push(Event::IntentChanged {
                    direction,
                    held: false,
                });
            }
        }
        Command::Tick => {
            world.tick_index = world.tick_index.saturating_add(1);
            out_events.push(Event::TimeAdvanced);
        }
        Command::MovePlayer { to } => {
            assert!(
                world.tile_grid.contains(to),
                "player destination ({}, {}) outside the {}x{} grid",
                to.column(),
                to.row(),
                world.tile_grid.columns(),
                world.tile_grid.rows()
            );

            let from = world.player.position;
            if from != to {
                world.player.position = to;
                out_events.push(Event::PlayerMoved { from, to });
            }
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::{TileGrid, World};
    use gridwalk_core::{Intent, TileCoord};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the world's tile grid.
    #[must_use]
    pub fn tile_grid(world: &World) -> &TileGrid {
        &world.tile_grid
    }

    /// Current grid position of the player entity.
    #[must_use]
    pub fn player_position(world: &World) -> TileCoord {
        world.player.position
    }

    /// Snapshot of the held-direction intent flags.
    #[must_use]
    pub fn intent(world: &World) -> Intent {
        world.intent
    }

    /// Number of simulation steps applied so far.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }
}
