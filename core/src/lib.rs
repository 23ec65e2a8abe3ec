#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Gridwalk engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Gridwalk.";

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Records that the input collaborator began holding a direction.
    HoldDirection {
        /// Direction whose intent flag should be raised.
        direction: Direction,
    },
    /// Records that the input collaborator released a direction.
    ReleaseDirection {
        /// Direction whose intent flag should be cleared.
        direction: Direction,
    },
    /// Advances the simulation by one discrete step.
    Tick,
    /// Commits a reconciled player position produced by the movement system.
    MovePlayer {
        /// Destination tile for the player, already clamped and collision
        /// checked by the movement system.
        to: TileCoord,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Indicates that the simulation advanced by one step.
    TimeAdvanced,
    /// Reports that an intent flag transitioned between held and released.
    IntentChanged {
        /// Direction whose flag changed.
        direction: Direction,
        /// Whether the direction is held after the transition.
        held: bool,
    },
    /// Confirms that the player moved between two tiles.
    PlayerMoved {
        /// Tile the player occupied before the step resolved.
        from: TileCoord,
        /// Tile the player occupies after the step resolved.
        to: TileCoord,
    },
}

/// Held-direction axes available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
}

impl Direction {
    /// Enumerates every direction in a fixed, deterministic order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

/// Four independent held-direction flags describing continuous input.
///
/// Flags are mutually independent: opposing directions may be held at once
/// (their steps cancel), and diagonal intent applies both axes in the same
/// tick. The movement system only reads the flags; clearing them is the
/// input collaborator's responsibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intent {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

impl Intent {
    /// Creates an intent with every flag cleared.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            left: false,
            right: false,
            up: false,
            down: false,
        }
    }

    /// Raises the flag for the provided direction.
    ///
    /// Returns whether the flag actually changed, so callers can emit
    /// transition events without duplicates when a key auto-repeats.
    pub fn hold(&mut self, direction: Direction) -> bool {
        let flag = self.flag_mut(direction);
        let changed = !*flag;
        *flag = true;
        changed
    }

    /// Clears the flag for the provided direction.
    ///
    /// Returns whether the flag actually changed.
    pub fn release(&mut self, direction: Direction) -> bool {
        let flag = self.flag_mut(direction);
        let changed = *flag;
        *flag = false;
        changed
    }

    /// Reports whether the provided direction is currently held.
    #[must_use]
    pub const fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    /// Reports whether no direction is held at all.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        !(self.left || self.right || self.up || self.down)
    }

    fn flag_mut(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }
}

/// Location of a single grid tile expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileCoord {
    column: u32,
    row: u32,
}

impl TileCoord {
    /// Creates a new grid tile coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the tile.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the tile.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Terrain classification assigned to every tile in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Walkable ground.
    Floor,
    /// Solid terrain that blocks entity movement.
    Wall,
    /// Unrecognised map symbol; traversable and without an assigned
    /// appearance.
    Blank,
}

impl TileKind {
    /// Classifies a map-file symbol.
    ///
    /// The spawn marker sits on ordinary floor rather than a distinct
    /// terrain, so `'p'` classifies as [`TileKind::Floor`].
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Self {
        match symbol {
            'x' => Self::Wall,
            ' ' | 'p' => Self::Floor,
            _ => Self::Blank,
        }
    }

    /// Reports whether the kind blocks entity movement.
    ///
    /// Derived purely from the terrain kind; only walls block.
    #[must_use]
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }
}
