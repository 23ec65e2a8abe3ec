#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Bootstrap system that assembles a ready-to-run Gridwalk session.

use std::path::Path;

use gridwalk_world::{query, MapFormatError, MarkerNotFound, TileGrid, World};
use thiserror::Error;

const DEFAULT_COLUMNS: u32 = 32;
const DEFAULT_ROWS: u32 = 32;
const DEFAULT_SPAWN_MARKER: char = 'p';

/// Configuration parameters required to assemble a session.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    columns: u32,
    rows: u32,
    spawn_marker: char,
}

impl Config {
    /// Creates a new configuration with explicit dimensions and marker.
    #[must_use]
    pub const fn new(columns: u32, rows: u32, spawn_marker: char) -> Self {
        Self {
            columns,
            rows,
            spawn_marker,
        }
    }

    /// Number of tile columns expected in the map.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows expected in the map.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Map symbol marking the player spawn tile.
    #[must_use]
    pub const fn spawn_marker(&self) -> char {
        self.spawn_marker
    }
}

impl Default for Config {
    /// Reference deployment defaults: a 32x32 grid spawning at `'p'`.
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SPAWN_MARKER)
    }
}

/// Errors raised while assembling a session.
///
/// Both variants are fatal: the session aborts before entering the tick
/// loop, and no retry or fallback exists.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The map source was malformed or unreadable.
    #[error(transparent)]
    MapFormat(#[from] MapFormatError),
    /// The spawn marker was absent from the map.
    #[error(transparent)]
    SpawnMarker(#[from] MarkerNotFound),
}

/// Pure bootstrap system that prepares the Gridwalk experience.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Loads the map file at `path` and assembles a world around it.
    pub fn load_world(&self, path: &Path, config: &Config) -> Result<World, BootstrapError> {
        let grid = TileGrid::load(path, config.columns(), config.rows())?;
        Ok(World::new(grid, config.spawn_marker())?)
    }

    /// Assembles a world from an in-memory map source.
    pub fn world_from_source(
        &self,
        source: &str,
        config: &Config,
    ) -> Result<World, BootstrapError> {
        let grid = TileGrid::parse(source, config.columns(), config.rows())?;
        Ok(World::new(grid, config.spawn_marker())?)
    }

    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner<'world>(&self, world: &'world World) -> &'world str {
        query::welcome_banner(world)
    }

    /// Exposes the tile grid configuration required for rendering.
    #[must_use]
    pub fn tile_grid<'world>(&self, world: &'world World) -> &'world TileGrid {
        query::tile_grid(world)
    }
}
