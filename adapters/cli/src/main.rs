#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Gridwalk experience.
//!
//! Owns everything the core treats as external: option parsing, logging,
//! the tick loop cadence, and the terminal presentation of each frame.

mod terminal;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gridwalk_core::{Command, Event, TileCoord};
use gridwalk_rendering::{
    PlayerPresentation, RenderingBackend, Scene, TileGridPresentation, TilePresentation,
};
use gridwalk_system_bootstrap::{Bootstrap, Config};
use gridwalk_system_movement::Movement;
use gridwalk_world::{self as world, query, World};

use crate::terminal::TerminalBackend;

/// Command-line options understood by the Gridwalk binary.
#[derive(Debug, Parser)]
#[command(name = "gridwalk", about = "Tile-grid walking demo driven by held directions")]
struct Args {
    /// Path to the textual map file.
    #[arg(long, default_value = "map.txt")]
    map: PathBuf,

    /// Number of tile columns in the map.
    #[arg(long, default_value_t = 32)]
    columns: u32,

    /// Number of tile rows in the map.
    #[arg(long, default_value_t = 32)]
    rows: u32,

    /// Side length of one tile in world units.
    #[arg(long, default_value_t = 16.0)]
    tile_length: f32,

    /// Map symbol marking the player spawn tile.
    #[arg(long, default_value_t = 'p')]
    spawn_marker: char,

    /// Draw plain character glyphs instead of colored cells.
    #[arg(long)]
    plain: bool,
}

/// Entry point for the Gridwalk command-line interface.
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = Config::new(args.columns, args.rows, args.spawn_marker);
    let bootstrap = Bootstrap::default();
    let mut world = bootstrap
        .load_world(&args.map, &config)
        .with_context(|| format!("failed to load map {}", args.map.display()))?;

    println!("{}", bootstrap.welcome_banner(&world));
    let spawn = query::player_position(&world);
    log::info!(
        "loaded {}x{} map from {}, spawn at ({}, {})",
        args.columns,
        args.rows,
        args.map.display(),
        spawn.column(),
        spawn.row()
    );

    let grid = TileGridPresentation::new(args.columns, args.rows, args.tile_length)?;
    let scene = build_scene(&world, grid);
    let mut movement = Movement::default();

    let backend = TerminalBackend::new(io::stdin().lock(), io::stdout(), !args.plain);
    backend.run(scene, move |input, scene| {
        let mut events = Vec::new();
        for direction in input.pressed {
            world::apply(&mut world, Command::HoldDirection { direction }, &mut events);
        }
        for direction in input.released {
            world::apply(
                &mut world,
                Command::ReleaseDirection { direction },
                &mut events,
            );
        }
        world::apply(&mut world, Command::Tick, &mut events);

        let mut commands = Vec::new();
        movement.handle(
            &events,
            query::player_position(&world),
            query::intent(&world),
            query::tile_grid(&world),
            &mut commands,
        );
        for command in commands {
            world::apply(&mut world, command, &mut events);
        }

        for event in &events {
            if let Event::PlayerMoved { from, to } = event {
                log::debug!(
                    "player moved ({}, {}) -> ({}, {})",
                    from.column(),
                    from.row(),
                    to.column(),
                    to.row()
                );
            }
        }

        *scene = build_scene(&world, scene.grid);
    })
}

fn build_scene(world: &World, grid: TileGridPresentation) -> Scene {
    let tiles = query::tile_grid(world)
        .tiles()
        .map(|tile| TilePresentation::new(TileCoord::new(tile.column(), tile.row()), tile.kind()))
        .collect();
    let player = PlayerPresentation::at_tile(query::player_position(world), &grid);
    Scene::new(grid, tiles, player)
}
