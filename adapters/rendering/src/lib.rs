#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Gridwalk adapters.
//!
//! The core never calls into rendering: adapters pull world state through
//! queries, distil it into a [`Scene`], and hand the scene to a
//! [`RenderingBackend`] together with an update closure fed with per-frame
//! [`FrameInput`].

use anyhow::Result as AnyResult;
use glam::Vec2;
use gridwalk_core::{Direction, TileCoord, TileKind};
use std::{error::Error, fmt};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Byte RGB components of the color, alpha discarded.
    #[must_use]
    pub fn to_rgb_u8(self) -> (u8, u8, u8) {
        (
            (self.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}

/// Fill color applied to wall tiles.
pub const WALL_COLOR: Color = Color::from_rgb_u8(0xb4, 0x4b, 0x3c);

/// Fill color applied to floor tiles.
pub const FLOOR_COLOR: Color = Color::from_rgb_u8(0xd9, 0xd3, 0xc0);

/// Fill color applied to the player object.
pub const PLAYER_COLOR: Color = Color::from_rgb_u8(0x11, 0x11, 0x11);

/// Returns the fill color for a tile kind.
///
/// Blank tiles have no assigned appearance, so backends draw nothing for
/// them.
#[must_use]
pub fn tile_color(kind: TileKind) -> Option<Color> {
    match kind {
        TileKind::Wall => Some(WALL_COLOR),
        TileKind::Floor => Some(FLOOR_COLOR),
        TileKind::Blank => None,
    }
}

/// Describes how the tile grid maps onto screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileGridPresentation {
    columns: u32,
    rows: u32,
    tile_length: f32,
}

impl TileGridPresentation {
    /// Creates a new tile grid presentation descriptor.
    pub fn new(columns: u32, rows: u32, tile_length: f32) -> Result<Self, RenderingError> {
        if tile_length <= 0.0 {
            return Err(RenderingError::InvalidTileLength { tile_length });
        }

        Ok(Self {
            columns,
            rows,
            tile_length,
        })
    }

    /// Number of tile columns laid out in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows laid out in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Side length of a single square tile expressed in world units.
    #[must_use]
    pub const fn tile_length(&self) -> f32 {
        self.tile_length
    }

    /// Total width of the grid measured in world units.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.columns as f32 * self.tile_length
    }

    /// Total height of the grid measured in world units.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.tile_length
    }

    /// Screen-space origin of the tile at the provided coordinate.
    #[must_use]
    pub fn tile_origin(&self, coord: TileCoord) -> Vec2 {
        Vec2::new(
            coord.column() as f32 * self.tile_length,
            coord.row() as f32 * self.tile_length,
        )
    }
}

/// Single tile prepared for presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TilePresentation {
    /// Grid coordinate the tile occupies.
    pub coord: TileCoord,
    /// Terrain classification that selects the tile's appearance.
    pub kind: TileKind,
}

impl TilePresentation {
    /// Creates a new tile presentation descriptor.
    #[must_use]
    pub const fn new(coord: TileCoord, kind: TileKind) -> Self {
        Self { coord, kind }
    }
}

/// Player entity prepared for presentation.
///
/// The screen rectangle is derived from the grid position and recomputed
/// every frame; it carries no simulation state of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerPresentation {
    position: TileCoord,
    origin: Vec2,
    size: Vec2,
}

impl PlayerPresentation {
    /// Derives the player presentation for a grid position.
    #[must_use]
    pub fn at_tile(position: TileCoord, grid: &TileGridPresentation) -> Self {
        Self {
            position,
            origin: grid.tile_origin(position),
            size: Vec2::splat(grid.tile_length()),
        }
    }

    /// Grid tile the player currently occupies.
    #[must_use]
    pub const fn position(&self) -> TileCoord {
        self.position
    }

    /// Screen-space origin of the player rectangle.
    #[must_use]
    pub const fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Screen-space size of the player rectangle.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        self.size
    }
}

/// Complete frame snapshot handed to rendering backends.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Tile grid layout that frames the play area.
    pub grid: TileGridPresentation,
    /// Tiles composing the play area, in row-major order.
    pub tiles: Vec<TilePresentation>,
    /// Player entity to draw above the tile layer.
    pub player: PlayerPresentation,
}

impl Scene {
    /// Creates a new scene descriptor.
    #[must_use]
    pub fn new(
        grid: TileGridPresentation,
        tiles: Vec<TilePresentation>,
        player: PlayerPresentation,
    ) -> Self {
        Self {
            grid,
            tiles,
            player,
        }
    }
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Directions that transitioned to held since the previous frame.
    pub pressed: Vec<Direction>,
    /// Directions that transitioned to released since the previous frame.
    pub released: Vec<Direction>,
    /// Whether the adapter detected a quit request on this frame.
    pub quit_requested: bool,
}

/// Contract implemented by presentation backends.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives per-frame input captured
    /// by the adapter and may mutate the scene before it is rendered,
    /// allowing adapters to advance world snapshots deterministically.
    fn run<F>(self, scene: Scene, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(FrameInput, &mut Scene) + 'static;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq)]
pub enum RenderingError {
    /// Tile length must be positive to avoid a zero-sized grid.
    InvalidTileLength {
        /// Provided tile length that failed validation.
        tile_length: f32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileLength { tile_length } => {
                write!(f, "tile_length must be positive (received {tile_length})")
            }
        }
    }
}

impl Error for RenderingError {}
