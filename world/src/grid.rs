//! Tile grid construction and queries used by the world crate.

use std::{fs, io, path::Path};

use gridwalk_core::{TileCoord, TileKind};
use thiserror::Error;

/// Errors raised while constructing a tile grid from a textual map.
#[derive(Debug, Error)]
pub enum MapFormatError {
    /// The requested grid dimensions leave no tiles along one axis.
    #[error("map dimensions must be positive (requested {columns}x{rows})")]
    ZeroDimension {
        /// Requested number of columns.
        columns: u32,
        /// Requested number of rows.
        rows: u32,
    },
    /// A map line ended before the declared column count.
    #[error("map line {row} holds {length} characters, expected {expected}")]
    LineTooShort {
        /// Zero-based row index of the offending line.
        row: u32,
        /// Number of characters the line actually holds.
        length: usize,
        /// Declared column count the line must reach.
        expected: u32,
    },
    /// The map ended before the declared row count.
    #[error("map holds {lines} lines, expected {expected}")]
    TooFewLines {
        /// Number of lines the map actually holds.
        lines: u32,
        /// Declared row count the map must reach.
        expected: u32,
    },
    /// The map source could not be read.
    #[error("failed to read map source")]
    Unreadable(#[from] io::Error),
}

/// Error raised when a marker symbol is absent from the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("marker {marker:?} absent from map")]
pub struct MarkerNotFound {
    marker: char,
}

impl MarkerNotFound {
    /// Symbol that was searched for.
    #[must_use]
    pub const fn marker(&self) -> char {
        self.marker
    }
}

/// One cell of the grid carrying its terrain classification.
///
/// Tiles are created once during grid construction and never mutated. The
/// source map symbol is retained so marker lookups can scan the original
/// characters rather than the derived terrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    column: u32,
    row: u32,
    kind: TileKind,
    symbol: char,
}

impl Tile {
    const fn new(column: u32, row: u32, symbol: char) -> Self {
        Self {
            column,
            row,
            kind: TileKind::from_symbol(symbol),
            symbol,
        }
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

    /// Terrain classification derived from the source symbol.
    #[must_use]
    pub const fn kind(&self) -> TileKind {
        self.kind
    }

    /// Map symbol the tile was constructed from.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Reports whether the tile blocks entity movement.
    #[must_use]
    pub const fn is_wall(&self) -> bool {
        self.kind.is_wall()
    }
}

/// Rectangular grid of tiles parsed from a textual map.
///
/// The grid is immutable after construction: every coordinate in
/// `[0, columns) x [0, rows)` maps to exactly one tile, stored densely in
/// row-major order.
#[derive(Clone, Debug)]
pub struct TileGrid {
    columns: u32,
    rows: u32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Parses a textual map into a grid of the requested dimensions.
    ///
    /// Consumes `rows` lines of at least `columns` characters each;
    /// characters beyond the declared width are ignored, as are surplus
    /// lines. A short line or a short map is a construction failure, never
    /// a partial load.
    pub fn parse(source: &str, columns: u32, rows: u32) -> Result<Self, MapFormatError> {
        if columns == 0 || rows == 0 {
            return Err(MapFormatError::ZeroDimension { columns, rows });
        }

        let capacity_u64 = u64::from(columns) * u64::from(rows);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        let mut tiles = Vec::with_capacity(capacity);
        let mut lines = source.lines();

        for row in 0..rows {
            let Some(line) = lines.next() else {
                return Err(MapFormatError::TooFewLines {
                    lines: row,
                    expected: rows,
                });
            };

            let mut symbols = line.chars();
            for column in 0..columns {
                let Some(symbol) = symbols.next() else {
                    return Err(MapFormatError::LineTooShort {
                        row,
                        length: line.chars().count(),
                        expected: columns,
                    });
                };
                tiles.push(Tile::new(column, row, symbol));
            }
        }

        Ok(Self {
            columns,
            rows,
            tiles,
        })
    }

    /// Reads the map file at `path` and parses it into a grid.
    pub fn load(path: &Path, columns: u32, rows: u32) -> Result<Self, MapFormatError> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source, columns, rows)
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Reports whether the coordinate lies within the grid bounds.
    #[must_use]
    pub const fn contains(&self, coord: TileCoord) -> bool {
        coord.column() < self.columns && coord.row() < self.rows
    }

    /// Returns the tile at the provided coordinate, if it lies in bounds.
    #[must_use]
    pub fn tile(&self, coord: TileCoord) -> Option<&Tile> {
        self.index(coord).and_then(|index| self.tiles.get(index))
    }

    /// Reports whether the tile at the coordinate blocks movement.
    ///
    /// The coordinate must lie within the grid: callers clamp before
    /// querying, so an out-of-bounds query indicates a defect in the caller
    /// and panics rather than reading as a silent non-wall.
    #[must_use]
    pub fn is_wall(&self, coord: TileCoord) -> bool {
        let Some(tile) = self.tile(coord) else {
            panic!(
                "tile query ({}, {}) outside the {}x{} grid",
                coord.column(),
                coord.row(),
                self.columns,
                self.rows
            );
        };
        tile.is_wall()
    }

    /// Locates the first tile constructed from the provided map symbol.
    ///
    /// Scans in row-major order, row 0 first and column 0 first within a
    /// row. Only the first match is honoured when the symbol repeats; the
    /// map format assumes a single occurrence.
    pub fn find_first(&self, symbol: char) -> Result<TileCoord, MarkerNotFound> {
        self.tiles
            .iter()
            .find(|tile| tile.symbol() == symbol)
            .map(|tile| TileCoord::new(tile.column(), tile.row()))
            .ok_or(MarkerNotFound { marker: symbol })
    }

    /// Iterator over all tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    fn index(&self, coord: TileCoord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        let row = usize::try_from(coord.row()).ok()?;
        let column = usize::try_from(coord.column()).ok()?;
        let width = usize::try_from(self.columns).ok()?;
        Some(row * width + column)
    }
}
