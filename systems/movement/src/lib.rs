#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic movement system that applies held intent and resolves
//! collisions against the tile grid.

use gridwalk_core::{Command, Direction, Event, Intent, TileCoord};
use gridwalk_world::TileGrid;

/// Pure system that reacts to world events and emits movement commands.
#[derive(Debug, Default)]
pub struct Movement;

impl Movement {
    /// Consumes world events and read-only state to emit movement commands.
    ///
    /// The step resolves at most once per batch, and only when the batch
    /// contains [`Event::TimeAdvanced`]. A command is emitted only when the
    /// resolved position differs from the current one, so idle intent never
    /// produces work for the world.
    pub fn handle(
        &mut self,
        events: &[Event],
        position: TileCoord,
        intent: Intent,
        grid: &TileGrid,
        out: &mut Vec<Command>,
    ) {
        if !events
            .iter()
            .any(|event| matches!(event, Event::TimeAdvanced))
        {
            return;
        }

        let to = advance(position, intent, grid);
        if to != position {
            out.push(Command::MovePlayer { to });
        }
    }
}

/// Resolves one simulation step for the player.
///
/// Each held flag independently adjusts its axis by one tile; opposing
/// flags cancel to a net zero and diagonal intent changes both axes in the
/// same step. The tentative coordinate is clamped to the grid bounds before
/// the wall check, so the queried tile always lies in bounds.
///
/// When the clamped tentative tile is a wall, every held axis is reverted:
/// up held puts the row back down, left held puts the column back right,
/// and so on. The revert is driven by the intent flags rather than the
/// observed delta, so a diagonal step into a wall undoes both axes in full
/// even though only one of them may have caused the hit. There is no
/// sliding collision and no axis-separated resolution.
#[must_use]
pub fn advance(position: TileCoord, intent: Intent, grid: &TileGrid) -> TileCoord {
    let mut column = i64::from(position.column());
    let mut row = i64::from(position.row());

    if intent.is_held(Direction::Left) {
        column -= 1;
    }
    if intent.is_held(Direction::Right) {
        column += 1;
    }
    if intent.is_held(Direction::Up) {
        row -= 1;
    }
    if intent.is_held(Direction::Down) {
        row += 1;
    }

    column = column.clamp(0, i64::from(grid.columns()) - 1);
    row = row.clamp(0, i64::from(grid.rows()) - 1);

    if grid.is_wall(TileCoord::new(column as u32, row as u32)) {
        if intent.is_held(Direction::Up) {
            row += 1;
        }
        if intent.is_held(Direction::Down) {
            row -= 1;
        }
        if intent.is_held(Direction::Left) {
            column += 1;
        }
        if intent.is_held(Direction::Right) {
            column -= 1;
        }
    }

    debug_assert!(
        column >= 0
            && column < i64::from(grid.columns())
            && row >= 0
            && row < i64::from(grid.rows()),
        "resolved position ({column}, {row}) escaped the grid"
    );

    TileCoord::new(column as u32, row as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(directions: &[Direction]) -> Intent {
        let mut intent = Intent::idle();
        for &direction in directions {
            let _ = intent.hold(direction);
        }
        intent
    }

    fn grid_4x4() -> TileGrid {
        // (1, 1) spawn floor, (2, 1) wall, (1, 2) floor.
        TileGrid::parse("x x \n pxx\nx  x\nxxxx\n", 4, 4).expect("parse map")
    }

    fn open_grid() -> TileGrid {
        TileGrid::parse("    \n    \n    \n    \n", 4, 4).expect("parse map")
    }

    #[test]
    fn idle_intent_never_changes_position() {
        let grid = grid_4x4();
        let position = TileCoord::new(1, 1);
        assert_eq!(advance(position, Intent::idle(), &grid), position);
    }

    #[test]
    fn step_into_floor_is_accepted() {
        let grid = grid_4x4();
        let next = advance(TileCoord::new(1, 1), held(&[Direction::Down]), &grid);
        assert_eq!(next, TileCoord::new(1, 2));
    }

    #[test]
    fn step_into_wall_is_reverted() {
        let grid = grid_4x4();
        let next = advance(TileCoord::new(1, 1), held(&[Direction::Right]), &grid);
        assert_eq!(next, TileCoord::new(1, 1));
    }

    #[test]
    fn diagonal_step_into_wall_reverts_both_axes() {
        // From (1, 2), right alone reaches floor (2, 2) and up alone
        // reaches floor (1, 1), but the diagonal lands on wall (2, 1) and
        // both axes revert in full.
        let grid = grid_4x4();
        let next = advance(
            TileCoord::new(1, 2),
            held(&[Direction::Right, Direction::Up]),
            &grid,
        );
        assert_eq!(next, TileCoord::new(1, 2));
    }

    #[test]
    fn diagonal_step_into_floor_changes_both_axes() {
        let grid = open_grid();
        let next = advance(
            TileCoord::new(1, 1),
            held(&[Direction::Right, Direction::Down]),
            &grid,
        );
        assert_eq!(next, TileCoord::new(2, 2));
    }

    #[test]
    fn opposing_flags_cancel_to_a_net_zero() {
        let grid = open_grid();
        let position = TileCoord::new(2, 2);
        let next = advance(position, held(&[Direction::Left, Direction::Right]), &grid);
        assert_eq!(next, position);
    }

    #[test]
    fn tentative_position_clamps_to_the_origin_corner() {
        let grid = open_grid();
        let next = advance(
            TileCoord::new(0, 0),
            held(&[Direction::Left, Direction::Up]),
            &grid,
        );
        assert_eq!(next, TileCoord::new(0, 0));
    }

    #[test]
    fn tentative_position_clamps_to_the_far_corner() {
        let grid = open_grid();
        let next = advance(
            TileCoord::new(3, 3),
            held(&[Direction::Right, Direction::Down]),
            &grid,
        );
        assert_eq!(next, TileCoord::new(3, 3));
    }

    #[test]
    fn resolved_position_stays_in_bounds_for_every_intent_subset() {
        let grid = grid_4x4();
        let directions = Direction::ALL;

        for mask in 0u32..16 {
            let mut intent = Intent::idle();
            for (bit, &direction) in directions.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    let _ = intent.hold(direction);
                }
            }

            for row in 0..4 {
                for column in 0..4 {
                    let position = TileCoord::new(column, row);
                    let next = advance(position, intent, &grid);
                    assert!(next.column() < grid.columns());
                    assert!(next.row() < grid.rows());
                }
            }
        }
    }

    #[test]
    fn handle_does_nothing_without_a_time_advanced_event() {
        let grid = grid_4x4();
        let mut movement = Movement::default();
        let mut out = Vec::new();

        movement.handle(
            &[],
            TileCoord::new(1, 1),
            held(&[Direction::Down]),
            &grid,
            &mut out,
        );

        assert!(out.is_empty());
    }

    #[test]
    fn handle_emits_a_move_command_on_time_advanced() {
        let grid = grid_4x4();
        let mut movement = Movement::default();
        let mut out = Vec::new();

        movement.handle(
            &[Event::TimeAdvanced],
            TileCoord::new(1, 1),
            held(&[Direction::Down]),
            &grid,
            &mut out,
        );

        assert_eq!(
            out,
            vec![Command::MovePlayer {
                to: TileCoord::new(1, 2),
            }]
        );
    }

    #[test]
    fn handle_stays_silent_when_the_step_is_blocked() {
        let grid = grid_4x4();
        let mut movement = Movement::default();
        let mut out = Vec::new();

        movement.handle(
            &[Event::TimeAdvanced],
            TileCoord::new(1, 1),
            held(&[Direction::Right]),
            &grid,
            &mut out,
        );

        assert!(out.is_empty());
    }
}
