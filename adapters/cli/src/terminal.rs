//! Terminal rendering backend that presents scenes as character rows.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use gridwalk_core::{Direction, TileCoord, TileKind};
use gridwalk_rendering::{tile_color, Color, FrameInput, RenderingBackend, Scene, PLAYER_COLOR};

/// Presents scenes on a terminal and reads held directions from line-based
/// input.
///
/// Each input line lists the directions held for the next tick (`w`, `a`,
/// `s`, `d`); `q` or end of input requests quit. Transitions against the
/// previous line become the pressed/released sets of the frame input, so
/// repeating a letter keeps its direction held without re-pressing it.
pub(crate) struct TerminalBackend<R, W> {
    input: R,
    output: W,
    colored: bool,
    held: Vec<Direction>,
}

impl<R: BufRead, W: Write> TerminalBackend<R, W> {
    pub(crate) fn new(input: R, output: W, colored: bool) -> Self {
        Self {
            input,
            output,
            colored,
            held: Vec::new(),
        }
    }

    fn read_frame_input(&mut self) -> Result<FrameInput> {
        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .context("failed to read input line")?;
        if bytes == 0 {
            return Ok(FrameInput {
                quit_requested: true,
                ..FrameInput::default()
            });
        }

        let mut next_held: Vec<Direction> = Vec::new();
        let mut quit_requested = false;
        for symbol in line.trim().chars() {
            let direction = match symbol.to_ascii_lowercase() {
                'a' => Direction::Left,
                'd' => Direction::Right,
                'w' => Direction::Up,
                's' => Direction::Down,
                'q' => {
                    quit_requested = true;
                    continue;
                }
                _ => continue,
            };
            if !next_held.contains(&direction) {
                next_held.push(direction);
            }
        }

        let pressed = next_held
            .iter()
            .copied()
            .filter(|direction| !self.held.contains(direction))
            .collect();
        let released = self
            .held
            .iter()
            .copied()
            .filter(|direction| !next_held.contains(direction))
            .collect();
        self.held = next_held;

        Ok(FrameInput {
            pressed,
            released,
            quit_requested,
        })
    }

    fn present(&mut self, scene: &Scene) -> Result<()> {
        for row in 0..scene.grid.rows() {
            let mut line = String::new();
            for column in 0..scene.grid.columns() {
                line.push_str(&self.cell_text(scene, column, row));
            }
            writeln!(self.output, "{line}").context("failed to write frame")?;
        }
        writeln!(self.output).context("failed to write frame")?;
        self.output.flush().context("failed to flush frame")?;
        Ok(())
    }

    fn cell_text(&self, scene: &Scene, column: u32, row: u32) -> String {
        let coord = TileCoord::new(column, row);
        let kind = tile_kind_at(scene, column, row);

        if self.colored {
            if scene.player.position() == coord {
                return paint(PLAYER_COLOR, "  ");
            }
            return match kind.and_then(tile_color) {
                Some(color) => paint(color, "  "),
                None => "  ".to_owned(),
            };
        }

        let glyph = if scene.player.position() == coord {
            '@'
        } else {
            match kind {
                Some(TileKind::Wall) => '#',
                Some(TileKind::Floor) => '.',
                _ => ' ',
            }
        };
        glyph.to_string()
    }
}

fn tile_kind_at(scene: &Scene, column: u32, row: u32) -> Option<TileKind> {
    let index = u64::from(row) * u64::from(scene.grid.columns()) + u64::from(column);
    usize::try_from(index)
        .ok()
        .and_then(|index| scene.tiles.get(index))
        .map(|tile| tile.kind)
}

fn paint(color: Color, text: &str) -> String {
    let (red, green, blue) = color.to_rgb_u8();
    format!("\u{1b}[48;2;{red};{green};{blue}m{text}\u{1b}[0m")
}

impl<R: BufRead, W: Write> RenderingBackend for TerminalBackend<R, W> {
    fn run<F>(mut self, mut scene: Scene, mut update_scene: F) -> Result<()>
    where
        F: FnMut(FrameInput, &mut Scene) + 'static,
    {
        loop {
            self.present(&scene)?;
            let input = self.read_frame_input()?;
            if input.quit_requested {
                break;
            }
            update_scene(input, &mut scene);
        }

        Ok(())
    }
}
