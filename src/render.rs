use crate::{Board, Bounds, Pos2};
use std::fmt;

pub const ALIVE_GLYPH: char = '•';
pub const DEAD_GLYPH: char = ' ';

/// Writes one line per row of `bounds`, one glyph per column
///
/// Rows are newline terminated. [`None`] bounds write nothing.
pub fn render_rows<F, W>(bounds: Option<Bounds>, is_alive: F, out: &mut W) -> fmt::Result
where
    F: Fn(Pos2) -> bool,
    W: fmt::Write,
{
    let Some(bounds) = bounds else {
        return Ok(());
    };
    for y in bounds.rows() {
        for x in bounds.columns() {
            let glyph = if is_alive(Pos2 { x, y }) {
                ALIVE_GLYPH
            } else {
                DEAD_GLYPH
            };
            out.write_char(glyph)?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

/// Status line printed above every frame
pub fn frame_header(step: u64, board: &Board) -> String {
    let (width, height) = board
        .bounds()
        .map(|b| (b.width(), b.height()))
        .unwrap_or_default();
    format!(
        "Step: {} \t width: {} | height: {} | alive: {}",
        step,
        width,
        height,
        board.alive_count()
    )
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_rows(self.bounds(), |pos| self.is_alive(pos), f)
    }
}
