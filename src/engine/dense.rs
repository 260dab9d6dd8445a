use super::rule;
use crate::{Board, Pos2};
use std::collections::HashSet;

/// Reference engine: scans every cell of the bounding box grown by one
///
/// Each cell re-counts its own neighbours against the live set, so the cost
/// follows the box area rather than the population. Kept to cross-check
/// [`advance`](super::advance).
pub fn advance_dense(board: &Board) -> Board {
    let Some(bounds) = board.bounds() else {
        return Board::empty();
    };

    let area = bounds.expand(1);
    let mut next = HashSet::new();
    for y in area.rows() {
        for x in area.columns() {
            let pos = Pos2 { x, y };
            if rule::next_state(board.is_alive(pos), count_alive_neighbours(board, pos)) {
                next.insert(pos);
            }
        }
    }
    Board::from_set(next)
}

fn count_alive_neighbours(board: &Board, pos: Pos2) -> u8 {
    pos.neighbours()
        .into_iter()
        .filter(|&n| board.is_alive(n))
        .count() as u8
}
