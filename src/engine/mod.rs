mod dense;
mod rule;

pub use self::dense::advance_dense;
pub use self::rule::next_state;
use crate::{Board, Pos2};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// Live-neighbour count for every cell adjacent to at least one live cell
type NeighbourCounts = HashMap<Pos2, u8>;

/// Computes the next generation by sparse neighbour counting
///
/// Only cells next to a live cell can be alive afterwards, so the work is
/// proportional to the live population instead of the bounding box area.
pub fn advance(board: &Board) -> Board {
    let counts = count_neighbours(board.cells(), board.alive_count());
    apply_rule(board, counts)
}

/// Same as [`advance`], with the counting pass split across `partitions`
/// rayon tasks
///
/// Every task counts into its own map and the maps are summed before the
/// rule is applied, so the result is identical to [`advance`].
pub fn advance_parallel(board: &Board, partitions: usize) -> Board {
    if partitions <= 1 || board.alive_count() < partitions {
        return advance(board);
    }

    let alive: Vec<Pos2> = board.cells().collect();
    let chunk_len = alive.len().div_ceil(partitions);
    let counts = alive
        .par_chunks(chunk_len)
        .map(|chunk| count_neighbours(chunk.iter().copied(), chunk.len()))
        .reduce(NeighbourCounts::new, merge_counts);
    apply_rule(board, counts)
}

fn count_neighbours<I: Iterator<Item = Pos2>>(alive: I, alive_len: usize) -> NeighbourCounts {
    let mut counts = NeighbourCounts::with_capacity(alive_len * 4);
    for pos in alive {
        for n in pos.neighbours() {
            *counts.entry(n).or_insert(0) += 1;
        }
    }
    counts
}

fn merge_counts(mut a: NeighbourCounts, mut b: NeighbourCounts) -> NeighbourCounts {
    // fold the smaller map into the larger one
    if a.len() < b.len() {
        std::mem::swap(&mut a, &mut b);
    }
    for (pos, count) in b {
        *a.entry(pos).or_insert(0) += count;
    }
    a
}

fn apply_rule(board: &Board, counts: NeighbourCounts) -> Board {
    let next: HashSet<Pos2> = counts
        .into_iter()
        .filter(|&(pos, neighbours)| next_state(board.is_alive(pos), neighbours))
        .map(|(pos, _)| pos)
        .collect();
    Board::from_set(next)
}

/// Owns the current generation and replaces it on every step
///
/// Previous boards are dropped, no history is kept.
#[derive(Debug, Default)]
pub struct GameOfLife {
    board: Board,
    generation: u64,
}

impl GameOfLife {
    #[inline]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            generation: 0,
        }
    }

    pub fn next_generation(&mut self) {
        self.board = advance(&self.board);
        self.finish_step();
    }

    pub fn next_generation_parallel(&mut self, partitions: usize) {
        self.board = advance_parallel(&self.board, partitions);
        self.finish_step();
    }

    fn finish_step(&mut self) {
        self.generation += 1;
        tracing::trace!(
            generation = self.generation,
            alive = self.board.alive_count(),
            "advanced board"
        );
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.board.alive_count()
    }

    #[inline]
    pub fn take(self) -> Board {
        self.board
    }
}
