//! Conway's Game of Life on an unbounded plane.
//!
//! A [`Board`] holds the live cells of one generation and their bounding
//! box. [`advance`] computes the next generation by counting neighbours of
//! live cells only.

pub mod board;
pub mod enc;
pub mod engine;
pub mod pos;
pub mod render;
pub mod seed;

pub use board::{Board, Bounds};
pub use enc::{PatternCodec, PatternError, RunLengthEncoded};
pub use engine::{GameOfLife, advance, advance_dense, advance_parallel};
pub use pos::Pos2;
pub use seed::{FillMode, SeedError, random_board, seeded_rng};
