use crate::{Board, Pos2};
use rand::{
    Rng, SeedableRng,
    rngs::{OsRng, StdRng},
};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("unknown fill mode `{0}` (expected random, alternating, all or empty)")]
    UnknownFill(String),
    #[error("failed to seed the random generator from the operating system")]
    Entropy(#[from] rand::rand_core::OsError),
}

/// Creates the generator used for seeding boards
///
/// A fixed `seed` gives reproducible boards, otherwise the generator is
/// seeded from the operating system.
pub fn seeded_rng(seed: Option<u64>) -> Result<StdRng, SeedError> {
    match seed {
        Some(seed) => Ok(StdRng::seed_from_u64(seed)),
        None => Ok(StdRng::try_from_rng(&mut OsRng)?),
    }
}

/// A board where every cell of `[0,width) x [0,height)` is alive with
/// probability one half
pub fn random_board<R: Rng>(width: i32, height: i32, rng: &mut R) -> Board {
    FillMode::Random.create_board(width, height, rng)
}

/// How the initial rectangle of cells is populated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    #[default]
    Random,
    Alternating,
    All,
    Empty,
}
impl FromStr for FillMode {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "alternating" => Ok(Self::Alternating),
            "all" => Ok(Self::All),
            "empty" => Ok(Self::Empty),
            other => Err(SeedError::UnknownFill(other.to_owned())),
        }
    }
}
impl FillMode {
    fn fill_cell<R: Rng>(&self, cell: Pos2, rng: &mut R) -> bool {
        match self {
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (cell.x + cell.y) % 2 == 0,
            Self::All => true,
            Self::Empty => false,
        }
    }

    pub fn create_board<R: Rng>(self, w: i32, h: i32, rng: &mut R) -> Board {
        if self == Self::Empty {
            return Board::empty();
        }

        let mut alive = Vec::new();
        for y in 0..h {
            for x in 0..w {
                let cell = Pos2 { x, y };
                if self.fill_cell(cell, rng) {
                    alive.push(cell);
                }
            }
        }
        tracing::debug!(fill = ?self, width = w, height = h, alive = alive.len(), "seeded board");
        Board::from_cells(alive)
    }
}
