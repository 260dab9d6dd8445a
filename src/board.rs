use crate::Pos2;
use std::{collections::HashSet, ops::RangeInclusive};

/// The smallest axis-aligned rectangle enclosing every live cell
///
/// Both corners are inclusive, so a single cell has a `1x1` box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min: Pos2,
    pub max: Pos2,
}

impl Bounds {
    #[inline]
    pub fn point(pos: Pos2) -> Self {
        Self { min: pos, max: pos }
    }

    /// Grows the box so it also encloses `pos`
    #[inline]
    pub fn include(self, pos: Pos2) -> Self {
        Self {
            min: self.min.min_each(pos),
            max: self.max.max_each(pos),
        }
    }

    /// Grows the box by `margin` cells on every side
    #[inline]
    pub fn expand(self, margin: i32) -> Self {
        let margin = Pos2 {
            x: margin,
            y: margin,
        };
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    /// The overlap of two boxes, [`None`] if they are disjoint
    pub fn intersect(self, other: Self) -> Option<Self> {
        let min = self.min.max_each(other.min);
        let max = self.max.min_each(other.max);
        (min.x <= max.x && min.y <= max.y).then_some(Self { min, max })
    }

    #[inline]
    pub fn contains(&self, pos: Pos2) -> bool {
        self.columns().contains(&pos.x) && self.rows().contains(&pos.y)
    }

    #[inline]
    pub fn columns(&self) -> RangeInclusive<i32> {
        self.min.x..=self.max.x
    }
    #[inline]
    pub fn rows(&self) -> RangeInclusive<i32> {
        self.min.y..=self.max.y
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.max.x.abs_diff(self.min.x) + 1
    }
    #[inline]
    pub fn height(&self) -> u32 {
        self.max.y.abs_diff(self.min.y) + 1
    }
}

/// A generation of live cells on the unbounded plane
///
/// Only live cells are stored. The bounding box is computed once when the
/// board is built and never changes afterwards; a board with no live cells
/// has no bounding box at all.
#[derive(Debug, Clone, Default)]
pub struct Board {
    cells: HashSet<Pos2>,
    bounds: Option<Bounds>,
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells<I: IntoIterator<Item = Pos2>>(cells: I) -> Self {
        Self::from_set(cells.into_iter().collect())
    }

    pub(crate) fn from_set(cells: HashSet<Pos2>) -> Self {
        let bounds = cells.iter().fold(None, |acc: Option<Bounds>, &pos| {
            Some(match acc {
                Some(bounds) => bounds.include(pos),
                None => Bounds::point(pos),
            })
        });
        Self { cells, bounds }
    }

    #[inline]
    pub fn is_alive(&self, pos: Pos2) -> bool {
        self.cells.contains(&pos)
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The bounding box of the live cells, [`None`] for an empty board
    #[inline]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Live cells in no particular order
    #[inline]
    pub fn cells(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.cells.iter().copied()
    }

    /// Live cells in row-major order
    pub fn sorted_cells(&self) -> Vec<Pos2> {
        let mut cells: Vec<Pos2> = self.cells().collect();
        cells.sort_unstable();
        cells
    }

    pub fn translate(&self, offset: Pos2) -> Self {
        Self::from_cells(self.cells().map(|pos| pos + offset))
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}
impl Eq for Board {}

impl FromIterator<Pos2> for Board {
    fn from_iter<I: IntoIterator<Item = Pos2>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &[(i32, i32)]) -> Board {
        cells.iter().copied().map(Pos2::from).collect()
    }

    #[test]
    fn empty_board_has_no_bounds() {
        let b = Board::from_cells(Vec::new());

        assert!(b.is_empty());
        assert_eq!(b.bounds(), None);
    }

    #[test]
    fn bounds_are_tight() {
        let b = board(&[(3, -2), (-1, 4), (0, 0), (7, 1)]);
        let bounds = b.bounds().expect("non-empty board");

        assert_eq!(bounds.min, Pos2::new(-1, -2));
        assert_eq!(bounds.max, Pos2::new(7, 4));
        assert_eq!(bounds.width(), 9);
        assert_eq!(bounds.height(), 7);
        assert!(b.cells().all(|p| bounds.contains(p)));
    }

    #[test]
    fn single_cell_is_one_by_one() {
        let bounds = board(&[(2, 2)]).bounds().expect("non-empty board");

        assert_eq!(bounds, Bounds::point(Pos2::new(2, 2)));
        assert_eq!((bounds.width(), bounds.height()), (1, 1));
    }

    #[test]
    fn construction_ignores_input_order() {
        let a = board(&[(0, 0), (5, 5), (2, -3)]);
        let b = board(&[(2, -3), (0, 0), (5, 5), (0, 0)]);

        assert_eq!(a, b);
        assert_eq!(a.bounds(), b.bounds());
        assert_eq!(b.alive_count(), 3);
    }

    #[test]
    fn expand_grows_every_side() {
        let bounds = Bounds::point(Pos2::zero()).expand(1);

        assert_eq!(bounds.min, Pos2::new(-1, -1));
        assert_eq!(bounds.max, Pos2::new(1, 1));
    }

    #[test]
    fn intersect_clips_or_misses() {
        let a = Bounds {
            min: Pos2::new(0, 0),
            max: Pos2::new(9, 9),
        };
        let b = Bounds {
            min: Pos2::new(5, -5),
            max: Pos2::new(20, 3),
        };

        assert_eq!(
            a.intersect(b),
            Some(Bounds {
                min: Pos2::new(5, 0),
                max: Pos2::new(9, 3),
            })
        );
        assert_eq!(a.intersect(Bounds::point(Pos2::new(10, 0))), None);
    }

    #[test]
    fn translate_moves_bounds() {
        let b = board(&[(0, 0), (1, 2)]).translate(Pos2::new(10, -10));

        assert_eq!(b, board(&[(10, -10), (11, -8)]));
        assert_eq!(
            b.bounds().map(|bounds| bounds.min),
            Some(Pos2::new(10, -10))
        );
    }
}
