use rand::{Rng, SeedableRng, rngs::StdRng};
use sparselife::{Board, Pos2, advance, advance_dense, advance_parallel, random_board};

fn board(cells: &[(i32, i32)]) -> Board {
    cells.iter().copied().map(Pos2::from).collect()
}

fn glider() -> Board {
    board(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
}

/// A board of `w x h` cells at `origin`, each alive with probability `density`
fn scattered(rng: &mut StdRng, origin: Pos2, w: i32, h: i32, density: f64) -> Board {
    let mut alive = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if rng.random_bool(density) {
                alive.push(origin + Pos2 { x, y });
            }
        }
    }
    Board::from_cells(alive)
}

fn assert_tight_bounds(board: &Board) {
    let Some(bounds) = board.bounds() else {
        assert!(board.is_empty());
        return;
    };
    assert!(board.cells().all(|p| bounds.contains(p)));
    assert!(board.cells().any(|p| p.x == bounds.min.x));
    assert!(board.cells().any(|p| p.x == bounds.max.x));
    assert!(board.cells().any(|p| p.y == bounds.min.y));
    assert!(board.cells().any(|p| p.y == bounds.max.y));
}

#[test]
fn block_is_still_life() {
    let block = board(&[(0, 0), (1, 0), (0, 1), (1, 1)]);

    let mut current = block.clone();
    for _ in 0..10 {
        current = advance(&current);
        assert_eq!(current, block);
        assert_eq!(current.bounds(), block.bounds());
    }
}

#[test]
fn filled_square_first_generation() {
    // corners survive with 3 neighbours, the middle of each side is born
    let square = board(&[
        (0, 0),
        (1, 0),
        (2, 0),
        (0, 1),
        (1, 1),
        (2, 1),
        (0, 2),
        (1, 2),
        (2, 2),
    ]);
    let expected = board(&[
        (1, -1),
        (0, 0),
        (2, 0),
        (-1, 1),
        (3, 1),
        (0, 2),
        (2, 2),
        (1, 3),
    ]);

    assert_eq!(advance(&square), expected);
}

#[test]
fn blinker_oscillates() {
    let horizontal = board(&[(1, 0), (2, 0), (3, 0)]);
    let vertical = board(&[(2, -1), (2, 0), (2, 1)]);

    let once = advance(&horizontal);
    assert_eq!(once, vertical);
    assert_eq!(once.bounds().map(|b| (b.width(), b.height())), Some((1, 3)));

    let twice = advance(&once);
    assert_eq!(twice, horizontal);
}

#[test]
fn glider_translates_every_four_generations() {
    let start = glider();
    let mut current = start.clone();
    for step in 1..=8 {
        current = advance(&current);
        assert_eq!(current.alive_count(), 5);
        if step % 4 == 0 {
            let shift = step / 4;
            assert_eq!(current, start.translate(Pos2::new(shift, shift)));
        }
    }
}

#[test]
fn empty_board_stays_empty() {
    let empty = Board::empty();

    assert!(advance(&empty).is_empty());
    assert!(advance_dense(&empty).is_empty());
    assert!(advance_parallel(&empty, 4).is_empty());
    assert_eq!(advance(&empty).bounds(), None);
}

#[test]
fn engines_agree_on_random_boards() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for i in 0..32 {
        let w = rng.random_range(1..60);
        let h = rng.random_range(1..60);
        let density = [0.05, 0.2, 0.35, 0.5, 0.8][i % 5];
        let origin = Pos2::new(rng.random_range(-100..100), rng.random_range(-100..100));
        let start = scattered(&mut rng, origin, w, h, density);

        let mut current = start;
        for _ in 0..3 {
            let sparse = advance(&current);
            let dense = advance_dense(&current);
            assert_eq!(sparse, dense, "board {i} ({w}x{h}, density {density})");
            assert_eq!(sparse.bounds(), dense.bounds());
            assert_eq!(advance_parallel(&current, 1 + i % 7), sparse);
            current = sparse;
        }
    }
}

#[test]
fn bounds_stay_tight_across_generations() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut current = random_board(30, 30, &mut rng);
    for _ in 0..20 {
        assert_tight_bounds(&current);
        current = advance(&current);
    }
    assert_tight_bounds(&current);
}

#[test]
fn construction_is_order_independent() {
    let mut rng = StdRng::seed_from_u64(3);
    let seeded = random_board(25, 25, &mut rng);

    let mut forward = seeded.sorted_cells();
    let a = Board::from_cells(forward.iter().copied());
    forward.reverse();
    let b = Board::from_cells(forward);

    assert_eq!(a, b);
    assert_eq!(a, seeded);
    assert_eq!(a.bounds(), b.bounds());
    assert_eq!(a.bounds(), seeded.bounds());
}

#[test]
fn advance_leaves_input_untouched() {
    let start = glider();
    let snapshot = start.sorted_cells();
    let _ = advance(&start);
    let _ = advance_dense(&start);

    assert_eq!(start.sorted_cells(), snapshot);
}
