use eight_puzzle::{Board, Heuristic, Manhattan, Outcome, Solver};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, VecDeque};

/// True shortest distance to the goal by brute-force breadth-first search.
/// Only usable for nearby starts; the reference for optimality checks.
fn bfs_distance(start: &Board) -> Option<usize> {
    let goal = Board::new();
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start.clone(), 0usize);
    queue.push_back(start.clone());

    while let Some(board) = queue.pop_front() {
        let d = dist[&board];
        if board == goal {
            return Some(d);
        }
        for succ in board.successors() {
            if !dist.contains_key(&succ) {
                dist.insert(succ.clone(), d + 1);
                queue.push_back(succ);
            }
        }
    }
    None
}

fn assert_valid_path(path: &[Board], start: &Board) {
    assert!(!path.is_empty());
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(&Board::new()));
    for pair in path.windows(2) {
        assert!(
            pair[0].successors().contains(&pair[1]),
            "consecutive path states are not one move apart"
        );
    }
}

#[test]
fn solutions_are_optimal_on_short_scrambles() {
    let solver = Solver::new(Manhattan);
    let mut rng = StdRng::seed_from_u64(42);

    for scramble_len in [1, 2, 4, 6, 8, 10] {
        for _ in 0..5 {
            let start = Board::scrambled(scramble_len, &mut rng);
            let expected = bfs_distance(&start).expect("scramble is solvable");
            let report = solver.solve(&start);
            assert_eq!(report.cost(), Some(expected));
            assert_valid_path(report.path(), &start);
        }
    }
}

#[test]
fn manhattan_never_overestimates() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..30 {
        let board = Board::scrambled(10, &mut rng);
        let h = Manhattan.evaluate(&board) as usize;
        let actual = bfs_distance(&board).expect("scramble is solvable");
        assert!(h <= actual, "heuristic {} exceeds true distance {}", h, actual);
    }
}

#[test]
fn deep_scramble_solves_with_valid_path() {
    let mut rng = StdRng::seed_from_u64(1234);
    let start = Board::scrambled(100, &mut rng);
    let report = Solver::new(Manhattan).solve(&start);
    assert_valid_path(report.path(), &start);
    assert!(report.nodes_visited > 0);
}

#[test]
fn depth_cap_truncation_is_reported() {
    // Four moves from the goal, searched with a two-move cap: the search
    // must report truncation, not exhaustion, and yield an empty path.
    let start = Board::new()
        .moved(eight_puzzle::Move::Up)
        .and_then(|b| b.moved(eight_puzzle::Move::Up))
        .and_then(|b| b.moved(eight_puzzle::Move::Left))
        .and_then(|b| b.moved(eight_puzzle::Move::Left))
        .unwrap();
    let report = Solver::new(Manhattan).with_depth_cap(2).solve(&start);
    assert_eq!(report.outcome, Outcome::DepthCapped);
    assert!(report.path().is_empty());
    assert_eq!(report.cost(), None);
}

#[test]
fn cap_above_solution_depth_still_solves() {
    let start = Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
    let report = Solver::new(Manhattan).with_depth_cap(2).solve(&start);
    assert_eq!(report.cost(), Some(1));
}

#[test]
fn cap_equal_to_solution_depth_truncates() {
    // The cutoff runs before the goal test, so a goal reached exactly at
    // the cap depth is not accepted.
    let start = Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
    let report = Solver::new(Manhattan).with_depth_cap(1).solve(&start);
    assert_eq!(report.outcome, Outcome::DepthCapped);
}
