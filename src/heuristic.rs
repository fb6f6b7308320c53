use crate::board::Board;

/// An admissible estimate of the remaining move count. The solver takes this
/// as a capability so a different estimator can be slotted in without touching
/// the search itself.
pub trait Heuristic {
    /// Must never overestimate the true remaining cost, and must return 0
    /// exactly on the solved board.
    fn evaluate(&self, board: &Board) -> u32;
}

/// Sum over all non-blank tiles of the L1 distance between the tile's current
/// cell and its goal cell. Admissible and consistent: a single move changes
/// the estimate by at most 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn evaluate(&self, board: &Board) -> u32 {
        let side = board.side();
        let mut distance = 0;
        for row in 0..side {
            for col in 0..side {
                let value = board.value_at(row, col);
                if value != 0 {
                    let goal_row = (value - 1) as usize / side;
                    let goal_col = (value - 1) as usize % side;
                    distance += (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32;
                }
            }
        }
        distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Move};

    #[test]
    fn zero_exactly_on_goal() {
        assert_eq!(Manhattan.evaluate(&Board::new()), 0);
        for succ in Board::new().successors() {
            assert!(Manhattan.evaluate(&succ) > 0);
        }
    }

    #[test]
    fn known_values() {
        // One move away: only tile 8 is displaced, by one cell.
        let one_off = Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        assert_eq!(Manhattan.evaluate(&one_off), 1);

        // Blank in the center: 5, 7 and 8 are one cell from home, 6 is three.
        let spread = Board::from_rows([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        assert_eq!(Manhattan.evaluate(&spread), 6);
    }

    #[test]
    fn consistent_across_single_moves() {
        let mut board = Board::from_rows([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        // Walk a fixed path and check the estimate never jumps by more than 1.
        for mv in [Move::Up, Move::Left, Move::Down, Move::Down, Move::Right] {
            let next = board.moved(mv).unwrap();
            let before = Manhattan.evaluate(&board);
            let after = Manhattan.evaluate(&next);
            assert!(before.abs_diff(after) <= 1);
            board = next;
        }
    }
}
