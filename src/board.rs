use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Side length of the board. Only 3x3 is built or tested, but the board keeps
/// its side as data so the move and heuristic code stays size-agnostic.
pub const SIDE: usize = 3;

/// A direction the blank can slide in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Successor generation iterates this order, so it fixes the order in
    /// which children are explored.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// One board configuration. Values are a permutation of `0..side*side`, with
/// `0` standing for the blank; the blank's coordinates are cached so a move
/// never has to scan the grid. Boards are immutable: a move yields a new
/// board rather than mutating in place.
#[derive(Debug, Clone)]
pub struct Board {
    side: usize,
    cells: Vec<Vec<u32>>,
    blank_row: usize,
    blank_col: usize,
}

// Equality looks at the grid only; the blank coordinates are derived from it.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The solved board: `1..side*side` ascending, blank in the last cell.
    pub fn new() -> Self {
        let mut cells = vec![vec![0; SIDE]; SIDE];
        let mut value = 1;
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = value;
                value += 1;
            }
        }
        cells[SIDE - 1][SIDE - 1] = 0;

        Self {
            side: SIDE,
            cells,
            blank_row: SIDE - 1,
            blank_col: SIDE - 1,
        }
    }

    /// Builds a board from explicit rows, locating the blank. The rows must
    /// be a permutation of `0..SIDE*SIDE`; this is a caller precondition, not
    /// something the search re-checks.
    pub fn from_rows(rows: [[u32; SIDE]; SIDE]) -> Self {
        let cells: Vec<Vec<u32>> = rows.iter().map(|r| r.to_vec()).collect();
        let (blank_row, blank_col) = cells
            .iter()
            .enumerate()
            .find_map(|(i, row)| row.iter().position(|&v| v == 0).map(|j| (i, j)))
            .expect("rows contain no blank");

        debug_assert!({
            let mut seen = vec![false; SIDE * SIDE];
            cells
                .iter()
                .flatten()
                .all(|&v| (v as usize) < SIDE * SIDE && !std::mem::replace(&mut seen[v as usize], true))
        });

        Self {
            side: SIDE,
            cells,
            blank_row,
            blank_col,
        }
    }

    /// Scrambles the goal board with `moves` random legal moves. Every legal
    /// move is reversible, so the result is always solvable.
    pub fn scrambled(moves: usize, rng: &mut impl Rng) -> Self {
        let mut board = Self::new();
        for _ in 0..moves {
            let successors = board.successors();
            board = successors
                .choose(rng)
                .cloned()
                .unwrap_or(board);
        }
        board
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn value_at(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    pub fn blank(&self) -> (usize, usize) {
        (self.blank_row, self.blank_col)
    }

    /// Slides the blank one cell in the given direction, returning the new
    /// board, or `None` when the blank would leave the grid.
    pub fn moved(&self, mv: Move) -> Option<Self> {
        let (dr, dc) = mv.offset();
        let row = self.blank_row as isize + dr;
        let col = self.blank_col as isize + dc;
        if row < 0 || row >= self.side as isize || col < 0 || col >= self.side as isize {
            return None;
        }
        let (row, col) = (row as usize, col as usize);

        let mut next = self.clone();
        next.cells[self.blank_row][self.blank_col] = next.cells[row][col];
        next.cells[row][col] = 0;
        next.blank_row = row;
        next.blank_col = col;
        Some(next)
    }

    /// All legal one-move successors, in the fixed `Move::ALL` order:
    /// between 2 (blank in a corner) and 4 (blank in the interior) boards.
    pub fn successors(&self) -> Vec<Self> {
        Move::ALL.iter().filter_map(|&mv| self.moved(mv)).collect()
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::new()
    }

    /// Inversion-parity solvability test. For an odd side the blank's row
    /// never affects parity, so the board is solvable iff the inversion
    /// count is even.
    pub fn is_solvable(&self) -> bool {
        let flat: Vec<u32> = self.cells.iter().flatten().copied().collect();
        let inversions: usize = flat
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(|(i, &v)| {
                flat[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < v)
                    .count()
            })
            .sum();

        if self.side % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank_row) % 2 == 1
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
