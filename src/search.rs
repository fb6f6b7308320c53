use crate::board::Board;
use crate::heuristic::Heuristic;

/// Hard cap on search depth. Any solvable 3x3 board needs at most 31 moves,
/// so the cap only fires on unsolvable input.
pub const MAX_DEPTH: u32 = 120;

/// Sentinel excess f-value: a node pruned with this value can never be
/// expanded at any bound.
const INFINITE: u32 = u32::MAX;

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Shortest path from the start board to the goal, inclusive of both.
    /// Cost in moves is the length minus one.
    Solved(Vec<Board>),
    /// Every reachable node was explored without hitting the depth cap:
    /// provably no solution exists.
    Exhausted,
    /// The depth cap truncated the final iteration, so the search found no
    /// solution but cannot prove none exists.
    DepthCapped,
}

/// The outcome of a solve together with the number of nodes visited across
/// all iterations. The count is diagnostic only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: Outcome,
    pub nodes_visited: u64,
}

impl SearchReport {
    /// The solution path, empty when no solution was found.
    pub fn path(&self) -> &[Board] {
        match &self.outcome {
            Outcome::Solved(path) => path,
            _ => &[],
        }
    }

    /// Solution cost in moves, if solved.
    pub fn cost(&self) -> Option<usize> {
        match &self.outcome {
            Outcome::Solved(path) => Some(path.len() - 1),
            _ => None,
        }
    }
}

/// IDA*: repeated depth-first probes with a rising f-bound, seeded with the
/// heuristic value of the start board. Memory stays proportional to the
/// search depth instead of the frontier size.
pub struct Solver<H: Heuristic> {
    heuristic: H,
    max_depth: u32,
}

/// Result of one depth-limited probe. `Found` carries the solution boards
/// tail-first (goal down to the probe root); `Pruned` carries the minimum
/// f-value among cut-off descendants, used to tighten the next bound.
enum Probe {
    Found(Vec<Board>),
    Pruned(u32),
}

/// Per-iteration mutable search context.
struct Iteration<'a, H: Heuristic> {
    heuristic: &'a H,
    bound: u32,
    max_depth: u32,
    nodes: u64,
    capped: bool,
}

impl<H: Heuristic> Solver<H> {
    pub fn new(heuristic: H) -> Self {
        Self {
            heuristic,
            max_depth: MAX_DEPTH,
        }
    }

    /// Lowers the depth cap below [`MAX_DEPTH`].
    pub fn with_depth_cap(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn solve(&self, start: &Board) -> SearchReport {
        let mut bound = self.heuristic.evaluate(start);
        let mut nodes = 0;

        loop {
            let mut iter = Iteration {
                heuristic: &self.heuristic,
                bound,
                max_depth: self.max_depth,
                nodes: 0,
                capped: false,
            };
            let probe = iter.probe(start, None, 0);
            nodes += iter.nodes;

            match probe {
                Probe::Found(mut tail) => {
                    tail.reverse();
                    return SearchReport {
                        outcome: Outcome::Solved(tail),
                        nodes_visited: nodes,
                    };
                }
                Probe::Pruned(INFINITE) => {
                    let outcome = if iter.capped {
                        Outcome::DepthCapped
                    } else {
                        Outcome::Exhausted
                    };
                    return SearchReport {
                        outcome,
                        nodes_visited: nodes,
                    };
                }
                // The minimum excess always exceeds the bound it was
                // collected under, so the bound rises every iteration.
                Probe::Pruned(next) => bound = next,
            }
        }
    }
}

impl<H: Heuristic> Iteration<'_, H> {
    /// Depth-first search from `board` at depth `g`, cut off where
    /// `g + h > bound`.
    fn probe(&mut self, board: &Board, prev: Option<&Board>, g: u32) -> Probe {
        self.nodes += 1;

        let h = self.heuristic.evaluate(board);
        let f = g + h;
        if f > self.bound {
            return Probe::Pruned(f);
        }
        if g >= self.max_depth {
            // A capped node must not feed the next bound: its f does not
            // exceed the current bound, and no bound lets it expand.
            self.capped = true;
            return Probe::Pruned(INFINITE);
        }
        if h == 0 {
            return Probe::Found(vec![board.clone()]);
        }

        let mut min = INFINITE;
        for succ in board.successors() {
            // Skip the move that undoes the one that got us here.
            if prev.is_some_and(|p| *p == succ) {
                continue;
            }
            match self.probe(&succ, Some(board), g + 1) {
                Probe::Found(mut tail) => {
                    tail.push(board.clone());
                    return Probe::Found(tail);
                }
                Probe::Pruned(t) => min = min.min(t),
            }
        }
        Probe::Pruned(min)
    }
}
