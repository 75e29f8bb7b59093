use std::{collections::HashSet, rc::Rc};

use log::{debug, trace};

use crate::{
    board::Board,
    config::{DuplicateCheck, SolverConfig},
    error::{Error, Result},
    frontier::Frontier,
    moves::Move,
    node::Node,
};

const PROGRESS_INTERVAL: usize = 100_000;

/// Counters accumulated over both searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from a frontier and expanded.
    pub expanded: usize,
    /// Nodes pushed onto a frontier.
    pub generated: usize,
    /// Neighbors rejected as already seen.
    pub pruned: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Boards of a shortest solution, from the start to the goal inclusive.
    Solved(Vec<Board>),
    Unsolvable,
}

enum Step {
    Goal(Rc<Node>),
    Expanded,
    Exhausted,
}

/// One best-first search from a single start board.
struct Search {
    label: &'static str,
    frontier: Frontier,
    closed: Option<HashSet<Board>>,
}

impl Search {
    fn new(label: &'static str, start: Board, check: DuplicateCheck) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(Node::root(start));
        let closed = match check {
            DuplicateCheck::Ancestors => None,
            DuplicateCheck::ClosedSet => Some(HashSet::new()),
        };
        Self {
            label,
            frontier,
            closed,
        }
    }

    fn pop(&mut self) -> Option<Rc<Node>> {
        loop {
            let node = self.frontier.pop()?;
            if let Some(closed) = &mut self.closed {
                // A board can be queued more than once before it is expanded.
                if !closed.insert(node.board().clone()) {
                    continue;
                }
            }
            return Some(node);
        }
    }

    fn is_seen(&self, node: &Node, board: &Board) -> bool {
        match &self.closed {
            Some(closed) => closed.contains(board),
            None => node.has_ancestor(board),
        }
    }

    /// Expands the lowest-priority node. Goal boards are recognised when
    /// generated, not when popped.
    fn step(&mut self, stats: &mut SearchStats) -> Step {
        let Some(node) = self.pop() else {
            return Step::Exhausted;
        };
        stats.expanded += 1;
        trace!(
            "{}: expanding moves={} priority={} frontier={}",
            self.label,
            node.moves(),
            node.priority(),
            self.frontier.len()
        );

        for board in node.board().neighbors() {
            if board.is_goal() {
                return Step::Goal(node.child(board));
            }
            if self.is_seen(&node, &board) {
                stats.pruned += 1;
                continue;
            }
            stats.generated += 1;
            self.frontier.push(node.child(board));
        }
        Step::Expanded
    }
}

/// Finds a shortest solution of a board, or proves there is none.
///
/// Two searches advance in lock-step: one from the board and one from its
/// [twin](Board::twin). Exactly one of the two can reach the goal, so the
/// first to get there decides the outcome.
///
/// ```
/// use slider_puzzle::{Board, Solver};
///
/// let board = Board::new(&[[1, 2, 3], [4, 0, 6], [7, 5, 8]])?;
/// let solver = Solver::new(board);
/// assert!(solver.is_solvable());
/// assert_eq!(solver.moves(), Some(2));
/// # Ok::<(), slider_puzzle::BoardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    outcome: Outcome,
    stats: SearchStats,
}

impl Solver {
    /// Solves `initial` with the default configuration and no expansion limit.
    pub fn new(initial: Board) -> Self {
        match Self::with_config(initial, &SolverConfig::default()) {
            Ok(solver) => solver,
            Err(err) => unreachable!("unbounded search failed: {err}"),
        }
    }

    /// Solves `initial` under `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BudgetExhausted`] if `config.max_expansions` is
    /// reached before either search finds the goal.
    pub fn with_config(initial: Board, config: &SolverConfig) -> Result<Self> {
        let mut stats = SearchStats::default();

        if initial.is_goal() {
            debug!("start board is already the goal");
            return Ok(Self::finish(Outcome::Solved(vec![initial]), stats));
        }

        let mut shadow = match initial.twin() {
            Some(twin) if twin.is_goal() => {
                debug!("twin of the start board is the goal");
                return Ok(Self::finish(Outcome::Unsolvable, stats));
            }
            twin => twin.map(|twin| Search::new("shadow", twin, config.duplicate_check)),
        };

        debug!(
            "searching {0}x{0} board: hamming={1} manhattan={2} duplicate_check={3}",
            initial.dimension(),
            initial.hamming(),
            initial.manhattan(),
            config.duplicate_check
        );
        let mut primary = Search::new("primary", initial, config.duplicate_check);
        let mut next_report = PROGRESS_INTERVAL;

        loop {
            check_budget(&stats, config)?;
            match primary.step(&mut stats) {
                Step::Goal(node) => return Ok(Self::finish(Outcome::Solved(node.path()), stats)),
                Step::Exhausted => {
                    debug!("primary search exhausted its component");
                    return Ok(Self::finish(Outcome::Unsolvable, stats));
                }
                Step::Expanded => {}
            }

            if let Some(search) = &mut shadow {
                check_budget(&stats, config)?;
                match search.step(&mut stats) {
                    Step::Goal(_) => return Ok(Self::finish(Outcome::Unsolvable, stats)),
                    Step::Exhausted => {
                        debug!("shadow search exhausted its component; continuing primary alone");
                        shadow = None;
                    }
                    Step::Expanded => {}
                }
            }

            if stats.expanded >= next_report {
                debug!(
                    "expanded={} generated={} primary frontier={} shadow frontier={}",
                    stats.expanded,
                    stats.generated,
                    primary.frontier.len(),
                    shadow.as_ref().map_or(0, |s| s.frontier.len())
                );
                next_report += PROGRESS_INTERVAL;
            }
        }
    }

    fn finish(outcome: Outcome, stats: SearchStats) -> Self {
        match &outcome {
            Outcome::Solved(path) => debug!(
                "solved in {} moves after {} expansions",
                path.len() - 1,
                stats.expanded
            ),
            Outcome::Unsolvable => debug!("unsolvable after {} expansions", stats.expanded),
        }
        Self { outcome, stats }
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn is_solvable(&self) -> bool {
        matches!(self.outcome, Outcome::Solved(_))
    }

    /// Minimum number of slides to reach the goal, or `None` if unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.solution().map(|path| path.len() - 1)
    }

    /// Boards of a shortest solution from the start to the goal inclusive,
    /// or `None` if unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        match &self.outcome {
            Outcome::Solved(path) => Some(path),
            Outcome::Unsolvable => None,
        }
    }

    /// The solution as a sequence of slides.
    pub fn slides(&self) -> Option<Vec<Move>> {
        self.solution()?
            .windows(2)
            .map(|pair| pair[0].slide_between(&pair[1]))
            .collect()
    }
}

fn check_budget(stats: &SearchStats, config: &SolverConfig) -> Result<()> {
    match config.max_expansions {
        Some(limit) if stats.expanded >= limit => {
            debug!("giving up after {} expansions", stats.expanded);
            Err(Error::BudgetExhausted { limit })
        }
        _ => Ok(()),
    }
}
