use log::{debug, warn};

use crate::astar_context::SearchContext;
use crate::{AstarSolver, GridError, GridMap, GridSolver, Path, Position};

/// Single start/goal shortest path search over a [GridMap].
///
/// Holds a reusable search context, so repeated calls do not reallocate the open list and parent
/// map. The solver decides how successors are generated and how the goal is estimated.
#[derive(Clone, Debug)]
pub struct ShortestPathSearch<S = AstarSolver> {
    pub solver: S,
    /// Return `[start, goal]` right away when the two are orthogonally adjacent.
    pub adjacency_shortcut: bool,
    /// Reject goals in another connected component without searching.
    pub prune_unreachable: bool,
    context: SearchContext<Position, i32>,
}

impl ShortestPathSearch<AstarSolver> {
    pub fn new() -> Self {
        Self::with_solver(AstarSolver::new())
    }
}

impl Default for ShortestPathSearch<AstarSolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GridSolver> ShortestPathSearch<S> {
    pub fn with_solver(solver: S) -> Self {
        ShortestPathSearch {
            solver,
            adjacency_shortcut: true,
            prune_unreachable: true,
            context: SearchContext::new(),
        }
    }

    /// Computes a least-cost path from `start` to `goal`, where moving into a cell costs that
    /// cell's terrain cost. Returns `Ok(None)` if the goal cannot be reached, which is an
    /// ordinary outcome. Positions outside the grid are an error.
    ///
    /// The start cell may be blocked since it is never entered. A blocked goal is only reached
    /// through the adjacency shortcut.
    pub fn find(
        &mut self,
        grid: &GridMap,
        start: Position,
        goal: Position,
    ) -> Result<Option<Path>, GridError> {
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        if self.adjacency_shortcut && start.is_adjacent(&goal) {
            let cost = grid.terrain_at(goal).cost().unwrap_or(0);
            return Ok(Some(Path::from_parts(vec![start, goal], cost)));
        }
        let pruning = self.prune_unreachable && !grid.components_dirty();
        if pruning && grid.unreachable(&start, &goal) {
            debug!("{} is not reachable from {}", goal, start);
            return Ok(None);
        }
        let solver = &self.solver;
        let result = self.context.astar(
            &start,
            |node| solver.successors(grid, node),
            |point| solver.heuristic(point, &goal),
            |point| *point == goal,
        );
        match result {
            Some((nodes, cost)) => Ok(Some(Path::from_parts(nodes, cost))),
            None => {
                if pruning {
                    warn!(
                        "Reachable goal {} could not be pathed to from {}, are the components correct?",
                        goal, start
                    );
                }
                Ok(None)
            }
        }
    }
}
