use crate::{GridMap, Position, N_SMALLVEC_SIZE};
use smallvec::SmallVec;

pub mod astar;
pub mod dijkstra;

/// Successors produced by the solvers in this crate.
pub type Successors = SmallVec<[(Position, i32); N_SMALLVEC_SIZE]>;

/// Strategy plugged into a [ShortestPathSearch](crate::ShortestPathSearch): which nodes follow a
/// given node, and how far the goal is estimated to be.
pub trait GridSolver {
    type Successors: IntoIterator<Item = (Position, i32)>;

    /// Open orthogonal neighbours of `node` paired with the cost of entering them.
    fn successors(&self, grid: &GridMap, node: &Position) -> Self::Successors;

    /// Estimated cost from `p1` to `p2`. Must never overestimate the true cost.
    fn heuristic(&self, p1: &Position, p2: &Position) -> i32;
}
