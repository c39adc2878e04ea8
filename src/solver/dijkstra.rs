use crate::{solver::GridSolver, GridMap, Position};

use super::Successors;

/// Uninformed search: expands nodes purely by accumulated cost.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Successors = Successors;

    fn successors(&self, grid: &GridMap, node: &Position) -> Self::Successors {
        grid.neighborhood_points_and_cost(node)
    }

    fn heuristic(&self, _: &Position, _: &Position) -> i32 {
        0
    }
}
