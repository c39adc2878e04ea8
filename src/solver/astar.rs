use crate::{solver::GridSolver, GridMap, Position, MIN_STEP_COST};

use super::Successors;

/// A* with the Manhattan distance as heuristic. Every move costs at least [MIN_STEP_COST], so the
/// heuristic is admissible and consistent as long as `heuristic_factor` does not exceed 1.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSolver for AstarSolver {
    type Successors = Successors;

    fn successors(&self, grid: &GridMap, node: &Position) -> Self::Successors {
        grid.neighborhood_points_and_cost(node)
    }

    /// Just the Manhattan distance times the cheapest step, scaled by the heuristic factor.
    fn heuristic(&self, p1: &Position, p2: &Position) -> i32 {
        ((p1.manhattan_distance(p2) * MIN_STEP_COST) as f32 * self.heuristic_factor) as i32
    }
}
