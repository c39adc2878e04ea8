use core::fmt;
use grid_util::{SimpleValueGrid, ValueGrid};
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::{GridError, Position, TerrainKind, N_SMALLVEC_SIZE};

/// [GridMap] stores the [TerrainKind] of every cell in a [SimpleValueGrid] and maintains
/// information about connected components using a [UnionFind] structure, so that searches
/// towards a goal that cannot be reached are rejected without exploring the grid.
///
/// Rows run along the y axis of the underlying grid and columns along the x axis.
#[derive(Clone, Debug)]
pub struct GridMap {
    grid: SimpleValueGrid<TerrainKind>,
    rows: usize,
    cols: usize,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl GridMap {
    /// Creates a `rows` x `cols` grid filled with `fill`.
    pub fn new(rows: usize, cols: usize, fill: TerrainKind) -> Result<GridMap, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let mut grid_map = GridMap {
            grid: SimpleValueGrid::new(cols, rows, fill),
            rows,
            cols,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid_map.generate_components();
        Ok(grid_map)
    }

    /// Creates a grid from a terrain matrix given row by row.
    pub fn from_rows<R: AsRef<[TerrainKind]>>(terrain: &[R]) -> Result<GridMap, GridError> {
        let rows = terrain.len();
        let cols = terrain.first().map_or(0, |r| r.as_ref().len());
        let mut grid_map = GridMap::new(rows, cols, TerrainKind::Open)?;
        for (row, values) in terrain.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(GridError::RaggedRows {
                    row,
                    len: values.len(),
                    expected: cols,
                });
            }
            for (col, kind) in values.iter().enumerate() {
                grid_map.grid.set(col as i32, row as i32, *kind);
            }
        }
        grid_map.generate_components();
        Ok(grid_map)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.col >= 0 && self.grid.index_in_bounds(pos.col, pos.row)
    }

    pub fn check_bounds(&self, pos: Position) -> Result<(), GridError> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                position: pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn terrain(&self, pos: Position) -> Result<TerrainKind, GridError> {
        self.check_bounds(pos)?;
        Ok(self.terrain_at(pos))
    }

    /// The cost of entering `pos`, [None] if it is blocked.
    pub fn cost(&self, pos: Position) -> Result<Option<i32>, GridError> {
        Ok(self.terrain(pos)?.cost())
    }

    pub fn is_blocked(&self, pos: Position) -> Result<bool, GridError> {
        Ok(self.terrain(pos)?.is_blocked())
    }

    /// Callers must have checked that `pos` is in bounds.
    pub(crate) fn terrain_at(&self, pos: Position) -> TerrainKind {
        debug_assert!(self.in_bounds(pos));
        self.grid.get(pos.col, pos.row)
    }

    pub(crate) fn can_move_to(&self, pos: Position) -> bool {
        self.in_bounds(pos) && !self.terrain_at(pos).is_blocked()
    }

    /// The orthogonal neighbours of `pos` that lie on the grid and are not blocked.
    pub fn neighbors(&self, pos: Position) -> SmallVec<[Position; N_SMALLVEC_SIZE]> {
        pos.neumann_neighborhood()
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    /// Like [neighbors](Self::neighbors), paired with the cost of entering each neighbour.
    pub fn neighborhood_points_and_cost(
        &self,
        pos: &Position,
    ) -> SmallVec<[(Position, i32); N_SMALLVEC_SIZE]> {
        pos.neumann_neighborhood()
            .into_iter()
            .filter_map(|p| {
                if self.in_bounds(p) {
                    self.terrain_at(p).cost().map(|c| (p, c))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Sums the entry cost of every node after the first. Returns [None] if the sequence enters a
    /// blocked cell.
    pub fn path_cost(&self, nodes: &[Position]) -> Result<Option<i32>, GridError> {
        nodes.iter().skip(1).try_fold(Some(0), |total, p| {
            Ok(total.zip(self.cost(*p)?).map(|(t, c)| t + c))
        })
    }

    /// Updates the terrain at a position. Joins newly connected components and flags the
    /// components as dirty if they are (potentially) broken apart into multiple.
    pub fn set(&mut self, pos: Position, kind: TerrainKind) -> Result<(), GridError> {
        let previous = self.terrain(pos)?;
        self.grid.set(pos.col, pos.row, kind);
        if kind.is_blocked() {
            if !previous.is_blocked() {
                self.components_dirty = true;
            }
        } else {
            let ix = self.ix(&pos);
            for n in self.neighbors(pos) {
                let n_ix = self.ix(&n);
                self.components.union(ix, n_ix);
            }
        }
        Ok(())
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} grid",
            self.rows, self.cols
        );
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                let point = Position::new(row, col);
                if self.terrain_at(point).is_blocked() {
                    continue;
                }
                let parent_ix = self.ix(&point);
                for p in [Position::new(row + 1, col), Position::new(row, col + 1)] {
                    if self.can_move_to(p) {
                        let ix = self.ix(&p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }

    /// Retrieves the component id a given [Position] belongs to.
    pub fn get_component(&self, pos: &Position) -> Result<usize, GridError> {
        self.check_bounds(*pos)?;
        Ok(self.components.find(self.ix(pos)))
    }

    /// Checks whether a search from `start` could reach `goal`. A blocked start is left through
    /// its open neighbours, a blocked goal can never be entered. While the components are dirty
    /// this cannot rule anything out and answers [true].
    pub fn reachable(&self, start: &Position, goal: &Position) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks whether `goal` is certainly out of reach from `start`.
    pub fn unreachable(&self, start: &Position, goal: &Position) -> bool {
        if start == goal {
            return false;
        }
        if !self.in_bounds(*start) || !self.in_bounds(*goal) {
            return true;
        }
        if self.components_dirty {
            return false;
        }
        if self.terrain_at(*goal).is_blocked() {
            return true;
        }
        let goal_ix = self.ix(goal);
        if self.terrain_at(*start).is_blocked() {
            !self
                .neighbors(*start)
                .iter()
                .any(|n| self.components.equiv(self.ix(n), goal_ix))
        } else {
            !self.components.equiv(self.ix(start), goal_ix)
        }
    }

    fn ix(&self, pos: &Position) -> usize {
        pos.row as usize * self.cols + pos.col as usize
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows as i32 {
            let line = (0..self.cols as i32)
                .map(|col| self.terrain_at(Position::new(row, col)).symbol())
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
