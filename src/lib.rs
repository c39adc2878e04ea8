//! # wormhole_routing
//!
//! Least-cost routing on a terrain-weighted grid with
//! [von Neumann](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood) (4-directional)
//! connectivity. Cells are [Open](TerrainKind::Open) (cost 1),
//! [Difficult](TerrainKind::Difficult) (cost 2) or [Blocked](TerrainKind::Blocked), and the cost
//! of a move is the cost of the cell being entered.
//!
//! On top of the plain shortest path search, a grid may carry unpaired wormhole entrances and
//! exits: any entrance teleports to any exit. The [RoutePlanner] computes the direct route and
//! the best teleport-assisted route and reports whichever is shorter. Like
//! [grid_pathfinding](https://crates.io/crates/grid_pathfinding), the grid keeps
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) around so that
//! hopeless searches are rejected without flood-filling the grid.
//!
//! ```
//! use wormhole_routing::{Board, RoutePlanner};
//!
//! let mut board: Board = "\
//! S.#..
//! E.#.X
//! ..#.G"
//!     .parse()
//!     .unwrap();
//! let mut planner = RoutePlanner::new();
//! let route = board.plan(&mut planner).unwrap();
//! assert!(route.is_wormhole());
//! assert_eq!(route.len(), 4);
//! ```
mod astar_context;
pub mod board;
pub mod error;
pub mod grid_map;
pub mod path;
pub mod planner;
pub mod position;
pub mod request;
pub mod search;
pub mod selector;
pub mod solver;
pub mod terrain;
pub mod wormhole;

pub use board::{Board, Brush};
pub use error::{BoardError, GridError, RouteError};
pub use grid_map::GridMap;
pub use path::{Path, Route, Wormhole};
pub use planner::{PlannerConfig, RoutePlanner};
pub use position::Position;
pub use request::RouteRequest;
pub use search::ShortestPathSearch;
pub use selector::{RouteMetric, RouteSelector};
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};
pub use terrain::TerrainKind;
pub use wormhole::WormholeRouter;

use fxhash::FxBuildHasher;
use indexmap::IndexSet;

/// Insertion-ordered set used for wormhole markers. Enumeration order decides ties between
/// equally good entrances or exits.
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Cost of entering an [Open](TerrainKind::Open) cell.
pub const OPEN_COST: i32 = 1;
/// Cost of entering a [Difficult](TerrainKind::Difficult) cell.
pub const DIFFICULT_COST: i32 = 2;
/// Cheapest possible move, which keeps the Manhattan heuristic admissible.
pub const MIN_STEP_COST: i32 = OPEN_COST;

pub(crate) const N_SMALLVEC_SIZE: usize = 4;
