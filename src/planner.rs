use log::{debug, info};

use crate::{
    AstarSolver, GridSolver, Route, RouteError, RouteMetric, RouteRequest, RouteSelector,
    ShortestPathSearch, WormholeRouter,
};

/// Settings for a [RoutePlanner].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Metric used both to pick the best entrance/exit and to compare the direct route with the
    /// wormhole route.
    pub metric: RouteMetric,
    /// Treat orthogonally adjacent endpoints as a two node path without searching.
    pub adjacency_shortcut: bool,
    /// Skip searches towards goals outside the start's connected component.
    pub prune_unreachable: bool,
    /// Ignore wormhole entrances and exits that cannot be reached instead of giving up on the
    /// wormhole route.
    pub skip_unreachable_markers: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            metric: RouteMetric::NodeCount,
            adjacency_shortcut: true,
            prune_unreachable: true,
            skip_unreachable_markers: false,
        }
    }
}

/// Entry point of the engine: turns a [RouteRequest] into the [Route] to report, or into the
/// reason why there is none.
///
/// Planning is a pure function of the request and the configuration. The planner only keeps
/// scratch space for its searches between requests.
#[derive(Clone, Debug)]
pub struct RoutePlanner<S = AstarSolver> {
    pub config: PlannerConfig,
    search: ShortestPathSearch<S>,
}

impl RoutePlanner<AstarSolver> {
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default())
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        Self::with_solver(AstarSolver::new(), config)
    }
}

impl Default for RoutePlanner<AstarSolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GridSolver> RoutePlanner<S> {
    pub fn with_solver(solver: S, config: PlannerConfig) -> Self {
        RoutePlanner {
            config,
            search: ShortestPathSearch::with_solver(solver),
        }
    }

    pub fn solver(&self) -> &S {
        &self.search.solver
    }

    /// Computes the route for `request`.
    ///
    /// Missing endpoints are reported before anything else. When both a direct route and a
    /// wormhole route exist, the one that is smaller under the configured metric wins and the
    /// direct route is kept on a tie. Wormholes are not considered for adjacent endpoints, since
    /// a two node direct route cannot lose.
    pub fn plan(&mut self, request: &RouteRequest) -> Result<Route, RouteError> {
        let (start, end) = RouteSelector::check_endpoints(request.start, request.end)?;
        request.validate()?;
        self.search.adjacency_shortcut = self.config.adjacency_shortcut;
        self.search.prune_unreachable = self.config.prune_unreachable;
        let grid = request.grid;
        info!("Planning route from {} to {}", start, end);

        let direct = self.search.find(grid, start, end)?.map(Route::direct);
        if direct.is_none() {
            debug!("No direct route from {} to {}", start, end);
        }
        let wormhole = if start.is_adjacent(&end) {
            debug!("{} and {} are adjacent, skipping wormholes", start, end);
            None
        } else {
            WormholeRouter {
                metric: self.config.metric,
                skip_unreachable: self.config.skip_unreachable_markers,
            }
            .route(
                &mut self.search,
                grid,
                start,
                end,
                &request.entrances,
                &request.exits,
            )?
        };
        let route = RouteSelector::new(self.config.metric).select(direct, wormhole)?;
        info!(
            "Found {} route with {} nodes and cost {}",
            if route.is_wormhole() { "wormhole" } else { "direct" },
            route.len(),
            route.cost()
        );
        Ok(route)
    }
}
