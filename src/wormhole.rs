use itertools::process_results;
use log::debug;

use crate::{
    FxIndexSet, GridError, GridMap, GridSolver, Path, Position, Route, RouteMetric,
    ShortestPathSearch,
};

/// Builds the best teleport-assisted route. Entrances and exits are not paired: the route walks
/// to whichever entrance is closest to the start and leaves from whichever exit is closest to the
/// goal.
///
/// By default a single entrance that cannot be reached from the start, or a single exit that
/// cannot reach the goal, rules out the whole teleport route. With `skip_unreachable` set such
/// markers are ignored and the best of the remaining ones is used.
#[derive(Clone, Copy, Debug, Default)]
pub struct WormholeRouter {
    pub metric: RouteMetric,
    pub skip_unreachable: bool,
}

impl WormholeRouter {
    pub fn new(metric: RouteMetric) -> WormholeRouter {
        WormholeRouter {
            metric,
            skip_unreachable: false,
        }
    }

    /// Returns `Ok(None)` when there are no entrances or no exits, or when the best entrance or
    /// exit segment does not exist.
    pub fn route<S: GridSolver>(
        &self,
        search: &mut ShortestPathSearch<S>,
        grid: &GridMap,
        start: Position,
        end: Position,
        entrances: &FxIndexSet<Position>,
        exits: &FxIndexSet<Position>,
    ) -> Result<Option<Route>, GridError> {
        if entrances.is_empty() || exits.is_empty() {
            debug!(
                "No wormhole route: {} entrances, {} exits",
                entrances.len(),
                exits.len()
            );
            return Ok(None);
        }
        let to_entrance = self.best_segment(
            entrances
                .iter()
                .map(|&entrance| search.find(grid, start, entrance)),
        )?;
        let Some(to_entrance) = to_entrance else {
            debug!("Best wormhole entrance is not reachable from {}", start);
            return Ok(None);
        };
        let from_exit = self.best_segment(exits.iter().map(|&exit| search.find(grid, exit, end)))?;
        let Some(from_exit) = from_exit else {
            debug!("{} is not reachable from the best wormhole exit", end);
            return Ok(None);
        };
        let route = Route::through_wormhole(to_entrance, from_exit);
        debug!(
            "Best wormhole route uses {:?} with {} nodes",
            route.wormhole(),
            route.len()
        );
        Ok(Some(route))
    }

    /// The smallest segment, or [None] if any segment is missing. Missing segments are dropped
    /// instead when `skip_unreachable` is set. Among equally good segments the first one
    /// enumerated is kept.
    fn best_segment<I>(&self, segments: I) -> Result<Option<Path>, GridError>
    where
        I: IntoIterator<Item = Result<Option<Path>, GridError>>,
    {
        process_results(segments, |found| {
            if self.skip_unreachable {
                found
                    .flatten()
                    .min_by_key(|segment| self.metric.of_path(segment))
            } else {
                found
                    .collect::<Option<Vec<_>>>()?
                    .into_iter()
                    .min_by_key(|segment| self.metric.of_path(segment))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TerrainKind::*;

    fn markers(points: &[(i32, i32)]) -> FxIndexSet<Position> {
        points.iter().map(|&p| Position::from(p)).collect()
    }

    #[test]
    fn no_markers_no_route() {
        let grid = GridMap::new(3, 3, Open).unwrap();
        let mut search = ShortestPathSearch::new();
        let router = WormholeRouter::default();
        let start = Position::new(0, 0);
        let end = Position::new(2, 2);
        let some = markers(&[(1, 1)]);
        let none = FxIndexSet::default();
        for (entrances, exits) in [(&none, &some), (&some, &none), (&none, &none)] {
            assert_eq!(
                router.route(&mut search, &grid, start, end, entrances, exits),
                Ok(None)
            );
        }
    }

    #[test]
    fn concatenates_best_segments() {
        //  _____
        // |S.#..|
        // |E.#.X|
        // |..#.G|
        //  _____
        let grid = GridMap::from_rows(&[
            [Open, Open, Blocked, Open, Open],
            [Open, Open, Blocked, Open, Open],
            [Open, Open, Blocked, Open, Open],
        ])
        .unwrap();
        let mut search = ShortestPathSearch::new();
        let router = WormholeRouter::default();
        let route = router
            .route(
                &mut search,
                &grid,
                Position::new(0, 0),
                Position::new(2, 4),
                &markers(&[(2, 1), (1, 0)]),
                &markers(&[(0, 3), (1, 4)]),
            )
            .unwrap()
            .unwrap();
        assert_eq!(
            route.nodes(),
            &[
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(1, 4),
                Position::new(2, 4)
            ]
        );
        assert_eq!(route.cost(), 2);
    }

    #[test]
    fn first_enumerated_wins_ties() {
        let grid = GridMap::new(3, 3, Open).unwrap();
        let mut search = ShortestPathSearch::new();
        let router = WormholeRouter::default();
        let start = Position::new(1, 1);
        let route = router
            .route(
                &mut search,
                &grid,
                start,
                Position::new(2, 2),
                &markers(&[(1, 2), (0, 1), (1, 0)]),
                &markers(&[(2, 1)]),
            )
            .unwrap()
            .unwrap();
        assert_eq!(route.wormhole().map(|w| w.entrance), Some(Position::new(1, 2)));
    }

    #[test]
    fn unreachable_marker_rules_out_wormhole() {
        //  ____
        // |S#..|
        // |.#..|
        // |E#.G|
        //  ____
        let grid = GridMap::from_rows(&[
            [Open, Blocked, Open, Open],
            [Open, Blocked, Open, Open],
            [Open, Blocked, Open, Open],
        ])
        .unwrap();
        let mut search = ShortestPathSearch::new();
        let start = Position::new(0, 0);
        let end = Position::new(2, 3);
        // The entrance at (0, 3) is walled off from the start, the one at (2, 0) is not
        let entrances = markers(&[(0, 3), (2, 0)]);
        let exits = markers(&[(0, 2)]);
        let router = WormholeRouter::default();
        assert_eq!(
            router.route(&mut search, &grid, start, end, &entrances, &exits),
            Ok(None)
        );
        // The order of the markers does not matter
        let reversed = markers(&[(2, 0), (0, 3)]);
        assert_eq!(
            router.route(&mut search, &grid, start, end, &reversed, &exits),
            Ok(None)
        );

        let skipping = WormholeRouter {
            skip_unreachable: true,
            ..WormholeRouter::default()
        };
        let route = skipping
            .route(&mut search, &grid, start, end, &entrances, &exits)
            .unwrap()
            .unwrap();
        assert_eq!(route.wormhole().map(|w| w.entrance), Some(Position::new(2, 0)));

        // An unreachable exit rules it out as well
        let exits = markers(&[(0, 2), (1, 0)]);
        assert_eq!(
            router.route(&mut search, &grid, start, end, &markers(&[(2, 0)]), &exits),
            Ok(None)
        );
        // No exit reaches the goal
        let route = skipping
            .route(&mut search, &grid, start, end, &markers(&[(2, 0)]), &markers(&[(1, 0)]))
            .unwrap();
        assert!(route.is_none());
    }

    #[test]
    fn weighted_metric_picks_cheaper_entrance() {
        //  ___
        // |~S.|
        // |...|
        //  ___
        let grid = GridMap::from_rows(&[[Difficult, Open, Open], [Open, Open, Open]]).unwrap();
        let mut search = ShortestPathSearch::new();
        let entrances = markers(&[(0, 0), (0, 2)]);
        let exits = markers(&[(1, 0)]);
        let start = Position::new(0, 1);
        let end = Position::new(1, 1);
        let by_count = WormholeRouter::new(RouteMetric::NodeCount)
            .route(&mut search, &grid, start, end, &entrances, &exits)
            .unwrap()
            .unwrap();
        assert_eq!(by_count.wormhole().map(|w| w.entrance), Some(Position::new(0, 0)));
        let by_cost = WormholeRouter::new(RouteMetric::WeightedCost)
            .route(&mut search, &grid, start, end, &entrances, &exits)
            .unwrap()
            .unwrap();
        assert_eq!(by_cost.wormhole().map(|w| w.entrance), Some(Position::new(0, 2)));
    }

    #[test]
    fn markers_out_of_bounds() {
        let grid = GridMap::new(2, 2, Open).unwrap();
        let mut search = ShortestPathSearch::new();
        let result = WormholeRouter::default().route(
            &mut search,
            &grid,
            Position::new(0, 0),
            Position::new(1, 1),
            &markers(&[(5, 5)]),
            &markers(&[(1, 0)]),
        );
        assert!(matches!(result, Err(GridError::OutOfBounds { .. })));
    }
}
