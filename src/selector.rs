use log::info;

use crate::{Path, Position, Route, RouteError};

/// How candidate routes are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RouteMetric {
    /// Fewest nodes wins, regardless of terrain. A short route through difficult terrain can beat
    /// a longer but cheaper one.
    #[default]
    NodeCount,
    /// Lowest accumulated terrain cost wins.
    WeightedCost,
}

impl RouteMetric {
    pub fn of_path(&self, path: &Path) -> usize {
        self.measure(path.len(), path.cost())
    }

    pub fn of_route(&self, route: &Route) -> usize {
        self.measure(route.len(), route.cost())
    }

    fn measure(&self, len: usize, cost: i32) -> usize {
        match self {
            RouteMetric::NodeCount => len,
            RouteMetric::WeightedCost => cost.max(0) as usize,
        }
    }
}

/// Resolves the direct route and the wormhole route into the single route that is reported.
#[derive(Clone, Copy, Debug, Default)]
pub struct RouteSelector {
    pub metric: RouteMetric,
}

impl RouteSelector {
    pub fn new(metric: RouteMetric) -> RouteSelector {
        RouteSelector { metric }
    }

    /// Classifies missing endpoints before any search is attempted.
    pub fn check_endpoints(
        start: Option<Position>,
        end: Option<Position>,
    ) -> Result<(Position, Position), RouteError> {
        match (start, end) {
            (Some(start), Some(end)) => Ok((start, end)),
            (None, None) => Err(RouteError::NoStartAndEnd),
            (Some(_), None) => Err(RouteError::NoEnd),
            (None, Some(_)) => Err(RouteError::NoStart),
        }
    }

    /// Picks the better of the two candidates. On a tie the direct route is kept.
    pub fn select(
        &self,
        direct: Option<Route>,
        wormhole: Option<Route>,
    ) -> Result<Route, RouteError> {
        match (direct, wormhole) {
            (None, None) => Err(RouteError::Unreachable),
            (Some(direct), None) => Ok(direct),
            (None, Some(wormhole)) => Ok(wormhole),
            (Some(direct), Some(wormhole)) => {
                let direct_len = self.metric.of_route(&direct);
                let wormhole_len = self.metric.of_route(&wormhole);
                if wormhole_len < direct_len {
                    info!(
                        "Wormhole route ({:?} {}) beats direct route ({})",
                        self.metric, wormhole_len, direct_len
                    );
                    Ok(wormhole)
                } else {
                    Ok(direct)
                }
            }
        }
    }
}
