use crate::{FxIndexSet, GridError, GridMap, Position};

/// Everything a route computation reads: the terrain, the endpoints and the wormhole markers.
/// The grid is borrowed, so it cannot change while a request is being planned.
#[derive(Clone, Debug)]
pub struct RouteRequest<'a> {
    pub grid: &'a GridMap,
    pub start: Option<Position>,
    pub end: Option<Position>,
    pub entrances: FxIndexSet<Position>,
    pub exits: FxIndexSet<Position>,
}

impl<'a> RouteRequest<'a> {
    pub fn new(grid: &'a GridMap) -> RouteRequest<'a> {
        RouteRequest {
            grid,
            start: None,
            end: None,
            entrances: FxIndexSet::default(),
            exits: FxIndexSet::default(),
        }
    }

    pub fn with_start(mut self, start: Position) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: Position) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_entrance(mut self, entrance: Position) -> Self {
        self.entrances.insert(entrance);
        self
    }

    pub fn with_exit(mut self, exit: Position) -> Self {
        self.exits.insert(exit);
        self
    }

    /// Checks that every position in the request lies on the grid.
    pub fn validate(&self) -> Result<(), GridError> {
        self.start
            .iter()
            .chain(self.end.iter())
            .chain(self.entrances.iter())
            .chain(self.exits.iter())
            .try_for_each(|p| self.grid.check_bounds(*p))
    }
}
