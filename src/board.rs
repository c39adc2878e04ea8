//! An editable grid: terrain plus the start, goal and wormhole markers painted on it.
//!
//! The ASCII form used by [Board]'s [FromStr] and [Display](fmt::Display) implementations has one
//! line per row. Terrain is drawn as `.` (open), `~` (difficult) and `#` (blocked). A marker
//! replaces the terrain symbol, and the terrain below it is told by the symbol used:
//!
//! | Marker | Open | Difficult | Blocked |
//! |---|---|---|---|
//! | start | `S` | `s` | `1` |
//! | goal | `G` | `g` | `2` |
//! | wormhole entrance | `E` | `e` | `3` |
//! | wormhole exit | `X` | `x` | `4` |
use core::fmt;
use std::str::FromStr;

use log::debug;

use crate::{
    BoardError, FxIndexSet, GridError, GridMap, GridSolver, Position, Route, RouteError,
    RoutePlanner, RouteRequest, TerrainKind,
};

/// What a click on a cell paints there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Brush {
    Open,
    Difficult,
    Blocked,
    Start,
    End,
    Entrance,
    Exit,
}

impl Brush {
    fn terrain(self) -> Option<TerrainKind> {
        match self {
            Brush::Open => Some(TerrainKind::Open),
            Brush::Difficult => Some(TerrainKind::Difficult),
            Brush::Blocked => Some(TerrainKind::Blocked),
            _ => None,
        }
    }

    /// The symbol of a marker brush painted over `terrain`.
    fn marker_symbol(self, terrain: TerrainKind) -> Option<char> {
        let (_, symbols) = MARKER_SYMBOLS.iter().find(|(brush, _)| *brush == self)?;
        let i = UNDER_MARKER.iter().position(|kind| *kind == terrain)?;
        Some(symbols[i])
    }

    fn from_marker_symbol(symbol: char) -> Option<(Brush, TerrainKind)> {
        MARKER_SYMBOLS.iter().find_map(|(brush, symbols)| {
            let i = symbols.iter().position(|s| *s == symbol)?;
            Some((*brush, UNDER_MARKER[i]))
        })
    }
}

const UNDER_MARKER: [TerrainKind; 3] = [
    TerrainKind::Open,
    TerrainKind::Difficult,
    TerrainKind::Blocked,
];

const MARKER_SYMBOLS: [(Brush, [char; 3]); 4] = [
    (Brush::Start, ['S', 's', '1']),
    (Brush::End, ['G', 'g', '2']),
    (Brush::Entrance, ['E', 'e', '3']),
    (Brush::Exit, ['X', 'x', '4']),
];

#[derive(Clone, Debug)]
pub struct Board {
    grid: GridMap,
    start: Option<Position>,
    end: Option<Position>,
    entrances: FxIndexSet<Position>,
    exits: FxIndexSet<Position>,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Result<Board, GridError> {
        Ok(Board {
            grid: GridMap::new(rows, cols, TerrainKind::Open)?,
            start: None,
            end: None,
            entrances: FxIndexSet::default(),
            exits: FxIndexSet::default(),
        })
    }

    /// Clears terrain and markers and resizes the board.
    pub fn reset(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        *self = Board::new(rows, cols)?;
        Ok(())
    }

    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn entrances(&self) -> &FxIndexSet<Position> {
        &self.entrances
    }

    pub fn exits(&self) -> &FxIndexSet<Position> {
        &self.exits
    }

    /// The marker painted at `pos`, if any.
    pub fn marker_at(&self, pos: Position) -> Option<Brush> {
        if self.start == Some(pos) {
            Some(Brush::Start)
        } else if self.end == Some(pos) {
            Some(Brush::End)
        } else if self.entrances.contains(&pos) {
            Some(Brush::Entrance)
        } else if self.exits.contains(&pos) {
            Some(Brush::Exit)
        } else {
            None
        }
    }

    /// Paints `brush` at `pos` and reports whether anything changed.
    ///
    /// The start and the goal can only be placed while they are unset; a second start is
    /// ignored. Any other brush first removes whatever marker sits on the cell. Markers never
    /// change the terrain below them. Blocking a cell leaves the connected components dirty
    /// until the next [plan](Self::plan) or [update](Self::update).
    pub fn paint(&mut self, pos: Position, brush: Brush) -> Result<bool, GridError> {
        self.grid.check_bounds(pos)?;
        match brush {
            Brush::Start | Brush::End => {
                let slot = if brush == Brush::Start {
                    &self.start
                } else {
                    &self.end
                };
                if slot.is_some() {
                    debug!("{:?} is already placed, ignoring {}", brush, pos);
                    return Ok(false);
                }
                self.clear_marker(pos);
                if brush == Brush::Start {
                    self.start = Some(pos);
                } else {
                    self.end = Some(pos);
                }
            }
            Brush::Entrance => {
                self.clear_marker(pos);
                self.entrances.insert(pos);
            }
            Brush::Exit => {
                self.clear_marker(pos);
                self.exits.insert(pos);
            }
            Brush::Open | Brush::Difficult | Brush::Blocked => {
                self.clear_marker(pos);
                if let Some(kind) = brush.terrain() {
                    self.grid.set(pos, kind)?;
                }
            }
        }
        Ok(true)
    }

    fn clear_marker(&mut self, pos: Position) {
        if self.start == Some(pos) {
            self.start = None;
        }
        if self.end == Some(pos) {
            self.end = None;
        }
        self.entrances.shift_remove(&pos);
        self.exits.shift_remove(&pos);
    }

    /// Regenerates the connected components of the grid if painting has broken them up.
    pub fn update(&mut self) {
        self.grid.update();
    }

    /// A snapshot of the board to plan a route on. Until [update](Self::update) is called after
    /// blocking a cell, searches on it are not pruned by connected components.
    pub fn request(&self) -> RouteRequest<'_> {
        RouteRequest {
            grid: &self.grid,
            start: self.start,
            end: self.end,
            entrances: self.entrances.clone(),
            exits: self.exits.clone(),
        }
    }

    pub fn plan<S: GridSolver>(
        &mut self,
        planner: &mut RoutePlanner<S>,
    ) -> Result<Route, RouteError> {
        self.update();
        planner.plan(&self.request())
    }

    /// The ASCII form of the board with the cells of `route` that carry no marker drawn as `*`.
    pub fn render_route(&self, route: &Route) -> String {
        self.render(|pos| route.contains(&pos))
    }

    fn render<F: Fn(Position) -> bool>(&self, highlight: F) -> String {
        let mut out = String::with_capacity((self.grid.cols() + 1) * self.grid.rows());
        for row in 0..self.grid.rows() as i32 {
            for col in 0..self.grid.cols() as i32 {
                let pos = Position::new(row, col);
                let terrain = self.grid.terrain_at(pos);
                let symbol = match self.marker_at(pos).and_then(|m| m.marker_symbol(terrain)) {
                    Some(symbol) => symbol,
                    None if highlight(pos) => '*',
                    None => terrain.symbol(),
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render(|_| false))
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let mut terrain = Vec::with_capacity(lines.len());
        let mut markers = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, symbol) in line.chars().enumerate() {
                let position = Position::new(row as i32, col as i32);
                match Brush::from_marker_symbol(symbol) {
                    Some((marker, kind)) => {
                        markers.push((position, marker, symbol));
                        cells.push(kind);
                    }
                    None => cells.push(
                        TerrainKind::from_symbol(symbol)
                            .ok_or(BoardError::UnknownSymbol { symbol, position })?,
                    ),
                }
            }
            terrain.push(cells);
        }
        let mut board = Board {
            grid: GridMap::from_rows(&terrain)?,
            start: None,
            end: None,
            entrances: FxIndexSet::default(),
            exits: FxIndexSet::default(),
        };
        for (position, marker, symbol) in markers {
            if !board.paint(position, marker)? {
                return Err(BoardError::DuplicateMarker { symbol, position });
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let text = "S.~\n#E.\nX.G\n";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.start(), Some(Position::new(0, 0)));
        assert_eq!(board.end(), Some(Position::new(2, 2)));
        assert!(board.entrances().contains(&Position::new(1, 1)));
        assert!(board.exits().contains(&Position::new(2, 0)));
        assert_eq!(
            board.grid().terrain(Position::new(0, 2)),
            Ok(TerrainKind::Difficult)
        );
        assert_eq!(board.to_string(), text);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "S.?".parse::<Board>(),
            Err(BoardError::UnknownSymbol { symbol: '?', .. })
        ));
        assert!(matches!(
            "S.S".parse::<Board>(),
            Err(BoardError::DuplicateMarker { symbol: 'S', .. })
        ));
        assert!(matches!(
            "S..\n.G".parse::<Board>(),
            Err(BoardError::Grid(GridError::RaggedRows { .. }))
        ));
        assert!(matches!(
            "".parse::<Board>(),
            Err(BoardError::Grid(GridError::InvalidDimensions { .. }))
        ));
    }

    #[test]
    fn start_and_end_are_placed_once() {
        let mut board = Board::new(2, 2).unwrap();
        assert_eq!(board.paint(Position::new(0, 0), Brush::Start), Ok(true));
        assert_eq!(board.paint(Position::new(0, 1), Brush::Start), Ok(false));
        assert_eq!(board.start(), Some(Position::new(0, 0)));
        // Painting over the start unsets it, after which it can be placed again
        board.paint(Position::new(0, 0), Brush::Difficult).unwrap();
        assert_eq!(board.start(), None);
        assert_eq!(board.paint(Position::new(0, 1), Brush::Start), Ok(true));
    }

    #[test]
    fn painting_replaces_markers() {
        let mut board = Board::new(2, 3).unwrap();
        let p = Position::new(1, 1);
        board.paint(p, Brush::Entrance).unwrap();
        board.paint(Position::new(0, 0), Brush::Entrance).unwrap();
        assert_eq!(board.marker_at(p), Some(Brush::Entrance));
        board.paint(p, Brush::Exit).unwrap();
        assert_eq!(board.marker_at(p), Some(Brush::Exit));
        assert_eq!(board.entrances().len(), 1);
        board.paint(p, Brush::Open).unwrap();
        assert_eq!(board.marker_at(p), None);
        assert!(board.exits().is_empty());
    }

    #[test]
    fn markers_keep_terrain() {
        let mut board = Board::new(1, 2).unwrap();
        let p = Position::new(0, 1);
        board.paint(p, Brush::Blocked).unwrap();
        board.paint(p, Brush::End).unwrap();
        assert_eq!(board.grid().terrain(p), Ok(TerrainKind::Blocked));
        assert!(board.paint(Position::new(3, 3), Brush::Open).is_err());
    }

    #[test]
    fn reset_clears_everything() {
        let mut board: Board = "S#\nEG".parse().unwrap();
        board.reset(3, 4).unwrap();
        assert_eq!(board.grid().rows(), 3);
        assert_eq!(board.grid().cols(), 4);
        assert_eq!(board.start(), None);
        assert!(board.entrances().is_empty());
        assert_eq!(board.to_string(), "....\n....\n....\n");
        assert!(board.reset(0, 4).is_err());
    }

    #[test]
    fn plan_and_render() {
        let mut board: Board = "\
            S..
            ##.
            G..
        "
        .parse()
        .unwrap();
        let mut planner = RoutePlanner::new();
        let route = board.plan(&mut planner).unwrap();
        assert_eq!(route.len(), 7);
        assert_eq!(board.render_route(&route), "S**\n##*\nG**\n");
    }

    #[test]
    fn blocking_paint_defers_components() {
        let mut board: Board = "S.G".parse().unwrap();
        board.paint(Position::new(0, 1), Brush::Blocked).unwrap();
        board.paint(Position::new(0, 1), Brush::Difficult).unwrap();
        board.paint(Position::new(0, 1), Brush::Blocked).unwrap();
        assert!(board.grid().components_dirty());
        let mut planner = RoutePlanner::new();
        assert_eq!(board.plan(&mut planner), Err(RouteError::Unreachable));
        assert!(!board.grid().components_dirty());
    }

    #[test]
    fn markers_on_rough_terrain_survive_text_form() {
        let mut board = Board::new(2, 4).unwrap();
        let painted = [
            (Position::new(0, 0), Brush::Difficult, Brush::Start),
            (Position::new(0, 2), Brush::Blocked, Brush::End),
            (Position::new(1, 1), Brush::Blocked, Brush::Entrance),
            (Position::new(1, 3), Brush::Difficult, Brush::Exit),
        ];
        for (pos, terrain, marker) in painted {
            board.paint(pos, terrain).unwrap();
            board.paint(pos, marker).unwrap();
        }
        let text = board.to_string();
        assert_eq!(text, "s.2.\n.3.x\n");
        let parsed: Board = text.parse().unwrap();
        for (pos, terrain, marker) in painted {
            assert_eq!(parsed.marker_at(pos), Some(marker));
            assert_eq!(parsed.grid().terrain(pos), board.grid().terrain(pos));
            assert_eq!(terrain.terrain(), parsed.grid().terrain(pos).ok());
        }
        assert_eq!(parsed.to_string(), text);
    }
}
