use itertools::Itertools;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Position;

/// A walk over orthogonally adjacent cells together with its accumulated cost, i.e. the sum of
/// the entry costs of every cell after the first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    nodes: Vec<Position>,
    cost: i32,
}

impl Path {
    pub(crate) fn from_parts(nodes: Vec<Position>, cost: i32) -> Path {
        debug_assert!(!nodes.is_empty());
        Path { nodes, cost }
    }

    pub fn nodes(&self) -> &[Position] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Position> {
        self.nodes
    }

    /// Node-count length.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn cost(&self) -> i32 {
        self.cost
    }

    pub fn start(&self) -> Option<Position> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<Position> {
        self.nodes.last().copied()
    }

    /// True if every step moves to an orthogonally adjacent cell.
    pub fn is_orthogonal(&self) -> bool {
        self.nodes
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.is_adjacent(b))
    }
}

/// The entrance and exit a teleport-assisted route jumps between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wormhole {
    pub entrance: Position,
    pub exit: Position,
}

/// The route reported to the caller. A direct route is a plain [Path]. A wormhole route walks to
/// an entrance, teleports to an exit for free and walks on to the goal; the teleport is the only
/// step that may join cells that are not adjacent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    nodes: Vec<Position>,
    cost: i32,
    wormhole: Option<Wormhole>,
    teleport_at: Option<usize>,
}

impl Route {
    pub fn direct(path: Path) -> Route {
        Route {
            nodes: path.nodes,
            cost: path.cost,
            wormhole: None,
            teleport_at: None,
        }
    }

    /// Joins the walk to an entrance with the walk from an exit. Boundary nodes are kept as they
    /// are: the entrance ends `to_entrance` and the exit starts `from_exit`.
    pub fn through_wormhole(to_entrance: Path, from_exit: Path) -> Route {
        let wormhole = to_entrance
            .end()
            .zip(from_exit.start())
            .map(|(entrance, exit)| Wormhole { entrance, exit });
        let cost = to_entrance.cost + from_exit.cost;
        let teleport_at = to_entrance.len().checked_sub(1);
        let mut nodes = to_entrance.nodes;
        nodes.extend(from_exit.nodes);
        Route {
            nodes,
            cost,
            wormhole,
            teleport_at,
        }
    }

    pub fn nodes(&self) -> &[Position] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Position> {
        self.nodes
    }

    /// Node-count length.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Accumulated terrain cost; the teleport itself is free.
    pub fn cost(&self) -> i32 {
        self.cost
    }

    pub fn wormhole(&self) -> Option<Wormhole> {
        self.wormhole
    }

    pub fn is_wormhole(&self) -> bool {
        self.wormhole.is_some()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.nodes.contains(pos)
    }

    /// Pairs of consecutive nodes, skipping the teleport.
    pub fn steps(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.nodes
            .iter()
            .copied()
            .tuple_windows()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != self.teleport_at)
            .map(|(_, step)| step)
    }
}

impl From<Path> for Route {
    fn from(path: Path) -> Route {
        Route::direct(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(points: &[(i32, i32)], cost: i32) -> Path {
        Path::from_parts(points.iter().map(|&p| Position::from(p)).collect(), cost)
    }

    #[test]
    fn orthogonal_check() {
        assert!(path(&[(0, 0), (0, 1), (1, 1)], 2).is_orthogonal());
        assert!(!path(&[(0, 0), (1, 1)], 1).is_orthogonal());
        assert!(path(&[(3, 3)], 0).is_orthogonal());
    }

    #[test]
    fn wormhole_concatenation() {
        let head = path(&[(0, 0), (1, 0)], 1);
        let tail = path(&[(1, 4), (2, 4)], 2);
        let route = Route::through_wormhole(head, tail);
        assert_eq!(route.len(), 4);
        assert_eq!(route.cost(), 3);
        assert_eq!(
            route.wormhole(),
            Some(Wormhole {
                entrance: Position::new(1, 0),
                exit: Position::new(1, 4)
            })
        );
        let steps = route.steps().collect::<Vec<_>>();
        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|(a, b)| a.is_adjacent(b)));
    }

    #[test]
    fn direct_route_keeps_every_step() {
        let route = Route::from(path(&[(0, 0), (0, 1), (0, 2)], 2));
        assert!(!route.is_wormhole());
        assert_eq!(route.steps().count(), 2);
    }
}
