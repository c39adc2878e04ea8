/// This module implements a variant of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
/// which keeps its open list and parent map between searches, so that the many searches made
/// for a single route request share their allocations.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

#[derive(Clone, Debug)]
struct SmallestCostHolder<N, K> {
    estimated_cost: K,
    cost: K,
    index: usize,
    node: N,
}

impl<N: Ord, K: Ord> Eq for SmallestCostHolder<N, K> {}

impl<N: Ord, K: Ord> PartialEq for SmallestCostHolder<N, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord, K: Ord> PartialOrd for SmallestCostHolder<N, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, K: Ord> Ord for SmallestCostHolder<N, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the node that got furthest, then the
        // smallest node so that equal candidates always pop in the same order
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.node.cmp(&self.node))
    }
}

#[derive(Clone, Debug)]
pub(crate) struct SearchContext<N, C> {
    to_see: BinaryHeap<SmallestCostHolder<N, C>>,
    parents: FxIndexMap<N, (usize, C)>,
}

impl<N, C> Default for SearchContext<N, C> {
    fn default() -> Self {
        SearchContext {
            to_see: BinaryHeap::new(),
            parents: FxIndexMap::default(),
        }
    }
}

impl<N, C> SearchContext<N, C>
where
    N: Eq + Ord + Hash + Clone,
    C: Zero + Ord + Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    fn reverse_path(&self, start: usize) -> Vec<N> {
        let mut i = start;
        let mut path: Vec<N> = std::iter::from_fn(|| {
            self.parents.get_index(i).map(|(node, &(parent, _))| {
                i = parent;
                node.clone()
            })
        })
        .collect();
        path.reverse();
        path
    }

    /// Best-first search from `start` until `success` holds for a popped node. Returns the path
    /// including both ends and its accumulated cost. The heuristic must be consistent for the
    /// returned path to be optimal; a zero heuristic turns this into Dijkstra's algorithm.
    pub fn astar<FN, IN, FH, FS>(
        &mut self,
        start: &N,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
    ) -> Option<(Vec<N>, C)>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        self.to_see.clear();
        self.parents.clear();
        self.to_see.push(SmallestCostHolder {
            estimated_cost: Zero::zero(),
            cost: Zero::zero(),
            index: 0,
            node: start.clone(),
        });
        self.parents
            .insert(start.clone(), (usize::MAX, Zero::zero()));
        while let Some(SmallestCostHolder { cost, index, .. }) = self.to_see.pop() {
            let successors = {
                let Some((node, &(_, c))) = self.parents.get_index(index) else {
                    continue;
                };
                if success(node) {
                    let path = self.reverse_path(index);
                    return Some((path, cost));
                }
                // We may have inserted a node several time into the binary heap if we found
                // a better way to access it. Ensure that we are currently dealing with the
                // best path and discard the others.
                if cost > c {
                    continue;
                }
                successors(node)
            };
            for (successor, move_cost) in successors {
                let new_cost = cost + move_cost;
                let h; // heuristic(&successor)
                let n; // index for successor
                let node = successor.clone();
                match self.parents.entry(successor) {
                    Vacant(e) => {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    }
                    Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            h = heuristic(e.key());
                            n = e.index();
                            e.insert((index, new_cost));
                        } else {
                            continue;
                        }
                    }
                }

                self.to_see.push(SmallestCostHolder {
                    estimated_cost: new_cost + h,
                    cost: new_cost,
                    index: n,
                    node,
                });
            }
        }
        None
    }
}
