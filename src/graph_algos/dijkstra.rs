use super::a_star::{search, SearchState};
use super::client::GraphClient;
use crate::collections::FxIndexMap;

use std::{fmt::Debug, hash::Hash};
use num_traits::Zero;

/// Wraps a client and replaces its heuristic with zero, turning A* into
/// Dijkstra's algorithm. Expansion order is then by exact cost only.
pub struct Uninformed<'a, G>(pub &'a G);

impl<N, G: GraphClient<N>> GraphClient<N> for Uninformed<'_, G> {
    type Cost = G::Cost;

    fn all_neighbors(&self, node: &N) -> impl IntoIterator<Item = N> {
        self.0.all_neighbors(node)
    }

    fn estimate_distance(&self, _node: &N, _goal: &N) -> G::Cost {
        Zero::zero()
    }

    fn neighbor_distance(&self, from: &N, to: &N) -> G::Cost {
        self.0.neighbor_distance(from, to)
    }

    fn goal_reached(&self, candidate: &N, goal: &N) -> bool {
        self.0.goal_reached(candidate, goal)
    }
}

/// Uninformed search that never reaches its goal, so it visits everything
struct Exhaustive<'a, G>(&'a G);

impl<N, G: GraphClient<N>> GraphClient<N> for Exhaustive<'_, G> {
    type Cost = G::Cost;

    fn all_neighbors(&self, node: &N) -> impl IntoIterator<Item = N> {
        self.0.all_neighbors(node)
    }

    fn estimate_distance(&self, _node: &N, _goal: &N) -> G::Cost {
        Zero::zero()
    }

    fn neighbor_distance(&self, from: &N, to: &N) -> G::Cost {
        self.0.neighbor_distance(from, to)
    }

    fn goal_reached(&self, _candidate: &N, _goal: &N) -> bool {
        false
    }
}

/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Same as A* search with the client's heuristic ignored; the path is goal-first
pub fn dijkstra<N, G>(start: N, goal: N, client: &G) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone + Debug,
    G: GraphClient<N>,
{
    search(start, goal, &Uninformed(client))
}

/// Returns the cost of the cheapest path from `start` to every reachable node,
/// in the order the nodes were first discovered
pub fn dijkstra_costs<N, G>(start: N, client: &G) -> FxIndexMap<N, G::Cost>
where
    N: Eq + Hash + Clone + Debug,
    G: GraphClient<N>,
{
    let explorer = Exhaustive(client);

    // The goal is never reached, so the loop runs until the frontier is empty
    let goal = start.clone();
    let mut state = SearchState::new(start, &goal, &explorer, 0);
    state.run(&explorer, &goal, None);

    state
        .into_node_map()
        .into_iter()
        .map(|(node, (_, cost))| (node, cost))
        .collect()
}
