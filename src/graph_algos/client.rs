use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned, Zero};

use super::a_star::add_cost;

/// The graph a search runs over, described by the caller.
///
/// The engine never builds nodes itself. It only asks the client for a
/// node's neighbors, the cost of each edge, a lower bound on the remaining
/// cost, and whether a node counts as the goal.
pub trait GraphClient<N> {
    /// Edge and path cost. Must be wide enough that no path cost overflows.
    type Cost: PrimInt + Unsigned + Debug;

    /// Every node directly reachable from `node`. May be empty.
    /// Must not depend on how far the search has progressed.
    fn all_neighbors(&self, node: &N) -> impl IntoIterator<Item = N>;

    /// Admissible estimate of the remaining cost from `node` to `goal`.
    /// Returning zero everywhere turns the search into Dijkstra.
    fn estimate_distance(&self, node: &N, goal: &N) -> Self::Cost;

    /// Exact cost of the edge `from -> to`, where `to` came from
    /// `all_neighbors(from)`. Costs must be non-negative, which the
    /// unsigned `Cost` guarantees.
    fn neighbor_distance(&self, from: &N, to: &N) -> Self::Cost;

    /// Whether `candidate`, once it is the cheapest node on the frontier,
    /// satisfies `goal`. Usually equality, but `goal` may be a sentinel.
    fn goal_reached(&self, candidate: &N, goal: &N) -> bool;
}

/// Total edge cost of a goal-first path, as returned by the searches
pub fn path_cost<N, G>(client: &G, path: &[N]) -> G::Cost
where
    G: GraphClient<N>,
{
    // path[i + 1] is the predecessor of path[i]
    path.windows(2).fold(Zero::zero(), |total, pair| {
        add_cost(total, client.neighbor_distance(&pair[1], &pair[0]))
    })
}
