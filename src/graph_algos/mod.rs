pub mod a_star;
pub mod client;
pub mod dijkstra;
mod shortest_path;

use shortest_path::reconstruct_path;

use crate::collections::FxIndexMap;

/// Type alias for the node map used by the search algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the best known cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Parent index of the start node, which has no predecessor
pub(crate) const NO_PARENT: usize = usize::MAX;
