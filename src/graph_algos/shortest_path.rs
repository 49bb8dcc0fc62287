use super::GraphNodeMap;

/// Walk parent links from the goal node back to the start node
/// Returns the path goal-first: path[0] is the goal, the last element is the start
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn reconstruct_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Vec<N>
where
    N: Clone,
{
    let mut path = Vec::new();
    let mut current_index = goal_index;

    // The start node's parent is NO_PARENT, which is never a valid index
    while let Some((node, &(parent_index, _))) = node_map.get_index(current_index) {
        path.push(node.clone());
        current_index = parent_index;
    }

    path
}
