use crate::errors::SearchError;
use crate::priority_queue::{less_than, PriorityQueue};
use super::client::GraphClient;
use super::{reconstruct_path, GraphNodeMap, NO_PARENT};

use std::{
    fmt::Debug,
    hash::Hash,
};
use num_traits::{PrimInt, Unsigned, Zero};
use indexmap::map::Entry::{Occupied, Vacant};

/// Search configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Give up after this many rounds (None = unlimited).
    /// Meant for debugging a search that runs too long, not for correctness.
    pub max_rounds: Option<usize>,

    /// Initial capacity of the node map and the open set
    pub capacity: usize,
}

impl SearchParams {
    /// Builder: set the round limit
    #[must_use]
    pub fn max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Builder: set the initial capacity
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// Counters describing a finished search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the open set
    pub expanded: usize,
    /// Distinct nodes that received a cost
    pub discovered: usize,
    /// Nodes still on the open set when the search stopped
    pub open: usize,
}

/// How a run of the main loop ended
pub(crate) enum Progress<N> {
    Found(Vec<N>),
    Exhausted,
    OutOfRounds(usize),
}

/// Everything one search owns; built fresh for every search
pub(crate) struct SearchState<N, C> {
    // g-score and came-from in one map: node -> (parent_index, best cost)
    node_map: GraphNodeMap<N, C>,
    // node_map indices keyed by f-score (cost + estimate)
    open_set: PriorityQueue<usize, C>,
    expanded: usize,
}

impl<N, C> SearchState<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: PrimInt + Unsigned + Debug,
{
    /// Seed the search with the start node
    pub(crate) fn new<G>(start: N, goal: &N, client: &G, capacity: usize) -> Self
    where
        G: GraphClient<N, Cost = C>,
    {
        log::debug!("astar start {start:?} goal {goal:?}");

        let mut node_map = GraphNodeMap::with_capacity_and_hasher(capacity, Default::default());
        let mut open_set = PriorityQueue::with_capacity(less_than, capacity);

        let estimate = client.estimate_distance(&start, goal);
        let start_index = node_map.insert_full(start, (NO_PARENT, Zero::zero())).0;
        open_set.insert(start_index, estimate);

        Self { node_map, open_set, expanded: 0 }
    }

    /// Expand the cheapest open node until the goal is reached, the open set
    /// empties, or `max_rounds` nodes have been expanded
    pub(crate) fn run<G>(&mut self, client: &G, goal: &N, max_rounds: Option<usize>) -> Progress<N>
    where
        G: GraphClient<N, Cost = C>,
    {
        while !self.open_set.is_empty() {
            if max_rounds.is_some_and(|max| self.expanded >= max) {
                log::debug!(
                    "astar round limit reached: {} rounds, {} nodes still open",
                    self.expanded,
                    self.open_set.len()
                );
                return Progress::OutOfRounds(self.expanded);
            }

            let (index, f_score) = self.open_set.next();
            let round = self.expanded;
            self.expanded += 1;

            let Some((node, &(_, current_cost))) = self.node_map.get_index(index) else {
                unreachable!("open set holds index {index} which is not in the node map");
            };
            let current = node.clone();
            log::trace!(
                "round {round}: {current:?} cost {current_cost:?} f {f_score:?}, {} open",
                self.open_set.len()
            );

            if client.goal_reached(&current, goal) {
                let path = reconstruct_path(&self.node_map, index);
                log::debug!(
                    "astar reached {current:?} at cost {current_cost:?} after {} rounds, path of {} nodes",
                    self.expanded,
                    path.len()
                );
                return Progress::Found(path);
            }

            for neighbor in client.all_neighbors(&current) {
                // Confirmed cost through current, not an estimate
                let new_cost = add_cost(current_cost, client.neighbor_distance(&current, &neighbor));

                let (neighbor_index, estimate) = match self.node_map.entry(neighbor) {
                    Vacant(e) => {
                        // First time we see this neighbor
                        let estimate = client.estimate_distance(e.key(), goal);
                        let neighbor_index = e.index();
                        e.insert((index, new_cost));
                        (neighbor_index, estimate)
                    }
                    Occupied(mut e) => {
                        if new_cost >= e.get().1 {
                            log::trace!("{current:?} to {:?} isn't better", e.key());
                            continue;
                        }
                        // Strictly better path, re-parent the neighbor
                        let estimate = client.estimate_distance(e.key(), goal);
                        e.insert((index, new_cost));
                        (e.index(), estimate)
                    }
                };

                // Adds the neighbor, or moves it if it is still open
                self.open_set.insert(neighbor_index, add_cost(new_cost, estimate));
            }
        }

        log::debug!(
            "astar frontier exhausted after {} rounds, {} nodes discovered",
            self.expanded,
            self.node_map.len()
        );
        Progress::Exhausted
    }

    pub(crate) fn g_scores(&self) -> impl Iterator<Item = (&N, C)> {
        self.node_map.iter().map(|(node, &(_, cost))| (node, cost))
    }

    pub(crate) fn stats(&self) -> SearchStats {
        SearchStats {
            expanded: self.expanded,
            discovered: self.node_map.len(),
            open: self.open_set.len(),
        }
    }

    pub(crate) fn into_node_map(self) -> GraphNodeMap<N, C> {
        self.node_map
    }
}

/// Costs are unsigned, so an overflow means the client's Cost type is too narrow
pub(crate) fn add_cost<C: PrimInt + Debug>(a: C, b: C) -> C {
    match a.checked_add(&b) {
        Some(sum) => sum,
        None => panic!("path cost overflowed ({a:?} + {b:?}); use a wider Cost type"),
    }
}

/// Find a least-cost path from `start` to a node that satisfies `goal`.
///
/// Returns the path **goal-first**: `path[0]` is the node that satisfied
/// `goal_reached` and the last element is `start`. Reverse it for
/// start-to-goal order. When `start` already satisfies the goal the path
/// is just `[start]`.
///
/// Returns None when every reachable node has been expanded without
/// reaching the goal.
///
/// The path is optimal when the client's heuristic is admissible.
pub fn search<N, G>(start: N, goal: N, client: &G) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone + Debug,
    G: GraphClient<N>,
{
    let mut state = SearchState::new(start, &goal, client, 0);

    // No round limit, so the loop only stops on the goal or an empty frontier
    match state.run(client, &goal, None) {
        Progress::Found(path) => Some(path),
        Progress::Exhausted | Progress::OutOfRounds(_) => None,
    }
}

/// A* Algorithm with inspectable state
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Use [`search`] for a one-shot search. This type adds a round limit and
/// lets the caller look at the scores and counters once the search is done.
/// Each instance solves once.
pub struct AStar<'c, N, G>
where
    G: GraphClient<N>,
{
    client: &'c G,
    start: N,
    goal: N,
    params: SearchParams,
    state: Option<SearchState<N, G::Cost>>,
}

impl<'c, N, G> AStar<'c, N, G>
where
    N: Eq + Hash + Clone + Debug,
    G: GraphClient<N>,
{
    pub fn new(start: N, goal: N, client: &'c G) -> Self {
        Self {
            client,
            start,
            goal,
            params: SearchParams::default(),
            state: None,
        }
    }

    /// Builder: replace the search parameters
    #[must_use]
    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    /// Run the search. The path is goal-first, as with [`search`].
    ///
    /// # Errors
    ///
    /// * `SearchError::AlreadySolved` - this instance has already run
    /// * `SearchError::RoundLimitReached` - `max_rounds` ran out before the
    ///   goal was reached or the frontier emptied
    pub fn solve(&mut self) -> Result<Option<Vec<N>>, SearchError> {
        if self.state.is_some() {
            return Err(SearchError::AlreadySolved);
        }

        let state = self.state.insert(SearchState::new(
            self.start.clone(),
            &self.goal,
            self.client,
            self.params.capacity,
        ));

        match state.run(self.client, &self.goal, self.params.max_rounds) {
            Progress::Found(path) => Ok(Some(path)),
            Progress::Exhausted => Ok(None),
            Progress::OutOfRounds(rounds) => Err(SearchError::RoundLimitReached(rounds)),
        }
    }

    /// Best known cost of every node the search discovered, in discovery order
    pub fn g_scores(&self) -> Result<impl Iterator<Item = (&N, G::Cost)>, SearchError> {
        self.state
            .as_ref()
            .map(SearchState::g_scores)
            .ok_or(SearchError::NotSolved)
    }

    pub fn stats(&self) -> Result<SearchStats, SearchError> {
        self.state
            .as_ref()
            .map(SearchState::stats)
            .ok_or(SearchError::NotSolved)
    }
}
