//! Generic best-first graph search.
//!
//! Two building blocks:
//!
//! - [`PriorityQueue`]: a binary-heap queue where inserting a value that is
//!   already queued updates its priority instead of adding a duplicate.
//! - [`search`] / [`AStar`]: A* over an implicit graph described by a
//!   [`GraphClient`]. The client supplies neighbors, edge costs, an
//!   admissible heuristic and the goal test; nodes only need `Eq + Hash`.
//!
//! Paths come back **goal-first** (goal at index 0, start last).
//!
//! ```
//! use pathsearch::{search, path_cost, GraphClient};
//!
//! /// Integers on a line, each step costs 1
//! struct Line;
//!
//! impl GraphClient<i32> for Line {
//!     type Cost = u32;
//!
//!     fn all_neighbors(&self, node: &i32) -> impl IntoIterator<Item = i32> {
//!         [node - 1, node + 1]
//!     }
//!     fn estimate_distance(&self, node: &i32, goal: &i32) -> u32 {
//!         node.abs_diff(*goal)
//!     }
//!     fn neighbor_distance(&self, _from: &i32, _to: &i32) -> u32 {
//!         1
//!     }
//!     fn goal_reached(&self, candidate: &i32, goal: &i32) -> bool {
//!         candidate == goal
//!     }
//! }
//!
//! let path = search(0, 3, &Line).unwrap();
//! assert_eq!(path, vec![3, 2, 1, 0]);
//! assert_eq!(path_cost(&Line, &path), 3);
//! ```

pub mod collections;
pub mod errors;
pub mod graph_algos;
pub mod priority_queue;

pub use errors::SearchError;
pub use graph_algos::a_star::{search, AStar, SearchParams, SearchStats};
pub use graph_algos::client::{path_cost, GraphClient};
pub use graph_algos::dijkstra::{dijkstra, dijkstra_costs};
pub use priority_queue::PriorityQueue;
