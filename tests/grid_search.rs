//! A* on small integer grids, checked against known optima and against
//! Dijkstra on random grids.

use pathsearch::{dijkstra, path_cost, search, AStar, GraphClient, SearchParams};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Pos {
    x: i32,
    y: i32,
}

fn pos(x: i32, y: i32) -> Pos {
    Pos { x, y }
}

/// Four-connected grid. `costs[y][x]` is the cost of stepping onto a cell;
/// `None` is a wall.
struct Grid {
    costs: Vec<Vec<Option<u32>>>,
    informed: bool,
}

impl Grid {
    fn uniform(width: usize, height: usize) -> Self {
        Self { costs: vec![vec![Some(1); width]; height], informed: true }
    }

    fn parse(rows: &[&str]) -> Self {
        let costs = rows
            .iter()
            .map(|row| row.chars().map(|c| c.to_digit(10)).collect())
            .collect();
        Self { costs, informed: true }
    }

    fn uninformed(mut self) -> Self {
        self.informed = false;
        self
    }

    fn cell(&self, p: Pos) -> Option<u32> {
        let row = self.costs.get(usize::try_from(p.y).ok()?)?;
        *row.get(usize::try_from(p.x).ok()?)?
    }

    fn min_cost(&self) -> u32 {
        self.costs.iter().flatten().flatten().copied().min().unwrap_or(0)
    }
}

impl GraphClient<Pos> for Grid {
    type Cost = u64;

    fn all_neighbors(&self, node: &Pos) -> impl IntoIterator<Item = Pos> {
        let p = *node;
        [pos(p.x + 1, p.y), pos(p.x, p.y + 1), pos(p.x - 1, p.y), pos(p.x, p.y - 1)]
            .into_iter()
            .filter(|&n| self.cell(n).is_some())
    }

    /// Manhattan distance scaled by the cheapest cell, which never overestimates
    fn estimate_distance(&self, node: &Pos, goal: &Pos) -> u64 {
        if !self.informed {
            return 0;
        }
        let steps = node.x.abs_diff(goal.x) + node.y.abs_diff(goal.y);
        u64::from(steps) * u64::from(self.min_cost())
    }

    fn neighbor_distance(&self, from: &Pos, to: &Pos) -> u64 {
        assert_eq!(from.x.abs_diff(to.x) + from.y.abs_diff(to.y), 1, "{from:?} and {to:?} are not adjacent");
        match self.cell(*to) {
            Some(cost) => u64::from(cost),
            None => panic!("{to:?} is a wall"),
        }
    }

    fn goal_reached(&self, candidate: &Pos, goal: &Pos) -> bool {
        candidate == goal
    }
}

#[test]
fn test_three_by_three_corner_to_corner() {
    let grid = Grid::uniform(3, 3);
    let path = search(pos(0, 0), pos(2, 2), &grid).unwrap();

    assert_eq!(path.len() - 1, 4);
    assert_eq!(path_cost(&grid, &path), 4);
    assert_eq!(path.first(), Some(&pos(2, 2)));
    assert_eq!(path.last(), Some(&pos(0, 0)));
}

#[test]
fn test_path_steps_are_adjacent() {
    let grid = Grid::parse(&["1111", "1#91", "1#11", "1111"]);
    let path = search(pos(0, 0), pos(3, 3), &grid).unwrap();
    for pair in path.windows(2) {
        assert_eq!(pair[0].x.abs_diff(pair[1].x) + pair[0].y.abs_diff(pair[1].y), 1);
    }
    assert_eq!(path_cost(&grid, &path), 6);
}

#[test]
fn test_walls_force_a_detour() {
    let grid = Grid::parse(&[
        "11111",
        "####1",
        "11111",
        "1####",
        "11111",
    ]);
    let mut path = search(pos(0, 0), pos(4, 4), &grid).unwrap();
    path.reverse();

    assert_eq!(path.first(), Some(&pos(0, 0)));
    assert_eq!(path.last(), Some(&pos(4, 4)));
    assert_eq!(path_cost(&grid, &path), 16);
}

#[test]
fn test_cheap_detour_beats_expensive_shortcut() {
    let grid = Grid::parse(&["191", "111"]);
    let path = search(pos(0, 0), pos(2, 0), &grid).unwrap();
    assert_eq!(path, vec![pos(2, 0), pos(2, 1), pos(1, 1), pos(0, 1), pos(0, 0)]);
    assert_eq!(path_cost(&grid, &path), 4);
}

#[test]
fn test_walled_off_goal() {
    let grid = Grid::parse(&["11#1", "11#1", "11#1"]);
    assert_eq!(search(pos(0, 0), pos(3, 0), &grid), None);
}

#[test]
fn test_start_equals_goal() {
    let grid = Grid::uniform(2, 2);
    assert_eq!(search(pos(1, 1), pos(1, 1), &grid), Some(vec![pos(1, 1)]));
}

#[test]
fn test_heuristic_expands_fewer_nodes_than_dijkstra() {
    let informed = Grid::uniform(20, 20);
    let blind = Grid::uniform(20, 20).uninformed();

    let mut a_star = AStar::new(pos(0, 0), pos(19, 0), &informed);
    let mut uniform = AStar::new(pos(0, 0), pos(19, 0), &blind);
    let fast = a_star.solve().unwrap().unwrap();
    let slow = uniform.solve().unwrap().unwrap();

    assert_eq!(path_cost(&informed, &fast), path_cost(&blind, &slow));
    assert!(a_star.stats().unwrap().expanded < uniform.stats().unwrap().expanded);
}

#[test]
fn test_g_scores_cover_discovered_cells() {
    let grid = Grid::uniform(4, 4).uninformed();
    let mut a_star = AStar::new(pos(0, 0), pos(9, 9), &grid)
        .with_params(SearchParams::default().capacity(16));

    // Off-grid goal: every cell is scored, none reaches it
    assert_eq!(a_star.solve(), Ok(None));

    let scores: Vec<(Pos, u64)> = a_star.g_scores().unwrap().map(|(p, c)| (*p, c)).collect();
    assert_eq!(scores.len(), 16);
    for (p, cost) in scores {
        assert_eq!(cost, u64::from(p.x.unsigned_abs() + p.y.unsigned_abs()));
    }
}

fn grid_strategy() -> impl Strategy<Value = Vec<Vec<Option<u32>>>> {
    (2usize..8, 2usize..8).prop_flat_map(|(width, height)| {
        let cell = prop_oneof![1 => Just(None), 4 => (1u32..10).prop_map(Some)];
        prop::collection::vec(prop::collection::vec(cell, width), height)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// With an admissible heuristic A* finds paths as cheap as Dijkstra's,
    /// and both agree on whether a path exists
    #[test]
    fn prop_a_star_matches_dijkstra(mut costs in grid_strategy()) {
        let height = costs.len();
        let width = costs[0].len();
        costs[0][0] = Some(1);
        costs[height - 1][width - 1] = Some(1);

        let grid = Grid { costs, informed: true };
        let start = pos(0, 0);
        let goal = pos(width as i32 - 1, height as i32 - 1);

        let a_star = search(start, goal, &grid);
        let uniform = dijkstra(start, goal, &grid);

        prop_assert_eq!(a_star.is_some(), uniform.is_some());
        if let (Some(fast), Some(slow)) = (a_star, uniform) {
            prop_assert_eq!(path_cost(&grid, &fast), path_cost(&grid, &slow));
            prop_assert_eq!(fast.first(), Some(&goal));
            prop_assert_eq!(fast.last(), Some(&start));
        }
    }

    /// Searching the same grid twice gives the same path
    #[test]
    fn prop_search_is_deterministic(costs in grid_strategy()) {
        let height = costs.len();
        let width = costs[0].len();
        let grid = Grid { costs, informed: true };
        let goal = pos(width as i32 - 1, height as i32 - 1);

        prop_assert_eq!(search(pos(0, 0), goal, &grid), search(pos(0, 0), goal, &grid));
    }
}
