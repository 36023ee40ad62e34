//! # grid_shortest_path
//!
//! A shortest-path engine for rectangular obstacle grids. Implements
//! [uniform-cost search](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
//! over a 4-connected grid with unit edge weights, so a returned path is
//! always a minimum-hop route between two free cells. Builds
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! The engine keeps no state between searches: every call to
//! [find_path](ObstacleGrid::find_path) is a fresh computation over the grid
//! as it is at call time.
mod dijkstra;
pub mod error;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::{info, warn};
use petgraph::unionfind::UnionFind;

use crate::dijkstra::dijkstra;
pub use crate::error::PathError;
use core::fmt;

/// Relaxation order of the four axis-aligned neighbours. Fixed so that equal
/// shortest paths tie-break the same way on every call.
const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Outcome of a completed search: either an ordered path from source to
/// destination inclusive, or proof that no path exists. Absence of a path is
/// a normal outcome, distinct from the [PathError] input failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    Found(Vec<Point>),
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }
    /// The path if one was found. Consecutive points differ by one step along
    /// exactly one axis.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::NotFound => None,
        }
    }
}

/// [ObstacleGrid] wraps a [BoolGrid] in which a cell value of [true] means
/// blocked and [false] means free. Implements [Grid] by building on
/// [BoolGrid], so obstacles are placed and removed with [Grid::set].
#[derive(Clone, Debug, Default)]
pub struct ObstacleGrid {
    pub grid: BoolGrid,
}

impl ObstacleGrid {
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.grid.index_in_bounds(x as usize, y as usize)
    }
    fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.grid.get(pos.x as usize, pos.y as usize)
    }
    /// The free axis-aligned neighbours of a cell, in relaxation order, each
    /// paired with its unit step cost.
    fn neighborhood(&self, pos: &Point) -> Vec<(Point, i32)> {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(|&(dx, dy)| Point::new(pos.x + dx, pos.y + dy))
            .filter(|&position| self.can_move_to(position))
            .map(|p| (p, 1))
            .collect::<Vec<_>>()
    }
    /// Generates a new [UnionFind] structure linking up free grid neighbours
    /// to the same components. Built fresh per call so that obstacle changes
    /// between searches can never leak stale reachability.
    pub fn components(&self) -> UnionFind<usize> {
        let w = self.grid.width;
        let h = self.grid.height;
        let mut components = UnionFind::new(w * h);
        for x in 0..w {
            for y in 0..h {
                if !self.grid.get(x, y) {
                    let parent_ix = self.grid.get_ix(x, y);
                    let point = Point::new(x as i32, y as i32);
                    let neighbours = vec![
                        Point::new(point.x, point.y + 1),
                        Point::new(point.x + 1, point.y),
                    ]
                    .into_iter()
                    .filter(|p| self.grid.point_in_bounds(*p) && !self.grid.get_point(*p))
                    .map(|p| self.grid.get_ix(p.x as usize, p.y as usize))
                    .collect::<Vec<usize>>();
                    for ix in neighbours {
                        components.union(parent_ix, ix);
                    }
                }
            }
        }
        components
    }
    /// Checks if two in-bounds cells are connected by some 4-connected route
    /// of free cells.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let components = self.components();
            components.equiv(self.get_ix_point(start), self.get_ix_point(goal))
        } else {
            false
        }
    }
    /// Computes a minimum-hop path from `source` to `destination` over the
    /// free cells of the grid, moving only between edge-adjacent cells.
    ///
    /// Endpoints outside the grid or on blocked cells are rejected with a
    /// [PathError]; an unreachable destination is the normal
    /// [SearchResult::NotFound] outcome. A source equal to the destination
    /// yields the single-element path `[source]`.
    ///
    /// The result is deterministic: among equally short paths, ties go to
    /// the cell discovered earliest, with neighbours relaxed in a fixed
    /// order.
    pub fn find_path(&self, source: Point, destination: Point) -> Result<SearchResult, PathError> {
        for endpoint in [source, destination] {
            if !self.in_bounds(endpoint.x, endpoint.y) {
                return Err(PathError::OutOfBounds {
                    endpoint,
                    width: self.grid.width,
                    height: self.grid.height,
                });
            }
            if self.grid.get_point(endpoint) {
                return Err(PathError::Blocked(endpoint));
            }
        }
        if source == destination {
            return Ok(SearchResult::Found(vec![source]));
        }
        let components = self.components();
        if !components.equiv(self.get_ix_point(&source), self.get_ix_point(&destination)) {
            info!("{} is not reachable from {}", destination, source);
            return Ok(SearchResult::NotFound);
        }
        info!("{} is reachable from {}, computing path", destination, source);
        let result = dijkstra(
            &source,
            |node| self.neighborhood(node),
            |node_pos| *node_pos == destination,
        );
        match result {
            Some((path, _cost)) => Ok(SearchResult::Found(path)),
            None => {
                warn!("Reachable destination could not be pathed to, are components correct?");
                Ok(SearchResult::NotFound)
            }
        }
    }
}

impl fmt::Display for ObstacleGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height {
            let values = (0..self.grid.width)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl Grid<bool> for ObstacleGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        ObstacleGrid {
            grid: BoolGrid::new(width, height, default_value),
        }
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
