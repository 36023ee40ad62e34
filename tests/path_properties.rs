use grid_shortest_path::{ObstacleGrid, PathError, SearchResult};
use grid_util::grid::Grid;
use grid_util::point::Point;

/// Checks that a path uses only free cells, only unit axis-aligned steps and
/// runs from source to destination inclusive.
fn assert_valid_path(grid: &ObstacleGrid, path: &[Point], source: Point, destination: Point) {
    assert_eq!(*path.first().unwrap(), source);
    assert_eq!(*path.last().unwrap(), destination);
    for p in path {
        assert!(!grid.get(p.x as usize, p.y as usize), "path crosses obstacle at {}", p);
    }
    for step in path.windows(2) {
        let (dx, dy) = (step[1].x - step[0].x, step[1].y - step[0].y);
        assert_eq!(dx.abs() + dy.abs(), 1, "non-unit step from {} to {}", step[0], step[1]);
    }
}

#[test]
fn open_grid_paths_have_manhattan_length() {
    for (w, h) in [(1, 1), (1, 5), (4, 7), (10, 10), (15, 22)] {
        let grid = ObstacleGrid::new(w, h, false);
        let source = Point::new(0, 0);
        let destination = Point::new(w as i32 - 1, h as i32 - 1);
        let result = grid.find_path(source, destination).unwrap();
        let path = result.path().expect("open grid must have a path");
        assert_valid_path(&grid, path, source, destination);
        assert_eq!(path.len() - 1, (w - 1) + (h - 1));
    }
}

#[test]
fn open_3x3_grid_has_four_edge_path() {
    let grid = ObstacleGrid::new(3, 3, false);
    let source = Point::new(0, 0);
    let destination = Point::new(2, 2);
    let result = grid.find_path(source, destination).unwrap();
    let path = result.path().unwrap();
    assert_eq!(path.len(), 5);
    assert_valid_path(&grid, path, source, destination);
}

#[test]
fn path_detours_around_obstacle() {
    // S . .
    // . # .
    // . . E
    let mut grid = ObstacleGrid::new(3, 3, false);
    grid.set(1, 1, true);
    let source = Point::new(0, 0);
    let destination = Point::new(2, 2);
    let path_result = grid.find_path(source, destination).unwrap();
    let path = path_result.path().unwrap();
    assert_eq!(path.len(), 5);
    assert_valid_path(&grid, path, source, destination);
}

#[test]
fn enclosed_source_is_not_found() {
    let mut grid = ObstacleGrid::new(3, 3, false);
    grid.set(1, 1, true);
    grid.set(1, 0, true);
    grid.set(0, 1, true);
    let result = grid.find_path(Point::new(0, 0), Point::new(2, 2)).unwrap();
    assert_eq!(result, SearchResult::NotFound);
}

#[test]
fn separating_wall_is_not_found() {
    let mut grid = ObstacleGrid::new(6, 4, false);
    for y in 0..4 {
        grid.set(3, y, true);
    }
    let result = grid.find_path(Point::new(0, 0), Point::new(5, 3)).unwrap();
    assert_eq!(result, SearchResult::NotFound);
}

#[test]
fn source_equal_to_destination_is_single_element_path() {
    let grid = ObstacleGrid::new(4, 4, false);
    let p = Point::new(2, 1);
    let result = grid.find_path(p, p).unwrap();
    assert_eq!(result, SearchResult::Found(vec![p]));
}

#[test]
fn repeated_searches_return_identical_paths() {
    let mut grid = ObstacleGrid::new(8, 8, false);
    grid.set(3, 2, true);
    grid.set(3, 3, true);
    grid.set(4, 5, true);
    let source = Point::new(0, 0);
    let destination = Point::new(7, 7);
    let first = grid.find_path(source, destination).unwrap();
    let second = grid.find_path(source, destination).unwrap();
    assert!(first.is_found());
    assert_eq!(first, second);
}

#[test]
fn out_of_bounds_endpoints_are_rejected() {
    let grid = ObstacleGrid::new(5, 5, false);
    let outside = Point::new(5, 0);
    assert_eq!(
        grid.find_path(outside, Point::new(1, 1)),
        Err(PathError::OutOfBounds {
            endpoint: outside,
            width: 5,
            height: 5
        })
    );
    let negative = Point::new(0, -1);
    assert!(matches!(
        grid.find_path(Point::new(1, 1), negative),
        Err(PathError::OutOfBounds { .. })
    ));
}

#[test]
fn blocked_endpoints_are_rejected() {
    let mut grid = ObstacleGrid::new(5, 5, false);
    grid.set(2, 2, true);
    let blocked = Point::new(2, 2);
    assert_eq!(
        grid.find_path(blocked, Point::new(4, 4)),
        Err(PathError::Blocked(blocked))
    );
    assert_eq!(
        grid.find_path(Point::new(0, 0), blocked),
        Err(PathError::Blocked(blocked))
    );
}

#[test]
fn toggling_obstacles_recomputes_from_scratch() {
    let mut grid = ObstacleGrid::new(5, 5, false);
    for y in 0..5 {
        grid.set(2, y, true);
    }
    let source = Point::new(0, 2);
    let destination = Point::new(4, 2);
    assert_eq!(grid.find_path(source, destination).unwrap(), SearchResult::NotFound);

    // Opening a gap in the wall must be visible to the very next search.
    grid.set(2, 2, false);
    let result = grid.find_path(source, destination).unwrap();
    let path = result.path().expect("gap in wall must make a path");
    assert_valid_path(&grid, path, source, destination);
    assert_eq!(path.len(), 5);

    grid.set(2, 2, true);
    assert_eq!(grid.find_path(source, destination).unwrap(), SearchResult::NotFound);
}
