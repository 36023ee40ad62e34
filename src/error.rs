use grid_util::point::Point;
use thiserror::Error;

/// Rejected input to [find_path](crate::ObstacleGrid::find_path). Both endpoints must lie inside
/// the grid and on free cells; anything else is a caller error rather than a
/// [NotFound](crate::SearchResult::NotFound) outcome.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("endpoint {endpoint} lies outside the {width}x{height} grid")]
    OutOfBounds {
        endpoint: Point,
        width: usize,
        height: usize,
    },

    #[error("endpoint {0} is on a blocked cell")]
    Blocked(Point),
}

pub type Result<T> = std::result::Result<T, PathError>;
