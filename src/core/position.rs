//! Integer grid coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Coordinates outside the robot's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Position ({x},{y}) is outside the grid")]
pub struct OutOfGrid {
    pub x: i64,
    pub y: i64,
}

/// A cell on the robot's integer grid.
///
/// The grid spans `MIN_COORD..=MAX_COORD` on both axes, so every cell on it
/// has four representable neighbours.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// Grid origin, where the robot starts.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const MIN_COORD: i64 = i64::MIN + 1;
    pub const MAX_COORD: i64 = i64::MAX - 1;

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Position at `(x, y)` if that cell lies on the grid.
    pub fn on_grid(x: i64, y: i64) -> Result<Self, OutOfGrid> {
        let position = Self { x, y };
        if position.is_on_grid() {
            Ok(position)
        } else {
            Err(OutOfGrid { x, y })
        }
    }

    pub fn is_on_grid(&self) -> bool {
        let range = Self::MIN_COORD..=Self::MAX_COORD;
        range.contains(&self.x) && range.contains(&self.y)
    }

    /// Position displaced by `(dx, dy)`, saturating at the `i64` limits.
    pub fn offset(self, (dx, dy): (i64, i64)) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_default() {
        assert_eq!(Position::default(), Position::ORIGIN);
        assert_eq!(Position::ORIGIN, Position::new(0, 0));
    }

    #[test]
    fn offset_adds_delta() {
        assert_eq!(Position::new(2, -3).offset((-1, 0)), Position::new(1, -3));
        assert_eq!(Position::new(2, -3).offset((0, 1)), Position::new(2, -2));
    }

    #[test]
    fn offset_saturates_at_i64_limits() {
        assert_eq!(
            Position::new(i64::MAX, 0).offset((1, 0)),
            Position::new(i64::MAX, 0)
        );
        assert_eq!(
            Position::new(0, i64::MIN).offset((0, -1)),
            Position::new(0, i64::MIN)
        );
    }

    #[test]
    fn grid_excludes_i64_limits() {
        assert!(Position::on_grid(Position::MAX_COORD, Position::MIN_COORD).is_ok());
        assert_eq!(
            Position::on_grid(i64::MAX, 0),
            Err(OutOfGrid { x: i64::MAX, y: 0 })
        );
        assert_eq!(
            Position::on_grid(0, i64::MIN),
            Err(OutOfGrid { x: 0, y: i64::MIN })
        );
    }

    #[test]
    fn displays_as_pair() {
        assert_eq!(Position::new(-1, 12).to_string(), "(-1,12)");
    }

    #[test]
    fn converts_from_tuple() {
        assert_eq!(Position::from((4, 5)), Position::new(4, 5));
    }
}
