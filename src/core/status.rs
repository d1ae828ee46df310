//! Textual status contract.
//!
//! A status is written as `(x,y,H)` and, when the last forward move was
//! blocked, followed directly by `(ox,oy)`. Telemetry consumers read this
//! format byte for byte, so formatting and parsing live together here and
//! parsing never falls back to defaults.

use super::heading::{Heading, UnknownHeading};
use super::position::{OutOfGrid, Position};
use super::state::RobotState;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing a status string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("Status group '{0}' is not enclosed in parentheses")]
    MissingParenthesis(String),

    #[error("Expected {expected} comma separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("Invalid coordinate '{0}'")]
    InvalidCoordinate(String),

    #[error(transparent)]
    Heading(#[from] UnknownHeading),

    #[error(transparent)]
    OutOfGrid(#[from] OutOfGrid),

    #[error("Obstacle {found} is not the cell ahead {expected}")]
    ObstacleNotAhead { expected: Position, found: Position },

    #[error("Unexpected trailing input '{0}'")]
    TrailingInput(String),
}

/// Render a state in the status format.
///
/// ```rust
/// use cleaning_robot::core::{format_status, RobotState};
///
/// assert_eq!(format_status(&RobotState::initial()), "(0,0,N)");
/// ```
pub fn format_status(state: &RobotState) -> String {
    state.to_string()
}

impl fmt::Display for RobotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{})",
            self.position.x, self.position.y, self.heading
        )?;
        if let Some(obstacle) = self.obstacle {
            write!(f, "{}", obstacle)?;
        }
        Ok(())
    }
}

impl FromStr for RobotState {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, rest) = split_group(s)?;
        let fields: Vec<&str> = head.split(',').collect();
        let [x, y, heading] = fields.as_slice() else {
            return Err(StatusError::FieldCount {
                expected: 3,
                found: fields.len(),
            });
        };

        let position = Position::new(parse_coordinate(x)?, parse_coordinate(y)?);
        let heading: Heading = heading.parse()?;
        let state = Self::new(position, heading)?;

        if rest.is_empty() {
            return Ok(state);
        }

        let obstacle = parse_obstacle(rest)?;
        let expected = state.cell_ahead();
        if obstacle != expected {
            return Err(StatusError::ObstacleNotAhead {
                expected,
                found: obstacle,
            });
        }

        Ok(Self {
            obstacle: Some(obstacle),
            ..state
        })
    }
}

/// Split `(inner)rest` into `inner` and `rest`.
fn split_group(s: &str) -> Result<(&str, &str), StatusError> {
    s.strip_prefix('(')
        .and_then(|body| body.split_once(')'))
        .ok_or_else(|| StatusError::MissingParenthesis(s.to_string()))
}

fn parse_obstacle(s: &str) -> Result<Position, StatusError> {
    let (inner, rest) = split_group(s)?;
    if !rest.is_empty() {
        return Err(StatusError::TrailingInput(rest.to_string()));
    }

    let fields: Vec<&str> = inner.split(',').collect();
    let [x, y] = fields.as_slice() else {
        return Err(StatusError::FieldCount {
            expected: 2,
            found: fields.len(),
        });
    };

    Ok(Position::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

/// Decimal integer as `format_status` writes it: an optional `-`, then
/// digits without leading zeros. `-0` is not accepted.
fn parse_coordinate(value: &str) -> Result<i64, StatusError> {
    let invalid = || StatusError::InvalidCoordinate(value.to_string());
    let digits = value.strip_prefix('-').unwrap_or(value);
    let canonical = match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == value.len(),
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    };
    if !canonical {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}
