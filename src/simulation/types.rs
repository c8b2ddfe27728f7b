//! Core types for the elevator simulation

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::Deserialize;

/// A floor index. Signed so that distances can be computed without casts.
pub type Floor = i32;

/// Stable identity of an elevator, equal to its position in the fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElevatorId(pub usize);

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Travel direction requested by a corridor call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// How the least-loaded dispatch rule breaks ties between equal queues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadTieBreak {
    /// The last elevator scanned among equals wins (non-strict comparison)
    #[default]
    Last,
    /// The first elevator scanned among equals wins (strict comparison)
    First,
}

impl FromStr for LoadTieBreak {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "last" => Ok(LoadTieBreak::Last),
            "first" => Ok(LoadTieBreak::First),
            other => bail!("unknown tie-break policy '{}', expected 'last' or 'first'", other),
        }
    }
}

/// Default number of floors served by the fleet
pub const NUM_FLOORS: usize = 30;

/// Default number of elevators in the fleet
pub const NUM_ELEVATORS: usize = 5;

/// The bottom floor of every building
pub const GROUND_FLOOR: Floor = 0;
