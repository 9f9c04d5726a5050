use std::fmt;
use std::str::FromStr;

use crate::error::AssetError;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A control request coming from the player.
///
/// Input sources translate raw key events into these values; the session
/// orchestrator is the only place that interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Request a new heading for the next tick
    Turn(Direction),
    /// Leave the start screen, or start over once a round has ended
    Start,
    /// Reset the round immediately
    Restart,
    /// Toggle pause while playing
    Pause,
    /// Turn sound cues on or off
    ToggleSound,
    Quit,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Turn(direction)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Turn(Direction::Up) => "up",
            Action::Turn(Direction::Down) => "down",
            Action::Turn(Direction::Left) => "left",
            Action::Turn(Direction::Right) => "right",
            Action::Start => "start",
            Action::Restart => "restart",
            Action::Pause => "pause",
            Action::ToggleSound => "sound",
            Action::Quit => "quit",
        };
        f.write_str(name)
    }
}

impl FromStr for Action {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Action::Turn(Direction::Up)),
            "down" => Ok(Action::Turn(Direction::Down)),
            "left" => Ok(Action::Turn(Direction::Left)),
            "right" => Ok(Action::Turn(Direction::Right)),
            "start" => Ok(Action::Start),
            "restart" => Ok(Action::Restart),
            "pause" => Ok(Action::Pause),
            "sound" => Ok(Action::ToggleSound),
            "quit" => Ok(Action::Quit),
            _ => Err(AssetError::UnknownAction(s.to_string())),
        }
    }
}
