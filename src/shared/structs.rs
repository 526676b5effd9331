/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::errors::ConfigError;

/***************************************/
/*       Public data structures        */
/***************************************/
pub const GROUND_FLOOR: u8 = 1;

/**
 * The building the cab travels in. Floors are numbered from 1 to `total_floors`.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Building {
    total_floors: u8,
}

impl Building {
    pub fn new(total_floors: u8) -> Result<Building, ConfigError> {
        if total_floors < GROUND_FLOOR {
            return Err(ConfigError::Invalid(
                "a building needs at least one floor".to_string(),
            ));
        }
        Ok(Building { total_floors })
    }

    pub fn total_floors(&self) -> u8 {
        self.total_floors
    }

    pub fn contains(&self, floor: u8) -> bool {
        (GROUND_FLOOR..=self.total_floors).contains(&floor)
    }

    /// Converts a requested floor number into a floor of this building.
    pub fn floor(&self, floor: u32) -> Option<u8> {
        u8::try_from(floor).ok().filter(|floor| self.contains(*floor))
    }

    pub fn floors(&self) -> impl DoubleEndedIterator<Item = u8> {
        GROUND_FLOOR..=self.total_floors
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    Idle,
    Up,
    Down,
    Stopped,
}

impl Direction {
    pub fn glyph(&self) -> &'static str {
        match *self {
            Direction::Idle => "■",
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Stopped => "⛔",
        }
    }

    pub fn color(&self) -> ColorHint {
        match *self {
            Direction::Idle => ColorHint::Neutral,
            Direction::Up => ColorHint::Yellow,
            Direction::Down => ColorHint::Red,
            Direction::Stopped => ColorHint::Alert,
        }
    }

    // Direction of travel from `from` to `to`, `None` when they are the same floor
    pub fn towards(from: u8, to: u8) -> Option<Direction> {
        if to > from {
            Some(Direction::Up)
        } else if to < from {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ColorHint {
    Neutral,
    Yellow,
    Red,
    Alert,
}

impl ColorHint {
    pub fn hex(&self) -> &'static str {
        match *self {
            ColorHint::Neutral => "#ffe0e0",
            ColorHint::Yellow => "#e8e84a",
            ColorHint::Red => "#e84a4a",
            ColorHint::Alert => "#ff2020",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElevatorState {
    pub current_floor: u8,
    pub is_moving: bool,
    pub direction: Direction,
}

impl ElevatorState {
    pub fn new() -> ElevatorState {
        ElevatorState {
            current_floor: GROUND_FLOOR,
            is_moving: false,
            direction: Direction::Idle,
        }
    }
}

impl Default for ElevatorState {
    fn default() -> Self {
        ElevatorState::new()
    }
}

/**
 * Commands the presentation layer sends to the motion controller.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    RequestFloor(u32),
    EmergencyStop,
    ClearLog,
}

/**
 * Everything the motion controller tells the presentation layer, in emission order.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum Notification {
    FloorChanged { floor: u8 },
    DirectionChanged { glyph: String, color: ColorHint },
    MotionStarted { destination: u8 },
    MotionEnded { floor: u8 },
    LogAppended { text: String },
    LogCleared,
}
