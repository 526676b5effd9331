/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Error types               */
/***************************************/

/// Reasons a request or stop is turned down. The display text is what gets
/// written to the event log.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RequestError {
    #[error("Lift is currently moving. Please wait.")]
    AlreadyMoving,
    #[error("Floor {floor} does not exist.")]
    FloorOutOfRange { floor: u32, total_floors: u8 },
    #[error("You are already on this floor.")]
    AlreadyOnFloor(u8),
    #[error("Lift is not moving.")]
    NotMoving,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
