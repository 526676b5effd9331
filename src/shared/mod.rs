pub mod errors;
pub mod macros;
pub mod structs;
pub mod structs_tests;

pub use errors::ConfigError;
pub use errors::RequestError;
pub use structs::Building;
pub use structs::ColorHint;
pub use structs::Command;
pub use structs::Direction;
pub use structs::ElevatorState;
pub use structs::Notification;
pub use structs::GROUND_FLOOR;
