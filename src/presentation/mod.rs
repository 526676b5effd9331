pub mod input;
pub mod observer;
pub mod presentation_tests;
pub mod terminal;

pub use input::InputReader;
pub use observer::ChannelPresenter;
pub use observer::PresentationLayer;
pub use terminal::OutputFormat;
pub use terminal::TerminalDisplay;
