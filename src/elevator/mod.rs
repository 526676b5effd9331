pub mod fsm;

pub use fsm::MotionController;
