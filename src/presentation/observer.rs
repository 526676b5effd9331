/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::warn;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ColorHint, Notification};

/**
 * Callbacks the motion controller and the event log fire at the presentation layer.
 *
 * All callbacks are fire-and-forget and are invoked in the order the state
 * changes happen. Implementations must not call back into the controller.
 */
pub trait PresentationLayer: Send + Sync {
    fn on_floor_changed(&self, floor: u8);
    fn on_direction_changed(&self, glyph: &str, color: ColorHint);
    fn on_motion_started(&self, destination: u8);
    fn on_motion_ended(&self, floor: u8);
    fn on_log_appended(&self, text: &str);
    fn on_log_cleared(&self);
}

/**
 * Forwards every callback as a `Notification` over a crossbeam channel, so the
 * display can live on another thread than the controller.
 */
pub struct ChannelPresenter {
    notification_tx: cbc::Sender<Notification>,
}

impl ChannelPresenter {
    pub fn new(notification_tx: cbc::Sender<Notification>) -> ChannelPresenter {
        ChannelPresenter { notification_tx }
    }

    fn forward(&self, notification: Notification) {
        // The display going away is not the controller's problem
        if let Err(e) = self.notification_tx.send(notification) {
            warn!("Presentation layer disconnected, dropping {:?}", e.into_inner());
        }
    }
}

impl PresentationLayer for ChannelPresenter {
    fn on_floor_changed(&self, floor: u8) {
        self.forward(Notification::FloorChanged { floor });
    }

    fn on_direction_changed(&self, glyph: &str, color: ColorHint) {
        self.forward(Notification::DirectionChanged {
            glyph: glyph.to_string(),
            color,
        });
    }

    fn on_motion_started(&self, destination: u8) {
        self.forward(Notification::MotionStarted { destination });
    }

    fn on_motion_ended(&self, floor: u8) {
        self.forward(Notification::MotionEnded { floor });
    }

    fn on_log_appended(&self, text: &str) {
        self.forward(Notification::LogAppended {
            text: text.to_string(),
        });
    }

    fn on_log_cleared(&self) {
        self.forward(Notification::LogCleared);
    }
}
