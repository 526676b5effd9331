/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info};
use std::sync::Arc;
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;
use crate::event_log::EventLog;
use crate::presentation::PresentationLayer;
use crate::shared::{Building, Command, ConfigError, Direction, ElevatorState, RequestError};

enum Event {
    NewCommand(Command),
    Tick,
    Terminate,
}

/**
 * Moves the cab between floors, one floor per step.
 *
 * The `MotionController` is the only owner of the `ElevatorState`. It accepts at
 * most one destination at a time, steps towards it when `step` is called and
 * reports every change to the presentation layer and the event log. On its own
 * thread (`run`) the steps are paced by a tick channel that an emergency stop
 * cancels.
 *
 * # Fields
 * - `building`:        The floors the cab can visit.
 * - `state`:           Current floor, motion flag and direction.
 * - `destination`:     Floor of the motion in progress, if any.
 * - `step_time`:       Time between two steps.
 * - `announce_floors`: Whether every intermediate floor is written to the log.
 * - `event_log`:       Status lines for the user.
 * - `presenter`:       Receives floor, direction and motion callbacks.
 *
 */
pub struct MotionController {
    building: Building,
    state: ElevatorState,
    destination: Option<u8>,
    step_time: Duration,
    announce_floors: bool,
    event_log: EventLog,
    presenter: Arc<dyn PresentationLayer>,
}

impl MotionController {
    pub fn new(
        config: &Config,
        presenter: Arc<dyn PresentationLayer>,
    ) -> Result<MotionController, ConfigError> {
        Ok(MotionController {
            building: Building::new(config.building.total_floors)?,
            state: ElevatorState::new(),
            destination: None,
            step_time: Duration::from_millis(config.motion.step_time),
            announce_floors: config.motion.announce_floors,
            event_log: EventLog::new(&config.log, presenter.clone()),
            presenter,
        })
    }

    /// Main loop of the controller thread. Returns when `terminate_rx` fires or
    /// every command sender is gone.
    pub fn run(mut self, command_rx: cbc::Receiver<Command>, terminate_rx: cbc::Receiver<()>) {
        info!(
            "Motion controller started at floor {} of {}",
            self.state.current_floor,
            self.building.total_floors()
        );

        // Only ticks while the cab is moving
        let mut ticker: cbc::Receiver<Instant> = cbc::never();

        loop {
            match wait_for_event(&command_rx, &terminate_rx, &ticker) {
                Event::NewCommand(command) => self.handle_command(command, &mut ticker),
                Event::Tick => {
                    if !self.step() {
                        ticker = cbc::never();
                    }
                }
                Event::Terminate => {
                    // Commands queued before the terminate signal are still handled
                    for command in command_rx.try_iter() {
                        self.handle_command(command, &mut ticker);
                    }
                    info!("Motion controller terminated");
                    break;
                }
            }
        }
    }

    fn handle_command(&mut self, command: Command, ticker: &mut cbc::Receiver<Instant>) {
        match command {
            Command::RequestFloor(floor) => {
                if self.request_floor(floor).is_ok() {
                    *ticker = cbc::tick(self.step_time);
                }
            }
            Command::EmergencyStop => {
                if self.emergency_stop().is_ok() {
                    *ticker = cbc::never();
                }
            }
            Command::ClearLog => self.clear_log(),
        }
    }

    pub fn request_floor(&mut self, floor: u32) -> Result<(), RequestError> {
        let (destination, direction) = match self.check_request(floor) {
            Ok(accepted) => accepted,
            Err(e) => return Err(self.reject(e)),
        };

        debug!(
            "Accepted request from floor {} to floor {}",
            self.state.current_floor, destination
        );

        self.state.is_moving = true;
        self.destination = Some(destination);
        self.event_log
            .append(&format!("Moving to floor {}...", destination));
        self.set_direction(direction);
        self.presenter.on_motion_started(destination);

        Ok(())
    }

    /// Moves the cab one floor towards the destination. Returns whether the cab
    /// is still moving afterwards.
    pub fn step(&mut self) -> bool {
        let destination = match self.destination {
            Some(destination) if self.state.is_moving => destination,
            _ => return false,
        };

        let next_floor = match self.state.direction {
            Direction::Up => self.state.current_floor + 1,
            Direction::Down => self.state.current_floor - 1,
            Direction::Idle | Direction::Stopped => return false,
        };
        debug_assert!(self.building.contains(next_floor));

        self.state.current_floor = next_floor;
        self.presenter.on_floor_changed(next_floor);

        if next_floor == destination {
            self.arrive(destination);
            return false;
        }

        if self.announce_floors {
            self.event_log
                .append(&format!("Passing floor {}.", next_floor));
        }
        true
    }

    pub fn emergency_stop(&mut self) -> Result<(), RequestError> {
        if !self.state.is_moving {
            return Err(self.reject(RequestError::NotMoving));
        }

        info!(
            "Emergency stop at floor {} on the way to {:?}",
            self.state.current_floor, self.destination
        );

        self.state.is_moving = false;
        self.destination = None;
        self.event_log.append("Emergency stop activated!");
        self.set_direction(Direction::Stopped);
        self.presenter.on_motion_ended(self.state.current_floor);

        Ok(())
    }

    pub fn current_floor(&self) -> u8 {
        self.state.current_floor
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_moving
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn destination(&self) -> Option<u8> {
        self.destination
    }

    pub fn state(&self) -> &ElevatorState {
        &self.state
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn clear_log(&mut self) {
        self.event_log.clear();
    }

    // Guards in priority order. Yields the destination and direction of travel on success
    fn check_request(&self, floor: u32) -> Result<(u8, Direction), RequestError> {
        if self.state.is_moving {
            return Err(RequestError::AlreadyMoving);
        }
        let destination = self
            .building
            .floor(floor)
            .ok_or(RequestError::FloorOutOfRange {
                floor,
                total_floors: self.building.total_floors(),
            })?;
        Direction::towards(self.state.current_floor, destination)
            .map(|direction| (destination, direction))
            .ok_or(RequestError::AlreadyOnFloor(destination))
    }

    fn reject(&mut self, error: RequestError) -> RequestError {
        debug!("Rejected: {:?}", error);
        self.event_log.append(&error.to_string());
        error
    }

    fn arrive(&mut self, floor: u8) {
        info!("Arrived at floor {}", floor);

        self.set_direction(Direction::Idle);
        self.presenter.on_motion_ended(floor);
        self.event_log.append(&format!("Arrived at floor {}.", floor));
        self.destination = None;
        self.state.is_moving = false;
    }

    fn set_direction(&mut self, direction: Direction) {
        self.state.direction = direction;
        self.presenter
            .on_direction_changed(direction.glyph(), direction.color());
    }
}

fn wait_for_event(
    command_rx: &cbc::Receiver<Command>,
    terminate_rx: &cbc::Receiver<()>,
    ticker: &cbc::Receiver<Instant>,
) -> Event {
    cbc::select! {
        recv(command_rx) -> command => {
            match command {
                Ok(command) => Event::NewCommand(command),
                Err(_) => {
                    info!("Command channel closed, motion controller stopping");
                    Event::Terminate
                }
            }
        }
        recv(ticker) -> _ => Event::Tick,
        recv(terminate_rx) -> _ => Event::Terminate,
    }
}
