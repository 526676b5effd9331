/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};
use std::io::BufRead;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Command;

pub const HELP: &str = "Commands: <floor number> | stop | clear | exit";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Command(Command),
    Exit,
    Empty,
    Unknown,
}

/// Turns one line typed by the user into an input. Floor numbers are passed
/// on unchecked, the controller decides whether the floor exists.
pub fn parse_line(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    if line.bytes().all(|b| b.is_ascii_digit()) {
        // Too many digits for a u32 is still a floor request, just one that never exists
        let floor = line.parse::<u32>().unwrap_or(u32::MAX);
        return Input::Command(Command::RequestFloor(floor));
    }

    match line.to_ascii_lowercase().as_str() {
        "stop" | "s" => Input::Command(Command::EmergencyStop),
        "clear" | "c" => Input::Command(Command::ClearLog),
        "exit" | "quit" | "q" => Input::Exit,
        _ => Input::Unknown,
    }
}

/**
 * Reads commands line by line and forwards them to the motion controller.
 * End of input counts as exit.
 */
pub struct InputReader {
    command_tx: cbc::Sender<Command>,
    terminate_tx: cbc::Sender<()>,
}

impl InputReader {
    pub fn new(command_tx: cbc::Sender<Command>, terminate_tx: cbc::Sender<()>) -> InputReader {
        InputReader {
            command_tx,
            terminate_tx,
        }
    }

    pub fn run<R: BufRead>(self, reader: R) {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    break;
                }
            };

            match parse_line(&line) {
                Input::Command(command) => {
                    if self.command_tx.send(command).is_err() {
                        info!("Motion controller gone, input stopped");
                        return;
                    }
                }
                Input::Exit => break,
                Input::Empty => (),
                Input::Unknown => eprintln!("{}", HELP),
            }
        }

        info!("Exit requested");
        let _ = self.terminate_tx.send(());
    }
}
