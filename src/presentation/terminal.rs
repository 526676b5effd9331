/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{error, info};
use std::collections::{BTreeMap, VecDeque};
use std::io::Write;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Building, ColorHint, Direction, Notification, GROUND_FLOOR};

pub const READY_MESSAGE: &str = "Ready to go up!";

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonAppearance {
    Rest,
    Active,
}

/**
 * Terminal rendition of the lift panel.
 *
 * Mirrors what the controller reports: floor label, direction indicator, one
 * button per floor and the visible part of the message log. Each notification
 * is rendered as one line of output.
 *
 * # Fields
 * - `floor`:           Floor shown on the indicator.
 * - `glyph`, `color`:  Direction indicator.
 * - `buttons`:         Floor number to button appearance, built once.
 * - `scrollback`:      Visible log lines, oldest first.
 * - `visible_lines`:   Size of the scrollback.
 * - `format`:          Text or JSON lines.
 */
pub struct TerminalDisplay {
    floor: u8,
    glyph: String,
    color: ColorHint,
    buttons: BTreeMap<u8, ButtonAppearance>,
    scrollback: VecDeque<String>,
    visible_lines: usize,
    format: OutputFormat,
}

impl TerminalDisplay {
    pub fn new(building: &Building, visible_lines: usize, format: OutputFormat) -> TerminalDisplay {
        let buttons = building
            .floors()
            .map(|floor| (floor, ButtonAppearance::Rest))
            .collect();

        TerminalDisplay {
            floor: GROUND_FLOOR,
            glyph: Direction::Idle.glyph().to_string(),
            color: Direction::Idle.color(),
            buttons,
            scrollback: VecDeque::new(),
            visible_lines,
            format,
        }
    }

    pub fn run<W: Write>(mut self, notification_rx: cbc::Receiver<Notification>, mut out: W) {
        if self.format == OutputFormat::Text {
            let _ = writeln!(out, "{}", self.panel());
            let _ = writeln!(out, "{}", READY_MESSAGE);
        }

        // Ends once the controller, the last sender, is gone
        for notification in notification_rx.iter() {
            self.apply(&notification);
            if let Some(line) = self.render(&notification) {
                if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
                    error!("Failed to write to terminal: {}", e);
                    break;
                }
            }
        }
        info!("Display stopped");
    }

    pub fn apply(&mut self, notification: &Notification) {
        match notification {
            Notification::FloorChanged { floor } => self.floor = *floor,
            Notification::DirectionChanged { glyph, color } => {
                self.glyph = glyph.clone();
                self.color = *color;
            }
            Notification::MotionStarted { destination } => {
                self.set_button(*destination, ButtonAppearance::Active)
            }
            Notification::MotionEnded { .. } => {
                for appearance in self.buttons.values_mut() {
                    *appearance = ButtonAppearance::Rest;
                }
            }
            Notification::LogAppended { text } => {
                if self.scrollback.len() == self.visible_lines {
                    self.scrollback.pop_front();
                }
                self.scrollback.push_back(text.clone());
            }
            Notification::LogCleared => self.scrollback.clear(),
        }
    }

    pub fn render(&self, notification: &Notification) -> Option<String> {
        match self.format {
            OutputFormat::Json => match serde_json::to_string(notification) {
                Ok(json) => Some(json),
                Err(e) => {
                    error!("Failed to serialize {:?}: {}", notification, e);
                    None
                }
            },
            OutputFormat::Text => match notification {
                Notification::LogAppended { text } => Some(text.clone()),
                Notification::LogCleared => Some("(log cleared)".to_string()),
                Notification::FloorChanged { .. } => Some(self.panel()),
                Notification::DirectionChanged { .. } | Notification::MotionStarted { .. } => None,
                Notification::MotionEnded { .. } => Some(self.panel()),
            },
        }
    }

    // e.g. "▣ 3 ▣  ↑ (#e8e84a)  [8] [7] [6] [5*] [4] [3] [2] [1]"
    pub fn panel(&self) -> String {
        let buttons: Vec<String> = self
            .buttons
            .iter()
            .rev()
            .map(|(floor, appearance)| match appearance {
                ButtonAppearance::Rest => format!("[{}]", floor),
                ButtonAppearance::Active => format!("[{}*]", floor),
            })
            .collect();

        format!(
            "▣ {} ▣  {} ({})  {}",
            self.floor,
            self.glyph,
            self.color.hex(),
            buttons.join(" ")
        )
    }

    pub fn floor(&self) -> u8 {
        self.floor
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn button(&self, floor: u8) -> Option<ButtonAppearance> {
        self.buttons.get(&floor).copied()
    }

    pub fn scrollback(&self) -> impl Iterator<Item = &String> {
        self.scrollback.iter()
    }

    fn set_button(&mut self, floor: u8, appearance: ButtonAppearance) {
        if let Some(button) = self.buttons.get_mut(&floor) {
            *button = appearance;
        }
    }
}
