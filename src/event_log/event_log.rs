/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use std::collections::VecDeque;
use std::sync::Arc;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::LogConfig;
use crate::presentation::PresentationLayer;

pub const BULLET: &str = "•";

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub seq: u64,
    pub text: String,
}

/**
 * Append-only sink for the human readable status lines of the lift.
 *
 * Entries are never edited. Once more than `capacity` entries are stored the
 * oldest ones are evicted. How many of them are visible is up to the display.
 *
 * # Fields
 * - `entries`:         Stored entries, oldest first.
 * - `next_seq`:        Sequence number handed to the next entry. Survives `clear`.
 * - `capacity`:        Maximum number of retained entries.
 * - `presenter`:       Notified of every append and clear.
 */
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    next_seq: u64,
    capacity: usize,
    presenter: Arc<dyn PresentationLayer>,
}

impl EventLog {
    pub fn new(config: &LogConfig, presenter: Arc<dyn PresentationLayer>) -> EventLog {
        EventLog {
            entries: VecDeque::new(),
            next_seq: 0,
            capacity: config.capacity.max(1),
            presenter,
        }
    }

    pub fn append(&mut self, message: &str) -> &LogEntry {
        let entry = LogEntry {
            seq: self.next_seq,
            text: format!("{} {}", BULLET, message),
        };
        self.next_seq += 1;

        debug!("log #{}: {}", entry.seq, message);
        self.presenter.on_log_appended(&entry.text);

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.presenter.on_log_cleared();
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Matches on the message, without the bullet
    pub fn contains(&self, message: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.text.strip_prefix(BULLET).map(str::trim_start) == Some(message))
    }
}
