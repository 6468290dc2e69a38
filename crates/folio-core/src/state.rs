use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::config::ErrorFlagging;
use super::config::SessionConfig;
use super::profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryOrigin {
    Command,
    Output,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollbackEntry {
    pub text: String,
    pub origin: EntryOrigin,
    pub is_error: bool,
    pub timestamp: Option<String>,
}

impl ScrollbackEntry {
    pub fn command(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: EntryOrigin::Command,
            is_error: false,
            timestamp: Some(now_label()),
        }
    }

    pub fn output(text: impl Into<String>, is_error: bool) -> Self {
        Self {
            text: text.into(),
            origin: EntryOrigin::Output,
            is_error,
            timestamp: Some(now_label()),
        }
    }

    pub fn welcome() -> Self {
        Self::output(profile::welcome_banner(), false)
    }

    pub fn is_command(&self) -> bool {
        self.origin == EntryOrigin::Command
    }
}

pub fn now_label() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Append-only log of rendered lines. Only `reset` removes entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scrollback {
    entries: Vec<ScrollbackEntry>,
}

impl Scrollback {
    pub fn new() -> Self {
        Self {
            entries: vec![
                ScrollbackEntry::welcome(),
                ScrollbackEntry {
                    text: profile::WELCOME_HINT.to_string(),
                    origin: EntryOrigin::Output,
                    is_error: false,
                    timestamp: None,
                },
            ],
        }
    }

    pub fn append(&mut self, entry: ScrollbackEntry) {
        self.entries.push(entry);
    }

    /// Drops everything but a fresh welcome banner.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(ScrollbackEntry::welcome());
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScrollbackEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&ScrollbackEntry> {
        self.entries.last()
    }
}

impl Default for Scrollback {
    fn default() -> Self {
        Self::new()
    }
}

/// Submitted commands, most recent first, bounded by `cap`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandHistory {
    cap: usize,
    buf: VecDeque<String>,
}

impl CommandHistory {
    pub fn new(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            cap,
            buf: VecDeque::with_capacity(cap),
        }
    }

    pub fn push(&mut self, command: String) {
        self.buf.push_front(command);
        self.buf.truncate(self.cap);
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.buf.get(idx).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buf.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    Idle,
    BrowsingHistory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalState {
    pub scrollback: Scrollback,
    pub input: String,
    pub history: CommandHistory,
    /// `None` while not browsing; `Some(0)` is the most recent command.
    pub history_cursor: Option<usize>,
    pub error_flagging: ErrorFlagging,
}

impl TerminalState {
    pub fn new(session: SessionConfig) -> Self {
        Self {
            scrollback: Scrollback::new(),
            input: String::new(),
            history: CommandHistory::new(session.history_limit),
            history_cursor: None,
            error_flagging: session.error_flagging,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        match self.history_cursor {
            Some(_) => InteractionMode::BrowsingHistory,
            None => InteractionMode::Idle,
        }
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
