//! Bounded narration log

use std::collections::VecDeque;

/// Entries kept on screen
pub const LOG_CAPACITY: usize = 10;

/// Most-recent-first log; the oldest entry is evicted past capacity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for BattleLog {
    fn default() -> Self {
        Self::with_capacity(LOG_CAPACITY)
    }
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_front(line.into());
        self.entries.truncate(self.capacity);
    }

    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.push(line);
        }
    }

    /// Entries, most recent first
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}
