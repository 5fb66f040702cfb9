// history.rs

use std::collections::{vec_deque, VecDeque};
use std::num::NonZeroUsize;

pub const DEFAULT_CAPACITY: usize = 10;

/// Bounded command history.
///
/// Every command entered gets a session-wide 1-based ordinal. Only the last
/// `capacity` commands are retained; older ones are evicted oldest first.
/// Entries are stored without their trailing newline.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    capacity: NonZeroUsize,
    total_seen: usize,
}

impl History {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.get()),
            capacity,
            total_seen: 0,
        }
    }

    /// Records `line` as the newest entry and returns its ordinal.
    pub fn append(&mut self, line: impl Into<String>) -> usize {
        if self.entries.len() == self.capacity.get() {
            let oldest = self.first_ordinal();
            if let Some(evicted) = self.entries.pop_front() {
                log::debug!("history: evicting #{oldest} {evicted:?}");
            }
        }
        self.entries.push_back(line.into());
        self.total_seen += 1;
        self.total_seen
    }

    /// Ordinal of the oldest retained entry.
    ///
    /// When nothing is retained this is `total_seen + 1`, so the window
    /// `first_ordinal()..=total_seen()` is empty.
    pub fn first_ordinal(&self) -> usize {
        self.total_seen - self.entries.len() + 1
    }

    pub fn get(&self, ordinal: usize) -> Option<&str> {
        let first = self.first_ordinal();
        if ordinal < first || ordinal > self.total_seen {
            return None;
        }
        self.entries.get(ordinal - first).map(String::as_str)
    }

    pub fn contains(&self, ordinal: usize) -> bool {
        self.get(ordinal).is_some()
    }

    pub fn iter(&self) -> Entries<'_> {
        Entries {
            inner: self.entries.iter(),
            next_ordinal: self.first_ordinal(),
        }
    }

    /// Drops every retained entry along with the buffer. The running
    /// count survives so the final prompt number stays correct.
    pub fn release(&mut self) {
        self.entries = VecDeque::new();
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_seen(&self) -> usize {
        self.total_seen
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}

/// `(ordinal, line)` pairs, oldest retained first.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: vec_deque::Iter<'a, String>,
    next_ordinal: usize,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.inner.next()?;
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        Some((ordinal, line.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl<'a> IntoIterator for &'a History {
    type Item = (usize, &'a str);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
