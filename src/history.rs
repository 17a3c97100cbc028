//! Bounded record of finished games, kept for review before the program
//! exits.

use crate::game::{Board, Player};

/// Number of finished games kept by default
pub const DEFAULT_CAPACITY: usize = 5;

/// Snapshot of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    /// 1-based number of the game within this session
    pub game_number: usize,
    pub board: Board,
    /// `None` for a draw
    pub winner: Option<Player>,
}

/// Fixed-capacity ring buffer of finished games. Overwrites the oldest
/// entry when full.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    capacity: usize,
    head: usize,
    recorded: usize,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 2, "history capacity must be at least 2");
        HistoryStore {
            entries: Vec::with_capacity(capacity),
            capacity,
            head: 0,
            recorded: 0,
        }
    }

    /// Copy `board` into the next slot together with its winner.
    pub fn record(&mut self, board: &Board, winner: Option<Player>) {
        self.recorded += 1;
        let entry = HistoryEntry {
            game_number: self.recorded,
            board: *board,
            winner,
        };
        if self.entries.len() < self.capacity {
            self.entries.push(entry);
        } else {
            self.entries[self.head] = entry;
        }
        self.head = (self.head + 1) % self.capacity;
    }

    /// Entries from oldest to newest
    pub fn iter(&self) -> Chronological<'_> {
        Chronological {
            store: self,
            offset: 0,
        }
    }

    /// Most recently recorded entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        if self.is_empty() {
            return None;
        }
        Some(&self.entries[(self.head + self.capacity - 1) % self.capacity])
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.recorded.min(self.capacity)
    }

    pub fn is_empty(&self) -> bool {
        self.recorded == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total games ever recorded, including overwritten ones
    pub fn games_recorded(&self) -> usize {
        self.recorded
    }

    fn oldest(&self) -> usize {
        (self.head + self.capacity - self.len()) % self.capacity
    }
}

impl<'a> IntoIterator for &'a HistoryStore {
    type Item = &'a HistoryEntry;
    type IntoIter = Chronological<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`HistoryStore`] in recording order.
#[derive(Debug, Clone)]
pub struct Chronological<'a> {
    store: &'a HistoryStore,
    offset: usize,
}

impl<'a> Iterator for Chronological<'a> {
    type Item = &'a HistoryEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.store.len() {
            return None;
        }
        let index = (self.store.oldest() + self.offset) % self.store.capacity;
        self.offset += 1;
        Some(&self.store.entries[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.store.len() - self.offset;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Chronological<'_> {}
