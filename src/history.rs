// history.rs

use crate::error::CalcError;
use crate::operation::Operation;

// Maximum number of operations kept by a default History.
pub const HISTORY_CAPACITY: usize = 100;

pub struct History {
    entries: Vec<Operation>,
    capacity: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    // The buffer is sized once up front; push never reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    pub fn push(&mut self, op: Operation) -> Result<(), CalcError> {
        if self.is_full() {
            return Err(CalcError::HistoryFull);
        }
        self.entries.push(op);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Operation, CalcError> {
        self.entries.pop().ok_or(CalcError::HistoryEmpty)
    }

    #[allow(dead_code)]
    pub fn peek(&self) -> Result<&Operation, CalcError> {
        self.entries.last().ok_or(CalcError::HistoryEmpty)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // Most recent first.
    pub fn iter_recent(&self) -> impl Iterator<Item = &Operation> {
        self.entries.iter().rev()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
