#![cfg(test)]

use std::cell::Cell;

/// Counts how many [`Tracked`] values it handed out have been dropped.
pub struct DropCounter {
    dropped: Cell<usize>,
}

impl DropCounter {
    pub fn new() -> Self {
        DropCounter {
            dropped: Cell::new(0),
        }
    }

    pub fn drop_count(&self) -> usize {
        self.dropped.get()
    }

    pub fn new_value(&self) -> Tracked<'_> {
        Tracked { counter: self }
    }
}

/// A value that bumps its counter when dropped.
pub struct Tracked<'a> {
    counter: &'a DropCounter,
}

impl Drop for Tracked<'_> {
    fn drop(&mut self) {
        self.counter.dropped.set(self.counter.dropped.get() + 1);
    }
}
