//! Object name allocation for the mock driver

use std::collections::BTreeSet;
use std::num::NonZeroU32;

/// Hands out non-zero object names the way GL drivers do
///
/// Names start at 1. A released name is handed out again before any fresh
/// one, lowest first, so recycling is deterministic in tests.
#[derive(Debug)]
pub struct NameAllocator {
    released: BTreeSet<NonZeroU32>,
    next: Option<NonZeroU32>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self {
            released: BTreeSet::new(),
            next: Some(NonZeroU32::MIN),
        }
    }

    /// Next name, or `None` once every `u32` name is in use
    pub fn acquire(&mut self) -> Option<NonZeroU32> {
        if let Some(name) = self.released.pop_first() {
            return Some(name);
        }
        let name = self.next?;
        self.next = name.checked_add(1);
        Some(name)
    }

    /// Give `name` back. Returns `false` for 0, a name never handed out, or
    /// one already released.
    pub fn release(&mut self, name: u32) -> bool {
        let Some(name) = NonZeroU32::new(name) else {
            return false;
        };
        if !self.was_issued(name) {
            return false;
        }
        self.released.insert(name)
    }

    pub fn is_live(&self, name: u32) -> bool {
        NonZeroU32::new(name)
            .map(|name| self.was_issued(name) && !self.released.contains(&name))
            .unwrap_or(false)
    }

    /// Number of names currently in use
    pub fn live_count(&self) -> usize {
        let issued = match self.next {
            Some(next) => next.get() as usize - 1,
            None => u32::MAX as usize,
        };
        issued - self.released.len()
    }

    fn was_issued(&self, name: NonZeroU32) -> bool {
        self.next.map_or(true, |next| name < next)
    }
}

impl Default for NameAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "name_allocator_tests.rs"]
mod tests;
