//! Todo Id Allocator
//!
//! Monotonic counter handing out ids for new todos.

use crate::models::Todo;

/// Once `u32::MAX` has been issued the allocator is exhausted and hands
/// out nothing more, so an id is never repeated by wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    next: Option<u32>,
}

impl IdAllocator {
    /// Start one above the highest id in `seed` (1 for an empty seed)
    pub fn seeded_from(seed: &[Todo]) -> Self {
        let next = match seed.iter().map(|todo| todo.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { next }
    }

    /// Id the next `allocate` will return, `None` once exhausted
    pub fn peek(&self) -> Option<u32> {
        self.next
    }

    /// Read then increment; ids are never handed out twice
    pub fn allocate(&mut self) -> Option<u32> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }
}
