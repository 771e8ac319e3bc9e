use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY};

/// Read-only copy of a game, ordered for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    /// Front to back.
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Top to base.
    pub reserve: ArrayVec<Piece, STACK_CAPACITY>,
    pub next_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.reserve.clear();
        self.next_id = 0;
        self.seed = 0;
    }

    pub fn queue_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.queue.iter().map(|p| p.id)
    }

    pub fn reserve_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.reserve.iter().map(|p| p.id)
    }
}
