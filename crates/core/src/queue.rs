//! Upcoming-piece queue backed by a fixed ring buffer.
//!
//! Front and back indices wrap modulo the capacity; `len` tracks how many
//! slots are live. The queue never allocates.

use crate::error::ActionError;
use crate::rng::PieceGenerator;
use crate::types::{Piece, QUEUE_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue<const N: usize = QUEUE_CAPACITY> {
    slots: [Option<Piece>; N],
    front: usize,
    back: usize,
    len: usize,
}

impl<const N: usize> PieceQueue<N> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; N],
            front: 0,
            back: 0,
            len: 0,
        }
    }

    /// Create a queue filled to capacity with pieces numbered `0..N`.
    pub fn filled(generator: &mut PieceGenerator) -> Self {
        let mut queue = Self::new();
        for (id, slot) in queue.slots.iter_mut().enumerate() {
            *slot = Some(generator.generate(id as u32));
        }
        // Back has wrapped to slot 0.
        queue.len = N;
        queue
    }

    /// Remove and return the front piece.
    pub fn dequeue(&mut self) -> Option<Piece> {
        if self.len == 0 {
            return None;
        }
        let piece = self.slots[self.front].take();
        self.front = (self.front + 1) % N;
        self.len -= 1;
        log::trace!("dequeue -> {:?} (len {})", piece, self.len);
        piece
    }

    /// Append a piece at the back.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), ActionError> {
        if self.len == N {
            return Err(ActionError::QueueFull);
        }
        self.slots[self.back] = Some(piece);
        self.back = (self.back + 1) % N;
        self.len += 1;
        log::trace!("enqueue {} (len {})", piece, self.len);
        Ok(())
    }

    pub fn front(&self) -> Option<&Piece> {
        self.get(0)
    }

    /// Piece at logical position `index` (0 = front).
    pub fn get(&self, index: usize) -> Option<&Piece> {
        if index >= self.len {
            return None;
        }
        self.slots[self.ring_index(index)].as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Piece> {
        if index >= self.len {
            return None;
        }
        let slot = self.ring_index(index);
        self.slots[slot].as_mut()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    fn ring_index(&self, index: usize) -> usize {
        (self.front + index) % N
    }
}

impl<const N: usize> Default for PieceQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
