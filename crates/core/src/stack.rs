//! Reserve stack with a fixed capacity.

use arrayvec::ArrayVec;

use crate::error::ActionError;
use crate::types::{Piece, STACK_CAPACITY};

/// LIFO reserve. Index 0 is the base; the last element is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveStack<const N: usize = STACK_CAPACITY> {
    items: ArrayVec<Piece, N>,
}

impl<const N: usize> ReserveStack<N> {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    /// Push a piece on top. A full stack is left untouched.
    pub fn push(&mut self, piece: Piece) -> Result<(), ActionError> {
        self.items
            .try_push(piece)
            .map_err(|_| ActionError::StackFull)?;
        log::trace!("push {} (len {})", piece, self.items.len());
        Ok(())
    }

    /// Pop the top piece.
    pub fn pop(&mut self) -> Option<Piece> {
        let piece = self.items.pop();
        log::trace!("pop -> {:?} (len {})", piece, self.items.len());
        piece
    }

    pub fn peek(&self) -> Option<&Piece> {
        self.items.last()
    }

    /// Index of the top slot, `None` when empty.
    pub fn top(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    /// Piece `depth` positions below the top (0 = top).
    pub fn from_top(&self, depth: usize) -> Option<&Piece> {
        let top = self.top()?;
        self.items.get(top.checked_sub(depth)?)
    }

    pub fn from_top_mut(&mut self, depth: usize) -> Option<&mut Piece> {
        let top = self.top()?;
        self.items.get_mut(top.checked_sub(depth)?)
    }

    /// Iterate top to base.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.items.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for ReserveStack<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn piece(id: u32) -> Piece {
        Piece::new(PieceKind::T, id)
    }

    #[test]
    fn test_new_stack_is_empty() {
        let stack: ReserveStack = ReserveStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);
        assert_eq!(stack.capacity(), STACK_CAPACITY);
    }

    #[test]
    fn test_push_then_pop_round_trip() {
        let mut stack: ReserveStack = ReserveStack::new();
        stack.push(piece(4)).unwrap();
        assert_eq!(stack.pop(), Some(piece(4)));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_lifo_order_and_top_index() {
        let mut stack: ReserveStack = ReserveStack::new();
        for id in 0..3 {
            stack.push(piece(id)).unwrap();
            assert_eq!(stack.top(), Some(id as usize));
        }
        let order: Vec<u32> = stack.iter().map(|p| p.id).collect();
        assert_eq!(order, vec![2, 1, 0]);
        assert_eq!(stack.pop().map(|p| p.id), Some(2));
        assert_eq!(stack.peek().map(|p| p.id), Some(1));
    }

    #[test]
    fn test_push_on_full_stack_is_rejected() {
        let mut stack: ReserveStack = ReserveStack::new();
        for id in 0..3 {
            stack.push(piece(id)).unwrap();
        }
        let before = stack.clone();
        assert_eq!(stack.push(piece(9)), Err(ActionError::StackFull));
        assert_eq!(stack, before);
        assert_eq!(stack.top(), Some(STACK_CAPACITY - 1));
    }

    #[test]
    fn test_pop_on_empty_stack_is_none() {
        let mut stack: ReserveStack = ReserveStack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn test_from_top_indexes_downward() {
        let mut stack: ReserveStack = ReserveStack::new();
        for id in 0..3 {
            stack.push(piece(id)).unwrap();
        }
        assert_eq!(stack.from_top(0).map(|p| p.id), Some(2));
        assert_eq!(stack.from_top(2).map(|p| p.id), Some(0));
        assert!(stack.from_top(3).is_none());

        stack.from_top_mut(1).unwrap().id = 50;
        assert_eq!(stack.from_top(1).map(|p| p.id), Some(50));
    }
}
