//! In-place exchanges between the queue and the reserve stack.
//!
//! Neither operation changes a container's length; only slot values move.

use std::mem;

use crate::error::ActionError;
use crate::queue::PieceQueue;
use crate::stack::ReserveStack;
use crate::types::TRIPLE_SWAP_LEN;

/// Exchange the queue's front piece with the stack's top piece.
///
/// Applying it twice restores the original arrangement.
pub fn swap_front_top<const Q: usize, const S: usize>(
    queue: &mut PieceQueue<Q>,
    stack: &mut ReserveStack<S>,
) -> Result<(), ActionError> {
    let front = queue.get_mut(0).ok_or(ActionError::QueueEmpty)?;
    let top = stack.from_top_mut(0).ok_or(ActionError::StackEmpty)?;
    mem::swap(front, top);
    Ok(())
}

/// Exchange the first three queue slots with the top three stack slots.
///
/// Queue position `i` (from the front) pairs with stack position `top - i`.
/// Both containers need at least three pieces; there is no partial swap.
pub fn swap_triple<const Q: usize, const S: usize>(
    queue: &mut PieceQueue<Q>,
    stack: &mut ReserveStack<S>,
) -> Result<(), ActionError> {
    if queue.len() < TRIPLE_SWAP_LEN || stack.len() < TRIPLE_SWAP_LEN {
        return Err(ActionError::NotEnoughForTriple {
            queue: queue.len(),
            stack: stack.len(),
        });
    }

    for i in 0..TRIPLE_SWAP_LEN {
        if let (Some(slot), Some(reserved)) = (queue.get_mut(i), stack.from_top_mut(i)) {
            mem::swap(slot, reserved);
        }
    }
    Ok(())
}
