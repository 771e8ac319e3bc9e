//! Failure reasons for container and game actions.
//!
//! None of these are fatal. Every operation checks its precondition before
//! touching state, so an `Err` always means "nothing changed".

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("the queue is empty")]
    QueueEmpty,

    #[error("the queue is full")]
    QueueFull,

    #[error("the reserve stack is empty")]
    StackEmpty,

    #[error("the reserve stack is full")]
    StackFull,

    #[error("a triple swap needs at least 3 pieces in each container (queue has {queue}, stack has {stack})")]
    NotEnoughForTriple { queue: usize, stack: usize },

    #[error("no piece ids left to hand out")]
    IdsExhausted,
}
