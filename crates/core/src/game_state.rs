//! Game state module - owns the queue, the reserve stack and the id counter
//!
//! Every menu action goes through [`GameState`]. Actions that take a piece
//! off the queue put a freshly generated one at the back, so the queue is
//! full after every successful play or reserve.

use crate::error::ActionError;
use crate::exchange::{swap_front_top, swap_triple};
use crate::queue::PieceQueue;
use crate::rng::PieceGenerator;
use crate::snapshot::GameSnapshot;
use crate::stack::ReserveStack;
use crate::types::{MenuAction, Piece, QUEUE_CAPACITY};

/// What a successful action did, for reporting back to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Played(Piece),
    Reserved(Piece),
    Used(Piece),
    SwappedOne,
    SwappedThree,
    Quit,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    queue: PieceQueue,
    reserve: ReserveStack,
    generator: PieceGenerator,
    /// Id handed to the next generated piece. Never reused.
    next_id: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The queue starts full with ids `0..QUEUE_CAPACITY`; the reserve starts empty.
    pub fn new(seed: u32) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let queue = PieceQueue::filled(&mut generator);
        log::debug!("new game (seed {})", seed);

        Self {
            queue,
            reserve: ReserveStack::new(),
            generator,
            next_id: QUEUE_CAPACITY as u32,
        }
    }

    /// Play the front piece and refill the queue.
    pub fn play(&mut self) -> Result<Piece, ActionError> {
        if self.queue.is_empty() {
            return Err(ActionError::QueueEmpty);
        }
        self.check_next_id()?;

        let played = self.queue.dequeue().ok_or(ActionError::QueueEmpty)?;
        self.refill_queue()?;
        log::debug!("played {}", played);
        Ok(played)
    }

    /// Move the front piece onto the reserve stack and refill the queue.
    pub fn reserve(&mut self) -> Result<Piece, ActionError> {
        if self.queue.is_empty() {
            return Err(ActionError::QueueEmpty);
        }
        if self.reserve.is_full() {
            return Err(ActionError::StackFull);
        }
        self.check_next_id()?;

        let reserved = self.queue.dequeue().ok_or(ActionError::QueueEmpty)?;
        self.reserve.push(reserved)?;
        self.refill_queue()?;
        log::debug!("reserved {}", reserved);
        Ok(reserved)
    }

    /// Pop the top reserved piece. The queue is not touched.
    pub fn use_reserved(&mut self) -> Result<Piece, ActionError> {
        let used = self.reserve.pop().ok_or(ActionError::StackEmpty)?;
        log::debug!("used {}", used);
        Ok(used)
    }

    pub fn swap_one(&mut self) -> Result<(), ActionError> {
        swap_front_top(&mut self.queue, &mut self.reserve)?;
        log::debug!("swapped queue front with reserve top");
        Ok(())
    }

    pub fn swap_three(&mut self) -> Result<(), ActionError> {
        swap_triple(&mut self.queue, &mut self.reserve)?;
        log::debug!("swapped three queue slots with the reserve");
        Ok(())
    }

    /// Dispatch a menu action.
    pub fn apply(&mut self, action: MenuAction) -> Result<ActionOutcome, ActionError> {
        let outcome = match action {
            MenuAction::Play => self.play().map(ActionOutcome::Played),
            MenuAction::Reserve => self.reserve().map(ActionOutcome::Reserved),
            MenuAction::UseReserved => self.use_reserved().map(ActionOutcome::Used),
            MenuAction::SwapOne => self.swap_one().map(|()| ActionOutcome::SwappedOne),
            MenuAction::SwapThree => self.swap_three().map(|()| ActionOutcome::SwappedThree),
            MenuAction::Quit => Ok(ActionOutcome::Quit),
        };
        if let Err(err) = &outcome {
            log::debug!("{} rejected: {}", action.as_str(), err);
        }
        outcome
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn reserve_stack(&self) -> &ReserveStack {
        &self.reserve
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    /// Build a display snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its storage.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.clear();
        snap.queue.extend(self.queue.iter().copied());
        snap.reserve.extend(self.reserve.iter().copied());
        snap.next_id = self.next_id;
        snap.seed = self.seed();
    }

    /// Fails once the counter cannot advance past the next id.
    fn check_next_id(&self) -> Result<u32, ActionError> {
        self.next_id.checked_add(1).ok_or(ActionError::IdsExhausted)
    }

    fn refill_queue(&mut self) -> Result<(), ActionError> {
        let following = self.check_next_id()?;
        let piece = self.generator.generate(self.next_id);
        self.queue.enqueue(piece)?;
        self.next_id = following;
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
