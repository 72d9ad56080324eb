use thiserror::Error;

use crate::account::{Account, AccountNumber, AccountRecord};

/// Capacity used by [`BoundedQueue::default`].
pub const QUEUE_CAPACITY: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("Queue is full, capacity is {capacity}")]
    CapacityExceeded { capacity: usize },
    #[error("Queue is empty")]
    Underflow,
}

/// Lightweight customer reference kept in the waiting queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitingCustomer {
    pub account_number: AccountNumber,
    pub name: String,
}

impl From<&Account> for WaitingCustomer {
    fn from(account: &Account) -> Self {
        Self {
            account_number: account.account_number(),
            name: account.name().to_string(),
        }
    }
}

impl AccountRecord for WaitingCustomer {
    fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Fixed-capacity FIFO ring buffer.
#[derive(Debug)]
pub struct BoundedQueue<T> {
    slots: Box<[Option<T>]>,
    front: usize,
    rear: usize,
    size: usize,
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::new(QUEUE_CAPACITY)
    }
}

impl<T> BoundedQueue<T> {
    /// A zero capacity queue is both empty and full, so it rejects every
    /// operation.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            front: 0,
            // one step behind slot 0, so the first enqueue lands there
            rear: capacity.saturating_sub(1),
            size: 0,
        }
    }

    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        self.rear = (self.rear + 1) % self.capacity();
        self.slots[self.rear] = Some(item);
        self.size += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Underflow);
        }
        let item = self.slots[self.front].take().ok_or(QueueError::Underflow)?;
        self.front = (self.front + 1) % self.capacity();
        self.size -= 1;
        Ok(item)
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
