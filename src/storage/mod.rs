//! Containers backing the ledger. None of them know about each other;
//! keeping them consistent is up to the caller.

pub mod bounded_queue;
pub mod circular_registry;
pub mod name_index;
pub mod primary_registry;
pub mod transaction_log;

pub use bounded_queue::{BoundedQueue, QUEUE_CAPACITY, QueueError, WaitingCustomer};
pub use circular_registry::CircularRegistry;
pub use name_index::NameIndex;
pub use primary_registry::PrimaryRegistry;
pub use transaction_log::{TransactionLog, TransactionLogError, TransactionRecord};
