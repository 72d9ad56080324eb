use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionLogError {
    #[error("Nothing to undo")]
    Underflow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    description: String,
}

impl TransactionRecord {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Stack of transaction descriptions.
#[derive(Debug, Default)]
pub struct TransactionLog {
    records: Vec<TransactionRecord>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    pub fn undo(&mut self) -> Result<TransactionRecord, TransactionLogError> {
        self.records.pop().ok_or(TransactionLogError::Underflow)
    }

    /// Most recent record first.
    pub fn view(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.records.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
