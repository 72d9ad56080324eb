use thiserror::Error;

use crate::{
    account::{AccountError, AccountNumber},
    command::{CommandError, LedgerCommand, OperationFields, OperationKind},
    storage::TransactionLogError,
};

pub mod in_memory_ledger;

pub use in_memory_ledger::Ledger;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account {account_number} not found")]
    NotFound { account_number: AccountNumber },
    #[error(transparent)]
    AccountErr(#[from] AccountError),
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    HistoryErr(#[from] TransactionLogError),
}

pub trait CommandProcessor {
    fn process_command(&mut self, command: LedgerCommand) -> Result<(), LedgerError>;

    fn process_operation(
        &mut self,
        kind: OperationKind,
        fields: OperationFields,
    ) -> Result<(), LedgerError> {
        let command = LedgerCommand::parse_command(kind, fields)?;
        self.process_command(command)
    }
}
