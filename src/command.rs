use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::account::AccountNumber;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Create,
    Deposit,
    Withdraw,
    Transfer,
    Delete,
    Undo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceAction {
    Deposit,
    Withdraw,
    TransferOut { to: AccountNumber },
    TransferIn { from: AccountNumber },
}

#[derive(Debug, Clone, Copy)]
pub struct BalanceCommand {
    pub action: BalanceAction,
    pub amount: Decimal,
}

/// Raw, already-tokenized operation arguments. Which of them are required
/// depends on the [`OperationKind`].
#[derive(Debug, Clone, Default)]
pub struct OperationFields {
    pub account: Option<AccountNumber>,
    pub name: Option<String>,
    pub counterparty: Option<AccountNumber>,
    pub amount: Option<Decimal>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Account number is required for {kind:?}")]
    AccountRequired { kind: OperationKind },
    #[error("Customer name is required for {kind:?}")]
    NameRequired { kind: OperationKind },
    #[error("Destination account is required for {kind:?}")]
    CounterpartyRequired { kind: OperationKind },
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: OperationKind },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    CreateAccount {
        account_number: AccountNumber,
        name: String,
        balance: Decimal,
    },
    Deposit {
        account_number: AccountNumber,
        amount: Decimal,
    },
    Withdraw {
        account_number: AccountNumber,
        amount: Decimal,
    },
    Transfer {
        from: AccountNumber,
        to: AccountNumber,
        amount: Decimal,
    },
    DeleteAccount {
        account_number: AccountNumber,
    },
    UndoTransaction,
}

impl LedgerCommand {
    /// Only presence is checked. Negative amounts and duplicate account
    /// numbers go through untouched.
    pub fn parse_command(
        kind: OperationKind,
        fields: OperationFields,
    ) -> Result<Self, CommandError> {
        let account = || fields.account.ok_or(CommandError::AccountRequired { kind });
        let amount = || fields.amount.ok_or(CommandError::AmountRequired { kind });
        match kind {
            OperationKind::Create => Ok(Self::CreateAccount {
                account_number: account()?,
                name: fields
                    .name
                    .clone()
                    .ok_or(CommandError::NameRequired { kind })?,
                balance: amount()?,
            }),
            OperationKind::Deposit => Ok(Self::Deposit {
                account_number: account()?,
                amount: amount()?,
            }),
            OperationKind::Withdraw => Ok(Self::Withdraw {
                account_number: account()?,
                amount: amount()?,
            }),
            OperationKind::Transfer => Ok(Self::Transfer {
                from: account()?,
                to: fields
                    .counterparty
                    .ok_or(CommandError::CounterpartyRequired { kind })?,
                amount: amount()?,
            }),
            OperationKind::Delete => Ok(Self::DeleteAccount {
                account_number: account()?,
            }),
            OperationKind::Undo => Ok(Self::UndoTransaction),
        }
    }
}
