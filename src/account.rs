use std::{cell::Cell, fmt, rc::Rc};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::command::{BalanceAction, BalanceCommand};

pub type AccountNumber = i32;

/// Handle shared by every structure that must observe the same account.
pub type AccountRef = Rc<Account>;

/// Keys the storage structures look records up by.
pub trait AccountRecord {
    fn account_number(&self) -> AccountNumber;
    fn name(&self) -> &str;
}

impl<T: AccountRecord + ?Sized> AccountRecord for Rc<T> {
    fn account_number(&self) -> AccountNumber {
        (**self).account_number()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountEventKind {
    Deposited,
    Withdrawn,
    TransferredOut { to: AccountNumber },
    TransferredIn { from: AccountNumber },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountEvent {
    account_number: AccountNumber,
    amount: Decimal,
    kind: AccountEventKind,
}

impl AccountEvent {
    pub fn kind(&self) -> AccountEventKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Renders the transaction description recorded in the history.
impl fmt::Display for AccountEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.amount;
        let account = self.account_number;
        match self.kind {
            AccountEventKind::Deposited => write!(f, "Deposited {amount} into account {account}"),
            AccountEventKind::Withdrawn => write!(f, "Withdrawn {amount} from account {account}"),
            AccountEventKind::TransferredOut { to } => {
                write!(f, "Transferred {amount} to account {to}")
            }
            AccountEventKind::TransferredIn { from } => {
                write!(f, "Received {amount} from account {from}")
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },
    #[error("Balance overflow: balance {balance}, amount {amount}")]
    BalanceOverflow { balance: Decimal, amount: Decimal },
}

/// Customer account. Number and name never change once created; the balance
/// is mutated in place so every holder of an [`AccountRef`] sees it.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    name: String,
    balance: Cell<Decimal>,
}

impl Account {
    pub fn new(number: AccountNumber, name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            number,
            name: name.into(),
            balance: Cell::new(balance),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn balance(&self) -> Decimal {
        self.balance.get()
    }

    /// Events coming out of [`Account::handle`] never saturate; the
    /// saturation only guards events built by hand.
    pub fn apply(&self, event: &AccountEvent) {
        let balance = self.balance.get();
        match event.kind {
            AccountEventKind::Deposited | AccountEventKind::TransferredIn { .. } => {
                self.balance.set(balance.saturating_add(event.amount));
            }
            AccountEventKind::Withdrawn | AccountEventKind::TransferredOut { .. } => {
                self.balance.set(balance.saturating_sub(event.amount));
            }
        }
    }

    /// Amounts are taken as given: a negative deposit lowers the balance and
    /// a negative withdrawal always passes the sufficiency check. A result
    /// outside the `Decimal` range is rejected.
    pub fn handle(&self, command: BalanceCommand) -> Result<AccountEvent, AccountError> {
        let amount = command.amount;
        let balance = self.balance.get();
        let overflow = AccountError::BalanceOverflow { balance, amount };
        let kind = match command.action {
            BalanceAction::Deposit | BalanceAction::TransferIn { .. } => {
                balance.checked_add(amount).ok_or(overflow)?;
                match command.action {
                    BalanceAction::TransferIn { from } => AccountEventKind::TransferredIn { from },
                    _ => AccountEventKind::Deposited,
                }
            }
            BalanceAction::Withdraw | BalanceAction::TransferOut { .. } => {
                if balance < amount {
                    return Err(AccountError::InsufficientFunds {
                        balance,
                        requested: amount,
                    });
                }
                balance.checked_sub(amount).ok_or(overflow)?;
                match command.action {
                    BalanceAction::TransferOut { to } => AccountEventKind::TransferredOut { to },
                    _ => AccountEventKind::Withdrawn,
                }
            }
        };
        Ok(AccountEvent {
            account_number: self.number,
            amount,
            kind,
        })
    }
}

impl AccountRecord for Account {
    fn account_number(&self) -> AccountNumber {
        self.number
    }

    fn name(&self) -> &str {
        &self.name
    }
}
