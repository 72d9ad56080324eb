use std::rc::Rc;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    account::{Account, AccountEvent, AccountNumber, AccountRef},
    command::{BalanceAction, BalanceCommand, LedgerCommand},
    storage::{NameIndex, PrimaryRegistry, TransactionLog, TransactionRecord},
};

use super::{CommandProcessor, LedgerError};

/// Account lifecycle on top of the primary registry, the name index and the
/// transaction log.
///
/// The registry and the index hold the same [`AccountRef`], so balance
/// changes made through the registry show up in the name listing. They are
/// not kept in step otherwise: a record whose name is already indexed never
/// reaches the index, and deleting an account leaves its index entry behind.
#[derive(Default)]
pub struct Ledger {
    registry: PrimaryRegistry<AccountRef>,
    name_index: NameIndex<AccountRef>,
    history: TransactionLog,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_account(
        &mut self,
        account_number: AccountNumber,
        name: impl Into<String>,
        balance: Decimal,
    ) -> AccountRef {
        let account = Rc::new(Account::new(account_number, name, balance));
        self.registry.add(Rc::clone(&account));
        let indexed = self.name_index.insert(Rc::clone(&account));
        info!(account_number, %balance, indexed, "account created");
        account
    }

    pub fn find(&self, account_number: AccountNumber) -> Option<&AccountRef> {
        self.registry.find(account_number)
    }

    /// Returns the new balance.
    pub fn deposit(
        &mut self,
        account_number: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let account = self.lookup(account_number)?;
        let event = account.handle(BalanceCommand {
            action: BalanceAction::Deposit,
            amount,
        })?;
        let balance = self.commit(&account, &event);
        Ok(balance)
    }

    /// Returns the new balance.
    pub fn withdraw(
        &mut self,
        account_number: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let account = self.lookup(account_number)?;
        let event = account.handle(BalanceCommand {
            action: BalanceAction::Withdraw,
            amount,
        })?;
        let balance = self.commit(&account, &event);
        Ok(balance)
    }

    /// Both accounts must exist before the source is checked for funds.
    /// Records the source side first, then the destination side.
    pub fn transfer(
        &mut self,
        from: AccountNumber,
        to: AccountNumber,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let source = self.lookup(from)?;
        let destination = self.lookup(to)?;
        let debit = source.handle(BalanceCommand {
            action: BalanceAction::TransferOut { to },
            amount,
        })?;
        let credit = destination.handle(BalanceCommand {
            action: BalanceAction::TransferIn { from },
            amount,
        })?;
        self.commit(&source, &debit);
        self.commit(&destination, &credit);
        Ok(())
    }

    /// Unlinks the account from the registry only.
    pub fn delete_account(
        &mut self,
        account_number: AccountNumber,
    ) -> Result<AccountRef, LedgerError> {
        let account = self
            .registry
            .delete(account_number)
            .ok_or(LedgerError::NotFound { account_number })?;
        info!(account_number, "account deleted");
        Ok(account)
    }

    /// Ascending name order, stale index entries included.
    pub fn list_all_by_name(&self) -> impl Iterator<Item = &AccountRef> {
        self.name_index.iter()
    }

    pub fn record_transaction(&mut self, record: TransactionRecord) {
        self.history.record(record);
    }

    /// Drops the latest record. Balances are left as they are.
    pub fn undo_transaction(&mut self) -> Result<TransactionRecord, LedgerError> {
        let record = self.history.undo()?;
        debug!(description = record.description(), "transaction undone");
        Ok(record)
    }

    /// Most recent first.
    pub fn view_transactions(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.history.view()
    }

    pub fn registry(&self) -> &PrimaryRegistry<AccountRef> {
        &self.registry
    }

    pub fn name_index(&self) -> &NameIndex<AccountRef> {
        &self.name_index
    }

    fn lookup(&self, account_number: AccountNumber) -> Result<AccountRef, LedgerError> {
        self.registry
            .find(account_number)
            .cloned()
            .ok_or(LedgerError::NotFound { account_number })
    }

    fn commit(&mut self, account: &Account, event: &AccountEvent) -> Decimal {
        account.apply(event);
        let description = event.to_string();
        debug!(account_number = account.number(), %description, "transaction applied");
        self.history.record(TransactionRecord::new(description));
        account.balance()
    }
}

impl CommandProcessor for Ledger {
    fn process_command(&mut self, command: LedgerCommand) -> Result<(), LedgerError> {
        match command {
            LedgerCommand::CreateAccount {
                account_number,
                name,
                balance,
            } => {
                self.create_account(account_number, name, balance);
            }
            LedgerCommand::Deposit {
                account_number,
                amount,
            } => {
                self.deposit(account_number, amount)?;
            }
            LedgerCommand::Withdraw {
                account_number,
                amount,
            } => {
                self.withdraw(account_number, amount)?;
            }
            LedgerCommand::Transfer { from, to, amount } => self.transfer(from, to, amount)?,
            LedgerCommand::DeleteAccount { account_number } => {
                self.delete_account(account_number)?;
            }
            LedgerCommand::UndoTransaction => {
                self.undo_transaction()?;
            }
        };
        Ok(())
    }
}
