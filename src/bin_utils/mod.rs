//! This module could be a separate crate on its own, to bootstrap [`bank_ledger`] within binary
//! but for simplicity purposes, I include this module directly in the library.

use std::io::{Read, Write};

use crate::{
    account::AccountRecord,
    ledger::{CommandProcessor, Ledger, LedgerError},
};
use anyhow::{Context, Result};
use csv_parser::CsvOperationParser;
use csv_printer::{Customer, HistoryEntry, print_rows};
pub mod csv_parser;
pub mod csv_printer;

/// What to print once all operations are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Report {
    /// Every indexed customer, in dictionary order.
    #[default]
    Customers,
    /// Transaction descriptions, most recent first.
    History,
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub report: Report,
    pub error_printer: Box<dyn FnMut(u64, LedgerError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        let mut ledger = Ledger::new();

        for (line, row) in parser {
            let row = row.with_context(|| format!("Malformed operation at line {line}"))?;
            let (kind, fields) = row.into_parts();
            if let Err(err) = ledger.process_operation(kind, fields) {
                (self.error_printer)(line, err);
            }
        }

        match self.report {
            Report::Customers => print_rows(
                self.output,
                ledger.list_all_by_name().map(|acc| Customer {
                    account: acc.account_number(),
                    name: acc.name(),
                    balance: acc.balance(),
                }),
            ),
            Report::History => print_rows(
                self.output,
                ledger
                    .view_transactions()
                    .enumerate()
                    .map(|(idx, record)| HistoryEntry {
                        position: idx + 1,
                        description: record.description(),
                    }),
            ),
        }
    }
}
