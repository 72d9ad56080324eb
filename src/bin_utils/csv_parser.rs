use std::io::Read;

use crate::{
    account::AccountNumber,
    command::{OperationFields, OperationKind},
};
use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Operation {
    #[serde(rename = "type")]
    pub kind: OperationKind,
    pub account: Option<AccountNumber>,
    pub name: Option<String>,
    pub counterparty: Option<AccountNumber>,
    pub amount: Option<Decimal>,
}

impl Operation {
    pub fn into_parts(self) -> (OperationKind, OperationFields) {
        (
            self.kind,
            OperationFields {
                account: self.account,
                name: self.name,
                counterparty: self.counterparty,
                amount: self.amount,
            },
        )
    }
}

/// Parses operation list in CSV format, yielding the line each row starts at.
pub struct CsvOperationParser<R> {
    iter: DeserializeRecordsIntoIter<R, Operation>,
}

impl<R> CsvOperationParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvOperationParser<R>
where
    R: Read,
{
    type Item = (u64, csv::Result<Operation>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}
