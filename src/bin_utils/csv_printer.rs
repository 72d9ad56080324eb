use std::io::Write;

use crate::account::AccountNumber;
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Customer<'a> {
    pub account: AccountNumber,
    pub name: &'a str,
    pub balance: Decimal,
}

#[derive(Debug, Serialize)]
pub struct HistoryEntry<'a> {
    pub position: usize,
    pub description: &'a str,
}

pub fn print_rows<W, S>(output: &mut W, rows: impl Iterator<Item = S>) -> anyhow::Result<()>
where
    W: Write,
    S: Serialize,
{
    let mut writer = Writer::from_writer(output);
    for row in rows {
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::from_utf8;

    use super::*;

    #[test]
    fn print_customers() {
        let mut output = Vec::new();
        print_rows(
            &mut output,
            [Customer {
                account: 100,
                name: "Alice",
                balance: Decimal::new(750, 1),
            }]
            .into_iter(),
        )
        .unwrap();
        assert_eq!(
            from_utf8(&output).unwrap(),
            "account,name,balance\n100,Alice,75.0\n"
        );
    }

    #[test]
    fn empty_input_prints_nothing() {
        let mut output = Vec::new();
        print_rows(&mut output, std::iter::empty::<HistoryEntry>()).unwrap();
        assert!(output.is_empty());
    }
}
