use std::io::Write;

use csv::WriterBuilder;
use serde::Serialize;

use crate::models::{Transaction, TransactionType};
use crate::views::{format_date, format_price, Summary};

const COLUMN_GAP: &str = "  ";

fn display_price(transaction: &Transaction) -> String {
    match transaction.transaction_type {
        TransactionType::Income => format_price(transaction.price),
        TransactionType::Outcome => format!("- {}", format_price(transaction.price))
    }
}

/// Writes the listing as aligned columns: description, price, category, date.
pub fn write_table<W: Write>(output: &mut W, transactions: &[Transaction]) -> std::io::Result<()> {
    if transactions.is_empty() {
        return writeln!(output, "No transactions found.");
    }

    let rows: Vec<[String; 4]> = transactions
        .iter()
        .map(|transaction| [
            transaction.description.clone(),
            display_price(transaction),
            transaction.category.clone(),
            format_date(&transaction.created_at)
        ])
        .collect();

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    for row in &rows {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);

        writeln!(output, "{}", line.trim_end())?;
    }

    Ok(())
}

pub fn write_summary<W: Write>(output: &mut W, summary: &Summary) -> std::io::Result<()> {
    writeln!(output, "Income:  {}", format_price(summary.income))?;
    writeln!(output, "Outcome: {}", format_price(summary.outcome))?;
    writeln!(output, "Total:   {}", format_price(summary.total))
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: String,
    description: &'a str,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
    price: String,
    category: &'a str,
    created_at: String
}

const CSV_HEADER: [&str; 6] = ["id", "description", "type", "price", "category", "createdAt"];

/// Writes the listing as CSV in list order. The header is written even when
/// the list is empty.
pub fn write_csv<W: Write>(output: W, transactions: &[Transaction]) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(CSV_HEADER)?;

    for transaction in transactions {
        writer.serialize(CsvRow {
            id: transaction.id.to_string(),
            description: &transaction.description,
            transaction_type: transaction.transaction_type,
            price: transaction.price.to_string(),
            category: &transaction.category,
            created_at: transaction.created_at.to_rfc3339()
        })?;
    }

    writer.flush()?;

    Ok(())
}
