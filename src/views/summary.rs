use crate::models::{Transaction, TransactionType};
use crate::types::Price;

/// Totals shown above the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub income: Price,
    pub outcome: Price,
    pub total: Price
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut summary = Summary::default();

        for transaction in transactions {
            match transaction.transaction_type {
                TransactionType::Income => summary.income += transaction.price,
                TransactionType::Outcome => summary.outcome += transaction.price
            }
        }

        summary.total = summary.income;
        summary.total -= summary.outcome;
        summary
    }
}
