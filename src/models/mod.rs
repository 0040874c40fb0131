#[cfg(test)]
mod tests;
mod transaction;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use transaction::{CreateTransactionInput, NewTransaction, Transaction};

/// Whether a transaction adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Income,
    Outcome
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Transaction type must be 'income' or 'outcome', got '{0}'")]
pub struct UnknownTransactionType(pub String);

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome"
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "income" => Ok(TransactionType::Income),
            "outcome" => Ok(TransactionType::Outcome),
            other => Err(UnknownTransactionType(other.to_string()))
        }
    }
}
