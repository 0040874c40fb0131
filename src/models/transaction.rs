use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::TransactionType;
use crate::types::{Price, TransactionId};

/// A single income or outcome record as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Assigned by the remote system.
    pub id: TransactionId,
    pub description: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub price: Price,
    pub category: String,
    pub created_at: DateTime<Utc>
}

/// The fields a user supplies when registering a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTransactionInput {
    pub description: String,
    pub price: Price,
    pub category: String,
    pub transaction_type: TransactionType
}

/// Request body for creating a transaction.
///
/// `created_at` is stamped on the client; a real backend would assign it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub description: String,
    pub price: Price,
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub created_at: DateTime<Utc>
}

impl NewTransaction {
    pub fn from_input(input: CreateTransactionInput, created_at: DateTime<Utc>) -> Self {
        let CreateTransactionInput { description, price, category, transaction_type } = input;

        Self {
            description,
            price,
            category,
            transaction_type,
            created_at
        }
    }
}
