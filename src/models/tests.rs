use super::{CreateTransactionInput, NewTransaction, Transaction, TransactionType};

use std::str::FromStr;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::types::{Price, TransactionId};

#[test]
fn test_transaction_type_parses_only_the_two_known_values() {
    assert_eq!(TransactionType::from_str("income"), Ok(TransactionType::Income));
    assert_eq!(TransactionType::from_str("outcome"), Ok(TransactionType::Outcome));
    assert!(TransactionType::from_str("Income").is_err());
    assert!(TransactionType::from_str("transfer").is_err());
    assert!(TransactionType::from_str("").is_err());
    assert_eq!(TransactionType::default(), TransactionType::Income);
}

#[test]
fn test_transaction_deserializes_from_api_json() -> Result<()> {
    let body = json!({
        "id": 1,
        "description": "Lanche",
        "type": "outcome",
        "category": "Alimentação",
        "price": 90,
        "createdAt": "2023-02-03T12:00:00.000Z"
    });

    let transaction: Transaction = serde_json::from_value(body)?;

    assert_eq!(transaction.id, TransactionId::Number(1));
    assert_eq!(transaction.description, "Lanche");
    assert_eq!(transaction.transaction_type, TransactionType::Outcome);
    assert_eq!(transaction.price, Price::from(90));
    assert_eq!(transaction.category, "Alimentação");
    assert_eq!(transaction.created_at, Utc.with_ymd_and_hms(2023, 2, 3, 12, 0, 0).unwrap());

    Ok(())
}

#[test]
fn test_transaction_rejects_unknown_type() {
    let body = json!({
        "id": 1,
        "description": "Lanche",
        "type": "transfer",
        "category": "Alimentação",
        "price": 90,
        "createdAt": "2023-02-03T12:00:00.000Z"
    });

    assert!(serde_json::from_value::<Transaction>(body).is_err());
}

#[test]
fn test_new_transaction_serializes_request_body_with_client_timestamp() -> Result<()> {
    let created_at = Utc.with_ymd_and_hms(2023, 2, 3, 12, 0, 0).unwrap();
    let input = CreateTransactionInput {
        description: "Desenvolvimento de site".to_string(),
        price: Price::from(12000),
        category: "Venda".to_string(),
        transaction_type: TransactionType::Income
    };

    let body = serde_json::to_value(NewTransaction::from_input(input, created_at))?;

    assert_eq!(body, json!({
        "description": "Desenvolvimento de site",
        "price": 12000.0,
        "category": "Venda",
        "type": "income",
        "createdAt": "2023-02-03T12:00:00Z"
    }));

    Ok(())
}
