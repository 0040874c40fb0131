//! In-process stand-ins for the remote API and the clock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::api::{ApiError, TransactionsApi};
use crate::models::{NewTransaction, Transaction, TransactionType};
use crate::store::Clock;
use crate::types::{Price, TransactionId};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(Option<String>),
    Create(NewTransaction)
}

/// Behaves like json-server: records are kept in the order it was seeded with
/// and `q` matches description or category case-insensitively.
pub struct FakeApi {
    records: Mutex<Vec<Transaction>>,
    next_id: AtomicU64,
    calls: Mutex<Vec<Call>>
}

impl FakeApi {
    pub fn new(records: Vec<Transaction>) -> Arc<Self> {
        let next_id = records.len() as u64 + 1;

        Arc::new(Self {
            records: Mutex::new(records),
            next_id: AtomicU64::new(next_id),
            calls: Mutex::new(Vec::new())
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionsApi for FakeApi {
    async fn list(&self, query: Option<&str>) -> Result<Vec<Transaction>, ApiError> {
        self.calls.lock().unwrap().push(Call::List(query.map(str::to_string)));

        let needle = query.unwrap_or_default().to_lowercase();
        let records = self.records.lock().unwrap();

        Ok(records
            .iter()
            .filter(|record| {
                record.description.to_lowercase().contains(&needle) || record.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn create(&self, transaction: &NewTransaction) -> Result<Transaction, ApiError> {
        self.calls.lock().unwrap().push(Call::Create(transaction.clone()));

        let created = Transaction {
            id: TransactionId::Number(self.next_id.fetch_add(1, Ordering::SeqCst)),
            description: transaction.description.clone(),
            transaction_type: transaction.transaction_type,
            price: transaction.price,
            category: transaction.category.clone(),
            created_at: transaction.created_at
        };

        self.records.lock().unwrap().insert(0, created.clone());

        Ok(created)
    }
}

pub struct UnreachableApi;

#[async_trait]
impl TransactionsApi for UnreachableApi {
    async fn list(&self, _query: Option<&str>) -> Result<Vec<Transaction>, ApiError> {
        Err(unavailable())
    }

    async fn create(&self, _transaction: &NewTransaction) -> Result<Transaction, ApiError> {
        Err(unavailable())
    }
}

fn unavailable() -> ApiError {
    ApiError::Status {
        url: "http://localhost:3333/transactions".to_string(),
        status: 503,
        body: "unavailable".to_string()
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn timestamp(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 2, day, 12, 0, 0).unwrap()
}

pub fn create_transaction(id: u64, description: &str, transaction_type: TransactionType, price: i64, category: &str, day: u32) -> Transaction {
    Transaction {
        id: TransactionId::Number(id),
        description: description.to_string(),
        transaction_type,
        price: Price::from(price),
        category: category.to_string(),
        created_at: timestamp(day)
    }
}
