mod errors;
mod http;

use async_trait::async_trait;

use crate::models::{NewTransaction, Transaction};

pub use errors::ApiError;
pub use http::HttpTransactionsApi;

/// The remote collection of transactions.
///
/// `list` must return records newest first; callers do not re-sort.
#[async_trait]
pub trait TransactionsApi: Send + Sync + 'static {
    async fn list(&self, query: Option<&str>) -> Result<Vec<Transaction>, ApiError>;
    async fn create(&self, transaction: &NewTransaction) -> Result<Transaction, ApiError>;
}
