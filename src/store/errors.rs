use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Transactions store has been dropped")]
    Closed,
    #[error("Initial transactions load did not complete: {0}")]
    InitialLoad(String)
}
