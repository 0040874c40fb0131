mod clock;
mod errors;
mod selector;
mod transactions_store;

pub use clock::{Clock, SystemClock};
pub use errors::StoreError;
pub use selector::{Shared, Subscription};
pub use transactions_store::{CreateTransaction, FetchTransactions, TransactionsState, TransactionsStore};
