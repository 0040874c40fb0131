use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex, Weak};

use tokio::spawn;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::api::TransactionsApi;
use crate::models::{CreateTransactionInput, NewTransaction, Transaction};
use crate::store::{Clock, Shared, StoreError, Subscription};

/// Everything a consumer can select from the store.
///
/// `transactions` is replaced wholesale by every fetch or create, so its
/// identity changes exactly when the list does. The operation handles are
/// created once per store and never change.
#[derive(Debug, Clone)]
pub struct TransactionsState {
    pub transactions: Shared<Vec<Transaction>>,
    pub fetch_transactions: FetchTransactions,
    pub create_transaction: CreateTransaction
}

/// Single owner of the session's transaction list.
///
/// Cloning the store hands out another reference to the same list; consumers
/// read it through `state` or `select` and change it only through the two
/// operations.
#[derive(Clone)]
pub struct TransactionsStore {
    inner: Arc<StoreInner>
}

struct StoreInner {
    api: Arc<dyn TransactionsApi>,
    clock: Arc<dyn Clock>,
    state: watch::Sender<TransactionsState>,
    initial_load: Mutex<Option<InitialLoad>>
}

pub(crate) type InitialLoad = JoinHandle<Result<(), StoreError>>;

impl TransactionsStore {
    /// Creates the store and starts the one unfiltered initial fetch.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(api: Arc<dyn TransactionsApi>, clock: Arc<dyn Clock>) -> Self {
        let inner = Arc::new_cyclic(|weak: &Weak<StoreInner>| {
            let (state, _) = watch::channel(TransactionsState {
                transactions: Shared::default(),
                fetch_transactions: FetchTransactions(weak.clone()),
                create_transaction: CreateTransaction(weak.clone())
            });

            StoreInner {
                api,
                clock,
                state,
                initial_load: Mutex::new(None)
            }
        });

        let loader = inner.clone();
        let handle = spawn(async move {
            let result = loader.fetch(None).await;

            if let Err(error) = &result {
                error!("Initial transactions load failed: {error}");
            }

            result
        });

        if let Ok(mut slot) = inner.initial_load.lock() {
            *slot = Some(handle);
        }

        Self { inner }
    }

    /// Waits for the initial fetch started by `new`.
    ///
    /// Only the first call observes the outcome; later calls return `Ok`.
    pub async fn ready(&self) -> Result<(), StoreError> {
        match take_initial_load(&self.inner.initial_load)? {
            Some(handle) => handle.await.map_err(|error| StoreError::InitialLoad(error.to_string()))?,
            None => Ok(())
        }
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> TransactionsState {
        self.inner.state.borrow().clone()
    }

    pub fn transactions(&self) -> Shared<Vec<Transaction>> {
        self.inner.state.borrow().transactions.clone()
    }

    pub fn fetch_transactions(&self) -> FetchTransactions {
        self.inner.state.borrow().fetch_transactions.clone()
    }

    pub fn create_transaction(&self) -> CreateTransaction {
        self.inner.state.borrow().create_transaction.clone()
    }

    /// Subscribes to one projection of the state.
    pub fn select<T, F>(&self, selector: F) -> Subscription<TransactionsState, T>
    where
        T: Clone + PartialEq,
        F: Fn(&TransactionsState) -> T + Send + Sync + 'static,
    {
        Subscription::new(self.inner.state.subscribe(), selector)
    }
}

/// Removes the pending initial load, if any. A poisoned slot means the load's
/// outcome can no longer be observed and is reported as a failed load.
pub(crate) fn take_initial_load(slot: &Mutex<Option<InitialLoad>>) -> Result<Option<InitialLoad>, StoreError> {
    slot.lock()
        .map(|mut slot| slot.take())
        .map_err(|_| StoreError::InitialLoad("initial load state is poisoned".to_string()))
}

impl StoreInner {
    async fn fetch(&self, query: Option<&str>) -> Result<(), StoreError> {
        let transactions = self.api.list(query).await?;
        debug!("Fetched {} transactions for query {query:?}", transactions.len());

        self.state.send_modify(|state| {
            state.transactions = Shared::new(transactions);
        });

        Ok(())
    }

    async fn create(&self, input: CreateTransactionInput) -> Result<Transaction, StoreError> {
        let request = NewTransaction::from_input(input, self.clock.now());
        let created = self.api.create(&request).await?;
        debug!("Created transaction [{}]", created.id);

        self.state.send_modify(|state| {
            let mut transactions = Vec::with_capacity(state.transactions.len() + 1);
            transactions.push(created.clone());
            transactions.extend(state.transactions.iter().cloned());
            state.transactions = Shared::new(transactions);
        });

        Ok(created)
    }
}

/// Handle to the store's fetch operation.
///
/// Two handles are equal when they drive the same store.
#[derive(Clone)]
pub struct FetchTransactions(Weak<StoreInner>);

impl FetchTransactions {
    /// Replaces the list with the remote one, newest first, optionally filtered
    /// by `query`.
    ///
    /// # Errors
    /// Remote failures are returned unchanged and leave the list untouched.
    pub async fn call(&self, query: Option<&str>) -> Result<(), StoreError> {
        let inner = self.0.upgrade().ok_or(StoreError::Closed)?;
        inner.fetch(query).await
    }
}

impl PartialEq for FetchTransactions {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for FetchTransactions {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "FetchTransactions({:p})", self.0.as_ptr())
    }
}

/// Handle to the store's create operation.
///
/// Two handles are equal when they drive the same store.
#[derive(Clone)]
pub struct CreateTransaction(Weak<StoreInner>);

impl CreateTransaction {
    /// Stamps `input` with the store clock, submits it and puts the returned
    /// record at the front of the list. Returns the created record.
    ///
    /// # Errors
    /// Remote failures are returned unchanged and leave the list untouched.
    pub async fn call(&self, input: CreateTransactionInput) -> Result<Transaction, StoreError> {
        let inner = self.0.upgrade().ok_or(StoreError::Closed)?;
        inner.create(input).await
    }
}

impl PartialEq for CreateTransaction {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for CreateTransaction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "CreateTransaction({:p})", self.0.as_ptr())
    }
}
