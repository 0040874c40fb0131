use std::fmt;
use std::fmt::{Debug, Formatter};
use std::ops::Deref;
use std::sync::Arc;

use tokio::sync::watch;

use crate::store::StoreError;

/// Shared, immutable value compared by identity rather than by contents.
///
/// Projecting a `Shared` out of a state snapshot lets a subscriber notice that a
/// value was replaced without walking it.
pub struct Shared<T: ?Sized>(Arc<T>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Shared(Arc::new(value))
    }
}

impl<T: ?Sized> Shared<T> {
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T: ?Sized + Debug> Debug for Shared<T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Shared::new(T::default())
    }
}

type Selector<S, T> = Box<dyn Fn(&S) -> T + Send + Sync>;

/// A consumer's view of one projection of a store's state.
///
/// Every store update re-runs the selector, but the consumer only hears about
/// it when the projected value differs from the last one it saw.
pub struct Subscription<S, T> {
    receiver: watch::Receiver<S>,
    selector: Selector<S, T>,
    current: T
}

impl<S, T> Subscription<S, T>
where
    T: Clone + PartialEq,
{
    pub fn new<F>(mut receiver: watch::Receiver<S>, selector: F) -> Self
    where
        F: Fn(&S) -> T + Send + Sync + 'static,
    {
        let current = selector(&*receiver.borrow_and_update());

        Self {
            receiver,
            selector: Box::new(selector),
            current
        }
    }

    /// The last projected value delivered to this consumer.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Returns the new projected value if it changed since the last look,
    /// without waiting.
    pub fn poll_changed(&mut self) -> Option<T> {
        match self.receiver.has_changed() {
            Ok(true) => self.refresh(),
            _ => None
        }
    }

    /// Waits until the projected value differs from the current one.
    ///
    /// # Errors
    /// Returns `StoreError::Closed` once the store is gone.
    pub async fn changed(&mut self) -> Result<T, StoreError> {
        loop {
            self.receiver.changed().await.map_err(|_| StoreError::Closed)?;

            if let Some(value) = self.refresh() {
                return Ok(value);
            }
        }
    }

    fn refresh(&mut self) -> Option<T> {
        let next = (self.selector)(&*self.receiver.borrow_and_update());

        if next == self.current {
            return None;
        }

        self.current = next.clone();
        Some(next)
    }
}
