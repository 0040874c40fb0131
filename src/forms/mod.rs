mod errors;
mod new_transaction;
mod search;

pub use errors::{Field, FormError, ValidationError};
pub use new_transaction::{ModalState, NewTransactionForm};
pub use search::SearchForm;

/// What happened when a form was submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T> {
    /// The store operation ran and resolved.
    Completed(T),
    /// Input failed validation; nothing was sent.
    Invalid,
    /// The form was closed or a submission was already in flight.
    Ignored
}
