use std::str::FromStr;

use tracing::{debug, warn};

use crate::forms::{Field, FormError, Submission, ValidationError};
use crate::models::{CreateTransactionInput, Transaction, TransactionType};
use crate::store::{CreateTransaction, StoreError};
use crate::types::Price;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
    Submitting
}

/// The "new transaction" modal.
///
/// Inputs are kept as typed by the user and only parsed on submit. A successful
/// submission clears every field and closes the modal; a rejected one keeps the
/// modal open with field errors; a remote failure reopens it with the failure
/// recorded.
#[derive(Debug, Clone)]
pub struct NewTransactionForm {
    state: ModalState,
    description: String,
    price: String,
    category: String,
    transaction_type: String,
    errors: Vec<ValidationError>,
    submit_error: Option<String>
}

impl Default for NewTransactionForm {
    fn default() -> Self {
        Self {
            state: ModalState::Closed,
            description: String::new(),
            price: String::new(),
            category: String::new(),
            transaction_type: TransactionType::default().to_string(),
            errors: Vec::new(),
            submit_error: None
        }
    }
}

impl NewTransactionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    /// The submit control is disabled while a request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.state == ModalState::Submitting
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.errors.iter().find(|error| error.field() == field)
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn transaction_type(&self) -> &str {
        &self.transaction_type
    }

    /// Opens a fresh form. Does nothing if the modal is already showing.
    pub fn open(&mut self) {
        if self.state == ModalState::Closed {
            self.reset();
            self.state = ModalState::Open;
        }
    }

    /// Dismisses the modal and discards its input. Ignored while submitting.
    pub fn close(&mut self) {
        if self.state == ModalState::Open {
            self.reset();
        }
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_price(&mut self, value: impl Into<String>) {
        self.price = value.into();
    }

    pub fn set_category(&mut self, value: impl Into<String>) {
        self.category = value.into();
    }

    pub fn set_transaction_type(&mut self, value: impl Into<String>) {
        self.transaction_type = value.into();
    }

    /// Parses the current input, collecting one error per bad field.
    pub fn validate(&self) -> Result<CreateTransactionInput, Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.description.trim().is_empty() {
            errors.push(ValidationError::Required(Field::Description));
        }

        let price = match Price::from_str(&self.price) {
            Ok(price) => Some(price),
            Err(error) => {
                errors.push(error.into());
                None
            }
        };

        if self.category.trim().is_empty() {
            errors.push(ValidationError::Required(Field::Category));
        }

        let transaction_type = match TransactionType::from_str(&self.transaction_type) {
            Ok(transaction_type) => Some(transaction_type),
            Err(error) => {
                errors.push(error.into());
                None
            }
        };

        match (price, transaction_type) {
            (Some(price), Some(transaction_type)) if errors.is_empty() => Ok(CreateTransactionInput {
                description: self.description.clone(),
                price,
                category: self.category.clone(),
                transaction_type
            }),
            _ => Err(errors)
        }
    }

    /// First half of a submission: validates and, on success, moves to
    /// `Submitting` and hands back the input to send.
    ///
    /// Returns `Ignored` unless the modal is open and idle.
    pub fn begin_submit(&mut self) -> Submission<CreateTransactionInput> {
        if self.state != ModalState::Open {
            return Submission::Ignored;
        }

        match self.validate() {
            Ok(input) => {
                self.errors.clear();
                self.submit_error = None;
                self.state = ModalState::Submitting;
                Submission::Completed(input)
            }
            Err(errors) => {
                debug!("New transaction form rejected {} field(s)", errors.len());
                self.errors = errors;
                Submission::Invalid
            }
        }
    }

    /// Second half of a submission: applies the store's answer.
    pub fn complete_submit(&mut self, result: &Result<Transaction, StoreError>) {
        if self.state != ModalState::Submitting {
            return;
        }

        match result {
            Ok(_) => self.reset(),
            Err(error) => {
                warn!("Creating transaction failed: {error}");
                self.submit_error = Some(error.to_string());
                self.state = ModalState::Open;
            }
        }
    }

    /// Validates, creates the transaction through the store and, once that
    /// resolves, clears and closes the form.
    ///
    /// # Errors
    /// Remote failures are returned after the form has reopened.
    pub async fn submit(&mut self, create: &CreateTransaction) -> Result<Submission<Transaction>, FormError> {
        let input = match self.begin_submit() {
            Submission::Completed(input) => input,
            Submission::Invalid => return Ok(Submission::Invalid),
            Submission::Ignored => return Ok(Submission::Ignored)
        };

        let result = create.call(input).await;
        self.complete_submit(&result);

        Ok(Submission::Completed(result?))
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
