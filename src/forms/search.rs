use tracing::warn;

use crate::forms::{FormError, Submission};
use crate::store::{FetchTransactions, StoreError};

/// Free-text search over the transaction list.
///
/// Any query is accepted, including an empty one.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    query: String,
    submitting: bool,
    submit_error: Option<String>
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, value: impl Into<String>) {
        self.query = value.into();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Marks the form in flight and returns the query to fetch with.
    pub fn begin_submit(&mut self) -> Submission<String> {
        if self.submitting {
            return Submission::Ignored;
        }

        self.submitting = true;
        self.submit_error = None;
        Submission::Completed(self.query.clone())
    }

    pub fn complete_submit(&mut self, result: &Result<(), StoreError>) {
        self.submitting = false;

        if let Err(error) = result {
            warn!("Searching transactions failed: {error}");
            self.submit_error = Some(error.to_string());
        }
    }

    /// Refetches the list filtered by the current query, verbatim.
    pub async fn submit(&mut self, fetch: &FetchTransactions) -> Result<Submission<()>, FormError> {
        let Submission::Completed(query) = self.begin_submit() else {
            return Ok(Submission::Ignored);
        };

        let result = fetch.call(Some(query.as_str())).await;
        self.complete_submit(&result);
        result?;

        Ok(Submission::Completed(()))
    }
}
