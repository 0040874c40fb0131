//! Personal income/outcome tracking against a json-server style REST API.
//!
//! The [`store::TransactionsStore`] owns the session's transaction list and is
//! the only thing that changes it. Consumers read it through
//! [`store::Subscription`]s scoped to the part of the state they display, and
//! change it through the [`forms`].

pub mod api;
pub mod cli;
pub mod forms;
pub mod models;
pub mod store;
#[cfg(test)]
mod testing;
pub mod types;
pub mod views;
