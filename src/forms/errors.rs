use std::fmt;
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::models::UnknownTransactionType;
use crate::store::StoreError;
use crate::types::PriceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Description,
    Price,
    Category,
    Type
}

impl Display for Field {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Field::Description => "description",
            Field::Price => "price",
            Field::Category => "category",
            Field::Type => "type"
        })
    }
}

/// A field-level problem shown next to the offending input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(Field),
    #[error("{0}")]
    Price(PriceError),
    #[error("{0}")]
    Type(#[from] UnknownTransactionType)
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required(field) => *field,
            ValidationError::Price(_) => Field::Price,
            ValidationError::Type(_) => Field::Type
        }
    }
}

impl From<PriceError> for ValidationError {
    fn from(error: PriceError) -> Self {
        match error {
            PriceError::Empty => ValidationError::Required(Field::Price),
            other => ValidationError::Price(other)
        }
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Invalid input: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
    #[error(transparent)]
    Store(#[from] StoreError)
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
