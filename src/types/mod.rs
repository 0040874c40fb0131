mod errors;
mod price;

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

pub use errors::PriceError;
pub use price::Price;

/// Server-assigned transaction identity.
///
/// The remote API may hand back either numeric or textual ids, so the value is
/// kept opaque and only ever compared or displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    Number(u64),
    Text(String)
}

impl Display for TransactionId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransactionId::Number(id) => write!(formatter, "{id}"),
            TransactionId::Text(id) => write!(formatter, "{id}")
        }
    }
}
