use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API base address '{address}': {reason}")]
    InvalidBaseUrl {
        address: String,
        reason: String
    },
    #[error("Request to [{url}] failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error
    },
    #[error("Request to [{url}] returned status {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String
    },
    #[error("Response from [{url}] could not be decoded: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error
    }
}
