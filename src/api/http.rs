use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::{ApiError, TransactionsApi};
use crate::models::{NewTransaction, Transaction};

const RESOURCE: &str = "transactions";

/// JSON REST client for a json-server style `transactions` resource.
pub struct HttpTransactionsApi {
    http_client: HttpClient,
    resource_url: Url
}

impl HttpTransactionsApi {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3333";

    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http_client: HttpClient::new(),
            resource_url: resource_url(base_url)?
        })
    }

    pub fn resource_url(&self) -> &Url {
        &self.resource_url
    }

    async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await
            .map_err(|source| ApiError::Transport { url: url.to_string(), source })?;

        if !status.is_success() {
            warn!("Request to [{url}] returned status {status}");
            return Err(ApiError::Status { url: url.to_string(), status: status.as_u16(), body });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode { url: url.to_string(), source })
    }
}

#[async_trait]
impl TransactionsApi for HttpTransactionsApi {
    async fn list(&self, query: Option<&str>) -> Result<Vec<Transaction>, ApiError> {
        let url = self.resource_url.as_str();
        debug!("GET [{url}] query={query:?}");

        let response = self.http_client
            .get(self.resource_url.clone())
            .query(&list_params(query))
            .send()
            .await
            .map_err(|source| ApiError::Transport { url: url.to_string(), source })?;

        Self::decode(url, response).await
    }

    async fn create(&self, transaction: &NewTransaction) -> Result<Transaction, ApiError> {
        let url = self.resource_url.as_str();
        debug!("POST [{url}] description={:?}", transaction.description);

        let response = self.http_client
            .post(self.resource_url.clone())
            .json(transaction)
            .send()
            .await
            .map_err(|source| ApiError::Transport { url: url.to_string(), source })?;

        Self::decode(url, response).await
    }
}

/// Builds `{base}/transactions`, tolerating a trailing slash on the base.
pub(crate) fn resource_url(base_url: &str) -> Result<Url, ApiError> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl { address: base_url.to_string(), reason };

    let mut base = Url::parse(base_url).map_err(|error| invalid(error.to_string()))?;

    if base.cannot_be_a_base() {
        return Err(invalid("address cannot be a base".to_string()));
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(RESOURCE).map_err(|error| invalid(error.to_string()))
}

/// Newest first, with the free-text filter only when one was given.
pub(crate) fn list_params(query: Option<&str>) -> Vec<(&'static str, &str)> {
    let mut params = vec![("_sort", "createdAt"), ("_order", "desc")];

    if let Some(query) = query {
        params.push(("q", query));
    }

    params
}
