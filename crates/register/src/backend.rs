//! HTTP commit backend.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use rusty_money::iso::Currency;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use till::prelude::*;

use crate::{
    config::RegisterConfig,
    wire::{DecrementRequest, Decremented, ItemPayload, SaleCreated, SalePayload},
};

/// Failure of a single request to the back-office API.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport, timeout or body decoding failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("{method} {path} failed with status {status}: {body}")]
    UnexpectedResponse {
        /// Request method
        method: &'static str,
        /// Request path
        path: String,
        /// Response status
        status: StatusCode,
        /// Response body, as text
        body: String,
    },

    /// The API returned a price that cannot be held as money.
    #[error("item {item} has an invalid price {price}")]
    InvalidPrice {
        /// Offending item
        item: ItemId,
        /// Price as received
        price: f64,
    },

    /// The API returned an item whose price does not fit the register currency.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Back-office API client that implements [`SalesBackend`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: String,
    token: String,
    currency: &'static Currency,
}

impl HttpBackend {
    /// Creates a client for `base_url`, authenticating with `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        token: &str,
        currency: &'static Currency,
        timeout: Option<Duration>,
    ) -> Result<Self, BackendError> {
        let mut builder = Client::builder();

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            currency,
        })
    }

    /// Creates a client from register configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(
        config: &RegisterConfig,
        currency: &'static Currency,
    ) -> Result<Self, BackendError> {
        Self::new(&config.api_url, &config.api_token, currency, config.timeout())
    }

    /// Currency prices are converted into.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Fetches the whole catalog, in server order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or an item price cannot be represented.
    pub async fn fetch_items(&self) -> Result<Vec<Item>, BackendError> {
        let payloads: Vec<ItemPayload> = self
            .send("GET", "/items", self.http.get(self.url("/items")))
            .await?;

        payloads
            .into_iter()
            .map(|payload| {
                let (item, price) = (ItemId::new(payload.id), payload.price);

                payload
                    .into_item(self.currency)
                    .map_err(|source| match source {
                        PricingError::OutOfRange(_) | PricingError::Overflow => {
                            BackendError::InvalidPrice { item, price }
                        }
                        PricingError::CurrencyMismatch { .. } => BackendError::Pricing(source),
                    })
            })
            .collect()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, BackendError> {
        let response = request.bearer_auth(&self.token).send().await?;

        debug!(method, path, status = %response.status(), "api response");

        Ok(ensure_success(method, path, response).await?.json().await?)
    }
}

async fn ensure_success(
    method: &'static str,
    path: &str,
    response: Response,
) -> Result<Response, BackendError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    Err(BackendError::UnexpectedResponse {
        method,
        path: path.to_string(),
        status,
        body,
    })
}

impl SalesBackend for HttpBackend {
    type Error = BackendError;

    async fn record_sale(&self, draft: &SaleDraft) -> Result<SaleId, Self::Error> {
        let request = self
            .http
            .post(self.url("/sales"))
            .json(&SalePayload::from(draft));

        let created: SaleCreated = self.send("POST", "/sales", request).await?;

        Ok(SaleId::new(created.sale_id))
    }

    async fn decrement_stock(
        &self,
        item: ItemId,
        quantity: u32,
    ) -> Result<StockLevel, Self::Error> {
        let path = format!("/items/{item}/decrement");

        let request = self.http.put(self.url(&path)).json(&DecrementRequest {
            amount_to_decrement: quantity,
        });

        let decremented: Decremented = self.send("PUT", &path, request).await?;

        Ok(StockLevel {
            item,
            amount: decremented.data.amount,
        })
    }
}
